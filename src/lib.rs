pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod response;
pub mod util;

use client::Fetcher;
use error::NewsError;
use model::NewsItem;
use response::ApiGatewayResponse;
use serde_json::Value;
use simple_error::SimpleResult;

/// Fetch the feed and parse it. Nothing is parsed if the fetch fails.
pub fn fetch_news(fetcher: &impl Fetcher) -> Result<Vec<NewsItem>, NewsError> {
    let body = fetcher.fetch()?;
    let items = parser::parse_items(&body)?;
    Ok(items)
}

/// One invocation: any fetch or parse failure becomes the 500 envelope.
/// Only a failure to serialize the success body is returned as an error.
pub fn handle_request(fetcher: &impl Fetcher, input: Value) -> SimpleResult<ApiGatewayResponse> {
    log::info!("received: {}", input);
    match fetch_news(fetcher) {
        Ok(items) => {
            log::info!("returning {} news items", items.len());
            ApiGatewayResponse::ok(&items, &input).map_err(util::to_simple)
        }
        Err(e) => {
            log::error!("news fetch failed: {}", e);
            Ok(ApiGatewayResponse::failure())
        }
    }
}
