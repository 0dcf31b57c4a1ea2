use daily_news::{
    client::Client, config::Config, handle_request, response::ApiGatewayResponse, util,
};
use lambda_runtime::{handler_fn, Context, Error};
use serde_json::Value;
use simple_error::SimpleResult;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cfg = Config::from_env()?;
    let _logger = util::init_log(&cfg.log_spec)?;
    log::info!("serving news from {}", cfg.feed_url);

    let client = Client::new(&cfg);
    lambda_runtime::run(handler_fn(move |input: Value, ctx: Context| {
        let client = client.clone();
        async move { daily_news(client, input, ctx).await }
    }))
    .await?;
    Ok(())
}

async fn daily_news(
    client: Client,
    input: Value,
    ctx: Context,
) -> SimpleResult<ApiGatewayResponse> {
    log::debug!("request {}", ctx.request_id);
    // ureq blocks
    tokio::task::spawn_blocking(move || handle_request(&client, input))
        .await
        .map_err(util::to_simple)?
}
