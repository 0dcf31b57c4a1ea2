use crate::model::NewsItem;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

pub const POWERED_BY: (&str, &str) = ("X-Powered-By", "AWS Lambda & serverless");

/// API Gateway proxy response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

#[derive(Debug, Serialize)]
struct NewsBody<'a> {
    message: &'a [NewsItem],
    input: &'a Value,
}

fn headers() -> HashMap<String, String> {
    let (name, value) = POWERED_BY;
    let mut map = HashMap::new();
    map.insert(name.to_string(), value.to_string());
    map
}

impl ApiGatewayResponse {
    pub fn ok(items: &[NewsItem], input: &Value) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_string(&NewsBody {
            message: items,
            input,
        })?;
        Ok(ApiGatewayResponse {
            status_code: 200,
            headers: headers(),
            body,
            is_base64_encoded: false,
        })
    }

    pub fn failure() -> Self {
        ApiGatewayResponse {
            status_code: 500,
            headers: headers(),
            body: "{}".to_string(),
            is_base64_encoded: false,
        }
    }
}
