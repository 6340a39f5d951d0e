//! AWS Lambda handler for running forecasts
//!
//! Accepts a forecast request as the JSON body of a Lambda Function URL call and
//! returns the monthly/annual forecast with break-even month.

use aws_lambda_events::event::lambda_function_urls::{
    LambdaFunctionUrlRequest, LambdaFunctionUrlResponse,
};
use aws_lambda_events::http::{HeaderMap, HeaderValue};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use revenue_forecast::{ForecastRequest, ForecastResult};
use serde::Serialize;

/// Output from the forecast
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    #[serde(flatten)]
    pub result: ForecastResult,
    pub execution_time_ms: u64,
}

fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
    headers.insert("Access-Control-Allow-Methods", HeaderValue::from_static("POST, OPTIONS"));
    headers.insert("Access-Control-Allow-Headers", HeaderValue::from_static("Content-Type"));
    headers
}

fn response(status_code: i64, body: Option<String>) -> LambdaFunctionUrlResponse {
    let mut headers = cors_headers();
    if body.is_some() {
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
    }
    LambdaFunctionUrlResponse {
        status_code,
        headers,
        body,
        is_base64_encoded: false,
        cookies: Vec::new(),
    }
}

fn error_response(status_code: i64, message: &str) -> LambdaFunctionUrlResponse {
    let body = serde_json::json!({ "error": message }).to_string();
    response(status_code, Some(body))
}

/// Lambda handler function
async fn handler(
    event: LambdaEvent<LambdaFunctionUrlRequest>,
) -> Result<LambdaFunctionUrlResponse, Error> {
    let start = std::time::Instant::now();
    let request = event.payload;

    // Handle CORS preflight
    if request.request_context.http.method.as_deref() == Some("OPTIONS") {
        return Ok(response(200, None));
    }

    if request.is_base64_encoded {
        return Ok(error_response(400, "Base64-encoded bodies are not supported"));
    }

    let body = request.body.unwrap_or_else(|| "{}".to_string());
    let forecast_request: ForecastRequest = match serde_json::from_str(&body) {
        Ok(r) => r,
        Err(e) => return Ok(error_response(400, &format!("Invalid JSON: {}", e))),
    };

    let result = match forecast_request.run() {
        Ok(result) => result,
        Err(e) => {
            log::warn!("Rejected forecast request: {}", e);
            return Ok(error_response(400, &e.to_string()));
        }
    };

    let payload = ForecastResponse {
        result,
        execution_time_ms: start.elapsed().as_millis() as u64,
    };
    Ok(response(200, Some(serde_json::to_string(&payload)?)))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
