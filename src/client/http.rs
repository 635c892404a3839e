use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

use crate::config::Config;
use crate::error::BridgeResult;

const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the outbound client used for every Jira call of one request.
pub fn create_http_client(config: &Config) -> BridgeResult<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .timeout(config.request_timeout())
        .connect_timeout(config.request_timeout())
        .pool_idle_timeout(POOL_IDLE_TIMEOUT)
        .build()?;

    Ok(client)
}
