// pinr-net/src/http.rs
use pinr_common::config::Config;
use pinr_common::error::{PinrError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;

const USER_AGENT_STRING: &str = "pinr version resolver (Rust; +https://github.com/alexykn/pinr)";

/// Builds the shared client used for every metadata lookup, with the
/// request and connect timeouts taken from `config`.
pub fn build_http_client(config: &Config) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_STRING));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Client::builder()
        .timeout(config.request_timeout)
        .connect_timeout(config.connect_timeout)
        .default_headers(headers)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| PinrError::Config(format!("Failed to build HTTP client: {e}")))
}
