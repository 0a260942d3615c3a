// pinr-net/src/validation.rs
use pinr_common::error::{PinrError, Result};
use url::Url;

/// Validates the metadata endpoint URL. Internal repository managers are
/// commonly served over plain http, so both http and https are accepted.
/// The endpoint must not carry its own query string: the resolver owns it.
pub fn validate_url(url_str: &str) -> Result<Url> {
    let url = Url::parse(url_str)
        .map_err(|e| PinrError::Validation(format!("Failed to parse URL '{url_str}': {e}")))?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(PinrError::Validation(format!(
                "Invalid URL scheme for '{url_str}': Must be http or https, but got '{other}'"
            )))
        }
    }
    if url.query().is_some() {
        return Err(PinrError::Validation(format!(
            "Metadata URL '{url_str}' must not contain a query string"
        )));
    }
    Ok(url)
}
