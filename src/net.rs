//! Thin HTTP fetch layer shared by the review providers.
//!
//! Translates transport and status failures into the user-facing card
//! messages, so a provider outage degrades into text on one rating card
//! instead of failing the whole lookup.

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};

const MAX_RETRIES: usize = 3;

/// A failed provider fetch, categorized for message translation.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid request url: {0}")]
    InvalidUrl(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),

    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl FetchError {
    /// The message shown on the rating card when this fetch failed.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::InvalidUrl(_) => {
                "The inputs are invalid. Maybe remove the gibberish from your search term?"
                    .to_string()
            }
            FetchError::Transport(_) => {
                "Oops! A network error occurred on search.".to_string()
            }
            FetchError::Status(status) if status.is_client_error() => {
                "Oops! A network error occurred on search... Can you check if you're online?"
                    .to_string()
            }
            FetchError::Status(_) | FetchError::Malformed(_) => {
                "Oops! The site you are searching with is down... please try again later or use another site."
                    .to_string()
            }
        }
    }
}

/// GET `url`, optionally with an `Authorization` header, returning the
/// response body on 2xx.
///
/// Connect failures are retried with a short backoff before giving up;
/// everything else fails fast.
pub async fn load_url(
    client: &Client,
    url: &str,
    authentication: Option<&str>,
) -> Result<String, FetchError> {
    debug!("Loading URL: {}", url);

    let mut attempt = 0;
    loop {
        let mut request = client.get(url);
        if let Some(auth) = authentication.filter(|a| !a.trim().is_empty()) {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        match request.send().await {
            Ok(resp) => {
                let status = resp.status();
                if !status.is_success() {
                    warn!("Request to {} failed with status {}", url, status);
                    return Err(FetchError::Status(status));
                }
                return Ok(resp.text().await?);
            }
            Err(e) if e.is_builder() => {
                return Err(FetchError::InvalidUrl(url.to_string()));
            }
            Err(e) if e.is_connect() && attempt < MAX_RETRIES - 1 => {
                warn!(
                    "⚠️ Fetch retry {}/{} for '{}': {}",
                    attempt + 1,
                    MAX_RETRIES,
                    url,
                    e
                );
                tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                attempt += 1;
            }
            Err(e) => return Err(FetchError::Transport(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_message() {
        let err = FetchError::Status(StatusCode::UNAUTHORIZED);
        assert!(err.user_message().contains("online"));
    }

    #[test]
    fn test_server_error_message() {
        let err = FetchError::Status(StatusCode::BAD_GATEWAY);
        assert!(err.user_message().contains("down"));
    }

    #[test]
    fn test_invalid_url_message() {
        let err = FetchError::InvalidUrl("%%%".to_string());
        assert!(err.user_message().contains("invalid"));
    }
}
