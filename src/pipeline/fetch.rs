//! HTTP fetch: download the document and capture response metadata.
//!
//! The fetch is the only stage with network I/O. Response headers the
//! metadata envelope cares about (content type, length, last-modified,
//! server) are captured before the body is consumed, so they survive even
//! when the body itself is discarded later in the pipeline.

use crate::config::ConversionConfig;
use crate::error::Url2mdError;
use crate::output::FetchMetadata;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// A downloaded document plus the response facts captured around it.
pub struct FetchedResource {
    /// Raw response body.
    pub bytes: Vec<u8>,
    /// Headers and status captured before the body was read.
    pub metadata: FetchMetadata,
    /// When the fetch completed.
    pub fetched_at: DateTime<Utc>,
}

/// Check if the input string looks like a URL this crate will fetch.
pub fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Download `url`, enforcing the configured timeout.
///
/// Non-2xx responses, connection failures, and timeouts each surface as a
/// distinct [`Url2mdError`] kind so the HTTP layer can map them to
/// different status codes.
pub async fn fetch_url(
    url: &str,
    config: &ConversionConfig,
) -> Result<FetchedResource, Url2mdError> {
    if !is_url(url) {
        return Err(Url2mdError::InvalidUrl {
            url: url.to_string(),
        });
    }

    info!("Fetching: {}", url);

    let timeout_secs = config.fetch_timeout_secs;
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(|e| Url2mdError::ConnectionFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            Url2mdError::FetchTimeout {
                url: url.to_string(),
                secs: timeout_secs,
            }
        } else {
            Url2mdError::ConnectionFailed {
                url: url.to_string(),
                reason: e.to_string(),
            }
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(Url2mdError::UpstreamStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    // Capture headers before consuming the body.
    let metadata = FetchMetadata {
        status_code: status.as_u16(),
        content_type: header_string(&response, reqwest::header::CONTENT_TYPE),
        content_length: header_string(&response, reqwest::header::CONTENT_LENGTH)
            .and_then(|v| v.parse().ok()),
        last_modified: header_string(&response, reqwest::header::LAST_MODIFIED),
        server: header_string(&response, reqwest::header::SERVER),
    };

    let bytes = response.bytes().await.map_err(|e| {
        if e.is_timeout() {
            Url2mdError::FetchTimeout {
                url: url.to_string(),
                secs: timeout_secs,
            }
        } else {
            Url2mdError::ConnectionFailed {
                url: url.to_string(),
                reason: e.to_string(),
            }
        }
    })?;

    debug!("Fetched {} bytes (HTTP {})", bytes.len(), metadata.status_code);

    Ok(FetchedResource {
        bytes: bytes.to_vec(),
        metadata,
        fetched_at: Utc::now(),
    })
}

fn header_string(response: &reqwest::Response, name: reqwest::header::HeaderName) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}
