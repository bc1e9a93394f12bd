//! Route handlers: thin adapters from HTTP to [`crate::convert`].
//!
//! Every collaborator failure is converted into the uniform
//! [`ConvertResponse`] envelope with `success: false`; only the status code
//! varies by failure kind. Handlers never panic on bad input and never leak
//! anything beyond the error's display message.

use crate::api::server::ApiState;
use crate::api::types::{ConvertOptions, ConvertQuery, ConvertRequest, ConvertResponse, HealthResponse};
use crate::convert::convert;
use crate::error::Url2mdError;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use tracing::{info, warn};

/// `GET /` and `GET /health`.
pub async fn health(State(state): State<ApiState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
        engine: state.engine.name().to_string(),
    })
}

/// `POST /convert` with a JSON body.
pub async fn convert_post(
    State(state): State<ApiState>,
    Json(request): Json<ConvertRequest>,
) -> (StatusCode, Json<ConvertResponse>) {
    run_convert(state, request.url, request.options).await
}

/// `GET /convert?url=…` — convenience variant for quick tests.
pub async fn convert_get(
    State(state): State<ApiState>,
    Query(query): Query<ConvertQuery>,
) -> (StatusCode, Json<ConvertResponse>) {
    let (url, options) = query.into_parts();
    run_convert(state, url, options).await
}

async fn run_convert(
    state: ApiState,
    url: String,
    options: ConvertOptions,
) -> (StatusCode, Json<ConvertResponse>) {
    let config = match state
        .config
        .with_overrides(options.markdown_type, options.timeout)
    {
        Ok(c) => c,
        Err(e) => return (StatusCode::BAD_REQUEST, Json(ConvertResponse::failed(e.to_string()))),
    };

    info!("Convert request: {} ({} mode)", url, config.markdown_mode);

    match convert(&url, &state.engine, &config).await {
        Ok(output) => (StatusCode::OK, Json(ConvertResponse::ok(output))),
        Err(e) => {
            warn!("Conversion failed for {}: {}", url, e);
            (status_for(&e), Json(ConvertResponse::failed(e.to_string())))
        }
    }
}

/// Map a failure kind to the response status.
fn status_for(err: &Url2mdError) -> StatusCode {
    match err {
        Url2mdError::InvalidUrl { .. }
        | Url2mdError::ConnectionFailed { .. }
        | Url2mdError::UpstreamStatus { .. }
        | Url2mdError::InvalidConfig(_) => StatusCode::BAD_REQUEST,
        Url2mdError::FetchTimeout { .. } => StatusCode::REQUEST_TIMEOUT,
        Url2mdError::UnsupportedFormat { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        Url2mdError::StagingFailed { .. }
        | Url2mdError::EngineFailed { .. }
        | Url2mdError::BindFailed { .. }
        | Url2mdError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            status_for(&Url2mdError::InvalidUrl { url: "x".into() }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&Url2mdError::FetchTimeout {
                url: "x".into(),
                secs: 1
            }),
            StatusCode::REQUEST_TIMEOUT
        );
        assert_eq!(
            status_for(&Url2mdError::UnsupportedFormat {
                engine: "html".into(),
                extension: ".pdf"
            }),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            status_for(&Url2mdError::Internal("x".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
