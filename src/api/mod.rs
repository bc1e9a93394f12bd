//! HTTP surface: an axum router over the conversion pipeline.
//!
//! # Endpoints
//!
//! - `POST /convert` — JSON `{ "url": …, "options": { "markdown_type",
//!   "timeout" } }`; returns the uniform envelope
//!   `{ success, markdown?, error?, metadata?, stats?, processed_at }`
//! - `GET /convert?url=…&markdown_type=…&timeout=…` — convenience variant
//! - `GET /` and `GET /health` — health envelope with the engine name
//!
//! # Embedding the router
//!
//! ```no_run
//! use std::sync::Arc;
//! use url2md::{api, ConversionConfig, HtmlEngine};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), url2md::Url2mdError> {
//!     api::serve("127.0.0.1:8000", Arc::new(HtmlEngine::new()), ConversionConfig::default()).await
//! }
//! ```
//!
//! # cURL examples
//!
//! ```bash
//! curl http://localhost:8000/health
//!
//! curl -X POST http://localhost:8000/convert \
//!      -H 'Content-Type: application/json' \
//!      -d '{"url": "https://example.com", "options": {"markdown_type": "simple"}}'
//!
//! curl 'http://localhost:8000/convert?url=https://example.com'
//! ```

mod handlers;
mod server;
mod types;

pub use server::{create_router, serve, ApiState};
pub use types::{ConvertOptions, ConvertQuery, ConvertRequest, ConvertResponse, HealthResponse};
