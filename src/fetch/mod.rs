mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use tracing::debug;

use crate::error::{Result, TpspError};
use crate::model::ApiResponse;

/// Line-status endpoint queried on every invocation.
pub const API_URL: &str = "https://www.tictrens.com.br/helper/line-statuses";

/// Fetches and decodes the current line statuses.
///
/// # Errors
///
/// [`TpspError::Network`] if the request cannot complete,
/// [`TpspError::Status`] on a non-200 response, and [`TpspError::Parse`] if
/// the body is not valid JSON for [`ApiResponse`].
pub async fn fetch_line_statuses<C: HttpClient>(client: &C, url: &str) -> Result<ApiResponse> {
    debug!(url, "fetching line statuses");

    let resp = client.get(url).await?;

    let status = resp.status();
    if status != reqwest::StatusCode::OK {
        return Err(TpspError::Status(status.as_u16()));
    }

    let body = resp.text().await?;
    let api_resp: ApiResponse = serde_json::from_str(&body)?;

    debug!(batches = api_resp.data.len(), "line statuses decoded");
    Ok(api_resp)
}
