use crate::shared::api_utils::api_url;
use contracts::dashboards::d400_booking_summary::{BookingSummaryResponse, DateRange};
use gloo_net::http::Request;
use thiserror::Error;

const API_PATH: &str = "/v1/booking/summary";

/// Failure classes of a summary fetch. All are handled the same way by the
/// dashboard (previous summary retained, transient notification), but each
/// carries its own message.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure, e.g. unreachable endpoint.
    #[error("Request failed: {0}")]
    Network(String),
    /// Non-2xx HTTP status; no per-code handling.
    #[error("HTTP error: {0}")]
    Server(u16),
    /// Response body was not the expected JSON shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Fetch the booking summary, optionally narrowed to a date window.
///
/// `start_date`/`end_date` query parameters are appended only when a range is
/// present; without one the server applies its own default window.
pub async fn get_booking_summary(
    range: Option<&DateRange>,
) -> Result<BookingSummaryResponse, FetchError> {
    let mut url = api_url(API_PATH);
    if let Some(range) = range {
        url.push_str(&format!(
            "?start_date={}&end_date={}",
            range.start_param(),
            range.end_param()
        ));
    }

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Server(response.status()));
    }

    response
        .json::<BookingSummaryResponse>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}
