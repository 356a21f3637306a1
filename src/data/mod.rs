pub mod comment;
pub mod geocode;
pub mod weather;

use thiserror::Error;

/// Failure of a single upstream call.
///
/// Every variant is caught at the orchestrator boundary and converted to a
/// placeholder outcome; none propagates further. One attempt per call, no
/// retry.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("service returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("could not decode response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("response was missing required fields")]
    Incomplete,
}
