use thiserror::Error;

/// Errors that can occur when calling an external content provider
///
/// The adapters are structurally parallel, so they share one error type.
/// None of these variants ever reach the caller: the aggregator absorbs
/// them as an empty result list for the failing provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Missing credentials")]
    MissingCredentials,
}
