use viewer_core::FetchFailure;

/// Failure of one backend request, as seen by the fetch pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Maps the transport-layer error into the core's failure taxonomy.
    pub fn to_failure(&self) -> FetchFailure {
        match self {
            ApiError::Network(message) => FetchFailure::Network(message.clone()),
            ApiError::Status(code) => FetchFailure::Status(*code),
            ApiError::Decode(message) => FetchFailure::Decode(message.clone()),
        }
    }
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_decode() {
        return ApiError::Decode(err.to_string());
    }
    ApiError::Network(err.to_string())
}
