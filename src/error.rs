use thiserror::Error;

/// Failure modes of a single remote time fetch.
///
/// Both variants take the same fallback path in the resolver; the split
/// exists so logs can tell an unreachable service apart from one that
/// answers with garbage.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network error, timeout, or non-2xx status from the time service
    #[error("time service unavailable: {0}")]
    RemoteUnavailable(String),

    /// Response body that could not be decoded or lacked a usable datetime
    #[error("time service returned a malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::MalformedResponse(err.to_string())
        } else {
            FetchError::RemoteUnavailable(err.to_string())
        }
    }
}

impl From<chrono::ParseError> for FetchError {
    fn from(err: chrono::ParseError) -> Self {
        FetchError::MalformedResponse(err.to_string())
    }
}
