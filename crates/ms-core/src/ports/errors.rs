use thiserror::Error;

/// Failure taxonomy for catalog requests.
///
/// Every variant is terminal for the current fetch attempt; nothing is
/// retried automatically. Controllers collapse this to a short human
/// message via [`CatalogError::user_message`] and expose an explicit retry
/// affordance instead of propagating.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("no network connection")]
    NoConnection,

    #[error("transport error: {0}")]
    TransportError(String),

    #[error("invalid request")]
    InvalidRequest,

    #[error("forbidden")]
    Forbidden,

    #[error("resource not found")]
    NotFound,

    #[error("too many requests")]
    TooManyRequests,

    #[error("internal server error")]
    InternalServerError,

    #[error("decoding error: {0}")]
    DecodingError(String),

    #[error("unknown error")]
    UnknownError,
}

impl CatalogError {
    /// Short message suitable for direct display.
    ///
    /// Most kinds collapse to a generic message; `NotFound` and decoding
    /// failures keep enough detail to be actionable.
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::NotFound => "The requested resource was not found.".to_string(),
            CatalogError::DecodingError(detail) => detail.clone(),
            _ => "Something went wrong. Please try again later.".to_string(),
        }
    }
}

/// Failure taxonomy for thumbnail loads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageLoadError {
    #[error("image fetch failed: {0}")]
    Fetch(String),

    #[error("image decode failed: {0}")]
    Decode(String),

    /// The load was cancelled before a result arrived (view recycled).
    #[error("image load cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_keeps_a_specific_message() {
        assert_eq!(
            CatalogError::NotFound.user_message(),
            "The requested resource was not found."
        );
    }

    #[test]
    fn decoding_error_surfaces_the_detail() {
        let err = CatalogError::DecodingError("missing field `results`".into());
        assert_eq!(err.user_message(), "missing field `results`");
    }

    #[test]
    fn other_kinds_collapse_to_a_generic_message() {
        for err in [
            CatalogError::NoConnection,
            CatalogError::TransportError("reset".into()),
            CatalogError::InvalidRequest,
            CatalogError::Forbidden,
            CatalogError::TooManyRequests,
            CatalogError::InternalServerError,
            CatalogError::UnknownError,
        ] {
            assert_eq!(
                err.user_message(),
                "Something went wrong. Please try again later."
            );
        }
    }
}
