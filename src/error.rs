use crate::models::review::ReviewId;
use thiserror::Error;

/// Message shown when the Analysis Service gives no usable reason.
pub const ANALYSIS_FALLBACK_MESSAGE: &str = "Analysis failed. Please try again.";

/// Message shown for any history load failure.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch reviews";

/// Input rejected before any network call is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Review must be at least {min} characters long")]
    TooShort { min: usize, actual: usize },
}

/// Failure talking to one of the collaborator services.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {0} ms")]
    Timeout(u32),

    #[error("service responded with status {status}")]
    Rejected { status: u16, message: Option<String> },

    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Wire review that violates the data model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidReview {
    #[error("sentiment_score {0} is outside [0, 1]")]
    ScoreOutOfRange(f64),

    #[error("review {0} has fewer than the minimum number of characters")]
    TextTooShort(ReviewId),

    #[error("unreadable created_at timestamp {0:?}")]
    Timestamp(String),
}

/// Submission failure surfaced to the user as a dismissable banner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AnalysisError {
    message: String,
}

impl AnalysisError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn fallback() -> Self {
        Self::new(ANALYSIS_FALLBACK_MESSAGE)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ServiceError> for AnalysisError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Rejected { message: Some(message), .. } if !message.trim().is_empty() => {
                Self::new(message)
            }
            _ => Self::fallback(),
        }
    }
}

/// History load failure. Retry is always left to the user.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Failed to fetch reviews: {source}")]
pub struct FetchError {
    #[source]
    source: ServiceError,
}

impl FetchError {
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }

    pub fn cause(&self) -> &ServiceError {
        &self.source
    }
}

impl From<ServiceError> for FetchError {
    fn from(source: ServiceError) -> Self {
        Self { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_error_prefers_service_message() {
        let err = AnalysisError::from(ServiceError::Rejected {
            status: 400,
            message: Some("review_text is required".into()),
        });
        assert_eq!(err.message(), "review_text is required");
    }

    #[test]
    fn test_analysis_error_falls_back() {
        let cases = vec![
            ServiceError::Network("connection refused".into()),
            ServiceError::Timeout(5_000),
            ServiceError::Decode("expected value".into()),
            ServiceError::Rejected { status: 500, message: None },
            ServiceError::Rejected { status: 502, message: Some("  ".into()) },
        ];
        for case in cases {
            assert_eq!(AnalysisError::from(case).message(), ANALYSIS_FALLBACK_MESSAGE);
        }
    }

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::from(ServiceError::Rejected { status: 503, message: None });
        assert_eq!(err.user_message(), "Failed to fetch reviews");
        assert_eq!(err.to_string(), "Failed to fetch reviews: service responded with status 503");
    }
}
