use crate::api::AnalysisService;
use crate::error::AnalysisError;
use crate::models::review::{AnalyzeRequest, Review};
use leptos::logging::{error, log};

/// Sends one review to the Analysis Service and turns the outcome into
/// something the form can show. Never retries on its own.
pub struct AnalysisClient<S> {
    service: S,
}

impl<S: AnalysisService> AnalysisClient<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// `review_text` is expected to have passed validation already.
    pub async fn analyze(&self, product_name: &str, review_text: &str) -> Result<Review, AnalysisError> {
        let request = AnalyzeRequest::new(product_name, review_text);
        log!("[ANALYZE] Submitting review ({} chars)", request.review_text.chars().count());

        match self.service.analyze_review(&request).await {
            Ok(review) => {
                log!(
                    "[ANALYZE] Review {} classified {} ({:.2})",
                    review.id,
                    review.sentiment,
                    review.sentiment_score
                );
                Ok(review)
            }
            Err(err) => {
                error!("[ANALYZE] Analysis failed: {}", err);
                Err(AnalysisError::from(err))
            }
        }
    }
}
