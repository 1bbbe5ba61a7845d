use chrono::{TimeZone, Utc};
use review_analyzer::api::{AnalysisService, ReviewSource};
use review_analyzer::error::ServiceError;
use review_analyzer::models::review::{AnalyzeRequest, Review};
use review_analyzer::models::sentiment::Sentiment;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// In-memory stand-in for both collaborator services.
/// Successful analyses are stored newest-first, as the real service lists them.
#[derive(Default)]
pub struct MockReviewService {
    pub stored: RefCell<Vec<Review>>,
    pub analysis_replies: RefCell<VecDeque<Result<Review, ServiceError>>>,
    pub requests: RefCell<Vec<AnalyzeRequest>>,
    pub analyze_calls: Cell<usize>,
    pub fetch_calls: Cell<usize>,
    pub fetch_failure: RefCell<Option<ServiceError>>,
}

impl MockReviewService {
    pub fn with_reviews(reviews: Vec<Review>) -> Self {
        let service = Self::default();
        *service.stored.borrow_mut() = reviews;
        service
    }

    pub fn queue_analysis(&self, reply: Result<Review, ServiceError>) {
        self.analysis_replies.borrow_mut().push_back(reply);
    }

    pub fn fail_next_fetch(&self, err: ServiceError) {
        *self.fetch_failure.borrow_mut() = Some(err);
    }
}

impl AnalysisService for MockReviewService {
    async fn analyze_review(&self, request: &AnalyzeRequest) -> Result<Review, ServiceError> {
        self.analyze_calls.set(self.analyze_calls.get() + 1);
        self.requests.borrow_mut().push(request.clone());
        let reply = self
            .analysis_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ServiceError::Network("no reply queued".into())));
        if let Ok(review) = &reply {
            self.stored.borrow_mut().insert(0, review.clone());
        }
        reply
    }
}

impl ReviewSource for MockReviewService {
    async fn fetch_reviews(&self) -> Result<Vec<Review>, ServiceError> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);
        if let Some(err) = self.fetch_failure.borrow_mut().take() {
            return Err(err);
        }
        Ok(self.stored.borrow().clone())
    }
}

pub fn mug_review() -> Review {
    Review {
        id: 1,
        product_name: "Mug".into(),
        review_text: "Great quality and fast shipping!".into(),
        sentiment: Sentiment::Positive,
        sentiment_score: 0.92,
        key_points: "Durable; fast delivery".into(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
    }
}

pub fn review(id: i64, sentiment: Sentiment) -> Review {
    Review {
        id,
        product_name: format!("Product {}", id),
        review_text: "Arrived on time and works fine.".into(),
        sentiment,
        sentiment_score: 0.8,
        key_points: String::new(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
    }
}
