use crate::config::ClientConfig;
use crate::error::ServiceError;
use crate::models::review::{AnalyzeRequest, Review};
use futures::future::{self, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use leptos::logging::{log, warn};
use serde::Deserialize;
use std::collections::HashSet;
use std::rc::Rc;

/// The Analysis Service: classifies a review and stores it.
#[allow(async_fn_in_trait)]
pub trait AnalysisService {
    async fn analyze_review(&self, request: &AnalyzeRequest) -> Result<Review, ServiceError>;
}

/// The Review Service: lists previously analyzed reviews.
#[allow(async_fn_in_trait)]
pub trait ReviewSource {
    async fn fetch_reviews(&self) -> Result<Vec<Review>, ServiceError>;
}

impl<T: AnalysisService> AnalysisService for Rc<T> {
    async fn analyze_review(&self, request: &AnalyzeRequest) -> Result<Review, ServiceError> {
        (**self).analyze_review(request).await
    }
}

impl<T: ReviewSource> ReviewSource for Rc<T> {
    async fn fetch_reviews(&self) -> Result<Vec<Review>, ServiceError> {
        (**self).fetch_reviews().await
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Pulls the human-readable reason out of an error response, if any.
pub fn decode_error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .error
        .or(parsed.message)
        .filter(|message| !message.trim().is_empty())
}

/// Passes a 2xx body through; any other status becomes `Rejected`, carrying
/// the server's reason when the body has one.
pub fn check_status(status: u16, body: String) -> Result<String, ServiceError> {
    if (200..300).contains(&status) {
        return Ok(body);
    }
    Err(ServiceError::Rejected {
        status,
        message: decode_error_message(&body),
    })
}

pub fn decode_review(body: &str) -> Result<Review, ServiceError> {
    serde_json::from_str(body).map_err(|e| ServiceError::Decode(e.to_string()))
}

/// Decodes a review list. Entries that fail the data-model checks, and
/// repeated ids, are dropped rather than failing the whole list.
pub fn decode_review_list(body: &str) -> Result<Vec<Review>, ServiceError> {
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| ServiceError::Decode(e.to_string()))?;

    let mut seen = HashSet::new();
    let mut reviews = Vec::with_capacity(entries.len());
    for entry in entries {
        match serde_json::from_value::<Review>(entry) {
            Ok(review) if seen.insert(review.id) => reviews.push(review),
            Ok(review) => warn!("[API] Dropping duplicate review id {}", review.id),
            Err(err) => warn!("[API] Dropping malformed review: {}", err),
        }
    }
    Ok(reviews)
}

/// Talks to both collaborator services over HTTP with gloo-net.
#[derive(Debug, Clone, Default)]
pub struct HttpReviewService {
    config: ClientConfig,
}

impl HttpReviewService {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn send(&self, request: Request) -> Result<Response, ServiceError> {
        let pending = request.send();
        let Some(timeout) = self.config.request_timeout else {
            return pending.await.map_err(|e| ServiceError::Network(e.to_string()));
        };

        let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
        let timer = TimeoutFuture::new(millis);
        futures::pin_mut!(pending, timer);
        match future::select(pending, timer).await {
            Either::Left((result, _)) => result.map_err(|e| ServiceError::Network(e.to_string())),
            Either::Right(((), _)) => Err(ServiceError::Timeout(millis)),
        }
    }

    async fn read_body(response: Response) -> Result<String, ServiceError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;
        check_status(status, body)
    }
}

impl AnalysisService for HttpReviewService {
    async fn analyze_review(&self, request: &AnalyzeRequest) -> Result<Review, ServiceError> {
        let url = self.config.analyze_url();
        log!("[API] POST {} (product: {:?})", url, request.product_name);

        let http_request = Request::post(&url)
            .json(request)
            .map_err(|e| ServiceError::Network(e.to_string()))?;
        let response = self.send(http_request).await?;
        let body = Self::read_body(response).await?;
        decode_review(&body)
    }
}

impl ReviewSource for HttpReviewService {
    async fn fetch_reviews(&self) -> Result<Vec<Review>, ServiceError> {
        let url = self.config.reviews_url();
        log!("[API] GET {}", url);

        let http_request = Request::get(&url)
            .build()
            .map_err(|e| ServiceError::Network(e.to_string()))?;
        let response = self.send(http_request).await?;
        let body = Self::read_body(response).await?;
        let reviews = decode_review_list(&body)?;
        log!("[API] Received {} reviews", reviews.len());
        Ok(reviews)
    }
}
