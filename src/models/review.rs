// src/models/review.rs
use crate::error::InvalidReview;
use crate::models::sentiment::Sentiment;
use crate::validation;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ReviewId = i64;

/// An analyzed review as returned by the Review Service. Instances only
/// exist after passing the checks in `TryFrom<RawReview>`, so a value of
/// this type always has a known sentiment and a score within [0, 1].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "RawReview")]
pub struct Review {
    pub id: ReviewId,                   // Assigned by the service on creation
    pub product_name: String,           // Empty when the user left it blank
    pub review_text: String,
    pub sentiment: Sentiment,
    pub sentiment_score: f64,           // Confidence in `sentiment`
    pub key_points: String,             // Line breaks preserved verbatim
    pub created_at: DateTime<Utc>,
}

/// Review as it appears on the wire, before invariants are checked.
#[derive(Deserialize, Debug)]
pub struct RawReview {
    pub id: ReviewId,
    #[serde(default)]
    pub product_name: Option<String>,
    pub review_text: String,
    pub sentiment: Sentiment,
    pub sentiment_score: f64,
    #[serde(default)]
    pub key_points: Option<String>,
    pub created_at: String,
}

impl TryFrom<RawReview> for Review {
    type Error = InvalidReview;

    fn try_from(raw: RawReview) -> Result<Self, Self::Error> {
        if !raw.sentiment_score.is_finite() || !(0.0..=1.0).contains(&raw.sentiment_score) {
            return Err(InvalidReview::ScoreOutOfRange(raw.sentiment_score));
        }
        if !validation::can_submit(&raw.review_text) {
            return Err(InvalidReview::TextTooShort(raw.id));
        }
        let created_at = parse_timestamp(&raw.created_at)
            .ok_or_else(|| InvalidReview::Timestamp(raw.created_at.clone()))?;

        Ok(Review {
            id: raw.id,
            product_name: raw.product_name.unwrap_or_default(),
            review_text: raw.review_text,
            sentiment: raw.sentiment,
            sentiment_score: raw.sentiment_score,
            key_points: raw.key_points.unwrap_or_default(),
            created_at,
        })
    }
}

/// Accepts RFC 3339 timestamps and the offset-less ISO form the service
/// writes for UTC values.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Body of `POST /api/analyze-review`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeRequest {
    pub product_name: String,
    pub review_text: String,
}

impl AnalyzeRequest {
    pub fn new(product_name: &str, review_text: &str) -> Self {
        Self {
            product_name: product_name.trim().to_string(),
            review_text: review_text.to_string(),
        }
    }
}
