// src/models/sentiment.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tone assigned to a review by the Analysis Service.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Display attributes for a sentiment badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentimentStyle {
    pub label: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    /// Every variant is listed here without a wildcard arm, so adding a
    /// sentiment fails to compile until it gets its own badge.
    pub fn style(&self) -> SentimentStyle {
        match self {
            Sentiment::Positive => SentimentStyle {
                label: "POSITIVE",
                color: "#10b981",
                icon: "😊",
            },
            Sentiment::Negative => SentimentStyle {
                label: "NEGATIVE",
                color: "#ef4444",
                icon: "😞",
            },
            Sentiment::Neutral => SentimentStyle {
                label: "NEUTRAL",
                color: "#6b7280",
                icon: "😐",
            },
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter key for the history list.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Positive,
    Negative,
    Neutral,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::All,
        Category::Positive,
        Category::Negative,
        Category::Neutral,
    ];

    pub fn matches(&self, sentiment: Sentiment) -> bool {
        match self {
            Category::All => true,
            Category::Positive => sentiment == Sentiment::Positive,
            Category::Negative => sentiment == Sentiment::Negative,
            Category::Neutral => sentiment == Sentiment::Neutral,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Positive => "Positive",
            Category::Negative => "Negative",
            Category::Neutral => "Neutral",
        }
    }
}

impl From<Sentiment> for Category {
    fn from(sentiment: Sentiment) -> Self {
        match sentiment {
            Sentiment::Positive => Category::Positive,
            Sentiment::Negative => Category::Negative,
            Sentiment::Neutral => Category::Neutral,
        }
    }
}
