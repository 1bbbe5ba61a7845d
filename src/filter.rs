use crate::models::review::Review;
use crate::models::sentiment::{Category, Sentiment};

/// Reviews matching `category`, in their original order.
pub fn visible(reviews: &[Review], category: Category) -> Vec<Review> {
    reviews
        .iter()
        .filter(|review| category.matches(review.sentiment))
        .cloned()
        .collect()
}

/// Number of reviews per filter tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SentimentCounts {
    pub all: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentCounts {
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::All => self.all,
            Category::Positive => self.positive,
            Category::Negative => self.negative,
            Category::Neutral => self.neutral,
        }
    }
}

pub fn counts(reviews: &[Review]) -> SentimentCounts {
    reviews.iter().fold(
        SentimentCounts {
            all: reviews.len(),
            ..SentimentCounts::default()
        },
        |mut counts, review| {
            match review.sentiment {
                Sentiment::Positive => counts.positive += 1,
                Sentiment::Negative => counts.negative += 1,
                Sentiment::Neutral => counts.neutral += 1,
            }
            counts
        },
    )
}

/// Text shown when the selected tab has nothing to list.
pub fn empty_message(category: Category) -> &'static str {
    match category {
        Category::All => "No reviews yet. Submit one above to get started.",
        Category::Positive => "No positive reviews yet.",
        Category::Negative => "No negative reviews yet.",
        Category::Neutral => "No neutral reviews yet.",
    }
}
