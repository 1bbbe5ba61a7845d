use crate::error::ValidationError;

/// Minimum number of characters a review needs after trimming.
pub const MIN_REVIEW_CHARS: usize = 10;

/// Whether `text` may be submitted for analysis.
pub fn can_submit(text: &str) -> bool {
    trimmed_len(text) >= MIN_REVIEW_CHARS
}

pub fn validate(text: &str) -> Result<(), ValidationError> {
    let actual = trimmed_len(text);
    if actual < MIN_REVIEW_CHARS {
        return Err(ValidationError::TooShort {
            min: MIN_REVIEW_CHARS,
            actual,
        });
    }
    Ok(())
}

fn trimmed_len(text: &str) -> usize {
    text.trim().chars().count()
}
