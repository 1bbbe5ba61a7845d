use crate::models::review::Review;
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use leptos::logging::{log, warn};

/// Raised once per successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewAnalyzed {
    pub review: Review,
}

/// Sending half held by the submission controller.
#[derive(Debug, Clone)]
pub struct ReviewEventSender {
    tx: UnboundedSender<ReviewAnalyzed>,
}

pub type ReviewEventReceiver = UnboundedReceiver<ReviewAnalyzed>;

pub fn review_events() -> (ReviewEventSender, ReviewEventReceiver) {
    let (tx, rx) = mpsc::unbounded();
    (ReviewEventSender { tx }, rx)
}

impl ReviewEventSender {
    /// Returns false when nobody is listening any more.
    pub fn emit(&self, review: Review) -> bool {
        let id = review.id;
        match self.tx.unbounded_send(ReviewAnalyzed { review }) {
            Ok(()) => {
                log!("[EVENTS] review analyzed: {}", id);
                true
            }
            Err(_) => {
                warn!("[EVENTS] No listener for review {}, event dropped", id);
                false
            }
        }
    }
}
