/// Review submission workflow.
/// `SubmissionController` owns the form draft and the lifecycle of a single
/// submission: `Idle -> Pending -> Succeeded | Failed`, back to `Idle` on the
/// next edit. At most one analysis request is in flight per controller; a
/// submit issued while `Pending` is ignored. On success the controller clears
/// the draft and emits a [`ReviewAnalyzed`](crate::events::ReviewAnalyzed)
/// event, which is the only thing that makes the history reload.
use crate::analysis::AnalysisClient;
use crate::api::AnalysisService;
use crate::error::{AnalysisError, ValidationError};
use crate::events::ReviewEventSender;
use crate::models::review::Review;
use crate::validation;
use leptos::logging::{log, warn};
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded(Review),
    Failed(String),
}

/// Contents of the two input fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewDraft {
    pub product_name: String,
    pub review_text: String,
}

impl ReviewDraft {
    pub fn char_count(&self) -> usize {
        self.review_text.chars().count()
    }

    fn clear(&mut self) {
        self.product_name.clear();
        self.review_text.clear();
    }
}

/// What the form shows in its error slot.
#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    /// Shown inline under the review field.
    Validation(ValidationError),
    /// Shown as a dismissable banner.
    Analysis(AnalysisError),
}

impl FormError {
    pub fn message(&self) -> String {
        match self {
            FormError::Validation(err) => err.to_string(),
            FormError::Analysis(err) => err.message().to_string(),
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self, FormError::Validation(_))
    }
}

/// Everything a view needs to render the form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubmissionSnapshot {
    pub state: SubmissionState,
    pub draft: ReviewDraft,
    /// Last analyzed review; survives edits until the next submission starts.
    pub result: Option<Review>,
    pub error: Option<FormError>,
}

impl SubmissionSnapshot {
    pub fn is_pending(&self) -> bool {
        self.state == SubmissionState::Pending
    }

    /// Drives the enabled state of the submit button.
    pub fn can_submit(&self) -> bool {
        !self.is_pending() && validation::can_submit(&self.draft.review_text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Another submission was already in flight.
    Ignored,
    Invalid(ValidationError),
    Analyzed(Review),
    Failed(AnalysisError),
}

type Listener = Box<dyn Fn(&SubmissionSnapshot)>;

pub struct SubmissionController<S> {
    client: AnalysisClient<S>,
    events: ReviewEventSender,
    inner: RefCell<SubmissionSnapshot>,
    listener: RefCell<Option<Listener>>,
}

impl<S: AnalysisService> SubmissionController<S> {
    pub fn new(client: AnalysisClient<S>, events: ReviewEventSender) -> Self {
        Self {
            client,
            events,
            inner: RefCell::new(SubmissionSnapshot::default()),
            listener: RefCell::new(None),
        }
    }

    pub fn client(&self) -> &AnalysisClient<S> {
        &self.client
    }

    /// Called after every change, with the new snapshot.
    pub fn set_listener(&self, listener: impl Fn(&SubmissionSnapshot) + 'static) {
        *self.listener.borrow_mut() = Some(Box::new(listener));
    }

    pub fn snapshot(&self) -> SubmissionSnapshot {
        self.inner.borrow().clone()
    }

    pub fn state(&self) -> SubmissionState {
        self.inner.borrow().state.clone()
    }

    pub fn set_product_name(&self, value: &str) {
        self.edit(|draft| draft.product_name = value.to_string());
    }

    pub fn set_review_text(&self, value: &str) {
        self.edit(|draft| draft.review_text = value.to_string());
    }

    pub fn dismiss_error(&self) {
        self.update(|inner| inner.error = None);
    }

    /// Validates the draft and, if it passes, sends it for analysis.
    pub async fn submit(&self) -> SubmitOutcome {
        let draft = {
            let inner = self.inner.borrow();
            if inner.is_pending() {
                warn!("[SUBMIT] Submission already in flight, ignoring");
                return SubmitOutcome::Ignored;
            }
            inner.draft.clone()
        };

        if let Err(err) = validation::validate(&draft.review_text) {
            log!("[SUBMIT] Rejected locally: {}", err);
            self.update(|inner| {
                inner.state = SubmissionState::Idle;
                inner.error = Some(FormError::Validation(err.clone()));
            });
            return SubmitOutcome::Invalid(err);
        }

        self.update(|inner| {
            inner.state = SubmissionState::Pending;
            inner.error = None;
            inner.result = None;
        });

        match self.client.analyze(&draft.product_name, &draft.review_text).await {
            Ok(review) => {
                self.update(|inner| {
                    inner.state = SubmissionState::Succeeded(review.clone());
                    inner.result = Some(review.clone());
                    inner.draft.clear();
                });
                self.events.emit(review.clone());
                SubmitOutcome::Analyzed(review)
            }
            Err(err) => {
                self.update(|inner| {
                    inner.state = SubmissionState::Failed(err.message().to_string());
                    inner.error = Some(FormError::Analysis(err.clone()));
                });
                SubmitOutcome::Failed(err)
            }
        }
    }

    fn edit(&self, apply: impl FnOnce(&mut ReviewDraft)) {
        self.update(|inner| {
            apply(&mut inner.draft);
            if matches!(inner.state, SubmissionState::Succeeded(_) | SubmissionState::Failed(_)) {
                inner.state = SubmissionState::Idle;
            }
            if !inner.is_pending() {
                inner.error = None;
            }
        });
    }

    fn update(&self, apply: impl FnOnce(&mut SubmissionSnapshot)) {
        let snapshot = {
            let mut inner = self.inner.borrow_mut();
            apply(&mut *inner);
            inner.clone()
        };
        if let Some(listener) = self.listener.borrow().as_ref() {
            listener(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ServiceError, ANALYSIS_FALLBACK_MESSAGE};
    use crate::events::review_events;
    use crate::models::sentiment::Sentiment;
    use chrono::{TimeZone, Utc};
    use futures::channel::oneshot;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Holds each request open until the test answers it.
    struct GatedService {
        calls: Cell<usize>,
        gate: RefCell<Option<oneshot::Receiver<Result<Review, ServiceError>>>>,
    }

    impl AnalysisService for GatedService {
        async fn analyze_review(&self, _request: &crate::models::review::AnalyzeRequest) -> Result<Review, ServiceError> {
            self.calls.set(self.calls.get() + 1);
            let gate = self.gate.borrow_mut().take();
            match gate {
                Some(rx) => rx.await.unwrap_or_else(|_| Err(ServiceError::Network("gate dropped".into()))),
                None => Err(ServiceError::Network("unexpected extra call".into())),
            }
        }
    }

    fn mug() -> Review {
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

    fn gated() -> (
        SubmissionController<Rc<GatedService>>,
        Rc<GatedService>,
        oneshot::Sender<Result<Review, ServiceError>>,
        crate::events::ReviewEventReceiver,
    ) {
        let (tx, rx) = oneshot::channel();
        let service = Rc::new(GatedService {
            calls: Cell::new(0),
            gate: RefCell::new(Some(rx)),
        });
        let (events, receiver) = review_events();
        let controller = SubmissionController::new(AnalysisClient::new(service.clone()), events);
        (controller, service, tx, receiver)
    }

    #[tokio::test]
    async fn test_short_review_never_reaches_network() {
        log!("[TEST] Starting test_short_review_never_reaches_network");
        let (controller, service, _tx, mut receiver) = gated();
        controller.set_review_text("short");

        let outcome = controller.submit().await;

        assert_eq!(outcome, SubmitOutcome::Invalid(ValidationError::TooShort { min: 10, actual: 5 }));
        assert_eq!(service.calls.get(), 0);
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.state, SubmissionState::Idle);
        assert!(snapshot.error.as_ref().is_some_and(FormError::is_inline));
        assert!(receiver.try_next().is_err());
    }

    #[tokio::test]
    async fn test_success_clears_draft_and_emits_event() {
        log!("[TEST] Starting test_success_clears_draft_and_emits_event");
        let (controller, service, tx, mut receiver) = gated();
        controller.set_product_name("Mug");
        controller.set_review_text("Great quality and fast shipping!");
        tx.send(Ok(mug())).unwrap();

        let outcome = controller.submit().await;

        assert_eq!(outcome, SubmitOutcome::Analyzed(mug()));
        assert_eq!(service.calls.get(), 1);
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.state, SubmissionState::Succeeded(mug()));
        assert_eq!(snapshot.result, Some(mug()));
        assert_eq!(snapshot.draft, ReviewDraft::default());
        assert_eq!(snapshot.error, None);

        let event = receiver.try_next().unwrap().unwrap();
        assert_eq!(event.review, mug());
        assert!(receiver.try_next().is_err());
    }

    #[tokio::test]
    async fn test_failure_keeps_draft() {
        log!("[TEST] Starting test_failure_keeps_draft");
        let (controller, _service, tx, mut receiver) = gated();
        controller.set_product_name("Mug");
        controller.set_review_text("Great quality and fast shipping!");
        tx.send(Err(ServiceError::Network("offline".into()))).unwrap();

        let outcome = controller.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.state, SubmissionState::Failed(ANALYSIS_FALLBACK_MESSAGE.to_string()));
        assert_eq!(snapshot.draft.product_name, "Mug");
        assert_eq!(snapshot.draft.review_text, "Great quality and fast shipping!");
        assert!(snapshot.error.as_ref().is_some_and(|e| !e.is_inline()));
        assert!(receiver.try_next().is_err());
    }

    #[tokio::test]
    async fn test_second_submit_while_pending_is_ignored() {
        log!("[TEST] Starting test_second_submit_while_pending_is_ignored");
        let (controller, service, tx, _receiver) = gated();
        controller.set_review_text("Great quality and fast shipping!");

        let (first, second, _) = futures::join!(controller.submit(), controller.submit(), async move {
            tx.send(Ok(mug())).unwrap();
        });

        assert_eq!(first, SubmitOutcome::Analyzed(mug()));
        assert_eq!(second, SubmitOutcome::Ignored);
        assert_eq!(service.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_pending_state_is_visible_to_listener() {
        let (controller, _service, tx, _receiver) = gated();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_by_listener = seen.clone();
        controller.set_listener(move |snapshot| {
            seen_by_listener.borrow_mut().push(snapshot.state.clone());
        });
        controller.set_review_text("Great quality and fast shipping!");
        tx.send(Ok(mug())).unwrap();

        controller.submit().await;

        let states = seen.borrow();
        assert_eq!(
            *states,
            vec![SubmissionState::Idle, SubmissionState::Pending, SubmissionState::Succeeded(mug())]
        );
    }

    #[tokio::test]
    async fn test_edit_after_result_returns_to_idle_and_keeps_result() {
        let (controller, _service, tx, _receiver) = gated();
        controller.set_review_text("Great quality and fast shipping!");
        tx.send(Ok(mug())).unwrap();
        controller.submit().await;

        controller.set_review_text("A");

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.state, SubmissionState::Idle);
        assert_eq!(snapshot.result, Some(mug()));
        assert!(!snapshot.can_submit());
    }

    #[tokio::test]
    async fn test_edit_clears_error_and_dismiss() {
        let (controller, _service, _tx, _receiver) = gated();
        controller.set_review_text("tiny");
        controller.submit().await;
        assert!(controller.snapshot().error.is_some());

        controller.set_review_text("tiny but longer");
        assert_eq!(controller.snapshot().error, None);

        controller.set_review_text("tiny");
        controller.submit().await;
        controller.dismiss_error();
        assert_eq!(controller.snapshot().error, None);
    }

    #[test]
    fn test_draft_char_count() {
        let draft = ReviewDraft {
            product_name: String::new(),
            review_text: "Café ok".into(),
        };
        assert_eq!(draft.char_count(), 7);
    }
}
