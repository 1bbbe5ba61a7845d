/// Review history.
/// `HistoryStore` keeps the list of analyzed reviews exactly as the Review
/// Service returned it and replaces it wholesale on every successful load.
/// Loads are numbered as they are issued; when loads overlap, a response
/// older than the one already applied is discarded instead of overwriting
/// newer data. A failed load keeps the previous list and records the error
/// until the user retries.
use crate::api::ReviewSource;
use crate::error::FetchError;
use crate::events::ReviewEventReceiver;
use crate::models::review::Review;
use futures::StreamExt;
use leptos::logging::{error, log};
use std::cell::{Cell, RefCell};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistorySnapshot {
    pub reviews: Vec<Review>,
    /// At least one load has succeeded.
    pub loaded: bool,
    pub in_flight: usize,
    pub error: Option<FetchError>,
}

/// What the history panel should render.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryStatus {
    /// Nothing loaded yet.
    Loading,
    /// Nothing ever loaded and the last attempt failed.
    Failed(FetchError),
    /// A list is available; `stale_error` is set when a later reload failed.
    Ready { stale_error: Option<FetchError> },
}

impl HistorySnapshot {
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn status(&self) -> HistoryStatus {
        if self.loaded {
            return HistoryStatus::Ready {
                stale_error: self.error.clone(),
            };
        }
        match (&self.error, self.is_loading()) {
            (Some(err), false) => HistoryStatus::Failed(err.clone()),
            _ => HistoryStatus::Loading,
        }
    }
}

type Listener = Box<dyn Fn(&HistorySnapshot)>;

pub struct HistoryStore<R> {
    source: R,
    inner: RefCell<HistorySnapshot>,
    issued: Cell<u64>,
    applied: Cell<u64>,
    listener: RefCell<Option<Listener>>,
}

impl<R: ReviewSource> HistoryStore<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            inner: RefCell::new(HistorySnapshot::default()),
            issued: Cell::new(0),
            applied: Cell::new(0),
            listener: RefCell::new(None),
        }
    }

    pub fn source(&self) -> &R {
        &self.source
    }

    pub fn set_listener(&self, listener: impl Fn(&HistorySnapshot) + 'static) {
        *self.listener.borrow_mut() = Some(Box::new(listener));
    }

    pub fn snapshot(&self) -> HistorySnapshot {
        self.inner.borrow().clone()
    }

    pub fn reviews(&self) -> Vec<Review> {
        self.inner.borrow().reviews.clone()
    }

    /// Fetches the full list from the Review Service.
    pub async fn load(&self) -> Result<Vec<Review>, FetchError> {
        let token = self.issued.get() + 1;
        self.issued.set(token);
        self.update(|inner| inner.in_flight += 1);
        log!("[HISTORY] Load #{} started", token);

        let result = self.source.fetch_reviews().await.map_err(FetchError::from);

        let newest = token > self.applied.get();
        if newest && result.is_ok() {
            self.applied.set(token);
        }
        self.update(|inner| {
            inner.in_flight = inner.in_flight.saturating_sub(1);
            if !newest {
                return;
            }
            match &result {
                Ok(reviews) => {
                    inner.reviews = reviews.clone();
                    inner.loaded = true;
                    inner.error = None;
                }
                Err(err) => inner.error = Some(err.clone()),
            }
        });

        match &result {
            Ok(reviews) if newest => log!("[HISTORY] Load #{} applied {} reviews", token, reviews.len()),
            Ok(_) => log!("[HISTORY] Load #{} resolved after a newer one, discarded", token),
            Err(err) => error!("[HISTORY] Load #{} failed: {}", token, err),
        }
        result
    }

    /// User-triggered reload after a failure.
    pub async fn retry(&self) -> Result<Vec<Review>, FetchError> {
        log!("[HISTORY] Retry requested");
        self.load().await
    }

    /// Reloads once per review-analyzed event until the sender side is gone.
    pub async fn listen(&self, mut events: ReviewEventReceiver) {
        while let Some(event) = events.next().await {
            log!("[HISTORY] Review {} analyzed, reloading", event.review.id);
            // Failures are recorded in the snapshot.
            let _ = self.load().await;
        }
        log!("[HISTORY] Event channel closed");
    }

    fn update(&self, apply: impl FnOnce(&mut HistorySnapshot)) {
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
