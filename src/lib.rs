// Product review analyzer: submit a review for sentiment analysis and browse
// the history of analyzed reviews. validation gates input, AnalysisClient makes
// the one network call per submission, SubmissionController owns the submit
// state machine, HistoryStore holds the fetched list and filter projects it by
// sentiment. The components mirror that state into signals.

pub mod analysis;
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod filter;
pub mod format;
pub mod history;
pub mod submission;
pub mod validation;

pub mod components {
    pub mod review_form;
    pub mod reviews_list;
    pub mod sentiment_badge;
}

pub mod models {
    pub mod review;
    pub mod sentiment;
}

pub mod utils {
    pub mod leptos_owner;
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;

    console_error_panic_hook::set_once();

    leptos::mount_to_body(App);
}
