/// Main application entry point for the review analyzer.
/// Wires the submission controller and history store together (form -> events -> history -> filter)
/// and hands each to the component that renders it.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use crate::analysis::AnalysisClient;
use crate::api::HttpReviewService;
use crate::components::{review_form::ReviewForm, reviews_list::ReviewsList};
use crate::config::ClientConfig;
use crate::events::review_events;
use crate::history::HistoryStore;
use crate::submission::SubmissionController;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ClientConfig::default());

    view! {
        <Title text="Product Review Analyzer" />
        <Router>
            <main>
                <Routes>
                    <Route path="" view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let service = HttpReviewService::new(config);

    let (events, receiver) = review_events();
    let controller = Rc::new(SubmissionController::new(AnalysisClient::new(service.clone()), events));
    let store = Rc::new(HistoryStore::new(service));

    // Effects only run in the browser, so no request is made while rendering on the server.
    let receiver = RefCell::new(Some(receiver));
    let history = store.clone();
    create_effect(move |_| {
        let Some(receiver) = receiver.borrow_mut().take() else {
            return;
        };
        let initial = history.clone();
        spawn_local(async move {
            let _ = initial.load().await;
        });
        let listener = history.clone();
        spawn_local(async move {
            listener.listen(receiver).await;
        });
    });

    view! {
        <ReviewForm controller=controller />
        <ReviewsList store=store />
    }
}
