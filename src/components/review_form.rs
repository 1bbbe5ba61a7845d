/// Form for submitting a review and showing its analysis.
/// Mirrors the submission controller into a signal; all state changes go through the controller.
use leptos::*;
use leptos::ev::SubmitEvent;
use leptos::logging::log;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use crate::api::HttpReviewService;
use crate::components::sentiment_badge::SentimentBadge;
use crate::format;
use crate::models::review::Review;
use crate::submission::{FormError, SubmissionController, SubmissionSnapshot, SubmitOutcome};
use crate::utils::leptos_owner::with_owner_safe;

pub type AppSubmission = SubmissionController<HttpReviewService>;

#[component]
pub fn ReviewForm(controller: Rc<AppSubmission>) -> impl IntoView {
    let (snapshot, set_snapshot) = create_signal(controller.snapshot());

    // Results may land after this component is unmounted.
    let owner = Owner::current();
    controller.set_listener(move |next| {
        let next = next.clone();
        with_owner_safe(owner, "review form", move || set_snapshot.set(next));
    });
    let controller = store_value(controller);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let controller = controller.get_value();
        spawn_local(async move {
            match controller.submit().await {
                SubmitOutcome::Analyzed(review) => log!("[FORM] Review {} analyzed", review.id),
                SubmitOutcome::Ignored => log!("[FORM] Submit ignored, analysis in progress"),
                SubmitOutcome::Invalid(_) | SubmitOutcome::Failed(_) => {}
            }
        });
    };

    view! {
        <section class="review-form">
            <h2>{ "Product Review Analyzer" }</h2>
            <p class="subtitle">{ "Sentiment and key insights for any product review" }</p>
            <form on:submit=handle_submit>
                <label for="product-name">{ "Product name" }</label>
                <input
                    id="product-name"
                    type="text"
                    placeholder="e.g., iPhone 15 Pro, Nike Air Max..."
                    prop:value=move || snapshot.with(|s| s.draft.product_name.clone())
                    on:input=move |e| controller.with_value(|c| c.set_product_name(&event_target_value(&e)))
                />
                <label for="review-text">
                    { "Your review " }<span class="required">{ "*" }</span>
                </label>
                <textarea
                    id="review-text"
                    rows="5"
                    placeholder="Share your thoughts about the product (at least 10 characters)"
                    prop:value=move || snapshot.with(|s| s.draft.review_text.clone())
                    on:input=move |e| controller.with_value(|c| c.set_review_text(&event_target_value(&e)))
                />
                <div class="char-count">
                    { move || format::char_count_label(snapshot.with(|s| s.draft.char_count())) }
                </div>
                { move || snapshot
                    .with(|s| s.error.clone())
                    .filter(FormError::is_inline)
                    .map(|err| view! { <p class="field-error">{ err.message() }</p> })
                }
                <button
                    type="submit"
                    disabled=move || !snapshot.with(SubmissionSnapshot::can_submit)
                >
                    { move || if snapshot.with(SubmissionSnapshot::is_pending) { "Analyzing..." } else { "Analyze Review" } }
                </button>
            </form>

            { move || snapshot
                .with(|s| s.error.clone())
                .filter(|err| !err.is_inline())
                .map(|err| view! {
                    <div class="error-banner" role="alert">
                        <strong>{ "Error" }</strong>
                        <span class="error-message">{ err.message() }</span>
                        <button type="button" on:click=move |_| controller.with_value(|c| c.dismiss_error())>
                            { "Dismiss" }
                        </button>
                    </div>
                })
            }

            { move || snapshot
                .with(|s| s.result.clone())
                .map(|review| view! { <AnalysisResult review=review /> })
            }
        </section>
    }
}

#[component]
fn AnalysisResult(review: Review) -> impl IntoView {
    let color = review.sentiment.style().color;
    let product = (!review.product_name.is_empty()).then(|| view! {
        <div class="product-badge">{ "📦 " }{ review.product_name.clone() }</div>
    });

    view! {
        <div class="result-card">
            <h3>{ "Analysis complete!" }</h3>
            { product }
            <div class="sentiment-row">
                <div>
                    <div class="label">{ "Sentiment" }</div>
                    <SentimentBadge sentiment=review.sentiment />
                </div>
                <div class="confidence">
                    <div class="label">{ "Confidence Score" }</div>
                    <div class="score-value">{ format::confidence_percent(review.sentiment_score) }</div>
                    <div class="score-bar">
                        <div
                            class="score-bar-fill"
                            style=format!(
                                "width: {}; background-color: {}",
                                format::confidence_bar_width(review.sentiment_score),
                                color,
                            )
                        ></div>
                    </div>
                </div>
            </div>
            <div class="key-points">
                <h4>{ "💡 Key Insights" }</h4>
                <p style="white-space: pre-wrap">{ review.key_points.clone() }</p>
            </div>
            <div class="original-review">
                <div class="label">{ "📝 Original Review" }</div>
                <p>{ review.review_text.clone() }</p>
            </div>
        </div>
    }
}
