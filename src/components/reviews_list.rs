use leptos::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use crate::api::HttpReviewService;
use crate::components::sentiment_badge::SentimentBadge;
use crate::filter::{self, SentimentCounts};
use crate::format;
use crate::history::{HistorySnapshot, HistoryStatus, HistoryStore};
use crate::models::review::Review;
use crate::models::sentiment::Category;
use crate::utils::leptos_owner::with_owner_safe;

pub type AppHistory = HistoryStore<HttpReviewService>;

#[component]
pub fn ReviewsList(store: Rc<AppHistory>) -> impl IntoView {
    let (snapshot, set_snapshot) = create_signal(store.snapshot());
    let (selected, set_selected) = create_signal(Category::All);

    let owner = Owner::current();
    store.set_listener(move |next| {
        let next = next.clone();
        with_owner_safe(owner, "reviews list", move || set_snapshot.set(next));
    });
    let store = store_value(store);

    let counts = create_memo(move |_| snapshot.with(|s| filter::counts(&s.reviews)));
    let visible = create_memo(move |_| snapshot.with(|s| filter::visible(&s.reviews, selected.get())));

    let retry = move |_: ev::MouseEvent| {
        let store = store.get_value();
        spawn_local(async move {
            // The outcome lands in the snapshot through the listener.
            let _ = store.retry().await;
        });
    };

    view! {
        <section class="review-history">
            <h2>{ "Review History" }</h2>
            { move || match snapshot.with(HistorySnapshot::status) {
                HistoryStatus::Loading => view! {
                    <div class="loading">{ "Loading reviews..." }</div>
                }.into_view(),
                HistoryStatus::Failed(err) => view! {
                    <div class="error-screen" role="alert">
                        <p>{ err.user_message() }</p>
                        <button type="button" on:click=retry>{ "Retry" }</button>
                    </div>
                }.into_view(),
                HistoryStatus::Ready { stale_error } => view! {
                    { stale_error.map(|err| view! {
                        <div class="stale-banner" role="alert">
                            <span>{ err.user_message() }</span>
                            <button type="button" on:click=retry>{ "Retry" }</button>
                        </div>
                    }) }
                    <FilterTabs selected=selected set_selected=set_selected counts=counts />
                    <div class="review-cards">
                        { move || {
                            let reviews = visible.get();
                            if reviews.is_empty() {
                                view! { <p class="empty">{ filter::empty_message(selected.get()) }</p> }.into_view()
                            } else {
                                reviews
                                    .into_iter()
                                    .map(|review| view! { <ReviewCard review=review /> })
                                    .collect::<Vec<_>>()
                                    .into_view()
                            }
                        } }
                    </div>
                }.into_view(),
            } }
        </section>
    }
}

#[component]
fn FilterTabs(
    selected: ReadSignal<Category>,
    set_selected: WriteSignal<Category>,
    counts: Memo<SentimentCounts>,
) -> impl IntoView {
    view! {
        <div class="filter-tabs">
            { Category::ALL.into_iter().map(|category| view! {
                <button
                    type="button"
                    class:active=move || selected.get() == category
                    on:click=move |_| set_selected.set(category)
                >
                    { move || format!("{} ({})", category.label(), counts.with(|c| c.get(category))) }
                </button>
            }).collect::<Vec<_>>() }
        </div>
    }
}

#[component]
fn ReviewCard(review: Review) -> impl IntoView {
    let product = (!review.product_name.is_empty()).then(|| view! {
        <h4 class="product-name">{ review.product_name.clone() }</h4>
    });

    view! {
        <article class="review-card">
            <header>
                <SentimentBadge sentiment=review.sentiment />
                <span class="confidence">{ format::confidence_percent(review.sentiment_score) }</span>
                <time datetime=review.created_at.to_rfc3339()>
                    { format::created_at_label(&review.created_at) }
                </time>
            </header>
            { product }
            <p class="review-text">{ review.review_text.clone() }</p>
            <div class="key-points" style="white-space: pre-wrap">{ review.key_points.clone() }</div>
        </article>
    }
}
