use crate::models::sentiment::Sentiment;
use leptos::*;

#[component]
pub fn SentimentBadge(sentiment: Sentiment) -> impl IntoView {
    let style = sentiment.style();

    view! {
        <span
            class="sentiment-badge"
            data-sentiment=sentiment.as_str()
            style=format!("background-color: {}", style.color)
        >
            <span class="sentiment-icon">{ style.icon }</span>
            <span class="sentiment-label">{ style.label }</span>
        </span>
    }
}
