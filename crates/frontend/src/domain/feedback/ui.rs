//! Rating and review widgets, consumed by the book detail page.

use contracts::feedback::Feedback;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use crate::system::session::context::use_session;

/// Interactive star picker, 1 through 5.
#[component]
pub fn RatingStars(rating: RwSignal<u8>) -> impl IntoView {
    view! {
        <div class="rating-stars">
            {(1u8..=5)
                .map(|value| {
                    view! {
                        <button
                            type="button"
                            class="rating-stars__star"
                            aria-label=format!("Rate {} of 5", value)
                            on:click=move |_| rating.set(value)
                        >
                            {move || {
                                if rating.get() >= value {
                                    icon("star-filled")
                                } else {
                                    icon("star")
                                }
                            }}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Static star row for displaying an existing rating.
fn stars_for(rating: u8) -> impl IntoView {
    (1u8..=5)
        .map(|value| {
            if rating >= value {
                icon("star-filled")
            } else {
                icon("star")
            }
        })
        .collect_view()
}

#[component]
pub fn FeedbackForm(book_id: i64, on_submitted: Callback<()>) -> impl IntoView {
    let toasts = use_toasts();
    let session = use_session();

    let rating = RwSignal::new(0u8);
    let (review, set_review) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            let ok = api::submit_feedback(
                toasts,
                book_id,
                rating.get_untracked(),
                review.get_untracked(),
            )
            .await;
            if ok {
                rating.set(0);
                set_review.set(String::new());
                on_submitted.run(());
            }
            set_loading.set(false);
        });
    };

    view! {
        <form class="feedback-form" on:submit=on_submit>
            <h3>"Rate & review"</h3>
            <Show when=move || !session.is_authenticated()>
                <p class="muted">"Sign in to leave a review."</p>
            </Show>
            <RatingStars rating=rating />
            <textarea
                placeholder="Share your thoughts (optional)"
                prop:value=move || review.get()
                on:input=move |ev| set_review.set(event_target_value(&ev))
            ></textarea>
            <button
                class="button button--primary"
                type="submit"
                disabled=move || loading.get() || !api::rating_valid(rating.get())
            >
                {move || if loading.get() { "Submitting..." } else { "Submit review" }}
            </button>
        </form>
    }
}

#[component]
pub fn FeedbackList(items: Signal<Vec<Feedback>>) -> impl IntoView {
    view! {
        <div class="feedback-list">
            {move || {
                let items = items.get();
                if items.is_empty() {
                    view! {
                        <p class="muted">"No reviews yet. Be the first to rate this book."</p>
                    }
                        .into_any()
                } else {
                    items
                        .into_iter()
                        .map(|item| {
                            let author = item
                                .user
                                .as_ref()
                                .and_then(|u| u.name.clone())
                                .unwrap_or_else(|| "Anonymous reader".to_string());
                            view! {
                                <article class="feedback-item">
                                    <header class="feedback-item__header">
                                        <span class="feedback-item__author">{author}</span>
                                        <span class="feedback-item__stars">
                                            {stars_for(item.rating)}
                                        </span>
                                        {item
                                            .created_at
                                            .as_deref()
                                            .map(|d| {
                                                view! {
                                                    <span class="feedback-item__date">
                                                        {format_date(d)}
                                                    </span>
                                                }
                                            })}
                                    </header>
                                    {(!item.review.is_empty())
                                        .then(|| {
                                            view! {
                                                <p class="feedback-item__text">
                                                    {item.review.clone()}
                                                </p>
                                            }
                                        })}
                                </article>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
