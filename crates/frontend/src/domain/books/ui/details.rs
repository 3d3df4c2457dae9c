use contracts::catalog::Book;
use contracts::feedback::Feedback;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::books::api;
use crate::domain::feedback::api as feedback_api;
use crate::domain::feedback::ui::{FeedbackForm, FeedbackList};
use crate::domain::loans::api as loans_api;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::routes::{use_nav, Page};
use crate::shared::toast::use_toasts;
use crate::system::session::context::use_session;

const BANNER_MS: u32 = 5_000;

/// Book detail: metadata, loan request, eBook download and reviews.
#[component]
pub fn BookDetailPage(book_id: i64) -> impl IntoView {
    let toasts = use_toasts();
    let session = use_session();
    let nav = use_nav();

    let (book, set_book) = signal(Option::<Book>::None);
    let (loading, set_loading) = signal(true);
    let (feedback, set_feedback) = signal(Vec::<Feedback>::new());
    let (request_loading, set_request_loading) = signal(false);
    let (loan_banner, set_loan_banner) = signal(false);

    spawn_local(async move {
        if let Some(fetched) = api::fetch_book(toasts, book_id).await {
            set_book.set(Some(fetched));
        }
        set_loading.set(false);
    });

    let load_feedback = move || {
        spawn_local(async move {
            if let Some(items) = feedback_api::fetch_feedback(toasts, book_id).await {
                set_feedback.set(items);
            }
        });
    };
    load_feedback();

    let request_loan = move |_| {
        if request_loading.get_untracked() {
            return;
        }
        set_request_loading.set(true);
        spawn_local(async move {
            if loans_api::request_loan(toasts, book_id).await {
                set_loan_banner.set(true);
                TimeoutFuture::new(BANNER_MS).await;
                set_loan_banner.set(false);
            }
            set_request_loading.set(false);
        });
    };

    let on_feedback_submitted = Callback::new(move |_| load_feedback());

    view! {
        <div class="book-detail">
            <button class="book-detail__back" on:click=move |_| nav.goto(Page::books())>
                {icon("arrow-left")}
                "Back to catalog"
            </button>

            {move || {
                if loading.get() {
                    return view! { <p class="muted">"Loading book..."</p> }.into_any();
                }
                let Some(book) = book.get() else {
                    return view! { <p class="muted">"Book not found."</p> }.into_any();
                };
                let offers_physical = book.offers_physical();
                let has_ebook = book.has_ebook();
                let in_stock = book.in_stock();
                let ebook_url = book.ebook.clone().filter(|url| !url.is_empty());

                view! {
                    <div class="book-detail__main">
                        <div class="book-detail__thumb">
                            {match book.thumbnail.clone() {
                                Some(url) if !url.is_empty() => {
                                    view! { <img src=url alt=book.title.clone() /> }.into_any()
                                }
                                _ => view! {
                                    <div class="book-detail__placeholder">{icon("book-open")}</div>
                                }
                                    .into_any(),
                            }}
                        </div>

                        <div class="book-detail__info">
                            <h1>{book.title.clone()}</h1>
                            <p class="book-detail__author">"by " {book.author.clone()}</p>
                            <div class="book-detail__badges">
                                {(!book.category.is_empty())
                                    .then(|| view! { <span class="badge">{book.category.clone()}</span> })}
                                {offers_physical
                                    .then(|| view! { <span class="badge badge--physical">"Physical"</span> })}
                                {has_ebook
                                    .then(|| view! { <span class="badge badge--ebook">"eBook"</span> })}
                            </div>
                            <p class="book-detail__description">{book.description.clone()}</p>

                            <Show when=move || loan_banner.get()>
                                <div class="banner banner--success">
                                    {icon("check")}
                                    "Request sent. A librarian will review it shortly."
                                </div>
                            </Show>

                            <div class="book-detail__actions">
                                {offers_physical
                                    .then(|| {
                                        view! {
                                            <button
                                                class="button button--primary"
                                                disabled=move || {
                                                    request_loading.get() || !in_stock
                                                        || !session.is_authenticated()
                                                }
                                                on:click=request_loan
                                            >
                                                {move || {
                                                    if request_loading.get() {
                                                        "Requesting..."
                                                    } else if !in_stock {
                                                        "Out of stock"
                                                    } else {
                                                        "Request this book"
                                                    }
                                                }}
                                            </button>
                                        }
                                    })}
                                {ebook_url
                                    .map(|url| {
                                        view! {
                                            <a
                                                class="button"
                                                href=url
                                                target="_blank"
                                                rel="noopener"
                                            >
                                                {icon("download")}
                                                "Download eBook"
                                            </a>
                                        }
                                    })}
                            </div>
                            <Show when=move || !session.is_authenticated()>
                                <p class="muted">"Sign in to request this book."</p>
                            </Show>
                        </div>

                        <aside class="book-detail__sidebar">
                            <h3>"Details"</h3>
                            <dl>
                                {offers_physical
                                    .then(|| {
                                        view! {
                                            <div>
                                                <dt>"Copies available"</dt>
                                                <dd>
                                                    {book
                                                        .quantity
                                                        .map(|q| q.to_string())
                                                        .unwrap_or_else(|| "Ask a librarian".to_string())}
                                                </dd>
                                            </div>
                                        }
                                    })}
                                {(!book.created_at.is_empty())
                                    .then(|| {
                                        view! {
                                            <div>
                                                <dt>"Added"</dt>
                                                <dd>{format_date(&book.created_at)}</dd>
                                            </div>
                                        }
                                    })}
                            </dl>

                            <h3>"Loan policy"</h3>
                            <ul class="book-detail__policy">
                                <li>{icon("clock")} "Requests are approved by a librarian."</li>
                                <li>{icon("calendar")} "The due date is set on approval."</li>
                                <li>{icon("refresh")} "Extensions can be requested once a loan is active."</li>
                            </ul>
                        </aside>
                    </div>
                }
                    .into_any()
            }}

            <section class="book-detail__reviews">
                <h2>"Reviews"</h2>
                <FeedbackForm book_id=book_id on_submitted=on_feedback_submitted />
                <FeedbackList items=feedback.into() />
            </section>
        </div>
    }
}
