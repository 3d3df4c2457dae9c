use leptos::prelude::*;

use crate::routes::{use_nav, Page};
use crate::shared::icons::icon;

#[component]
pub fn HomePage() -> impl IntoView {
    let nav = use_nav();

    view! {
        <section class="hero">
            <h1>"Your library, anywhere"</h1>
            <p>
                "Browse the catalog, borrow physical books and download eBooks "
                "without standing in line."
            </p>
            <button class="button button--primary" on:click=move |_| nav.goto(Page::books())>
                "Browse the catalog"
            </button>
        </section>

        <section class="features">
            <div class="feature-card">
                {icon("search")}
                <h3>"Find"</h3>
                <p>"Search by title or author, filter by category and format."</p>
            </div>
            <div class="feature-card">
                {icon("book-open")}
                <h3>"Borrow"</h3>
                <p>"Request a physical copy; a librarian approves it and sets the due date."</p>
            </div>
            <div class="feature-card">
                {icon("download")}
                <h3>"Download"</h3>
                <p>"eBooks are available immediately, no waiting and no due dates."</p>
            </div>
            <div class="feature-card">
                {icon("refresh")}
                <h3>"Extend"</h3>
                <p>"Need more time? Request a due date extension from your loan history."</p>
            </div>
        </section>

        <section class="cta">
            <h2>"Ready to start reading?"</h2>
            <button class="button" on:click=move |_| nav.goto(Page::Login)>
                "Sign in to your account"
            </button>
        </section>
    }
}
