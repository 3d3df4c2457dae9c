use contracts::catalog::Book;
use leptos::prelude::*;

use crate::routes::{use_nav, Page};
use crate::shared::icons::icon;

/// One catalog tile. Clicking anywhere meaningful opens the detail page.
#[component]
pub fn BookCard(book: Book) -> impl IntoView {
    let nav = use_nav();
    let id = book.id;
    let offers_physical = book.offers_physical();
    let has_ebook = book.has_ebook();
    let in_stock = book.in_stock();

    view! {
        <article class="book-card">
            <div class="book-card__thumb" on:click=move |_| nav.goto(Page::BookDetail(id))>
                {match book.thumbnail.clone() {
                    Some(url) if !url.is_empty() => {
                        view! { <img src=url alt=book.title.clone() /> }.into_any()
                    }
                    _ => view! { <div class="book-card__placeholder">{icon("book-open")}</div> }
                        .into_any(),
                }}
            </div>

            <div class="book-card__badges">
                {(!book.category.is_empty())
                    .then(|| view! { <span class="badge">{book.category.clone()}</span> })}
                {offers_physical.then(|| view! { <span class="badge badge--physical">"Physical"</span> })}
                {has_ebook.then(|| view! { <span class="badge badge--ebook">"eBook"</span> })}
            </div>

            <h3 class="book-card__title" on:click=move |_| nav.goto(Page::BookDetail(id))>
                {book.title.clone()}
            </h3>
            <p class="book-card__author">{book.author.clone()}</p>

            {offers_physical
                .then(|| {
                    view! {
                        <p class="book-card__stock">
                            {if in_stock { "In stock" } else { "Out of stock" }}
                        </p>
                    }
                })}

            <button class="button" on:click=move |_| nav.goto(Page::BookDetail(id))>
                "View Details"
            </button>
        </article>
    }
}
