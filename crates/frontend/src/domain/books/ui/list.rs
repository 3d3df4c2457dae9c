use contracts::catalog::{Book, BookFormat, Category};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::card::BookCard;
use crate::domain::books::api;
use crate::shared::toast::use_toasts;

/// Paged catalog with search, category and format filters. Any filter
/// change resets to page one.
#[component]
pub fn BooksPage(#[prop(optional)] initial_search: String) -> impl IntoView {
    let toasts = use_toasts();

    let (books, set_books) = signal(Vec::<Book>::new());
    let (loading, set_loading) = signal(true);
    let (current_page, set_current_page) = signal(1u32);
    let (last_page, set_last_page) = signal(1u32);
    let (search, set_search) = signal(initial_search);
    let (category, set_category) = signal(Option::<i64>::None);
    let (format, set_format) = signal(Option::<BookFormat>::None);
    let (categories, set_categories) = signal(Vec::<Category>::new());

    let fetch_page = move |page: u32| {
        set_loading.set(true);
        spawn_local(async move {
            let result = api::fetch_books(
                toasts,
                page,
                &search.get_untracked(),
                category.get_untracked(),
                format.get_untracked(),
            )
            .await;
            if let Some(paged) = result {
                set_books.set(paged.data);
                set_current_page.set(paged.meta.current_page);
                set_last_page.set(paged.meta.last_page);
            }
            set_loading.set(false);
        });
    };

    spawn_local(async move {
        if let Some(list) = api::fetch_categories(toasts).await {
            set_categories.set(list);
        }
    });

    // Covers the initial load too; the effect runs once on mount.
    Effect::new(move |_| {
        category.track();
        format.track();
        fetch_page(1);
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        fetch_page(1);
    };

    let reset_filters = move |_| {
        set_search.set(String::new());
        set_category.set(None);
        set_format.set(None);
    };

    view! {
        <div class="books-page">
            <div class="books-page__filters">
                <form class="books-page__search" on:submit=on_search>
                    <input
                        type="text"
                        placeholder="Title or author..."
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                    <button class="button" type="submit">
                        "Search"
                    </button>
                </form>

                <select
                    prop:value=move || {
                        category.get().map(|c| c.to_string()).unwrap_or_else(|| "all".to_string())
                    }
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_category.set(value.parse::<i64>().ok());
                    }
                >
                    <option value="all">"All categories"</option>
                    {move || {
                        categories
                            .get()
                            .into_iter()
                            .map(|c| {
                                view! { <option value=c.id.to_string()>{c.name}</option> }
                            })
                            .collect_view()
                    }}
                </select>

                <select
                    prop:value=move || {
                        format.get().map(|f| f.as_str()).unwrap_or("both")
                    }
                    on:change=move |ev| {
                        set_format
                            .set(match event_target_value(&ev).as_str() {
                                "physical" => Some(BookFormat::Physical),
                                "ebook" => Some(BookFormat::Ebook),
                                _ => None,
                            });
                    }
                >
                    <option value="both">"All formats"</option>
                    <option value="physical">"Physical"</option>
                    <option value="ebook">"eBook"</option>
                </select>
            </div>

            {move || {
                if loading.get() {
                    view! { <p class="muted">"Loading books..."</p> }.into_any()
                } else if books.get().is_empty() {
                    view! {
                        <div class="books-page__empty">
                            <p>"No books match your filters."</p>
                            <button class="button" on:click=reset_filters>
                                "Reset filters"
                            </button>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="books-page__grid">
                            {books
                                .get()
                                .into_iter()
                                .map(|book| view! { <BookCard book=book /> })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}

            <div class="pagination">
                <button
                    class="button"
                    disabled=move || current_page.get() <= 1 || loading.get()
                    on:click=move |_| fetch_page(current_page.get_untracked() - 1)
                >
                    "Previous"
                </button>
                <span class="pagination__info">
                    {move || format!("Page {} of {}", current_page.get(), last_page.get())}
                </span>
                <button
                    class="button"
                    disabled=move || current_page.get() >= last_page.get() || loading.get()
                    on:click=move |_| fetch_page(current_page.get_untracked() + 1)
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
