use leptos::prelude::*;

use crate::routes::{use_nav, Page};
use crate::shared::icons::icon;
use crate::system::session::context::use_session;

/// Top navigation: brand, catalog search, session-aware links.
#[component]
pub fn Navbar() -> impl IntoView {
    let nav = use_nav();
    let session = use_session();
    let (search, set_search) = signal(String::new());

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        nav.goto(Page::Books {
            search: Some(search.get()),
        });
    };

    let logout = move |_| {
        session.clear_session();
        nav.goto(Page::Home);
    };

    view! {
        <header class="navbar">
            <button class="navbar__brand" on:click=move |_| nav.goto(Page::Home)>
                {icon("library")}
                <span>"BookAccess"</span>
            </button>

            <nav class="navbar__links">
                <button class="navbar__link" on:click=move |_| nav.goto(Page::books())>
                    "Browse Books"
                </button>
                <Show when=move || session.is_authenticated()>
                    <button class="navbar__link" on:click=move |_| nav.goto(Page::Loans)>
                        "My Loans"
                    </button>
                </Show>
            </nav>

            <form class="navbar__search" on:submit=on_search>
                <input
                    type="text"
                    placeholder="Search books..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <button type="submit" aria-label="Search">
                    {icon("search")}
                </button>
            </form>

            <div class="navbar__user">
                <Show
                    when=move || session.is_authenticated()
                    fallback=move || {
                        view! {
                            <button class="button" on:click=move |_| nav.goto(Page::Login)>
                                "Login"
                            </button>
                        }
                    }
                >
                    <button class="navbar__profile" on:click=move |_| nav.goto(Page::Profile)>
                        {icon("user")}
                        <span>
                            {move || {
                                session
                                    .current_user()
                                    .map(|user| user.name)
                                    .unwrap_or_else(|| "Account".to_string())
                            }}
                        </span>
                    </button>
                    <button class="button button--secondary" on:click=logout>
                        "Logout"
                    </button>
                </Show>
            </div>
        </header>
    }
}
