use leptos::prelude::*;

use crate::domain::books::ui::details::BookDetailPage;
use crate::domain::books::ui::list::BooksPage;
use crate::domain::loans::ui::history::LoanHistoryPage;
use crate::layout::Layout;
use crate::routes::nav::{use_nav, Page};
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::profile::ProfilePage;
use crate::system::session::context::use_session;

/// Resolves the active page. Loan history and profile require a session;
/// without one the login page is shown in their place.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let nav = use_nav();
    let session = use_session();

    view! {
        <Layout>
            {move || match nav.page() {
                Page::Home => view! { <HomePage /> }.into_any(),
                Page::Books { search } => {
                    view! { <BooksPage initial_search=search.unwrap_or_default() /> }.into_any()
                }
                Page::BookDetail(id) => view! { <BookDetailPage book_id=id /> }.into_any(),
                Page::Loans => {
                    if session.is_authenticated() {
                        view! { <LoanHistoryPage /> }.into_any()
                    } else {
                        view! { <LoginPage /> }.into_any()
                    }
                }
                Page::Profile => {
                    if session.is_authenticated() {
                        view! { <ProfilePage /> }.into_any()
                    } else {
                        view! { <LoginPage /> }.into_any()
                    }
                }
                Page::Login => view! { <LoginPage /> }.into_any(),
            }}
        </Layout>
    }
}
