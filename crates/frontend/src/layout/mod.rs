pub mod footer;
pub mod navbar;

use leptos::prelude::*;

use crate::shared::toast::Toaster;
use footer::Footer;
use navbar::Navbar;

/// Application shell: navbar, page content, footer and the toast stack.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="app">
            <Navbar />
            <main class="app__content">{children()}</main>
            <Footer />
            <Toaster />
        </div>
    }
}
