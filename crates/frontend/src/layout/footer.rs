use leptos::prelude::*;

use crate::shared::icons::icon;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__brand">
                {icon("library")}
                <span>"BookAccess"</span>
            </div>
            <p class="footer__tagline">"Borrow physical books and download eBooks from one place."</p>
            <p class="footer__copy">"© 2026 BookAccess Library"</p>
        </footer>
    }
}
