use leptos::prelude::*;

use crate::routes::{AppRoutes, Nav};
use crate::shared::toast::Toasts;
use crate::system::session::context::SessionService;

#[component]
pub fn App() -> impl IntoView {
    // Session state is restored from localStorage and broadcast to every
    // observer through the service's epoch signal.
    provide_context(SessionService::new());

    // Single transient notification channel for the whole app.
    provide_context(Toasts::new());

    // Page switching with URL query synchronization.
    let nav = Nav::new();
    provide_context(nav);
    nav.init_url_sync();

    view! {
        <AppRoutes />
    }
}
