use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::{use_nav, Page};
use crate::shared::toast::use_toasts;
use crate::system::session::api;
use crate::system::session::context::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let nav = use_nav();
    let session = use_session();
    let toasts = use_toasts();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            let result = api::login(
                toasts,
                email.get_untracked(),
                password.get_untracked(),
            )
            .await;
            if let Some(auth) = result {
                session.save_session(&auth.access_token, &auth.user);
                nav.goto(Page::books());
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h2>"Sign in"</h2>
                <label>
                    "Email"
                    <input
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <button class="button button--primary" type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
