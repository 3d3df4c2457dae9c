use contracts::auth::UserStats;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::{use_nav, Page};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use crate::system::session::api;
use crate::system::session::context::use_session;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let nav = use_nav();
    let session = use_session();
    let toasts = use_toasts();

    let (stats, set_stats) = signal(Option::<UserStats>::None);
    spawn_local(async move {
        if let Some(fetched) = api::fetch_user_stats(toasts).await {
            set_stats.set(Some(fetched));
        }
    });

    let logout = move |_| {
        session.clear_session();
        nav.goto(Page::Home);
    };

    view! {
        <div class="profile-page">
            <section class="profile-card">
                {move || {
                    session
                        .current_user()
                        .map(|user| {
                            view! {
                                <div class="profile-card__identity">
                                    {icon("user")}
                                    <h2>{user.name}</h2>
                                </div>
                                <p class="profile-card__row">
                                    {icon("mail")}
                                    <span>{user.email}</span>
                                </p>
                                <p class="profile-card__row">
                                    {icon("shield")}
                                    <span>{user.role.as_str()}</span>
                                </p>
                                {user
                                    .created_at
                                    .map(|created| {
                                        view! {
                                            <p class="profile-card__row">
                                                {icon("calendar")}
                                                <span>"Member since " {format_date(&created)}</span>
                                            </p>
                                        }
                                    })}
                            }
                                .into_any()
                        })
                        .unwrap_or_else(|| view! { <p>"No active session."</p> }.into_any())
                }}
                <button class="button button--secondary" on:click=logout>
                    "Logout"
                </button>
            </section>

            <section class="profile-stats">
                <h3>"Your activity"</h3>
                {move || match stats.get() {
                    Some(stats) => view! {
                        <ul class="profile-stats__grid">
                            <li>
                                <strong>{stats.total_active_loan}</strong>
                                <span>"Active loans"</span>
                            </li>
                            <li>
                                <strong>{stats.total_pending_loan}</strong>
                                <span>"Pending requests"</span>
                            </li>
                            <li>
                                <strong>{stats.total_returned_loan}</strong>
                                <span>"Returned"</span>
                            </li>
                            <li>
                                <strong>{stats.total_overdue_loan}</strong>
                                <span>"Overdue"</span>
                            </li>
                            <li>
                                <strong>{stats.total_review_written}</strong>
                                <span>"Reviews written"</span>
                            </li>
                        </ul>
                    }
                        .into_any(),
                    None => view! { <p class="muted">"Loading activity..."</p> }.into_any(),
                }}
            </section>

            <ChangePasswordForm />
        </div>
    }
}

#[component]
fn ChangePasswordForm() -> impl IntoView {
    let toasts = use_toasts();

    let (current, set_current) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirmation, set_confirmation) = signal(String::new());
    let (mismatch, set_mismatch) = signal(false);
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        // Confirmation mismatch is caught before the request goes out.
        if password.get_untracked() != confirmation.get_untracked() {
            set_mismatch.set(true);
            return;
        }
        set_mismatch.set(false);
        set_loading.set(true);
        spawn_local(async move {
            let ok = api::change_password(
                toasts,
                current.get_untracked(),
                password.get_untracked(),
                confirmation.get_untracked(),
            )
            .await;
            if ok {
                set_current.set(String::new());
                set_password.set(String::new());
                set_confirmation.set(String::new());
            }
            set_loading.set(false);
        });
    };

    view! {
        <section class="profile-password">
            <h3>"Change password"</h3>
            <form on:submit=on_submit>
                <label>
                    "Current password"
                    <input
                        type="password"
                        required
                        prop:value=move || current.get()
                        on:input=move |ev| set_current.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "New password"
                    <input
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Confirm new password"
                    <input
                        type="password"
                        required
                        prop:value=move || confirmation.get()
                        on:input=move |ev| set_confirmation.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || mismatch.get()>
                    <p class="form-error">"Passwords do not match"</p>
                </Show>
                <button class="button button--primary" type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Saving..." } else { "Update password" }}
                </button>
            </form>
        </section>
    }
}
