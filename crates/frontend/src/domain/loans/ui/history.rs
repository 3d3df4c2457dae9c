use contracts::loans::{BookLoan, LoanStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::loans::api;
use crate::shared::date_utils::{format_date, suggested_extension_date, today};
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

/// Loan history with status tabs, return action and due-date extension.
#[component]
pub fn LoanHistoryPage() -> impl IntoView {
    let toasts = use_toasts();

    let (loans, set_loans) = signal(Vec::<BookLoan>::new());
    let (loading, set_loading) = signal(true);
    let (active_tab, set_active_tab) = signal(Option::<LoanStatus>::None);
    let (action_loading, set_action_loading) = signal(false);

    // Extension dialog state; `None` means closed.
    let (dialog_loan, set_dialog_loan) = signal(Option::<BookLoan>::None);
    let (extension_date, set_extension_date) = signal(String::new());
    let (extension_reason, set_extension_reason) = signal(String::new());

    let reload = move || {
        set_loading.set(true);
        spawn_local(async move {
            let fetched = api::fetch_loans(toasts, active_tab.get_untracked()).await;
            set_loans.set(fetched.unwrap_or_default());
            set_loading.set(false);
        });
    };

    // Covers the initial load too; reruns whenever the tab changes.
    Effect::new(move |_| {
        active_tab.track();
        reload();
    });

    let return_loan = move |loan_id: i64| {
        if action_loading.get_untracked() {
            return;
        }
        set_action_loading.set(true);
        spawn_local(async move {
            if api::return_loan(toasts, loan_id).await {
                reload();
            }
            set_action_loading.set(false);
        });
    };

    let open_extension = move |loan: BookLoan| {
        set_extension_date.set(suggested_extension_date(loan.due_date.as_deref(), today()));
        set_extension_reason.set(String::new());
        set_dialog_loan.set(Some(loan));
    };

    let submit_extension = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if action_loading.get_untracked() {
            return;
        }
        let Some(loan) = dialog_loan.get_untracked() else {
            return;
        };
        set_action_loading.set(true);
        spawn_local(async move {
            let ok = api::request_extension(
                toasts,
                loan.id,
                extension_date.get_untracked(),
                extension_reason.get_untracked(),
            )
            .await;
            if ok {
                set_dialog_loan.set(None);
                reload();
            }
            set_action_loading.set(false);
        });
    };

    let tab_button = move |label: &'static str, status: Option<LoanStatus>| {
        view! {
            <button
                class=move || {
                    if active_tab.get() == status { "tab tab--active" } else { "tab" }
                }
                on:click=move |_| set_active_tab.set(status)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="loans-page">
            <h1>"My Loans"</h1>

            <div class="loans-page__tabs">
                {tab_button("All", None)}
                {tab_button("Pending", Some(LoanStatus::Pending))}
                {tab_button("Active", Some(LoanStatus::Approved))}
                {tab_button("Returned", Some(LoanStatus::Returned))}
            </div>

            {move || {
                if loading.get() {
                    return view! { <p class="muted">"Loading loans..."</p> }.into_any();
                }
                let loans = loans.get();
                if loans.is_empty() {
                    return view! {
                        <p class="muted">"No loans here yet. Request a book from the catalog."</p>
                    }
                        .into_any();
                }
                loans
                    .into_iter()
                    .map(|loan| {
                        let loan_id = loan.id;
                        let can_act = loan.status == LoanStatus::Approved
                            && loan.returned_at.is_none();
                        let dialog_target = loan.clone();
                        view! {
                            <article class="loan-card">
                                <header class="loan-card__header">
                                    <div>
                                        <h3>{loan.book.title.clone()}</h3>
                                        <p class="loan-card__author">{loan.book.author.clone()}</p>
                                    </div>
                                    <span class=format!(
                                        "status-chip status-chip--{}",
                                        loan.status.as_str(),
                                    )>{status_icon(loan.status)} {loan.status.label()}</span>
                                </header>

                                <dl class="loan-card__dates">
                                    <div>
                                        <dt>"Requested"</dt>
                                        <dd>{format_date(&loan.requested_at)}</dd>
                                    </div>
                                    {loan
                                        .approved_at
                                        .as_deref()
                                        .map(|d| {
                                            view! {
                                                <div>
                                                    <dt>"Approved"</dt>
                                                    <dd>{format_date(d)}</dd>
                                                </div>
                                            }
                                        })}
                                    {loan
                                        .due_date
                                        .as_deref()
                                        .map(|d| {
                                            view! {
                                                <div>
                                                    <dt>"Due"</dt>
                                                    <dd>{format_date(d)}</dd>
                                                </div>
                                            }
                                        })}
                                    {loan
                                        .returned_at
                                        .as_deref()
                                        .map(|d| {
                                            view! {
                                                <div>
                                                    <dt>"Returned"</dt>
                                                    <dd>{format_date(d)}</dd>
                                                </div>
                                            }
                                        })}
                                </dl>

                                {can_act
                                    .then(|| {
                                        let dialog_target = dialog_target.clone();
                                        view! {
                                            <footer class="loan-card__actions">
                                                <button
                                                    class="button"
                                                    disabled=move || action_loading.get()
                                                    on:click=move |_| return_loan(loan_id)
                                                >
                                                    {icon("return")}
                                                    "Return"
                                                </button>
                                                <button
                                                    class="button button--secondary"
                                                    disabled=move || action_loading.get()
                                                    on:click=move |_| open_extension(
                                                        dialog_target.clone(),
                                                    )
                                                >
                                                    {icon("refresh")}
                                                    "Request Extension"
                                                </button>
                                            </footer>
                                        }
                                    })}
                            </article>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}

            <Show when=move || dialog_loan.get().is_some()>
                <div class="dialog-overlay" on:click=move |_| set_dialog_loan.set(None)>
                    <form
                        class="dialog"
                        on:click=move |ev| ev.stop_propagation()
                        on:submit=submit_extension
                    >
                        <h3>"Request due date extension"</h3>
                        <label>
                            "New due date"
                            <input
                                type="date"
                                required
                                prop:value=move || extension_date.get()
                                on:input=move |ev| set_extension_date.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Reason"
                            <input
                                type="text"
                                required
                                placeholder="Why do you need more time?"
                                prop:value=move || extension_reason.get()
                                on:input=move |ev| {
                                    set_extension_reason.set(event_target_value(&ev))
                                }
                            />
                        </label>
                        <div class="dialog__actions">
                            <button
                                class="button button--secondary"
                                type="button"
                                on:click=move |_| set_dialog_loan.set(None)
                            >
                                "Cancel"
                            </button>
                            <button
                                class="button button--primary"
                                type="submit"
                                disabled=move || action_loading.get()
                            >
                                {move || {
                                    if action_loading.get() { "Sending..." } else { "Submit" }
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </Show>
        </div>
    }
}

fn status_icon(status: LoanStatus) -> AnyView {
    match status {
        LoanStatus::Pending => icon("clock"),
        LoanStatus::Approved => icon("check"),
        LoanStatus::Rejected => icon("x"),
        LoanStatus::Returned => icon("return"),
    }
}
