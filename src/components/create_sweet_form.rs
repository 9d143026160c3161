//! Create Sweet Form Component
//!
//! Collects and validates a draft, submits it, and hands the created sweet
//! back to the owning screen.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::input_value;
use crate::api;
use crate::context::AppContext;
use crate::models::{Sweet, SweetDraft};

/// Form for creating a new sweet. Submit stays disabled while the draft is
/// invalid or a request is in flight; on success the fields are cleared and
/// the form closes.
#[component]
pub fn CreateSweetForm(
    #[prop(into)] on_created: Callback<Sweet>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let draft = move || SweetDraft::parse(&name.get(), &category.get(), &price.get(), &quantity.get());
    let invalid = move || draft().is_err();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let parsed = match draft() {
            Ok(parsed) => parsed,
            Err(msg) => {
                set_error.set(Some(msg));
                return;
            }
        };
        let Some(token) = ctx.token() else {
            ctx.end_session();
            return;
        };

        spawn_local(async move {
            set_busy.set(true);
            set_error.set(None);
            match api::create(&token, &parsed).await {
                Ok(created) => {
                    // Clear own state before the callbacks unmount this form.
                    set_name.set(String::new());
                    set_category.set(String::new());
                    set_price.set(String::new());
                    set_quantity.set(String::new());
                    set_busy.set(false);
                    on_created.run(created);
                    on_close.run(());
                }
                Err(err) if err.is_auth_expired() => ctx.end_session(),
                Err(err) => {
                    log::warn!("create sweet failed: {err}");
                    set_error.set(Some(err.to_string()));
                    set_busy.set(false);
                }
            }
        });
    };

    view! {
        <form class="create-sweet-form" on:submit=submit>
            <h2>"Create New Sweet"</h2>

            {move || error.get().map(|msg| view! {
                <p class="form-error">{msg}</p>
            })}

            <label>
                "Sweet Name *"
                <input
                    type="text"
                    placeholder="Enter sweet name..."
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(input_value(&ev))
                />
            </label>
            <label>
                "Category *"
                <input
                    type="text"
                    placeholder="e.g., Chocolate, Candy, Gummy..."
                    prop:value=move || category.get()
                    on:input=move |ev| set_category.set(input_value(&ev))
                />
            </label>
            <label>
                "Price ($) *"
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="0.00"
                    prop:value=move || price.get()
                    on:input=move |ev| set_price.set(input_value(&ev))
                />
            </label>
            <label>
                "Initial Stock *"
                <input
                    type="number"
                    min="0"
                    step="1"
                    placeholder="0"
                    prop:value=move || quantity.get()
                    on:input=move |ev| set_quantity.set(input_value(&ev))
                />
            </label>

            <div class="form-actions">
                <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button type="submit" disabled=move || invalid() || busy.get()>
                    {move || if busy.get() { "Creating Sweet..." } else { "Create Sweet" }}
                </button>
            </div>

            <p class="form-hint">
                {move || if invalid() {
                    "Please fill all required fields (*)"
                } else {
                    "Ready to create!"
                }}
            </p>
        </form>
    }
}
