//! Restock Dialog Component
//!
//! Modal asking for the amount to add. Submit is disabled until the amount
//! parses to a positive integer, so an invalid amount never hits the network.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::input_value;
use crate::api;
use crate::context::AppContext;
use crate::models::{parse_restock_amount, Sweet};

#[component]
pub fn RestockDialog(
    sweet: Sweet,
    #[prop(into)] on_restocked: Callback<Sweet>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (amount, set_amount) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let title = format!("Restock {}", sweet.name);
    let id = sweet.id;

    let invalid = move || parse_restock_amount(&amount.get()).is_none();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(parsed) = parse_restock_amount(&amount.get()) else {
            set_error.set(Some("Amount must be a positive whole number".to_string()));
            return;
        };
        let Some(token) = ctx.token() else {
            ctx.end_session();
            return;
        };

        spawn_local(async move {
            set_busy.set(true);
            set_error.set(None);
            match api::restock(&token, id, parsed).await {
                Ok(updated) => {
                    set_amount.set(String::new());
                    set_busy.set(false);
                    // on_restocked closes the dialog; no signal writes after it.
                    on_restocked.run(updated);
                }
                Err(err) if err.is_auth_expired() => ctx.end_session(),
                Err(err) => {
                    log::warn!("restock sweet {id} failed: {err}");
                    set_error.set(Some(err.to_string()));
                    set_busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <form class="restock-dialog" on:submit=submit>
                <h2>{title}</h2>
                <p>"Add more items to your inventory"</p>

                {move || error.get().map(|msg| view! {
                    <p class="form-error">{msg}</p>
                })}

                <label>
                    "Quantity to Add"
                    <input
                        type="number"
                        min="1"
                        step="1"
                        placeholder="Enter amount to add..."
                        prop:value=move || amount.get()
                        on:input=move |ev| set_amount.set(input_value(&ev))
                    />
                </label>

                <div class="form-actions">
                    <button
                        type="button"
                        class="cancel-btn"
                        disabled=move || busy.get()
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                    <button type="submit" disabled=move || invalid() || busy.get()>
                        {move || if busy.get() { "Restocking..." } else { "Confirm Restock" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
