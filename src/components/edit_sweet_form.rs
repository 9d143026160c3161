//! Edit Sweet Form Component
//!
//! Modal editing category/price/quantity. Only the changed fields go to the
//! service; a draft identical to the current item never submits.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::input_value;
use crate::api;
use crate::context::AppContext;
use crate::models::{EditFields, Sweet};

#[component]
pub fn EditSweetForm(
    sweet: Sweet,
    #[prop(into)] on_saved: Callback<Sweet>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let initial = EditFields::from_sweet(&sweet);
    let (category, set_category) = signal(initial.category);
    let (price, set_price) = signal(initial.price);
    let (quantity, set_quantity) = signal(initial.quantity);
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let title = format!("Edit {}", sweet.name);
    let current = StoredValue::new(sweet);

    let patch = move || {
        let fields = EditFields {
            category: category.get(),
            price: price.get(),
            quantity: quantity.get(),
        };
        current.with_value(|sweet| fields.diff(sweet))
    };
    let blocked = move || patch().is_err();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let parsed = match patch() {
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
        let id = current.with_value(|sweet| sweet.id);

        spawn_local(async move {
            set_busy.set(true);
            set_error.set(None);
            match api::update(&token, id, &parsed).await {
                Ok(updated) => {
                    set_busy.set(false);
                    // on_saved closes the modal; no signal writes after it.
                    on_saved.run(updated);
                }
                Err(err) if err.is_auth_expired() => ctx.end_session(),
                Err(err) => {
                    log::warn!("update sweet {id} failed: {err}");
                    set_error.set(Some(err.to_string()));
                    set_busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <form class="edit-sweet-form" on:submit=submit>
                <h2>{title}</h2>

                {move || error.get().map(|msg| view! {
                    <p class="form-error">{msg}</p>
                })}

                <label>
                    "Category"
                    <input
                        type="text"
                        prop:value=move || category.get()
                        on:input=move |ev| set_category.set(input_value(&ev))
                    />
                </label>
                <label>
                    "Price"
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        prop:value=move || price.get()
                        on:input=move |ev| set_price.set(input_value(&ev))
                    />
                </label>
                <label>
                    "Quantity"
                    <input
                        type="number"
                        min="0"
                        step="1"
                        prop:value=move || quantity.get()
                        on:input=move |ev| set_quantity.set(input_value(&ev))
                    />
                </label>

                <div class="form-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" disabled=move || blocked() || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
