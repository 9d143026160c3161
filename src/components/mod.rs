//! UI Components
//!
//! Reusable Leptos components shared by the shop and admin screens.

mod create_sweet_form;
mod delete_confirm_button;
mod edit_sweet_form;
mod filter_bar;
mod restock_dialog;

pub use create_sweet_form::CreateSweetForm;
pub use delete_confirm_button::DeleteConfirmButton;
pub use edit_sweet_form::EditSweetForm;
pub use filter_bar::FilterBar;
pub use restock_dialog::RestockDialog;

use wasm_bindgen::JsCast;

/// Current value of the `<input>` that fired this event.
pub(crate) fn input_value(ev: &web_sys::Event) -> String {
    let target = ev.target().unwrap();
    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
    input.value()
}
