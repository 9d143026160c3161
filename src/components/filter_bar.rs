//! Filter Bar Component
//!
//! Search criteria inputs shared by the shop and admin screens. The filter is
//! rebuilt from the fields on every apply; nothing is persisted.

use leptos::prelude::*;

use super::input_value;
use crate::models::SweetFilter;

/// Name/category/price-range inputs plus an apply button.
#[component]
pub fn FilterBar(
    #[prop(into)] on_apply: Callback<SweetFilter>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (min_price, set_min_price) = signal(String::new());
    let (max_price, set_max_price) = signal(String::new());

    let apply = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_apply.run(SweetFilter {
            name: name.get(),
            category: category.get(),
            min_price: min_price.get(),
            max_price: max_price.get(),
        });
    };

    view! {
        <form class="filter-bar" on:submit=apply>
            <input
                type="text"
                placeholder="Search sweets..."
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(input_value(&ev))
            />
            <input
                type="text"
                placeholder="Category"
                prop:value=move || category.get()
                on:input=move |ev| set_category.set(input_value(&ev))
            />
            <input
                type="number"
                placeholder="Min Price ($)"
                prop:value=move || min_price.get()
                on:input=move |ev| set_min_price.set(input_value(&ev))
            />
            <input
                type="number"
                placeholder="Max Price ($)"
                prop:value=move || max_price.get()
                on:input=move |ev| set_max_price.set(input_value(&ev))
            />
            <button type="submit" disabled=move || loading.get()>
                {move || if loading.get() { "Searching..." } else { "Search" }}
            </button>
        </form>
    }
}
