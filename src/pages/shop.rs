//! Customer catalog screen.
//!
//! Owns the displayed list. Fetches on mount and on filter apply; purchases
//! patch the matching entry from each server response.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::LoadState;
use crate::api;
use crate::catalog::replace_sweet;
use crate::components::{input_value, FilterBar};
use crate::context::{AppContext, Screen};
use crate::models::{parse_purchase_qty, Sweet, SweetFilter};

#[component]
pub fn ShopPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (sweets, set_sweets) = signal(Vec::<Sweet>::new());
    let (state, set_state) = signal(LoadState::default());
    let (notice, set_notice) = signal(Option::<String>::None);
    let (purchasing, set_purchasing) = signal(Option::<u32>::None);

    let fetch = move |filter: SweetFilter| {
        let Some(token) = ctx.token() else {
            ctx.end_session();
            return;
        };
        spawn_local(async move {
            set_state.set(LoadState::Loading);
            match api::search(&token, &filter).await {
                Ok(list) => {
                    log::debug!("loaded {} sweets", list.len());
                    set_sweets.set(list);
                    set_state.set(LoadState::Loaded);
                }
                Err(err) if err.is_auth_expired() => ctx.end_session(),
                Err(err) => set_state.set(LoadState::Failed(err.to_string())),
            }
        });
    };

    // Initial load at screen activation.
    Effect::new(move |_| {
        fetch(SweetFilter::default());
    });

    // Sequential single-unit purchases; stops at the first failure, leaving
    // any partial progress visible.
    let purchase = move |id: u32, qty: u32| {
        let Some(token) = ctx.token() else {
            ctx.end_session();
            return;
        };
        spawn_local(async move {
            set_purchasing.set(Some(id));
            for _ in 0..qty {
                match api::purchase(&token, id).await {
                    Ok(updated) => set_sweets.update(|list| replace_sweet(list, updated)),
                    Err(err) if err.is_auth_expired() => {
                        ctx.end_session();
                        return;
                    }
                    Err(err) => {
                        log::warn!("purchase of sweet {id} failed: {err}");
                        set_notice.set(Some(err.to_string()));
                        set_purchasing.set(None);
                        return;
                    }
                }
            }
            set_notice.set(Some("Purchase successful!".to_string()));
            set_purchasing.set(None);
        });
    };

    let is_admin = move || ctx.is_admin();

    view! {
        <div class="shop-page">
            <header class="page-header">
                <h1>"Sweet Shop"</h1>
                <p>
                    {move || if is_admin() {
                        "Welcome back, Admin!"
                    } else {
                        "Welcome back, Sweet Lover!"
                    }}
                </p>
                <div class="header-actions">
                    <Show when=is_admin>
                        <button on:click=move |_| ctx.goto(Screen::Admin)>"Admin Panel"</button>
                    </Show>
                    <button class="logout-btn" on:click=move |_| ctx.end_session()>"Logout"</button>
                </div>
            </header>

            <FilterBar
                on_apply=move |filter| fetch(filter)
                loading=Signal::derive(move || state.get().is_loading())
            />

            {move || notice.get().map(|msg| view! {
                <p class="notice-banner">{msg}</p>
            })}

            {move || match state.get() {
                LoadState::Failed(msg) => view! {
                    <p class="load-error">{msg}</p>
                }.into_any(),
                LoadState::Idle | LoadState::Loading => view! {
                    <p class="loading">"Loading delicious sweets..."</p>
                }.into_any(),
                LoadState::Loaded => view! {
                    <div class="sweet-grid">
                        {move || sweets.get().into_iter().map(|sweet| {
                            let id = sweet.id;
                            let available = sweet.quantity;
                            let (qty, set_qty) = signal("1".to_string());
                            let busy = move || purchasing.get() == Some(id);

                            let buy = move |_: web_sys::MouseEvent| {
                                set_notice.set(None);
                                match parse_purchase_qty(&qty.get(), available) {
                                    Ok(count) => purchase(id, count),
                                    Err(msg) => set_notice.set(Some(msg)),
                                }
                            };

                            view! {
                                <div class="sweet-card">
                                    <h3>{sweet.name.clone()}</h3>
                                    <span class="sweet-category">{sweet.category.clone()}</span>
                                    <p class="sweet-price">{format!("${:.2}", sweet.price)}</p>
                                    {if available > 0 {
                                        view! { <p class="sweet-stock">{available} " in stock"</p> }.into_any()
                                    } else {
                                        view! { <p class="sweet-stock out">"Out of Stock"</p> }.into_any()
                                    }}

                                    <Show when=move || !is_admin()>
                                        <div class="purchase-controls">
                                            <input
                                                type="number"
                                                min="1"
                                                step="1"
                                                prop:value=move || qty.get()
                                                disabled=available == 0
                                                on:input=move |ev| set_qty.set(input_value(&ev))
                                            />
                                            <button
                                                disabled=move || available == 0 || busy()
                                                on:click=buy
                                            >
                                                {move || if busy() {
                                                    "Purchasing..."
                                                } else if available > 0 {
                                                    "Add to Cart"
                                                } else {
                                                    "Out of Stock"
                                                }}
                                            </button>
                                        </div>
                                    </Show>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_any(),
            }}

            <Show when=move || state.get() == LoadState::Loaded && sweets.get().is_empty()>
                <div class="empty-state">
                    <h3>"No sweets found"</h3>
                    <p>"Try adjusting your search filters to find more delicious treats!"</p>
                </div>
            </Show>
        </div>
    }
}
