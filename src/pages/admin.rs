//! Admin inventory management screen.
//!
//! Admin-only: the shell never routes a non-admin here. Owns the displayed
//! list; every successful mutation patches the matching entry in place.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::LoadState;
use crate::api;
use crate::catalog::{append_sweet, remove_sweet, replace_sweet, CatalogStats};
use crate::components::{
    CreateSweetForm, DeleteConfirmButton, EditSweetForm, FilterBar, RestockDialog,
};
use crate::context::{AppContext, Screen};
use crate::models::{Sweet, SweetFilter};

#[component]
pub fn AdminPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (sweets, set_sweets) = signal(Vec::<Sweet>::new());
    let (state, set_state) = signal(LoadState::default());
    let (notice, set_notice) = signal(Option::<String>::None);
    let (show_create, set_show_create) = signal(false);
    let (editing, set_editing) = signal(Option::<Sweet>::None);
    let (restocking, set_restocking) = signal(Option::<Sweet>::None);
    let (deleting, set_deleting) = signal(Option::<u32>::None);

    let fetch = move |filter: SweetFilter| {
        let Some(token) = ctx.token() else {
            ctx.end_session();
            return;
        };
        spawn_local(async move {
            set_state.set(LoadState::Loading);
            match api::search(&token, &filter).await {
                Ok(list) => {
                    set_sweets.set(list);
                    set_state.set(LoadState::Loaded);
                }
                Err(err) if err.is_auth_expired() => ctx.end_session(),
                Err(err) => set_state.set(LoadState::Failed(err.to_string())),
            }
        });
    };

    Effect::new(move |_| {
        fetch(SweetFilter::default());
    });

    let delete = move |id: u32| {
        let Some(token) = ctx.token() else {
            ctx.end_session();
            return;
        };
        spawn_local(async move {
            set_deleting.set(Some(id));
            set_notice.set(None);
            match api::remove(&token, id).await {
                Ok(()) => {
                    set_sweets.update(|list| remove_sweet(list, id));
                    set_notice.set(Some("Sweet deleted!".to_string()));
                }
                Err(err) if err.is_auth_expired() => {
                    ctx.end_session();
                    return;
                }
                Err(err) => {
                    log::warn!("delete sweet {id} failed: {err}");
                    set_notice.set(Some(err.to_string()));
                }
            }
            set_deleting.set(None);
        });
    };

    let stats = move || CatalogStats::compute(&sweets.get());

    view! {
        <div class="admin-page">
            <header class="page-header">
                <button on:click=move |_| ctx.goto(Screen::Shop)>"Back to Shop"</button>
                <h1>"Admin Dashboard"</h1>
                <p>"Manage your sweet inventory"</p>
                <div class="header-actions">
                    <button on:click=move |_| set_show_create.update(|v| *v = !*v)>
                        {move || if show_create.get() { "Close Form" } else { "Add New Sweet" }}
                    </button>
                    <button class="logout-btn" on:click=move |_| ctx.end_session()>"Logout"</button>
                </div>
            </header>

            <div class="stats-row">
                <div class="stat-card">
                    <span>"Total Sweets"</span>
                    <strong>{move || stats().total_sweets}</strong>
                </div>
                <div class="stat-card">
                    <span>"Total Stock"</span>
                    <strong>{move || stats().total_stock}</strong>
                </div>
                <div class="stat-card">
                    <span>"Out of Stock"</span>
                    <strong>{move || stats().out_of_stock}</strong>
                </div>
                <div class="stat-card">
                    <span>"Avg Price"</span>
                    <strong>{move || format!("${:.2}", stats().avg_price)}</strong>
                </div>
            </div>

            <FilterBar
                on_apply=move |filter| fetch(filter)
                loading=Signal::derive(move || state.get().is_loading())
            />

            <Show when=move || show_create.get()>
                <CreateSweetForm
                    on_created=move |created: Sweet| {
                        set_sweets.update(|list| append_sweet(list, created));
                    }
                    on_close=move |_| set_show_create.set(false)
                />
            </Show>

            {move || notice.get().map(|msg| view! {
                <p class="notice-banner">{msg}</p>
            })}

            {move || match state.get() {
                LoadState::Failed(msg) => view! {
                    <p class="load-error">{msg}</p>
                }.into_any(),
                LoadState::Idle | LoadState::Loading => view! {
                    <p class="loading">"Loading sweet inventory..."</p>
                }.into_any(),
                LoadState::Loaded => view! {
                    <div class="sweet-grid">
                        {move || sweets.get().into_iter().map(|sweet| {
                            let id = sweet.id;
                            let for_edit = sweet.clone();
                            let for_restock = sweet.clone();

                            view! {
                                <div class="sweet-card">
                                    <h3>{sweet.name.clone()}</h3>
                                    <span class="sweet-category">{sweet.category.clone()}</span>
                                    <p class="sweet-price">{format!("${:.2}", sweet.price)}</p>
                                    {if sweet.quantity > 0 {
                                        view! { <p class="sweet-stock">{sweet.quantity} " in stock"</p> }.into_any()
                                    } else {
                                        view! { <p class="sweet-stock out">"Out of Stock"</p> }.into_any()
                                    }}

                                    <div class="card-actions">
                                        <button on:click=move |_| set_editing.set(Some(for_edit.clone()))>
                                            "Edit"
                                        </button>
                                        <button on:click=move |_| set_restocking.set(Some(for_restock.clone()))>
                                            "Restock"
                                        </button>
                                        <DeleteConfirmButton
                                            label="Delete Sweet"
                                            busy=Signal::derive(move || deleting.get() == Some(id))
                                            on_confirm=move |_| delete(id)
                                        />
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_any(),
            }}

            <Show when=move || state.get() == LoadState::Loaded && sweets.get().is_empty()>
                <div class="empty-state">
                    <h3>"No sweets found"</h3>
                    <p>"Get started by adding your first sweet to the inventory!"</p>
                    <button on:click=move |_| set_show_create.set(true)>"Add Your First Sweet"</button>
                </div>
            </Show>

            {move || editing.get().map(|sweet| view! {
                <EditSweetForm
                    sweet=sweet
                    on_saved=move |updated: Sweet| {
                        set_sweets.update(|list| replace_sweet(list, updated));
                        set_editing.set(None);
                    }
                    on_cancel=move |_| set_editing.set(None)
                />
            })}

            {move || restocking.get().map(|sweet| view! {
                <RestockDialog
                    sweet=sweet
                    on_restocked=move |updated: Sweet| {
                        set_sweets.update(|list| replace_sweet(list, updated));
                        set_restocking.set(None);
                    }
                    on_cancel=move |_| set_restocking.set(None)
                />
            })}
        </div>
    }
}
