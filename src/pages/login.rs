//! Login screen.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::input_value;
use crate::context::{AppContext, Screen};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let (success, set_success) = signal(Option::<String>::None);

    let invalid = move || {
        username.with(|u| u.trim().is_empty()) || password.with(|p| p.trim().is_empty())
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || invalid() {
            return;
        }
        let user = username.get();
        let pass = password.get();

        spawn_local(async move {
            set_busy.set(true);
            set_error.set(None);
            set_success.set(None);
            match api::login(&user, &pass).await {
                Ok(session) => {
                    ctx.start_session(session);
                    set_success.set(Some(format!("Welcome back, {user}!")));
                    // Let the banner show before switching screens. This page
                    // unmounts on goto, so no signal writes after it.
                    TimeoutFuture::new(1_000).await;
                    ctx.goto(Screen::Shop);
                }
                Err(err) => {
                    log::warn!("login failed: {err}");
                    set_error.set(Some(err.to_string()));
                    set_busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=submit>
                <h1>"Welcome Back"</h1>

                {move || success.get().map(|msg| view! {
                    <p class="auth-success">{msg}</p>
                })}
                {move || error.get().map(|msg| view! {
                    <p class="auth-error">{msg}</p>
                })}

                <label>
                    "Username"
                    <input
                        type="text"
                        placeholder="Enter your username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(input_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(input_value(&ev))
                    />
                </label>

                <button type="submit" disabled=move || invalid() || busy.get()>
                    {move || if busy.get() { "Signing In..." } else { "Sign In" }}
                </button>

                <p class="auth-switch">
                    "New to Sweet Shop? "
                    <a href="#" on:click=move |ev: web_sys::MouseEvent| {
                        ev.prevent_default();
                        ctx.goto(Screen::Signup);
                    }>
                        "Create an account"
                    </a>
                </p>
            </form>
        </div>
    }
}
