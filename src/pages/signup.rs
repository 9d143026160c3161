//! Signup screen.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::input_value;
use crate::context::{AppContext, Screen};

#[component]
pub fn SignupPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let (success, set_success) = signal(Option::<String>::None);

    let username_ok = move || username.with(|u| u.trim().len() >= 3);
    let email_ok = move || email.with(|e| e.contains('@') && e.contains('.'));
    let password_ok = move || password.with(|p| p.len() >= 6);
    let invalid = move || !(username_ok() && email_ok() && password_ok());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || invalid() {
            return;
        }
        let user = username.get();
        let mail = email.get();
        let pass = password.get();

        spawn_local(async move {
            set_busy.set(true);
            set_error.set(None);
            set_success.set(None);
            match api::register(&user, &mail, &pass).await {
                Ok(()) => {
                    set_success.set(Some(
                        "Account created successfully! Redirecting to login...".to_string(),
                    ));
                    TimeoutFuture::new(1_500).await;
                    ctx.goto(Screen::Login);
                }
                Err(err) => {
                    log::warn!("signup failed: {err}");
                    set_error.set(Some(err.to_string()));
                    set_busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=submit>
                <h1>"Join Sweet Shop"</h1>
                <p>"Create your account to get started"</p>

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
                        placeholder="At least 3 characters"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(input_value(&ev))
                    />
                    <Show when=move || !username.get().is_empty() && !username_ok()>
                        <span class="field-hint">"Username must be at least 3 characters"</span>
                    </Show>
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(input_value(&ev))
                    />
                    <Show when=move || !email.get().is_empty() && !email_ok()>
                        <span class="field-hint">"Enter a valid email address"</span>
                    </Show>
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        placeholder="At least 6 characters"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(input_value(&ev))
                    />
                    <Show when=move || !password.get().is_empty() && !password_ok()>
                        <span class="field-hint">"Password must be at least 6 characters"</span>
                    </Show>
                </label>

                <button type="submit" disabled=move || invalid() || busy.get()>
                    {move || if busy.get() { "Creating Account..." } else { "Create Account" }}
                </button>

                <p class="auth-switch">
                    "Already have an account? "
                    <a href="#" on:click=move |ev: web_sys::MouseEvent| {
                        ev.prevent_default();
                        ctx.goto(Screen::Login);
                    }>
                        "Sign in"
                    </a>
                </p>
            </form>
        </div>
    }
}
