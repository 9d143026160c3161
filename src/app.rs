//! Sweet Shop Frontend App
//!
//! Shell component: session bootstrap, screen switching and the auth/role
//! guard in front of every screen.

use leptos::prelude::*;

use crate::context::{AppContext, Screen};
use crate::pages::{AdminPage, LoginPage, ShopPage, SignupPage};
use crate::session;

#[component]
pub fn App() -> impl IntoView {
    // Restore a persisted session so a reload stays logged in.
    let restored = session::load();
    let initial = if restored.is_some() {
        Screen::Shop
    } else {
        Screen::Login
    };

    let (screen, set_screen) = signal(initial);
    let (current_session, set_session) = signal(restored);

    let ctx = AppContext::new((screen, set_screen), (current_session, set_session));
    provide_context(ctx);

    // Guard: unauthenticated users always land on login; non-admins never
    // stay on the admin screen. Login/signup stay reachable while logged in
    // so the post-login banner can show before navigating.
    Effect::new(move |_| {
        let logged_in = ctx.session.with(|s| s.is_some());
        match ctx.screen.get() {
            Screen::Shop | Screen::Admin if !logged_in => ctx.goto(Screen::Login),
            Screen::Admin if !ctx.is_admin() => ctx.goto(Screen::Shop),
            _ => {}
        }
    });

    // The render match applies the same rules, so a guarded screen never
    // flashes before the effect settles.
    view! {
        <div class="app-shell">
            {move || {
                let logged_in = ctx.session.with(|s| s.is_some());
                match ctx.screen.get() {
                    Screen::Login => view! { <LoginPage /> }.into_any(),
                    Screen::Signup => view! { <SignupPage /> }.into_any(),
                    Screen::Admin if logged_in && ctx.is_admin() => {
                        view! { <AdminPage /> }.into_any()
                    }
                    Screen::Shop | Screen::Admin if logged_in => {
                        view! { <ShopPage /> }.into_any()
                    }
                    _ => view! { <LoginPage /> }.into_any(),
                }
            }}
        </div>
    }
}
