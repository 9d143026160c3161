//! Application Context
//!
//! Session and navigation state provided via Leptos Context API.

use leptos::prelude::*;

use crate::session::{self, Session};

/// Which screen the shell is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Signup,
    Shop,
    Admin,
}

/// App-wide signals provided via context.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active screen - read
    pub screen: ReadSignal<Screen>,
    set_screen: WriteSignal<Screen>,
    /// Current session, None when logged out - read
    pub session: ReadSignal<Option<Session>>,
    set_session: WriteSignal<Option<Session>>,
}

impl AppContext {
    pub fn new(
        screen: (ReadSignal<Screen>, WriteSignal<Screen>),
        session: (ReadSignal<Option<Session>>, WriteSignal<Option<Session>>),
    ) -> Self {
        Self {
            screen: screen.0,
            set_screen: screen.1,
            session: session.0,
            set_session: session.1,
        }
    }

    pub fn goto(&self, screen: Screen) {
        self.set_screen.set(screen);
    }

    /// Persist and activate the session created by login.
    pub fn start_session(&self, new_session: Session) {
        session::save(&new_session);
        self.set_session.set(Some(new_session));
    }

    /// Tear the session down and land on the login screen.
    /// Used for explicit logout and for auth-rejected responses alike.
    pub fn end_session(&self) {
        session::clear();
        self.set_session.set(None);
        self.set_screen.set(Screen::Login);
    }

    /// Bearer token for an authenticated request, if logged in.
    pub fn token(&self) -> Option<String> {
        self.session
            .with_untracked(|s| s.as_ref().map(|sess| sess.token.clone()))
    }

    /// Reactive admin check for gating admin-only chrome.
    pub fn is_admin(&self) -> bool {
        self.session
            .with(|s| s.as_ref().map(|sess| sess.role.is_admin()).unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goto_is_visible_through_the_screen_signal() {
        let ctx = AppContext::new(signal(Screen::Login), signal(None::<Session>));
        assert_eq!(ctx.screen.get_untracked(), Screen::Login);
        ctx.goto(Screen::Signup);
        assert_eq!(ctx.screen.get_untracked(), Screen::Signup);
    }
}
