//! Screens
//!
//! One component per screen, each owning the list it displays.

mod admin;
mod login;
mod shop;
mod signup;

pub use admin::AdminPage;
pub use login::LoginPage;
pub use shop::ShopPage;
pub use signup::SignupPage;

/// Fetch lifecycle for a catalog screen. Re-enters Loading whenever a fetch
/// is triggered by mount or by a filter apply.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_state_default_is_idle() {
        assert_eq!(LoadState::default(), LoadState::Idle);
    }

    #[test]
    fn test_only_loading_is_loading() {
        assert!(LoadState::Loading.is_loading());
        assert!(!LoadState::Idle.is_loading());
        assert!(!LoadState::Loaded.is_loading());
        assert!(!LoadState::Failed("x".into()).is_loading());
    }
}
