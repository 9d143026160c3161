//! Session model and localStorage persistence.
//!
//! The token/role pair survives reloads until explicit logout or an
//! auth-rejected response.

use web_sys::Storage;

const TOKEN_KEY: &str = "sweetshop_token";
const ROLE_KEY: &str = "sweetshop_role";

/// What the logged-in user is allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Customer,
}

impl Role {
    /// The service sends the role as free text; anything that is not
    /// "admin" browses and purchases only.
    pub fn parse(raw: &str) -> Self {
        if raw == "admin" {
            Role::Admin
        } else {
            Role::Customer
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Customer => "user",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Bearer credential plus role for the current user.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub role: Role,
}

impl Session {
    pub fn new(token: String, role: Role) -> Self {
        Self { token, role }
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Restore a persisted session, if both halves are present.
pub fn load() -> Option<Session> {
    let storage = local_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok()??;
    let role = storage.get_item(ROLE_KEY).ok()??;
    if token.is_empty() {
        return None;
    }
    Some(Session::new(token, Role::parse(&role)))
}

/// Persist the session created by login.
pub fn save(session: &Session) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, &session.token);
        let _ = storage.set_item(ROLE_KEY, session.role.as_str());
    }
}

/// Drop the persisted session on logout or auth failure.
pub fn clear() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(ROLE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_admin() {
        assert_eq!(Role::parse("admin"), Role::Admin);
    }

    #[test]
    fn test_role_parse_anything_else_is_customer() {
        assert_eq!(Role::parse("user"), Role::Customer);
        assert_eq!(Role::parse(""), Role::Customer);
        assert_eq!(Role::parse("ADMIN"), Role::Customer);
    }

    #[test]
    fn test_role_round_trip() {
        assert_eq!(Role::parse(Role::Admin.as_str()), Role::Admin);
        assert_eq!(Role::parse(Role::Customer.as_str()), Role::Customer);
    }
}
