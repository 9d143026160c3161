//! Login and registration calls.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use super::{decode, error_detail, form_encode, net, ApiResult, BASE_URL};
use crate::error::ApiError;
use crate::session::{Role, Session};

#[derive(Deserialize)]
struct LoginResponse {
    access_token: String,
    role: String,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Exchange credentials for a bearer token and role.
///
/// The service expects the oauth2 password-grant form body. A 401 here is a
/// wrong password, not an expired session, so the `detail` text is surfaced
/// as a validation failure.
pub async fn login(username: &str, password: &str) -> ApiResult<Session> {
    let body = form_encode(&[
        ("grant_type", "password"),
        ("username", username),
        ("password", password),
        ("scope", ""),
        ("client_id", "string"),
        ("client_secret", "string"),
    ]);

    let response = Request::post(&format!("{BASE_URL}/auth/login"))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(net)?
        .send()
        .await
        .map_err(net)?;

    if !response.ok() {
        let detail = error_detail(response).await;
        return Err(ApiError::Validation(
            detail.unwrap_or_else(|| "Invalid username or password".to_string()),
        ));
    }

    let payload: LoginResponse = response.json().await.map_err(decode)?;
    log::info!("logged in as role {}", payload.role);
    Ok(Session::new(payload.access_token, Role::parse(&payload.role)))
}

/// Create a new customer account.
pub async fn register(username: &str, email: &str, password: &str) -> ApiResult<()> {
    let response = Request::post(&format!("{BASE_URL}/auth/register"))
        .json(&RegisterRequest {
            username,
            email,
            password,
        })
        .map_err(net)?
        .send()
        .await
        .map_err(net)?;

    if !response.ok() {
        let detail = error_detail(response).await;
        return Err(ApiError::Validation(
            detail.unwrap_or_else(|| "Registration failed. Please try again.".to_string()),
        ));
    }
    Ok(())
}
