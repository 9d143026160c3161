//! Catalog endpoint calls. Every operation attaches the bearer token and
//! returns either the parsed payload or a typed failure.

use gloo_net::http::Request;

use super::{bearer, decode, fail, net, ApiResult, BASE_URL};
use crate::error::ApiError;
use crate::models::{Sweet, SweetDraft, SweetFilter, SweetPatch};

/// Fetch the catalog, optionally narrowed by filter criteria.
/// An empty filter returns everything; ordering is the service's.
pub async fn search(token: &str, filter: &SweetFilter) -> ApiResult<Vec<Sweet>> {
    let response = Request::get(&format!("{BASE_URL}/sweets/search"))
        .query(filter.query_pairs())
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(net)?;

    if !response.ok() {
        return Err(fail(response).await);
    }
    response.json().await.map_err(decode)
}

/// Create a sweet; the service assigns the id.
pub async fn create(token: &str, draft: &SweetDraft) -> ApiResult<Sweet> {
    let response = Request::post(&format!("{BASE_URL}/sweets/"))
        .header("Authorization", &bearer(token))
        .json(draft)
        .map_err(net)?
        .send()
        .await
        .map_err(net)?;

    if !response.ok() {
        return Err(fail(response).await);
    }
    response.json().await.map_err(decode)
}

/// Send only the changed fields; the caller diffs before calling.
pub async fn update(token: &str, id: u32, patch: &SweetPatch) -> ApiResult<Sweet> {
    let response = Request::patch(&format!("{BASE_URL}/sweets/{id}"))
        .header("Authorization", &bearer(token))
        .json(patch)
        .map_err(net)?
        .send()
        .await
        .map_err(net)?;

    if !response.ok() {
        return Err(fail(response).await);
    }
    response.json().await.map_err(decode)
}

/// Delete a sweet. A second call on the same id fails with NotFound.
pub async fn remove(token: &str, id: u32) -> ApiResult<()> {
    let response = Request::delete(&format!("{BASE_URL}/sweets/{id}"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(net)?;

    if !response.ok() {
        return Err(fail(response).await);
    }
    Ok(())
}

/// Increase stock by `amount` (validated positive by the caller; the service
/// rejects non-positive amounts as well).
pub async fn restock(token: &str, id: u32, amount: u32) -> ApiResult<Sweet> {
    let response = Request::post(&format!("{BASE_URL}/sweets/{id}/restock"))
        .query([("amount", amount.to_string())])
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(net)?;

    if !response.ok() {
        return Err(fail(response).await);
    }
    response.json().await.map_err(decode)
}

/// Decrement stock by exactly one unit. The service's rejection is
/// authoritative: a 400 here means the sweet ran out.
pub async fn purchase(token: &str, id: u32) -> ApiResult<Sweet> {
    let response = Request::post(&format!("{BASE_URL}/sweets/{id}/purchase"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(net)?;

    if !response.ok() {
        return Err(match fail(response).await {
            ApiError::Validation(detail) => ApiError::OutOfStock(detail),
            other => other,
        });
    }
    response.json().await.map_err(decode)
}
