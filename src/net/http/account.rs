use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::ApiError;
use crate::Registry;
use crate::models::account::{Account, AccountInput};
use crate::models::types::AccountId;

type ApiResult<T> = Result<T, ApiError>;

pub(super) async fn create(
    State(registry): State<Arc<Registry>>,
    payload: Result<Json<AccountInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Account>)> {
    let Json(input) = payload?;
    let account = registry.services.account.create(input).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

pub(super) async fn get_all(State(registry): State<Arc<Registry>>) -> ApiResult<Json<Vec<Account>>> {
    Ok(Json(registry.services.account.get_all().await?))
}

pub(super) async fn get_by_id(
    State(registry): State<Arc<Registry>>,
    Path(id): Path<AccountId>,
) -> ApiResult<Response> {
    Ok(found_or_404(registry.services.account.get_by_id(id).await?))
}

pub(super) async fn update(
    State(registry): State<Arc<Registry>>,
    Path(id): Path<AccountId>,
    payload: Result<Json<AccountInput>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(input) = payload?;
    Ok(found_or_404(registry.services.account.update(id, input).await?))
}

pub(super) async fn delete_by_id(
    State(registry): State<Arc<Registry>>,
    Path(id): Path<AccountId>,
) -> ApiResult<StatusCode> {
    registry.services.account.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn found_or_404(account: Option<Account>) -> Response {
    match account {
        Some(account) => Json(account).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
