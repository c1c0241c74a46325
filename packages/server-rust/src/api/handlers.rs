//! Route handlers for the controller API.
//!
//! Handlers are deliberately thin: extract the identifier and payload,
//! invoke one store operation, and terminate through the respond module.
//! They never interpret domain errors; translation happens in one place.

use axum::extract::{Path, State};
use axum::response::Response;
use bytes::Bytes;

use super::respond;
use super::ApiState;
use crate::traits::ResourceStore;

/// Static identity text served on the root path.
pub const IDENTITY: &str = "Nimbus API";

/// Liveness/identity check. No store involved.
pub async fn home() -> &'static str {
    IDENTITY
}

async fn list(store: &dyn ResourceStore) -> Response {
    match store.list().await {
        Ok(payload) => respond::success(payload),
        Err(err) => respond::failure(&err),
    }
}

async fn create(store: &dyn ResourceStore, payload: Bytes) -> Response {
    match store.create(payload).await {
        Ok(payload) => respond::success(payload),
        Err(err) => respond::failure(&err),
    }
}

async fn get(store: &dyn ResourceStore, name: &str) -> Response {
    match store.get(name).await {
        Ok(payload) => respond::success(payload),
        Err(err) => respond::failure(&err),
    }
}

async fn update(store: &dyn ResourceStore, name: &str, payload: Bytes) -> Response {
    match store.update(name, payload).await {
        Ok(payload) => respond::success(payload),
        Err(err) => respond::failure(&err),
    }
}

async fn delete(store: &dyn ResourceStore, name: &str) -> Response {
    match store.delete(name).await {
        Ok(payload) => respond::success(payload),
        Err(err) => respond::failure(&err),
    }
}

// --- Functions ---

pub async fn function_list(State(state): State<ApiState>) -> Response {
    list(state.functions.as_ref()).await
}

pub async fn function_create(State(state): State<ApiState>, payload: Bytes) -> Response {
    create(state.functions.as_ref(), payload).await
}

pub async fn function_get(State(state): State<ApiState>, Path(name): Path<String>) -> Response {
    get(state.functions.as_ref(), &name).await
}

pub async fn function_update(
    State(state): State<ApiState>,
    Path(name): Path<String>,
    payload: Bytes,
) -> Response {
    update(state.functions.as_ref(), &name, payload).await
}

pub async fn function_delete(State(state): State<ApiState>, Path(name): Path<String>) -> Response {
    delete(state.functions.as_ref(), &name).await
}

// --- HTTP triggers ---

pub async fn http_trigger_list(State(state): State<ApiState>) -> Response {
    list(state.http_triggers.as_ref()).await
}

pub async fn http_trigger_create(State(state): State<ApiState>, payload: Bytes) -> Response {
    create(state.http_triggers.as_ref(), payload).await
}

pub async fn http_trigger_get(State(state): State<ApiState>, Path(name): Path<String>) -> Response {
    get(state.http_triggers.as_ref(), &name).await
}

pub async fn http_trigger_update(
    State(state): State<ApiState>,
    Path(name): Path<String>,
    payload: Bytes,
) -> Response {
    update(state.http_triggers.as_ref(), &name, payload).await
}

pub async fn http_trigger_delete(
    State(state): State<ApiState>,
    Path(name): Path<String>,
) -> Response {
    delete(state.http_triggers.as_ref(), &name).await
}

// --- Environments (reserved; compiled behind the `environments` feature) ---

#[cfg(feature = "environments")]
pub async fn environment_list(State(state): State<ApiState>) -> Response {
    list(state.environments.as_ref()).await
}

#[cfg(feature = "environments")]
pub async fn environment_create(State(state): State<ApiState>, payload: Bytes) -> Response {
    create(state.environments.as_ref(), payload).await
}

#[cfg(feature = "environments")]
pub async fn environment_get(State(state): State<ApiState>, Path(name): Path<String>) -> Response {
    get(state.environments.as_ref(), &name).await
}

#[cfg(feature = "environments")]
pub async fn environment_update(
    State(state): State<ApiState>,
    Path(name): Path<String>,
    payload: Bytes,
) -> Response {
    update(state.environments.as_ref(), &name, payload).await
}

#[cfg(feature = "environments")]
pub async fn environment_delete(
    State(state): State<ApiState>,
    Path(name): Path<String>,
) -> Response {
    delete(state.environments.as_ref(), &name).await
}
