//! Controller API: route table, handlers, and response writing.
//!
//! The route table is registered once at startup and never mutated.
//! Dispatch is exact method + pattern matching with placeholder
//! extraction; unknown paths fall back to 404 and known paths with an
//! unregistered method to 405, without invoking any handler or store.

pub mod handlers;
pub mod middleware;
pub mod respond;

pub use handlers::IDENTITY;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::config::ServerConfig;
use crate::traits::ResourceStore;
use self::middleware::build_http_layers;

/// Shared application state passed to all handlers via `State` extraction.
///
/// The dispatcher holds independent per-kind store references rather than
/// one embedded super-object; each field is a capability handle injected
/// at construction.
#[derive(Clone)]
pub struct ApiState {
    /// Store collaborator for functions.
    pub functions: Arc<dyn ResourceStore>,
    /// Store collaborator for HTTP triggers.
    pub http_triggers: Arc<dyn ResourceStore>,
    /// Store collaborator for environments. Routes over it are reserved
    /// and only registered with the `environments` feature.
    pub environments: Arc<dyn ResourceStore>,
}

/// Assembles the axum router with all routes and middleware.
///
/// Routes (five verbs per resource kind plus the root identity check):
/// - `GET /` -- liveness/identity, static text
/// - `GET|POST /functions`, `GET|PUT|DELETE /functions/{function}`
/// - `GET|POST /triggers/http`, `GET|PUT|DELETE /triggers/http/{httpTrigger}`
/// - `/environments/...` -- same shape, behind the `environments` feature
#[must_use]
pub fn build_router(state: ApiState, config: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/", get(handlers::home))
        .route(
            "/functions",
            get(handlers::function_list).post(handlers::function_create),
        )
        .route(
            "/functions/{function}",
            get(handlers::function_get)
                .put(handlers::function_update)
                .delete(handlers::function_delete),
        )
        .route(
            "/triggers/http",
            get(handlers::http_trigger_list).post(handlers::http_trigger_create),
        )
        .route(
            "/triggers/http/{httpTrigger}",
            get(handlers::http_trigger_get)
                .put(handlers::http_trigger_update)
                .delete(handlers::http_trigger_delete),
        );

    #[cfg(feature = "environments")]
    let router = router
        .route(
            "/environments",
            get(handlers::environment_list).post(handlers::environment_create),
        )
        .route(
            "/environments/{environment}",
            get(handlers::environment_get)
                .put(handlers::environment_update)
                .delete(handlers::environment_delete),
        );

    router.layer(build_http_layers(config)).with_state(state)
}
