//! Response writing and error translation for the controller API.
//!
//! Every handler terminates through exactly one of [`success`] or
//! [`failure`]. The error translator maps a store's [`DomainError`]
//! classification onto an HTTP status by a fixed table; anything that is
//! not a domain error maps to 500 with its own description as the message.

use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use tracing::{debug, error, warn};

use nimbus_core::{DomainError, ErrorKind};

/// Resolves the HTTP status for an error value.
///
/// Domain errors map by classification; everything else is a 500.
#[must_use]
pub fn error_status(err: &anyhow::Error) -> StatusCode {
    match err.downcast_ref::<DomainError>() {
        Some(domain) => match domain.kind {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
            ErrorKind::NoSpace => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorKind::NotAuthorized => StatusCode::FORBIDDEN,
            ErrorKind::Unspecified => StatusCode::INTERNAL_SERVER_ERROR,
        },
        None => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Resolves (status, message) for an error value and logs the outcome.
///
/// The log record is the only side effect; the full error chain goes to a
/// debug record as a diagnostic aid and never influences the result.
#[must_use]
pub fn translate(err: &anyhow::Error) -> (StatusCode, String) {
    let status = error_status(err);
    let message = match err.downcast_ref::<DomainError>() {
        Some(domain) => domain.message.clone(),
        None => err.to_string(),
    };
    error!(status = status.as_u16(), %message, "request failed");
    debug!(chain = ?err, "error detail");
    (status, message)
}

/// Writes a success response carrying the exact payload bytes.
///
/// The payload is opaque store output, so no content-type is asserted.
/// If the response cannot be constructed, the error path is entered once
/// with the construction failure as the error value.
#[must_use]
pub fn success(payload: Bytes) -> Response {
    write_success(axum::http::Response::builder().status(StatusCode::OK), payload)
}

/// Writes the payload into a prepared response builder.
///
/// Split from [`success`] so the fallback arm stays exercisable: a builder
/// carrying an accumulated error makes `body` fail.
fn write_success(builder: axum::http::response::Builder, payload: Bytes) -> Response {
    match builder.body(Body::from(payload)) {
        Ok(response) => response,
        // This will probably fail to reach the client too, but try anyway.
        Err(err) => failure(&anyhow::Error::new(err)),
    }
}

/// Writes the terminal error response for a request.
///
/// Translation resolves the status and plain-text message. If even the
/// error response cannot be built, the failure is logged and swallowed,
/// and a bare 500 goes out. No retries beyond that single fallback.
#[must_use]
pub fn failure(err: &anyhow::Error) -> Response {
    let (status, message) = translate(err);
    match axum::http::Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(Body::from(message))
    {
        Ok(response) => response,
        Err(build_err) => {
            warn!(error = %build_err, "error response construction failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain(kind: ErrorKind) -> anyhow::Error {
        DomainError::new(kind, "store says no").into()
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            error_status(&domain(ErrorKind::NotFound)),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn invalid_argument_maps_to_400() {
        assert_eq!(
            error_status(&domain(ErrorKind::InvalidArgument)),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn no_space_maps_to_500() {
        assert_eq!(
            error_status(&domain(ErrorKind::NoSpace)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_authorized_maps_to_403() {
        assert_eq!(
            error_status(&domain(ErrorKind::NotAuthorized)),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn unspecified_maps_to_500() {
        assert_eq!(
            error_status(&domain(ErrorKind::Unspecified)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn non_domain_error_maps_to_500_with_own_message() {
        let err = anyhow::anyhow!("connection reset by peer");
        let (status, message) = translate(&err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "connection reset by peer");
    }

    #[test]
    fn domain_error_message_passes_through_unmodified() {
        let (status, message) = translate(&domain(ErrorKind::NotFound));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(message, "store says no");
    }

    #[tokio::test]
    async fn success_writes_exact_payload() {
        let payload = Bytes::from_static(b"\x00opaque bytes\xff");
        let response = success(payload.clone());
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body, payload);
    }

    #[tokio::test]
    async fn success_write_failure_falls_back_to_error_path_once() {
        // An invalid header poisons the builder, so the body write fails
        // and the error path produces the terminal response instead.
        let builder = axum::http::Response::builder()
            .status(StatusCode::OK)
            .header("", "broken");
        let response = write_success(builder, Bytes::from_static(b"payload"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert!(!body_string(response).await.is_empty());
    }

    #[tokio::test]
    async fn failure_writes_status_and_plain_text_message() {
        let response = failure(&domain(ErrorKind::NotAuthorized));
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(body_string(response).await, "store says no");
    }
}
