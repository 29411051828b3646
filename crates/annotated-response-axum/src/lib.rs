//! Axum adapter for [`annotated_response`].
//!
//! [`JsonResponse`] turns a finished
//! [`AnnotatedResponse`](annotated_response::AnnotatedResponse) into a
//! wire-level JSON response: the serialized body, the builder's status code,
//! and any caller-supplied headers. No transformation logic of its own.
//!
//! ```
//! use annotated_response::AnnotatedResponse;
//! use annotated_response_axum::JsonResponse;
//!
//! async fn not_acceptable() -> JsonResponse {
//!     let mut response = AnnotatedResponse::create();
//!     if let Err(error) = response.set_http_status(406) {
//!         return JsonResponse::new(AnnotatedResponse::from_error(&error));
//!     }
//!     response.set_message("Event can't be loaded.");
//!     JsonResponse::new(response)
//! }
//! ```

use annotated_response::AnnotatedResponse;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

/// A JSON HTTP response built from an [`AnnotatedResponse`].
///
/// Composition only: body = the serialized response body, status =
/// [`http_status`](AnnotatedResponse::http_status), plus any headers handed
/// to [`with_headers`](Self::with_headers).
#[derive(Debug)]
pub struct JsonResponse {
    response: AnnotatedResponse,
    headers: HeaderMap,
}

impl JsonResponse {
    /// Wraps `response` with no extra headers.
    pub fn new(response: AnnotatedResponse) -> Self {
        JsonResponse {
            response,
            headers: HeaderMap::new(),
        }
    }

    /// Wraps `response`, appending `headers` to the response head.
    pub fn with_headers(response: AnnotatedResponse, headers: HeaderMap) -> Self {
        JsonResponse { response, headers }
    }
}

impl From<AnnotatedResponse> for JsonResponse {
    fn from(response: AnnotatedResponse) -> Self {
        JsonResponse::new(response)
    }
}

impl IntoResponse for JsonResponse {
    fn into_response(self) -> Response {
        let status = response_status(&self.response);
        (status, self.headers, Json(self.response.into_body())).into_response()
    }
}

/// Converts the builder's status code, falling back to 500 for codes
/// outside the 100..=999 range `http::StatusCode` can represent.
fn response_status(response: &AnnotatedResponse) -> StatusCode {
    let code = response.http_status();
    StatusCode::from_u16(code).unwrap_or_else(|_| {
        tracing::warn!(code, "status code not representable over HTTP, responding 500");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
