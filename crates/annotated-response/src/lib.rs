//! Structured, annotated payloads for REST responses.
//!
//! [`AnnotatedResponse`] is a fluent builder that accumulates a result
//! keyword, a client-facing message, leveled user messages, and an arbitrary
//! data payload, then serializes them as a fixed-shape JSON body alongside an
//! HTTP status code. The result keyword defaults from the status code
//! ("succeeded", "created", "failed") through a swappable [`ResultByCode`]
//! strategy unless it was set explicitly.
//!
//! ```
//! use annotated_response::AnnotatedResponse;
//!
//! let mut response = AnnotatedResponse::create();
//! response
//!     .set_http_status(406)?
//!     .set_message("Event can't be loaded.");
//!
//! assert_eq!(response.http_status(), 406);
//! assert_eq!(response.body().result, "failed");
//! # Ok::<(), annotated_response::ResponseError>(())
//! ```
//!
//! Responding to a failed operation:
//!
//! ```
//! use annotated_response::{AnnotatedResponse, HttpStatusCode};
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("Access denied")]
//! struct AccessDenied;
//!
//! impl HttpStatusCode for AccessDenied {
//!     fn http_status_code(&self) -> Option<u16> {
//!         Some(403)
//!     }
//! }
//!
//! let response = AnnotatedResponse::from_error(&AccessDenied);
//! assert_eq!(response.http_status(), 403);
//! assert_eq!(response.body().message, "Access denied");
//! ```

pub mod body;
pub mod error;
pub mod level;
pub mod response;
pub mod result;

// Re-export the public surface
pub use body::{ResponseBody, UserMessage};
pub use error::ResponseError;
pub use response::{AnnotatedResponse, HttpStatusCode, MAX_RESULT_LEN};
pub use result::{DefaultEnglish, ResultByCode};
