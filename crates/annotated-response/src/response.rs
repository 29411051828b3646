//! The fluent response builder.

use std::fmt;
use std::ops::Range;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::body::{ResponseBody, UserMessage};
use crate::error::ResponseError;
use crate::result::{DefaultEnglish, ResultByCode};

/// Maximum byte length of a result keyword.
pub const MAX_RESULT_LEN: usize = 30;

/// Status codes accepted when lifting one off an error.
const HTTP_STATUS_RANGE: Range<u16> = 100..600;

/// An error that may carry an HTTP status code for its response.
///
/// [`AnnotatedResponse::from_error`] reads the carried code when building a
/// response from a failure. The provided default carries none, which leaves
/// the response at 500.
pub trait HttpStatusCode: std::error::Error {
    /// The HTTP status code this error suggests, if any.
    fn http_status_code(&self) -> Option<u16> {
        None
    }
}

// A rejected builder call can itself be answered with `from_error`.
// ResponseError carries no HTTP code, so such responses report 500.
impl HttpStatusCode for ResponseError {}

/// Builder for an annotated REST response.
///
/// Mutators borrow the builder and return it for chaining, in the
/// `std::process::Command` style; the fallible ones
/// ([`set_result`](Self::set_result), [`set_http_status`](Self::set_http_status))
/// leave the builder untouched and still usable on error. Serializing the
/// builder (or its [`body`](Self::body)) yields the JSON keys `result`,
/// `message`, `user_messages`, `data` in that order; the status code travels
/// separately, on the HTTP response line.
pub struct AnnotatedResponse {
    body: ResponseBody,
    status_code: u16,
    result_by_code: Box<dyn ResultByCode>,
}

impl AnnotatedResponse {
    /// Creates a builder with status 200, an empty body, and the
    /// [`DefaultEnglish`] result strategy.
    pub fn create() -> Self {
        AnnotatedResponse {
            body: ResponseBody::default(),
            status_code: 200,
            result_by_code: Box::new(DefaultEnglish),
        }
    }

    /// Creates a response describing a failed operation.
    ///
    /// The status is forced to 500 first, which derives the result keyword
    /// through the usual rule, then overridden with the error's carried code
    /// when that code lies in the HTTP response range. Codes outside the
    /// range are ignored. The error's `Display` text becomes the message.
    pub fn from_error<E>(error: &E) -> Self
    where
        E: HttpStatusCode + ?Sized,
    {
        let mut response = Self::create();
        response.derive_result(500);
        response.status_code = 500;
        if let Some(code) = error.http_status_code() {
            if HTTP_STATUS_RANGE.contains(&code) {
                response.derive_result(code);
                response.status_code = code;
            }
        }
        response.body.message = error.to_string();
        response
    }

    /// Replaces the strategy that derives result keywords from status codes.
    ///
    /// Affects future [`set_http_status`](Self::set_http_status) calls only;
    /// an already-set result is never altered retroactively.
    pub fn set_result_by_code(&mut self, result_by_code: impl ResultByCode + 'static) -> &mut Self {
        self.result_by_code = Box::new(result_by_code);
        self
    }

    /// Sets the result keyword, finishing the sentence "The request has
    /// ____", e.g. "succeeded", "failed", "created", "deleted".
    ///
    /// Normally the keyword is derived from the status code; setting one
    /// explicitly wins over any past or future derivation. Fails with
    /// [`ResponseError::ResultTooLong`] beyond [`MAX_RESULT_LEN`] bytes.
    pub fn set_result(&mut self, result: impl Into<String>) -> Result<&mut Self, ResponseError> {
        let result = result.into();
        if result.len() > MAX_RESULT_LEN {
            return Err(ResponseError::ResultTooLong { len: result.len() });
        }
        self.body.result = result;
        Ok(self)
    }

    /// Sets the HTTP status code for the response.
    ///
    /// While the result field is still empty, the code is first run through
    /// the result strategy and a non-empty keyword is applied under the same
    /// length cap as [`set_result`](Self::set_result); a failed cap check
    /// leaves both the result and the status unchanged.
    pub fn set_http_status(&mut self, code: u16) -> Result<&mut Self, ResponseError> {
        if self.body.result.is_empty() {
            let derived = self.result_by_code.classify(code);
            if !derived.is_empty() {
                self.set_result(derived)?;
            }
        }
        self.status_code = code;
        Ok(self)
    }

    /// The current HTTP status code.
    pub fn http_status(&self) -> u16 {
        self.status_code
    }

    /// Replaces the message describing the result to the client.
    ///
    /// Compare [`add_user_message`](Self::add_user_message), which targets
    /// the end user instead.
    pub fn set_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.body.message = message.into();
        self
    }

    /// Appends an end-user note with an empty context.
    pub fn add_user_message(
        &mut self,
        level: impl Into<String>,
        message: impl Into<String>,
    ) -> &mut Self {
        self.add_user_message_with_context(level, message, Map::new())
    }

    /// Appends an end-user note with structured context.
    ///
    /// `level` is conventionally one of the [`crate::level`] constants but
    /// is not validated. Notes serialize in call order.
    pub fn add_user_message_with_context(
        &mut self,
        level: impl Into<String>,
        message: impl Into<String>,
        context: Map<String, Value>,
    ) -> &mut Self {
        self.body.user_messages.push(UserMessage {
            level: level.into(),
            message: message.into(),
            context,
        });
        self
    }

    /// Replaces the data payload wholesale. No merging.
    pub fn set_data(&mut self, data: Value) -> &mut Self {
        self.body.data = data;
        self
    }

    /// Borrows the response body.
    pub fn body(&self) -> &ResponseBody {
        &self.body
    }

    /// Consumes the builder, returning the response body.
    pub fn into_body(self) -> ResponseBody {
        self.body
    }

    /// Derivation on the infallible constructor path.
    ///
    /// Strategy output that is empty or over the length cap is discarded
    /// rather than raised; the default strategy never produces either.
    fn derive_result(&mut self, code: u16) {
        if !self.body.result.is_empty() {
            return;
        }
        let derived = self.result_by_code.classify(code);
        if derived.is_empty() {
            return;
        }
        if derived.len() > MAX_RESULT_LEN {
            tracing::warn!(code, len = derived.len(), "discarding oversize derived result");
            return;
        }
        self.body.result = derived;
    }
}

impl Default for AnnotatedResponse {
    fn default() -> Self {
        Self::create()
    }
}

impl fmt::Debug for AnnotatedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnnotatedResponse")
            .field("body", &self.body)
            .field("status_code", &self.status_code)
            .finish_non_exhaustive()
    }
}

/// Serializes as the response body alone, mirroring [`Self::body`].
impl Serialize for AnnotatedResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.body.serialize(serializer)
    }
}
