//! The serializable response record.
//!
//! [`ResponseBody`] is the plain structured value an
//! [`AnnotatedResponse`](crate::AnnotatedResponse) projects to. Serde field
//! order fixes the wire key order: `result`, `message`, `user_messages`,
//! `data`.

use serde::Serialize;
use serde_json::{Map, Value};

/// A log-leveled, end-user-facing note.
///
/// Distinct from the primary [`ResponseBody::message`], which describes the
/// result to the client application rather than to a person.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserMessage {
    /// Severity name, conventionally one of the [`crate::level`] constants.
    /// The vocabulary is open; nothing validates it.
    pub level: String,
    /// The note itself.
    pub message: String,
    /// Arbitrary structured context for the note.
    pub context: Map<String, Value>,
}

/// The response payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseBody {
    /// A word or phrase finishing the sentence "The request has ____",
    /// e.g. "succeeded", "failed", "created". At most 30 bytes.
    pub result: String,
    /// Free-form description of the result for the client.
    pub message: String,
    /// End-user notes in insertion order.
    pub user_messages: Vec<UserMessage>,
    /// Arbitrary payload, replaced wholesale on assignment.
    pub data: Value,
}

impl Default for ResponseBody {
    fn default() -> Self {
        ResponseBody {
            result: String::new(),
            message: String::new(),
            user_messages: Vec::new(),
            data: Value::Object(Map::new()),
        }
    }
}
