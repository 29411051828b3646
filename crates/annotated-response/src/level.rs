//! Severity names for user messages.
//!
//! The level vocabulary is open:
//! [`add_user_message`](crate::AnnotatedResponse::add_user_message) accepts
//! any string. These constants cover the conventional RFC 5424 set for
//! callers that want it.

pub const EMERGENCY: &str = "emergency";
pub const ALERT: &str = "alert";
pub const CRITICAL: &str = "critical";
pub const ERROR: &str = "error";
pub const WARNING: &str = "warning";
pub const NOTICE: &str = "notice";
pub const INFO: &str = "info";
pub const DEBUG: &str = "debug";
