//! Inbound response model and the response interceptor rules.
//!
//! # Responsibilities
//! - Describe a completed transport exchange (status and envelope)
//! - Detect the envelope-level "login required" signal (`errorNo == 403`)
//! - Compute the localized message for a failed exchange
//!
//! # Design Decisions
//! - `errorNo` is compared with JavaScript loose equality, since the server
//!   may send it as a number or a string
//! - Failures without a status produce no message

use serde_json::Value;

use crate::http::error::HttpError;
use crate::http::status::{classify, FailurePolicy, REAUTH_STATUS};
use crate::i18n::{self, Lang, MessageKey};

/// Envelope field carrying the application error number.
pub const ERROR_NO_FIELD: &str = "errorNo";

/// A response that completed at the transport level (2xx).
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    /// The application envelope.
    pub body: Value,
}

/// True when the envelope asks the client to log in again.
pub fn envelope_requires_login(envelope: &Value) -> bool {
    envelope
        .get(ERROR_NO_FIELD)
        .and_then(loose_number)
        .is_some_and(|n| n == f64::from(REAUTH_STATUS))
}

/// Message key and localized text for a failure, or `None` when there is
/// nothing to report.
pub fn failure_message(lang: Lang, error: &HttpError) -> Option<(MessageKey, &'static str)> {
    match classify(error.status()?) {
        FailurePolicy::Notify(key) => Some((key, i18n::text(lang, key))),
        FailurePolicy::Reauthenticate => None,
    }
}

/// Numeric value of `value` under JavaScript `==` against a number.
///
/// `None` stands for NaN or a value that never equals a number (`null`, objects).
fn loose_number(value: &Value) -> Option<f64> {
    match value {
        Value::Null | Value::Object(_) => None,
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => string_to_number(s),
        Value::Array(items) => match items.as_slice() {
            [] | [Value::Null] => Some(0.0),
            [item @ (Value::Number(_) | Value::String(_) | Value::Array(_))] => loose_number(item),
            _ => None,
        },
    }
}

fn string_to_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    let radix = |prefixes: [&str; 2], base: u32| {
        prefixes
            .iter()
            .find_map(|p| s.strip_prefix(*p))
            .map(|digits| u64::from_str_radix(digits, base).ok().map(|n| n as f64))
    };
    if let Some(n) = radix(["0x", "0X"], 16)
        .or_else(|| radix(["0o", "0O"], 8))
        .or_else(|| radix(["0b", "0B"], 2))
    {
        return n;
    }
    // Rust accepts "inf"/"nan" spellings that JavaScript does not; neither equals a status.
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}
