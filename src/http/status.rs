//! Failure status classification.

use crate::i18n::MessageKey;

/// Status that sends the user back to the login screen.
pub const REAUTH_STATUS: u16 = 403;

/// What the facade does with a failed response carrying `status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Produce the localized message for this key.
    Notify(MessageKey),
    /// No message; redirect to login.
    Reauthenticate,
}

/// Classify an HTTP failure status.
pub fn classify(status: u16) -> FailurePolicy {
    let key = match status {
        400 | 401 => MessageKey::BadRequest,
        REAUTH_STATUS => return FailurePolicy::Reauthenticate,
        404 => MessageKey::AddressError,
        408 => MessageKey::Timeout,
        500 => MessageKey::InternalError,
        501 => MessageKey::NotImplemented,
        502 => MessageKey::BadGateway,
        503 => MessageKey::ServiceUnavailable,
        504 => MessageKey::GatewayTimeout,
        505 => MessageKey::VersionNotSupported,
        _ => MessageKey::RequestFailed,
    };
    FailurePolicy::Notify(key)
}
