//! Message catalog for user-facing strings.

use crate::i18n::Lang;

/// Keys for every string the client can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    BadRequest,
    AddressError,
    Timeout,
    InternalError,
    NotImplemented,
    BadGateway,
    ServiceUnavailable,
    GatewayTimeout,
    VersionNotSupported,
    RequestFailed,
}

impl MessageKey {
    /// Stable identifier, logged as the `key` field of failure events.
    pub fn id(self) -> &'static str {
        match self {
            MessageKey::BadRequest => "bad_request",
            MessageKey::AddressError => "address_error",
            MessageKey::Timeout => "timeout",
            MessageKey::InternalError => "internal_error",
            MessageKey::NotImplemented => "not_implemented",
            MessageKey::BadGateway => "bad_gateway",
            MessageKey::ServiceUnavailable => "service_unavailable",
            MessageKey::GatewayTimeout => "gateway_timeout",
            MessageKey::VersionNotSupported => "version_not_supported",
            MessageKey::RequestFailed => "request_failed",
        }
    }
}

/// Look up the text for `key` in `lang`.
pub fn text(lang: Lang, key: MessageKey) -> &'static str {
    match lang {
        Lang::ZhCn => zh_cn(key),
        Lang::En => en(key),
    }
}

fn en(key: MessageKey) -> &'static str {
    match key {
        MessageKey::BadRequest => "Bad request",
        MessageKey::AddressError => "Request address error",
        MessageKey::Timeout => "Request timeout",
        MessageKey::InternalError => "Internal server error",
        MessageKey::NotImplemented => "Not implemented",
        MessageKey::BadGateway => "Bad gateway",
        MessageKey::ServiceUnavailable => "Service unavailable",
        MessageKey::GatewayTimeout => "Gateway timeout",
        MessageKey::VersionNotSupported => "HTTP version not supported",
        MessageKey::RequestFailed => "Request failed",
    }
}

fn zh_cn(key: MessageKey) -> &'static str {
    match key {
        MessageKey::BadRequest => "请求错误",
        MessageKey::AddressError => "请求地址出错",
        MessageKey::Timeout => "请求超时",
        MessageKey::InternalError => "服务器内部错误!",
        MessageKey::NotImplemented => "服务未实现!",
        MessageKey::BadGateway => "网关错误!",
        MessageKey::ServiceUnavailable => "服务不可用!",
        MessageKey::GatewayTimeout => "网关超时!",
        MessageKey::VersionNotSupported => "HTTP版本不受支持",
        MessageKey::RequestFailed => "请求失败",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [MessageKey; 10] = [
        MessageKey::BadRequest,
        MessageKey::AddressError,
        MessageKey::Timeout,
        MessageKey::InternalError,
        MessageKey::NotImplemented,
        MessageKey::BadGateway,
        MessageKey::ServiceUnavailable,
        MessageKey::GatewayTimeout,
        MessageKey::VersionNotSupported,
        MessageKey::RequestFailed,
    ];

    #[test]
    fn test_english_texts() {
        assert_eq!(text(Lang::En, MessageKey::BadRequest), "Bad request");
        assert_eq!(text(Lang::En, MessageKey::RequestFailed), "Request failed");
    }

    #[test]
    fn test_chinese_texts() {
        assert_eq!(text(Lang::ZhCn, MessageKey::GatewayTimeout), "网关超时!");
        assert_eq!(text(Lang::ZhCn, MessageKey::RequestFailed), "请求失败");
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: std::collections::HashSet<_> = ALL.iter().map(|k| k.id()).collect();
        assert_eq!(ids.len(), ALL.len());
    }

    #[test]
    fn test_every_key_translated() {
        for key in ALL {
            assert_ne!(text(Lang::En, key), text(Lang::ZhCn, key), "{key:?}");
        }
    }
}
