//! Localization subsystem.
//!
//! # Data Flow
//! ```text
//! PMAIL_LANG / config `lang` (config::loader)
//!     → Lang::from (lenient, unknown codes fall back to English)
//!     → captured once by the HTTP client at construction
//!     → `Lang` request header + catalog.rs lookups for failure messages
//! ```
//!
//! # Design Decisions
//! - Language is a closed enum, not a free-form string
//! - Catalog lookups are total: every key has a text in every language

pub mod catalog;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use catalog::{text, MessageKey};

/// Environment variable consulted for the active language by the config loader.
pub const LANG_ENV: &str = "PMAIL_LANG";

/// Languages the web client ships strings for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Lang {
    /// Simplified Chinese, wire code `zhCn`.
    ZhCn,
    #[default]
    En,
}

impl Lang {
    /// The code sent in the `Lang` header.
    pub fn code(self) -> &'static str {
        match self {
            Lang::ZhCn => "zhCn",
            Lang::En => "en",
        }
    }
}

impl From<&str> for Lang {
    fn from(code: &str) -> Self {
        match code.trim() {
            "zhCn" | "zh-CN" | "zh_CN" | "zh" => Lang::ZhCn,
            _ => Lang::En,
        }
    }
}

impl From<String> for Lang {
    fn from(code: String) -> Self {
        Lang::from(code.as_str())
    }
}

impl From<Lang> for String {
    fn from(lang: Lang) -> Self {
        lang.code().to_string()
    }
}

impl FromStr for Lang {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Lang::from(s))
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
