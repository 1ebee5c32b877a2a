// SPDX-License-Identifier: MPL-2.0
use crate::locale::LocaleId;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    InvalidLocale(String),
    NotRegistered(LocaleId),
    Bundle { locale: LocaleId, message: String },
    /// No candidate in the lookup chain (fallback included) produced a catalog.
    LocaleUnavailable(LocaleId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::InvalidLocale(tag) => write!(f, "Invalid locale identifier: {:?}", tag),
            Error::NotRegistered(locale) => write!(f, "No loader registered for locale {}", locale),
            Error::Bundle { locale, message } => {
                write!(f, "Bundle Error ({}): {}", locale, message)
            }
            Error::LocaleUnavailable(locale) => {
                write!(f, "No translations available for locale {} or its fallbacks", locale)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
