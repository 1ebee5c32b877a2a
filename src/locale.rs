// SPDX-License-Identifier: MPL-2.0
//! Locale identifiers.
//!
//! A [`LocaleId`] is a validated BCP-47 language tag such as `en`, `ko` or
//! `zh-CN`. Parsing goes through `unic-langid`, so `zh_cn` and `zh-CN` name the
//! same locale and both display as `zh-CN`.

use crate::config::defaults::{DEFAULT_LOCALE, SUPPORTED_LOCALES};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleId(LanguageIdentifier);

impl LocaleId {
    pub fn parse(tag: &str) -> Result<Self> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidLocale(tag.to_string()));
        }
        trimmed
            .parse::<LanguageIdentifier>()
            .map(Self)
            .map_err(|_| Error::InvalidLocale(tag.to_string()))
    }

    /// The locale used when nothing else is known, and the fallback for
    /// every lookup.
    pub fn default_locale() -> Self {
        Self::parse(DEFAULT_LOCALE).unwrap_or_else(|_| Self(LanguageIdentifier::default()))
    }

    /// All locales shipped with embedded translation bundles.
    pub fn supported() -> Vec<Self> {
        SUPPORTED_LOCALES
            .iter()
            .filter_map(|tag| Self::parse(tag).ok())
            .collect()
    }

    /// The tag with script, region and variants stripped (`zh-CN` -> `zh`).
    pub fn language_only(&self) -> Self {
        Self(LanguageIdentifier::from_parts(
            self.0.language,
            None,
            None,
            &[],
        ))
    }

    pub fn has_subtags(&self) -> bool {
        self.0.script.is_some() || self.0.region.is_some() || self.0.variants().len() != 0
    }

    pub fn as_langid(&self) -> &LanguageIdentifier {
        &self.0
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for LocaleId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<LanguageIdentifier> for LocaleId {
    fn from(langid: LanguageIdentifier) -> Self {
        Self(langid)
    }
}
