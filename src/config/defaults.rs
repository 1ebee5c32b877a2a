// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for locale selection and settings storage.
//!
//! This module serves as the single source of truth for the fixed tags and
//! keys used across the crate.

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Initial locale when no preference is available, and the fallback locale
/// for every lookup.
pub const DEFAULT_LOCALE: &str = "en";

/// Locales that ship with an embedded translation bundle.
pub const SUPPORTED_LOCALES: [&str; 5] = ["en", "ko", "ja", "zh-CN", "zh-TW"];

// ==========================================================================
// Storage Defaults
// ==========================================================================

/// Key under which the saved locale preference lives in persistent storage.
pub const LOCALE_STORAGE_KEY: &str = "locale";

/// Settings file name inside the config directory.
pub const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
pub const APP_NAME: &str = "LocaleBootstrap";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = {
    // The default locale must have a bundle, otherwise fallback has nothing to resolve.
    let mut found = false;
    let mut i = 0;
    while i < SUPPORTED_LOCALES.len() {
        if str_eq(SUPPORTED_LOCALES[i], DEFAULT_LOCALE) {
            found = true;
        }
        i += 1;
    }
    assert!(found);
    assert!(!LOCALE_STORAGE_KEY.is_empty());
};
