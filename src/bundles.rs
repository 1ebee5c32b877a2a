// SPDX-License-Identifier: MPL-2.0
//! Embedded translation bundles.
//!
//! Each supported locale ships as `assets/i18n/<tag>.ftl`, compiled into the
//! binary. The loaders returned by [`builtin_loaders`] read and parse their
//! bundle only when invoked.

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::loader::Loader;
use crate::locale::LocaleId;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

fn bundle_file_name(locale: &LocaleId) -> String {
    format!("{}.ftl", locale)
}

/// Reads and parses the embedded bundle for `locale`.
pub fn load_embedded(locale: &LocaleId) -> Result<Catalog> {
    let file_name = bundle_file_name(locale);
    let file = Asset::get(&file_name).ok_or_else(|| Error::Bundle {
        locale: locale.clone(),
        message: format!("no embedded bundle named {}", file_name),
    })?;
    let source = String::from_utf8(file.data.into_owned()).map_err(|err| Error::Bundle {
        locale: locale.clone(),
        message: err.to_string(),
    })?;
    Catalog::parse(locale.clone(), source)
}

pub fn embedded_loader(locale: LocaleId) -> Loader {
    Loader::new(move || {
        let locale = locale.clone();
        async move { load_embedded(&locale) }
    })
}

/// One loader per supported locale, in declaration order.
pub fn builtin_loaders() -> Vec<(LocaleId, Loader)> {
    LocaleId::supported()
        .into_iter()
        .map(|locale| (locale.clone(), embedded_loader(locale)))
        .collect()
}

/// Locales for which a bundle file is embedded, whether or not they are
/// declared as supported.
pub fn embedded_locales() -> Vec<LocaleId> {
    let mut locales: Vec<LocaleId> = Asset::iter()
        .filter_map(|name| {
            name.strip_suffix(".ftl")
                .and_then(|tag| LocaleId::parse(tag).ok())
        })
        .collect();
    locales.sort_by_key(ToString::to_string);
    locales
}
