// SPDX-License-Identifier: MPL-2.0
//! Translation payloads.
//!
//! A [`Catalog`] is the parsed contents of one locale's `.ftl` bundle. This
//! crate only loads and caches catalogs; formatting messages is left to
//! whoever builds a `FluentBundle` on top of them.

use crate::error::{Error, Result};
use crate::locale::LocaleId;
use fluent_bundle::FluentResource;
use fluent_syntax::ast;

pub struct Catalog {
    locale: LocaleId,
    resource: FluentResource,
}

impl Catalog {
    /// Parses Fluent source. Any syntax error rejects the whole payload.
    pub fn parse(locale: LocaleId, source: String) -> Result<Self> {
        match FluentResource::try_new(source) {
            Ok(resource) => Ok(Self { locale, resource }),
            Err((_, errors)) => Err(Error::Bundle {
                locale,
                message: format!("{} syntax error(s) in bundle", errors.len()),
            }),
        }
    }

    pub fn locale(&self) -> &LocaleId {
        &self.locale
    }

    pub fn resource(&self) -> &FluentResource {
        &self.resource
    }

    /// Identifiers of every message defined in the bundle, in file order.
    pub fn message_ids(&self) -> impl Iterator<Item = &str> {
        self.resource.entries().filter_map(|entry| match entry {
            ast::Entry::Message(message) => Some(message.id.name),
            _ => None,
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.message_ids().any(|candidate| candidate == id)
    }

    pub fn len(&self) -> usize {
        self.message_ids().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("locale", &self.locale)
            .field("messages", &self.len())
            .finish()
    }
}
