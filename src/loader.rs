// SPDX-License-Identifier: MPL-2.0
//! Lazy translation loaders.
//!
//! A [`Loader`] is a factory for a future that produces one locale's
//! [`Catalog`]. The [`LoaderRegistry`] keeps one loader per locale and calls it
//! only when that locale is first needed. A successful result is cached for
//! the life of the registry; a failed call leaves nothing behind, so the next
//! request invokes the loader again.

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::locale::LocaleId;
use futures_util::future::{BoxFuture, FutureExt};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::OnceCell;

type LoadFn = dyn Fn() -> BoxFuture<'static, Result<Catalog>> + Send + Sync;

#[derive(Clone)]
pub struct Loader {
    load: Arc<LoadFn>,
}

impl Loader {
    pub fn new<F, Fut>(load: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Catalog>> + Send + 'static,
    {
        Self {
            load: Arc::new(move || load().boxed()),
        }
    }

    /// Starts a fresh load. Each call produces an independent future.
    pub fn invoke(&self) -> BoxFuture<'static, Result<Catalog>> {
        (self.load)()
    }
}

impl std::fmt::Debug for Loader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Loader")
    }
}

struct Entry {
    loader: Loader,
    cached: OnceCell<Arc<Catalog>>,
}

#[derive(Default)]
pub struct LoaderRegistry {
    entries: HashMap<LocaleId, Entry>,
}

impl LoaderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `loader` for `locale`, replacing (and forgetting the cache of)
    /// any earlier registration. Returns `true` if a loader was replaced.
    pub fn insert(&mut self, locale: LocaleId, loader: Loader) -> bool {
        let entry = Entry {
            loader,
            cached: OnceCell::new(),
        };
        self.entries.insert(locale, entry).is_some()
    }

    pub fn contains(&self, locale: &LocaleId) -> bool {
        self.entries.contains_key(locale)
    }

    /// Registered locales, sorted by tag for stable output.
    pub fn locales(&self) -> Vec<LocaleId> {
        let mut locales: Vec<LocaleId> = self.entries.keys().cloned().collect();
        locales.sort_by_key(ToString::to_string);
        locales
    }

    pub fn is_loaded(&self, locale: &LocaleId) -> bool {
        self.entries
            .get(locale)
            .is_some_and(|entry| entry.cached.initialized())
    }

    /// Returns the cached catalog for `locale`, loading it first if needed.
    ///
    /// Concurrent first requests share a single loader invocation.
    pub async fn resolve(&self, locale: &LocaleId) -> Result<Arc<Catalog>> {
        let entry = self
            .entries
            .get(locale)
            .ok_or_else(|| Error::NotRegistered(locale.clone()))?;

        let catalog = entry
            .cached
            .get_or_try_init(|| async {
                log::debug!("loading translations for {}", locale);
                entry.loader.invoke().await.map(Arc::new)
            })
            .await?;
        Ok(Arc::clone(catalog))
    }
}
