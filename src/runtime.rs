// SPDX-License-Identifier: MPL-2.0
//! The i18n runtime.
//!
//! Setup happens in two phases. Loaders are declared on a [`Registrar`], and
//! [`Registrar::init`] consumes it to produce the running [`I18n`]. Once
//! initialized, the set of loaders is frozen.
//!
//! # Resolution
//!
//! A catalog request walks a lookup chain: the exact tag, then its bare
//! language (`zh-CN` -> `zh`), then the fallback locale. Candidates without a
//! loader are skipped, and so are candidates whose loader fails. An error is
//! returned only when the whole chain comes up empty.

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::handle::LocaleHandle;
use crate::loader::{Loader, LoaderRegistry};
use crate::locale::LocaleId;
use std::sync::Arc;

/// Startup options for [`Registrar::init`].
#[derive(Debug, Clone, PartialEq)]
pub struct InitConfig {
    /// Used when a requested locale is unavailable.
    pub fallback_locale: LocaleId,
    /// Active immediately after startup.
    pub initial_locale: LocaleId,
}

impl Default for InitConfig {
    fn default() -> Self {
        Self {
            fallback_locale: LocaleId::default_locale(),
            initial_locale: LocaleId::default_locale(),
        }
    }
}

#[derive(Default)]
pub struct Registrar {
    loaders: LoaderRegistry,
}

impl Registrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a lazy loader for `locale`. Nothing is loaded until the
    /// locale is requested.
    pub fn register(&mut self, locale: LocaleId, loader: Loader) {
        if self.loaders.insert(locale.clone(), loader) {
            log::debug!("replaced loader for {}", locale);
        }
    }

    pub fn registered_locales(&self) -> Vec<LocaleId> {
        self.loaders.locales()
    }

    pub fn init(self, config: InitConfig) -> I18n {
        let InitConfig {
            fallback_locale,
            initial_locale,
        } = config;

        if !self.loaders.contains(&fallback_locale) {
            log::warn!("fallback locale {} has no registered loader", fallback_locale);
        }
        log::info!(
            "i18n initialized: initial locale {}, fallback {}",
            initial_locale,
            fallback_locale
        );

        I18n {
            loaders: Arc::new(self.loaders),
            fallback_locale,
            locale: LocaleHandle::new(Some(initial_locale)),
        }
    }
}

/// A running i18n instance. Cheap to clone; clones share loaders, cache and
/// active locale.
#[derive(Clone)]
pub struct I18n {
    loaders: Arc<LoaderRegistry>,
    fallback_locale: LocaleId,
    locale: LocaleHandle,
}

impl I18n {
    /// The shared active-locale handle.
    pub fn locale(&self) -> &LocaleHandle {
        &self.locale
    }

    pub fn fallback_locale(&self) -> &LocaleId {
        &self.fallback_locale
    }

    pub fn registered_locales(&self) -> Vec<LocaleId> {
        self.loaders.locales()
    }

    pub fn is_loaded(&self, locale: &LocaleId) -> bool {
        self.loaders.is_loaded(locale)
    }

    pub fn lookup_chain(&self, locale: &LocaleId) -> Vec<LocaleId> {
        let mut candidates = vec![locale.clone()];
        if locale.has_subtags() {
            candidates.push(locale.language_only());
        }
        candidates.push(self.fallback_locale.clone());

        let mut chain: Vec<LocaleId> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if !chain.contains(&candidate) {
                chain.push(candidate);
            }
        }
        chain
    }

    pub async fn catalog_for(&self, locale: &LocaleId) -> Result<Arc<Catalog>> {
        for candidate in self.lookup_chain(locale) {
            if !self.loaders.contains(&candidate) {
                continue;
            }
            match self.loaders.resolve(&candidate).await {
                Ok(catalog) => {
                    if candidate != *locale {
                        log::debug!("{} resolved through {}", locale, candidate);
                    }
                    return Ok(catalog);
                }
                Err(err) => {
                    log::warn!("failed to load translations for {}: {}", candidate, err);
                }
            }
        }
        Err(Error::LocaleUnavailable(locale.clone()))
    }

    /// Catalog for the active locale, or for the fallback when no locale is
    /// active.
    pub async fn current_catalog(&self) -> Result<Arc<Catalog>> {
        let active = self
            .locale
            .get()
            .unwrap_or_else(|| self.fallback_locale.clone());
        self.catalog_for(&active).await
    }

    /// Preloads translations for `locale`, or the active locale when `None`.
    pub async fn wait_locale(&self, locale: Option<&LocaleId>) -> Result<()> {
        match locale {
            Some(locale) => self.catalog_for(locale).await.map(|_| ()),
            None => self.current_catalog().await.map(|_| ()),
        }
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("locale", &self.locale.get())
            .field("fallback_locale", &self.fallback_locale)
            .field("registered", &self.registered_locales())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn locale(tag: &str) -> LocaleId {
        LocaleId::parse(tag).unwrap()
    }

    fn static_loader(tag: &'static str) -> Loader {
        Loader::new(move || async move {
            Catalog::parse(LocaleId::parse(tag)?, format!("name = {}\n", tag))
        })
    }

    fn failing_loader() -> Loader {
        Loader::new(|| async { Err::<Catalog, _>(Error::Io("network down".to_string())) })
    }

    fn runtime(tags: &[&'static str], initial: &str) -> I18n {
        let mut registrar = Registrar::new();
        for tag in tags {
            registrar.register(locale(tag), static_loader(tag));
        }
        registrar.init(InitConfig {
            fallback_locale: locale("en"),
            initial_locale: locale(initial),
        })
    }

    #[test]
    fn init_sets_initial_and_fallback() {
        let i18n = runtime(&["en", "ko"], "ko");
        assert_eq!(i18n.locale().get(), Some(locale("ko")));
        assert_eq!(i18n.fallback_locale(), &locale("en"));
    }

    #[test]
    fn default_config_uses_english_for_both() {
        let config = InitConfig::default();
        assert_eq!(config.fallback_locale, locale("en"));
        assert_eq!(config.initial_locale, locale("en"));
    }

    #[test]
    fn lookup_chain_includes_language_and_fallback() {
        let i18n = runtime(&["en"], "en");
        assert_eq!(
            i18n.lookup_chain(&locale("zh-CN")),
            vec![locale("zh-CN"), locale("zh"), locale("en")]
        );
        assert_eq!(i18n.lookup_chain(&locale("en-US")), vec![locale("en-US"), locale("en")]);
        assert_eq!(i18n.lookup_chain(&locale("en")), vec![locale("en")]);
    }

    #[tokio::test]
    async fn exact_locale_wins() {
        let i18n = runtime(&["en", "zh-TW"], "zh-TW");
        let catalog = i18n.current_catalog().await.unwrap();
        assert_eq!(catalog.locale(), &locale("zh-TW"));
    }

    #[tokio::test]
    async fn regional_tag_falls_back_to_language() {
        let i18n = runtime(&["en", "ko"], "ko-KR");
        let catalog = i18n.current_catalog().await.unwrap();
        assert_eq!(catalog.locale(), &locale("ko"));
    }

    #[tokio::test]
    async fn unregistered_locale_falls_back() {
        let i18n = runtime(&["en", "ko"], "fr");
        let catalog = i18n.current_catalog().await.unwrap();
        assert_eq!(catalog.locale(), &locale("en"));
        // The requested locale stays active even though it resolved elsewhere.
        assert_eq!(i18n.locale().get(), Some(locale("fr")));
    }

    #[tokio::test]
    async fn failing_loader_falls_back() {
        let mut registrar = Registrar::new();
        registrar.register(locale("en"), static_loader("en"));
        registrar.register(locale("ja"), failing_loader());
        let i18n = registrar.init(InitConfig {
            fallback_locale: locale("en"),
            initial_locale: locale("ja"),
        });

        let catalog = i18n.current_catalog().await.unwrap();
        assert_eq!(catalog.locale(), &locale("en"));
        assert!(!i18n.is_loaded(&locale("ja")));
    }

    #[tokio::test]
    async fn nothing_resolvable_is_an_error() {
        let i18n = runtime(&["ko"], "fr");
        let result = i18n.current_catalog().await;
        assert_eq!(result.unwrap_err(), Error::LocaleUnavailable(locale("fr")));
    }

    #[tokio::test]
    async fn unset_locale_uses_fallback() {
        let i18n = runtime(&["en", "ko"], "ko");
        i18n.locale().unset();
        let catalog = i18n.current_catalog().await.unwrap();
        assert_eq!(catalog.locale(), &locale("en"));
    }

    #[tokio::test]
    async fn wait_locale_preloads_only_the_requested_locale() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut registrar = Registrar::new();
        registrar.register(locale("en"), static_loader("en"));
        registrar.register(
            locale("ja"),
            Loader::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                async { Catalog::parse(LocaleId::parse("ja")?, String::new()) }
            }),
        );
        let i18n = registrar.init(InitConfig::default());

        i18n.wait_locale(None).await.unwrap();
        assert!(i18n.is_loaded(&locale("en")));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        i18n.wait_locale(Some(&locale("ja"))).await.unwrap();
        i18n.wait_locale(Some(&locale("ja"))).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn clones_share_the_active_locale() {
        let i18n = runtime(&["en", "ko"], "en");
        let clone = i18n.clone();
        clone.locale().set(locale("ko"));
        assert_eq!(i18n.locale().get(), Some(locale("ko")));
    }
}
