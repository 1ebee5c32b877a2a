// SPDX-License-Identifier: MPL-2.0
//! Startup wiring for localization.
//!
//! [`bootstrap`] runs once at startup, before anything is rendered:
//!
//! 1. register a lazy loader for every supported locale,
//! 2. pick the initial locale from persistent storage if the environment has it,
//! 3. start the i18n runtime with `en` as fallback,
//! 4. hand back a [`LocaleContext`] exposing the runtime's locale handle.
//!
//! None of these steps fail. Storage trouble degrades to the default locale,
//! and unusable locales are dealt with later by the runtime's fallback.

use crate::bundles;
use crate::config::LOCALE_STORAGE_KEY;
use crate::environment::Environment;
use crate::handle::LocaleHandle;
use crate::locale::LocaleId;
use crate::runtime::{I18n, InitConfig, Registrar};

/// Injectable localization state for one application instance.
#[derive(Debug, Clone)]
pub struct LocaleContext {
    i18n: I18n,
}

impl LocaleContext {
    /// The runtime's own active-locale handle (not a copy of its value).
    pub fn locale(&self) -> &LocaleHandle {
        self.i18n.locale()
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }
}

pub fn register_builtin_loaders(registrar: &mut Registrar) {
    for (locale, loader) in bundles::builtin_loaders() {
        registrar.register(locale, loader);
    }
}

/// Saved preference when the environment has persistent storage and one is
/// stored, the default locale otherwise.
pub fn determine_initial_locale(env: &Environment) -> LocaleId {
    stored_preference(env).unwrap_or_else(LocaleId::default_locale)
}

fn stored_preference(env: &Environment) -> Option<LocaleId> {
    let store = env.persistent_storage()?;
    let stored = match store.get(LOCALE_STORAGE_KEY) {
        Ok(stored) => stored?,
        Err(err) => {
            log::warn!("could not read saved locale preference: {}", err);
            return None;
        }
    };
    match LocaleId::parse(&stored) {
        Ok(locale) => Some(locale),
        Err(err) => {
            log::warn!("ignoring saved locale preference: {}", err);
            None
        }
    }
}

pub fn init_config(initial_locale: LocaleId) -> InitConfig {
    InitConfig {
        fallback_locale: LocaleId::default_locale(),
        initial_locale,
    }
}

pub fn bootstrap(env: &Environment) -> LocaleContext {
    let mut registrar = Registrar::new();
    register_builtin_loaders(&mut registrar);

    let initial_locale = determine_initial_locale(env);
    log::debug!("initial locale {} ({:?} environment)", initial_locale, env);

    LocaleContext {
        i18n: registrar.init(init_config(initial_locale)),
    }
}
