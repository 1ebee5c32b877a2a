// SPDX-License-Identifier: MPL-2.0
//! `locale_bootstrap` sets up localization at application startup.
//!
//! It registers lazily loaded Fluent bundles for the supported locales, picks
//! the initial locale from persisted preferences when the environment has
//! them, and exposes a reactive handle to the active locale.
//!
//! ```no_run
//! use locale_bootstrap::{bootstrap, Environment, FileStore};
//!
//! # async fn run() -> locale_bootstrap::error::Result<()> {
//! let env = Environment::client(FileStore::new("settings.toml"));
//! let context = bootstrap(&env);
//!
//! context.i18n().wait_locale(None).await?;
//! println!("active locale: {:?}", context.locale().get());
//! # Ok(())
//! # }
//! ```

pub mod bootstrap;
pub mod bundles;
pub mod catalog;
pub mod config;
pub mod environment;
pub mod error;
pub mod handle;
pub mod loader;
pub mod locale;
pub mod paths;
pub mod runtime;
pub mod storage;

pub use bootstrap::{bootstrap, LocaleContext};
pub use environment::Environment;
pub use handle::LocaleHandle;
pub use locale::LocaleId;
pub use runtime::{I18n, InitConfig, Registrar};
pub use storage::{FileStore, MemoryStore, PreferenceStore};
