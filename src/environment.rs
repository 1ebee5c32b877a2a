// SPDX-License-Identifier: MPL-2.0
//! Execution-context capability.
//!
//! Whether persistent client storage exists is passed in rather than
//! detected, so the initial-locale decision can be tested in isolation.

use crate::storage::PreferenceStore;

pub enum Environment {
    /// Interactive client with access to persistent preference storage.
    Client(Box<dyn PreferenceStore>),
    /// Headless or server-side context. Stored preferences are never consulted.
    Server,
}

impl Environment {
    pub fn client(store: impl PreferenceStore + 'static) -> Self {
        Environment::Client(Box::new(store))
    }

    pub fn persistent_storage(&self) -> Option<&dyn PreferenceStore> {
        match self {
            Environment::Client(store) => Some(store.as_ref()),
            Environment::Server => None,
        }
    }

    pub fn is_client(&self) -> bool {
        matches!(self, Environment::Client(_))
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Client(_) => f.write_str("Client"),
            Environment::Server => f.write_str("Server"),
        }
    }
}
