// SPDX-License-Identifier: MPL-2.0
//! The reactive active-locale value.
//!
//! Every clone of a [`LocaleHandle`] points at the same value, so the runtime
//! and whoever received the handle from the bootstrapper always agree on the
//! current locale. Consumers that need to react to changes subscribe and
//! await `changed()` on the receiver.

use crate::locale::LocaleId;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Clone)]
pub struct LocaleHandle {
    sender: Arc<watch::Sender<Option<LocaleId>>>,
}

impl LocaleHandle {
    pub(crate) fn new(initial: Option<LocaleId>) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn get(&self) -> Option<LocaleId> {
        self.sender.borrow().clone()
    }

    /// Makes `locale` active. Subscribers are notified only when the value
    /// actually changes.
    pub fn set(&self, locale: LocaleId) {
        let changed = self.sender.send_if_modified(|current| {
            if current.as_ref() == Some(&locale) {
                false
            } else {
                *current = Some(locale.clone());
                true
            }
        });
        if changed {
            log::info!("active locale set to {}", locale);
        }
    }

    pub fn unset(&self) {
        let previous = self.sender.send_replace(None);
        if previous.is_some() {
            log::info!("active locale cleared");
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<LocaleId>> {
        self.sender.subscribe()
    }

    /// Whether both handles refer to the same underlying value.
    pub fn same_as(&self, other: &LocaleHandle) -> bool {
        Arc::ptr_eq(&self.sender, &other.sender)
    }
}

impl std::fmt::Debug for LocaleHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("LocaleHandle").field(&self.get()).finish()
    }
}
