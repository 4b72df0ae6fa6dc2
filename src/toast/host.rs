// SPDX-License-Identifier: MPL-2.0
//! Aggregation point for toasts.
//!
//! The host keeps attached toasts in arrival order and nothing more: it
//! cannot dismiss or remove a toast. Toasts detach themselves when their
//! exit animation settles.

use super::instance::{Toast, ToastId, ToastSnapshot};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use tokio::sync::watch;

/// Process-wide host, created on first use and never torn down.
static GLOBAL: OnceLock<Host> = OnceLock::new();

/// Shared handle to a toast container. Clones refer to the same container.
#[derive(Debug, Clone)]
pub struct Host {
    inner: Arc<HostInner>,
}

#[derive(Debug)]
struct HostInner {
    entries: Mutex<Vec<Toast>>,
    revision: watch::Sender<u64>,
}

impl Host {
    /// Creates a standalone host.
    ///
    /// Most callers want [`Host::global`]; separate hosts are useful when a
    /// renderer manages several containers, and in tests.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(HostInner {
                entries: Mutex::new(Vec::new()),
                revision: watch::Sender::new(0),
            }),
        }
    }

    /// Returns the process-wide host, creating it on the first call.
    pub fn global() -> &'static Host {
        GLOBAL.get_or_init(|| {
            log::debug!("creating global toast host");
            Host::new()
        })
    }

    /// Appends `toast` after every toast attached before it.
    ///
    /// A toast that was already removed, or that belongs to another host, is
    /// not attached.
    pub fn attach(&self, toast: &Toast) {
        if !toast.bind_host(self) {
            log::debug!("{} removed or owned by another host, not attaching", toast.id());
            return;
        }
        self.lock_entries().push(toast.clone());
        self.touch();
    }

    /// Drops the entry for `id`. Only the toast itself calls this, once its
    /// exit animation has settled.
    pub(super) fn detach(&self, id: ToastId) -> bool {
        let removed = {
            let mut entries = self.lock_entries();
            let before = entries.len();
            entries.retain(|toast| toast.id() != id);
            entries.len() != before
        };
        if removed {
            self.touch();
        }
        removed
    }

    /// Attached toasts in arrival order.
    #[must_use]
    pub fn entries(&self) -> Vec<Toast> {
        self.lock_entries().clone()
    }

    /// Ids of the attached toasts in arrival order.
    #[must_use]
    pub fn ids(&self) -> Vec<ToastId> {
        self.lock_entries().iter().map(Toast::id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock_entries().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock_entries().is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.lock_entries().iter().any(|toast| toast.id() == id)
    }

    /// Looks up an attached toast.
    #[must_use]
    pub fn find(&self, id: ToastId) -> Option<Toast> {
        self.lock_entries()
            .iter()
            .find(|toast| toast.id() == id)
            .cloned()
    }

    /// Render-ready state of every attached toast, in arrival order.
    #[must_use]
    pub fn snapshots(&self) -> Vec<ToastSnapshot> {
        // Release the host lock before any toast lock is taken.
        let entries = self.entries();
        entries.iter().map(Toast::snapshot).collect()
    }

    /// Change feed for renderers.
    ///
    /// The revision increases on attach, on detach and on every phase change
    /// of an attached toast.
    #[must_use]
    pub fn changes(&self) -> watch::Receiver<u64> {
        self.inner.revision.subscribe()
    }

    /// Current revision of the change feed.
    #[must_use]
    pub fn revision(&self) -> u64 {
        *self.inner.revision.borrow()
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Host) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(super) fn touch(&self) {
        self.inner
            .revision
            .send_modify(|revision| *revision = revision.wrapping_add(1));
    }

    fn lock_entries(&self) -> MutexGuard<'_, Vec<Toast>> {
        self.inner
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new()
    }
}
