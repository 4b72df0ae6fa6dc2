// SPDX-License-Identifier: MPL-2.0
//! A single toast and the timers that drive it.
//!
//! Each toast owns its schedule. Mounting waits one frame before the toast
//! becomes visible; a visible toast with a non-zero duration holds an
//! auto-dismiss timer; dismissal cancels that timer and schedules removal
//! once the exit animation has settled.
//!
//! Timers run on the ambient Tokio runtime, so [`Toast::create`],
//! [`Toast::mount`] and [`Toast::request_dismiss`] must be called from within
//! one.

use super::host::Host;
use super::lifecycle::{Event, Lifecycle, Phase, Step};
use super::options::ToastConfig;
use super::variant::Variant;
use crate::config::defaults::{FRAME_INTERVAL_MS, SETTLE_DELAY_MS};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::AbortHandle;

/// Delay before a mounted toast is shown.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(FRAME_INTERVAL_MS);

/// Delay between dismissal and removal.
pub const SETTLE_DELAY: Duration = Duration::from_millis(SETTLE_DELAY_MS);

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Read model handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastSnapshot {
    pub id: ToastId,
    pub message: String,
    pub variant: Variant,
    pub phase: Phase,
}

/// Handle to a toast. Clones refer to the same toast.
///
/// After removal every operation is a no-op.
#[derive(Debug, Clone)]
pub struct Toast {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    id: ToastId,
    message: String,
    config: ToastConfig,
    phase: watch::Sender<Phase>,
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    lifecycle: Lifecycle,
    mount_scheduled: bool,
    /// Present only while visible with a non-zero duration.
    dismiss_timer: Option<AbortHandle>,
    settle_timer: Option<AbortHandle>,
    host: Option<Host>,
}

impl Toast {
    /// Creates a toast in [`Phase::Created`] and schedules its mount.
    pub fn create(message: impl Into<String>, config: ToastConfig) -> Self {
        let toast = Self {
            shared: Arc::new(Shared {
                id: ToastId::new(),
                message: message.into(),
                config,
                phase: watch::Sender::new(Phase::Created),
                state: Mutex::new(State::default()),
            }),
        };
        log::debug!(
            "{} created ({}, auto-dismiss {:?})",
            toast.id(),
            config.variant,
            config.auto_dismiss()
        );
        toast.mount();
        toast
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.shared.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.shared.message
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.shared.config.variant
    }

    /// Auto-dismiss delay; zero means the toast stays until dismissed.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.shared.config.duration
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.lock().lifecycle.phase()
    }

    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.phase().is_terminal()
    }

    /// Every phase entered so far, in order.
    #[must_use]
    pub fn history(&self) -> Vec<Phase> {
        self.lock().lifecycle.history().to_vec()
    }

    /// Whether the auto-dismiss timer is armed.
    #[must_use]
    pub fn has_dismiss_timer(&self) -> bool {
        self.lock().dismiss_timer.is_some()
    }

    /// Whether the toast still references a timer or a host.
    #[must_use]
    pub fn holds_resources(&self) -> bool {
        let state = self.lock();
        state.dismiss_timer.is_some() || state.settle_timer.is_some() || state.host.is_some()
    }

    /// Receives every phase change of this toast.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Phase> {
        self.shared.phase.subscribe()
    }

    #[must_use]
    pub fn snapshot(&self) -> ToastSnapshot {
        ToastSnapshot {
            id: self.id(),
            message: self.shared.message.clone(),
            variant: self.variant(),
            phase: self.phase(),
        }
    }

    /// Schedules the toast to become visible on the next frame.
    ///
    /// Calling it again, or after the toast left [`Phase::Created`], does
    /// nothing.
    pub fn mount(&self) {
        {
            let mut state = self.lock();
            if state.mount_scheduled || state.lifecycle.phase() != Phase::Created {
                return;
            }
            state.mount_scheduled = true;
        }

        let toast = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(FRAME_INTERVAL).await;
            toast.on_frame();
        });
    }

    /// Starts the exit animation and schedules removal.
    ///
    /// Only the first request while visible has an effect. A request made
    /// before the first frame is applied right after the toast is shown.
    pub fn request_dismiss(&self) {
        let mut state = self.lock();
        match state.lifecycle.apply(Event::DismissRequested) {
            Step::Moved(phase) => {
                if let Some(timer) = state.dismiss_timer.take() {
                    timer.abort();
                }

                let toast = self.clone();
                let settle = tokio::spawn(async move {
                    tokio::time::sleep(SETTLE_DELAY).await;
                    toast.unmount();
                });
                state.settle_timer = Some(settle.abort_handle());

                self.publish(&state, phase);
            }
            Step::Deferred => {
                log::debug!("{} dismiss requested before mount, deferring", self.id());
            }
            Step::Ignored => {}
        }
    }

    /// Records the host this toast is attached to. Returns `false` once the
    /// toast has been removed, or when it already belongs to another host.
    pub(super) fn bind_host(&self, host: &Host) -> bool {
        let mut state = self.lock();
        if state.lifecycle.phase().is_terminal() {
            return false;
        }
        if let Some(bound) = &state.host {
            return bound.ptr_eq(host);
        }
        state.host = Some(host.clone());
        true
    }

    fn on_frame(&self) {
        let dismiss_now = {
            let mut state = self.lock();
            let (step, dismiss_now) = state.lifecycle.mount();
            let Step::Moved(phase) = step else {
                return;
            };

            if let Some(delay) = self.shared.config.auto_dismiss() {
                let toast = self.clone();
                let timer = tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    log::debug!("{} auto-dismiss elapsed", toast.id());
                    toast.request_dismiss();
                });
                state.dismiss_timer = Some(timer.abort_handle());
            }

            self.publish(&state, phase);
            dismiss_now
        };

        if dismiss_now {
            self.request_dismiss();
        }
    }

    fn unmount(&self) {
        let host = {
            let mut state = self.lock();
            let Step::Moved(phase) = state.lifecycle.apply(Event::Settled) else {
                return;
            };

            if let Some(timer) = state.dismiss_timer.take() {
                timer.abort();
            }
            state.settle_timer = None;
            self.publish(&state, phase);
            state.host.take()
        };

        // Detach outside the toast lock.
        if let Some(host) = host {
            host.detach(self.id());
        }
    }

    fn publish(&self, state: &State, phase: Phase) {
        log::debug!("{} -> {}", self.id(), phase);
        self.shared.phase.send_replace(phase);
        if let Some(host) = &state.host {
            host.touch();
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl PartialEq for Toast {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Toast {}
