// SPDX-License-Identifier: MPL-2.0
//! Transient, auto-dismissing, user-dismissible notifications.
//!
//! # Components
//!
//! - [`lifecycle`] - Pure state machine (`Created → Visible → Dismissing → Removed`)
//! - [`instance`] - `Toast` handle owning its mount, auto-dismiss and settle timers
//! - [`host`] - `Host` container collecting toasts in arrival order
//! - [`factory`] - `Factory` and [`show`] for building and attaching toasts
//! - [`options`] - Caller options, defaults and normalization
//!
//! # Usage
//!
//! ```ignore
//! use nuke_design::toast::{self, ToastOptions};
//!
//! // Inside a Tokio runtime
//! let toast = toast::show("Saved", &ToastOptions::new().variant("soft"));
//!
//! // The close control calls this; repeated calls are harmless
//! toast.request_dismiss();
//! ```
//!
//! # Timing
//!
//! - A toast is shown one frame (16ms) after creation so the entry transition animates
//! - Factory toasts auto-dismiss after 3s unless a duration is given; `0` disables it
//! - Removal follows dismissal after a 300ms settle delay

pub mod factory;
pub mod host;
pub mod instance;
pub mod lifecycle;
pub mod options;
mod variant;

pub use factory::{show, Factory};
pub use host::Host;
pub use instance::{Toast, ToastId, ToastSnapshot, FRAME_INTERVAL, SETTLE_DELAY};
pub use lifecycle::{Event, Lifecycle, Phase, Step};
pub use options::{ToastConfig, ToastDefaults, ToastOptions};
pub use variant::{UnknownVariant, Variant};
