// SPDX-License-Identifier: MPL-2.0
//! `nuke_design` holds the runtime pieces of the Nuke Design System.
//!
//! - [`toast`]: lifecycle of transient, auto-dismissing notifications
//! - [`ui`]: markup and Iced renderers for toasts
//! - [`setup`]: the one-time installer copying the theme folder into a project
//! - [`config`]: user defaults stored in `settings.toml`

pub mod config;
pub mod error;
pub mod paths;
pub mod setup;
pub mod toast;
pub mod ui;
