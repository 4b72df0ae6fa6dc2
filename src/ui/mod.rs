// SPDX-License-Identifier: MPL-2.0
//! Renderers for toasts.
//!
//! Both renderers read [`crate::toast::ToastSnapshot`]s; neither stores
//! lifecycle state of its own.
//!
//! - [`markup`] - `<nuke-toast>` custom-element markup with its ARIA attributes
//! - [`toast`] - Iced widgets and the close-control message
//! - [`design_tokens`] - Colors, spacing and sizes used by the Iced renderer

pub mod design_tokens;
pub mod markup;
pub mod toast;

pub use toast::{Message, ToastView};
