// SPDX-License-Identifier: MPL-2.0
//! Markup renderer for the `<nuke-toast>` custom element.
//!
//! Output matches what the stylesheet targets: the variant class, then
//! `show` while visible or `hide` while leaving. Every toast is a polite
//! live region with one labeled close control after the message span.

use crate::toast::{Phase, ToastSnapshot};
use std::borrow::Cow;
use std::fmt::Write;

pub const ELEMENT: &str = "nuke-toast";
pub const CONTAINER_CLASS: &str = "nuke-toast-container";
pub const MESSAGE_CLASS: &str = "toast-message";
pub const CLOSE_CLASS: &str = "toast-close";

/// Live-region role: announced without moving focus.
pub const ROLE: &str = "status";
pub const ARIA_LIVE: &str = "polite";
pub const CLOSE_LABEL: &str = "Close notification";
pub const CLOSE_GLYPH: &str = "\u{00d7}";

/// Class toggled by the phase, if any.
#[must_use]
pub fn phase_class(phase: Phase) -> Option<&'static str> {
    match phase {
        Phase::Visible => Some("show"),
        Phase::Dismissing => Some("hide"),
        Phase::Created | Phase::Removed => None,
    }
}

/// Full class attribute of a toast.
#[must_use]
pub fn class_list(snapshot: &ToastSnapshot) -> String {
    let mut classes = snapshot.variant.class_name().to_string();
    if let Some(phase) = phase_class(snapshot.phase) {
        classes.push(' ');
        classes.push_str(phase);
    }
    classes
}

/// Renders one toast, or `None` once it has been removed.
#[must_use]
pub fn render_toast(snapshot: &ToastSnapshot) -> Option<String> {
    if snapshot.phase == Phase::Removed {
        return None;
    }

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write!(
        out,
        r#"<{ELEMENT} id="{id}" role="{ROLE}" aria-live="{ARIA_LIVE}" class="{classes}">"#,
        id = snapshot.id,
        classes = class_list(snapshot),
    );
    let _ = write!(
        out,
        r#"<span class="{MESSAGE_CLASS}">{message}</span>"#,
        message = escape(&snapshot.message),
    );
    let _ = write!(
        out,
        r#"<button type="button" class="{CLOSE_CLASS}" aria-label="{CLOSE_LABEL}">{CLOSE_GLYPH}</button>"#,
    );
    let _ = write!(out, "</{ELEMENT}>");
    Some(out)
}

/// Renders the container with its toasts in the given order.
#[must_use]
pub fn render_container(snapshots: &[ToastSnapshot]) -> String {
    let body: String = snapshots.iter().filter_map(render_toast).collect();
    format!(r#"<div class="{CONTAINER_CLASS}">{body}</div>"#)
}

fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
