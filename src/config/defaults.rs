// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toast**: Auto-dismiss duration and variant applied by the factory
//! - **Animation**: Frame and exit-animation timings of the toast lifecycle
//! - **Setup**: Theme install locations offered by the installer

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Auto-dismiss duration applied by the factory when none is given (in ms).
///
/// Declared toasts without a `duration` attribute do not auto-dismiss.
pub const DEFAULT_DURATION_MS: u64 = 3000;

/// Largest accepted auto-dismiss duration (one day, in ms).
pub const MAX_DURATION_MS: u64 = 24 * 60 * 60 * 1000;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Delay between dismissal and removal, matching the CSS exit transition (in ms).
pub const SETTLE_DELAY_MS: u64 = 300;

/// Length of one paint frame (in ms). Mounting waits one frame before the
/// toast is shown so the entry transition animates.
pub const FRAME_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Setup Defaults
// ==========================================================================

/// Recommended install location, relative to the project root.
pub const ROOT_THEME_PATH: &str = "./nuke-theme";

/// Alternative install location under the styles folder.
pub const STYLES_THEME_PATH: &str = "./src/styles/nuke-theme";

/// Theme folder shipped with the package, relative to the project root.
pub const PACKAGE_THEME_PATH: &str = "node_modules/@nuke.dev/design-system/theme";

/// Name of the sidecar file recording where the theme was installed.
pub const SIDECAR_FILE: &str = ".nukerc";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_delay_is_longer_than_a_frame() {
        assert!(SETTLE_DELAY_MS > FRAME_INTERVAL_MS);
    }

    #[test]
    fn default_duration_is_within_bounds() {
        assert!(DEFAULT_DURATION_MS > 0);
        assert!(DEFAULT_DURATION_MS <= MAX_DURATION_MS);
    }
}
