// SPDX-License-Identifier: MPL-2.0
//! Toast configuration: caller options, defaults and their normalization.
//!
//! Invalid input never fails. An unknown variant becomes the default variant
//! and a negative duration becomes the default duration; both are logged.

use super::variant::Variant;
use crate::config::defaults::{DEFAULT_DURATION_MS, MAX_DURATION_MS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Options accepted by the factory. Omitted fields take the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastOptions {
    /// Variant name, such as `"soft"`.
    pub variant: Option<String>,
    /// Auto-dismiss delay in milliseconds; `0` disables auto-dismiss.
    pub duration_ms: Option<i64>,
}

impl ToastOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    #[must_use]
    pub fn duration_ms(mut self, duration_ms: i64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// Defaults applied by a factory to omitted or invalid options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastDefaults {
    pub variant: Variant,
    pub duration_ms: u64,
}

impl Default for ToastDefaults {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

/// Normalized configuration of a single toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastConfig {
    pub variant: Variant,
    pub duration: Duration,
}

impl ToastConfig {
    /// Resolves factory options against `defaults`.
    #[must_use]
    pub fn resolve(options: &ToastOptions, defaults: &ToastDefaults) -> Self {
        let variant = options
            .variant
            .as_deref()
            .map_or(defaults.variant, Variant::parse_or_default);

        let duration_ms = match options.duration_ms {
            None => defaults.duration_ms,
            Some(ms) if ms < 0 => {
                log::warn!(
                    "negative toast duration {ms}ms, using {}ms",
                    defaults.duration_ms
                );
                defaults.duration_ms
            }
            Some(ms) => ms.unsigned_abs(),
        };

        Self {
            variant,
            duration: clamp_duration(duration_ms),
        }
    }

    /// Builds the configuration of a declared toast from its `class` and
    /// `duration` attributes.
    ///
    /// A missing or unparseable `duration` means no auto-dismiss.
    #[must_use]
    pub fn from_attributes(class_list: Option<&str>, duration_attr: Option<&str>) -> Self {
        let variant = class_list
            .and_then(Variant::from_class_list)
            .unwrap_or_default();

        let duration_ms = duration_attr
            .and_then(parse_int_attribute)
            .filter(|ms| *ms > 0)
            .map_or(0, i64::unsigned_abs);

        Self {
            variant,
            duration: clamp_duration(duration_ms),
        }
    }

    /// Returns the auto-dismiss delay, or `None` when the toast stays until
    /// dismissed.
    #[must_use]
    pub fn auto_dismiss(&self) -> Option<Duration> {
        (!self.duration.is_zero()).then_some(self.duration)
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self::resolve(&ToastOptions::default(), &ToastDefaults::default())
    }
}

fn clamp_duration(ms: u64) -> Duration {
    if ms > MAX_DURATION_MS {
        log::warn!("toast duration {ms}ms exceeds {MAX_DURATION_MS}ms, clamping");
    }
    Duration::from_millis(ms.min(MAX_DURATION_MS))
}

/// Parses an integer attribute the way HTML attribute readers do: leading
/// whitespace and an optional sign, then the longest run of digits.
///
/// Returns `None` when no digit follows. Values beyond `i64` saturate.
#[must_use]
pub fn parse_int_attribute(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let magnitude = rest[..digits].bytes().fold(0i64, |acc, digit| {
        acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_options_take_factory_defaults() {
        let config = ToastConfig::resolve(&ToastOptions::new(), &ToastDefaults::default());
        assert_eq!(config.variant, Variant::Zen);
        assert_eq!(config.duration, Duration::from_millis(3000));
    }

    #[test]
    fn explicit_options_are_applied() {
        let options = ToastOptions::new().variant("solid").duration_ms(1000);
        let config = ToastConfig::resolve(&options, &ToastDefaults::default());
        assert_eq!(config.variant, Variant::Solid);
        assert_eq!(config.auto_dismiss(), Some(Duration::from_millis(1000)));
    }

    #[test]
    fn zero_duration_disables_auto_dismiss() {
        let options = ToastOptions::new().duration_ms(0);
        let config = ToastConfig::resolve(&options, &ToastDefaults::default());
        assert_eq!(config.auto_dismiss(), None);
    }

    #[test]
    fn negative_duration_falls_back_to_default() {
        let defaults = ToastDefaults {
            variant: Variant::Soft,
            duration_ms: 1500,
        };
        let options = ToastOptions::new().duration_ms(-20);
        let config = ToastConfig::resolve(&options, &defaults);
        assert_eq!(config.duration, Duration::from_millis(1500));
    }

    #[test]
    fn unknown_variant_falls_back_to_zen() {
        let options = ToastOptions::new().variant("glitter");
        let config = ToastConfig::resolve(&options, &ToastDefaults::default());
        assert_eq!(config.variant, Variant::Zen);
    }

    #[test]
    fn huge_duration_is_clamped() {
        let options = ToastOptions::new().duration_ms(i64::MAX);
        let config = ToastConfig::resolve(&options, &ToastDefaults::default());
        assert_eq!(config.duration, Duration::from_millis(MAX_DURATION_MS));
    }

    #[test]
    fn declared_toast_without_duration_persists() {
        let config = ToastConfig::from_attributes(Some("soft"), None);
        assert_eq!(config.variant, Variant::Soft);
        assert_eq!(config.auto_dismiss(), None);
    }

    #[test]
    fn declared_toast_reads_duration_attribute() {
        let config = ToastConfig::from_attributes(None, Some("2500ms"));
        assert_eq!(config.variant, Variant::Zen);
        assert_eq!(config.auto_dismiss(), Some(Duration::from_millis(2500)));
    }

    #[test]
    fn declared_toast_ignores_negative_or_garbage_duration() {
        assert_eq!(ToastConfig::from_attributes(None, Some("-5")).auto_dismiss(), None);
        assert_eq!(ToastConfig::from_attributes(None, Some("soon")).auto_dismiss(), None);
    }

    #[test]
    fn int_attribute_parsing_follows_prefix_rules() {
        assert_eq!(parse_int_attribute("3000"), Some(3000));
        assert_eq!(parse_int_attribute("  42px"), Some(42));
        assert_eq!(parse_int_attribute("+7"), Some(7));
        assert_eq!(parse_int_attribute("-12"), Some(-12));
        assert_eq!(parse_int_attribute("12.9"), Some(12));
        assert_eq!(parse_int_attribute(""), None);
        assert_eq!(parse_int_attribute("-"), None);
        assert_eq!(parse_int_attribute("abc"), None);
        assert_eq!(parse_int_attribute("99999999999999999999999"), Some(i64::MAX));
    }
}
