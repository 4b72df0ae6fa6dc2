// SPDX-License-Identifier: MPL-2.0
//! Visual variants of a toast.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual style selector. Exactly one applies to a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Quiet, outlined style.
    #[default]
    Zen,
    /// Tinted background.
    Soft,
    /// Filled, high-contrast background.
    Solid,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Zen, Variant::Soft, Variant::Solid];

    /// Returns the CSS class carried by the custom element.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Variant::Zen => "zen",
            Variant::Soft => "soft",
            Variant::Solid => "solid",
        }
    }

    /// Parses a variant name, falling back to the default for anything
    /// unrecognized.
    #[must_use]
    pub fn parse_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::warn!("unknown toast variant {name:?}, using {}", Variant::default());
            Variant::default()
        })
    }

    /// Picks the first recognized variant class in a whitespace-separated
    /// class list.
    #[must_use]
    pub fn from_class_list(classes: &str) -> Option<Self> {
        classes
            .split_ascii_whitespace()
            .find_map(|class| class.parse().ok())
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Returned when a string names no known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown toast variant: {}", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zen" => Ok(Variant::Zen),
            "soft" => Ok(Variant::Soft),
            "solid" => Ok(Variant::Solid),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}
