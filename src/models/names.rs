//! Closed name enumerations for themes and semantic color sets.
//!
//! Both sets are fixed at compile time. Every catalog lookup matches on these
//! enums exhaustively, so adding a variant forces an update of every table.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual theme variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Default light theme
    #[default]
    Light,
    /// Dark theme for dark page backgrounds
    Dark,
    /// Fluent design inspired theme
    Fluent,
    /// High-saturation neon on near-black
    Neon,
    /// Material 3 tonal palette
    Material3,
    /// Soft, low-contrast neumorphic surfaces
    Neumorphism,
    /// Hard black borders and primary colors
    Brutalist,
    /// Muted vintage print colors
    Retro,
}

impl ThemeName {
    /// All themes in catalog order.
    pub const ALL: [Self; 8] = [
        Self::Light,
        Self::Dark,
        Self::Fluent,
        Self::Neon,
        Self::Material3,
        Self::Neumorphism,
        Self::Brutalist,
        Self::Retro,
    ];

    /// Returns the string tag used for storage, attributes and events.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Fluent => "fluent",
            Self::Neon => "neon",
            Self::Material3 => "material3",
            Self::Neumorphism => "neumorphism",
            Self::Brutalist => "brutalist",
            Self::Retro => "retro",
        }
    }

    /// Returns the legacy CSS class toggled on the document root.
    #[must_use]
    pub fn css_class(self) -> String {
        format!("theme-{}", self.as_str())
    }

    /// Whether the theme renders on a dark background.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark | Self::Neon)
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str() == tag)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown theme '{}'. Must be one of: {}",
                    s.trim(),
                    join_tags(Self::ALL.iter().map(|t| t.as_str()))
                )
            })
    }
}

/// Semantic color catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetName {
    /// Growth greens for financial series
    Financial,
    /// Positive / neutral / negative
    Sentiment,
    /// Operational status lights
    Status,
    /// Performance bands from excellent to critical
    Performance,
    /// Cold to hot
    Temperature,
    /// Critical to low priority
    Priority,
    /// General-purpose distinct hues
    Categories,
    /// Two-ended scale around a neutral midpoint
    Diverging,
}

impl ColorSetName {
    /// All color sets in catalog order.
    pub const ALL: [Self; 8] = [
        Self::Financial,
        Self::Sentiment,
        Self::Status,
        Self::Performance,
        Self::Temperature,
        Self::Priority,
        Self::Categories,
        Self::Diverging,
    ];

    /// Returns the string tag used for storage, attributes and events.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Financial => "financial",
            Self::Sentiment => "sentiment",
            Self::Status => "status",
            Self::Performance => "performance",
            Self::Temperature => "temperature",
            Self::Priority => "priority",
            Self::Categories => "categories",
            Self::Diverging => "diverging",
        }
    }

    /// Human-readable label for listings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Financial => "Financial",
            Self::Sentiment => "Sentiment",
            Self::Status => "Status",
            Self::Performance => "Performance",
            Self::Temperature => "Temperature",
            Self::Priority => "Priority",
            Self::Categories => "Categories",
            Self::Diverging => "Diverging",
        }
    }
}

impl fmt::Display for ColorSetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorSetName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|set| set.as_str() == tag)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown color set '{}'. Must be one of: {}",
                    s.trim(),
                    join_tags(Self::ALL.iter().map(|c| c.as_str()))
                )
            })
    }
}

fn join_tags<'a>(tags: impl Iterator<Item = &'a str>) -> String {
    tags.collect::<Vec<_>>().join(", ")
}
