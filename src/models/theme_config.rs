//! Resolved Vega-Lite configuration produced by the theme catalog.
//!
//! Field names serialize to the camelCase keys Vega-Lite expects under a
//! spec's `config` block, so a [`ThemeConfig`] can be merged into a chart
//! specification as plain JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered list of hex colors. Index 0 is the primary color.
pub type ColorSequence = Vec<String>;

/// Converts a static color table into an owned sequence.
#[must_use]
pub fn sequence(colors: &[&str]) -> ColorSequence {
    colors.iter().map(|c| (*c).to_string()).collect()
}

/// Title font weight, either a CSS keyword or a numeric weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontWeight {
    /// Keyword such as "bold" or "normal"
    Named(String),
    /// Numeric weight (100-900)
    Numeric(u16),
}

/// Axis styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisConfig {
    /// Tick label text color
    pub label_color: String,
    /// Axis title text color
    pub title_color: String,
    /// Grid line color
    pub grid_color: String,
    /// Axis baseline color
    pub domain_color: String,
    /// Tick mark color
    pub tick_color: String,
    /// Tick label font family
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_font: Option<String>,
    /// Axis baseline width in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_width: Option<f64>,
}

/// Legend styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendConfig {
    /// Legend entry label color
    pub label_color: String,
    /// Legend title color
    pub title_color: String,
    /// Label font family
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_font: Option<String>,
}

/// Chart title styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleConfig {
    /// Title text color
    pub color: String,
    /// Title font weight
    pub font_weight: FontWeight,
    /// Title font family
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    /// Title font size in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

/// Plot area styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewConfig {
    /// Plot border color ("transparent" hides it)
    pub stroke: String,
    /// Plot background fill
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    /// Plot border corner radius
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
}

/// Default mark styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkConfig {
    /// Default mark color, conventionally `range.category[0]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Default stroke width for line-like marks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}

/// Named color ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeConfig {
    /// Colors assigned in order to categorical values
    pub category: ColorSequence,
    /// Two-ended scheme for diverging quantitative data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diverging: Option<ColorSequence>,
    /// Sequential scheme for heatmaps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heatmap: Option<ColorSequence>,
    /// Colors for ordinal scales
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<ColorSequence>,
}

/// A complete theme configuration.
///
/// Always built fresh by the catalog; callers own their copy and nothing is
/// shared between resolutions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Chart background (top-level Vega-Lite `config.background`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Axis styling
    pub axis: AxisConfig,
    /// Legend styling
    pub legend: LegendConfig,
    /// Title styling
    pub title: TitleConfig,
    /// Plot area styling
    pub view: ViewConfig,
    /// Default mark styling
    pub mark: MarkConfig,
    /// Color ranges
    pub range: RangeConfig,
}

impl ThemeConfig {
    /// Color injected into marks that have no color encoding.
    ///
    /// `mark.color` when set, otherwise the first category color.
    #[must_use]
    pub fn primary_color(&self) -> Option<&str> {
        self.mark
            .color
            .as_deref()
            .or_else(|| self.range.category.first().map(String::as_str))
    }

    /// Serializes the theme as a Vega-Lite `config` object.
    #[must_use]
    pub fn to_value(&self) -> Value {
        // Plain data structs with string keys cannot fail to serialize.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
