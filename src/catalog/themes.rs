//! Visual theme catalog.
//!
//! Each theme is a static table of styling values. The table is keyed only by
//! the theme name; nothing here depends on the runtime environment.

use crate::catalog::color_sets::color_set;
use crate::models::{
    sequence, AxisConfig, ColorSetName, FontWeight, LegendConfig, MarkConfig, RangeConfig,
    ThemeConfig, ThemeName, TitleConfig, ViewConfig,
};

/// Static styling values for one theme.
struct ThemeTable {
    background: &'static str,
    label: &'static str,
    heading: &'static str,
    grid: &'static str,
    domain: &'static str,
    title: &'static str,
    title_weight: Weight,
    font: Option<&'static str>,
    domain_width: Option<f64>,
    view_stroke: &'static str,
    view_fill: Option<&'static str>,
    corner_radius: Option<f64>,
    stroke_width: Option<f64>,
    category: [&'static str; 8],
    heatmap: &'static [&'static str],
}

#[derive(Clone, Copy)]
enum Weight {
    Keyword(&'static str),
    Numeric(u16),
}

static LIGHT: ThemeTable = ThemeTable {
    background: "#ffffff",
    label: "#616161",
    heading: "#424242",
    grid: "#e0e0e0",
    domain: "#bdbdbd",
    title: "#212121",
    title_weight: Weight::Numeric(600),
    font: None,
    domain_width: None,
    view_stroke: "transparent",
    view_fill: None,
    corner_radius: None,
    stroke_width: None,
    category: [
        "#1976d2", "#757575", "#2e7d32", "#ed6c02", "#9c27b0", "#0288d1", "#d32f2f", "#5d4037",
    ],
    heatmap: &["#e3f2fd", "#90caf9", "#42a5f5", "#1e88e5", "#0d47a1"],
};

static DARK: ThemeTable = ThemeTable {
    background: "#121212",
    label: "#b0b0b0",
    heading: "#e0e0e0",
    grid: "#333333",
    domain: "#555555",
    title: "#ffffff",
    title_weight: Weight::Keyword("bold"),
    font: None,
    domain_width: None,
    view_stroke: "transparent",
    view_fill: None,
    corner_radius: None,
    stroke_width: None,
    category: [
        "#90caf9", "#bdbdbd", "#81c784", "#ffb74d", "#ce93d8", "#4fc3f7", "#e57373", "#bcaaa4",
    ],
    heatmap: &["#0d1b2a", "#1b3a5c", "#2f6690", "#3a7ca5", "#81c3d7"],
};

static FLUENT: ThemeTable = ThemeTable {
    background: "#faf9f8",
    label: "#605e5c",
    heading: "#323130",
    grid: "#edebe9",
    domain: "#c8c6c4",
    title: "#201f1e",
    title_weight: Weight::Numeric(600),
    font: Some("Segoe UI"),
    domain_width: None,
    view_stroke: "#edebe9",
    view_fill: Some("#ffffff"),
    corner_radius: Some(4.0),
    stroke_width: None,
    category: [
        "#0078d4", "#8764b8", "#107c10", "#ff8c00", "#e3008c", "#00b7c3", "#d13438", "#69797e",
    ],
    heatmap: &["#deecf9", "#c7e0f4", "#71afe5", "#2b88d8", "#004578"],
};

static NEON: ThemeTable = ThemeTable {
    background: "#0a0a12",
    label: "#c0c0ff",
    heading: "#e0e0ff",
    grid: "#1f1f3a",
    domain: "#3a3a6a",
    title: "#00f0ff",
    title_weight: Weight::Keyword("bold"),
    font: Some("Orbitron"),
    domain_width: None,
    view_stroke: "#1f1f3a",
    view_fill: None,
    corner_radius: None,
    stroke_width: Some(2.5),
    category: [
        "#00f0ff", "#ff00ff", "#39ff14", "#ffff00", "#ff9e00", "#bc13fe", "#ff073a", "#00ff9f",
    ],
    heatmap: &["#12002b", "#3d0066", "#7a00b3", "#bc13fe", "#ff00ff"],
};

static MATERIAL3: ThemeTable = ThemeTable {
    background: "#fffbfe",
    label: "#49454f",
    heading: "#1c1b1f",
    grid: "#e7e0ec",
    domain: "#79747e",
    title: "#1c1b1f",
    title_weight: Weight::Numeric(500),
    font: Some("Roboto"),
    domain_width: None,
    view_stroke: "transparent",
    view_fill: Some("#f7f2fa"),
    corner_radius: Some(12.0),
    stroke_width: None,
    category: [
        "#6750a4", "#625b71", "#7d5260", "#386a20", "#0061a4", "#b3261e", "#006a6a", "#7d5700",
    ],
    heatmap: &["#f6edff", "#d0bcff", "#9a82db", "#6750a4", "#21005d"],
};

static NEUMORPHISM: ThemeTable = ThemeTable {
    background: "#e0e5ec",
    label: "#6b7a90",
    heading: "#4a5568",
    grid: "#d1d9e6",
    domain: "#a3b1c6",
    title: "#4a5568",
    title_weight: Weight::Numeric(600),
    font: None,
    domain_width: None,
    view_stroke: "transparent",
    view_fill: Some("#e0e5ec"),
    corner_radius: Some(16.0),
    stroke_width: None,
    category: [
        "#6d8ec9", "#9a86c9", "#5a9e6f", "#e0a45a", "#d9777a", "#5ab3b3", "#b39a80", "#8a94a6",
    ],
    heatmap: &["#e6ebf2", "#c3d1ea", "#93acd8", "#6d8ec9", "#4a6aa5"],
};

static BRUTALIST: ThemeTable = ThemeTable {
    background: "#ffffff",
    label: "#000000",
    heading: "#000000",
    grid: "#000000",
    domain: "#000000",
    title: "#000000",
    title_weight: Weight::Numeric(900),
    font: Some("Courier New"),
    domain_width: Some(3.0),
    view_stroke: "#000000",
    view_fill: None,
    corner_radius: Some(0.0),
    stroke_width: Some(3.0),
    category: [
        "#000000", "#ff0000", "#0000ff", "#ffdd00", "#00a300", "#ff00ff", "#00d1d1", "#ff7a00",
    ],
    heatmap: &["#ffffff", "#ffdd00", "#ff7a00", "#ff0000", "#000000"],
};

static RETRO: ThemeTable = ThemeTable {
    background: "#f4ecd8",
    label: "#5c4a32",
    heading: "#3b2f1e",
    grid: "#e3d5b8",
    domain: "#8b6f47",
    title: "#3b2f1e",
    title_weight: Weight::Keyword("bold"),
    font: Some("Georgia"),
    domain_width: None,
    view_stroke: "#d6c7a1",
    view_fill: None,
    corner_radius: None,
    stroke_width: None,
    category: [
        "#c8702e", "#3e6e8e", "#5b7f3a", "#d9a441", "#8e5572", "#4f8a8b", "#8b6f47", "#6b6b6b",
    ],
    heatmap: &["#efe6d2", "#e0c48c", "#d9a441", "#c8702e", "#8e3b2c"],
};

fn table(theme: ThemeName) -> &'static ThemeTable {
    match theme {
        ThemeName::Light => &LIGHT,
        ThemeName::Dark => &DARK,
        ThemeName::Fluent => &FLUENT,
        ThemeName::Neon => &NEON,
        ThemeName::Material3 => &MATERIAL3,
        ThemeName::Neumorphism => &NEUMORPHISM,
        ThemeName::Brutalist => &BRUTALIST,
        ThemeName::Retro => &RETRO,
    }
}

/// Builds the native configuration for a theme.
///
/// The diverging range reuses the theme's `diverging` color set, so the two
/// stay consistent. `range.ordinal` is left unset; it is only populated when
/// a color set override is resolved.
#[must_use]
pub fn theme_config(theme: ThemeName) -> ThemeConfig {
    let t = table(theme);
    let font = t.font.map(str::to_string);

    ThemeConfig {
        background: Some(t.background.to_string()),
        axis: AxisConfig {
            label_color: t.label.to_string(),
            title_color: t.heading.to_string(),
            grid_color: t.grid.to_string(),
            domain_color: t.domain.to_string(),
            tick_color: t.domain.to_string(),
            label_font: font.clone(),
            domain_width: t.domain_width,
        },
        legend: LegendConfig {
            label_color: t.label.to_string(),
            title_color: t.heading.to_string(),
            label_font: font.clone(),
        },
        title: TitleConfig {
            color: t.title.to_string(),
            font_weight: match t.title_weight {
                Weight::Keyword(word) => FontWeight::Named(word.to_string()),
                Weight::Numeric(n) => FontWeight::Numeric(n),
            },
            font,
            font_size: Some(16.0),
        },
        view: ViewConfig {
            stroke: t.view_stroke.to_string(),
            fill: t.view_fill.map(str::to_string),
            corner_radius: t.corner_radius,
        },
        mark: MarkConfig {
            color: Some(t.category[0].to_string()),
            stroke_width: t.stroke_width,
        },
        range: RangeConfig {
            category: sequence(&t.category),
            diverging: Some(color_set(theme, ColorSetName::Diverging)),
            heatmap: Some(sequence(t.heatmap)),
            ordinal: None,
        },
    }
}
