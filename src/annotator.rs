//! Merges resolved theme configuration into Vega-Lite chart specifications.
//!
//! Three entry points with different precedence:
//!
//! - [`annotate`]: non-destructive. Fills gaps, keeps every color the caller set.
//! - [`force_annotate`]: destructive. Overwrites ranges, scale ranges and mark colors.
//! - [`annotate_with_color_set`]: swaps the palette for a semantic color set but
//!   keeps explicit mark colors.
//!
//! Specs come from free-form editor input, so every function tolerates missing
//! or malformed fields. A field of the wrong shape is left as it is and the
//! rest of the spec is annotated normally. The input is never modified; each
//! call returns a new value.

use serde_json::{Map, Value};
use tracing::debug;

use crate::models::{ColorSetName, ThemeConfig, ThemeName};
use crate::resolver::resolve;

/// `config` sub-records in which the caller's own fields win over the theme.
pub const CALLER_PRECEDENCE_SECTIONS: [&str; 6] =
    ["axis", "legend", "title", "view", "mark", "range"];

/// How a mark color is written when the spec has no color encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkColorMode {
    /// Only set when the mark has no color yet
    FillGap,
    /// Always set, replacing an explicit color
    Overwrite,
}

/// Shape of `encoding.color` in a spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorChannel {
    /// No color encoding
    Absent,
    /// Color encoding is an object definition
    Defined,
    /// `encoding.color` exists but is not an object
    Malformed,
    /// `encoding` itself is not an object, so color presence is unknown
    Unknown,
}

/// Applies a theme without overriding anything the caller set.
///
/// `config` is built by overlaying every top-level theme key on the caller's
/// config, then re-merging the six [`CALLER_PRECEDENCE_SECTIONS`] with the
/// caller's sub-fields on top. The theme therefore wins for whole top-level
/// keys such as `background`, while the caller wins inside `axis`, `legend`,
/// `title`, `view`, `mark` and `range`.
///
/// Without a color encoding the mark gets the theme's primary color unless it
/// already has one. A nominal or ordinal color encoding without a
/// `scale.range` gets the theme's category range.
#[must_use]
pub fn annotate(spec: &Value, theme: &ThemeConfig) -> Value {
    let mut annotated = spec.clone();
    let Some(root) = annotated.as_object_mut() else {
        debug!("Skipping annotation of non-object spec");
        return annotated;
    };

    merge_theme_config(root, theme);

    match color_channel(root) {
        ColorChannel::Absent => {
            if let Some(color) = theme.primary_color() {
                apply_mark_color(root, color, MarkColorMode::FillGap);
            }
        }
        ColorChannel::Defined => {
            if let Some(color) = color_definition_mut(root) {
                if is_categorical(color) && !has_scale_range(color) {
                    set_scale_range(color, &theme.range.category);
                }
            }
        }
        ColorChannel::Malformed | ColorChannel::Unknown => {}
    }

    debug!("Annotated spec with theme");
    annotated
}

/// Applies a theme's colors, overwriting whatever the caller set.
///
/// Replaces `config.range` with the theme's category, diverging, heatmap and
/// ordinal ranges and sets `config.mark.color` to the first category color.
/// A color encoding of any type gets the category range as its scale range.
/// Without a color encoding the spec's own mark color is overwritten too.
#[must_use]
pub fn force_annotate(spec: &Value, theme: &ThemeConfig) -> Value {
    let mut annotated = spec.clone();
    let Some(root) = annotated.as_object_mut() else {
        debug!("Skipping forced annotation of non-object spec");
        return annotated;
    };

    let primary = theme.range.category.first().cloned();

    if let Some(config) = config_object_mut(root) {
        config.insert("range".to_string(), range_value(theme));
        if let Some(primary) = &primary {
            if let Some(mark) = child_object_mut(config, "mark") {
                mark.insert("color".to_string(), Value::String(primary.clone()));
            }
        }
    }

    match color_channel(root) {
        ColorChannel::Absent => {
            if let Some(primary) = &primary {
                apply_mark_color(root, primary, MarkColorMode::Overwrite);
            }
        }
        ColorChannel::Defined => {
            if let Some(color) = color_definition_mut(root) {
                set_scale_range(color, &theme.range.category);
            }
        }
        ColorChannel::Malformed | ColorChannel::Unknown => {}
    }

    debug!("Force-annotated spec with theme");
    annotated
}

/// Substitutes a semantic color set as the spec's palette.
///
/// `config.range.category` is replaced by the color set. Other range keys the
/// caller set are kept; absent ones are filled from the theme resolved with
/// this color set. A nominal or ordinal color encoding has its scale range
/// replaced. Without a color encoding the mark gets the set's first color
/// only if it has no color yet.
#[must_use]
pub fn annotate_with_color_set(spec: &Value, theme: ThemeName, set: ColorSetName) -> Value {
    let resolved = resolve(theme, Some(set));
    let colors = &resolved.range.category;

    let mut annotated = spec.clone();
    let Some(root) = annotated.as_object_mut() else {
        debug!("Skipping color set annotation of non-object spec");
        return annotated;
    };

    if let Some(config) = config_object_mut(root) {
        if let Some(range) = child_object_mut(config, "range") {
            range.insert("category".to_string(), colors_value(colors));
            let fallbacks = [
                ("diverging", &resolved.range.diverging),
                ("heatmap", &resolved.range.heatmap),
                ("ordinal", &resolved.range.ordinal),
            ];
            for (key, fallback) in fallbacks {
                if let Some(fallback) = fallback {
                    if present(range, key).is_none() {
                        range.insert(key.to_string(), colors_value(fallback));
                    }
                }
            }
        }
    }

    match color_channel(root) {
        ColorChannel::Absent => {
            if let Some(primary) = colors.first() {
                apply_mark_color(root, primary, MarkColorMode::FillGap);
            }
        }
        ColorChannel::Defined => {
            if let Some(color) = color_definition_mut(root) {
                if is_categorical(color) {
                    set_scale_range(color, colors);
                }
            }
        }
        ColorChannel::Malformed | ColorChannel::Unknown => {}
    }

    debug!(theme = %theme, color_set = %set, "Annotated spec with color set");
    annotated
}

/// Builds `config` for [`annotate`]. A non-object `config` is left untouched.
fn merge_theme_config(root: &mut Map<String, Value>, theme: &ThemeConfig) {
    let caller = match root.get("config") {
        None | Some(Value::Null) => Map::new(),
        Some(Value::Object(config)) => config.clone(),
        Some(_) => return,
    };
    let Value::Object(theme_config) = theme.to_value() else {
        return;
    };

    let mut merged = caller.clone();
    for (key, value) in &theme_config {
        merged.insert(key.clone(), value.clone());
    }

    for section in CALLER_PRECEDENCE_SECTIONS {
        let mut combined = theme_config
            .get(section)
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        if let Some(Value::Object(own)) = caller.get(section) {
            for (key, value) in own {
                combined.insert(key.clone(), value.clone());
            }
        }
        merged.insert(section.to_string(), Value::Object(combined));
    }

    root.insert("config".to_string(), Value::Object(merged));
}

/// Returns a field's value, treating `null` as absent.
fn present<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|value| !value.is_null())
}

/// Returns `map[key]` as an object, creating it when absent or null.
///
/// Returns `None` when the field exists with another shape.
fn child_object_mut<'a>(
    map: &'a mut Map<String, Value>,
    key: &str,
) -> Option<&'a mut Map<String, Value>> {
    let child = map
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if child.is_null() {
        *child = Value::Object(Map::new());
    }
    child.as_object_mut()
}

fn config_object_mut(root: &mut Map<String, Value>) -> Option<&mut Map<String, Value>> {
    child_object_mut(root, "config")
}

fn color_channel(root: &Map<String, Value>) -> ColorChannel {
    match present(root, "encoding") {
        None => ColorChannel::Absent,
        Some(Value::Object(encoding)) => match present(encoding, "color") {
            None => ColorChannel::Absent,
            Some(Value::Object(_)) => ColorChannel::Defined,
            Some(_) => ColorChannel::Malformed,
        },
        Some(_) => ColorChannel::Unknown,
    }
}

fn color_definition_mut(root: &mut Map<String, Value>) -> Option<&mut Map<String, Value>> {
    root.get_mut("encoding")?
        .as_object_mut()?
        .get_mut("color")?
        .as_object_mut()
}

fn is_categorical(color: &Map<String, Value>) -> bool {
    matches!(
        color.get("type").and_then(Value::as_str),
        Some("nominal" | "ordinal")
    )
}

fn has_scale_range(color: &Map<String, Value>) -> bool {
    match present(color, "scale") {
        Some(Value::Object(scale)) => present(scale, "range").is_some(),
        // A malformed scale is never replaced
        Some(_) => true,
        None => false,
    }
}

/// Sets `scale.range`, creating `scale` if needed. A non-object scale is kept.
fn set_scale_range(color: &mut Map<String, Value>, colors: &[String]) {
    if let Some(scale) = child_object_mut(color, "scale") {
        scale.insert("range".to_string(), colors_value(colors));
    }
}

fn apply_mark_color(root: &mut Map<String, Value>, color: &str, mode: MarkColorMode) {
    let Some(mark) = root.get_mut("mark") else {
        return;
    };

    match mark {
        Value::String(kind) => {
            let mut object = Map::new();
            object.insert("type".to_string(), Value::String(kind.clone()));
            object.insert("color".to_string(), Value::String(color.to_string()));
            *mark = Value::Object(object);
        }
        Value::Object(object) => {
            if mode == MarkColorMode::Overwrite || present(object, "color").is_none() {
                object.insert("color".to_string(), Value::String(color.to_string()));
            }
        }
        _ => {}
    }
}

fn colors_value(colors: &[String]) -> Value {
    Value::Array(colors.iter().cloned().map(Value::String).collect())
}

fn range_value(theme: &ThemeConfig) -> Value {
    let range = &theme.range;
    let mut map = Map::new();
    map.insert("category".to_string(), colors_value(&range.category));
    let optional = [
        ("diverging", &range.diverging),
        ("heatmap", &range.heatmap),
        ("ordinal", &range.ordinal),
    ];
    for (key, colors) in optional {
        if let Some(colors) = colors {
            map.insert(key.to_string(), colors_value(colors));
        }
    }
    Value::Object(map)
}
