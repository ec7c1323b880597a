//! Semantic color catalog.
//!
//! Eight purpose-built color sequences, each tuned per theme so that a set
//! keeps its meaning (green = good, red = bad) while matching the contrast of
//! the active theme's background.

use crate::models::{sequence, ColorSequence, ColorSetName, ThemeName};

/// Returns the color sequence for a color set under the given theme.
///
/// Total over all theme and color set combinations; every sequence is
/// non-empty.
#[must_use]
pub fn color_set(theme: ThemeName, set: ColorSetName) -> ColorSequence {
    sequence(palette(theme, set))
}

/// Returns every color set for a theme, in catalog order.
#[must_use]
pub fn color_catalog(theme: ThemeName) -> Vec<(ColorSetName, ColorSequence)> {
    ColorSetName::ALL
        .into_iter()
        .map(|set| (set, color_set(theme, set)))
        .collect()
}

fn palette(theme: ThemeName, set: ColorSetName) -> &'static [&'static str] {
    match theme {
        ThemeName::Light => light(set),
        ThemeName::Dark => dark(set),
        ThemeName::Fluent => fluent(set),
        ThemeName::Neon => neon(set),
        ThemeName::Material3 => material3(set),
        ThemeName::Neumorphism => neumorphism(set),
        ThemeName::Brutalist => brutalist(set),
        ThemeName::Retro => retro(set),
    }
}

const fn light(set: ColorSetName) -> &'static [&'static str] {
    match set {
        ColorSetName::Financial => &["#2e7d32", "#66bb6a", "#4caf50", "#81c784", "#a5d6a7"],
        ColorSetName::Sentiment => &["#2e7d32", "#9e9e9e", "#c62828"],
        ColorSetName::Status => &["#2e7d32", "#f9a825", "#c62828", "#1565c0"],
        ColorSetName::Performance => &["#1b5e20", "#43a047", "#fdd835", "#fb8c00", "#e53935"],
        ColorSetName::Temperature => &[
            "#0d47a1", "#1976d2", "#64b5f6", "#fff176", "#ffb74d", "#f57c00", "#d32f2f",
        ],
        ColorSetName::Priority => &["#b71c1c", "#e64a19", "#fbc02d", "#388e3c"],
        ColorSetName::Categories => &[
            "#1976d2", "#d81b60", "#388e3c", "#f57c00", "#7b1fa2", "#0097a7", "#5d4037", "#616161",
        ],
        ColorSetName::Diverging => &[
            "#67001f", "#b2182b", "#d6604d", "#f4a582", "#fddbc7", "#f7f7f7", "#d1e5f0",
            "#92c5de", "#4393c3", "#2166ac", "#053061",
        ],
    }
}

const fn dark(set: ColorSetName) -> &'static [&'static str] {
    match set {
        ColorSetName::Financial => &["#66bb6a", "#81c784", "#a5d6a7", "#4caf50", "#c8e6c9"],
        ColorSetName::Sentiment => &["#81c784", "#bdbdbd", "#e57373"],
        ColorSetName::Status => &["#66bb6a", "#ffd54f", "#ef5350", "#64b5f6"],
        ColorSetName::Performance => &["#66bb6a", "#9ccc65", "#ffee58", "#ffa726", "#ef5350"],
        ColorSetName::Temperature => &[
            "#64b5f6", "#90caf9", "#e3f2fd", "#fff59d", "#ffcc80", "#ffa726", "#ef5350",
        ],
        ColorSetName::Priority => &["#ef5350", "#ff7043", "#ffca28", "#66bb6a"],
        ColorSetName::Categories => &[
            "#64b5f6", "#f06292", "#81c784", "#ffb74d", "#ba68c8", "#4dd0e1", "#a1887f", "#e0e0e0",
        ],
        ColorSetName::Diverging => &[
            "#d6604d", "#f4a582", "#fddbc7", "#424242", "#d1e5f0", "#92c5de", "#4393c3",
        ],
    }
}

const fn fluent(set: ColorSetName) -> &'static [&'static str] {
    match set {
        ColorSetName::Financial => &["#107c10", "#54b054", "#0b6a0b", "#7fba00", "#bad80a"],
        ColorSetName::Sentiment => &["#107c10", "#8a8886", "#d13438"],
        ColorSetName::Status => &["#107c10", "#ffb900", "#d13438", "#0078d4"],
        ColorSetName::Performance => &["#0b6a0b", "#107c10", "#ffb900", "#ff8c00", "#d13438"],
        ColorSetName::Temperature => &[
            "#004e8c", "#0078d4", "#2b88d8", "#c7e0f4", "#fce100", "#ff8c00", "#d13438",
        ],
        ColorSetName::Priority => &["#a4262c", "#ca5010", "#ffb900", "#107c10"],
        ColorSetName::Categories => &[
            "#0078d4", "#e3008c", "#107c10", "#ff8c00", "#8764b8", "#00b7c3", "#8e562e", "#69797e",
        ],
        ColorSetName::Diverging => &[
            "#a4262c", "#d13438", "#f1bbbc", "#f3f2f1", "#c7e0f4", "#2b88d8", "#004e8c",
        ],
    }
}

const fn neon(set: ColorSetName) -> &'static [&'static str] {
    match set {
        ColorSetName::Financial => &["#39ff14", "#00ff9f", "#7cfc00", "#00e676", "#b2ff59"],
        ColorSetName::Sentiment => &["#39ff14", "#e0e0ff", "#ff073a"],
        ColorSetName::Status => &["#39ff14", "#ffff00", "#ff073a", "#00f0ff"],
        ColorSetName::Performance => &["#00ff9f", "#39ff14", "#ffff00", "#ff9e00", "#ff073a"],
        ColorSetName::Temperature => &[
            "#00f0ff", "#00b3ff", "#7a5cff", "#ff00ff", "#ff3caa", "#ff073a",
        ],
        ColorSetName::Priority => &["#ff073a", "#ff9e00", "#ffff00", "#39ff14"],
        ColorSetName::Categories => &[
            "#00f0ff", "#ff00ff", "#39ff14", "#ffff00", "#ff9e00", "#bc13fe", "#ff3caa", "#00ff9f",
        ],
        ColorSetName::Diverging => &["#ff00ff", "#ff3caa", "#2a2a40", "#00b3ff", "#00f0ff"],
    }
}

const fn material3(set: ColorSetName) -> &'static [&'static str] {
    match set {
        ColorSetName::Financial => &["#386a20", "#55a630", "#80c35a", "#b7f397", "#1f5100"],
        ColorSetName::Sentiment => &["#386a20", "#79747e", "#b3261e"],
        ColorSetName::Status => &["#386a20", "#7d5700", "#b3261e", "#0061a4"],
        ColorSetName::Performance => &["#1f5100", "#386a20", "#c9a100", "#e46c00", "#b3261e"],
        ColorSetName::Temperature => &[
            "#001d36", "#0061a4", "#9ecaff", "#fff0c2", "#ffb870", "#c75f00", "#b3261e",
        ],
        ColorSetName::Priority => &["#b3261e", "#c75f00", "#7d5700", "#386a20"],
        ColorSetName::Categories => &[
            "#6750a4", "#b3261e", "#386a20", "#7d5700", "#0061a4", "#984061", "#006a6a", "#625b71",
        ],
        ColorSetName::Diverging => &[
            "#8c1d18", "#b3261e", "#f9dedc", "#f4eff4", "#d1e4ff", "#0061a4", "#001d36",
        ],
    }
}

const fn neumorphism(set: ColorSetName) -> &'static [&'static str] {
    match set {
        ColorSetName::Financial => &["#5a9e6f", "#7fb88f", "#a3cfb0", "#4a8a5c", "#c4e3cd"],
        ColorSetName::Sentiment => &["#5a9e6f", "#a3b1c6", "#d9777a"],
        ColorSetName::Status => &["#5a9e6f", "#e0b25a", "#d9777a", "#6d8ec9"],
        ColorSetName::Performance => &["#4a8a5c", "#7fb88f", "#e0c25a", "#e09a5a", "#d9777a"],
        ColorSetName::Temperature => &[
            "#6d8ec9", "#93acd8", "#c3d1ea", "#f0e2b6", "#f0bf8f", "#d9777a",
        ],
        ColorSetName::Priority => &["#d9777a", "#e09a5a", "#e0c25a", "#5a9e6f"],
        ColorSetName::Categories => &[
            "#6d8ec9", "#d98cb3", "#5a9e6f", "#e0a45a", "#9a86c9", "#5ab3b3", "#b39a80", "#8a94a6",
        ],
        ColorSetName::Diverging => &["#d9777a", "#ebb1b3", "#e0e5ec", "#b1c4e6", "#6d8ec9"],
    }
}

const fn brutalist(set: ColorSetName) -> &'static [&'static str] {
    match set {
        ColorSetName::Financial => &["#00a300", "#00d100", "#007a00", "#66ff66", "#004d00"],
        ColorSetName::Sentiment => &["#00a300", "#000000", "#ff0000"],
        ColorSetName::Status => &["#00a300", "#ffdd00", "#ff0000", "#0000ff"],
        ColorSetName::Performance => &["#007a00", "#00d100", "#ffdd00", "#ff7a00", "#ff0000"],
        ColorSetName::Temperature => &[
            "#0000ff", "#00a2ff", "#d9d9d9", "#ffdd00", "#ff7a00", "#ff0000",
        ],
        ColorSetName::Priority => &["#ff0000", "#ff7a00", "#ffdd00", "#00a300"],
        ColorSetName::Categories => &[
            "#ff0000", "#0000ff", "#ffdd00", "#00a300", "#ff00ff", "#00d1d1", "#ff7a00", "#000000",
        ],
        ColorSetName::Diverging => &["#ff0000", "#ff8080", "#f2f2f2", "#8080ff", "#0000ff"],
    }
}

const fn retro(set: ColorSetName) -> &'static [&'static str] {
    match set {
        ColorSetName::Financial => &["#5b7f3a", "#8aa35a", "#b4c08a", "#3f5a26", "#d6d3a0"],
        ColorSetName::Sentiment => &["#5b7f3a", "#a89f91", "#b5452f"],
        ColorSetName::Status => &["#5b7f3a", "#d9a441", "#b5452f", "#3e6e8e"],
        ColorSetName::Performance => &["#3f5a26", "#8aa35a", "#d9a441", "#c8702e", "#b5452f"],
        ColorSetName::Temperature => &[
            "#2f4f6f", "#3e6e8e", "#8fb0c4", "#efd9a7", "#e0a458", "#c8702e", "#8e3b2c",
        ],
        ColorSetName::Priority => &["#8e3b2c", "#c8702e", "#d9a441", "#5b7f3a"],
        ColorSetName::Categories => &[
            "#c8702e", "#3e6e8e", "#5b7f3a", "#d9a441", "#8e5572", "#4f8a8b", "#8b6f47", "#6b6b6b",
        ],
        ColorSetName::Diverging => &["#8e3b2c", "#c8702e", "#efe6d2", "#8fb0c4", "#2f4f6f"],
    }
}
