//! Static theme and color set catalogs.

pub mod color_sets;
pub mod themes;

pub use color_sets::{color_catalog, color_set};
pub use themes::theme_config;
