//! Mirror of presentation state onto the document root.
//!
//! CSS and DOM consumers read the active theme from root attributes and a
//! legacy theme class rather than from the state object.

use std::collections::{BTreeMap, BTreeSet};

/// Root attribute holding the active theme tag.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Root attribute holding the active color set tag, removed when none is active.
pub const COLOR_SET_ATTRIBUTE: &str = "data-color-set";

/// Write access to the document root.
pub trait DocumentMirror {
    /// Sets an attribute, replacing any previous value.
    fn set_attribute(&mut self, name: &str, value: &str);
    /// Removes an attribute if present.
    fn remove_attribute(&mut self, name: &str);
    /// Adds a class to the root class list.
    fn add_class(&mut self, class: &str);
    /// Removes a class from the root class list.
    fn remove_class(&mut self, class: &str);
}

/// In-memory root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootAttributes {
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
}

impl RootAttributes {
    /// Creates an empty root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns true if the class is present.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// All classes in sorted order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// All attributes in sorted order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl DocumentMirror for RootAttributes {
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }
}
