//! Page-wide styling outside the widget's own subtree.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

/// CSS property the magnifier drives on the root element.
pub const FONT_SIZE_PROPERTY: &str = "font-size";

/// Sink for the few style changes that must reach the whole page: body classes
/// for the color modes and the root font size for the magnifier.
pub trait PageStyle {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn set_property(&self, name: &str, value: &str);
    /// Drop an inline property so the inherited value applies again.
    fn remove_property(&self, name: &str);
}

impl<P: PageStyle + ?Sized> PageStyle for &P {
    fn add_class(&self, class: &str) {
        (**self).add_class(class);
    }

    fn remove_class(&self, class: &str) {
        (**self).remove_class(class);
    }

    fn set_property(&self, name: &str, value: &str) {
        (**self).set_property(name, value);
    }

    fn remove_property(&self, name: &str) {
        (**self).remove_property(name);
    }
}

/// [`PageStyle`] that keeps the resulting state in memory.
#[derive(Debug, Default)]
pub struct RecordedStyle {
    classes: RefCell<BTreeSet<String>>,
    properties: RefCell<BTreeMap<String, String>>,
}

impl RecordedStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    #[must_use]
    pub fn classes(&self) -> BTreeSet<String> {
        self.classes.borrow().clone()
    }

    #[must_use]
    pub fn property(&self, name: &str) -> Option<String> {
        self.properties.borrow().get(name).cloned()
    }
}

impl PageStyle for RecordedStyle {
    fn add_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }

    fn set_property(&self, name: &str, value: &str) {
        self.properties
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn remove_property(&self, name: &str) {
        self.properties.borrow_mut().remove(name);
    }
}
