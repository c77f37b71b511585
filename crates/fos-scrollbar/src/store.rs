//! Saved style values
//!
//! Remembers what an element's inline style held before the compensator
//! overrode it, so `reset` can put it back exactly.

use std::collections::{BTreeMap, BTreeSet};

use fos_dom::{Document, NodeId, data_attribute_name};

use crate::StyleProperty;

/// Inline value recorded before an override
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavedValue {
    /// The property was set inline to this value
    Explicit(String),
    /// The property was not set inline
    Unset,
}

impl SavedValue {
    /// Capture the current inline value of `property`
    pub fn capture(doc: &Document, element: NodeId, property: StyleProperty) -> Self {
        match doc.style_property(element, property.css_name()) {
            Some(value) => Self::Explicit(value.to_string()),
            None => Self::Unset,
        }
    }

    /// Write this value back as the inline style of `property`
    pub fn restore(self, doc: &mut Document, element: NodeId, property: StyleProperty) {
        match self {
            Self::Explicit(value) => doc.set_style_property(element, property.css_name(), &value),
            Self::Unset => {
                doc.remove_style_property(element, property.css_name());
            }
        }
    }
}

/// One saved override
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedEntry {
    pub element: NodeId,
    pub property: StyleProperty,
    pub value: SavedValue,
}

/// Storage for saved values, keyed by element and property
pub trait AttributeStore {
    /// Saved value, `None` if nothing was recorded
    fn get(&self, doc: &Document, element: NodeId, property: StyleProperty) -> Option<SavedValue>;

    /// Record a value, replacing any previous one
    fn set(&mut self, doc: &mut Document, element: NodeId, property: StyleProperty, value: SavedValue);

    /// Remove and return a saved value
    fn remove(&mut self, doc: &mut Document, element: NodeId, property: StyleProperty) -> Option<SavedValue>;

    /// Remove and return every remaining entry
    fn drain(&mut self, doc: &mut Document) -> Vec<SavedEntry>;
}

/// Saved values held in a map owned by the compensator
#[derive(Debug, Clone, Default)]
pub struct SavedStyles {
    entries: BTreeMap<(NodeId, StyleProperty), SavedValue>,
}

impl SavedStyles {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pending overrides
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether `property` on `element` is currently overridden
    pub fn contains(&self, element: NodeId, property: StyleProperty) -> bool {
        self.entries.contains_key(&(element, property))
    }

    /// Iterate pending overrides ordered by element then property
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, StyleProperty, &SavedValue)> {
        self.entries.iter().map(|(&(element, property), value)| (element, property, value))
    }
}

impl AttributeStore for SavedStyles {
    fn get(&self, _doc: &Document, element: NodeId, property: StyleProperty) -> Option<SavedValue> {
        self.entries.get(&(element, property)).cloned()
    }

    fn set(&mut self, _doc: &mut Document, element: NodeId, property: StyleProperty, value: SavedValue) {
        self.entries.insert((element, property), value);
    }

    fn remove(&mut self, _doc: &mut Document, element: NodeId, property: StyleProperty) -> Option<SavedValue> {
        self.entries.remove(&(element, property))
    }

    fn drain(&mut self, _doc: &mut Document) -> Vec<SavedEntry> {
        std::mem::take(&mut self.entries)
            .into_iter()
            .map(|((element, property), value)| SavedEntry { element, property, value })
            .collect()
    }
}

/// Saved values kept as `data-*` attributes on the elements themselves
///
/// `padding-right` on prefix `bs` lands in `data-bs-padding-right`. An
/// empty attribute value stands for [`SavedValue::Unset`]; inline style
/// values are never empty, so the two cannot collide.
///
/// Only markers this store wrote are read back or drained, so several
/// compensators can share a prefix on one document.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    prefix: String,
    marked: BTreeSet<(NodeId, StyleProperty)>,
}

impl DatasetStore {
    /// Create a store writing `data-<prefix>-*` attributes
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            marked: BTreeSet::new(),
        }
    }

    /// Attribute name used for `property`
    pub fn attribute_name(&self, property: StyleProperty) -> String {
        data_attribute_name(&self.prefix, property.key())
    }

    /// Number of markers this store has written and not yet consumed
    pub fn len(&self) -> usize {
        self.marked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_DATA_PREFIX)
    }
}

fn decode(raw: String) -> SavedValue {
    if raw.is_empty() {
        SavedValue::Unset
    } else {
        SavedValue::Explicit(raw)
    }
}

impl AttributeStore for DatasetStore {
    fn get(&self, doc: &Document, element: NodeId, property: StyleProperty) -> Option<SavedValue> {
        if !self.marked.contains(&(element, property)) {
            return None;
        }
        doc.attribute(element, &self.attribute_name(property))
            .map(|raw| decode(raw.to_string()))
    }

    fn set(&mut self, doc: &mut Document, element: NodeId, property: StyleProperty, value: SavedValue) {
        let raw = match &value {
            SavedValue::Explicit(v) => v.as_str(),
            SavedValue::Unset => "",
        };
        doc.set_attribute(element, &self.attribute_name(property), raw);
        self.marked.insert((element, property));
    }

    fn remove(&mut self, doc: &mut Document, element: NodeId, property: StyleProperty) -> Option<SavedValue> {
        if !self.marked.remove(&(element, property)) {
            return None;
        }
        doc.remove_attribute(element, &self.attribute_name(property))
            .map(decode)
    }

    fn drain(&mut self, doc: &mut Document) -> Vec<SavedEntry> {
        let marked = std::mem::take(&mut self.marked);
        let mut drained = Vec::new();
        for (element, property) in marked {
            // Detached elements keep their attributes, so this reaches them too
            if let Some(raw) = doc.remove_attribute(element, &self.attribute_name(property)) {
                drained.push(SavedEntry { element, property, value: decode(raw) });
            }
        }
        drained
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_styles_roundtrip() {
        let mut doc = Document::default();
        let body = doc.body();
        let mut store = SavedStyles::new();

        store.set(&mut doc, body, StyleProperty::PaddingRight, SavedValue::Explicit("4px".into()));
        store.set(&mut doc, body, StyleProperty::OverflowY, SavedValue::Unset);
        assert_eq!(store.len(), 2);
        assert!(store.contains(body, StyleProperty::OverflowY));
        assert_eq!(
            store.get(&doc, body, StyleProperty::PaddingRight),
            Some(SavedValue::Explicit("4px".into()))
        );

        assert_eq!(store.remove(&mut doc, body, StyleProperty::OverflowY), Some(SavedValue::Unset));
        assert_eq!(store.remove(&mut doc, body, StyleProperty::OverflowY), None);

        let rest = store.drain(&mut doc);
        assert_eq!(rest.len(), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_dataset_store_uses_attributes() {
        let mut doc = Document::default();
        let body = doc.body();
        let mut store = DatasetStore::default();

        store.set(&mut doc, body, StyleProperty::MarginRight, SavedValue::Explicit("-2px".into()));
        store.set(&mut doc, body, StyleProperty::PaddingRight, SavedValue::Unset);

        assert_eq!(doc.attribute(body, "data-bs-margin-right"), Some("-2px"));
        assert_eq!(doc.attribute(body, "data-bs-padding-right"), Some(""));
        assert_eq!(store.get(&doc, body, StyleProperty::PaddingRight), Some(SavedValue::Unset));
        assert_eq!(store.get(&doc, body, StyleProperty::OverflowY), None);

        let drained = store.drain(&mut doc);
        assert_eq!(drained.len(), 2);
        assert_eq!(doc.attribute(body, "data-bs-margin-right"), None);
        assert!(store.is_empty());
        assert!(store.drain(&mut doc).is_empty());
    }

    #[test]
    fn test_dataset_store_ignores_foreign_markers() {
        let mut doc = Document::default();
        let body = doc.body();
        let mut ours = DatasetStore::default();
        let mut theirs = DatasetStore::default();

        theirs.set(&mut doc, body, StyleProperty::OverflowY, SavedValue::Explicit("auto".into()));

        assert_eq!(ours.get(&doc, body, StyleProperty::OverflowY), None);
        assert_eq!(ours.remove(&mut doc, body, StyleProperty::OverflowY), None);
        assert!(ours.drain(&mut doc).is_empty());
        assert_eq!(doc.attribute(body, "data-bs-overflow-y"), Some("auto"));

        assert_eq!(
            theirs.remove(&mut doc, body, StyleProperty::OverflowY),
            Some(SavedValue::Explicit("auto".into()))
        );
        assert!(theirs.is_empty());
    }

    #[test]
    fn test_dataset_store_drains_detached_element() {
        let mut doc = Document::default();
        let nav = doc.create_element("nav");
        doc.append_child(doc.body(), nav);
        let mut store = DatasetStore::default();

        store.set(&mut doc, nav, StyleProperty::PaddingRight, SavedValue::Unset);
        let body = doc.body();
        doc.remove_child(body, nav);

        let drained = store.drain(&mut doc);
        assert_eq!(drained, vec![SavedEntry {
            element: nav,
            property: StyleProperty::PaddingRight,
            value: SavedValue::Unset,
        }]);
        assert_eq!(doc.attribute(nav, "data-bs-padding-right"), None);
    }

    #[test]
    fn test_capture_and_restore() {
        let mut doc = Document::default();
        let body = doc.body();

        assert_eq!(SavedValue::capture(&doc, body, StyleProperty::OverflowY), SavedValue::Unset);
        doc.set_style_property(body, "overflow-y", "scroll");
        let saved = SavedValue::capture(&doc, body, StyleProperty::OverflowY);
        assert_eq!(saved, SavedValue::Explicit("scroll".into()));

        doc.set_style_property(body, "overflow-y", "hidden");
        saved.restore(&mut doc, body, StyleProperty::OverflowY);
        assert_eq!(doc.style_property(body, "overflow-y"), Some("scroll"));

        SavedValue::Unset.restore(&mut doc, body, StyleProperty::OverflowY);
        assert_eq!(doc.style_property(body, "overflow-y"), None);
    }
}
