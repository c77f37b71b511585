//! Scrollbar compensator
//!
//! Hides a scrollbar and pads the affected content by its width so nothing
//! shifts, then undoes exactly what it changed.

use fos_dom::{Document, ElementFinder, NodeId, Target, parse_length_px};

use crate::{AttributeStore, CompensatorConfig, SavedStyles, SavedValue, StyleProperty};

/// Measures and compensates the scrollbar of a page or element
///
/// Targeting `<html>` or `<body>` (or nothing) controls the page
/// scrollbar through the document element. Any other element is
/// measured from its own border and client boxes.
#[derive(Debug)]
pub struct ScrollbarCompensator<S: AttributeStore = SavedStyles> {
    element: NodeId,
    whole_page: bool,
    fixed: Target,
    sticky: Target,
    store: S,
}

impl ScrollbarCompensator<SavedStyles> {
    /// Compensator for `target` (the page when `None`) with default selectors
    pub fn new(doc: &Document, target: Option<NodeId>) -> Self {
        Self::with_config(doc, target, CompensatorConfig::default())
    }

    /// Compensator with custom selectors
    pub fn with_config(doc: &Document, target: Option<NodeId>, config: CompensatorConfig) -> Self {
        Self::with_store(doc, target, config, SavedStyles::new())
    }
}

impl<S: AttributeStore> ScrollbarCompensator<S> {
    /// Compensator that keeps saved values in `store`
    pub fn with_store(doc: &Document, target: Option<NodeId>, config: CompensatorConfig, store: S) -> Self {
        let root = doc.document_element();
        let element = target.unwrap_or(root);
        let whole_page = element == root || element == doc.body();

        Self {
            element: if whole_page { root } else { element },
            whole_page,
            fixed: Target::Selector(config.fixed_selector),
            sticky: Target::Selector(config.sticky_selector),
            store,
        }
    }

    /// Element whose overflow is controlled
    pub fn target(&self) -> NodeId {
        self.element
    }

    /// Whether the page scrollbar (rather than an element's) is handled
    pub fn is_whole_page(&self) -> bool {
        self.whole_page
    }

    /// Saved-value storage
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Scrollbar width in pixels.
    ///
    /// For the page this is `innerWidth` minus the document element's
    /// client width; for an element, its offset width minus client width.
    /// Detached elements measure 0.
    pub fn width(&self, doc: &Document) -> f64 {
        let geometry = doc.geometry(self.element);
        if self.whole_page {
            (doc.viewport().inner_width - geometry.client_width).abs()
        } else {
            geometry.inset_width()
        }
    }

    /// Whether a scrollbar currently takes up space
    pub fn is_overflowing(&self, doc: &Document) -> bool {
        self.width(doc) > 0.0
    }

    /// Hide the scrollbar and pad content by its width.
    ///
    /// The width is measured once, before anything is changed.
    pub fn hide(&mut self, doc: &mut Document) {
        let width = self.width(doc);
        self.disable_overflow(doc);

        let target = doc.find(&Target::Element(self.element), self.element);
        let padded = self.adjust(doc, &target, StyleProperty::PaddingRight, width, |v| v + width);

        let fixed = doc.find(&self.fixed, self.element);
        let fixed_padded = self.adjust(doc, &fixed, StyleProperty::PaddingRight, width, |v| v + width);

        let sticky = doc.find(&self.sticky, self.element);
        let sticky_shifted = self.adjust(doc, &sticky, StyleProperty::MarginRight, width, |v| v - width);

        tracing::debug!(
            "Hid scrollbar ({}px): target padded {}, fixed {}/{}, sticky {}/{}",
            width, padded, fixed_padded, fixed.len(), sticky_shifted, sticky.len()
        );
    }

    /// Undo everything `hide` changed.
    ///
    /// Calling it again without another `hide` changes nothing.
    pub fn reset(&mut self, doc: &mut Document) {
        let target = doc.find(&Target::Element(self.element), self.element);
        let mut restored = self.restore(doc, &target, StyleProperty::OverflowY);
        restored += self.restore(doc, &target, StyleProperty::PaddingRight);

        let fixed = doc.find(&self.fixed, self.element);
        restored += self.restore(doc, &fixed, StyleProperty::PaddingRight);

        let sticky = doc.find(&self.sticky, self.element);
        restored += self.restore(doc, &sticky, StyleProperty::MarginRight);

        // Elements that moved out of scope or lost their class since `hide`
        let stale = self.store.drain(doc);
        if !stale.is_empty() {
            tracing::debug!("Restoring {} overrides no longer matched by selectors", stale.len());
        }
        for entry in stale {
            entry.value.restore(doc, entry.element, entry.property);
            restored += 1;
        }

        tracing::debug!("Reset scrollbar compensation: {} properties restored", restored);
    }

    fn disable_overflow(&mut self, doc: &mut Document) {
        self.save(doc, self.element, StyleProperty::OverflowY);
        doc.set_style_property(self.element, StyleProperty::OverflowY.css_name(), "hidden");
    }

    /// Record the inline value unless an earlier override already did
    fn save(&mut self, doc: &mut Document, element: NodeId, property: StyleProperty) {
        if self.store.get(doc, element, property).is_none() {
            let value = SavedValue::capture(doc, element, property);
            self.store.set(doc, element, property, value);
        }
    }

    /// Rewrite `property` as `callback(computed)` px on each qualifying element
    fn adjust(
        &mut self,
        doc: &mut Document,
        elements: &[NodeId],
        property: StyleProperty,
        width: f64,
        callback: impl Fn(f64) -> f64,
    ) -> usize {
        let inner_width = doc.viewport().inner_width;
        let mut adjusted = 0;

        for &element in elements {
            if element != self.element && inner_width > doc.geometry(element).client_width + width {
                tracing::trace!("Skipping {:?}: narrower than viewport minus scrollbar", element);
                continue;
            }

            self.save(doc, element, property);

            let computed = parse_length_px(&doc.computed_value(element, property.css_name())).unwrap_or(0.0);
            let value = format!("{}px", callback(computed));
            tracing::trace!("{:?} {}: {}px -> {}", element, property, computed, value);
            doc.set_style_property(element, property.css_name(), &value);
            adjusted += 1;
        }

        adjusted
    }

    fn restore(&mut self, doc: &mut Document, elements: &[NodeId], property: StyleProperty) -> usize {
        let mut restored = 0;
        for &element in elements {
            if let Some(value) = self.store.remove(doc, element, property) {
                value.restore(doc, element, property);
                restored += 1;
            }
        }
        restored
    }
}
