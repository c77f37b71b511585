//! Document - High-level document API

use crate::{
    DomTree, NodeId, ElementData, ElementFinder, ElementGeometry, SelectorError, SelectorList,
    StyleDeclaration, StyleRule, Target, Viewport, initial_value,
};

/// HTML Document
///
/// Owns the tree, the window viewport and a flat author stylesheet.
pub struct Document {
    /// The DOM tree
    tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
    /// Window viewport
    viewport: Viewport,
    /// Author rules in source order
    rules: Vec<StyleRule>,
}

impl Document {
    /// Create a new document with `<html>`, `<head>` and `<body>`
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        tree.append_child(tree.root(), html);
        tree.append_child(html, head);
        tree.append_child(html, body);

        tracing::debug!("Created document: {}", url);

        Self {
            tree,
            url: url.to_string(),
            html_element: html,
            head_element: head,
            body_element: body,
            viewport: Viewport::default(),
            rules: Vec::new(),
        }
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.tree.create_element(tag)
    }

    /// Append `child` under `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.tree.append_child(parent, child);
    }

    /// Remove `child` from `parent`
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        self.tree.remove_child(parent, child)
    }

    /// Get element data
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.tree.element(id)
    }

    /// Get mutable element data
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.tree.element_mut(id)
    }

    // --- attributes ---

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.get_attr(name)
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(elem) = self.element_mut(id) {
            elem.set_attr(name, value);
        }
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Option<String> {
        self.element_mut(id)?.remove_attr(name)
    }

    /// Add a class token
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(elem) = self.element_mut(id) {
            elem.classes.add(class);
            let value = elem.classes.value();
            elem.attrs.set_attribute("class", &value);
        }
    }

    /// Remove a class token
    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(elem) = self.element_mut(id) {
            elem.classes.remove(class);
            let value = elem.classes.value();
            elem.attrs.set_attribute("class", &value);
        }
    }

    // --- inline style ---

    /// Inline style block of an element
    pub fn style(&self, id: NodeId) -> Option<&StyleDeclaration> {
        self.element(id).map(|e| &e.style)
    }

    /// Inline value of a property, `None` if not set inline
    pub fn style_property(&self, id: NodeId, property: &str) -> Option<&str> {
        self.style(id)?.get_property(property)
    }

    pub fn set_style_property(&mut self, id: NodeId, property: &str, value: &str) {
        if let Some(elem) = self.element_mut(id) {
            elem.style.set_property(property, value);
        }
    }

    pub fn remove_style_property(&mut self, id: NodeId, property: &str) -> Option<String> {
        self.element_mut(id)?.style.remove_property(property)
    }

    // --- author styles ---

    /// Append an author rule; later rules win over earlier ones
    pub fn add_rule(&mut self, selector: &str, declarations: &[(&str, &str)]) -> Result<(), SelectorError> {
        let selectors = SelectorList::parse(selector)?;
        tracing::trace!("Added rule for '{}'", selectors);
        self.rules.push(StyleRule {
            selectors,
            declarations: StyleDeclaration::from_pairs(declarations),
        });
        Ok(())
    }

    /// Resolved value of a longhand (`getComputedStyle(el)[prop]`).
    ///
    /// Inline declarations win, then the last matching author rule, then
    /// the initial value. Detached or unknown nodes resolve to an empty
    /// string. Specificity is not considered.
    pub fn computed_value(&self, id: NodeId, property: &str) -> String {
        let Some(elem) = self.element(id) else {
            return String::new();
        };
        if !self.tree.is_connected(id) {
            return String::new();
        }

        if let Some(value) = elem.style.get_property(property) {
            return value.to_string();
        }

        self.rules.iter()
            .rev()
            .filter(|rule| rule.applies_to(elem))
            .find_map(|rule| rule.declarations.get_property(property))
            .unwrap_or(initial_value(property))
            .to_string()
    }

    // --- geometry ---

    /// Window viewport
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Set `innerWidth`
    pub fn set_viewport_width(&mut self, inner_width: f64) {
        self.viewport.inner_width = inner_width;
    }

    /// Layout metrics of an element; zeros when detached or unknown
    pub fn geometry(&self, id: NodeId) -> ElementGeometry {
        match self.element(id) {
            Some(elem) if self.tree.is_connected(id) => elem.geometry,
            _ => ElementGeometry::default(),
        }
    }

    /// Record layout metrics for an element
    pub fn set_geometry(&mut self, id: NodeId, geometry: ElementGeometry) {
        if let Some(elem) = self.element_mut(id) {
            elem.geometry = geometry;
        }
    }
}

impl ElementFinder for Document {
    fn find(&self, target: &Target, scope: NodeId) -> Vec<NodeId> {
        match target {
            Target::Element(id) => {
                if self.element(*id).is_some() { vec![*id] } else { Vec::new() }
            }
            Target::Selector(selectors) => self.tree.descendants(scope)
                .into_iter()
                .filter(|&id| self.element(id).is_some_and(|e| selectors.matches(e)))
                .collect(),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
