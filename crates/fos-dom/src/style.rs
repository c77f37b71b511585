//! Inline and author styles
//!
//! Just enough of CSSOM to read, write and resolve single longhand
//! properties: inline declarations, flat author rules, initial values.

use crate::{ElementData, SelectorList};

/// Declaration block (`element.style` or a rule body)
///
/// Property names are kebab-case longhands (`padding-right`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleDeclaration {
    properties: Vec<(String, String)>,
}

impl StyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a block from `(property, value)` pairs
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut decl = Self::new();
        for (property, value) in pairs {
            decl.set_property(property, value);
        }
        decl
    }

    /// Get a property value, `None` if not declared
    pub fn get_property(&self, property: &str) -> Option<&str> {
        self.properties.iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Set a property. An empty value removes it, as in CSSOM.
    pub fn set_property(&mut self, property: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            self.remove_property(property);
            return;
        }
        match self.properties.iter_mut().find(|(name, _)| name == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.properties.push((property.to_string(), value.to_string())),
        }
    }

    /// Remove a property, returning its previous value
    pub fn remove_property(&mut self, property: &str) -> Option<String> {
        let index = self.properties.iter().position(|(name, _)| name == property)?;
        Some(self.properties.remove(index).1)
    }

    /// Number of declared properties
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Serialize as `cssText`
    pub fn css_text(&self) -> String {
        self.properties.iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Author stylesheet rule
#[derive(Debug, Clone)]
pub struct StyleRule {
    pub selectors: SelectorList,
    pub declarations: StyleDeclaration,
}

impl StyleRule {
    /// Check if the rule applies to an element
    pub fn applies_to(&self, element: &ElementData) -> bool {
        self.selectors.matches(element)
    }
}

/// Initial computed value of a longhand, empty if unknown
pub fn initial_value(property: &str) -> &'static str {
    match property {
        "padding-top" | "padding-right" | "padding-bottom" | "padding-left"
        | "margin-top" | "margin-right" | "margin-bottom" | "margin-left"
        | "border-right-width" | "border-left-width" => "0px",
        "overflow-x" | "overflow-y" => "visible",
        _ => "",
    }
}

/// Parse the leading number of a CSS length (`"12.5px"` -> `12.5`).
///
/// Trailing units are ignored; `None` when there is no leading number.
pub fn parse_length_px(value: &str) -> Option<f64> {
    let s = value.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        let n = digits_from(end + 1);
        if int_digits > 0 || n > 0 {
            end += 1 + n;
            frac_digits = n;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let n = digits_from(exp);
        if n > 0 {
            end = exp + n;
        }
    }

    s[..end].parse().ok()
}
