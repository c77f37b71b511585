//! Element Attributes
//!
//! Attribute manipulation: get, set, remove, has.

/// Single attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

impl Attr {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Named node map (attribute collection)
///
/// Keeps insertion order; elements rarely carry more than a handful of
/// attributes so lookups are linear.
#[derive(Debug, Clone, Default)]
pub struct NamedNodeMap {
    attributes: Vec<Attr>,
}

impl NamedNodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get number of attributes
    pub fn length(&self) -> usize {
        self.attributes.len()
    }

    /// Get attribute value
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set attribute, replacing any existing value
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value.to_string(),
            None => self.attributes.push(Attr::new(name, value)),
        }
    }

    /// Remove attribute by name, returning its value
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let index = self.attributes.iter().position(|a| a.name == name)?;
        Some(self.attributes.remove(index).value)
    }

    /// Check if attribute exists
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_attribute() {
        let mut attrs = NamedNodeMap::new();
        attrs.set_attribute("class", "btn");
        attrs.set_attribute("id", "submit");

        assert_eq!(attrs.length(), 2);
        assert_eq!(attrs.get_attribute("class"), Some("btn"));
        assert_eq!(attrs.get_attribute("id"), Some("submit"));
    }

    #[test]
    fn test_set_replaces_value() {
        let mut attrs = NamedNodeMap::new();
        attrs.set_attribute("data-bs-padding-right", "4px");
        attrs.set_attribute("data-bs-padding-right", "8px");

        assert_eq!(attrs.length(), 1);
        assert_eq!(attrs.get_attribute("data-bs-padding-right"), Some("8px"));
    }

    #[test]
    fn test_remove_attribute() {
        let mut attrs = NamedNodeMap::new();
        attrs.set_attribute("foo", "bar");

        assert!(attrs.has_attribute("foo"));
        assert_eq!(attrs.remove_attribute("foo").as_deref(), Some("bar"));
        assert!(!attrs.has_attribute("foo"));
        assert_eq!(attrs.remove_attribute("foo"), None);
    }
}
