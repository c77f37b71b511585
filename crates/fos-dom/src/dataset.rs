//! data-* attribute keys
//!
//! Maps camelCase dataset keys to prefixed `data-*` attribute names.

/// Build the attribute name for a dataset key.
///
/// `data_attribute_name("bs", "paddingRight")` is `data-bs-padding-right`.
/// An empty prefix gives plain `data-padding-right`.
pub fn data_attribute_name(prefix: &str, key: &str) -> String {
    let key = to_kebab_case(key);
    if prefix.is_empty() {
        format!("data-{}", key)
    } else {
        format!("data-{}-{}", prefix, key)
    }
}

/// Convert camelCase to kebab-case
pub fn to_kebab_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);

    for c in s.chars() {
        if c.is_ascii_uppercase() {
            result.push('-');
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case() {
        assert_eq!(to_kebab_case("paddingRight"), "padding-right");
        assert_eq!(to_kebab_case("overflowY"), "overflow-y");
        assert_eq!(to_kebab_case("simple"), "simple");
    }

    #[test]
    fn test_attribute_name() {
        assert_eq!(data_attribute_name("bs", "marginRight"), "data-bs-margin-right");
        assert_eq!(data_attribute_name("", "marginRight"), "data-margin-right");
    }
}
