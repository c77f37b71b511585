//! Compensator Configuration

use fos_dom::SelectorList;

use crate::ScrollbarError;

/// Classes of viewport-positioned content that needs padding compensation
pub const FIXED_CONTENT_CLASSES: [&str; 4] = ["fixed-top", "fixed-bottom", "is-fixed", "sticky-top"];

/// Classes of sticky content that also gets a negative margin
pub const STICKY_CONTENT_CLASSES: [&str; 1] = ["sticky-top"];

/// Default prefix for `data-*` saved-value attributes
pub const DEFAULT_DATA_PREFIX: &str = "bs";

/// Compensator configuration options
#[derive(Debug, Clone)]
pub struct CompensatorConfig {
    /// Elements whose right padding grows by the scrollbar width
    pub fixed_selector: SelectorList,

    /// Elements whose right margin shrinks by the scrollbar width
    pub sticky_selector: SelectorList,

    /// Prefix for `data-*` markers when saved values live on elements
    pub data_prefix: String,
}

impl CompensatorConfig {
    /// Configuration with custom selector groups
    pub fn with_selectors(fixed: &str, sticky: &str) -> Result<Self, ScrollbarError> {
        Ok(Self {
            fixed_selector: SelectorList::parse(fixed)?,
            sticky_selector: SelectorList::parse(sticky)?,
            ..Self::default()
        })
    }
}

impl Default for CompensatorConfig {
    fn default() -> Self {
        Self {
            fixed_selector: SelectorList::classes(&FIXED_CONTENT_CLASSES),
            sticky_selector: SelectorList::classes(&STICKY_CONTENT_CLASSES),
            data_prefix: DEFAULT_DATA_PREFIX.to_string(),
        }
    }
}
