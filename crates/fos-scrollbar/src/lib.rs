//! fOS Scrollbar Compensation
//!
//! Measures how much horizontal space a vertical scrollbar takes and
//! hides it without shifting layout: while hidden, the page (or a
//! scrolling element) and its fixed/sticky content get extra right
//! padding, and sticky content a matching negative margin. `reset`
//! restores the exact inline styles that were there before.
//!
//! # Example
//! ```rust
//! use fos_dom::{Document, ElementGeometry};
//! use fos_scrollbar::ScrollbarCompensator;
//!
//! let mut doc = Document::default();
//! doc.set_viewport_width(1000.0);
//! let html = doc.document_element();
//! doc.set_geometry(html, ElementGeometry::from_widths(1000.0, 985.0));
//!
//! let mut scrollbar = ScrollbarCompensator::new(&doc, None);
//! assert_eq!(scrollbar.width(&doc), 15.0);
//!
//! scrollbar.hide(&mut doc);
//! assert_eq!(doc.style_property(html, "padding-right"), Some("15px"));
//! scrollbar.reset(&mut doc);
//! assert_eq!(doc.style_property(html, "padding-right"), None);
//! ```

mod compensator;
pub mod config;
mod property;
mod store;

pub use compensator::ScrollbarCompensator;
pub use config::CompensatorConfig;
pub use property::StyleProperty;
pub use store::{AttributeStore, DatasetStore, SavedEntry, SavedStyles, SavedValue};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scrollbar compensation errors
#[derive(Debug, thiserror::Error)]
pub enum ScrollbarError {
    #[error("Invalid content selector: {0}")]
    Selector(#[from] fos_dom::SelectorError),
}
