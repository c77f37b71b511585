//! fOS DOM - Document Object Model
//!
//! Arena-backed DOM tree carrying what style bookkeeping needs:
//! inline declarations, element geometry, a viewport and selector lookup.

mod node;
mod tree;
mod document;
mod attributes;
mod classlist;
mod dataset;
mod element;
mod geometry;
mod style;

pub use node::{Node, NodeData, ElementData};
pub use tree::DomTree;
pub use document::Document;
pub use attributes::{Attr, NamedNodeMap};
pub use classlist::DOMTokenList;
pub use dataset::{data_attribute_name, to_kebab_case};
pub use element::{ElementFinder, SimpleSelector, CompoundSelector, SelectorList, Target};
pub use geometry::{ElementGeometry, Viewport};
pub use style::{StyleDeclaration, StyleRule, initial_value, parse_length_px};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this ID points at a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Raw arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Selector parsing error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectorError {
    #[error("Empty selector")]
    Empty,

    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
}
