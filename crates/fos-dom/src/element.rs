//! Element Query
//!
//! Selector lists of compound selectors (`div.fixed-top, #bar, .sticky-top`)
//! and the `ElementFinder` used to resolve them under a scope element.
//! Combinators, attribute selectors and pseudo-classes are not supported.

use std::fmt;
use std::str::FromStr;

use crate::{ElementData, NodeId, SelectorError};

/// Simple selector for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Tag(String),
    Class(String),
    Id(String),
    Universal,
}

impl SimpleSelector {
    pub fn matches(&self, element: &ElementData) -> bool {
        match self {
            Self::Universal => true,
            Self::Tag(tag) => element.tag.eq_ignore_ascii_case(tag),
            Self::Id(id) => element.id.as_deref() == Some(id.as_str()),
            Self::Class(class) => element.classes.contains(class),
        }
    }
}

/// Sequence of simple selectors that must all match (`div.a.b#c`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundSelector {
    parts: Vec<SimpleSelector>,
}

impl CompoundSelector {
    /// Parse a single compound selector
    pub fn parse(s: &str) -> Result<Self, SelectorError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SelectorError::Empty);
        }

        let invalid = |message: &str| SelectorError::InvalidSelector {
            selector: s.to_string(),
            message: message.to_string(),
        };

        let mut parts = Vec::new();
        let mut rest = s;
        while let Some(first) = rest.chars().next() {
            let (prefix, body) = match first {
                '*' => {
                    parts.push(SimpleSelector::Universal);
                    rest = &rest[1..];
                    continue;
                }
                '.' | '#' => (Some(first), &rest[1..]),
                c if is_ident_char(c) => {
                    if !parts.is_empty() {
                        return Err(invalid("type selector must come first"));
                    }
                    (None, rest)
                }
                c if c.is_whitespace() || matches!(c, '>' | '+' | '~') => {
                    return Err(invalid("combinators are not supported"));
                }
                c => return Err(invalid(&format!("unexpected character '{}'", c))),
            };

            let len = body.find(|c: char| !is_ident_char(c)).unwrap_or(body.len());
            if len == 0 {
                return Err(invalid("expected identifier"));
            }
            let ident = body[..len].to_string();
            rest = &body[len..];

            parts.push(match prefix {
                Some('.') => SimpleSelector::Class(ident),
                Some(_) => SimpleSelector::Id(ident),
                None => SimpleSelector::Tag(ident.to_ascii_lowercase()),
            });
        }

        Ok(Self { parts })
    }

    pub fn matches(&self, element: &ElementData) -> bool {
        self.parts.iter().all(|p| p.matches(element))
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

/// Comma-separated selector group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    text: String,
    selectors: Vec<CompoundSelector>,
}

impl SelectorList {
    /// Parse a selector group such as `.fixed-top, .fixed-bottom`
    pub fn parse(s: &str) -> Result<Self, SelectorError> {
        let selectors = s.split(',')
            .map(CompoundSelector::parse)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            text: s.trim().to_string(),
            selectors,
        })
    }

    /// Build a list of plain class selectors; never fails
    pub fn classes(names: &[&str]) -> Self {
        let text = names.iter()
            .map(|n| format!(".{}", n))
            .collect::<Vec<_>>()
            .join(", ");
        let selectors = names.iter()
            .map(|n| CompoundSelector { parts: vec![SimpleSelector::Class(n.to_string())] })
            .collect();
        Self { text, selectors }
    }

    /// Check if any selector in the group matches
    pub fn matches(&self, element: &ElementData) -> bool {
        self.selectors.iter().any(|s| s.matches(element))
    }

    /// Source text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of compound selectors in the group
    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }
}

impl FromStr for SelectorList {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SelectorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// What to look up: a selector group or one specific element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Selector(SelectorList),
    Element(NodeId),
}

impl From<SelectorList> for Target {
    fn from(selectors: SelectorList) -> Self {
        Self::Selector(selectors)
    }
}

impl From<NodeId> for Target {
    fn from(id: NodeId) -> Self {
        Self::Element(id)
    }
}

/// Resolves targets to elements
pub trait ElementFinder {
    /// Elements matching `target`, in document order.
    ///
    /// Selectors only match descendants of `scope`. An element target is
    /// its own sole match regardless of scope.
    fn find(&self, target: &Target, scope: NodeId) -> Vec<NodeId>;
}
