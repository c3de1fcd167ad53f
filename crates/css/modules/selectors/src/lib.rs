//! Simple selector chains — descendant-only matching and specificity.
//! Spec: <https://www.w3.org/TR/selectors-3/>
//!
//! This crate implements the subset the style engine needs:
//! - Type, class and id simple selectors
//! - Whitespace (descendant) combinators only
//! - Specificity calculation and ordering
//!
//! Matching is driven by an explicit ancestor chain (nearest ancestor first)
//! rather than parent pointers, so it can run while a tree is still being built.

mod matcher;
mod parser;
mod specificity;

pub use matcher::{matches_chain, matches_simple};
pub use parser::{parse_selector_chain, parse_selector_list, parse_simple_selector};
pub use specificity::{Specificity, specificity_of_chain};

/// An adapter that abstracts element access for selector matching.
/// Implement this for your DOM layer.
///
/// Spec references:
/// - Section 3: Selectors overview and element matching
pub trait ElementAdapter {
    /// Tag name as stored on the element.
    /// Spec: Section 5 — Type selectors
    fn tag_name(&self) -> &str;

    /// Returns the raw attribute value if present.
    /// Spec: Section 8 — Attribute access backing id/class matching
    fn attr(&self, name: &str) -> Option<&str>;

    /// Returns Some(id) if the element has an id attribute, else None.
    /// Spec: Section 7 — ID selectors
    fn element_id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// Returns the whole `class` attribute value if present.
    /// Spec: Section 6 — Class selectors (matched against the full attribute value here)
    fn class_attr(&self) -> Option<&str> {
        self.attr("class")
    }
}

/// Simple selectors (subset).
/// Spec: Section 5, 6, 7
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SimpleSelector {
    /// Spec: Section 5 — Type selectors
    Type(String),
    /// Spec: Section 6 — Class selectors
    Class(String),
    /// Spec: Section 7 — ID selectors
    IdSelector(String),
}

/// A chain of simple selectors separated by descendant combinators, in source order.
///
/// The last component is the subject (target); earlier components are ancestors,
/// furthest first. Matching reads the chain right-to-left.
/// Spec: Section 11 — Descendant combinator
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SelectorChain {
    pub components: Vec<SimpleSelector>,
}

impl SelectorChain {
    /// The subject component (right-most in source order).
    #[inline]
    pub fn subject(&self) -> Option<&SimpleSelector> {
        self.components.last()
    }

    /// Components in matching order: subject first, then ancestors nearest to furthest.
    #[inline]
    pub fn matching_order(&self) -> impl Iterator<Item = &SimpleSelector> {
        self.components.iter().rev()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
