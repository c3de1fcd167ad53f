//! Document tree produced by the single construction pass.
//!
//! The tree is a strict single-owner hierarchy: every parent owns its children
//! and nodes carry no back-pointers. Ancestry during construction is tracked by
//! the parser's open-element stack instead.

pub mod printing;

use std::collections::BTreeMap;
use std::collections::btree_map;

use css_selectors::{ElementAdapter, Specificity};
use serde::Serialize;
use smallvec::SmallVec;

/// Attribute list of an element: `(name, value)` pairs, names unique, in source order.
pub type Attributes = SmallVec<(String, String), 4>;

/// Root of a parsed document. Only ever appears at the top of the tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub children: Vec<Node>,
}

/// A child node: either an element or a run of text.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(Text),
}

/// Accumulated character content between two tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    pub content: String,
}

/// An element with its attributes, children, resolved style and box geometry.
///
/// The tree builder owns `tag_name`, `attributes` and `children`; the style engine
/// writes only `computed_style`; the layout engine writes only `geometry`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub tag_name: String,
    pub attributes: Attributes,
    pub children: Vec<Node>,
    pub computed_style: ComputedStyle,
    pub geometry: Geometry,
}

/// A resolved declaration value together with the specificity and store position of
/// the rule it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleEntry {
    pub value: String,
    pub specificity: Specificity,
    pub source_order: u32,
}

/// Property name to resolved entry. At most one entry exists per property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputedStyle {
    entries: BTreeMap<String, StyleEntry>,
}

/// Box geometry in the coordinate space of the containing flex container.
/// Every field stays `None` until a layout pass computes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Geometry {
    pub left: Option<f32>,
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over the element children of the root.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Depth-first, pre-order search for the first element matching `predicate`.
    pub fn find_element<P>(&self, predicate: P) -> Option<&Element>
    where
        P: Fn(&Element) -> bool + Copy,
    {
        self.elements()
            .find_map(|element| element.find_element(predicate))
    }

    /// Convenience lookup by `id` attribute.
    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.find_element(|element| element.attribute("id") == Some(id))
    }
}

impl Node {
    #[inline]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    #[inline]
    pub const fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    #[inline]
    pub const fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(text) => Some(text),
            Self::Element(_) => None,
        }
    }
}

impl Element {
    pub fn new(tag_name: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes,
            ..Self::default()
        }
    }

    /// Value of the attribute named `name`, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr_name, _)| attr_name == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, overwriting an existing value in place so names stay unique.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        if let Some(slot) = self
            .attributes
            .iter_mut()
            .find(|(attr_name, _)| attr_name == name)
        {
            value.clone_into(&mut slot.1);
        } else {
            self.attributes.push((name.to_owned(), value.to_owned()));
        }
    }

    /// Concatenated content of the direct text children.
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(Node::as_text)
            .map(|text| text.content.as_str())
            .collect()
    }

    /// Element children, skipping text.
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Mutable element children, skipping text.
    pub fn element_children_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(Node::as_element_mut)
    }

    /// Resolved value of a style property.
    #[inline]
    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.computed_style.value(property)
    }

    /// Depth-first, pre-order search including `self`.
    pub fn find_element<P>(&self, predicate: P) -> Option<&Self>
    where
        P: Fn(&Self) -> bool + Copy,
    {
        if predicate(self) {
            return Some(self);
        }
        self.element_children()
            .find_map(|child| child.find_element(predicate))
    }
}

impl ElementAdapter for Element {
    #[inline]
    fn tag_name(&self) -> &str {
        &self.tag_name
    }

    #[inline]
    fn attr(&self, name: &str) -> Option<&str> {
        self.attribute(name)
    }
}

impl ComputedStyle {
    #[inline]
    pub fn get(&self, property: &str) -> Option<&StyleEntry> {
        self.entries.get(property)
    }

    #[inline]
    pub fn value(&self, property: &str) -> Option<&str> {
        self.entries.get(property).map(|entry| entry.value.as_str())
    }

    /// Slot for `property`, for callers that decide whether to overwrite.
    #[inline]
    pub fn entry(&mut self, property: String) -> btree_map::Entry<'_, String, StyleEntry> {
        self.entries.entry(property)
    }

    #[inline]
    pub fn iter(&self) -> btree_map::Iter<'_, String, StyleEntry> {
        self.entries.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'style> IntoIterator for &'style ComputedStyle {
    type Item = (&'style String, &'style StyleEntry);
    type IntoIter = btree_map::Iter<'style, String, StyleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Geometry {
    /// True once a layout pass placed the box on both axes.
    #[inline]
    pub const fn is_placed(&self) -> bool {
        self.left.is_some() && self.top.is_some()
    }

    #[inline]
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
