//! Flex Items — the per-child inputs of a flex layout pass
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-items>

use crate::chapter8::AlignItems;
use crate::values::{parse_flex_factor, parse_length};

/// Caller-chosen handle for an item, returned unchanged with its placement.
/// Usually the child's index among the container's element children.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ItemRef(pub usize);

/// Normalised inputs for one flex item. `None` sizes are unset.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexChild {
    pub handle: ItemRef,
    pub width: Option<f32>,
    pub height: Option<f32>,
    /// Positive flex factor; `None` means the item is not flexible.
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-property>
    pub flex: Option<f32>,
    /// `align-self`; `None` defers to the container's `align-items`.
    pub align_self: Option<AlignItems>,
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#order-property>
    pub order: i32,
}

impl FlexChild {
    /// An inflexible item with no declared size.
    pub const fn new(handle: ItemRef) -> Self {
        Self {
            handle,
            width: None,
            height: None,
            flex: None,
            align_self: None,
            order: 0,
        }
    }

    /// Build item inputs from a property lookup (property name to raw value).
    pub fn from_lookup<'style, F>(handle: ItemRef, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'style str>,
    {
        Self {
            handle,
            width: lookup("width").and_then(parse_length),
            height: lookup("height").and_then(parse_length),
            flex: lookup("flex").and_then(parse_flex_factor),
            align_self: lookup("align-self")
                .filter(|value| value.trim() != "auto")
                .map(|value| AlignItems::from_keyword(Some(value))),
            order: lookup("order")
                .and_then(|value| value.trim().parse::<i32>().ok())
                .unwrap_or(0),
        }
    }
}
