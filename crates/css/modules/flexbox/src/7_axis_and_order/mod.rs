//! Axis resolution and ordering utilities
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#box-model>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#propdef-order>

use crate::chapter5::{FlexDirection, FlexWrap};
use crate::chapter6::FlexChild;

/// A physical axis of the container box.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Width; start edge `left`, end edge `right`.
    Horizontal,
    /// Height; start edge `top`, end edge `bottom`.
    Vertical,
}

impl Axis {
    /// Select the component of a `(horizontal, vertical)` pair on this axis.
    #[inline]
    pub fn pick<T>(self, horizontal: T, vertical: T) -> T {
        match self {
            Self::Horizontal => horizontal,
            Self::Vertical => vertical,
        }
    }

    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Resolved main/cross axes of a flex container.
///
/// A reversed axis places items from the container's far edge (`base` is the
/// container size) and advances with sign -1.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Axes {
    pub main: Axis,
    pub main_reverse: bool,
    pub cross_reverse: bool,
}

impl Axes {
    #[inline]
    pub const fn cross(self) -> Axis {
        self.main.other()
    }

    #[inline]
    pub const fn main_sign(self) -> f32 {
        if self.main_reverse { -1.0 } else { 1.0 }
    }

    #[inline]
    pub const fn cross_sign(self) -> f32 {
        if self.cross_reverse { -1.0 } else { 1.0 }
    }
}

/// Resolve main/cross axes from `flex-direction` and `flex-wrap` (horizontal-tb only).
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property>
pub const fn resolve_axes(direction: FlexDirection, wrap: FlexWrap) -> Axes {
    let (main, main_reverse) = match direction {
        FlexDirection::Row => (Axis::Horizontal, false),
        FlexDirection::RowReverse => (Axis::Horizontal, true),
        FlexDirection::Column => (Axis::Vertical, false),
        FlexDirection::ColumnReverse => (Axis::Vertical, true),
    };
    Axes {
        main,
        main_reverse,
        cross_reverse: matches!(wrap, FlexWrap::WrapReverse),
    }
}

/// Stable sort of items by `order`, preserving input order for ties.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#order-property>
pub fn sort_items_by_order_stable(items: &[FlexChild]) -> Vec<FlexChild> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(|child| child.order);
    sorted
}
