//! Flex layout algorithm: line collection, main-axis sizing and placement,
//! cross-axis sizing and alignment.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>
//!
//! The pass is a pure function of the container inputs and the already-resolved
//! sizes of its children. Every coordinate it returns is relative to the
//! container's own origin (its left/top edges).

mod cross_axis;
mod line_breaking;
mod main_axis;

use core::ops::Range;

use log::debug;

use crate::chapter5::{FlexContainerStyle, FlexWrap};
use crate::chapter6::{FlexChild, ItemRef};
use crate::chapter7::{Axes, Axis, resolve_axes, sort_items_by_order_stable};
use crate::chapter8::AlignItems;
use crate::values::sanitize;

/// A flex line: a run of consecutive items in `order`-sorted sequence.
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-lines>
#[derive(Clone, Debug, PartialEq)]
pub struct FlexLine {
    /// Indices into the `order`-sorted item list (and into [`FlexLayout::items`]).
    pub items: Range<usize>,
    /// Main space left after the line's inflexible items; negative on overflow.
    pub leftover_main: f32,
    /// Largest cross size among the line's inflexible items, before `align-content`.
    pub cross_size: f32,
}

/// Final box of one item, relative to the container origin.
/// `right`/`bottom` are edge coordinates, so `right - left == width`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemPlacement {
    pub handle: ItemRef,
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
}

/// Result of laying out one flex container.
#[derive(Clone, Debug, PartialEq)]
pub struct FlexLayout {
    /// Resolved container width (declared, or computed when auto).
    pub width: f32,
    /// Resolved container height (declared, or computed when auto).
    pub height: f32,
    pub lines: Vec<FlexLine>,
    /// Placements in `order`-sorted sequence.
    pub items: Vec<ItemPlacement>,
}

impl FlexLayout {
    /// Placement of the item with `handle`, if it was laid out.
    pub fn placement(&self, handle: ItemRef) -> Option<&ItemPlacement> {
        self.items.iter().find(|placement| placement.handle == handle)
    }
}

/// Working copy of an item while its line is being laid out.
#[derive(Copy, Clone, Debug)]
struct LineItem {
    handle: ItemRef,
    /// Main size; unset sizes count as zero.
    main_size: f32,
    cross_size: Option<f32>,
    flex: Option<f32>,
    align: AlignItems,
}

/// A run along one axis: low edge and extent.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
struct Span {
    start: f32,
    size: f32,
}

impl Span {
    /// The span between two edge coordinates in either order.
    fn between(from: f32, to: f32) -> Self {
        Self {
            start: from.min(to),
            size: (to - from).abs(),
        }
    }
}

impl ItemPlacement {
    fn from_spans(handle: ItemRef, main_axis: Axis, main: Span, cross: Span) -> Self {
        let (horizontal, vertical) = match main_axis {
            Axis::Horizontal => (main, cross),
            Axis::Vertical => (cross, main),
        };
        Self {
            handle,
            left: horizontal.start,
            top: vertical.start,
            right: horizontal.start + horizontal.size,
            bottom: vertical.start + vertical.size,
            width: horizontal.size,
            height: vertical.size,
        }
    }
}

/// Lay out the children of a flex container.
///
/// Children are stably sorted by `order`, collected into lines, sized and placed
/// along the main axis, then the lines and their items are aligned along the
/// cross axis. An auto main size is the sum of the children's main sizes and
/// disables wrapping.
pub fn layout_flex_container(container: &FlexContainerStyle, children: &[FlexChild]) -> FlexLayout {
    let axes = resolve_axes(container.direction, container.wrap);
    let mut items: Vec<LineItem> = sort_items_by_order_stable(children)
        .iter()
        .map(|child| line_item(child, axes, container.align_items))
        .collect();

    let declared_main = sanitize(axes.main.pick(container.width, container.height));
    let main_size = declared_main.unwrap_or_else(|| items.iter().map(|item| item.main_size).sum());
    let wrap_enabled = declared_main.is_some() && container.wrap != FlexWrap::Nowrap;
    debug!(
        target: "css::flexbox",
        "layout: {} items, main={main_size:.3} (auto={}), wrap={wrap_enabled}, axes={axes:?}",
        items.len(),
        declared_main.is_none()
    );

    let lines = line_breaking::collect_lines(&mut items, main_size, wrap_enabled);
    let main_spans = main_axis::place_main_axis(
        &items,
        &lines,
        container.justify_content,
        main_size,
        axes,
    );
    let declared_cross = sanitize(axes.cross().pick(container.width, container.height));
    let cross_input = cross_axis::CrossInput {
        align_content: container.align_content,
        declared_cross,
        single_line: !wrap_enabled,
        axes,
    };
    let (cross_spans, cross_size) = cross_axis::place_cross_axis(&items, &lines, &cross_input);

    let placements = items
        .iter()
        .zip(main_spans)
        .zip(cross_spans)
        .map(|((item, main), cross)| ItemPlacement::from_spans(item.handle, axes.main, main, cross))
        .collect();
    let (width, height) = match axes.main {
        Axis::Horizontal => (main_size, cross_size),
        Axis::Vertical => (cross_size, main_size),
    };
    FlexLayout {
        width,
        height,
        lines,
        items: placements,
    }
}

fn line_item(child: &FlexChild, axes: Axes, align_items: AlignItems) -> LineItem {
    LineItem {
        handle: child.handle,
        main_size: sanitize(axes.main.pick(child.width, child.height)).unwrap_or(0.0),
        cross_size: sanitize(axes.cross().pick(child.width, child.height)),
        flex: child.flex.filter(|factor| factor.is_finite() && *factor > 0.0),
        align: child.align_self.unwrap_or(align_items),
    }
}

#[cfg(test)]
mod tests;
