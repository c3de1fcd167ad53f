//! Display list generation from the laid-out tree.
//!
//! Geometry on the tree is relative to each element's containing flex
//! container; the walk accumulates those offsets so every item carries
//! page coordinates. Items are emitted in paint order (parents before
//! children, siblings in document order).

use csscolorparser::Color;
use html::{Document, Element};
use log::trace;
use serde::Serialize;
use tracing::info_span;

/// One paint operation for the renderer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum DisplayItem {
    /// Solid colour rectangle in page coordinates. RGBA channels in `[0, 1]`.
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: [f32; 4],
    },
}

/// Ordered paint operations for one document.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DisplayList {
    pub items: Vec<DisplayItem>,
}

impl DisplayList {
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Walk the document and emit one rectangle per element that has a
/// `background-color` and a box with positive area.
pub fn build_display_list(document: &Document) -> DisplayList {
    let _span = info_span!("page.display_list").entered();
    let mut list = DisplayList::default();
    for element in document.elements() {
        paint_element(element, (0.0, 0.0), &mut list);
    }
    list
}

/// Parse a CSS colour into RGBA channels.
fn parse_color(raw: &str) -> Option<[f32; 4]> {
    let color: Color = raw.trim().parse().ok()?;
    Some([color.r, color.g, color.b, color.a])
}

fn paint_element(element: &Element, origin: (f32, f32), list: &mut DisplayList) {
    let geometry = &element.geometry;
    let x = origin.0 + geometry.left.unwrap_or(0.0);
    let y = origin.1 + geometry.top.unwrap_or(0.0);
    if let (Some(width), Some(height)) = (geometry.width, geometry.height)
        && width > 0.0
        && height > 0.0
        && let Some(color) = element
            .style_value("background-color")
            .and_then(parse_color)
    {
        trace!(target: "page::display_list", "<{}> rect {x},{y} {width}x{height}", element.tag_name);
        list.items.push(DisplayItem::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }
    for child in element.element_children() {
        paint_element(child, (x, y), list);
    }
}
