//! CSS Flexible Box Layout Module Level 1 — Flex formatting context.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/>
//!
//! The engine is DOM-agnostic: callers describe a container and its children with
//! plain style structs (usually built from a property lookup) and receive box
//! geometry relative to the container's origin.

// Chapter modules mapped to the Flexbox Level 1 spec structure.
// Spec: §4 — Flex Formatting Context
#[path = "4_flex_formatting_context/mod.rs"]
mod chapter4;
// Spec: §5 — Flex Containers
#[path = "5_flex_containers/mod.rs"]
mod chapter5;
// Spec: §6 — Flex Items
#[path = "6_flex_items/mod.rs"]
mod chapter6;
// Spec: §7 — Axis and Order
#[path = "7_axis_and_order/mod.rs"]
mod chapter7;
// Spec: §8 — Alignment
#[path = "8_alignment/mod.rs"]
mod chapter8;
// Spec: §9 — Flex Layout Algorithm (line collection, flexible lengths, alignment passes)
#[path = "9_layout_algorithm/mod.rs"]
mod chapter9;

mod values;

pub use chapter4::{DisplayKeyword, establishes_flex_formatting_context};
pub use chapter5::{FlexContainerStyle, FlexDirection, FlexWrap};
pub use chapter6::{FlexChild, ItemRef};
pub use chapter7::{Axes, Axis, resolve_axes, sort_items_by_order_stable};
pub use chapter8::{AlignContent, AlignItems, JustifyContent, SpaceDistribution};
pub use chapter9::{FlexLayout, FlexLine, ItemPlacement, layout_flex_container};
pub use values::{parse_flex_factor, parse_length};
