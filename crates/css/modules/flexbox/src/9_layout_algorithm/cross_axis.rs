//! Cross-axis sizing: container cross size, `align-content` line packing and
//! per-item `align-self`.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#cross-sizing>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#align-content-property>

use log::debug;

use super::{FlexLine, LineItem, Span};
use crate::chapter7::Axes;
use crate::chapter8::{AlignContent, AlignItems};

/// Container-level inputs of the cross pass.
pub(super) struct CrossInput {
    pub align_content: AlignContent,
    /// Declared container cross size; `None` is auto.
    pub declared_cross: Option<f32>,
    /// Wrapping disabled: the only line fills a declared container cross size.
    pub single_line: bool,
    pub axes: Axes,
}

/// Place every item along the cross axis. Returns the spans and the resolved
/// container cross size.
pub(super) fn place_cross_axis(
    items: &[LineItem],
    lines: &[FlexLine],
    input: &CrossInput,
) -> (Vec<Span>, f32) {
    let mut line_cross: Vec<f32> = lines.iter().map(|line| line.cross_size).collect();
    if input.single_line
        && let Some(declared) = input.declared_cross
    {
        for cross in &mut line_cross {
            *cross = declared;
        }
    }
    let lines_total: f32 = line_cross.iter().sum();
    let (container_cross, leftover) = input
        .declared_cross
        .map_or((lines_total, 0.0), |declared| (declared, declared - lines_total));

    let share = input.align_content.stretch_share(leftover, lines.len());
    for cross in &mut line_cross {
        *cross += share;
    }
    let distribution = input.align_content.distribute(leftover, lines.len());
    debug!(
        target: "css::flexbox::cross_axis",
        "container_cross={container_cross:.3} leftover={leftover:.3} stretch_share={share:.3} {distribution:?}"
    );

    let sign = input.axes.cross_sign();
    let base = if input.axes.cross_reverse { container_cross } else { 0.0 };
    let mut spans = vec![Span::default(); items.len()];
    let mut cursor = base + sign * distribution.offset;
    for (line, &cross) in lines.iter().zip(&line_cross) {
        for index in line.items.clone() {
            let (Some(item), Some(span)) = (items.get(index), spans.get_mut(index)) else {
                continue;
            };
            *span = align_in_line(item, cursor, cross, sign);
        }
        cursor += sign * (cross + distribution.gap);
    }
    (spans, container_cross)
}

/// Align one item inside a line that starts at `line_start` and is `line_cross` thick.
/// Only items with an unset cross size stretch; the rest anchor at the start.
fn align_in_line(item: &LineItem, line_start: f32, line_cross: f32, sign: f32) -> Span {
    let (size, align) = match (item.cross_size, item.align) {
        (None, AlignItems::Stretch) => (line_cross, AlignItems::FlexStart),
        (Some(size), AlignItems::Stretch) => (size, AlignItems::FlexStart),
        (None, align) => (0.0, align),
        (Some(size), align) => (size, align),
    };
    let lead = match align {
        AlignItems::FlexEnd => line_cross - size,
        AlignItems::Center => (line_cross - size) / 2.0,
        AlignItems::FlexStart | AlignItems::Stretch => 0.0,
    };
    let start = line_start + sign * lead;
    Span::between(start, start + sign * size)
}
