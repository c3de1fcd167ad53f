//! Collecting flex items into flex lines.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-line-break>

use log::debug;

use super::{FlexLine, LineItem};

/// Break items into lines in a single forward scan.
///
/// Flexible items always join the current line and take no main space here.
/// With wrapping disabled every item joins the one line, which may overflow.
/// With wrapping enabled an oversized inflexible item is clamped to
/// `main_space`, and an item that does not fit the remaining space seals the
/// current line and starts the next one. The final line is always sealed, so
/// there is at least one line.
pub(super) fn collect_lines(items: &mut [LineItem], main_space: f32, wrap: bool) -> Vec<FlexLine> {
    let mut lines = Vec::new();
    let mut start = 0_usize;
    let mut remaining = main_space;
    let mut cross = 0.0_f32;
    for (index, item) in items.iter_mut().enumerate() {
        if item.flex.is_some() {
            continue;
        }
        if wrap {
            item.main_size = item.main_size.min(main_space);
            if remaining < item.main_size && index > start {
                debug!(
                    target: "css::flexbox::lines",
                    "sealing line {}..{index} leftover={remaining:.3} cross={cross:.3}",
                    start
                );
                lines.push(FlexLine {
                    items: start..index,
                    leftover_main: remaining,
                    cross_size: cross,
                });
                start = index;
                remaining = main_space;
                cross = 0.0;
            }
        }
        remaining -= item.main_size;
        cross = cross.max(item.cross_size.unwrap_or(0.0));
    }
    lines.push(FlexLine {
        items: start..items.len(),
        leftover_main: remaining,
        cross_size: cross,
    });
    lines
}
