//! Main-axis sizing and placement of each line.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#main-alignment>

use log::debug;

use super::{FlexLine, LineItem, Span};
use crate::chapter7::Axes;
use crate::chapter8::{JustifyContent, SpaceDistribution};

/// Size and place every item along the main axis.
///
/// Per line, exactly one of three outcomes applies:
/// - overflow (negative leftover): every item is scaled by
///   `main_size / (main_size - leftover)`, flexible items shrinking to nothing;
/// - flexible items present: the whole leftover is shared by flex factor;
/// - otherwise `justify-content` turns the leftover into an offset and a gap.
///
/// Items are placed consecutively from the main start edge (the far edge when
/// the direction is reversed).
pub(super) fn place_main_axis(
    items: &[LineItem],
    lines: &[FlexLine],
    justify: JustifyContent,
    main_size: f32,
    axes: Axes,
) -> Vec<Span> {
    let sign = axes.main_sign();
    let base = if axes.main_reverse { main_size } else { 0.0 };
    let mut spans = vec![Span::default(); items.len()];
    for line in lines {
        let Some(line_items) = items.get(line.items.clone()) else {
            continue;
        };
        let flex_total: f32 = line_items.iter().filter_map(|item| item.flex).sum();
        let leftover = line.leftover_main;
        let (sizes, distribution): (Vec<f32>, SpaceDistribution) = if leftover < 0.0 {
            let scale = main_size / (main_size - leftover);
            debug!(target: "css::flexbox::main_axis", "overflow {leftover:.3}, scaling by {scale:.5}");
            let sizes = line_items
                .iter()
                .map(|item| if item.flex.is_some() { 0.0 } else { item.main_size * scale })
                .collect();
            (sizes, SpaceDistribution::NONE)
        } else if flex_total > 0.0 {
            let sizes = line_items
                .iter()
                .map(|item| {
                    item.flex
                        .map_or(item.main_size, |factor| leftover * factor / flex_total)
                })
                .collect();
            (sizes, SpaceDistribution::NONE)
        } else {
            let sizes = line_items.iter().map(|item| item.main_size).collect();
            (sizes, justify.distribute(leftover, line_items.len()))
        };
        debug!(
            target: "css::flexbox::main_axis",
            "line {:?}: leftover={leftover:.3} flex_total={flex_total:.3} {distribution:?}",
            line.items
        );

        let mut cursor = base + sign * distribution.offset;
        for (index, size) in line.items.clone().zip(sizes) {
            let end = cursor + sign * size;
            if let Some(span) = spans.get_mut(index) {
                *span = Span::between(cursor, end);
            }
            cursor = end + sign * distribution.gap;
        }
    }
    spans
}
