use super::*;

fn tops_in_100px_row(align_items: AlignItems, children: &[FlexChild]) -> Vec<(f32, f32)> {
    let style = FlexContainerStyle {
        align_items,
        ..container(Some(300.0), Some(100.0))
    };
    layout_flex_container(&style, children)
        .items
        .iter()
        .map(|placement| (placement.top, placement.height))
        .collect()
}

#[test]
/// # Panics
/// Panics if the single line does not fill the declared container height.
fn single_line_fills_container_cross_size() {
    let _ = env_logger::builder().is_test(true).try_init();
    let children = [sized(0, Some(10.0), Some(20.0)), sized(1, Some(10.0), None)];
    let stretched = tops_in_100px_row(AlignItems::Stretch, &children);
    assert_spans(&stretched, &[(0.0, 20.0), (0.0, 100.0)]);
}

#[test]
/// # Panics
/// Panics if `center` and `flex-end` do not offset items within the line.
fn center_and_end() {
    let children = [sized(0, Some(10.0), Some(20.0))];
    assert_spans(
        &tops_in_100px_row(AlignItems::Center, &children),
        &[(40.0, 20.0)],
    );
    assert_spans(
        &tops_in_100px_row(AlignItems::FlexEnd, &children),
        &[(80.0, 20.0)],
    );
}

#[test]
/// # Panics
/// Panics if `align-self` does not override the container's `align-items`.
fn align_self_overrides_align_items() {
    let children = [
        FlexChild {
            align_self: Some(AlignItems::FlexEnd),
            ..sized(0, Some(10.0), Some(20.0))
        },
        sized(1, Some(10.0), Some(20.0)),
    ];
    assert_spans(
        &tops_in_100px_row(AlignItems::Center, &children),
        &[(80.0, 20.0), (40.0, 20.0)],
    );
}

#[test]
/// # Panics
/// Panics if an item without a cross size is not zero-sized when not stretched.
fn unset_cross_size_defaults_to_zero() {
    let children = [sized(0, Some(10.0), None)];
    assert_spans(
        &tops_in_100px_row(AlignItems::FlexStart, &children),
        &[(0.0, 0.0)],
    );
}

#[test]
/// # Panics
/// Panics if items overflowing the line are clamped instead of aligned past its start.
fn overflowing_item_aligns_past_the_start() {
    let style = FlexContainerStyle {
        align_items: AlignItems::FlexEnd,
        ..container(Some(300.0), Some(10.0))
    };
    let layout = layout_flex_container(&style, &[sized(0, Some(10.0), Some(30.0))]);
    assert_close(layout.items[0].top, -20.0);
    assert_close(layout.items[0].bottom, 10.0);
}
