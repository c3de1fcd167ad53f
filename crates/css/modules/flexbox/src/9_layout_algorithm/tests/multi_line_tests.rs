use super::*;

/// 100px wide wrapping row: 60x10, 60x20, 30x5 breaks into [60] and [60, 30].
fn wrapping(height: Option<f32>, wrap: FlexWrap, align_content: AlignContent) -> FlexLayout {
    let style = FlexContainerStyle {
        wrap,
        align_content,
        ..container(Some(100.0), height)
    };
    let children = [
        sized(0, Some(60.0), Some(10.0)),
        sized(1, Some(60.0), Some(20.0)),
        sized(2, Some(30.0), Some(5.0)),
    ];
    layout_flex_container(&style, &children)
}

fn tops_and_heights(layout: &FlexLayout) -> Vec<(f32, f32)> {
    layout
        .items
        .iter()
        .map(|placement| (placement.top, placement.height))
        .collect()
}

#[test]
/// # Panics
/// Panics if lines are not sealed when the next item does not fit.
fn breaks_when_remaining_space_is_insufficient() {
    let _ = env_logger::builder().is_test(true).try_init();
    let layout = wrapping(None, FlexWrap::Wrap, AlignContent::Stretch);
    assert_eq!(
        layout.lines,
        vec![
            FlexLine {
                items: 0..1,
                leftover_main: 40.0,
                cross_size: 10.0,
            },
            FlexLine {
                items: 1..3,
                leftover_main: 10.0,
                cross_size: 20.0,
            },
        ]
    );
    assert_spans(
        &lefts_and_widths(&layout),
        &[(0.0, 60.0), (0.0, 60.0), (60.0, 30.0)],
    );
    // Auto cross size is the sum of the line cross sizes.
    assert_close(layout.height, 30.0);
    assert_spans(
        &tops_and_heights(&layout),
        &[(0.0, 10.0), (10.0, 20.0), (10.0, 5.0)],
    );
}

#[test]
/// # Panics
/// Panics if `align-content: stretch` does not share leftover cross space between lines.
fn stretch_grows_lines() {
    let layout = wrapping(Some(50.0), FlexWrap::Wrap, AlignContent::Stretch);
    // Leftover 20 gives each line +10: lines are 20 and 30 tall.
    assert_spans(
        &tops_and_heights(&layout),
        &[(0.0, 10.0), (20.0, 20.0), (20.0, 5.0)],
    );
}

#[test]
/// # Panics
/// Panics if `center` and `space-between` do not offset the lines.
fn packs_lines() {
    let center = wrapping(Some(50.0), FlexWrap::Wrap, AlignContent::Center);
    assert_spans(
        &tops_and_heights(&center),
        &[(10.0, 10.0), (20.0, 20.0), (20.0, 5.0)],
    );
    let between = wrapping(Some(50.0), FlexWrap::Wrap, AlignContent::SpaceBetween);
    assert_spans(
        &tops_and_heights(&between),
        &[(0.0, 10.0), (30.0, 20.0), (30.0, 5.0)],
    );
}

#[test]
/// # Panics
/// Panics if `wrap-reverse` does not stack lines from the bottom edge.
fn wrap_reverse_stacks_from_the_far_edge() {
    let layout = wrapping(Some(50.0), FlexWrap::WrapReverse, AlignContent::FlexStart);
    assert_spans(
        &tops_and_heights(&layout),
        &[(40.0, 10.0), (20.0, 20.0), (35.0, 5.0)],
    );
}

#[test]
/// # Panics
/// Panics if negative leftover cross space is spread by the `space-*` modes.
fn negative_cross_leftover() {
    let between = wrapping(Some(20.0), FlexWrap::Wrap, AlignContent::SpaceBetween);
    assert_spans(
        &tops_and_heights(&between),
        &[(0.0, 10.0), (10.0, 20.0), (10.0, 5.0)],
    );
    let center = wrapping(Some(20.0), FlexWrap::Wrap, AlignContent::Center);
    assert_spans(
        &tops_and_heights(&center),
        &[(-5.0, 10.0), (5.0, 20.0), (5.0, 5.0)],
    );
}

#[test]
/// # Panics
/// Panics if an oversized item is not clamped to the container's main size.
fn oversized_items_are_clamped_when_wrapping() {
    let style = FlexContainerStyle {
        wrap: FlexWrap::Wrap,
        ..container(Some(100.0), None)
    };
    let children = [sized(0, Some(30.0), None), sized(1, Some(150.0), None)];
    let layout = layout_flex_container(&style, &children);
    assert_eq!(layout.lines.len(), 2);
    assert_spans(&lefts_and_widths(&layout), &[(0.0, 30.0), (0.0, 100.0)]);
}

#[test]
/// # Panics
/// Panics if flexible items force a wrap by themselves.
fn flexible_items_never_wrap() {
    let style = FlexContainerStyle {
        wrap: FlexWrap::Wrap,
        ..container(Some(100.0), None)
    };
    let children = [sized(0, Some(100.0), None), flexible(1, 1.0)];
    let layout = layout_flex_container(&style, &children);
    assert_eq!(layout.lines.len(), 1);
    assert_spans(&lefts_and_widths(&layout), &[(0.0, 100.0), (100.0, 0.0)]);
}
