use super::*;

fn three_fifties(justify: JustifyContent, direction: FlexDirection) -> Vec<(f32, f32)> {
    let style = FlexContainerStyle {
        justify_content: justify,
        direction,
        ..container(Some(300.0), None)
    };
    let children = [
        sized(0, Some(50.0), None),
        sized(1, Some(50.0), None),
        sized(2, Some(50.0), None),
    ];
    lefts_and_widths(&layout_flex_container(&style, &children))
}

#[test]
/// # Panics
/// Panics if `space-between` does not spread 150px into two gaps of 75px.
fn space_between_spreads_leftover() {
    let _ = env_logger::builder().is_test(true).try_init();
    let spans = three_fifties(JustifyContent::SpaceBetween, FlexDirection::Row);
    assert_spans(&spans, &[(0.0, 50.0), (125.0, 50.0), (250.0, 50.0)]);
}

#[test]
/// # Panics
/// Panics if the start/end/center modes compute the wrong start offset.
fn packing_modes() {
    let end = three_fifties(JustifyContent::FlexEnd, FlexDirection::Row);
    assert_spans(&end, &[(150.0, 50.0), (200.0, 50.0), (250.0, 50.0)]);
    let center = three_fifties(JustifyContent::Center, FlexDirection::Row);
    assert_spans(&center, &[(75.0, 50.0), (125.0, 50.0), (175.0, 50.0)]);
    let start = three_fifties(JustifyContent::FlexStart, FlexDirection::Row);
    assert_spans(&start, &[(0.0, 50.0), (50.0, 50.0), (100.0, 50.0)]);
}

#[test]
/// # Panics
/// Panics if `space-around` or `space-evenly` place items at the wrong offsets.
fn around_and_evenly() {
    let around = three_fifties(JustifyContent::SpaceAround, FlexDirection::Row);
    assert_spans(&around, &[(25.0, 50.0), (125.0, 50.0), (225.0, 50.0)]);
    let evenly = three_fifties(JustifyContent::SpaceEvenly, FlexDirection::Row);
    assert_spans(&evenly, &[(37.5, 50.0), (125.0, 50.0), (212.5, 50.0)]);
}

#[test]
/// # Panics
/// Panics if `flex-end` on a reversed row does not pack against the left edge.
fn reversed_flex_end_packs_at_the_left() {
    let spans = three_fifties(JustifyContent::FlexEnd, FlexDirection::RowReverse);
    assert_spans(&spans, &[(100.0, 50.0), (50.0, 50.0), (0.0, 50.0)]);
}

#[test]
/// # Panics
/// Panics if a lone item under `space-between` is not placed at the start.
fn space_between_single_item() {
    let style = FlexContainerStyle {
        justify_content: JustifyContent::SpaceBetween,
        ..container(Some(300.0), None)
    };
    let layout = layout_flex_container(&style, &[sized(0, Some(50.0), None)]);
    assert_spans(&lefts_and_widths(&layout), &[(0.0, 50.0)]);
}
