use css_flexbox::{
    DisplayKeyword, FlexChild, FlexContainerStyle, ItemRef, establishes_flex_formatting_context,
    layout_flex_container,
};
use html::{Element, Geometry};
use log::debug;

/// Lay out the element children of `element` if it is a flex container.
///
/// Children must already carry their resolved style, and any nested flex
/// containers must already be laid out. Each child receives its box relative
/// to `element`; `element` receives its own resolved width and height.
/// Returns whether a layout pass ran.
pub fn layout_element(element: &mut Element) -> bool {
    let display = DisplayKeyword::from_keyword(element.style_value("display"));
    if !establishes_flex_formatting_context(display) {
        return false;
    }
    let source: &Element = element;
    let container = FlexContainerStyle::from_lookup(|property| source.style_value(property));
    let children: Vec<FlexChild> = source
        .element_children()
        .enumerate()
        .map(|(index, child)| item_inputs(index, child))
        .collect();
    let layout = layout_flex_container(&container, &children);
    debug!(
        target: "page::layout",
        "<{}> laid out {} items in {} lines, {}x{}",
        element.tag_name,
        layout.items.len(),
        layout.lines.len(),
        layout.width,
        layout.height
    );

    let mut targets: Vec<&mut Element> = element.element_children_mut().collect();
    for placement in &layout.items {
        if let Some(child) = targets.get_mut(placement.handle.0) {
            child.geometry = Geometry {
                left: Some(placement.left),
                top: Some(placement.top),
                right: Some(placement.right),
                bottom: Some(placement.bottom),
                width: Some(placement.width),
                height: Some(placement.height),
            };
        }
    }
    element.geometry.width = Some(layout.width);
    element.geometry.height = Some(layout.height);
    true
}

/// Flex inputs for one child. An auto size falls back to the size the child's
/// own layout pass resolved, if any.
fn item_inputs(index: usize, child: &Element) -> FlexChild {
    let mut inputs = FlexChild::from_lookup(ItemRef(index), |property| child.style_value(property));
    inputs.width = inputs.width.or(child.geometry.width);
    inputs.height = inputs.height.or(child.geometry.height);
    inputs
}
