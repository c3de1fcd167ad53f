//! Flex Containers — container properties and enums
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>

use crate::chapter8::{AlignContent, AlignItems, JustifyContent};
use crate::values::parse_length;

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl FlexDirection {
    /// Parse a `flex-direction` value; anything unrecognised is `row`.
    pub fn from_keyword(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("row-reverse") => Self::RowReverse,
            Some("column") => Self::Column,
            Some("column-reverse") => Self::ColumnReverse,
            _ => Self::Row,
        }
    }
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property>
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum FlexWrap {
    #[default]
    Nowrap,
    Wrap,
    WrapReverse,
}

impl FlexWrap {
    /// Parse a `flex-wrap` value; anything unrecognised is `nowrap`.
    pub fn from_keyword(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("wrap") => Self::Wrap,
            Some("wrap-reverse") => Self::WrapReverse,
            _ => Self::Nowrap,
        }
    }
}

/// Normalised container inputs. `None` sizes are `auto`.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct FlexContainerStyle {
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl FlexContainerStyle {
    /// Build container inputs from a property lookup (property name to raw value).
    pub fn from_lookup<'style, F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'style str>,
    {
        Self {
            direction: FlexDirection::from_keyword(lookup("flex-direction")),
            wrap: FlexWrap::from_keyword(lookup("flex-wrap")),
            justify_content: JustifyContent::from_keyword(lookup("justify-content")),
            align_items: AlignItems::from_keyword(lookup("align-items")),
            align_content: AlignContent::from_keyword(lookup("align-content")),
            width: lookup("width").and_then(parse_length),
            height: lookup("height").and_then(parse_length),
        }
    }
}
