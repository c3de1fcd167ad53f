//! Flex Formatting Context (FFC)
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>

/// Display keywords relevant to flex detection.
///
/// Spec: <https://www.w3.org/TR/css-display-3/#the-display-properties>
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum DisplayKeyword {
    #[default]
    Inline,
    Block,
    None,
    Flex,
}

impl DisplayKeyword {
    /// Parse a `display` value. Missing or unrecognised values give the initial `inline`.
    pub fn from_keyword(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("flex") => Self::Flex,
            Some(value) if value.eq_ignore_ascii_case("block") => Self::Block,
            Some(value) if value.eq_ignore_ascii_case("none") => Self::None,
            _ => Self::Inline,
        }
    }
}

/// Returns true when the element establishes a Flex Formatting Context (FFC).
/// Only `display: flex` does; layout of any other box is a no-op here.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>
#[inline]
pub const fn establishes_flex_formatting_context(display: DisplayKeyword) -> bool {
    matches!(display, DisplayKeyword::Flex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if `establishes_flex_formatting_context` does not return true for `flex`.
    fn flex_formats_established_for_flex_keyword() {
        let display = DisplayKeyword::from_keyword(Some(" FLEX "));
        assert_eq!(display, DisplayKeyword::Flex);
        assert!(establishes_flex_formatting_context(display));
    }

    #[test]
    /// # Panics
    /// Panics if `establishes_flex_formatting_context` returns true for non-flex display keywords.
    fn non_flex_keywords_do_not_establish() {
        for raw in [None, Some("block"), Some("none"), Some("inline-flex"), Some("")] {
            assert!(!establishes_flex_formatting_context(
                DisplayKeyword::from_keyword(raw)
            ));
        }
    }
}
