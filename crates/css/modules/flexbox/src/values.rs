//! Normalisation of raw style strings into layout numbers.
//! Spec: <https://www.w3.org/TR/css-values-3/#lengths> (px and unitless numbers only)

/// Parse `"<number>"` or `"<number>px"` into a definite, non-negative size.
///
/// Everything else (`auto`, the empty string, other units, NaN or infinite
/// numbers) is treated as unset. Negative numbers clamp to zero.
pub fn parse_length(raw: &str) -> Option<f32> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
    if number.is_empty() {
        return None;
    }
    number
        .parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| value.max(0.0))
}

/// Extract the flex factor from a `flex` value: its first numeric token.
///
/// `flex: 2` gives 2 and `flex: 1 1 auto` gives 1. A factor that is not a
/// positive finite number means the item has no flex factor.
pub fn parse_flex_factor(raw: &str) -> Option<f32> {
    raw.split_ascii_whitespace()
        .find_map(|token| token.parse::<f32>().ok())
        .filter(|factor| factor.is_finite() && *factor > 0.0)
}

/// Drop non-finite numbers and clamp the rest to zero or more.
#[inline]
pub fn sanitize(value: Option<f32>) -> Option<f32> {
    value.filter(|size| size.is_finite()).map(|size| size.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if numbers and px lengths are not accepted.
    fn lengths_accept_numbers_and_px() {
        assert_eq!(parse_length("300"), Some(300.0));
        assert_eq!(parse_length(" 12.5px "), Some(12.5));
        assert_eq!(parse_length("-4px"), Some(0.0));
    }

    #[test]
    /// # Panics
    /// Panics if keywords or other units are not treated as unset.
    fn lengths_reject_keywords_and_units() {
        assert_eq!(parse_length("auto"), None);
        assert_eq!(parse_length(""), None);
        assert_eq!(parse_length("px"), None);
        assert_eq!(parse_length("10em"), None);
        assert_eq!(parse_length("NaN"), None);
        assert_eq!(parse_length("inf"), None);
    }

    #[test]
    /// # Panics
    /// Panics if the first numeric token is not used as the factor.
    fn flex_factor_uses_first_number() {
        assert_eq!(parse_flex_factor("2"), Some(2.0));
        assert_eq!(parse_flex_factor("1 1 auto"), Some(1.0));
        assert_eq!(parse_flex_factor("auto 3"), Some(3.0));
        assert_eq!(parse_flex_factor("0"), None);
        assert_eq!(parse_flex_factor("-1"), None);
        assert_eq!(parse_flex_factor("none"), None);
    }
}
