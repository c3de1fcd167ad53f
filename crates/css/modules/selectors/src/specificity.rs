//! CSS selector specificity calculation.
//! Spec: <https://www.w3.org/TR/selectors-3/#specificity>

use core::fmt;

use crate::{SelectorChain, SimpleSelector};

/// Specificity vector `(reserved, ids, classes, types)`.
///
/// The derived ordering compares components left to right and the first
/// differing component decides, so a higher vector is more specific.
/// The leading component is never produced by selectors; it is kept so
/// a future inline-style origin can outrank every selector.
/// Spec: Section 13 — Calculating a selector's specificity
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Specificity(pub u16, pub u16, pub u16, pub u16);

impl Specificity {
    pub const ZERO: Self = Self(0, 0, 0, 0);

    /// Component-wise saturating sum.
    #[inline]
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(
            self.0.saturating_add(other.0),
            self.1.saturating_add(other.1),
            self.2.saturating_add(other.2),
            self.3.saturating_add(other.3),
        )
    }

    /// Specificity contributed by a single simple selector.
    #[inline]
    pub const fn of_simple(simple: &SimpleSelector) -> Self {
        match simple {
            SimpleSelector::IdSelector(_) => Self(0, 1, 0, 0),
            SimpleSelector::Class(_) => Self(0, 0, 1, 0),
            SimpleSelector::Type(_) => Self(0, 0, 0, 1),
        }
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({},{},{},{})", self.0, self.1, self.2, self.3)
    }
}

/// Compute the specificity of a selector chain (sum of its components).
/// Spec: Section 13 — Specificity accumulation
pub fn specificity_of_chain(chain: &SelectorChain) -> Specificity {
    chain
        .components
        .iter()
        .fold(Specificity::ZERO, |total, simple| {
            total.saturating_add(Specificity::of_simple(simple))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_selector_chain;

    #[test]
    /// # Panics
    /// Panics if the tally does not count ids, classes and types separately.
    fn tallies_each_category() {
        let chain = parse_selector_chain("body #main .card p");
        assert_eq!(specificity_of_chain(&chain), Specificity(0, 1, 1, 2));
    }

    #[test]
    /// # Panics
    /// Panics if a single id does not outrank any number of classes and types.
    fn id_outranks_classes_and_types() {
        let id_only = specificity_of_chain(&parse_selector_chain("#x"));
        let many = specificity_of_chain(&parse_selector_chain(".a .b .c div span p"));
        assert!(id_only > many);
        assert!(Specificity(0, 0, 1, 0) > Specificity(0, 0, 0, 9));
        assert!(Specificity(1, 0, 0, 0) > Specificity(0, 9, 9, 9));
    }

    #[test]
    /// # Panics
    /// Panics if equal vectors compare as different.
    fn equal_vectors_tie() {
        let left = specificity_of_chain(&parse_selector_chain(".a"));
        let right = specificity_of_chain(&parse_selector_chain(".b"));
        assert_eq!(left.cmp(&right), core::cmp::Ordering::Equal);
    }
}
