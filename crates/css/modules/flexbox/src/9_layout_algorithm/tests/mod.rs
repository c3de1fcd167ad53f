//! Tests for the flex layout algorithm.

use super::*;
use crate::chapter5::FlexDirection;
use crate::chapter8::{AlignContent, JustifyContent};

mod cross_alignment_tests;
mod justify_tests;
mod multi_line_tests;

/// A row container with the given declared size and otherwise initial values.
#[inline]
pub fn container(width: Option<f32>, height: Option<f32>) -> FlexContainerStyle {
    FlexContainerStyle {
        width,
        height,
        ..FlexContainerStyle::default()
    }
}

/// An inflexible item with the given declared size.
#[inline]
pub fn sized(handle: usize, width: Option<f32>, height: Option<f32>) -> FlexChild {
    FlexChild {
        width,
        height,
        ..FlexChild::new(ItemRef(handle))
    }
}

/// A flexible item with no declared size.
#[inline]
pub fn flexible(handle: usize, factor: f32) -> FlexChild {
    FlexChild {
        flex: Some(factor),
        ..FlexChild::new(ItemRef(handle))
    }
}

/// Assert two lengths agree to within rounding noise.
#[inline]
pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}

/// `(left, width)` of every placement in layout order.
pub fn lefts_and_widths(layout: &FlexLayout) -> Vec<(f32, f32)> {
    layout
        .items
        .iter()
        .map(|placement| (placement.left, placement.width))
        .collect()
}

pub fn assert_spans(actual: &[(f32, f32)], expected: &[(f32, f32)]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for (&(start, size), &(want_start, want_size)) in actual.iter().zip(expected) {
        assert_close(start, want_start);
        assert_close(size, want_size);
    }
}
