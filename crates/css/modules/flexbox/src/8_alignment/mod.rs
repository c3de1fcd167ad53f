//! Alignment — justify-content, align-items/align-self and align-content
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#alignment>
//!
//! Offsets produced here are unsigned distances from the start edge of the
//! axis; the layout pass applies the axis sign.

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#justify-content-property>
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum JustifyContent {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#align-items-property>
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum AlignItems {
    FlexStart,
    FlexEnd,
    Center,
    #[default]
    Stretch,
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#align-content-property>
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum AlignContent {
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
    #[default]
    Stretch,
}

/// Start offset before the first box and the gap inserted between boxes.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct SpaceDistribution {
    pub offset: f32,
    pub gap: f32,
}

/// The five packing modes shared by `justify-content` and `align-content`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Packing {
    Start,
    End,
    Center,
    Between,
    Around,
    Evenly,
}

impl SpaceDistribution {
    pub const NONE: Self = Self {
        offset: 0.0,
        gap: 0.0,
    };

    /// Split `leftover` across `count` boxes. Negative leftover is only honoured by
    /// end and center packing; the spreading modes fall back to start.
    fn pack(packing: Packing, leftover: f32, count: usize) -> Self {
        if !leftover.is_finite() {
            return Self::NONE;
        }
        let spreads = matches!(packing, Packing::Between | Packing::Around | Packing::Evenly);
        if spreads && (leftover < 0.0 || count == 0) {
            return Self::NONE;
        }
        let count_f = count as f32;
        match packing {
            Packing::Start => Self::NONE,
            Packing::End => Self {
                offset: leftover,
                gap: 0.0,
            },
            Packing::Center => Self {
                offset: leftover / 2.0,
                gap: 0.0,
            },
            Packing::Between if count > 1 => Self {
                offset: 0.0,
                gap: leftover / (count_f - 1.0),
            },
            Packing::Between => Self::NONE,
            Packing::Around => {
                let gap = leftover / count_f;
                Self {
                    offset: gap / 2.0,
                    gap,
                }
            }
            Packing::Evenly => {
                let gap = leftover / (count_f + 1.0);
                Self { offset: gap, gap }
            }
        }
    }
}

impl JustifyContent {
    /// Parse a `justify-content` value; unrecognised values give `flex-start`.
    pub fn from_keyword(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("flex-end" | "end") => Self::FlexEnd,
            Some("center") => Self::Center,
            Some("space-between") => Self::SpaceBetween,
            Some("space-around") => Self::SpaceAround,
            Some("space-evenly") => Self::SpaceEvenly,
            _ => Self::FlexStart,
        }
    }

    /// Distribute a line's leftover main space across `count` items.
    pub fn distribute(self, leftover: f32, count: usize) -> SpaceDistribution {
        let packing = match self {
            Self::FlexStart => Packing::Start,
            Self::FlexEnd => Packing::End,
            Self::Center => Packing::Center,
            Self::SpaceBetween => Packing::Between,
            Self::SpaceAround => Packing::Around,
            Self::SpaceEvenly => Packing::Evenly,
        };
        SpaceDistribution::pack(packing, leftover, count)
    }
}

impl AlignItems {
    /// Parse an `align-items`/`align-self` value. Absent means `stretch`;
    /// unrecognised values give `flex-start`.
    pub fn from_keyword(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("stretch") => Self::Stretch,
            Some("flex-end" | "end") => Self::FlexEnd,
            Some("center") => Self::Center,
            Some(_) => Self::FlexStart,
        }
    }
}

impl AlignContent {
    /// Parse an `align-content` value. Absent means `stretch`;
    /// unrecognised values give `flex-start`.
    pub fn from_keyword(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("stretch") => Self::Stretch,
            Some("flex-end" | "end") => Self::FlexEnd,
            Some("center") => Self::Center,
            Some("space-between") => Self::SpaceBetween,
            Some("space-around") => Self::SpaceAround,
            Some("space-evenly") => Self::SpaceEvenly,
            Some(_) => Self::FlexStart,
        }
    }

    /// Distribute leftover cross space across `count` lines.
    /// `stretch` grows the lines instead, see [`AlignContent::stretch_share`].
    pub fn distribute(self, leftover: f32, count: usize) -> SpaceDistribution {
        let packing = match self {
            Self::FlexStart | Self::Stretch => Packing::Start,
            Self::FlexEnd => Packing::End,
            Self::Center => Packing::Center,
            Self::SpaceBetween => Packing::Between,
            Self::SpaceAround => Packing::Around,
            Self::SpaceEvenly => Packing::Evenly,
        };
        SpaceDistribution::pack(packing, leftover, count)
    }

    /// Extra cross size each line receives under `stretch`.
    pub fn stretch_share(self, leftover: f32, count: usize) -> f32 {
        if self == Self::Stretch && count > 0 && leftover.is_finite() && leftover > 0.0 {
            leftover / count as f32
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: SpaceDistribution, offset: f32, gap: f32) {
        assert!(
            (actual.offset - offset).abs() < 1e-4 && (actual.gap - gap).abs() < 1e-4,
            "got {actual:?}, expected offset={offset} gap={gap}"
        );
    }

    #[test]
    /// # Panics
    /// Panics if any justify-content mode computes the wrong offset or gap.
    fn justify_modes() {
        approx(JustifyContent::FlexStart.distribute(150.0, 3), 0.0, 0.0);
        approx(JustifyContent::FlexEnd.distribute(150.0, 3), 150.0, 0.0);
        approx(JustifyContent::Center.distribute(150.0, 3), 75.0, 0.0);
        approx(JustifyContent::SpaceBetween.distribute(150.0, 3), 0.0, 75.0);
        approx(JustifyContent::SpaceAround.distribute(150.0, 3), 25.0, 50.0);
        approx(JustifyContent::SpaceEvenly.distribute(160.0, 3), 40.0, 40.0);
    }

    #[test]
    /// # Panics
    /// Panics if single-item or empty distributions divide by zero.
    fn degenerate_counts() {
        approx(JustifyContent::SpaceBetween.distribute(100.0, 1), 0.0, 0.0);
        approx(JustifyContent::SpaceAround.distribute(100.0, 0), 0.0, 0.0);
        approx(JustifyContent::SpaceAround.distribute(100.0, 1), 50.0, 100.0);
    }

    #[test]
    /// # Panics
    /// Panics if negative leftover is spread instead of honoured by end/center only.
    fn negative_leftover() {
        approx(AlignContent::SpaceBetween.distribute(-20.0, 2), 0.0, 0.0);
        approx(AlignContent::FlexEnd.distribute(-20.0, 2), -20.0, 0.0);
        approx(AlignContent::Center.distribute(-20.0, 2), -10.0, 0.0);
        assert!(AlignContent::Stretch.stretch_share(-20.0, 2).abs() < f32::EPSILON);
        assert!((AlignContent::Stretch.stretch_share(20.0, 2) - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    /// # Panics
    /// Panics if keyword parsing does not apply the documented fallbacks.
    fn keyword_fallbacks() {
        assert_eq!(AlignItems::from_keyword(None), AlignItems::Stretch);
        assert_eq!(AlignItems::from_keyword(Some("baseline")), AlignItems::FlexStart);
        assert_eq!(AlignContent::from_keyword(None), AlignContent::Stretch);
        assert_eq!(AlignContent::from_keyword(Some("bogus")), AlignContent::FlexStart);
        assert_eq!(JustifyContent::from_keyword(Some("bogus")), JustifyContent::FlexStart);
    }
}
