#![forbid(unsafe_code)]

//! Sizing rules consumed by the solver.

use thiserror::Error;

/// Error raised when a constraint is built with an out-of-range payload.
///
/// Validation happens at construction time via [`Constraint::percentage`]
/// and [`Constraint::ratio`]; the solver itself never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidConstraint {
    /// Percentages are expressed over `0..=100`.
    #[error("percentage {0} is out of range 0..=100")]
    PercentageOutOfRange(u16),
    /// A ratio with a zero denominator has no defined share.
    #[error("ratio {0}/0 has a zero denominator")]
    ZeroRatioDenominator(u32),
}

/// A sizing rule for one slot along the main axis.
///
/// A list of N constraints always solves to exactly N rectangles, in the
/// same order. All payloads are unsigned, so negative sizes are
/// unrepresentable by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// Exactly this many cells.
    Length(u16),
    /// A percentage (`0..=100`) of the main-axis length, rounded half up.
    Percentage(u16),
    /// At least this many cells. Grows to absorb leftover space, but only
    /// when the list contains no [`Constraint::Fill`].
    Min(u16),
    /// At most this many cells. Shrinks with everything else under
    /// overflow and never grows.
    Max(u16),
    /// A weighted share of whatever space the other constraints leave
    /// over. Weight 0 degenerates to "no share".
    Fill(u16),
    /// `num / denom` of the main-axis length, rounded half up.
    Ratio(u32, u32),
}

impl Constraint {
    /// Build a [`Constraint::Percentage`], rejecting values above 100.
    pub fn percentage(p: u16) -> Result<Self, InvalidConstraint> {
        if p > 100 {
            return Err(InvalidConstraint::PercentageOutOfRange(p));
        }
        Ok(Self::Percentage(p))
    }

    /// Build a [`Constraint::Ratio`], rejecting zero denominators.
    pub fn ratio(num: u32, denom: u32) -> Result<Self, InvalidConstraint> {
        if denom == 0 {
            return Err(InvalidConstraint::ZeroRatioDenominator(num));
        }
        Ok(Self::Ratio(num, denom))
    }

    /// Whether this constraint competes for leftover space in its own
    /// right (as opposed to only via the no-Fill Min fallback).
    #[inline]
    pub(crate) const fn is_fill(&self) -> bool {
        matches!(self, Constraint::Fill(_))
    }
}

#[cfg(test)]
mod tests {
    use super::{Constraint, InvalidConstraint};

    #[test]
    fn percentage_accepts_full_range() {
        assert_eq!(Constraint::percentage(0), Ok(Constraint::Percentage(0)));
        assert_eq!(Constraint::percentage(100), Ok(Constraint::Percentage(100)));
    }

    #[test]
    fn percentage_rejects_above_100() {
        assert_eq!(
            Constraint::percentage(101),
            Err(InvalidConstraint::PercentageOutOfRange(101))
        );
    }

    #[test]
    fn ratio_rejects_zero_denominator() {
        assert_eq!(
            Constraint::ratio(1, 0),
            Err(InvalidConstraint::ZeroRatioDenominator(1))
        );
        assert_eq!(Constraint::ratio(1, 3), Ok(Constraint::Ratio(1, 3)));
    }

    #[test]
    fn error_messages_name_the_payload() {
        let err = Constraint::percentage(250).unwrap_err();
        assert_eq!(err.to_string(), "percentage 250 is out of range 0..=100");
        let err = Constraint::ratio(7, 0).unwrap_err();
        assert_eq!(err.to_string(), "ratio 7/0 has a zero denominator");
    }
}
