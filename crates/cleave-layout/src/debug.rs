#![forbid(unsafe_code)]

//! Introspection into how a split was solved.
//!
//! [`trace`] runs the same phases as [`Flex::split`] and reports the
//! intermediate quantities instead of rectangles: per-constraint sizes,
//! the gaps the flex mode inserted, and whether overflow shrinking ran.
//! Useful for debugging a layout that doesn't look the way it reads.

use std::fmt;

use crate::{Constraint, Flex, Rect};

/// A solved split, broken out for inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitTrace {
    /// The area after margin removal.
    pub inner: Rect,
    /// Main-axis length the constraints competed for.
    pub length: u16,
    /// The constraint list, in order.
    pub constraints: Vec<Constraint>,
    /// Final main-axis size per constraint.
    pub sizes: Vec<u16>,
    /// Gap inserted before the first element.
    pub leading: u16,
    /// Gap inserted after element `i`, for `i` in `0..len-1`.
    pub between: Vec<u16>,
    /// Whether phase 2 shrank the base sizes to fit.
    pub overflowed: bool,
    /// Cells after the last element that no constraint or gap claimed.
    pub trailing: u16,
}

/// Solve `area` with `flex` and report the intermediate state.
///
/// The sizes and gaps agree exactly with what [`Flex::split`] lays out.
pub fn trace(flex: &Flex, area: Rect) -> SplitTrace {
    let solved = flex.solve(area);
    let consumed: u32 = solved.sizes.iter().map(|&s| s as u32).sum::<u32>()
        + solved.leading as u32
        + solved.between.iter().map(|&g| g as u32).sum::<u32>();
    let trailing = solved.length.saturating_sub(consumed.min(u16::MAX as u32) as u16);
    SplitTrace {
        inner: solved.inner,
        length: solved.length,
        constraints: flex.constraints.clone(),
        sizes: solved.sizes,
        leading: solved.leading,
        between: solved.between,
        overflowed: solved.overflowed,
        trailing,
    }
}

impl fmt::Display for SplitTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "split over {} cells{}{}",
            self.length,
            if self.overflowed { " (overflowed)" } else { "" },
            if self.leading > 0 {
                format!(", leading gap {}", self.leading)
            } else {
                String::new()
            },
        )?;
        for (i, (constraint, size)) in self.constraints.iter().zip(&self.sizes).enumerate() {
            write!(f, "  [{i}] {constraint:?} -> {size}")?;
            if let Some(&gap) = self.between.get(i)
                && gap > 0
            {
                write!(f, " (+{gap} gap)")?;
            }
            writeln!(f)?;
        }
        if self.trailing > 0 {
            writeln!(f, "  trailing slack {}", self.trailing)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlexMode;

    #[test]
    fn trace_agrees_with_split() {
        let flex = Flex::horizontal()
            .flex(FlexMode::SpaceBetween)
            .constraints([Constraint::Length(5), Constraint::Length(5)]);
        let area = Rect::new(0, 0, 20, 1);

        let t = trace(&flex, area);
        assert_eq!(t.sizes, vec![5, 5]);
        assert_eq!(t.between, vec![10]);
        assert_eq!(t.leading, 0);
        assert_eq!(t.trailing, 0);
        assert!(!t.overflowed);

        let rects = flex.split(area);
        assert_eq!(rects[1].x, 5 + t.between[0]);
    }

    #[test]
    fn trace_reports_overflow() {
        let flex = Flex::horizontal()
            .constraints([Constraint::Length(10), Constraint::Length(10)]);
        let t = trace(&flex, Rect::new(0, 0, 15, 1));
        assert!(t.overflowed);
        assert_eq!(t.sizes, vec![8, 7]);
        assert_eq!(t.trailing, 0);
    }

    #[test]
    fn trace_reports_trailing_slack_under_legacy() {
        let flex = Flex::horizontal().constraints([Constraint::Length(10)]);
        let t = trace(&flex, Rect::new(0, 0, 30, 1));
        assert_eq!(t.trailing, 20);
    }

    #[test]
    fn display_lists_each_constraint() {
        let flex = Flex::horizontal()
            .constraints([Constraint::Length(10), Constraint::Fill(1)]);
        let rendered = trace(&flex, Rect::new(0, 0, 40, 1)).to_string();
        assert!(rendered.contains("Length(10) -> 10"));
        assert!(rendered.contains("Fill(1) -> 30"));
    }
}
