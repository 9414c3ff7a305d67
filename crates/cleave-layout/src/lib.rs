#![forbid(unsafe_code)]

//! Constraint-based 1D layout for terminal UIs.
//!
//! The solver takes a rectangular area, a [`Direction`], an ordered list of
//! [`Constraint`]s, and a [`FlexMode`], and partitions the area along the
//! chosen axis into one rectangle per constraint:
//!
//! ```
//! use cleave_layout::{Constraint, Flex, Rect};
//!
//! let flex = Flex::horizontal()
//!     .constraints([Constraint::Length(20), Constraint::Fill(1)]);
//! let rects = flex.split(Rect::new(0, 0, 80, 24));
//!
//! assert_eq!(rects[0], Rect::new(0, 0, 20, 24));
//! assert_eq!(rects[1], Rect::new(20, 0, 60, 24));
//! ```
//!
//! Solving runs in four phases: resolve fixed sizes, shrink proportionally
//! on overflow, hand leftover space to `Fill` (or `Min` when no `Fill`
//! exists), then convert any remaining slack into gaps per the flex mode.
//! The output is deterministic, order-preserving, and never overlaps; a
//! caller builds a 2D grid by feeding one split's rects into nested splits
//! of the other direction.
//!
//! [`split`](Flex::split) is a pure function of its inputs. Nothing here is
//! shared or mutable, so any number of threads may solve concurrently.

pub mod cache;
mod constraint;
pub mod debug;

pub use cleave_core::geometry::{Rect, Sides, Size};
pub use constraint::{Constraint, InvalidConstraint};

/// The axis being subdivided.
///
/// The main axis is `height` for [`Direction::Vertical`] and `width` for
/// [`Direction::Horizontal`]; the cross axis is copied unchanged into
/// every output rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Top to bottom.
    #[default]
    Vertical,
    /// Left to right.
    Horizontal,
}

/// Policy for distributing main-axis space no constraint consumed.
///
/// Only relevant when the packed sizes come up short of the available
/// length, which cannot happen while a `Fill` constraint is absorbing
/// leftover space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlexMode {
    /// Pack at the start and leave the slack trailing. Matches the
    /// historical default of giving no constraint extra room.
    #[default]
    Legacy,
    /// Pack at the start (same geometry as `Legacy`).
    Start,
    /// Center the packed block; an odd cell goes to the trailing side.
    Center,
    /// Pack against the far edge; the slack leads.
    End,
    /// Distribute the slack between consecutive elements, none at the
    /// edges. Falls back to `Start` for fewer than two elements.
    SpaceBetween,
    /// Gaps before, between, and after, with interior gaps twice the
    /// size of the edge gaps.
    SpaceAround,
    /// Equal gaps everywhere, including both edges.
    SpaceEvenly,
}

/// A configured layout split.
///
/// Built once, then applied to any number of areas via [`split`](Self::split).
#[derive(Debug, Clone, Default)]
pub struct Flex {
    pub(crate) direction: Direction,
    pub(crate) constraints: Vec<Constraint>,
    pub(crate) flex: FlexMode,
    pub(crate) margin: Sides,
    pub(crate) gap: u16,
}

impl Flex {
    /// A vertical split (stacks top to bottom).
    pub fn vertical() -> Self {
        Self {
            direction: Direction::Vertical,
            ..Default::default()
        }
    }

    /// A horizontal split (stacks left to right).
    pub fn horizontal() -> Self {
        Self {
            direction: Direction::Horizontal,
            ..Default::default()
        }
    }

    /// Set the layout direction.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the ordered constraint list. One output rect per constraint.
    pub fn constraints(mut self, constraints: impl IntoIterator<Item = Constraint>) -> Self {
        self.constraints = constraints.into_iter().collect();
        self
    }

    /// Set the flex mode governing unconsumed leftover space.
    pub fn flex(mut self, flex: FlexMode) -> Self {
        self.flex = flex;
        self
    }

    /// Set an outer margin subtracted from the area before solving.
    pub fn margin(mut self, margin: impl Into<Sides>) -> Self {
        self.margin = margin.into();
        self
    }

    /// Set a fixed gap inserted between consecutive elements.
    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    /// Number of constraints (and thus of output rects).
    #[must_use]
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Partition `area` along the main axis.
    ///
    /// Returns one rectangle per constraint, in constraint order. The
    /// rectangles never overlap, keep the area's cross-axis offset and
    /// size, and together with the inserted gaps account for the full
    /// main-axis length. Never panics; an empty constraint list yields an
    /// empty vec.
    pub fn split(&self, area: Rect) -> Vec<Rect> {
        let solved = self.solve(area);
        self.assemble(&solved)
    }

    /// Run phases 1-4 without materializing rectangles.
    pub(crate) fn solve(&self, area: Rect) -> SolvedLayout {
        let count = self.constraints.len();
        let inner = area.inner(self.margin);
        let main = match self.direction {
            Direction::Horizontal => inner.width,
            Direction::Vertical => inner.height,
        };

        // Fixed gaps come off the top before any constraint sees the area.
        let gap_total = if count > 1 {
            ((count - 1) as u64 * self.gap as u64).min(u16::MAX as u64) as u16
        } else {
            0
        };
        let length = main.saturating_sub(gap_total);

        let (sizes, overflowed) = solve_sizes(&self.constraints, length);

        let consumed: u32 = sizes.iter().map(|&s| s as u32).sum();
        let slack = length.saturating_sub(consumed.min(u16::MAX as u32) as u16);
        let (leading, between) = flex_gaps(self.flex, slack, count);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            ?area,
            direction = ?self.direction,
            flex = ?self.flex,
            count,
            length,
            slack,
            overflowed,
            "layout split"
        );

        SolvedLayout {
            inner,
            length,
            sizes,
            leading,
            between,
            overflowed,
        }
    }

    fn assemble(&self, solved: &SolvedLayout) -> Vec<Rect> {
        let inner = solved.inner;
        let mut cursor = match self.direction {
            Direction::Horizontal => inner.x,
            Direction::Vertical => inner.y,
        }
        .saturating_add(solved.leading);

        let count = solved.sizes.len();
        let mut rects = Vec::with_capacity(count);
        for (i, &size) in solved.sizes.iter().enumerate() {
            rects.push(match self.direction {
                Direction::Horizontal => Rect::new(cursor, inner.y, size, inner.height),
                Direction::Vertical => Rect::new(inner.x, cursor, inner.width, size),
            });
            cursor = cursor.saturating_add(size);
            if i + 1 < count {
                cursor = cursor
                    .saturating_add(self.gap)
                    .saturating_add(solved.between.get(i).copied().unwrap_or(0));
            }
        }
        rects
    }
}

/// The result of phases 1-4, before rectangles are laid down.
#[derive(Debug, Clone)]
pub(crate) struct SolvedLayout {
    /// Area after margin removal.
    pub(crate) inner: Rect,
    /// Main-axis length the constraints competed for (post margin/gap).
    pub(crate) length: u16,
    /// Final size per constraint, in constraint order.
    pub(crate) sizes: Vec<u16>,
    /// Gap before the first element (End/Center/SpaceAround/SpaceEvenly).
    pub(crate) leading: u16,
    /// Gap after element `i`, for `i` in `0..count-1`.
    pub(crate) between: Vec<u16>,
    /// Whether phase 2 had to shrink the base sizes.
    pub(crate) overflowed: bool,
}

/// Phases 1-3: resolve base sizes, shrink on overflow, or distribute
/// leftover to `Fill` (falling back to `Min` growth when no `Fill` exists).
fn solve_sizes(constraints: &[Constraint], length: u16) -> (Vec<u16>, bool) {
    let len = length as u64;
    let mut sizes: Vec<u16> = constraints
        .iter()
        .map(|&c| {
            let base = match c {
                Constraint::Length(n) | Constraint::Min(n) | Constraint::Max(n) => n as u64,
                // Round half up. Percentage is clamped so a raw
                // `Constraint::Percentage(>100)` still solves totally.
                Constraint::Percentage(p) => (len * p.min(100) as u64 + 50) / 100,
                Constraint::Ratio(num, denom) => {
                    let denom = denom.max(1) as u64;
                    (len * num as u64 + denom / 2) / denom
                }
                Constraint::Fill(_) => 0,
            };
            base.min(len) as u16
        })
        .collect();

    let total: u64 = sizes.iter().map(|&s| s as u64).sum();

    if total > len {
        shrink_proportional(&mut sizes, length, total);
        return (sizes, true);
    }

    let leftover = (len - total) as u16;
    if leftover == 0 {
        return (sizes, false);
    }

    if constraints.iter().any(Constraint::is_fill) {
        // Leftover belongs to Fill; Min stays at its floor.
        let targets: Vec<usize> = (0..constraints.len())
            .filter(|&i| constraints[i].is_fill())
            .collect();
        let weights: Vec<u32> = targets
            .iter()
            .map(|&i| match constraints[i] {
                Constraint::Fill(w) => w as u32,
                _ => 0,
            })
            .collect();
        for (&i, share) in targets.iter().zip(apportion(leftover, &weights)) {
            sizes[i] = sizes[i].saturating_add(share);
        }
    } else {
        // No Fill anywhere: Min constraints absorb the leftover as
        // implicit equal-weight participants.
        let targets: Vec<usize> = (0..constraints.len())
            .filter(|&i| matches!(constraints[i], Constraint::Min(_)))
            .collect();
        if !targets.is_empty() {
            let weights = vec![1u32; targets.len()];
            for (&i, share) in targets.iter().zip(apportion(leftover, &weights)) {
                sizes[i] = sizes[i].saturating_add(share);
            }
        }
    }

    (sizes, false)
}

/// Phase 2: scale every base size by `length / total`, flooring, then hand
/// the deficit back one cell at a time in constraint order to constraints
/// that asked for anything at all. All bounded constraints shrink together
/// rather than the later ones being starved.
fn shrink_proportional(sizes: &mut [u16], length: u16, total: u64) {
    let len = length as u64;
    let original: Vec<u16> = sizes.to_vec();
    let mut scaled_total: u64 = 0;
    for size in sizes.iter_mut() {
        let scaled = (*size as u64 * len / total) as u16;
        scaled_total += scaled as u64;
        *size = scaled;
    }

    // Each floor loses strictly less than one cell, so a single in-order
    // pass over the nonzero requests covers the whole deficit.
    let mut deficit = (len - scaled_total) as u16;
    for (size, &orig) in sizes.iter_mut().zip(&original) {
        if deficit == 0 {
            break;
        }
        if orig > 0 {
            *size += 1;
            deficit -= 1;
        }
    }
    debug_assert_eq!(deficit, 0);
}

/// Largest-remainder apportionment of `total` cells over `weights`.
///
/// Floors each exact share `total * w_i / sum(w)`, then awards the
/// remaining cells to the largest fractional remainders, ties broken by
/// index. The shares always sum to `total` when any weight is nonzero;
/// an all-zero weight list yields all-zero shares.
fn apportion(total: u16, weights: &[u32]) -> Vec<u16> {
    let weight_sum: u64 = weights.iter().map(|&w| w as u64).sum();
    if weight_sum == 0 || total == 0 {
        return vec![0; weights.len()];
    }

    let t = total as u64;
    let mut shares = Vec::with_capacity(weights.len());
    let mut remainders: Vec<(usize, u64)> = Vec::with_capacity(weights.len());
    let mut floor_sum: u64 = 0;
    for (i, &w) in weights.iter().enumerate() {
        let exact = t * w as u64;
        let floor = exact / weight_sum;
        floor_sum += floor;
        shares.push(floor as u16);
        remainders.push((i, exact % weight_sum));
    }

    remainders.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    let deficit = (t - floor_sum) as usize;
    for &(i, _) in remainders.iter().take(deficit) {
        shares[i] += 1;
    }
    shares
}

/// Phase 4: turn unconsumed slack into a leading gap plus interior gaps.
///
/// The trailing gap is implicit: whatever the leading and interior gaps
/// don't claim stays after the last element.
fn flex_gaps(flex: FlexMode, slack: u16, count: usize) -> (u16, Vec<u16>) {
    let interior = count.saturating_sub(1);
    match flex {
        FlexMode::Legacy | FlexMode::Start => (0, vec![0; interior]),
        FlexMode::End => (slack, vec![0; interior]),
        FlexMode::Center => (slack / 2, vec![0; interior]),
        FlexMode::SpaceBetween => {
            if interior == 0 {
                (0, Vec::new())
            } else {
                (0, apportion(slack, &vec![1; interior]))
            }
        }
        FlexMode::SpaceAround => {
            if count == 0 {
                return (0, Vec::new());
            }
            // count + 1 gaps; edges get half the weight of interior gaps.
            let mut weights = vec![2u32; count + 1];
            weights[0] = 1;
            weights[count] = 1;
            let gaps = apportion(slack, &weights);
            (gaps[0], gaps[1..count].to_vec())
        }
        FlexMode::SpaceEvenly => {
            if count == 0 {
                return (0, Vec::new());
            }
            let gaps = apportion(slack, &vec![1u32; count + 1]);
            (gaps[0], gaps[1..count].to_vec())
        }
    }
}
