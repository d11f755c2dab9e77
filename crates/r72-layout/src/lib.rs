#![forbid(unsafe_code)]

//! Constraint-based rectangle splitting.
//!
//! [`Flex`] divides a rectangle into rows or columns. Sizing happens in
//! two passes: `Fixed` and `Percentage` constraints claim space first in
//! declaration order, then `Min` constraints take their minimums and
//! split whatever is left evenly. When space runs out, later claims
//! collapse to zero rather than overflowing the area.

use r72_core::Rect;

/// Horizontal placement of content inside an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// How one slot of a split claims space along the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// Exactly this many cells (less if space runs out).
    Fixed(u16),
    /// At least this many cells, plus an even share of the remainder.
    Min(u16),
    /// A percentage (0-100) of the axis, rounded to whole cells.
    Percentage(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Vertical,
    Horizontal,
}

/// Builder for a directional split.
#[derive(Debug, Clone)]
pub struct Flex {
    direction: Direction,
    constraints: Vec<Constraint>,
    gap: u16,
}

impl Flex {
    /// Split top-to-bottom.
    #[must_use]
    pub fn vertical() -> Self {
        Self {
            direction: Direction::Vertical,
            constraints: Vec::new(),
            gap: 0,
        }
    }

    /// Split left-to-right.
    #[must_use]
    pub fn horizontal() -> Self {
        Self {
            direction: Direction::Horizontal,
            constraints: Vec::new(),
            gap: 0,
        }
    }

    #[must_use]
    pub fn constraints(mut self, constraints: impl Into<Vec<Constraint>>) -> Self {
        self.constraints = constraints.into();
        self
    }

    /// Cells of spacing between adjacent slots.
    #[must_use]
    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    /// Solve the constraints against `area`. Returns one rectangle per
    /// constraint, in order.
    #[must_use]
    pub fn split(&self, area: Rect) -> Vec<Rect> {
        let axis = match self.direction {
            Direction::Vertical => area.height,
            Direction::Horizontal => area.width,
        };
        let sizes = solve(&self.constraints, axis, self.gap);
        self.sizes_to_rects(area, &sizes)
    }

    fn sizes_to_rects(&self, area: Rect, sizes: &[u16]) -> Vec<Rect> {
        let mut rects = Vec::with_capacity(sizes.len());
        let mut offset = 0u16;
        for (i, &size) in sizes.iter().enumerate() {
            let rect = match self.direction {
                Direction::Vertical => Rect::new(
                    area.x,
                    area.y.saturating_add(offset),
                    area.width,
                    size,
                ),
                Direction::Horizontal => Rect::new(
                    area.x.saturating_add(offset),
                    area.y,
                    size,
                    area.height,
                ),
            };
            rects.push(rect.intersection(&area));
            offset = offset.saturating_add(size);
            if i + 1 < sizes.len() {
                offset = offset.saturating_add(self.gap);
            }
        }
        rects
    }
}

fn solve(constraints: &[Constraint], axis: u16, gap: u16) -> Vec<u16> {
    let n = constraints.len();
    if n == 0 {
        return Vec::new();
    }
    let gaps = gap.saturating_mul(n as u16 - 1);
    let available = axis.saturating_sub(gaps);
    let mut remaining = available;
    let mut sizes = vec![0u16; n];

    // Pass 1: fixed-size claims, in order.
    for (i, c) in constraints.iter().enumerate() {
        let claim = match c {
            Constraint::Fixed(v) => *v,
            Constraint::Percentage(p) => {
                let pct = p.clamp(0.0, 100.0);
                (f32::from(available) * pct / 100.0).round() as u16
            }
            Constraint::Min(_) => continue,
        };
        let take = claim.min(remaining);
        sizes[i] = take;
        remaining -= take;
    }

    // Pass 2: minimums.
    let min_slots: Vec<usize> = constraints
        .iter()
        .enumerate()
        .filter_map(|(i, c)| matches!(c, Constraint::Min(_)).then_some(i))
        .collect();
    for &i in &min_slots {
        if let Constraint::Min(v) = constraints[i] {
            let take = v.min(remaining);
            sizes[i] = take;
            remaining -= take;
        }
    }

    // Pass 3: share the leftover evenly among the Min slots.
    if !min_slots.is_empty() && remaining > 0 {
        let share = remaining / min_slots.len() as u16;
        let mut extra = remaining % min_slots.len() as u16;
        for &i in &min_slots {
            let mut add = share;
            if extra > 0 {
                add += 1;
                extra -= 1;
            }
            sizes[i] = sizes[i].saturating_add(add);
        }
    }

    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_rows_stack_in_order() {
        let rects = Flex::vertical()
            .constraints([Constraint::Fixed(1), Constraint::Fixed(3)])
            .split(Rect::new(0, 0, 10, 10));
        assert_eq!(rects[0], Rect::new(0, 0, 10, 1));
        assert_eq!(rects[1], Rect::new(0, 1, 10, 3));
    }

    #[test]
    fn min_takes_the_remainder() {
        let rects = Flex::vertical()
            .constraints([
                Constraint::Fixed(1),
                Constraint::Min(1),
                Constraint::Fixed(1),
            ])
            .split(Rect::new(0, 0, 10, 10));
        assert_eq!(rects[1].height, 8);
        assert_eq!(rects[2].y, 9);
    }

    #[test]
    fn two_mins_share_evenly() {
        let rects = Flex::horizontal()
            .constraints([Constraint::Min(1), Constraint::Min(1)])
            .split(Rect::new(0, 0, 11, 1));
        // 11 cells over two slots: the first gets the odd cell.
        assert_eq!(rects[0].width, 6);
        assert_eq!(rects[1].width, 5);
    }

    #[test]
    fn gap_is_reserved_between_slots() {
        let rects = Flex::vertical()
            .constraints([Constraint::Fixed(2), Constraint::Fixed(2)])
            .gap(1)
            .split(Rect::new(0, 0, 4, 10));
        assert_eq!(rects[0].bottom(), 2);
        assert_eq!(rects[1].y, 3);
    }

    #[test]
    fn percentage_rounds_to_cells() {
        let rects = Flex::horizontal()
            .constraints([Constraint::Percentage(25.0), Constraint::Min(0)])
            .split(Rect::new(0, 0, 10, 1));
        assert_eq!(rects[0].width, 3); // 2.5 rounds up
        assert_eq!(rects[1].width, 7);
    }

    #[test]
    fn overflow_collapses_later_slots() {
        let rects = Flex::vertical()
            .constraints([Constraint::Fixed(8), Constraint::Fixed(8)])
            .split(Rect::new(0, 0, 4, 10));
        assert_eq!(rects[0].height, 8);
        assert_eq!(rects[1].height, 2);
    }

    #[test]
    fn empty_constraint_list_yields_nothing() {
        assert!(Flex::vertical().split(Rect::new(0, 0, 4, 4)).is_empty());
    }

    #[test]
    fn offsets_respect_origin() {
        let rects = Flex::vertical()
            .constraints([Constraint::Fixed(1), Constraint::Min(0)])
            .split(Rect::new(5, 7, 10, 4));
        assert_eq!(rects[0], Rect::new(5, 7, 10, 1));
        assert_eq!(rects[1], Rect::new(5, 8, 10, 3));
    }
}
