//! Rasterization algorithms
//!
//! Pure integer iterators used by the drawing operations on
//! [`Display`](crate::Display). They yield coordinates only; clipping and
//! pixel output happen in the caller.
//!
//! Any `i32` input is accepted. Error terms are kept in `i64` and mirrored
//! points saturate, so coordinates far outside the screen cannot overflow.

/// Bresenham line rasterizer
///
/// Yields every point from `start` to `end`, both inclusive.
///
/// ```
/// use st7735::primitives::Line;
///
/// let points: Vec<_> = Line::new((0, 0), (3, 1)).collect();
/// assert_eq!(points, [(0, 0), (1, 0), (2, 1), (3, 1)]);
/// ```
#[derive(Clone, Debug)]
pub struct Line {
    x: i32,
    y: i32,
    end: (i32, i32),
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl Line {
    /// Rasterize the segment between two points
    pub fn new(start: (i32, i32), end: (i32, i32)) -> Self {
        let dx = (i64::from(end.0) - i64::from(start.0)).abs();
        let dy = (i64::from(end.1) - i64::from(start.1)).abs();
        Self {
            x: start.0,
            y: start.1,
            end,
            dx,
            dy,
            sx: if start.0 < end.0 { 1 } else { -1 },
            sy: if start.1 < end.1 { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for Line {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let point = (self.x, self.y);
        if point == self.end {
            self.done = true;
            return Some(point);
        }
        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(point)
    }
}

/// Midpoint circle rasterizer
///
/// Yields one `(x, y)` offset per step of the first octant, walking from
/// `(r, 0)` until `x < y`. Mirroring each offset across the axes and the
/// diagonals gives the full outline.
#[derive(Clone, Debug)]
pub struct Octant {
    x: i32,
    y: i32,
    // Midpoint decision variable
    d: i64,
}

impl Octant {
    /// Start a circle of radius `r`
    ///
    /// A negative radius yields nothing.
    pub fn new(r: i32) -> Self {
        if r < 0 {
            return Self { x: -1, y: 0, d: 0 };
        }
        Self {
            x: r,
            y: 0,
            d: 1 - i64::from(r),
        }
    }
}

impl Iterator for Octant {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.x < self.y {
            return None;
        }
        let point = (self.x, self.y);
        self.y += 1;
        if self.d < 0 {
            self.d += 2 * i64::from(self.y) + 1;
        } else {
            self.x -= 1;
            self.d += 2 * (i64::from(self.y) - i64::from(self.x)) + 1;
        }
        Some(point)
    }
}

/// The eight symmetric points of an octant offset around a center
pub fn mirror8(cx: i32, cy: i32, (x, y): (i32, i32)) -> [(i32, i32); 8] {
    let (right, left) = (cx.saturating_add(x), cx.saturating_sub(x));
    let (right_near, left_near) = (cx.saturating_add(y), cx.saturating_sub(y));
    let (below, above) = (cy.saturating_add(y), cy.saturating_sub(y));
    let (below_far, above_far) = (cy.saturating_add(x), cy.saturating_sub(x));
    [
        (right, below),
        (right_near, below_far),
        (left_near, below_far),
        (left, below),
        (left, above),
        (left_near, above_far),
        (right_near, above_far),
        (right, above),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn test_horizontal_line_is_inclusive() {
        let points: Vec<_> = Line::new((0, 0), (5, 0)).collect();
        assert_eq!(points, vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]);
    }

    #[test]
    fn test_degenerate_line_is_single_point() {
        let points: Vec<_> = Line::new((0, 0), (0, 0)).collect();
        assert_eq!(points, vec![(0, 0)]);
    }

    #[test]
    fn test_reversed_vertical_line() {
        let points: Vec<_> = Line::new((2, 3), (2, 0)).collect();
        assert_eq!(points, vec![(2, 3), (2, 2), (2, 1), (2, 0)]);
    }

    #[test]
    fn test_diagonal_line() {
        let points: Vec<_> = Line::new((0, 0), (-3, 3)).collect();
        assert_eq!(points, vec![(0, 0), (-1, 1), (-2, 2), (-3, 3)]);
    }

    #[test]
    fn test_steep_line_visits_every_row() {
        let points: Vec<_> = Line::new((0, 0), (2, 7)).collect();
        assert_eq!(points.len(), 8);
        for (row, point) in points.iter().enumerate() {
            assert_eq!(point.1, row as i32);
        }
        assert_eq!(points.last(), Some(&(2, 7)));
    }

    #[test]
    fn test_octant_zero_radius() {
        let points: Vec<_> = Octant::new(0).collect();
        assert_eq!(points, vec![(0, 0)]);
    }

    #[test]
    fn test_octant_negative_radius_is_empty() {
        assert_eq!(Octant::new(-1).count(), 0);
    }

    #[test]
    fn test_octant_radius_three() {
        let points: Vec<_> = Octant::new(3).collect();
        assert_eq!(points, vec![(3, 0), (3, 1), (2, 2)]);
    }

    #[test]
    fn test_octant_points_stay_near_radius() {
        let r = 20;
        for (x, y) in Octant::new(r) {
            assert!(x >= y);
            let d2 = x * x + y * y;
            assert!((d2 - r * r).abs() <= 2 * r, "({x}, {y}) off the circle");
        }
    }

    #[test]
    fn test_mirror8() {
        let points = mirror8(10, 10, (3, 1));
        assert!(points.contains(&(13, 11)));
        assert!(points.contains(&(11, 13)));
        assert!(points.contains(&(7, 9)));
        assert!(points.contains(&(9, 7)));
    }

    #[test]
    fn test_line_across_full_range_starts_without_overflow() {
        let mut line = Line::new((i32::MIN, 5), (i32::MAX, 5));
        assert_eq!(line.next(), Some((i32::MIN, 5)));
        assert_eq!(line.next(), Some((i32::MIN + 1, 5)));
    }

    #[test]
    fn test_line_ends_at_extreme_endpoint() {
        let points: Vec<_> = Line::new((i32::MAX - 2, i32::MIN), (i32::MAX, i32::MIN)).collect();
        assert_eq!(points.last(), Some(&(i32::MAX, i32::MIN)));
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn test_octant_most_negative_radius_is_empty() {
        assert_eq!(Octant::new(i32::MIN).count(), 0);
    }

    #[test]
    fn test_octant_largest_radius_starts() {
        let mut octant = Octant::new(i32::MAX);
        assert_eq!(octant.next(), Some((i32::MAX, 0)));
        assert_eq!(octant.next(), Some((i32::MAX, 1)));
    }

    #[test]
    fn test_mirror8_saturates() {
        let points = mirror8(i32::MAX, i32::MIN, (1, 0));
        assert!(points.contains(&(i32::MAX, i32::MIN)));
        assert!(points.contains(&(i32::MAX - 1, i32::MIN)));
        assert!(points.contains(&(i32::MAX, i32::MIN + 1)));
    }
}
