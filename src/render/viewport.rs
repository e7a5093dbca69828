use std::ops::Range;

use crate::types::point::{Point, X, Y};

/// Axis-aligned window of the plane that a plot shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub min: Point,
    pub max: Point,
}

impl Viewport {
    /// [-6,6] on both axes.
    pub const SQUARE_6: Viewport = Viewport::square(6.0);

    pub const fn square(half_extent: f64) -> Self {
        Self {
            min: Point::new(-half_extent, -half_extent),
            max: Point::new(half_extent, half_extent),
        }
    }

    pub fn range_x(&self) -> Range<X> {
        self.min.x..self.max.x
    }

    pub fn range_y(&self) -> Range<Y> {
        self.min.y..self.max.y
    }

    pub fn contains(&self, p: &Point) -> bool {
        (self.min.x..=self.max.x).contains(&p.x) && (self.min.y..=self.max.y).contains(&p.y)
    }

    /// Part of the segment `a`-`b` that lies inside the viewport (Liang-Barsky).
    pub fn clip_segment(&self, a: &Point, b: &Point) -> Option<(Point, Point)> {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let mut t0 = 0.0_f64;
        let mut t1 = 1.0_f64;
        let edges = [
            (-dx, a.x - self.min.x),
            (dx, self.max.x - a.x),
            (-dy, a.y - self.min.y),
            (dy, self.max.y - a.y),
        ];
        for (p, q) in edges {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
        Some((
            Point::new(a.x + t0 * dx, a.y + t0 * dy),
            Point::new(a.x + t1 * dx, a.y + t1 * dy),
        ))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::SQUARE_6
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::point::tests::point_eq;

    #[test]
    fn contains_bounds_inclusive() {
        let vp = Viewport::SQUARE_6;
        assert!(vp.contains(&Point::new(6.0, -6.0)));
        assert!(vp.contains(&Point::new(0.0, 0.0)));
        assert!(!vp.contains(&Point::new(6.1, 0.0)));
    }

    #[test]
    fn segment_inside_is_untouched() {
        let vp = Viewport::SQUARE_6;
        let (a, b) = vp
            .clip_segment(&Point::new(-1.0, -1.0), &Point::new(2.0, 3.0))
            .unwrap();
        assert!(point_eq(&a, &Point::new(-1.0, -1.0)));
        assert!(point_eq(&b, &Point::new(2.0, 3.0)));
    }

    #[test]
    fn segment_crossing_edge_is_cut() {
        let vp = Viewport::SQUARE_6;
        let (a, b) = vp
            .clip_segment(&Point::new(0.0, 0.0), &Point::new(12.0, 0.0))
            .unwrap();
        assert!(point_eq(&a, &Point::new(0.0, 0.0)));
        assert!(point_eq(&b, &Point::new(6.0, 0.0)));
    }

    #[test]
    fn segment_outside_is_dropped() {
        let vp = Viewport::SQUARE_6;
        assert!(vp
            .clip_segment(&Point::new(7.0, 7.0), &Point::new(9.0, 8.0))
            .is_none());
        assert!(vp
            .clip_segment(&Point::new(-8.0, 0.0), &Point::new(-7.0, 5.0))
            .is_none());
    }
}
