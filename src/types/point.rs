pub type X = f64;
pub type Y = f64;

pub const MAX_POINTS: usize = 5;
pub const FIRST_POINT_LABEL: char = 'A';

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: X,
    pub y: Y,
}

impl Point {
    pub const fn new(x: X, y: Y) -> Self {
        Self { x, y }
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

pub fn point_label(index: usize) -> char {
    super::letter(FIRST_POINT_LABEL, index)
}

/// `A(1.0, 2.0)`
pub fn point_caption(index: usize, point: &Point) -> String {
    format!("{}({:.1}, {:.1})", point_label(index), point.x, point.y)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn point_eq(a: &Point, b: &Point) -> bool {
        (b.x - a.x).abs() < X::EPSILON && (b.y - a.y).abs() < Y::EPSILON
    }

    #[test]
    fn labels_start_at_a() {
        let labels: String = (0..MAX_POINTS).map(point_label).collect();
        assert_eq!(labels, "ABCDE");
    }

    #[test]
    fn caption_has_one_decimal() {
        assert_eq!(point_caption(0, &Point::new(1.0, 2.0)), "A(1.0, 2.0)");
        assert_eq!(point_caption(2, &Point::new(-3.26, 0.04)), "C(-3.3, 0.0)");
    }

    #[test]
    fn midpoint_of_segment() {
        let m = Point::new(0.0, 0.0).midpoint(&Point::new(3.0, 4.0));
        assert!(point_eq(&m, &Point::new(1.5, 2.0)));
    }
}
