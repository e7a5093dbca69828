use std::ops::{Add, Mul, Sub};

use super::point::{Point, X, Y};

pub const MAX_VECTORS: usize = 4;
pub const FIRST_VECTOR_LABEL: char = 'u';

/// A displacement in the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec2 {
    pub x: X,
    pub y: Y,
}

impl Vec2 {
    pub fn new(x: X, y: Y) -> Self {
        Self { x, y }
    }

    pub fn normal(&self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }

    pub fn from(a: &Point, b: &Point) -> Self {
        Self::new(b.x - a.x, b.y - a.y)
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction, `None` for a zero vector.
    pub fn unit(&self) -> Option<Self> {
        let len = self.length();
        (len > X::EPSILON).then(|| Self::new(self.x / len, self.y / len))
    }
}

impl Add<&Point> for &Vec2 {
    type Output = Point;
    fn add(self, other: &Point) -> Point {
        Point::new(other.x + self.x, other.y + self.y)
    }
}

impl Sub<&Vec2> for &Point {
    type Output = Point;
    fn sub(self, other: &Vec2) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, k: f64) -> Vec2 {
        Vec2::new(self.x * k, self.y * k)
    }
}

/// Directed segment from `start` to `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector {
    pub start: Point,
    pub end: Point,
}

impl Vector {
    pub fn new(x1: X, y1: Y, x2: X, y2: Y) -> Self {
        Self {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
        }
    }

    pub fn displacement(&self) -> Vec2 {
        Vec2::from(&self.start, &self.end)
    }

    pub fn midpoint(&self) -> Point {
        self.start.midpoint(&self.end)
    }
}

pub fn vector_label(index: usize) -> char {
    super::letter(FIRST_VECTOR_LABEL, index)
}

/// `u=(3.0, 4.0)`
pub fn vector_caption(index: usize, vector: &Vector) -> String {
    let d = vector.displacement();
    format!("{}=({:.1}, {:.1})", vector_label(index), d.x, d.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_start_at_u() {
        let labels: String = (0..MAX_VECTORS).map(vector_label).collect();
        assert_eq!(labels, "uvwx");
    }

    #[test]
    fn caption_shows_displacement() {
        let v = Vector::new(0.0, 0.0, 3.0, 4.0);
        assert_eq!(vector_caption(0, &v), "u=(3.0, 4.0)");
        let v = Vector::new(1.0, 1.0, -1.5, 2.0);
        assert_eq!(vector_caption(1, &v), "v=(-2.5, 1.0)");
    }

    #[test]
    fn unit_and_normal() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-12);
        let u = v.unit().unwrap();
        assert!((u.x - 0.6).abs() < 1e-12 && (u.y - 0.8).abs() < 1e-12);
        assert_eq!(v.normal(), Vec2::new(-4.0, 3.0));
        assert!(Vec2::new(0.0, 0.0).unit().is_none());
    }
}
