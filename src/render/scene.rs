//! Toolkit-free description of a plot: what is drawn where, in data
//! coordinates. Rasterization happens in [`super::raster`].

use plotters::style::{RGBColor, BLUE, RED};

use super::viewport::Viewport;
use crate::types::{
    point::{point_caption, Point, MAX_POINTS},
    vec2::{vector_caption, Vec2, Vector, MAX_VECTORS},
};

pub const POINT_COLOR: RGBColor = BLUE;
pub const VECTOR_COLOR: RGBColor = RED;

/// Arrow head size in data units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowHead {
    pub width: f64,
    pub length: f64,
}

impl Default for ArrowHead {
    fn default() -> Self {
        Self {
            width: 0.2,
            length: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Marker {
        at: Point,
        color: RGBColor,
    },
    Arrow {
        from: Point,
        to: Point,
        head: ArrowHead,
        color: RGBColor,
    },
    /// Text whose bottom-left corner sits at `at`.
    Label {
        at: Point,
        text: String,
        color: RGBColor,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub viewport: Viewport,
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            shapes: Vec::new(),
        }
    }

    pub fn markers(&self) -> impl Iterator<Item = &Point> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Marker { at, .. } => Some(at),
            _ => None,
        })
    }

    pub fn arrows(&self) -> impl Iterator<Item = (&Point, &Point)> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Arrow { from, to, .. } => Some((from, to)),
            _ => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// One marker and one caption per point, at most [`MAX_POINTS`].
pub fn point_scene(points: &[Point], viewport: Viewport) -> Scene {
    let mut scene = Scene::new(viewport);
    for (i, point) in points.iter().take(MAX_POINTS).enumerate() {
        scene.shapes.push(Shape::Marker {
            at: *point,
            color: POINT_COLOR,
        });
        scene.shapes.push(Shape::Label {
            at: *point,
            text: point_caption(i, point),
            color: POINT_COLOR,
        });
    }
    scene
}

/// One arrow and one displacement caption per vector, at most [`MAX_VECTORS`].
pub fn vector_scene(vectors: &[Vector], viewport: Viewport, head: ArrowHead) -> Scene {
    let mut scene = Scene::new(viewport);
    for (i, vector) in vectors.iter().take(MAX_VECTORS).enumerate() {
        scene.shapes.push(Shape::Arrow {
            from: vector.start,
            to: vector.end,
            head,
            color: VECTOR_COLOR,
        });
        scene.shapes.push(Shape::Label {
            at: vector.midpoint(),
            text: vector_caption(i, vector),
            color: VECTOR_COLOR,
        });
    }
    scene
}

/// Triangle `[tip, left, right]` of an arrow ending at `to`, or `None` for a
/// zero-length arrow. The head never gets longer than the arrow itself.
pub fn arrow_head(from: &Point, to: &Point, head: &ArrowHead) -> Option<[Point; 3]> {
    let shaft = Vec2::from(from, to);
    let dir = shaft.unit()?;
    let length = head.length.min(shaft.length());
    let base = to - &(dir * length);
    let half = dir.normal() * (head.width / 2.0);
    Some([*to, &half + &base, &base - &half])
}
