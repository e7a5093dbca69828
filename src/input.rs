//! Free-text form rows and their conversion into points and vectors.

use std::{borrow::Cow, num::ParseFloatError};

use thiserror::Error;

use crate::types::{
    point::{Point, MAX_POINTS},
    vec2::{Vector, MAX_VECTORS},
};

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("field `{field}` is empty")]
    Empty { field: &'static str },
    #[error("field `{field}` is not a number: {source}")]
    NotANumber {
        field: &'static str,
        #[source]
        source: ParseFloatError,
    },
    #[error("field `{field}` is not finite")]
    NotFinite { field: &'static str },
}

/// What happens to the rows after one that does not parse.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CollectionPolicy {
    /// The first invalid row ends collection; later rows are ignored.
    #[default]
    StopAtFirstInvalid,
    /// Invalid rows are skipped, later valid rows are still collected.
    SkipInvalid,
}

/// Drops `_` digit separators (`1_000`). Text with an underscore anywhere
/// else is returned untouched so that parsing rejects it.
fn strip_digit_separators(text: &str) -> Cow<'_, str> {
    if !text.contains('_') {
        return Cow::Borrowed(text);
    }
    let bytes = text.as_bytes();
    let separates_digits = bytes.iter().enumerate().all(|(i, b)| {
        *b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    if separates_digits {
        Cow::Owned(text.replace('_', ""))
    } else {
        Cow::Borrowed(text)
    }
}

pub fn parse_field(field: &'static str, text: &str) -> Result<f64, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::Empty { field });
    }
    let value: f64 = strip_digit_separators(text)
        .parse()
        .map_err(|source| InputError::NotANumber { field, source })?;
    if !value.is_finite() {
        return Err(InputError::NotFinite { field });
    }
    Ok(value)
}

/// A form row that parses into one entity.
pub trait Row {
    type Item;
    /// Most rows the form offers.
    const LIMIT: usize;

    fn parse(&self) -> Result<Self::Item, InputError>;
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PointRow {
    pub x: String,
    pub y: String,
}

impl PointRow {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    pub fn fields_mut(&mut self) -> [&mut String; 2] {
        [&mut self.x, &mut self.y]
    }
}

impl Row for PointRow {
    type Item = Point;
    const LIMIT: usize = MAX_POINTS;

    fn parse(&self) -> Result<Point, InputError> {
        Ok(Point::new(parse_field("x", &self.x)?, parse_field("y", &self.y)?))
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct VectorRow {
    pub x1: String,
    pub y1: String,
    pub x2: String,
    pub y2: String,
}

impl VectorRow {
    pub fn new(
        x1: impl Into<String>,
        y1: impl Into<String>,
        x2: impl Into<String>,
        y2: impl Into<String>,
    ) -> Self {
        Self {
            x1: x1.into(),
            y1: y1.into(),
            x2: x2.into(),
            y2: y2.into(),
        }
    }

    pub fn fields_mut(&mut self) -> [&mut String; 4] {
        [&mut self.x1, &mut self.y1, &mut self.x2, &mut self.y2]
    }
}

impl Row for VectorRow {
    type Item = Vector;
    const LIMIT: usize = MAX_VECTORS;

    fn parse(&self) -> Result<Vector, InputError> {
        Ok(Vector::new(
            parse_field("x1", &self.x1)?,
            parse_field("y1", &self.y1)?,
            parse_field("x2", &self.x2)?,
            parse_field("y2", &self.y2)?,
        ))
    }
}

/// Parses `rows` in order, at most `R::LIMIT` of them.
pub fn collect<R: Row>(rows: &[R], policy: CollectionPolicy) -> Vec<R::Item> {
    let parsed = rows.iter().take(R::LIMIT).enumerate().map(|(i, row)| {
        row.parse().map_err(|e| {
            log::debug!("row {} rejected: {}", i + 1, e);
            e
        })
    });
    match policy {
        CollectionPolicy::StopAtFirstInvalid => parsed.map_while(Result::ok).collect(),
        CollectionPolicy::SkipInvalid => parsed.filter_map(Result::ok).collect(),
    }
}

/// Everything the input form holds at submission time.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FormRows {
    pub points: [PointRow; MAX_POINTS],
    pub vectors: [VectorRow; MAX_VECTORS],
}

impl FormRows {
    pub fn collect(&self, policy: CollectionPolicy) -> (Vec<Point>, Vec<Vector>) {
        (
            collect(&self.points, policy),
            collect(&self.vectors, policy),
        )
    }
}
