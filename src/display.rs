//! Collect, render, convert: one pass per press of "Generate Graph".

use crate::{
    config::Settings,
    input::FormRows,
    render::{render_points, render_vectors, RenderError, RenderSettings},
    surface::SurfaceProducer,
    types::{point::Point, vec2::Vector},
};

/// Images of one generate pass, shown top to bottom.
#[derive(Debug)]
pub struct PlotPair<S> {
    pub points: S,
    pub vectors: S,
}

pub fn generate<P: SurfaceProducer>(
    points: &[Point],
    vectors: &[Vector],
    settings: &RenderSettings,
    producer: &mut P,
) -> Result<PlotPair<P::Surface>, RenderError> {
    let points_img = render_points(points, settings)?;
    let vectors_img = render_vectors(vectors, settings)?;
    Ok(PlotPair {
        points: producer.produce("points", &points_img),
        vectors: producer.produce("vectors", &vectors_img),
    })
}

pub fn submit<P: SurfaceProducer>(
    rows: &FormRows,
    settings: &Settings,
    producer: &mut P,
) -> Result<PlotPair<P::Surface>, RenderError> {
    let (points, vectors) = rows.collect(settings.collection);
    log::info!(
        "generating graphs for {} point(s) and {} vector(s)",
        points.len(),
        vectors.len()
    );
    generate(&points, &vectors, &settings.render, producer)
}
