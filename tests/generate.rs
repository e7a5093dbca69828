use vecplot::{
    config::Settings,
    display::{self, PlotPair},
    input::{CollectionPolicy, FormRows, PointRow, VectorRow},
    render::{scene, RasterImage},
    surface::SurfaceProducer,
};

struct Keep;

impl SurfaceProducer for Keep {
    type Surface = RasterImage;

    fn produce(&mut self, _name: &str, image: &RasterImage) -> RasterImage {
        image.clone()
    }
}

fn headless() -> Settings {
    let mut settings = Settings::default();
    settings.render.draw_text = false;
    settings
}

fn filled_form() -> FormRows {
    let mut rows = FormRows::default();
    rows.points[0] = PointRow::new("1", "2");
    rows.points[1] = PointRow::new("invalid", "0");
    rows.points[2] = PointRow::new("3", "4");
    rows.vectors[0] = VectorRow::new("0", "0", "3", "4");
    rows.vectors[1] = VectorRow::new("-1", "-1", "-5", "2");
    rows
}

#[test]
fn form_to_scenes() {
    let settings = headless();
    let (points, vectors) = filled_form().collect(settings.collection);

    let points = scene::point_scene(&points, settings.render.viewport);
    assert_eq!(points.markers().count(), 1);
    assert_eq!(points.labels().collect::<Vec<_>>(), ["A(1.0, 2.0)"]);

    let vectors = scene::vector_scene(
        &vectors,
        settings.render.viewport,
        settings.render.arrow_head,
    );
    assert_eq!(vectors.arrows().count(), 2);
    assert_eq!(
        vectors.labels().collect::<Vec<_>>(),
        ["u=(3.0, 4.0)", "v=(-4.0, 3.0)"]
    );
}

#[test]
fn skip_invalid_policy_collects_later_rows() {
    let (points, _) = filled_form().collect(CollectionPolicy::SkipInvalid);
    assert_eq!(points.len(), 2);
}

#[test]
fn empty_form_gives_blank_planes() {
    let PlotPair { points, vectors } =
        display::submit(&FormRows::default(), &headless(), &mut Keep).unwrap();
    assert_eq!(points, vectors);
    assert_eq!(points.count_pixels([0, 0, 255]), 0);
    assert_eq!(vectors.count_pixels([255, 0, 0]), 0);
    assert!(points.count_pixels([176, 176, 176]) > 0);
}

#[test]
fn filled_form_draws_both_plots() {
    let PlotPair { points, vectors } =
        display::submit(&filled_form(), &headless(), &mut Keep).unwrap();
    assert!(points.count_pixels([0, 0, 255]) > 0);
    assert_eq!(points.count_pixels([255, 0, 0]), 0);
    assert!(vectors.count_pixels([255, 0, 0]) > 0);
    assert_eq!(vectors.count_pixels([0, 0, 255]), 0);
}
