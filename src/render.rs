//! Point and vector plots rendered into in-memory RGB images.

pub mod raster;
pub mod scene;
pub mod viewport;

use scene::{point_scene, vector_scene, ArrowHead};
use thiserror::Error;
use viewport::Viewport;

use crate::types::{point::Point, vec2::Vector};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to draw {stage}: {message}")]
    Draw {
        stage: &'static str,
        message: String,
    },
    #[error("cannot render into a {width}x{height} canvas")]
    EmptyCanvas { width: u32, height: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    pub viewport: Viewport,
    /// Marker radius in pixels.
    pub marker_radius: u32,
    pub font_size: f64,
    pub arrow_head: ArrowHead,
    /// Captions and tick labels. Off, nothing needs a system font.
    pub draw_text: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            viewport: Viewport::SQUARE_6,
            marker_radius: 4,
            font_size: 16.0,
            arrow_head: ArrowHead::default(),
            draw_text: true,
        }
    }
}

/// Fixed-size RGB8 pixel buffer, row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl RasterImage {
    pub fn size(&self) -> [usize; 2] {
        [self.width as usize, self.height as usize]
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        Some([self.rgb[i], self.rgb[i + 1], self.rgb[i + 2]])
    }

    pub fn count_pixels(&self, color: [u8; 3]) -> usize {
        self.rgb.chunks_exact(3).filter(|px| *px == color).count()
    }
}

impl std::fmt::Debug for RasterImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Plot of up to five labeled points on the settings' viewport.
pub fn render_points(
    points: &[Point],
    settings: &RenderSettings,
) -> Result<RasterImage, RenderError> {
    log::debug!("rendering {} point(s)", points.len());
    raster::rasterize(&point_scene(points, settings.viewport), settings)
}

/// Plot of up to four labeled arrows on the settings' viewport.
pub fn render_vectors(
    vectors: &[Vector],
    settings: &RenderSettings,
) -> Result<RasterImage, RenderError> {
    log::debug!("rendering {} vector(s)", vectors.len());
    raster::rasterize(
        &vector_scene(vectors, settings.viewport, settings.arrow_head),
        settings,
    )
}
