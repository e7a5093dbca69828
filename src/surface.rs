//! Conversion of rendered images into whatever the GUI toolkit can show.

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};

use crate::render::RasterImage;

/// Turns a [`RasterImage`] into a toolkit-native surface.
pub trait SurfaceProducer {
    type Surface;

    fn produce(&mut self, name: &str, image: &RasterImage) -> Self::Surface;
}

/// Uploads images as egui textures owned by `ctx`.
pub struct EguiSurfaces<'a> {
    ctx: &'a egui::Context,
}

impl<'a> EguiSurfaces<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

pub fn color_image(image: &RasterImage) -> ColorImage {
    ColorImage::from_rgb(image.size(), &image.rgb)
}

impl SurfaceProducer for EguiSurfaces<'_> {
    type Surface = TextureHandle;

    fn produce(&mut self, name: &str, image: &RasterImage) -> TextureHandle {
        self.ctx
            .load_texture(name, color_image(image), TextureOptions::default())
    }
}
