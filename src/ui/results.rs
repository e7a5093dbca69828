use eframe::egui::{self, load::SizedTexture, ScrollArea, TextureHandle, ViewportId};

use super::popup;
use crate::display::PlotPair;

pub const TITLE: &str = "Cartesian Plane - Points and Vectors";

/// One generate pass on screen. Dropping it frees both textures.
pub struct ResultsWindow {
    id: ViewportId,
    plots: PlotPair<TextureHandle>,
}

impl ResultsWindow {
    pub fn new(serial: u64, plots: PlotPair<TextureHandle>) -> Self {
        Self {
            id: ViewportId::from_hash_of(("results_window", serial)),
            plots,
        }
    }

    fn inner_size(&self) -> [f32; 2] {
        let [pw, ph] = self.plots.points.size_vec2().into();
        let [vw, vh] = self.plots.vectors.size_vec2().into();
        [pw.max(vw) + 40.0, ph + vh + 60.0]
    }

    /// Returns `false` once the user closed the window.
    pub fn show(&self, parent: &egui::Context) -> bool {
        popup::show(parent, self.id, TITLE, self.inner_size(), |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(10.0);
                    ui.image(SizedTexture::from_handle(&self.plots.points));
                    ui.add_space(10.0);
                    ui.image(SizedTexture::from_handle(&self.plots.vectors));
                    ui.add_space(10.0);
                });
            });
        })
    }
}
