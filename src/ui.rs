pub mod input_form;
pub mod popup;
pub mod results;

use eframe::egui::{self, ViewportId};
use input_form::InputForm;
use results::ResultsWindow;

use crate::{config::Settings, display, surface::EguiSurfaces};

pub struct PlotterApp {
    settings: Settings,
    form: Option<InputForm>,
    results: Vec<ResultsWindow>,
    generated: u64,
}

impl PlotterApp {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            form: None,
            results: Vec::new(),
            generated: 0,
        }
    }

    fn main_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                if ui.button("Insert Points and Vectors").clicked() && self.form.is_none() {
                    log::debug!("opening input form");
                    self.form = Some(InputForm::default());
                }
            });
        });
    }

    fn input_form(&mut self, parent: &egui::Context) {
        let Some(form) = &mut self.form else {
            return;
        };
        let mut generate = false;
        let open = popup::show(
            parent,
            ViewportId::from_hash_of("input_form"),
            input_form::TITLE,
            input_form::INNER_SIZE,
            |ui| generate = form.ui(ui),
        );
        if generate {
            let mut surfaces = EguiSurfaces::new(parent);
            match display::submit(form.rows(), &self.settings, &mut surfaces) {
                Ok(plots) => {
                    self.generated += 1;
                    self.results.push(ResultsWindow::new(self.generated, plots));
                }
                Err(e) => log::error!("could not generate graphs: {}", e),
            }
        }
        if !open {
            self.form = None;
        }
    }
}

impl Default for PlotterApp {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl eframe::App for PlotterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.main_panel(ctx);
        self.input_form(ctx);
        self.results.retain(|window| window.show(ctx));
    }
}
