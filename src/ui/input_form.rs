use eframe::egui::{self, Grid, TextEdit, Ui};

use crate::{
    input::FormRows,
    types::{
        point::{point_label, MAX_POINTS},
        vec2::{vector_label, MAX_VECTORS},
    },
};

pub const TITLE: &str = "Point and Vector Input";
pub const INNER_SIZE: [f32; 2] = [380.0, 460.0];

const FIELD_WIDTH: f32 = 40.0;

#[derive(Debug, Default)]
pub struct InputForm {
    rows: FormRows,
}

fn field(ui: &mut Ui, text: &mut String) {
    ui.add(TextEdit::singleline(text).desired_width(FIELD_WIDTH));
}

impl InputForm {
    pub fn rows(&self) -> &FormRows {
        &self.rows
    }

    /// Returns `true` when "Generate Graph" was clicked.
    pub fn ui(&mut self, ui: &mut Ui) -> bool {
        Grid::new("input_form_grid")
            .num_columns(5)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                ui.label(format!("Points (max {}):", MAX_POINTS));
                ui.end_row();
                for (i, row) in self.rows.points.iter_mut().enumerate() {
                    ui.label(format!("Point {}:", point_label(i)));
                    row.fields_mut().into_iter().for_each(|f| field(ui, f));
                    ui.end_row();
                }

                ui.label(format!("Vectors (max {}):", MAX_VECTORS));
                ui.end_row();
                for (i, row) in self.rows.vectors.iter_mut().enumerate() {
                    ui.label(format!("Vector {}:", vector_label(i)));
                    row.fields_mut().into_iter().for_each(|f| field(ui, f));
                    ui.end_row();
                }
            });
        ui.add_space(10.0);
        ui.vertical_centered(|ui| ui.button("Generate Graph").clicked())
            .inner
    }
}
