use eframe::egui::{self, Id, Ui, ViewportBuilder, ViewportClass, ViewportId};

/// Shows a secondary window of `parent`. Returns `false` once the user closed it.
///
/// Backends without native multi-window support get an embedded
/// [`egui::Window`] inside the parent instead.
pub fn show(
    parent: &egui::Context,
    id: ViewportId,
    title: &str,
    inner_size: [f32; 2],
    add_contents: impl FnOnce(&mut Ui),
) -> bool {
    let builder = ViewportBuilder::default()
        .with_title(title)
        .with_inner_size(inner_size);
    parent.show_viewport_immediate(id, builder, |ctx, class| {
        if matches!(class, ViewportClass::Embedded) {
            let mut open = true;
            egui::Window::new(title)
                .id(Id::new(id))
                .open(&mut open)
                .show(ctx, |ui| add_contents(ui));
            open
        } else {
            egui::CentralPanel::default().show(ctx, |ui| add_contents(ui));
            !ctx.input(|i| i.viewport().close_requested())
        }
    })
}
