use crate::LearnApp;
use egui::{Button, CentralPanel, Context, Frame, Ui, Visuals};

pub fn top_panel(app: &mut LearnApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("🏠 Home").clicked() {
                app.open_home();
            }
            if ui.button("📊 Progress").clicked() {
                app.open_progress();
            }
            if ui.button("🔄 Reset progress").clicked() {
                app.confirm_reset = true;
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Log out").clicked() {
                    app.logout();
                }
                ui.label(app.selected_level.title());
            });
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Vertically centered panel with a capped content width.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}

pub fn simple_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let w = ui.available_width().min(max_width);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                ui.set_width(w);
                inner(ui);
            });
    });
}

/// Returns (clicked_left, clicked_right).
pub fn two_button_row(ui: &mut Ui, width: f32, left: &str, right: &str) -> (bool, bool) {
    let gap = 8.0;
    let button_w = ((width - gap) / 2.0).max(80.0);
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        if ui.add_sized([button_w, 36.0], Button::new(left)).clicked() {
            clicked_left = true;
        }
        if ui.add_sized([button_w, 36.0], Button::new(right)).clicked() {
            clicked_right = true;
        }
    });
    (clicked_left, clicked_right)
}
