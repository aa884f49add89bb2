// src/ui/helpers.rs
use egui::{Button, Color32, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Answer option button. Selected options are tinted green/red by
/// correctness so the learner gets immediate feedback.
pub fn option_button(
    ui: &mut Ui,
    label: &str,
    width: f32,
    selected: bool,
    correct: bool,
) -> bool {
    let mut button = Button::new(label).min_size(Vec2::new(width, 32.0));
    if selected {
        button = button.fill(if correct {
            Color32::DARK_GREEN
        } else {
            Color32::DARK_RED
        });
    }
    ui.add(button).clicked()
}

pub fn tab_button(ui: &mut Ui, label: &str, active: bool) -> bool {
    ui.selectable_label(active, label).clicked()
}
