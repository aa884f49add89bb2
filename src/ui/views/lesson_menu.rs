use crate::LearnApp;
use crate::engine::{difficulty_label, passing_score};
use crate::ui::helpers::big_list_button;
use crate::ui::layout::simple_panel;
use egui::{Button, Context, RichText, ScrollArea};

pub fn ui_lesson_menu(app: &mut LearnApp, ctx: &Context) {
    simple_panel(ctx, 560.0, |ui| {
        let level = app.selected_level;
        ui.vertical_centered(|ui| {
            ui.heading(level.title());
            if let Some(tier) = level.hsk_tier() {
                ui.label(format!(
                    "{} — {}% required to pass",
                    difficulty_label(Some(tier)),
                    passing_score(Some(tier))
                ));
            } else {
                ui.label(level.subtitle());
            }
            ui.add_space(12.0);
        });

        let content_width = ui.available_width();
        let groups = app.session_groups();

        if groups.is_empty() {
            ui.vertical_centered(|ui| {
                ui.label("No lessons available for this level yet.");
            });
        }

        ScrollArea::vertical().show(ui, |ui| {
            for group in &groups {
                ui.label(RichText::new(&group.title).strong());
                ui.add_space(4.0);
                for lesson in &group.lessons {
                    if big_list_button(ui, lesson.label(), content_width, 38.0, true) {
                        app.open_lesson(&lesson.id);
                        return;
                    }
                    ui.add_space(4.0);
                }
                ui.add_space(10.0);
            }

            if level.is_hsk() {
                ui.separator();
                let available = app.final_exam_available(level);
                let passed = app.is_final_exam_completed(level);
                let label = if passed {
                    "🏆 Final exam ✅".to_string()
                } else {
                    "🏆 Final exam".to_string()
                };
                if big_list_button(ui, label, content_width, 40.0, available) {
                    app.start_final_exam();
                    return;
                }
                if !available {
                    ui.label("Complete every lesson of this level to unlock the final exam.");
                }
            }

            ui.add_space(12.0);
            if ui
                .add_sized([content_width, 36.0], Button::new("Back to courses"))
                .clicked()
            {
                app.open_home();
            }
        });
    });
}
