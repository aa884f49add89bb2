use crate::LearnApp;
use crate::ui::layout::simple_panel;
use egui::{Context, ProgressBar, RichText, ScrollArea};

pub fn ui_progress(app: &mut LearnApp, ctx: &Context) {
    simple_panel(ctx, 560.0, |ui| {
        let level = app.selected_level;
        ui.vertical_centered(|ui| {
            ui.heading("📊 Your progress");
            ui.label(level.title());
            ui.add_space(10.0);
        });

        let percent = app.level_progress_percent(level);
        ui.add(
            ProgressBar::new(percent as f32 / 100.0)
                .text(format!("{percent}% complete"))
                .desired_height(22.0),
        );
        ui.label(format!(
            "{} of {} lessons completed",
            app.completed_count_for_level(level),
            app.level_lesson_count(level)
        ));
        ui.add_space(12.0);
        ui.separator();

        let rows = app.progress_rows();
        if rows.is_empty() {
            ui.label("No lessons in this level yet.");
        }
        ScrollArea::vertical().show(ui, |ui| {
            for row in &rows {
                let mark = if row.completed { "✅" } else { "◯" };
                ui.label(format!("{mark} {} · {}", row.title, row.english_title));
                ui.add_space(2.0);
            }
            if level.is_hsk() {
                ui.add_space(8.0);
                if app.is_final_exam_completed(level) {
                    ui.label(RichText::new("🏆 Final exam passed").strong());
                } else if app.final_exam_available(level) {
                    ui.label("🏆 Final exam unlocked — take it from the lesson list.");
                } else {
                    ui.label(RichText::new("🏆 Final exam locked").weak());
                }
            }
        });

        ui.add_space(12.0);
        if ui.button("Back to lessons").clicked() {
            app.open_lesson_menu();
        }
    });
}
