use crate::LearnApp;
use crate::model::LessonTab;
use crate::ui::helpers::tab_button;
use crate::ui::layout::{simple_panel, two_button_row};
use egui::{Context, Grid, RichText, ScrollArea};

pub fn ui_lesson(app: &mut LearnApp, ctx: &Context) {
    let Some(lesson) = app.current_lesson().cloned() else {
        simple_panel(ctx, 560.0, |ui| {
            ui.vertical_centered(|ui| {
                ui.label("Lesson not found.");
                if ui.button("Back to lessons").clicked() {
                    app.open_lesson_menu();
                }
            });
        });
        return;
    };

    simple_panel(ctx, 640.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(format!("{} · {}", lesson.title, lesson.english_title));
            if app.is_lesson_completed(&lesson.id) {
                ui.label(RichText::new("✅ Completed").color(egui::Color32::LIGHT_GREEN));
            }
            if !lesson.objectives.is_empty() {
                ui.label(RichText::new(lesson.objectives.join(" · ")).weak());
            }
            ui.add_space(8.0);
        });

        ui.horizontal(|ui| {
            if tab_button(ui, "Vocabulary", app.lesson_tab == LessonTab::Vocabulary) {
                app.lesson_tab = LessonTab::Vocabulary;
            }
            if tab_button(ui, "Dialogue", app.lesson_tab == LessonTab::Dialogue) {
                app.lesson_tab = LessonTab::Dialogue;
            }
            if tab_button(ui, "Grammar", app.lesson_tab == LessonTab::Grammar) {
                app.lesson_tab = LessonTab::Grammar;
            }
            if tab_button(ui, "Characters", app.lesson_tab == LessonTab::Characters) {
                app.lesson_tab = LessonTab::Characters;
            }
        });
        ui.separator();

        let content_width = ui.available_width();

        ScrollArea::vertical().max_height(360.0).show(ui, |ui| match app.lesson_tab {
            LessonTab::Vocabulary => {
                if lesson.vocabulary.is_empty() {
                    ui.label("No vocabulary in this lesson.");
                    return;
                }
                Grid::new("vocab_grid").striped(true).num_columns(4).show(ui, |ui| {
                    for item in &lesson.vocabulary {
                        ui.label(RichText::new(&item.character).size(22.0));
                        ui.label(&item.pinyin);
                        ui.label(&item.english);
                        if ui.button("🔊").clicked() {
                            app.speak(&item.character);
                        }
                        ui.end_row();
                        if let Some(example) = &item.example {
                            ui.label("");
                            ui.label(RichText::new(example).weak());
                            ui.label(RichText::new(
                                item.example_translation.as_deref().unwrap_or(""),
                            )
                            .weak());
                            ui.label("");
                            ui.end_row();
                        }
                    }
                });
                ui.add_space(10.0);
                let supported = app.recognizer.is_supported();
                let test = ui.add_enabled(
                    supported,
                    egui::Button::new("🎤 Pronunciation test"),
                );
                if !supported {
                    test.on_disabled_hover_text(
                        "Speech recognition is not supported in this environment",
                    );
                } else if test.clicked() {
                    app.start_pronunciation_test();
                }
            }
            LessonTab::Dialogue => match &lesson.dialogue {
                Some(dialogue) => {
                    ui.label(RichText::new(&dialogue.title).strong());
                    ui.add_space(6.0);
                    for line in &dialogue.lines {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(format!("{}:", line.speaker)).strong());
                            ui.label(&line.chinese);
                            if ui.small_button("🔊").clicked() {
                                app.speak(&line.chinese);
                            }
                        });
                        ui.label(RichText::new(&line.pinyin).weak());
                        ui.label(RichText::new(&line.english).weak());
                        ui.add_space(6.0);
                    }
                }
                None => {
                    ui.label("No dialogue in this lesson.");
                }
            },
            LessonTab::Grammar => {
                if lesson.grammar.is_empty() {
                    ui.label("No grammar points in this lesson.");
                }
                for point in &lesson.grammar {
                    ui.label(RichText::new(&point.point).strong());
                    ui.label(&point.explanation);
                    ui.label(format!("{} — {}", point.example, point.translation));
                    ui.add_space(8.0);
                }
            }
            LessonTab::Characters => {
                if lesson.characters.is_empty() {
                    ui.label("No character practice in this lesson.");
                }
                for entry in &lesson.characters {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&entry.character).size(32.0));
                        ui.vertical(|ui| {
                            ui.label(format!("{} — {}", entry.pinyin, entry.meaning));
                            if let (Some(radical), Some(meaning)) =
                                (&entry.radical, &entry.radical_meaning)
                            {
                                ui.label(format!("Radical: {radical} ({meaning})"));
                            }
                            if let Some(count) = entry.stroke_count {
                                ui.label(format!("{count} strokes"));
                            }
                            if !entry.stroke_order.is_empty() {
                                ui.label(format!(
                                    "Stroke order: {}",
                                    entry.stroke_order.join(" ")
                                ));
                            }
                        });
                    });
                    ui.add_space(8.0);
                }
            }
        });

        ui.add_space(12.0);
        let (quiz, back) = two_button_row(ui, content_width, "📝 Start quiz", "Back to lessons");
        if quiz {
            app.start_quiz();
        }
        if back {
            app.open_lesson_menu();
        }
    });
}
