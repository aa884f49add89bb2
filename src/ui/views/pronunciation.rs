use crate::LearnApp;
use crate::pronunciation::PronunciationTest;
use crate::ui::layout::{simple_panel, two_button_row};
use egui::{Button, Color32, Context, ProgressBar, RichText, Ui};

pub fn ui_pronunciation(app: &mut LearnApp, ctx: &Context) {
    let speech_error = app.speech_error.clone();
    let supported = app.recognizer.is_supported();
    simple_panel(ctx, 560.0, |ui| {
        let mut speak_text: Option<String> = None;
        let mut listen_target: Option<String> = None;
        let mut leave = false;

        match app.pronunciation.as_mut() {
            None => {
                ui.vertical_centered(|ui| {
                    ui.label("No pronunciation test in progress.");
                    leave = ui.button("Back").clicked();
                });
            }
            Some(test) if test.is_empty() => {
                ui.vertical_centered(|ui| {
                    ui.label("This lesson has no vocabulary to practice.");
                    leave = ui.button("Back").clicked();
                });
            }
            Some(test) => {
                if test.is_complete() {
                    leave = ui_summary(ui, test);
                } else {
                    let outcome =
                        ui_item(ui, test, supported, speech_error.as_deref());
                    speak_text = outcome.speak;
                    listen_target = outcome.listen;
                    leave = outcome.leave;
                }
            }
        }

        if let Some(text) = speak_text {
            app.speak(&text);
        }
        if let Some(target) = listen_target {
            app.start_listening(&target);
        }
        if leave {
            app.leave_pronunciation_test();
        }
    });
}

struct ItemOutcome {
    speak: Option<String>,
    listen: Option<String>,
    leave: bool,
}

fn ui_item(
    ui: &mut Ui,
    test: &mut PronunciationTest,
    supported: bool,
    speech_error: Option<&str>,
) -> ItemOutcome {
    let mut outcome = ItemOutcome {
        speak: None,
        listen: None,
        leave: false,
    };
    let index = test.current_index();
    let total = test.len();
    let Some(item) = test.current_item().cloned() else {
        return outcome;
    };

    ui.vertical_centered(|ui| {
        ui.heading("🎤 Pronunciation test");
        ui.label(format!("Word {} of {}", index + 1, total));
    });
    ui.add(ProgressBar::new(index as f32 / total as f32).desired_height(8.0));
    ui.add_space(14.0);

    ui.vertical_centered(|ui| {
        ui.label(RichText::new(&item.character).size(48.0));
        ui.label(RichText::new(&item.pinyin).size(20.0));
        ui.label(RichText::new(&item.english).weak());
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            if ui.button("🔊 Hear it").clicked() {
                outcome.speak = Some(item.character.clone());
            }
            let listen = ui.add_enabled(supported, Button::new("🎙 Say it"));
            if !supported {
                listen.on_disabled_hover_text(
                    "Speech recognition is not supported in this environment",
                );
            } else if listen.clicked() {
                outcome.listen = Some(item.pinyin.clone());
            }
        });

        if let Some(error) = speech_error {
            ui.add_space(6.0);
            ui.label(RichText::new(error).color(Color32::LIGHT_RED));
        }

        if let Some(recorded) = test.result_for_current() {
            ui.add_space(10.0);
            let result = &recorded.result;
            ui.label(format!("Heard: \"{}\"", result.transcript));
            if result.is_match {
                ui.label(
                    RichText::new(format!("✅ {}% accuracy", result.accuracy))
                        .color(Color32::LIGHT_GREEN),
                );
            } else {
                ui.label(
                    RichText::new(format!("❌ {}% — try again", result.accuracy))
                        .color(Color32::LIGHT_RED),
                );
            }
        }
    });

    ui.add_space(14.0);
    ui.horizontal(|ui| {
        if ui
            .add_enabled(index > 0, Button::new("Previous"))
            .clicked()
        {
            test.previous();
        }
        if index + 1 == total {
            if ui
                .add_enabled(test.answered_count() == total, Button::new("Finish"))
                .clicked()
            {
                test.finish();
            }
        } else if ui.button("Next").clicked() {
            test.next();
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Leave test").clicked() {
                outcome.leave = true;
            }
        });
    });

    outcome
}

/// Returns true when the learner chose to leave the summary screen.
fn ui_summary(ui: &mut Ui, test: &mut PronunciationTest) -> bool {
    let mut leave = false;
    let width = ui.available_width();

    ui.vertical_centered(|ui| {
        ui.heading("Pronunciation results");
        ui.add_space(6.0);
        ui.label(
            RichText::new(format!("{}%", test.average_accuracy()))
                .size(36.0),
        );
        ui.label(format!(
            "{} of {} words pronounced correctly",
            test.correct_count(),
            test.len()
        ));
        ui.add_space(10.0);
    });

    egui::ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
        for (item, recorded) in test.entries() {
            match recorded {
                Some(recorded) => {
                    let mark = if recorded.result.is_match { "✅" } else { "❌" };
                    ui.label(format!(
                        "{mark} {} ({}) — {}% (heard \"{}\")",
                        item.character,
                        item.pinyin,
                        recorded.result.accuracy,
                        recorded.result.transcript
                    ));
                }
                None => {
                    ui.label(format!("◯ {} ({}) — not attempted", item.character, item.pinyin));
                }
            }
        }
    });

    ui.add_space(12.0);
    let (retry, back) = two_button_row(ui, width, "🔄 Try again", "Back to lesson");
    if retry {
        test.restart();
    }
    if back {
        leave = true;
    }
    leave
}
