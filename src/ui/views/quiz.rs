use crate::LearnApp;
use crate::engine::{EngineState, QuizEngine, answer_pool};
use crate::model::{Question, QuestionKind};
use crate::ui::helpers::option_button;
use crate::ui::layout::{simple_panel, two_button_row};
use egui::{Button, Color32, Context, ProgressBar, RichText, ScrollArea, Ui};

pub fn ui_quiz(app: &mut LearnApp, ctx: &Context) {
    let message = app.message.clone();
    simple_panel(ctx, 640.0, |ui| {
        let mut speak_text: Option<String> = None;
        let mut leave = false;

        match app.engine.as_mut() {
            None => {
                ui.vertical_centered(|ui| {
                    ui.label("No quiz in progress.");
                    leave = ui.button("Back").clicked();
                });
            }
            Some(engine) => match engine.state() {
                EngineState::NoContent => {
                    ui.vertical_centered(|ui| {
                        ui.label("No questions available for this quiz.");
                        ui.add_space(8.0);
                        leave = ui.button("Back").clicked();
                    });
                }
                EngineState::ResultsShown => {
                    leave = ui_results(ui, engine, &message);
                }
                EngineState::InProgress(index) => {
                    let Some(question) = engine.current_question().cloned() else {
                        return;
                    };
                    let outcome = ui_question(ui, engine, index, &question);
                    speak_text = outcome.speak;
                    leave = outcome.leave;
                }
            },
        }

        if let Some(text) = speak_text {
            app.speak(&text);
        }
        if leave {
            app.leave_quiz();
        }
    });
}

struct QuestionOutcome {
    speak: Option<String>,
    leave: bool,
}

fn ui_question(
    ui: &mut Ui,
    engine: &mut QuizEngine,
    index: usize,
    question: &Question,
) -> QuestionOutcome {
    let mut outcome = QuestionOutcome {
        speak: None,
        leave: false,
    };
    let width = ui.available_width();
    let total = engine.len();

    ui.vertical_centered(|ui| {
        if engine.is_final_exam() {
            ui.heading("🏆 Final exam");
        } else {
            ui.heading("📝 Quiz");
        }
        ui.label(format!("Question {} of {}", index + 1, total));
    });
    ui.add(ProgressBar::new(index as f32 / total as f32).desired_height(8.0));
    ui.add_space(10.0);

    ScrollArea::vertical().max_height(380.0).show(ui, |ui| {
        if let Some(passage) = &question.passage {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.label(RichText::new(passage).size(16.0));
            });
            ui.add_space(8.0);
        }

        ui.label(RichText::new(&question.prompt).size(18.0).strong());
        ui.add_space(8.0);

        if question.kind == QuestionKind::Listening {
            if let Some(audio) = &question.audio_text {
                if ui.button("🔊 Play audio").clicked() {
                    outcome.speak = Some(audio.clone());
                }
                ui.add_space(8.0);
            }
        }

        match question.kind {
            QuestionKind::Matching => {
                let pool = answer_pool(&question.pairs);
                for pair in &question.pairs {
                    ui.label(RichText::new(&pair.prompt).strong());
                    ui.horizontal_wrapped(|ui| {
                        for candidate in &pool {
                            let selected = engine.matching_answer_for(index, &pair.id)
                                == Some(candidate.as_str());
                            let correct = *candidate == pair.answer;
                            if option_button(ui, candidate, 120.0, selected, correct) {
                                engine.submit_matching_answer(index, &pair.id, candidate);
                            }
                        }
                    });
                    ui.add_space(6.0);
                }
            }
            QuestionKind::ReadingComprehension => {
                if let Some(sub) = question.sub_questions.first() {
                    ui.label(&sub.prompt);
                    ui.add_space(6.0);
                    for option in &sub.options {
                        let selected = engine.answer_for(index) == Some(option.text.as_str());
                        if option_button(ui, &option.text, width, selected, option.correct) {
                            engine.submit_answer(index, &option.text);
                        }
                        ui.add_space(4.0);
                    }
                }
            }
            _ => {
                for option in &question.options {
                    let selected = engine.answer_for(index) == Some(option.text.as_str());
                    if option_button(ui, &option.text, width, selected, option.correct) {
                        engine.submit_answer(index, &option.text);
                    }
                    ui.add_space(4.0);
                }
            }
        }

        if engine.is_answered(index) {
            ui.add_space(6.0);
            if engine.is_correct(index) {
                ui.label(RichText::new("✅ Correct!").color(Color32::LIGHT_GREEN));
            } else {
                ui.label(
                    RichText::new("❌ Not quite — try another answer.")
                        .color(Color32::LIGHT_RED),
                );
            }
        }
    });

    ui.add_space(12.0);
    let can_advance = engine.is_correct(index);
    let next_label = if index + 1 == total { "Finish" } else { "Next" };
    ui.horizontal(|ui| {
        if ui
            .add_enabled(index > 0, Button::new("Previous"))
            .clicked()
        {
            engine.retreat();
        }
        if ui
            .add_enabled(can_advance, Button::new(next_label))
            .clicked()
        {
            engine.advance();
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Leave quiz").clicked() {
                outcome.leave = true;
            }
        });
    });

    outcome
}

/// Returns true when the learner chose to leave the results screen.
fn ui_results(ui: &mut Ui, engine: &mut QuizEngine, message: &str) -> bool {
    let mut leave = false;
    let score = engine.score();
    let passed = engine.passed();
    let width = ui.available_width();

    ui.vertical_centered(|ui| {
        ui.heading(if passed { "🎉 Quiz passed!" } else { "Quiz results" });
        ui.add_space(6.0);
        ui.label(
            RichText::new(format!("{score}%"))
                .size(36.0)
                .color(if passed {
                    Color32::LIGHT_GREEN
                } else {
                    Color32::LIGHT_RED
                }),
        );
        ui.label(format!(
            "{} correct of {} — {} requires {}%",
            engine.correct_count(),
            engine.len(),
            engine.difficulty(),
            engine.passing_score()
        ));
        if !message.is_empty() {
            ui.label(message);
        }
        ui.add_space(10.0);
    });

    ScrollArea::vertical().max_height(280.0).show(ui, |ui| {
        for (i, question) in engine.questions().iter().enumerate() {
            let mark = if engine.is_correct(i) { "✅" } else { "❌" };
            ui.label(format!("{mark} {}. {}", i + 1, question.prompt));
            if question.kind == QuestionKind::Matching {
                for pair in &question.pairs {
                    let given = engine.matching_answer_for(i, &pair.id).unwrap_or("—");
                    ui.label(RichText::new(format!(
                        "    {} → {} (expected {})",
                        pair.prompt, given, pair.answer
                    ))
                    .weak());
                }
            }
            ui.add_space(4.0);
        }
    });

    ui.add_space(12.0);
    let (retake, back) = two_button_row(ui, width, "🔄 Retake quiz", "Back to lesson");
    if retake {
        engine.reset();
    }
    if back {
        leave = true;
    }
    leave
}
