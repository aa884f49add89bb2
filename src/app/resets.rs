use super::*;
use eframe::egui;

impl LearnApp {
    /// Clears every completion flag and any in-flight quiz session.
    pub fn reset_progress(&mut self) {
        self.completed_lessons.clear();
        self.engine = None;
        self.completion_rx = None;
        self.pending_completion_id = None;
        self.pronunciation = None;
        self.current_lesson = None;
        self.confirm_reset = false;
        self.message.clear();
        self.state = AppState::Home;
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Confirm reset")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Erase all lesson progress? This cannot be undone.");
                ui.horizontal(|ui| {
                    if ui.button("Yes, erase").clicked() {
                        self.reset_progress();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_completion_and_session() {
        let mut app = LearnApp::new();
        app.mark_lesson_completed("level1_lesson1");
        app.current_lesson = Some("level1_lesson1".into());
        app.start_quiz();

        app.reset_progress();
        assert!(app.completed_lessons.is_empty());
        assert!(app.engine.is_none());
        assert!(app.current_lesson.is_none());
        assert_eq!(app.state, AppState::Home);
    }
}
