use super::*;
use crate::model::Session;

impl LearnApp {
    pub fn select_level(&mut self, level: LevelId) {
        self.selected_level = level;
        self.current_lesson = None;
        self.message.clear();
        self.state = AppState::LessonMenu;
    }

    pub fn open_lesson(&mut self, lesson_id: &str) {
        if data::lesson_by_id(&self.lessons, lesson_id).is_none() {
            return;
        }
        self.current_lesson = Some(lesson_id.to_string());
        self.lesson_tab = LessonTab::Vocabulary;
        self.engine = None;
        self.pronunciation = None;
        self.message.clear();
        self.state = AppState::Lesson;
    }

    pub fn open_home(&mut self) {
        self.message.clear();
        self.state = AppState::Home;
    }

    pub fn open_lesson_menu(&mut self) {
        self.message.clear();
        self.state = AppState::LessonMenu;
    }

    pub fn open_progress(&mut self) {
        self.state = AppState::Progress;
    }

    /// Leaving a quiz returns to its lesson, or to the menu for a final exam.
    pub fn leave_quiz(&mut self) {
        self.engine = None;
        self.completion_rx = None;
        self.pending_completion_id = None;
        self.state = if self.current_lesson.is_some() {
            AppState::Lesson
        } else {
            AppState::LessonMenu
        };
    }

    pub fn leave_pronunciation_test(&mut self) {
        self.pronunciation = None;
        self.speech_error = None;
        self.state = AppState::Lesson;
    }

    pub fn sessions(&self) -> Vec<Session> {
        data::sessions_for_level(&self.lessons, self.selected_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_lesson_ignores_unknown_ids() {
        let mut app = LearnApp::new();
        app.state = AppState::LessonMenu;
        app.open_lesson("does_not_exist");
        assert_eq!(app.state, AppState::LessonMenu);
        assert!(app.current_lesson.is_none());
    }

    #[test]
    fn leave_quiz_returns_to_lesson_or_menu() {
        let mut app = LearnApp::new();
        app.current_lesson = Some("level1_lesson1".into());
        app.start_quiz();
        app.leave_quiz();
        assert_eq!(app.state, AppState::Lesson);

        app.selected_level = LevelId::Hsk1;
        app.start_final_exam();
        app.leave_quiz();
        assert_eq!(app.state, AppState::LessonMenu);
    }
}
