use super::*;
use crate::model::Question;
use std::sync::mpsc;

/// Default synthesis rate for learner-paced Mandarin playback.
const SPEECH_RATE: f32 = 0.7;

impl LearnApp {
    pub fn try_login(&mut self) {
        let email = self.login_email.clone();
        let password = self.login_password.clone();
        match self.allow_list.verify(&email, &password) {
            Ok(()) => {
                self.is_authenticated = true;
                self.login_email.clear();
                self.login_password.clear();
                self.message.clear();
                self.state = AppState::Home;
            }
            Err(e) => {
                self.message = e.to_string();
            }
        }
    }

    pub fn logout(&mut self) {
        self.is_authenticated = false;
        self.message.clear();
        self.state = AppState::Login;
    }

    pub fn start_quiz(&mut self) {
        let Some(lesson_id) = self.current_lesson.clone() else {
            return;
        };
        let questions: Vec<Question> = data::questions_for(&self.lessons, &lesson_id)
            .map(|qs| qs.to_vec())
            .unwrap_or_default();
        let tier = self.selected_level.hsk_tier();
        self.spawn_engine(questions, tier, false, lesson_id);
        self.state = AppState::Quiz;
    }

    /// Synthetic exam over every quiz question of the selected tier, gated by
    /// the tier's stricter passing score.
    pub fn start_final_exam(&mut self) {
        let questions = data::final_exam_questions(&self.lessons, self.selected_level);
        let tier = self.selected_level.hsk_tier();
        let completion_id = Self::final_exam_id(self.selected_level);
        self.current_lesson = None;
        self.spawn_engine(questions, tier, true, completion_id);
        self.state = AppState::Quiz;
    }

    fn spawn_engine(
        &mut self,
        questions: Vec<Question>,
        tier: Option<u8>,
        final_exam: bool,
        completion_id: String,
    ) {
        let (tx, rx) = mpsc::channel::<u32>();
        let engine = QuizEngine::new(questions, tier, final_exam)
            .with_on_complete(Box::new(move |score| {
                let _ = tx.send(score);
            }));
        self.engine = Some(engine);
        self.completion_rx = Some(rx);
        self.pending_completion_id = Some(completion_id);
        self.message.clear();
    }

    /// Drains the engine's completion signal and promotes the lesson into the
    /// completion store. Called once per frame.
    pub fn poll_quiz_completion(&mut self) {
        let maybe_score = self
            .completion_rx
            .as_ref()
            .and_then(|rx| rx.try_recv().ok());

        if let Some(score) = maybe_score {
            if let Some(id) = self.pending_completion_id.clone() {
                self.mark_lesson_completed(&id);
                self.message = format!("Passed with {score}%!");
            }
        }
    }

    pub fn speak(&self, text: &str) {
        self.speaker.speak(text, SPEECH_RATE);
    }

    pub fn start_pronunciation_test(&mut self) {
        let Some(lesson) = self.current_lesson() else {
            return;
        };
        self.pronunciation = Some(PronunciationTest::new(lesson.vocabulary.clone()));
        self.speech_error = None;
        self.state = AppState::Pronunciation;
    }

    pub fn start_listening(&mut self, target: &str) {
        self.speech_error = None;
        if let Err(e) = self.recognizer.start(target) {
            self.speech_error = Some(e.to_string());
        }
    }

    /// Applies a finished recognition to the pronunciation test. A transcript
    /// arriving after the learner navigated elsewhere is discarded; it never
    /// mutates stale state.
    pub fn poll_recognition(&mut self) {
        let Some(outcome) = self.recognizer.take_transcript() else {
            return;
        };
        if self.state != AppState::Pronunciation {
            return;
        }
        match outcome {
            Ok(transcript) => {
                if let Some(test) = self.pronunciation.as_mut() {
                    test.record_transcript(&transcript);
                }
            }
            Err(e) => self.speech_error = Some(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AllowList, Credential};
    use crate::engine::EngineState;
    use crate::speech::testing::ScriptedRecognizer;

    fn logged_in_app() -> LearnApp {
        let mut app = LearnApp::new();
        app.is_authenticated = true;
        app.state = AppState::Home;
        app
    }

    #[test]
    fn login_flow_requires_allow_list_entry() {
        let mut app = LearnApp::new();
        app.allow_list = AllowList::new(vec![Credential {
            email: "a@b.c".into(),
            password: "pw".into(),
        }]);

        app.login_email = "a@b.c".into();
        app.login_password = "nope".into();
        app.try_login();
        assert!(!app.is_authenticated);
        assert_eq!(app.state, AppState::Login);

        app.login_password = "pw".into();
        app.try_login();
        assert!(app.is_authenticated);
        assert_eq!(app.state, AppState::Home);
        assert!(app.login_password.is_empty());
    }

    #[test]
    fn passing_a_quiz_promotes_the_lesson() {
        let mut app = logged_in_app();
        app.selected_level = LevelId::Level1;
        app.current_lesson = Some("level1_lesson1".into());
        app.start_quiz();

        // Answer every question correctly via the engine.
        let engine = app.engine.as_mut().unwrap();
        let questions: Vec<Question> = engine.questions().to_vec();
        for (i, q) in questions.iter().enumerate() {
            match q.kind {
                crate::model::QuestionKind::Matching => {
                    for p in &q.pairs {
                        engine.submit_matching_answer(i, &p.id, p.answer.clone());
                    }
                }
                crate::model::QuestionKind::ReadingComprehension => {
                    let correct = q.sub_questions[0]
                        .options
                        .iter()
                        .find(|o| o.correct)
                        .unwrap();
                    engine.submit_answer(i, correct.text.clone());
                }
                _ => {
                    let correct = q.options.iter().find(|o| o.correct).unwrap();
                    engine.submit_answer(i, correct.text.clone());
                }
            }
            engine.advance();
        }
        assert_eq!(engine.state(), EngineState::ResultsShown);

        app.poll_quiz_completion();
        assert!(app.is_lesson_completed("level1_lesson1"));
    }

    #[test]
    fn final_exam_records_synthetic_id() {
        let mut app = logged_in_app();
        app.selected_level = LevelId::Hsk1;
        app.start_final_exam();
        let engine = app.engine.as_ref().unwrap();
        assert!(engine.is_final_exam());
        assert_eq!(engine.passing_score(), 70);
        assert_eq!(
            app.pending_completion_id.as_deref(),
            Some("hsk1_final")
        );
    }

    #[test]
    fn stale_recognition_is_discarded_after_navigation() {
        let mut app = logged_in_app();
        app.selected_level = LevelId::Level1;
        app.current_lesson = Some("level1_lesson1".into());
        app.recognizer = Box::new(ScriptedRecognizer::new(&["ni hao"]));
        app.start_pronunciation_test();
        app.start_listening("nǐ hǎo");

        // Learner leaves before the transcript lands.
        app.state = AppState::Lesson;
        app.poll_recognition();
        assert_eq!(app.pronunciation.as_ref().unwrap().answered_count(), 0);
    }

    #[test]
    fn unsupported_recognizer_surfaces_error_string() {
        let mut app = logged_in_app();
        app.current_lesson = Some("level1_lesson1".into());
        app.start_pronunciation_test();
        app.start_listening("nǐ hǎo");
        assert!(app.speech_error.is_some());
        // Session state untouched.
        assert_eq!(app.state, AppState::Pronunciation);
        assert_eq!(app.pronunciation.as_ref().unwrap().answered_count(), 0);
    }
}
