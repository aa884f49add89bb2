use crate::auth::AllowList;
use crate::data;
use crate::engine::QuizEngine;
use crate::model::{AppState, Lesson, LessonTab, LevelId};
use crate::pronunciation::PronunciationTest;
use crate::speech::{NullRecognizer, Recognizer, Speaker};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::mpsc::Receiver;

pub mod actions;
pub mod completion;
pub mod navigation;
pub mod resets;
pub mod view_models;

pub use crate::view_models::{LessonRow, LevelCard, SessionGroup};

fn default_speaker() -> Box<dyn Speaker> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(crate::speech::web::WebSpeaker)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(crate::speech::NullSpeaker)
    }
}

fn default_recognizer() -> Box<dyn Recognizer> {
    Box::new(NullRecognizer)
}

#[derive(Serialize, Deserialize)]
pub struct LearnApp {
    /// Completed-lesson ids, persisted whole. Two running instances merge
    /// last-write-wins; an update can be lost, by documented design.
    pub completed_lessons: HashSet<String>,
    pub selected_level: LevelId,
    pub is_authenticated: bool,

    #[serde(skip)]
    pub lessons: Vec<Lesson>,
    #[serde(skip)]
    pub state: AppState,
    #[serde(skip)]
    pub lesson_tab: LessonTab,
    #[serde(skip)]
    pub current_lesson: Option<String>,
    #[serde(skip)]
    pub engine: Option<QuizEngine>,
    #[serde(skip)]
    pub pronunciation: Option<PronunciationTest>,
    #[serde(skip)]
    pub completion_rx: Option<Receiver<u32>>,
    #[serde(skip)]
    pub pending_completion_id: Option<String>,
    #[serde(skip)]
    pub allow_list: AllowList,
    #[serde(skip, default = "default_speaker")]
    pub speaker: Box<dyn Speaker>,
    #[serde(skip, default = "default_recognizer")]
    pub recognizer: Box<dyn Recognizer>,
    #[serde(skip)]
    pub speech_error: Option<String>,
    #[serde(skip)]
    pub login_email: String,
    #[serde(skip)]
    pub login_password: String,
    #[serde(skip)]
    pub message: String,
    #[serde(skip)]
    pub confirm_reset: bool,
}

impl LearnApp {
    pub fn new() -> Self {
        let mut app = Self {
            completed_lessons: HashSet::new(),
            selected_level: LevelId::Level1,
            is_authenticated: false,
            lessons: Vec::new(),
            state: AppState::Login,
            lesson_tab: LessonTab::default(),
            current_lesson: None,
            engine: None,
            pronunciation: None,
            completion_rx: None,
            pending_completion_id: None,
            allow_list: AllowList::default(),
            speaker: default_speaker(),
            recognizer: default_recognizer(),
            speech_error: None,
            login_email: String::new(),
            login_password: String::new(),
            message: String::new(),
            confirm_reset: false,
        };
        app.reload_runtime();
        app
    }

    /// Rebuilds everything serde skipped: the lesson bank, the credential
    /// allow-list and the entry screen. Also run after restoring a persisted
    /// snapshot.
    pub fn reload_runtime(&mut self) {
        self.lessons = match data::read_lessons_embedded() {
            Ok(lessons) => lessons,
            Err(e) => {
                log::error!("lesson bank rejected: {e}");
                Vec::new()
            }
        };
        self.allow_list = AllowList::from_env();
        self.state = if self.is_authenticated {
            AppState::Home
        } else {
            AppState::Login
        };
    }

    pub fn current_lesson(&self) -> Option<&Lesson> {
        let id = self.current_lesson.as_deref()?;
        data::lesson_by_id(&self.lessons, id)
    }
}

impl Default for LearnApp {
    fn default() -> Self {
        Self::new()
    }
}
