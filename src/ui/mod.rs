pub mod helpers;
pub mod layout;
pub mod views;

use crate::LearnApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for LearnApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Drain collaborator signals before rendering.
        self.poll_quiz_completion();
        self.poll_recognition();

        if self.is_authenticated && self.state != AppState::Login {
            top_panel(self, ctx);
        }
        bottom_panel(ctx);

        match self.state {
            AppState::Login => views::login::ui_login(self, ctx),
            AppState::Home => views::home::ui_home(self, ctx),
            AppState::LessonMenu => views::lesson_menu::ui_lesson_menu(self, ctx),
            AppState::Lesson => views::lesson::ui_lesson(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Pronunciation => views::pronunciation::ui_pronunciation(self, ctx),
            AppState::Progress => views::progress::ui_progress(self, ctx),
        }

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, self);
    }
}
