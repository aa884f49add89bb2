pub mod home;
pub mod lesson;
pub mod lesson_menu;
pub mod login;
pub mod pronunciation;
pub mod progress;
pub mod quiz;
