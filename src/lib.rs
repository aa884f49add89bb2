pub mod app;
pub mod auth;
pub mod data;
pub mod engine;
pub mod model;
pub mod pronunciation;
pub mod speech;
pub mod ui;
pub mod view_models;

pub use app::LearnApp;
