// src/view_models.rs

use crate::model::LevelId;

#[derive(Clone, Debug)]
pub struct LevelCard {
    pub level: LevelId,
    pub completed: usize,
    pub total: usize,
    pub progress_percent: u32,
    pub exam_passed: bool,
}

#[derive(Clone, Debug)]
pub struct LessonRow {
    pub id: String,
    pub title: String,
    pub english_title: String,
    pub completed: bool,
}

#[derive(Clone, Debug)]
pub struct SessionGroup {
    pub number: usize,
    pub title: String,
    pub lessons: Vec<LessonRow>,
}

impl LevelCard {
    pub fn label(&self) -> String {
        if self.total == 0 {
            format!("{} (coming soon)", self.level.title())
        } else if self.exam_passed {
            format!("{} ✅", self.level.title())
        } else {
            format!(
                "{} ({}/{} lessons)",
                self.level.title(),
                self.completed,
                self.total
            )
        }
    }
}

impl LessonRow {
    pub fn label(&self) -> String {
        if self.completed {
            format!("{} · {} ✅", self.title, self.english_title)
        } else {
            format!("{} · {}", self.title, self.english_title)
        }
    }
}
