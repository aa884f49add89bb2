use super::*;

impl LearnApp {
    /// Whole-set update: read the persisted set, add one id, persist the full
    /// set on the next save. Concurrent instances merge last-write-wins.
    pub fn mark_lesson_completed(&mut self, id: &str) {
        if self.completed_lessons.insert(id.to_string()) {
            log::info!("lesson completed: {id}");
        }
    }

    pub fn is_lesson_completed(&self, id: &str) -> bool {
        self.completed_lessons.contains(id)
    }

    pub fn final_exam_id(level: LevelId) -> String {
        format!("{}_final", level.key())
    }

    pub fn is_final_exam_completed(&self, level: LevelId) -> bool {
        self.completed_lessons.contains(&Self::final_exam_id(level))
    }

    pub fn completed_count_for_level(&self, level: LevelId) -> usize {
        data::lessons_for_level(&self.lessons, level)
            .iter()
            .filter(|l| self.is_lesson_completed(&l.id))
            .count()
    }

    pub fn level_lesson_count(&self, level: LevelId) -> usize {
        data::lessons_for_level(&self.lessons, level).len()
    }

    pub fn level_progress_percent(&self, level: LevelId) -> u32 {
        let total = self.level_lesson_count(level);
        if total == 0 {
            return 0;
        }
        let completed = self.completed_count_for_level(level) as f64;
        (100.0 * completed / total as f64).round() as u32
    }

    /// The final exam unlocks once every lesson of the tier has been passed.
    pub fn final_exam_available(&self, level: LevelId) -> bool {
        let total = self.level_lesson_count(level);
        total > 0 && self.completed_count_for_level(level) == total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_content() -> LearnApp {
        let mut app = LearnApp::new();
        app.is_authenticated = true;
        app
    }

    #[test]
    fn marking_is_idempotent() {
        let mut app = app_with_content();
        app.mark_lesson_completed("level1_lesson1");
        app.mark_lesson_completed("level1_lesson1");
        assert!(app.is_lesson_completed("level1_lesson1"));
        assert_eq!(app.completed_lessons.len(), 1);
    }

    #[test]
    fn progress_percent_tracks_completed_lessons() {
        let mut app = app_with_content();
        let total = app.level_lesson_count(LevelId::Hsk1);
        assert!(total > 0);
        assert_eq!(app.level_progress_percent(LevelId::Hsk1), 0);

        let ids: Vec<String> = data::lessons_for_level(&app.lessons, LevelId::Hsk1)
            .iter()
            .map(|l| l.id.clone())
            .collect();
        app.mark_lesson_completed(&ids[0]);
        let expected = (100.0 / total as f64).round() as u32;
        assert_eq!(app.level_progress_percent(LevelId::Hsk1), expected);
    }

    #[test]
    fn final_exam_gated_on_full_tier_completion() {
        let mut app = app_with_content();
        assert!(!app.final_exam_available(LevelId::Hsk1));

        let ids: Vec<String> = data::lessons_for_level(&app.lessons, LevelId::Hsk1)
            .iter()
            .map(|l| l.id.clone())
            .collect();
        for id in &ids[..ids.len() - 1] {
            app.mark_lesson_completed(id);
        }
        assert!(!app.final_exam_available(LevelId::Hsk1));

        app.mark_lesson_completed(&ids[ids.len() - 1]);
        assert!(app.final_exam_available(LevelId::Hsk1));
    }

    #[test]
    fn empty_level_never_unlocks_final_exam() {
        let app = app_with_content();
        // No lessons in the bank for this tier yet.
        assert_eq!(app.level_lesson_count(LevelId::Hsk6), 0);
        assert!(!app.final_exam_available(LevelId::Hsk6));
        assert_eq!(app.level_progress_percent(LevelId::Hsk6), 0);
    }
}
