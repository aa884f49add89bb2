use super::*;

impl LearnApp {
    pub fn level_cards(&self) -> Vec<LevelCard> {
        LevelId::ALL
            .iter()
            .map(|&level| LevelCard {
                level,
                completed: self.completed_count_for_level(level),
                total: self.level_lesson_count(level),
                progress_percent: self.level_progress_percent(level),
                exam_passed: self.is_final_exam_completed(level),
            })
            .collect()
    }

    pub fn session_groups(&self) -> Vec<SessionGroup> {
        self.sessions()
            .into_iter()
            .map(|session| {
                let lessons = session
                    .lesson_ids
                    .iter()
                    .filter_map(|id| data::lesson_by_id(&self.lessons, id))
                    .map(|l| LessonRow {
                        id: l.id.clone(),
                        title: l.title.clone(),
                        english_title: l.english_title.clone(),
                        completed: self.is_lesson_completed(&l.id),
                    })
                    .collect();
                SessionGroup {
                    number: session.number,
                    title: session.title,
                    lessons,
                }
            })
            .collect()
    }

    /// Per-lesson rows of the selected level for the progress tracker.
    pub fn progress_rows(&self) -> Vec<LessonRow> {
        data::lessons_for_level(&self.lessons, self.selected_level)
            .iter()
            .map(|l| LessonRow {
                id: l.id.clone(),
                title: l.title.clone(),
                english_title: l.english_title.clone(),
                completed: self.is_lesson_completed(&l.id),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_groups_mirror_the_bank() {
        let mut app = LearnApp::new();
        app.selected_level = LevelId::Level1;
        let groups = app.session_groups();
        let total: usize = groups.iter().map(|g| g.lessons.len()).sum();
        assert_eq!(total, app.level_lesson_count(LevelId::Level1));

        app.mark_lesson_completed("level1_lesson1");
        let groups = app.session_groups();
        let row = groups
            .iter()
            .flat_map(|g| &g.lessons)
            .find(|r| r.id == "level1_lesson1")
            .unwrap();
        assert!(row.completed);
    }

    #[test]
    fn level_cards_cover_every_track() {
        let app = LearnApp::new();
        let cards = app.level_cards();
        assert_eq!(cards.len(), LevelId::ALL.len());
    }
}
