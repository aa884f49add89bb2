//! Embedded curriculum: structured lesson records keyed by level, parsed once
//! at startup and validated so unsatisfiable questions never reach the quiz
//! engine.

use crate::model::{Lesson, LevelId, Question, QuestionKind, Session};
use thiserror::Error;

/// Lessons per sidebar session group.
pub const LESSONS_PER_SESSION: usize = 3;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to parse lesson bank: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("lesson {lesson}: question {question} has no option flagged correct")]
    NoCorrectOption { lesson: String, question: String },
    #[error("lesson {lesson}: matching question {question} has no pairs")]
    EmptyPairs { lesson: String, question: String },
}

/// Loads the lesson bank from the embedded YAML.
pub fn read_lessons_embedded() -> Result<Vec<Lesson>, DataError> {
    let file_content = include_str!("data/lessons.yaml");
    let lessons: Vec<Lesson> = serde_yaml::from_str(file_content)?;
    validate(&lessons)?;
    Ok(lessons)
}

/// A question with no satisfiable correctness rule is a content defect:
/// rejected here at load time rather than discovered mid-quiz.
pub fn validate(lessons: &[Lesson]) -> Result<(), DataError> {
    for lesson in lessons {
        for q in &lesson.quiz.questions {
            validate_question(&lesson.id, q)?;
        }
    }
    Ok(())
}

fn validate_question(lesson_id: &str, q: &Question) -> Result<(), DataError> {
    match q.kind {
        QuestionKind::Matching => {
            if q.pairs.is_empty() {
                return Err(DataError::EmptyPairs {
                    lesson: lesson_id.to_string(),
                    question: q.id.clone(),
                });
            }
        }
        QuestionKind::ReadingComprehension => {
            let satisfiable = q
                .sub_questions
                .first()
                .is_some_and(|sub| sub.options.iter().any(|o| o.correct));
            if !satisfiable {
                return Err(DataError::NoCorrectOption {
                    lesson: lesson_id.to_string(),
                    question: q.id.clone(),
                });
            }
        }
        _ => {
            if !q.options.iter().any(|o| o.correct) {
                return Err(DataError::NoCorrectOption {
                    lesson: lesson_id.to_string(),
                    question: q.id.clone(),
                });
            }
        }
    }
    Ok(())
}

pub fn lessons_for_level(lessons: &[Lesson], level: LevelId) -> Vec<&Lesson> {
    lessons.iter().filter(|l| l.level == level).collect()
}

pub fn lesson_by_id<'a>(lessons: &'a [Lesson], id: &str) -> Option<&'a Lesson> {
    lessons.iter().find(|l| l.id == id)
}

pub fn questions_for<'a>(lessons: &'a [Lesson], lesson_id: &str) -> Option<&'a [Question]> {
    lesson_by_id(lessons, lesson_id).map(|l| l.quiz.questions.as_slice())
}

/// Groups a level's lessons into sidebar sessions of three, in bank order.
pub fn sessions_for_level(lessons: &[Lesson], level: LevelId) -> Vec<Session> {
    lessons_for_level(lessons, level)
        .chunks(LESSONS_PER_SESSION)
        .enumerate()
        .map(|(i, chunk)| Session {
            number: i + 1,
            title: format!("Session {}", i + 1),
            lesson_ids: chunk.iter().map(|l| l.id.clone()).collect(),
        })
        .collect()
}

/// Synthetic final exam: every quiz question of the tier's lessons, in lesson
/// order, gated by the tier's (stricter) passing score.
pub fn final_exam_questions(lessons: &[Lesson], level: LevelId) -> Vec<Question> {
    lessons_for_level(lessons, level)
        .iter()
        .flat_map(|l| l.quiz.questions.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_bank_parses_and_validates() {
        let lessons = read_lessons_embedded().expect("embedded lesson bank must be valid");
        assert!(!lessons.is_empty());
        // Every level represented in the bank has at least one quiz question.
        for lesson in &lessons {
            assert!(!lesson.quiz.questions.is_empty(), "{} has no quiz", lesson.id);
        }
    }

    #[test]
    fn sessions_group_three_lessons() {
        let lessons = read_lessons_embedded().unwrap();
        let sessions = sessions_for_level(&lessons, LevelId::Level1);
        let total: usize = sessions.iter().map(|s| s.lesson_ids.len()).sum();
        assert_eq!(total, lessons_for_level(&lessons, LevelId::Level1).len());
        for s in &sessions {
            assert!(s.lesson_ids.len() <= LESSONS_PER_SESSION);
            assert!(!s.lesson_ids.is_empty());
        }
        if let Some(first) = sessions.first() {
            assert_eq!(first.number, 1);
        }
    }

    #[test]
    fn final_exam_aggregates_all_tier_questions() {
        let lessons = read_lessons_embedded().unwrap();
        let exam = final_exam_questions(&lessons, LevelId::Hsk1);
        let expected: usize = lessons_for_level(&lessons, LevelId::Hsk1)
            .iter()
            .map(|l| l.quiz.questions.len())
            .sum();
        assert_eq!(exam.len(), expected);
        assert!(expected > 0);
    }

    #[test]
    fn unknown_question_kind_falls_back() {
        let yaml = r#"
- id: essay1
  type: essayWriting
  question: "Write about your day"
  options:
    - text: "ok"
      correct: true
"#;
        let questions: Vec<Question> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(questions[0].kind, QuestionKind::Unknown);
    }

    #[test]
    fn validation_rejects_question_without_correct_option() {
        let yaml = r#"
- id: bad1
  level: level1
  title: "坏"
  englishTitle: "Broken"
  quiz:
    title: "Broken quiz"
    questions:
      - id: q1
        type: multipleChoice
        question: "?"
        options:
          - text: "A"
          - text: "B"
"#;
        let lessons: Vec<Lesson> = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(
            validate(&lessons),
            Err(DataError::NoCorrectOption { .. })
        ));
    }

    #[test]
    fn validation_rejects_matching_without_pairs() {
        let yaml = r#"
- id: bad2
  level: level1
  title: "坏"
  englishTitle: "Broken"
  quiz:
    title: "Broken quiz"
    questions:
      - id: q1
        type: matching
        question: "match nothing"
"#;
        let lessons: Vec<Lesson> = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(
            validate(&lessons),
            Err(DataError::EmptyPairs { .. })
        ));
    }
}
