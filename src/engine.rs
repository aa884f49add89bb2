//! Quiz session state machine: evaluates heterogeneous question kinds,
//! computes the score against the level-dependent passing table and gates
//! lesson completion.

use std::collections::HashMap;

use crate::model::{MatchingPair, Question, QuestionKind};

/// Invoked with the final score when a finished quiz meets the passing score.
/// This is the sole signal that promotes a lesson into the completion store.
pub type CompletionCallback = Box<dyn FnMut(u32)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// Empty question list: terminal display, the state machine is never entered.
    NoContent,
    InProgress(usize),
    ResultsShown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Current question not yet answered correctly; nothing changed.
    Blocked,
    Moved(usize),
    Finished { score: u32, passed: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Elementary,
    Intermediate,
    Advanced,
    Standard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Difficulty::Elementary => "Elementary",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Standard => "Standard",
        };
        f.write_str(label)
    }
}

/// Required passing percentage for an optional HSK tier (1–6), 70 untiered.
pub fn passing_score(tier: Option<u8>) -> u32 {
    match tier {
        Some(1) | None => 70,
        Some(2) => 75,
        Some(3) => 80,
        Some(4) => 85,
        Some(5) => 90,
        Some(6) => 95,
        Some(_) => 70,
    }
}

pub fn difficulty_label(tier: Option<u8>) -> Difficulty {
    match tier {
        Some(1) | Some(2) => Difficulty::Elementary,
        Some(3) | Some(4) => Difficulty::Intermediate,
        Some(_) => Difficulty::Advanced,
        None => Difficulty::Standard,
    }
}

/// Selectable answers for a matching question: the de-duplicated set of all
/// pairs' correct answers, in first-seen order. Every prompt row presents
/// this same pool.
pub fn answer_pool(pairs: &[MatchingPair]) -> Vec<String> {
    let mut pool: Vec<String> = Vec::with_capacity(pairs.len());
    for pair in pairs {
        if !pool.iter().any(|a| a == &pair.answer) {
            pool.push(pair.answer.clone());
        }
    }
    pool
}

pub struct QuizEngine {
    questions: Vec<Question>,
    tier: Option<u8>,
    final_exam: bool,
    current: usize,
    /// Keyed by question position (`question_{index}`), not id, so duplicate
    /// ids across lessons stay independent.
    answers: HashMap<String, String>,
    /// Keyed by `question_{index}_pair_{pair_id}`.
    matching_answers: HashMap<String, String>,
    show_results: bool,
    on_complete: Option<CompletionCallback>,
}

fn question_key(index: usize) -> String {
    format!("question_{index}")
}

fn pair_key(index: usize, pair_id: &str) -> String {
    format!("question_{index}_pair_{pair_id}")
}

impl QuizEngine {
    pub fn new(questions: Vec<Question>, tier: Option<u8>, final_exam: bool) -> Self {
        Self {
            questions,
            tier,
            final_exam,
            current: 0,
            answers: HashMap::new(),
            matching_answers: HashMap::new(),
            show_results: false,
            on_complete: None,
        }
    }

    pub fn with_on_complete(mut self, callback: CompletionCallback) -> Self {
        self.on_complete = Some(callback);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_final_exam(&self) -> bool {
        self.final_exam
    }

    pub fn tier(&self) -> Option<u8> {
        self.tier
    }

    pub fn passing_score(&self) -> u32 {
        passing_score(self.tier)
    }

    pub fn difficulty(&self) -> Difficulty {
        difficulty_label(self.tier)
    }

    pub fn state(&self) -> EngineState {
        if self.questions.is_empty() {
            EngineState::NoContent
        } else if self.show_results {
            EngineState::ResultsShown
        } else {
            EngineState::InProgress(self.current)
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// Records the answer for a non-matching question, overwriting any prior
    /// value and clearing nothing else.
    pub fn submit_answer(&mut self, index: usize, value: impl Into<String>) {
        if index >= self.questions.len() {
            return;
        }
        self.answers.insert(question_key(index), value.into());
    }

    /// Records one pair's answer of a matching question.
    pub fn submit_matching_answer(
        &mut self,
        index: usize,
        pair_id: &str,
        value: impl Into<String>,
    ) {
        if index >= self.questions.len() {
            return;
        }
        self.matching_answers
            .insert(pair_key(index, pair_id), value.into());
    }

    pub fn answer_for(&self, index: usize) -> Option<&str> {
        self.answers.get(&question_key(index)).map(String::as_str)
    }

    pub fn matching_answer_for(&self, index: usize, pair_id: &str) -> Option<&str> {
        self.matching_answers
            .get(&pair_key(index, pair_id))
            .map(String::as_str)
    }

    /// Whether every answer slot of the question has been filled in.
    pub fn is_answered(&self, index: usize) -> bool {
        let Some(q) = self.questions.get(index) else {
            return false;
        };
        match q.kind {
            QuestionKind::Matching => {
                !q.pairs.is_empty()
                    && q.pairs
                        .iter()
                        .all(|p| self.matching_answer_for(index, &p.id).is_some())
            }
            _ => self.answer_for(index).is_some(),
        }
    }

    /// Kind-specific correctness rule, evaluated against the current answer
    /// state. Unknown kinds fall through to the option-list rule.
    pub fn is_correct(&self, index: usize) -> bool {
        let Some(q) = self.questions.get(index) else {
            return false;
        };
        match q.kind {
            QuestionKind::Matching => {
                !q.pairs.is_empty()
                    && q.pairs.iter().all(|p| {
                        self.matching_answer_for(index, &p.id) == Some(p.answer.as_str())
                    })
            }
            QuestionKind::ReadingComprehension => {
                // Only the first embedded sub-question is graded.
                let Some(sub) = q.sub_questions.first() else {
                    return false;
                };
                self.selected_option_correct(index, &sub.options)
            }
            _ => self.selected_option_correct(index, &q.options),
        }
    }

    fn selected_option_correct(&self, index: usize, options: &[crate::model::QuizOption]) -> bool {
        let Some(answer) = self.answer_for(index) else {
            return false;
        };
        options.iter().any(|o| o.correct && o.text == answer)
    }

    /// Number of correct questions, re-evaluated from the final answer state
    /// rather than a running tally, so a later-corrected answer is what
    /// counts.
    pub fn correct_count(&self) -> usize {
        (0..self.questions.len())
            .filter(|&i| self.is_correct(i))
            .count()
    }

    /// `round(100 * correct / total)`. Idempotent for a fixed answer state.
    pub fn score(&self) -> u32 {
        if self.questions.is_empty() {
            return 0;
        }
        let correct = self.correct_count() as f64;
        let total = self.questions.len() as f64;
        (100.0 * correct / total).round() as u32
    }

    pub fn passed(&self) -> bool {
        self.score() >= self.passing_score()
    }

    /// No-op unless the current question is correct. Moves forward, or at the
    /// last index finalizes the session: the completion callback fires with
    /// the score iff the quiz passed.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if self.questions.is_empty() || self.show_results || !self.is_correct(self.current) {
            return AdvanceOutcome::Blocked;
        }
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            AdvanceOutcome::Moved(self.current)
        } else {
            self.show_results = true;
            let score = self.score();
            let passed = score >= self.passing_score();
            if passed {
                if let Some(callback) = self.on_complete.as_mut() {
                    callback(score);
                }
            }
            AdvanceOutcome::Finished { score, passed }
        }
    }

    /// Moves back one question, floored at 0. Recorded answers are kept.
    pub fn retreat(&mut self) {
        if !self.show_results {
            self.current = self.current.saturating_sub(1);
        }
    }

    /// Full identity reset: back to index 0 with all answers and the results
    /// flag cleared.
    pub fn reset(&mut self) {
        self.current = 0;
        self.answers.clear();
        self.matching_answers.clear();
        self.show_results = false;
    }
}
