//! Pronunciation test: a small session over a lesson's vocabulary, graded
//! with the stricter pronunciation threshold. Navigation is free in both
//! directions and every item can be re-recorded; the latest result wins.

use crate::model::Vocabulary;
use crate::speech::{PronunciationScorer, RecognitionResult, TEST_THRESHOLD};

#[derive(Clone, Debug, PartialEq)]
pub struct ItemResult {
    pub vocab_id: String,
    pub result: RecognitionResult,
}

pub struct PronunciationTest {
    vocabulary: Vec<Vocabulary>,
    current: usize,
    results: Vec<Option<ItemResult>>,
    complete: bool,
    scorer: PronunciationScorer,
}

impl PronunciationTest {
    pub fn new(vocabulary: Vec<Vocabulary>) -> Self {
        let results = vec![None; vocabulary.len()];
        Self {
            vocabulary,
            current: 0,
            results,
            complete: false,
            scorer: PronunciationScorer::new(TEST_THRESHOLD),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_item(&self) -> Option<&Vocabulary> {
        self.vocabulary.get(self.current)
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn next(&mut self) {
        if self.current + 1 < self.vocabulary.len() {
            self.current += 1;
        }
    }

    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Grades a transcript against the current item's pinyin and records it,
    /// replacing any earlier attempt.
    pub fn record_transcript(&mut self, transcript: &str) -> Option<&ItemResult> {
        let item = self.vocabulary.get(self.current)?;
        let result = self.scorer.evaluate(transcript, &item.pinyin);
        self.results[self.current] = Some(ItemResult {
            vocab_id: item.id.clone(),
            result,
        });
        self.results[self.current].as_ref()
    }

    pub fn result_for_current(&self) -> Option<&ItemResult> {
        self.results.get(self.current)?.as_ref()
    }

    pub fn results(&self) -> impl Iterator<Item = &ItemResult> {
        self.results.iter().flatten()
    }

    /// Every vocabulary item paired with its latest result, in test order.
    pub fn entries(&self) -> impl Iterator<Item = (&Vocabulary, Option<&ItemResult>)> {
        self.vocabulary
            .iter()
            .zip(self.results.iter().map(Option::as_ref))
    }

    pub fn answered_count(&self) -> usize {
        self.results.iter().flatten().count()
    }

    pub fn correct_count(&self) -> usize {
        self.results
            .iter()
            .flatten()
            .filter(|r| r.result.is_match)
            .count()
    }

    pub fn average_accuracy(&self) -> u32 {
        let answered = self.answered_count();
        if answered == 0 {
            return 0;
        }
        let sum: u32 = self.results.iter().flatten().map(|r| r.result.accuracy).sum();
        (sum as f64 / answered as f64).round() as u32
    }

    pub fn finish(&mut self) {
        self.complete = true;
    }

    pub fn restart(&mut self) {
        self.current = 0;
        self.results = vec![None; self.vocabulary.len()];
        self.complete = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(id: &str, character: &str, pinyin: &str) -> Vocabulary {
        Vocabulary {
            id: id.to_string(),
            character: character.to_string(),
            pinyin: pinyin.to_string(),
            english: String::new(),
            part_of_speech: None,
            example: None,
            example_translation: None,
        }
    }

    #[test]
    fn empty_vocabulary_is_no_content() {
        let test = PronunciationTest::new(vec![]);
        assert!(test.is_empty());
        assert!(test.current_item().is_none());
    }

    #[test]
    fn records_with_strict_threshold() {
        let mut test = PronunciationTest::new(vec![vocab("v1", "你好", "nǐ hǎo")]);
        let miss = test.record_transcript("wo shi").unwrap();
        assert!(!miss.result.is_match);

        let exact = test.record_transcript("ni hao").unwrap();
        assert_eq!(exact.result.accuracy, 100);
        assert!(exact.result.is_match);
        // Re-recording overwrote the earlier attempt.
        assert_eq!(test.answered_count(), 1);
        assert_eq!(test.correct_count(), 1);
    }

    #[test]
    fn navigation_is_free_and_bounded() {
        let mut test = PronunciationTest::new(vec![
            vocab("v1", "一", "yī"),
            vocab("v2", "二", "èr"),
        ]);
        test.previous();
        assert_eq!(test.current_index(), 0);
        test.next();
        assert_eq!(test.current_index(), 1);
        test.next();
        assert_eq!(test.current_index(), 1);
        test.previous();
        assert_eq!(test.current_index(), 0);
    }

    #[test]
    fn summary_counts_and_restart() {
        let mut test = PronunciationTest::new(vec![
            vocab("v1", "一", "yi"),
            vocab("v2", "二", "er"),
        ]);
        test.record_transcript("yi");
        test.next();
        test.record_transcript("e");
        test.finish();

        assert!(test.is_complete());
        assert_eq!(test.answered_count(), 2);
        assert_eq!(test.correct_count(), 1);
        // (100 + 50) / 2
        assert_eq!(test.average_accuracy(), 75);

        test.restart();
        assert!(!test.is_complete());
        assert_eq!(test.answered_count(), 0);
        assert_eq!(test.current_index(), 0);
    }
}
