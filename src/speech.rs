//! Speech collaborators and pronunciation scoring.
//!
//! Synthesis and recognition are host services behind traits; the scoring
//! itself (tone-mark normalization plus edit-distance similarity) is pure and
//! lives here so both the lesson practice buttons and the pronunciation test
//! grade the same way, differing only in threshold.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Accuracy percentage required during lesson practice.
pub const PRACTICE_THRESHOLD: u32 = 70;
/// Stricter accuracy percentage required by the pronunciation test.
pub const TEST_THRESHOLD: u32 = 80;

/// Mandarin speech locale used for both synthesis and recognition.
pub const MANDARIN_LOCALE: &str = "zh-CN";

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("speech recognition is not supported in this environment")]
    Unsupported,
    #[error("speech recognition error: {0}")]
    Recognition(String),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RecognitionResult {
    pub transcript: String,
    pub accuracy: u32,
    pub is_match: bool,
    pub confidence: f64,
}

/// Lowercases and strips Mandarin tone diacritics (ü-row marks map to "v",
/// the pinyin keyboard convention).
pub fn strip_tone_marks(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'ā' | 'á' | 'ǎ' | 'à' => 'a',
            'ē' | 'é' | 'ě' | 'è' => 'e',
            'ī' | 'í' | 'ǐ' | 'ì' => 'i',
            'ō' | 'ó' | 'ǒ' | 'ò' => 'o',
            'ū' | 'ú' | 'ǔ' | 'ù' => 'u',
            'ü' | 'ǖ' | 'ǘ' | 'ǚ' | 'ǜ' => 'v',
            'ń' | 'ň' | 'ǹ' => 'n',
            'ḿ' => 'm',
            other => other,
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Grades a transcript against a target phrase with one explicit threshold;
/// callers pick the threshold instead of hardcoding their own rule.
#[derive(Clone, Copy, Debug)]
pub struct PronunciationScorer {
    threshold: u32,
}

impl PronunciationScorer {
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Similarity percentage: exact match after normalization is 100,
    /// otherwise `round(100 * (1 - levenshtein / max_len))`.
    pub fn accuracy(&self, spoken: &str, target: &str) -> u32 {
        let spoken_norm = strip_tone_marks(spoken);
        let target_norm = strip_tone_marks(target);

        if spoken_norm == target_norm {
            return 100;
        }
        let max_len = spoken_norm.chars().count().max(target_norm.chars().count());
        if max_len == 0 {
            return 100;
        }
        let distance = strsim::levenshtein(&spoken_norm, &target_norm);
        let similarity = 1.0 - distance as f64 / max_len as f64;
        (similarity.max(0.0) * 100.0).round() as u32
    }

    pub fn evaluate(&self, transcript: &str, target: &str) -> RecognitionResult {
        let accuracy = self.accuracy(transcript, target);
        let is_match = accuracy >= self.threshold;
        let confidence = if is_match {
            accuracy as f64 / 100.0
        } else {
            (accuracy as f64 / 100.0) * 0.8
        };
        RecognitionResult {
            transcript: transcript.to_string(),
            accuracy,
            is_match,
            confidence,
        }
    }
}

/// Non-blocking text-to-speech collaborator.
pub trait Speaker {
    fn is_supported(&self) -> bool;
    fn speak(&self, text: &str, rate: f32);
}

/// Speech-to-text collaborator. `take_transcript` drains a finished
/// recognition; results arriving after the caller has navigated away are
/// simply never taken.
pub trait Recognizer {
    fn is_supported(&self) -> bool;
    fn start(&mut self, target: &str) -> Result<(), SpeechError>;
    fn take_transcript(&mut self) -> Option<Result<String, SpeechError>>;
}

/// Fallback for hosts without speech synthesis.
#[derive(Default)]
pub struct NullSpeaker;

impl Speaker for NullSpeaker {
    fn is_supported(&self) -> bool {
        false
    }

    fn speak(&self, text: &str, _rate: f32) {
        log::debug!("speech synthesis unavailable, skipping: {text}");
    }
}

/// Fallback for hosts without speech recognition; dependent controls are
/// disabled rather than failing.
#[derive(Default)]
pub struct NullRecognizer;

impl Recognizer for NullRecognizer {
    fn is_supported(&self) -> bool {
        false
    }

    fn start(&mut self, _target: &str) -> Result<(), SpeechError> {
        Err(SpeechError::Unsupported)
    }

    fn take_transcript(&mut self) -> Option<Result<String, SpeechError>> {
        None
    }
}

#[cfg(target_arch = "wasm32")]
pub mod web {
    use super::{MANDARIN_LOCALE, Speaker};

    /// Browser speech synthesis via the Web Speech API.
    #[derive(Default)]
    pub struct WebSpeaker;

    impl Speaker for WebSpeaker {
        fn is_supported(&self) -> bool {
            web_sys::window()
                .and_then(|w| w.speech_synthesis().ok())
                .is_some()
        }

        fn speak(&self, text: &str, rate: f32) {
            let Some(synth) = web_sys::window().and_then(|w| w.speech_synthesis().ok()) else {
                log::warn!("speech synthesis unavailable in this browser");
                return;
            };
            match web_sys::SpeechSynthesisUtterance::new_with_text(text) {
                Ok(utterance) => {
                    utterance.set_lang(MANDARIN_LOCALE);
                    utterance.set_rate(rate);
                    synth.speak(&utterance);
                }
                Err(e) => log::warn!("failed to create utterance: {e:?}"),
            }
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::VecDeque;

    /// Recognizer fed from a fixed script of transcripts.
    pub struct ScriptedRecognizer {
        transcripts: VecDeque<String>,
        pending: Option<String>,
    }

    impl ScriptedRecognizer {
        pub fn new(transcripts: &[&str]) -> Self {
            Self {
                transcripts: transcripts.iter().map(|t| t.to_string()).collect(),
                pending: None,
            }
        }
    }

    impl Recognizer for ScriptedRecognizer {
        fn is_supported(&self) -> bool {
            true
        }

        fn start(&mut self, _target: &str) -> Result<(), SpeechError> {
            self.pending = self.transcripts.pop_front();
            Ok(())
        }

        fn take_transcript(&mut self) -> Option<Result<String, SpeechError>> {
            self.pending.take().map(Ok)
        }
    }
}
