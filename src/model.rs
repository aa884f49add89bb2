use serde::{Deserialize, Serialize};

/// Proficiency track identifier. Threshold levels are untiered (70% passing
/// score); HSK levels carry a numeric tier that drives passing-score
/// strictness.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum LevelId {
    Level1,
    Level2,
    Level3,
    Level4,
    Hsk1,
    Hsk2,
    Hsk3,
    Hsk4,
    Hsk5,
    Hsk6,
}

impl LevelId {
    pub const ALL: [LevelId; 10] = [
        LevelId::Level1,
        LevelId::Level2,
        LevelId::Level3,
        LevelId::Level4,
        LevelId::Hsk1,
        LevelId::Hsk2,
        LevelId::Hsk3,
        LevelId::Hsk4,
        LevelId::Hsk5,
        LevelId::Hsk6,
    ];

    /// Numeric HSK tier (1–6), `None` for threshold tracks.
    pub fn hsk_tier(self) -> Option<u8> {
        match self {
            LevelId::Hsk1 => Some(1),
            LevelId::Hsk2 => Some(2),
            LevelId::Hsk3 => Some(3),
            LevelId::Hsk4 => Some(4),
            LevelId::Hsk5 => Some(5),
            LevelId::Hsk6 => Some(6),
            _ => None,
        }
    }

    pub fn is_hsk(self) -> bool {
        self.hsk_tier().is_some()
    }

    pub fn key(self) -> &'static str {
        match self {
            LevelId::Level1 => "level1",
            LevelId::Level2 => "level2",
            LevelId::Level3 => "level3",
            LevelId::Level4 => "level4",
            LevelId::Hsk1 => "hsk1",
            LevelId::Hsk2 => "hsk2",
            LevelId::Hsk3 => "hsk3",
            LevelId::Hsk4 => "hsk4",
            LevelId::Hsk5 => "hsk5",
            LevelId::Hsk6 => "hsk6",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            LevelId::Level1 => "Short-Term Spoken Chinese",
            LevelId::Level2 => "Threshold Level 2",
            LevelId::Level3 => "Pre-Intermediate Spoken Chinese",
            LevelId::Level4 => "Intermediate Chinese",
            LevelId::Hsk1 => "HSK Level 1",
            LevelId::Hsk2 => "HSK Level 2",
            LevelId::Hsk3 => "HSK Level 3",
            LevelId::Hsk4 => "HSK Level 4",
            LevelId::Hsk5 => "HSK Level 5",
            LevelId::Hsk6 => "HSK Level 6",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            LevelId::Level1 | LevelId::Level2 => "Beginner",
            LevelId::Level3 => "Pre-Intermediate",
            LevelId::Level4 => "Intermediate",
            LevelId::Hsk1 | LevelId::Hsk2 => "Elementary",
            LevelId::Hsk3 | LevelId::Hsk4 => "Intermediate",
            LevelId::Hsk5 | LevelId::Hsk6 => "Advanced",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            LevelId::Level1 => "Start your Chinese journey with basic greetings and essential phrases",
            LevelId::Level2 => "Build on basics and practice more vocabulary",
            LevelId::Level3 => "Expand your vocabulary and practice everyday conversations",
            LevelId::Level4 => "Master complex grammar and professional communication",
            LevelId::Hsk1 => "Master 150 essential words and basic survival phrases",
            LevelId::Hsk2 => "Learn 300 words and conduct simple daily conversations",
            LevelId::Hsk3 => "Understand 600 words and communicate in various scenarios",
            LevelId::Hsk4 => "Master 1200 words and discuss diverse topics fluently",
            LevelId::Hsk5 => "Learn 2500 words and understand news and literature",
            LevelId::Hsk6 => "Master 5000+ words and achieve near-native proficiency",
        }
    }
}

/// Question kinds supported by the quiz engine. Content with an unrecognised
/// kind deserializes to `Unknown` and is rendered and graded as plain
/// multiple choice instead of crashing.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum QuestionKind {
    MultipleChoice,
    Matching,
    ReadingComprehension,
    Listening,
    FillInBlank,
    Translation,
    ShortAnswer,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct QuizOption {
    pub text: String,
    #[serde(default)]
    pub correct: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MatchingPair {
    pub id: String,
    pub prompt: String,
    pub answer: String,
}

/// Embedded question of a reading-comprehension block. Only the first
/// sub-question is graded.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SubQuestion {
    pub prompt: String,
    #[serde(default)]
    pub options: Vec<QuizOption>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(default)]
    pub options: Vec<QuizOption>,
    #[serde(default)]
    pub pairs: Vec<MatchingPair>,
    #[serde(default)]
    pub passage: Option<String>,
    #[serde(default)]
    pub sub_questions: Vec<SubQuestion>,
    /// Text spoken aloud for listening questions.
    #[serde(default)]
    pub audio_text: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vocabulary {
    pub id: String,
    pub character: String,
    pub pinyin: String,
    pub english: String,
    #[serde(default)]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub example_translation: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DialogueLine {
    pub speaker: String,
    pub chinese: String,
    pub pinyin: String,
    pub english: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Dialogue {
    pub title: String,
    pub lines: Vec<DialogueLine>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GrammarPoint {
    pub point: String,
    pub explanation: String,
    pub example: String,
    pub translation: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterEntry {
    pub character: String,
    pub pinyin: String,
    pub meaning: String,
    #[serde(default)]
    pub radical: Option<String>,
    #[serde(default)]
    pub radical_meaning: Option<String>,
    #[serde(default)]
    pub stroke_count: Option<u32>,
    #[serde(default)]
    pub stroke_order: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LessonQuiz {
    pub title: String,
    pub questions: Vec<Question>,
}

/// A themed content unit: vocabulary, one dialogue, grammar points,
/// characters and one quiz.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub level: LevelId,
    pub title: String,
    pub english_title: String,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub vocabulary: Vec<Vocabulary>,
    #[serde(default)]
    pub dialogue: Option<Dialogue>,
    #[serde(default)]
    pub grammar: Vec<GrammarPoint>,
    #[serde(default)]
    pub characters: Vec<CharacterEntry>,
    pub quiz: LessonQuiz,
}

/// Sidebar grouping of 3 lessons. Unrelated to a quiz session.
#[derive(Clone, Debug)]
pub struct Session {
    pub number: usize,
    pub title: String,
    pub lesson_ids: Vec<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppState {
    #[default]
    Login,
    Home,
    LessonMenu,
    Lesson,
    Quiz,
    Pronunciation,
    Progress,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LessonTab {
    #[default]
    Vocabulary,
    Dialogue,
    Grammar,
    Characters,
}
