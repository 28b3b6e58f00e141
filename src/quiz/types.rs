use serde::{Deserialize, Serialize};

/// How a question is answered and judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    SingleChoice,
    TrueFalse,
    MultiSelect,
    OrderedList,
    FreeText,
}

impl QuestionKind {
    /// Returns the display name for this question kind.
    pub fn name(&self) -> &'static str {
        match self {
            QuestionKind::SingleChoice => "Single Choice",
            QuestionKind::TrueFalse => "True / False",
            QuestionKind::MultiSelect => "Multi Select",
            QuestionKind::OrderedList => "Ordered List",
            QuestionKind::FreeText => "Free Text",
        }
    }

    /// Whether the option order is shuffled once at load time. Ordered-list
    /// questions keep source order because that order *is* the answer key;
    /// true/false keeps its canonical True-then-False layout.
    pub fn shuffles_options(&self) -> bool {
        matches!(self, QuestionKind::SingleChoice | QuestionKind::MultiSelect)
    }
}

/// One selectable option of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// A quiz question. Immutable once loaded; owned by the session for the
/// session's duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub kind: QuestionKind,
    #[serde(default)]
    pub options: Vec<AnswerOption>,
    /// Correct option ids; for ordered-list questions this is the canonical
    /// sequence, in order.
    #[serde(default)]
    pub correct_option_ids: Vec<String>,
    /// Accepted answers for free-text questions, matched after trimming and
    /// case-folding.
    #[serde(default)]
    pub accepted_answers: Vec<String>,
    #[serde(default)]
    pub time_limit_seconds: Option<u32>,
}

/// Player input for one turn, one variant per question kind plus the
/// countdown-expiry signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerInput {
    /// A single selected option id (single-choice and true/false).
    Single(String),
    /// A set of selected option ids (multi-select). Judged as a set.
    Multi(Vec<String>),
    /// The player's reordered option-id sequence (ordered-list).
    Ordered(Vec<String>),
    /// Submitted free text.
    Text(String),
    /// The countdown expired with no submission. Always incorrect.
    Timeout,
}
