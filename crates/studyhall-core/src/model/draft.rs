// ── Test draft domain types ──
//
// The wizard accumulates a TestDraft across its four steps and submits
// it as one unit. The draft is discarded after submission, success or
// failure.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use studyhall_api::types::GenerateTestRequest;

/// Requested difficulty band for generated questions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, Serialize, Deserialize,
)]
pub enum Difficulty {
    #[strum(to_string = "Easy")]
    Easy,
    #[default]
    #[strum(to_string = "Medium")]
    Medium,
    #[strum(to_string = "Hard")]
    Hard,
}

impl Difficulty {
    pub fn wire_value(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// Question formats the generator may draw from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, EnumIter, Serialize, Deserialize,
)]
pub enum QuestionType {
    #[strum(to_string = "Multiple choice")]
    Mcq,
    #[strum(to_string = "Short answer")]
    ShortAnswer,
    #[strum(to_string = "Long answer")]
    LongAnswer,
}

impl QuestionType {
    pub fn wire_value(self) -> &'static str {
        match self {
            Self::Mcq => "mcq",
            Self::ShortAnswer => "short_answer",
            Self::LongAnswer => "long_answer",
        }
    }
}

/// Ephemeral wizard state: the not-yet-submitted parameters for a
/// generated test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDraft {
    pub subject_id: Option<i64>,
    /// Display name of the chosen subject, used for the generated title.
    pub subject_name: Option<String>,
    /// Paper number (1 or 2), when the syllabus splits papers.
    pub paper: Option<u8>,
    pub difficulty: Difficulty,
    pub total_marks: u32,
    pub question_types: BTreeSet<QuestionType>,
}

impl Default for TestDraft {
    fn default() -> Self {
        Self {
            subject_id: None,
            subject_name: None,
            paper: None,
            difficulty: Difficulty::default(),
            total_marks: 50,
            question_types: BTreeSet::new(),
        }
    }
}

impl TestDraft {
    /// Serialize into the wire request.
    ///
    /// The generation endpoint requires a title; the client derives one
    /// from the chosen subject rather than asking the user for it.
    pub fn to_request(&self) -> Option<GenerateTestRequest> {
        let subject_id = self.subject_id?;
        let title = match self.subject_name.as_deref() {
            Some(name) => format!("{name} practice test"),
            None => "Practice test".to_owned(),
        };

        Some(GenerateTestRequest {
            subject_id,
            title,
            paper_number: self.paper,
            difficulty: self.difficulty.wire_value().to_owned(),
            total_marks: self.total_marks,
            question_types: self
                .question_types
                .iter()
                .map(|t| t.wire_value().to_owned())
                .collect(),
        })
    }
}
