use serde::{Deserialize, Serialize};
use std::fmt;

/// Questions are numbered from 1 in questionnaire order.
pub type QuestionId = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Strategic,
    Market,
    Financial,
    Organizational,
    Legal,
    Communications,
}

impl Category {
    /// Fixed display order. Also the tie-break order when ranking categories.
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Strategic,
            Self::Market,
            Self::Financial,
            Self::Organizational,
            Self::Legal,
            Self::Communications,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Strategic => "Strategic readiness",
            Self::Market => "Size and market position",
            Self::Financial => "Financial readiness",
            Self::Organizational => "Organizational readiness",
            Self::Legal => "Legal readiness",
            Self::Communications => "Communications readiness",
        }
    }

    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Strategic => "Strategic",
            Self::Market => "Market",
            Self::Financial => "Financial",
            Self::Organizational => "Organizational",
            Self::Legal => "Legal",
            Self::Communications => "Communications",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single selectable answer and the points it is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub label: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub category: Category,
    pub prompt: &'static str,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn max_value(&self) -> u32 {
        self.options
            .iter()
            .map(|option| option.value)
            .max()
            .unwrap_or(0)
    }

    /// Whether `value` matches one of the question's options.
    pub fn accepts(&self, value: u32) -> bool {
        self.options.iter().any(|option| option.value == value)
    }
}

/// Membership and ceiling of one category, derived from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDefinition {
    pub category: Category,
    pub label: &'static str,
    pub questions: Vec<QuestionId>,
    pub max_score: u32,
}
