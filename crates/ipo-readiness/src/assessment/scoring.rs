use super::answers::AnswerSet;
use super::catalog::QuestionCatalog;
use super::domain::{Category, QuestionId};
use serde::{Deserialize, Serialize};

/// Validation switches applied before any points are summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Reject answers whose value is not one of the question's option values.
    pub strict_option_values: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            strict_option_values: true,
        }
    }
}

/// Sums category and overall scores for a complete answer set.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    catalog: QuestionCatalog,
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(catalog: QuestionCatalog, config: ScoringConfig) -> Self {
        Self { catalog, config }
    }

    pub fn standard() -> Self {
        Self::new(QuestionCatalog::standard(), ScoringConfig::default())
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn config(&self) -> ScoringConfig {
        self.config
    }

    pub fn score(&self, answers: &AnswerSet) -> Result<ScoreSheet, ScoringError> {
        self.validate(answers)?;

        let categories: Vec<CategoryResult> = self
            .catalog
            .categories()
            .into_iter()
            .map(|definition| {
                let score = definition
                    .questions
                    .iter()
                    .filter_map(|id| answers.get(*id))
                    .map(u64::from)
                    .sum();
                CategoryResult::new(
                    definition.category,
                    score,
                    u64::from(definition.max_score),
                )
            })
            .collect();

        let total_score = categories.iter().map(|result| result.score).sum();
        let max_total = categories.iter().map(|result| result.max_score).sum();

        Ok(ScoreSheet {
            categories,
            total_score,
            max_total,
            total_percentage: percentage(total_score, max_total),
        })
    }

    fn validate(&self, answers: &AnswerSet) -> Result<(), ScoringError> {
        if let Some(question) = answers
            .question_ids()
            .find(|id| self.catalog.question(*id).is_none())
        {
            return Err(ScoringError::UnknownQuestion { question });
        }

        let missing = answers.missing_from(&self.catalog);
        if !missing.is_empty() {
            return Err(ScoringError::IncompleteInput { missing });
        }

        if self.config.strict_option_values {
            for question in self.catalog.questions() {
                if let Some(value) = answers.get(question.id) {
                    if !question.accepts(value) {
                        return Err(ScoringError::InvalidOptionValue {
                            question: question.id,
                            value,
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

/// Raw score of one category against its ceiling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryResult {
    pub category: Category,
    pub label: &'static str,
    pub score: u64,
    pub max_score: u64,
    pub percentage: f64,
}

impl CategoryResult {
    pub fn new(category: Category, score: u64, max_score: u64) -> Self {
        Self {
            category,
            label: category.label(),
            score,
            max_score,
            percentage: percentage(score, max_score),
        }
    }
}

/// Scoring output before classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSheet {
    pub categories: Vec<CategoryResult>,
    pub total_score: u64,
    pub max_total: u64,
    pub total_percentage: f64,
}

/// Validation failures raised before scoring starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("assessment is incomplete: no answer for question(s) {}", join_ids(.missing))]
    IncompleteInput { missing: Vec<QuestionId> },
    #[error("question {question} has no option worth {value} point(s)")]
    InvalidOptionValue { question: QuestionId, value: u32 },
    #[error("question {question} is not part of the questionnaire")]
    UnknownQuestion { question: QuestionId },
}

fn join_ids(ids: &[QuestionId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `score / max * 100` in floating point; a zero ceiling yields 0.
pub(crate) fn percentage(score: u64, max: u64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    score as f64 / max as f64 * 100.0
}
