use super::catalog::QuestionCatalog;
use super::domain::QuestionId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Selected point value per question. `None` marks a question left unanswered.
///
/// Serializes as a JSON object keyed by question number, e.g. `{"1": 20, "2": null}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, Option<u32>>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from values listed in questionnaire order, starting at question 1.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let answers = (1..=QuestionId::MAX)
            .zip(values)
            .map(|(id, value)| (id, Some(value)))
            .collect();
        Self { answers }
    }

    pub fn with_answer(mut self, question: QuestionId, value: u32) -> Self {
        self.record(question, value);
        self
    }

    pub fn record(&mut self, question: QuestionId, value: u32) {
        self.answers.insert(question, Some(value));
    }

    pub fn clear(&mut self, question: QuestionId) {
        self.answers.insert(question, None);
    }

    pub fn get(&self, question: QuestionId) -> Option<u32> {
        self.answers.get(&question).copied().flatten()
    }

    pub fn question_ids(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.answers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Catalog questions with no value, in ascending order.
    pub fn missing_from(&self, catalog: &QuestionCatalog) -> Vec<QuestionId> {
        let mut missing: Vec<QuestionId> = catalog
            .question_ids()
            .filter(|id| self.get(*id).is_none())
            .collect();
        missing.sort_unstable();
        missing
    }

    pub fn is_complete(&self, catalog: &QuestionCatalog) -> bool {
        self.missing_from(catalog).is_empty()
    }
}

impl FromIterator<(QuestionId, u32)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (QuestionId, u32)>>(iter: T) -> Self {
        let answers = iter
            .into_iter()
            .map(|(id, value)| (id, Some(value)))
            .collect();
        Self { answers }
    }
}
