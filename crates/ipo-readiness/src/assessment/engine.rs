use super::answers::AnswerSet;
use super::catalog::QuestionCatalog;
use super::readiness::ReadinessTier;
use super::recommendations::{
    select_recommendations, RecommendationStore, SelectedRecommendation,
    StaticRecommendationStore,
};
use super::result::ResultRecord;
use super::scoring::{percentage, CategoryResult, ScoringEngine, ScoringError};
use tracing::debug;

/// Stateless pipeline: score, classify, then select recommendations.
#[derive(Debug, Clone)]
pub struct AssessmentEngine<S = StaticRecommendationStore> {
    scoring: ScoringEngine,
    store: S,
}

impl AssessmentEngine {
    pub fn standard() -> Self {
        Self::new(ScoringEngine::standard(), StaticRecommendationStore)
    }
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl<S> AssessmentEngine<S>
where
    S: RecommendationStore,
{
    pub fn new(scoring: ScoringEngine, store: S) -> Self {
        Self { scoring, store }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        self.scoring.catalog()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Scores a complete answer set into an immutable result record.
    pub fn score(&self, answers: &AnswerSet) -> Result<ResultRecord, ScoringError> {
        let sheet = self.scoring.score(answers)?;
        let (tier, recommendations) = self.recommend(sheet.total_percentage, &sheet.categories);

        debug!(
            total_score = sheet.total_score,
            max_total = sheet.max_total,
            percentage = sheet.total_percentage,
            ?tier,
            recommendations = recommendations.len(),
            "assessment scored"
        );

        Ok(ResultRecord::new(sheet, tier, recommendations))
    }

    /// Classifies already-scored categories and picks their recommendations.
    ///
    /// The overall percentage is recomputed from the supplied results, so the caller may
    /// pass category scores that did not come from [`ScoringEngine`]. Totals saturate
    /// instead of overflowing.
    pub fn classify_and_recommend(
        &self,
        results: &[CategoryResult],
    ) -> (ReadinessTier, Vec<SelectedRecommendation>) {
        let total_score = results
            .iter()
            .fold(0, |total: u64, result| total.saturating_add(result.score));
        let max_total = results
            .iter()
            .fold(0, |total: u64, result| total.saturating_add(result.max_score));
        self.recommend(percentage(total_score, max_total), results)
    }

    fn recommend(
        &self,
        overall_percentage: f64,
        results: &[CategoryResult],
    ) -> (ReadinessTier, Vec<SelectedRecommendation>) {
        let tier = ReadinessTier::classify(overall_percentage);
        let recommendations = select_recommendations(results, tier, &self.store);
        (tier, recommendations)
    }
}
