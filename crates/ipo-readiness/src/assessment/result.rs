use super::domain::Category;
use super::readiness::{ReadinessAssessment, ReadinessTier};
use super::recommendations::SelectedRecommendation;
use super::scoring::{CategoryResult, ScoreSheet};
use serde::Serialize;

/// Complete outcome of one scoring run. Built once by the engine and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    categories: Vec<CategoryResult>,
    total_score: u64,
    max_total: u64,
    total_percentage: f64,
    readiness: ReadinessAssessment,
    recommendations: Vec<SelectedRecommendation>,
}

impl ResultRecord {
    pub(crate) fn new(
        sheet: ScoreSheet,
        tier: ReadinessTier,
        recommendations: Vec<SelectedRecommendation>,
    ) -> Self {
        let ScoreSheet {
            categories,
            total_score,
            max_total,
            total_percentage,
        } = sheet;

        Self {
            categories,
            total_score,
            max_total,
            total_percentage,
            readiness: tier.into(),
            recommendations,
        }
    }

    /// Category results in display order.
    pub fn categories(&self) -> &[CategoryResult] {
        &self.categories
    }

    pub fn category(&self, category: Category) -> Option<&CategoryResult> {
        self.categories
            .iter()
            .find(|result| result.category == category)
    }

    pub fn total_score(&self) -> u64 {
        self.total_score
    }

    pub fn max_total(&self) -> u64 {
        self.max_total
    }

    pub fn total_percentage(&self) -> f64 {
        self.total_percentage
    }

    pub fn tier(&self) -> ReadinessTier {
        self.readiness.tier
    }

    pub fn readiness(&self) -> &ReadinessAssessment {
        &self.readiness
    }

    pub fn recommendations(&self) -> &[SelectedRecommendation] {
        &self.recommendations
    }
}
