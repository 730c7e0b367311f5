mod content;
mod store;

pub use store::{RecommendationStore, StaticRecommendationStore};

use super::domain::Category;
use super::readiness::ReadinessTier;
use super::scoring::CategoryResult;
use serde::Serialize;

/// Categories scoring strictly below this percentage receive targeted advice.
pub const FOCUS_THRESHOLD: f64 = 60.0;

/// Upper bound on how many of the weakest categories are considered.
pub const MAX_FOCUS_AREAS: usize = 3;

/// Narrative advice plus an ordered improvement plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendationBundle {
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    pub plan: &'static [&'static str],
}

impl RecommendationBundle {
    /// Plan steps paired with their 1-based sequence number.
    pub fn numbered_plan(&self) -> impl Iterator<Item = (usize, &'static str)> {
        self.plan
            .iter()
            .enumerate()
            .map(|(index, step)| (index + 1, *step))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "key", rename_all = "snake_case")]
pub enum RecommendationSource {
    Category(Category),
    TierDefault(ReadinessTier),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectedRecommendation {
    pub source: RecommendationSource,
    pub bundle: RecommendationBundle,
}

/// Picks targeted bundles for the weakest categories, falling back to the tier default.
///
/// Categories are ranked by percentage ascending with ties kept in display order. Of the
/// first [`MAX_FOCUS_AREAS`], each one below [`FOCUS_THRESHOLD`] contributes its category
/// bundle. When none qualify the result is exactly the tier's default bundle, so the
/// output always holds between one and three entries.
pub fn select_recommendations<S>(
    results: &[CategoryResult],
    tier: ReadinessTier,
    store: &S,
) -> Vec<SelectedRecommendation>
where
    S: RecommendationStore + ?Sized,
{
    let mut ranked: Vec<&CategoryResult> = results.iter().collect();
    ranked.sort_by(|left, right| {
        left.percentage
            .total_cmp(&right.percentage)
            .then_with(|| left.category.cmp(&right.category))
    });

    let mut selected: Vec<SelectedRecommendation> = ranked
        .into_iter()
        .take(MAX_FOCUS_AREAS)
        .filter(|result| result.percentage < FOCUS_THRESHOLD)
        .map(|result| SelectedRecommendation {
            source: RecommendationSource::Category(result.category),
            bundle: store.bundle_for_category(result.category),
        })
        .collect();

    if selected.is_empty() {
        selected.push(SelectedRecommendation {
            source: RecommendationSource::TierDefault(tier),
            bundle: store.default_bundle_for(tier),
        });
    }

    selected
}
