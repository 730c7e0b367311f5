use super::content;
use super::RecommendationBundle;
use crate::assessment::domain::Category;
use crate::assessment::readiness::ReadinessTier;

/// Source of recommendation content, keyed by tier and by category.
pub trait RecommendationStore: Send + Sync {
    fn default_bundle_for(&self, tier: ReadinessTier) -> RecommendationBundle;
    fn bundle_for_category(&self, category: Category) -> RecommendationBundle;
}

/// Built-in advisory content shipped with the questionnaire.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticRecommendationStore;

impl RecommendationStore for StaticRecommendationStore {
    fn default_bundle_for(&self, tier: ReadinessTier) -> RecommendationBundle {
        match tier {
            ReadinessTier::High => content::HIGH_DEFAULT,
            ReadinessTier::Medium => content::MEDIUM_DEFAULT,
            ReadinessTier::Low => content::LOW_DEFAULT,
            ReadinessTier::Critical => content::CRITICAL_DEFAULT,
        }
    }

    fn bundle_for_category(&self, category: Category) -> RecommendationBundle {
        match category {
            Category::Strategic => content::STRATEGIC,
            Category::Market => content::MARKET,
            Category::Financial => content::FINANCIAL,
            Category::Organizational => content::ORGANIZATIONAL,
            Category::Legal => content::LEGAL,
            Category::Communications => content::COMMUNICATIONS,
        }
    }
}
