use super::common::*;
use crate::assessment::{
    select_recommendations, Category, CategoryResult, ReadinessTier, RecommendationBundle,
    RecommendationSource, RecommendationStore, StaticRecommendationStore, MAX_FOCUS_AREAS,
};

fn category_results(scores: [(u64, u64); 6]) -> Vec<CategoryResult> {
    Category::ordered()
        .into_iter()
        .zip(scores)
        .map(|(category, (score, max))| CategoryResult::new(category, score, max))
        .collect()
}

fn sources(
    results: &[CategoryResult],
    tier: ReadinessTier,
) -> Vec<RecommendationSource> {
    select_recommendations(results, tier, &StaticRecommendationStore)
        .into_iter()
        .map(|selected| selected.source)
        .collect()
}

#[test]
fn weakest_categories_are_listed_in_ascending_order() {
    let results = category_results([(70, 83), (26, 130), (120, 140), (45, 90), (12, 60), (80, 90)]);
    assert_eq!(
        sources(&results, ReadinessTier::Low),
        vec![
            RecommendationSource::Category(Category::Market),
            RecommendationSource::Category(Category::Legal),
            RecommendationSource::Category(Category::Organizational),
        ]
    );
}

#[test]
fn only_the_three_weakest_are_considered() {
    let results = category_results([(10, 83), (10, 130), (10, 140), (10, 90), (10, 60), (10, 90)]);
    let selected = select_recommendations(&results, ReadinessTier::Critical, &StaticRecommendationStore);
    assert_eq!(selected.len(), MAX_FOCUS_AREAS);
}

#[test]
fn weak_categories_outside_the_bottom_three_are_skipped() {
    // Organizational sits at 50% but ranks fourth; Legal at 0% leads.
    let results = category_results([(30, 83), (40, 130), (140, 140), (45, 90), (0, 60), (90, 90)]);
    assert_eq!(
        sources(&results, ReadinessTier::Medium),
        vec![
            RecommendationSource::Category(Category::Legal),
            RecommendationSource::Category(Category::Market),
            RecommendationSource::Category(Category::Strategic),
        ]
    );
}

#[test]
fn exactly_sixty_percent_is_not_a_focus_area() {
    let results = category_results([(83, 83), (78, 130), (140, 140), (54, 90), (36, 60), (90, 90)]);
    assert_eq!(
        sources(&results, ReadinessTier::High),
        vec![RecommendationSource::TierDefault(ReadinessTier::High)]
    );
}

#[test]
fn mixed_weakest_three_keep_only_those_below_threshold() {
    let results = category_results([(83, 83), (65, 130), (140, 140), (60, 90), (60, 60), (90, 90)]);
    assert_eq!(
        sources(&results, ReadinessTier::High),
        vec![RecommendationSource::Category(Category::Market)]
    );
}

#[test]
fn ties_follow_display_order() {
    let results = category_results([(0, 83), (0, 130), (0, 140), (0, 90), (0, 60), (0, 90)]);
    assert_eq!(
        sources(&results, ReadinessTier::Critical),
        vec![
            RecommendationSource::Category(Category::Strategic),
            RecommendationSource::Category(Category::Market),
            RecommendationSource::Category(Category::Financial),
        ]
    );

    // Equal percentages later in display order still lose to earlier categories.
    let results = category_results([(83, 83), (130, 130), (70, 140), (45, 90), (30, 60), (45, 90)]);
    assert_eq!(
        sources(&results, ReadinessTier::Medium),
        vec![
            RecommendationSource::Category(Category::Financial),
            RecommendationSource::Category(Category::Organizational),
            RecommendationSource::Category(Category::Legal),
        ]
    );
}

#[test]
fn fallback_uses_tier_default_bundle() {
    let store = StaticRecommendationStore;
    let results = category_results([(70, 83), (100, 130), (100, 140), (70, 90), (45, 60), (70, 90)]);

    for tier in ReadinessTier::descending() {
        let selected = select_recommendations(&results, tier, &store);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].source, RecommendationSource::TierDefault(tier));
        assert_eq!(selected[0].bundle, store.default_bundle_for(tier));
    }
}

#[test]
fn static_store_supplies_complete_bundles() {
    let store = StaticRecommendationStore;
    for category in Category::ordered() {
        let bundle = store.bundle_for_category(category);
        assert_eq!(bundle.title, category.label());
        assert!(!bundle.paragraphs.is_empty());
        assert!(!bundle.plan.is_empty());
    }
    for tier in ReadinessTier::descending() {
        let bundle = store.default_bundle_for(tier);
        assert!(!bundle.paragraphs.is_empty());
        assert!(!bundle.plan.is_empty());
    }
}

#[test]
fn plan_steps_are_numbered_from_one() {
    let bundle = StaticRecommendationStore.bundle_for_category(Category::Legal);
    let numbers: Vec<usize> = bundle.numbered_plan().map(|(number, _)| number).collect();
    assert_eq!(numbers, (1..=bundle.plan.len()).collect::<Vec<_>>());
    let first = bundle.numbered_plan().next().map(|(_, step)| step);
    assert_eq!(first, bundle.plan.first().copied());
}

struct HouseStore;

const HOUSE_BUNDLE: RecommendationBundle = RecommendationBundle {
    title: "House view",
    paragraphs: &["Speak to your relationship manager."],
    plan: &["Book a review"],
};

impl RecommendationStore for HouseStore {
    fn default_bundle_for(&self, _tier: ReadinessTier) -> RecommendationBundle {
        HOUSE_BUNDLE
    }

    fn bundle_for_category(&self, _category: Category) -> RecommendationBundle {
        HOUSE_BUNDLE
    }
}

#[test]
fn selection_reads_content_from_the_supplied_store() {
    let results = category_results([(0, 83), (130, 130), (140, 140), (90, 90), (60, 60), (90, 90)]);
    let selected = select_recommendations(&results, ReadinessTier::High, &HouseStore);
    assert_eq!(selected.len(), 1);
    assert_eq!(
        selected[0].source,
        RecommendationSource::Category(Category::Strategic)
    );
    assert_eq!(selected[0].bundle.title, "House view");
}

#[test]
fn classify_and_recommend_derives_overall_percentage() {
    let results = category_results([(83, 83), (130, 130), (140, 140), (90, 90), (0, 60), (90, 90)]);
    let (tier, selected) = engine().classify_and_recommend(&results);

    assert_eq!(tier, ReadinessTier::High);
    assert_eq!(selected.len(), 1);
    assert_eq!(
        selected[0].source,
        RecommendationSource::Category(Category::Legal)
    );

    let results = category_results([(20, 83), (40, 130), (50, 140), (30, 90), (10, 60), (20, 90)]);
    let (tier, selected) = engine().classify_and_recommend(&results);
    assert_eq!(tier, ReadinessTier::Critical);
    assert_eq!(selected.len(), 3);
}

#[test]
fn recommendation_source_serializes_with_kind_and_key() {
    let payload = serde_json::to_value(RecommendationSource::Category(Category::Legal))
        .expect("source serializes");
    assert_eq!(payload["kind"], "category");
    assert_eq!(payload["key"], "legal");

    let payload = serde_json::to_value(RecommendationSource::TierDefault(ReadinessTier::High))
        .expect("source serializes");
    assert_eq!(payload["kind"], "tier_default");
    assert_eq!(payload["key"], "high");
}

#[test]
fn classify_and_recommend_saturates_oversized_totals() {
    let results = category_results([
        (u64::MAX, 83),
        (u64::MAX, 130),
        (140, 140),
        (90, 90),
        (0, 60),
        (90, 90),
    ]);
    let (tier, selected) = engine().classify_and_recommend(&results);

    assert_eq!(tier, ReadinessTier::High);
    assert_eq!(
        selected[0].source,
        RecommendationSource::Category(Category::Legal)
    );
}
