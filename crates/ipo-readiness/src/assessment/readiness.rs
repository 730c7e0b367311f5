use serde::{Deserialize, Serialize};

/// Overall readiness band. Variants are declared lowest first so `Ord` follows readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessTier {
    Critical,
    Low,
    Medium,
    High,
}

struct TierContent {
    tier: ReadinessTier,
    lower_bound: Option<f64>,
    label: &'static str,
    narrative: &'static str,
}

/// Evaluated top to bottom; the first inclusive lower bound that matches wins.
static TIERS: [TierContent; 4] = [
    TierContent {
        tier: ReadinessTier::High,
        lower_bound: Some(80.0),
        label: "High readiness",
        narrative: "Your company shows a high level of readiness for an IPO. A strong strategy, financial resilience and a sound organizational structure make you an attractive candidate for a public listing.",
    },
    TierContent {
        tier: ReadinessTier::Medium,
        lower_bound: Some(60.0),
        label: "Medium readiness",
        narrative: "Your company is at a medium level of readiness for an IPO. Some areas need more work, but you have a good foundation for further progress.",
    },
    TierContent {
        tier: ReadinessTier::Low,
        lower_bound: Some(40.0),
        label: "Low readiness",
        narrative: "Your company's readiness for an IPO is assessed as low. Several key areas need work before an acceptable level is reached.",
    },
    TierContent {
        tier: ReadinessTier::Critical,
        lower_bound: None,
        label: "Critically low readiness",
        narrative: "At the moment your company shows a critically low level of readiness. Comprehensive work is required across every area.",
    },
];

impl ReadinessTier {
    /// Highest tier first, matching classification order.
    pub const fn descending() -> [Self; 4] {
        [Self::High, Self::Medium, Self::Low, Self::Critical]
    }

    /// Maps an overall percentage to its tier. NaN and negative inputs fall through to `Critical`.
    pub fn classify(percentage: f64) -> Self {
        TIERS
            .iter()
            .find(|content| {
                content
                    .lower_bound
                    .map_or(true, |bound| percentage >= bound)
            })
            .map(|content| content.tier)
            .unwrap_or(Self::Critical)
    }

    pub fn lower_bound(self) -> Option<f64> {
        self.content().lower_bound
    }

    pub fn label(self) -> &'static str {
        self.content().label
    }

    /// General assessment shown alongside the tier.
    pub fn narrative(self) -> &'static str {
        self.content().narrative
    }

    fn content(self) -> &'static TierContent {
        let index = match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
            Self::Critical => 3,
        };
        &TIERS[index]
    }
}

/// Tier plus its fixed narrative, as carried on a result record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReadinessAssessment {
    pub tier: ReadinessTier,
    pub label: &'static str,
    pub narrative: &'static str,
}

impl From<ReadinessTier> for ReadinessAssessment {
    fn from(tier: ReadinessTier) -> Self {
        Self {
            tier,
            label: tier.label(),
            narrative: tier.narrative(),
        }
    }
}
