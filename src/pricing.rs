use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fraction of the base construction rate attributed to labour.
pub const CONSTRUCTION_SHARE: f64 = 0.6;
/// Fraction of the base construction rate attributed to materials.
pub const MATERIALS_SHARE: f64 = 0.4;
/// Prep-work rate for renovation projects, EUR per square metre, tier-independent.
pub const RENOVATION_RATE: f64 = 80.0;
/// Loose furniture and decor budget as a share of everything else.
pub const FURNITURE_PERCENTAGE: f64 = 0.15;
/// Half-width of the estimate band around the total.
pub const ESTIMATE_VARIANCE: f64 = 0.15;
/// Surcharge applied to the total for urgent projects.
pub const URGENCY_SURCHARGE: f64 = 0.20;
/// Every line value is rounded to this granularity before summation.
pub const LINE_GRANULARITY: i64 = 100;
/// Compact summary views round the band edges to this granularity.
pub const HEADLINE_GRANULARITY: i64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingTier {
    Budget,
    Standard,
    Premium,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTierError(String);

impl fmt::Display for ParseTierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown pricing tier '{}'", self.0)
    }
}

impl std::error::Error for ParseTierError {}

impl PricingTier {
    pub const ALL: [PricingTier; 3] = [
        PricingTier::Budget,
        PricingTier::Standard,
        PricingTier::Premium,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PricingTier::Budget => "budget",
            PricingTier::Standard => "standard",
            PricingTier::Premium => "premium",
        }
    }
}

impl FromStr for PricingTier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "budget" => Ok(PricingTier::Budget),
            "standard" => Ok(PricingTier::Standard),
            "premium" => Ok(PricingTier::Premium),
            other => Err(ParseTierError(other.to_string())),
        }
    }
}

impl fmt::Display for PricingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-tier unit rates, EUR. Quantities are square metres for area-priced
/// categories and linear metres for joinery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateCard {
    pub design_rate: f64,
    pub base_rate: f64,
    pub kitchen_rate: f64,
    pub wardrobe_rate: f64,
    pub appliance_package: f64,
}

const BUDGET_RATES: RateCard = RateCard {
    design_rate: 30.0,
    base_rate: 250.0,
    kitchen_rate: 800.0,
    wardrobe_rate: 600.0,
    appliance_package: 2500.0,
};

const STANDARD_RATES: RateCard = RateCard {
    design_rate: 50.0,
    base_rate: 400.0,
    kitchen_rate: 1500.0,
    wardrobe_rate: 1000.0,
    appliance_package: 5000.0,
};

const PREMIUM_RATES: RateCard = RateCard {
    design_rate: 80.0,
    base_rate: 650.0,
    kitchen_rate: 2500.0,
    wardrobe_rate: 1800.0,
    appliance_package: 9000.0,
};

impl RateCard {
    pub fn for_tier(tier: PricingTier) -> &'static RateCard {
        match tier {
            PricingTier::Budget => &BUDGET_RATES,
            PricingTier::Standard => &STANDARD_RATES,
            PricingTier::Premium => &PREMIUM_RATES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    InteriorDesign,
    ConstructionFinish,
    Materials,
    Kitchen,
    Appliances,
    Wardrobes,
    Furniture,
    RenovationPrep,
}

impl CostCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CostCategory::InteriorDesign => "interior_design",
            CostCategory::ConstructionFinish => "construction_finish",
            CostCategory::Materials => "materials",
            CostCategory::Kitchen => "kitchen",
            CostCategory::Appliances => "appliances",
            CostCategory::Wardrobes => "wardrobes",
            CostCategory::Furniture => "furniture",
            CostCategory::RenovationPrep => "renovation_prep",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            CostCategory::InteriorDesign => "cost.interior_design",
            CostCategory::ConstructionFinish => "cost.construction_finish",
            CostCategory::Materials => "cost.materials",
            CostCategory::Kitchen => "cost.kitchen",
            CostCategory::Appliances => "cost.appliances",
            CostCategory::Wardrobes => "cost.wardrobes",
            CostCategory::Furniture => "cost.furniture",
            CostCategory::RenovationPrep => "cost.renovation_prep",
        }
    }

    pub fn group(&self) -> CostGroup {
        match self {
            CostCategory::InteriorDesign
            | CostCategory::ConstructionFinish
            | CostCategory::Materials => CostGroup::ProjectShell,
            CostCategory::Kitchen | CostCategory::Wardrobes => CostGroup::FixedJoinery,
            CostCategory::Appliances | CostCategory::Furniture => CostGroup::MovablesTech,
            CostCategory::RenovationPrep => CostGroup::Renovation,
        }
    }
}

/// Fixed display groups. Grouping is a pure projection over the breakdown and
/// never affects totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostGroup {
    ProjectShell,
    FixedJoinery,
    MovablesTech,
    Renovation,
}

impl CostGroup {
    pub const ALL: [CostGroup; 4] = [
        CostGroup::ProjectShell,
        CostGroup::FixedJoinery,
        CostGroup::MovablesTech,
        CostGroup::Renovation,
    ];

    pub fn title_key(&self) -> &'static str {
        match self {
            CostGroup::ProjectShell => "group.project_shell",
            CostGroup::FixedJoinery => "group.fixed_joinery",
            CostGroup::MovablesTech => "group.movables_tech",
            CostGroup::Renovation => "group.renovation",
        }
    }
}

/// Tier-dependent explanation text for a category, keyed for the label
/// resolver. Purely descriptive content, selectable by (category, tier).
pub fn tooltip_key(category: CostCategory, tier: PricingTier) -> &'static str {
    match (category, tier) {
        (CostCategory::InteriorDesign, PricingTier::Budget) => "tooltip.interior_design.budget",
        (CostCategory::InteriorDesign, PricingTier::Standard) => "tooltip.interior_design.standard",
        (CostCategory::InteriorDesign, PricingTier::Premium) => "tooltip.interior_design.premium",
        (CostCategory::ConstructionFinish, PricingTier::Budget) => {
            "tooltip.construction_finish.budget"
        }
        (CostCategory::ConstructionFinish, PricingTier::Standard) => {
            "tooltip.construction_finish.standard"
        }
        (CostCategory::ConstructionFinish, PricingTier::Premium) => {
            "tooltip.construction_finish.premium"
        }
        (CostCategory::Materials, PricingTier::Budget) => "tooltip.materials.budget",
        (CostCategory::Materials, PricingTier::Standard) => "tooltip.materials.standard",
        (CostCategory::Materials, PricingTier::Premium) => "tooltip.materials.premium",
        (CostCategory::Kitchen, PricingTier::Budget) => "tooltip.kitchen.budget",
        (CostCategory::Kitchen, PricingTier::Standard) => "tooltip.kitchen.standard",
        (CostCategory::Kitchen, PricingTier::Premium) => "tooltip.kitchen.premium",
        (CostCategory::Appliances, PricingTier::Budget) => "tooltip.appliances.budget",
        (CostCategory::Appliances, PricingTier::Standard) => "tooltip.appliances.standard",
        (CostCategory::Appliances, PricingTier::Premium) => "tooltip.appliances.premium",
        (CostCategory::Wardrobes, PricingTier::Budget) => "tooltip.wardrobes.budget",
        (CostCategory::Wardrobes, PricingTier::Standard) => "tooltip.wardrobes.standard",
        (CostCategory::Wardrobes, PricingTier::Premium) => "tooltip.wardrobes.premium",
        (CostCategory::Furniture, PricingTier::Budget) => "tooltip.furniture.budget",
        (CostCategory::Furniture, PricingTier::Standard) => "tooltip.furniture.standard",
        (CostCategory::Furniture, PricingTier::Premium) => "tooltip.furniture.premium",
        (CostCategory::RenovationPrep, _) => "tooltip.renovation_prep",
    }
}
