//! Household-size-driven joinery recommendations. These feed the
//! underbuilt/overbuilt flags shown next to the length sliders; the cost
//! engine itself never consults them.

use serde::{Deserialize, Serialize};

const KITCHEN_BASE: f64 = 2.4;
const KITCHEN_PER_ADULT: f64 = 0.3;
const KITCHEN_PER_CHILD: f64 = 0.2;

const WARDROBE_BASE: f64 = 1.2;
const WARDROBE_PER_ADULT: f64 = 0.6;
const WARDROBE_PER_CHILD: f64 = 0.4;

/// Selected length within this fraction of the recommendation counts as
/// adequate.
const FIT_TOLERANCE: f64 = 0.15;

pub fn recommended_kitchen_length(adults: u32, children: u32) -> f64 {
    KITCHEN_BASE + KITCHEN_PER_ADULT * f64::from(adults) + KITCHEN_PER_CHILD * f64::from(children)
}

pub fn recommended_wardrobe_length(adults: u32, children: u32) -> f64 {
    WARDROBE_BASE + WARDROBE_PER_ADULT * f64::from(adults) + WARDROBE_PER_CHILD * f64::from(children)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitStatus {
    Underbuilt,
    Adequate,
    Overbuilt,
}

impl FitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitStatus::Underbuilt => "underbuilt",
            FitStatus::Adequate => "adequate",
            FitStatus::Overbuilt => "overbuilt",
        }
    }
}

pub fn fit_status(selected: f64, recommended: f64) -> FitStatus {
    if !selected.is_finite() || recommended <= 0.0 {
        return FitStatus::Underbuilt;
    }
    let low = recommended * (1.0 - FIT_TOLERANCE);
    let high = recommended * (1.0 + FIT_TOLERANCE);
    if selected < low {
        FitStatus::Underbuilt
    } else if selected > high {
        FitStatus::Overbuilt
    } else {
        FitStatus::Adequate
    }
}
