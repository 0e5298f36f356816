//! Cost Calculation Engine. A pure function of (inputs, tier): no I/O, no
//! clock, no shared state, cheap enough to re-run on every slider tick.

use crate::inputs::ProjectInputs;
use crate::pricing::{
    CONSTRUCTION_SHARE, CostCategory, CostGroup, ESTIMATE_VARIANCE, FURNITURE_PERCENTAGE,
    HEADLINE_GRANULARITY, LINE_GRANULARITY, MATERIALS_SHARE, PricingTier, RENOVATION_RATE,
    RateCard, URGENCY_SURCHARGE, tooltip_key,
};
use serde::Serialize;

/// One active cost component. Values are whole currency units (EUR), already
/// rounded to the line granularity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostLineItem {
    pub category: CostCategory,
    pub group: CostGroup,
    pub label_key: &'static str,
    pub tooltip_key: &'static str,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostCalculation {
    pub tier: PricingTier,
    /// Active items only. Items whose owning service flag is off, or whose
    /// rounded value is zero, are absent rather than present with value 0.
    pub line_items: Vec<CostLineItem>,
    /// Sum of all items except furniture.
    pub subtotal: i64,
    /// Percentage-of-subtotal allowance; zero when furnishing is off.
    pub furniture: i64,
    /// Urgency markup on (subtotal + furniture); zero unless `is_urgent`.
    pub urgency_surcharge: i64,
    pub total: i64,
    pub low_estimate: i64,
    pub high_estimate: i64,
}

impl CostCalculation {
    /// Projection into the fixed display groups, preserving group order.
    /// Groups without active items are omitted.
    pub fn grouped_line_items(&self) -> Vec<(CostGroup, Vec<&CostLineItem>)> {
        CostGroup::ALL
            .iter()
            .filter_map(|group| {
                let items: Vec<&CostLineItem> = self
                    .line_items
                    .iter()
                    .filter(|item| item.group == *group)
                    .collect();
                if items.is_empty() {
                    None
                } else {
                    Some((*group, items))
                }
            })
            .collect()
    }

    /// Band edges for compact summary headlines, rounded to the coarser
    /// granularity. The detailed view keeps the 100-rounded values.
    pub fn headline_range(&self) -> (i64, i64) {
        (
            round_to(self.low_estimate as f64, HEADLINE_GRANULARITY),
            round_to(self.high_estimate as f64, HEADLINE_GRANULARITY),
        )
    }
}

/// Round half-up to the nearest multiple of `granularity`. Non-finite input
/// collapses to zero so slider jitter can never surface NaN in a price.
pub(crate) fn round_to(value: f64, granularity: i64) -> i64 {
    if !value.is_finite() || granularity <= 0 {
        return 0;
    }
    let step = granularity as f64;
    ((value / step).round() * step) as i64
}

pub fn calculate_cost(inputs: &ProjectInputs, tier: PricingTier) -> CostCalculation {
    let inputs = inputs.sanitized();
    let rates = RateCard::for_tier(tier);
    let services = inputs.services;

    let mut line_items: Vec<CostLineItem> = Vec::with_capacity(8);
    let push = |items: &mut Vec<CostLineItem>, category: CostCategory, raw: f64| {
        let value = round_to(raw, LINE_GRANULARITY);
        if value > 0 {
            items.push(CostLineItem {
                category,
                group: category.group(),
                label_key: category.label_key(),
                tooltip_key: tooltip_key(category, tier),
                value,
            });
        }
    };

    if services.space_planning {
        push(
            &mut line_items,
            CostCategory::InteriorDesign,
            rates.design_rate * inputs.area,
        );
    }
    if services.interior_finishes {
        push(
            &mut line_items,
            CostCategory::ConstructionFinish,
            rates.base_rate * inputs.area * CONSTRUCTION_SHARE,
        );
        push(
            &mut line_items,
            CostCategory::Materials,
            rates.base_rate * inputs.area * MATERIALS_SHARE,
        );
        push(
            &mut line_items,
            CostCategory::Kitchen,
            rates.kitchen_rate * inputs.kitchen_length,
        );
        push(
            &mut line_items,
            CostCategory::Appliances,
            rates.appliance_package,
        );
        push(
            &mut line_items,
            CostCategory::Wardrobes,
            rates.wardrobe_rate * inputs.wardrobe_length,
        );
    }
    // Prep work is independent of which service packages are selected.
    if inputs.is_renovation {
        push(
            &mut line_items,
            CostCategory::RenovationPrep,
            RENOVATION_RATE * inputs.area,
        );
    }

    let subtotal: i64 = line_items.iter().map(|item| item.value).sum();

    // Furniture is a share of everything else, so it is computed after the
    // subtotal and nothing downstream depends on it except the total.
    let furniture = if services.furnishing_decor {
        round_to(subtotal as f64 * FURNITURE_PERCENTAGE, LINE_GRANULARITY)
    } else {
        0
    };
    if furniture > 0 {
        push(&mut line_items, CostCategory::Furniture, furniture as f64);
    }

    let urgency_surcharge = if inputs.is_urgent {
        round_to(
            (subtotal + furniture) as f64 * URGENCY_SURCHARGE,
            LINE_GRANULARITY,
        )
    } else {
        0
    };

    let total = subtotal + furniture + urgency_surcharge;
    // One rounded half-width keeps the band symmetric around the total.
    let variance_amount = round_to(total as f64 * ESTIMATE_VARIANCE, LINE_GRANULARITY);
    let low_estimate = total - variance_amount;
    let high_estimate = total + variance_amount;

    CostCalculation {
        tier,
        line_items,
        subtotal,
        furniture,
        urgency_surcharge,
        total,
        low_estimate,
        high_estimate,
    }
}
