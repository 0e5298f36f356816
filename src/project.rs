use crate::calculations::cost::{CostCalculation, calculate_cost};
use crate::calculations::timeline::{ScheduleAnchor, TimelineCalculation, schedule_timeline};
use crate::input_validation::{self, InputValidationError};
use crate::inputs::ProjectInputs;
use crate::labels::LabelResolver;
use crate::metadata::ProjectMetadata;
use crate::phases;
use crate::pricing::PricingTier;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Compact figures for one estimate run, shaped for CLI display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateSummary {
    pub total: i64,
    pub low_estimate: i64,
    pub high_estimate: i64,
    pub total_weeks: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl EstimateSummary {
    pub fn to_cli_summary(&self) -> String {
        format!(
            "total={} EUR, range={}-{}, weeks={}, start={}, finish={}",
            self.total,
            self.low_estimate,
            self.high_estimate,
            self.total_weeks,
            self.start_date,
            self.end_date
        )
    }
}

/// The whole user-controlled project state, held explicitly and passed to the
/// engines on every recomputation. Nothing derived is stored here; outputs
/// are reproducible from these fields alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    metadata: ProjectMetadata,
    tier: PricingTier,
    inputs: ProjectInputs,
    anchor: ScheduleAnchor,
}

impl Project {
    pub fn new() -> Self {
        // Deterministic default anchor; callers wanting "today" pass it in.
        let default_start = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid default date");
        Self::starting_on(default_start)
    }

    pub fn starting_on(start_date: NaiveDate) -> Self {
        Self {
            metadata: ProjectMetadata::default(),
            tier: PricingTier::Standard,
            inputs: ProjectInputs::default(),
            anchor: ScheduleAnchor::StartDate(start_date),
        }
    }

    pub fn from_parts(
        metadata: ProjectMetadata,
        tier: PricingTier,
        inputs: ProjectInputs,
        anchor: ScheduleAnchor,
    ) -> Result<Self, InputValidationError> {
        input_validation::validate_inputs(&inputs)?;
        Ok(Self {
            metadata,
            tier,
            inputs,
            anchor,
        })
    }

    pub fn metadata(&self) -> &ProjectMetadata {
        &self.metadata
    }

    pub fn tier(&self) -> PricingTier {
        self.tier
    }

    pub fn inputs(&self) -> &ProjectInputs {
        &self.inputs
    }

    pub fn anchor(&self) -> ScheduleAnchor {
        self.anchor
    }

    pub fn set_project_name(&mut self, name: impl Into<String>) {
        self.metadata.project_name = name.into();
    }

    pub fn set_project_description(&mut self, description: impl Into<String>) {
        self.metadata.project_description = description.into();
    }

    pub fn set_metadata(&mut self, metadata: ProjectMetadata) {
        self.metadata = metadata;
    }

    pub fn set_tier(&mut self, tier: PricingTier) {
        self.tier = tier;
    }

    pub fn set_anchor(&mut self, anchor: ScheduleAnchor) {
        self.anchor = anchor;
    }

    pub fn set_inputs(&mut self, inputs: ProjectInputs) -> Result<(), InputValidationError> {
        input_validation::validate_inputs(&inputs)?;
        self.inputs = inputs;
        Ok(())
    }

    /// Mutate a copy of the inputs and commit only if the result validates.
    pub fn update_inputs_with<F>(&mut self, mutator: F) -> Result<(), InputValidationError>
    where
        F: FnOnce(&mut ProjectInputs),
    {
        let mut inputs = self.inputs.clone();
        mutator(&mut inputs);
        self.set_inputs(inputs)
    }

    pub fn cost_estimate(&self) -> CostCalculation {
        calculate_cost(&self.inputs, self.tier)
    }

    pub fn timeline(&self, labels: &dyn LabelResolver) -> TimelineCalculation {
        schedule_timeline(
            self.tier,
            self.inputs.is_renovation,
            &self.inputs.services,
            self.anchor,
            labels,
        )
    }

    pub fn summary(&self) -> EstimateSummary {
        let cost = self.cost_estimate();
        let total_weeks = phases::total_weeks(self.tier, self.inputs.is_renovation);
        let start_date = match self.anchor {
            ScheduleAnchor::StartDate(date) => date,
            ScheduleAnchor::MoveInDate(date) => date - Duration::weeks(i64::from(total_weeks)),
        };
        EstimateSummary {
            total: cost.total,
            low_estimate: cost.low_estimate,
            high_estimate: cost.high_estimate,
            total_weeks,
            start_date,
            end_date: start_date + Duration::weeks(i64::from(total_weeks)),
        }
    }
}

impl Default for Project {
    fn default() -> Self {
        Self::new()
    }
}
