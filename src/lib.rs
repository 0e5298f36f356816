pub mod calculations;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod input_validation;
pub mod inputs;
pub mod labels;
pub mod metadata;
pub mod persistence;
pub mod phases;
pub mod pricing;
pub mod project;
pub mod sizing;

pub use calculations::cost::{CostCalculation, CostLineItem, calculate_cost};
pub use calculations::timeline::{
    PhaseState, ScheduleAnchor, TimelineCalculation, TimelinePhase, TimelineTask, phase_state,
    schedule_timeline,
};
pub use input_validation::InputValidationError;
pub use inputs::{ProjectInputs, ServiceSelection};
pub use labels::{EnglishLabels, LabelResolver};
pub use metadata::ProjectMetadata;
#[cfg(feature = "sqlite")]
pub use persistence::sqlite::SqliteProjectStore;
pub use persistence::{
    PersistenceError, ProjectStore, export_cost_to_csv, export_timeline_to_csv,
    load_project_from_json, save_project_to_json, validate_project,
};
pub use phases::ServiceKind;
pub use pricing::{CostCategory, CostGroup, PricingTier, RateCard};
pub use project::{EstimateSummary, Project};
