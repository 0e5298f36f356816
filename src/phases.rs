//! Static phase and task templates. The scheduling engine walks these in
//! fixed order; the per-tier duration table decides how many weeks each
//! phase spans.

use crate::inputs::ServiceSelection;
use crate::pricing::PricingTier;
use serde::{Deserialize, Serialize};

/// Reference to one of the three service flags a task can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    SpacePlanning,
    InteriorFinishes,
    FurnishingDecor,
}

impl ServiceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::SpacePlanning => "space_planning",
            ServiceKind::InteriorFinishes => "interior_finishes",
            ServiceKind::FurnishingDecor => "furnishing_decor",
        }
    }

    pub fn is_enabled(&self, services: &ServiceSelection) -> bool {
        match self {
            ServiceKind::SpacePlanning => services.space_planning,
            ServiceKind::InteriorFinishes => services.interior_finishes,
            ServiceKind::FurnishingDecor => services.furnishing_decor,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TaskTemplate {
    pub id: &'static str,
    pub label_key: &'static str,
    pub requires_service: Option<ServiceKind>,
    pub critical: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct PhaseTemplate {
    pub id: &'static str,
    pub title_key: &'static str,
    pub status_key: &'static str,
    pub tasks: &'static [TaskTemplate],
}

/// Fixed length of the optional renovation-prep phase, in weeks.
pub const RENOVATION_PREP_WEEKS: u32 = 2;

pub const PREP_PHASE: PhaseTemplate = PhaseTemplate {
    id: "phase-0",
    title_key: "phase.prep.title",
    status_key: "phase.prep.status",
    tasks: &[
        TaskTemplate {
            id: "task-demolition",
            label_key: "task.demolition",
            requires_service: None,
            critical: true,
        },
        TaskTemplate {
            id: "task-debris-removal",
            label_key: "task.debris_removal",
            requires_service: None,
            critical: false,
        },
        TaskTemplate {
            id: "task-surface-protection",
            label_key: "task.surface_protection",
            requires_service: None,
            critical: false,
        },
    ],
};

pub const CORE_PHASES: [PhaseTemplate; 4] = [
    PhaseTemplate {
        id: "phase-1",
        title_key: "phase.design.title",
        status_key: "phase.design.status",
        tasks: &[
            TaskTemplate {
                id: "task-concept-layout",
                label_key: "task.concept_layout",
                requires_service: Some(ServiceKind::SpacePlanning),
                critical: true,
            },
            TaskTemplate {
                id: "task-material-palette",
                label_key: "task.material_palette",
                requires_service: Some(ServiceKind::InteriorFinishes),
                critical: false,
            },
            TaskTemplate {
                id: "task-furniture-plan",
                label_key: "task.furniture_plan",
                requires_service: Some(ServiceKind::FurnishingDecor),
                critical: false,
            },
            TaskTemplate {
                id: "task-permits",
                label_key: "task.permits",
                requires_service: None,
                critical: false,
            },
        ],
    },
    PhaseTemplate {
        id: "phase-2",
        title_key: "phase.rough.title",
        status_key: "phase.rough.status",
        tasks: &[
            TaskTemplate {
                id: "task-partition-framing",
                label_key: "task.partition_framing",
                requires_service: Some(ServiceKind::SpacePlanning),
                critical: false,
            },
            TaskTemplate {
                id: "task-electrical-rough-in",
                label_key: "task.electrical_rough_in",
                requires_service: Some(ServiceKind::InteriorFinishes),
                critical: true,
            },
            TaskTemplate {
                id: "task-plumbing-rough-in",
                label_key: "task.plumbing_rough_in",
                requires_service: Some(ServiceKind::InteriorFinishes),
                critical: false,
            },
        ],
    },
    PhaseTemplate {
        id: "phase-3",
        title_key: "phase.finishes.title",
        status_key: "phase.finishes.status",
        tasks: &[
            TaskTemplate {
                id: "task-wall-floor-finishes",
                label_key: "task.wall_floor_finishes",
                requires_service: Some(ServiceKind::InteriorFinishes),
                critical: true,
            },
            TaskTemplate {
                id: "task-painting",
                label_key: "task.painting",
                requires_service: Some(ServiceKind::InteriorFinishes),
                critical: false,
            },
            TaskTemplate {
                id: "task-kitchen-install",
                label_key: "task.kitchen_install",
                requires_service: Some(ServiceKind::InteriorFinishes),
                critical: false,
            },
        ],
    },
    PhaseTemplate {
        id: "phase-4",
        title_key: "phase.fitout.title",
        status_key: "phase.fitout.status",
        tasks: &[
            TaskTemplate {
                id: "task-wardrobe-install",
                label_key: "task.wardrobe_install",
                requires_service: Some(ServiceKind::InteriorFinishes),
                critical: false,
            },
            TaskTemplate {
                id: "task-furniture-delivery",
                label_key: "task.furniture_delivery",
                requires_service: Some(ServiceKind::FurnishingDecor),
                critical: true,
            },
            TaskTemplate {
                id: "task-styling-decor",
                label_key: "task.styling_decor",
                requires_service: Some(ServiceKind::FurnishingDecor),
                critical: false,
            },
            TaskTemplate {
                id: "task-final-walkthrough",
                label_key: "task.final_walkthrough",
                requires_service: None,
                critical: true,
            },
        ],
    },
];

/// Week counts for the four core phases, roughly 20/20/30/30 of the tier
/// total.
pub fn phase_durations(tier: PricingTier) -> [u32; 4] {
    match tier {
        PricingTier::Budget => [2, 2, 3, 3],
        PricingTier::Standard => [3, 3, 4, 4],
        PricingTier::Premium => [4, 4, 6, 6],
    }
}

pub fn total_weeks(tier: PricingTier, is_renovation: bool) -> u32 {
    let core: u32 = phase_durations(tier).iter().sum();
    if is_renovation {
        core + RENOVATION_PREP_WEEKS
    } else {
        core
    }
}
