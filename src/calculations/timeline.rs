//! Timeline Scheduling Engine. Walks the static phase templates for a tier,
//! pins them to calendar dates from a single anchor, and filters tasks by the
//! selected services. Pure: the clock is never read, only injected into the
//! separate phase-state derivation.

use crate::inputs::ServiceSelection;
use crate::labels::LabelResolver;
use crate::phases::{
    CORE_PHASES, PREP_PHASE, PhaseTemplate, RENOVATION_PREP_WEEKS, ServiceKind, phase_durations,
};
use crate::pricing::PricingTier;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A phase is flagged urgent from this many days before its end date.
pub const URGENCY_WINDOW_DAYS: i64 = 3;

/// The single date the whole schedule hangs on. Exactly one mode per
/// calculation: forward from a start date, or backward from a move-in date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleAnchor {
    StartDate(NaiveDate),
    MoveInDate(NaiveDate),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineTask {
    pub id: String,
    pub label_key: String,
    pub label: String,
    pub requires_service: Option<ServiceKind>,
    pub critical: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePhase {
    pub id: String,
    pub title: String,
    pub site_status: String,
    /// 1-based inclusive week range within the project.
    pub week_start: u32,
    pub week_end: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub tasks: Vec<TimelineTask>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineCalculation {
    pub tier: PricingTier,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_weeks: u32,
    pub phases: Vec<TimelinePhase>,
}

/// View over wall-clock time; derived fresh per call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseState {
    pub is_active: bool,
    pub is_urgent: bool,
}

pub fn schedule_timeline(
    tier: PricingTier,
    is_renovation: bool,
    services: &ServiceSelection,
    anchor: ScheduleAnchor,
    labels: &dyn LabelResolver,
) -> TimelineCalculation {
    let durations = phase_durations(tier);
    let mut templates: Vec<(&PhaseTemplate, u32)> = Vec::with_capacity(5);
    if is_renovation {
        templates.push((&PREP_PHASE, RENOVATION_PREP_WEEKS));
    }
    for (template, weeks) in CORE_PHASES.iter().zip(durations) {
        templates.push((template, weeks));
    }

    let total_weeks: u32 = templates.iter().map(|(_, weeks)| *weeks).sum();

    let start_date = match anchor {
        ScheduleAnchor::StartDate(date) => date,
        ScheduleAnchor::MoveInDate(date) => date - Duration::weeks(i64::from(total_weeks)),
    };
    let end_date = start_date + Duration::weeks(i64::from(total_weeks));

    let mut phases = Vec::with_capacity(templates.len());
    let mut elapsed_weeks: u32 = 0;
    for (template, weeks) in templates {
        let tasks = template
            .tasks
            .iter()
            .filter(|task| {
                task.requires_service
                    .map_or(true, |service| service.is_enabled(services))
            })
            .map(|task| TimelineTask {
                id: task.id.to_string(),
                label_key: task.label_key.to_string(),
                label: labels.resolve(task.label_key),
                requires_service: task.requires_service,
                critical: task.critical,
            })
            .collect();

        phases.push(TimelinePhase {
            id: template.id.to_string(),
            title: labels.resolve(template.title_key),
            site_status: labels.resolve(template.status_key),
            week_start: elapsed_weeks + 1,
            week_end: elapsed_weeks + weeks,
            start_date: start_date + Duration::weeks(i64::from(elapsed_weeks)),
            end_date: start_date + Duration::weeks(i64::from(elapsed_weeks + weeks)),
            tasks,
        });
        elapsed_weeks += weeks;
    }

    TimelineCalculation {
        tier,
        start_date,
        end_date,
        total_weeks,
        phases,
    }
}

/// Derive the active/urgent flags for one phase against an injected "now".
/// `is_urgent` stays true after the phase end until someone marks the work
/// done in whatever layer tracks completion.
pub fn phase_state(phase: &TimelinePhase, now: NaiveDate) -> PhaseState {
    PhaseState {
        is_active: now >= phase.start_date && now <= phase.end_date,
        is_urgent: now >= phase.end_date - Duration::days(URGENCY_WINDOW_DAYS),
    }
}
