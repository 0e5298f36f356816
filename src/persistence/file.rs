use super::{PersistenceError, PersistenceResult};
use crate::calculations::timeline::{ScheduleAnchor, TimelineCalculation};
use crate::inputs::ProjectInputs;
use crate::labels::{EnglishLabels, LabelResolver};
use crate::metadata::ProjectMetadata;
use crate::pricing::PricingTier;
use crate::project::Project;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

#[derive(Serialize, Deserialize)]
pub(crate) struct ProjectSnapshot {
    metadata: ProjectMetadata,
    tier: PricingTier,
    inputs: ProjectInputs,
    anchor: ScheduleAnchor,
}

impl ProjectSnapshot {
    pub(crate) fn from_project(project: &Project) -> Self {
        Self {
            metadata: project.metadata().clone(),
            tier: project.tier(),
            inputs: project.inputs().clone(),
            anchor: project.anchor(),
        }
    }

    pub(crate) fn into_project(self) -> PersistenceResult<Project> {
        Project::from_parts(self.metadata, self.tier, self.inputs, self.anchor)
            .map_err(|err| PersistenceError::InvalidData(err.to_string()))
    }
}

pub fn save_project_to_json<P: AsRef<Path>>(project: &Project, path: P) -> PersistenceResult<()> {
    super::validate_project(project)?;
    let snapshot = ProjectSnapshot::from_project(project);
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &snapshot)?;
    Ok(())
}

pub fn load_project_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<Project> {
    let file = File::open(path)?;
    let snapshot: ProjectSnapshot = serde_json::from_reader(file)?;
    snapshot.into_project()
}

#[derive(Serialize)]
struct CostCsvRecord {
    group: String,
    category: &'static str,
    label: String,
    value: i64,
}

/// One-way spreadsheet export of the computed breakdown. Line items first,
/// then summary rows under a blank group so the file reads top to bottom.
pub fn export_cost_to_csv<P: AsRef<Path>>(project: &Project, path: P) -> PersistenceResult<()> {
    super::validate_project(project)?;
    let labels = EnglishLabels;
    let calc = project.cost_estimate();
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);

    for (group, items) in calc.grouped_line_items() {
        for item in items {
            writer.serialize(CostCsvRecord {
                group: labels.resolve(group.title_key()),
                category: item.category.as_str(),
                label: labels.resolve(item.label_key),
                value: item.value,
            })?;
        }
    }
    let summary_row = |category: &'static str, value: i64| CostCsvRecord {
        group: String::new(),
        category,
        label: String::new(),
        value,
    };
    writer.serialize(summary_row("subtotal", calc.subtotal))?;
    if calc.urgency_surcharge > 0 {
        writer.serialize(summary_row("urgency_surcharge", calc.urgency_surcharge))?;
    }
    writer.serialize(summary_row("total", calc.total))?;
    writer.serialize(summary_row("low_estimate", calc.low_estimate))?;
    writer.serialize(summary_row("high_estimate", calc.high_estimate))?;
    writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct TimelineCsvRecord {
    phase_id: String,
    phase_title: String,
    week_start: u32,
    week_end: u32,
    start_date: String,
    end_date: String,
    task_id: String,
    task_label: String,
    critical: String,
}

fn timeline_rows(timeline: &TimelineCalculation) -> Vec<TimelineCsvRecord> {
    let mut rows = Vec::new();
    for phase in &timeline.phases {
        if phase.tasks.is_empty() {
            rows.push(TimelineCsvRecord {
                phase_id: phase.id.clone(),
                phase_title: phase.title.clone(),
                week_start: phase.week_start,
                week_end: phase.week_end,
                start_date: phase.start_date.format("%Y-%m-%d").to_string(),
                end_date: phase.end_date.format("%Y-%m-%d").to_string(),
                task_id: String::new(),
                task_label: String::new(),
                critical: String::new(),
            });
            continue;
        }
        for task in &phase.tasks {
            rows.push(TimelineCsvRecord {
                phase_id: phase.id.clone(),
                phase_title: phase.title.clone(),
                week_start: phase.week_start,
                week_end: phase.week_end,
                start_date: phase.start_date.format("%Y-%m-%d").to_string(),
                end_date: phase.end_date.format("%Y-%m-%d").to_string(),
                task_id: task.id.clone(),
                task_label: task.label.clone(),
                critical: task.critical.to_string(),
            });
        }
    }
    rows
}

/// One row per task (or one row per empty phase), phases in schedule order.
pub fn export_timeline_to_csv<P: AsRef<Path>>(
    project: &Project,
    labels: &dyn LabelResolver,
    path: P,
) -> PersistenceResult<()> {
    super::validate_project(project)?;
    let timeline = project.timeline(labels);
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    for row in timeline_rows(&timeline) {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
