use chrono::NaiveDate;
use renoplan::{
    EnglishLabels, PricingTier, Project, ProjectInputs, ProjectMetadata, ScheduleAnchor,
    export_cost_to_csv, export_timeline_to_csv, load_project_from_json, save_project_to_json,
};
use tempfile::tempdir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_project() -> Project {
    let mut inputs = ProjectInputs::default();
    inputs.area = 85.0;
    inputs.is_renovation = true;
    Project::from_parts(
        ProjectMetadata {
            project_name: "Maple Street flat".to_string(),
            project_description: "Two-bedroom refresh".to_string(),
        },
        PricingTier::Premium,
        inputs,
        ScheduleAnchor::MoveInDate(date(2026, 6, 1)),
    )
    .unwrap()
}

#[test]
fn project_round_trips_through_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("project.json");

    let project = sample_project();
    save_project_to_json(&project, &path).unwrap();
    let loaded = load_project_from_json(&path).unwrap();

    assert_eq!(loaded, project);
    assert_eq!(loaded.cost_estimate(), project.cost_estimate());
}

#[test]
fn loading_rejects_corrupt_numeric_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("project.json");

    let raw = serde_json::json!({
        "metadata": { "project_name": "X", "project_description": "Y" },
        "tier": "standard",
        "inputs": {
            "area": -12.0,
            "adults": 2,
            "children": 0,
            "is_renovation": false,
            "is_urgent": false,
            "services": {
                "space_planning": true,
                "interior_finishes": true,
                "furnishing_decor": true
            },
            "kitchen_length": 3.0,
            "wardrobe_length": 2.0
        },
        "anchor": { "start_date": "2025-01-01" }
    });
    std::fs::write(&path, serde_json::to_vec(&raw).unwrap()).unwrap();

    assert!(load_project_from_json(&path).is_err());
}

#[test]
fn anchor_uses_tagged_snake_case_encoding() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("project.json");

    let project = sample_project();
    save_project_to_json(&project, &path).unwrap();
    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(raw["tier"], "premium");
    assert_eq!(raw["anchor"]["move_in_date"], "2026-06-01");
}

#[test]
fn cost_csv_lists_items_then_summary_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("costs.csv");

    let project = sample_project();
    export_cost_to_csv(&project, &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines[0], "group,category,label,value");
    assert!(content.contains("interior_design"));
    assert!(content.contains("renovation_prep"));
    assert!(content.contains("subtotal"));
    assert!(content.contains("low_estimate"));
    assert!(content.contains("high_estimate"));

    let calc = project.cost_estimate();
    assert!(content.contains(&format!("total,,{}", calc.total)));
    // Not urgent, so no surcharge row.
    assert!(!content.contains("urgency_surcharge"));
}

#[test]
fn cost_csv_includes_surcharge_row_when_urgent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("costs.csv");

    let mut project = sample_project();
    project
        .update_inputs_with(|inputs| inputs.is_urgent = true)
        .unwrap();
    export_cost_to_csv(&project, &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    let calc = project.cost_estimate();
    assert!(content.contains(&format!("urgency_surcharge,,{}", calc.urgency_surcharge)));
}

#[test]
fn timeline_csv_has_one_row_per_task() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("timeline.csv");

    let project = sample_project();
    export_timeline_to_csv(&project, &EnglishLabels, &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    let timeline = project.timeline(&EnglishLabels);
    let task_count: usize = timeline.phases.iter().map(|phase| phase.tasks.len()).sum();
    // Header plus one row per task; every phase here has tasks.
    assert_eq!(lines.len(), task_count + 1);
    assert!(lines[0].starts_with("phase_id,phase_title,week_start,week_end"));
    assert!(content.contains("task-demolition"));
    assert!(content.contains("task-final-walkthrough"));
}
