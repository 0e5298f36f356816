use chrono::{Duration, NaiveDate};
use renoplan::{
    EnglishLabels, PricingTier, ScheduleAnchor, ServiceSelection, TimelinePhase, phase_state,
    schedule_timeline,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_phase() -> TimelinePhase {
    // Budget, no renovation: first phase spans weeks 1-2.
    let calc = schedule_timeline(
        PricingTier::Budget,
        false,
        &ServiceSelection::all(),
        ScheduleAnchor::StartDate(date(2025, 9, 1)),
        &EnglishLabels,
    );
    calc.phases[0].clone()
}

#[test]
fn active_exactly_between_start_and_end() {
    let phase = sample_phase();
    assert_eq!(phase.start_date, date(2025, 9, 1));
    assert_eq!(phase.end_date, date(2025, 9, 15));

    assert!(!phase_state(&phase, date(2025, 8, 31)).is_active);
    assert!(phase_state(&phase, date(2025, 9, 1)).is_active);
    assert!(phase_state(&phase, date(2025, 9, 10)).is_active);
    assert!(phase_state(&phase, date(2025, 9, 15)).is_active);
    assert!(!phase_state(&phase, date(2025, 9, 16)).is_active);
}

#[test]
fn urgency_starts_three_days_before_the_end() {
    let phase = sample_phase();
    let end = phase.end_date;

    assert!(!phase_state(&phase, end - Duration::days(4)).is_urgent);
    assert!(phase_state(&phase, end - Duration::days(3)).is_urgent);
    assert!(phase_state(&phase, end - Duration::days(1)).is_urgent);
    assert!(phase_state(&phase, end).is_urgent);
}

#[test]
fn urgency_persists_after_the_end_date() {
    let phase = sample_phase();
    let state = phase_state(&phase, phase.end_date + Duration::days(10));
    assert!(state.is_urgent);
    assert!(!state.is_active);
}

#[test]
fn at_most_one_phase_is_active_at_a_time() {
    let calc = schedule_timeline(
        PricingTier::Premium,
        true,
        &ServiceSelection::all(),
        ScheduleAnchor::StartDate(date(2025, 1, 6)),
        &EnglishLabels,
    );
    let mut day = calc.start_date + Duration::days(1);
    while day < calc.end_date {
        let active = calc
            .phases
            .iter()
            .filter(|phase| phase_state(phase, day).is_active)
            .count();
        // Shared boundary dates belong to both adjacent phases; interior days
        // to exactly one.
        assert!(active >= 1 && active <= 2, "{day}: {active} active phases");
        day = day + Duration::days(1);
    }
}
