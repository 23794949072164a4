use casebuilder::assumptions::Assumptions;
use casebuilder::engine::{build_business_case, EngineError, Payback};
use casebuilder::priority::{PriorityKey, PriorityRegistry};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

fn with_priorities(priorities: Vec<PriorityKey>) -> Assumptions {
    Assumptions {
        selected_priorities: priorities,
        ..Assumptions::default()
    }
}

#[test]
fn baseline_throughput_scenario() {
    // 25 people at maturity level 3 (4.2h/week), 50/h rate, 70% utilization:
    // 4.2 * 52 * 25 * 50 * 0.7 = 191,100 per year.
    let registry = PriorityRegistry::with_defaults();
    let assumptions = Assumptions {
        employees_in_scope: 25,
        hourly_rate_override: Some(50.0),
        ai_maturity_level: 3,
        utilization_pct: 70.0,
        selected_priorities: vec![PriorityKey::Throughput],
        ..Assumptions::default()
    };
    let case = build_business_case(&assumptions, &registry).expect("build failed");
    assert_eq!(case.outcomes.len(), 1);
    assert_close(case.outcomes[0].annual_value, 191_100.0);
    assert_close(case.summary.total_annual_value, 191_100.0);
}

#[test]
fn higher_maturity_never_increases_throughput_value() {
    let registry = PriorityRegistry::with_defaults();
    let mut previous = f64::INFINITY;
    for level in 1..=10u8 {
        let assumptions = Assumptions {
            ai_maturity_level: level,
            selected_priorities: vec![PriorityKey::Throughput],
            ..Assumptions::default()
        };
        let case = build_business_case(&assumptions, &registry).expect("build failed");
        let value = case.summary.total_annual_value;
        assert!(
            value <= previous,
            "value rose from level {} to {level}",
            level - 1
        );
        assert!(value > 0.0);
        previous = value;
    }
}

#[test]
fn totals_are_additive_without_the_overlap_pair() {
    let registry = PriorityRegistry::with_defaults();
    let combined = build_business_case(
        &with_priorities(vec![
            PriorityKey::Quality,
            PriorityKey::Retention,
            PriorityKey::Cost,
        ]),
        &registry,
    )
    .expect("build failed");

    let mut summed = 0.0;
    for key in [PriorityKey::Quality, PriorityKey::Retention, PriorityKey::Cost] {
        let single = build_business_case(&with_priorities(vec![key]), &registry)
            .expect("build failed");
        summed += single.summary.total_annual_value;
    }
    assert_close(combined.summary.total_annual_value, summed);
}

#[test]
fn upskilling_is_discounted_exactly_once_next_to_throughput() {
    let registry = PriorityRegistry::with_defaults();
    let standalone = build_business_case(
        &with_priorities(vec![PriorityKey::Upskilling]),
        &registry,
    )
    .expect("build failed");
    let standalone_value = standalone.summary.total_annual_value;

    let paired = build_business_case(
        &with_priorities(vec![PriorityKey::Throughput, PriorityKey::Upskilling]),
        &registry,
    )
    .expect("build failed");
    let upskilling = paired
        .outcomes
        .iter()
        .find(|o| o.priority == PriorityKey::Upskilling)
        .expect("upskilling outcome missing");
    assert!(upskilling.overlap_discounted);
    assert_close(upskilling.annual_value, standalone_value * 0.7);

    let throughput = paired
        .outcomes
        .iter()
        .find(|o| o.priority == PriorityKey::Throughput)
        .expect("throughput outcome missing");
    assert!(!throughput.overlap_discounted);
}

#[test]
fn hostile_inputs_never_produce_negative_or_non_finite_output() {
    let registry = PriorityRegistry::with_defaults();
    let mut assumptions = Assumptions {
        average_annual_salary: -50_000.0,
        utilization_pct: f64::NAN,
        training_cost_per_employee: f64::INFINITY,
        program_one_off_cost: -10_000.0,
        selected_priorities: vec![
            PriorityKey::Throughput,
            PriorityKey::Onboarding,
            PriorityKey::Retention,
        ],
        ..Assumptions::default()
    };
    // A regression that produces negative ramp savings.
    assumptions.onboarding.improved_ramp_months = 12.0;
    assumptions.onboarding.baseline_ramp_months = 3.0;

    let case = build_business_case(&assumptions, &registry).expect("build failed");
    for outcome in &case.outcomes {
        assert!(outcome.annual_value >= 0.0, "{:?}", outcome.priority);
        assert!(outcome.annual_value.is_finite());
        if let Some(hours) = outcome.hours_per_year {
            assert!(hours >= 0.0 && hours.is_finite());
        }
    }
    let summary = &case.summary;
    for value in [
        summary.total_annual_value,
        summary.total_hours_per_year,
        summary.monthly_savings,
        summary.program_cost,
        summary.monthly_amortized_cost,
        summary.monthly_net_savings,
        summary.annual_roi_multiple,
    ] {
        assert!(value >= 0.0 && value.is_finite());
    }
}

#[test]
fn duplicated_priority_contributes_exactly_once() {
    let registry = PriorityRegistry::with_defaults();
    // Non-adjacent repeat: adjacent-only dedup would count throughput twice.
    let with_repeat = build_business_case(
        &with_priorities(vec![
            PriorityKey::Throughput,
            PriorityKey::Quality,
            PriorityKey::Throughput,
        ]),
        &registry,
    )
    .expect("build failed");
    let without_repeat = build_business_case(
        &with_priorities(vec![PriorityKey::Throughput, PriorityKey::Quality]),
        &registry,
    )
    .expect("build failed");

    assert_eq!(with_repeat.outcomes.len(), 2);
    assert_close(
        with_repeat.summary.total_annual_value,
        without_repeat.summary.total_annual_value,
    );
}

#[test]
fn duplicates_are_dropped_before_the_cap_applies() {
    let registry = PriorityRegistry::with_defaults();
    // Four entries, three distinct: dedups under the cap instead of erroring.
    let case = build_business_case(
        &with_priorities(vec![
            PriorityKey::Throughput,
            PriorityKey::Quality,
            PriorityKey::Onboarding,
            PriorityKey::Quality,
        ]),
        &registry,
    )
    .expect("build failed");
    assert_eq!(case.outcomes.len(), 3);
}

#[test]
fn identical_assumptions_produce_identical_results() {
    let registry = PriorityRegistry::with_defaults();
    let assumptions = Assumptions::default();
    let first = build_business_case(&assumptions, &registry).expect("build failed");
    let second = build_business_case(&assumptions, &registry).expect("build failed");
    assert_eq!(first.summary, second.summary);
    assert_eq!(first.outcomes, second.outcomes);
}

#[test]
fn selecting_more_than_three_priorities_is_rejected() {
    let registry = PriorityRegistry::with_defaults();
    let result = build_business_case(
        &with_priorities(vec![
            PriorityKey::Throughput,
            PriorityKey::Quality,
            PriorityKey::Onboarding,
            PriorityKey::Retention,
        ]),
        &registry,
    );
    assert!(matches!(result, Err(EngineError::InvalidInput(_))));
}

#[test]
fn no_selected_priorities_yields_an_empty_case() {
    let registry = PriorityRegistry::with_defaults();
    let case = build_business_case(&with_priorities(Vec::new()), &registry).expect("build failed");
    assert!(case.outcomes.is_empty());
    assert_eq!(case.summary.total_annual_value, 0.0);
    assert_eq!(case.summary.payback, Payback::NotReached);
    assert_eq!(case.summary.annual_roi_multiple, 0.0);
}
