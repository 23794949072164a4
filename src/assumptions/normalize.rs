use crate::assumptions::Assumptions;
use crate::priority::PriorityKey;

/// Replaces NaN/infinite input with 0.0 before clamping. `f64::clamp`
/// propagates NaN, so the sanitize step must come first.
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

pub fn normalize_percent(value: f64) -> f64 {
    sanitize(value).clamp(0.0, 100.0)
}

pub fn normalize_ratio(value: f64) -> f64 {
    sanitize(value).clamp(0.0, 1.0)
}

pub fn normalize_non_negative(value: f64) -> f64 {
    sanitize(value).max(0.0)
}

/// Clamps every numeric assumption into its defined domain. Negative or
/// non-finite raw input never reaches the engine arithmetic.
pub fn normalize_assumptions(assumptions: &mut Assumptions) {
    assumptions.average_annual_salary = normalize_non_negative(assumptions.average_annual_salary);
    assumptions.hourly_rate_override = assumptions.hourly_rate_override.map(normalize_non_negative);
    assumptions.utilization_pct = normalize_percent(assumptions.utilization_pct);
    assumptions.training_cost_per_employee =
        normalize_non_negative(assumptions.training_cost_per_employee);
    assumptions.training_hours_per_employee =
        normalize_non_negative(assumptions.training_hours_per_employee);
    assumptions.program_one_off_cost = normalize_non_negative(assumptions.program_one_off_cost);

    let throughput = &mut assumptions.throughput;
    throughput.hours_per_person_per_week =
        throughput.hours_per_person_per_week.map(normalize_non_negative);

    let quality = &mut assumptions.quality;
    quality.rework_events_per_person_per_month =
        normalize_non_negative(quality.rework_events_per_person_per_month);
    quality.reduction_pct = normalize_percent(quality.reduction_pct);
    quality.hours_per_fix = normalize_non_negative(quality.hours_per_fix);

    let onboarding = &mut assumptions.onboarding;
    onboarding.hires_per_year = normalize_non_negative(onboarding.hires_per_year);
    onboarding.baseline_ramp_months = normalize_non_negative(onboarding.baseline_ramp_months);
    onboarding.improved_ramp_months = normalize_non_negative(onboarding.improved_ramp_months);

    let retention = &mut assumptions.retention;
    retention.baseline_turnover_pct = normalize_percent(retention.baseline_turnover_pct);
    retention.reduction_pct = normalize_percent(retention.reduction_pct);
    retention.replacement_cost_pct_of_salary =
        normalize_non_negative(retention.replacement_cost_pct_of_salary);

    let cost = &mut assumptions.cost;
    cost.consolidation_savings_per_month =
        normalize_non_negative(cost.consolidation_savings_per_month);
    cost.avg_tool_cost_per_month = normalize_non_negative(cost.avg_tool_cost_per_month);

    let upskilling = &mut assumptions.upskilling;
    upskilling.coverage_pct = normalize_percent(upskilling.coverage_pct);
    upskilling.hours_per_person_per_week =
        upskilling.hours_per_person_per_week.map(normalize_non_negative);

    dedup_priorities(&mut assumptions.selected_priorities);
}

/// Keeps the first occurrence of each priority, wherever the repeats sit in
/// the list. `Vec::dedup` only folds adjacent runs, which would let
/// `[throughput, quality, throughput]` count throughput twice.
pub fn dedup_priorities(priorities: &mut Vec<PriorityKey>) {
    let mut seen = Vec::with_capacity(priorities.len());
    priorities.retain(|key| {
        if seen.contains(key) {
            false
        } else {
            seen.push(*key);
            true
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_rejects_non_finite() {
        assert_eq!(sanitize(f64::NAN), 0.0);
        assert_eq!(sanitize(f64::INFINITY), 0.0);
        assert_eq!(sanitize(f64::NEG_INFINITY), 0.0);
        assert_eq!(sanitize(3.5), 3.5);
    }

    #[test]
    fn percent_clamps_both_ends() {
        assert_eq!(normalize_percent(-10.0), 0.0);
        assert_eq!(normalize_percent(250.0), 100.0);
        assert_eq!(normalize_percent(70.0), 70.0);
    }

    #[test]
    fn non_adjacent_duplicate_priorities_are_dropped() {
        let mut priorities = vec![
            PriorityKey::Throughput,
            PriorityKey::Quality,
            PriorityKey::Throughput,
            PriorityKey::Quality,
        ];
        dedup_priorities(&mut priorities);
        assert_eq!(
            priorities,
            vec![PriorityKey::Throughput, PriorityKey::Quality]
        );
    }

    #[test]
    fn negative_inputs_never_survive_normalization() {
        let mut assumptions = Assumptions {
            average_annual_salary: -52_000.0,
            utilization_pct: -30.0,
            ..Assumptions::default()
        };
        assumptions.quality.reduction_pct = 180.0;
        normalize_assumptions(&mut assumptions);
        assert_eq!(assumptions.average_annual_salary, 0.0);
        assert_eq!(assumptions.utilization_pct, 0.0);
        assert_eq!(assumptions.quality.reduction_pct, 100.0);
    }
}
