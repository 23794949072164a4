use serde::Serialize;

use crate::assumptions::{AssumptionKey, Assumptions};
use crate::engine::{build_business_case, maturity, BusinessCase, EngineError, Payback};
use crate::priority::PriorityRegistry;

#[derive(Debug, Clone, Serialize)]
pub struct AssumptionChange {
    pub key: AssumptionKey,
    pub from: f64,
    /// The value after clamping into the field's domain, which may differ
    /// from what was requested.
    pub to: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WhatIfResult {
    pub changes_applied: Vec<AssumptionChange>,
    pub before: BusinessCase,
    pub after: BusinessCase,
    pub annual_value_delta: f64,
    pub monthly_net_savings_delta: f64,
    pub payback_before: Payback,
    pub payback_after: Payback,
}

/// Recomputes the business case with a set of single-field changes applied
/// and reports the before/after difference. Changes are applied to a clone;
/// the input assumptions are untouched.
pub fn simulate_whatif(
    assumptions: &Assumptions,
    target_changes: &[(AssumptionKey, f64)],
    registry: &PriorityRegistry,
) -> Result<WhatIfResult, EngineError> {
    if target_changes.is_empty() {
        return Err(EngineError::InvalidInput(
            "at least one assumption change is required".to_string(),
        ));
    }

    let before = build_business_case(assumptions, registry)?;
    let mut changed = before.assumptions.clone();
    // Unset seeded hour figures read as the maturity baseline.
    let baseline_hours =
        maturity::hours_saved_per_person_per_week(changed.ai_maturity_level)?;

    let mut changes_applied = Vec::with_capacity(target_changes.len());
    for (key, to) in target_changes {
        let from = changed.numeric_assumption(*key).unwrap_or(baseline_hours);
        changed.apply_numeric_change(*key, *to);
        let effective = changed.numeric_assumption(*key).unwrap_or(*to);
        changes_applied.push(AssumptionChange {
            key: *key,
            from,
            to: effective,
        });
    }

    let after = build_business_case(&changed, registry)?;
    let annual_value_delta = after.summary.total_annual_value - before.summary.total_annual_value;
    let monthly_net_savings_delta =
        after.summary.monthly_net_savings - before.summary.monthly_net_savings;
    let payback_before = before.summary.payback;
    let payback_after = after.summary.payback;

    Ok(WhatIfResult {
        changes_applied,
        before,
        after,
        annual_value_delta,
        monthly_net_savings_delta,
        payback_before,
        payback_after,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::priority::PriorityKey;

    #[test]
    fn lowering_maturity_raises_throughput_value() {
        let registry = PriorityRegistry::with_defaults();
        let assumptions = Assumptions {
            selected_priorities: vec![PriorityKey::Throughput],
            ..Assumptions::default()
        };
        let result = simulate_whatif(
            &assumptions,
            &[(AssumptionKey::MaturityLevel, 1.0)],
            &registry,
        )
        .expect("whatif failed");
        // Default maturity is 3; level 1 has a higher hours baseline.
        assert!(result.annual_value_delta > 0.0);
        assert_eq!(result.changes_applied[0].from, 3.0);
        assert_eq!(result.changes_applied[0].to, 1.0);
    }

    #[test]
    fn empty_change_list_is_rejected() {
        let registry = PriorityRegistry::with_defaults();
        let result = simulate_whatif(&Assumptions::default(), &[], &registry);
        assert!(matches!(result, Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn input_assumptions_are_untouched() {
        let registry = PriorityRegistry::with_defaults();
        let assumptions = Assumptions::default();
        let snapshot = assumptions.clone();
        simulate_whatif(
            &assumptions,
            &[(AssumptionKey::Employees, 500.0)],
            &registry,
        )
        .expect("whatif failed");
        assert_eq!(assumptions, snapshot);
    }
}
