use crate::assumptions::{Assumptions, SharedContext};
use crate::engine::PriorityOutcome;
use crate::priority::{PriorityKey, PriorityModel};

#[derive(Debug, Clone, Copy)]
pub struct RetentionModel;

impl PriorityModel for RetentionModel {
    fn key(&self) -> PriorityKey {
        PriorityKey::Retention
    }

    fn label(&self) -> &'static str {
        "Retention"
    }

    fn evaluate(&self, assumptions: &Assumptions, ctx: &SharedContext) -> PriorityOutcome {
        let params = &assumptions.retention;
        let avoided_leavers = ctx.employees
            * (params.baseline_turnover_pct / 100.0)
            * (params.reduction_pct / 100.0);
        let replacement_cost =
            ctx.annual_salary * (params.replacement_cost_pct_of_salary / 100.0);
        let annual_value = avoided_leavers * replacement_cost;

        PriorityOutcome {
            priority: self.key(),
            hours_per_year: None,
            annual_value,
            rationale: format!(
                "{:.0}% baseline turnover, {:.0}% reduction, replacement cost {:.0}% of salary",
                params.baseline_turnover_pct,
                params.reduction_pct,
                params.replacement_cost_pct_of_salary
            ),
            overlap_discounted: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avoided_leavers_times_replacement_cost() {
        let mut assumptions = Assumptions::default();
        assumptions.retention.baseline_turnover_pct = 20.0;
        assumptions.retention.reduction_pct = 10.0;
        assumptions.retention.replacement_cost_pct_of_salary = 50.0;
        let ctx = SharedContext {
            employees: 150.0,
            hourly_rate: 25.0,
            annual_salary: 52_000.0,
            utilization: 0.7,
            baseline_hours_per_week: 4.2,
        };
        let outcome = RetentionModel.evaluate(&assumptions, &ctx);
        // 150 * 0.2 * 0.1 = 3 avoided leavers, 26,000 each
        assert_eq!(outcome.annual_value, 3.0 * 26_000.0);
    }
}
