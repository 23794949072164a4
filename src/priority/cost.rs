use crate::assumptions::{Assumptions, SharedContext};
use crate::engine::PriorityOutcome;
use crate::priority::{PriorityKey, PriorityModel};

/// Direct cost avoidance from tool consolidation. The only priority with no
/// hourly-rate or utilization dependency.
#[derive(Debug, Clone, Copy)]
pub struct CostModel;

impl PriorityModel for CostModel {
    fn key(&self) -> PriorityKey {
        PriorityKey::Cost
    }

    fn label(&self) -> &'static str {
        "Cost / Tool consolidation"
    }

    fn evaluate(&self, assumptions: &Assumptions, _ctx: &SharedContext) -> PriorityOutcome {
        let params = &assumptions.cost;
        let monthly = params.consolidation_savings_per_month
            + f64::from(params.eliminated_tool_count) * params.avg_tool_cost_per_month;
        let annual_value = monthly * 12.0;

        PriorityOutcome {
            priority: self.key(),
            hours_per_year: None,
            annual_value,
            rationale: format!(
                "{:.0}/month consolidation, {} tools eliminated at {:.0}/month each",
                params.consolidation_savings_per_month,
                params.eliminated_tool_count,
                params.avg_tool_cost_per_month
            ),
            overlap_discounted: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_savings_ignore_hourly_rate() {
        let mut assumptions = Assumptions::default();
        assumptions.cost.consolidation_savings_per_month = 500.0;
        assumptions.cost.eliminated_tool_count = 3;
        assumptions.cost.avg_tool_cost_per_month = 200.0;
        let ctx = SharedContext {
            employees: 150.0,
            hourly_rate: 0.0,
            annual_salary: 0.0,
            utilization: 0.0,
            baseline_hours_per_week: 4.2,
        };
        let outcome = CostModel.evaluate(&assumptions, &ctx);
        assert_eq!(outcome.annual_value, (500.0 + 600.0) * 12.0);
    }
}
