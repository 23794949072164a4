use crate::assumptions::{Assumptions, SharedContext};
use crate::engine::PriorityOutcome;
use crate::priority::{PriorityKey, PriorityModel};

pub const WEEKS_PER_YEAR: f64 = 52.0;

#[derive(Debug, Clone, Copy)]
pub struct ThroughputModel;

impl PriorityModel for ThroughputModel {
    fn key(&self) -> PriorityKey {
        PriorityKey::Throughput
    }

    fn label(&self) -> &'static str {
        "Throughput / Cycle time"
    }

    fn evaluate(&self, assumptions: &Assumptions, ctx: &SharedContext) -> PriorityOutcome {
        let hours_per_week = assumptions
            .throughput
            .hours_per_person_per_week
            .unwrap_or(ctx.baseline_hours_per_week);
        let hours_per_year = hours_per_week * WEEKS_PER_YEAR * ctx.employees;
        let annual_value = hours_per_year * ctx.hourly_rate * ctx.utilization;

        PriorityOutcome {
            priority: self.key(),
            hours_per_year: Some(hours_per_year),
            annual_value,
            rationale: format!(
                "{hours_per_week:.1}h saved per person/week, {} employees, {:.0}% utilization",
                assumptions.employees_in_scope,
                ctx.utilization * 100.0
            ),
            overlap_discounted: false,
        }
    }
}
