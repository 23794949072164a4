use crate::assumptions::{Assumptions, SharedContext};
use crate::engine::PriorityOutcome;
use crate::priority::throughput::WEEKS_PER_YEAR;
use crate::priority::{PriorityKey, PriorityModel};

#[derive(Debug, Clone, Copy)]
pub struct UpskillingModel;

impl PriorityModel for UpskillingModel {
    fn key(&self) -> PriorityKey {
        PriorityKey::Upskilling
    }

    fn label(&self) -> &'static str {
        "Upskilling / Competency coverage"
    }

    fn evaluate(&self, assumptions: &Assumptions, ctx: &SharedContext) -> PriorityOutcome {
        let params = &assumptions.upskilling;
        let coverage = params.coverage_pct / 100.0;
        let hours_per_week = params
            .hours_per_person_per_week
            .unwrap_or(ctx.baseline_hours_per_week);
        let hours_per_year = coverage * ctx.employees * hours_per_week * WEEKS_PER_YEAR;
        let annual_value = hours_per_year * ctx.hourly_rate * ctx.utilization;

        PriorityOutcome {
            priority: self.key(),
            hours_per_year: Some(hours_per_year),
            annual_value,
            rationale: format!(
                "{:.0}% competency coverage, {hours_per_week:.1}h per person/week",
                params.coverage_pct
            ),
            overlap_discounted: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_scales_the_reclaimed_hours() {
        let mut assumptions = Assumptions::default();
        assumptions.upskilling.coverage_pct = 50.0;
        assumptions.upskilling.hours_per_person_per_week = Some(2.0);
        let ctx = SharedContext {
            employees: 100.0,
            hourly_rate: 30.0,
            annual_salary: 62_400.0,
            utilization: 1.0,
            baseline_hours_per_week: 4.2,
        };
        let outcome = UpskillingModel.evaluate(&assumptions, &ctx);
        assert_eq!(outcome.hours_per_year, Some(0.5 * 100.0 * 2.0 * 52.0));
        assert_eq!(outcome.annual_value, 0.5 * 100.0 * 2.0 * 52.0 * 30.0);
    }
}
