use crate::assumptions::{Assumptions, SharedContext};
use crate::engine::PriorityOutcome;
use crate::priority::{PriorityKey, PriorityModel};

#[derive(Debug, Clone, Copy)]
pub struct QualityModel;

impl PriorityModel for QualityModel {
    fn key(&self) -> PriorityKey {
        PriorityKey::Quality
    }

    fn label(&self) -> &'static str {
        "Quality / Rework reduction"
    }

    fn evaluate(&self, assumptions: &Assumptions, ctx: &SharedContext) -> PriorityOutcome {
        let params = &assumptions.quality;
        let avoided_events_per_year = params.rework_events_per_person_per_month
            * ctx.employees
            * 12.0
            * (params.reduction_pct / 100.0);
        let hours_per_year = avoided_events_per_year * params.hours_per_fix;
        let annual_value = hours_per_year * ctx.hourly_rate * ctx.utilization;

        PriorityOutcome {
            priority: self.key(),
            hours_per_year: Some(hours_per_year),
            annual_value,
            rationale: format!(
                "{:.1} rework events per person/month, {:.0}% reduction, {:.1}h per fix",
                params.rework_events_per_person_per_month,
                params.reduction_pct,
                params.hours_per_fix
            ),
            overlap_discounted: false,
        }
    }
}
