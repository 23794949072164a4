pub mod normalize;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::priority::PriorityKey;

/// Standard work year used to derive an hourly rate from an annual salary:
/// 52 weeks x 40 hours.
pub const WORK_HOURS_PER_YEAR: f64 = 2080.0;

/// A business case is focused on a handful of levers at a time.
pub const MAX_SELECTED_PRIORITIES: usize = 3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Currency {
    #[default]
    Eur,
    Usd,
    Gbp,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Eur => "€",
            Self::Usd => "$",
            Self::Gbp => "£",
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Gbp => "GBP",
        };
        write!(f, "{code}")
    }
}

#[derive(Debug, Error)]
#[error("unknown currency: {0}")]
pub struct CurrencyParseError(pub String);

impl FromStr for Currency {
    type Err = CurrencyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "eur" | "euro" | "€" => Ok(Self::Eur),
            "usd" | "dollar" | "$" => Ok(Self::Usd),
            "gbp" | "pound" | "£" => Ok(Self::Gbp),
            _ => Err(CurrencyParseError(s.to_string())),
        }
    }
}

/// Presentation label only; the engine arithmetic never branches on it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    #[default]
    CompanyWide,
    Marketing,
    Sales,
    CustomerSupport,
    Operations,
    Engineering,
    Hr,
}

impl Display for Department {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::CompanyWide => "Company-wide",
            Self::Marketing => "Marketing",
            Self::Sales => "Sales",
            Self::CustomerSupport => "Customer Support",
            Self::Operations => "Operations",
            Self::Engineering => "Engineering",
            Self::Hr => "HR",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Error)]
#[error("unknown department: {0}")]
pub struct DepartmentParseError(pub String);

impl FromStr for Department {
    type Err = DepartmentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "company_wide" | "all" => Ok(Self::CompanyWide),
            "marketing" => Ok(Self::Marketing),
            "sales" => Ok(Self::Sales),
            "customer_support" | "support" => Ok(Self::CustomerSupport),
            "operations" | "ops" => Ok(Self::Operations),
            "engineering" => Ok(Self::Engineering),
            "hr" | "people" => Ok(Self::Hr),
            _ => Err(DepartmentParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThroughputParams {
    /// Hours reclaimed per person per week. `None` seeds the figure from the
    /// maturity curve.
    #[serde(default)]
    pub hours_per_person_per_week: Option<f64>,
}

impl Default for ThroughputParams {
    fn default() -> Self {
        Self {
            hours_per_person_per_week: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QualityParams {
    pub rework_events_per_person_per_month: f64,
    pub reduction_pct: f64,
    pub hours_per_fix: f64,
}

impl Default for QualityParams {
    fn default() -> Self {
        Self {
            rework_events_per_person_per_month: 3.0,
            reduction_pct: 20.0,
            hours_per_fix: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OnboardingParams {
    pub hires_per_year: f64,
    pub baseline_ramp_months: f64,
    pub improved_ramp_months: f64,
}

impl Default for OnboardingParams {
    fn default() -> Self {
        Self {
            hires_per_year: 24.0,
            baseline_ramp_months: 3.0,
            improved_ramp_months: 2.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RetentionParams {
    pub baseline_turnover_pct: f64,
    pub reduction_pct: f64,
    /// Replacement cost expressed as a percentage of annual salary.
    pub replacement_cost_pct_of_salary: f64,
}

impl Default for RetentionParams {
    fn default() -> Self {
        Self {
            baseline_turnover_pct: 20.0,
            reduction_pct: 10.0,
            replacement_cost_pct_of_salary: 50.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostParams {
    pub consolidation_savings_per_month: f64,
    pub eliminated_tool_count: u32,
    pub avg_tool_cost_per_month: f64,
}

impl Default for CostParams {
    fn default() -> Self {
        Self {
            consolidation_savings_per_month: 0.0,
            eliminated_tool_count: 0,
            avg_tool_cost_per_month: 200.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpskillingParams {
    /// Share of the workforce expected to reach the target competency level.
    pub coverage_pct: f64,
    /// `None` seeds from the maturity curve, like throughput.
    #[serde(default)]
    pub hours_per_person_per_week: Option<f64>,
}

impl Default for UpskillingParams {
    fn default() -> Self {
        Self {
            coverage_pct: 40.0,
            hours_per_person_per_week: None,
        }
    }
}

/// One immutable snapshot of everything the engine needs. The CLI and server
/// build it from config plus overrides, normalize it, and hand it to the
/// engine; the engine never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assumptions {
    pub department: Department,
    pub employees_in_scope: u32,
    pub currency: Currency,
    pub average_annual_salary: f64,
    /// When set, takes precedence over the salary-derived rate.
    #[serde(default)]
    pub hourly_rate_override: Option<f64>,
    pub ai_maturity_level: u8,
    /// Realization discount on theoretical time savings, in percent.
    pub utilization_pct: f64,
    pub selected_priorities: Vec<PriorityKey>,
    #[serde(default)]
    pub throughput: ThroughputParams,
    #[serde(default)]
    pub quality: QualityParams,
    #[serde(default)]
    pub onboarding: OnboardingParams,
    #[serde(default)]
    pub retention: RetentionParams,
    #[serde(default)]
    pub cost: CostParams,
    #[serde(default)]
    pub upskilling: UpskillingParams,
    pub training_cost_per_employee: f64,
    /// Opportunity cost: time spent in training, valued at the hourly rate.
    pub training_hours_per_employee: f64,
    pub program_one_off_cost: f64,
    pub amortization_months: u32,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            department: Department::CompanyWide,
            employees_in_scope: 25,
            currency: Currency::Eur,
            average_annual_salary: 52_000.0,
            hourly_rate_override: None,
            ai_maturity_level: 3,
            utilization_pct: 70.0,
            selected_priorities: vec![
                PriorityKey::Throughput,
                PriorityKey::Quality,
                PriorityKey::Onboarding,
            ],
            throughput: ThroughputParams::default(),
            quality: QualityParams::default(),
            onboarding: OnboardingParams::default(),
            retention: RetentionParams::default(),
            cost: CostParams::default(),
            upskilling: UpskillingParams::default(),
            training_cost_per_employee: 300.0,
            training_hours_per_employee: 8.0,
            program_one_off_cost: 2_000.0,
            amortization_months: 12,
        }
    }
}

impl Assumptions {
    pub fn hourly_rate(&self) -> f64 {
        match self.hourly_rate_override {
            Some(rate) => rate,
            None => self.average_annual_salary / WORK_HOURS_PER_YEAR,
        }
    }

    pub fn is_selected(&self, key: PriorityKey) -> bool {
        self.selected_priorities.contains(&key)
    }

    /// Effective numeric value for a what-if change. Returns `None` for the
    /// seeded hour figures when they are unset; the caller substitutes the
    /// maturity baseline.
    pub fn numeric_assumption(&self, key: AssumptionKey) -> Option<f64> {
        let value = match key {
            AssumptionKey::Employees => f64::from(self.employees_in_scope),
            AssumptionKey::AnnualSalary => self.average_annual_salary,
            AssumptionKey::HourlyRate => self.hourly_rate(),
            AssumptionKey::MaturityLevel => f64::from(self.ai_maturity_level),
            AssumptionKey::UtilizationPct => self.utilization_pct,
            AssumptionKey::TrainingCostPerEmployee => self.training_cost_per_employee,
            AssumptionKey::TrainingHoursPerEmployee => self.training_hours_per_employee,
            AssumptionKey::ProgramOneOffCost => self.program_one_off_cost,
            AssumptionKey::AmortizationMonths => f64::from(self.amortization_months),
            AssumptionKey::ThroughputHoursPerWeek => {
                return self.throughput.hours_per_person_per_week
            }
            AssumptionKey::UpskillingCoveragePct => self.upskilling.coverage_pct,
            AssumptionKey::UpskillingHoursPerWeek => {
                return self.upskilling.hours_per_person_per_week
            }
        };
        Some(value)
    }

    /// Applies a numeric change in place, clamping into the field's domain.
    pub fn apply_numeric_change(&mut self, key: AssumptionKey, to: f64) {
        let to = normalize::sanitize(to);
        match key {
            AssumptionKey::Employees => {
                self.employees_in_scope = to.max(0.0).round() as u32;
            }
            AssumptionKey::AnnualSalary => self.average_annual_salary = to.max(0.0),
            AssumptionKey::HourlyRate => self.hourly_rate_override = Some(to.max(0.0)),
            AssumptionKey::MaturityLevel => {
                self.ai_maturity_level = to.round().clamp(1.0, 10.0) as u8;
            }
            AssumptionKey::UtilizationPct => self.utilization_pct = to.clamp(0.0, 100.0),
            AssumptionKey::TrainingCostPerEmployee => {
                self.training_cost_per_employee = to.max(0.0);
            }
            AssumptionKey::TrainingHoursPerEmployee => {
                self.training_hours_per_employee = to.max(0.0);
            }
            AssumptionKey::ProgramOneOffCost => self.program_one_off_cost = to.max(0.0),
            AssumptionKey::AmortizationMonths => {
                self.amortization_months = to.max(0.0).round() as u32;
            }
            AssumptionKey::ThroughputHoursPerWeek => {
                self.throughput.hours_per_person_per_week = Some(to.max(0.0));
            }
            AssumptionKey::UpskillingCoveragePct => {
                self.upskilling.coverage_pct = to.clamp(0.0, 100.0);
            }
            AssumptionKey::UpskillingHoursPerWeek => {
                self.upskilling.hours_per_person_per_week = Some(to.max(0.0));
            }
        }
    }
}

/// Shared inputs every priority calculator reads, derived once per
/// calculation from validated assumptions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SharedContext {
    pub employees: f64,
    pub hourly_rate: f64,
    pub annual_salary: f64,
    /// Utilization as a ratio in [0, 1].
    pub utilization: f64,
    /// Hours saved per person per week at the current maturity level.
    pub baseline_hours_per_week: f64,
}

/// Numeric assumptions addressable from the what-if surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AssumptionKey {
    Employees,
    AnnualSalary,
    HourlyRate,
    MaturityLevel,
    UtilizationPct,
    TrainingCostPerEmployee,
    TrainingHoursPerEmployee,
    ProgramOneOffCost,
    AmortizationMonths,
    ThroughputHoursPerWeek,
    UpskillingCoveragePct,
    UpskillingHoursPerWeek,
}

impl Display for AssumptionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Employees => "employees",
            Self::AnnualSalary => "annual_salary",
            Self::HourlyRate => "hourly_rate",
            Self::MaturityLevel => "maturity_level",
            Self::UtilizationPct => "utilization_pct",
            Self::TrainingCostPerEmployee => "training_cost_per_employee",
            Self::TrainingHoursPerEmployee => "training_hours_per_employee",
            Self::ProgramOneOffCost => "program_one_off_cost",
            Self::AmortizationMonths => "amortization_months",
            Self::ThroughputHoursPerWeek => "throughput_hours_per_week",
            Self::UpskillingCoveragePct => "upskilling_coverage_pct",
            Self::UpskillingHoursPerWeek => "upskilling_hours_per_week",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Error)]
#[error("unknown assumption key: {0}")]
pub struct AssumptionKeyParseError(pub String);

impl FromStr for AssumptionKey {
    type Err = AssumptionKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        let key = match normalized.as_str() {
            "employees" | "employees_in_scope" | "headcount" => Self::Employees,
            "annual_salary" | "salary" => Self::AnnualSalary,
            "hourly_rate" | "rate" => Self::HourlyRate,
            "maturity_level" | "maturity" => Self::MaturityLevel,
            "utilization_pct" | "utilization" => Self::UtilizationPct,
            "training_cost_per_employee" | "training_cost" => Self::TrainingCostPerEmployee,
            "training_hours_per_employee" | "training_hours" => Self::TrainingHoursPerEmployee,
            "program_one_off_cost" | "one_off_cost" => Self::ProgramOneOffCost,
            "amortization_months" | "amortization" => Self::AmortizationMonths,
            "throughput_hours_per_week" => Self::ThroughputHoursPerWeek,
            "upskilling_coverage_pct" | "coverage" => Self::UpskillingCoveragePct,
            "upskilling_hours_per_week" => Self::UpskillingHoursPerWeek,
            _ => return Err(AssumptionKeyParseError(s.to_string())),
        };
        Ok(key)
    }
}

/// Optional field-level overrides collected from CLI flags or an API request
/// and layered over the configured assumptions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssumptionOverrides {
    pub department: Option<Department>,
    pub employees: Option<u32>,
    pub currency: Option<Currency>,
    pub annual_salary: Option<f64>,
    pub hourly_rate: Option<f64>,
    pub maturity_level: Option<u8>,
    pub utilization_pct: Option<f64>,
    pub priorities: Option<Vec<PriorityKey>>,
    pub training_cost_per_employee: Option<f64>,
    pub training_hours_per_employee: Option<f64>,
    pub program_one_off_cost: Option<f64>,
    pub amortization_months: Option<u32>,
}

impl AssumptionOverrides {
    pub fn apply(&self, assumptions: &mut Assumptions) {
        if let Some(department) = self.department {
            assumptions.department = department;
        }
        if let Some(employees) = self.employees {
            assumptions.employees_in_scope = employees;
        }
        if let Some(currency) = self.currency {
            assumptions.currency = currency;
        }
        if let Some(salary) = self.annual_salary {
            assumptions.average_annual_salary = salary;
        }
        if let Some(rate) = self.hourly_rate {
            assumptions.hourly_rate_override = Some(rate);
        }
        if let Some(level) = self.maturity_level {
            assumptions.ai_maturity_level = level;
        }
        if let Some(utilization) = self.utilization_pct {
            assumptions.utilization_pct = utilization;
        }
        if let Some(priorities) = &self.priorities {
            assumptions.selected_priorities = priorities.clone();
        }
        if let Some(cost) = self.training_cost_per_employee {
            assumptions.training_cost_per_employee = cost;
        }
        if let Some(hours) = self.training_hours_per_employee {
            assumptions.training_hours_per_employee = hours;
        }
        if let Some(cost) = self.program_one_off_cost {
            assumptions.program_one_off_cost = cost;
        }
        if let Some(months) = self.amortization_months {
            assumptions.amortization_months = months;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hourly_rate_derives_from_salary() {
        let assumptions = Assumptions {
            average_annual_salary: 52_000.0,
            hourly_rate_override: None,
            ..Assumptions::default()
        };
        assert_eq!(assumptions.hourly_rate(), 25.0);
    }

    #[test]
    fn hourly_rate_override_wins() {
        let assumptions = Assumptions {
            hourly_rate_override: Some(50.0),
            ..Assumptions::default()
        };
        assert_eq!(assumptions.hourly_rate(), 50.0);
    }

    #[test]
    fn assumption_keys_round_trip_through_str() {
        for key in [
            AssumptionKey::Employees,
            AssumptionKey::MaturityLevel,
            AssumptionKey::ThroughputHoursPerWeek,
            AssumptionKey::AmortizationMonths,
        ] {
            let parsed = AssumptionKey::from_str(&key.to_string()).expect("failed to parse key");
            assert_eq!(parsed, key);
        }
    }

    #[test]
    fn maturity_change_clamps_into_scale() {
        let mut assumptions = Assumptions::default();
        assumptions.apply_numeric_change(AssumptionKey::MaturityLevel, 40.0);
        assert_eq!(assumptions.ai_maturity_level, 10);
        assumptions.apply_numeric_change(AssumptionKey::MaturityLevel, -3.0);
        assert_eq!(assumptions.ai_maturity_level, 1);
    }
}
