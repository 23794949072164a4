use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::assumptions::normalize::dedup_priorities;
use crate::assumptions::{Assumptions, Currency, Department};
use crate::priority::PriorityKey;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub workforce: WorkforceConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub priorities: PrioritiesConfig,
    #[serde(default)]
    pub training: TrainingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkforceConfig {
    #[serde(default = "default_department")]
    pub department: String,
    #[serde(default = "default_employees")]
    pub employees_in_scope: u32,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_annual_salary")]
    pub average_annual_salary: f64,
    /// Optional; derived from salary when absent.
    #[serde(default)]
    pub hourly_rate: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_maturity_level")]
    pub ai_maturity_level: u8,
    #[serde(default = "default_utilization")]
    pub utilization_pct: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrioritiesConfig {
    #[serde(default = "default_selected_priorities")]
    pub selected: Vec<String>,
    #[serde(default)]
    pub throughput: crate::assumptions::ThroughputParams,
    #[serde(default)]
    pub quality: crate::assumptions::QualityParams,
    #[serde(default)]
    pub onboarding: crate::assumptions::OnboardingParams,
    #[serde(default)]
    pub retention: crate::assumptions::RetentionParams,
    #[serde(default)]
    pub cost: crate::assumptions::CostParams,
    #[serde(default)]
    pub upskilling: crate::assumptions::UpskillingParams,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    #[serde(default = "default_training_cost")]
    pub cost_per_employee: f64,
    #[serde(default = "default_training_hours")]
    pub hours_per_employee: f64,
    #[serde(default = "default_one_off_cost")]
    pub program_one_off_cost: f64,
    #[serde(default = "default_amortization_months")]
    pub amortization_months: u32,
}

impl Config {
    pub fn default_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config/casebuilder/config.toml")
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(|p| p.to_path_buf())
            .unwrap_or_else(Self::default_path);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(&path)
            .with_context(|| format!("failed reading config: {}", path.display()))?;
        let parsed: Self = toml::from_str(&data)
            .with_context(|| format!("failed parsing TOML config: {}", path.display()))?;
        Ok(parsed)
    }

    /// Resolves the stringly config fields into a typed `Assumptions` record.
    pub fn to_assumptions(&self) -> Result<Assumptions> {
        let department = Department::from_str(&self.workforce.department)?;
        let currency = Currency::from_str(&self.workforce.currency)?;
        let mut selected = Vec::new();
        for entry in &self.priorities.selected {
            selected.push(PriorityKey::from_str(entry)?);
        }
        dedup_priorities(&mut selected);

        Ok(Assumptions {
            department,
            employees_in_scope: self.workforce.employees_in_scope,
            currency,
            average_annual_salary: self.workforce.average_annual_salary,
            hourly_rate_override: self.workforce.hourly_rate,
            ai_maturity_level: self.model.ai_maturity_level,
            utilization_pct: self.model.utilization_pct,
            selected_priorities: selected,
            throughput: self.priorities.throughput.clone(),
            quality: self.priorities.quality.clone(),
            onboarding: self.priorities.onboarding.clone(),
            retention: self.priorities.retention.clone(),
            cost: self.priorities.cost.clone(),
            upskilling: self.priorities.upskilling.clone(),
            training_cost_per_employee: self.training.cost_per_employee,
            training_hours_per_employee: self.training.hours_per_employee,
            program_one_off_cost: self.training.program_one_off_cost,
            amortization_months: self.training.amortization_months,
        })
    }

    pub fn write_template(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed creating config directory: {}", parent.display())
            })?;
        }
        fs::write(path, Self::default_template())
            .with_context(|| format!("failed writing config template: {}", path.display()))
    }

    pub fn default_template() -> String {
        let template = r#"[workforce]
department = "company_wide"
employees_in_scope = 25
currency = "eur"
average_annual_salary = 52000.0
# hourly_rate = 50.0   # uncomment to override the salary-derived rate

[model]
ai_maturity_level = 3
utilization_pct = 70.0

[priorities]
selected = ["throughput", "quality", "onboarding"]

[priorities.throughput]
# hours_per_person_per_week = 3.0   # unset: seeded from the maturity curve

[priorities.quality]
rework_events_per_person_per_month = 3.0
reduction_pct = 20.0
hours_per_fix = 1.0

[priorities.onboarding]
hires_per_year = 24.0
baseline_ramp_months = 3.0
improved_ramp_months = 2.0

[priorities.retention]
baseline_turnover_pct = 20.0
reduction_pct = 10.0
replacement_cost_pct_of_salary = 50.0

[priorities.cost]
consolidation_savings_per_month = 0.0
eliminated_tool_count = 0
avg_tool_cost_per_month = 200.0

[priorities.upskilling]
coverage_pct = 40.0
# hours_per_person_per_week = 2.0   # unset: seeded from the maturity curve

[training]
cost_per_employee = 300.0
hours_per_employee = 8.0
program_one_off_cost = 2000.0
amortization_months = 12
"#;
        template.to_string()
    }
}

impl Default for WorkforceConfig {
    fn default() -> Self {
        Self {
            department: default_department(),
            employees_in_scope: default_employees(),
            currency: default_currency(),
            average_annual_salary: default_annual_salary(),
            hourly_rate: None,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            ai_maturity_level: default_maturity_level(),
            utilization_pct: default_utilization(),
        }
    }
}

impl Default for PrioritiesConfig {
    fn default() -> Self {
        Self {
            selected: default_selected_priorities(),
            throughput: Default::default(),
            quality: Default::default(),
            onboarding: Default::default(),
            retention: Default::default(),
            cost: Default::default(),
            upskilling: Default::default(),
        }
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            cost_per_employee: default_training_cost(),
            hours_per_employee: default_training_hours(),
            program_one_off_cost: default_one_off_cost(),
            amortization_months: default_amortization_months(),
        }
    }
}

fn default_department() -> String {
    "company_wide".to_string()
}

fn default_employees() -> u32 {
    25
}

fn default_currency() -> String {
    "eur".to_string()
}

fn default_annual_salary() -> f64 {
    52_000.0
}

fn default_maturity_level() -> u8 {
    3
}

fn default_utilization() -> f64 {
    70.0
}

fn default_selected_priorities() -> Vec<String> {
    vec![
        "throughput".to_string(),
        "quality".to_string(),
        "onboarding".to_string(),
    ]
}

fn default_training_cost() -> f64 {
    300.0
}

fn default_training_hours() -> f64 {
    8.0
}

fn default_one_off_cost() -> f64 {
    2_000.0
}

fn default_amortization_months() -> u32 {
    12
}
