pub mod cost;
pub mod onboarding;
pub mod quality;
pub mod retention;
pub mod throughput;
pub mod upskilling;

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assumptions::{Assumptions, SharedContext};
use crate::engine::PriorityOutcome;
use crate::priority::cost::CostModel;
use crate::priority::onboarding::OnboardingModel;
use crate::priority::quality::QualityModel;
use crate::priority::retention::RetentionModel;
use crate::priority::throughput::ThroughputModel;
use crate::priority::upskilling::UpskillingModel;

/// Closed set of business levers a case can focus on. Adding one is a
/// compile-time exercise: the registry and per-priority modules must follow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum PriorityKey {
    Throughput,
    Quality,
    Onboarding,
    Retention,
    Cost,
    Upskilling,
}

impl PriorityKey {
    pub const ALL: [PriorityKey; 6] = [
        PriorityKey::Throughput,
        PriorityKey::Quality,
        PriorityKey::Onboarding,
        PriorityKey::Retention,
        PriorityKey::Cost,
        PriorityKey::Upskilling,
    ];

    pub fn as_slug(&self) -> &'static str {
        match self {
            Self::Throughput => "throughput",
            Self::Quality => "quality",
            Self::Onboarding => "onboarding",
            Self::Retention => "retention",
            Self::Cost => "cost",
            Self::Upskilling => "upskilling",
        }
    }
}

impl Display for PriorityKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let display = match self {
            Self::Throughput => "Throughput",
            Self::Quality => "Quality",
            Self::Onboarding => "Onboarding",
            Self::Retention => "Retention",
            Self::Cost => "Cost",
            Self::Upskilling => "Upskilling",
        };
        write!(f, "{display}")
    }
}

#[derive(Debug, Error)]
#[error("unknown priority: {0}")]
pub struct PriorityParseError(pub String);

impl FromStr for PriorityKey {
    type Err = PriorityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "throughput" | "cycle_time" => Ok(Self::Throughput),
            "quality" | "rework" => Ok(Self::Quality),
            "onboarding" | "ramp" => Ok(Self::Onboarding),
            "retention" | "turnover" => Ok(Self::Retention),
            "cost" | "consolidation" => Ok(Self::Cost),
            "upskilling" | "competency" => Ok(Self::Upskilling),
            _ => Err(PriorityParseError(s.to_string())),
        }
    }
}

/// A pure per-priority value calculator. Implementations read the relevant
/// parameter block from the assumptions plus the shared context and produce
/// an annual value, an hours figure where the priority has one, and a
/// rationale string for the results table.
pub trait PriorityModel: Send + Sync {
    fn key(&self) -> PriorityKey;
    fn label(&self) -> &'static str;
    fn evaluate(&self, assumptions: &Assumptions, ctx: &SharedContext) -> PriorityOutcome;
}

#[derive(Clone)]
pub struct PriorityRegistry {
    models: Vec<Arc<dyn PriorityModel>>,
}

impl PriorityRegistry {
    pub fn with_defaults() -> Self {
        let models: Vec<Arc<dyn PriorityModel>> = vec![
            Arc::new(ThroughputModel),
            Arc::new(QualityModel),
            Arc::new(OnboardingModel),
            Arc::new(RetentionModel),
            Arc::new(CostModel),
            Arc::new(UpskillingModel),
        ];
        Self { models }
    }

    pub fn models(&self) -> &[Arc<dyn PriorityModel>] {
        &self.models
    }

    pub fn by_key(&self, key: PriorityKey) -> Option<Arc<dyn PriorityModel>> {
        self.models.iter().find(|m| m.key() == key).cloned()
    }
}
