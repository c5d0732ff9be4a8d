use crate::core::protocol::{Ensemble, StageSpec};
use crate::core::units::{Pressure, Temperature, Time};
use serde::Serialize;

/// Lifecycle of a protocol run.
///
/// `Constructed -> Running { stage } -> Completed | Failed { stage }`. Both end states are
/// terminal; a finished scheduler never re-enters `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProtocolState {
    #[default]
    Constructed,
    Running {
        stage: usize,
    },
    Completed,
    Failed {
        stage: usize,
    },
}

impl ProtocolState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProtocolState::Completed | ProtocolState::Failed { .. })
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            ProtocolState::Constructed => "not started",
            ProtocolState::Running { .. } => "started",
            ProtocolState::Completed => "completed",
            ProtocolState::Failed { .. } => "failed",
        }
    }
}

/// What one executed stage did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageReport {
    pub name: String,
    pub ensemble: Ensemble,
    pub temperature: Temperature,
    pub pressure: Option<Pressure>,
    pub duration: Time,
    pub step_size: Time,
    pub steps: u64,
}

impl StageReport {
    pub(crate) fn new(stage: &StageSpec, step_size: Time, steps: u64) -> Self {
        Self {
            name: stage.name().to_string(),
            ensemble: stage.ensemble(),
            temperature: stage.temperature(),
            pressure: stage.pressure(),
            duration: stage.duration(),
            step_size,
            steps,
        }
    }

    /// Time actually integrated, `steps * step_size`.
    pub fn simulated_time(&self) -> Time {
        self.step_size * self.steps as f64
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProtocolReport {
    pub stages: Vec<StageReport>,
}

impl ProtocolReport {
    pub fn total_steps(&self) -> u64 {
        self.stages.iter().map(|s| s.steps).sum()
    }

    pub fn simulated_time(&self) -> Time {
        self.stages.iter().map(StageReport::simulated_time).sum()
    }
}
