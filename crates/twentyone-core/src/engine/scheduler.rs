use super::error::ProtocolError;
use super::executor::StageExecutor;
use super::progress::{Progress, ProgressReporter};
use super::state::{ProtocolReport, ProtocolState, StageReport};
use crate::core::protocol::schedule::{DEFAULT_MAX_PRESSURE, DEFAULT_MAX_TEMPERATURE};
use crate::core::protocol::{BarostatFrequency, Schedule, ValidationError};
use crate::core::simulation::SimulationContext;
use crate::core::units::{Pressure, Temperature};
use tracing::{error, info, instrument};

/// Owns the 21-stage schedule and runs it, in order, on one simulation context.
///
/// The scheduler holds the only mutable borrow of the context for its whole lifetime, so
/// nothing else can touch the simulation while the protocol runs. A scheduler runs at most
/// once: after it completes or fails, further calls to `run` are refused.
pub struct ProtocolScheduler<'a, C>
where
    C: SimulationContext,
{
    context: &'a mut C,
    schedule: Schedule,
    state: ProtocolState,
}

impl<'a, C> ProtocolScheduler<'a, C>
where
    C: SimulationContext,
{
    /// Generates the schedule for the given peak pressure and peak temperature. Both are
    /// used as given; `max_temperature` sets every high-temperature stage.
    pub fn new(
        context: &'a mut C,
        max_pressure: Pressure,
        max_temperature: Temperature,
    ) -> Result<Self, ValidationError> {
        let schedule = Schedule::larsen_2011(max_pressure, max_temperature)?;
        info!(
            max_pressure = %max_pressure,
            max_temperature = %max_temperature,
            "Generated {}-stage equilibration schedule.",
            schedule.len()
        );
        Ok(Self::with_schedule(context, schedule))
    }

    /// 50 000 bar peak pressure, 600 K peak temperature.
    pub fn with_defaults(context: &'a mut C) -> Result<Self, ValidationError> {
        Self::new(context, DEFAULT_MAX_PRESSURE, DEFAULT_MAX_TEMPERATURE)
    }

    pub(crate) fn with_schedule(context: &'a mut C, schedule: Schedule) -> Self {
        Self {
            context,
            schedule,
            state: ProtocolState::Constructed,
        }
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn state(&self) -> ProtocolState {
        self.state
    }

    pub fn context(&self) -> &C {
        self.context
    }

    /// Runs every stage with a barostat move every `barostat_frequency` steps.
    pub fn run(
        &mut self,
        barostat_frequency: i64,
    ) -> Result<ProtocolReport, ProtocolError<C::Error>> {
        let frequency = BarostatFrequency::new(barostat_frequency)?;
        self.run_with_progress(frequency, &ProgressReporter::new())
    }

    #[instrument(skip_all, name = "protocol", fields(stages = self.schedule.len(), barostat_frequency = frequency.steps()))]
    pub fn run_with_progress(
        &mut self,
        frequency: BarostatFrequency,
        reporter: &ProgressReporter,
    ) -> Result<ProtocolReport, ProtocolError<C::Error>> {
        if self.state != ProtocolState::Constructed {
            return Err(ProtocolError::AlreadyFinished {
                state: self.state.label(),
            });
        }
        if self.schedule.is_empty() {
            return Err(ProtocolError::EmptySchedule);
        }

        let total_stages = self.schedule.len();
        info!("--- Protocol starting: {} stages ---", total_stages);
        reporter.report(Progress::ProtocolStart { total_stages });

        let mut report = ProtocolReport::default();
        for (index, stage) in self.schedule.iter().enumerate() {
            self.state = ProtocolState::Running { stage: index };

            let executor = match StageExecutor::new(&mut *self.context, stage) {
                Ok(executor) => executor,
                Err(source) => {
                    self.state = ProtocolState::Failed { stage: index };
                    error!(stage = stage.name(), "Stage rejected its inputs: {}", source);
                    return Err(ProtocolError::StageValidation {
                        index,
                        stage: stage.name().to_string(),
                        source,
                    });
                }
            };
            let (step_size, steps) = (executor.step_size(), executor.steps());

            reporter.report(Progress::StageStart {
                index,
                name: stage.name().to_string(),
                steps,
            });
            if let Err(source) = executor.run(frequency) {
                self.state = ProtocolState::Failed { stage: index };
                error!(stage = stage.name(), "Simulation engine failed: {}", source);
                reporter.message(|| format!("Stage {} failed: {}", stage.name(), source));
                return Err(ProtocolError::Engine {
                    index,
                    stage: stage.name().to_string(),
                    source,
                });
            }
            reporter.report(Progress::StageFinish { index, steps });

            report.stages.push(StageReport::new(stage, step_size, steps));
        }

        self.state = ProtocolState::Completed;
        reporter.report(Progress::ProtocolFinish);
        info!(
            total_steps = report.total_steps(),
            simulated_time = %report.simulated_time(),
            "--- Protocol completed successfully ---"
        );
        Ok(report)
    }
}
