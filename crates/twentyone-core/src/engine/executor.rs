use crate::core::protocol::{BarostatFrequency, StageSpec, ValidationError};
use crate::core::simulation::{Force, MonteCarloBarostat, SimulationContext};
use crate::core::units::Time;
use tracing::{debug, info, instrument};

/// Applies one [`StageSpec`] to a simulation context and integrates it.
///
/// The step count is computed once, from the context's step size at construction time,
/// and stays fixed for the lifetime of the executor.
pub struct StageExecutor<'a, C>
where
    C: SimulationContext,
{
    context: &'a mut C,
    stage: &'a StageSpec,
    step_size: Time,
    steps: u64,
}

impl<'a, C> StageExecutor<'a, C>
where
    C: SimulationContext,
{
    pub fn new(context: &'a mut C, stage: &'a StageSpec) -> Result<Self, ValidationError> {
        let step_size = context.step_size();
        let steps = stage.step_count(step_size)?;
        Ok(Self {
            context,
            stage,
            step_size,
            steps,
        })
    }

    pub fn stage(&self) -> &StageSpec {
        self.stage
    }

    /// The step size the step count was computed from.
    pub fn step_size(&self) -> Time {
        self.step_size
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Runs the stage to completion. Engine errors are returned as the engine raised them;
    /// the context keeps whatever state the failing call produced.
    #[instrument(skip_all, name = "stage", fields(stage = %self.stage.name(), steps = self.steps))]
    pub fn run(mut self, barostat_frequency: BarostatFrequency) -> Result<(), C::Error> {
        let stage = self.stage;
        info!("=== Starting stage {} ===", stage);

        self.context.set_temperature(stage.temperature())?;
        self.context
            .set_velocities_to_temperature(stage.temperature())?;
        self.reconcile_barostat(barostat_frequency)?;
        self.context.reinitialize(true)?;
        self.context.step(self.steps)?;

        info!("Completed stage {} ({} steps).", stage.name(), self.steps);
        Ok(())
    }

    /// Leaves the context with exactly one barostat matching the stage's pressure target,
    /// or none for a constant-volume stage.
    fn reconcile_barostat(&mut self, frequency: BarostatFrequency) -> Result<(), C::Error> {
        let stale: Vec<usize> = self
            .context
            .forces()
            .iter()
            .enumerate()
            .filter(|(_, force)| force.is_barostat())
            .map(|(index, _)| index)
            .collect();

        // Highest index first so the remaining indices stay valid.
        for index in stale.into_iter().rev() {
            let removed = self.context.remove_force(index)?;
            debug!(index, force = %removed, "Removed barostat.");
        }

        if let Some(pressure) = self.stage.pressure() {
            let barostat = Force::MonteCarloBarostat(MonteCarloBarostat::new(
                pressure,
                self.stage.temperature(),
                frequency.steps(),
            ));
            debug!(force = %barostat, "Installing barostat.");
            self.context.add_force(barostat)?;
        }
        Ok(())
    }
}
