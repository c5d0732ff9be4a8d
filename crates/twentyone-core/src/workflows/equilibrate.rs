use crate::core::simulation::SimulationContext;
use crate::engine::config::ProtocolConfig;
use crate::engine::error::ProtocolError;
use crate::engine::progress::ProgressReporter;
use crate::engine::scheduler::ProtocolScheduler;
use crate::engine::state::ProtocolReport;
use tracing::{info, instrument};

/// Runs the full equilibration protocol on `context`.
///
/// The context is left in its post-md21 state on success, or in whatever state the
/// failing stage left it on error.
#[instrument(skip_all, name = "equilibration_workflow")]
pub fn run<C>(
    context: &mut C,
    config: &ProtocolConfig,
    reporter: &ProgressReporter,
) -> Result<ProtocolReport, ProtocolError<C::Error>>
where
    C: SimulationContext,
{
    info!(
        max_pressure = %config.max_pressure,
        max_temperature = %config.max_temperature,
        barostat_frequency = %config.barostat_frequency,
        step_size = %context.step_size(),
        "Starting equilibration workflow."
    );

    let mut scheduler =
        ProtocolScheduler::new(context, config.max_pressure, config.max_temperature)?;
    scheduler.run_with_progress(config.barostat_frequency, reporter)
}
