use crate::cli::RehearseArgs;
use crate::config::builder::build_config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use crate::utils::report::{self, RehearsalDocument};
use tracing::info;
use twentyonestep::core::simulation::SimulationContext;
use twentyonestep::engine::progress::ProgressReporter;
use twentyonestep::engine::rehearsal::RehearsalContext;
use twentyonestep::workflows;

pub fn run(args: RehearseArgs) -> Result<()> {
    let config = build_config(&args.protocol, args.barostat_frequency)?;
    let mut context = RehearsalContext::new(config.timestep);

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Rehearsing the 21-step protocol (P_max = {}, T_max = {}, dt = {})...",
        config.protocol.max_pressure, config.protocol.max_temperature, config.timestep
    );
    info!("Invoking the core equilibration workflow...");
    let protocol_report = workflows::equilibrate::run(&mut context, &config.protocol, &reporter)?;

    println!(
        "Rehearsal complete: {} stages, {} steps, {} simulated.",
        protocol_report.stages.len(),
        protocol_report.total_steps(),
        protocol_report.simulated_time()
    );
    match context.forces().iter().find_map(|force| force.as_barostat()) {
        Some(barostat) => println!(
            "Final state: T = {}, barostat at {} every {} steps.",
            barostat.temperature, barostat.pressure, barostat.frequency
        ),
        None => println!("Final state: no barostat installed."),
    }

    if let Some(path) = &args.report {
        report::write_toml(path, &RehearsalDocument::new(&config, &protocol_report))?;
        info!("Wrote rehearsal report to {:?}", path);
        println!("Report written to: {}", path.display());
    }

    Ok(())
}
