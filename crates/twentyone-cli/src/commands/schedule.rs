use crate::cli::{OutputFormat, ScheduleArgs};
use crate::config::builder::build_config;
use crate::error::Result;
use crate::utils::report::{self, ScheduleDocument, StageTable};
use tracing::info;
use twentyonestep::core::protocol::Schedule;

pub fn run(args: ScheduleArgs) -> Result<()> {
    let config = build_config(&args.protocol, None)?;
    let schedule = Schedule::larsen_2011(config.protocol.max_pressure, config.protocol.max_temperature)?;
    info!(
        "Generated {} stages spanning {}.",
        schedule.len(),
        schedule.total_duration()
    );

    let document = ScheduleDocument::new(&config, &schedule)?;
    match args.format {
        OutputFormat::Table => {
            print!("{}", StageTable(&document.stages));
            println!(
                "\nTotal: {} over {} ({} steps at {}).",
                schedule.len(),
                document.total_duration,
                document.total_steps,
                document.timestep
            );
        }
        OutputFormat::Toml => print!("{}", report::to_toml(&document)?),
    }
    Ok(())
}
