use crate::config::models::AppConfig;
use crate::error::{CliError, Result};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use twentyonestep::core::protocol::{Schedule, StageSpec, ValidationError};
use twentyonestep::core::units::{Quantity, Time};
use twentyonestep::engine::state::{ProtocolReport, StageReport};

/// One row of a printed or serialized schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct StageEntry {
    pub name: String,
    pub ensemble: String,
    pub temperature: Quantity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<Quantity>,
    pub duration: Quantity,
    pub steps: u64,
}

impl StageEntry {
    pub fn planned(stage: &StageSpec, timestep: Time) -> std::result::Result<Self, ValidationError> {
        Ok(Self {
            name: stage.name().to_string(),
            ensemble: stage.ensemble().to_string(),
            temperature: stage.temperature().into(),
            pressure: stage.pressure().map(Into::into),
            duration: stage.duration().into(),
            steps: stage.step_count(timestep)?,
        })
    }

    pub fn executed(stage: &StageReport) -> Self {
        Self {
            name: stage.name.clone(),
            ensemble: stage.ensemble.to_string(),
            temperature: stage.temperature.into(),
            pressure: stage.pressure.map(Into::into),
            duration: stage.duration.into(),
            steps: stage.steps,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScheduleDocument {
    pub max_pressure: Quantity,
    pub max_temperature: Quantity,
    pub timestep: Quantity,
    pub total_duration: Quantity,
    pub total_steps: u64,
    pub stages: Vec<StageEntry>,
}

impl ScheduleDocument {
    pub fn new(config: &AppConfig, schedule: &Schedule) -> std::result::Result<Self, ValidationError> {
        let stages = schedule
            .iter()
            .map(|stage| StageEntry::planned(stage, config.timestep))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self {
            max_pressure: config.protocol.max_pressure.into(),
            max_temperature: config.protocol.max_temperature.into(),
            timestep: config.timestep.into(),
            total_duration: schedule.total_duration().into(),
            total_steps: stages.iter().map(|s| s.steps).sum(),
            stages,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RehearsalDocument {
    pub max_pressure: Quantity,
    pub max_temperature: Quantity,
    pub barostat_frequency: u32,
    pub timestep: Quantity,
    pub simulated_time: Quantity,
    pub total_steps: u64,
    pub stages: Vec<StageEntry>,
}

impl RehearsalDocument {
    pub fn new(config: &AppConfig, report: &ProtocolReport) -> Self {
        Self {
            max_pressure: config.protocol.max_pressure.into(),
            max_temperature: config.protocol.max_temperature.into(),
            barostat_frequency: config.protocol.barostat_frequency.steps(),
            timestep: config.timestep.into(),
            simulated_time: report.simulated_time().into(),
            total_steps: report.total_steps(),
            stages: report.stages.iter().map(StageEntry::executed).collect(),
        }
    }
}

/// Aligned text table, one row per stage.
pub struct StageTable<'a>(pub &'a [StageEntry]);

impl fmt::Display for StageTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<6} {:<4} {:>8} {:>12} {:>9} {:>10}",
            "Stage", "Ens.", "T", "P", "Duration", "Steps"
        )?;
        for entry in self.0 {
            let pressure = entry
                .pressure
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                f,
                "{:<6} {:<4} {:>8} {:>12} {:>9} {:>10}",
                entry.name,
                entry.ensemble,
                entry.temperature.to_string(),
                pressure,
                entry.duration.to_string(),
                entry.steps
            )?;
        }
        Ok(())
    }
}

pub fn to_toml<T: Serialize>(document: &T) -> Result<String> {
    toml::to_string_pretty(document).map_err(|e| CliError::Other(e.into()))
}

pub fn write_toml<T: Serialize>(path: &Path, document: &T) -> Result<()> {
    let content = to_toml(document)?;
    std::fs::write(path, content).map_err(|e| CliError::Output {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use twentyonestep::core::protocol::BarostatFrequency;
    use twentyonestep::core::protocol::schedule::{DEFAULT_MAX_PRESSURE, DEFAULT_MAX_TEMPERATURE};
    use twentyonestep::engine::config::ProtocolConfig;

    fn app_config() -> AppConfig {
        AppConfig {
            protocol: ProtocolConfig {
                max_pressure: DEFAULT_MAX_PRESSURE,
                max_temperature: DEFAULT_MAX_TEMPERATURE,
                barostat_frequency: BarostatFrequency::DEFAULT,
            },
            timestep: Time::femtoseconds(2.0),
        }
    }

    fn schedule() -> Schedule {
        Schedule::larsen_2011(DEFAULT_MAX_PRESSURE, DEFAULT_MAX_TEMPERATURE).unwrap()
    }

    #[test]
    fn schedule_document_totals_steps() {
        let document = ScheduleDocument::new(&app_config(), &schedule()).unwrap();
        assert_eq!(document.stages.len(), 21);
        assert_eq!(document.total_steps, 780_000);
        assert_eq!(document.stages[8].pressure.unwrap().to_string(), "50000 bar");
        assert!(document.stages[0].pressure.is_none());
    }

    #[test]
    fn table_has_header_and_one_row_per_stage() {
        let document = ScheduleDocument::new(&app_config(), &schedule()).unwrap();
        let table = StageTable(&document.stages).to_string();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 22);
        assert!(lines[0].starts_with("Stage"));
        assert!(lines[1].starts_with("md1"));
        assert!(lines[1].contains("NVT"));
        assert!(lines[21].contains("1 bar"));
        assert!(lines[21].contains("400000"));
    }

    #[test]
    fn toml_output_parses_back_with_unit_strings() {
        let document = ScheduleDocument::new(&app_config(), &schedule()).unwrap();
        let text = to_toml(&document).unwrap();

        let value: toml::Table = toml::from_str(&text).unwrap();
        assert_eq!(value["max-pressure"].as_str(), Some("50000 bar"));
        let stages = value["stages"].as_array().unwrap();
        assert_eq!(stages.len(), 21);
        assert_eq!(stages[0]["name"].as_str(), Some("md1"));
        assert!(stages[0].get("pressure").is_none());
        assert_eq!(stages[2]["pressure"].as_str(), Some("1000 bar"));
    }

    #[test]
    fn write_toml_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.toml");
        let document = ScheduleDocument::new(&app_config(), &schedule()).unwrap();
        assert!(matches!(
            write_toml(&path, &document),
            Err(CliError::Output { .. })
        ));
    }
}
