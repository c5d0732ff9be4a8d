use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::ProtocolArgs;
use crate::error::{CliError, Result};
use crate::utils::parser::{self, ParseError};
use tracing::debug;
use twentyonestep::core::protocol::BarostatFrequency;
use twentyonestep::core::units::{Quantity, QuantityError};
use twentyonestep::engine::config::ProtocolConfigBuilder;

/// Resolves the run settings. `barostat_frequency` is the command's own flag, if it has one.
pub fn build_config(args: &ProtocolArgs, barostat_frequency: Option<i64>) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;
    let protocol_file = file_config.protocol.take().unwrap_or_default();
    let integrator_file = file_config.integrator.take().unwrap_or_default();

    let max_pressure = args
        .max_pressure
        .or(typed(protocol_file.max_pressure, "protocol.max-pressure")?)
        .unwrap_or(defaults.max_pressure);
    let max_temperature = args
        .max_temperature
        .or(typed(protocol_file.max_temperature, "protocol.max-temperature")?)
        .unwrap_or(defaults.max_temperature);
    let timestep = args
        .timestep
        .or(typed(integrator_file.timestep, "integrator.timestep")?)
        .unwrap_or(defaults.timestep);

    let barostat_frequency = barostat_frequency
        .or(protocol_file.barostat_frequency)
        .map(BarostatFrequency::new)
        .transpose()?
        .unwrap_or(defaults.barostat_frequency);

    if !timestep.is_physical() {
        return Err(CliError::Config(format!(
            "The integrator timestep must be positive and finite, got {}",
            timestep
        )));
    }

    let protocol = ProtocolConfigBuilder::new()
        .max_pressure(max_pressure)
        .max_temperature(max_temperature)
        .barostat_frequency(barostat_frequency)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    debug!(?protocol, %timestep, "Resolved protocol configuration.");
    Ok(AppConfig { protocol, timestep })
}

fn typed<T>(value: Option<Quantity>, key: &'static str) -> Result<Option<T>>
where
    T: TryFrom<Quantity, Error = QuantityError>,
{
    value
        .map(|quantity| T::try_from(quantity).map_err(|source| CliError::InvalidValue { key, source }))
        .transpose()
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for assignment in set_values {
        let (key, value) = parser::split_assignment(assignment)?;
        debug!(key, value, "Applying --set override.");

        match key {
            "protocol.max-pressure" => {
                config
                    .protocol
                    .get_or_insert_with(Default::default)
                    .max_pressure = Some(parser::parse_quantity(key, value)?);
            }
            "protocol.max-temperature" => {
                config
                    .protocol
                    .get_or_insert_with(Default::default)
                    .max_temperature = Some(parser::parse_quantity(key, value)?);
            }
            "protocol.barostat-frequency" => {
                config
                    .protocol
                    .get_or_insert_with(Default::default)
                    .barostat_frequency = Some(parser::parse_integer(key, value)?);
            }
            "integrator.timestep" => {
                config
                    .integrator
                    .get_or_insert_with(Default::default)
                    .timestep = Some(parser::parse_quantity(key, value)?);
            }
            _ => return Err(ParseError::UnknownKey(key.to_string()).into()),
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::{TempDir, tempdir};
    use twentyonestep::core::protocol::ValidationError;
    use twentyonestep::core::units::{Pressure, Temperature, Time};

    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("protocol.toml");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    const FILE: &str = r#"
        [protocol]
        max-pressure = "30000 bar"
        max-temperature = "550 K"
        barostat-frequency = 200

        [integrator]
        timestep = "1 fs"
        "#;

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let app = build_config(&ProtocolArgs::default(), None).unwrap();
        assert_eq!(app.protocol.max_pressure, Pressure::bar(50_000.0));
        assert_eq!(app.protocol.max_temperature, Temperature::kelvin(600.0));
        assert_eq!(app.protocol.barostat_frequency.steps(), 500);
        assert_eq!(app.timestep, Time::femtoseconds(2.0));
    }

    #[test]
    fn file_values_override_defaults() {
        let (_dir, path) = write_config(FILE);
        let args = ProtocolArgs {
            config: Some(path),
            ..Default::default()
        };

        let app = build_config(&args, None).unwrap();
        assert_eq!(app.protocol.max_pressure, Pressure::bar(30_000.0));
        assert_eq!(app.protocol.max_temperature, Temperature::kelvin(550.0));
        assert_eq!(app.protocol.barostat_frequency.steps(), 200);
        assert_eq!(app.timestep, Time::femtoseconds(1.0));
    }

    #[test]
    fn set_values_override_file() {
        let (_dir, path) = write_config(FILE);
        let args = ProtocolArgs {
            config: Some(path),
            set_values: vec![
                "protocol.max-pressure=2 GPa".to_string(),
                "protocol.max-temperature=700 K".to_string(),
                "protocol.barostat-frequency=50".to_string(),
                "integrator.timestep=4 fs".to_string(),
            ],
            ..Default::default()
        };

        let app = build_config(&args, None).unwrap();
        assert_eq!(app.protocol.max_pressure, Pressure::bar(20_000.0));
        assert_eq!(app.protocol.max_temperature, Temperature::kelvin(700.0));
        assert_eq!(app.protocol.barostat_frequency.steps(), 50);
        assert_eq!(app.timestep, Time::femtoseconds(4.0));
    }

    #[test]
    fn cli_flags_override_set_values_and_file() {
        let (_dir, path) = write_config(FILE);
        let args = ProtocolArgs {
            config: Some(path),
            max_pressure: Some(Pressure::bar(10_000.0)),
            timestep: Some(Time::femtoseconds(0.5)),
            set_values: vec!["protocol.max-pressure=2 GPa".to_string()],
            ..Default::default()
        };

        let app = build_config(&args, Some(1_000)).unwrap();
        assert_eq!(app.protocol.max_pressure, Pressure::bar(10_000.0));
        assert_eq!(app.protocol.max_temperature, Temperature::kelvin(550.0));
        assert_eq!(app.protocol.barostat_frequency.steps(), 1_000);
        assert_eq!(app.timestep, Time::femtoseconds(0.5));
    }

    #[test]
    fn wrong_dimension_in_file_is_rejected_even_when_flag_is_set() {
        let (_dir, path) = write_config("[protocol]\nmax-temperature = \"600 bar\"\n");
        let args = ProtocolArgs {
            config: Some(path),
            max_temperature: Some(Temperature::kelvin(600.0)),
            ..Default::default()
        };

        assert!(matches!(
            build_config(&args, None),
            Err(CliError::InvalidValue {
                key: "protocol.max-temperature",
                source: QuantityError::DimensionMismatch { .. }
            })
        ));
    }

    #[test]
    fn non_positive_barostat_frequency_is_rejected() {
        let args = ProtocolArgs {
            set_values: vec!["protocol.barostat-frequency=0".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            build_config(&args, None),
            Err(CliError::Validation(ValidationError::InvalidBarostatFrequency(0)))
        ));
        assert!(matches!(
            build_config(&ProtocolArgs::default(), Some(-10)),
            Err(CliError::Validation(ValidationError::InvalidBarostatFrequency(-10)))
        ));
    }

    #[test]
    fn unknown_set_key_is_rejected() {
        let args = ProtocolArgs {
            set_values: vec!["protocol.max-volume=3 nm".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            build_config(&args, None),
            Err(CliError::Parse(ParseError::UnknownKey(ref key))) if key == "protocol.max-volume"
        ));
    }

    #[test]
    fn non_positive_timestep_is_rejected() {
        let args = ProtocolArgs {
            timestep: Some(Time::femtoseconds(0.0)),
            ..Default::default()
        };
        assert!(matches!(build_config(&args, None), Err(CliError::Config(_))));
    }
}
