use crate::core::protocol::BarostatFrequency;
use crate::core::units::{Pressure, Temperature};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Parameters of one equilibration run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProtocolConfig {
    /// Peak of the pressure ramp (stage md9).
    pub max_pressure: Pressure,
    /// Temperature of the high-temperature relaxation stages.
    pub max_temperature: Temperature,
    pub barostat_frequency: BarostatFrequency,
}

#[derive(Default)]
pub struct ProtocolConfigBuilder {
    max_pressure: Option<Pressure>,
    max_temperature: Option<Temperature>,
    barostat_frequency: Option<BarostatFrequency>,
}

impl ProtocolConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_pressure(mut self, pressure: Pressure) -> Self {
        self.max_pressure = Some(pressure);
        self
    }
    pub fn max_temperature(mut self, temperature: Temperature) -> Self {
        self.max_temperature = Some(temperature);
        self
    }
    pub fn barostat_frequency(mut self, frequency: BarostatFrequency) -> Self {
        self.barostat_frequency = Some(frequency);
        self
    }

    pub fn build(self) -> Result<ProtocolConfig, ConfigError> {
        Ok(ProtocolConfig {
            max_pressure: self
                .max_pressure
                .ok_or(ConfigError::MissingParameter("max_pressure"))?,
            max_temperature: self
                .max_temperature
                .ok_or(ConfigError::MissingParameter("max_temperature"))?,
            barostat_frequency: self
                .barostat_frequency
                .ok_or(ConfigError::MissingParameter("barostat_frequency"))?,
        })
    }
}
