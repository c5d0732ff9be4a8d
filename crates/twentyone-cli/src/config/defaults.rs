use twentyonestep::core::protocol::BarostatFrequency;
use twentyonestep::core::protocol::schedule::{DEFAULT_MAX_PRESSURE, DEFAULT_MAX_TEMPERATURE};
use twentyonestep::core::units::{Pressure, Temperature, Time};

pub struct DefaultsConfig {
    pub max_pressure: Pressure,
    pub max_temperature: Temperature,
    pub barostat_frequency: BarostatFrequency,
    pub timestep: Time,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            max_pressure: DEFAULT_MAX_PRESSURE,
            max_temperature: DEFAULT_MAX_TEMPERATURE,
            barostat_frequency: BarostatFrequency::DEFAULT,
            timestep: Time::femtoseconds(2.0),
        }
    }
}
