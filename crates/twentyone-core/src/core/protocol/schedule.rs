use super::stage::StageSpec;
use super::validation::ValidationError;
use crate::core::units::{Pressure, Temperature, Time};
use std::collections::HashSet;

/// Default peak pressure of the ramp, reached at stage md9.
pub const DEFAULT_MAX_PRESSURE: Pressure = Pressure::bar(50_000.0);
/// Default temperature of the high-temperature relaxation stages.
pub const DEFAULT_MAX_TEMPERATURE: Temperature = Temperature::kelvin(600.0);

const AMBIENT_TEMPERATURE: Temperature = Temperature::kelvin(300.0);
const STANDARD_PRESSURE: Pressure = Pressure::bar(1.0);

pub const STAGE_COUNT: usize = 21;

#[derive(Debug, Clone, Copy, PartialEq)]
enum TemperatureTarget {
    Peak,
    Ambient,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PressureTarget {
    Unregulated,
    FractionOfPeak(f64),
    Absolute(Pressure),
}

#[derive(Debug, Clone, Copy)]
struct StageTemplate {
    temperature: TemperatureTarget,
    pressure: PressureTarget,
    duration: Time,
}

const fn stage(temperature: TemperatureTarget, pressure: PressureTarget, ps: f64) -> StageTemplate {
    StageTemplate {
        temperature,
        pressure,
        duration: Time::picoseconds(ps),
    }
}

use PressureTarget::{Absolute, FractionOfPeak, Unregulated};
use TemperatureTarget::{Ambient, Peak};

/// Larsen et al. (2011), Macromolecules 44:6944-6951. Stage `i` is named `md{i + 1}`.
const LARSEN_2011: [StageTemplate; STAGE_COUNT] = [
    stage(Peak, Unregulated, 50.0),
    stage(Ambient, Unregulated, 50.0),
    stage(Ambient, FractionOfPeak(0.02), 50.0),
    stage(Peak, Unregulated, 50.0),
    stage(Ambient, Unregulated, 100.0),
    stage(Ambient, FractionOfPeak(0.6), 50.0),
    stage(Peak, Unregulated, 50.0),
    stage(Ambient, Unregulated, 100.0),
    stage(Ambient, FractionOfPeak(1.0), 50.0),
    stage(Peak, Unregulated, 50.0),
    stage(Ambient, Unregulated, 100.0),
    stage(Ambient, FractionOfPeak(0.5), 5.0),
    stage(Peak, Unregulated, 5.0),
    stage(Ambient, Unregulated, 10.0),
    stage(Ambient, FractionOfPeak(0.1), 5.0),
    stage(Peak, Unregulated, 5.0),
    stage(Ambient, Unregulated, 10.0),
    stage(Ambient, FractionOfPeak(0.01), 5.0),
    stage(Peak, Unregulated, 5.0),
    stage(Ambient, Unregulated, 10.0),
    stage(Ambient, Absolute(STANDARD_PRESSURE), 800.0),
];

/// The ordered, immutable list of stages a protocol run executes.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    stages: Vec<StageSpec>,
}

impl Schedule {
    /// Materializes the 21-stage Larsen schedule for the given peak pressure and peak
    /// temperature.
    pub fn larsen_2011(
        max_pressure: Pressure,
        max_temperature: Temperature,
    ) -> Result<Self, ValidationError> {
        if !max_pressure.is_physical() {
            return Err(ValidationError::InvalidParameter {
                field: "max_pressure",
                value: max_pressure.to_string(),
            });
        }
        if !max_temperature.is_physical() {
            return Err(ValidationError::InvalidParameter {
                field: "max_temperature",
                value: max_temperature.to_string(),
            });
        }

        let stages = LARSEN_2011
            .iter()
            .enumerate()
            .map(|(i, template)| {
                let temperature = match template.temperature {
                    Peak => max_temperature,
                    Ambient => AMBIENT_TEMPERATURE,
                };
                let pressure = match template.pressure {
                    Unregulated => None,
                    FractionOfPeak(fraction) => Some(max_pressure * fraction),
                    Absolute(p) => Some(p),
                };
                StageSpec::new(
                    format!("md{}", i + 1),
                    temperature,
                    pressure,
                    template.duration,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_stages(stages)
    }

    pub(crate) fn from_stages(stages: Vec<StageSpec>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::with_capacity(stages.len());
        for stage in &stages {
            if !seen.insert(stage.name()) {
                return Err(ValidationError::DuplicateStageName(stage.name().to_string()));
            }
        }
        Ok(Self { stages })
    }

    pub fn stages(&self) -> &[StageSpec] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StageSpec> {
        self.stages.iter()
    }

    pub fn get(&self, name: &str) -> Option<&StageSpec> {
        self.stages.iter().find(|s| s.name() == name)
    }

    /// Total simulated time over all stages.
    pub fn total_duration(&self) -> Time {
        self.stages.iter().map(StageSpec::duration).sum()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a StageSpec;
    type IntoIter = std::slice::Iter<'a, StageSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
