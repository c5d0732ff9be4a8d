use super::validation::ValidationError;
use crate::core::units::{Pressure, Temperature, Time};
use serde::Serialize;
use std::fmt;

/// Statistical ensemble a stage samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Ensemble {
    /// Constant volume; no pressure control.
    Nvt,
    /// Constant pressure through a Monte Carlo barostat.
    Npt,
}

impl fmt::Display for Ensemble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ensemble::Nvt => f.write_str("NVT"),
            Ensemble::Npt => f.write_str("NPT"),
        }
    }
}

/// Target thermodynamic conditions of one protocol stage.
///
/// Immutable once built: every field is checked by [`StageSpec::new`] and exposed
/// read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageSpec {
    name: String,
    temperature: Temperature,
    pressure: Option<Pressure>,
    duration: Time,
}

impl StageSpec {
    pub fn new(
        name: impl Into<String>,
        temperature: Temperature,
        pressure: Option<Pressure>,
        duration: Time,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let non_physical = |field: &'static str, value: String| ValidationError::NonPhysical {
            stage: name.clone(),
            field,
            value,
        };

        if !temperature.is_physical() {
            return Err(non_physical("temperature", temperature.to_string()));
        }
        if let Some(p) = pressure {
            if !p.is_physical() {
                return Err(non_physical("pressure", p.to_string()));
            }
        }
        if !duration.is_physical() {
            return Err(non_physical("duration", duration.to_string()));
        }

        Ok(Self {
            name,
            temperature,
            pressure,
            duration,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    pub fn pressure(&self) -> Option<Pressure> {
        self.pressure
    }

    pub fn duration(&self) -> Time {
        self.duration
    }

    pub fn ensemble(&self) -> Ensemble {
        match self.pressure {
            Some(_) => Ensemble::Npt,
            None => Ensemble::Nvt,
        }
    }

    /// Number of integration steps covering the stage duration, `round(duration / step_size)`
    /// with ties going to the even neighbour.
    ///
    /// A step size longer than twice the stage yields [`ValidationError::ZeroSteps`] instead
    /// of a zero-step stage, so a scheduler with a very coarse step size stops at the first
    /// short stage (md12 of the literature schedule, 5 ps) rather than skipping it.
    pub fn step_count(&self, step_size: Time) -> Result<u64, ValidationError> {
        if !step_size.is_physical() {
            return Err(ValidationError::InvalidStepSize(step_size));
        }
        let steps = (self.duration / step_size).round_ties_even();
        if !steps.is_finite() || steps > u64::MAX as f64 {
            return Err(ValidationError::InvalidStepSize(step_size));
        }
        if steps < 1.0 {
            return Err(ValidationError::ZeroSteps {
                stage: self.name.clone(),
                step_size,
            });
        }
        Ok(steps as u64)
    }
}

impl fmt::Display for StageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] T = {}", self.name, self.ensemble(), self.temperature)?;
        if let Some(p) = self.pressure {
            write!(f, ", P = {}", p)?;
        }
        write!(f, ", t = {}", self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn npt_stage() -> StageSpec {
        StageSpec::new(
            "md3",
            Temperature::kelvin(300.0),
            Some(Pressure::bar(1000.0)),
            Time::picoseconds(50.0),
        )
        .unwrap()
    }

    #[test]
    fn new_keeps_all_fields() {
        let stage = npt_stage();
        assert_eq!(stage.name(), "md3");
        assert_eq!(stage.temperature(), Temperature::kelvin(300.0));
        assert_eq!(stage.pressure(), Some(Pressure::bar(1000.0)));
        assert_eq!(stage.duration(), Time::picoseconds(50.0));
    }

    #[test]
    fn ensemble_follows_presence_of_pressure() {
        assert_eq!(npt_stage().ensemble(), Ensemble::Npt);
        let nvt = StageSpec::new(
            "md1",
            Temperature::kelvin(600.0),
            None,
            Time::picoseconds(50.0),
        )
        .unwrap();
        assert_eq!(nvt.ensemble(), Ensemble::Nvt);
    }

    #[test]
    fn empty_or_blank_name_is_rejected() {
        for name in ["", "   "] {
            let result = StageSpec::new(
                name,
                Temperature::kelvin(300.0),
                None,
                Time::picoseconds(1.0),
            );
            assert_eq!(result, Err(ValidationError::EmptyName));
        }
    }

    #[test]
    fn non_positive_temperature_is_rejected() {
        let result = StageSpec::new("md1", Temperature::kelvin(0.0), None, Time::picoseconds(1.0));
        assert!(matches!(
            result,
            Err(ValidationError::NonPhysical { field: "temperature", .. })
        ));
    }

    #[test]
    fn non_positive_pressure_is_rejected() {
        let result = StageSpec::new(
            "md1",
            Temperature::kelvin(300.0),
            Some(Pressure::bar(-5.0)),
            Time::picoseconds(1.0),
        );
        assert!(matches!(
            result,
            Err(ValidationError::NonPhysical { field: "pressure", .. })
        ));
    }

    #[test]
    fn non_finite_duration_is_rejected() {
        let result = StageSpec::new(
            "md1",
            Temperature::kelvin(300.0),
            None,
            Time::picoseconds(f64::NAN),
        );
        assert!(matches!(
            result,
            Err(ValidationError::NonPhysical { field: "duration", .. })
        ));
    }

    #[test]
    fn step_count_rounds_duration_over_step_size() {
        let stage = npt_stage();
        assert_eq!(stage.step_count(Time::femtoseconds(2.0)).unwrap(), 25_000);
        assert_eq!(stage.step_count(Time::femtoseconds(3.0)).unwrap(), 16_667);
        assert_eq!(stage.step_count(Time::femtoseconds(4.0)).unwrap(), 12_500);
    }

    #[test]
    fn step_count_sends_exact_halves_to_even() {
        let md12 = StageSpec::new(
            "md12",
            Temperature::kelvin(300.0),
            None,
            Time::picoseconds(5.0),
        )
        .unwrap();
        assert_eq!(md12.step_count(Time::femtoseconds(80.0)).unwrap(), 62);

        let short = StageSpec::new("md1", Temperature::kelvin(600.0), None, Time::picoseconds(1.5))
            .unwrap();
        assert_eq!(short.step_count(Time::picoseconds(1.0)).unwrap(), 2);
    }

    #[test]
    fn step_count_rejects_non_positive_step_size() {
        let stage = npt_stage();
        assert_eq!(
            stage.step_count(Time::picoseconds(0.0)),
            Err(ValidationError::InvalidStepSize(Time::picoseconds(0.0)))
        );
        assert!(stage.step_count(Time::picoseconds(-0.002)).is_err());
    }

    #[test]
    fn step_count_rejects_step_size_longer_than_twice_the_stage() {
        let stage = npt_stage();
        assert!(matches!(
            stage.step_count(Time::picoseconds(200.0)),
            Err(ValidationError::ZeroSteps { .. })
        ));
    }

    #[test]
    fn display_lists_targets() {
        assert_eq!(
            npt_stage().to_string(),
            "md3 [NPT] T = 300 K, P = 1000 bar, t = 50 ps"
        );
    }
}
