//! The seam between the protocol and the molecular dynamics engine that does the physics.
//!
//! The protocol never integrates equations of motion itself. Everything it needs from an
//! engine (step size, force list, thermostat target, velocity randomization,
//! reinitialization and stepping) is expressed by [`SimulationContext`]; an adapter over a
//! concrete engine implements the trait, and the protocol drives it through an exclusive
//! borrow for the whole run.

use super::units::{Pressure, Temperature, Time};
use serde::Serialize;
use std::fmt;

/// Monte Carlo pressure-control force: trial volume moves every `frequency` steps,
/// accepted against the target pressure at the target temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonteCarloBarostat {
    pub pressure: Pressure,
    pub temperature: Temperature,
    pub frequency: u32,
}

impl MonteCarloBarostat {
    pub fn new(pressure: Pressure, temperature: Temperature, frequency: u32) -> Self {
        Self {
            pressure,
            temperature,
            frequency,
        }
    }
}

/// A force term in the context's force list, as seen by the protocol.
///
/// Only pressure control is managed by the protocol; every other engine force is opaque
/// and carried under its engine-side name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Force {
    MonteCarloBarostat(MonteCarloBarostat),
    Other(String),
}

impl Force {
    #[inline]
    pub fn is_barostat(&self) -> bool {
        matches!(self, Force::MonteCarloBarostat(_))
    }

    pub fn as_barostat(&self) -> Option<&MonteCarloBarostat> {
        match self {
            Force::MonteCarloBarostat(b) => Some(b),
            Force::Other(_) => None,
        }
    }
}

impl fmt::Display for Force {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Force::MonteCarloBarostat(b) => write!(
                f,
                "MonteCarloBarostat({}, {}, every {} steps)",
                b.pressure, b.temperature, b.frequency
            ),
            Force::Other(name) => f.write_str(name),
        }
    }
}

/// A mutable simulation context owned by an external MD engine.
///
/// Implementations report their own failures through [`Self::Error`]; the protocol hands
/// those values back to the caller unchanged.
pub trait SimulationContext {
    type Error: std::error::Error + Send + Sync + 'static;

    /// The integrator's current step size.
    fn step_size(&self) -> Time;

    /// The active force terms, in engine order.
    fn forces(&self) -> &[Force];

    fn remove_force(&mut self, index: usize) -> Result<Force, Self::Error>;

    /// Appends a force term and returns its index.
    fn add_force(&mut self, force: Force) -> Result<usize, Self::Error>;

    /// Sets the thermostat target temperature.
    fn set_temperature(&mut self, temperature: Temperature) -> Result<(), Self::Error>;

    /// Draws fresh velocities from the Maxwell-Boltzmann distribution at `temperature`.
    fn set_velocities_to_temperature(&mut self, temperature: Temperature)
    -> Result<(), Self::Error>;

    /// Rebuilds the engine's internal integration state after force-list edits.
    /// With `preserve_state`, positions, velocities and the periodic box survive.
    fn reinitialize(&mut self, preserve_state: bool) -> Result<(), Self::Error>;

    /// Advances the simulation by `steps` integration steps, blocking until done.
    fn step(&mut self, steps: u64) -> Result<(), Self::Error>;
}
