//! A physics-free [`SimulationContext`] for dry runs.
//!
//! [`RehearsalContext`] accepts every call a real engine would receive, updates the
//! thermodynamic bookkeeping (targets, force list, step counter, simulated time) and
//! appends the call to an ordered event log. Positions and velocities are not modeled.

use crate::core::simulation::{Force, SimulationContext};
use crate::core::units::{Temperature, Time};
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RehearsalError {
    #[error("No force at index {index} (context has {len} force(s))")]
    ForceIndexOutOfRange { index: usize, len: usize },
}

/// One call received by a [`RehearsalContext`].
#[derive(Debug, Clone, PartialEq)]
pub enum ContextEvent {
    SetTemperature(Temperature),
    RandomizeVelocities(Temperature),
    RemoveForce(Force),
    AddForce(Force),
    Reinitialize { preserve_state: bool },
    Step(u64),
}

#[derive(Debug, Clone)]
pub struct RehearsalContext {
    step_size: Time,
    forces: Vec<Force>,
    target_temperature: Option<Temperature>,
    velocity_temperature: Option<Temperature>,
    steps_taken: u64,
    elapsed: Time,
    events: Vec<ContextEvent>,
}

impl RehearsalContext {
    pub fn new(step_size: Time) -> Self {
        Self {
            step_size,
            forces: Vec::new(),
            target_temperature: None,
            velocity_temperature: None,
            steps_taken: 0,
            elapsed: Time::picoseconds(0.0),
            events: Vec::new(),
        }
    }

    /// Seeds the force list, e.g. with the system's non-bonded terms or a leftover barostat.
    pub fn with_forces(mut self, forces: Vec<Force>) -> Self {
        self.forces = forces;
        self
    }

    /// Changes the integrator step size; only stages started afterwards see the new value.
    pub fn set_step_size(&mut self, step_size: Time) {
        self.step_size = step_size;
    }

    pub fn target_temperature(&self) -> Option<Temperature> {
        self.target_temperature
    }

    /// Temperature the current velocities were drawn at, if they survived the last
    /// reinitialization.
    pub fn velocity_temperature(&self) -> Option<Temperature> {
        self.velocity_temperature
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    pub fn elapsed(&self) -> Time {
        self.elapsed
    }

    pub fn events(&self) -> &[ContextEvent] {
        &self.events
    }

    pub fn barostat_count(&self) -> usize {
        self.forces.iter().filter(|f| f.is_barostat()).count()
    }

    /// Every thermostat target set so far, in call order.
    pub fn temperature_history(&self) -> Vec<Temperature> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ContextEvent::SetTemperature(t) => Some(*t),
                _ => None,
            })
            .collect()
    }
}

impl SimulationContext for RehearsalContext {
    type Error = RehearsalError;

    fn step_size(&self) -> Time {
        self.step_size
    }

    fn forces(&self) -> &[Force] {
        &self.forces
    }

    fn remove_force(&mut self, index: usize) -> Result<Force, Self::Error> {
        if index >= self.forces.len() {
            return Err(RehearsalError::ForceIndexOutOfRange {
                index,
                len: self.forces.len(),
            });
        }
        let force = self.forces.remove(index);
        self.events.push(ContextEvent::RemoveForce(force.clone()));
        Ok(force)
    }

    fn add_force(&mut self, force: Force) -> Result<usize, Self::Error> {
        self.events.push(ContextEvent::AddForce(force.clone()));
        self.forces.push(force);
        Ok(self.forces.len() - 1)
    }

    fn set_temperature(&mut self, temperature: Temperature) -> Result<(), Self::Error> {
        self.events.push(ContextEvent::SetTemperature(temperature));
        self.target_temperature = Some(temperature);
        Ok(())
    }

    fn set_velocities_to_temperature(
        &mut self,
        temperature: Temperature,
    ) -> Result<(), Self::Error> {
        self.events
            .push(ContextEvent::RandomizeVelocities(temperature));
        self.velocity_temperature = Some(temperature);
        Ok(())
    }

    fn reinitialize(&mut self, preserve_state: bool) -> Result<(), Self::Error> {
        self.events
            .push(ContextEvent::Reinitialize { preserve_state });
        if !preserve_state {
            self.velocity_temperature = None;
        }
        Ok(())
    }

    fn step(&mut self, steps: u64) -> Result<(), Self::Error> {
        self.events.push(ContextEvent::Step(steps));
        self.steps_taken += steps;
        self.elapsed = Time::picoseconds(
            self.elapsed.as_picoseconds() + self.step_size.as_picoseconds() * steps as f64,
        );
        trace!(steps, total = self.steps_taken, "Rehearsed integration steps.");
        Ok(())
    }
}
