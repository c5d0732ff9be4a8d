//! # Protocol Module
//!
//! The stage model and the literature schedule of the 21-step equilibration protocol.
//!
//! - [`stage`] - [`StageSpec`], one thermodynamic stage (temperature, optional pressure,
//!   duration, name), and its derived step count
//! - [`schedule`] - the Larsen et al. (2011) stage table and [`Schedule`] generation
//! - [`frequency`] - the validated Monte Carlo barostat move frequency
//! - [`validation`] - the input-validation error shared by all of the above
//!
//! Reference: Larsen GS, Lin P, Hart KE, Colina CM (2011) Macromolecules 44:6944-6951.

pub mod frequency;
pub mod schedule;
pub mod stage;
pub mod validation;

pub use frequency::BarostatFrequency;
pub use schedule::Schedule;
pub use stage::{Ensemble, StageSpec};
pub use validation::ValidationError;
