//! # Core Module
//!
//! Stateless building blocks of the equilibration protocol.
//!
//! ## Overview
//!
//! The core module holds everything that can be described without touching a running
//! simulation: the dimensional quantities used for every thermodynamic target, the stage
//! model and the literature schedule, and the trait through which an external molecular
//! dynamics engine is driven.
//!
//! ## Architecture
//!
//! - **Quantities** ([`units`]) - Typed temperatures, pressures and times, plus the
//!   runtime-tagged form used when reading text
//! - **Protocol Data** ([`protocol`]) - Stage specifications, the 21-stage Larsen table
//!   and schedule generation, input validation
//! - **Engine Seam** ([`simulation`]) - The `SimulationContext` trait and the force terms
//!   the protocol manages
//!
//! ## Scientific Foundation
//!
//! The schedule alternates short high-temperature NVT relaxations with ambient-temperature
//! NVT and NPT stages whose pressure ramps up to a peak and back down, compressing and
//! annealing dense amorphous systems (polymer melts, glasses) before a final 800 ps NPT
//! stage at 300 K and 1 bar.

pub mod protocol;
pub mod simulation;
pub mod units;
