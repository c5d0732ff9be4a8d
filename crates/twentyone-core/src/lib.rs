//! # twentyonestep
//!
//! The 21-step molecular dynamics equilibration protocol of Larsen et al. (2011), driven
//! over any simulation engine that implements [`core::simulation::SimulationContext`].
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data: dimensional quantities, `StageSpec`, the
//!   literature stage table and schedule generation, and the engine trait.
//!
//! - **[`engine`]: The Logic Core.** The stateful side: `StageExecutor` applies one stage to
//!   a live context, `ProtocolScheduler` drives the whole schedule through its state
//!   machine, plus error types, progress reporting, configuration and the bookkeeping
//!   `RehearsalContext`.
//!
//! - **[`workflows`]: The Public API.** One call that takes a context and a configuration
//!   and runs the complete equilibration.
//!
//! Reference: Larsen GS, Lin P, Hart KE, Colina CM (2011) Macromolecules 44:6944-6951.

pub mod core;
pub mod engine;
pub mod workflows;
