//! # Engine Module
//!
//! The stateful side of the library: applying stages to a live simulation context and
//! driving the full protocol.
//!
//! ## Overview
//!
//! A protocol run is a strictly sequential walk over the schedule. For every stage the
//! scheduler builds a [`executor::StageExecutor`] bound to the same context, which sets the
//! thermostat target, redraws velocities, swaps the barostat, reinitializes the engine
//! and integrates the stage's steps. The first failure aborts the run and leaves the
//! context exactly as the failing call left it.
//!
//! ## Architecture
//!
//! - **Stage Execution** ([`executor`]) - One stage against one context
//! - **Scheduling** ([`scheduler`]) - Schedule ownership, ordering and the run state machine
//! - **State Tracking** ([`state`]) - Protocol states and the per-stage run report
//! - **Configuration** ([`config`]) - Protocol parameters and their builder
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Protocol errors carrying the failing stage
//! - **Rehearsal** ([`rehearsal`]) - A bookkeeping context for dry runs and tests

pub mod config;
pub mod error;
pub mod executor;
pub mod progress;
pub mod rehearsal;
pub mod scheduler;
pub mod state;
