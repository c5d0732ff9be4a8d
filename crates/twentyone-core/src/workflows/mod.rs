//! # Workflows Module
//!
//! One-call entry points that wire configuration, scheduler and progress reporting
//! together.
//!
//! - **Equilibration** ([`equilibrate`]) - generates the 21-stage schedule from a
//!   [`ProtocolConfig`](crate::engine::config::ProtocolConfig) and runs it on a caller-owned
//!   simulation context.

pub mod equilibrate;
