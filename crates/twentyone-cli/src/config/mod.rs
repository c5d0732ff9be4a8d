//! Configuration resolution for the CLI.
//!
//! Values are merged with the precedence: explicit CLI flag, then `-S KEY=VALUE`
//! overrides, then the TOML configuration file, then [`defaults::DefaultsConfig`].

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;
