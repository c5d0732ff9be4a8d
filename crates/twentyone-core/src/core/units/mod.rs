//! # Units Module
//!
//! Dimensional quantities for the thermodynamic parameters of a protocol stage.
//!
//! Temperatures, pressures and times are distinct newtypes stored in a single canonical
//! unit each (kelvin, bar, picoseconds), so a pressure can never be passed where a
//! temperature is expected. Text boundaries (configuration files, command-line flags)
//! go through [`Quantity`], a runtime-tagged value that is checked against the expected
//! [`Dimension`] before it is converted into one of the typed quantities.
//!
//! ```ignore
//! use twentyonestep::core::units::{Pressure, Quantity, Temperature};
//!
//! let peak: Pressure = "5 GPa".parse::<Quantity>()?.try_into()?;
//! assert_eq!(peak, Pressure::bar(50_000.0));
//!
//! let wrong: Result<Temperature, _> = "600 bar".parse::<Quantity>()?.try_into();
//! assert!(wrong.is_err());
//! ```

mod quantity;
mod symbols;
mod tagged;

pub use quantity::{Pressure, Temperature, Time};
pub use tagged::{Dimension, Quantity, QuantityError};
