use super::quantity::{Pressure, Temperature, Time};
use super::symbols;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Temperature,
    Pressure,
    Time,
}

impl Dimension {
    fn canonical_symbol(self) -> &'static str {
        match self {
            Dimension::Temperature => "K",
            Dimension::Pressure => "bar",
            Dimension::Time => "ps",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Temperature => "temperature",
            Dimension::Pressure => "pressure",
            Dimension::Time => "time",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuantityError {
    #[error("Quantity '{0}' is missing a unit (expected e.g. '300 K', '1 bar' or '2 fs')")]
    MissingUnit(String),

    #[error("Invalid numeric value in quantity '{0}'")]
    InvalidNumber(String),

    #[error("Unknown unit symbol '{symbol}' in quantity '{input}'")]
    UnknownUnit { input: String, symbol: String },

    #[error("Expected a {expected} quantity, found a {found} quantity ({quantity})")]
    DimensionMismatch {
        expected: Dimension,
        found: Dimension,
        quantity: Quantity,
    },
}

/// A physical quantity whose dimension is only known at runtime.
///
/// The value is kept in the canonical unit of its dimension. `Quantity` round-trips
/// through its string form, which is how it appears in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Quantity {
    value: f64,
    dimension: Dimension,
}

impl Quantity {
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The magnitude expressed in the canonical unit of [`Self::dimension`].
    pub fn canonical_value(&self) -> f64 {
        self.value
    }

    fn value_in(self, expected: Dimension) -> Result<f64, QuantityError> {
        if self.dimension == expected {
            Ok(self.value)
        } else {
            Err(QuantityError::DimensionMismatch {
                expected,
                found: self.dimension,
                quantity: self,
            })
        }
    }
}

impl FromStr for Quantity {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let split_at = input
            .find(|c: char| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
            .ok_or_else(|| QuantityError::MissingUnit(input.to_string()))?;
        let (number, symbol) = input.split_at(split_at);
        let (number, symbol) = (number.trim(), symbol.trim());

        let value: f64 = number
            .parse()
            .map_err(|_| QuantityError::InvalidNumber(input.to_string()))?;
        let (dimension, scale) =
            symbols::lookup(symbol).ok_or_else(|| QuantityError::UnknownUnit {
                input: input.to_string(),
                symbol: symbol.to_string(),
            })?;

        Ok(Self {
            value: value * scale,
            dimension,
        })
    }
}

impl TryFrom<String> for Quantity {
    type Error = QuantityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Quantity> for String {
    fn from(q: Quantity) -> Self {
        q.to_string()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.dimension.canonical_symbol())
    }
}

impl From<Temperature> for Quantity {
    fn from(t: Temperature) -> Self {
        Self {
            value: t.as_kelvin(),
            dimension: Dimension::Temperature,
        }
    }
}

impl From<Pressure> for Quantity {
    fn from(p: Pressure) -> Self {
        Self {
            value: p.as_bar(),
            dimension: Dimension::Pressure,
        }
    }
}

impl From<Time> for Quantity {
    fn from(t: Time) -> Self {
        Self {
            value: t.as_picoseconds(),
            dimension: Dimension::Time,
        }
    }
}

impl TryFrom<Quantity> for Temperature {
    type Error = QuantityError;

    fn try_from(q: Quantity) -> Result<Self, Self::Error> {
        q.value_in(Dimension::Temperature).map(Temperature::kelvin)
    }
}

impl TryFrom<Quantity> for Pressure {
    type Error = QuantityError;

    fn try_from(q: Quantity) -> Result<Self, Self::Error> {
        q.value_in(Dimension::Pressure).map(Pressure::bar)
    }
}

impl TryFrom<Quantity> for Time {
    type Error = QuantityError;

    fn try_from(q: Quantity) -> Result<Self, Self::Error> {
        q.value_in(Dimension::Time).map(Time::picoseconds)
    }
}
