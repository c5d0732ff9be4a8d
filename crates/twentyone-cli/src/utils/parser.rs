use thiserror::Error;
use twentyonestep::core::units::{Pressure, Quantity, QuantityError, Temperature, Time};

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE (e.g., 'protocol.max-pressure=20000 bar').")]
    InvalidAssignment(String),

    #[error(
        "Unsupported configuration key for --set: '{0}'. Expected one of: {keys}",
        keys = SETTABLE_KEYS.join(", ")
    )]
    UnknownKey(String),

    #[error("Invalid quantity for '{key}': {source}")]
    InvalidQuantity {
        key: String,
        #[source]
        source: QuantityError,
    },

    #[error("Invalid integer value for '{key}': '{value}'")]
    InvalidInteger { key: String, value: String },
}

pub const SETTABLE_KEYS: [&str; 4] = [
    "protocol.max-pressure",
    "protocol.max-temperature",
    "protocol.barostat-frequency",
    "integrator.timestep",
];

/// Splits a `-S KEY=VALUE` argument at the first `=`.
pub fn split_assignment(assignment: &str) -> Result<(&str, &str), ParseError> {
    assignment
        .split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, value)| !key.is_empty() && !value.is_empty())
        .ok_or_else(|| ParseError::InvalidAssignment(assignment.to_string()))
}

pub fn parse_quantity(key: &str, value: &str) -> Result<Quantity, ParseError> {
    value.parse().map_err(|source| ParseError::InvalidQuantity {
        key: key.to_string(),
        source,
    })
}

pub fn parse_integer(key: &str, value: &str) -> Result<i64, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidInteger {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_typed<T>(input: &str) -> Result<T, QuantityError>
where
    T: TryFrom<Quantity, Error = QuantityError>,
{
    input.parse::<Quantity>()?.try_into()
}

pub fn parse_pressure(input: &str) -> Result<Pressure, QuantityError> {
    parse_typed(input)
}

pub fn parse_temperature(input: &str) -> Result<Temperature, QuantityError> {
    parse_typed(input)
}

pub fn parse_time(input: &str) -> Result<Time, QuantityError> {
    parse_typed(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use twentyonestep::core::units::Dimension;

    #[test]
    fn split_assignment_splits_at_first_equals_sign() {
        assert_eq!(
            split_assignment("integrator.timestep = 2 fs").unwrap(),
            ("integrator.timestep", "2 fs")
        );
        assert_eq!(split_assignment("a=b=c").unwrap(), ("a", "b=c"));
    }

    #[test]
    fn split_assignment_rejects_missing_key_or_value() {
        for bad in ["protocol.max-pressure", "=1 bar", "protocol.max-pressure="] {
            assert_eq!(
                split_assignment(bad),
                Err(ParseError::InvalidAssignment(bad.to_string()))
            );
        }
    }

    #[test]
    fn parse_quantity_reports_key_on_failure() {
        let err = parse_quantity("protocol.max-pressure", "lots").unwrap_err();
        assert!(matches!(err, ParseError::InvalidQuantity { ref key, .. } if key == "protocol.max-pressure"));
    }

    #[test]
    fn parse_integer_rejects_fractions() {
        assert_eq!(parse_integer("protocol.barostat-frequency", "250").unwrap(), 250);
        assert!(parse_integer("protocol.barostat-frequency", "2.5").is_err());
    }

    #[test]
    fn typed_parsers_convert_units() {
        assert_eq!(parse_pressure("5 GPa").unwrap(), Pressure::bar(50_000.0));
        assert_eq!(parse_temperature("600K").unwrap(), Temperature::kelvin(600.0));
        assert_eq!(parse_time("2 fs").unwrap(), Time::femtoseconds(2.0));
    }

    #[test]
    fn typed_parsers_reject_wrong_dimension() {
        assert!(matches!(
            parse_temperature("600 bar"),
            Err(QuantityError::DimensionMismatch {
                expected: Dimension::Temperature,
                found: Dimension::Pressure,
                ..
            })
        ));
    }
}
