use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Div, Mul};

const BAR_PER_ATMOSPHERE: f64 = 1.013_25;
const PICOSECONDS_PER_FEMTOSECOND: f64 = 1.0e-3;
const PICOSECONDS_PER_NANOSECOND: f64 = 1.0e3;

/// Absolute temperature, stored in kelvin.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Temperature(f64);

impl Temperature {
    pub const fn kelvin(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub fn as_kelvin(self) -> f64 {
        self.0
    }

    /// Strictly positive and finite.
    pub fn is_physical(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} K", self.0)
    }
}

/// Pressure, stored in bar.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pressure(f64);

impl Pressure {
    pub const fn bar(value: f64) -> Self {
        Self(value)
    }

    pub fn atmospheres(value: f64) -> Self {
        Self(value * BAR_PER_ATMOSPHERE)
    }

    #[inline]
    pub fn as_bar(self) -> f64 {
        self.0
    }

    pub fn is_physical(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl Mul<f64> for Pressure {
    type Output = Pressure;

    fn mul(self, rhs: f64) -> Self::Output {
        Pressure(self.0 * rhs)
    }
}

impl fmt::Display for Pressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bar", self.0)
    }
}

/// Simulated time span, stored in picoseconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64);

impl Time {
    pub const fn picoseconds(value: f64) -> Self {
        Self(value)
    }

    pub fn femtoseconds(value: f64) -> Self {
        Self(value * PICOSECONDS_PER_FEMTOSECOND)
    }

    pub fn nanoseconds(value: f64) -> Self {
        Self(value * PICOSECONDS_PER_NANOSECOND)
    }

    #[inline]
    pub fn as_picoseconds(self) -> f64 {
        self.0
    }

    pub fn is_physical(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Self::Output {
        Time(self.0 * rhs)
    }
}

impl Div for Time {
    type Output = f64;

    fn div(self, rhs: Self) -> Self::Output {
        self.0 / rhs.0
    }
}

impl std::iter::Sum for Time {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Time(iter.map(|t| t.0).sum())
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ps", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atmospheres_convert_to_bar() {
        let p = Pressure::atmospheres(2.0);
        assert!((p.as_bar() - 2.026_5).abs() < 1e-12);
    }

    #[test]
    fn femtoseconds_and_nanoseconds_convert_to_picoseconds() {
        assert!((Time::femtoseconds(2.0).as_picoseconds() - 0.002).abs() < 1e-15);
        assert_eq!(Time::nanoseconds(1.5).as_picoseconds(), 1500.0);
    }

    #[test]
    fn pressure_scales_by_fraction() {
        let peak = Pressure::bar(50_000.0);
        assert_eq!(peak * 0.02, Pressure::bar(1_000.0));
        assert_eq!(peak * 1.0, peak);
    }

    #[test]
    fn dividing_times_yields_dimensionless_ratio() {
        let ratio = Time::picoseconds(50.0) / Time::femtoseconds(2.0);
        assert!((ratio - 25_000.0).abs() < 1e-6);
    }

    #[test]
    fn sum_of_times_adds_picoseconds() {
        let total: Time = [Time::picoseconds(5.0), Time::picoseconds(10.0)]
            .into_iter()
            .sum();
        assert_eq!(total, Time::picoseconds(15.0));
    }

    #[test]
    fn is_physical_rejects_zero_negative_and_non_finite_values() {
        assert!(Temperature::kelvin(300.0).is_physical());
        assert!(!Temperature::kelvin(0.0).is_physical());
        assert!(!Pressure::bar(-1.0).is_physical());
        assert!(!Time::picoseconds(f64::NAN).is_physical());
        assert!(!Time::picoseconds(f64::INFINITY).is_physical());
    }

    #[test]
    fn display_includes_canonical_unit_symbol() {
        assert_eq!(Temperature::kelvin(300.0).to_string(), "300 K");
        assert_eq!(Pressure::bar(50_000.0).to_string(), "50000 bar");
        assert_eq!(Time::picoseconds(50.0).to_string(), "50 ps");
    }
}
