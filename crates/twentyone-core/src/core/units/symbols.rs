use super::tagged::Dimension;
use phf::{Map, phf_map};

/// Recognized unit symbols, mapped to their dimension and the factor that converts a
/// value in that unit into the canonical unit of the dimension (K, bar, ps).
pub(super) static UNIT_SYMBOLS: Map<&'static str, (Dimension, f64)> = phf_map! {
    // --- Temperature ---
    "K" => (Dimension::Temperature, 1.0),

    // --- Pressure ---
    "bar" => (Dimension::Pressure, 1.0),
    "atm" => (Dimension::Pressure, 1.013_25),
    "Pa" => (Dimension::Pressure, 1.0e-5),
    "kPa" => (Dimension::Pressure, 1.0e-2),
    "MPa" => (Dimension::Pressure, 10.0),
    "GPa" => (Dimension::Pressure, 1.0e4),

    // --- Time ---
    "fs" => (Dimension::Time, 1.0e-3),
    "ps" => (Dimension::Time, 1.0),
    "ns" => (Dimension::Time, 1.0e3),
};

pub(super) fn lookup(symbol: &str) -> Option<(Dimension, f64)> {
    UNIT_SYMBOLS.get(symbol).copied()
}
