//! Raw code to physical unit conversion.

use crate::params::Range;

/// Denominator mapping a signed 16-bit code onto the full-scale range.
const CODE_SPAN: f32 = 32_768.0;
/// Temperature sensor resolution: 0.03125 °C per LSB of the 14-bit
/// left-justified result.
const TEMPERATURE_LSB_C: f32 = 0.031_25;
/// The temperature result occupies the top 14 bits of the 16-bit code.
const TEMPERATURE_JUSTIFY: f32 = 4.0;

/// A single conversion result together with its scaled value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Signed raw conversion code.
    pub raw: i16,
    /// Code scaled into volts with the range in effect at read time.
    pub volts: f32,
}

impl Reading {
    /// Scales `raw` with `range` into a new reading.
    pub fn new(raw: i16, range: Range) -> Self {
        Self {
            raw,
            volts: raw_to_volts(raw, range),
        }
    }
}

/// Converts a raw ADC code into volts for the given full-scale range.
pub fn raw_to_volts(raw: i16, range: Range) -> f32 {
    f32::from(raw) * range.volts() / CODE_SPAN
}

/// Converts a raw temperature-mode code into degrees Celsius.
pub fn raw_to_celsius(raw: i16) -> f32 {
    f32::from(raw) * TEMPERATURE_LSB_C / TEMPERATURE_JUSTIFY
}
