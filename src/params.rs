//! Strongly typed parameter enumerations for the ADS1118 driver.
//!
//! These enums map directly to the datasheet encodings of the configuration
//! register fields and are used by [`Config`](crate::config::Config) and the
//! high-level driver APIs. Prefer these types over raw integers to keep
//! register values valid and explicit.
//!
//! # Examples
//!
//! ```rust
//! use ads1118::params::{Channel, DataRate, Range};
//!
//! let channel = Channel::Ain0Gnd;
//! let range = Range::Fs4p096V;
//! let rate = DataRate::Sps128;
//! assert_eq!(range.volts(), 4.096);
//! assert_eq!(rate.sps(), 128);
//! let _ = channel;
//! ```

use modular_bitfield::prelude::Specifier;

/// Input multiplexer selections encoded in `CONFIG[14:12]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 3]
pub enum Channel {
    /// AIN0 positive, AIN1 negative.
    Ain0Ain1 = 0b000,
    /// AIN0 positive, AIN3 negative.
    Ain0Ain3 = 0b001,
    /// AIN1 positive, AIN3 negative.
    Ain1Ain3 = 0b010,
    /// AIN2 positive, AIN3 negative.
    Ain2Ain3 = 0b011,
    /// AIN0 against GND.
    Ain0Gnd = 0b100,
    /// AIN1 against GND.
    Ain1Gnd = 0b101,
    /// AIN2 against GND.
    Ain2Gnd = 0b110,
    /// AIN3 against GND.
    Ain3Gnd = 0b111,
}

impl Channel {
    /// Every multiplexer selection in encoding order.
    pub const ALL: [Self; 8] = [
        Self::Ain0Ain1,
        Self::Ain0Ain3,
        Self::Ain1Ain3,
        Self::Ain2Ain3,
        Self::Ain0Gnd,
        Self::Ain1Gnd,
        Self::Ain2Gnd,
        Self::Ain3Gnd,
    ];

    /// Returns `true` for the single-ended (AINx to GND) selections.
    pub const fn is_single_ended(self) -> bool {
        matches!(
            self,
            Self::Ain0Gnd | Self::Ain1Gnd | Self::Ain2Gnd | Self::Ain3Gnd
        )
    }
}

/// Full-scale range (PGA) selections encoded in `CONFIG[11:9]`.
///
/// Codes `0b110` and `0b111` are not part of the table; reading them back
/// from the device is reported as [`Error::InvalidRange`](crate::Error::InvalidRange).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 3]
pub enum Range {
    /// ±6.144 V.
    Fs6p144V = 0b000,
    /// ±4.096 V.
    Fs4p096V = 0b001,
    /// ±2.048 V.
    Fs2p048V = 0b010,
    /// ±1.024 V.
    Fs1p024V = 0b011,
    /// ±0.512 V.
    Fs0p512V = 0b100,
    /// ±0.256 V.
    Fs0p256V = 0b101,
}

impl Range {
    /// Every supported range in encoding order.
    pub const ALL: [Self; 6] = [
        Self::Fs6p144V,
        Self::Fs4p096V,
        Self::Fs2p048V,
        Self::Fs1p024V,
        Self::Fs0p512V,
        Self::Fs0p256V,
    ];

    /// Returns the full-scale voltage in volts.
    pub const fn volts(self) -> f32 {
        match self {
            Self::Fs6p144V => 6.144,
            Self::Fs4p096V => 4.096,
            Self::Fs2p048V => 2.048,
            Self::Fs1p024V => 1.024,
            Self::Fs0p512V => 0.512,
            Self::Fs0p256V => 0.256,
        }
    }
}

/// Data rate selections encoded in `CONFIG[7:5]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 3]
pub enum DataRate {
    /// 8 samples per second.
    Sps8 = 0b000,
    /// 16 samples per second.
    Sps16 = 0b001,
    /// 32 samples per second.
    Sps32 = 0b010,
    /// 64 samples per second.
    Sps64 = 0b011,
    /// 128 samples per second.
    Sps128 = 0b100,
    /// 250 samples per second.
    Sps250 = 0b101,
    /// 475 samples per second.
    Sps475 = 0b110,
    /// 860 samples per second.
    Sps860 = 0b111,
}

impl DataRate {
    /// Every data rate in encoding order.
    pub const ALL: [Self; 8] = [
        Self::Sps8,
        Self::Sps16,
        Self::Sps32,
        Self::Sps64,
        Self::Sps128,
        Self::Sps250,
        Self::Sps475,
        Self::Sps860,
    ];

    /// Returns the rate in samples per second.
    pub const fn sps(self) -> u16 {
        match self {
            Self::Sps8 => 8,
            Self::Sps16 => 16,
            Self::Sps32 => 32,
            Self::Sps64 => 64,
            Self::Sps128 => 128,
            Self::Sps250 => 250,
            Self::Sps475 => 475,
            Self::Sps860 => 860,
        }
    }
}

/// Sensor source selection (`CONFIG.TS_MODE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum Mode {
    /// Conversions sample the multiplexed analog inputs.
    Adc = 0,
    /// Conversions sample the internal temperature sensor.
    Temperature = 1,
}

/// Device operating mode (`CONFIG.MODE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum ConversionMode {
    /// Free-running conversions at the configured data rate.
    Continuous = 0,
    /// One conversion per start request, powered down otherwise (reset default).
    SingleShot = 1,
}

/// DOUT/DRDY pull-up resistor selection (`CONFIG.PULL_UP_EN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum PullUp {
    /// Pull-up disabled.
    Disabled = 0,
    /// Internal weak pull-up enabled.
    Enabled = 1,
}

/// Write-qualifier pattern encoded in `CONFIG[2:1]`.
///
/// Only [`Nop::Valid`] makes the device latch the written word; every other
/// pattern is ignored, which is what keeps the `0xFF` filler bytes of a read
/// from touching the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum Nop {
    /// Invalid data, register not updated.
    Invalid0 = 0b00,
    /// Valid data, update the configuration register.
    Valid = 0b01,
    /// Invalid data, register not updated.
    Invalid2 = 0b10,
    /// Invalid data, register not updated.
    Invalid3 = 0b11,
}
