//! Register map definitions for the ADS1118 converter.
//!
//! The ADS1118 exposes a single 16-bit configuration register. There is no
//! address phase: every SPI frame shifts a configuration word in while the
//! conversion result (and optionally a copy of the configuration) shifts out.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{Channel, ConversionMode, DataRate, Mode, Nop, PullUp, Range};

/// Datasheet reset value of the configuration register.
pub const CONFIG_RESET_VALUE: u16 = 0x058B;
/// Filler byte clocked out while reading; its NOP pattern is never latched.
pub const READ_FILLER: u8 = 0xFF;
/// Frame length of a register read (data echo followed by configuration echo).
pub const CONFIG_READ_LEN: usize = 4;
/// Frame length of a register write.
pub const CONFIG_WRITE_LEN: usize = 2;
/// Frame length of a conversion data read.
pub const DATA_READ_LEN: usize = 2;
/// Offset of the configuration echo inside a register read frame.
pub const CONFIG_ECHO_OFFSET: usize = 2;

/// Bitfield representation of the 16-bit configuration register.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigRegister {
    #[skip]
    __: B1,
    // Write qualifier (bits 2:1).
    pub nop: Nop,
    // DOUT pull-up enable (bit 3).
    pub pull_up: PullUp,
    // ADC or temperature sensor source (bit 4).
    pub mode: Mode,
    // Data rate selection (bits 7:5).
    pub data_rate: DataRate,
    // Continuous or single-shot operation (bit 8).
    pub conversion_mode: ConversionMode,
    // Full-scale range selection (bits 11:9).
    pub range: Range,
    // Input multiplexer selection (bits 14:12).
    pub channel: Channel,
    // Single-shot start on write, conversion done on read (bit 15).
    pub start: bool,
}

impl ConfigRegister {
    /// Marks the word as a valid configuration update.
    pub fn validated(mut self) -> Self {
        self.set_nop(Nop::Valid);
        self
    }
}

impl From<u16> for ConfigRegister {
    fn from(value: u16) -> Self {
        Self::from_bytes(value.to_le_bytes())
    }
}

impl From<ConfigRegister> for u16 {
    fn from(value: ConfigRegister) -> Self {
        u16::from_le_bytes(value.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Validates that the reset value decodes to the datasheet defaults.
    #[test]
    fn reset_value_matches_datasheet() {
        let config = ConfigRegister::from(CONFIG_RESET_VALUE);
        assert!(!config.start());
        assert_eq!(config.channel(), Channel::Ain0Ain1);
        assert_eq!(config.range(), Range::Fs2p048V);
        assert_eq!(config.conversion_mode(), ConversionMode::SingleShot);
        assert_eq!(config.data_rate(), DataRate::Sps128);
        assert_eq!(config.mode(), Mode::Adc);
        assert_eq!(config.pull_up(), PullUp::Enabled);
        assert_eq!(config.nop(), Nop::Valid);
    }

    #[test]
    fn fields_land_on_datasheet_bits() {
        let config = ConfigRegister::new()
            .with_start(true)
            .with_channel(Channel::Ain0Gnd)
            .with_range(Range::Fs6p144V)
            .with_conversion_mode(ConversionMode::SingleShot)
            .with_data_rate(DataRate::Sps860)
            .with_mode(Mode::Temperature)
            .with_pull_up(PullUp::Disabled)
            .with_nop(Nop::Valid);

        assert_eq!(u16::from(config), 0b1_100_000_1_111_1_0_01_0);
    }

    #[test]
    fn reserved_bit_survives_roundtrip() {
        let config = ConfigRegister::from(0x0001u16).with_channel(Channel::Ain3Gnd);
        assert_eq!(u16::from(config), 0x7001);
    }

    #[test]
    fn out_of_table_range_is_reported() {
        let config = ConfigRegister::from(0b110u16 << 9);
        assert!(config.range_or_err().is_err());

        let config = ConfigRegister::from(0b111u16 << 9);
        assert!(config.range_or_err().is_err());
    }

    #[test]
    fn read_filler_is_never_a_valid_update() {
        let filler = u16::from_be_bytes([READ_FILLER, READ_FILLER]);
        assert_ne!(ConfigRegister::from(filler).nop(), Nop::Valid);
        assert_eq!(ConfigRegister::from(filler).validated().nop(), Nop::Valid);
    }
}
