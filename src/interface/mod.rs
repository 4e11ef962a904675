//! Bus interface abstraction for the ADS1118 driver.

pub mod spi;

use crate::registers::{
    CONFIG_ECHO_OFFSET,
    CONFIG_READ_LEN,
    CONFIG_WRITE_LEN,
    DATA_READ_LEN,
    READ_FILLER,
};

/// Abstraction over the low-level bus access required by the driver.
///
/// Implementors only provide the full-duplex [`transfer`](Self::transfer); the
/// three ADS1118 frame shapes are built on top of it.
pub trait Ads1118Interface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Brings the bus up. Called once by [`Ads1118::init`](crate::Ads1118::init).
    fn open(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }

    /// Releases the bus. Called last by [`Ads1118::deinit`](crate::Ads1118::deinit).
    fn close(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }

    /// Shifts `buf` out and replaces its contents with the bytes shifted in.
    fn transfer(&mut self, buf: &mut [u8]) -> core::result::Result<(), Self::Error>;

    /// Reads the configuration register.
    ///
    /// The first two bytes shifted in are the pending conversion result; the
    /// configuration echo follows in the last two.
    fn read_config(&mut self) -> core::result::Result<u16, Self::Error> {
        let mut frame = [READ_FILLER; CONFIG_READ_LEN];
        self.transfer(&mut frame)?;
        Ok(u16::from_be_bytes([
            frame[CONFIG_ECHO_OFFSET],
            frame[CONFIG_ECHO_OFFSET + 1],
        ]))
    }

    /// Writes the configuration register, MSB first. The response is discarded.
    fn write_config(&mut self, value: u16) -> core::result::Result<(), Self::Error> {
        let mut frame: [u8; CONFIG_WRITE_LEN] = value.to_be_bytes();
        self.transfer(&mut frame)
    }

    /// Reads the signed conversion result without updating the configuration.
    fn read_conversion(&mut self) -> core::result::Result<i16, Self::Error> {
        let mut frame = [READ_FILLER; DATA_READ_LEN];
        self.transfer(&mut frame)?;
        Ok(i16::from_be_bytes(frame))
    }
}
