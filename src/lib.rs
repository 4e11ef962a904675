#![no_std]

// Declared first so the logging macros are visible to every other module.
mod log;

mod error;

pub mod config;
pub mod conversion;
pub mod device;
pub mod info;
pub mod interface;
pub mod params;
pub mod registers;

pub use crate::conversion::Reading;
pub use crate::device::{Ads1118, Ads1118Builder};
pub use crate::error::{Capability, Error, Result};
pub use crate::info::DeviceInfo;
