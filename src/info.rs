//! Static chip description.

/// Descriptive record for the ADS1118 and this driver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceInfo {
    /// Chip name.
    pub chip_name: &'static str,
    /// Manufacturer name.
    pub manufacturer_name: &'static str,
    /// Bus interface name.
    pub interface: &'static str,
    /// Minimum supply voltage in volts.
    pub supply_voltage_min_v: f32,
    /// Maximum supply voltage in volts.
    pub supply_voltage_max_v: f32,
    /// Maximum supply current in milliamperes.
    pub max_current_ma: f32,
    /// Minimum operating temperature in °C.
    pub temperature_min: f32,
    /// Maximum operating temperature in °C.
    pub temperature_max: f32,
    /// Driver version.
    pub driver_version: &'static str,
}

/// Datasheet limits of the ADS1118.
pub const DEVICE_INFO: DeviceInfo = DeviceInfo {
    chip_name: "Texas Instruments ADS1118",
    manufacturer_name: "Texas Instruments",
    interface: "SPI",
    supply_voltage_min_v: 2.0,
    supply_voltage_max_v: 5.5,
    max_current_ma: 0.3,
    temperature_min: -40.0,
    temperature_max: 125.0,
    driver_version: env!("CARGO_PKG_VERSION"),
};
