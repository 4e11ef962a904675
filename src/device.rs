//! High-level ADS1118 device driver implementation.

use crate::config::Config;
use crate::conversion::{raw_to_celsius, Reading};
use crate::error::{Capability, Error, Result};
use crate::info::{DeviceInfo, DEVICE_INFO};
use crate::interface::spi::SpiInterface;
use crate::interface::Ads1118Interface;
use crate::params::{Channel, ConversionMode, DataRate, Mode, PullUp, Range};
use crate::registers::ConfigRegister;
use embedded_hal::delay::DelayNs;
use embedded_hal::spi::SpiDevice;

// Wait between two completion polls of a single-shot conversion (milliseconds).
const SINGLE_SHOT_POLL_INTERVAL_MS: u32 = 8;
// Number of completion polls before a single-shot conversion times out.
const SINGLE_SHOT_POLL_BUDGET: u32 = 500;
// Position and width of the PGA field, used to report out-of-table codes.
const RANGE_SHIFT: u16 = 9;
const RANGE_MASK: u16 = 0x07;

/// High-level synchronous driver for the ADS1118 converter.
///
/// The configuration register is never cached: every getter reads it back
/// from the device and every setter performs a read-modify-write.
pub struct Ads1118<IFACE, DELAY> {
    interface: IFACE,
    delay: DELAY,
    initialized: bool,
}

/// Collects the capabilities an [`Ads1118`] needs before it can exist.
pub struct Ads1118Builder<IFACE, DELAY> {
    interface: Option<IFACE>,
    delay: Option<DELAY>,
}

impl<IFACE, DELAY> Ads1118Builder<IFACE, DELAY> {
    /// Creates a builder with no capability bound.
    pub fn new() -> Self {
        Self {
            interface: None,
            delay: None,
        }
    }

    /// Binds the bus interface.
    pub fn interface(mut self, interface: IFACE) -> Self {
        self.interface = Some(interface);
        self
    }

    /// Binds the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }
}

impl<IFACE, DELAY> Default for Ads1118Builder<IFACE, DELAY> {
    fn default() -> Self {
        Self::new()
    }
}

impl<IFACE, DELAY> Ads1118Builder<IFACE, DELAY>
where
    IFACE: Ads1118Interface,
{
    /// Builds the driver, failing with [`Error::MissingLink`] when a
    /// capability is missing. The bus is not touched.
    pub fn build(self) -> Result<Ads1118<IFACE, DELAY>, IFACE::Error> {
        let Some(interface) = self.interface else {
            error!("ads1118: interface is not linked");
            return Err(Error::MissingLink(Capability::Interface));
        };
        let Some(delay) = self.delay else {
            error!("ads1118: delay is not linked");
            return Err(Error::MissingLink(Capability::Delay));
        };

        Ok(Ads1118::new(interface, delay))
    }
}

impl<IFACE, DELAY> Ads1118<IFACE, DELAY> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new, not yet initialized, driver instance.
    pub fn new(interface: IFACE, delay: DELAY) -> Self {
        Self {
            interface,
            delay,
            initialized: false,
        }
    }

    /// Starts a builder for callers that bind capabilities piecemeal.
    pub fn builder() -> Ads1118Builder<IFACE, DELAY> {
        Ads1118Builder::new()
    }

    /// Consumes the driver and returns the owned interface and delay.
    pub fn release(self) -> (IFACE, DELAY) {
        (self.interface, self.delay)
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    /// Returns `true` between a successful [`init`](Self::init) and a
    /// successful [`deinit`](Self::deinit).
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns the static chip description. Does not access the device.
    pub fn info() -> DeviceInfo {
        DEVICE_INFO
    }
}

impl<SPI, DELAY> Ads1118<SpiInterface<SPI>, DELAY>
where
    SPI: SpiDevice,
{
    // ==================================================================
    // == SPI Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for SPI transports.
    pub fn new_spi(spi: SPI, delay: DELAY) -> Self {
        Self::new(SpiInterface::new(spi), delay)
    }

    /// Releases the driver, returning the SPI device and delay.
    pub fn release_spi(self) -> (SPI, DELAY) {
        let (iface, delay) = self.release();
        (iface.release(), delay)
    }
}

impl<IFACE, DELAY, CommE> Ads1118<IFACE, DELAY>
where
    IFACE: Ads1118Interface<Error = CommE>,
    DELAY: DelayNs,
{
    // ==================================================================
    // == Lifecycle =====================================================
    // ==================================================================
    /// Opens the bus and marks the driver initialized.
    pub fn init(&mut self) -> Result<(), CommE> {
        self.interface.open().map_err(|err| {
            error!("ads1118: bus open failed");
            Error::Interface(err)
        })?;

        self.initialized = true;
        debug!("ads1118: initialized");
        Ok(())
    }

    /// Powers the converter down and closes the bus.
    ///
    /// A failure while writing the power-down configuration is reported as
    /// [`Error::PowerDown`], a failure while closing the bus as
    /// [`Error::BusClose`]. In both cases the driver stays initialized.
    pub fn deinit(&mut self) -> Result<(), CommE> {
        self.ensure_initialized()?;

        let current = self.interface.read_config().map_err(|err| {
            error!("ads1118: read config failed");
            Error::PowerDown(err)
        })?;
        let powered_down = ConfigRegister::from(current)
            .with_conversion_mode(ConversionMode::SingleShot)
            .validated();
        self.interface
            .write_config(u16::from(powered_down))
            .map_err(|err| {
                error!("ads1118: write config failed");
                Error::PowerDown(err)
            })?;

        self.interface.close().map_err(|err| {
            error!("ads1118: bus close failed");
            Error::BusClose(err)
        })?;

        self.initialized = false;
        debug!("ads1118: deinitialized");
        Ok(())
    }

    /// Applies every field of `config`, stopping at the first failure.
    pub fn configure(&mut self, config: &Config) -> Result<(), CommE> {
        self.set_channel(config.channel)?;
        self.set_range(config.range)?;
        self.set_rate(config.rate)?;
        self.set_mode(config.mode)?;
        self.set_dout_pull_up(config.pull_up)?;
        Ok(())
    }

    // ==================================================================
    // == Register Fields ===============================================
    // ==================================================================
    /// Selects the input multiplexer pair.
    pub fn set_channel(&mut self, channel: Channel) -> Result<(), CommE> {
        self.update_config(|config| config.set_channel(channel))
    }

    /// Reads the input multiplexer pair.
    pub fn channel(&mut self) -> Result<Channel, CommE> {
        Ok(self.current_config()?.channel())
    }

    /// Selects the full-scale range.
    pub fn set_range(&mut self, range: Range) -> Result<(), CommE> {
        self.update_config(|config| config.set_range(range))
    }

    /// Reads the full-scale range.
    pub fn range(&mut self) -> Result<Range, CommE> {
        let config = self.current_config()?;
        Self::range_of(config)
    }

    /// Selects the data rate.
    pub fn set_rate(&mut self, rate: DataRate) -> Result<(), CommE> {
        self.update_config(|config| config.set_data_rate(rate))
    }

    /// Reads the data rate.
    pub fn rate(&mut self) -> Result<DataRate, CommE> {
        Ok(self.current_config()?.data_rate())
    }

    /// Selects the ADC inputs or the internal temperature sensor.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), CommE> {
        self.update_config(|config| config.set_mode(mode))
    }

    /// Reads the sensor source selection.
    pub fn mode(&mut self) -> Result<Mode, CommE> {
        Ok(self.current_config()?.mode())
    }

    /// Enables or disables the DOUT pull-up.
    pub fn set_dout_pull_up(&mut self, pull_up: PullUp) -> Result<(), CommE> {
        self.update_config(|config| config.set_pull_up(pull_up))
    }

    /// Reads the DOUT pull-up selection.
    pub fn dout_pull_up(&mut self) -> Result<PullUp, CommE> {
        Ok(self.current_config()?.pull_up())
    }

    /// Reads the continuous / single-shot operating mode.
    pub fn conversion_mode(&mut self) -> Result<ConversionMode, CommE> {
        Ok(self.current_config()?.conversion_mode())
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    /// Runs one single-shot conversion and returns the scaled result.
    ///
    /// The range is captured before the conversion is started. Completion is
    /// polled every 8 ms, at most 500 times, before [`Error::Timeout`].
    pub fn single_read(&mut self) -> Result<Reading, CommE> {
        self.ensure_initialized()?;

        let config = self.read_register()?;
        let range = Self::range_of(config)?;
        let start = config
            .with_conversion_mode(ConversionMode::SingleShot)
            .with_start(true)
            .validated();
        self.write_register(start)?;

        self.wait_for_conversion()?;

        let raw = self.read_data()?;
        Ok(Reading::new(raw, range))
    }

    /// Reads the latest result of a running continuous conversion.
    ///
    /// Requires a prior [`start_continuous_read`](Self::start_continuous_read).
    /// No completion check is made; callers pace reads to the data rate.
    pub fn continuous_read(&mut self) -> Result<Reading, CommE> {
        self.ensure_initialized()?;

        let range = Self::range_of(self.read_register()?)?;
        let raw = self.read_data()?;
        Ok(Reading::new(raw, range))
    }

    /// Switches the converter into continuous conversion mode.
    pub fn start_continuous_read(&mut self) -> Result<(), CommE> {
        self.update_config(|config| config.set_conversion_mode(ConversionMode::Continuous))
    }

    /// Halts continuous conversions by returning to single-shot mode.
    pub fn stop_continuous_read(&mut self) -> Result<(), CommE> {
        self.update_config(|config| config.set_conversion_mode(ConversionMode::SingleShot))
    }

    /// Converts a temperature-mode raw code into degrees Celsius.
    pub fn temperature_convert(&self, raw: i16) -> Result<f32, CommE> {
        self.ensure_initialized()?;
        Ok(raw_to_celsius(raw))
    }

    /// Runs a single-shot conversion and returns volts.
    pub fn read_voltage(&mut self) -> Result<f32, CommE> {
        Ok(self.single_read()?.volts)
    }

    /// Runs a single-shot conversion and interprets it as a temperature.
    ///
    /// The sensor source must already be [`Mode::Temperature`].
    pub fn read_temperature(&mut self) -> Result<f32, CommE> {
        let reading = self.single_read()?;
        self.temperature_convert(reading.raw)
    }

    /// Reads the running continuous conversion as a temperature.
    pub fn read_continuous_temperature(&mut self) -> Result<f32, CommE> {
        let reading = self.continuous_read()?;
        self.temperature_convert(reading.raw)
    }

    /// Converts each channel in turn with a single-shot read.
    ///
    /// Writes volts into `volts` and returns the number of readings taken,
    /// bounded by the shorter of the two slices.
    pub fn read_channels(&mut self, channels: &[Channel], volts: &mut [f32]) -> Result<usize, CommE> {
        self.ensure_initialized()?;

        let mut count = 0;
        for (&channel, slot) in channels.iter().zip(volts.iter_mut()) {
            self.set_channel(channel)?;
            *slot = self.single_read()?.volts;
            count += 1;
        }

        Ok(count)
    }

    /// Exchanges `buf` with the device as-is, for operations the driver does
    /// not cover.
    pub fn transmit(&mut self, buf: &mut [u8]) -> Result<(), CommE> {
        self.ensure_initialized()?;
        self.interface.transfer(buf).map_err(|err| {
            warn!("ads1118: transmit failed");
            Error::Interface(err)
        })
    }

    // ==================================================================
    // == Internal Register Helpers =====================================
    // ==================================================================
    fn ensure_initialized(&self) -> Result<(), CommE> {
        if self.initialized {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    fn current_config(&mut self) -> Result<ConfigRegister, CommE> {
        self.ensure_initialized()?;
        self.read_register()
    }

    fn update_config<F>(&mut self, mutate: F) -> Result<(), CommE>
    where
        F: FnOnce(&mut ConfigRegister),
    {
        let mut config = self.current_config()?;
        mutate(&mut config);
        self.write_register(config.validated())
    }

    fn wait_for_conversion(&mut self) -> Result<(), CommE> {
        for _ in 0..SINGLE_SHOT_POLL_BUDGET {
            self.delay.delay_ms(SINGLE_SHOT_POLL_INTERVAL_MS);
            if self.read_register()?.start() {
                return Ok(());
            }
        }

        warn!("ads1118: read timeout");
        Err(Error::Timeout)
    }

    fn range_of(config: ConfigRegister) -> Result<Range, CommE> {
        config.range_or_err().map_err(|_| {
            let code = ((u16::from(config) >> RANGE_SHIFT) & RANGE_MASK) as u8;
            warn!("ads1118: range code {=u8} is invalid", code);
            Error::InvalidRange(code)
        })
    }

    fn read_register(&mut self) -> Result<ConfigRegister, CommE> {
        let raw = self.interface.read_config().map_err(|err| {
            warn!("ads1118: read config failed");
            Error::Interface(err)
        })?;
        trace!("ads1118: config read {=u16:#x}", raw);
        Ok(ConfigRegister::from(raw))
    }

    fn write_register(&mut self, config: ConfigRegister) -> Result<(), CommE> {
        let raw = u16::from(config);
        trace!("ads1118: config write {=u16:#x}", raw);
        self.interface.write_config(raw).map_err(|err| {
            warn!("ads1118: write config failed");
            Error::Interface(err)
        })
    }

    fn read_data(&mut self) -> Result<i16, CommE> {
        self.interface.read_conversion().map_err(|err| {
            warn!("ads1118: data read failed");
            Error::Interface(err)
        })
    }
}
