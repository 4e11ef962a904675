//! Acquisition profile for the ADS1118 driver.

use crate::params::{Channel, DataRate, Mode, PullUp, Range};

/// User-facing acquisition settings for the ADS1118.
///
/// Applied field by field with [`Ads1118::configure`](crate::Ads1118::configure).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Input multiplexer selection.
    pub channel: Channel,
    /// Full-scale range.
    pub range: Range,
    /// Data rate.
    pub rate: DataRate,
    /// ADC or temperature sensor source.
    pub mode: Mode,
    /// DOUT pull-up selection.
    pub pull_up: PullUp,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the input channel.
    pub fn channel(mut self, channel: Channel) -> Self {
        self.config.channel = channel;
        self
    }

    /// Overrides the full-scale range.
    pub fn range(mut self, range: Range) -> Self {
        self.config.range = range;
        self
    }

    /// Overrides the data rate.
    pub fn rate(mut self, rate: DataRate) -> Self {
        self.config.rate = rate;
        self
    }

    /// Selects the ADC inputs or the temperature sensor.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Sets the DOUT pull-up selection.
    pub fn pull_up(mut self, pull_up: PullUp) -> Self {
        self.config.pull_up = pull_up;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel: Channel::Ain0Gnd,
            range: Range::Fs6p144V,
            rate: DataRate::Sps128,
            mode: Mode::Adc,
            pull_up: PullUp::Disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_only_requested_fields() {
        let config = Config::new()
            .channel(Channel::Ain2Ain3)
            .rate(DataRate::Sps860)
            .build();

        assert_eq!(config.channel, Channel::Ain2Ain3);
        assert_eq!(config.rate, DataRate::Sps860);
        assert_eq!(config.range, Range::Fs6p144V);
        assert_eq!(config.mode, Mode::Adc);
        assert_eq!(config.pull_up, PullUp::Disabled);
    }
}
