//! Error handling primitives for the ADS1118 driver.

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Any error reported by the underlying bus interface.
    Interface(E),
    /// The driver has not been initialized, or has already been deinitialized.
    NotInitialized,
    /// A required capability was not supplied to the builder.
    MissingLink(Capability),
    /// The single-shot conversion did not complete within the poll budget.
    Timeout,
    /// The PGA field holds a code outside the supported range table.
    InvalidRange(u8),
    /// Writing the power-down configuration during deinit failed.
    PowerDown(E),
    /// Closing the bus during deinit failed.
    BusClose(E),
}

/// Capabilities that must be bound before a driver can be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Capability {
    /// Bus interface (open, close and full-duplex transfer).
    Interface,
    /// Blocking millisecond delay provider.
    Delay,
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Interface(err)
    }
}
