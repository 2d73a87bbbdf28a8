//! Driver error type.

use platform::BusError;

/// Errors returned by drawing operations.
///
/// Geometry problems (offscreen rectangles, zero extents, oversized radii)
/// are never errors: they clip or do nothing. Only the transport can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// SPI transfer failed
    Communication,
    /// Reset, CS, D/C or backlight pin could not be driven
    Gpio,
    /// The shared SPI bus is held by another peripheral
    Busy,
}

#[cfg(feature = "std")]
impl std::error::Error for DisplayError {}

impl core::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Communication => write!(f, "Display communication error"),
            Self::Gpio => write!(f, "Display control pin error"),
            Self::Busy => write!(f, "SPI bus is held by another peripheral"),
        }
    }
}

impl From<BusError> for DisplayError {
    fn from(e: BusError) -> Self {
        match e {
            BusError::Spi => Self::Communication,
            BusError::Gpio => Self::Gpio,
            BusError::Contended => Self::Busy,
        }
    }
}
