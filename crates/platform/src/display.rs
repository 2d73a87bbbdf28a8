//! Panel transport abstraction
//!
//! A TFT controller on a 4-wire SPI bus is driven by two kinds of bytes:
//! commands (D/C low) and parameters or pixel data (D/C high). [`PanelBus`]
//! captures exactly that, plus explicit bus ownership so the driver can hold
//! the bus across a burst of drawing commands and hand it back to the SD
//! card between bursts.

use crate::peripheral::SpiConfig;

/// Pixel chunk size used by the default block-write helpers.
///
/// 32 pixels = 64 bytes of stack, small enough for any task stack.
const CHUNK_PIXELS: usize = 32;

/// Command/data transport to a display controller.
///
/// Implementations are expected to keep chip-select asserted between
/// [`acquire`](Self::acquire) and [`release`](Self::release). Writes outside
/// an acquired window are a contract violation; implementations may reject
/// them or forward them unguarded.
pub trait PanelBus {
    /// Take exclusive ownership of the bus (assert CS, claim the shared lock).
    ///
    /// Returns [`BusError::Contended`] if another peripheral holds the bus.
    fn acquire(&mut self) -> Result<(), BusError>;

    /// Give the bus back (flush pending output, deassert CS, drop the lock).
    fn release(&mut self) -> Result<(), BusError>;

    /// Send one command byte with D/C low.
    fn write_command(&mut self, command: u8) -> Result<(), BusError>;

    /// Send parameter bytes with D/C high.
    fn write_data(&mut self, data: &[u8]) -> Result<(), BusError>;

    /// Read bytes back from the controller (D/C high).
    ///
    /// Only meaningful where the transport is bidirectional (MISO wired).
    fn read_data(&mut self, buffer: &mut [u8]) -> Result<(), BusError>;

    /// Switch the host to `config` for the transfers that follow.
    ///
    /// The driver drops to [`SpiConfig::PANEL_READ`] around RAMRD and goes
    /// back to [`SpiConfig::PANEL_WRITE`] afterwards. Transports with a
    /// fixed clock keep this default, which ignores the request.
    fn configure(&mut self, config: SpiConfig) -> Result<(), BusError> {
        let _ = config;
        Ok(())
    }

    /// Stream RGB565 pixels, big-endian on the wire.
    fn write_pixels(&mut self, pixels: &[u16]) -> Result<(), BusError> {
        let mut buf = [0u8; CHUNK_PIXELS * 2];
        for chunk in pixels.chunks(CHUNK_PIXELS) {
            for (dst, px) in buf.chunks_exact_mut(2).zip(chunk) {
                dst.copy_from_slice(&px.to_be_bytes());
            }
            // chunk.len() <= CHUNK_PIXELS, so the slice stays inside `buf`.
            #[allow(clippy::indexing_slicing, clippy::arithmetic_side_effects)]
            self.write_data(&buf[..chunk.len() * 2])?;
        }
        Ok(())
    }

    /// Stream `count` copies of one RGB565 colour.
    fn write_repeated(&mut self, color: u16, count: u32) -> Result<(), BusError> {
        let mut buf = [0u8; CHUNK_PIXELS * 2];
        for dst in buf.chunks_exact_mut(2) {
            dst.copy_from_slice(&color.to_be_bytes());
        }
        let mut remaining = count as usize;
        while remaining > 0 {
            let n = remaining.min(CHUNK_PIXELS);
            // n <= CHUNK_PIXELS and n <= remaining.
            #[allow(clippy::indexing_slicing, clippy::arithmetic_side_effects)]
            {
                self.write_data(&buf[..n * 2])?;
                remaining -= n;
            }
        }
        Ok(())
    }
}

/// Errors raised by a [`PanelBus`] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// SPI transfer failed.
    Spi,
    /// D/C or CS pin could not be driven.
    Gpio,
    /// The shared bus is held by another peripheral.
    Contended,
}

#[cfg(feature = "std")]
impl std::error::Error for BusError {}

impl core::fmt::Display for BusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi => write!(f, "SPI transfer error"),
            Self::Gpio => write!(f, "Panel control pin error"),
            Self::Contended => write!(f, "SPI bus held by another peripheral"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    /// Records every data write so the default helpers can be inspected.
    #[derive(Default)]
    struct Recorder {
        data: std::vec::Vec<std::vec::Vec<u8>>,
    }

    impl PanelBus for Recorder {
        fn acquire(&mut self) -> Result<(), BusError> {
            Ok(())
        }
        fn release(&mut self) -> Result<(), BusError> {
            Ok(())
        }
        fn write_command(&mut self, _command: u8) -> Result<(), BusError> {
            Ok(())
        }
        fn write_data(&mut self, data: &[u8]) -> Result<(), BusError> {
            self.data.push(data.to_vec());
            Ok(())
        }
        fn read_data(&mut self, _buffer: &mut [u8]) -> Result<(), BusError> {
            Ok(())
        }
    }

    #[test]
    fn write_pixels_is_big_endian() {
        let mut bus = Recorder::default();
        bus.write_pixels(&[0xF800, 0x001F]).unwrap();
        assert_eq!(bus.data, vec![vec![0xF8, 0x00, 0x00, 0x1F]]);
    }

    #[test]
    fn write_repeated_splits_into_chunks() {
        let mut bus = Recorder::default();
        bus.write_repeated(0x07E0, 70).unwrap();
        let lens: std::vec::Vec<usize> = bus.data.iter().map(std::vec::Vec::len).collect();
        assert_eq!(lens, vec![64, 64, 12], "32 + 32 + 6 pixels");
        let bytes: std::vec::Vec<u8> = bus.data.concat();
        assert!(bytes.chunks(2).all(|p| p == [0x07, 0xE0]));
    }

    #[test]
    fn write_repeated_zero_count_sends_nothing() {
        let mut bus = Recorder::default();
        bus.write_repeated(0xFFFF, 0).unwrap();
        assert!(bus.data.is_empty());
    }

    #[test]
    fn bus_error_display() {
        assert_eq!(
            std::format!("{}", BusError::Contended),
            "SPI bus held by another peripheral"
        );
    }
}
