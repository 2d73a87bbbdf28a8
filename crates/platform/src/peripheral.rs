//! Peripheral abstraction layer
//!
//! SPI configuration applied through [`PanelBus::configure`](crate::PanelBus::configure)
//! and the advisory lock that arbitrates the SPI
//! bus between the display and the other peripherals wired to it (SD card,
//! optional touch controller).

use core::cell::Cell;

use critical_section::Mutex;

use crate::config::{SPI_READ_HZ, SPI_WRITE_HZ};

/// SPI configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// SPI mode (CPOL, CPHA)
    pub mode: SpiMode,
    /// Bit order
    pub bit_order: BitOrder,
}

impl SpiConfig {
    /// GRAM writes: mode 0, MSB first, at [`SPI_WRITE_HZ`].
    pub const PANEL_WRITE: Self = Self::mode0(SPI_WRITE_HZ);
    /// RAMRD read-back at [`SPI_READ_HZ`].
    pub const PANEL_READ: Self = Self::mode0(SPI_READ_HZ);

    const fn mode0(frequency: u32) -> Self {
        Self {
            frequency,
            mode: SpiMode::Mode0,
            bit_order: BitOrder::MsbFirst,
        }
    }
}

/// SPI modes (CPOL, CPHA)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiMode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

/// Bit order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    /// Most significant bit first
    MsbFirst,
    /// Least significant bit first
    LsbFirst,
}

// ---------------------------------------------------------------------------
// Shared bus lock
// ---------------------------------------------------------------------------

/// Advisory ownership flag for a shared SPI bus.
///
/// This is a flag, not a queue: [`try_acquire`](Self::try_acquire) either
/// takes the bus or reports that someone else has it. Code that touches the
/// bus without going through the lock is not prevented from doing so.
///
/// Intended to live in a `static`:
///
/// ```
/// use platform::BusLock;
///
/// static SPI_LOCK: BusLock = BusLock::new();
///
/// assert!(SPI_LOCK.try_acquire());
/// assert!(!SPI_LOCK.try_acquire());
/// SPI_LOCK.release();
/// ```
pub struct BusLock {
    held: Mutex<Cell<bool>>,
}

impl BusLock {
    /// Create an unheld lock.
    pub const fn new() -> Self {
        Self {
            held: Mutex::new(Cell::new(false)),
        }
    }

    /// Claim the bus. Returns `false` if it is already held.
    pub fn try_acquire(&self) -> bool {
        critical_section::with(|cs| {
            let held = self.held.borrow(cs);
            if held.get() {
                false
            } else {
                held.set(true);
                true
            }
        })
    }

    /// Drop the claim. Releasing an unheld lock is a no-op.
    pub fn release(&self) {
        critical_section::with(|cs| self.held.borrow(cs).set(false));
    }

    /// Whether any owner currently holds the bus.
    pub fn is_held(&self) -> bool {
        critical_section::with(|cs| self.held.borrow(cs).get())
    }
}

impl Default for BusLock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn lock_is_exclusive_until_released() {
        let lock = BusLock::new();
        assert!(!lock.is_held());
        assert!(lock.try_acquire());
        assert!(lock.is_held());
        assert!(!lock.try_acquire(), "second claim must fail");
        lock.release();
        assert!(!lock.is_held());
        assert!(lock.try_acquire());
    }

    #[test]
    fn release_of_unheld_lock_is_harmless() {
        let lock = BusLock::default();
        lock.release();
        assert!(!lock.is_held());
    }

    #[test]
    fn panel_configs_differ_only_in_clock() {
        let (write, read) = (SpiConfig::PANEL_WRITE, SpiConfig::PANEL_READ);
        assert_eq!(write.mode, SpiMode::Mode0);
        assert_eq!(write.bit_order, BitOrder::MsbFirst);
        assert!(read.frequency < write.frequency);
        assert_eq!(SpiConfig { frequency: write.frequency, ..read }, write);
    }
}
