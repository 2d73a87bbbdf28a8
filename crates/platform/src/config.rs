//! Board configuration and constants
//!
//! Bus clocks, panel geometry and backlight defaults for the ODROID-GO.
//! Pins are not listed here: the board hands the driver ready-made HAL pin
//! and SPI objects.

// ---------------------------------------------------------------------------
// Bus
// ---------------------------------------------------------------------------

/// SPI clock for pixel writes.
pub const SPI_WRITE_HZ: u32 = 80_000_000;
/// SPI clock for RAMRD read-back; the ILI9341 cannot be read at write speed.
pub const SPI_READ_HZ: u32 = 40_000_000;

// ---------------------------------------------------------------------------
// Panel
// ---------------------------------------------------------------------------

/// Native (rotation 0) panel width.
pub const PANEL_WIDTH: u16 = 240;
/// Native (rotation 0) panel height.
pub const PANEL_HEIGHT: u16 = 320;
/// Rotation applied at boot: landscape with the buttons below the screen.
pub const BOOT_ROTATION: u8 = 3;

// ---------------------------------------------------------------------------
// Backlight
// ---------------------------------------------------------------------------

/// Brightness after `begin`.
pub const BACKLIGHT_DEFAULT: u8 = 80;
/// ODROID-GO drives the backlight non-inverted; other boards using the
/// same driver pull the LED low to turn it on.
pub const BACKLIGHT_INVERTED: bool = false;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_boot_rotation_is_odd() {
        // Odd rotations swap width and height.
        assert_eq!(BOOT_ROTATION % 2, 1);
        assert!(PANEL_WIDTH < PANEL_HEIGHT);
    }

    #[test]
    fn read_clock_not_faster_than_write_clock() {
        assert!(SPI_READ_HZ <= SPI_WRITE_HZ);
    }
}
