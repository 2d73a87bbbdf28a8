//! ILI9341 command set and power-on register table.

/// ILI9341 command codes used by the driver.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Software reset; wait 5 ms before the next command.
    SoftwareReset = 0x01,
    /// Enter sleep; wait 5 ms before the next command.
    SleepIn = 0x10,
    /// Leave sleep; wait 120 ms before DISPON.
    SleepOut = 0x11,
    /// Gamma curve select, 1 data byte.
    GammaSet = 0x26,
    /// Display inversion off.
    InversionOff = 0x20,
    /// Display inversion on.
    InversionOn = 0x21,
    /// Display on.
    DisplayOn = 0x29,
    /// Column address set, 4 data bytes (start, end; big-endian u16).
    ColumnAddressSet = 0x2A,
    /// Page (row) address set, 4 data bytes.
    PageAddressSet = 0x2B,
    /// Memory write, pixel data follows.
    MemoryWrite = 0x2C,
    /// Memory read: one dummy byte, then 3 bytes per pixel.
    MemoryRead = 0x2E,
    /// Memory access control, 1 data byte (MADCTL bits).
    MemoryAccessControl = 0x36,
    /// Pixel format, 1 data byte.
    PixelFormat = 0x3A,
    /// Frame rate control (normal mode), 2 data bytes.
    FrameRateControl = 0xB1,
    /// Display function control, 3 data bytes.
    DisplayFunctionControl = 0xB6,
    /// Power control 1, 1 data byte.
    PowerControl1 = 0xC0,
    /// Power control 2, 1 data byte.
    PowerControl2 = 0xC1,
    /// VCOM control 1, 2 data bytes.
    VcomControl1 = 0xC5,
    /// VCOM control 2, 1 data byte.
    VcomControl2 = 0xC7,
    /// Positive gamma correction, 15 data bytes.
    PositiveGamma = 0xE0,
    /// Negative gamma correction, 15 data bytes.
    NegativeGamma = 0xE1,
    /// Enable 3G, 1 data byte.
    Enable3G = 0xF2,
}

// ---------------------------------------------------------------------------
// MADCTL bits
// ---------------------------------------------------------------------------

/// Row address order (mirror Y).
pub const MADCTL_MY: u8 = 0x80;
/// Column address order (mirror X).
pub const MADCTL_MX: u8 = 0x40;
/// Row/column exchange.
pub const MADCTL_MV: u8 = 0x20;
/// BGR colour filter panel.
pub const MADCTL_BGR: u8 = 0x08;

/// MADCTL for each of the eight rotations.
///
/// 0–3 are the usual quarter turns; 4–7 are their mirrored counterparts,
/// used to draw bottom-up sources (BMP rows) without reordering them.
pub const ROTATION_MADCTL: [u8; 8] = [
    MADCTL_MX | MADCTL_BGR,
    MADCTL_MV | MADCTL_BGR,
    MADCTL_MY | MADCTL_BGR,
    MADCTL_MX | MADCTL_MY | MADCTL_MV | MADCTL_BGR,
    MADCTL_MX | MADCTL_MY | MADCTL_BGR,
    MADCTL_MV | MADCTL_MX | MADCTL_BGR,
    MADCTL_BGR,
    MADCTL_MY | MADCTL_MV | MADCTL_BGR,
];

/// MADCTL value for rotation `m % 8`.
#[allow(clippy::indexing_slicing)] // m % 8 < ROTATION_MADCTL.len()
pub const fn rotation_madctl(m: u8) -> u8 {
    ROTATION_MADCTL[(m % 8) as usize]
}

/// 16 bits per pixel for both the RGB and MCU interfaces.
pub const PIXEL_FORMAT_RGB565: u8 = 0x55;

// ---------------------------------------------------------------------------
// Power-on register table
// ---------------------------------------------------------------------------

/// Register writes sent between SWRESET and SLPOUT.
///
/// The undocumented 0xEF/0xCF/0xED/0xE8/0xCB/0xF7/0xEA entries are the
/// vendor power-sequence values every ILI9341 module ships with.
pub const INIT_SEQUENCE: &[(u8, &[u8])] = &[
    (0xEF, &[0x03, 0x80, 0x02]),
    (0xCF, &[0x00, 0xC1, 0x30]),
    (0xED, &[0x64, 0x03, 0x12, 0x81]),
    (0xE8, &[0x85, 0x00, 0x78]),
    (0xCB, &[0x39, 0x2C, 0x00, 0x34, 0x02]),
    (0xF7, &[0x20]),
    (0xEA, &[0x00, 0x00]),
    (Command::PowerControl1 as u8, &[0x23]),
    (Command::PowerControl2 as u8, &[0x10]),
    (Command::VcomControl1 as u8, &[0x3E, 0x28]),
    (Command::VcomControl2 as u8, &[0x86]),
    (Command::MemoryAccessControl as u8, &[0x48]),
    (Command::PixelFormat as u8, &[PIXEL_FORMAT_RGB565]),
    (Command::FrameRateControl as u8, &[0x00, 0x13]),
    (Command::DisplayFunctionControl as u8, &[0x08, 0x82, 0x27]),
    (Command::Enable3G as u8, &[0x00]),
    (Command::GammaSet as u8, &[0x01]),
    (
        Command::PositiveGamma as u8,
        &[
            0x0F, 0x31, 0x2B, 0x0C, 0x0E, 0x08, 0x4E, 0xF1, 0x37, 0x07, 0x10, 0x03, 0x0E, 0x09,
            0x00,
        ],
    ),
    (
        Command::NegativeGamma as u8,
        &[
            0x00, 0x0E, 0x14, 0x03, 0x11, 0x07, 0x31, 0xC1, 0x48, 0x08, 0x0F, 0x0C, 0x31, 0x36,
            0x0F,
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_rotations_exchange_rows_and_columns() {
        for (rotation, madctl) in ROTATION_MADCTL.iter().enumerate() {
            let exchanged = madctl & MADCTL_MV != 0;
            assert_eq!(exchanged, rotation % 2 == 1, "rotation {rotation}");
            assert_ne!(madctl & MADCTL_BGR, 0, "BGR panel at rotation {rotation}");
        }
    }

    #[test]
    fn gamma_tables_are_fifteen_bytes() {
        for (cmd, data) in INIT_SEQUENCE {
            if *cmd == Command::PositiveGamma as u8 || *cmd == Command::NegativeGamma as u8 {
                assert_eq!(data.len(), 15);
            }
        }
    }

    #[test]
    fn address_commands_match_datasheet() {
        assert_eq!(Command::ColumnAddressSet as u8, 0x2A);
        assert_eq!(Command::PageAddressSet as u8, 0x2B);
        assert_eq!(Command::MemoryWrite as u8, 0x2C);
        assert_eq!(Command::MemoryRead as u8, 0x2E);
    }
}
