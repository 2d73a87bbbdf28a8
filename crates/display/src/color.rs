//! RGB565 colour helpers.
//!
//! All conversions truncate: channels are shifted down, never rounded. That
//! keeps `color16to8(color8to16(c)) == c` exact for every 8-bit colour, which
//! palette-indexed sprites depend on.

// Every shift below operates on a value masked to fit, and the narrowing
// casts drop bits that the masks already cleared.
#![allow(
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::indexing_slicing
)]

/// Pack 8-bit channels into RGB565.
pub const fn color565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3)
}

/// Reduce RGB565 to RGB332.
pub const fn color16to8(color: u16) -> u8 {
    (((color & 0xE000) >> 8) | ((color & 0x0700) >> 6) | ((color & 0x0018) >> 3)) as u8
}

/// Blue 2-bit to 5-bit expansion.
const BLUE_2_TO_5: [u16; 4] = [0, 11, 21, 31];

/// Expand RGB332 to RGB565.
///
/// Red and green replicate their top bits into the low bits; blue goes
/// through a four-entry table.
pub const fn color8to16(color: u8) -> u16 {
    let c = color as u16;
    ((c & 0xE0) << 8)
        | ((c & 0xC0) << 5)
        | ((c & 0x1C) << 6)
        | ((c & 0x1C) << 3)
        | BLUE_2_TO_5[(c & 0x03) as usize]
}

/// Split RGB565 into 8-bit channels (low bits zero).
pub const fn rgb(color: u16) -> (u8, u8, u8) {
    (
        ((color >> 8) & 0xF8) as u8,
        ((color >> 3) & 0xFC) as u8,
        ((color << 3) & 0xF8) as u8,
    )
}

/// Named RGB565 colours.
pub mod named {
    #![allow(missing_docs)]

    pub const BLACK: u16 = 0x0000;
    pub const NAVY: u16 = 0x000F;
    pub const DARKGREEN: u16 = 0x03E0;
    pub const DARKCYAN: u16 = 0x03EF;
    pub const MAROON: u16 = 0x7800;
    pub const PURPLE: u16 = 0x780F;
    pub const OLIVE: u16 = 0x7BE0;
    pub const LIGHTGREY: u16 = 0xC618;
    pub const DARKGREY: u16 = 0x7BEF;
    pub const BLUE: u16 = 0x001F;
    pub const GREEN: u16 = 0x07E0;
    pub const CYAN: u16 = 0x07FF;
    pub const RED: u16 = 0xF800;
    pub const MAGENTA: u16 = 0xF81F;
    pub const YELLOW: u16 = 0xFFE0;
    pub const WHITE: u16 = 0xFFFF;
    pub const ORANGE: u16 = 0xFDA0;
    pub const GREENYELLOW: u16 = 0xB7E0;
    pub const PINK: u16 = 0xFC9F;
}
