//! 26 px run-length encoded font scaled from the classic glyphs.
//!
//! Generated by `cargo xtask fontgen`. Do not edit by hand.

use super::rle::RleFont;

/// Proportional font, 26 px tall with the baseline at row 23.
pub static FONT26: RleFont = RleFont {
    height: 26,
    baseline: 23,
    widths: &[
        0x0C, 0x06, 0x0C, 0x12, 0x12, 0x12, 0x12, 0x09, 0x0C, 0x0C, 0x12, 0x12, 0x09, 0x12, 0x09, 0x12,
        0x12, 0x0C, 0x12, 0x12, 0x12, 0x12, 0x12, 0x12, 0x12, 0x12, 0x09, 0x09, 0x0F, 0x12, 0x0F, 0x12,
        0x12, 0x12, 0x12, 0x12, 0x12, 0x12, 0x12, 0x12, 0x12, 0x0C, 0x12, 0x12, 0x12, 0x12, 0x12, 0x12,
        0x12, 0x12, 0x12, 0x12, 0x12, 0x12, 0x12, 0x12, 0x12, 0x12, 0x12, 0x0C, 0x12, 0x0C, 0x12, 0x12,
        0x0C, 0x12, 0x12, 0x12, 0x12, 0x12, 0x12, 0x12, 0x12, 0x0C, 0x0F, 0x0F, 0x0C, 0x12, 0x12, 0x12,
        0x12, 0x12, 0x12, 0x12, 0x12, 0x12, 0x12, 0x12, 0x12, 0x12, 0x12, 0x0C, 0x06, 0x0C, 0x12,
    ],
    glyphs: &[
        // ' '
        &[
            0x7F, 0x7F, 0x37,
        ],
        // '!'
        &[
            0x0B, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x14, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x14,
        ],
        // '"'
        &[
            0x17, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x7F, 0x36,
        ],
        // '#'
        &[
            0x26, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x05, 0x8E, 0x02, 0x8E, 0x02, 0x8E, 0x05, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x05, 0x8E, 0x02, 0x8E, 0x02, 0x8E,
            0x05, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x3B,
        ],
        // '$'
        &[
            0x29, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0B, 0x8B, 0x05, 0x8B, 0x05, 0x8B,
            0x02, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x0B, 0x88, 0x08, 0x88, 0x08, 0x88, 0x0B, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x02, 0x8B, 0x05, 0x8B, 0x05, 0x8B,
            0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x3E,
        ],
        // '%'
        &[
            0x23, 0x85, 0x0B, 0x85, 0x0B, 0x85, 0x0B, 0x85, 0x05, 0x82, 0x02, 0x85,
            0x05, 0x82, 0x02, 0x85, 0x05, 0x82, 0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0B, 0x82, 0x05, 0x85, 0x02, 0x82, 0x05, 0x85, 0x02, 0x82, 0x05, 0x85,
            0x0B, 0x85, 0x0B, 0x85, 0x0B, 0x85, 0x38,
        ],
        // '&'
        &[
            0x26, 0x85, 0x0B, 0x85, 0x0B, 0x85, 0x08, 0x82, 0x05, 0x82, 0x05, 0x82,
            0x05, 0x82, 0x05, 0x82, 0x05, 0x82, 0x05, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0B, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x05, 0x82, 0x05, 0x82,
            0x05, 0x82, 0x05, 0x82, 0x05, 0x82, 0x08, 0x85, 0x02, 0x82, 0x05, 0x85,
            0x02, 0x82, 0x05, 0x85, 0x02, 0x82, 0x38,
        ],
        // '\''
        &[
            0x11, 0x85, 0x02, 0x85, 0x02, 0x85, 0x05, 0x82, 0x05, 0x82, 0x05, 0x82,
            0x02, 0x82, 0x05, 0x82, 0x05, 0x82, 0x7F, 0x0C,
        ],
        // '('
        &[
            0x1D, 0x82, 0x08, 0x82, 0x08, 0x82, 0x05, 0x82, 0x08, 0x82, 0x08, 0x82,
            0x05, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82,
            0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x0B, 0x82, 0x08, 0x82, 0x08, 0x82,
            0x0B, 0x82, 0x08, 0x82, 0x08, 0x82, 0x26,
        ],
        // ')'
        &[
            0x17, 0x82, 0x08, 0x82, 0x08, 0x82, 0x0B, 0x82, 0x08, 0x82, 0x08, 0x82,
            0x0B, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82,
            0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x05, 0x82, 0x08, 0x82, 0x08, 0x82,
            0x05, 0x82, 0x08, 0x82, 0x08, 0x82, 0x2C,
        ],
        // '*'
        &[
            0x5F, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x08, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x05, 0x88, 0x08, 0x88, 0x08, 0x88, 0x05, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x74,
        ],
        // '+'
        &[
            0x5F, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x08, 0x8E, 0x02, 0x8E, 0x02, 0x8E, 0x08, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x74,
        ],
        // ','
        &[
            0x7D, 0x85, 0x02, 0x85, 0x02, 0x85, 0x05, 0x82, 0x05, 0x82, 0x05, 0x82,
            0x02, 0x82, 0x05, 0x82, 0x05, 0x82, 0x20,
        ],
        // '-'
        &[
            0x7F, 0x45, 0x8E, 0x02, 0x8E, 0x02, 0x8E, 0x7F, 0x5A,
        ],
        // '.'
        &[
            0x7F, 0x18, 0x85, 0x02, 0x85, 0x02, 0x85, 0x02, 0x85, 0x02, 0x85, 0x02,
            0x85, 0x1D,
        ],
        // '/'
        &[
            0x65, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x7A,
        ],
        // '0'
        &[
            0x26, 0x88, 0x08, 0x88, 0x08, 0x88, 0x05, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x05, 0x85, 0x02, 0x82,
            0x05, 0x85, 0x02, 0x82, 0x05, 0x85, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x02, 0x85, 0x05, 0x82, 0x02, 0x85, 0x05, 0x82, 0x02, 0x85, 0x05, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x05, 0x88, 0x08, 0x88, 0x08, 0x88, 0x3B,
        ],
        // '1'
        &[
            0x1A, 0x82, 0x08, 0x82, 0x08, 0x82, 0x05, 0x85, 0x05, 0x85, 0x05, 0x85,
            0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82,
            0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82,
            0x05, 0x88, 0x02, 0x88, 0x02, 0x88, 0x26,
        ],
        // '2'
        &[
            0x26, 0x88, 0x08, 0x88, 0x08, 0x88, 0x05, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0B, 0x8E, 0x02, 0x8E, 0x02, 0x8E,
            0x38,
        ],
        // '3'
        &[
            0x23, 0x8E, 0x02, 0x8E, 0x02, 0x8E, 0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x11, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x11, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x05, 0x88, 0x08, 0x88, 0x08, 0x88,
            0x3B,
        ],
        // '4'
        &[
            0x2C, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0B, 0x85, 0x0B, 0x85, 0x0B, 0x85,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x05, 0x82, 0x05, 0x82, 0x05, 0x82, 0x05, 0x82, 0x05, 0x82, 0x05, 0x82,
            0x05, 0x8E, 0x02, 0x8E, 0x02, 0x8E, 0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x3B,
        ],
        // '5'
        &[
            0x23, 0x8E, 0x02, 0x8E, 0x02, 0x8E, 0x02, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0E, 0x8B, 0x05, 0x8B, 0x05, 0x8B, 0x11, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x05, 0x88, 0x08, 0x88, 0x08, 0x88,
            0x3B,
        ],
        // '6'
        &[
            0x29, 0x85, 0x0B, 0x85, 0x0B, 0x85, 0x08, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x8B, 0x05, 0x8B, 0x05, 0x8B,
            0x05, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x05, 0x88, 0x08, 0x88, 0x08, 0x88, 0x3B,
        ],
        // '7'
        &[
            0x23, 0x8E, 0x02, 0x8E, 0x02, 0x8E, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x41,
        ],
        // '8'
        &[
            0x26, 0x88, 0x08, 0x88, 0x08, 0x88, 0x05, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x05, 0x88, 0x08, 0x88, 0x08, 0x88,
            0x05, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x05, 0x88, 0x08, 0x88, 0x08, 0x88, 0x3B,
        ],
        // '9'
        &[
            0x26, 0x88, 0x08, 0x88, 0x08, 0x88, 0x05, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x05, 0x8B, 0x05, 0x8B, 0x05, 0x8B,
            0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x08, 0x85, 0x0B, 0x85, 0x0B, 0x85, 0x3E,
        ],
        // ':'
        &[
            0x2C, 0x85, 0x02, 0x85, 0x02, 0x85, 0x02, 0x85, 0x02, 0x85, 0x02, 0x85,
            0x1D, 0x85, 0x02, 0x85, 0x02, 0x85, 0x02, 0x85, 0x02, 0x85, 0x02, 0x85,
            0x38,
        ],
        // ';'
        &[
            0x2C, 0x85, 0x02, 0x85, 0x02, 0x85, 0x02, 0x85, 0x02, 0x85, 0x02, 0x85,
            0x1D, 0x85, 0x02, 0x85, 0x02, 0x85, 0x05, 0x82, 0x05, 0x82, 0x05, 0x82,
            0x02, 0x82, 0x05, 0x82, 0x05, 0x82, 0x20,
        ],
        // '<'
        &[
            0x26, 0x82, 0x0B, 0x82, 0x0B, 0x82, 0x08, 0x82, 0x0B, 0x82, 0x0B, 0x82,
            0x08, 0x82, 0x0B, 0x82, 0x0B, 0x82, 0x08, 0x82, 0x0B, 0x82, 0x0B, 0x82,
            0x0E, 0x82, 0x0B, 0x82, 0x0B, 0x82, 0x0E, 0x82, 0x0B, 0x82, 0x0B, 0x82,
            0x0E, 0x82, 0x0B, 0x82, 0x0B, 0x82, 0x2F,
        ],
        // '='
        &[
            0x7F, 0x0F, 0x8E, 0x02, 0x8E, 0x02, 0x8E, 0x38, 0x8E, 0x02, 0x8E, 0x02,
            0x8E, 0x7F, 0x24,
        ],
        // '>'
        &[
            0x1D, 0x82, 0x0B, 0x82, 0x0B, 0x82, 0x0E, 0x82, 0x0B, 0x82, 0x0B, 0x82,
            0x0E, 0x82, 0x0B, 0x82, 0x0B, 0x82, 0x0E, 0x82, 0x0B, 0x82, 0x0B, 0x82,
            0x08, 0x82, 0x0B, 0x82, 0x0B, 0x82, 0x08, 0x82, 0x0B, 0x82, 0x0B, 0x82,
            0x08, 0x82, 0x0B, 0x82, 0x0B, 0x82, 0x38,
        ],
        // '?'
        &[
            0x26, 0x88, 0x08, 0x88, 0x08, 0x88, 0x05, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x44, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x3E,
        ],
        // '@'
        &[
            0x26, 0x88, 0x08, 0x88, 0x08, 0x88, 0x05, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x05, 0x85, 0x02, 0x82, 0x05, 0x85, 0x02, 0x82, 0x05, 0x85, 0x02, 0x82,
            0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x05, 0x88, 0x08, 0x88, 0x08, 0x88, 0x3B,
        ],
        // 'A'
        &[
            0x26, 0x88, 0x08, 0x88, 0x08, 0x88, 0x05, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x8E, 0x02, 0x8E, 0x02, 0x8E,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x38,
        ],
        // 'B'
        &[
            0x23, 0x8B, 0x05, 0x8B, 0x05, 0x8B, 0x05, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x8B, 0x05, 0x8B, 0x05, 0x8B,
            0x05, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x8B, 0x05, 0x8B, 0x05, 0x8B, 0x3B,
        ],
        // 'C'
        &[
            0x26, 0x88, 0x08, 0x88, 0x08, 0x88, 0x05, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0E, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x05, 0x88, 0x08, 0x88, 0x08, 0x88, 0x3B,
        ],
        // 'D'
        &[
            0x23, 0x88, 0x08, 0x88, 0x08, 0x88, 0x08, 0x82, 0x05, 0x82, 0x05, 0x82,
            0x05, 0x82, 0x05, 0x82, 0x05, 0x82, 0x05, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x05, 0x82, 0x05, 0x82,
            0x05, 0x82, 0x05, 0x82, 0x05, 0x82, 0x05, 0x88, 0x08, 0x88, 0x08, 0x88,
            0x3E,
        ],
        // 'E'
        &[
            0x23, 0x8E, 0x02, 0x8E, 0x02, 0x8E, 0x02, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x8B, 0x05, 0x8B, 0x05, 0x8B,
            0x05, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0E, 0x8E, 0x02, 0x8E, 0x02, 0x8E, 0x38,
        ],
        // 'F'
        &[
            0x23, 0x8E, 0x02, 0x8E, 0x02, 0x8E, 0x02, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x8B, 0x05, 0x8B, 0x05, 0x8B,
            0x05, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x44,
        ],
        // 'G'
        &[
            0x26, 0x88, 0x08, 0x88, 0x08, 0x88, 0x05, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0E, 0x82, 0x02, 0x88, 0x02, 0x82, 0x02, 0x88, 0x02, 0x82, 0x02, 0x88,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x05, 0x8B, 0x05, 0x8B, 0x05, 0x8B, 0x38,
        ],
        // 'H'
        &[
            0x23, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x8E, 0x02, 0x8E, 0x02, 0x8E, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x38,
        ],
        // 'I'
        &[
            0x17, 0x88, 0x02, 0x88, 0x02, 0x88, 0x05, 0x82, 0x08, 0x82, 0x08, 0x82,
            0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82,
            0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82,
            0x05, 0x88, 0x02, 0x88, 0x02, 0x88, 0x26,
        ],
        // 'J'
        &[
            0x29, 0x88, 0x08, 0x88, 0x08, 0x88, 0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x05, 0x82, 0x05, 0x82, 0x05, 0x82,
            0x05, 0x82, 0x05, 0x82, 0x05, 0x82, 0x08, 0x85, 0x0B, 0x85, 0x0B, 0x85,
            0x3E,
        ],
        // 'K'
        &[
            0x23, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x05, 0x82, 0x05, 0x82, 0x05, 0x82, 0x05, 0x82, 0x05, 0x82,
            0x05, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x85, 0x0B, 0x85, 0x0B, 0x85, 0x0B, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x05, 0x82, 0x05, 0x82,
            0x05, 0x82, 0x05, 0x82, 0x05, 0x82, 0x05, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x38,
        ],
        // 'L'
        &[
            0x23, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0E, 0x8E, 0x02, 0x8E, 0x02, 0x8E, 0x38,
        ],
        // 'M'
        &[
            0x23, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x85, 0x02, 0x85, 0x02, 0x85, 0x02, 0x85, 0x02, 0x85, 0x02, 0x85,
            0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x38,
        ],
        // 'N'
        &[
            0x23, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x85, 0x05, 0x82, 0x02, 0x85, 0x05, 0x82, 0x02, 0x85, 0x05, 0x82,
            0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x05, 0x85, 0x02, 0x82,
            0x05, 0x85, 0x02, 0x82, 0x05, 0x85, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x38,
        ],
        // 'O'
        &[
            0x26, 0x88, 0x08, 0x88, 0x08, 0x88, 0x05, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x05, 0x88, 0x08, 0x88, 0x08, 0x88,
            0x3B,
        ],
        // 'P'
        &[
            0x23, 0x8B, 0x05, 0x8B, 0x05, 0x8B, 0x05, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x8B, 0x05, 0x8B, 0x05, 0x8B,
            0x05, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x44,
        ],
        // 'Q'
        &[
            0x26, 0x88, 0x08, 0x88, 0x08, 0x88, 0x05, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x02, 0x82, 0x05, 0x82, 0x05, 0x82, 0x05, 0x82, 0x05, 0x82, 0x05, 0x82,
            0x08, 0x85, 0x02, 0x82, 0x05, 0x85, 0x02, 0x82, 0x05, 0x85, 0x02, 0x82,
            0x38,
        ],
        // 'R'
        &[
            0x23, 0x8B, 0x05, 0x8B, 0x05, 0x8B, 0x05, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x8B, 0x05, 0x8B, 0x05, 0x8B,
            0x05, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x05, 0x82, 0x05, 0x82, 0x05, 0x82, 0x05, 0x82, 0x05, 0x82,
            0x05, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x38,
        ],
        // 'S'
        &[
            0x26, 0x8B, 0x05, 0x8B, 0x05, 0x8B, 0x02, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x11, 0x88, 0x08, 0x88, 0x08, 0x88,
            0x11, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x02, 0x8B, 0x05, 0x8B, 0x05, 0x8B, 0x3B,
        ],
        // 'T'
        &[
            0x23, 0x8E, 0x02, 0x8E, 0x02, 0x8E, 0x08, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x3E,
        ],
        // 'U'
        &[
            0x23, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x05, 0x88, 0x08, 0x88, 0x08, 0x88, 0x3B,
        ],
        // 'V'
        &[
            0x23, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x05, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x3E,
        ],
        // 'W'
        &[
            0x23, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x05, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x3B,
        ],
        // 'X'
        &[
            0x23, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x05, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0B, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x05, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x38,
        ],
        // 'Y'
        &[
            0x23, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x05, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x3E,
        ],
        // 'Z'
        &[
            0x23, 0x8E, 0x02, 0x8E, 0x02, 0x8E, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0E, 0x8E, 0x02, 0x8E, 0x02, 0x8E, 0x38,
        ],
        // '['
        &[
            0x17, 0x88, 0x02, 0x88, 0x02, 0x88, 0x02, 0x82, 0x08, 0x82, 0x08, 0x82,
            0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82,
            0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82,
            0x08, 0x88, 0x02, 0x88, 0x02, 0x88, 0x26,
        ],
        // '\\'
        &[
            0x59, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x11, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x11, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x11, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x11, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x6E,
        ],
        // ']'
        &[
            0x17, 0x88, 0x02, 0x88, 0x02, 0x88, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82,
            0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82,
            0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82,
            0x02, 0x88, 0x02, 0x88, 0x02, 0x88, 0x26,
        ],
        // '^'
        &[
            0x29, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0B, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x05, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x7F, 0x7F, 0x10,
        ],
        // '_'
        &[
            0x7F, 0x7F, 0x67, 0x8E, 0x02, 0x8E, 0x02, 0x8E, 0x38,
        ],
        // '`'
        &[
            0x17, 0x82, 0x08, 0x82, 0x08, 0x82, 0x0B, 0x82, 0x08, 0x82, 0x08, 0x82,
            0x0B, 0x82, 0x08, 0x82, 0x08, 0x82, 0x7F, 0x36,
        ],
        // 'a'
        &[
            0x7F, 0x12, 0x88, 0x08, 0x88, 0x08, 0x88, 0x11, 0x82, 0x0E, 0x82, 0x0E,
            0x82, 0x05, 0x8B, 0x05, 0x8B, 0x05, 0x8B, 0x02, 0x82, 0x08, 0x82, 0x02,
            0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x05, 0x8B, 0x05, 0x8B, 0x05,
            0x8B, 0x38,
        ],
        // 'b'
        &[
            0x23, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0E, 0x82, 0x02, 0x85, 0x05, 0x82, 0x02, 0x85, 0x05, 0x82, 0x02, 0x85,
            0x05, 0x85, 0x05, 0x82, 0x02, 0x85, 0x05, 0x82, 0x02, 0x85, 0x05, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x8B, 0x05, 0x8B, 0x05, 0x8B, 0x3B,
        ],
        // 'c'
        &[
            0x7F, 0x12, 0x88, 0x08, 0x88, 0x08, 0x88, 0x05, 0x82, 0x0E, 0x82, 0x0E,
            0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x08, 0x82, 0x02,
            0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x05, 0x88, 0x08, 0x88, 0x08,
            0x88, 0x3B,
        ],
        // 'd'
        &[
            0x2F, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x05, 0x85, 0x02, 0x82, 0x05, 0x85, 0x02, 0x82, 0x05, 0x85, 0x02, 0x82,
            0x02, 0x82, 0x05, 0x85, 0x02, 0x82, 0x05, 0x85, 0x02, 0x82, 0x05, 0x85,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x05, 0x8B, 0x05, 0x8B, 0x05, 0x8B, 0x38,
        ],
        // 'e'
        &[
            0x7F, 0x12, 0x88, 0x08, 0x88, 0x08, 0x88, 0x05, 0x82, 0x08, 0x82, 0x02,
            0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x8E, 0x02, 0x8E, 0x02,
            0x8E, 0x02, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x11, 0x88, 0x08, 0x88, 0x08,
            0x88, 0x3B,
        ],
        // 'f'
        &[
            0x29, 0x85, 0x0B, 0x85, 0x0B, 0x85, 0x08, 0x82, 0x05, 0x82, 0x05, 0x82,
            0x05, 0x82, 0x05, 0x82, 0x05, 0x82, 0x05, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0B, 0x88, 0x08, 0x88, 0x08, 0x88, 0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x41,
        ],
        // 'g'
        &[
            0x5C, 0x8B, 0x05, 0x8B, 0x05, 0x8B, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82,
            0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x05, 0x8B, 0x05, 0x8B, 0x05, 0x8B,
            0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x05, 0x88, 0x08, 0x88, 0x08, 0x88,
            0x3B,
        ],
        // 'h'
        &[
            0x23, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0E, 0x82, 0x02, 0x85, 0x05, 0x82, 0x02, 0x85, 0x05, 0x82, 0x02, 0x85,
            0x05, 0x85, 0x05, 0x82, 0x02, 0x85, 0x05, 0x82, 0x02, 0x85, 0x05, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82,
            0x38,
        ],
        // 'i'
        &[
            0x1A, 0x82, 0x08, 0x82, 0x08, 0x82, 0x29, 0x85, 0x05, 0x85, 0x05, 0x85,
            0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82,
            0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x05, 0x88, 0x02, 0x88, 0x02, 0x88,
            0x26,
        ],
        // 'j'
        &[
            0x26, 0x82, 0x0B, 0x82, 0x0B, 0x82, 0x35, 0x85, 0x08, 0x85, 0x08, 0x85,
            0x0B, 0x82, 0x0B, 0x82, 0x0B, 0x82, 0x0B, 0x82, 0x0B, 0x82, 0x0B, 0x82,
            0x02, 0x82, 0x05, 0x82, 0x02, 0x82, 0x05, 0x82, 0x02, 0x82, 0x05, 0x82,
            0x05, 0x85, 0x08, 0x85, 0x08, 0x85, 0x32,
        ],
        // 'k'
        &[
            0x1D, 0x82, 0x0B, 0x82, 0x0B, 0x82, 0x0B, 0x82, 0x0B, 0x82, 0x0B, 0x82,
            0x0B, 0x82, 0x05, 0x82, 0x02, 0x82, 0x05, 0x82, 0x02, 0x82, 0x05, 0x82,
            0x02, 0x82, 0x02, 0x82, 0x05, 0x82, 0x02, 0x82, 0x05, 0x82, 0x02, 0x82,
            0x05, 0x85, 0x08, 0x85, 0x08, 0x85, 0x08, 0x82, 0x02, 0x82, 0x05, 0x82,
            0x02, 0x82, 0x05, 0x82, 0x02, 0x82, 0x05, 0x82, 0x05, 0x82, 0x02, 0x82,
            0x05, 0x82, 0x02, 0x82, 0x05, 0x82, 0x2F,
        ],
        // 'l'
        &[
            0x17, 0x85, 0x05, 0x85, 0x05, 0x85, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82,
            0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82,
            0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82,
            0x05, 0x88, 0x02, 0x88, 0x02, 0x88, 0x26,
        ],
        // 'm'
        &[
            0x7F, 0x0F, 0x85, 0x02, 0x82, 0x05, 0x85, 0x02, 0x82, 0x05, 0x85, 0x02,
            0x82, 0x05, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02,
            0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02,
            0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02,
            0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08,
            0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08,
            0x82, 0x38,
        ],
        // 'n'
        &[
            0x7F, 0x0F, 0x82, 0x02, 0x85, 0x05, 0x82, 0x02, 0x85, 0x05, 0x82, 0x02,
            0x85, 0x05, 0x85, 0x05, 0x82, 0x02, 0x85, 0x05, 0x82, 0x02, 0x85, 0x05,
            0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08,
            0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08,
            0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08,
            0x82, 0x38,
        ],
        // 'o'
        &[
            0x7F, 0x12, 0x88, 0x08, 0x88, 0x08, 0x88, 0x05, 0x82, 0x08, 0x82, 0x02,
            0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02,
            0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02,
            0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x05, 0x88, 0x08, 0x88, 0x08,
            0x88, 0x3B,
        ],
        // 'p'
        &[
            0x7F, 0x0F, 0x8B, 0x05, 0x8B, 0x05, 0x8B, 0x05, 0x82, 0x08, 0x82, 0x02,
            0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x8B, 0x05, 0x8B, 0x05,
            0x8B, 0x05, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E,
            0x82, 0x44,
        ],
        // 'q'
        &[
            0x7F, 0x12, 0x85, 0x02, 0x82, 0x05, 0x85, 0x02, 0x82, 0x05, 0x85, 0x02,
            0x82, 0x02, 0x82, 0x05, 0x85, 0x02, 0x82, 0x05, 0x85, 0x02, 0x82, 0x05,
            0x85, 0x05, 0x8B, 0x05, 0x8B, 0x05, 0x8B, 0x0E, 0x82, 0x0E, 0x82, 0x0E,
            0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x38,
        ],
        // 'r'
        &[
            0x7F, 0x0F, 0x82, 0x02, 0x85, 0x05, 0x82, 0x02, 0x85, 0x05, 0x82, 0x02,
            0x85, 0x05, 0x85, 0x05, 0x82, 0x02, 0x85, 0x05, 0x82, 0x02, 0x85, 0x05,
            0x82, 0x02, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E,
            0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x44,
        ],
        // 's'
        &[
            0x7F, 0x12, 0x88, 0x08, 0x88, 0x08, 0x88, 0x05, 0x82, 0x0E, 0x82, 0x0E,
            0x82, 0x11, 0x88, 0x08, 0x88, 0x08, 0x88, 0x11, 0x82, 0x0E, 0x82, 0x0E,
            0x82, 0x02, 0x8B, 0x05, 0x8B, 0x05, 0x8B, 0x3B,
        ],
        // 't'
        &[
            0x26, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0B, 0x88, 0x08, 0x88, 0x08, 0x88, 0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82,
            0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x05, 0x82, 0x05, 0x82,
            0x05, 0x82, 0x05, 0x82, 0x05, 0x82, 0x08, 0x85, 0x0B, 0x85, 0x0B, 0x85,
            0x3B,
        ],
        // 'u'
        &[
            0x7F, 0x0F, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08,
            0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08,
            0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08,
            0x82, 0x02, 0x82, 0x05, 0x85, 0x02, 0x82, 0x05, 0x85, 0x02, 0x82, 0x05,
            0x85, 0x05, 0x85, 0x02, 0x82, 0x05, 0x85, 0x02, 0x82, 0x05, 0x85, 0x02,
            0x82, 0x38,
        ],
        // 'v'
        &[
            0x7F, 0x0F, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08,
            0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08,
            0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08,
            0x82, 0x05, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02,
            0x82, 0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x3E,
        ],
        // 'w'
        &[
            0x7F, 0x0F, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08,
            0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08,
            0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02,
            0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02,
            0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02,
            0x82, 0x05, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02,
            0x82, 0x3B,
        ],
        // 'x'
        &[
            0x7F, 0x0F, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08,
            0x82, 0x05, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02,
            0x82, 0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0B, 0x82, 0x02, 0x82, 0x08,
            0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x05, 0x82, 0x08, 0x82, 0x02,
            0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x38,
        ],
        // 'y'
        &[
            0x7F, 0x0F, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08,
            0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08, 0x82, 0x02, 0x82, 0x08,
            0x82, 0x05, 0x8B, 0x05, 0x8B, 0x05, 0x8B, 0x0E, 0x82, 0x0E, 0x82, 0x0E,
            0x82, 0x05, 0x88, 0x08, 0x88, 0x08, 0x88, 0x3B,
        ],
        // 'z'
        &[
            0x7F, 0x0F, 0x8E, 0x02, 0x8E, 0x02, 0x8E, 0x0B, 0x82, 0x0E, 0x82, 0x0E,
            0x82, 0x0B, 0x82, 0x0E, 0x82, 0x0E, 0x82, 0x0B, 0x82, 0x0E, 0x82, 0x0E,
            0x82, 0x0B, 0x8E, 0x02, 0x8E, 0x02, 0x8E, 0x38,
        ],
        // '{'
        &[
            0x1D, 0x82, 0x08, 0x82, 0x08, 0x82, 0x05, 0x82, 0x08, 0x82, 0x08, 0x82,
            0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x05, 0x82, 0x08, 0x82, 0x08, 0x82,
            0x0B, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82,
            0x0B, 0x82, 0x08, 0x82, 0x08, 0x82, 0x26,
        ],
        // '|'
        &[
            0x0B, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x02, 0x82,
            0x02, 0x82, 0x02, 0x82, 0x02, 0x82, 0x14,
        ],
        // '}'
        &[
            0x17, 0x82, 0x08, 0x82, 0x08, 0x82, 0x0B, 0x82, 0x08, 0x82, 0x08, 0x82,
            0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x0B, 0x82, 0x08, 0x82, 0x08, 0x82,
            0x05, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82, 0x08, 0x82,
            0x05, 0x82, 0x08, 0x82, 0x08, 0x82, 0x2C,
        ],
        // '~'
        &[
            0x7F, 0x48, 0x85, 0x02, 0x82, 0x05, 0x85, 0x02, 0x82, 0x05, 0x85, 0x02,
            0x82, 0x02, 0x82, 0x05, 0x82, 0x05, 0x82, 0x05, 0x82, 0x05, 0x82, 0x05,
            0x82, 0x7F, 0x27,
        ],
    ],
};
