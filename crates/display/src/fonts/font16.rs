//! 16 px run-length encoded font scaled from the classic glyphs.
//!
//! Generated by `cargo xtask fontgen`. Do not edit by hand.

use super::rle::RleFont;

/// Proportional font, 16 px tall with the baseline at row 15.
pub static FONT16: RleFont = RleFont {
    height: 16,
    baseline: 15,
    widths: &[
        0x08, 0x04, 0x08, 0x0C, 0x0C, 0x0C, 0x0C, 0x06, 0x08, 0x08, 0x0C, 0x0C, 0x06, 0x0C, 0x06, 0x0C,
        0x0C, 0x08, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x06, 0x06, 0x0A, 0x0C, 0x0A, 0x0C,
        0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x08, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C,
        0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x08, 0x0C, 0x08, 0x0C, 0x0C,
        0x08, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x08, 0x0A, 0x0A, 0x08, 0x0C, 0x0C, 0x0C,
        0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x08, 0x04, 0x08, 0x0C,
    ],
    glyphs: &[
        // ' '
        &[
            0x7F,
        ],
        // '!'
        &[
            0x03, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81,
            0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x09, 0x81, 0x01, 0x81,
            0x05,
        ],
        // '"'
        &[
            0x07, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81,
            0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81,
            0x49,
        ],
        // '#'
        &[
            0x0D, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81,
            0x05, 0x81, 0x01, 0x81, 0x03, 0x89, 0x01, 0x89, 0x03, 0x81, 0x01, 0x81,
            0x05, 0x81, 0x01, 0x81, 0x03, 0x89, 0x01, 0x89, 0x03, 0x81, 0x01, 0x81,
            0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81,
            0x0F,
        ],
        // '$'
        &[
            0x0F, 0x81, 0x09, 0x81, 0x07, 0x87, 0x03, 0x87, 0x01, 0x81, 0x01, 0x81,
            0x05, 0x81, 0x01, 0x81, 0x07, 0x85, 0x05, 0x85, 0x07, 0x81, 0x01, 0x81,
            0x05, 0x81, 0x01, 0x81, 0x01, 0x87, 0x03, 0x87, 0x07, 0x81, 0x09, 0x81,
            0x11,
        ],
        // '%'
        &[
            0x0B, 0x83, 0x07, 0x83, 0x07, 0x83, 0x03, 0x81, 0x01, 0x83, 0x03, 0x81,
            0x07, 0x81, 0x09, 0x81, 0x07, 0x81, 0x09, 0x81, 0x07, 0x81, 0x09, 0x81,
            0x07, 0x81, 0x03, 0x83, 0x01, 0x81, 0x03, 0x83, 0x07, 0x83, 0x07, 0x83,
            0x0D,
        ],
        // '&'
        &[
            0x0D, 0x83, 0x07, 0x83, 0x05, 0x81, 0x03, 0x81, 0x03, 0x81, 0x03, 0x81,
            0x03, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x07, 0x81, 0x09, 0x81,
            0x07, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81,
            0x01, 0x81, 0x03, 0x81, 0x03, 0x81, 0x03, 0x81, 0x05, 0x83, 0x01, 0x81,
            0x03, 0x83, 0x01, 0x81, 0x0D,
        ],
        // '\''
        &[
            0x05, 0x83, 0x01, 0x83, 0x03, 0x81, 0x03, 0x81, 0x01, 0x81, 0x03, 0x81,
            0x39,
        ],
        // '('
        &[
            0x0B, 0x81, 0x05, 0x81, 0x03, 0x81, 0x05, 0x81, 0x03, 0x81, 0x05, 0x81,
            0x05, 0x81, 0x05, 0x81, 0x05, 0x81, 0x05, 0x81, 0x07, 0x81, 0x05, 0x81,
            0x07, 0x81, 0x05, 0x81, 0x09,
        ],
        // ')'
        &[
            0x07, 0x81, 0x05, 0x81, 0x07, 0x81, 0x05, 0x81, 0x07, 0x81, 0x05, 0x81,
            0x05, 0x81, 0x05, 0x81, 0x05, 0x81, 0x05, 0x81, 0x03, 0x81, 0x05, 0x81,
            0x03, 0x81, 0x05, 0x81, 0x0D,
        ],
        // '*'
        &[
            0x27, 0x81, 0x09, 0x81, 0x05, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81,
            0x01, 0x81, 0x01, 0x81, 0x03, 0x85, 0x05, 0x85, 0x03, 0x81, 0x01, 0x81,
            0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x05, 0x81, 0x09, 0x81,
            0x29,
        ],
        // '+'
        &[
            0x27, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x05, 0x89, 0x01, 0x89,
            0x05, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x29,
        ],
        // ','
        &[
            0x35, 0x83, 0x01, 0x83, 0x03, 0x81, 0x03, 0x81, 0x01, 0x81, 0x03, 0x81,
            0x09,
        ],
        // '-'
        &[
            0x53, 0x89, 0x01, 0x89, 0x55,
        ],
        // '.'
        &[
            0x41, 0x83, 0x01, 0x83, 0x01, 0x83, 0x01, 0x83, 0x07,
        ],
        // '/'
        &[
            0x2B, 0x81, 0x09, 0x81, 0x07, 0x81, 0x09, 0x81, 0x07, 0x81, 0x09, 0x81,
            0x07, 0x81, 0x09, 0x81, 0x07, 0x81, 0x09, 0x81, 0x2D,
        ],
        // '0'
        &[
            0x0D, 0x85, 0x05, 0x85, 0x03, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x03, 0x83, 0x01, 0x81, 0x03, 0x83, 0x01, 0x81, 0x01, 0x81,
            0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x83, 0x03, 0x81,
            0x01, 0x83, 0x03, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x03, 0x85, 0x05, 0x85, 0x0F,
        ],
        // '1'
        &[
            0x09, 0x81, 0x05, 0x81, 0x03, 0x83, 0x03, 0x83, 0x05, 0x81, 0x05, 0x81,
            0x05, 0x81, 0x05, 0x81, 0x05, 0x81, 0x05, 0x81, 0x05, 0x81, 0x05, 0x81,
            0x03, 0x85, 0x01, 0x85, 0x09,
        ],
        // '2'
        &[
            0x0D, 0x85, 0x05, 0x85, 0x03, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x09, 0x81, 0x09, 0x81, 0x07, 0x81, 0x09, 0x81, 0x07, 0x81, 0x09, 0x81,
            0x07, 0x81, 0x09, 0x81, 0x07, 0x89, 0x01, 0x89, 0x0D,
        ],
        // '3'
        &[
            0x0B, 0x89, 0x01, 0x89, 0x07, 0x81, 0x09, 0x81, 0x07, 0x81, 0x09, 0x81,
            0x0B, 0x81, 0x09, 0x81, 0x0B, 0x81, 0x09, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x03, 0x85, 0x05, 0x85, 0x0F,
        ],
        // '4'
        &[
            0x11, 0x81, 0x09, 0x81, 0x07, 0x83, 0x07, 0x83, 0x05, 0x81, 0x01, 0x81,
            0x05, 0x81, 0x01, 0x81, 0x03, 0x81, 0x03, 0x81, 0x03, 0x81, 0x03, 0x81,
            0x03, 0x89, 0x01, 0x89, 0x07, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81,
            0x0F,
        ],
        // '5'
        &[
            0x0B, 0x89, 0x01, 0x89, 0x01, 0x81, 0x09, 0x81, 0x09, 0x87, 0x03, 0x87,
            0x0B, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x03, 0x85, 0x05, 0x85, 0x0F,
        ],
        // '6'
        &[
            0x0F, 0x83, 0x07, 0x83, 0x05, 0x81, 0x09, 0x81, 0x07, 0x81, 0x09, 0x81,
            0x09, 0x87, 0x03, 0x87, 0x03, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x03, 0x85, 0x05, 0x85,
            0x0F,
        ],
        // '7'
        &[
            0x0B, 0x89, 0x01, 0x89, 0x09, 0x81, 0x09, 0x81, 0x07, 0x81, 0x09, 0x81,
            0x07, 0x81, 0x09, 0x81, 0x07, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81,
            0x09, 0x81, 0x09, 0x81, 0x13,
        ],
        // '8'
        &[
            0x0D, 0x85, 0x05, 0x85, 0x03, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x03, 0x85, 0x05, 0x85,
            0x03, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x03, 0x85, 0x05, 0x85, 0x0F,
        ],
        // '9'
        &[
            0x0D, 0x85, 0x05, 0x85, 0x03, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x03, 0x87, 0x03, 0x87,
            0x09, 0x81, 0x09, 0x81, 0x07, 0x81, 0x09, 0x81, 0x05, 0x83, 0x07, 0x83,
            0x11,
        ],
        // ':'
        &[
            0x11, 0x83, 0x01, 0x83, 0x01, 0x83, 0x01, 0x83, 0x0D, 0x83, 0x01, 0x83,
            0x01, 0x83, 0x01, 0x83, 0x13,
        ],
        // ';'
        &[
            0x11, 0x83, 0x01, 0x83, 0x01, 0x83, 0x01, 0x83, 0x0D, 0x83, 0x01, 0x83,
            0x03, 0x81, 0x03, 0x81, 0x01, 0x81, 0x03, 0x81, 0x09,
        ],
        // '<'
        &[
            0x0F, 0x81, 0x07, 0x81, 0x05, 0x81, 0x07, 0x81, 0x05, 0x81, 0x07, 0x81,
            0x05, 0x81, 0x07, 0x81, 0x09, 0x81, 0x07, 0x81, 0x09, 0x81, 0x07, 0x81,
            0x09, 0x81, 0x07, 0x81, 0x0B,
        ],
        // '='
        &[
            0x3B, 0x89, 0x01, 0x89, 0x19, 0x89, 0x01, 0x89, 0x3D,
        ],
        // '>'
        &[
            0x09, 0x81, 0x07, 0x81, 0x09, 0x81, 0x07, 0x81, 0x09, 0x81, 0x07, 0x81,
            0x09, 0x81, 0x07, 0x81, 0x05, 0x81, 0x07, 0x81, 0x05, 0x81, 0x07, 0x81,
            0x05, 0x81, 0x07, 0x81, 0x11,
        ],
        // '?'
        &[
            0x0D, 0x85, 0x05, 0x85, 0x03, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x09, 0x81, 0x09, 0x81, 0x07, 0x81, 0x09, 0x81, 0x07, 0x81, 0x09, 0x81,
            0x21, 0x81, 0x09, 0x81, 0x11,
        ],
        // '@'
        &[
            0x0D, 0x85, 0x05, 0x85, 0x03, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x09, 0x81, 0x09, 0x81, 0x03, 0x83, 0x01, 0x81, 0x03, 0x83, 0x01, 0x81,
            0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81,
            0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81,
            0x03, 0x85, 0x05, 0x85, 0x0F,
        ],
        // 'A'
        &[
            0x0D, 0x85, 0x05, 0x85, 0x03, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x89, 0x01, 0x89, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x0D,
        ],
        // 'B'
        &[
            0x0B, 0x87, 0x03, 0x87, 0x03, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x87, 0x03, 0x87,
            0x03, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x87, 0x03, 0x87, 0x0F,
        ],
        // 'C'
        &[
            0x0D, 0x85, 0x05, 0x85, 0x03, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81,
            0x09, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x03, 0x85, 0x05, 0x85,
            0x0F,
        ],
        // 'D'
        &[
            0x0B, 0x85, 0x05, 0x85, 0x05, 0x81, 0x03, 0x81, 0x03, 0x81, 0x03, 0x81,
            0x03, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x03, 0x81, 0x03, 0x81, 0x03, 0x81, 0x03, 0x85, 0x05, 0x85,
            0x11,
        ],
        // 'E'
        &[
            0x0B, 0x89, 0x01, 0x89, 0x01, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81,
            0x09, 0x87, 0x03, 0x87, 0x03, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81,
            0x09, 0x89, 0x01, 0x89, 0x0D,
        ],
        // 'F'
        &[
            0x0B, 0x89, 0x01, 0x89, 0x01, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81,
            0x09, 0x87, 0x03, 0x87, 0x03, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81,
            0x09, 0x81, 0x09, 0x81, 0x15,
        ],
        // 'G'
        &[
            0x0D, 0x85, 0x05, 0x85, 0x03, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x09, 0x81, 0x09, 0x81, 0x01, 0x85, 0x01, 0x81, 0x01, 0x85,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x03, 0x87, 0x03, 0x87, 0x0D,
        ],
        // 'H'
        &[
            0x0B, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x89, 0x01, 0x89, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x0D,
        ],
        // 'I'
        &[
            0x07, 0x85, 0x01, 0x85, 0x03, 0x81, 0x05, 0x81, 0x05, 0x81, 0x05, 0x81,
            0x05, 0x81, 0x05, 0x81, 0x05, 0x81, 0x05, 0x81, 0x05, 0x81, 0x05, 0x81,
            0x03, 0x85, 0x01, 0x85, 0x09,
        ],
        // 'J'
        &[
            0x0F, 0x85, 0x05, 0x85, 0x07, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81,
            0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x03, 0x81, 0x03, 0x81,
            0x03, 0x81, 0x03, 0x81, 0x05, 0x83, 0x07, 0x83, 0x11,
        ],
        // 'K'
        &[
            0x0B, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x03, 0x81,
            0x03, 0x81, 0x03, 0x81, 0x03, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81,
            0x05, 0x83, 0x07, 0x83, 0x07, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81,
            0x05, 0x81, 0x03, 0x81, 0x03, 0x81, 0x03, 0x81, 0x03, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x0D,
        ],
        // 'L'
        &[
            0x0B, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81,
            0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81,
            0x09, 0x89, 0x01, 0x89, 0x0D,
        ],
        // 'M'
        &[
            0x0B, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x83, 0x01, 0x83,
            0x01, 0x83, 0x01, 0x83, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81,
            0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81,
            0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x0D,
        ],
        // 'N'
        &[
            0x0B, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x83, 0x03, 0x81, 0x01, 0x83, 0x03, 0x81,
            0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81,
            0x01, 0x81, 0x03, 0x83, 0x01, 0x81, 0x03, 0x83, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x0D,
        ],
        // 'O'
        &[
            0x0D, 0x85, 0x05, 0x85, 0x03, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x03, 0x85, 0x05, 0x85,
            0x0F,
        ],
        // 'P'
        &[
            0x0B, 0x87, 0x03, 0x87, 0x03, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x87, 0x03, 0x87,
            0x03, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81,
            0x15,
        ],
        // 'Q'
        &[
            0x0D, 0x85, 0x05, 0x85, 0x03, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81,
            0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x03, 0x81, 0x03, 0x81, 0x03, 0x81,
            0x05, 0x83, 0x01, 0x81, 0x03, 0x83, 0x01, 0x81, 0x0D,
        ],
        // 'R'
        &[
            0x0B, 0x87, 0x03, 0x87, 0x03, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x87, 0x03, 0x87,
            0x03, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x03, 0x81,
            0x03, 0x81, 0x03, 0x81, 0x03, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x0D,
        ],
        // 'S'
        &[
            0x0D, 0x87, 0x03, 0x87, 0x01, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81,
            0x0B, 0x85, 0x05, 0x85, 0x0B, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81,
            0x01, 0x87, 0x03, 0x87, 0x0F,
        ],
        // 'T'
        &[
            0x0B, 0x89, 0x01, 0x89, 0x05, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81,
            0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81,
            0x09, 0x81, 0x09, 0x81, 0x11,
        ],
        // 'U'
        &[
            0x0B, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x03, 0x85, 0x05, 0x85, 0x0F,
        ],
        // 'V'
        &[
            0x0B, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x03, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81,
            0x07, 0x81, 0x09, 0x81, 0x11,
        ],
        // 'W'
        &[
            0x0B, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81,
            0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81,
            0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81,
            0x03, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x0F,
        ],
        // 'X'
        &[
            0x0B, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x03, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81,
            0x07, 0x81, 0x09, 0x81, 0x07, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81,
            0x03, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x0D,
        ],
        // 'Y'
        &[
            0x0B, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x03, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x07, 0x81, 0x09, 0x81,
            0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x11,
        ],
        // 'Z'
        &[
            0x0B, 0x89, 0x01, 0x89, 0x09, 0x81, 0x09, 0x81, 0x07, 0x81, 0x09, 0x81,
            0x07, 0x81, 0x09, 0x81, 0x07, 0x81, 0x09, 0x81, 0x07, 0x81, 0x09, 0x81,
            0x09, 0x89, 0x01, 0x89, 0x0D,
        ],
        // '['
        &[
            0x07, 0x85, 0x01, 0x85, 0x01, 0x81, 0x05, 0x81, 0x05, 0x81, 0x05, 0x81,
            0x05, 0x81, 0x05, 0x81, 0x05, 0x81, 0x05, 0x81, 0x05, 0x81, 0x05, 0x81,
            0x05, 0x85, 0x01, 0x85, 0x09,
        ],
        // '\\'
        &[
            0x23, 0x81, 0x09, 0x81, 0x0B, 0x81, 0x09, 0x81, 0x0B, 0x81, 0x09, 0x81,
            0x0B, 0x81, 0x09, 0x81, 0x0B, 0x81, 0x09, 0x81, 0x25,
        ],
        // ']'
        &[
            0x07, 0x85, 0x01, 0x85, 0x05, 0x81, 0x05, 0x81, 0x05, 0x81, 0x05, 0x81,
            0x05, 0x81, 0x05, 0x81, 0x05, 0x81, 0x05, 0x81, 0x05, 0x81, 0x05, 0x81,
            0x01, 0x85, 0x01, 0x85, 0x09,
        ],
        // '^'
        &[
            0x0F, 0x81, 0x09, 0x81, 0x07, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81,
            0x03, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x6D,
        ],
        // '_'
        &[
            0x7F, 0x1B, 0x89, 0x01, 0x89, 0x0D,
        ],
        // '`'
        &[
            0x07, 0x81, 0x05, 0x81, 0x07, 0x81, 0x05, 0x81, 0x07, 0x81, 0x05, 0x81,
            0x49,
        ],
        // 'a'
        &[
            0x3D, 0x85, 0x05, 0x85, 0x0B, 0x81, 0x09, 0x81, 0x03, 0x87, 0x03, 0x87,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x03, 0x87, 0x03, 0x87,
            0x0D,
        ],
        // 'b'
        &[
            0x0B, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x01, 0x83,
            0x03, 0x81, 0x01, 0x83, 0x03, 0x83, 0x03, 0x81, 0x01, 0x83, 0x03, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x87, 0x03, 0x87, 0x0F,
        ],
        // 'c'
        &[
            0x3D, 0x85, 0x05, 0x85, 0x03, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81,
            0x09, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x03, 0x85, 0x05, 0x85,
            0x0F,
        ],
        // 'd'
        &[
            0x13, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x03, 0x83, 0x01, 0x81,
            0x03, 0x83, 0x01, 0x81, 0x01, 0x81, 0x03, 0x83, 0x01, 0x81, 0x03, 0x83,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x03, 0x87, 0x03, 0x87, 0x0D,
        ],
        // 'e'
        &[
            0x3D, 0x85, 0x05, 0x85, 0x03, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x89, 0x01, 0x89, 0x01, 0x81, 0x09, 0x81, 0x0B, 0x85, 0x05, 0x85,
            0x0F,
        ],
        // 'f'
        &[
            0x0F, 0x83, 0x07, 0x83, 0x05, 0x81, 0x03, 0x81, 0x03, 0x81, 0x03, 0x81,
            0x03, 0x81, 0x09, 0x81, 0x07, 0x85, 0x05, 0x85, 0x07, 0x81, 0x09, 0x81,
            0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x13,
        ],
        // 'g'
        &[
            0x25, 0x87, 0x03, 0x87, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x03, 0x87, 0x03, 0x87,
            0x09, 0x81, 0x09, 0x81, 0x03, 0x85, 0x05, 0x85, 0x0F,
        ],
        // 'h'
        &[
            0x0B, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x01, 0x83,
            0x03, 0x81, 0x01, 0x83, 0x03, 0x83, 0x03, 0x81, 0x01, 0x83, 0x03, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x0D,
        ],
        // 'i'
        &[
            0x09, 0x81, 0x05, 0x81, 0x13, 0x83, 0x03, 0x83, 0x05, 0x81, 0x05, 0x81,
            0x05, 0x81, 0x05, 0x81, 0x05, 0x81, 0x05, 0x81, 0x03, 0x85, 0x01, 0x85,
            0x09,
        ],
        // 'j'
        &[
            0x0F, 0x81, 0x07, 0x81, 0x19, 0x83, 0x05, 0x83, 0x07, 0x81, 0x07, 0x81,
            0x07, 0x81, 0x07, 0x81, 0x01, 0x81, 0x03, 0x81, 0x01, 0x81, 0x03, 0x81,
            0x03, 0x83, 0x05, 0x83, 0x0D,
        ],
        // 'k'
        &[
            0x09, 0x81, 0x07, 0x81, 0x07, 0x81, 0x07, 0x81, 0x07, 0x81, 0x03, 0x81,
            0x01, 0x81, 0x03, 0x81, 0x01, 0x81, 0x01, 0x81, 0x03, 0x81, 0x01, 0x81,
            0x03, 0x83, 0x05, 0x83, 0x05, 0x81, 0x01, 0x81, 0x03, 0x81, 0x01, 0x81,
            0x03, 0x81, 0x03, 0x81, 0x01, 0x81, 0x03, 0x81, 0x0B,
        ],
        // 'l'
        &[
            0x07, 0x83, 0x03, 0x83, 0x05, 0x81, 0x05, 0x81, 0x05, 0x81, 0x05, 0x81,
            0x05, 0x81, 0x05, 0x81, 0x05, 0x81, 0x05, 0x81, 0x05, 0x81, 0x05, 0x81,
            0x03, 0x85, 0x01, 0x85, 0x09,
        ],
        // 'm'
        &[
            0x3B, 0x83, 0x01, 0x81, 0x03, 0x83, 0x01, 0x81, 0x03, 0x81, 0x01, 0x81,
            0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81,
            0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x0D,
        ],
        // 'n'
        &[
            0x3B, 0x81, 0x01, 0x83, 0x03, 0x81, 0x01, 0x83, 0x03, 0x83, 0x03, 0x81,
            0x01, 0x83, 0x03, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x0D,
        ],
        // 'o'
        &[
            0x3D, 0x85, 0x05, 0x85, 0x03, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x03, 0x85, 0x05, 0x85, 0x0F,
        ],
        // 'p'
        &[
            0x3B, 0x87, 0x03, 0x87, 0x03, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x87, 0x03, 0x87, 0x03, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81,
            0x15,
        ],
        // 'q'
        &[
            0x3D, 0x83, 0x01, 0x81, 0x03, 0x83, 0x01, 0x81, 0x01, 0x81, 0x03, 0x83,
            0x01, 0x81, 0x03, 0x83, 0x03, 0x87, 0x03, 0x87, 0x09, 0x81, 0x09, 0x81,
            0x09, 0x81, 0x09, 0x81, 0x0D,
        ],
        // 'r'
        &[
            0x3B, 0x81, 0x01, 0x83, 0x03, 0x81, 0x01, 0x83, 0x03, 0x83, 0x03, 0x81,
            0x01, 0x83, 0x03, 0x81, 0x01, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81,
            0x09, 0x81, 0x09, 0x81, 0x15,
        ],
        // 's'
        &[
            0x3D, 0x85, 0x05, 0x85, 0x03, 0x81, 0x09, 0x81, 0x0B, 0x85, 0x05, 0x85,
            0x0B, 0x81, 0x09, 0x81, 0x01, 0x87, 0x03, 0x87, 0x0F,
        ],
        // 't'
        &[
            0x0D, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x07, 0x85, 0x05, 0x85,
            0x07, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x09, 0x81, 0x03, 0x81,
            0x03, 0x81, 0x03, 0x81, 0x05, 0x83, 0x07, 0x83, 0x0F,
        ],
        // 'u'
        &[
            0x3B, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x03, 0x83, 0x01, 0x81, 0x03, 0x83, 0x03, 0x83, 0x01, 0x81,
            0x03, 0x83, 0x01, 0x81, 0x0D,
        ],
        // 'v'
        &[
            0x3B, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x03, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x07, 0x81, 0x09, 0x81,
            0x11,
        ],
        // 'w'
        &[
            0x3B, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81,
            0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81,
            0x01, 0x81, 0x01, 0x81, 0x03, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81,
            0x0F,
        ],
        // 'x'
        &[
            0x3B, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x03, 0x81, 0x01, 0x81,
            0x05, 0x81, 0x01, 0x81, 0x07, 0x81, 0x09, 0x81, 0x07, 0x81, 0x01, 0x81,
            0x05, 0x81, 0x01, 0x81, 0x03, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x0D,
        ],
        // 'y'
        &[
            0x3B, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81, 0x01, 0x81, 0x05, 0x81,
            0x01, 0x81, 0x05, 0x81, 0x03, 0x87, 0x03, 0x87, 0x09, 0x81, 0x09, 0x81,
            0x03, 0x85, 0x05, 0x85, 0x0F,
        ],
        // 'z'
        &[
            0x3B, 0x89, 0x01, 0x89, 0x07, 0x81, 0x09, 0x81, 0x07, 0x81, 0x09, 0x81,
            0x07, 0x81, 0x09, 0x81, 0x07, 0x89, 0x01, 0x89, 0x0D,
        ],
        // '{'
        &[
            0x0B, 0x81, 0x05, 0x81, 0x03, 0x81, 0x05, 0x81, 0x05, 0x81, 0x05, 0x81,
            0x03, 0x81, 0x05, 0x81, 0x07, 0x81, 0x05, 0x81, 0x05, 0x81, 0x05, 0x81,
            0x07, 0x81, 0x05, 0x81, 0x09,
        ],
        // '|'
        &[
            0x03, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81,
            0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81,
            0x01, 0x81, 0x01, 0x81, 0x05,
        ],
        // '}'
        &[
            0x07, 0x81, 0x05, 0x81, 0x07, 0x81, 0x05, 0x81, 0x05, 0x81, 0x05, 0x81,
            0x07, 0x81, 0x05, 0x81, 0x03, 0x81, 0x05, 0x81, 0x05, 0x81, 0x05, 0x81,
            0x03, 0x81, 0x05, 0x81, 0x0D,
        ],
        // '~'
        &[
            0x55, 0x83, 0x01, 0x81, 0x03, 0x83, 0x01, 0x81, 0x01, 0x81, 0x03, 0x81,
            0x03, 0x81, 0x03, 0x81, 0x3F,
        ],
    ],
};
