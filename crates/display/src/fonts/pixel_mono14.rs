//! Monospaced pixel font in the adafruit GFX glyph layout.
//!
//! Generated by `cargo xtask fontgen`. Do not edit by hand.

use super::free::{FreeFont, Glyph};

static BITMAP: [u8; 1315] = [
    0xFF, 0xFF, 0xF0, 0xF0, 0xCF, 0x3C, 0xF3, 0xCF, 0x30, 0x33, 0x0C, 0xC3,
    0x30, 0xCC, 0xFF, 0xFF, 0xF3, 0x30, 0xCC, 0xFF, 0xFF, 0xF3, 0x30, 0xCC,
    0x33, 0x0C, 0xC0, 0x0C, 0x03, 0x03, 0xFC, 0xFF, 0xCC, 0x33, 0x03, 0xF0,
    0xFC, 0x0C, 0xC3, 0x3F, 0xF3, 0xFC, 0x0C, 0x03, 0x00, 0xF0, 0x3C, 0x0F,
    0x0F, 0xC3, 0x03, 0x00, 0xC0, 0xC0, 0x30, 0x30, 0x0C, 0x0C, 0x3F, 0x0F,
    0x03, 0xC0, 0xF0, 0x3C, 0x0F, 0x0C, 0x33, 0x0C, 0xCC, 0x33, 0x03, 0x00,
    0xC0, 0xCC, 0xF3, 0x3C, 0x33, 0x0C, 0x3C, 0xCF, 0x30, 0xFF, 0x33, 0xCC,
    0x0C, 0x33, 0x0C, 0xC3, 0x0C, 0x30, 0xC3, 0x03, 0x0C, 0x0C, 0x30, 0xC3,
    0x03, 0x0C, 0x0C, 0x30, 0xC3, 0x0C, 0x33, 0x0C, 0xC3, 0x00, 0x0C, 0x03,
    0x0C, 0xCF, 0x33, 0x3F, 0x0F, 0xCC, 0xCF, 0x33, 0x0C, 0x03, 0x00, 0x0C,
    0x03, 0x00, 0xC0, 0x30, 0xFF, 0xFF, 0xF0, 0xC0, 0x30, 0x0C, 0x03, 0x00,
    0xFF, 0x33, 0xCC, 0xFF, 0xFF, 0xF0, 0xFF, 0xFF, 0x00, 0xC0, 0x30, 0x30,
    0x0C, 0x0C, 0x03, 0x03, 0x00, 0xC0, 0xC0, 0x30, 0x00, 0x3F, 0x0F, 0xCC,
    0x0F, 0x03, 0xC3, 0xF0, 0xFC, 0xCF, 0x33, 0xF0, 0xFC, 0x3C, 0x0F, 0x03,
    0x3F, 0x0F, 0xC0, 0x30, 0xCF, 0x3C, 0x30, 0xC3, 0x0C, 0x30, 0xC3, 0x0C,
    0xFF, 0xF0, 0x3F, 0x0F, 0xCC, 0x0F, 0x03, 0x00, 0xC0, 0x30, 0x30, 0x0C,
    0x0C, 0x03, 0x03, 0x00, 0xC0, 0xFF, 0xFF, 0xF0, 0xFF, 0xFF, 0xF0, 0x30,
    0x0C, 0x0C, 0x03, 0x00, 0x30, 0x0C, 0x00, 0xC0, 0x3C, 0x0F, 0x03, 0x3F,
    0x0F, 0xC0, 0x03, 0x00, 0xC0, 0xF0, 0x3C, 0x33, 0x0C, 0xCC, 0x33, 0x0C,
    0xFF, 0xFF, 0xF0, 0x30, 0x0C, 0x03, 0x00, 0xC0, 0xFF, 0xFF, 0xFC, 0x03,
    0x00, 0xFF, 0x3F, 0xC0, 0x0C, 0x03, 0x00, 0xC0, 0x3C, 0x0F, 0x03, 0x3F,
    0x0F, 0xC0, 0x0F, 0x03, 0xC3, 0x00, 0xC0, 0xC0, 0x30, 0x0F, 0xF3, 0xFC,
    0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0x3F, 0x0F, 0xC0, 0xFF, 0xFF, 0xF0, 0x0C,
    0x03, 0x03, 0x00, 0xC0, 0xC0, 0x30, 0x30, 0x0C, 0x03, 0x00, 0xC0, 0x30,
    0x0C, 0x00, 0x3F, 0x0F, 0xCC, 0x0F, 0x03, 0xC0, 0xF0, 0x33, 0xF0, 0xFC,
    0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0x3F, 0x0F, 0xC0, 0x3F, 0x0F, 0xCC, 0x0F,
    0x03, 0xC0, 0xF0, 0x33, 0xFC, 0xFF, 0x00, 0xC0, 0x30, 0x30, 0x0C, 0x3C,
    0x0F, 0x00, 0xFF, 0xFF, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0xFF, 0x33,
    0xCC, 0x03, 0x03, 0x0C, 0x0C, 0x30, 0x30, 0xC0, 0xC0, 0x30, 0x30, 0x0C,
    0x0C, 0x03, 0x03, 0xFF, 0xFF, 0xF0, 0x00, 0x00, 0xFF, 0xFF, 0xF0, 0xC0,
    0xC0, 0x30, 0x30, 0x0C, 0x0C, 0x03, 0x03, 0x0C, 0x0C, 0x30, 0x30, 0xC0,
    0xC0, 0x3F, 0x0F, 0xCC, 0x0F, 0x03, 0x00, 0xC0, 0x30, 0x30, 0x0C, 0x0C,
    0x03, 0x00, 0x00, 0x00, 0x0C, 0x03, 0x00, 0x3F, 0x0F, 0xCC, 0x0F, 0x03,
    0x00, 0xC0, 0x33, 0xCC, 0xF3, 0xCC, 0xF3, 0x3C, 0xCF, 0x33, 0x3F, 0x0F,
    0xC0, 0x3F, 0x0F, 0xCC, 0x0F, 0x03, 0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0xFF,
    0xFF, 0xFC, 0x0F, 0x03, 0xC0, 0xF0, 0x30, 0xFF, 0x3F, 0xCC, 0x0F, 0x03,
    0xC0, 0xF0, 0x3F, 0xF3, 0xFC, 0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0xFF, 0x3F,
    0xC0, 0x3F, 0x0F, 0xCC, 0x0F, 0x03, 0xC0, 0x30, 0x0C, 0x03, 0x00, 0xC0,
    0x30, 0x0C, 0x0F, 0x03, 0x3F, 0x0F, 0xC0, 0xFC, 0x3F, 0x0C, 0x33, 0x0C,
    0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0xC0, 0xF0, 0x3C, 0x33, 0x0C, 0xFC, 0x3F,
    0x00, 0xFF, 0xFF, 0xFC, 0x03, 0x00, 0xC0, 0x30, 0x0F, 0xF3, 0xFC, 0xC0,
    0x30, 0x0C, 0x03, 0x00, 0xFF, 0xFF, 0xF0, 0xFF, 0xFF, 0xFC, 0x03, 0x00,
    0xC0, 0x30, 0x0F, 0xF3, 0xFC, 0xC0, 0x30, 0x0C, 0x03, 0x00, 0xC0, 0x30,
    0x00, 0x3F, 0x0F, 0xCC, 0x0F, 0x03, 0xC0, 0x30, 0x0C, 0xFF, 0x3F, 0xC0,
    0xF0, 0x3C, 0x0F, 0x03, 0x3F, 0xCF, 0xF0, 0xC0, 0xF0, 0x3C, 0x0F, 0x03,
    0xC0, 0xF0, 0x3F, 0xFF, 0xFF, 0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0xC0, 0xF0,
    0x30, 0xFF, 0xF3, 0x0C, 0x30, 0xC3, 0x0C, 0x30, 0xC3, 0x0C, 0xFF, 0xF0,
    0x0F, 0xC3, 0xF0, 0x30, 0x0C, 0x03, 0x00, 0xC0, 0x30, 0x0C, 0x03, 0x00,
    0xCC, 0x33, 0x0C, 0x3C, 0x0F, 0x00, 0xC0, 0xF0, 0x3C, 0x33, 0x0C, 0xCC,
    0x33, 0x0F, 0x03, 0xC0, 0xCC, 0x33, 0x0C, 0x33, 0x0C, 0xC0, 0xF0, 0x30,
    0xC0, 0x30, 0x0C, 0x03, 0x00, 0xC0, 0x30, 0x0C, 0x03, 0x00, 0xC0, 0x30,
    0x0C, 0x03, 0x00, 0xFF, 0xFF, 0xF0, 0xC0, 0xF0, 0x3F, 0x3F, 0xCF, 0xCC,
    0xF3, 0x3C, 0xCF, 0x33, 0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0xC0, 0xF0, 0x30,
    0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0xF0, 0xFC, 0x3C, 0xCF, 0x33, 0xC3, 0xF0,
    0xFC, 0x0F, 0x03, 0xC0, 0xF0, 0x30, 0x3F, 0x0F, 0xCC, 0x0F, 0x03, 0xC0,
    0xF0, 0x3C, 0x0F, 0x03, 0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0x3F, 0x0F, 0xC0,
    0xFF, 0x3F, 0xCC, 0x0F, 0x03, 0xC0, 0xF0, 0x3F, 0xF3, 0xFC, 0xC0, 0x30,
    0x0C, 0x03, 0x00, 0xC0, 0x30, 0x00, 0x3F, 0x0F, 0xCC, 0x0F, 0x03, 0xC0,
    0xF0, 0x3C, 0x0F, 0x03, 0xCC, 0xF3, 0x3C, 0x33, 0x0C, 0x3C, 0xCF, 0x30,
    0xFF, 0x3F, 0xCC, 0x0F, 0x03, 0xC0, 0xF0, 0x3F, 0xF3, 0xFC, 0xCC, 0x33,
    0x0C, 0x33, 0x0C, 0xC0, 0xF0, 0x30, 0x3F, 0xCF, 0xFC, 0x03, 0x00, 0xC0,
    0x30, 0x03, 0xF0, 0xFC, 0x00, 0xC0, 0x30, 0x0C, 0x03, 0xFF, 0x3F, 0xC0,
    0xFF, 0xFF, 0xF0, 0xC0, 0x30, 0x0C, 0x03, 0x00, 0xC0, 0x30, 0x0C, 0x03,
    0x00, 0xC0, 0x30, 0x0C, 0x03, 0x00, 0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0xC0,
    0xF0, 0x3C, 0x0F, 0x03, 0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0x3F, 0x0F, 0xC0,
    0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0xC0, 0xF0,
    0x33, 0x30, 0xCC, 0x0C, 0x03, 0x00, 0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0xC0,
    0xF0, 0x3C, 0xCF, 0x33, 0xCC, 0xF3, 0x3C, 0xCF, 0x33, 0x33, 0x0C, 0xC0,
    0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0x33, 0x0C, 0xC0, 0xC0, 0x30, 0x33, 0x0C,
    0xCC, 0x0F, 0x03, 0xC0, 0xF0, 0x30, 0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0xC0,
    0xF0, 0x33, 0x30, 0xCC, 0x0C, 0x03, 0x00, 0xC0, 0x30, 0x0C, 0x03, 0x00,
    0xFF, 0xFF, 0xF0, 0x0C, 0x03, 0x03, 0x00, 0xC0, 0xC0, 0x30, 0x30, 0x0C,
    0x0C, 0x03, 0x00, 0xFF, 0xFF, 0xF0, 0xFF, 0xFC, 0x30, 0xC3, 0x0C, 0x30,
    0xC3, 0x0C, 0x30, 0xFF, 0xF0, 0xC0, 0x30, 0x03, 0x00, 0xC0, 0x0C, 0x03,
    0x00, 0x30, 0x0C, 0x00, 0xC0, 0x30, 0xFF, 0xF0, 0xC3, 0x0C, 0x30, 0xC3,
    0x0C, 0x30, 0xC3, 0xFF, 0xF0, 0x0C, 0x03, 0x03, 0x30, 0xCC, 0xC0, 0xF0,
    0x30, 0xFF, 0xFF, 0xF0, 0xC3, 0x03, 0x0C, 0x0C, 0x30, 0x3F, 0x0F, 0xC0,
    0x0C, 0x03, 0x3F, 0xCF, 0xFC, 0x0F, 0x03, 0x3F, 0xCF, 0xF0, 0xC0, 0x30,
    0x0C, 0x03, 0x00, 0xCF, 0x33, 0xCF, 0x0F, 0xC3, 0xC0, 0xF0, 0x3C, 0x0F,
    0x03, 0xFF, 0x3F, 0xC0, 0x3F, 0x0F, 0xCC, 0x03, 0x00, 0xC0, 0x30, 0x0C,
    0x0F, 0x03, 0x3F, 0x0F, 0xC0, 0x00, 0xC0, 0x30, 0x0C, 0x03, 0x3C, 0xCF,
    0x3C, 0x3F, 0x0F, 0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0x3F, 0xCF, 0xF0, 0x3F,
    0x0F, 0xCC, 0x0F, 0x03, 0xFF, 0xFF, 0xFC, 0x03, 0x00, 0x3F, 0x0F, 0xC0,
    0x0F, 0x03, 0xC3, 0x0C, 0xC3, 0x30, 0x0C, 0x0F, 0xC3, 0xF0, 0x30, 0x0C,
    0x03, 0x00, 0xC0, 0x30, 0x0C, 0x00, 0x3F, 0xCF, 0xFC, 0x0F, 0x03, 0xC0,
    0xF0, 0x33, 0xFC, 0xFF, 0x00, 0xC0, 0x33, 0xF0, 0xFC, 0xC0, 0x30, 0x0C,
    0x03, 0x00, 0xCF, 0x33, 0xCF, 0x0F, 0xC3, 0xC0, 0xF0, 0x3C, 0x0F, 0x03,
    0xC0, 0xF0, 0x30, 0x30, 0xC0, 0x00, 0xF3, 0xC3, 0x0C, 0x30, 0xC3, 0x0C,
    0xFF, 0xF0, 0x03, 0x03, 0x00, 0x00, 0x0F, 0x0F, 0x03, 0x03, 0x03, 0x03,
    0xC3, 0xC3, 0x3C, 0x3C, 0xC0, 0xC0, 0xC0, 0xC0, 0xC3, 0xC3, 0xCC, 0xCC,
    0xF0, 0xF0, 0xCC, 0xCC, 0xC3, 0xC3, 0xF3, 0xC3, 0x0C, 0x30, 0xC3, 0x0C,
    0x30, 0xC3, 0x0C, 0xFF, 0xF0, 0xF3, 0x3C, 0xCC, 0xCF, 0x33, 0xCC, 0xF3,
    0x3C, 0x0F, 0x03, 0xC0, 0xF0, 0x30, 0xCF, 0x33, 0xCF, 0x0F, 0xC3, 0xC0,
    0xF0, 0x3C, 0x0F, 0x03, 0xC0, 0xF0, 0x30, 0x3F, 0x0F, 0xCC, 0x0F, 0x03,
    0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0x3F, 0x0F, 0xC0, 0xFF, 0x3F, 0xCC, 0x0F,
    0x03, 0xFF, 0x3F, 0xCC, 0x03, 0x00, 0xC0, 0x30, 0x00, 0x3C, 0xCF, 0x3C,
    0x3F, 0x0F, 0x3F, 0xCF, 0xF0, 0x0C, 0x03, 0x00, 0xC0, 0x30, 0xCF, 0x33,
    0xCF, 0x0F, 0xC3, 0xC0, 0x30, 0x0C, 0x03, 0x00, 0xC0, 0x30, 0x00, 0x3F,
    0x0F, 0xCC, 0x03, 0x00, 0x3F, 0x0F, 0xC0, 0x0C, 0x03, 0xFF, 0x3F, 0xC0,
    0x30, 0x0C, 0x03, 0x00, 0xC0, 0xFC, 0x3F, 0x03, 0x00, 0xC0, 0x30, 0x0C,
    0x03, 0x0C, 0xC3, 0x0F, 0x03, 0xC0, 0xC0, 0xF0, 0x3C, 0x0F, 0x03, 0xC0,
    0xF0, 0x3C, 0x3F, 0x0F, 0x3C, 0xCF, 0x30, 0xC0, 0xF0, 0x3C, 0x0F, 0x03,
    0xC0, 0xF0, 0x33, 0x30, 0xCC, 0x0C, 0x03, 0x00, 0xC0, 0xF0, 0x3C, 0x0F,
    0x03, 0xCC, 0xF3, 0x3C, 0xCF, 0x33, 0x33, 0x0C, 0xC0, 0xC0, 0xF0, 0x33,
    0x30, 0xCC, 0x0C, 0x03, 0x03, 0x30, 0xCC, 0xC0, 0xF0, 0x30, 0xC0, 0xF0,
    0x3C, 0x0F, 0x03, 0x3F, 0xCF, 0xF0, 0x0C, 0x03, 0x3F, 0x0F, 0xC0, 0xFF,
    0xFF, 0xF0, 0x30, 0x0C, 0x0C, 0x03, 0x03, 0x00, 0xC0, 0xFF, 0xFF, 0xF0,
    0x0C, 0x33, 0x0C, 0x30, 0xCC, 0x30, 0x30, 0xC3, 0x0C, 0x0C, 0x30, 0xFF,
    0xFF, 0xFF, 0xF0, 0xC3, 0x03, 0x0C, 0x30, 0xC0, 0xC3, 0x30, 0xC3, 0x0C,
    0xC3, 0x00, 0x3C, 0xCF, 0x3C, 0x33, 0x0C,
];

static GLYPHS: [Glyph; 95] = [
    Glyph::new(0, 0, 0, 12, 0, 0), // ' '
    Glyph::new(0, 2, 14, 12, 5, -14), // '!'
    Glyph::new(4, 6, 6, 12, 3, -14), // '"'
    Glyph::new(9, 10, 14, 12, 1, -14), // '#'
    Glyph::new(27, 10, 14, 12, 1, -14), // '$'
    Glyph::new(45, 10, 14, 12, 1, -14), // '%'
    Glyph::new(63, 10, 14, 12, 1, -14), // '&'
    Glyph::new(81, 4, 6, 12, 3, -14), // '\''
    Glyph::new(84, 6, 14, 12, 3, -14), // '('
    Glyph::new(95, 6, 14, 12, 3, -14), // ')'
    Glyph::new(106, 10, 10, 12, 1, -12), // '*'
    Glyph::new(119, 10, 10, 12, 1, -12), // '+'
    Glyph::new(132, 4, 6, 12, 3, -6), // ','
    Glyph::new(135, 10, 2, 12, 1, -8), // '-'
    Glyph::new(138, 4, 4, 12, 3, -4), // '.'
    Glyph::new(140, 10, 10, 12, 1, -12), // '/'
    Glyph::new(153, 10, 14, 12, 1, -14), // '0'
    Glyph::new(171, 6, 14, 12, 3, -14), // '1'
    Glyph::new(182, 10, 14, 12, 1, -14), // '2'
    Glyph::new(200, 10, 14, 12, 1, -14), // '3'
    Glyph::new(218, 10, 14, 12, 1, -14), // '4'
    Glyph::new(236, 10, 14, 12, 1, -14), // '5'
    Glyph::new(254, 10, 14, 12, 1, -14), // '6'
    Glyph::new(272, 10, 14, 12, 1, -14), // '7'
    Glyph::new(290, 10, 14, 12, 1, -14), // '8'
    Glyph::new(308, 10, 14, 12, 1, -14), // '9'
    Glyph::new(326, 4, 10, 12, 3, -12), // ':'
    Glyph::new(331, 4, 12, 12, 3, -12), // ';'
    Glyph::new(337, 8, 14, 12, 1, -14), // '<'
    Glyph::new(351, 10, 6, 12, 1, -10), // '='
    Glyph::new(359, 8, 14, 12, 3, -14), // '>'
    Glyph::new(373, 10, 14, 12, 1, -14), // '?'
    Glyph::new(391, 10, 14, 12, 1, -14), // '@'
    Glyph::new(409, 10, 14, 12, 1, -14), // 'A'
    Glyph::new(427, 10, 14, 12, 1, -14), // 'B'
    Glyph::new(445, 10, 14, 12, 1, -14), // 'C'
    Glyph::new(463, 10, 14, 12, 1, -14), // 'D'
    Glyph::new(481, 10, 14, 12, 1, -14), // 'E'
    Glyph::new(499, 10, 14, 12, 1, -14), // 'F'
    Glyph::new(517, 10, 14, 12, 1, -14), // 'G'
    Glyph::new(535, 10, 14, 12, 1, -14), // 'H'
    Glyph::new(553, 6, 14, 12, 3, -14), // 'I'
    Glyph::new(564, 10, 14, 12, 1, -14), // 'J'
    Glyph::new(582, 10, 14, 12, 1, -14), // 'K'
    Glyph::new(600, 10, 14, 12, 1, -14), // 'L'
    Glyph::new(618, 10, 14, 12, 1, -14), // 'M'
    Glyph::new(636, 10, 14, 12, 1, -14), // 'N'
    Glyph::new(654, 10, 14, 12, 1, -14), // 'O'
    Glyph::new(672, 10, 14, 12, 1, -14), // 'P'
    Glyph::new(690, 10, 14, 12, 1, -14), // 'Q'
    Glyph::new(708, 10, 14, 12, 1, -14), // 'R'
    Glyph::new(726, 10, 14, 12, 1, -14), // 'S'
    Glyph::new(744, 10, 14, 12, 1, -14), // 'T'
    Glyph::new(762, 10, 14, 12, 1, -14), // 'U'
    Glyph::new(780, 10, 14, 12, 1, -14), // 'V'
    Glyph::new(798, 10, 14, 12, 1, -14), // 'W'
    Glyph::new(816, 10, 14, 12, 1, -14), // 'X'
    Glyph::new(834, 10, 14, 12, 1, -14), // 'Y'
    Glyph::new(852, 10, 14, 12, 1, -14), // 'Z'
    Glyph::new(870, 6, 14, 12, 3, -14), // '['
    Glyph::new(881, 10, 10, 12, 1, -12), // '\\'
    Glyph::new(894, 6, 14, 12, 3, -14), // ']'
    Glyph::new(905, 10, 6, 12, 1, -14), // '^'
    Glyph::new(913, 10, 2, 12, 1, -2), // '_'
    Glyph::new(916, 6, 6, 12, 3, -14), // '`'
    Glyph::new(921, 10, 10, 12, 1, -10), // 'a'
    Glyph::new(934, 10, 14, 12, 1, -14), // 'b'
    Glyph::new(952, 10, 10, 12, 1, -10), // 'c'
    Glyph::new(965, 10, 14, 12, 1, -14), // 'd'
    Glyph::new(983, 10, 10, 12, 1, -10), // 'e'
    Glyph::new(996, 10, 14, 12, 1, -14), // 'f'
    Glyph::new(1014, 10, 12, 12, 1, -12), // 'g'
    Glyph::new(1029, 10, 14, 12, 1, -14), // 'h'
    Glyph::new(1047, 6, 14, 12, 3, -14), // 'i'
    Glyph::new(1058, 8, 14, 12, 1, -14), // 'j'
    Glyph::new(1072, 8, 14, 12, 1, -14), // 'k'
    Glyph::new(1086, 6, 14, 12, 3, -14), // 'l'
    Glyph::new(1097, 10, 10, 12, 1, -10), // 'm'
    Glyph::new(1110, 10, 10, 12, 1, -10), // 'n'
    Glyph::new(1123, 10, 10, 12, 1, -10), // 'o'
    Glyph::new(1136, 10, 10, 12, 1, -10), // 'p'
    Glyph::new(1149, 10, 10, 12, 1, -10), // 'q'
    Glyph::new(1162, 10, 10, 12, 1, -10), // 'r'
    Glyph::new(1175, 10, 10, 12, 1, -10), // 's'
    Glyph::new(1188, 10, 14, 12, 1, -14), // 't'
    Glyph::new(1206, 10, 10, 12, 1, -10), // 'u'
    Glyph::new(1219, 10, 10, 12, 1, -10), // 'v'
    Glyph::new(1232, 10, 10, 12, 1, -10), // 'w'
    Glyph::new(1245, 10, 10, 12, 1, -10), // 'x'
    Glyph::new(1258, 10, 10, 12, 1, -10), // 'y'
    Glyph::new(1271, 10, 10, 12, 1, -10), // 'z'
    Glyph::new(1284, 6, 14, 12, 3, -14), // '{'
    Glyph::new(1295, 2, 14, 12, 5, -14), // '|'
    Glyph::new(1299, 6, 14, 12, 3, -14), // '}'
    Glyph::new(1310, 10, 4, 12, 1, -8), // '~'
];

/// 14 px cap height, 12 px advance, 18 px line pitch.
pub static PIXEL_MONO_14: FreeFont = FreeFont {
    bitmap: &BITMAP,
    glyphs: &GLYPHS,
    first: 0x20,
    last: 0x7E,
    y_advance: 18,
};
