//! Adafruit-GFX style fonts.
//!
//! Glyph bitmaps are packed back to back as one MSB-first bit stream; a
//! glyph's rows are `width` bits each with no padding between rows. Offsets
//! are relative to the cursor, which sits on the baseline.

#![allow(clippy::arithmetic_side_effects)] // bit index arithmetic only

/// Metrics and bitmap location of one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    bitmap_offset: u16,
    width: u8,
    height: u8,
    x_advance: u8,
    x_offset: i8,
    y_offset: i8,
}

impl Glyph {
    /// Table entry, in the field order of the GFX `GFXglyph` struct.
    pub const fn new(
        bitmap_offset: u16,
        width: u8,
        height: u8,
        x_advance: u8,
        x_offset: i8,
        y_offset: i8,
    ) -> Self {
        Self {
            bitmap_offset,
            width,
            height,
            x_advance,
            x_offset,
            y_offset,
        }
    }

    /// Byte offset of the first row in the font bitmap.
    pub const fn bitmap_offset(&self) -> u16 {
        self.bitmap_offset
    }

    /// Bitmap width.
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Bitmap height.
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Cursor advance after this glyph.
    pub const fn x_advance(&self) -> u8 {
        self.x_advance
    }

    /// Left edge relative to the cursor.
    pub const fn x_offset(&self) -> i8 {
        self.x_offset
    }

    /// Top edge relative to the baseline (negative is above).
    pub const fn y_offset(&self) -> i8 {
        self.y_offset
    }
}

/// A font covering the code points `first..=last`.
#[derive(Debug)]
pub struct FreeFont {
    /// Concatenated glyph bitmaps
    pub bitmap: &'static [u8],
    /// One entry per code point from `first`
    pub glyphs: &'static [Glyph],
    /// First code point
    pub first: u8,
    /// Last code point
    pub last: u8,
    /// Line height
    pub y_advance: u8,
}

impl FreeFont {
    /// Glyph for `c`, `None` outside `first..=last`.
    pub fn glyph(&self, c: u8) -> Option<&Glyph> {
        if c < self.first || c > self.last {
            return None;
        }
        self.glyphs.get(usize::from(c.wrapping_sub(self.first)))
    }

    /// Largest extent above and below the baseline over all glyphs.
    pub fn ascent_descent(&self) -> (u8, u8) {
        self.glyphs.iter().fold((0u8, 0u8), |(ab, bb), g| {
            let above = i16::from(g.y_offset).saturating_neg();
            let below = i16::from(g.height).saturating_sub(above);
            (
                ab.max(u8::try_from(above).unwrap_or(0)),
                bb.max(u8::try_from(below).unwrap_or(0)),
            )
        })
    }

    /// Bit `bit` of `glyph`'s row-major bitmap. Bits past the table read
    /// as clear.
    pub fn is_set(&self, glyph: &Glyph, bit: usize) -> bool {
        let start = usize::from(glyph.bitmap_offset);
        let byte = start.saturating_add(bit / 8);
        self.bitmap
            .get(byte)
            .is_some_and(|b| b & (0x80 >> (bit % 8)) != 0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::fonts::PIXEL_MONO_14;

    #[test]
    fn glyph_lookup_respects_range() {
        assert!(PIXEL_MONO_14.glyph(b' ').is_some());
        assert!(PIXEL_MONO_14.glyph(b'~').is_some());
        assert!(PIXEL_MONO_14.glyph(0x1F).is_none());
        assert!(PIXEL_MONO_14.glyph(0x7F).is_none());
    }

    #[test]
    fn monospaced_advance() {
        for c in b' '..=b'~' {
            assert_eq!(PIXEL_MONO_14.glyph(c).unwrap().x_advance(), 12);
        }
    }

    #[test]
    fn ascent_covers_capitals() {
        let (ab, bb) = PIXEL_MONO_14.ascent_descent();
        let h = PIXEL_MONO_14.glyph(b'H').unwrap();
        assert!(i16::from(ab) >= -i16::from(h.y_offset()));
        assert!(bb <= 4);
    }

    #[test]
    fn bits_read_msb_first() {
        static GLYPHS: [Glyph; 1] = [Glyph::new(0, 3, 3, 4, 0, -3)];
        let font = FreeFont {
            bitmap: &[0b1000_0001, 0b0100_0000],
            glyphs: &GLYPHS,
            first: b'A',
            last: b'A',
            y_advance: 4,
        };
        let g = font.glyph(b'A').unwrap();
        let set: Vec<usize> = (0..16).filter(|&i| font.is_set(g, i)).collect();
        assert_eq!(set, vec![0, 7, 9]);
    }
}
