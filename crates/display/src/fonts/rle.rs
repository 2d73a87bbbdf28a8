//! Run-length encoded proportional fonts.
//!
//! Each glyph is a byte stream covering its `width x height` cell in
//! row-major order. A byte with bit 7 set is a run of `(b & 0x7F) + 1`
//! foreground pixels; any other byte skips `b + 1` background pixels.

#![allow(clippy::arithmetic_side_effects)] // run lengths are at most 128

/// A proportional font for code points `' '..='\x7F'`.
#[derive(Debug)]
pub struct RleFont {
    /// Cell height in pixels
    pub height: u8,
    /// Baseline row, counted from the top of the cell
    pub baseline: u8,
    /// Advance width per glyph, indexed by `c - 32`
    pub widths: &'static [u8],
    /// Encoded glyphs, indexed by `c - 32`
    pub glyphs: &'static [&'static [u8]],
}

/// One decoded run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Run {
    /// Pixels in the text colour
    Ink(u16),
    /// Pixels left as background
    Skip(u16),
}

impl Run {
    /// Pixels covered by this run.
    pub const fn len(self) -> u16 {
        match self {
            Run::Ink(n) | Run::Skip(n) => n,
        }
    }

    /// Always false: a run covers at least one pixel.
    pub const fn is_empty(self) -> bool {
        false
    }
}

impl RleFont {
    /// Glyph table index for `c`, `None` outside `32..=127`.
    fn index(c: u8) -> Option<usize> {
        (32..=127).contains(&c).then(|| usize::from(c.wrapping_sub(32)))
    }

    /// Advance width of `c`; 0 if the font has no glyph for it.
    pub fn width(&self, c: u8) -> u8 {
        Self::index(c)
            .and_then(|i| self.widths.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Decoded runs of `c`, or `None` without a glyph.
    pub fn runs(&self, c: u8) -> Option<impl Iterator<Item = Run> + 'static> {
        let data: &'static [u8] = Self::index(c).and_then(|i| self.glyphs.get(i)).copied()?;
        Some(data.iter().map(|&b| {
            let n = u16::from(b & 0x7F) + 1;
            if b & 0x80 != 0 {
                Run::Ink(n)
            } else {
                Run::Skip(n)
            }
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::fonts::{FONT16, FONT26};

    #[test]
    fn glyph_runs_cover_the_cell() {
        for font in [&FONT16, &FONT26] {
            for c in 32u8..127 {
                let area = u32::from(font.width(c)) * u32::from(font.height);
                let covered: u32 = font.runs(c).unwrap().map(|r| u32::from(r.len())).sum();
                assert!(covered <= area, "{:?} overruns its cell", c as char);
            }
        }
    }

    #[test]
    fn out_of_range_has_no_glyph() {
        assert_eq!(FONT16.width(31), 0);
        assert_eq!(FONT16.width(200), 0);
        assert!(FONT16.runs(10).is_none());
    }

    #[test]
    fn space_is_blank() {
        assert!(FONT16.runs(b' ').unwrap().all(|r| matches!(r, Run::Skip(_))));
    }
}
