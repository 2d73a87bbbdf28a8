//! Compiled-in fonts.
//!
//! | id | font | cell |
//! |----|------|------|
//! | 1 | [`classic`] | 6 x 8, fixed |
//! | 2 | [`FONT16`] | 16 px, proportional, RLE |
//! | 4 | [`FONT26`] | 26 px, proportional, RLE |
//!
//! Any [`FreeFont`] can be selected in addition with
//! `Ili9341::set_free_font`. The tables are regenerated with
//! `cargo xtask fontgen`.

pub mod classic;
pub mod free;
pub mod rle;

mod font16;
mod font26;
mod pixel_mono14;

pub use font16::FONT16;
pub use font26::FONT26;
pub use free::{FreeFont, Glyph};
pub use pixel_mono14::PIXEL_MONO_14;
pub use rle::RleFont;

/// Font id of the classic font, also used for unknown ids.
pub const CLASSIC: u8 = 1;

/// A builtin font resolved from its id.
#[derive(Debug, Clone, Copy)]
pub enum Builtin {
    /// The 6x8 classic font
    Classic,
    /// One of the RLE fonts
    Rle(&'static RleFont),
}

impl Builtin {
    /// Font for `id`. Unknown ids (including 0) select the classic font.
    pub fn from_id(id: u8) -> Self {
        match id {
            2 => Builtin::Rle(&FONT16),
            4 => Builtin::Rle(&FONT26),
            _ => Builtin::Classic,
        }
    }
}

/// Column `col` of the classic glyph for `c`, bit 0 at the top. Column 5
/// is the inter-character gap; code points without a glyph are blank.
pub fn classic_column(c: u8, col: usize) -> u8 {
    usize::from(c)
        .checked_sub(32)
        .and_then(|i| classic::GLYPHS.get(i))
        .and_then(|g| g.get(col))
        .copied()
        .unwrap_or(0)
}

/// Normalise a font id: ids without a builtin font become [`CLASSIC`].
pub fn normalize_id(id: u8) -> u8 {
    match id {
        2 | 4 => id,
        _ => CLASSIC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ids_fall_back_to_classic() {
        assert!(matches!(Builtin::from_id(0), Builtin::Classic));
        assert!(matches!(Builtin::from_id(7), Builtin::Classic));
        assert_eq!(normalize_id(0), CLASSIC);
        assert_eq!(normalize_id(4), 4);
        assert!(matches!(Builtin::from_id(2), Builtin::Rle(f) if f.height == 16));
    }

    #[test]
    fn classic_columns() {
        // '!' is a single column of rows 0-4 and 6.
        assert_eq!(classic_column(b'!', 2), 0x5F);
        assert_eq!(classic_column(b'!', 5), 0);
        assert_eq!(classic_column(0x80, 2), 0);
    }
}
