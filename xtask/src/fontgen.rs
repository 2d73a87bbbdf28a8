//! Builtin font generation.
//!
//! Every builtin font is derived from the classic 5x7 table in
//! `crates/display/src/fonts/classic.rs`:
//!
//! - `font16.rs` / `font26.rs`: the glyphs scaled 2x / 3x, trimmed to their
//!   inked columns plus one scaled column of spacing, and run-length encoded
//!   (bit 7 = ink, bits 0-6 = run length - 1).
//! - `pixel_mono14.rs`: the glyphs scaled 2x, cropped to their ink box and
//!   packed MSB-first in the adafruit GFX layout, on a 12 px advance.

use anyhow::{Context, Result};
use colored::Colorize;
use display::fonts::classic::GLYPHS;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

const HEADER: &str = "//!\n//! Generated by `cargo xtask fontgen`. Do not edit by hand.\n";

/// Parameters of one run-length encoded font.
struct RleParams {
    file: &'static str,
    ident: &'static str,
    title: &'static str,
    scale: usize,
    /// Blank rows above the scaled glyph.
    top: usize,
    height: usize,
}

const RLE_FONTS: [RleParams; 2] = [
    RleParams {
        file: "font16.rs",
        ident: "FONT16",
        title: "16 px run-length encoded font scaled from the classic glyphs.",
        scale: 2,
        top: 1,
        height: 16,
    },
    RleParams {
        file: "font26.rs",
        ident: "FONT26",
        title: "26 px run-length encoded font scaled from the classic glyphs.",
        scale: 3,
        top: 2,
        height: 26,
    },
];

const FREE_FONT_FILE: &str = "pixel_mono14.rs";
const FREE_SCALE: usize = 2;
const FREE_ADVANCE: u8 = 12;
/// Baseline sits 14 px below the top of a scaled cell.
const FREE_ASCENT: i32 = 14;

fn fonts_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("crates/display/src/fonts")
}

/// Regenerate the font tables, or with `check` only report stale ones.
pub fn run(check: bool) -> Result<()> {
    println!();
    println!("{}", "🔤 Generating builtin fonts...".cyan().bold());
    println!();

    let dir = fonts_dir();
    let mut stale = Vec::new();

    for (file, contents) in generate() {
        let path = dir.join(file);
        let current = std::fs::read_to_string(&path).unwrap_or_default();
        if current == contents {
            println!("{}", format!("  ✓ {file} up to date").green());
            continue;
        }
        if check {
            eprintln!("{}", format!("  ✗ {file} is stale").red().bold());
            stale.push(file);
        } else {
            std::fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
            println!("{}", format!("  ✓ {file} written").green());
        }
    }
    println!();

    if !stale.is_empty() {
        anyhow::bail!("{} font table(s) out of date; run `cargo xtask fontgen`", stale.len());
    }
    Ok(())
}

/// All generated files as `(file name, contents)`.
pub fn generate() -> Vec<(&'static str, String)> {
    let mut out: Vec<(&'static str, String)> = RLE_FONTS.iter().map(|params| (params.file, rle_font(params))).collect();
    out.push((FREE_FONT_FILE, free_font()));
    out
}

fn char_name(index: usize) -> String {
    match 0x20 + index as u8 {
        b'\'' => r"'\''".to_string(),
        b'\\' => r"'\\'".to_string(),
        c => format!("'{}'", c as char),
    }
}

fn ink(glyph: &[u8; 5], col: usize, row: usize) -> bool {
    (glyph[col] >> row) & 1 == 1
}

/// First and last inked column.
fn column_span(glyph: &[u8; 5]) -> Option<(usize, usize)> {
    let first = glyph.iter().position(|&c| c != 0)?;
    let last = glyph.iter().rposition(|&c| c != 0)?;
    Some((first, last))
}

fn hex_rows(values: &[u8], indent: &str, per_line: usize, lines: &mut Vec<String>) {
    for chunk in values.chunks(per_line) {
        let row: Vec<String> = chunk.iter().map(|v| format!("0x{v:02X}")).collect();
        lines.push(format!("{indent}{},", row.join(", ")));
    }
}

/// Width and run bytes of one glyph.
fn rle_glyph(glyph: &[u8; 5], params: &RleParams) -> (u8, Vec<u8>) {
    let s = params.scale;
    let (first, cols, width) = match column_span(glyph) {
        Some((first, last)) => (first, last - first + 1, (last - first + 2) * s),
        None => (0, 0, 4 * s),
    };

    let mut pixels = Vec::with_capacity(width * params.height);
    for y in 0..params.height {
        for x in 0..width {
            let on = y >= params.top
                && y - params.top < 7 * s
                && x < cols * s
                && ink(glyph, first + x / s, (y - params.top) / s);
            pixels.push(on);
        }
    }

    let mut runs = Vec::new();
    let mut i = 0;
    while i < pixels.len() {
        let value = pixels[i];
        let mut n = 1;
        while i + n < pixels.len() && pixels[i + n] == value && n < 128 {
            n += 1;
        }
        let flag = if value { 0x80 } else { 0 };
        runs.push(flag | (n - 1) as u8);
        i += n;
    }
    (width as u8, runs)
}

fn rle_font(params: &RleParams) -> String {
    let (widths, glyphs): (Vec<u8>, Vec<Vec<u8>>) = GLYPHS.iter().map(|g| rle_glyph(g, params)).unzip();
    let baseline = params.top + 7 * params.scale;

    let mut lines = vec![
        format!("//! {}\n{HEADER}", params.title),
        "use super::rle::RleFont;".to_string(),
        String::new(),
        format!(
            "/// Proportional font, {} px tall with the baseline at row {baseline}.",
            params.height
        ),
        format!("pub static {}: RleFont = RleFont {{", params.ident),
        format!("    height: {},", params.height),
        format!("    baseline: {baseline},"),
        "    widths: &[".to_string(),
    ];
    hex_rows(&widths, "        ", 16, &mut lines);
    lines.push("    ],".to_string());
    lines.push("    glyphs: &[".to_string());
    for (i, runs) in glyphs.iter().enumerate() {
        lines.push(format!("        // {}", char_name(i)));
        lines.push("        &[".to_string());
        hex_rows(runs, "            ", 12, &mut lines);
        lines.push("        ],".to_string());
    }
    lines.push("    ],".to_string());
    lines.push("};".to_string());
    lines.join("\n") + "\n"
}

fn free_font() -> String {
    let s = FREE_SCALE;
    let mut bitmap: Vec<u8> = Vec::new();
    let mut glyphs = String::new();

    for (i, g) in GLYPHS.iter().enumerate() {
        let rows: Vec<usize> = (0..7).filter(|&r| (0..5).any(|c| ink(g, c, r))).collect();
        let (span, top, bottom) = match (column_span(g), rows.first(), rows.last()) {
            (Some(span), Some(&top), Some(&bottom)) => (span, top, bottom),
            _ => {
                let _ = writeln!(
                    glyphs,
                    "    Glyph::new({}, 0, 0, {FREE_ADVANCE}, 0, 0), // {}",
                    bitmap.len(),
                    char_name(i)
                );
                continue;
            }
        };
        let (first, last) = span;
        let w = (last - first + 1) * s;
        let h = (bottom - top + 1) * s;

        let mut bits: Vec<bool> = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                bits.push(ink(g, first + x / s, top + y / s));
            }
        }
        let offset = bitmap.len();
        for byte in bits.chunks(8) {
            let packed = (0..8).fold(0u8, |acc, k| (acc << 1) | u8::from(byte.get(k).copied().unwrap_or(false)));
            bitmap.push(packed);
        }

        let x_offset = first * s + 1;
        let y_offset = (top * s) as i32 - FREE_ASCENT;
        let _ = writeln!(
            glyphs,
            "    Glyph::new({offset}, {w}, {h}, {FREE_ADVANCE}, {x_offset}, {y_offset}), // {}",
            char_name(i)
        );
    }

    let mut lines = vec![
        format!("//! Monospaced pixel font in the adafruit GFX glyph layout.\n{HEADER}"),
        "use super::free::{FreeFont, Glyph};".to_string(),
        String::new(),
        format!("static BITMAP: [u8; {}] = [", bitmap.len()),
    ];
    hex_rows(&bitmap, "    ", 12, &mut lines);
    lines.push("];".to_string());
    lines.push(String::new());
    lines.push(format!("static GLYPHS: [Glyph; {}] = [", GLYPHS.len()));
    lines.push(glyphs.trim_end_matches('\n').to_string());
    lines.extend(
        [
            "];",
            "",
            "/// 14 px cap height, 12 px advance, 18 px line pitch.",
            "pub static PIXEL_MONO_14: FreeFont = FreeFont {",
            "    bitmap: &BITMAP,",
            "    glyphs: &GLYPHS,",
            "    first: 0x20,",
            "    last: 0x7E,",
            "    y_advance: 18,",
            "};",
        ]
        .map(String::from),
    );
    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_in_tables_are_current() {
        let sources = [
            include_str!("../../crates/display/src/fonts/font16.rs"),
            include_str!("../../crates/display/src/fonts/font26.rs"),
            include_str!("../../crates/display/src/fonts/pixel_mono14.rs"),
        ];
        for ((file, generated), source) in generate().iter().zip(sources) {
            assert!(generated == source, "{file} differs from generator output");
        }
    }

    #[test]
    fn quotes_and_backslash_are_escaped() {
        assert_eq!(char_name(usize::from(b'\'' - 0x20)), r"'\''");
        assert_eq!(char_name(usize::from(b'\\' - 0x20)), r"'\\'");
        assert_eq!(char_name(usize::from(b'A' - 0x20)), "'A'");
    }

    #[test]
    fn blank_glyph_is_one_skip_run() {
        // Space: 8 px wide, 16 rows, all clear.
        let (width, runs) = rle_glyph(&GLYPHS[0], &RLE_FONTS[0]);
        assert_eq!(width, 8);
        assert_eq!(runs, vec![0x7F]);
    }
}
