//! BMP drawing from a seekable file.
//!
//! Builds small 24-bit bitmaps in memory and draws them through
//! `MemoryFile`, the same `File` interface the SD card reader implements.
//!
//! Run with: cargo test -p display --test bmp_decode

use display::{named, BmpError, DisplayError, Ili9341, PanelConfig};
use embedded_hal_mock::eh1::delay::NoopDelay;
use platform::mocks::MockPanel;
use platform::MemoryFile;

const PAPER: u16 = 0x4208;

const BLUE: [u8; 3] = [0, 0, 255];
const GREEN: [u8; 3] = [0, 255, 0];
const RED: [u8; 3] = [255, 0, 0];
const WHITE: [u8; 3] = [255, 255, 255];

/// Encode `rows` (RGB, in file order) as an uncompressed 24-bit BMP.
/// A negative `height` sign marks top-down storage.
fn bmp(rows: &[&[[u8; 3]]], top_down: bool) -> Vec<u8> {
    let width = rows[0].len();
    let stride = (width * 3 + 3) & !3;
    let height = rows.len() as i32;
    let data_len = stride * rows.len();

    let mut out = Vec::with_capacity(54 + data_len);
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&((54 + data_len) as u32).to_le_bytes());
    out.extend_from_slice(&[0; 4]);
    out.extend_from_slice(&54u32.to_le_bytes());
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(if top_down { -height } else { height }).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&24u16.to_le_bytes());
    out.extend_from_slice(&[0; 24]);
    assert_eq!(out.len(), 54);

    for row in rows {
        for &[r, g, b] in row.iter() {
            out.extend_from_slice(&[b, g, r]);
        }
        out.resize(out.len() + stride - width * 3, 0);
    }
    out
}

fn panel() -> Ili9341<MockPanel, NoopDelay> {
    let mut tft = Ili9341::new(MockPanel::new(), NoopDelay::new(), PanelConfig::odroid_go());
    tft.init().unwrap();
    tft.bus_mut().fill(PAPER);
    tft.bus_mut().clear_log();
    tft
}

#[test]
fn bottom_up_rows_are_flipped() {
    let data = bmp(&[&[BLUE, GREEN], &[RED, WHITE]], false);
    let mut tft = panel();
    tft.draw_bmp(&mut MemoryFile::new(&data), 0, 0).unwrap();

    assert_eq!(tft.bus().pixel(0, 0), Some(named::RED));
    assert_eq!(tft.bus().pixel(1, 0), Some(named::WHITE));
    assert_eq!(tft.bus().pixel(0, 1), Some(named::BLUE));
    assert_eq!(tft.bus().pixel(1, 1), Some(named::GREEN));
    assert_eq!(tft.bus().pixels_written(), 4);
    // One window per row, bus released in between.
    assert_eq!(tft.bus().acquires(), 2);
    assert!(!tft.bus().is_held());
}

#[test]
fn top_down_rows_keep_order() {
    let data = bmp(&[&[BLUE, GREEN], &[RED, WHITE]], true);
    let mut tft = panel();
    tft.draw_bmp(&mut MemoryFile::new(&data), 10, 20).unwrap();

    assert_eq!(tft.bus().pixel(10, 20), Some(named::BLUE));
    assert_eq!(tft.bus().pixel(11, 21), Some(named::WHITE));
}

#[test]
fn odd_width_rows_skip_padding() {
    let data = bmp(&[&[RED, GREEN, BLUE], &[WHITE, WHITE, RED]], true);
    let mut tft = panel();
    tft.draw_bmp(&mut MemoryFile::new(&data), 0, 0).unwrap();

    assert_eq!(tft.bus().pixel(2, 0), Some(named::BLUE));
    assert_eq!(tft.bus().pixel(0, 1), Some(named::WHITE));
    assert_eq!(tft.bus().pixel(2, 1), Some(named::RED));
    assert_eq!(tft.bus().pixel(3, 0), Some(PAPER));
}

#[test]
fn partially_offscreen_image_is_clipped() {
    let data = bmp(&[&[BLUE, GREEN], &[RED, WHITE]], false);
    let mut tft = panel();
    tft.draw_bmp(&mut MemoryFile::new(&data), -1, 319).unwrap();

    // Only the right column of the top row is on the panel.
    assert_eq!(tft.bus().pixels_written(), 1);
    assert_eq!(tft.bus().pixel(0, 319), Some(named::WHITE));
    assert_eq!(tft.bus().offscreen_pixels(), 0);
}

#[test]
fn rejected_files_draw_nothing() {
    let mut tft = panel();

    let mut data = bmp(&[&[RED, RED]], false);
    data.truncate(data.len() - 4);
    assert_eq!(
        tft.draw_bmp(&mut MemoryFile::new(&data), 0, 0),
        Err(BmpError::Truncated)
    );

    let mut data = bmp(&[&[RED, RED]], false);
    data[0] = b'P';
    assert_eq!(
        tft.draw_bmp(&mut MemoryFile::new(&data), 0, 0),
        Err(BmpError::BadSignature)
    );

    assert_eq!(
        tft.draw_bmp(&mut MemoryFile::new(b"BM"), 0, 0),
        Err(BmpError::Read)
    );
    assert_eq!(tft.bus().pixels_written(), 0);
}

#[test]
fn busy_bus_aborts_drawing() {
    let data = bmp(&[&[RED, RED]], false);
    let mut tft = panel();
    tft.bus_mut().set_contended(true);
    assert_eq!(
        tft.draw_bmp(&mut MemoryFile::new(&data), 0, 0),
        Err(BmpError::Display(DisplayError::Busy))
    );
}
