//! Property-based tests for the panel emulator and in-memory files.
//! The display driver's own tests trust these two doubles, so their
//! behaviour is pinned down here against the raw wire protocol.
//!
//! Run with: cargo test -p platform --features std --test panel_emulator

use embedded_io::{Read, Seek, SeekFrom};
use platform::config::{PANEL_HEIGHT, PANEL_WIDTH};
use platform::mocks::MockPanel;
use platform::{File, MemoryFile, PanelBus};

const CASET: u8 = 0x2A;
const PASET: u8 = 0x2B;
const RAMWR: u8 = 0x2C;
const MADCTL: u8 = 0x36;

fn window(bus: &mut MockPanel, x0: u16, y0: u16, x1: u16, y1: u16) {
    let mut range = |cmd: u8, a: u16, b: u16| {
        bus.write_command(cmd).unwrap();
        let [a_hi, a_lo] = a.to_be_bytes();
        let [b_hi, b_lo] = b.to_be_bytes();
        bus.write_data(&[a_hi, a_lo, b_hi, b_lo]).unwrap();
    };
    range(CASET, x0, x1);
    range(PASET, y0, y1);
    bus.write_command(RAMWR).unwrap();
}

proptest::proptest! {
    /// A window filled with exactly its area lands every pixel inside it.
    #[test]
    fn window_fill_stays_inside(
        x0 in 0u16..PANEL_WIDTH,
        y0 in 0u16..PANEL_HEIGHT,
        w in 1u16..=32,
        h in 1u16..=32,
        color in 1u16..=u16::MAX,
    ) {
        let x1 = (x0 + w - 1).min(PANEL_WIDTH - 1);
        let y1 = (y0 + h - 1).min(PANEL_HEIGHT - 1);
        let area = u32::from(x1 - x0 + 1) * u32::from(y1 - y0 + 1);

        let mut bus = MockPanel::new();
        bus.acquire().unwrap();
        window(&mut bus, x0, y0, x1, y1);
        bus.write_repeated(color, area).unwrap();
        bus.release().unwrap();

        assert_eq!(bus.count_color(color), area as usize);
        assert_eq!(bus.pixel(i32::from(x0), i32::from(y0)), Some(color));
        assert_eq!(bus.pixel(i32::from(x1), i32::from(y1)), Some(color));
        assert_eq!(bus.pixels_written(), area as usize);
        assert_eq!(bus.offscreen_pixels(), 0);
        assert_eq!(bus.unguarded_accesses(), 0);
    }

    /// Seeking anywhere in a file and reading to the end yields the tail.
    #[test]
    fn memory_file_reads_tail(data in proptest::collection::vec(proptest::num::u8::ANY, 0..256), at in 0usize..256) {
        let at = at.min(data.len());
        let mut file = MemoryFile::new(&data);
        assert_eq!(file.size(), data.len() as u64);
        file.seek(SeekFrom::Start(at as u64)).unwrap();

        let mut tail = vec![0u8; data.len() - at];
        file.read_exact(&mut tail).unwrap();
        assert_eq!(&tail[..], &data[at..]);
        assert_eq!(file.read(&mut [0u8; 4]).unwrap(), 0);
    }
}

#[test]
fn landscape_madctl_swaps_axes() {
    let mut bus = MockPanel::new();
    bus.acquire().unwrap();
    bus.write_command(MADCTL).unwrap();
    bus.write_data(&[0x20]).unwrap();
    assert_eq!(bus.logical_size(), (PANEL_HEIGHT, PANEL_WIDTH));

    window(&mut bus, 300, 10, 300, 10);
    bus.write_pixels(&[0xF800]).unwrap();
    bus.release().unwrap();
    assert_eq!(bus.pixel(300, 10), Some(0xF800));
}

#[test]
fn second_acquire_reports_contention() {
    let mut bus = MockPanel::new();
    bus.acquire().unwrap();
    assert_eq!(bus.acquire(), Err(platform::BusError::Contended));
    bus.release().unwrap();

    bus.set_contended(true);
    assert_eq!(bus.acquire(), Err(platform::BusError::Contended));
    assert!(!bus.is_held());
}

#[test]
fn writes_without_acquire_are_counted() {
    let mut bus = MockPanel::new();
    bus.write_command(RAMWR).unwrap();
    assert_eq!(bus.unguarded_accesses(), 1);
}
