//! Progress bar widgets.
//!
//! Fill lengths use integer math: `extent * percent / 100`, rounded down.
//! Percentages above 100 draw a full bar.

#![allow(clippy::arithmetic_side_effects)] // extents are panel-sized, percent <= 100

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use platform::PanelBus;

use crate::color::named::BLACK;
use crate::driver::Ili9341;
use crate::error::DisplayError;

/// Frame and fill colour of [`Ili9341::progress_bar`].
pub const PROGRESS_COLOR: u16 = 0x09F1;

fn scaled(extent: i32, percent: u8) -> i32 {
    extent * i32::from(percent.min(100)) / 100
}

impl<BUS, DELAY, RST> Ili9341<BUS, DELAY, RST>
where
    BUS: PanelBus,
    DELAY: DelayNs,
    RST: OutputPin,
{
    /// Square-cornered bar filled left to right.
    pub fn progress_bar(&mut self, x: i32, y: i32, w: i32, h: i32, percent: u8) -> Result<(), DisplayError> {
        self.transaction(|d| {
            d.draw_rect(x, y, w, h, PROGRESS_COLOR)?;
            d.fill_rect(x + 1, y + 1, scaled(w, percent), h - 1, PROGRESS_COLOR)
        })
    }

    /// Rounded bar filled left to right. `redraw` clears the previous fill
    /// first, needed when the value goes down.
    #[allow(clippy::too_many_arguments)]
    pub fn h_progress_bar(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: u16,
        percent: u8,
        redraw: bool,
    ) -> Result<(), DisplayError> {
        self.transaction(|d| {
            if redraw {
                d.fill_round_rect(x + 1, y + 1, w, h - 2, 7, BLACK)?;
            }
            d.draw_round_rect(x, y, w, h, 8, color)?;
            d.fill_round_rect(x + 1, y + 1, scaled(w, percent), h - 2, 7, color)
        })
    }

    /// Rounded bar filled bottom to top.
    #[allow(clippy::too_many_arguments)]
    pub fn v_progress_bar(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: u16,
        percent: u8,
        redraw: bool,
    ) -> Result<(), DisplayError> {
        let filled = scaled(h, percent);
        self.transaction(|d| {
            if redraw {
                d.fill_round_rect(x + 1, y + 1, w - 1, h - 1, 10, BLACK)?;
            }
            d.draw_round_rect(x, y, w, h, 10, color)?;
            d.fill_round_rect(x + 1, y + h - filled, w - 2, filled, 10, color)
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use platform::mocks::MockPanel;

    use super::*;
    use crate::PanelConfig;

    const PAPER: u16 = 0x2222;

    fn panel() -> Ili9341<MockPanel, NoopDelay> {
        let mut tft = Ili9341::new(MockPanel::new(), NoopDelay::new(), PanelConfig::odroid_go());
        tft.init().unwrap();
        tft.bus_mut().fill(PAPER);
        tft.bus_mut().clear_log();
        tft
    }

    #[test]
    fn plain_bar_fills_proportionally() {
        let mut tft = panel();
        tft.progress_bar(10, 10, 100, 10, 50).unwrap();
        assert_eq!(tft.bus().pixel(60, 15), Some(PROGRESS_COLOR));
        assert_eq!(tft.bus().pixel(61, 15), Some(PAPER));
        assert_eq!(tft.bus().pixel(109, 15), Some(PROGRESS_COLOR), "frame");
        assert_eq!(tft.bus().acquires(), 1);
    }

    #[test]
    fn percent_is_capped() {
        assert_eq!(scaled(80, 250), 80);
        assert_eq!(scaled(80, 0), 0);
        assert_eq!(scaled(3, 50), 1);
    }

    #[test]
    fn redraw_clears_previous_fill() {
        let mut tft = panel();
        tft.h_progress_bar(20, 20, 200, 30, 0xFFE0, 90, false).unwrap();
        assert_eq!(tft.bus().pixel(150, 35), Some(0xFFE0));

        tft.h_progress_bar(20, 20, 200, 30, 0xFFE0, 10, true).unwrap();
        assert_eq!(tft.bus().pixel(150, 35), Some(BLACK));
        assert_eq!(tft.bus().pixel(30, 35), Some(0xFFE0));
    }

    #[test]
    fn vertical_bar_grows_from_bottom() {
        let mut tft = panel();
        tft.v_progress_bar(10, 10, 40, 200, 0x07E0, 25, false).unwrap();
        assert_eq!(tft.bus().pixel(30, 200), Some(0x07E0));
        assert_eq!(tft.bus().pixel(30, 100), Some(PAPER));
    }
}
