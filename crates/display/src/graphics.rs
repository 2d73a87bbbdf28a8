//! `embedded-graphics` integration
//!
//! Lets the driver render `embedded-graphics` primitives, text and images.
//! Solid fills go through [`Ili9341::fill_rect`]; contiguous fills stream
//! through one address window when the area is fully on screen.

// Rectangle sizes are clipped to the panel before narrowing.
#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]

use embedded_graphics::pixelcolor::{IntoStorage, Rgb565};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use platform::PanelBus;

use crate::driver::Ili9341;
use crate::error::DisplayError;
use crate::image::LineBuffer;

fn raw(color: Rgb565) -> u16 {
    color.into_storage()
}

fn extent(size: u32) -> i32 {
    i32::try_from(size).unwrap_or(i32::MAX)
}

impl<BUS, DELAY, RST> DrawTarget for Ili9341<BUS, DELAY, RST>
where
    BUS: PanelBus,
    DELAY: DelayNs,
    RST: OutputPin,
{
    type Color = Rgb565;
    type Error = DisplayError;

    /// Draw pixels one at a time under a single bus acquisition.
    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.transaction(|d| {
            for Pixel(point, color) in pixels {
                d.draw_pixel(point.x, point.y, raw(color))?;
            }
            Ok(())
        })
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        let (w, h) = (extent(area.size.width), extent(area.size.height));
        let Some(c) = self.clip(area.top_left.x, area.top_left.y, w, h) else {
            return Ok(());
        };
        if i32::from(c.w) != w || i32::from(c.h) != h {
            let pixels = area
                .points()
                .zip(colors)
                .map(|(point, color)| Pixel(point, color));
            return self.draw_iter(pixels);
        }

        self.transaction(|d| {
            d.set_window(c.x, c.y, c.x1(), c.y1())?;
            let mut line = LineBuffer::new();
            for color in colors.into_iter().take(c.area() as usize) {
                line.push(&mut d.bus, raw(color))?;
            }
            line.flush(&mut d.bus)?;
            Ok(())
        })
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_rect(
            area.top_left.x,
            area.top_left.y,
            extent(area.size.width),
            extent(area.size.height),
            raw(color),
        )
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_screen(raw(color))
    }
}

impl<BUS, DELAY, RST> OriginDimensions for Ili9341<BUS, DELAY, RST> {
    /// Logical size after rotation.
    fn size(&self) -> Size {
        Size::new(u32::from(self.width), u32::from(self.height))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use embedded_graphics::primitives::{Circle, PrimitiveStyle};
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use platform::mocks::MockPanel;

    use super::*;
    use crate::command::Command;
    use crate::PanelConfig;

    fn panel() -> Ili9341<MockPanel, NoopDelay> {
        let mut tft = Ili9341::new(MockPanel::new(), NoopDelay::new(), PanelConfig::odroid_go());
        tft.init().unwrap();
        tft.bus_mut().clear_log();
        tft
    }

    #[test]
    fn size_follows_rotation() {
        let mut tft = panel();
        assert_eq!(tft.size(), Size::new(240, 320));
        tft.set_rotation(1).unwrap();
        assert_eq!(tft.size(), Size::new(320, 240));
    }

    #[test]
    fn filled_rectangle_is_one_burst() {
        let mut tft = panel();
        Rectangle::new(Point::new(10, 20), Size::new(30, 40))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
            .draw(&mut tft)
            .unwrap();
        assert_eq!(tft.bus().count(Command::MemoryWrite as u8), 1);
        assert_eq!(tft.bus().pixels_written(), 1200);
        assert_eq!(tft.bus().pixel(10, 20), Some(0xF800));
        assert_eq!(tft.bus().pixel(39, 59), Some(0xF800));
        assert_eq!(tft.bus().pixel(40, 59), Some(0));
    }

    #[test]
    fn outline_holds_bus_once() {
        let mut tft = panel();
        Circle::new(Point::new(50, 50), 21)
            .into_styled(PrimitiveStyle::with_stroke(Rgb565::GREEN, 1))
            .draw(&mut tft)
            .unwrap();
        assert_eq!(tft.bus().acquires(), 1);
        assert_eq!(tft.bus().pixel(60, 50), Some(0x07E0));
        assert_eq!(tft.bus().pixel(60, 60), Some(0));
    }

    #[test]
    fn contiguous_fill_streams_or_clips() {
        let mut tft = panel();
        let colors = [Rgb565::RED, Rgb565::GREEN, Rgb565::BLUE, Rgb565::WHITE];
        tft.fill_contiguous(&Rectangle::new(Point::new(4, 4), Size::new(2, 2)), colors)
            .unwrap();
        assert_eq!(tft.bus().write_bursts(), 1);
        assert_eq!(tft.bus().pixel(4, 4), Some(0xF800));
        assert_eq!(tft.bus().pixel(5, 4), Some(0x07E0));
        assert_eq!(tft.bus().pixel(4, 5), Some(0x001F));
        assert_eq!(tft.bus().pixel(5, 5), Some(0xFFFF));

        // Hanging off the left edge: only the visible column lands.
        tft.bus_mut().clear_log();
        tft.fill_contiguous(&Rectangle::new(Point::new(-1, 0), Size::new(2, 2)), colors)
            .unwrap();
        assert_eq!(tft.bus().pixels_written(), 2);
        assert_eq!(tft.bus().pixel(0, 0), Some(0x07E0));
        assert_eq!(tft.bus().pixel(0, 1), Some(0xFFFF));
    }

    #[test]
    fn clear_fills_screen() {
        let mut tft = panel();
        tft.clear(Rgb565::BLUE).unwrap();
        assert_eq!(tft.bus().count_color(0x001F), 240 * 320);
    }
}
