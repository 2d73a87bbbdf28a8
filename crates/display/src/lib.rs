//! ILI9341 TFT driver and renderer for the ODROID-GO
//!
//! Draws straight into the controller's GRAM over SPI. There is no
//! framebuffer: every primitive clips to the panel, sets an address window
//! and streams RGB565 pixels.
//!
//! # Architecture
//!
//! ```text
//! Application (launcher, emulator front ends)
//!         ↓
//! Text, images, progress bars, embedded-graphics (this crate)
//!         ↓
//! Raster core: address window cache, clipping, solid fills
//!         ↓
//! PanelBus (platform crate) - SPI + D/C + CS, shared-bus lock
//! ```
//!
//! # Bus sharing
//!
//! The SD card sits on the same SPI bus. Every public drawing call acquires
//! the bus once and releases it before returning, so file reads can run
//! between calls. [`Ili9341::composite`] groups several calls under one
//! acquisition.
//!
//! # Features
//!
//! - `std` - `std::error::Error` impls, platform mocks
//! - `defmt` - log through defmt, derive `defmt::Format`
//! - `tracing` - log through tracing (host builds)
//! - `jpeg` - [`ZuneJpeg`] decoder and the `draw_jpg*` entry points (needs `alloc`)
//!
//! # Example
//!
//! ```no_run
//! use display::{named, Ili9341, PanelConfig, TextDatum};
//! # fn demo<B: platform::PanelBus, D: embedded_hal::delay::DelayNs>(bus: B, delay: D)
//! #     -> Result<(), display::DisplayError> {
//! let mut tft = Ili9341::new(bus, delay, PanelConfig::odroid_go());
//! tft.begin()?;
//! tft.set_rotation(1)?;
//! tft.fill_screen(named::BLACK)?;
//! tft.set_text_datum(TextDatum::MiddleCentre);
//! tft.draw_string("ODROID-GO", 160, 120)?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::print_stdout)] // log through the log module, not println!
#![warn(clippy::dbg_macro)]
// Intentional allows for this codebase:
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // every fallible call returns DisplayError
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)] // register names in doc comments
#![allow(clippy::similar_names)] // x0/y0/x1/y1 everywhere
#![allow(clippy::many_single_char_names)]

#[cfg(all(feature = "std", not(test)))]
extern crate std;

#[cfg(feature = "jpeg")]
extern crate alloc;

#[macro_use]
mod log;

mod backlight;
mod bmp;
mod bus;
mod color;
pub mod command;
mod driver;
mod error;
pub mod fonts;
mod graphics;
mod image;
mod jpeg;
mod primitives;
mod progress;
mod raster;
mod text;
mod transaction;
mod window;

pub use backlight::Backlight;
pub use bmp::{BmpError, BmpHeader};
pub use bus::{ClockHook, SpiPanelBus};
pub use color::{color16to8, color565, color8to16, named, rgb};
pub use driver::{Capabilities, Ili9341, NoResetPin, PanelConfig};
pub use error::DisplayError;
pub use jpeg::{for_each_tile, JpegDecoder, JpegError, JpegOptions, JpegScale, JpegTile, TileSink, TILE};
#[cfg(feature = "jpeg")]
pub use jpeg::ZuneJpeg;
pub use primitives::{corner, half};
pub use progress::PROGRESS_COLOR;
pub use text::{format_float, TextDatum, MAX_TEXT_SIZE};
