//! Hardware abstraction layer for the ODROID-GO display stack
//!
//! This crate provides the trait seams the display driver is written
//! against, so the driver can be developed and tested without the physical
//! board.
//!
//! # Architecture Layers
//!
//! ```text
//! Application code (launcher, apps)
//!         ↓
//! Display driver (display crate)
//!         ↓
//! Platform HAL (this crate - PanelBus, BusLock, File, board config)
//!         ↓
//! ESP32 HAL (SPI master, GPIO, LEDC PWM)
//! ```
//!
//! # Abstractions
//!
//! - [`PanelBus`] - command/data/pixel transport to the TFT controller
//! - [`BusLock`] - advisory ownership flag for the SPI bus shared with the
//!   SD card
//! - [`File`] - read + seek + size interface consumed by image decoders
//! - [`SpiConfig`] - write and RAMRD bus settings applied via [`PanelBus::configure`]
//! - [`config`] - ODROID-GO bus clocks, panel and backlight constants
//!
//! # Features
//!
//! - `std`: Enable the [`mocks`] module (panel emulator for tests)
//! - `defmt`: Enable defmt derives on public types
//!
//! # Example
//!
//! ```no_run
//! use platform::PanelBus;
//!
//! fn blank<B: PanelBus>(bus: &mut B) -> Result<(), platform::BusError> {
//!     bus.acquire()?;
//!     bus.write_command(0x28)?;
//!     bus.release()
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)] // unsafe fn body is not implicitly unsafe block
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
// Pedantic lints suppressed for this HAL crate:
#![allow(clippy::doc_markdown)] // register names in doc comments
#![allow(clippy::must_use_candidate)] // hardware accessors; callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

#[cfg(all(feature = "std", not(test)))]
extern crate std;

pub mod config;
pub mod display;
pub mod peripheral;
pub mod storage;

#[cfg(any(test, feature = "std"))]
pub mod mocks;

// Re-export main traits
pub use display::{BusError, PanelBus};
pub use storage::{File, MemoryFile, StorageError};

// Re-export peripheral types
pub use peripheral::{BitOrder, BusLock, SpiConfig, SpiMode};
