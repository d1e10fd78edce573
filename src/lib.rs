//! 4D Systems GOLDELOX Serial OLED Driver
//!
//! A driver for 4D Systems GOLDELOX-class serial OLED display modules
//! (uOLED-96, uOLED-128, uOLED-160 and friends), which are driven by a
//! byte-oriented command protocol over a serial link.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 + `embedded-io` support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Full GOLDELOX drawing/text/bitmap/control command set, including the
//!   `$`/`@` multiplexed sub-commands
//! - Bounded response waits instead of the protocol's unbounded blocking
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use oled4d::{Builder, Color, Dimensions, Interface, Oled};
//!
//! # struct MockSerial;
//! # impl embedded_io::ErrorType for MockSerial { type Error = Infallible; }
//! # impl embedded_io::Read for MockSerial {
//! #     fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
//! #         buf[0] = 0x06;
//! #         Ok(1)
//! #     }
//! # }
//! # impl embedded_io::Write for MockSerial {
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl embedded_io::ReadReady for MockSerial {
//! #     fn read_ready(&mut self) -> Result<bool, Self::Error> { Ok(true) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl embedded_hal::digital::OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let serial = MockSerial;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(serial, rst);
//! let dims = match Dimensions::new(96, 64) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut oled = Oled::new(interface, config);
//! let _ = oled.init(&mut delay);
//! let _ = oled.clear(&mut delay);
//! let _ = oled.draw_line(0, 0, 10, 10, Color::from_rgb(255, 0, 0), &mut delay);
//! if !oled.is_ack() {
//!     // the module rejected the last command
//! }
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// 16-bit colour type and pixel encodings
pub mod color;
/// GOLDELOX command and status byte definitions
pub mod command;
/// Driver configuration types and builder
pub mod config;
/// Core display driver operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Hardware interface abstraction
pub mod interface;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::{Color, ColorMode};
pub use config::{
    Builder, Config, DEFAULT_BOOT_DELAY_MS, DEFAULT_COMMAND_DELAY_MS, Dimensions,
};
pub use display::{
    ButtonState, DeviceInfo, DisplayControl, Font, MAX_VERTICES, MIN_VERTICES, Oled, PenSize,
    TextAppearance,
};
pub use error::{BuilderError, Error};
pub use interface::InterfaceError;
pub use interface::{DEFAULT_READ_TIMEOUT_MS, Interface, SerialInterface};

#[cfg(feature = "graphics")]
pub use graphics::GraphicDisplay;
