//! Hardware interface abstraction
//!
//! This module provides the [`SerialInterface`] trait and the [`Interface`]
//! struct for communicating with a GOLDELOX display module over a
//! byte-oriented serial link.
//!
//! ## Hardware Requirements
//!
//! The module requires:
//! - A duplex serial connection (TX + RX)
//! - 1 GPIO pin:
//!   - **RST**: Reset (output, active low)
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use oled4d::{Interface, SerialInterface};
//! # use core::convert::Infallible;
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
//! # let mut delay = MockDelay;
//! // Create interface with a serial port and the reset pin
//! let mut interface = Interface::new(MockSerial, MockPin);
//!
//! // Pulse the reset line
//! interface.reset(&mut delay);
//!
//! // Send a frame
//! let _ = interface.write(&[0x55]);
//!
//! // Blocking read of one response byte (bounded by the read timeout)
//! let _ = interface.read_byte(&mut delay);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_io::{Read, ReadReady, Write};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the byte-stream transport to a GOLDELOX module
///
/// This trait abstracts over different hardware implementations, allowing
/// the [`Oled`](crate::display::Oled) driver to work with any duplex
/// serial transport plus a reset line.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct over an
/// `embedded-io` serial port. Implement this trait directly if the reset
/// line needs different polarity or the transport buffers frames itself.
pub trait SerialInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Write bytes to the module
    ///
    /// The transport is assumed to eventually drain; partial writes must
    /// be completed before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if the serial transport fails.
    fn write(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Blocking read of exactly one byte
    ///
    /// Suspends the caller (polling, with `delay` pacing the poll loop)
    /// until the transport has a byte available, then consumes and
    /// returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the serial transport fails, or a timeout error
    /// if no byte arrives within the implementation's bounded wait.
    fn read_byte<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<u8, Self::Error>;

    /// Perform hardware reset
    ///
    /// The implementation must:
    /// 1. Set RST low
    /// 2. Wait at least 20ms
    /// 3. Set RST high
    /// 4. Wait at least 20ms
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay implementation for timing
    fn reset<D: DelayNs>(&mut self, delay: &mut D);
}

/// Errors that can occur at the interface level
///
/// Generic over serial and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SerialErr, PinErr> {
    /// Serial transport error
    Serial(SerialErr),
    /// GPIO pin error
    Pin(PinErr),
    /// Timeout waiting for a response byte
    Timeout,
}

impl<SerialErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SerialErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Serial(e) => write!(f, "Serial error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
            Self::Timeout => write!(f, "Timeout waiting for display response"),
        }
    }
}

impl<SerialErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SerialErr, PinErr> {}

/// Default timeout for a blocking response read in milliseconds
///
/// An unplugged or unpowered module never answers, so an unbounded wait
/// would hang the caller. The bounded wait surfaces
/// [`InterfaceError::Timeout`] instead. Set the timeout to 0 to block
/// indefinitely.
pub const DEFAULT_READ_TIMEOUT_MS: u32 = 500;

/// Duration of each half of the reset pulse in milliseconds
pub const RESET_PULSE_MS: u32 = 20;

/// Serial interface implementation for GOLDELOX modules
///
/// Implements [`SerialInterface`] for `embedded-io` serial transports and
/// embedded-hal v1.0 GPIO.
///
/// ## Type Parameters
///
/// * `S` - Serial port implementing [`Read`] + [`Write`] + [`ReadReady`]
/// * `RST` - Reset pin implementing [`OutputPin`]
pub struct Interface<S, RST> {
    /// Serial port for communication
    serial: S,
    /// Reset pin (active low)
    rst: RST,
    /// Timeout for blocking reads in milliseconds
    read_timeout_ms: u32,
}

impl<S, RST> Interface<S, RST>
where
    S: Read + Write + ReadReady,
    RST: OutputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `serial` - Duplex serial port connected to the module
    /// * `rst` - Reset pin (output, active low)
    pub fn new(serial: S, rst: RST) -> Self {
        Self {
            serial,
            rst,
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
        }
    }

    /// Set the response read timeout in milliseconds
    ///
    /// Default is 500ms. Set to 0 to disable the timeout and block
    /// indefinitely, matching the original hardware-attached behaviour.
    pub fn set_read_timeout(&mut self, timeout_ms: u32) -> &mut Self {
        self.read_timeout_ms = timeout_ms;
        self
    }

    /// Get the current response read timeout in milliseconds
    pub fn read_timeout(&self) -> u32 {
        self.read_timeout_ms
    }
}

impl<S, RST> SerialInterface for Interface<S, RST>
where
    S: Read + Write + ReadReady,
    S::Error: Debug,
    RST: OutputPin,
    RST::Error: Debug,
{
    type Error = InterfaceError<S::Error, RST::Error>;

    fn write(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.serial.write_all(data).map_err(InterfaceError::Serial)
    }

    fn read_byte<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<u8, Self::Error> {
        let mut iterations = 0u32;
        let timeout_ms = self.read_timeout_ms;
        let mut buf = [0u8; 1];

        loop {
            let ready = self
                .serial
                .read_ready()
                .map_err(InterfaceError::Serial)?;

            if ready {
                let n = self.serial.read(&mut buf).map_err(InterfaceError::Serial)?;
                if n == 1 {
                    return Ok(buf[0]);
                }
            }

            delay.delay_ms(1);
            iterations += 1;
            if timeout_ms > 0 && iterations >= timeout_ms {
                return Err(InterfaceError::Timeout);
            }
        }
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) {
        // Reset sequence: LOW -> wait 20ms -> HIGH -> wait 20ms
        let _ = self.rst.set_low();
        delay.delay_ms(RESET_PULSE_MS);
        let _ = self.rst.set_high();
        delay.delay_ms(RESET_PULSE_MS);
    }
}
