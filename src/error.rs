//! Error types for the driver
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level serial/GPIO errors
//!
//! A NACK from the module is deliberately *not* an error: the protocol
//! answers every command with a status byte and the driver stores it for
//! inspection via [`Oled::last_status`](crate::display::Oled::last_status).
//! Only transport failures and malformed inputs surface as `Error`.
//!
//! ## Example
//!
//! ```
//! use oled4d::{Builder, BuilderError};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//! ```

use crate::interface::SerialInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware
/// error.
#[derive(Debug)]
pub enum Error<I: SerialInterface> {
    /// Interface error (serial transport or reset line)
    ///
    /// Wraps the underlying hardware error from the [`SerialInterface`]
    /// implementation, including read timeouts.
    Interface(I::Error),
    /// Raw image payload does not match the declared geometry
    ///
    /// The payload for a display image command must be exactly
    /// `width * height * bytes_per_pixel` bytes.
    PayloadSizeMismatch {
        /// Required payload size in bytes
        expected: usize,
        /// Provided payload size in bytes
        provided: usize,
    },
}

impl<I: SerialInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::PayloadSizeMismatch { expected, provided } => {
                write!(
                    f,
                    "Payload size mismatch: expected {expected} bytes, provided {provided}"
                )
            }
        }
    }
}

impl<I: SerialInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the driver is
/// created.
#[derive(Debug)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width in pixels requested
        width: u8,
        /// Height in pixels requested
        height: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => {
                write!(f, "Invalid dimensions {width}x{height} (both axes must be non-zero)")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
