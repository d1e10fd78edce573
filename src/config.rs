//! Driver configuration types and builder
//!
//! The original Arduino library baked the reset pin and every delay into
//! compile-time macros. Here they are explicit, validated configuration:
//! the reset line is owned by the [`Interface`](crate::interface::Interface)
//! and the timing constants live in [`Config`] with documented defaults.

pub use crate::error::BuilderError;

/// Settling delay between writing a frame and reading the status byte,
/// in milliseconds
pub const DEFAULT_COMMAND_DELAY_MS: u32 = 20;

/// Delay after a hardware reset before the module accepts commands,
/// in milliseconds
pub const DEFAULT_BOOT_DELAY_MS: u32 = 2000;

/// Display resolution in pixels
///
/// GOLDELOX modules address the screen with single-byte coordinates, so
/// both axes are limited to 255 pixels. Common panels are 96x64, 128x128
/// and 160x128.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels
    pub width: u8,
    /// Height in pixels
    pub height: u8,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if either axis is zero.
    pub fn new(width: u8, height: u8) -> Result<Self, BuilderError> {
        if width == 0 || height == 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }
}

/// Driver configuration
///
/// Use [`Builder`] to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display resolution
    pub dimensions: Dimensions,
    /// Settling delay between a command frame and its status byte (ms)
    pub command_delay_ms: u32,
    /// Boot delay after hardware reset (ms)
    pub boot_delay_ms: u32,
}

/// Builder for constructing driver configuration
///
/// # Example
///
/// ```rust,no_run
/// use oled4d::{Builder, Dimensions};
///
/// let dims = match Dimensions::new(96, 64) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Display resolution (required)
    dimensions: Option<Dimensions>,
    /// Settling delay between a command frame and its status byte (ms)
    command_delay_ms: u32,
    /// Boot delay after hardware reset (ms)
    boot_delay_ms: u32,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            command_delay_ms: DEFAULT_COMMAND_DELAY_MS,
            boot_delay_ms: DEFAULT_BOOT_DELAY_MS,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display resolution (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set the settling delay between a command frame and its status byte
    ///
    /// Default is 20 ms. Some older firmware revisions need longer.
    pub fn command_delay_ms(mut self, ms: u32) -> Self {
        self.command_delay_ms = ms;
        self
    }

    /// Set the boot delay waited after a hardware reset
    ///
    /// Default is 2000 ms, per the module datasheet.
    pub fn boot_delay_ms(mut self, ms: u32) -> Self {
        self.boot_delay_ms = ms;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set.
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            command_delay_ms: self.command_delay_ms,
            boot_delay_ms: self.boot_delay_ms,
        })
    }
}
