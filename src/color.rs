//! 16-bit colour type for GOLDELOX displays
//!
//! GOLDELOX modules draw in 16-bit RGB565: 5 bits red, 6 bits green,
//! 5 bits blue. Colours are transmitted as two bytes, high byte first.
//!
//! [`Color::from_rgb`] packs full-range 8-bit channels the same way the
//! module's own documentation does, by scaling each channel into its
//! field:
//!
//! | Channel | Bits | Position |
//! |---------|------|----------|
//! | Red     | 5    | 15..11   |
//! | Green   | 6    | 10..5    |
//! | Blue    | 5    | 4..0     |
//!
//! ## Example
//!
//! ```
//! use oled4d::Color;
//!
//! assert_eq!(Color::from_rgb(255, 255, 255).raw(), 0xFFFF);
//! assert_eq!(Color::from_rgb(255, 0, 0).raw(), 0xF800);
//! assert_eq!(Color::from_rgb(0, 0, 0).raw(), 0x0000);
//!
//! // Wire form, high byte first
//! assert_eq!(Color::from_rgb(255, 0, 0).to_be_bytes(), [0xF8, 0x00]);
//! ```

/// A packed RGB565 colour value
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Color(u16);

impl Color {
    /// Black (all bits clear)
    pub const BLACK: Self = Self(0x0000);
    /// White (all bits set)
    pub const WHITE: Self = Self(0xFFFF);
    /// Full red
    pub const RED: Self = Self(0xF800);
    /// Full green
    pub const GREEN: Self = Self(0x07E0);
    /// Full blue
    pub const BLUE: Self = Self(0x001F);

    /// Pack 8-bit RGB channels into a 5-6-5 colour
    ///
    /// Each channel is scaled from 0..=255 into its field width, so
    /// `from_rgb(255, 255, 255)` saturates every bit.
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        let r = (u16::from(red) * 31) / 255;
        let g = (u16::from(green) * 63) / 255;
        let b = (u16::from(blue) * 31) / 255;
        Self((r << 11) | (g << 5) | b)
    }

    /// Create a colour from an already-packed RGB565 value
    pub fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Get the packed RGB565 value
    pub fn raw(self) -> u16 {
        self.0
    }

    /// Get the two wire bytes, high byte first
    pub fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU16;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::Rgb565> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::Rgb565) -> Self {
        use embedded_graphics_core::pixelcolor::raw::{RawData, RawU16};
        Self(RawU16::from(color).into_inner())
    }
}

/// Pixel encoding used for raw image payloads
///
/// The discriminants are the wire values expected by the display image
/// commands.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(u8)]
pub enum ColorMode {
    /// 256-colour mode, one byte per pixel
    Colors256 = 0x08,
    /// 65K-colour mode, two bytes per pixel (RGB565)
    #[default]
    Colors65k = 0x10,
}

impl ColorMode {
    /// Number of payload bytes per pixel in this mode
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Colors256 => 1,
            Self::Colors65k => 2,
        }
    }
}
