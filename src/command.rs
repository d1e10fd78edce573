//! GOLDELOX serial command definitions
//!
//! This module defines the opcode bytes understood by 4D Systems GOLDELOX
//! display modules. Most opcodes are ASCII letters; the frame for each
//! command is the opcode byte followed by a fixed-order sequence of
//! argument bytes, optionally followed by a NUL-terminated string or a raw
//! pixel payload.
//!
//! Two opcodes multiplex a wider command space: [`SPECIFIC_COMMAND`] (`$`)
//! and [`EXTENDED_COMMAND`] (`@`) carry an inner sub-opcode byte as their
//! first argument.
//!
//! After every command (except [`READ_PIXEL`] and [`DEVICE_INFO`], which
//! have structured replies) the module answers with a single status byte,
//! [`ACK`] or [`NACK`].

// Status bytes

/// Positive acknowledgement returned after a successful command
pub const ACK: u8 = 0x06;

/// Negative acknowledgement returned after a rejected command
pub const NACK: u8 = 0x15;

// Sentinel opcodes

/// Unknown operation sentinel (0x00)
///
/// Not a real device command; the module replies NACK. Useful when probing
/// the response path.
pub const UNKNOWN: u8 = 0x00;

/// Auto baud-rate detection (0x55)
///
/// Must be the first command after power-up so the module can lock onto
/// the host baud rate. No argument bytes.
pub const DETECT_BAUD_RATE: u8 = 0x55;

// Drawing commands

/// Erase the whole screen to the background colour (`E`)
pub const ERASE_SCREEN: u8 = b'E';

/// Draw a line (`L`)
///
/// Arguments: x1, y1, x2, y2, colour (2 bytes, high first).
pub const DRAW_LINE: u8 = b'L';

/// Draw a rectangle (`r`)
///
/// Arguments: x1, y1, x2, y2, colour.
pub const DRAW_RECTANGLE: u8 = b'r';

/// Draw a triangle (`G`)
///
/// Arguments: x1, y1, x2, y2, x3, y3, colour.
pub const DRAW_TRIANGLE: u8 = b'G';

/// Draw a polygon (`g`)
///
/// Arguments: vertex count, (x, y) per vertex, colour. The firmware only
/// accepts between 4 and 7 vertices.
pub const DRAW_POLYGON: u8 = b'g';

/// Draw a circle (`C`)
///
/// Arguments: x, y, radius, colour.
pub const DRAW_CIRCLE: u8 = b'C';

/// Set a single pixel (`P`)
///
/// Arguments: x, y, colour.
pub const PUT_PIXEL: u8 = b'P';

/// Read a single pixel back (`R`)
///
/// Arguments: x, y. The module replies with the two colour bytes (high
/// first) instead of a status byte.
pub const READ_PIXEL: u8 = b'R';

/// Set the background colour (`B`)
///
/// Arguments: colour (2 bytes, high first).
pub const SET_BG_COLOR: u8 = b'B';

/// Select solid or wireframe drawing (`p`)
pub const SET_PEN_SIZE: u8 = b'p';

/// Copy-paste a screen block (`c`)
///
/// Arguments: source x, source y, destination x, destination y, width,
/// height.
pub const SCREEN_COPY_PASTE: u8 = b'c';

// Text commands

/// Select the character font (`F`)
pub const SET_FONT: u8 = b'F';

/// Select opaque or transparent text (`O`)
pub const SET_TEXT_APPEARANCE: u8 = b'O';

/// Place a formatted ASCII string (`s`)
///
/// Arguments: column, row, font, colour, then the NUL-terminated string.
pub const PLACE_STRING: u8 = b's';

/// Place a single text character (`T`)
///
/// Arguments: character, column, row, colour.
pub const PLACE_CHARACTER: u8 = b'T';

/// Place a text button (`b`)
///
/// Arguments: state, x, y, button colour, font, text colour, width,
/// height, then the NUL-terminated label.
pub const PLACE_TEXT_BUTTON: u8 = b'b';

// Bitmap and image commands

/// Store a user-defined 8x8 bitmap character (`A`)
///
/// Arguments: index, 8 bitmap bytes.
pub const ADD_USER_BITMAP: u8 = b'A';

/// Display a stored user bitmap character (`D`)
///
/// Arguments: index, x, y, colour.
pub const DISPLAY_USER_BITMAP: u8 = b'D';

/// Display a raw image (`I`)
///
/// Arguments: x, y, width, height, colour mode, then
/// `width * height * bytes_per_pixel` raw pixel bytes.
pub const DISPLAY_IMAGE: u8 = b'I';

// Device control

/// Display control functions (`Y`)
///
/// Arguments: control kind, value. See
/// [`DisplayControl`](crate::display::DisplayControl).
pub const DISPLAY_CONTROL: u8 = b'Y';

/// Device type and version information (`V`)
///
/// Arguments: output flag (0 = serial reply only, 1 = also shown on
/// screen). The module replies with five bytes: device type, hardware
/// revision, firmware revision, horizontal resolution, vertical
/// resolution.
pub const DEVICE_INFO: u8 = b'V';

// Multiplexed command spaces
//
// The sub-opcode values below follow the GOLDELOX-SD command reference;
// modules without SD support NACK the extended commands.

/// Outer opcode for device-specific sub-commands (`$`)
pub const SPECIFIC_COMMAND: u8 = b'$';

/// Outer opcode for extended (SD card) sub-commands (`@`)
pub const EXTENDED_COMMAND: u8 = b'@';

/// Scroll control sub-opcode, under [`SPECIFIC_COMMAND`]
pub const SCROLL_CONTROL: u8 = b'S';

/// Dim screen area sub-opcode, under [`SPECIFIC_COMMAND`]
pub const DIM_SCREEN: u8 = b'D';

/// Screen copy-save to SD card sub-opcode, under [`EXTENDED_COMMAND`]
pub const SD_SCREEN_COPY: u8 = b'C';

/// Display image from SD card sub-opcode, under [`EXTENDED_COMMAND`]
pub const SD_DISPLAY_IMAGE: u8 = b'I';

/// Output flag for [`DEVICE_INFO`]: reply over serial only
pub const OUTPUT_SERIAL_ONLY: u8 = 0;

/// Output flag for [`DEVICE_INFO`]: reply over serial and show on screen
pub const OUTPUT_SERIAL_SCREEN: u8 = 1;
