//! Core display driver operations

use embedded_hal::delay::DelayNs;
use log::{debug, warn};

use crate::color::{Color, ColorMode};
use crate::command::{
    ACK, ADD_USER_BITMAP, DETECT_BAUD_RATE, DEVICE_INFO, DIM_SCREEN, DISPLAY_CONTROL,
    DISPLAY_IMAGE, DISPLAY_USER_BITMAP, DRAW_CIRCLE, DRAW_LINE, DRAW_POLYGON, DRAW_RECTANGLE,
    DRAW_TRIANGLE, ERASE_SCREEN, EXTENDED_COMMAND, OUTPUT_SERIAL_ONLY, OUTPUT_SERIAL_SCREEN,
    PLACE_CHARACTER, PLACE_STRING, PLACE_TEXT_BUTTON, PUT_PIXEL, READ_PIXEL, SCREEN_COPY_PASTE,
    SCROLL_CONTROL, SD_DISPLAY_IMAGE, SD_SCREEN_COPY, SET_BG_COLOR, SET_FONT, SET_PEN_SIZE,
    SET_TEXT_APPEARANCE, SPECIFIC_COMMAND,
};
use crate::config::Config;
use crate::error::Error;
use crate::interface::SerialInterface;

type StatusResult<I> = core::result::Result<u8, Error<I>>;

/// Smallest vertex count the polygon firmware rejects
///
/// A polygon command is only transmitted for counts strictly greater than
/// this and at most [`MAX_VERTICES`].
pub const MIN_VERTICES: usize = 3;

/// Largest vertex count the polygon firmware accepts
pub const MAX_VERTICES: usize = 7;

/// Character fonts available on the module
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Font {
    /// 5x7 pixel font
    #[default]
    Font5x7 = 0,
    /// 8x8 pixel font
    Font8x8 = 1,
    /// 8x12 pixel font
    Font8x12 = 2,
}

/// Visual state of a text button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ButtonState {
    /// Button drawn pressed
    Down = 0,
    /// Button drawn released
    Up = 1,
}

/// Pen size for closed drawing primitives
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum PenSize {
    /// Primitives are filled
    #[default]
    Solid = 0,
    /// Primitives are drawn as outlines
    Wireframe = 1,
}

/// Text background behaviour
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum TextAppearance {
    /// Text drawn over the existing background
    #[default]
    Transparent = 0,
    /// Text drawn with an opaque background
    Opaque = 1,
}

/// Function selector for the display control command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum DisplayControl {
    /// Switch the display on (1) or off (0)
    OnOff = 1,
    /// Set the display contrast (0..=15)
    Contrast = 2,
    /// Power the display up (1) or shut it down (0)
    Power = 3,
}

/// Device information block returned by the version/info command
///
/// Fields arrive in this exact order on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeviceInfo {
    /// Device type code (e.g. 0x00 = micro-OLED)
    pub device_type: u8,
    /// Hardware revision
    pub hardware_rev: u8,
    /// Firmware revision
    pub firmware_rev: u8,
    /// Horizontal resolution code
    pub horizontal_res: u8,
    /// Vertical resolution code
    pub vertical_res: u8,
}

/// Driver for a GOLDELOX serial OLED module
///
/// Every operation builds a fixed-layout command frame, writes it through
/// the [`SerialInterface`] and, unless documented otherwise, blocks on the
/// single status byte the module returns. The only persistent state is
/// that last status byte; the protocol itself is stateless.
pub struct Oled<I>
where
    I: SerialInterface,
{
    /// Hardware interface
    interface: I,
    /// Driver configuration
    config: Config,
    /// Status byte from the most recent acknowledged command
    last_status: u8,
}

impl<I> Oled<I>
where
    I: SerialInterface,
{
    /// Create a new driver bound to an interface
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            last_status: 0,
        }
    }

    /// Send a raw command frame and read back the status byte
    ///
    /// Writes the opcode, the argument bytes and, if `text` is given, its
    /// bytes followed by a single NUL terminator. Waits the configured
    /// settling delay, then blocks on one status byte, which becomes the
    /// new [`last_status`](Self::last_status).
    pub fn command<D: DelayNs>(
        &mut self,
        op: u8,
        args: &[u8],
        text: Option<&str>,
        delay: &mut D,
    ) -> StatusResult<I> {
        self.interface.write(&[op]).map_err(Error::Interface)?;
        if !args.is_empty() {
            self.interface.write(args).map_err(Error::Interface)?;
        }
        if let Some(text) = text {
            self.interface
                .write(text.as_bytes())
                .map_err(Error::Interface)?;
            self.interface.write(&[0x00]).map_err(Error::Interface)?;
        }

        delay.delay_ms(self.config.command_delay_ms);
        self.read_status(op, delay)
    }

    /// Read one status byte and store it
    fn read_status<D: DelayNs>(&mut self, op: u8, delay: &mut D) -> StatusResult<I> {
        let status = self.interface.read_byte(delay).map_err(Error::Interface)?;
        if status != ACK {
            warn!("opcode {:#04x} not acknowledged (status {:#04x})", op, status);
        }
        self.last_status = status;
        Ok(status)
    }

    /// Pulse the reset line
    ///
    /// No response is read; the module needs the boot delay before it
    /// accepts commands again.
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) {
        self.interface.reset(delay);
    }

    /// Reset the module and run baud-rate detection
    ///
    /// Performs a hardware reset, waits the configured boot delay, then
    /// sends the baud-detect opcode as the mandatory first command.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> StatusResult<I> {
        debug!("resetting display, boot delay {} ms", self.config.boot_delay_ms);
        self.reset(delay);
        delay.delay_ms(self.config.boot_delay_ms);
        self.command(DETECT_BAUD_RATE, &[], None, delay)
    }

    /// Status byte from the most recent command
    pub fn last_status(&self) -> u8 {
        self.last_status
    }

    /// Whether the most recent command was positively acknowledged
    pub fn is_ack(&self) -> bool {
        self.last_status == ACK
    }

    /// Access the driver configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Display resolution
    pub fn dimensions(&self) -> crate::config::Dimensions {
        self.config.dimensions
    }

    // Drawing

    /// Erase the whole screen to the background colour
    pub fn clear<D: DelayNs>(&mut self, delay: &mut D) -> StatusResult<I> {
        self.command(ERASE_SCREEN, &[], None, delay)
    }

    /// Draw a line between two points
    pub fn draw_line<D: DelayNs>(
        &mut self,
        x1: u8,
        y1: u8,
        x2: u8,
        y2: u8,
        color: Color,
        delay: &mut D,
    ) -> StatusResult<I> {
        let [hi, lo] = color.to_be_bytes();
        self.command(DRAW_LINE, &[x1, y1, x2, y2, hi, lo], None, delay)
    }

    /// Draw a rectangle from two corner points
    pub fn draw_rectangle<D: DelayNs>(
        &mut self,
        x1: u8,
        y1: u8,
        x2: u8,
        y2: u8,
        color: Color,
        delay: &mut D,
    ) -> StatusResult<I> {
        let [hi, lo] = color.to_be_bytes();
        self.command(DRAW_RECTANGLE, &[x1, y1, x2, y2, hi, lo], None, delay)
    }

    /// Draw a triangle
    #[allow(clippy::too_many_arguments)]
    pub fn draw_triangle<D: DelayNs>(
        &mut self,
        x1: u8,
        y1: u8,
        x2: u8,
        y2: u8,
        x3: u8,
        y3: u8,
        color: Color,
        delay: &mut D,
    ) -> StatusResult<I> {
        let [hi, lo] = color.to_be_bytes();
        self.command(DRAW_TRIANGLE, &[x1, y1, x2, y2, x3, y3, hi, lo], None, delay)
    }

    /// Draw a circle
    pub fn draw_circle<D: DelayNs>(
        &mut self,
        x: u8,
        y: u8,
        radius: u8,
        color: Color,
        delay: &mut D,
    ) -> StatusResult<I> {
        let [hi, lo] = color.to_be_bytes();
        self.command(DRAW_CIRCLE, &[x, y, radius, hi, lo], None, delay)
    }

    /// Draw a polygon from a list of vertices
    ///
    /// The firmware only accepts between `MIN_VERTICES + 1` and
    /// [`MAX_VERTICES`] vertices. Counts outside that range are silently
    /// dropped: nothing is transmitted, nothing is read and the last
    /// status is left untouched, matching the device limitation. Callers
    /// that need to distinguish the no-op must check the vertex count
    /// themselves.
    pub fn draw_polygon<D: DelayNs>(
        &mut self,
        vertices: &[(u8, u8)],
        color: Color,
        delay: &mut D,
    ) -> StatusResult<I> {
        let count = vertices.len();
        if count <= MIN_VERTICES || count > MAX_VERTICES {
            return Ok(self.last_status);
        }

        // count byte + one coordinate pair per vertex + colour
        let mut args = [0u8; 2 * MAX_VERTICES + 3];
        args[0] = count as u8;
        for (i, &(x, y)) in vertices.iter().enumerate() {
            args[1 + 2 * i] = x;
            args[2 + 2 * i] = y;
        }
        let [hi, lo] = color.to_be_bytes();
        args[1 + 2 * count] = hi;
        args[2 + 2 * count] = lo;

        self.command(DRAW_POLYGON, &args[..2 * count + 3], None, delay)
    }

    /// Set a single pixel
    pub fn put_pixel<D: DelayNs>(
        &mut self,
        x: u8,
        y: u8,
        color: Color,
        delay: &mut D,
    ) -> StatusResult<I> {
        let [hi, lo] = color.to_be_bytes();
        self.command(PUT_PIXEL, &[x, y, hi, lo], None, delay)
    }

    /// Read a single pixel back from the screen
    ///
    /// The module replies with the two colour bytes, high byte first,
    /// instead of a status byte; the last status is left untouched.
    pub fn read_pixel<D: DelayNs>(
        &mut self,
        x: u8,
        y: u8,
        delay: &mut D,
    ) -> Result<Color, Error<I>> {
        self.interface
            .write(&[READ_PIXEL, x, y])
            .map_err(Error::Interface)?;
        let hi = self.interface.read_byte(delay).map_err(Error::Interface)?;
        let lo = self.interface.read_byte(delay).map_err(Error::Interface)?;
        Ok(Color::from_raw(u16::from_be_bytes([hi, lo])))
    }

    /// Set the background colour
    pub fn set_bg<D: DelayNs>(&mut self, color: Color, delay: &mut D) -> StatusResult<I> {
        let [hi, lo] = color.to_be_bytes();
        self.command(SET_BG_COLOR, &[hi, lo], None, delay)
    }

    /// Select solid or wireframe drawing
    pub fn set_pen_size<D: DelayNs>(&mut self, pen: PenSize, delay: &mut D) -> StatusResult<I> {
        self.command(SET_PEN_SIZE, &[pen as u8], None, delay)
    }

    /// Copy-paste a block of the screen
    #[allow(clippy::too_many_arguments)]
    pub fn screen_copy_paste<D: DelayNs>(
        &mut self,
        xs: u8,
        ys: u8,
        xd: u8,
        yd: u8,
        width: u8,
        height: u8,
        delay: &mut D,
    ) -> StatusResult<I> {
        self.command(SCREEN_COPY_PASTE, &[xs, ys, xd, yd, width, height], None, delay)
    }

    // Text

    /// Select the character font
    pub fn set_font<D: DelayNs>(&mut self, font: Font, delay: &mut D) -> StatusResult<I> {
        self.command(SET_FONT, &[font as u8], None, delay)
    }

    /// Select opaque or transparent text
    pub fn set_text_appearance<D: DelayNs>(
        &mut self,
        appearance: TextAppearance,
        delay: &mut D,
    ) -> StatusResult<I> {
        self.command(SET_TEXT_APPEARANCE, &[appearance as u8], None, delay)
    }

    /// Place a formatted string at a character position
    pub fn draw_text<D: DelayNs>(
        &mut self,
        column: u8,
        row: u8,
        font: Font,
        color: Color,
        text: &str,
        delay: &mut D,
    ) -> StatusResult<I> {
        let [hi, lo] = color.to_be_bytes();
        self.command(
            PLACE_STRING,
            &[column, row, font as u8, hi, lo],
            Some(text),
            delay,
        )
    }

    /// Place a single character at a character position
    pub fn draw_char<D: DelayNs>(
        &mut self,
        character: u8,
        column: u8,
        row: u8,
        color: Color,
        delay: &mut D,
    ) -> StatusResult<I> {
        let [hi, lo] = color.to_be_bytes();
        self.command(PLACE_CHARACTER, &[character, column, row, hi, lo], None, delay)
    }

    /// Place a text button
    #[allow(clippy::too_many_arguments)]
    pub fn text_button<D: DelayNs>(
        &mut self,
        state: ButtonState,
        x: u8,
        y: u8,
        button_color: Color,
        font: Font,
        text_color: Color,
        width: u8,
        height: u8,
        text: &str,
        delay: &mut D,
    ) -> StatusResult<I> {
        let [bhi, blo] = button_color.to_be_bytes();
        let [thi, tlo] = text_color.to_be_bytes();
        self.command(
            PLACE_TEXT_BUTTON,
            &[state as u8, x, y, bhi, blo, font as u8, thi, tlo, width, height],
            Some(text),
            delay,
        )
    }

    // Bitmaps and images

    /// Store a user-defined 8x8 bitmap character at an index
    pub fn add_bmp_char<D: DelayNs>(
        &mut self,
        index: u8,
        bitmap: [u8; 8],
        delay: &mut D,
    ) -> StatusResult<I> {
        let mut args = [0u8; 9];
        args[0] = index;
        args[1..].copy_from_slice(&bitmap);
        self.command(ADD_USER_BITMAP, &args, None, delay)
    }

    /// Display a stored user bitmap character
    pub fn display_bmp_char<D: DelayNs>(
        &mut self,
        index: u8,
        x: u8,
        y: u8,
        color: Color,
        delay: &mut D,
    ) -> StatusResult<I> {
        let [hi, lo] = color.to_be_bytes();
        self.command(DISPLAY_USER_BITMAP, &[index, x, y, hi, lo], None, delay)
    }

    /// Display a raw image
    ///
    /// `data` must hold exactly `width * height * bytes_per_pixel(mode)`
    /// bytes; it is streamed to the module verbatim after the geometry
    /// header.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PayloadSizeMismatch`] if the payload length does
    /// not match the declared geometry. Nothing is transmitted in that
    /// case.
    #[allow(clippy::too_many_arguments)]
    pub fn display_image<D: DelayNs>(
        &mut self,
        x: u8,
        y: u8,
        width: u8,
        height: u8,
        mode: ColorMode,
        data: &[u8],
        delay: &mut D,
    ) -> StatusResult<I> {
        let expected = usize::from(width) * usize::from(height) * mode.bytes_per_pixel();
        if data.len() != expected {
            return Err(Error::PayloadSizeMismatch {
                expected,
                provided: data.len(),
            });
        }

        self.interface
            .write(&[DISPLAY_IMAGE, x, y, width, height, mode as u8])
            .map_err(Error::Interface)?;
        self.interface.write(data).map_err(Error::Interface)?;

        delay.delay_ms(self.config.command_delay_ms);
        self.read_status(DISPLAY_IMAGE, delay)
    }

    // Device control

    /// Send a display control function
    pub fn display_control<D: DelayNs>(
        &mut self,
        control: DisplayControl,
        value: u8,
        delay: &mut D,
    ) -> StatusResult<I> {
        self.command(DISPLAY_CONTROL, &[control as u8, value], None, delay)
    }

    /// Switch the display on
    pub fn display_on<D: DelayNs>(&mut self, delay: &mut D) -> StatusResult<I> {
        self.display_control(DisplayControl::OnOff, 1, delay)
    }

    /// Switch the display off
    pub fn display_off<D: DelayNs>(&mut self, delay: &mut D) -> StatusResult<I> {
        self.display_control(DisplayControl::OnOff, 0, delay)
    }

    /// Power the display up
    pub fn power_up<D: DelayNs>(&mut self, delay: &mut D) -> StatusResult<I> {
        self.display_control(DisplayControl::Power, 1, delay)
    }

    /// Shut the display down into low-power mode
    pub fn shutdown<D: DelayNs>(&mut self, delay: &mut D) -> StatusResult<I> {
        self.display_control(DisplayControl::Power, 0, delay)
    }

    /// Set the display contrast
    pub fn set_contrast<D: DelayNs>(&mut self, contrast: u8, delay: &mut D) -> StatusResult<I> {
        self.display_control(DisplayControl::Contrast, contrast, delay)
    }

    /// Query the device information block
    ///
    /// Writes the info opcode plus the output flag, then performs five
    /// blocking single-byte reads in the fixed field order. When
    /// `output_to_screen` is set the module additionally shows the values
    /// on its own display. No status byte is exchanged.
    pub fn device_info<D: DelayNs>(
        &mut self,
        output_to_screen: bool,
        delay: &mut D,
    ) -> Result<DeviceInfo, Error<I>> {
        let flag = if output_to_screen {
            OUTPUT_SERIAL_SCREEN
        } else {
            OUTPUT_SERIAL_ONLY
        };
        self.interface
            .write(&[DEVICE_INFO, flag])
            .map_err(Error::Interface)?;

        Ok(DeviceInfo {
            device_type: self.interface.read_byte(delay).map_err(Error::Interface)?,
            hardware_rev: self.interface.read_byte(delay).map_err(Error::Interface)?,
            firmware_rev: self.interface.read_byte(delay).map_err(Error::Interface)?,
            horizontal_res: self.interface.read_byte(delay).map_err(Error::Interface)?,
            vertical_res: self.interface.read_byte(delay).map_err(Error::Interface)?,
        })
    }

    // Specific and extended (SD card) commands

    /// Enable or disable screen scrolling
    ///
    /// Sends the scroll control frame with speed 0, then, when enabling,
    /// a second frame carrying the requested speed. Each frame is a full
    /// command transaction with its own status byte.
    pub fn scroll_screen<D: DelayNs>(
        &mut self,
        enable: bool,
        speed: u8,
        delay: &mut D,
    ) -> StatusResult<I> {
        let status = self.command(SPECIFIC_COMMAND, &[SCROLL_CONTROL, 2, 0], None, delay)?;
        if enable {
            return self.command(SPECIFIC_COMMAND, &[SCROLL_CONTROL, 2, speed], None, delay);
        }
        Ok(status)
    }

    /// Dim a rectangular area of the screen
    pub fn dim_screen_area<D: DelayNs>(
        &mut self,
        column: u8,
        row: u8,
        width: u8,
        height: u8,
        delay: &mut D,
    ) -> StatusResult<I> {
        self.command(
            SPECIFIC_COMMAND,
            &[DIM_SCREEN, column, row, width, height],
            None,
            delay,
        )
    }

    /// Copy a screen area to an SD card sector
    ///
    /// The sector address is transmitted as three bytes, high first.
    /// Modules without SD support answer NACK.
    #[allow(clippy::too_many_arguments)]
    pub fn copy_screen_to_sd<D: DelayNs>(
        &mut self,
        x: u8,
        y: u8,
        width: u8,
        height: u8,
        sector: u32,
        delay: &mut D,
    ) -> StatusResult<I> {
        let [s2, s1, s0] = sector_bytes(sector);
        self.command(
            EXTENDED_COMMAND,
            &[SD_SCREEN_COPY, x, y, width, height, s2, s1, s0],
            None,
            delay,
        )
    }

    /// Display an image stored on the SD card
    ///
    /// Modules without SD support answer NACK.
    #[allow(clippy::too_many_arguments)]
    pub fn display_image_from_sd<D: DelayNs>(
        &mut self,
        x: u8,
        y: u8,
        width: u8,
        height: u8,
        mode: ColorMode,
        sector: u32,
        delay: &mut D,
    ) -> StatusResult<I> {
        let [s2, s1, s0] = sector_bytes(sector);
        self.command(
            EXTENDED_COMMAND,
            &[SD_DISPLAY_IMAGE, x, y, width, height, mode as u8, s2, s1, s0],
            None,
            delay,
        )
    }
}

/// Split a 24-bit SD sector address into wire bytes, high first
fn sector_bytes(sector: u32) -> [u8; 3] {
    [(sector >> 16) as u8, (sector >> 8) as u8, sector as u8]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::NACK;
    use crate::config::{Builder, Dimensions};
    use alloc::collections::VecDeque;
    use alloc::vec::Vec;

    #[derive(Debug)]
    struct MockInterface {
        written: Vec<u8>,
        write_calls: usize,
        responses: VecDeque<u8>,
        reads: usize,
        resets: usize,
    }

    impl MockInterface {
        fn new() -> Self {
            Self {
                written: Vec::new(),
                write_calls: 0,
                responses: VecDeque::new(),
                reads: 0,
                resets: 0,
            }
        }

        fn with_responses(bytes: &[u8]) -> Self {
            let mut mock = Self::new();
            mock.responses.extend(bytes.iter().copied());
            mock
        }
    }

    impl SerialInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            self.write_calls += 1;
            self.written.extend_from_slice(data);
            Ok(())
        }

        fn read_byte<D: DelayNs>(&mut self, _delay: &mut D) -> Result<u8, Self::Error> {
            self.reads += 1;
            Ok(self.responses.pop_front().unwrap_or(ACK))
        }

        fn reset<D: DelayNs>(&mut self, _delay: &mut D) {
            self.resets += 1;
        }
    }

    struct MockDelay;
    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn test_oled(interface: MockInterface) -> Oled<MockInterface> {
        let config = Builder::new()
            .dimensions(Dimensions::new(96, 64).unwrap())
            .build()
            .unwrap();
        Oled::new(interface, config)
    }

    /// Parse a frame back per the documented layout: opcode, `narg`
    /// argument bytes, then an optional string up to the NUL terminator.
    fn parse_frame(frame: &[u8], narg: usize) -> (u8, &[u8], Option<&[u8]>) {
        let op = frame[0];
        let args = &frame[1..=narg];
        let rest = &frame[narg + 1..];
        let text = if rest.is_empty() {
            None
        } else {
            let nul = rest.iter().position(|&b| b == 0).unwrap();
            Some(&rest[..nul])
        };
        (op, args, text)
    }

    #[test]
    fn test_draw_line_frame_and_status() {
        let mut oled = test_oled(MockInterface::with_responses(&[ACK]));
        let mut delay = MockDelay;

        let status = oled
            .draw_line(0, 0, 10, 10, Color::from_rgb(255, 0, 0), &mut delay)
            .unwrap();

        assert_eq!(
            oled.interface.written,
            [b'L', 0, 0, 10, 10, 0xF8, 0x00]
        );
        assert_eq!(oled.interface.reads, 1);
        assert_eq!(status, ACK);
        assert!(oled.is_ack());
    }

    #[test]
    fn test_nack_is_stored_not_raised() {
        let mut oled = test_oled(MockInterface::with_responses(&[NACK]));
        let mut delay = MockDelay;

        let status = oled.clear(&mut delay).unwrap();
        assert_eq!(status, NACK);
        assert_eq!(oled.last_status(), NACK);
        assert!(!oled.is_ack());
    }

    #[test]
    fn test_unexpected_status_is_not_ack() {
        let mut oled = test_oled(MockInterface::with_responses(&[0x42]));
        let mut delay = MockDelay;

        oled.clear(&mut delay).unwrap();
        assert_eq!(oled.last_status(), 0x42);
        assert!(!oled.is_ack());
    }

    #[test]
    fn test_clear_frame() {
        let mut oled = test_oled(MockInterface::new());
        let mut delay = MockDelay;

        oled.clear(&mut delay).unwrap();
        assert_eq!(oled.interface.written, [b'E']);
    }

    #[test]
    fn test_init_sequence() {
        let mut oled = test_oled(MockInterface::with_responses(&[ACK]));
        let mut delay = MockDelay;

        oled.init(&mut delay).unwrap();

        // reset pulse first, then exactly the baud-detect opcode, then one read
        assert_eq!(oled.interface.resets, 1);
        assert_eq!(oled.interface.written, [0x55]);
        assert_eq!(oled.interface.reads, 1);
        assert!(oled.is_ack());
    }

    #[test]
    fn test_polygon_frame_shape() {
        let mut oled = test_oled(MockInterface::with_responses(&[ACK]));
        let mut delay = MockDelay;

        let vertices = [(1, 2), (3, 4), (5, 6), (7, 8)];
        oled.draw_polygon(&vertices, Color::from_raw(0x1234), &mut delay)
            .unwrap();

        let written = &oled.interface.written;
        assert_eq!(written[0], b'g');
        let payload = &written[1..];
        // count byte + n coordinate pairs + 2 colour bytes
        assert_eq!(payload.len(), 2 * vertices.len() + 3);
        assert_eq!(payload[0], 4);
        assert_eq!(&payload[1..9], &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(&payload[9..], &[0x12, 0x34]);
    }

    #[test]
    fn test_polygon_accepts_max_vertices() {
        let mut oled = test_oled(MockInterface::with_responses(&[ACK]));
        let mut delay = MockDelay;

        let vertices = [(0, 0); MAX_VERTICES];
        oled.draw_polygon(&vertices, Color::BLACK, &mut delay).unwrap();

        let payload = &oled.interface.written[1..];
        assert_eq!(payload.len(), 2 * MAX_VERTICES + 3);
        assert_eq!(payload[0], MAX_VERTICES as u8);
    }

    #[test]
    fn test_polygon_too_few_vertices_is_silent_noop() {
        let mut oled = test_oled(MockInterface::new());
        let mut delay = MockDelay;

        let vertices = [(1, 1), (2, 2), (3, 3)];
        let status = oled
            .draw_polygon(&vertices, Color::WHITE, &mut delay)
            .unwrap();

        assert_eq!(oled.interface.write_calls, 0);
        assert_eq!(oled.interface.reads, 0);
        assert_eq!(status, 0);
    }

    #[test]
    fn test_polygon_too_many_vertices_is_silent_noop() {
        let mut oled = test_oled(MockInterface::new());
        let mut delay = MockDelay;

        let vertices = [(0, 0); MAX_VERTICES + 1];
        oled.draw_polygon(&vertices, Color::WHITE, &mut delay).unwrap();

        assert_eq!(oled.interface.write_calls, 0);
        assert_eq!(oled.interface.reads, 0);
    }

    #[test]
    fn test_polygon_noop_preserves_last_status() {
        let mut oled = test_oled(MockInterface::with_responses(&[NACK]));
        let mut delay = MockDelay;

        oled.clear(&mut delay).unwrap();
        assert_eq!(oled.last_status(), NACK);

        let status = oled
            .draw_polygon(&[(1, 1)], Color::WHITE, &mut delay)
            .unwrap();
        assert_eq!(status, NACK);
        assert_eq!(oled.last_status(), NACK);
    }

    #[test]
    fn test_device_info_frame_and_field_order() {
        let mut oled = test_oled(MockInterface::with_responses(&[0x00, 0x01, 0x02, 96, 64]));
        let mut delay = MockDelay;

        let info = oled.device_info(false, &mut delay).unwrap();

        assert_eq!(oled.interface.written, [b'V', 0]);
        assert_eq!(oled.interface.reads, 5);
        assert_eq!(info.device_type, 0x00);
        assert_eq!(info.hardware_rev, 0x01);
        assert_eq!(info.firmware_rev, 0x02);
        assert_eq!(info.horizontal_res, 96);
        assert_eq!(info.vertical_res, 64);
    }

    #[test]
    fn test_device_info_screen_output_flag() {
        let mut oled = test_oled(MockInterface::with_responses(&[0, 0, 0, 0, 0]));
        let mut delay = MockDelay;

        oled.device_info(true, &mut delay).unwrap();
        assert_eq!(oled.interface.written, [b'V', 1]);
    }

    #[test]
    fn test_read_pixel_combines_high_byte_first() {
        let mut oled = test_oled(MockInterface::with_responses(&[0x12, 0x34]));
        let mut delay = MockDelay;

        let color = oled.read_pixel(5, 6, &mut delay).unwrap();

        assert_eq!(oled.interface.written, [b'R', 5, 6]);
        assert_eq!(oled.interface.reads, 2);
        assert_eq!(color.raw(), 0x1234);
    }

    #[test]
    fn test_display_image_streams_payload() {
        let mut oled = test_oled(MockInterface::with_responses(&[ACK]));
        let mut delay = MockDelay;

        let data = [0xAA, 0xBB, 0xCC, 0xDD];
        oled.display_image(10, 20, 2, 2, ColorMode::Colors256, &data, &mut delay)
            .unwrap();

        assert_eq!(
            oled.interface.written,
            [b'I', 10, 20, 2, 2, 0x08, 0xAA, 0xBB, 0xCC, 0xDD]
        );
        assert_eq!(oled.interface.reads, 1);
    }

    #[test]
    fn test_display_image_65k_needs_two_bytes_per_pixel() {
        let mut oled = test_oled(MockInterface::new());
        let mut delay = MockDelay;

        // 2x2 pixels in 65K mode needs 8 bytes, not 4
        let data = [0u8; 4];
        let result = oled.display_image(0, 0, 2, 2, ColorMode::Colors65k, &data, &mut delay);

        assert!(matches!(
            result,
            Err(Error::PayloadSizeMismatch {
                expected: 8,
                provided: 4
            })
        ));
        assert_eq!(oled.interface.write_calls, 0);
    }

    #[test]
    fn test_draw_text_frame_is_nul_terminated() {
        let mut oled = test_oled(MockInterface::with_responses(&[ACK]));
        let mut delay = MockDelay;

        oled.draw_text(2, 3, Font::Font8x8, Color::from_raw(0xFFFF), "OK", &mut delay)
            .unwrap();

        assert_eq!(
            oled.interface.written,
            [b's', 2, 3, 1, 0xFF, 0xFF, b'O', b'K', 0x00]
        );
    }

    #[test]
    fn test_command_frame_round_trip() {
        let mut oled = test_oled(MockInterface::with_responses(&[ACK]));
        let mut delay = MockDelay;

        let args = [7, 8, 9];
        oled.command(b'Z', &args, Some("hello"), &mut delay).unwrap();

        let (op, parsed_args, text) = parse_frame(&oled.interface.written, args.len());
        assert_eq!(op, b'Z');
        assert_eq!(parsed_args, args);
        assert_eq!(text, Some(b"hello".as_slice()));
    }

    #[test]
    fn test_text_button_frame() {
        let mut oled = test_oled(MockInterface::with_responses(&[ACK]));
        let mut delay = MockDelay;

        oled.text_button(
            ButtonState::Up,
            5,
            10,
            Color::from_raw(0x1122),
            Font::Font5x7,
            Color::from_raw(0x3344),
            40,
            12,
            "GO",
            &mut delay,
        )
        .unwrap();

        assert_eq!(
            oled.interface.written,
            [b'b', 1, 5, 10, 0x11, 0x22, 0, 0x33, 0x44, 40, 12, b'G', b'O', 0x00]
        );
    }

    #[test]
    fn test_draw_char_frame() {
        let mut oled = test_oled(MockInterface::with_responses(&[ACK]));
        let mut delay = MockDelay;

        oled.draw_char(b'X', 4, 5, Color::from_raw(0xABCD), &mut delay)
            .unwrap();
        assert_eq!(oled.interface.written, [b'T', b'X', 4, 5, 0xAB, 0xCD]);
    }

    #[test]
    fn test_add_bmp_char_frame() {
        let mut oled = test_oled(MockInterface::with_responses(&[ACK]));
        let mut delay = MockDelay;

        let bitmap = [1, 2, 3, 4, 5, 6, 7, 8];
        oled.add_bmp_char(3, bitmap, &mut delay).unwrap();
        assert_eq!(oled.interface.written, [b'A', 3, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_display_bmp_char_frame() {
        let mut oled = test_oled(MockInterface::with_responses(&[ACK]));
        let mut delay = MockDelay;

        oled.display_bmp_char(3, 8, 9, Color::from_raw(0xF800), &mut delay)
            .unwrap();
        assert_eq!(oled.interface.written, [b'D', 3, 8, 9, 0xF8, 0x00]);
    }

    #[test]
    fn test_screen_copy_paste_frame() {
        let mut oled = test_oled(MockInterface::with_responses(&[ACK]));
        let mut delay = MockDelay;

        oled.screen_copy_paste(0, 0, 32, 16, 24, 24, &mut delay).unwrap();
        assert_eq!(oled.interface.written, [b'c', 0, 0, 32, 16, 24, 24]);
    }

    #[test]
    fn test_set_contrast_frame() {
        let mut oled = test_oled(MockInterface::with_responses(&[ACK]));
        let mut delay = MockDelay;

        oled.set_contrast(0x0A, &mut delay).unwrap();
        assert_eq!(oled.interface.written, [b'Y', 2, 0x0A]);
    }

    #[test]
    fn test_display_on_off_frames() {
        let mut oled = test_oled(MockInterface::with_responses(&[ACK, ACK]));
        let mut delay = MockDelay;

        oled.display_on(&mut delay).unwrap();
        oled.display_off(&mut delay).unwrap();
        assert_eq!(oled.interface.written, [b'Y', 1, 1, b'Y', 1, 0]);
    }

    #[test]
    fn test_set_bg_frame() {
        let mut oled = test_oled(MockInterface::with_responses(&[ACK]));
        let mut delay = MockDelay;

        oled.set_bg(Color::from_raw(0x07E0), &mut delay).unwrap();
        assert_eq!(oled.interface.written, [b'B', 0x07, 0xE0]);
    }

    #[test]
    fn test_scroll_screen_disabled_is_one_frame() {
        let mut oled = test_oled(MockInterface::with_responses(&[ACK]));
        let mut delay = MockDelay;

        oled.scroll_screen(false, 4, &mut delay).unwrap();
        assert_eq!(oled.interface.written, [b'$', b'S', 2, 0]);
        assert_eq!(oled.interface.reads, 1);
    }

    #[test]
    fn test_scroll_screen_enabled_sends_speed_frame() {
        let mut oled = test_oled(MockInterface::with_responses(&[ACK, ACK]));
        let mut delay = MockDelay;

        oled.scroll_screen(true, 4, &mut delay).unwrap();
        assert_eq!(
            oled.interface.written,
            [b'$', b'S', 2, 0, b'$', b'S', 2, 4]
        );
        assert_eq!(oled.interface.reads, 2);
    }

    #[test]
    fn test_dim_screen_area_frame() {
        let mut oled = test_oled(MockInterface::with_responses(&[ACK]));
        let mut delay = MockDelay;

        oled.dim_screen_area(1, 2, 30, 20, &mut delay).unwrap();
        assert_eq!(oled.interface.written, [b'$', b'D', 1, 2, 30, 20]);
    }

    #[test]
    fn test_copy_screen_to_sd_frame() {
        let mut oled = test_oled(MockInterface::with_responses(&[ACK]));
        let mut delay = MockDelay;

        oled.copy_screen_to_sd(0, 0, 96, 64, 0x012345, &mut delay).unwrap();
        assert_eq!(
            oled.interface.written,
            [b'@', b'C', 0, 0, 96, 64, 0x01, 0x23, 0x45]
        );
    }

    #[test]
    fn test_display_image_from_sd_frame() {
        let mut oled = test_oled(MockInterface::with_responses(&[ACK]));
        let mut delay = MockDelay;

        oled.display_image_from_sd(0, 0, 96, 64, ColorMode::Colors65k, 0x000200, &mut delay)
            .unwrap();
        assert_eq!(
            oled.interface.written,
            [b'@', b'I', 0, 0, 96, 64, 0x10, 0x00, 0x02, 0x00]
        );
    }

    #[test]
    fn test_set_font_and_pen_frames() {
        let mut oled = test_oled(MockInterface::with_responses(&[ACK, ACK]));
        let mut delay = MockDelay;

        oled.set_font(Font::Font8x12, &mut delay).unwrap();
        oled.set_pen_size(PenSize::Wireframe, &mut delay).unwrap();
        assert_eq!(oled.interface.written, [b'F', 2, b'p', 1]);
    }
}
