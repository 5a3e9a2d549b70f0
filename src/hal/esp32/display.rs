//! SSD1306 OLED display implementation for ESP32.
//!
//! Provides a 128x64 pixel display used as a plain text surface: the menu
//! framework decides what to print, this adapter decides where and how.
//!
//! # Wiring
//!
//! - SDA → GPIO18
//! - SCL → GPIO19
//! - VCC → 3.3V
//! - GND → GND

use crate::traits::TextDisplay;
use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::Text,
};
use esp_idf_hal::i2c::I2cDriver;
use ssd1306::{mode::BufferedGraphicsMode, prelude::*, I2CDisplayInterface, Ssd1306};

/// SSD1306 display type alias for cleaner code.
type DisplayDriver<'d> = Ssd1306<
    I2CInterface<I2cDriver<'d>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

/// SSD1306 OLED as a one-line text surface.
///
/// Text is drawn with a 6x10 monospace font, vertically centered. Each
/// `print_text` call replaces the previous content; the clock prints a
/// fresh `HH:MM:SS` on every visible change.
pub struct OledDisplay<'d> {
    display: DisplayDriver<'d>,
}

impl<'d> OledDisplay<'d> {
    /// Creates a new display instance.
    ///
    /// # Arguments
    ///
    /// * `i2c` - I2C driver configured for the display pins
    pub fn new(i2c: I2cDriver<'d>) -> Self {
        let interface = I2CDisplayInterface::new(i2c);
        let display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        Self { display }
    }
}

impl TextDisplay for OledDisplay<'_> {
    type Error = DisplayError;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.display.init()?;
        self.clear()
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.display.clear(BinaryColor::Off)?;
        self.display.flush()?;
        Ok(())
    }

    fn print_text(&mut self, text: &str) -> Result<(), Self::Error> {
        self.display.clear(BinaryColor::Off)?;

        let text_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        Text::new(text, Point::new(4, 36), text_style).draw(&mut self.display)?;

        self.display.flush()?;
        Ok(())
    }
}

/// Display error type.
#[derive(Debug)]
pub struct DisplayError;

impl From<display_interface::DisplayError> for DisplayError {
    fn from(_: display_interface::DisplayError) -> Self {
        DisplayError
    }
}
