//! ESP32 hardware abstraction layer for the clock device.
//!
//! This module provides hardware implementations for an ESP32 DevKit board
//! driving a battery-backed DS1307 RTC module and an SSD1306 OLED.
//!
//! # Hardware Configuration
//!
//! - **MCU**: ESP32 DevKit (dual I2C controllers)
//! - **RTC**: DS1307 module with CR2032 backup battery (I2C)
//! - **Display**: SSD1306 128x64 OLED (I2C)
//!
//! # Pin Assignments
//!
//! See the [`pins`] module for GPIO assignments.

mod rtc;

pub use rtc::{Ds1307Rtc, RtcError};

#[cfg(feature = "display")]
mod display;
#[cfg(feature = "display")]
pub use display::{DisplayError, OledDisplay};

/// Pin assignments for the ESP32 DevKit wiring.
///
/// The RTC and the display each get their own I2C controller so the two
/// driver crates own their buses outright:
/// - DS1307 on I2C0 (the default SDA/SCL pins)
/// - SSD1306 on I2C1
pub mod pins {
    // =========================================================================
    // RTC (DS1307, I2C0)
    // =========================================================================

    /// RTC I2C data line
    pub const RTC_SDA: i32 = 21;

    /// RTC I2C clock line
    pub const RTC_SCL: i32 = 22;

    // =========================================================================
    // Display (SSD1306, I2C1)
    // =========================================================================

    /// Display I2C data line
    pub const OLED_SDA: i32 = 18;

    /// Display I2C clock line
    pub const OLED_SCL: i32 = 19;

    /// Default I2C address for SSD1306 OLED
    pub const OLED_I2C_ADDR: u8 = 0x3C;
}
