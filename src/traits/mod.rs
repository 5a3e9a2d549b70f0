//! Trait definitions for the capability boundaries of the clock core.
//!
//! This module defines the interfaces that let the core:
//! - Run against different time sources (DS1307 hardware, desktop mock)
//! - Print through different displays (SSD1306 OLED, recorded mock)
//! - Notify arbitrary subscriber components when the time changes
//! - Be hosted inside a generic menu framework
//!
//! # Submodules
//!
//! - `hardware`: the [`TimeSource`] RTC capability and [`RtcReading`]
//! - `display`: the [`TextDisplay`] print capability
//! - `menu`: [`TimeListener`] and the [`MenuEntry`] capability set

pub mod display;
pub mod hardware;
pub mod menu;

pub use display::*;
pub use hardware::*;
pub use menu::*;
