//! ESP32 menu-clock device.
//!
//! This is the main entry point for the physical clock. It runs a polling
//! loop that:
//! - Reads the DS1307 RTC and diffs against the cached time
//! - Redraws the OLED only when the visible time actually changed
//! - Reports rejected hardware readings on the serial console
//!
//! # Build
//!
//! ```bash
//! # RTC only (serial output)
//! cargo build --features esp32
//!
//! # With OLED
//! cargo build --features esp32,display
//! ```
//!
//! Set `BUILD_EPOCH` at compile time (seconds since the Unix epoch) to seed
//! a factory-fresh RTC with the firmware build timestamp.

use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::prelude::*;
use rs_menuclock::config::FALLBACK_EPOCH;
use rs_menuclock::hal::esp32::Ds1307Rtc;
use rs_menuclock::{init_time_source, Clock, ClockConfig, Config};
use std::thread;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    // Initialize ESP-IDF
    esp_idf_hal::sys::link_patches();

    println!();
    println!("================================");
    println!("  rs-menuclock");
    println!("================================");
    println!();

    // =========================================================================
    // Configuration
    // =========================================================================
    let build_epoch = option_env!("BUILD_EPOCH")
        .and_then(|s| s.parse().ok())
        .unwrap_or(FALLBACK_EPOCH);
    let config = Config::default().with_clock(ClockConfig::default().with_default_epoch(build_epoch));

    let peripherals = Peripherals::take()?;

    // =========================================================================
    // Initialize RTC (DS1307 on GPIO21/22)
    // =========================================================================
    let i2c0 = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio21, // SDA
        peripherals.pins.gpio22, // SCL
        &I2cConfig::new().baudrate(100.kHz().into()),
    )?;
    let mut rtc = Ds1307Rtc::new(i2c0);
    init_time_source(&mut rtc, config.clock.default_epoch)
        .map_err(|e| anyhow::anyhow!("RTC init failed: {:?}", e))?;
    println!("[OK] RTC initialized (GPIO21/22 I2C)");

    // =========================================================================
    // Initialize Display (SSD1306 on GPIO18/19) - Optional
    // =========================================================================
    #[cfg(feature = "display")]
    let mut display = {
        use rs_menuclock::hal::esp32::OledDisplay;
        use rs_menuclock::traits::TextDisplay;

        let i2c1 = I2cDriver::new(
            peripherals.i2c1,
            peripherals.pins.gpio18, // SDA
            peripherals.pins.gpio19, // SCL
            &I2cConfig::new().baudrate(400.kHz().into()),
        )?;

        let mut disp = OledDisplay::new(i2c1);
        disp.init()
            .map_err(|e| anyhow::anyhow!("Display init failed: {:?}", e))?;
        let _ = disp.print_text(config.device.name.as_str());
        println!("[OK] Display initialized (GPIO18/19 I2C)");
        disp
    };

    // =========================================================================
    // Clock core
    // =========================================================================
    let mut clock = Clock::new(rtc);

    println!();
    println!(
        "Starting poll loop ({}ms interval)...",
        config.clock.poll_interval_ms
    );
    println!();

    #[cfg(feature = "display")]
    let mut last_drawn = None;
    let mut seen_errors = 0;

    // =========================================================================
    // Main Poll Loop
    // =========================================================================
    loop {
        clock.update_time();

        let errors = clock.read_errors();
        if errors != seen_errors {
            println!("[WARN] rejected RTC reading ({} total)", errors);
            seen_errors = errors;
        }

        #[cfg(feature = "display")]
        {
            use rs_menuclock::traits::MenuEntry;

            let now = clock.current_time();
            if last_drawn != Some(now) {
                match clock.render(&mut display) {
                    Ok(()) => last_drawn = Some(now),
                    Err(e) => println!("[WARN] display render failed: {:?}", e),
                }
            }
        }

        thread::sleep(Duration::from_millis(u64::from(
            config.clock.poll_interval_ms,
        )));
    }
}
