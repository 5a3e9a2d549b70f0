//! Display abstraction for text output.
//!
//! The OLED driver is an external collaborator; the clock core touches it
//! through [`TextDisplay`] and only ever calls
//! [`print_text`](TextDisplay::print_text). Layout, positioning and styling
//! belong to the display implementation and the menu framework, not to the
//! core.

/// Display trait for printing text.
///
/// Implementors provide hardware-specific rendering for displays like
/// SSD1306 OLEDs, character LCDs, or recorded output for testing.
///
/// # Example
///
/// ```ignore
/// use rs_menuclock::traits::TextDisplay;
///
/// struct MyDisplay { /* ... */ }
///
/// impl TextDisplay for MyDisplay {
///     type Error = ();
///
///     fn init(&mut self) -> Result<(), ()> { Ok(()) }
///     fn clear(&mut self) -> Result<(), ()> { Ok(()) }
///     fn print_text(&mut self, text: &str) -> Result<(), ()> {
///         // Draw the text and flush
///         Ok(())
///     }
/// }
/// ```
pub trait TextDisplay {
    /// Error type for display operations.
    type Error;

    /// Initializes the display hardware.
    ///
    /// Called once at startup, before anything is printed.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Clears the display.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Prints one line of text.
    ///
    /// Where and how the text appears is the implementation's decision.
    fn print_text(&mut self, text: &str) -> Result<(), Self::Error>;
}
