//! The firmware services that the keymap's callbacks drive.

/// Services of the host firmware used by the keymap.
///
/// The firmware owns the HID reports, the persistent storage and the lighting driver,
/// the keymap only asks for them through this trait. Every call happens on the
/// firmware's main loop, so implementations don't need to be reentrant.
pub trait KeyboardHost {
    type Error: core::fmt::Debug;

    /// Type the given string as a sequence of key reports
    fn send_string(&mut self, s: &str) -> Result<(), Self::Error>;

    /// Wipe the persistent configuration back to defaults
    fn reset_persistent_config(&mut self) -> Result<(), Self::Error>;

    /// Switch the rgblight effect mode
    fn set_rgblight_mode(&mut self, mode: u8) -> Result<(), Self::Error>;
}
