//! Handling of the keymap's own keycodes.
//!
//! The firmware calls [`process_record_user`] for every key event before
//! applying the default behavior of the keycode. The custom keycodes and the
//! legacy macro ids both resolve to a [`UserAction`], so each side effect is
//! implemented once in [`UserAction::execute`].

use crate::custom_keycode::CustomKeycode;
use crate::event::KeyEvent;
use crate::host::KeyboardHost;
use crate::types::keycode::KeyCode;
use crate::IDENTIFICATION;

/// What the firmware should do with a key event after the keymap has seen it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProcessResult {
    /// Apply the default behavior of the keycode
    Continue,
    /// The keymap consumed the event, skip default processing
    Handled,
}

impl ProcessResult {
    /// Same meaning as the `bool` returned by firmware callbacks: `true` to continue
    pub fn should_continue(self) -> bool {
        self == ProcessResult::Continue
    }
}

/// A side effect triggered by the keymap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UserAction {
    /// Type `<keyboard>/<keymap> @ <version>`
    SendIdentification,
    /// Wipe the persistent configuration
    ResetPersistentConfig,
    /// Set the lighting to a static color
    RgbSolid,
}

impl UserAction {
    /// Action of a custom keycode, `None` for every other keycode and for `Placeholder`
    pub fn from_keycode(keycode: KeyCode) -> Option<Self> {
        match CustomKeycode::from_keycode(keycode)? {
            CustomKeycode::Eprm => Some(UserAction::ResetPersistentConfig),
            CustomKeycode::Vrsn => Some(UserAction::SendIdentification),
            CustomKeycode::RgbSld => Some(UserAction::RgbSolid),
            CustomKeycode::Placeholder => None,
        }
    }

    /// Action of a legacy macro id
    pub fn from_macro_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(UserAction::SendIdentification),
            1 => Some(UserAction::ResetPersistentConfig),
            _ => None,
        }
    }

    /// Run the side effect through the firmware, host errors are returned as is
    pub fn execute<H: KeyboardHost>(self, host: &mut H) -> Result<(), H::Error> {
        match self {
            UserAction::SendIdentification => {
                debug!("Sending identification: {}", IDENTIFICATION);
                host.send_string(IDENTIFICATION)
            }
            UserAction::ResetPersistentConfig => {
                info!("Resetting persistent config");
                host.reset_persistent_config()
            }
            UserAction::RgbSolid => {
                #[cfg(feature = "rgblight")]
                {
                    debug!("Set rgblight mode {}", crate::RGBLIGHT_SOLID_MODE);
                    host.set_rgblight_mode(crate::RGBLIGHT_SOLID_MODE)
                }
                #[cfg(not(feature = "rgblight"))]
                {
                    Ok(())
                }
            }
        }
    }
}

/// Process a key event before the firmware does.
///
/// The custom keycodes fire their action on press and are consumed on both press
/// and release. Every other keycode, including [`CustomKeycode::Placeholder`],
/// is left to the firmware.
pub fn process_record_user<H: KeyboardHost>(
    keycode: KeyCode,
    event: KeyEvent,
    host: &mut H,
) -> Result<ProcessResult, H::Error> {
    let Some(action) = UserAction::from_keycode(keycode) else {
        return Ok(ProcessResult::Continue);
    };

    debug!("Processing user key: {:?} at ({}, {}), pressed: {}", keycode, event.row, event.col, event.pressed);
    if event.pressed {
        action.execute(host)?;
    }
    Ok(ProcessResult::Handled)
}

/// Runs just one time when the keyboard initializes.
pub fn matrix_init_user() {
    debug!("gib keymap initialized, {}", IDENTIFICATION);
}
