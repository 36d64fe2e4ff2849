//! Keycodes defined by this keymap, allocated upwards from [`SAFE_RANGE`].

use crate::types::keycode::{KeyCode, SAFE_RANGE};

/// Keycodes handled by [`process_record_user`](crate::processor::process_record_user)
/// instead of the firmware.
#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CustomKeycode {
    /// Keeps the first slot of the user range, never bound to any action
    Placeholder = SAFE_RANGE,
    /// Reset the persistent configuration
    Eprm,
    /// Type the firmware identification string
    Vrsn,
    /// Set RGB lighting to a static color
    RgbSld,
}

impl CustomKeycode {
    pub const ALL: [CustomKeycode; 4] = [
        CustomKeycode::Placeholder,
        CustomKeycode::Eprm,
        CustomKeycode::Vrsn,
        CustomKeycode::RgbSld,
    ];

    /// The keycode stored in layer tables for this custom key
    pub const fn keycode(self) -> KeyCode {
        // Every variant sits in the first slots of the user range
        match KeyCode::user((self as u16 - SAFE_RANGE) as u8) {
            Some(keycode) => keycode,
            None => KeyCode::No,
        }
    }

    /// The custom key behind a keycode, `None` for firmware keycodes and unused user slots
    pub fn from_keycode(keycode: KeyCode) -> Option<Self> {
        if !keycode.is_user() {
            return None;
        }
        Self::ALL.into_iter().find(|c| c.keycode() == keycode)
    }
}

impl From<CustomKeycode> for KeyCode {
    fn from(value: CustomKeycode) -> Self {
        value.keycode()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_keycode_slots() {
        assert_eq!(CustomKeycode::Placeholder.keycode(), KeyCode::User0);
        assert_eq!(CustomKeycode::Eprm.keycode(), KeyCode::User1);
        assert_eq!(CustomKeycode::Vrsn.keycode(), KeyCode::User2);
        assert_eq!(CustomKeycode::RgbSld.keycode(), KeyCode::User3);
    }

    #[test]
    fn test_keycode_matches_discriminant() {
        for custom in CustomKeycode::ALL {
            assert_eq!(custom.keycode() as u16, custom as u16);
            assert_eq!(CustomKeycode::from_keycode(custom.keycode()), Some(custom));
        }
    }

    #[test]
    fn test_regular_keycode_is_not_custom() {
        assert_eq!(CustomKeycode::from_keycode(KeyCode::A), None);
        assert_eq!(CustomKeycode::from_keycode(KeyCode::User4), None);
        assert_eq!(CustomKeycode::from_keycode(KeyCode::ClearEeprom), None);
    }
}
