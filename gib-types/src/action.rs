//! Keyboard actions and behaviors.
//!
//! Actions represent what happens when a key is pressed, from simple key
//! presses to layer switching and tap-hold behaviors.
//!
//! Key types:
//! - [`Action`] - Single operations that keyboards send or execute
//! - [`KeyAction`] - The content of one cell in a layer table

use crate::keycode::KeyCode;
use crate::modifier::ModifierCombination;

/// A KeyAction is the action at a keyboard position, stored in keymap.
/// It can be a single action like triggering a key, or a composite keyboard action like tap/hold
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A single action, such as triggering a key, or activating a layer. Action is triggered when pressed and cancelled when released.
    Single(Action),
    /// General tap/hold action: (tap_action, hold_action)
    TapHold(Action, Action),
}

impl KeyAction {
    /// Convert `KeyAction` to the internal `Action`.
    /// Only valid for `Single` variant, returns `None` for other variants.
    pub fn to_action(self) -> Option<Action> {
        match self {
            KeyAction::Single(a) => Some(a),
            _ => None,
        }
    }

    /// The keycode this key sends when it's a plain key stroke
    pub fn keycode(self) -> Option<KeyCode> {
        match self.to_action() {
            Some(Action::Key(k)) => Some(k),
            _ => None,
        }
    }

    pub fn is_transparent(&self) -> bool {
        matches!(self, KeyAction::Transparent)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, KeyAction::No)
    }
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// A normal key stroke, uses for all keycodes defined in `KeyCode` enum, including mouse key, consumer/system control, etc.
    Key(KeyCode),
    /// Modifier Combination, used as the hold part of mod-tap keys.
    Modifier(ModifierCombination),
    /// Key stroke with modifier combination triggered.
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Activate a layer
    LayerOn(u8),
    /// Toggle a layer
    LayerToggle(u8),
    /// Look up the action bound at `index` of the keymap's function table
    Function(u8),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_keycode_of_action() {
        assert_eq!(KeyAction::Single(Action::Key(KeyCode::A)).keycode(), Some(KeyCode::A));
        assert_eq!(
            KeyAction::Single(Action::KeyWithModifier(KeyCode::B, ModifierCombination::LSHIFT)).keycode(),
            None
        );
        assert_eq!(KeyAction::Single(Action::LayerOn(1)).keycode(), None);
        assert_eq!(KeyAction::Transparent.keycode(), None);
        assert_eq!(
            KeyAction::TapHold(Action::Key(KeyCode::Z), Action::Modifier(ModifierCombination::LCTRL)).keycode(),
            None
        );
    }
}
