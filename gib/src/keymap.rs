//! Layer tables of the gib keymap.
//!
//! Each half of the ErgoDox has 38 keys. They are stored in a `ROW x COL` grid,
//! the left half in columns 0..7 and the right half in columns 7..14:
//!
//! - rows 0..4 are the main rows, outer column first. Row 2 has no key in the
//!   two innermost columns (the tall 1.5u keys belong to rows 1 and 3)
//! - row 4 holds the five bottom-row keys plus the two upper thumb keys
//! - row 5 holds the single middle thumb key and the three large thumb keys
//!
//! Unused grid positions are `KeyAction::No`.

use crate::types::action::KeyAction;
use crate::types::modifier::ModifierCombination;
use crate::{COL, NUM_LAYER, ROW};
use crate::{a, fn_key, k, layer, mo, mt, rshifted, shifted, tg, tt, user};

/// Default layer
pub const BASE: u8 = 0;
/// Symbols, function keys and navigation
pub const SYMB: u8 = 1;
/// Media and mouse keys
pub const MDIA: u8 = 2;

/// Actions bound to `fn_key!(n)`, indexed by `n`
pub const FN_ACTIONS: [KeyAction; 2] = [
    a!(No),
    // FN1: momentary symbol layer on hold, toggles it on tap
    tt!(SYMB),
];

/// Resolve a function key, unknown ids are `KeyAction::No`
pub fn fn_action(id: u8) -> KeyAction {
    FN_ACTIONS.get(id as usize).copied().unwrap_or(KeyAction::No)
}

/// Fetch the action at a position of a layer, `None` if out of the table
pub fn action_at(layer: u8, row: usize, col: usize) -> Option<KeyAction> {
    KEYMAP.get(layer as usize)?.get(row)?.get(col).copied()
}

/* Keymap 0: Basic layer
 *
 * ,--------------------------------------------------.           ,--------------------------------------------------.
 * | Reset  |   1  |   2  |   3  |   4  |   5  |  L2  |           |  L2  |   6  |   7  |   8  |   9  |   0  | Reset  |
 * |--------+------+------+------+------+-------------|           |------+------+------+------+------+------+--------|
 * | Tab    |   Q  |   W  |   E  |   R  |   T  |   (  |           |  )   |   Y  |   U  |   I  |   O  |   P  |   -    |
 * |--------+------+------+------+------+------|      |           |      |------+------+------+------+------+--------|
 * | RShift |   A  |   S  |   D  |   F  |   G  |------|           |------|   H  |   J  |   K  |   L  |  ;   |   '    |
 * |--------+------+------+------+------+------|   [  |           |  ]   |------+------+------+------+------+--------|
 * |Esc/Ctrl|Z/Ctrl|   X  |   C  |   V  |   B  |      |           |      |   N  |   M  |   ,  |   .  |  /   |   \    |
 * `--------+------+------+------+------+-------------'           `-------------+------+------+------+------+--------'
 *   | F17  |      | LAlt | LCtl | LGui |                                       |RShift| RAlt |      |      | ~L1  |
 *   `----------------------------------'                                       `----------------------------------'
 *                                        ,-------------.       ,---------------.
 *                                        | F17  |      |       |      |        |
 *                                 ,------|------|------|       |------+--------+------.
 *                                 |      |      | LAlt |       | LAlt |        |      |
 *                                 |RShift|  L1  |------|       |------|  Bspc  |Space |
 *                                 |      |      | LGui |       | LCtl |        |      |
 *                                 `--------------------'       `----------------------'
 *
 * Keymap 1: Symbol layer
 *
 * ,---------------------------------------------------.           ,--------------------------------------------------.
 * |Version  |  F1  |  F2  |  F3  |  F4  |  F5  |      |           |      |  F6  |  F7  |  F8  |  F9  |  F10 |   F11  |
 * |---------+------+------+------+------+------+------|           |------+------+------+------+------+------+--------|
 * |         |   !  |   7  |   8  |   9  |   |  |      |           |      | Home | PgDn | PgUp | End  |   *  |   F12  |
 * |---------+------+------+------+------+------|      |           |      |------+------+------+------+------+--------|
 * |         |   0  |   4  |   5  |   6  |   `  |------|           |------| Left | Down |  Up  | Right|  =   |   `    |
 * |---------+------+------+------+------+------|      |           |      |------+------+------+------+------+--------|
 * |         |   0  |   1  |   2  |   3  |   ~  |      |           |      |   &  |      |      |      |      |        |
 * `---------+------+------+------+------+-------------'           `-------------+------+------+------+------+--------'
 *   | EPRM  |      |      |      |      |                                       |      |      |      |      |      |
 *   `-----------------------------------'                                       `----------------------------------'
 *                                        ,-------------.       ,-------------.
 *                                        |      |      |       |Toggle|Solid |
 *                                 ,------|------|------|       |------+------+------.
 *                                 |      |      |      |       |      |      |      |
 *                                 |      |      |------|       |------|  Del | Enter|
 *                                 |      |      |      |       |      |      |      |
 *                                 `--------------------'       `--------------------'
 *
 * Keymap 2: Media and mouse keys
 *
 * ,--------------------------------------------------.           ,--------------------------------------------------.
 * |        |      |      |      |      |      |      |           |      |      |      |      |      |      |        |
 * |--------+------+------+------+------+-------------|           |------+------+------+------+------+------+--------|
 * |        |      |      | MsUp |      |      |      |           |      |      |      |      |      |      |        |
 * |--------+------+------+------+------+------|      |           |      |------+------+------+------+------+--------|
 * |        |      |MsLeft|MsDown|MsRght|      |------|           |------|      |      |      |      |      |  Play  |
 * |--------+------+------+------+------+------|      |           |      |------+------+------+------+------+--------|
 * |        |      |      |      |      |      |      |           |      |      |      | Prev | Next |      |        |
 * `--------+------+------+------+------+-------------'           `-------------+------+------+------+------+--------'
 *   |      |      |      | Lclk | Rclk |                                       |VolUp |VolDn | Mute |      |      |
 *   `----------------------------------'                                       `----------------------------------'
 *                                        ,-------------.       ,-------------.
 *                                        |      |      |       |      |      |
 *                                 ,------|------|------|       |------+------+------.
 *                                 |      |      |      |       |      |      |Brwser|
 *                                 |      |      |------|       |------|      |Back  |
 *                                 |      |      |      |       |      |      |      |
 *                                 `--------------------'       `--------------------'
 */
#[rustfmt::skip]
pub const KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = [
    // BASE
    layer!([
        [k!(Bootloader), k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), tg!(MDIA),    tg!(MDIA), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), k!(Bootloader)],
        [k!(Tab), k!(Q), k!(W), k!(E), k!(R), k!(T), rshifted!(Kc9),    rshifted!(Kc0), k!(Y), k!(U), k!(I), k!(O), k!(P), k!(Minus)],
        [k!(RShift), k!(A), k!(S), k!(D), k!(F), k!(G), a!(No),    a!(No), k!(H), k!(J), k!(K), k!(L), k!(Semicolon), k!(Quote)],
        [mt!(Escape, ModifierCombination::LCTRL), mt!(Z, ModifierCombination::LCTRL), k!(X), k!(C), k!(V), k!(B), k!(LeftBracket),    k!(RightBracket), k!(N), k!(M), k!(Comma), k!(Dot), k!(Slash), k!(Backslash)],
        [k!(F17), a!(Transparent), k!(LAlt), k!(LCtrl), k!(LGui), k!(F17), a!(Transparent),    a!(Transparent), a!(Transparent), k!(RShift), k!(RAlt), a!(Transparent), a!(Transparent), fn_key!(1)],
        [a!(No), a!(No), a!(No), k!(LAlt), k!(RShift), mo!(SYMB), k!(LGui),    k!(LAlt), k!(LCtrl), k!(Backspace), k!(Space), a!(No), a!(No), a!(No)]
    ]),
    // SYMB
    layer!([
        [user!(Vrsn), k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), a!(Transparent),    a!(Transparent), k!(F6), k!(F7), k!(F8), k!(F9), k!(F10), k!(F11)],
        [a!(Transparent), shifted!(Kc1), k!(Kc7), k!(Kc8), k!(Kc9), shifted!(Backslash), a!(Transparent),    a!(Transparent), k!(Home), k!(PageDown), k!(PageUp), k!(End), shifted!(Kc8), k!(F12)],
        [a!(Transparent), k!(Kc0), k!(Kc4), k!(Kc5), k!(Kc6), k!(Grave), a!(No),    a!(No), k!(Left), k!(Down), k!(Up), k!(Right), k!(Equal), k!(Grave)],
        [a!(Transparent), k!(Kc0), k!(Kc1), k!(Kc2), k!(Kc3), shifted!(Grave), a!(Transparent),    a!(Transparent), shifted!(Kc7), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
        [user!(Eprm), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent),    k!(RgbTog), user!(RgbSld), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
        [a!(No), a!(No), a!(No), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent),    a!(Transparent), a!(Transparent), k!(Delete), k!(Enter), a!(No), a!(No), a!(No)]
    ]),
    // MDIA
    layer!([
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent),    a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
        [a!(Transparent), a!(Transparent), a!(Transparent), k!(MouseUp), a!(Transparent), a!(Transparent), a!(Transparent),    a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
        [a!(Transparent), a!(Transparent), k!(MouseLeft), k!(MouseDown), k!(MouseRight), a!(Transparent), a!(No),    a!(No), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(MediaPlayPause)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent),    a!(Transparent), a!(Transparent), a!(Transparent), k!(MediaPrevTrack), k!(MediaNextTrack), a!(Transparent), a!(Transparent)],
        [a!(Transparent), a!(Transparent), a!(Transparent), k!(MouseBtn1), k!(MouseBtn2), a!(Transparent), a!(Transparent),    a!(Transparent), a!(Transparent), k!(AudioVolUp), k!(AudioVolDown), k!(AudioMute), a!(Transparent), a!(Transparent)],
        [a!(No), a!(No), a!(No), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent),    a!(Transparent), a!(Transparent), a!(Transparent), k!(WwwBack), a!(No), a!(No), a!(No)]
    ]),
];

/// An owned copy of [`KEYMAP`], for firmwares that keep the keymap in RAM
pub const fn get_default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    KEYMAP
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::action::Action;

    #[test]
    fn test_fn_action() {
        assert_eq!(
            fn_action(1),
            KeyAction::TapHold(Action::LayerToggle(SYMB), Action::LayerOn(SYMB))
        );
        assert_eq!(fn_action(0), KeyAction::No);
        assert_eq!(fn_action(200), KeyAction::No);
    }

    #[test]
    fn test_action_at_out_of_range() {
        assert_eq!(action_at(NUM_LAYER as u8, 0, 0), None);
        assert_eq!(action_at(BASE, ROW, 0), None);
        assert_eq!(action_at(BASE, 0, COL), None);
    }
}
