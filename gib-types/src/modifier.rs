use bitfield_struct::bitfield;

/// To represent all combinations of modifiers, at least 5 bits are needed.
/// 1 bit for Left/Right, 4 bits for modifier type. Represented in LSB format.
///
/// | bit4 | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- | --- |
/// | L/R | GUI | ALT |SHIFT| CTRL|
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct ModifierCombination {
    #[bits(1)]
    pub ctrl: bool,
    #[bits(1)]
    pub shift: bool,
    #[bits(1)]
    pub alt: bool,
    #[bits(1)]
    pub gui: bool,
    #[bits(1)]
    pub right: bool,
    #[bits(3)]
    _reserved: u8,
}

impl ModifierCombination {
    pub const LCTRL: Self = Self::new().with_ctrl(true);
    pub const LSHIFT: Self = Self::new().with_shift(true);
    pub const LALT: Self = Self::new().with_alt(true);
    pub const LGUI: Self = Self::new().with_gui(true);
    pub const RSHIFT: Self = Self::LSHIFT.with_right(true);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_right_modifiers() {
        assert!(ModifierCombination::RSHIFT.right());
        assert!(ModifierCombination::RSHIFT.shift());
        assert!(!ModifierCombination::LSHIFT.right());
        assert_eq!(ModifierCombination::RSHIFT, ModifierCombination::LSHIFT.with_right(true));
        assert_ne!(ModifierCombination::RSHIFT, ModifierCombination::LSHIFT);
    }

    #[test]
    fn test_modifier_bits() {
        assert_eq!(ModifierCombination::LCTRL.into_bits(), 0b0000_0001);
        assert_eq!(ModifierCombination::LGUI.into_bits(), 0b0000_1000);
        assert_eq!(ModifierCombination::RSHIFT.into_bits(), 0b0001_0010);
    }
}
