/// Bitmask of the active layers, bit `n` set means layer `n` is on.
///
/// The firmware owns and updates this state, the keymap only reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState(pub u32);

impl LayerState {
    /// Only the base layer is active
    pub const BASE: Self = Self(0);

    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    /// State with the given layer turned on
    pub const fn with_layer(self, layer: u8) -> Self {
        if layer >= 32 {
            return self;
        }
        Self(self.0 | 1 << layer)
    }

    pub const fn is_on(self, layer: u8) -> bool {
        layer < 32 && self.0 & (1 << layer) != 0
    }

    /// Index of the highest active layer, 0 when no bit is set
    pub const fn highest_layer(self) -> u8 {
        if self.0 == 0 {
            0
        } else {
            (31 - self.0.leading_zeros()) as u8
        }
    }
}

impl From<u32> for LayerState {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}
