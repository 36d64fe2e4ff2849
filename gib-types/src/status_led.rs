use bitfield_struct::bitfield;

/// Status LEDs of the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusLedType {
    /// The LED on the controller board
    Board,
    /// First LED of the right half
    Right1,
    /// Second LED of the right half
    Right2,
    /// Third LED of the right half
    Right3,
}

impl StatusLedType {
    /// Every status LED, in the order they are written
    pub const ALL: [StatusLedType; 4] = [
        StatusLedType::Board,
        StatusLedType::Right1,
        StatusLedType::Right2,
        StatusLedType::Right3,
    ];
}

/// On/off state of every status LED, packed into one byte.
#[bitfield(u8, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct StatusLeds {
    #[bits(1)]
    pub board: bool,
    #[bits(1)]
    pub right_1: bool,
    #[bits(1)]
    pub right_2: bool,
    #[bits(1)]
    pub right_3: bool,
    #[bits(4)]
    _reserved: u8,
}

impl StatusLeds {
    pub const OFF: Self = Self::new();
    pub const RIGHT_1: Self = Self::new().with_right_1(true);
    pub const RIGHT_2: Self = Self::new().with_right_2(true);

    /// LED state shown while `layer` is the highest active layer.
    ///
    /// Layer 1 lights the first right LED, layer 2 the second one. The base layer
    /// and layers without an indicator leave every LED off.
    pub const fn for_layer(layer: u8) -> Self {
        match layer {
            1 => Self::RIGHT_1,
            2 => Self::RIGHT_2,
            _ => Self::OFF,
        }
    }

    pub fn is_on(self, led: StatusLedType) -> bool {
        match led {
            StatusLedType::Board => self.board(),
            StatusLedType::Right1 => self.right_1(),
            StatusLedType::Right2 => self.right_2(),
            StatusLedType::Right3 => self.right_3(),
        }
    }

    /// Number of LEDs turned on
    pub fn lit(self) -> u32 {
        (self.into_bits() & 0x0F).count_ones()
    }
}
