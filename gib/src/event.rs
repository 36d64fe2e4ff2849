/// A key press or release at a matrix position, as reported by the firmware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    /// Matrix row of the key, kept for the firmware and for logging
    pub row: u8,
    /// Matrix column of the key, kept for the firmware and for logging
    pub col: u8,
    /// `true` on press, `false` on release
    pub pressed: bool,
}

impl KeyEvent {
    pub const fn pressed(row: u8, col: u8) -> Self {
        Self { row, col, pressed: true }
    }

    pub const fn released(row: u8, col: u8) -> Self {
        Self { row, col, pressed: false }
    }
}
