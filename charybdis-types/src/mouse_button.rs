//! Mouse button state and operations.
//!
//! This module handles mouse button combinations and states, supporting up to
//! 8 mouse buttons.
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use bitfield_struct::bitfield;

/// Mouse buttons
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct MouseButtons {
    #[bits(1)]
    pub button1: bool, //left
    #[bits(1)]
    pub button2: bool, //right
    #[bits(1)]
    pub button3: bool, //middle
    #[bits(1)]
    pub button4: bool,
    #[bits(1)]
    pub button5: bool,
    #[bits(1)]
    pub button6: bool,
    #[bits(1)]
    pub button7: bool,
    #[bits(1)]
    pub button8: bool,
}

impl BitOr for MouseButtons {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}
impl BitAnd for MouseButtons {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() & rhs.into_bits())
    }
}
impl Not for MouseButtons {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::from_bits(!self.into_bits())
    }
}
impl BitAndAssign for MouseButtons {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}
impl BitOrAssign for MouseButtons {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl MouseButtons {
    pub const BUTTON1: Self = Self::new().with_button1(true);
    pub const BUTTON2: Self = Self::new().with_button2(true);
    pub const BUTTON3: Self = Self::new().with_button3(true);

    /// Button set with only the button at `index` (0-based) pressed.
    /// Indices past the eighth button yield an empty set.
    pub const fn from_index(index: u8) -> Self {
        if index < 8 {
            Self::from_bits(1 << index)
        } else {
            Self::new()
        }
    }

    pub const fn is_empty(self) -> bool {
        self.into_bits() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_ops() {
        let mut buttons = MouseButtons::new();
        assert!(buttons.is_empty());
        buttons |= MouseButtons::from_index(0);
        buttons |= MouseButtons::BUTTON3;
        assert_eq!(buttons.into_bits(), 0b101);
        buttons &= !MouseButtons::BUTTON1;
        assert_eq!(buttons, MouseButtons::BUTTON3);
        assert!(MouseButtons::from_index(8).is_empty());
    }
}
