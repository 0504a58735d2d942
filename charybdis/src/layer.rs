//! Layer identifiers and the active-layer bitset.
use strum::FromRepr;

use crate::error::KeyMapError;

/// Number of layers in the Charybdis keymap
pub const NUM_LAYER: usize = 8;

/// Layers of the keymap. The ordinal is the index into the layer table.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    Base = 0,
    Lower,
    Raise,
    Pointer,
    Extra1,
    Extra2,
    Extra3,
    Extra4,
}

impl Layer {
    pub const ALL: [Layer; NUM_LAYER] = [
        Layer::Base,
        Layer::Lower,
        Layer::Raise,
        Layer::Pointer,
        Layer::Extra1,
        Layer::Extra2,
        Layer::Extra3,
        Layer::Extra4,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl From<Layer> for u8 {
    fn from(layer: Layer) -> Self {
        layer as u8
    }
}

impl TryFrom<u8> for Layer {
    type Error = KeyMapError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Layer::from_repr(value).ok_or(KeyMapError::InvalidLayer(value))
    }
}

/// Active layers, bit `n` set means layer `n` is active.
///
/// The base layer is the default layer: it is always consulted, whether its bit is set or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState(u32);

impl LayerState {
    /// Maximum number of layers a state can carry
    pub const CAPACITY: u8 = u32::BITS as u8;

    pub const fn new() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns a copy of the state with `layer` active
    pub const fn with(self, layer: Layer) -> Self {
        Self(self.0 | (1 << layer as u8))
    }

    pub fn on(&mut self, layer: u8) {
        if layer < Self::CAPACITY {
            self.0 |= 1 << layer;
        }
    }

    pub fn off(&mut self, layer: u8) {
        if layer < Self::CAPACITY {
            self.0 &= !(1 << layer);
        }
    }

    pub fn toggle(&mut self, layer: u8) {
        if layer < Self::CAPACITY {
            self.0 ^= 1 << layer;
        }
    }

    pub const fn is_on(self, layer: u8) -> bool {
        layer < Self::CAPACITY && self.0 & (1 << layer) != 0
    }

    /// Index of the highest active layer, 0 when no layer is active
    pub const fn highest_layer(self) -> u8 {
        if self.0 == 0 {
            0
        } else {
            (u32::BITS - 1 - self.0.leading_zeros()) as u8
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_ordinals() {
        for (idx, layer) in Layer::ALL.iter().enumerate() {
            assert_eq!(layer.index(), idx);
            assert_eq!(Layer::try_from(idx as u8), Ok(*layer));
        }
        assert_eq!(Layer::try_from(8), Err(KeyMapError::InvalidLayer(8)));
    }

    #[test]
    fn test_highest_layer() {
        assert_eq!(LayerState::new().highest_layer(), 0);
        assert_eq!(LayerState::new().with(Layer::Base).highest_layer(), 0);
        let state = LayerState::new().with(Layer::Lower).with(Layer::Pointer);
        assert_eq!(state.highest_layer(), 3);
        assert_eq!(LayerState::from_bits(1 << 20).highest_layer(), 20);
    }

    #[test]
    fn test_on_off_toggle() {
        let mut state = LayerState::new();
        state.on(2);
        assert!(state.is_on(2));
        state.toggle(2);
        assert!(!state.is_on(2));
        state.toggle(5);
        state.on(1);
        state.off(5);
        assert_eq!(state.bits(), 0b10);
        // Out of range layers are ignored
        state.on(40);
        assert_eq!(state.bits(), 0b10);
        assert!(!state.is_on(40));
    }
}
