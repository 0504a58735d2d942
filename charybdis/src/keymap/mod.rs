mod charybdis_4x6;

pub use charybdis_4x6::*;

use crate::action::KeyAction;
use crate::error::KeyMapError;
use crate::layer::{Layer, LayerState};

/// Keymap represents the stack of layers.
///
/// The conception of Keymap is borrowed from qmk: <https://docs.qmk.fm/#/keymap>.
///
/// Keymap is bound to the pcb matrix: the key scanner reports `(row, col)` and the keymap
/// uses `(layer, row, col)` to retrieve the action.
#[derive(Clone, Copy)]
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Layers
    layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> KeyMap<'a, ROW, COL, NUM_LAYER> {
    pub const fn new(layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER]) -> Self {
        Self { layers }
    }

    /// `(ROW, COL, NUM_LAYER)` of the keymap
    pub const fn dimensions(&self) -> (usize, usize, usize) {
        (ROW, COL, NUM_LAYER)
    }

    pub fn layers(&self) -> &'a [[[KeyAction; COL]; ROW]; NUM_LAYER] {
        self.layers
    }

    /// Action of `layer` at `(row, col)`. Positions outside the matrix have no action.
    pub fn action_at(&self, layer: Layer, row: usize, col: usize) -> KeyAction {
        self.try_action_at(layer as u8, row, col).unwrap_or(KeyAction::No)
    }

    pub fn try_action_at(&self, layer: u8, row: usize, col: usize) -> Result<KeyAction, KeyMapError> {
        let grid = self
            .layers
            .get(layer as usize)
            .ok_or(KeyMapError::InvalidLayer(layer))?;
        grid.get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(KeyMapError::OutOfBounds { row, col })
    }

    /// Find the action that is triggered at `(row, col)` under the given layer state.
    ///
    /// Active layers are checked from the highest to the lowest, transparent actions fall
    /// through to the next active layer. The base layer is always checked last. Returns the
    /// layer that provided the action along with the action itself.
    pub fn resolve(&self, state: LayerState, row: usize, col: usize) -> Result<(u8, KeyAction), KeyMapError> {
        if row >= ROW || col >= COL {
            return Err(KeyMapError::OutOfBounds { row, col });
        }

        // Iterate from higher layer to lower layer, the lowest checked layer is the base layer
        for (layer_idx, layer) in self.layers.iter().enumerate().rev() {
            if layer_idx == 0 || state.is_on(layer_idx as u8) {
                let action = layer[row][col];
                if action == KeyAction::Transparent {
                    continue;
                }
                return Ok((layer_idx as u8, action));
            }
        }

        Ok((0, KeyAction::No))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{a, k, layer, mo};

    #[rustfmt::skip]
    static LAYERS: [[[KeyAction; 3]; 2]; 3] = [
        layer!([
            [k!(A), k!(B), mo!(1)],
            [k!(C), k!(D), mo!(2)]
        ]),
        layer!([
            [k!(Kc1), a!(Transparent), a!(Transparent)],
            [a!(No), a!(Transparent), a!(Transparent)]
        ]),
        layer!([
            [a!(Transparent), k!(F2), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent)]
        ]),
    ];

    #[test]
    fn test_resolve_falls_through_transparent() {
        let keymap = KeyMap::new(&LAYERS);
        let state = LayerState::new().with(Layer::Lower).with(Layer::Raise);
        assert_eq!(keymap.resolve(state, 0, 0), Ok((1, k!(Kc1))));
        assert_eq!(keymap.resolve(state, 0, 1), Ok((2, k!(F2))));
        assert_eq!(keymap.resolve(state, 1, 1), Ok((0, k!(D))));
        assert_eq!(keymap.resolve(state, 1, 0), Ok((1, a!(No))));
    }

    #[test]
    fn test_resolve_inactive_layers_are_skipped() {
        let keymap = KeyMap::new(&LAYERS);
        assert_eq!(keymap.resolve(LayerState::new(), 0, 0), Ok((0, k!(A))));
        // Layers beyond the table are ignored
        assert_eq!(keymap.resolve(LayerState::from_bits(1 << 7), 0, 1), Ok((0, k!(B))));
        assert_eq!(
            keymap.resolve(LayerState::new(), 2, 0),
            Err(KeyMapError::OutOfBounds { row: 2, col: 0 })
        );
    }

    #[test]
    fn test_try_action_at() {
        let keymap = KeyMap::new(&LAYERS);
        assert_eq!(keymap.dimensions(), (2, 3, 3));
        assert_eq!(keymap.try_action_at(2, 0, 1), Ok(k!(F2)));
        assert_eq!(keymap.try_action_at(3, 0, 0), Err(KeyMapError::InvalidLayer(3)));
        assert_eq!(
            keymap.try_action_at(0, 0, 3),
            Err(KeyMapError::OutOfBounds { row: 0, col: 3 })
        );
        assert_eq!(keymap.action_at(Layer::Lower, 0, 0), k!(Kc1));
        assert_eq!(keymap.action_at(Layer::Pointer, 0, 0), a!(No));
    }
}
