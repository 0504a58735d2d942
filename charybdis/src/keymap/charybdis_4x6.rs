//! The Charybdis 4x6 layout.
use strum::FromRepr;

use super::KeyMap;
use crate::action::{Action, KeyAction};
use crate::keycode::KeyCode;
use crate::layer::NUM_LAYER;
use crate::{a, charybdis_4x6, k, lt, mo, shifted};

pub const ROW: usize = 10;
pub const COL: usize = 6;

pub type CharybdisKeyMap = KeyMap<'static, ROW, COL, NUM_LAYER>;

/// Keycodes of the trackball, carried in the user keycode range
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CharybdisKey {
    DpiForward = 0,
    DpiReverse,
    SniperDpiForward,
    SniperDpiReverse,
    Sniping,
    SnipingToggle,
    DragScroll,
    DragScrollToggle,
}

impl CharybdisKey {
    pub const fn keycode(self) -> KeyCode {
        match self {
            CharybdisKey::DpiForward => KeyCode::User0,
            CharybdisKey::DpiReverse => KeyCode::User1,
            CharybdisKey::SniperDpiForward => KeyCode::User2,
            CharybdisKey::SniperDpiReverse => KeyCode::User3,
            CharybdisKey::Sniping => KeyCode::User4,
            CharybdisKey::SnipingToggle => KeyCode::User5,
            CharybdisKey::DragScroll => KeyCode::User6,
            CharybdisKey::DragScrollToggle => KeyCode::User7,
        }
    }

    pub fn from_keycode(keycode: KeyCode) -> Option<Self> {
        keycode.as_user_index().and_then(CharybdisKey::from_repr)
    }

    const fn action(self) -> KeyAction {
        KeyAction::Single(Action::Key(self.keycode()))
    }
}

// Trackball keys only exist when the pointing device is enabled, they are no-ops otherwise.
#[cfg(feature = "pointing")]
pub const DRAG_SCROLL: KeyAction = CharybdisKey::DragScroll.action();
#[cfg(feature = "pointing")]
pub const DPI_FORWARD: KeyAction = CharybdisKey::DpiForward.action();
#[cfg(feature = "pointing")]
pub const SNIPER_DPI_FORWARD: KeyAction = CharybdisKey::SniperDpiForward.action();
#[cfg(feature = "pointing")]
pub const SNIPING: KeyAction = CharybdisKey::Sniping.action();

#[cfg(not(feature = "pointing"))]
pub const DRAG_SCROLL: KeyAction = KeyAction::No;
#[cfg(not(feature = "pointing"))]
pub const DPI_FORWARD: KeyAction = KeyAction::No;
#[cfg(not(feature = "pointing"))]
pub const SNIPER_DPI_FORWARD: KeyAction = KeyAction::No;
#[cfg(not(feature = "pointing"))]
pub const SNIPING: KeyAction = KeyAction::No;

const LOWER: KeyAction = mo!(Lower);
const RAISE: KeyAction = mo!(Raise);
const PT_Z: KeyAction = lt!(Pointer, Z);
const PT_SLSH: KeyAction = lt!(Pointer, Slash);

const UNASSIGNED: [[KeyAction; COL]; ROW] = [[KeyAction::No; COL]; ROW];

#[rustfmt::skip]
pub static KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = [
    // Base
    charybdis_4x6!(
        k!(Escape), k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5),           k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), k!(Minus),
        k!(Tab), k!(Q), k!(W), k!(E), k!(R), k!(T),                        k!(Y), k!(U), k!(I), k!(O), k!(P), k!(Backslash),
        k!(LShift), k!(A), k!(S), k!(D), k!(F), k!(G),                     k!(H), k!(J), k!(K), k!(L), k!(Semicolon), k!(Quote),
        k!(LCtrl), PT_Z, k!(X), k!(C), k!(V), k!(B),                       k!(N), k!(M), k!(Comma), k!(Dot), PT_SLSH, k!(LAlt),
                                   k!(LGui), k!(Space), LOWER,             RAISE, k!(Enter),
                                             k!(LAlt), k!(Backspace),      k!(Delete)
    ),
    // Lower
    charybdis_4x6!(
        shifted!(Grave), shifted!(Kc1), shifted!(Kc2), shifted!(Kc3), shifted!(Kc4), shifted!(Kc5),
        shifted!(Kc6), shifted!(Kc7), shifted!(Kc8), shifted!(Kc9), shifted!(Kc0), shifted!(Minus),
        k!(RgbModeForward), a!(No), a!(No), a!(No), a!(No), a!(No),        k!(LeftBracket), k!(Kp7), k!(Kp8), k!(Kp9), k!(RightBracket), a!(No),
        k!(RgbTog), k!(LGui), k!(LAlt), k!(LCtrl), k!(LShift), a!(No),     k!(KpPlus), k!(Kp4), k!(Kp5), k!(Kp6), k!(KpMinus), k!(KpEqual),
        k!(RgbModeReverse), a!(No), a!(No), a!(No), a!(No), a!(No),        k!(KpAsterisk), k!(Kp1), k!(Kp2), k!(Kp3), k!(KpSlash), k!(KpDot),
                                   a!(No), a!(No), a!(Transparent),        a!(No), a!(Transparent),
                                           a!(No), a!(No),                 k!(Kp0)
    ),
    // Raise
    charybdis_4x6!(
        k!(F12), k!(F1), k!(F2), k!(F3), k!(F4), k!(F5),                   k!(F6), k!(F7), k!(F8), k!(F9), k!(F10), k!(F11),
        k!(MediaNextTrack), a!(No), a!(No), a!(No), a!(No), a!(No),        a!(No), a!(No), a!(No), a!(No), a!(No), k!(AudioVolUp),
        k!(MediaPlayPause), k!(Left), k!(Up), k!(Down), k!(Right), a!(No), a!(No), k!(RShift), k!(RCtrl), k!(RAlt), k!(RGui), k!(AudioMute),
        k!(MediaPrevTrack), k!(Home), k!(PageUp), k!(PageDown), k!(End), a!(No),
        a!(No), a!(No), a!(No), a!(No), a!(No), k!(AudioVolDown),
                                   a!(Transparent), a!(Transparent), a!(No),          a!(Transparent), a!(No),
                                                    a!(Transparent), a!(Transparent), a!(No)
    ),
    // Pointer
    charybdis_4x6!(
        k!(Bootloader), k!(ClearEeprom), a!(No), a!(No), a!(No), a!(No),   a!(No), a!(No), a!(No), a!(No), k!(Bootloader), k!(ClearEeprom),
        a!(No), a!(No), a!(No), a!(No), DPI_FORWARD, SNIPER_DPI_FORWARD,   SNIPER_DPI_FORWARD, DPI_FORWARD, a!(No), a!(No), a!(No), a!(No),
        a!(No), k!(LGui), k!(LAlt), k!(LCtrl), k!(LShift), a!(No),         a!(No), k!(RShift), k!(RCtrl), k!(RAlt), k!(RGui), a!(No),
        a!(No), a!(Transparent), DRAG_SCROLL, SNIPING, a!(No), a!(No),     a!(No), a!(No), SNIPING, DRAG_SCROLL, a!(Transparent), a!(No),
                                   k!(MouseBtn2), k!(MouseBtn1), k!(MouseBtn3),     k!(MouseBtn3), k!(MouseBtn1),
                                                  a!(No), k!(MouseBtn2),            k!(MouseBtn2)
    ),
    // Extra1
    UNASSIGNED,
    // Extra2
    UNASSIGNED,
    // Extra3
    UNASSIGNED,
    // Extra4
    UNASSIGNED,
];

/// The Charybdis 4x6 keymap
pub fn default_keymap() -> CharybdisKeyMap {
    KeyMap::new(&KEYMAP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::Layer;

    #[test]
    fn test_unwired_positions() {
        for layer in Layer::ALL {
            for (row, col) in [(4, 0), (9, 0), (9, 2), (9, 5)] {
                assert_eq!(KEYMAP[layer.index()][row][col], KeyAction::No);
            }
        }
    }

    #[test]
    fn test_right_half_is_mirrored() {
        // Outer column of each half is column 0
        assert_eq!(KEYMAP[0][0][0], k!(Escape));
        assert_eq!(KEYMAP[0][5][0], k!(Minus));
        assert_eq!(KEYMAP[0][5][5], k!(Kc6));
        assert_eq!(KEYMAP[0][8][1], PT_SLSH);
        assert_eq!(KEYMAP[0][3][1], PT_Z);
    }

    #[test]
    fn test_thumb_cluster() {
        let base = &KEYMAP[0];
        assert_eq!(base[4][3], k!(LGui));
        assert_eq!(base[4][4], k!(Space));
        assert_eq!(base[4][1], LOWER);
        assert_eq!(base[4][2], k!(LAlt));
        assert_eq!(base[4][5], k!(Backspace));
        assert_eq!(base[9][1], RAISE);
        assert_eq!(base[9][3], k!(Enter));
        assert_eq!(base[9][4], k!(Delete));
    }

    #[test]
    fn test_charybdis_keycodes() {
        assert_eq!(CharybdisKey::from_keycode(KeyCode::User6), Some(CharybdisKey::DragScroll));
        assert_eq!(CharybdisKey::from_keycode(KeyCode::User8), None);
        assert_eq!(CharybdisKey::from_keycode(KeyCode::A), None);
        for idx in 0..8 {
            let key = CharybdisKey::from_repr(idx).unwrap();
            assert_eq!(CharybdisKey::from_keycode(key.keycode()), Some(key));
        }
    }
}
