#![allow(dead_code)]

use charybdis::config::CharybdisConfig;
use charybdis::hid::Report;
use charybdis::hooks::CharybdisHooks;
use charybdis::keymap::{COL, ROW};
use charybdis::light::{Hsv, RgbMatrixDriver, RgbMatrixMode};
use charybdis::{Keyboard, NUM_LAYER, default_keymap};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub const KC_LSHIFT: u8 = 1 << 1;
pub const KC_LCTRL: u8 = 1 << 0;
pub const KC_LGUI: u8 = 1 << 3;

/// A call to the RGB matrix driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgbCall {
    Enable,
    Disable,
    Mode(RgbMatrixMode),
    SetHsv(Hsv),
}

/// RGB matrix driver recording every call
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub calls: Vec<RgbCall>,
}

impl RgbMatrixDriver for RecordingDriver {
    fn enable_noeeprom(&mut self) {
        self.calls.push(RgbCall::Enable);
    }

    fn disable_noeeprom(&mut self) {
        self.calls.push(RgbCall::Disable);
    }

    fn mode_noeeprom(&mut self, mode: RgbMatrixMode) {
        self.calls.push(RgbCall::Mode(mode));
    }

    fn sethsv_noeeprom(&mut self, hsv: Hsv) {
        self.calls.push(RgbCall::SetHsv(hsv));
    }
}

/// Calls that paint the whole matrix with a dim layer color
pub fn layer_color_calls(hue: u8, sat: u8) -> [RgbCall; 3] {
    [
        RgbCall::Enable,
        RgbCall::Mode(RgbMatrixMode::None),
        RgbCall::SetHsv(Hsv { hue, sat, val: 26 }),
    ]
}

pub type TestKeyboard = Keyboard<'static, CharybdisHooks<RecordingDriver>, ROW, COL, NUM_LAYER>;

pub fn create_test_keyboard() -> TestKeyboard {
    let hooks = CharybdisHooks::new(RecordingDriver::default(), &CharybdisConfig::default());
    Keyboard::new(default_keymap(), hooks)
}

#[cfg(feature = "rgb_matrix")]
pub fn rgb_calls(keyboard: &TestKeyboard) -> &[RgbCall] {
    &keyboard.hooks().indicator().driver().calls
}

/// `(modifier, keycodes)` of a keyboard report
pub fn keyboard_report(report: &Report) -> Option<(u8, [u8; 6])> {
    match report {
        Report::KeyboardReport(r) => Some((r.modifier, r.keycodes)),
        _ => None,
    }
}

/// `(buttons, x, y, wheel, pan)` of a mouse report
pub fn mouse_report(report: &Report) -> Option<(u8, i8, i8, i8, i8)> {
    match report {
        Report::MouseReport(r) => Some((r.buttons, r.x, r.y, r.wheel, r.pan)),
        _ => None,
    }
}

pub fn media_usage(report: &Report) -> Option<u16> {
    match report {
        Report::MediaKeyboardReport(r) => Some(r.usage_id),
        _ => None,
    }
}
