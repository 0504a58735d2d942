//! Reports produced by the keyboard driver.
use usbd_hid::descriptor::{KeyboardReport, MediaKeyboardReport, MouseReport};

use crate::keycode::KeyCode;

pub enum Report {
    /// Normal keyboard hid report
    KeyboardReport(KeyboardReport),
    /// Mouse hid report
    MouseReport(MouseReport),
    /// Media keyboard report
    MediaKeyboardReport(MediaKeyboardReport),
    /// A keycode handled by the firmware itself rather than sent to the host:
    /// bootloader, persistent config wipe, RGB matrix control and pointing device keycodes
    Firmware(KeyCode),
}
