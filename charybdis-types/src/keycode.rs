//! Complete keycode definitions.
//!
//! This module provides keycode definitions following the USB HID
//! specification, extended with lighting, firmware and user keycodes.
use strum::FromRepr;

use crate::modifier::ModifierCombination;

/// KeyCode is the internal representation of all keycodes, keyboard operations, etc.
/// Use flat representation of keycodes.
#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyCode {
    /// Reserved, no-key.
    No = 0x0000,
    /// Keyboard roll over error, too many keys are pressed simultaneously, not a physical key.
    ErrorRollover = 0x0001,
    /// Keyboard post fail error, not a physical key.
    PostFail = 0x0002,
    /// An undefined error, not a physical key.
    ErrorUndefined = 0x0003,
    /// `a` and `A`
    A = 0x0004,
    /// `b` and `B`
    B = 0x0005,
    /// `c` and `C`
    C = 0x0006,
    /// `d` and `D`
    D = 0x0007,
    /// `e` and `E`
    E = 0x0008,
    /// `f` and `F`
    F = 0x0009,
    /// `g` and `G`
    G = 0x000A,
    /// `h` and `H`
    H = 0x000B,
    /// `i` and `I`
    I = 0x000C,
    /// `j` and `J`
    J = 0x000D,
    /// `k` and `K`
    K = 0x000E,
    /// `l` and `L`
    L = 0x000F,
    /// `m` and `M`
    M = 0x0010,
    /// `n` and `N`
    N = 0x0011,
    /// `o` and `O`
    O = 0x0012,
    /// `p` and `P`
    P = 0x0013,
    /// `q` and `Q`
    Q = 0x0014,
    /// `r` and `R`
    R = 0x0015,
    /// `s` and `S`
    S = 0x0016,
    /// `t` and `T`
    T = 0x0017,
    /// `u` and `U`
    U = 0x0018,
    /// `v` and `V`
    V = 0x0019,
    /// `w` and `W`
    W = 0x001A,
    /// `x` and `X`
    X = 0x001B,
    /// `y` and `Y`
    Y = 0x001C,
    /// `z` and `Z`
    Z = 0x001D,
    /// `1` and `!`
    Kc1 = 0x001E,
    /// `2` and `@`
    Kc2 = 0x001F,
    /// `3` and `#`
    Kc3 = 0x0020,
    /// `4` and `$`
    Kc4 = 0x0021,
    /// `5` and `%`
    Kc5 = 0x0022,
    /// `6` and `^`
    Kc6 = 0x0023,
    /// `7` and `&`
    Kc7 = 0x0024,
    /// `8` and `*`
    Kc8 = 0x0025,
    /// `9` and `(`
    Kc9 = 0x0026,
    /// `0` and `)`
    Kc0 = 0x0027,
    /// `Enter`
    Enter = 0x0028,
    /// `Esc`
    Escape = 0x0029,
    /// `Backspace`
    Backspace = 0x002A,
    /// `Tab`
    Tab = 0x002B,
    /// `Space`
    Space = 0x002C,
    /// `-` and `_`
    Minus = 0x002D,
    /// `=` and `+`
    Equal = 0x002E,
    /// `[` and `{`
    LeftBracket = 0x002F,
    /// `]` and `}`
    RightBracket = 0x0030,
    /// `\` and `|`
    Backslash = 0x0031,
    /// Non-US `#` and `~`
    NonusHash = 0x0032,
    /// `;` and `:`
    Semicolon = 0x0033,
    /// `'` and `"`
    Quote = 0x0034,
    /// `~` and `\``
    Grave = 0x0035,
    /// `,` and `<`
    Comma = 0x0036,
    /// `.` and `>`
    Dot = 0x0037,
    /// `/` and `?`
    Slash = 0x0038,
    CapsLock = 0x0039,
    F1 = 0x003A,
    F2 = 0x003B,
    F3 = 0x003C,
    F4 = 0x003D,
    F5 = 0x003E,
    F6 = 0x003F,
    F7 = 0x0040,
    F8 = 0x0041,
    F9 = 0x0042,
    F10 = 0x0043,
    F11 = 0x0044,
    F12 = 0x0045,
    PrintScreen = 0x0046,
    ScrollLock = 0x0047,
    Pause = 0x0048,
    Insert = 0x0049,
    Home = 0x004A,
    PageUp = 0x004B,
    Delete = 0x004C,
    End = 0x004D,
    PageDown = 0x004E,
    Right = 0x004F,
    Left = 0x0050,
    Down = 0x0051,
    Up = 0x0052,
    NumLock = 0x0053,
    /// Keypad `/`
    KpSlash = 0x0054,
    /// Keypad `*`
    KpAsterisk = 0x0055,
    /// Keypad `-`
    KpMinus = 0x0056,
    /// Keypad `+`
    KpPlus = 0x0057,
    KpEnter = 0x0058,
    Kp1 = 0x0059,
    Kp2 = 0x005A,
    Kp3 = 0x005B,
    Kp4 = 0x005C,
    Kp5 = 0x005D,
    Kp6 = 0x005E,
    Kp7 = 0x005F,
    Kp8 = 0x0060,
    Kp9 = 0x0061,
    Kp0 = 0x0062,
    KpDot = 0x0063,
    NonusBackslash = 0x0064,
    Application = 0x0065,
    KbPower = 0x0066,
    /// Keypad `=`
    KpEqual = 0x0067,
    F13 = 0x0068,
    F14 = 0x0069,
    F15 = 0x006A,
    F16 = 0x006B,
    F17 = 0x006C,
    F18 = 0x006D,
    F19 = 0x006E,
    F20 = 0x006F,
    F21 = 0x0070,
    F22 = 0x0071,
    F23 = 0x0072,
    F24 = 0x0073,
    // Generic desktop system control, 0xA5 ~ 0xA7
    SystemPower = 0x00A5,
    SystemSleep = 0x00A6,
    SystemWake = 0x00A7,
    // Consumer page, 0xA8 ~ 0xC2
    AudioMute = 0x00A8,
    AudioVolUp = 0x00A9,
    AudioVolDown = 0x00AA,
    MediaNextTrack = 0x00AB,
    MediaPrevTrack = 0x00AC,
    MediaStop = 0x00AD,
    MediaPlayPause = 0x00AE,
    MediaSelect = 0x00AF,
    MediaEject = 0x00B0,
    Mail = 0x00B1,
    Calculator = 0x00B2,
    MyComputer = 0x00B3,
    WwwSearch = 0x00B4,
    WwwHome = 0x00B5,
    WwwBack = 0x00B6,
    WwwForward = 0x00B7,
    WwwStop = 0x00B8,
    WwwRefresh = 0x00B9,
    WwwFavorites = 0x00BA,
    MediaFastForward = 0x00BB,
    MediaRewind = 0x00BC,
    BrightnessUp = 0x00BD,
    BrightnessDown = 0x00BE,
    ControlPanel = 0x00BF,
    Assistant = 0x00C0,
    MissionControl = 0x00C1,
    Launchpad = 0x00C2,
    /// Mouse Up
    MouseUp = 0x00CD,
    /// Mouse Down
    MouseDown = 0x00CE,
    /// Mouse Left
    MouseLeft = 0x00CF,
    /// Mouse Right
    MouseRight = 0x00D0,
    /// Mouse Button 1(Left)
    MouseBtn1 = 0x00D1,
    /// Mouse Button 2(Right)
    MouseBtn2 = 0x00D2,
    /// Mouse Button 3(Middle)
    MouseBtn3 = 0x00D3,
    /// Mouse Button 4(Back)
    MouseBtn4 = 0x00D4,
    /// Mouse Button 5(Forward)
    MouseBtn5 = 0x00D5,
    MouseBtn6 = 0x00D6,
    MouseBtn7 = 0x00D7,
    MouseBtn8 = 0x00D8,
    MouseWheelUp = 0x00D9,
    MouseWheelDown = 0x00DA,
    MouseWheelLeft = 0x00DB,
    MouseWheelRight = 0x00DC,
    MouseAccel0 = 0x00DD,
    MouseAccel1 = 0x00DE,
    MouseAccel2 = 0x00DF,
    LCtrl = 0x00E0,
    LShift = 0x00E1,
    LAlt = 0x00E2,
    LGui = 0x00E3,
    RCtrl = 0x00E4,
    RShift = 0x00E5,
    RAlt = 0x00E6,
    RGui = 0x00E7,
    // RGB matrix keycodes, uses 0x620 ~ 0x63F
    RgbTog = 0x620,
    RgbModeForward = 0x621,
    RgbModeReverse = 0x622,
    RgbHui = 0x623,
    RgbHud = 0x624,
    RgbSai = 0x625,
    RgbSad = 0x626,
    RgbVai = 0x627,
    RgbVad = 0x628,
    RgbSpi = 0x629,
    RgbSpd = 0x62A,
    // Internal functional keycodes, use 0x700 ~ 0x7FF
    Bootloader = 0x700,
    Reboot = 0x701,
    DebugToggle = 0x702,
    /// Wipe the persistent configuration store
    ClearEeprom = 0x703,
    // User keycodes, use 0x840 ~ 0x85F
    User0 = 0x840,
    User1 = 0x841,
    User2 = 0x842,
    User3 = 0x843,
    User4 = 0x844,
    User5 = 0x845,
    User6 = 0x846,
    User7 = 0x847,
    User8 = 0x848,
    User9 = 0x849,
    User10 = 0x84A,
    User11 = 0x84B,
    User12 = 0x84C,
    User13 = 0x84D,
    User14 = 0x84E,
    User15 = 0x84F,
    User16 = 0x850,
    User17 = 0x851,
    User18 = 0x852,
    User19 = 0x853,
    User20 = 0x854,
    User21 = 0x855,
    User22 = 0x856,
    User23 = 0x857,
    User24 = 0x858,
    User25 = 0x859,
    User26 = 0x85A,
    User27 = 0x85B,
    User28 = 0x85C,
    User29 = 0x85D,
    User30 = 0x85E,
    User31 = 0x85F,
}

impl From<u16> for KeyCode {
    fn from(value: u16) -> Self {
        Self::from_repr(value).unwrap_or(KeyCode::No)
    }
}

impl KeyCode {
    /// Returns `true` if the keycode is a modifier keycode
    pub fn is_modifier(self) -> bool {
        KeyCode::LCtrl <= self && self <= KeyCode::RGui
    }

    /// Returns `true` if the keycode goes to the keyboard report
    pub fn is_keyboard_usage(self) -> bool {
        KeyCode::A <= self && self <= KeyCode::F24
    }

    pub fn to_hid_modifiers(self) -> ModifierCombination {
        match self {
            KeyCode::LCtrl => ModifierCombination::new_from(false, false, false, false, true),
            KeyCode::LShift => ModifierCombination::new_from(false, false, false, true, false),
            KeyCode::LAlt => ModifierCombination::new_from(false, false, true, false, false),
            KeyCode::LGui => ModifierCombination::new_from(false, true, false, false, false),
            KeyCode::RCtrl => ModifierCombination::new_from(true, false, false, false, true),
            KeyCode::RShift => ModifierCombination::new_from(true, false, false, true, false),
            KeyCode::RAlt => ModifierCombination::new_from(true, false, true, false, false),
            KeyCode::RGui => ModifierCombination::new_from(true, true, false, false, false),
            _ => ModifierCombination::new(),
        }
    }


    /// Returns `true` if the keycode is a keycode in consumer page
    pub fn is_consumer(self) -> bool {
        KeyCode::AudioMute <= self && self <= KeyCode::Launchpad
    }

    /// Returns `true` if the keycode is a mouse button keycode
    pub fn is_mouse_button(self) -> bool {
        KeyCode::MouseBtn1 <= self && self <= KeyCode::MouseBtn8
    }

    /// Returns `true` if the keycode is a rgb keycode
    pub fn is_rgb(self) -> bool {
        KeyCode::RgbTog <= self && self <= KeyCode::RgbSpd
    }

    /// Returns `true` if the keycode is a firmware keycode, such as reboot keyboard, goto bootloader, etc.
    pub fn is_firmware(self) -> bool {
        KeyCode::Bootloader <= self && self <= KeyCode::ClearEeprom
    }

    /// Returns `true` if the keycode is a user keycode
    pub fn is_user(self) -> bool {
        KeyCode::User0 <= self && self <= KeyCode::User31
    }

    /// Convert a keycode to user keycode index
    pub fn as_user_index(self) -> Option<u8> {
        if self.is_user() {
            Some((self as u16 & 0x1F) as u8)
        } else {
            None
        }
    }

    /// Bit index of a mouse button keycode in the mouse report
    pub fn as_mouse_button_index(self) -> Option<u8> {
        if self.is_mouse_button() {
            Some((self as u16 - KeyCode::MouseBtn1 as u16) as u8)
        } else {
            None
        }
    }

    /// Convert a keycode to usb hid media key
    pub fn as_consumer_control_usage_id(self) -> ConsumerKey {
        match self {
            KeyCode::AudioMute => ConsumerKey::Mute,
            KeyCode::AudioVolUp => ConsumerKey::VolumeIncrement,
            KeyCode::AudioVolDown => ConsumerKey::VolumeDecrement,
            KeyCode::MediaNextTrack => ConsumerKey::NextTrack,
            KeyCode::MediaPrevTrack => ConsumerKey::PrevTrack,
            KeyCode::MediaStop => ConsumerKey::StopPlay,
            KeyCode::MediaPlayPause => ConsumerKey::PlayPause,
            KeyCode::MediaSelect => ConsumerKey::Record,
            KeyCode::MediaEject => ConsumerKey::Eject,
            KeyCode::Mail => ConsumerKey::Email,
            KeyCode::Calculator => ConsumerKey::Calculator,
            KeyCode::MyComputer => ConsumerKey::LocalBrowser,
            KeyCode::WwwSearch => ConsumerKey::Search,
            KeyCode::WwwHome => ConsumerKey::Home,
            KeyCode::WwwBack => ConsumerKey::Back,
            KeyCode::WwwForward => ConsumerKey::Forward,
            KeyCode::WwwStop => ConsumerKey::Stop,
            KeyCode::WwwRefresh => ConsumerKey::Refresh,
            KeyCode::WwwFavorites => ConsumerKey::Bookmarks,
            KeyCode::MediaFastForward => ConsumerKey::FastForward,
            KeyCode::MediaRewind => ConsumerKey::Rewind,
            KeyCode::BrightnessUp => ConsumerKey::BrightnessUp,
            KeyCode::BrightnessDown => ConsumerKey::BrightnessDown,
            KeyCode::ControlPanel => ConsumerKey::ControlPanel,
            KeyCode::Assistant => ConsumerKey::Assistant,
            KeyCode::MissionControl => ConsumerKey::DesktopShowAllWindows,
            KeyCode::Launchpad => ConsumerKey::AcSoftKeyLeft,
            _ => ConsumerKey::No,
        }
    }
}

/// Keys in consumer page
/// Ref: <https://www.usb.org/sites/default/files/hut1_5.pdf#page=157>
#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsumerKey {
    No = 0x00,
    // 15.5 Display Controls
    SnapShot = 0x65,
    BrightnessUp = 0x6F,
    BrightnessDown = 0x70,
    // 15.7 Transport Controls
    Play = 0xB0,
    Pause = 0xB1,
    Record = 0xB2,
    FastForward = 0xB3,
    Rewind = 0xB4,
    NextTrack = 0xB5,
    PrevTrack = 0xB6,
    StopPlay = 0xB7,
    Eject = 0xB8,
    RandomPlay = 0xB9,
    Repeat = 0xBC,
    StopEject = 0xCC,
    PlayPause = 0xCD,
    // 15.9.1 Audio Controls - Volume
    Mute = 0xE2,
    VolumeIncrement = 0xE9,
    VolumeDecrement = 0xEA,
    // 15.15 Application Launch Buttons
    Email = 0x18A,
    Calculator = 0x192,
    LocalBrowser = 0x194,
    ControlPanel = 0x19F,
    Assistant = 0x1CB,
    // 15.16 Generic GUI Application Controls
    Search = 0x221,
    Home = 0x223,
    Back = 0x224,
    Forward = 0x225,
    Stop = 0x226,
    Refresh = 0x227,
    Bookmarks = 0x22A,
    DesktopShowAllWindows = 0x29F,
    AcSoftKeyLeft = 0x2A0,
}

impl ConsumerKey {
    /// Usage id in the consumer page
    pub const fn usage_id(self) -> u16 {
        self as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keycode_ranges() {
        assert!(KeyCode::LShift.is_modifier());
        assert!(!KeyCode::Z.is_modifier());
        assert!(KeyCode::MediaPlayPause.is_consumer());
        assert!(KeyCode::RgbModeReverse.is_rgb());
        assert!(KeyCode::ClearEeprom.is_firmware());
        assert!(KeyCode::MouseBtn3.is_mouse_button());
        assert!(!KeyCode::MouseUp.is_mouse_button());
        assert!(KeyCode::Kp0.is_keyboard_usage());
        assert!(!KeyCode::AudioMute.is_keyboard_usage());
    }

    #[test]
    fn test_user_and_mouse_indices() {
        assert_eq!(KeyCode::User0.as_user_index(), Some(0));
        assert_eq!(KeyCode::User4.as_user_index(), Some(4));
        assert_eq!(KeyCode::A.as_user_index(), None);
        assert_eq!(KeyCode::MouseBtn1.as_mouse_button_index(), Some(0));
        assert_eq!(KeyCode::MouseBtn3.as_mouse_button_index(), Some(2));
        assert_eq!(KeyCode::MouseUp.as_mouse_button_index(), None);
    }

    #[test]
    fn test_from_u16() {
        assert_eq!(KeyCode::from(0x0004), KeyCode::A);
        assert_eq!(KeyCode::from(0x0703), KeyCode::ClearEeprom);
        // Gaps in the table map to `No`
        assert_eq!(KeyCode::from(0x0080), KeyCode::No);
    }

    #[test]
    fn test_consumer_usage() {
        assert_eq!(KeyCode::AudioVolUp.as_consumer_control_usage_id(), ConsumerKey::VolumeIncrement);
        assert_eq!(KeyCode::MediaNextTrack.as_consumer_control_usage_id().usage_id(), 0xB5);
        assert_eq!(KeyCode::A.as_consumer_control_usage_id(), ConsumerKey::No);
    }
}
