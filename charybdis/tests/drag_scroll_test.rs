#![cfg(feature = "pointing")]

mod common;

use charybdis::action::KeyAction;
use charybdis::config::PointingConfig;
use charybdis::keymap::{DRAG_SCROLL, SNIPING};
use charybdis::mouse_button::MouseButtons;
use charybdis::pointing::{DragScroll, PointerReport};
use charybdis::{a, k, lt, mo};

fn report(x: i16, y: i16) -> PointerReport {
    PointerReport {
        x,
        y,
        h: 3,
        v: -4,
        buttons: MouseButtons::BUTTON1 | MouseButtons::BUTTON3,
    }
}

fn active_drag_scroll() -> DragScroll {
    let mut drag_scroll = DragScroll::new(&PointingConfig::default());
    assert!(!drag_scroll.process_record(DRAG_SCROLL, true));
    drag_scroll
}

#[test]
fn test_press_and_release_are_consumed() {
    let mut drag_scroll = DragScroll::new(&PointingConfig::default());
    assert!(!drag_scroll.is_active());

    assert!(!drag_scroll.process_record(DRAG_SCROLL, true));
    assert!(drag_scroll.is_active());

    assert!(!drag_scroll.process_record(DRAG_SCROLL, false));
    assert!(!drag_scroll.is_active());
}

#[test]
fn test_other_keys_are_not_consumed() {
    let mut drag_scroll = active_drag_scroll();
    for action in [k!(A), SNIPING, mo!(Pointer), lt!(Pointer, Z), a!(No), a!(Transparent), k!(User7)] {
        assert!(drag_scroll.process_record(action, true));
        assert!(drag_scroll.process_record(action, false));
        assert!(drag_scroll.is_active());
    }
}

#[test]
fn test_inactive_report_is_untouched() {
    let drag_scroll = DragScroll::new(&PointingConfig::default());
    for input in [report(10, -10), report(0, 0), report(-300, 1000)] {
        assert_eq!(drag_scroll.pointing_device_task(input), input);
    }
}

#[test]
fn test_vertical_motion_scrolls() {
    let drag_scroll = active_drag_scroll();

    let output = drag_scroll.pointing_device_task(report(7, 10));
    assert_eq!(
        output,
        PointerReport {
            x: 0,
            y: 0,
            h: 0,
            v: 3,
            buttons: MouseButtons::BUTTON1 | MouseButtons::BUTTON3,
        }
    );

    // Ceiling of -2.5 is -2
    let output = drag_scroll.pointing_device_task(report(-7, -10));
    assert_eq!(output.v, -2);
    assert_eq!((output.x, output.y, output.h), (0, 0, 0));

    let output = drag_scroll.pointing_device_task(report(0, 0));
    assert_eq!((output.x, output.y, output.h, output.v), (0, 0, 0, 0));
}

#[test]
fn test_no_accumulation() {
    let drag_scroll = active_drag_scroll();
    let once = drag_scroll.pointing_device_task(report(12, 10));
    let twice = drag_scroll.pointing_device_task(once);
    assert_eq!((twice.x, twice.y, twice.h, twice.v), (0, 0, 0, 0));
    assert_eq!(twice.buttons, once.buttons);
    assert_eq!(drag_scroll.pointing_device_task(once), twice);
}

#[test]
fn test_wide_motion_wraps() {
    let drag_scroll = active_drag_scroll();
    assert_eq!(drag_scroll.pointing_device_task(report(0, 1000)).v, -6);
}

#[test]
fn test_trigger_is_user_keycode() {
    assert_ne!(DRAG_SCROLL, KeyAction::No);
    assert_eq!(DRAG_SCROLL, k!(User6));
}
