//! Pointer reports and the drag-scroll mode of the trackball.
use usbd_hid::descriptor::MouseReport;

use crate::action::KeyAction;
use crate::config::PointingConfig;
use crate::keymap::DRAG_SCROLL;
use crate::mouse_button::MouseButtons;

/// A mouse report as produced by the pointing device, before it is sent to the host.
///
/// Cursor motion is carried as `i16`, it's clamped to `i8` when converted into the HID report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PointerReport {
    /// Horizontal cursor motion
    pub x: i16,
    /// Vertical cursor motion
    pub y: i16,
    /// Horizontal wheel motion
    pub h: i8,
    /// Vertical wheel motion
    pub v: i8,
    pub buttons: MouseButtons,
}

impl From<PointerReport> for MouseReport {
    fn from(report: PointerReport) -> Self {
        MouseReport {
            buttons: report.buttons.into_bits(),
            x: report.x.clamp(i8::MIN as i16, i8::MAX as i16) as i8,
            y: report.y.clamp(i8::MIN as i16, i8::MAX as i16) as i8,
            wheel: report.v,
            pan: report.h,
        }
    }
}

/// Drag-scroll: while the drag-scroll key is held, vertical motion scrolls instead of moving the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DragScroll {
    active: bool,
    divisor: u8,
    trigger: KeyAction,
}

impl DragScroll {
    pub fn new(config: &PointingConfig) -> Self {
        Self::with_trigger(config, DRAG_SCROLL)
    }

    /// Drag-scroll toggled by a custom key action
    pub fn with_trigger(config: &PointingConfig, trigger: KeyAction) -> Self {
        Self {
            active: false,
            divisor: config.drag_scroll_divisor.max(1),
            trigger,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Track the drag-scroll key.
    ///
    /// Returns `false` when the event is consumed, `true` when the host should keep processing it.
    pub fn process_record(&mut self, action: KeyAction, pressed: bool) -> bool {
        if action.is_empty() || action != self.trigger {
            return true;
        }

        trace!("Drag scroll: {}", pressed);
        self.active = pressed;
        false
    }

    /// Turn vertical motion into wheel motion while drag-scroll is active.
    ///
    /// The wheel value is the vertical motion divided by the divisor, rounded up. The result is
    /// truncated into the wheel's `i8`, so very large motions wrap.
    pub fn pointing_device_task(&self, report: PointerReport) -> PointerReport {
        if !self.active {
            return report;
        }

        let divisor = self.divisor as i32;
        let v = (report.y as i32 + divisor - 1).div_euclid(divisor);
        PointerReport {
            x: 0,
            y: 0,
            h: 0,
            v: v as i8,
            buttons: report.buttons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::k;

    fn scroll(y: i16) -> i8 {
        let mut drag_scroll = DragScroll::with_trigger(&PointingConfig::default(), k!(User6));
        drag_scroll.process_record(k!(User6), true);
        drag_scroll
            .pointing_device_task(PointerReport {
                y,
                ..Default::default()
            })
            .v
    }

    #[test]
    fn test_rounds_up() {
        assert_eq!(scroll(10), 3);
        assert_eq!(scroll(-10), -2);
        assert_eq!(scroll(0), 0);
        assert_eq!(scroll(1), 1);
        assert_eq!(scroll(-1), 0);
        assert_eq!(scroll(4), 1);
        assert_eq!(scroll(-4), -1);
        assert_eq!(scroll(-5), -1);
        assert_eq!(scroll(127), 32);
        assert_eq!(scroll(-128), -32);
    }

    #[test]
    fn test_wide_motion_wraps() {
        // 1000 / 4 = 250, which wraps to -6 in the wheel byte
        assert_eq!(scroll(1000), -6);
        // 8192 is a multiple of 256
        assert_eq!(scroll(i16::MAX), 0);
    }

    #[test]
    fn test_custom_divisor() {
        let config = PointingConfig { drag_scroll_divisor: 2 };
        let mut drag_scroll = DragScroll::with_trigger(&config, k!(User6));
        drag_scroll.process_record(k!(User6), true);
        let report = drag_scroll.pointing_device_task(PointerReport {
            y: -3,
            ..Default::default()
        });
        assert_eq!(report.v, -1);

        // Zero divisor is treated as 1
        let drag_scroll = DragScroll::with_trigger(&PointingConfig { drag_scroll_divisor: 0 }, k!(User6));
        assert_eq!(drag_scroll.divisor, 1);
    }

    #[test]
    fn test_empty_trigger_never_matches() {
        let mut drag_scroll = DragScroll::with_trigger(&PointingConfig::default(), KeyAction::No);
        assert!(drag_scroll.process_record(KeyAction::No, true));
        assert!(!drag_scroll.is_active());
    }

    #[test]
    fn test_into_mouse_report() {
        let report: MouseReport = PointerReport {
            x: 300,
            y: -300,
            h: -2,
            v: 5,
            buttons: MouseButtons::BUTTON2,
        }
        .into();
        assert_eq!(report.x, 127);
        assert_eq!(report.y, -128);
        assert_eq!(report.wheel, 5);
        assert_eq!(report.pan, -2);
        assert_eq!(report.buttons, 0b10);
    }
}
