//! Host-side keyboard driver.
//!
//! The driver plays the role of the firmware around the keymap: it resolves key events through
//! the active layers, hands every transition to the hooks and turns the outcome into HID reports.
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::{Receiver, Sender};
use heapless::Vec;
use usbd_hid::descriptor::{KeyboardReport, MediaKeyboardReport};

use crate::REPORT_BUFFER_SIZE;
use crate::action::{Action, KeyAction};
use crate::event::{Event, KeyboardEvent, MotionEvent};
use crate::hid::Report;
use crate::hooks::KeyboardHooks;
use crate::keycode::KeyCode;
use crate::keymap::{CharybdisKey, KeyMap};
use crate::layer::LayerState;
use crate::modifier::{HidModifiers, ModifierCombination};
use crate::mouse_button::MouseButtons;
use crate::pointing::PointerReport;

/// Reports produced by a single key event
pub type Reports = Vec<Report, REPORT_BUFFER_SIZE>;

/// A tap-hold key that is pressed and not yet decided
#[derive(Debug, Clone, Copy)]
struct PendingTapHold {
    row: u8,
    col: u8,
    tap: Action,
    hold: Action,
}

pub struct Keyboard<'a, H: KeyboardHooks, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    keymap: KeyMap<'a, ROW, COL, NUM_LAYER>,

    hooks: H,

    /// Active layers
    layer_state: LayerState,

    /// Layer that resolved each pressed key, the release is looked up in the same layer
    layer_cache: [[u8; COL]; ROW],

    /// Tap-hold key waiting for its decision
    pending_tap_hold: Option<PendingTapHold>,

    /// Registered key codes
    held_keycodes: [KeyCode; 6],

    /// Modifiers from modifier keys
    held_modifiers: HidModifiers,

    /// Modifiers attached to a key, e.g. the shift of a shifted key
    with_modifiers: HidModifiers,

    /// Pressed mouse buttons
    mouse_buttons: MouseButtons,
}

impl<'a, H: KeyboardHooks, const ROW: usize, const COL: usize, const NUM_LAYER: usize>
    Keyboard<'a, H, ROW, COL, NUM_LAYER>
{
    /// Create the keyboard and run the `keyboard_post_init` hook.
    pub fn new(keymap: KeyMap<'a, ROW, COL, NUM_LAYER>, hooks: H) -> Self {
        let mut keyboard = Self {
            keymap,
            hooks,
            layer_state: LayerState::new(),
            layer_cache: [[0; COL]; ROW],
            pending_tap_hold: None,
            held_keycodes: [KeyCode::No; 6],
            held_modifiers: HidModifiers::new(),
            with_modifiers: HidModifiers::new(),
            mouse_buttons: MouseButtons::new(),
        };
        keyboard.hooks.keyboard_post_init();
        keyboard
    }

    pub fn keymap(&self) -> &KeyMap<'a, ROW, COL, NUM_LAYER> {
        &self.keymap
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    pub fn layer_state(&self) -> LayerState {
        self.layer_state
    }

    pub fn mouse_buttons(&self) -> MouseButtons {
        self.mouse_buttons
    }

    /// Main loop: read events, send reports.
    ///
    /// Reports that don't fit in the report channel are dropped.
    pub async fn run<M: RawMutex, const N: usize, const R: usize>(
        &mut self,
        events: Receiver<'_, M, Event, N>,
        reports: Sender<'_, M, Report, R>,
    ) {
        info!("Keyboard started");
        loop {
            match events.receive().await {
                Event::Key(event) => {
                    for report in self.process_key(event) {
                        send_report(&reports, report);
                    }
                }
                Event::Motion(event) => {
                    let report = self.process_motion(event);
                    send_report(&reports, report);
                }
            }
        }
    }

    /// Process a key transition, returns the reports it produces.
    pub fn process_key(&mut self, event: KeyboardEvent) -> Reports {
        let mut reports = Reports::new();

        if event.row as usize >= ROW || event.col as usize >= COL {
            warn!("Ignoring key event: ({}, {}) is out of the matrix", event.row, event.col);
            return reports;
        }

        if event.pressed {
            self.decide_tap_hold(event, &mut reports);
        }

        let Some(action) = self.action_of(event) else {
            return reports;
        };

        debug!(
            "Key ({}, {}) {}: {:?}",
            event.row,
            event.col,
            if event.pressed { "pressed" } else { "released" },
            action
        );

        if !self.hooks.process_record(action, event.pressed) {
            trace!("Key action consumed by hooks");
            return reports;
        }

        match action {
            KeyAction::No | KeyAction::Transparent => {}
            KeyAction::Single(a) => self.process_action(a, event.pressed, &mut reports),
            KeyAction::Tap(a) => {
                if event.pressed {
                    self.process_action(a, true, &mut reports);
                    self.process_action(a, false, &mut reports);
                }
            }
            KeyAction::TapHold(tap, hold) => self.process_tap_hold(event, tap, hold, &mut reports),
        }

        reports
    }

    /// Process trackball motion, returns the mouse report to send.
    pub fn process_motion(&mut self, event: MotionEvent) -> Report {
        self.pointer_report(event.dx, event.dy)
    }

    /// Resolve the action of a key event inside the matrix.
    ///
    /// A press is resolved through the active layers and the resolving layer is cached,
    /// a release is looked up in the cached layer.
    fn action_of(&mut self, event: KeyboardEvent) -> Option<KeyAction> {
        let row = event.row as usize;
        let col = event.col as usize;

        if event.pressed {
            match self.keymap.resolve(self.layer_state, row, col) {
                Ok((layer, action)) => {
                    self.layer_cache[row][col] = layer;
                    Some(action)
                }
                Err(e) => {
                    warn!("Ignoring key event: {:?}", e);
                    None
                }
            }
        } else {
            // Releasing a pressed key, use cached layer and restore the cache
            let layer = core::mem::take(&mut self.layer_cache[row][col]);
            match self.keymap.try_action_at(layer, row, col) {
                Ok(action) => Some(action),
                Err(e) => {
                    warn!("Ignoring key event: {:?}", e);
                    None
                }
            }
        }
    }

    /// Pressing another key while a tap-hold key is pending triggers its hold action.
    fn decide_tap_hold(&mut self, event: KeyboardEvent, reports: &mut Reports) {
        if let Some(pending) = self.pending_tap_hold {
            if pending.row != event.row || pending.col != event.col {
                debug!("Tap-hold ({}, {}) resolved as hold", pending.row, pending.col);
                self.pending_tap_hold = None;
                self.process_action(pending.hold, true, reports);
            }
        }
    }

    fn process_tap_hold(&mut self, event: KeyboardEvent, tap: Action, hold: Action, reports: &mut Reports) {
        if event.pressed {
            self.pending_tap_hold = Some(PendingTapHold {
                row: event.row,
                col: event.col,
                tap,
                hold,
            });
            return;
        }

        match self.pending_tap_hold {
            Some(pending) if pending.row == event.row && pending.col == event.col => {
                // Released before any other key was pressed, it's a tap
                debug!("Tap-hold ({}, {}) resolved as tap", event.row, event.col);
                self.pending_tap_hold = None;
                self.process_action(pending.tap, true, reports);
                self.process_action(pending.tap, false, reports);
            }
            _ => self.process_action(hold, false, reports),
        }
    }

    fn process_action(&mut self, action: Action, pressed: bool, reports: &mut Reports) {
        match action {
            Action::No | Action::Transparent => {}
            Action::Key(key) => self.process_key_code(key, pressed, reports),
            Action::Modifier(modifiers) => {
                self.held_modifiers = update_modifiers(self.held_modifiers, modifiers, pressed);
                push_report(reports, self.keyboard_report());
            }
            Action::KeyWithModifier(key, modifiers) => {
                self.with_modifiers = update_modifiers(self.with_modifiers, modifiers, pressed);
                self.process_key_code(key, pressed, reports);
            }
            Action::LayerOn(layer_num) => {
                if pressed {
                    self.activate_layer(layer_num);
                } else {
                    self.deactivate_layer(layer_num);
                }
            }
            Action::LayerOff(layer_num) => {
                if pressed {
                    self.deactivate_layer(layer_num);
                }
            }
            Action::LayerToggle(layer_num) => {
                if pressed {
                    self.toggle_layer(layer_num);
                }
            }
        }
    }

    fn process_key_code(&mut self, key: KeyCode, pressed: bool, reports: &mut Reports) {
        if key == KeyCode::No {
            return;
        }

        if key.is_modifier() {
            self.held_modifiers = update_modifiers(self.held_modifiers, key.to_hid_modifiers(), pressed);
            push_report(reports, self.keyboard_report());
        } else if key.is_keyboard_usage() {
            if pressed {
                self.register_key(key);
            } else {
                self.unregister_key(key);
            }
            push_report(reports, self.keyboard_report());
        } else if key.is_consumer() {
            let usage_id = if pressed {
                key.as_consumer_control_usage_id().usage_id()
            } else {
                0
            };
            push_report(reports, Report::MediaKeyboardReport(MediaKeyboardReport { usage_id }));
        } else if let Some(index) = key.as_mouse_button_index() {
            let button = MouseButtons::from_index(index);
            if pressed {
                self.mouse_buttons |= button;
            } else {
                self.mouse_buttons &= !button;
            }
            let report = self.pointer_report(0, 0);
            push_report(reports, report);
        } else if key.is_firmware() || key.is_rgb() || key.is_user() {
            if pressed {
                match CharybdisKey::from_keycode(key) {
                    Some(trackball_key) => info!("Trackball key: {:?}", trackball_key),
                    None => info!("Firmware key: {:?}", key),
                }
                push_report(reports, Report::Firmware(key));
            }
        } else {
            debug!("Unsupported keycode: {:?}", key);
        }
    }

    fn register_key(&mut self, key: KeyCode) {
        if self.held_keycodes.contains(&key) {
            return;
        }
        match self.held_keycodes.iter_mut().find(|k| **k == KeyCode::No) {
            Some(slot) => *slot = key,
            None => warn!("Keyboard report is full, {:?} is not sent", key),
        }
    }

    fn unregister_key(&mut self, key: KeyCode) {
        if let Some(slot) = self.held_keycodes.iter_mut().find(|k| **k == key) {
            *slot = KeyCode::No;
        }
    }

    fn keyboard_report(&self) -> Report {
        Report::KeyboardReport(KeyboardReport {
            modifier: (self.held_modifiers | self.with_modifiers).into_bits(),
            reserved: 0,
            leds: 0,
            keycodes: self.held_keycodes.map(|k| k as u8),
        })
    }

    /// Build a mouse report with the current buttons, passed through the pointing hook
    fn pointer_report(&mut self, x: i16, y: i16) -> Report {
        let report = PointerReport {
            x,
            y,
            h: 0,
            v: 0,
            buttons: self.mouse_buttons,
        };
        let report = self.hooks.pointing_device_task(report);
        Report::MouseReport(report.into())
    }

    /// Activate given layer
    fn activate_layer(&mut self, layer_num: u8) {
        if !self.is_valid_layer(layer_num) {
            return;
        }
        let mut state = self.layer_state;
        state.on(layer_num);
        self.set_layer_state(state);
    }

    /// Deactivate given layer
    fn deactivate_layer(&mut self, layer_num: u8) {
        if !self.is_valid_layer(layer_num) {
            return;
        }
        let mut state = self.layer_state;
        state.off(layer_num);
        self.set_layer_state(state);
    }

    /// Toggle given layer
    fn toggle_layer(&mut self, layer_num: u8) {
        if !self.is_valid_layer(layer_num) {
            return;
        }
        let mut state = self.layer_state;
        state.toggle(layer_num);
        self.set_layer_state(state);
    }

    fn is_valid_layer(&self, layer_num: u8) -> bool {
        if layer_num as usize >= NUM_LAYER || layer_num >= LayerState::CAPACITY {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return false;
        }
        true
    }

    /// Apply a new layer state through the `layer_state_set` hook
    fn set_layer_state(&mut self, state: LayerState) {
        if state == self.layer_state {
            return;
        }
        self.layer_state = self.hooks.layer_state_set(state);
        debug!("Layer state: {}", self.layer_state.bits());
    }
}

fn update_modifiers(current: HidModifiers, modifiers: ModifierCombination, pressed: bool) -> HidModifiers {
    let bits = modifiers.to_hid_modifiers().into_bits();
    if pressed {
        HidModifiers::from_bits(current.into_bits() | bits)
    } else {
        HidModifiers::from_bits(current.into_bits() & !bits)
    }
}

fn push_report(reports: &mut Reports, report: Report) {
    if reports.push(report).is_err() {
        error!("Report buffer is full, report dropped");
    }
}

fn send_report<M: RawMutex, const R: usize>(reports: &Sender<'_, M, Report, R>, report: Report) {
    if reports.try_send(report).is_err() {
        error!("Report channel is full, report dropped");
    }
}
