//! # Charybdis Types
//!
//! Fundamental type definitions shared by the Charybdis 4x6 keymap and its hooks.
//!
//! ## Modules
//!
//! - [`action`] - Keyboard actions stored in the keymap (keys, layer switching, tap-hold)
//! - [`keycode`] - Flat keycode definitions: HID keycodes, media keys, lighting, firmware and user keycodes
//! - [`modifier`] - Modifier key combinations and the HID modifier byte
//! - [`mouse_button`] - Mouse button state
//!
//! The `charybdis` crate builds the layer table out of these types and drives
//! the layer indicator and drag-scroll hooks with them.

#![no_std]

pub mod action;
pub mod keycode;
pub mod modifier;
pub mod mouse_button;
