//! # Charybdis
//!
//! Keymap and user hooks for the Charybdis 4x6 split keyboard with an integrated trackball.
//!
//! The crate provides:
//! - [`keymap`]: the eight-layer layout table, laid out over the 10 x 6 matrix
//! - [`light`]: the layer indicator, which paints the RGB matrix with one dim color per layer
//! - [`pointing`]: drag-scroll, which turns trackball motion into wheel motion while a key is held
//! - [`hooks`]: the host callback contract and the Charybdis implementation of it
//! - [`keyboard`]: a host-side driver feeding key and motion events through the keymap and the hooks
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
pub mod error;
pub mod event;
pub mod hid;
pub mod hooks;
pub mod keyboard;
pub mod keymap;
pub mod layer;
pub mod layout_macro;
pub mod light;
pub mod pointing;

pub use charybdis_types::{action, keycode, modifier, mouse_button};

pub use config::CharybdisConfig;
pub use error::KeyMapError;
pub use hooks::{CharybdisHooks, KeyboardHooks};
pub use keyboard::Keyboard;
pub use keymap::{KeyMap, default_keymap};
pub use layer::{Layer, LayerState, NUM_LAYER};

/// Size of the report buffer produced by a single key event
pub const REPORT_BUFFER_SIZE: usize = 4;
