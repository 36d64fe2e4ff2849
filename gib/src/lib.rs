//! # gib
//!
//! gib keymap for the ErgoDox Infinity: three layers of key assignments,
//! four custom keycodes, a legacy macro callback and a layer indicator on the
//! status LEDs.
//!
//! Matrix scanning, layer switching, HID reports and persistent storage belong
//! to the firmware. The keymap exposes its tables as constants and its callbacks
//! as plain functions taking the firmware services ([`host::KeyboardHost`]) and
//! the layer state ([`state::LayerState`]) as arguments.
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod custom_keycode;
pub mod event;
pub mod host;
pub mod keyboard_macro;
pub mod keymap;
pub mod layout_macro;
pub mod light;
pub mod processor;
pub mod state;

pub use gib_types as types;

/// Constants generated from `keyboard.toml`
mod constants {
    include!(concat!(env!("OUT_DIR"), "/constants.rs"));
}

pub use constants::*;
pub use keyboard_macro::{MacroResult, action_get_macro};
pub use processor::{ProcessResult, matrix_init_user, process_record_user};
