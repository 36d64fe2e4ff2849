//! # gib types
//!
//! Fundamental type definitions shared by the `gib` keymap and its tooling.
//!
//! ## Modules
//!
//! - [`action`] - Key actions stored in the layer tables (keys, layer switches, tap-hold)
//! - [`keycode`] - Flat keycode definitions, including mouse, media and user keycodes
//! - [`modifier`] - Modifier key combinations
//! - [`status_led`] - Status LED states driven by the active layer

#![no_std]

pub mod action;
pub mod keycode;
pub mod modifier;
pub mod status_led;
