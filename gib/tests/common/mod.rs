#![allow(dead_code)]

use gib::host::KeyboardHost;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// A call made by the keymap into the firmware
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    SendString(String),
    ResetPersistentConfig,
    SetRgblightMode(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostError;

/// Firmware stand-in that records every call
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
    /// Make every call fail
    pub fail: bool,
}

impl RecordingHost {
    pub fn failing() -> Self {
        Self {
            calls: Vec::new(),
            fail: true,
        }
    }

    pub fn resets(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| **c == HostCall::ResetPersistentConfig)
            .count()
    }

    fn record(&mut self, call: HostCall) -> Result<(), HostError> {
        if self.fail {
            return Err(HostError);
        }
        self.calls.push(call);
        Ok(())
    }
}

impl KeyboardHost for RecordingHost {
    type Error = HostError;

    fn send_string(&mut self, s: &str) -> Result<(), Self::Error> {
        self.record(HostCall::SendString(s.to_string()))
    }

    fn reset_persistent_config(&mut self) -> Result<(), Self::Error> {
        self.record(HostCall::ResetPersistentConfig)
    }

    fn set_rgblight_mode(&mut self, mode: u8) -> Result<(), Self::Error> {
        self.record(HostCall::SetRgblightMode(mode))
    }
}
