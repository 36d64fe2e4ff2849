pub mod common;

use gib::custom_keycode::CustomKeycode;
use gib::event::KeyEvent;
use gib::processor::UserAction;
use gib::types::keycode::KeyCode;
use gib::{FIRMWARE_VERSION, IDENTIFICATION, ProcessResult, matrix_init_user, process_record_user};

use crate::common::{HostCall, HostError, RecordingHost};

const PRESS: KeyEvent = KeyEvent::pressed(0, 0);
const RELEASE: KeyEvent = KeyEvent::released(0, 0);

#[test]
fn test_identification_string() {
    assert_eq!(IDENTIFICATION, format!("ergodox_infinity/gib @ {}", FIRMWARE_VERSION));
    assert_eq!(FIRMWARE_VERSION, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_version_key() {
    let mut host = RecordingHost::default();
    let vrsn = CustomKeycode::Vrsn.keycode();

    assert_eq!(process_record_user(vrsn, PRESS, &mut host), Ok(ProcessResult::Handled));
    assert_eq!(host.calls, vec![HostCall::SendString(IDENTIFICATION.to_string())]);

    assert_eq!(process_record_user(vrsn, RELEASE, &mut host), Ok(ProcessResult::Handled));
    assert_eq!(host.calls.len(), 1);
}

#[test]
fn test_eeprom_reset_once_per_press() {
    let mut host = RecordingHost::default();
    let eprm = CustomKeycode::Eprm.keycode();

    for expected in 1..=3 {
        assert_eq!(process_record_user(eprm, PRESS, &mut host), Ok(ProcessResult::Handled));
        assert_eq!(host.resets(), expected);
        assert_eq!(process_record_user(eprm, RELEASE, &mut host), Ok(ProcessResult::Handled));
        assert_eq!(host.resets(), expected);
    }
    assert_eq!(host.calls.len(), 3);
}

#[cfg(feature = "rgblight")]
#[test]
fn test_rgb_solid_key() {
    use gib::RGBLIGHT_SOLID_MODE;

    let mut host = RecordingHost::default();
    let rgb_sld = CustomKeycode::RgbSld.keycode();

    assert_eq!(RGBLIGHT_SOLID_MODE, 1);
    assert_eq!(process_record_user(rgb_sld, PRESS, &mut host), Ok(ProcessResult::Handled));
    assert_eq!(host.calls, vec![HostCall::SetRgblightMode(RGBLIGHT_SOLID_MODE)]);

    assert_eq!(process_record_user(rgb_sld, RELEASE, &mut host), Ok(ProcessResult::Handled));
    assert_eq!(host.calls.len(), 1);
}

#[cfg(not(feature = "rgblight"))]
#[test]
fn test_rgb_solid_key_without_rgblight() {
    let mut host = RecordingHost::default();
    let rgb_sld = CustomKeycode::RgbSld.keycode();

    assert_eq!(process_record_user(rgb_sld, PRESS, &mut host), Ok(ProcessResult::Handled));
    assert_eq!(process_record_user(rgb_sld, RELEASE, &mut host), Ok(ProcessResult::Handled));
    assert!(host.calls.is_empty());

    // The failing host is never reached either
    let mut host = RecordingHost::failing();
    assert_eq!(process_record_user(rgb_sld, PRESS, &mut host), Ok(ProcessResult::Handled));
}

#[test]
fn test_other_keys_pass_through() {
    let mut host = RecordingHost::default();
    let keys = [
        KeyCode::A,
        KeyCode::Kc9,
        KeyCode::LShift,
        KeyCode::RgbTog,
        KeyCode::Bootloader,
        KeyCode::AudioMute,
        CustomKeycode::Placeholder.keycode(),
        KeyCode::User10,
    ];
    for key in keys {
        assert_eq!(process_record_user(key, PRESS, &mut host), Ok(ProcessResult::Continue));
        assert_eq!(process_record_user(key, RELEASE, &mut host), Ok(ProcessResult::Continue));
    }
    assert!(host.calls.is_empty());
    assert!(ProcessResult::Continue.should_continue());
    assert!(!ProcessResult::Handled.should_continue());
}

#[test]
fn test_host_error_is_propagated() {
    let mut host = RecordingHost::failing();
    let vrsn = CustomKeycode::Vrsn.keycode();
    assert_eq!(process_record_user(vrsn, PRESS, &mut host), Err(HostError));
    // Nothing is sent on release, so nothing can fail
    assert_eq!(process_record_user(vrsn, RELEASE, &mut host), Ok(ProcessResult::Handled));
    assert_eq!(
        process_record_user(KeyCode::A, PRESS, &mut host),
        Ok(ProcessResult::Continue)
    );
}

#[test]
fn test_user_action_mapping() {
    assert_eq!(
        UserAction::from_keycode(CustomKeycode::Vrsn.keycode()),
        Some(UserAction::SendIdentification)
    );
    assert_eq!(
        UserAction::from_keycode(CustomKeycode::Eprm.keycode()),
        Some(UserAction::ResetPersistentConfig)
    );
    assert_eq!(UserAction::from_keycode(CustomKeycode::RgbSld.keycode()), Some(UserAction::RgbSolid));
    assert_eq!(UserAction::from_keycode(CustomKeycode::Placeholder.keycode()), None);
    assert_eq!(UserAction::from_keycode(KeyCode::Q), None);

    // Macro ids share the actions of the keycodes
    assert_eq!(
        UserAction::from_macro_id(0),
        UserAction::from_keycode(CustomKeycode::Vrsn.keycode())
    );
    assert_eq!(
        UserAction::from_macro_id(1),
        UserAction::from_keycode(CustomKeycode::Eprm.keycode())
    );
}

#[test]
fn test_matrix_init_has_no_side_effect() {
    matrix_init_user();
    matrix_init_user();
}
