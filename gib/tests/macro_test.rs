pub mod common;

use gib::event::KeyEvent;
use gib::{IDENTIFICATION, MacroResult, action_get_macro};

use crate::common::{HostCall, HostError, RecordingHost};

#[test]
fn test_macro_0_sends_identification() {
    let mut host = RecordingHost::default();
    assert_eq!(
        action_get_macro(KeyEvent::pressed(1, 2), 0, 0, &mut host),
        Ok(MacroResult::None)
    );
    assert_eq!(host.calls, vec![HostCall::SendString(IDENTIFICATION.to_string())]);
}

#[test]
fn test_macro_1_resets_persistent_config() {
    let mut host = RecordingHost::default();
    assert_eq!(
        action_get_macro(KeyEvent::pressed(4, 0), 1, 0, &mut host),
        Ok(MacroResult::None)
    );
    assert_eq!(host.calls, vec![HostCall::ResetPersistentConfig]);
}

#[test]
fn test_macro_release_does_nothing() {
    let mut host = RecordingHost::default();
    for id in [0, 1] {
        assert_eq!(
            action_get_macro(KeyEvent::released(0, 0), id, 0, &mut host),
            Ok(MacroResult::None)
        );
    }
    assert!(host.calls.is_empty());
}

#[test]
fn test_unknown_macro_id() {
    let mut host = RecordingHost::default();
    for id in [2, 3, 42, u8::MAX] {
        assert_eq!(
            action_get_macro(KeyEvent::pressed(0, 0), id, 0, &mut host),
            Ok(MacroResult::None)
        );
        assert_eq!(
            action_get_macro(KeyEvent::released(0, 0), id, 0, &mut host),
            Ok(MacroResult::None)
        );
    }
    assert!(host.calls.is_empty());
}

#[test]
fn test_macro_opt_is_ignored() {
    let mut host = RecordingHost::default();
    action_get_macro(KeyEvent::pressed(0, 0), 1, 7, &mut host).unwrap();
    action_get_macro(KeyEvent::pressed(0, 0), 1, 255, &mut host).unwrap();
    assert_eq!(host.resets(), 2);
}

#[test]
fn test_macro_host_error() {
    let mut host = RecordingHost::failing();
    assert_eq!(action_get_macro(KeyEvent::pressed(0, 0), 0, 0, &mut host), Err(HostError));
    assert_eq!(action_get_macro(KeyEvent::pressed(0, 0), 9, 0, &mut host), Ok(MacroResult::None));
}
