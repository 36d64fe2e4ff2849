use crate::event::KeyEvent;
use crate::host::KeyboardHost;
use crate::processor::UserAction;

/// Key sequence returned to the firmware's macro player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroResult {
    /// Nothing to play, all work is done in the callback
    None,
}

/// Legacy macro callback.
///
/// Macro 0 types the identification string and macro 1 resets the persistent
/// config, both on press only. The `_opt` byte is unused.
pub fn action_get_macro<H: KeyboardHost>(
    event: KeyEvent,
    id: u8,
    _opt: u8,
    host: &mut H,
) -> Result<MacroResult, H::Error> {
    match UserAction::from_macro_id(id) {
        Some(action) if event.pressed => action.execute(host)?,
        Some(_) => {}
        None => warn!("Unknown macro id {}", id),
    }
    Ok(MacroResult::None)
}
