//! Message Mode Module
//!
//! Holds the message selection shared between the mode button task (sole
//! writer) and the pattern tick task (sole reader). The selection is a single
//! atomic flag, so both sides can touch it from different interrupt priorities
//! without a lock.
use beacon_pattern::{Message, ModeSelector};

/// Message selection, starting on SOS
static MODE: ModeSelector = ModeSelector::new(Message::Sos);

/// Switches to the other message
///
/// The pattern engine picks the change up when the current message's break
/// ends. Returns the newly selected message.
pub fn toggle() -> Message {
    MODE.toggle()
}

/// Returns the selector for the pattern tick task, its only reader
pub fn selector() -> &'static ModeSelector {
    &MODE
}
