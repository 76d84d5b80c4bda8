//! Message selection
//!
//! The two fixed messages and the flag that chooses between them.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::state::PatternState;

/// One of the two fixed messages the beacon can send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Message {
    /// `... --- ...`
    Sos,
    /// `--- -.-`
    Ok,
}

impl Message {
    /// Returns the other message
    pub fn toggled(self) -> Self {
        match self {
            Message::Sos => Message::Ok,
            Message::Ok => Message::Sos,
        }
    }

    /// First symbol-group state of this message
    pub fn first_state(self) -> PatternState {
        match self {
            Message::Sos => PatternState::DotRun1,
            Message::Ok => PatternState::LongDashRun,
        }
    }
}

/// Mode flag shared between the button handler and the pattern engine
///
/// Access contract:
/// - exactly one writer (the button handler) calls [`toggle`](Self::toggle),
///   which loads the flag only to flip it
/// - exactly one reader (the pattern engine) calls [`current`](Self::current)
///
/// Every access is a single load or store of one `AtomicBool`, so a value can
/// never be observed torn. A toggle that races a read is seen at the next read,
/// which at worst lets the previous message run one more time.
pub struct ModeSelector {
    sos: AtomicBool,
}

impl ModeSelector {
    /// Creates a selector starting on `initial`
    pub const fn new(initial: Message) -> Self {
        Self {
            sos: AtomicBool::new(matches!(initial, Message::Sos)),
        }
    }

    /// Flips the selected message
    ///
    /// Single writer only: a plain load then store, no atomic read-modify-write.
    /// Returns the message just stored.
    pub fn toggle(&self) -> Message {
        let next = self.current().toggled();
        self.sos.store(matches!(next, Message::Sos), Ordering::Relaxed);
        next
    }

    /// Currently selected message
    pub fn current(&self) -> Message {
        if self.sos.load(Ordering::Relaxed) {
            Message::Sos
        } else {
            Message::Ok
        }
    }
}

impl Default for ModeSelector {
    fn default() -> Self {
        Self::new(Message::Sos)
    }
}
