//! Pattern states and the per-tick transition function
//!
//! Each message is a fixed sequence of symbol-group states. A state lasts
//! exactly its threshold in ticks; the tick that reaches the threshold moves to
//! the successor with the counter reset to zero.
//!
//! | State          | Ticks | Next                        |
//! |----------------|-------|-----------------------------|
//! | `Idle`         | -     | `DotRun1`                   |
//! | `DotRun1`      | 8     | `DashRun`                   |
//! | `DashRun`      | 14    | `DotRun2`                   |
//! | `DotRun2`      | 5     | `Break`                     |
//! | `LongDashRun`  | 14    | `ShortDashRun`              |
//! | `ShortDashRun` | 9     | `Break`                     |
//! | `Break`        | 7     | first state of the message  |

use crate::message::Message;

/// Ticks spent in the `SOS` symbol groups before the break
pub const MESSAGE_A_TICKS: u32 = 8 + 14 + 5;

/// Ticks spent in the `OK` symbol groups before the break
pub const MESSAGE_B_TICKS: u32 = 14 + 9;

/// Length of the silence between two messages
pub const BREAK_TICKS: u32 = 7;

/// Position within a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PatternState {
    /// Power-on state, left on the first tick
    #[default]
    Idle = 0,
    /// First `S` of `SOS`
    DotRun1 = 1,
    /// `O` of `SOS`
    DashRun = 2,
    /// Second `S` of `SOS`, no trailing gap
    DotRun2 = 3,
    /// `O` of `OK`
    LongDashRun = 4,
    /// `K` of `OK`, no trailing gap
    ShortDashRun = 5,
    /// Silence between messages
    Break = 6,
}

impl PatternState {
    /// Decodes a raw discriminant, `None` if it names no state
    pub fn from_repr(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Idle),
            1 => Some(Self::DotRun1),
            2 => Some(Self::DashRun),
            3 => Some(Self::DotRun2),
            4 => Some(Self::LongDashRun),
            5 => Some(Self::ShortDashRun),
            6 => Some(Self::Break),
            _ => None,
        }
    }

    /// Number of ticks spent in this state, `None` for `Idle`
    pub fn threshold(self) -> Option<u8> {
        match self {
            Self::Idle => None,
            Self::DotRun1 => Some(8),
            Self::DashRun => Some(14),
            Self::DotRun2 => Some(5),
            Self::LongDashRun => Some(14),
            Self::ShortDashRun => Some(9),
            Self::Break => Some(7),
        }
    }

    /// State entered once this one is complete
    ///
    /// `message` is called only when leaving `Break`.
    pub fn successor(self, message: impl FnOnce() -> Message) -> Self {
        match self {
            Self::Idle => Self::DotRun1,
            Self::DotRun1 => Self::DashRun,
            Self::DashRun => Self::DotRun2,
            Self::DotRun2 => Self::Break,
            Self::LongDashRun => Self::ShortDashRun,
            Self::ShortDashRun => Self::Break,
            Self::Break => message().first_state(),
        }
    }

    /// Whether `ticks` is a reachable counter value in this state
    pub fn holds(self, ticks: u8) -> bool {
        match self.threshold() {
            Some(threshold) => ticks < threshold,
            None => ticks == 0,
        }
    }
}

/// Advances `(state, ticks)` by one tick
///
/// `message` is called at most once, and only on the tick that completes `Break`.
pub fn transition(
    state: PatternState,
    ticks: u8,
    message: impl FnOnce() -> Message,
) -> (PatternState, u8) {
    match state.threshold() {
        None => (state.successor(message), 0),
        Some(threshold) => {
            let ticks = ticks.saturating_add(1);
            if ticks >= threshold {
                (state.successor(message), 0)
            } else {
                (state, ticks)
            }
        }
    }
}
