//! Indicator output mapping
//!
//! Levels are a pure function of `(state, ticks)`. A dot is one lit tick, a
//! dash is three lit ticks inside a four-tick cell.

use crate::state::PatternState;

/// One of the two output indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Indicator {
    /// Lit for dots (red LED on the reference board)
    Dot,
    /// Lit for dashes (green LED on the reference board)
    Dash,
}

/// Levels of both indicators for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Levels {
    /// Dot indicator on
    pub dot: bool,
    /// Dash indicator on
    pub dash: bool,
}

impl Levels {
    /// Both indicators off
    pub const OFF: Levels = Levels {
        dot: false,
        dash: false,
    };
    const DOT: Levels = Levels {
        dot: true,
        dash: false,
    };
    const DASH: Levels = Levels {
        dot: false,
        dash: true,
    };

    /// Level of a single indicator
    pub fn level(self, indicator: Indicator) -> bool {
        match indicator {
            Indicator::Dot => self.dot,
            Indicator::Dash => self.dash,
        }
    }
}

/// Indicator levels at `ticks` into `state`
pub fn render(state: PatternState, ticks: u8) -> Levels {
    match state {
        PatternState::DotRun1 => dot_if(matches!(ticks, 1 | 3 | 5)),
        PatternState::DashRun | PatternState::LongDashRun => dash_if(ticks < 12 && ticks % 4 != 0),
        PatternState::DotRun2 => dot_if(ticks % 2 == 0),
        PatternState::ShortDashRun => match ticks {
            4 | 6 => Levels::OFF,
            5 => Levels::DOT,
            _ => Levels::DASH,
        },
        PatternState::Break | PatternState::Idle => Levels::OFF,
    }
}

fn dot_if(on: bool) -> Levels {
    if on {
        Levels::DOT
    } else {
        Levels::OFF
    }
}

fn dash_if(on: bool) -> Levels {
    if on {
        Levels::DASH
    } else {
        Levels::OFF
    }
}
