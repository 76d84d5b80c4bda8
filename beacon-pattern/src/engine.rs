//! Pattern Engine
//!
//! Owns the current [`PatternState`] and the tick counter within it. Each tick
//! first advances the state machine, then renders and writes both indicators.

use crate::message::ModeSelector;
use crate::render::{render, Indicator, Levels};
use crate::state::{transition, PatternState};

/// Destination for indicator levels
///
/// Writes are immediate and cannot fail.
pub trait IndicatorSink {
    /// Drives `indicator` on or off
    fn set_level(&mut self, indicator: Indicator, on: bool);
}

/// Tick-driven state machine for the two messages
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PatternEngine {
    state: PatternState,
    ticks: u8,
}

impl PatternEngine {
    /// Engine in `Idle`, before its first tick
    pub const fn new() -> Self {
        Self {
            state: PatternState::Idle,
            ticks: 0,
        }
    }

    /// Rebuilds an engine from raw parts
    ///
    /// A value that names no state, or a counter the state can never hold,
    /// restarts the `SOS` message from its first tick instead of failing.
    pub fn from_parts(raw_state: u8, ticks: u8) -> Self {
        match PatternState::from_repr(raw_state) {
            Some(state) if state.holds(ticks) => Self { state, ticks },
            _ => Self {
                state: PatternState::DotRun1,
                ticks: 0,
            },
        }
    }

    /// Current state
    pub fn state(&self) -> PatternState {
        self.state
    }

    /// Ticks elapsed since the current state was entered
    pub fn ticks(&self) -> u8 {
        self.ticks
    }

    /// Advances one tick and returns the levels for the new position
    ///
    /// The mode is read only on the tick that completes `Break`.
    pub fn step(&mut self, mode: &ModeSelector) -> Levels {
        (self.state, self.ticks) = transition(self.state, self.ticks, || mode.current());
        render(self.state, self.ticks)
    }

    /// Advances one tick and writes both indicators
    pub fn tick(&mut self, mode: &ModeSelector, sink: &mut impl IndicatorSink) -> Levels {
        let levels = self.step(mode);
        for indicator in [Indicator::Dot, Indicator::Dash] {
            sink.set_level(indicator, levels.level(indicator));
        }
        levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Message;
    use crate::state::{BREAK_TICKS, MESSAGE_A_TICKS, MESSAGE_B_TICKS};

    #[derive(Default)]
    struct RecordingSink {
        writes: Vec<(Indicator, bool)>,
    }

    impl IndicatorSink for RecordingSink {
        fn set_level(&mut self, indicator: Indicator, on: bool) {
            self.writes.push((indicator, on));
        }
    }

    /// Steps until the engine enters `target`, returning the ticks taken
    fn run_until(engine: &mut PatternEngine, mode: &ModeSelector, target: PatternState) -> u32 {
        let mut count = 0;
        loop {
            engine.step(mode);
            count += 1;
            if engine.state() == target && engine.ticks() == 0 {
                return count;
            }
            assert!(count < 1000, "never reached {:?}", target);
        }
    }

    #[test]
    fn first_tick_leaves_idle() {
        let mode = ModeSelector::new(Message::Sos);
        let mut engine = PatternEngine::new();
        assert_eq!(engine.state(), PatternState::Idle);

        let levels = engine.step(&mode);
        assert_eq!((engine.state(), engine.ticks()), (PatternState::DotRun1, 0));
        assert_eq!(levels, Levels::OFF);

        let levels = engine.step(&mode);
        assert_eq!((engine.state(), engine.ticks()), (PatternState::DotRun1, 1));
        assert!(levels.dot);
        assert!(!levels.dash);
    }

    #[test]
    fn first_s_hands_over_to_o() {
        let mode = ModeSelector::new(Message::Sos);
        let mut engine = PatternEngine::from_parts(PatternState::DotRun1 as u8, 7);

        let levels = engine.step(&mode);
        assert_eq!((engine.state(), engine.ticks()), (PatternState::DashRun, 0));
        assert_eq!(levels, Levels::OFF);

        let levels = engine.step(&mode);
        assert_eq!((engine.state(), engine.ticks()), (PatternState::DashRun, 1));
        assert!(levels.dash);
        assert!(!levels.dot);
    }

    #[test]
    fn k_sequence_then_break() {
        let mode = ModeSelector::new(Message::Ok);
        let mut engine = PatternEngine::from_parts(PatternState::ShortDashRun as u8, 0);

        let mut seen = Vec::new();
        while engine.state() == PatternState::ShortDashRun {
            let levels = engine.step(&mode);
            seen.push((engine.ticks(), levels));
        }

        let on = |dot, dash| Levels { dot, dash };
        assert_eq!(
            seen,
            [
                (1, on(false, true)),
                (2, on(false, true)),
                (3, on(false, true)),
                (4, Levels::OFF),
                (5, on(true, false)),
                (6, Levels::OFF),
                (7, on(false, true)),
                (8, on(false, true)),
                (0, Levels::OFF),
            ]
        );
        assert_eq!(engine.state(), PatternState::Break);
    }

    #[test]
    fn toggle_mid_message_takes_effect_after_break() {
        let mode = ModeSelector::new(Message::Sos);
        let mut engine = PatternEngine::from_parts(PatternState::DashRun as u8, 3);

        mode.toggle();
        assert_eq!(run_until(&mut engine, &mode, PatternState::DotRun2), 11);
        assert_eq!(run_until(&mut engine, &mode, PatternState::Break), 5);

        run_until(&mut engine, &mode, PatternState::LongDashRun);
        assert_eq!(engine.ticks(), 0);
    }

    #[test]
    fn break_exit_restarts_sos() {
        let mode = ModeSelector::new(Message::Sos);
        let mut engine = PatternEngine::from_parts(PatternState::Break as u8, 6);

        engine.step(&mode);
        assert_eq!((engine.state(), engine.ticks()), (PatternState::DotRun1, 0));
    }

    #[test]
    fn full_cycles_have_fixed_length() {
        let mode = ModeSelector::new(Message::Sos);
        let mut engine = PatternEngine::from_parts(PatternState::DotRun1 as u8, 0);

        assert_eq!(run_until(&mut engine, &mode, PatternState::Break), MESSAGE_A_TICKS);
        assert_eq!(run_until(&mut engine, &mode, PatternState::DotRun1), BREAK_TICKS);

        mode.toggle();
        run_until(&mut engine, &mode, PatternState::LongDashRun);
        assert_eq!(run_until(&mut engine, &mode, PatternState::Break), MESSAGE_B_TICKS);
        assert_eq!(run_until(&mut engine, &mode, PatternState::LongDashRun), BREAK_TICKS);
    }

    #[test]
    fn toggles_before_last_break_tick_do_not_change_output() {
        let steady = ModeSelector::new(Message::Sos);
        let toggled = ModeSelector::new(Message::Sos);
        let mut a = PatternEngine::from_parts(PatternState::DotRun1 as u8, 0);
        let mut b = a.clone();

        for tick in 0..(MESSAGE_A_TICKS + BREAK_TICKS - 1) {
            if tick % 3 == 0 {
                toggled.toggle();
            }
            assert_eq!(a.step(&steady), b.step(&toggled));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn tick_writes_both_indicators_every_time() {
        let mode = ModeSelector::default();
        let mut engine = PatternEngine::new();
        let mut sink = RecordingSink::default();

        for _ in 0..3 {
            engine.tick(&mode, &mut sink);
        }

        assert_eq!(
            sink.writes,
            [
                (Indicator::Dot, false),
                (Indicator::Dash, false),
                (Indicator::Dot, true),
                (Indicator::Dash, false),
                (Indicator::Dot, false),
                (Indicator::Dash, false),
            ]
        );
    }

    #[test]
    fn tick_writes_each_indicator_with_its_own_level() {
        let mode = ModeSelector::new(Message::Ok);
        let mut engine = PatternEngine::from_parts(PatternState::ShortDashRun as u8, 4);
        let mut sink = RecordingSink::default();

        let levels = engine.tick(&mode, &mut sink);

        assert_eq!(levels, Levels { dot: true, dash: false });
        assert_eq!(sink.writes, [(Indicator::Dot, true), (Indicator::Dash, false)]);
    }

    #[test]
    fn corrupt_parts_restart_sos() {
        let restart = PatternEngine::from_parts(PatternState::DotRun1 as u8, 0);

        assert_eq!(PatternEngine::from_parts(42, 3), restart);
        assert_eq!(PatternEngine::from_parts(PatternState::DotRun2 as u8, 5), restart);
        assert_eq!(PatternEngine::from_parts(PatternState::Idle as u8, 1), restart);
        assert_eq!(
            PatternEngine::from_parts(PatternState::Break as u8, 6).state(),
            PatternState::Break
        );
    }
}
