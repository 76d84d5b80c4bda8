//! Beacon Pattern Library
//!
//! Hardware-independent core of the Morse beacon firmware: the tick-driven
//! pattern state machine that drives the two indicator LEDs, and the mode
//! selector shared with the button handler.
//!
//! # Time
//! The only notion of time is the tick. One call to
//! [`PatternEngine::tick`] per [`TICK_PERIOD_MS`] reproduces the reference
//! timing.
//!
//! # Concurrency
//! The engine is owned by the tick context. The [`ModeSelector`] is the single
//! value shared with the button context; it is written only by the button
//! handler and read only by the engine, once per message, when the break
//! between messages ends.

#![cfg_attr(not(test), no_std)]

pub mod engine;
pub mod message;
pub mod render;
pub mod state;

pub use engine::{IndicatorSink, PatternEngine};
pub use message::{Message, ModeSelector};
pub use render::{render, Indicator, Levels};
pub use state::{transition, PatternState};

/// Period of one pattern tick in milliseconds
pub const TICK_PERIOD_MS: u64 = 500;
