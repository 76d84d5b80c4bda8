pub mod mode_button;
pub mod pattern_tick;
