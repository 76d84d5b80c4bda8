//! Core system components for the beacon
pub mod indicator;
pub mod mode;
pub mod resources;
