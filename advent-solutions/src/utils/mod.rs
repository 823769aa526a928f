//! Helpers shared between puzzle solutions

pub mod memo;
