//! Command implementations for the draft-live CLI

pub mod common;
pub mod gameweek;
pub mod render;
pub mod serve;
