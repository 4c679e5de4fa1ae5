//! API handlers.

pub mod scores;
