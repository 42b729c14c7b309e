//! Decision providers for the swamp's agents.

pub mod ai;
