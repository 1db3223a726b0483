//! Core engine types: random sources and battle configuration.

pub mod config;
pub mod rng;

pub use config::{BattleConfig, MAX_EDGE_LIMIT};
pub use rng::{BattleRng, BattleRngState, RandomSource, ScriptedSource};
