//! Horde Conquest - real-time battle core for a territory conquest game
//!
//! `battle` resolves one fight between a staged player army and a country's
//! defending formation. `campaign` strings fights together: gold, the world
//! map, and the win/loss/retreat transitions.

pub mod battle;
pub mod campaign;
pub mod core;

pub use crate::battle::{BattleOutcome, BattleState, Placement, Terrain, UnitType};
pub use crate::campaign::{GameSession, MapCountries};
pub use crate::core::config::GameConfig;
pub use crate::core::error::{ConquestError, Result};
