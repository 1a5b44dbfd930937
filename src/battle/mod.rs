//! Battle system - automatic real-time fights on a side-scrolling field
//!
//! The player stages units on a 9x9 grid at the left; the enemy formation
//! stands on the right. Once the battle starts every unit walks toward the
//! rival castle, turning aside to duel any rival that comes within reach.
//! The battle ends when a castle's hit points reach zero.

pub mod castle;
pub mod combat;
pub mod combatant;
pub mod constants;
pub mod execution;
pub mod factory;
pub mod formation;
pub mod movement;
pub mod placement;
pub mod stats;
pub mod terrain;
pub mod unit_type;

// Re-exports for convenient access
pub use castle::Castle;
pub use combat::{acquire_target, attack, check_is_dead, check_should_attack, AttackResult};
pub use combatant::{Combatant, Target, UnitState};
pub use constants::*;
pub use execution::{
    BattleEvent, BattleEventLog, BattleEventType, BattleOutcome, BattlePhase, BattleState,
};
pub use factory::{SoldierFactory, Tile};
pub use formation::{ArmyFormation, FormationSlot};
pub use movement::{move_unit, update_rotation, MovementResult};
pub use placement::{Placement, UnitManager, UnitStatsView, UpgradePreview};
pub use stats::{country_power, max_hit_points, unit_country_power, unit_power};
pub use terrain::Terrain;
pub use unit_type::{UnitProperties, UnitType, UnitTypeInfo};
