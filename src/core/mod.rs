pub mod config;
pub mod error;
pub mod types;

pub use config::{BattleConfig, CampaignConfig, GameConfig};
pub use error::{ConquestError, Result};
pub use types::{Family, Tick, UnitId, Vector};
