//! Game configuration with documented constants
//!
//! Defaults come from `battle::constants`. A config can be loaded from TOML;
//! any field left out keeps its default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::battle::constants::*;
use crate::core::error::{ConquestError, Result};

/// Complete configuration passed to a battle or campaign session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub battle: BattleConfig,
    pub campaign: CampaignConfig,
}

/// Battlefield geometry, engagement distances and unit progression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    // === GEOMETRY ===
    /// Side length of one staging tile (pixels)
    pub tile_width: f64,

    /// Left edge of the staging grid; also the player castle's x-line
    pub world_x: f64,

    /// Top edge of the staging grid
    pub world_y: f64,

    pub tile_rows: u32,
    pub tile_columns: u32,

    /// Total battlefield width; the enemy castle sits at `map_width - world_x`
    pub map_width: f64,

    /// Units may not walk above `world_y + border_top_offset`
    pub border_top_offset: f64,

    // === ENGAGEMENT ===
    /// Distance at which a unit stops and starts dealing damage
    pub stand_dist: f64,

    /// Melee acquisition radius
    pub hit_dist: f64,

    /// Extra acquisition reach, only considered once something is in melee range
    pub range_offset: f64,

    // === STEERING ===
    /// Turn easing while chasing a target
    pub rotation_speed: f64,

    /// Turn easing while walking back to the advance direction
    pub walk_rotation_speed: f64,

    /// Angular gaps at or below this many degrees are ignored
    pub angle_deadband: f64,

    /// Frame speed multiplier (1 = normal, at most `MAX_SPEED_TIMES`)
    pub speed_times: f64,

    // === PROGRESSION ===
    pub max_level: u32,
    pub experience_per_level: u32,

    /// Experience earned for every frame spent attacking
    pub exp_step: u32,

    /// Experience granted by one manual upgrade
    pub exp_unit: u32,

    /// Multiplier applied to all earned experience
    pub exp_rate: f64,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            tile_width: TILE_WIDTH,
            world_x: WORLD_X,
            world_y: WORLD_Y,
            tile_rows: TILE_ROWS,
            tile_columns: TILE_COLUMNS,
            map_width: MAP_WIDTH,
            border_top_offset: BORDER_TOP_OFFSET,

            stand_dist: STAND_DISTANCE,
            hit_dist: HIT_DISTANCE,
            range_offset: RANGE_OFFSET,

            rotation_speed: ROTATION_SPEED,
            walk_rotation_speed: WALK_ROTATION_SPEED,
            angle_deadband: ANGLE_DEADBAND_DEGREES,
            speed_times: DEFAULT_SPEED_TIMES,

            max_level: MAX_LEVEL,
            experience_per_level: EXPERIENCE_PER_LEVEL,
            exp_step: EXPERIENCE_STEP,
            exp_unit: EXPERIENCE_UNIT,
            exp_rate: EXPERIENCE_RATE,
        }
    }
}

impl BattleConfig {
    /// Horizontal shift applied to enemy formation offsets
    pub fn enemy_x_offset(&self) -> f64 {
        self.map_width - self.world_x * 2.0 - self.tile_width * self.tile_rows as f64
    }

    pub fn player_castle_x_line(&self) -> f64 {
        self.world_x
    }

    pub fn enemy_castle_x_line(&self) -> f64 {
        self.map_width - self.world_x
    }

    pub fn top_border(&self) -> f64 {
        self.world_y + self.border_top_offset
    }

    pub fn bottom_border(&self) -> f64 {
        self.world_y + self.tile_width * self.tile_rows as f64
    }
}

/// Economy and encounter difficulty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignConfig {
    pub starting_gold: u32,

    /// Territory the player owns at the start of every game
    pub home_country: String,

    /// Share of pre-battle gold paid out after a victory
    pub victory_interest: f64,

    /// Share of gold lost when retreating from a battle
    pub retreat_penalty: f64,

    pub sell_refund_rate: f64,

    /// Scales a country's level before per-slot noise is added
    pub global_hard_rate: f64,

    /// Castle power granted per gold coin
    pub power_per_gold: u32,

    /// Multiplier on each unit's country power contribution
    pub power_per_unit: u32,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            starting_gold: STARTING_GOLD,
            home_country: HOME_COUNTRY.to_string(),
            victory_interest: VICTORY_INTEREST,
            retreat_penalty: RETREAT_PENALTY,
            sell_refund_rate: SELL_REFUND_RATE,
            global_hard_rate: GLOBAL_HARD_RATE,
            power_per_gold: POWER_PER_GOLD,
            power_per_unit: POWER_PER_UNIT,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document; missing fields keep their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let battle = &self.battle;

        if battle.stand_dist <= 0.0 || battle.stand_dist >= battle.hit_dist {
            return Err(ConquestError::InvalidConfig(format!(
                "stand_dist ({}) must be positive and below hit_dist ({})",
                battle.stand_dist, battle.hit_dist
            )));
        }

        if battle.range_offset < 0.0 {
            return Err(ConquestError::InvalidConfig(
                "range_offset must not be negative".into(),
            ));
        }

        if battle.tile_rows == 0 || battle.tile_columns < 2 {
            return Err(ConquestError::InvalidConfig(format!(
                "staging grid {}x{} cannot seat a cavalry unit",
                battle.tile_columns, battle.tile_rows
            )));
        }

        if battle.enemy_castle_x_line() <= battle.player_castle_x_line() {
            return Err(ConquestError::InvalidConfig(format!(
                "map_width ({}) leaves no room between the castles",
                battle.map_width
            )));
        }

        if !(DEFAULT_SPEED_TIMES..=MAX_SPEED_TIMES).contains(&battle.speed_times) {
            return Err(ConquestError::InvalidConfig(format!(
                "speed_times ({}) must be within 1..=4",
                battle.speed_times
            )));
        }

        if battle.experience_per_level == 0 {
            return Err(ConquestError::InvalidConfig(
                "experience_per_level must be positive".into(),
            ));
        }

        let campaign = &self.campaign;
        for (name, rate) in [
            ("victory_interest", campaign.victory_interest),
            ("retreat_penalty", campaign.retreat_penalty),
            ("sell_refund_rate", campaign.sell_refund_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(ConquestError::InvalidConfig(format!(
                    "{} ({}) must be within 0..=1",
                    name, rate
                )));
            }
        }

        Ok(())
    }
}
