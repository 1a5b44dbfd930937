//! Battle system constants - all tunable defaults in one place
//!
//! `GameConfig::default()` is built from these values.

// Battlefield geometry (pixels)
pub const TILE_WIDTH: f64 = 32.0;
pub const WORLD_X: f64 = 110.0;
pub const WORLD_Y: f64 = 108.0;
pub const TILE_ROWS: u32 = 9;
pub const TILE_COLUMNS: u32 = 9;
pub const MAP_WIDTH: f64 = 800.0;
pub const BORDER_TOP_OFFSET: f64 = 15.0;

// Engagement distances (pixels)
pub const STAND_DISTANCE: f64 = 30.0;
pub const HIT_DISTANCE: f64 = 100.0;
pub const RANGE_OFFSET: f64 = 150.0;

// Steering (fraction of the angular gap closed per frame)
pub const ROTATION_SPEED: f64 = 0.1;
pub const WALK_ROTATION_SPEED: f64 = 0.05;
pub const ANGLE_DEADBAND_DEGREES: f64 = 1.0;

// Progression
pub const MAX_LEVEL: u32 = 12;
pub const EXPERIENCE_PER_LEVEL: u32 = 100;
pub const EXPERIENCE_STEP: u32 = 3;
pub const EXPERIENCE_UNIT: u32 = 50;
pub const EXPERIENCE_RATE: f64 = 1.0;

// Frame speed multiplier
pub const DEFAULT_SPEED_TIMES: f64 = 1.0;
pub const MAX_SPEED_TIMES: f64 = 4.0;

// Upgrade formula
pub const LEVEL_UNIT: u32 = 100;
pub const UPGRADE_RATE_DECAY: f64 = 0.003;
pub const MIN_UPGRADE_RATE: f64 = 0.05;

// Campaign economy
pub const STARTING_GOLD: u32 = 400;
pub const VICTORY_INTEREST: f64 = 0.1;
pub const RETREAT_PENALTY: f64 = 0.1;
pub const SELL_REFUND_RATE: f64 = 0.75;
pub const GLOBAL_HARD_RATE: f64 = 0.6;
pub const POWER_PER_GOLD: u32 = 5;
pub const POWER_PER_UNIT: u32 = 5;
pub const HOME_COUNTRY: &str = "Mongolia";
