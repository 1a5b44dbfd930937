use thiserror::Error;

use crate::core::types::UnitId;

#[derive(Error, Debug)]
pub enum ConquestError {
    #[error("Invalid army tier {0} (expected 1..=6)")]
    InvalidTier(u32),

    #[error("Invalid level: {0}")]
    InvalidLevel(i64),

    #[error("Invalid unit type id: {0}")]
    InvalidUnitType(u8),

    #[error("Formation not found: {0}")]
    UnknownFormation(u32),

    #[error("Formation shape has {slots} slots but {levels} levels were given")]
    LevelCountMismatch { slots: usize, levels: usize },

    #[error("Country not found: {0}")]
    UnknownCountry(String),

    #[error("Country already conquered: {0}")]
    AlreadyConquered(String),

    #[error("Country is not adjacent to conquered territory: {0}")]
    Unreachable(String),

    #[error("Not enough gold: need {needed}, have {available}")]
    InsufficientGold { needed: u32, available: u32 },

    #[error("Unit not found: {0:?}")]
    UnknownUnit(UnitId),

    #[error("A battle is already in progress")]
    BattleInProgress,

    #[error("No battle has been set up")]
    NoBattle,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConquestError>;
