//! Unit types and their balance table
//!
//! Every number that distinguishes a cavalryman from a bowman lives here.
//! Level scaling is handled separately in `battle::stats`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::battle::terrain::Terrain;
use crate::core::error::ConquestError;

/// Type of military unit; the discriminant is the wire/type id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum UnitType {
    Cavalry = 0,
    Pike = 1,
    Sword = 2,
    Bow = 3,
}

/// Static balance values for a unit type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitProperties {
    pub name: &'static str,
    pub abbr: &'static str,
    /// Gold price of a fresh level-0 unit
    pub cost: u32,
    /// Share of `cost` charged per manual upgrade; also drives country power growth
    pub cost_upgrade_rate: f64,
    pub base_hit_points: u32,
    pub hit_point_upgrade_rate: f64,
    pub base_power: u32,
    pub power_upgrade_rate: f64,
    /// Staging grid footprint in tiles (width, height)
    pub footprint: (u32, u32),
}

/// One-time terrain modifiers, applied as `base += base * rate`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainRates {
    pub hit_points: f64,
    pub power: f64,
}

impl UnitType {
    pub const ALL: [UnitType; 4] = [
        UnitType::Cavalry,
        UnitType::Pike,
        UnitType::Sword,
        UnitType::Bow,
    ];

    pub fn from_id(type_id: u8) -> Result<Self, ConquestError> {
        match type_id {
            0 => Ok(UnitType::Cavalry),
            1 => Ok(UnitType::Pike),
            2 => Ok(UnitType::Sword),
            3 => Ok(UnitType::Bow),
            other => Err(ConquestError::InvalidUnitType(other)),
        }
    }

    pub fn id(&self) -> u8 {
        *self as u8
    }

    pub fn properties(&self) -> UnitProperties {
        match self {
            UnitType::Cavalry => UnitProperties {
                name: "Cavalry",
                abbr: "C",
                cost: 60,
                cost_upgrade_rate: 0.15,
                base_hit_points: 300,
                hit_point_upgrade_rate: 0.1,
                base_power: 20,
                power_upgrade_rate: 0.15,
                footprint: (2, 1),
            },
            UnitType::Pike => UnitProperties {
                name: "Pike",
                abbr: "P",
                cost: 25,
                cost_upgrade_rate: 0.18,
                base_hit_points: 200,
                hit_point_upgrade_rate: 0.15,
                base_power: 12,
                power_upgrade_rate: 0.15,
                footprint: (1, 1),
            },
            UnitType::Sword => UnitProperties {
                name: "Sword",
                abbr: "S",
                cost: 20,
                cost_upgrade_rate: 0.18,
                base_hit_points: 200,
                hit_point_upgrade_rate: 0.1,
                base_power: 8,
                power_upgrade_rate: 0.15,
                footprint: (1, 1),
            },
            UnitType::Bow => UnitProperties {
                name: "Bow",
                abbr: "B",
                cost: 25,
                cost_upgrade_rate: 0.2,
                base_hit_points: 100,
                hit_point_upgrade_rate: 0.15,
                base_power: 10,
                power_upgrade_rate: 0.2,
                footprint: (1, 1),
            },
        }
    }

    pub fn cost(&self) -> u32 {
        self.properties().cost
    }

    pub fn footprint(&self) -> (u32, u32) {
        self.properties().footprint
    }

    /// Hit point and power modifiers for fighting on `terrain`
    pub fn terrain_rates(&self, terrain: Terrain) -> TerrainRates {
        let (hit_points, power) = match (self, terrain) {
            (UnitType::Cavalry, Terrain::Plain) => (0.1, 0.15),
            (UnitType::Cavalry, Terrain::Forest) => (-0.4, -0.4),
            (UnitType::Cavalry, Terrain::Grassland) => (0.2, 0.3),
            (UnitType::Cavalry, Terrain::Mountain) => (-0.5, -0.4),

            (UnitType::Pike, Terrain::Plain) => (0.15, 0.2),
            (UnitType::Pike, Terrain::Forest) => (-0.1, -0.3),
            (UnitType::Pike, Terrain::Grassland) => (0.1, 0.1),
            (UnitType::Pike, Terrain::Mountain) => (0.05, 0.05),

            (UnitType::Sword, Terrain::Plain) => (-0.05, -0.05),
            (UnitType::Sword, Terrain::Forest) => (0.05, 0.05),
            (UnitType::Sword, Terrain::Grassland) => (-0.1, -0.1),
            (UnitType::Sword, Terrain::Mountain) => (0.0, 0.0),

            (UnitType::Bow, Terrain::Plain) => (0.2, 0.1),
            (UnitType::Bow, Terrain::Forest) => (-0.15, -0.25),
            (UnitType::Bow, Terrain::Grassland) => (0.15, 0.2),
            (UnitType::Bow, Terrain::Mountain) => (0.0, -0.2),
        };
        TerrainRates { hit_points, power }
    }

    /// Human-readable terrain modifier, e.g. "+15% HP, +20% Power"
    pub fn terrain_bonus_text(&self, terrain: Terrain) -> String {
        let rates = self.terrain_rates(terrain);
        if rates.hit_points == 0.0 && rates.power == 0.0 {
            return "No bonus".to_string();
        }
        format!(
            "{} HP, {} Power",
            signed_percent(rates.hit_points),
            signed_percent(rates.power)
        )
    }

    /// Summary for a unit picker; terrain bonus is only known once a battle is set up
    pub fn info(&self, terrain: Option<Terrain>) -> UnitTypeInfo {
        let props = self.properties();
        UnitTypeInfo {
            unit_type: *self,
            name: props.name,
            abbr: props.abbr,
            cost: props.cost,
            hit_points: props.base_hit_points,
            power: props.base_power,
            terrain_bonus: terrain
                .map(|t| self.terrain_bonus_text(t))
                .unwrap_or_else(|| "No bonus".to_string()),
        }
    }
}

fn signed_percent(rate: f64) -> String {
    let percent = (rate * 100.0).round() as i64;
    if percent > 0 {
        format!("+{}%", percent)
    } else {
        format!("{}%", percent)
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.properties().name)
    }
}

impl FromStr for UnitType {
    type Err = ConquestError;

    /// Accepts names ("pike"), abbreviations ("P") and type ids ("1")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<u8>() {
            return UnitType::from_id(id);
        }
        UnitType::ALL
            .into_iter()
            .find(|t| {
                let props = t.properties();
                trimmed.eq_ignore_ascii_case(props.name) || trimmed.eq_ignore_ascii_case(props.abbr)
            })
            .ok_or(ConquestError::InvalidUnitType(u8::MAX))
    }
}

/// Unit picker entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitTypeInfo {
    pub unit_type: UnitType,
    pub name: &'static str,
    pub abbr: &'static str,
    pub cost: u32,
    pub hit_points: u32,
    pub power: u32,
    pub terrain_bonus: String,
}
