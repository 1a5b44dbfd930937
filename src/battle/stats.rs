//! Level scaling formulas
//!
//! Every level adds two compounding steps. Each step multiplies the running
//! value by `1 + effective_rate` and floors it. The effective rate shrinks as
//! the step count grows but never drops below `MIN_UPGRADE_RATE`.

use crate::battle::constants::{EXPERIENCE_UNIT, LEVEL_UNIT, MIN_UPGRADE_RATE, UPGRADE_RATE_DECAY};
use crate::battle::terrain::Terrain;
use crate::battle::unit_type::UnitType;

/// Which quantity is being scaled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    HitPoints,
    Power,
    /// Abstract matchmaking score; skips the terrain adjustment
    Country,
}

/// Number of compounding steps for `level`
pub fn upgrade_steps(level: u32) -> u32 {
    level * LEVEL_UNIT / EXPERIENCE_UNIT
}

/// Per-step growth rate for a value that will be compounded `steps` times
pub fn effective_rate(rate: f64, steps: u32) -> f64 {
    (rate * 1.5 - UPGRADE_RATE_DECAY * steps as f64).max(MIN_UPGRADE_RATE)
}

/// Scale `base` to `level`, applying the terrain modifier first for unit stats
pub fn upgraded_value(
    kind: ValueKind,
    base: f64,
    rate: f64,
    level: u32,
    unit_type: UnitType,
    terrain: Terrain,
) -> u32 {
    let terrain_rates = unit_type.terrain_rates(terrain);
    let mut value = match kind {
        ValueKind::HitPoints => base + base * terrain_rates.hit_points,
        ValueKind::Power => base + base * terrain_rates.power,
        ValueKind::Country => base,
    };

    let steps = upgrade_steps(level);
    let step_rate = effective_rate(rate, steps);
    for _ in 0..steps {
        value = (value * (1.0 + step_rate)).floor();
    }

    value.floor().max(0.0) as u32
}

pub fn max_hit_points(level: u32, unit_type: UnitType, terrain: Terrain) -> u32 {
    let props = unit_type.properties();
    upgraded_value(
        ValueKind::HitPoints,
        props.base_hit_points as f64,
        props.hit_point_upgrade_rate,
        level,
        unit_type,
        terrain,
    )
}

pub fn unit_power(level: u32, unit_type: UnitType, terrain: Terrain) -> u32 {
    let props = unit_type.properties();
    upgraded_value(
        ValueKind::Power,
        props.base_power as f64,
        props.power_upgrade_rate,
        level,
        unit_type,
        terrain,
    )
}

/// Convert a gold cost at a level into matchmaking power
pub fn country_power(base_cost: u32, rate: f64, level: u32) -> u32 {
    upgraded_value(
        ValueKind::Country,
        base_cost as f64,
        rate,
        level,
        UnitType::Cavalry,
        Terrain::Plain,
    )
}

/// Matchmaking power contributed by one unit of `unit_type` at `level`
pub fn unit_country_power(unit_type: UnitType, level: u32) -> u32 {
    let props = unit_type.properties();
    country_power(props.cost, props.cost_upgrade_rate, level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_zero_is_terrain_bump_only() {
        let value = upgraded_value(
            ValueKind::HitPoints,
            200.0,
            0.15,
            0,
            UnitType::Pike,
            Terrain::Plain,
        );
        assert_eq!(value, 230);
    }

    #[test]
    fn test_two_steps_per_level() {
        assert_eq!(upgrade_steps(0), 0);
        assert_eq!(upgrade_steps(2), 4);
        assert_eq!(upgrade_steps(12), 24);
    }

    #[test]
    fn test_level_two_compounds_four_times() {
        // 230 -> 278 -> 337 -> 408 -> 494 at 21.3% per step
        assert_eq!(max_hit_points(2, UnitType::Pike, Terrain::Plain), 494);
    }

    #[test]
    fn test_effective_rate_floor() {
        assert_eq!(effective_rate(0.1, 1000), MIN_UPGRADE_RATE);
        assert!((effective_rate(0.2, 0) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_country_power_ignores_terrain() {
        assert_eq!(country_power(60, 0.15, 0), 60);
        assert_eq!(unit_country_power(UnitType::Sword, 0), 20);
        // 25 * (1 + 0.18*1.5 - 0.006) floored twice
        assert_eq!(unit_country_power(UnitType::Pike, 1), 39);
    }

    #[test]
    fn test_terrain_penalty_reduces_stats() {
        let plain = unit_power(0, UnitType::Cavalry, Terrain::Plain);
        let forest = unit_power(0, UnitType::Cavalry, Terrain::Forest);
        assert_eq!(plain, 23);
        assert_eq!(forest, 12);
    }

    #[test]
    fn test_stats_grow_with_level() {
        for unit_type in UnitType::ALL {
            for terrain in Terrain::ALL {
                let mut previous = 0;
                for level in 0..=12 {
                    let hp = max_hit_points(level, unit_type, terrain);
                    assert!(hp >= previous, "{unit_type:?} on {terrain:?} shrank at {level}");
                    previous = hp;
                }
            }
        }
    }
}
