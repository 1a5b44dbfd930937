//! Staging grid placement and the unit economy
//!
//! Tracks which tiles of the player's staging grid are taken and where each
//! player unit is seated. Cavalry spans two tiles horizontally; a unit's seat
//! is its leftmost tile.

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::battle::combatant::Combatant;
use crate::battle::factory::{SoldierFactory, Tile};
use crate::battle::stats::{max_hit_points, unit_power};
use crate::battle::unit_type::UnitType;
use crate::core::config::BattleConfig;
use crate::core::types::UnitId;

/// Outcome of clicking a staging tile with a unit type selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// A new unit was created and seated
    Placed(UnitId),
    /// The tile already holds this unit; nothing was placed
    Existing(UnitId),
    /// Out of bounds, overlapping, or not allowed right now
    Rejected,
}

/// Stats panel for a placed unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitStatsView {
    pub cost: u32,
    pub name: String,
    pub abbr: String,
    pub level: u32,
    pub power: u32,
    pub hit_points: u32,
    pub max_hit_points: u32,
    pub experience: f64,
    pub exp_per_upgrade: u32,
}

/// What one more upgrade would buy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradePreview {
    pub cost: u32,
    pub level: u32,
    pub power: u32,
    pub max_hit_points: u32,
    pub experience: f64,
}

#[derive(Debug, Clone)]
pub struct UnitManager {
    columns: i32,
    rows: i32,
    occupied: AHashSet<Tile>,
    seats: AHashMap<UnitId, (Tile, UnitType)>,
}

impl UnitManager {
    pub fn new(config: &BattleConfig) -> Self {
        Self {
            columns: config.tile_columns as i32,
            rows: config.tile_rows as i32,
            occupied: AHashSet::new(),
            seats: AHashMap::new(),
        }
    }

    fn footprint_tiles((column, row): Tile, unit_type: UnitType) -> impl Iterator<Item = Tile> {
        let (width, height) = unit_type.footprint();
        (column..column + width as i32)
            .flat_map(move |x| (row..row + height as i32).map(move |y| (x, y)))
    }

    fn is_within_bounds(&self, (column, row): Tile, unit_type: UnitType) -> bool {
        let (width, height) = unit_type.footprint();
        column >= 0
            && row >= 0
            && column + width as i32 <= self.columns
            && row + height as i32 <= self.rows
    }

    /// True if the whole footprint is on the grid and free
    pub fn can_place(&self, tile: Tile, unit_type: UnitType) -> bool {
        self.is_within_bounds(tile, unit_type)
            && Self::footprint_tiles(tile, unit_type).all(|t| !self.occupied.contains(&t))
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }

    /// Unit whose footprint covers `tile`
    pub fn unit_at(&self, (column, row): Tile) -> Option<UnitId> {
        self.seats.iter().find_map(|(id, ((x, y), unit_type))| {
            let (width, height) = unit_type.footprint();
            let covers = column >= *x
                && column < x + width as i32
                && row >= *y
                && row < y + height as i32;
            covers.then_some(*id)
        })
    }

    pub fn seat_of(&self, id: UnitId) -> Option<Tile> {
        self.seats.get(&id).map(|(tile, _)| *tile)
    }

    /// Reserve the footprint for `id`; callers check `can_place` first
    pub fn occupy(&mut self, id: UnitId, tile: Tile, unit_type: UnitType) {
        self.occupied.extend(Self::footprint_tiles(tile, unit_type));
        self.seats.insert(id, (tile, unit_type));
    }

    /// Free every tile the unit covered
    pub fn vacate(&mut self, id: UnitId) -> Option<Tile> {
        let (tile, unit_type) = self.seats.remove(&id)?;
        for t in Self::footprint_tiles(tile, unit_type) {
            self.occupied.remove(&t);
        }
        Some(tile)
    }

    pub fn clear(&mut self) {
        self.occupied.clear();
        self.seats.clear();
    }

    /// First seat that fits, scanning columns right to left, rows top to bottom
    pub fn find_next_empty(&self, unit_type: UnitType) -> Option<Tile> {
        (0..self.columns)
            .rev()
            .flat_map(|column| (0..self.rows).map(move |row| (column, row)))
            .find(|tile| self.can_place(*tile, unit_type))
    }

    /// Seat every unit afresh after a battle, moving each to its tile
    ///
    /// Units that no longer fit stay where they are, unseated.
    pub fn reseat(&mut self, roster: &mut [Combatant], factory: &SoldierFactory) {
        self.clear();
        for unit in roster.iter_mut() {
            let Some(tile) = self.find_next_empty(unit.unit_type) else {
                tracing::debug!(unit = ?unit.id, "No staging tile left while reseating");
                break;
            };
            unit.position = factory.tile_center(tile);
            self.occupy(unit.id, tile, unit.unit_type);
        }
    }

    /// Tiles still usable, counting a cavalry-sized gap as two
    pub fn remaining_valid_space(&self) -> u32 {
        let mut space = 0;
        for column in 0..self.columns - 1 {
            for row in 0..self.rows {
                if self.can_place((column, row), UnitType::Cavalry) {
                    let (width, height) = UnitType::Cavalry.footprint();
                    space += width * height;
                } else if self.can_place((column, row), UnitType::Pike) {
                    space += 1;
                }
            }
        }
        space
    }
}

/// Gold returned for selling a unit of this type
pub fn sell_value(unit_type: UnitType, refund_rate: f64) -> u32 {
    (unit_type.cost() as f64 * refund_rate).floor() as u32
}

/// Gold charged for one upgrade
pub fn upgrade_cost(unit_type: UnitType) -> u32 {
    let props = unit_type.properties();
    (props.cost as f64 * props.cost_upgrade_rate).floor() as u32
}

/// Grant one upgrade's worth of experience and apply the new stats
pub fn upgrade_unit(unit: &mut Combatant, factory: &SoldierFactory) {
    let config = factory.config();
    unit.add_exp(config.exp_unit, config);
    factory.refresh_stats(unit);
}

pub fn unit_stats(unit: &Combatant, config: &BattleConfig) -> UnitStatsView {
    let props = unit.unit_type.properties();
    UnitStatsView {
        cost: props.cost,
        name: props.name.to_string(),
        abbr: props.abbr.to_string(),
        level: unit.level,
        power: unit.power,
        hit_points: unit.hit_points,
        max_hit_points: unit.max_hit_points,
        experience: unit.experience,
        exp_per_upgrade: config.exp_unit,
    }
}

pub fn upgrade_preview(unit: &Combatant, factory: &SoldierFactory) -> UpgradePreview {
    let next_level = unit.level + 1;
    let terrain = factory.terrain();
    UpgradePreview {
        cost: upgrade_cost(unit.unit_type),
        level: next_level,
        power: unit_power(next_level, unit.unit_type, terrain),
        max_hit_points: max_hit_points(next_level, unit.unit_type, terrain),
        experience: unit.experience + factory.config().exp_unit as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::terrain::Terrain;

    fn manager() -> UnitManager {
        UnitManager::new(&BattleConfig::default())
    }

    #[test]
    fn test_cavalry_needs_two_tiles() {
        let mut grid = manager();
        assert!(grid.can_place((7, 0), UnitType::Cavalry));
        assert!(!grid.can_place((8, 0), UnitType::Cavalry));
        assert!(grid.can_place((8, 0), UnitType::Pike));

        grid.occupy(UnitId(1), (3, 3), UnitType::Pike);
        assert!(!grid.can_place((2, 3), UnitType::Cavalry));
        assert!(grid.can_place((1, 3), UnitType::Cavalry));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let grid = manager();
        assert!(!grid.can_place((-1, 0), UnitType::Pike));
        assert!(!grid.can_place((0, 9), UnitType::Sword));
    }

    #[test]
    fn test_unit_at_covers_footprint() {
        let mut grid = manager();
        grid.occupy(UnitId(4), (2, 5), UnitType::Cavalry);
        assert_eq!(grid.unit_at((2, 5)), Some(UnitId(4)));
        assert_eq!(grid.unit_at((3, 5)), Some(UnitId(4)));
        assert_eq!(grid.unit_at((4, 5)), None);
    }

    #[test]
    fn test_vacate_frees_all_tiles() {
        let mut grid = manager();
        grid.occupy(UnitId(4), (2, 5), UnitType::Cavalry);
        assert_eq!(grid.occupied_count(), 2);
        assert_eq!(grid.vacate(UnitId(4)), Some((2, 5)));
        assert_eq!(grid.occupied_count(), 0);
        assert_eq!(grid.vacate(UnitId(4)), None);
    }

    #[test]
    fn test_find_next_empty_scans_right_column_first() {
        let mut grid = manager();
        assert_eq!(grid.find_next_empty(UnitType::Pike), Some((8, 0)));
        assert_eq!(grid.find_next_empty(UnitType::Cavalry), Some((7, 0)));

        grid.occupy(UnitId(1), (8, 0), UnitType::Pike);
        assert_eq!(grid.find_next_empty(UnitType::Pike), Some((8, 1)));
        assert_eq!(grid.find_next_empty(UnitType::Cavalry), Some((7, 1)));
    }

    #[test]
    fn test_full_grid_has_no_seat() {
        let mut grid = manager();
        let mut next = 0;
        while let Some(tile) = grid.find_next_empty(UnitType::Sword) {
            grid.occupy(UnitId(next), tile, UnitType::Sword);
            next += 1;
        }
        assert_eq!(next, 81);
        assert_eq!(grid.remaining_valid_space(), 0);
    }

    #[test]
    fn test_remaining_space_on_empty_grid() {
        // Eight scanned columns, nine rows, each fits a cavalry
        assert_eq!(manager().remaining_valid_space(), 8 * 9 * 2);
    }

    #[test]
    fn test_economy_values() {
        assert_eq!(sell_value(UnitType::Cavalry, 0.75), 45);
        assert_eq!(sell_value(UnitType::Sword, 0.75), 15);
        assert_eq!(upgrade_cost(UnitType::Cavalry), 9);
        assert_eq!(upgrade_cost(UnitType::Bow), 5);
    }

    #[test]
    fn test_upgrade_applies_stats() {
        let factory = SoldierFactory::new(BattleConfig::default(), Terrain::Plain);
        let mut pike = factory.create_player(UnitId(1), UnitType::Pike, 0, (0, 0));
        let preview = upgrade_preview(&pike, &factory);

        upgrade_unit(&mut pike, &factory);
        upgrade_unit(&mut pike, &factory);

        assert_eq!(pike.level, 1);
        assert_eq!(pike.experience, 100.0);
        assert_eq!(preview.level, 1);
        assert_eq!(preview.experience, 50.0);
        assert_eq!(pike.max_hit_points, preview.max_hit_points);
        assert_eq!(pike.hit_points, pike.max_hit_points);
        assert_eq!(pike.power, preview.power);
    }

    #[test]
    fn test_stats_view() {
        let factory = SoldierFactory::new(BattleConfig::default(), Terrain::Plain);
        let pike = factory.create_player(UnitId(1), UnitType::Pike, 0, (0, 0));
        let view = unit_stats(&pike, factory.config());
        assert_eq!(view.cost, 25);
        assert_eq!(view.name, "Pike");
        assert_eq!(view.abbr, "P");
        assert_eq!(view.hit_points, 230);
        assert_eq!(view.exp_per_upgrade, 50);
    }

    #[test]
    fn test_reseat_moves_units_onto_grid() {
        let factory = SoldierFactory::new(BattleConfig::default(), Terrain::Plain);
        let mut grid = manager();
        let mut roster = vec![
            factory.create_player(UnitId(1), UnitType::Cavalry, 0, (0, 0)),
            factory.create_player(UnitId(2), UnitType::Pike, 0, (0, 1)),
        ];
        roster[0].position.x = 600.0;

        grid.reseat(&mut roster, &factory);

        assert_eq!(grid.seat_of(UnitId(1)), Some((7, 0)));
        assert_eq!(grid.seat_of(UnitId(2)), Some((8, 1)));
        assert_eq!(roster[0].position, factory.tile_center((7, 0)));
        assert_eq!(grid.occupied_count(), 3);
    }
}
