//! Combatant construction
//!
//! Stats are looked up once, at creation, for the battle's terrain.

use crate::battle::combatant::Combatant;
use crate::battle::formation::FormationSlot;
use crate::battle::stats::{max_hit_points, unit_power};
use crate::battle::terrain::Terrain;
use crate::battle::unit_type::UnitType;
use crate::core::config::BattleConfig;
use crate::core::error::Result;
use crate::core::types::{Family, UnitId, Vector};

/// Staging grid tile (column, row)
pub type Tile = (i32, i32);

#[derive(Debug, Clone)]
pub struct SoldierFactory {
    config: BattleConfig,
    terrain: Terrain,
}

impl SoldierFactory {
    pub fn new(config: BattleConfig, terrain: Terrain) -> Self {
        Self { config, terrain }
    }

    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    pub fn set_terrain(&mut self, terrain: Terrain) {
        self.terrain = terrain;
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Pixel center of a staging tile
    pub fn tile_center(&self, (column, row): Tile) -> Vector {
        let half = self.config.tile_width / 2.0;
        Vector::new(
            column as f64 * self.config.tile_width + self.config.world_x + half,
            row as f64 * self.config.tile_width + self.config.world_y + half,
        )
    }

    /// Staging tile containing a pixel position
    pub fn tile_at(&self, position: Vector) -> Tile {
        (
            ((position.x - self.config.world_x) / self.config.tile_width).floor() as i32,
            ((position.y - self.config.world_y) / self.config.tile_width).floor() as i32,
        )
    }

    pub fn create_player(&self, id: UnitId, unit_type: UnitType, level: u32, tile: Tile) -> Combatant {
        self.create(id, unit_type, Family::Player, level, self.tile_center(tile))
    }

    /// Enemy at a formation slot, shifted onto the enemy half of the field
    pub fn create_enemy(&self, id: UnitId, slot: &FormationSlot, level: u32) -> Result<Combatant> {
        let unit_type = slot.unit_type()?;
        let position = Vector::new(
            slot.x as f64 + self.config.enemy_x_offset(),
            slot.y as f64,
        );
        Ok(self.create(id, unit_type, Family::Enemy, level, position))
    }

    fn create(
        &self,
        id: UnitId,
        unit_type: UnitType,
        family: Family,
        level: u32,
        position: Vector,
    ) -> Combatant {
        Combatant::new(
            id,
            unit_type,
            family,
            self.terrain,
            level,
            max_hit_points(level, unit_type, self.terrain),
            unit_power(level, unit_type, self.terrain),
            position,
            &self.config,
        )
    }

    /// Recompute stats for the unit's current level and heal it to full
    pub fn refresh_stats(&self, unit: &mut Combatant) {
        unit.terrain = self.terrain;
        unit.max_hit_points = max_hit_points(unit.level, unit.unit_type, self.terrain);
        unit.power = unit_power(unit.level, unit.unit_type, self.terrain);
        unit.heal();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::combatant::UnitState;

    fn factory() -> SoldierFactory {
        SoldierFactory::new(BattleConfig::default(), Terrain::Plain)
    }

    #[test]
    fn test_tile_center_round_trip() {
        let factory = factory();
        let center = factory.tile_center((0, 0));
        assert_eq!(center, Vector::new(126.0, 124.0));
        assert_eq!(factory.tile_at(center), (0, 0));
        assert_eq!(factory.tile_at(factory.tile_center((8, 4))), (8, 4));
    }

    #[test]
    fn test_player_stats_follow_terrain() {
        let factory = factory();
        let pike = factory.create_player(UnitId(1), UnitType::Pike, 0, (0, 0));
        assert_eq!(pike.max_hit_points, 230);
        assert_eq!(pike.hit_points, 230);
        assert_eq!(pike.family, Family::Player);
        assert_eq!(pike.state, UnitState::Stand);
    }

    #[test]
    fn test_enemy_offset() {
        let factory = factory();
        let slot = FormationSlot { type_id: 2, x: 10, y: 150 };
        let sword = factory.create_enemy(UnitId(7), &slot, 3).unwrap();
        assert_eq!(sword.position, Vector::new(302.0, 150.0));
        assert_eq!(sword.level, 3);
        assert_eq!(sword.experience, 300.0);
        assert_eq!(sword.rotation, 180.0);
    }

    #[test]
    fn test_refresh_stats_heals() {
        let factory = factory();
        let mut bow = factory.create_player(UnitId(1), UnitType::Bow, 0, (0, 0));
        bow.hit_points = 1;
        bow.level = 2;
        factory.refresh_stats(&mut bow);
        assert_eq!(bow.max_hit_points, max_hit_points(2, UnitType::Bow, Terrain::Plain));
        assert_eq!(bow.hit_points, bow.max_hit_points);
    }
}
