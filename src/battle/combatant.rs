//! Combatants - one fighting unit on the battlefield
//!
//! Players and enemies share this type; they differ only in `family`, which
//! fixes the advance direction and which castle counts as the rival's.

use serde::{Deserialize, Serialize};

use crate::battle::terrain::Terrain;
use crate::battle::unit_type::UnitType;
use crate::core::config::BattleConfig;
use crate::core::types::{Family, UnitId, Vector};

/// Combatant behavior state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitState {
    #[default]
    Stand, // Placed, battle not started
    Walk,   // Advancing or closing on a target
    Attack, // Stationary, dealing damage every frame
}

/// What a combatant is aiming at
///
/// `Unit` always refers to a member of the rival army. `Castle` is the
/// rival castle and, once chosen, is never abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Target {
    #[default]
    None,
    Unit(UnitId),
    Castle,
}

impl Target {
    pub fn unit(&self) -> Option<UnitId> {
        match self {
            Target::Unit(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_castle(&self) -> bool {
        matches!(self, Target::Castle)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    pub id: UnitId,
    pub unit_type: UnitType,
    pub family: Family,
    pub terrain: Terrain,

    // Progression
    pub level: u32,
    pub experience: f64,

    // Combat
    pub power: u32,
    pub max_hit_points: u32,
    pub hit_points: u32,
    pub is_dead: bool,

    // Spatial
    pub position: Vector,
    /// Facing in degrees; always agrees with `velocity`'s angle once turned
    pub rotation: f64,
    pub velocity: Vector,
    pub initial_velocity: Vector,
    pub top_border: f64,
    pub bottom_border: f64,
    pub speed_times: f64,

    pub state: UnitState,
    pub aim: Target,
    /// Rival unit currently aiming at this one (non-owning)
    pub attacked_by: Option<UnitId>,
}

impl Combatant {
    /// Fresh combatant at full health with stats already computed
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: UnitId,
        unit_type: UnitType,
        family: Family,
        terrain: Terrain,
        level: u32,
        max_hit_points: u32,
        power: u32,
        position: Vector,
        config: &BattleConfig,
    ) -> Self {
        let initial_velocity = family.facing();
        Self {
            id,
            unit_type,
            family,
            terrain,
            level,
            experience: (level * config.experience_per_level) as f64,
            power,
            max_hit_points,
            hit_points: max_hit_points,
            is_dead: false,
            position,
            rotation: initial_velocity.angle(),
            velocity: initial_velocity,
            initial_velocity,
            top_border: config.top_border(),
            bottom_border: config.bottom_border(),
            speed_times: config.speed_times,
            state: UnitState::Stand,
            aim: Target::None,
            attacked_by: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.is_dead
    }

    /// Change state; entering `Walk` restores the advance velocity
    pub fn set_state(&mut self, state: UnitState) {
        self.state = state;
        if state == UnitState::Walk {
            self.velocity = self.initial_velocity;
        }
    }

    /// Battle start: any unit still standing begins to walk
    pub fn set_fighting(&mut self) {
        if self.state == UnitState::Stand {
            self.set_state(UnitState::Walk);
        }
    }

    /// Earn experience; the level is derived from the running total
    pub fn add_exp(&mut self, amount: u32, config: &BattleConfig) {
        if self.level >= config.max_level {
            return;
        }
        self.experience += amount as f64 * config.exp_rate;
        self.level = (self.experience / config.experience_per_level as f64).floor() as u32;
    }

    /// Overwrite experience and re-derive the level
    pub fn set_exp(&mut self, experience: f64, config: &BattleConfig) {
        self.experience = experience;
        self.level = (self.experience / config.experience_per_level as f64).floor() as u32;
    }

    /// Take damage, flooring at zero, and die if nothing is left
    ///
    /// Returns the rival unit this one was aiming at when it died, so the
    /// caller can release that unit's duel link.
    pub fn lose_hit_points(&mut self, power: u32) -> Option<UnitId> {
        self.hit_points = self.hit_points.saturating_sub(power);
        self.check_is_dead()
    }

    /// Flag death once hit points are exhausted
    ///
    /// Fires at most once. Returns the released duel partner, if any.
    pub fn check_is_dead(&mut self) -> Option<UnitId> {
        if self.is_dead || self.hit_points > 0 {
            return None;
        }
        self.is_dead = true;
        self.aim.unit()
    }

    /// Drop the duel link with a rival that just died
    pub fn release(&mut self) {
        self.attacked_by = None;
        self.aim = Target::None;
    }

    /// Snap to the rival castle wall and start battering it
    pub fn attack_castle(&mut self, x_line: f64) {
        self.position.x = x_line;
        self.aim = Target::Castle;
        self.state = UnitState::Attack;
    }

    /// Full heal at the current stats
    pub fn heal(&mut self) {
        self.hit_points = self.max_hit_points;
    }

    pub fn distance_to(&self, other: &Combatant) -> f64 {
        self.position.distance(&other.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pike(family: Family) -> Combatant {
        Combatant::new(
            UnitId(1),
            UnitType::Pike,
            family,
            Terrain::Plain,
            0,
            230,
            14,
            Vector::new(200.0, 200.0),
            &BattleConfig::default(),
        )
    }

    #[test]
    fn test_enemy_faces_left() {
        let player = pike(Family::Player);
        let enemy = pike(Family::Enemy);
        assert_eq!(player.rotation, 0.0);
        assert_eq!(enemy.rotation, 180.0);
        assert_eq!(enemy.velocity, Vector::new(-1.0, 0.0));
    }

    #[test]
    fn test_lethal_damage_floors_and_kills() {
        let mut unit = pike(Family::Player);
        unit.aim = Target::Unit(UnitId(9));
        assert_eq!(unit.lose_hit_points(100), None);
        assert_eq!(unit.hit_points, 130);

        assert_eq!(unit.lose_hit_points(500), Some(UnitId(9)));
        assert_eq!(unit.hit_points, 0);
        assert!(unit.is_dead);

        // Death is reported once
        assert_eq!(unit.lose_hit_points(5), None);
        assert!(unit.is_dead);
    }

    #[test]
    fn test_castle_aim_is_not_released_on_death() {
        let mut unit = pike(Family::Enemy);
        unit.aim = Target::Castle;
        assert_eq!(unit.lose_hit_points(1000), None);
        assert!(unit.is_dead);
    }

    #[test]
    fn test_add_exp_levels_up() {
        let config = BattleConfig::default();
        let mut unit = pike(Family::Player);
        for _ in 0..34 {
            unit.add_exp(3, &config);
        }
        assert_eq!(unit.experience, 102.0);
        assert_eq!(unit.level, 1);
    }

    #[test]
    fn test_add_exp_stops_at_max_level() {
        let config = BattleConfig::default();
        let mut unit = pike(Family::Player);
        unit.set_exp(1200.0, &config);
        assert_eq!(unit.level, 12);
        unit.add_exp(500, &config);
        assert_eq!(unit.experience, 1200.0);
        assert_eq!(unit.level, 12);
    }

    #[test]
    fn test_set_fighting_only_moves_standing_units() {
        let mut unit = pike(Family::Player);
        unit.velocity = Vector::new(0.0, 1.0);
        unit.set_fighting();
        assert_eq!(unit.state, UnitState::Walk);
        assert_eq!(unit.velocity, Vector::new(1.0, 0.0));

        unit.state = UnitState::Attack;
        unit.set_fighting();
        assert_eq!(unit.state, UnitState::Attack);
    }

    #[test]
    fn test_attack_castle_snaps_position() {
        let mut unit = pike(Family::Player);
        unit.attack_castle(660.0);
        assert_eq!(unit.position.x, 660.0);
        assert_eq!(unit.aim, Target::Castle);
        assert_eq!(unit.state, UnitState::Attack);
    }
}
