//! Combatant steering
//!
//! Units either chase their aimed rival or drift back to their advance
//! direction, then step along their velocity. Turning is eased: each frame
//! closes a fraction of the angular gap.

use crate::battle::castle::Castle;
use crate::battle::combatant::{Combatant, Target, UnitState};
use crate::core::config::BattleConfig;
use crate::core::types::Family;

/// Result of a movement step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementResult {
    pub moved: bool,
    /// The unit crossed into the rival castle's reach this frame
    pub reached_castle: bool,
}

/// Advance one combatant by one frame
///
/// `rivals` is the opposing roster; `rival_castle` is the castle this unit
/// marches on.
pub fn move_unit(
    unit: &mut Combatant,
    rivals: &[Combatant],
    rival_castle: &Castle,
    config: &BattleConfig,
) -> MovementResult {
    enforce_boundaries(unit);

    let chased = match unit.aim {
        Target::Unit(id) => rivals.iter().find(|r| r.id == id).map(|r| r.position),
        _ => None,
    };

    match chased {
        Some(target) => {
            let heading = (target - unit.position).angle();
            update_rotation(
                unit,
                heading,
                config.rotation_speed * unit.speed_times,
                config.angle_deadband,
            );
            if unit.position.distance(&target) < config.stand_dist {
                return MovementResult::default();
            }
        }
        None => {
            if unit.state != UnitState::Walk {
                unit.set_state(UnitState::Walk);
            }
            let heading = unit.initial_velocity.angle();
            update_rotation(
                unit,
                heading,
                config.walk_rotation_speed * unit.speed_times,
                config.angle_deadband,
            );
        }
    }

    unit.position = unit.position + unit.velocity * unit.speed_times;

    MovementResult {
        moved: true,
        reached_castle: check_castle_proximity(unit, rival_castle, config),
    }
}

/// Clamp the unit vertically into the playable band
pub fn enforce_boundaries(unit: &mut Combatant) {
    unit.position.y = unit.position.y.clamp(unit.top_border, unit.bottom_border);
}

/// Ease `rotation` toward `target_degrees` along the shorter arc
///
/// Gaps within `deadband` degrees are left alone so the unit stops
/// oscillating once it is nearly on course.
pub fn update_rotation(unit: &mut Combatant, target_degrees: f64, speed: f64, deadband: f64) {
    let mut delta = (target_degrees - unit.rotation).rem_euclid(360.0);
    let mut sign = 1.0;

    if delta <= deadband {
        return;
    }
    if delta > 180.0 {
        delta = 360.0 - delta;
        sign = -1.0;
    }

    unit.rotation += sign * delta * speed;
    unit.velocity.set_angle(unit.rotation);
}

/// Snap to the wall once past it; true only on first arrival
fn check_castle_proximity(unit: &mut Combatant, rival_castle: &Castle, config: &BattleConfig) -> bool {
    let wall = castle_reach(unit.family, rival_castle, config);
    if !past_wall(unit.family, unit.position.x, wall) {
        return false;
    }
    let first_arrival = !unit.aim.is_castle();
    unit.attack_castle(wall);
    first_arrival
}

/// x coordinate at which a unit of `family` stands to hit `rival_castle`
pub fn castle_reach(family: Family, rival_castle: &Castle, config: &BattleConfig) -> f64 {
    match family {
        Family::Player => rival_castle.x_line - config.stand_dist,
        Family::Enemy => rival_castle.x_line + config.stand_dist,
    }
}

fn past_wall(family: Family, x: f64, wall: f64) -> bool {
    match family {
        Family::Player => x > wall,
        Family::Enemy => x < wall,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::terrain::Terrain;
    use crate::battle::unit_type::UnitType;
    use crate::core::types::{UnitId, Vector};

    fn unit(id: u32, family: Family, x: f64, y: f64) -> Combatant {
        let mut c = Combatant::new(
            UnitId(id),
            UnitType::Sword,
            family,
            Terrain::Plain,
            0,
            190,
            7,
            Vector::new(x, y),
            &BattleConfig::default(),
        );
        c.set_fighting();
        c
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_walks_forward_without_target() {
        let config = BattleConfig::default();
        let castle = Castle::new(100, config.enemy_castle_x_line());
        let mut player = unit(1, Family::Player, 200.0, 200.0);

        let result = move_unit(&mut player, &[], &castle, &config);

        assert!(result.moved);
        assert!(!result.reached_castle);
        assert!(approx(player.position.x, 201.0));
        assert!(approx(player.position.y, 200.0));
    }

    #[test]
    fn test_enemy_walks_left() {
        let config = BattleConfig::default();
        let castle = Castle::new(100, config.player_castle_x_line());
        let mut enemy = unit(1, Family::Enemy, 500.0, 200.0);

        move_unit(&mut enemy, &[], &castle, &config);

        assert!(approx(enemy.position.x, 499.0));
        assert!(approx(enemy.rotation, 180.0));
    }

    #[test]
    fn test_y_clamped_into_band() {
        let config = BattleConfig::default();
        let castle = Castle::new(100, config.enemy_castle_x_line());
        let mut player = unit(1, Family::Player, 200.0, 10.0);

        move_unit(&mut player, &[], &castle, &config);
        assert!(approx(player.position.y, config.top_border()));

        player.position.y = 1000.0;
        move_unit(&mut player, &[], &castle, &config);
        assert!(approx(player.position.y, config.bottom_border()));
    }

    #[test]
    fn test_stops_within_stand_distance() {
        let config = BattleConfig::default();
        let castle = Castle::new(100, config.enemy_castle_x_line());
        let mut player = unit(1, Family::Player, 200.0, 200.0);
        let rival = unit(2, Family::Enemy, 220.0, 200.0);
        player.aim = Target::Unit(rival.id);

        let result = move_unit(&mut player, &[rival], &castle, &config);

        assert!(!result.moved);
        assert!(approx(player.position.x, 200.0));
    }

    #[test]
    fn test_turns_toward_target() {
        let config = BattleConfig::default();
        let castle = Castle::new(100, config.enemy_castle_x_line());
        let mut player = unit(1, Family::Player, 200.0, 200.0);
        let rival = unit(2, Family::Enemy, 200.0, 300.0);
        player.aim = Target::Unit(rival.id);

        move_unit(&mut player, &[rival], &castle, &config);

        // 10% of a 90 degree gap
        assert!(approx(player.rotation, 9.0));
        assert!(player.position.y > 200.0);
    }

    #[test]
    fn test_rotation_takes_short_way_round() {
        let mut player = unit(1, Family::Player, 200.0, 200.0);
        update_rotation(&mut player, -90.0, 0.5, 1.0);
        assert!(approx(player.rotation, -45.0));
        assert!(approx(player.velocity.length(), 1.0));
    }

    #[test]
    fn test_rotation_deadband() {
        let mut player = unit(1, Family::Player, 200.0, 200.0);
        update_rotation(&mut player, 0.5, 0.5, 1.0);
        assert_eq!(player.rotation, 0.0);
        update_rotation(&mut player, 1.5, 0.5, 1.0);
        assert!(approx(player.rotation, 0.75));
    }

    #[test]
    fn test_castle_arrival_reported_once() {
        let config = BattleConfig::default();
        let castle = Castle::new(100, config.enemy_castle_x_line());
        let mut player = unit(1, Family::Player, 660.5, 200.0);

        assert!(move_unit(&mut player, &[], &castle, &config).reached_castle);
        assert!(!move_unit(&mut player, &[], &castle, &config).reached_castle);
        assert_eq!(player.position.x, 660.0);
        assert_eq!(player.state, UnitState::Attack);
    }

    #[test]
    fn test_reaching_enemy_castle() {
        let config = BattleConfig::default();
        let castle = Castle::new(100, config.enemy_castle_x_line());
        let mut player = unit(1, Family::Player, 660.5, 200.0);

        let result = move_unit(&mut player, &[], &castle, &config);

        assert!(result.reached_castle);
        assert_eq!(player.position.x, 660.0);
        assert_eq!(player.aim, Target::Castle);
        assert_eq!(player.state, UnitState::Attack);
    }

    #[test]
    fn test_reaching_player_castle() {
        let config = BattleConfig::default();
        let castle = Castle::new(100, config.player_castle_x_line());
        let mut enemy = unit(1, Family::Enemy, 140.5, 200.0);

        let result = move_unit(&mut enemy, &[], &castle, &config);

        assert!(result.reached_castle);
        assert_eq!(enemy.position.x, 140.0);
        assert_eq!(enemy.state, UnitState::Attack);
    }
}
