//! Per-combatant combat logic: targeting, engagement, damage and death
//!
//! A combatant only ever aims at members of the rival roster, so every
//! function here takes the acting unit plus that roster. Duel links that
//! point back into the acting unit's own roster are returned to the caller
//! instead of being chased through a second mutable borrow.

use ordered_float::OrderedFloat;

use crate::battle::castle::Castle;
use crate::battle::combatant::{Combatant, Target, UnitState};
use crate::battle::movement::castle_reach;
use crate::core::config::BattleConfig;
use crate::core::types::{Family, UnitId};

/// Result of one attack
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttackResult {
    /// Damage dealt this frame (zero when not attacking)
    pub damage: u32,
    pub hit_castle: bool,
    /// Rival unit killed by this attack
    pub killed: Option<UnitId>,
    /// Own-roster unit whose duel link died with the victim
    pub released: Option<UnitId>,
}

/// Rival within acquisition reach
#[derive(Debug, Clone, Copy)]
struct Candidate {
    index: usize,
    dist: f64,
    dy: f64,
}

fn find_rival(rivals: &[Combatant], id: UnitId) -> Option<usize> {
    rivals.iter().position(|r| r.id == id)
}

fn find_living_rival(rivals: &[Combatant], id: UnitId) -> Option<usize> {
    rivals.iter().position(|r| r.id == id && r.is_alive())
}

/// Flag the unit dead if its hit points ran out, releasing its duel partner
///
/// Returns true if the unit died this call.
pub fn check_is_dead(unit: &mut Combatant, rivals: &mut [Combatant]) -> bool {
    if unit.is_dead || unit.hit_points > 0 {
        return false;
    }
    if let Some(partner) = unit.check_is_dead() {
        if let Some(index) = find_rival(rivals, partner) {
            rivals[index].release();
        }
    }
    true
}

/// Pick something to fight
///
/// A living unit aim is kept, and a castle aim is never abandoned. Otherwise
/// melee-range rivals are gathered and, only when at least one exists, the
/// ranged band beyond them as well. The pick is the rival in the closest lane
/// (smallest `|dy|`), then the nearest. A unit already being attacked turns
/// on its attacker instead.
pub fn acquire_target(unit: &mut Combatant, rivals: &mut [Combatant], config: &BattleConfig) {
    match unit.aim {
        Target::Castle => return,
        Target::Unit(id) => {
            if find_living_rival(rivals, id).is_some() {
                return;
            }
            unit.aim = Target::None;
            unit.state = UnitState::Walk;
        }
        Target::None => {}
    }

    let hit_dist = config.hit_dist;
    let reach = config.hit_dist + config.range_offset;

    let measured: Vec<Candidate> = rivals
        .iter()
        .enumerate()
        .filter(|(_, r)| r.is_alive())
        .map(|(index, r)| Candidate {
            index,
            dist: unit.distance_to(r),
            dy: (r.position.y - unit.position.y).abs(),
        })
        .collect();

    if !measured.iter().any(|c| c.dist < hit_dist) {
        return;
    }

    let Some(nearest) = measured
        .iter()
        .filter(|c| c.dist < reach)
        .min_by_key(|c| (OrderedFloat(c.dy), OrderedFloat(c.dist)))
    else {
        return;
    };

    let mut chosen = nearest.index;
    if let Some(attacker) = unit.attacked_by {
        if let Some(index) = find_living_rival(rivals, attacker) {
            chosen = index;
            unit.state = UnitState::Walk;
        }
    }

    let target = &mut rivals[chosen];
    target.attacked_by = Some(unit.id);
    unit.aim = Target::Unit(target.id);
}

/// Switch to attacking once close enough to the current aim
pub fn check_should_attack(
    unit: &mut Combatant,
    rivals: &[Combatant],
    rival_castle: &Castle,
    config: &BattleConfig,
) {
    if unit.state == UnitState::Attack {
        return;
    }

    let in_reach = match unit.aim {
        Target::None => false,
        Target::Unit(id) => find_rival(rivals, id)
            .map(|index| unit.distance_to(&rivals[index]) <= config.stand_dist)
            .unwrap_or(false),
        Target::Castle => {
            let wall = castle_reach(unit.family, rival_castle, config);
            match unit.family {
                Family::Player => unit.position.x >= wall,
                Family::Enemy => unit.position.x <= wall,
            }
        }
    };

    if in_reach {
        unit.state = UnitState::Attack;
    }
}

/// Deal this frame's damage to the aim and earn experience for it
pub fn attack(
    unit: &mut Combatant,
    rivals: &mut [Combatant],
    rival_castle: &mut Castle,
    config: &BattleConfig,
) -> AttackResult {
    let mut result = AttackResult::default();
    if unit.state != UnitState::Attack {
        return result;
    }

    match unit.aim {
        Target::None => return result,
        Target::Unit(id) => {
            let Some(index) = find_rival(rivals, id) else {
                return result;
            };
            let victim = &mut rivals[index];
            let was_alive = victim.is_alive();
            result.released = victim.lose_hit_points(unit.power);
            if was_alive && victim.is_dead {
                result.killed = Some(victim.id);
            }
        }
        Target::Castle => {
            rival_castle.lose_hit_points(unit.power);
            result.hit_castle = true;
        }
    }

    result.damage = unit.power;
    unit.add_exp(config.exp_step, config);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::terrain::Terrain;
    use crate::battle::unit_type::UnitType;
    use crate::core::types::Vector;

    fn unit(id: u32, family: Family, x: f64, y: f64) -> Combatant {
        let mut c = Combatant::new(
            UnitId(id),
            UnitType::Pike,
            family,
            Terrain::Plain,
            0,
            230,
            14,
            Vector::new(x, y),
            &BattleConfig::default(),
        );
        c.set_fighting();
        c
    }

    fn castle() -> Castle {
        Castle::new(100, BattleConfig::default().enemy_castle_x_line())
    }

    #[test]
    fn test_nothing_in_melee_range_means_no_target() {
        let config = BattleConfig::default();
        let mut player = unit(1, Family::Player, 200.0, 200.0);
        // Inside the ranged band but nobody in melee range
        let mut rivals = vec![unit(10, Family::Enemy, 350.0, 200.0)];

        acquire_target(&mut player, &mut rivals, &config);

        assert_eq!(player.aim, Target::None);
        assert_eq!(rivals[0].attacked_by, None);
    }

    #[test]
    fn test_prefers_same_lane_over_nearer() {
        let config = BattleConfig::default();
        let mut player = unit(1, Family::Player, 200.0, 200.0);
        let mut rivals = vec![
            unit(10, Family::Enemy, 230.0, 240.0), // dist 50, dy 40
            unit(11, Family::Enemy, 290.0, 200.0), // dist 90, dy 0
        ];

        acquire_target(&mut player, &mut rivals, &config);

        assert_eq!(player.aim, Target::Unit(UnitId(11)));
        assert_eq!(rivals[1].attacked_by, Some(UnitId(1)));
    }

    #[test]
    fn test_equal_lane_picks_nearer() {
        let config = BattleConfig::default();
        let mut player = unit(1, Family::Player, 200.0, 200.0);
        let mut rivals = vec![
            unit(10, Family::Enemy, 280.0, 210.0),
            unit(11, Family::Enemy, 240.0, 210.0),
        ];

        acquire_target(&mut player, &mut rivals, &config);

        assert_eq!(player.aim, Target::Unit(UnitId(11)));
    }

    #[test]
    fn test_ranged_band_joins_when_melee_present() {
        let config = BattleConfig::default();
        let mut player = unit(1, Family::Player, 200.0, 200.0);
        let mut rivals = vec![
            unit(10, Family::Enemy, 250.0, 250.0), // melee, dy 50
            unit(11, Family::Enemy, 400.0, 200.0), // ranged band, dy 0
        ];

        acquire_target(&mut player, &mut rivals, &config);

        assert_eq!(player.aim, Target::Unit(UnitId(11)));
    }

    #[test]
    fn test_ranged_band_starts_at_hit_distance() {
        let config = BattleConfig::default();
        let mut player = unit(1, Family::Player, 200.0, 200.0);
        let mut rivals = vec![
            unit(10, Family::Enemy, 250.0, 250.0), // melee, dy 50
            unit(11, Family::Enemy, 300.0, 200.0), // exactly hit_dist away, dy 0
        ];

        acquire_target(&mut player, &mut rivals, &config);

        assert_eq!(player.aim, Target::Unit(UnitId(11)));
    }

    #[test]
    fn test_engaged_unit_turns_on_attacker() {
        let config = BattleConfig::default();
        let mut player = unit(1, Family::Player, 200.0, 200.0);
        let mut rivals = vec![
            unit(10, Family::Enemy, 220.0, 200.0),
            unit(11, Family::Enemy, 270.0, 250.0),
        ];
        player.attacked_by = Some(UnitId(11));
        player.state = UnitState::Attack;

        acquire_target(&mut player, &mut rivals, &config);

        assert_eq!(player.aim, Target::Unit(UnitId(11)));
        assert_eq!(player.state, UnitState::Walk);
        assert_eq!(rivals[1].attacked_by, Some(UnitId(1)));
    }

    #[test]
    fn test_dead_aim_is_dropped() {
        let config = BattleConfig::default();
        let mut player = unit(1, Family::Player, 200.0, 200.0);
        let mut rivals = vec![unit(10, Family::Enemy, 220.0, 200.0)];
        player.aim = Target::Unit(UnitId(10));
        player.state = UnitState::Attack;
        rivals[0].hit_points = 0;
        rivals[0].is_dead = true;

        acquire_target(&mut player, &mut rivals, &config);

        assert_eq!(player.aim, Target::None);
        assert_eq!(player.state, UnitState::Walk);
    }

    #[test]
    fn test_castle_aim_is_kept() {
        let config = BattleConfig::default();
        let mut player = unit(1, Family::Player, 660.0, 200.0);
        player.aim = Target::Castle;
        let mut rivals = vec![unit(10, Family::Enemy, 640.0, 200.0)];

        acquire_target(&mut player, &mut rivals, &config);

        assert_eq!(player.aim, Target::Castle);
        assert_eq!(rivals[0].attacked_by, None);
    }

    #[test]
    fn test_should_attack_thresholds() {
        let config = BattleConfig::default();
        let castle = castle();
        let mut player = unit(1, Family::Player, 200.0, 200.0);
        let rivals = vec![unit(10, Family::Enemy, 231.0, 200.0)];
        player.aim = Target::Unit(UnitId(10));

        check_should_attack(&mut player, &rivals, &castle, &config);
        assert_eq!(player.state, UnitState::Walk);

        player.position.x = 201.0;
        check_should_attack(&mut player, &rivals, &castle, &config);
        assert_eq!(player.state, UnitState::Attack);
    }

    #[test]
    fn test_attack_kills_and_releases() {
        let config = BattleConfig::default();
        let mut castle = castle();
        let mut player = unit(1, Family::Player, 200.0, 200.0);
        let mut rivals = vec![unit(10, Family::Enemy, 220.0, 200.0)];
        player.aim = Target::Unit(UnitId(10));
        player.state = UnitState::Attack;
        rivals[0].aim = Target::Unit(UnitId(1));
        rivals[0].hit_points = 10;

        let result = attack(&mut player, &mut rivals, &mut castle, &config);

        assert_eq!(result.damage, 14);
        assert_eq!(result.killed, Some(UnitId(10)));
        assert_eq!(result.released, Some(UnitId(1)));
        assert!(rivals[0].is_dead);
        assert_eq!(rivals[0].hit_points, 0);
        assert_eq!(player.experience, 3.0);
    }

    #[test]
    fn test_attack_on_castle() {
        let config = BattleConfig::default();
        let mut castle = castle();
        let mut player = unit(1, Family::Player, 660.0, 200.0);
        player.attack_castle(660.0);

        let result = attack(&mut player, &mut [], &mut castle, &config);

        assert!(result.hit_castle);
        assert_eq!(castle.hit_points, 86);
    }

    #[test]
    fn test_no_damage_while_walking() {
        let config = BattleConfig::default();
        let mut castle = castle();
        let mut player = unit(1, Family::Player, 200.0, 200.0);
        player.aim = Target::Castle;

        let result = attack(&mut player, &mut [], &mut castle, &config);

        assert_eq!(result, AttackResult::default());
        assert_eq!(castle.hit_points, 100);
    }

    #[test]
    fn test_check_is_dead_releases_partner() {
        let mut player = unit(1, Family::Player, 200.0, 200.0);
        let mut rivals = vec![unit(10, Family::Enemy, 220.0, 200.0)];
        player.aim = Target::Unit(UnitId(10));
        rivals[0].aim = Target::Unit(UnitId(1));
        rivals[0].attacked_by = Some(UnitId(1));
        player.hit_points = 0;

        assert!(check_is_dead(&mut player, &mut rivals));
        assert!(player.is_dead);
        assert_eq!(rivals[0].aim, Target::None);
        assert_eq!(rivals[0].attacked_by, None);
        assert!(!check_is_dead(&mut player, &mut rivals));
    }
}
