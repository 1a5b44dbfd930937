//! Battle execution loop
//!
//! Each tick every living player unit acts, then every living enemy unit,
//! each running: death check -> movement -> targeting -> engagement -> attack.
//! The dead are swept out of both rosters once the tick completes.

use serde::{Deserialize, Serialize};

use crate::battle::castle::Castle;
use crate::battle::combat::{acquire_target, attack, check_is_dead, check_should_attack, AttackResult};
use crate::battle::combatant::{Combatant, Target, UnitState};
use crate::battle::constants::{DEFAULT_SPEED_TIMES, MAX_SPEED_TIMES};
use crate::battle::factory::{SoldierFactory, Tile};
use crate::battle::formation::FormationSlot;
use crate::battle::movement::move_unit;
use crate::battle::placement::{
    self, sell_value, upgrade_cost, Placement, UnitManager, UnitStatsView, UpgradePreview,
};
use crate::battle::stats::unit_country_power;
use crate::battle::terrain::Terrain;
use crate::battle::unit_type::UnitType;
use crate::core::config::{BattleConfig, GameConfig};
use crate::core::error::{ConquestError, Result};
use crate::core::types::{Family, Tick, UnitId};

/// Battle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BattlePhase {
    #[default]
    Deployment, // Placing units
    Active,   // Battle in progress
    Finished, // One castle has fallen
}

/// Battle outcome, from the player's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BattleOutcome {
    #[default]
    Undecided,
    Victory,
    Defeat,
}

/// Log entry for battle events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleEvent {
    pub tick: Tick,
    pub event_type: BattleEventType,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BattleEventType {
    BattleStarted,
    UnitKilled { unit_id: UnitId, family: Family },
    CastleReached { unit_id: UnitId, family: Family },
    BattleEnded { outcome: BattleOutcome },
}

/// Log of events from a single tick
#[derive(Debug, Clone, Default)]
pub struct BattleEventLog {
    pub events: Vec<BattleEvent>,
}

impl BattleEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event_type: BattleEventType, description: String, tick: Tick) {
        self.events.push(BattleEvent {
            tick,
            event_type,
            description,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// What happened to one combatant during its frame
#[derive(Debug, Clone, Copy, Default)]
struct FrameReport {
    died: bool,
    reached_castle: bool,
    attack: AttackResult,
}

/// One combatant's frame against the rival roster and castle
fn run_frame(
    unit: &mut Combatant,
    rivals: &mut [Combatant],
    rival_castle: &mut Castle,
    config: &BattleConfig,
) -> FrameReport {
    let mut report = FrameReport::default();

    if check_is_dead(unit, rivals) {
        report.died = true;
        return report;
    }

    report.reached_castle = move_unit(unit, rivals, rival_castle, config).reached_castle;
    acquire_target(unit, rivals, config);
    check_should_attack(unit, rivals, rival_castle, config);
    report.attack = attack(unit, rivals, rival_castle, config);
    report
}

/// Run every living member of `own` once, then release duel links broken by kills
fn run_army(
    own: &mut [Combatant],
    rivals: &mut [Combatant],
    rival_castle: &mut Castle,
    config: &BattleConfig,
    tick: Tick,
    events: &mut BattleEventLog,
) {
    for index in 0..own.len() {
        if own[index].is_dead {
            continue;
        }

        let unit = &mut own[index];
        let (unit_id, family) = (unit.id, unit.family);
        let report = run_frame(unit, rivals, rival_castle, config);

        if report.died {
            tracing::debug!(unit = ?unit_id, ?family, "Unit died");
            events.push(
                BattleEventType::UnitKilled { unit_id, family },
                format!("{:?} unit {} fell", family, unit_id.0),
                tick,
            );
            continue;
        }

        if report.reached_castle {
            tracing::debug!(unit = ?unit_id, ?family, "Unit reached rival castle");
            events.push(
                BattleEventType::CastleReached { unit_id, family },
                format!("{:?} unit {} is attacking the castle", family, unit_id.0),
                tick,
            );
        }

        if let Some(victim) = report.attack.killed {
            let victim_family = family.rival();
            tracing::debug!(unit = ?victim, family = ?victim_family, killer = ?unit_id, "Unit killed");
            events.push(
                BattleEventType::UnitKilled {
                    unit_id: victim,
                    family: victim_family,
                },
                format!("{:?} unit {} fell to unit {}", victim_family, victim.0, unit_id.0),
                tick,
            );
        }

        if let Some(released) = report.attack.released {
            if let Some(partner) = own.iter_mut().find(|u| u.id == released) {
                partner.release();
            }
        }
    }
}

/// Complete battle state: both rosters, both castles and the staging grid
#[derive(Debug, Clone)]
pub struct BattleState {
    config: GameConfig,
    factory: SoldierFactory,
    units: UnitManager,
    next_id: u32,

    pub country: Option<String>,
    player_units: Vec<Combatant>,
    enemy_units: Vec<Combatant>,
    player_castle: Option<Castle>,
    enemy_castle: Option<Castle>,

    // Time
    tick: Tick,
    phase: BattlePhase,
    outcome: BattleOutcome,

    // Log
    pub battle_log: Vec<BattleEvent>,
}

impl BattleState {
    pub fn new(config: GameConfig) -> Self {
        let factory = SoldierFactory::new(config.battle.clone(), Terrain::default());
        let units = UnitManager::new(&config.battle);
        Self {
            config,
            factory,
            units,
            next_id: 1,
            country: None,
            player_units: Vec::new(),
            enemy_units: Vec::new(),
            player_castle: None,
            enemy_castle: None,
            tick: 0,
            phase: BattlePhase::Deployment,
            outcome: BattleOutcome::Undecided,
            battle_log: Vec::new(),
        }
    }

    fn allocate_id(&mut self) -> UnitId {
        let id = UnitId::new(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn outcome(&self) -> BattleOutcome {
        self.outcome
    }

    pub fn terrain(&self) -> Terrain {
        self.factory.terrain()
    }

    pub fn tick_count(&self) -> Tick {
        self.tick
    }

    pub fn player_units(&self) -> &[Combatant] {
        &self.player_units
    }

    pub fn enemy_units(&self) -> &[Combatant] {
        &self.enemy_units
    }

    pub fn player_castle(&self) -> Option<&Castle> {
        self.player_castle.as_ref()
    }

    pub fn enemy_castle(&self) -> Option<&Castle> {
        self.enemy_castle.as_ref()
    }

    pub fn unit(&self, id: UnitId) -> Option<&Combatant> {
        self.player_units
            .iter()
            .chain(self.enemy_units.iter())
            .find(|u| u.id == id)
    }

    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Combatant> {
        self.player_units
            .iter_mut()
            .chain(self.enemy_units.iter_mut())
            .find(|u| u.id == id)
    }

    pub fn is_victory(&self) -> bool {
        self.outcome == BattleOutcome::Victory
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome == BattleOutcome::Defeat
    }

    pub fn is_battle_started(&self) -> bool {
        self.phase == BattlePhase::Active
    }

    // ===== SETUP =====

    /// Prepare the field for a battle in `country`
    pub fn create_world(&mut self, country: &str, terrain: Terrain) {
        self.country = Some(country.to_string());
        self.factory.set_terrain(terrain);
    }

    pub fn create_castles(&mut self, player_power: u32, enemy_power: u32) {
        let battle = &self.config.battle;
        self.player_castle = Some(Castle::new(player_power, battle.player_castle_x_line()));
        self.enemy_castle = Some(Castle::new(enemy_power, battle.enemy_castle_x_line()));
    }

    /// Replace the enemy roster with one unit per formation slot
    pub fn add_enemies(&mut self, shape: &[FormationSlot], levels: &[u32]) -> Result<()> {
        if shape.len() != levels.len() {
            return Err(ConquestError::LevelCountMismatch {
                slots: shape.len(),
                levels: levels.len(),
            });
        }

        let first_id = self.next_id;
        let enemies = shape
            .iter()
            .zip(levels)
            .enumerate()
            .map(|(offset, (slot, level))| {
                let id = UnitId::new(first_id + offset as u32);
                self.factory.create_enemy(id, slot, *level)
            })
            .collect::<Result<Vec<_>>>()?;

        self.next_id = first_id + enemies.len() as u32;
        self.enemy_units = enemies;
        Ok(())
    }

    // ===== STAGING =====

    /// Place a new level-0 unit, or report the unit already on that tile
    pub fn place_unit(&mut self, grid_x: i32, grid_y: i32, unit_type: UnitType) -> Placement {
        if self.phase != BattlePhase::Deployment {
            return Placement::Rejected;
        }

        let tile: Tile = (grid_x, grid_y);
        if let Some(existing) = self.units.unit_at(tile) {
            return Placement::Existing(existing);
        }

        if !self.units.can_place(tile, unit_type) {
            tracing::debug!(?tile, %unit_type, "Placement rejected");
            return Placement::Rejected;
        }

        let id = self.allocate_id();
        let unit = self.factory.create_player(id, unit_type, 0, tile);
        self.units.occupy(id, tile, unit_type);
        self.player_units.push(unit);
        Placement::Placed(id)
    }

    /// Seat a unit of `unit_type` on the first free tile
    pub fn place_unit_anywhere(&mut self, unit_type: UnitType) -> Placement {
        match self.units.find_next_empty(unit_type) {
            Some((grid_x, grid_y)) => self.place_unit(grid_x, grid_y, unit_type),
            None => Placement::Rejected,
        }
    }

    pub fn unit_at(&self, grid_x: i32, grid_y: i32) -> Option<UnitId> {
        self.units.unit_at((grid_x, grid_y))
    }

    /// Remove a staged unit; returns the refund
    pub fn sell_unit(&mut self, id: UnitId) -> Option<u32> {
        if self.phase != BattlePhase::Deployment {
            return None;
        }
        let index = self.player_units.iter().position(|u| u.id == id)?;
        let unit = self.player_units.remove(index);
        self.units.vacate(id);
        Some(sell_value(unit.unit_type, self.config.campaign.sell_refund_rate))
    }

    pub fn upgrade_unit(&mut self, id: UnitId) -> Option<()> {
        if self.phase != BattlePhase::Deployment {
            return None;
        }
        let unit = self.player_units.iter_mut().find(|u| u.id == id)?;
        placement::upgrade_unit(unit, &self.factory);
        Some(())
    }

    /// Gold an upgrade of `id` would cost
    pub fn upgrade_cost(&self, id: UnitId) -> Option<u32> {
        self.player_units
            .iter()
            .find(|u| u.id == id)
            .map(|u| upgrade_cost(u.unit_type))
    }

    pub fn unit_stats(&self, id: UnitId) -> Option<UnitStatsView> {
        self.player_units
            .iter()
            .find(|u| u.id == id)
            .map(|u| placement::unit_stats(u, &self.config.battle))
    }

    pub fn upgrade_preview(&self, id: UnitId) -> Option<UpgradePreview> {
        self.player_units
            .iter()
            .find(|u| u.id == id)
            .map(|u| placement::upgrade_preview(u, &self.factory))
    }

    pub fn remaining_valid_space(&self) -> u32 {
        self.units.remaining_valid_space()
    }

    /// `initial` plus the matchmaking power of every player unit
    pub fn calculate_country_power(&self, initial: u32) -> u32 {
        let per_unit = self.config.campaign.power_per_unit;
        self.player_units.iter().fold(initial, |power, unit| {
            power + unit_country_power(unit.unit_type, unit.level) * per_unit
        })
    }

    /// Battle speed multiplier, clamped to 1..=4
    pub fn set_speed(&mut self, times: f64) {
        let times = times.clamp(DEFAULT_SPEED_TIMES, MAX_SPEED_TIMES);
        self.config.battle.speed_times = times;
        for unit in self.player_units.iter_mut().chain(self.enemy_units.iter_mut()) {
            unit.speed_times = times;
        }
    }

    pub fn speed(&self) -> f64 {
        self.config.battle.speed_times
    }

    // ===== BATTLE =====

    /// Snapshot player stats at their current level and start marching
    pub fn init_battle(&mut self) -> Result<()> {
        if self.phase == BattlePhase::Active {
            return Err(ConquestError::BattleInProgress);
        }
        if self.player_castle.is_none() || self.enemy_castle.is_none() {
            return Err(ConquestError::NoBattle);
        }

        let speed = self.config.battle.speed_times;
        let refreshed: Vec<Combatant> = self
            .player_units
            .iter()
            .map(|unit| {
                let tile = self
                    .units
                    .seat_of(unit.id)
                    .unwrap_or_else(|| self.factory.tile_at(unit.position));
                let mut fresh = self
                    .factory
                    .create_player(unit.id, unit.unit_type, unit.level, tile);
                fresh.position = unit.position;
                fresh
            })
            .collect();
        self.player_units = refreshed;

        for unit in self.player_units.iter_mut().chain(self.enemy_units.iter_mut()) {
            unit.speed_times = speed;
            unit.set_fighting();
        }

        self.tick = 0;
        self.phase = BattlePhase::Active;
        self.outcome = BattleOutcome::Undecided;
        self.log_event(BattleEventType::BattleStarted, "Battle has begun!".into());
        tracing::info!(
            country = self.country.as_deref().unwrap_or("unknown"),
            terrain = %self.factory.terrain(),
            players = self.player_units.len(),
            enemies = self.enemy_units.len(),
            "Battle started"
        );
        Ok(())
    }

    /// Advance the battle by one frame
    pub fn tick(&mut self) -> BattleEventLog {
        let mut events = BattleEventLog::new();

        if self.phase != BattlePhase::Active {
            return events;
        }
        let (Some(player_castle), Some(enemy_castle)) =
            (self.player_castle.as_mut(), self.enemy_castle.as_mut())
        else {
            return events;
        };

        self.tick += 1;
        let config = &self.config.battle;

        run_army(
            &mut self.player_units,
            &mut self.enemy_units,
            enemy_castle,
            config,
            self.tick,
            &mut events,
        );
        run_army(
            &mut self.enemy_units,
            &mut self.player_units,
            player_castle,
            config,
            self.tick,
            &mut events,
        );

        self.player_units.retain(Combatant::is_alive);
        self.enemy_units.retain(Combatant::is_alive);

        self.check_victory();
        if self.phase == BattlePhase::Finished {
            events.push(
                BattleEventType::BattleEnded {
                    outcome: self.outcome,
                },
                format!("Battle ended: {:?}", self.outcome),
                self.tick,
            );
        }

        self.battle_log.extend(events.events.iter().cloned());
        events
    }

    /// Settle the battle once a castle has fallen; the player's castle is checked first
    pub fn check_victory(&mut self) {
        if self.phase != BattlePhase::Active {
            return;
        }
        let (Some(player_castle), Some(enemy_castle)) = (&self.player_castle, &self.enemy_castle)
        else {
            return;
        };

        let outcome = if player_castle.is_destroyed() {
            BattleOutcome::Defeat
        } else if enemy_castle.is_destroyed() {
            BattleOutcome::Victory
        } else {
            return;
        };

        self.outcome = outcome;
        self.phase = BattlePhase::Finished;
        tracing::info!(
            ?outcome,
            tick = self.tick,
            survivors = self.player_units.len(),
            "Battle ended"
        );
    }

    /// Drop the staged encounter (enemies, castles, country) but leave the
    /// player's army where it was placed
    ///
    /// No-op while a battle is running.
    pub fn clear_encounter(&mut self) {
        if self.phase == BattlePhase::Active {
            return;
        }
        self.phase = BattlePhase::Deployment;
        self.outcome = BattleOutcome::Undecided;
        self.tick = 0;
        self.country = None;
        self.player_castle = None;
        self.enemy_castle = None;
        self.enemy_units.clear();
        self.battle_log.clear();
    }

    /// Tear down the battle, keeping the player's army healed and re-seated
    pub fn reset_after_battle(&mut self) {
        self.phase = BattlePhase::Deployment;
        self.clear_encounter();

        for unit in self.player_units.iter_mut() {
            unit.heal();
            unit.set_state(UnitState::Stand);
            unit.rotation = unit.initial_velocity.angle();
            unit.aim = Target::None;
            unit.attacked_by = None;
        }
        self.units.reseat(&mut self.player_units, &self.factory);
    }

    /// Forget the player's army as well
    pub fn reset_game(&mut self) {
        self.player_units.clear();
        self.units.clear();
        self.reset_after_battle();
    }

    fn log_event(&mut self, event_type: BattleEventType, description: String) {
        self.battle_log.push(BattleEvent {
            tick: self.tick,
            event_type,
            description,
        });
    }
}
