//! Campaign session: gold, the world map and the battle in progress
//!
//! One `GameSession` is one player's game. It owns its random source so a
//! seeded session replays identically.

use rand_chacha::ChaCha8Rng;
use rand::SeedableRng;

use crate::battle::execution::{BattleEventLog, BattleOutcome, BattleState};
use crate::battle::placement::Placement;
use crate::battle::unit_type::UnitType;
use crate::campaign::countries::MapCountries;
use crate::core::config::GameConfig;
use crate::core::error::{ConquestError, Result};
use crate::core::types::UnitId;

#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    rng: ChaCha8Rng,
    gold: u32,
    map: MapCountries,
    battle: BattleState,
    selected: Option<String>,
    last_outcome: Option<BattleOutcome>,
}

impl GameSession {
    pub fn new(config: GameConfig, mut rng: ChaCha8Rng) -> Result<Self> {
        config.validate()?;
        let map = MapCountries::new(&config.campaign, &mut rng)?;
        let battle = BattleState::new(config.clone());
        Ok(Self {
            gold: config.campaign.starting_gold,
            config,
            rng,
            map,
            battle,
            selected: None,
            last_outcome: None,
        })
    }

    pub fn from_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn map(&self) -> &MapCountries {
        &self.map
    }

    pub fn battle(&self) -> &BattleState {
        &self.battle
    }

    pub fn selected_country(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Result of the most recently finished battle
    pub fn last_outcome(&self) -> Option<BattleOutcome> {
        self.last_outcome
    }

    pub fn world_conquered(&self) -> bool {
        self.map.world_conquered()
    }

    fn ensure_not_fighting(&self) -> Result<()> {
        if self.battle.is_battle_started() {
            return Err(ConquestError::BattleInProgress);
        }
        Ok(())
    }

    /// Open the battle screen for a neighboring, unconquered country
    pub fn select_country(&mut self, name: &str) -> Result<()> {
        self.ensure_not_fighting()?;
        let country = self
            .map
            .country(name)
            .ok_or_else(|| ConquestError::UnknownCountry(name.to_string()))?;
        if country.is_conquered {
            return Err(ConquestError::AlreadyConquered(name.to_string()));
        }
        if !self.map.is_reachable(name) {
            return Err(ConquestError::Unreachable(name.to_string()));
        }

        let terrain = country.terrain;
        let army = country.army_power.clone();

        // A previous selection may still be staged
        self.battle.clear_encounter();

        let player_power = self.gold * self.config.campaign.power_per_gold;
        self.battle.create_world(name, terrain);
        self.battle.create_castles(player_power, army.power);
        self.battle.add_enemies(&army.shape, &army.levels)?;
        self.selected = Some(name.to_string());

        tracing::info!(
            country = name,
            %terrain,
            player_power,
            enemy_power = army.power,
            "Country selected"
        );
        Ok(())
    }

    /// Buy and place a unit; clicking an occupied tile costs nothing
    pub fn place_unit(&mut self, grid_x: i32, grid_y: i32, unit_type: UnitType) -> Result<Placement> {
        self.ensure_not_fighting()?;
        if let Some(existing) = self.battle.unit_at(grid_x, grid_y) {
            return Ok(Placement::Existing(existing));
        }

        let cost = unit_type.cost();
        if cost > self.gold {
            return Err(ConquestError::InsufficientGold {
                needed: cost,
                available: self.gold,
            });
        }

        let placement = self.battle.place_unit(grid_x, grid_y, unit_type);
        if let Placement::Placed(_) = placement {
            self.gold -= cost;
        }
        Ok(placement)
    }

    /// Buy a unit and seat it on the first free tile
    pub fn recruit(&mut self, unit_type: UnitType) -> Result<Placement> {
        self.ensure_not_fighting()?;
        let cost = unit_type.cost();
        if cost > self.gold {
            return Err(ConquestError::InsufficientGold {
                needed: cost,
                available: self.gold,
            });
        }
        let placement = self.battle.place_unit_anywhere(unit_type);
        if let Placement::Placed(_) = placement {
            self.gold -= cost;
        }
        Ok(placement)
    }

    pub fn sell_unit(&mut self, id: UnitId) -> Result<u32> {
        self.ensure_not_fighting()?;
        let refund = self
            .battle
            .sell_unit(id)
            .ok_or(ConquestError::UnknownUnit(id))?;
        self.gold += refund;
        Ok(refund)
    }

    pub fn upgrade_unit(&mut self, id: UnitId) -> Result<()> {
        self.ensure_not_fighting()?;
        let cost = self
            .battle
            .upgrade_cost(id)
            .ok_or(ConquestError::UnknownUnit(id))?;
        if cost > self.gold {
            return Err(ConquestError::InsufficientGold {
                needed: cost,
                available: self.gold,
            });
        }
        self.battle
            .upgrade_unit(id)
            .ok_or(ConquestError::UnknownUnit(id))?;
        self.gold -= cost;
        Ok(())
    }

    /// Start the battle against the selected country
    pub fn fight(&mut self) -> Result<()> {
        if self.selected.is_none() {
            return Err(ConquestError::NoBattle);
        }
        self.battle.init_battle()
    }

    /// Advance the running battle one frame and settle it if it just ended
    pub fn tick(&mut self) -> Result<BattleEventLog> {
        if !self.battle.is_battle_started() {
            return Err(ConquestError::NoBattle);
        }

        let events = self.battle.tick();
        match self.battle.outcome() {
            BattleOutcome::Undecided => {}
            BattleOutcome::Victory => self.settle_victory()?,
            BattleOutcome::Defeat => {
                self.last_outcome = Some(BattleOutcome::Defeat);
                tracing::info!(country = ?self.selected, "Castle lost, starting over");
                self.new_game()?;
            }
        }
        Ok(events)
    }

    fn settle_victory(&mut self) -> Result<()> {
        let name = self.selected.take().ok_or(ConquestError::NoBattle)?;
        self.map.conquer_country(&name)?;
        let interest = (self.gold as f64 * self.config.campaign.victory_interest).floor() as u32;
        self.gold += interest;
        self.battle.reset_after_battle();
        self.last_outcome = Some(BattleOutcome::Victory);
        tracing::info!(country = %name, interest, gold = self.gold, "Victory");
        Ok(())
    }

    /// Abandon the current battle, paying the retreat penalty
    pub fn retreat(&mut self) -> Result<()> {
        let name = self.selected.take().ok_or(ConquestError::NoBattle)?;
        let kept = 1.0 - self.config.campaign.retreat_penalty;
        self.gold = (self.gold as f64 * kept).floor() as u32;
        self.battle.reset_after_battle();
        tracing::info!(country = %name, gold = self.gold, "Retreated");
        Ok(())
    }

    /// Fresh roster, starting gold, empty army
    pub fn new_game(&mut self) -> Result<()> {
        self.map.reset(&self.config.campaign, &mut self.rng)?;
        self.gold = self.config.campaign.starting_gold;
        self.selected = None;
        self.battle.reset_game();
        tracing::info!(gold = self.gold, "New game");
        Ok(())
    }

    pub fn set_speed(&mut self, times: f64) {
        self.battle.set_speed(times);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession::from_seed(GameConfig::default(), 3).unwrap()
    }

    #[test]
    fn test_starts_with_gold_and_home() {
        let session = session();
        assert_eq!(session.gold(), 400);
        assert!(session.map().country("Mongolia").unwrap().is_conquered);
        assert!(session.selected_country().is_none());
    }

    #[test]
    fn test_select_country_gating() {
        let mut session = session();
        assert!(matches!(
            session.select_country("Atlantis"),
            Err(ConquestError::UnknownCountry(_))
        ));
        assert!(matches!(
            session.select_country("Mongolia"),
            Err(ConquestError::AlreadyConquered(_))
        ));
        assert!(matches!(
            session.select_country("France"),
            Err(ConquestError::Unreachable(_))
        ));
        session.select_country("China").unwrap();
        assert_eq!(session.selected_country(), Some("China"));
        assert!(!session.battle().enemy_units().is_empty());
    }

    #[test]
    fn test_player_castle_backed_by_gold() {
        let mut session = session();
        session.place_unit(0, 0, UnitType::Cavalry).unwrap();
        session.select_country("China").unwrap();
        assert_eq!(session.gold(), 340);
        assert_eq!(session.battle().player_castle().unwrap().max_hit_points, 1700);
        assert_eq!(
            session.battle().enemy_castle().unwrap().max_hit_points,
            session.map().country("China").unwrap().army_power.power
        );
    }

    #[test]
    fn test_reselect_keeps_unit_layout() {
        let mut session = session();
        let Placement::Placed(pike) = session.place_unit(1, 6, UnitType::Pike).unwrap() else {
            panic!("placement failed");
        };
        session.select_country("China").unwrap();
        session.select_country("Russia").unwrap();

        assert_eq!(session.battle().unit_at(1, 6), Some(pike));
        assert_eq!(session.selected_country(), Some("Russia"));
        assert_eq!(session.battle().country.as_deref(), Some("Russia"));
    }

    #[test]
    fn test_place_charges_gold() {
        let mut session = session();
        session.select_country("China").unwrap();
        let placement = session.place_unit(0, 0, UnitType::Cavalry).unwrap();
        assert!(matches!(placement, Placement::Placed(_)));
        assert_eq!(session.gold(), 340);

        // Clicking the same unit is free
        let again = session.place_unit(1, 0, UnitType::Pike).unwrap();
        assert!(matches!(again, Placement::Existing(_)));
        assert_eq!(session.gold(), 340);

        // Rejected placements are free too
        assert_eq!(session.place_unit(20, 0, UnitType::Pike).unwrap(), Placement::Rejected);
        assert_eq!(session.gold(), 340);
    }

    #[test]
    fn test_cannot_overspend() {
        let mut session = session();
        for row in 0..6 {
            session.place_unit(0, row, UnitType::Cavalry).unwrap();
        }
        assert_eq!(session.gold(), 40);
        let err = session.place_unit(3, 0, UnitType::Cavalry).unwrap_err();
        assert!(matches!(
            err,
            ConquestError::InsufficientGold { needed: 60, available: 40 }
        ));
    }

    #[test]
    fn test_sell_and_upgrade_move_gold() {
        let mut session = session();
        let Placement::Placed(id) = session.place_unit(0, 0, UnitType::Cavalry).unwrap() else {
            panic!("placement failed");
        };
        session.upgrade_unit(id).unwrap();
        assert_eq!(session.gold(), 400 - 60 - 9);
        assert_eq!(session.sell_unit(id).unwrap(), 45);
        assert_eq!(session.gold(), 400 - 60 - 9 + 45);
        assert!(matches!(session.sell_unit(id), Err(ConquestError::UnknownUnit(_))));
    }

    #[test]
    fn test_fight_requires_selection() {
        let mut session = session();
        assert!(matches!(session.fight(), Err(ConquestError::NoBattle)));
        assert!(matches!(session.tick(), Err(ConquestError::NoBattle)));
    }

    #[test]
    fn test_retreat_costs_ten_percent() {
        let mut session = session();
        session.select_country("China").unwrap();
        session.fight().unwrap();
        session.tick().unwrap();
        session.retreat().unwrap();
        assert_eq!(session.gold(), 360);
        assert!(!session.battle().is_battle_started());
        assert!(matches!(session.retreat(), Err(ConquestError::NoBattle)));
    }

    #[test]
    fn test_new_game_restores_gold() {
        let mut session = session();
        session.place_unit(0, 0, UnitType::Pike).unwrap();
        session.new_game().unwrap();
        assert_eq!(session.gold(), 400);
        assert!(session.battle().player_units().is_empty());
    }
}
