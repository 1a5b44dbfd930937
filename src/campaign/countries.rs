//! Conquerable territories and their defending armies
//!
//! Every country rolls its army once, when the roster is generated: a tier
//! picks which ten formations are eligible and a level range sets how
//! seasoned the defenders are.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::battle::formation::{ArmyFormation, FormationSlot};
use crate::battle::stats::country_power;
use crate::battle::terrain::Terrain;
use crate::core::config::CampaignConfig;
use crate::core::error::{ConquestError, Result};

/// Highest army tier; formations run out beyond it
pub const MAX_TIER: u32 = 6;

/// A country's defending army, rolled once per roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmyPower {
    /// Matchmaking score; also the enemy castle's hit points
    pub power: u32,
    pub num_soldiers: u32,
    pub formation_id: u32,
    pub shape: Vec<FormationSlot>,
    /// Per-slot level, parallel to `shape`
    pub levels: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub is_conquered: bool,
    pub tier: u32,
    pub level: u32,
    pub army_power: ArmyPower,
    pub terrain: Terrain,
    pub neighbors: Vec<String>,
}

/// Static description of a country
#[derive(Debug, Clone, Copy)]
pub struct CountrySeed {
    pub name: &'static str,
    pub tier: u32,
    /// Base level and random spread: level = base + floor(random * spread)
    pub level_range: (u32, u32),
    pub terrain: Terrain,
    pub neighbors: &'static [&'static str],
}

const fn seed(
    name: &'static str,
    tier: u32,
    level_range: (u32, u32),
    terrain: Terrain,
    neighbors: &'static [&'static str],
) -> CountrySeed {
    CountrySeed {
        name,
        tier,
        level_range,
        terrain,
        neighbors,
    }
}

/// Roll a defending army of `tier` around `level`
///
/// Each slot's level is `level * hard_rate` shifted by triangular noise in
/// (-3, 3), floored and clamped at zero.
pub fn roll_army_power<R: Rng + ?Sized>(
    tier: u32,
    level: i64,
    config: &CampaignConfig,
    rng: &mut R,
) -> Result<ArmyPower> {
    if tier < 1 || tier > MAX_TIER {
        return Err(ConquestError::InvalidTier(tier));
    }
    if level < 0 {
        return Err(ConquestError::InvalidLevel(level));
    }

    let formations = ArmyFormation::new();
    let formation_id = rng.gen_range(formations.tier_range(tier));
    let shape = formations.get(formation_id)?;

    let mut power = 0;
    let mut levels = Vec::with_capacity(shape.len());
    for slot in shape {
        let props = slot.unit_type()?.properties();
        let noise = (rng.gen::<f64>() - rng.gen::<f64>()) * 3.0;
        let weighted = (level as f64 * config.global_hard_rate + noise).floor().max(0.0) as u32;
        power += country_power(props.cost, props.cost_upgrade_rate, weighted) * config.power_per_unit;
        levels.push(weighted);
    }

    tracing::debug!(tier, level, formation_id, power, "Rolled army power");

    Ok(ArmyPower {
        power,
        num_soldiers: 6 + 2 * tier,
        formation_id,
        shape: shape.to_vec(),
        levels,
    })
}

/// The world map: every country, who holds it, and what defends it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapCountries {
    home: String,
    countries: Vec<Country>,
}

impl MapCountries {
    /// Generate the roster; only the home country starts conquered
    pub fn new<R: Rng + ?Sized>(config: &CampaignConfig, rng: &mut R) -> Result<Self> {
        if !COUNTRY_SEEDS.iter().any(|s| s.name == config.home_country) {
            return Err(ConquestError::UnknownCountry(config.home_country.clone()));
        }

        let countries = COUNTRY_SEEDS
            .iter()
            .map(|seed| {
                let (base, spread) = seed.level_range;
                let level = base + (rng.gen::<f64>() * spread as f64).floor() as u32;
                Ok(Country {
                    name: seed.name.to_string(),
                    is_conquered: seed.name == config.home_country,
                    tier: seed.tier,
                    level,
                    army_power: roll_army_power(seed.tier, level as i64, config, rng)?,
                    terrain: seed.terrain,
                    neighbors: seed.neighbors.iter().map(|n| n.to_string()).collect(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            home: config.home_country.clone(),
            countries,
        })
    }

    /// Regenerate every army and hand back everything but the home country
    pub fn reset<R: Rng + ?Sized>(&mut self, config: &CampaignConfig, rng: &mut R) -> Result<()> {
        *self = Self::new(config, rng)?;
        Ok(())
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn country(&self, name: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.name == name)
    }

    pub fn conquered(&self) -> impl Iterator<Item = &Country> {
        self.countries.iter().filter(|c| c.is_conquered)
    }

    /// Unconquered neighbors of conquered countries, in first-seen order
    pub fn reachable_countries(&self) -> Vec<String> {
        let mut reachable: Vec<String> = Vec::new();
        for name in self.conquered().flat_map(|c| c.neighbors.iter()) {
            let taken = self.country(name).map(|c| c.is_conquered).unwrap_or(true);
            if !taken && !reachable.contains(name) {
                reachable.push(name.clone());
            }
        }
        reachable
    }

    pub fn is_reachable(&self, name: &str) -> bool {
        self.reachable_countries().iter().any(|n| n == name)
    }

    pub fn conquer_country(&mut self, name: &str) -> Result<()> {
        let country = self
            .countries
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| ConquestError::UnknownCountry(name.to_string()))?;
        country.is_conquered = true;
        tracing::info!(country = name, "Country conquered");
        Ok(())
    }

    pub fn world_conquered(&self) -> bool {
        self.countries.iter().all(|c| c.is_conquered)
    }
}

/// Every country on the map
pub static COUNTRY_SEEDS: [CountrySeed; 56] = [
    seed("China", 1, (0, 0), Terrain::Plain, &[
        "Korea", "Afghanistan", "Pakistan", "Tajikistan", "Kirghizstan", "Kazakhstan",
        "Bhutan", "India", "Nepal", "Myanmar", "Laos", "Vietnam", "Japan", "Russia",
        "Mongolia",
    ]),
    seed("Mongolia", 1, (0, 0), Terrain::Grassland, &["Russia", "China"]),
    seed("Russia", 6, (18, 2), Terrain::Grassland, &[
        "Korea", "Latvia", "Lithuania", "Poland", "Belarus", "Ukraine", "Syria", "Turkey",
        "Iran", "Tajikistan", "Kazakhstan", "Mongolia", "China", "Japan",
    ]),
    seed("Japan", 2, (1, 2), Terrain::Mountain, &["China", "Korea"]),
    seed("Korea", 1, (3, 2), Terrain::Mountain, &["Russia", "China", "Japan"]),
    seed("Vietnam", 4, (5, 2), Terrain::Mountain, &[
        "Myanmar", "Thailand", "Cambodia", "Laos", "China",
    ]),
    seed("Laos", 2, (2, 2), Terrain::Mountain, &[
        "Myanmar", "Thailand", "Cambodia", "Vietnam", "China",
    ]),
    seed("Cambodia", 1, (3, 2), Terrain::Forest, &["Thailand", "Laos", "Vietnam"]),
    seed("Thailand", 4, (5, 2), Terrain::Grassland, &[
        "Myanmar", "Cambodia", "Laos", "Vietnam",
    ]),
    seed("Myanmar", 5, (4, 2), Terrain::Forest, &[
        "Bangladesh", "India", "Thailand", "Laos", "Vietnam", "China",
    ]),
    seed("Nepal", 4, (1, 2), Terrain::Mountain, &["Bangladesh", "India", "China"]),
    seed("India", 6, (15, 2), Terrain::Plain, &[
        "Pakistan", "Bhutan", "Bangladesh", "Nepal", "Myanmar", "China",
    ]),
    seed("Bangladesh", 1, (4, 2), Terrain::Forest, &["India", "Nepal", "Myanmar"]),
    seed("Bhutan", 1, (3, 2), Terrain::Forest, &["India", "China"]),
    seed("Kazakhstan", 6, (15, 2), Terrain::Grassland, &[
        "Turkmenistan", "Tajikistan", "Kirghizstan", "Uzbekistan", "Russia", "China",
    ]),
    seed("Uzbekistan", 5, (9, 3), Terrain::Grassland, &[
        "Turkmenistan", "Afghanistan", "Tajikistan", "Kazakhstan",
    ]),
    seed("Kirghizstan", 1, (8, 2), Terrain::Grassland, &[
        "Tajikistan", "Kazakhstan", "China",
    ]),
    seed("Tajikistan", 4, (4, 2), Terrain::Grassland, &[
        "Afghanistan", "Pakistan", "Kirghizstan", "Uzbekistan", "Kazakhstan", "China",
    ]),
    seed("Pakistan", 5, (10, 2), Terrain::Mountain, &[
        "Turkmenistan", "Iran", "Afghanistan", "Tajikistan", "India", "China",
    ]),
    seed("Afghanistan", 3, (11, 2), Terrain::Mountain, &[
        "Turkmenistan", "Iran", "Pakistan", "Tajikistan", "Uzbekistan", "China",
    ]),
    seed("Iran", 6, (10, 2), Terrain::Plain, &[
        "United Arab Emirates", "Kuwait", "Oman", "Iraq", "Turkey", "Turkmenistan",
        "Afghanistan", "Pakistan", "Russia",
    ]),
    seed("Turkmenistan", 5, (11, 2), Terrain::Mountain, &[
        "Iran", "Afghanistan", "Pakistan", "Uzbekistan", "Kazakhstan",
    ]),
    seed("Turkey", 6, (12, 2), Terrain::Mountain, &[
        "Bulgaria", "Greece", "Iraq", "Syria", "Iran", "Russia",
    ]),
    seed("Syria", 6, (12, 2), Terrain::Mountain, &["Jordan", "Iraq", "Turkey", "Russia"]),
    seed("Iraq", 5, (15, 2), Terrain::Plain, &[
        "Jordan", "Kuwait", "Saudi Arabia", "Syria", "Turkey", "Iran",
    ]),
    seed("Saudi Arabia", 6, (16, 2), Terrain::Plain, &[
        "Israel", "United Arab Emirates", "Jordan", "Kuwait", "Oman", "Yemen", "Iraq",
    ]),
    seed("Yemen", 5, (11, 2), Terrain::Plain, &["Oman", "Saudi Arabia"]),
    seed("Oman", 6, (12, 2), Terrain::Plain, &[
        "United Arab Emirates", "Yemen", "Saudi Arabia",
    ]),
    seed("Kuwait", 4, (10, 2), Terrain::Plain, &["Saudi Arabia", "Iraq", "Iran"]),
    seed("Jordan", 5, (14, 2), Terrain::Plain, &["Israel", "Saudi Arabia", "Iraq", "Syria"]),
    seed("United Arab Emirates", 5, (14, 2), Terrain::Plain, &["Oman", "Saudi Arabia"]),
    seed("Israel", 6, (16, 2), Terrain::Plain, &["Jordan", "Saudi Arabia"]),
    seed("Greece", 6, (18, 4), Terrain::Mountain, &[
        "Macedonia", "Albania", "Bulgaria", "Turkey",
    ]),
    seed("Bulgaria", 3, (12, 2), Terrain::Mountain, &[
        "Serbia", "Macedonia", "Ukraine", "Romania", "Greece", "Turkey", "Russia",
    ]),
    seed("Romania", 5, (15, 2), Terrain::Mountain, &[
        "Hungary", "Serbia", "Ukraine", "Moldavia", "Bulgaria",
    ]),
    seed("Moldavia", 6, (12, 2), Terrain::Mountain, &["Ukraine", "Romania", "Russia"]),
    seed("Ukraine", 6, (16, 2), Terrain::Grassland, &[
        "Hungary", "Slovakia", "Poland", "Belarus", "Moldavia", "Romania", "Bulgaria",
        "Russia",
    ]),
    seed("Belarus", 5, (14, 2), Terrain::Grassland, &[
        "Latvia", "Lithuania", "Poland", "Ukraine",
    ]),
    seed("Albania", 6, (9, 2), Terrain::Forest, &[
        "Montenegro", "Serbia", "Macedonia", "Greece",
    ]),
    seed("Macedonia", 5, (11, 2), Terrain::Forest, &[
        "Serbia", "Albania", "Bulgaria", "Greece",
    ]),
    seed("Serbia", 6, (13, 2), Terrain::Mountain, &[
        "Montenegro", "Bosnia", "Croatia", "Hungary", "Macedonia", "Albania", "Romania",
        "Bulgaria",
    ]),
    seed("Poland", 2, (16, 2), Terrain::Mountain, &[
        "Hungary", "Slovakia", "Czech", "Austria", "Germany", "Lithuania", "Belarus",
        "Ukraine", "Russia",
    ]),
    seed("Lithuania", 5, (12, 2), Terrain::Mountain, &[
        "Latvia", "Poland", "Belarus", "Russia",
    ]),
    seed("Latvia", 6, (11, 2), Terrain::Mountain, &["Lithuania", "Belarus", "Russia"]),
    seed("Italy", 5, (16, 2), Terrain::Mountain, &["Swiss", "Austria"]),
    seed("Germany", 6, (18, 2), Terrain::Plain, &[
        "Swiss", "France", "Czech", "Austria", "Poland",
    ]),
    seed("Austria", 5, (12, 2), Terrain::Mountain, &[
        "Swiss", "Slovenia", "Hungary", "Slovakia", "Czech", "Germany", "Italy", "Poland",
    ]),
    seed("Czech", 5, (12, 2), Terrain::Grassland, &[
        "Slovakia", "Austria", "Germany", "Poland",
    ]),
    seed("Slovakia", 4, (11, 2), Terrain::Grassland, &[
        "Hungary", "Czech", "Austria", "Poland", "Ukraine",
    ]),
    seed("Hungary", 5, (14, 2), Terrain::Grassland, &[
        "Bosnia", "Croatia", "Slovenia", "Slovakia", "Austria", "Poland", "Serbia",
        "Ukraine", "Romania",
    ]),
    seed("Slovenia", 4, (12, 2), Terrain::Grassland, &["Croatia", "Hungary", "Austria"]),
    seed("Croatia", 5, (11, 2), Terrain::Mountain, &[
        "Bosnia", "Slovenia", "Hungary", "Serbia",
    ]),
    seed("Bosnia", 6, (13, 2), Terrain::Grassland, &[
        "Montenegro", "Croatia", "Hungary", "Serbia",
    ]),
    seed("France", 5, (15, 2), Terrain::Mountain, &["Swiss", "Germany"]),
    seed("Swiss", 5, (10, 2), Terrain::Mountain, &["France", "Austria", "Germany", "Italy"]),
    seed("Montenegro", 5, (12, 2), Terrain::Mountain, &["Bosnia", "Serbia", "Albania"]),
];
