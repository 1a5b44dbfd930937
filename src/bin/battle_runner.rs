//! Headless Battle Runner
//!
//! Plays one seeded battle against a country's rolled army and prints the
//! result as JSON or text.

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use horde_conquest::battle::{BattleState, Placement, UnitType};
use horde_conquest::campaign::MapCountries;
use horde_conquest::core::config::GameConfig;
use horde_conquest::core::error::{ConquestError, Result};

/// Headless Battle Runner - one automatic battle, no rendering
#[derive(Parser, Debug)]
#[command(name = "battle_runner")]
#[command(about = "Run one battle against a country's defenders and report the outcome")]
struct Args {
    /// Country to attack (reachability is not checked)
    #[arg(long, default_value = "China")]
    country: String,

    /// Comma-separated player army, e.g. "pike,pike,bow,cavalry"
    #[arg(long, default_value = "pike,pike,sword,sword,bow,cavalry")]
    units: String,

    /// Gold backing the player castle (castle power = gold * power_per_gold)
    #[arg(long, default_value_t = 400)]
    gold: u32,

    /// Maximum ticks before giving up (undecided)
    #[arg(long, default_value_t = 20_000)]
    max_ticks: u64,

    /// Battle speed multiplier, 1 to 4
    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// TOML config overriding the built-in defaults
    #[arg(long)]
    config: Option<String>,

    /// Print battle events to stderr as they happen
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct BattleReport {
    country: String,
    terrain: String,
    outcome: String,
    ticks: u64,
    formation_id: u32,
    player_power: u32,
    /// Matchmaking power of the staged army alone
    army_strength: u32,
    enemy_power: u32,
    player_units: usize,
    enemy_units: usize,
    player_survivors: usize,
    enemy_survivors: usize,
    player_castle_hit_points: u32,
    enemy_castle_hit_points: u32,
    seed: u64,
}

fn parse_units(list: &str) -> Result<Vec<UnitType>> {
    list.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(str::parse::<UnitType>)
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    // Determine seed
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let map = MapCountries::new(&config.campaign, &mut rng)?;
    let country = map
        .country(&args.country)
        .ok_or_else(|| ConquestError::UnknownCountry(args.country.clone()))?;
    let army = &country.army_power;

    let mut state = BattleState::new(config.clone());
    state.set_speed(args.speed);
    for unit_type in parse_units(&args.units)? {
        if state.place_unit_anywhere(unit_type) == Placement::Rejected {
            tracing::warn!(%unit_type, "Staging grid is full, unit dropped");
        }
    }

    let player_power = args.gold * config.campaign.power_per_gold;
    let army_strength = state.calculate_country_power(0);
    state.create_world(&country.name, country.terrain);
    state.create_castles(player_power, army.power);
    state.add_enemies(&army.shape, &army.levels)?;

    let player_units = state.player_units().len();
    let enemy_units = state.enemy_units().len();
    state.init_battle()?;

    while !state.is_victory() && !state.is_game_over() && state.tick_count() < args.max_ticks {
        let events = state.tick();
        if args.verbose {
            for event in &events.events {
                eprintln!("  [{}] {:?}: {}", event.tick, event.event_type, event.description);
            }
        }
    }

    let report = BattleReport {
        country: country.name.clone(),
        terrain: country.terrain.to_string(),
        outcome: format!("{:?}", state.outcome()),
        ticks: state.tick_count(),
        formation_id: army.formation_id,
        player_power,
        army_strength,
        enemy_power: army.power,
        player_units,
        enemy_units,
        player_survivors: state.player_units().len(),
        enemy_survivors: state.enemy_units().len(),
        player_castle_hit_points: state.player_castle().map_or(0, |c| c.hit_points),
        enemy_castle_hit_points: state.enemy_castle().map_or(0, |c| c.hit_points),
        seed,
    };

    match args.format.as_str() {
        "text" => {
            println!("Battle Result");
            println!("=============");
            println!("Country: {} ({})", report.country, report.terrain);
            println!("Outcome: {}", report.outcome);
            println!("Ticks: {}", report.ticks);
            println!("Formation: {}", report.formation_id);
            println!("Army strength: {}", report.army_strength);
            println!(
                "Castles: player {}/{} enemy {}/{}",
                report.player_castle_hit_points,
                report.player_power,
                report.enemy_castle_hit_points,
                report.enemy_power
            );
            println!(
                "Survivors: player {}/{} enemy {}/{}",
                report.player_survivors,
                report.player_units,
                report.enemy_survivors,
                report.enemy_units
            );
            println!("Seed: {}", report.seed);
        }
        other => {
            if other != "json" {
                eprintln!("Unknown format '{}', defaulting to json", other);
            }
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
