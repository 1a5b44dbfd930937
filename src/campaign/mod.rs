//! Campaign layer - the world map and the gold economy between battles

pub mod countries;
pub mod session;

pub use countries::{roll_army_power, ArmyPower, Country, MapCountries};
pub use session::GameSession;
