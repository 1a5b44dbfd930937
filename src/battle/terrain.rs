//! Battlefield terrain
//!
//! Terrain is fixed for a whole battle and only shifts unit stats once, at
//! creation time (see `UnitType::terrain_rates`).

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Terrain {
    #[default]
    Plain,
    Forest,
    Grassland,
    Mountain,
}

impl Terrain {
    pub const ALL: [Terrain; 4] = [
        Terrain::Plain,
        Terrain::Forest,
        Terrain::Grassland,
        Terrain::Mountain,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Terrain::Plain => "Plain",
            Terrain::Forest => "Forest",
            Terrain::Grassland => "Grassland",
            Terrain::Mountain => "Mountain",
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
