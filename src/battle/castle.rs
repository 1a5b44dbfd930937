//! Castles - the win/loss hit point pools at either end of the field

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Castle {
    pub max_hit_points: u32,
    pub hit_points: u32,
    /// Battlefield x coordinate of the castle wall
    pub x_line: f64,
}

impl Castle {
    pub fn new(hit_points: u32, x_line: f64) -> Self {
        Self {
            max_hit_points: hit_points,
            hit_points,
            x_line,
        }
    }

    /// Apply damage, flooring at zero
    pub fn lose_hit_points(&mut self, power: u32) {
        self.hit_points = self.hit_points.saturating_sub(power);
    }

    pub fn is_destroyed(&self) -> bool {
        self.hit_points == 0
    }

    /// Remaining hit points as a fraction of the maximum
    pub fn health_fraction(&self) -> f32 {
        if self.max_hit_points == 0 {
            return 0.0;
        }
        self.hit_points as f32 / self.max_hit_points as f32
    }
}
