//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Identifier for a combatant within one battle session
///
/// Ids are handed out by the owning `BattleState` and never reused, so a
/// stale id simply fails to resolve once its unit leaves the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl UnitId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Simulation frame counter
pub type Tick = u64;

/// Which side of the battlefield a combatant fights for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    Player,
    Enemy,
}

impl Family {
    /// Unit advance direction: players march right, enemies march left
    pub fn facing(&self) -> Vector {
        match self {
            Family::Player => Vector::new(1.0, 0.0),
            Family::Enemy => Vector::new(-1.0, 0.0),
        }
    }

    pub fn rival(&self) -> Family {
        match self {
            Family::Player => Family::Enemy,
            Family::Enemy => Family::Player,
        }
    }
}

/// 2D point or direction in battlefield pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Direction in degrees, atan2 convention (0 = +x, 90 = +y)
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x).to_degrees()
    }

    /// Rotate in place to `degrees`, keeping the current length
    pub fn set_angle(&mut self, degrees: f64) {
        let length = self.length();
        let radians = degrees.to_radians();
        self.x = length * radians.cos();
        self.y = length * radians.sin();
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self { x: self.x / len, y: self.y / len }
        } else {
            Self::default()
        }
    }
}

impl std::ops::Add for Vector {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::Sub for Vector {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Mul<f64> for Vector {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}
