//! Enemy formation catalog
//!
//! Sixty fixed troop layouts, numbered 1..=60. Ids 1-10 belong to army
//! tier 1, 11-20 to tier 2 and so on. Slot offsets are battlefield pixels on
//! the enemy side, before the enemy x offset is added.

use serde::{Deserialize, Serialize};

use crate::battle::unit_type::UnitType;
use crate::core::error::{ConquestError, Result};

/// Number of formations each army tier can choose from
pub const FORMATIONS_PER_TIER: u32 = 10;

/// One unit position inside a formation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormationSlot {
    pub type_id: u8,
    pub x: i32,
    pub y: i32,
}

impl FormationSlot {
    pub fn unit_type(&self) -> Result<UnitType> {
        UnitType::from_id(self.type_id)
    }
}

const fn s(type_id: u8, x: i32, y: i32) -> FormationSlot {
    FormationSlot { type_id, x, y }
}

/// Read-only access to the formation table
#[derive(Debug, Clone, Copy, Default)]
pub struct ArmyFormation;

impl ArmyFormation {
    pub fn new() -> Self {
        Self
    }

    /// Slots for formation `id` (1-based)
    pub fn get(&self, id: u32) -> Result<&'static [FormationSlot]> {
        id.checked_sub(1)
            .and_then(|index| CATALOG.get(index as usize))
            .copied()
            .ok_or(ConquestError::UnknownFormation(id))
    }

    pub fn count(&self) -> usize {
        CATALOG.len()
    }

    /// Formation ids available to an army tier (1-based)
    pub fn tier_range(&self, tier: u32) -> std::ops::RangeInclusive<u32> {
        let first = (tier.saturating_sub(1)) * FORMATIONS_PER_TIER + 1;
        first..=first + FORMATIONS_PER_TIER - 1
    }

    /// A formation is usable when it is non-empty, every slot names a known
    /// unit type and no offset is negative
    pub fn is_valid(formation: &[FormationSlot]) -> bool {
        !formation.is_empty()
            && formation
                .iter()
                .all(|slot| slot.unit_type().is_ok() && slot.x >= 0 && slot.y >= 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &'static [FormationSlot])> {
        CATALOG
            .iter()
            .enumerate()
            .map(|(index, slots)| (index as u32 + 1, *slots))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_sixty_formations() {
        assert_eq!(ArmyFormation::new().count(), 60);
    }

    #[test]
    fn test_every_formation_is_valid() {
        for (id, slots) in ArmyFormation::new().iter() {
            assert!(ArmyFormation::is_valid(slots), "formation {id} is invalid");
        }
    }

    #[test]
    fn test_lookup_bounds() {
        let formations = ArmyFormation::new();
        assert!(formations.get(0).is_err());
        assert!(formations.get(61).is_err());
        assert_eq!(formations.get(1).unwrap().len(), 8);
        assert_eq!(formations.get(50).unwrap().len(), 20);
    }

    #[test]
    fn test_tier_ranges() {
        let formations = ArmyFormation::new();
        assert_eq!(formations.tier_range(1), 1..=10);
        assert_eq!(formations.tier_range(6), 51..=60);
    }

    #[test]
    fn test_invalid_slots_rejected() {
        assert!(!ArmyFormation::is_valid(&[]));
        assert!(!ArmyFormation::is_valid(&[s(4, 10, 10)]));
        assert!(!ArmyFormation::is_valid(&[s(1, -1, 10)]));
    }

    #[test]
    fn test_formation_ranks_grow_with_tier() {
        let formations = ArmyFormation::new();
        let first = formations.get(1).unwrap().len();
        let last = formations.get(60).unwrap().len();
        assert!(last > first);
    }
}

const SHAPE_1: &[FormationSlot] = &[
    s(2, 190, 316), s(2, 158, 316), s(2, 190, 284), s(2, 158, 284),
    s(2, 190, 220), s(2, 158, 220), s(2, 190, 188), s(2, 158, 188),
];

const SHAPE_2: &[FormationSlot] = &[
    s(2, 254, 348), s(2, 254, 316), s(2, 222, 284), s(2, 222, 252),
    s(2, 190, 252), s(2, 222, 220), s(2, 254, 188), s(2, 254, 156),
];

const SHAPE_3: &[FormationSlot] = &[
    s(2, 222, 348), s(3, 286, 316), s(2, 190, 284), s(3, 286, 252),
    s(2, 190, 252), s(2, 190, 220), s(3, 286, 188), s(2, 222, 156),
];

const SHAPE_4: &[FormationSlot] = &[
    s(3, 318, 348), s(1, 222, 348), s(1, 222, 316), s(2, 222, 252),
    s(2, 190, 252), s(1, 222, 188), s(3, 318, 156), s(1, 222, 156),
];

const SHAPE_5: &[FormationSlot] = &[
    s(3, 318, 348), s(1, 222, 316), s(1, 222, 284), s(1, 190, 252),
    s(1, 158, 252), s(1, 222, 220), s(1, 222, 188), s(3, 318, 156),
];

const SHAPE_6: &[FormationSlot] = &[
    s(3, 286, 348), s(2, 222, 316), s(2, 222, 284), s(3, 286, 252),
    s(0, 158, 252), s(2, 222, 220), s(2, 222, 188), s(3, 286, 156),
];

const SHAPE_7: &[FormationSlot] = &[
    s(3, 286, 348), s(2, 158, 348), s(2, 126, 348), s(3, 318, 316),
    s(0, 318, 252), s(3, 318, 188), s(3, 286, 156), s(2, 158, 156),
    s(2, 126, 156),
];

const SHAPE_8: &[FormationSlot] = &[
    s(3, 254, 348), s(0, 158, 316), s(2, 254, 252), s(2, 222, 252),
    s(2, 190, 252), s(2, 158, 252), s(0, 158, 188), s(3, 254, 156),
];

const SHAPE_9: &[FormationSlot] = &[
    s(2, 286, 380), s(2, 254, 380), s(2, 222, 380), s(2, 190, 380),
    s(2, 286, 124), s(2, 254, 124), s(2, 222, 124), s(2, 190, 124),
];

const SHAPE_10: &[FormationSlot] = &[
    s(3, 254, 284), s(2, 222, 284), s(2, 190, 284), s(2, 222, 252),
    s(2, 190, 252), s(3, 254, 220), s(2, 222, 220), s(2, 190, 220),
];

const SHAPE_11: &[FormationSlot] = &[
    s(2, 254, 316), s(2, 222, 316), s(2, 190, 316), s(2, 158, 316),
    s(2, 254, 284), s(2, 222, 284), s(2, 190, 284), s(2, 158, 284),
];

const SHAPE_12: &[FormationSlot] = &[
    s(1, 286, 284), s(2, 254, 284), s(2, 222, 284), s(3, 318, 252),
    s(1, 286, 252), s(2, 254, 252), s(2, 222, 252), s(1, 286, 220),
    s(2, 254, 220), s(2, 222, 220),
];

const SHAPE_13: &[FormationSlot] = &[
    s(2, 286, 348), s(2, 286, 316), s(2, 254, 316), s(2, 222, 284),
    s(2, 222, 252), s(2, 190, 252), s(2, 222, 220), s(2, 286, 188),
    s(2, 254, 188), s(2, 286, 156),
];

const SHAPE_14: &[FormationSlot] = &[
    s(2, 222, 316), s(2, 126, 316), s(2, 190, 284), s(2, 158, 284),
    s(3, 286, 252), s(3, 254, 252), s(2, 190, 220), s(2, 158, 220),
    s(2, 222, 188), s(2, 126, 188),
];

const SHAPE_15: &[FormationSlot] = &[
    s(3, 286, 348), s(1, 190, 348), s(2, 222, 316), s(2, 254, 284),
    s(3, 318, 252), s(2, 254, 252), s(2, 254, 220), s(2, 222, 188),
    s(3, 286, 156), s(2, 190, 156),
];

const SHAPE_16: &[FormationSlot] = &[
    s(3, 286, 348), s(2, 190, 348), s(2, 222, 316), s(1, 254, 284),
    s(1, 286, 252), s(0, 158, 252), s(1, 254, 220), s(2, 222, 188),
    s(3, 286, 156), s(2, 190, 156),
];

const SHAPE_17: &[FormationSlot] = &[
    s(2, 254, 316), s(1, 190, 316), s(2, 254, 284), s(1, 190, 284),
    s(2, 222, 252), s(0, 158, 252), s(2, 254, 220), s(1, 190, 220),
    s(2, 254, 188), s(1, 190, 188),
];

const SHAPE_18: &[FormationSlot] = &[
    s(2, 190, 348), s(1, 190, 316), s(2, 222, 284), s(1, 190, 284),
    s(2, 222, 252), s(0, 158, 252), s(2, 222, 220), s(1, 190, 220),
    s(1, 190, 188), s(2, 190, 156),
];

const SHAPE_19: &[FormationSlot] = &[
    s(2, 158, 380), s(2, 190, 348), s(1, 222, 316), s(3, 286, 284),
    s(3, 286, 252), s(0, 158, 252), s(3, 286, 220), s(1, 222, 188),
    s(2, 190, 156), s(2, 158, 124),
];

const SHAPE_20: &[FormationSlot] = &[
    s(3, 286, 380), s(3, 286, 348), s(2, 222, 316), s(2, 222, 284),
    s(3, 318, 252), s(0, 158, 252), s(2, 222, 220), s(2, 222, 188),
    s(3, 286, 156), s(3, 286, 124),
];

const SHAPE_21: &[FormationSlot] = &[
    s(3, 318, 380), s(3, 286, 380), s(2, 254, 348), s(2, 222, 316),
    s(2, 350, 252), s(2, 318, 252), s(2, 286, 252), s(2, 254, 252),
    s(2, 222, 188), s(2, 254, 156), s(3, 318, 124), s(3, 286, 124),
];

const SHAPE_22: &[FormationSlot] = &[
    s(3, 286, 348), s(3, 286, 316), s(1, 222, 316), s(1, 190, 316),
    s(3, 286, 284), s(3, 286, 252), s(2, 190, 252), s(3, 286, 220),
    s(3, 286, 188), s(1, 222, 188), s(1, 190, 188), s(3, 286, 156),
];

const SHAPE_23: &[FormationSlot] = &[
    s(2, 254, 348), s(2, 318, 316), s(2, 222, 316), s(2, 286, 284),
    s(2, 190, 284), s(2, 254, 252), s(2, 158, 252), s(2, 286, 220),
    s(2, 190, 220), s(2, 318, 188), s(2, 222, 188), s(2, 254, 156),
];

const SHAPE_24: &[FormationSlot] = &[
    s(2, 158, 348), s(2, 286, 316), s(2, 190, 316), s(2, 318, 284),
    s(2, 222, 284), s(2, 350, 252), s(2, 254, 252), s(2, 318, 220),
    s(2, 222, 220), s(2, 286, 188), s(2, 190, 188), s(2, 158, 156),
];

const SHAPE_25: &[FormationSlot] = &[
    s(2, 318, 348), s(2, 286, 348), s(2, 254, 348), s(2, 222, 348),
    s(2, 318, 252), s(2, 286, 252), s(2, 254, 252), s(2, 222, 252),
    s(2, 318, 156), s(2, 286, 156), s(2, 254, 156), s(2, 222, 156),
];

const SHAPE_26: &[FormationSlot] = &[
    s(2, 158, 380), s(2, 126, 380), s(2, 190, 348), s(3, 350, 316),
    s(2, 222, 316), s(2, 254, 284), s(0, 350, 252), s(2, 254, 220),
    s(2, 222, 188), s(2, 190, 156), s(2, 158, 124), s(2, 126, 124),
];

const SHAPE_27: &[FormationSlot] = &[
    s(3, 350, 348), s(0, 190, 348), s(2, 254, 316), s(1, 222, 316),
    s(3, 350, 284), s(2, 286, 284), s(2, 254, 284), s(2, 318, 252),
    s(2, 286, 252), s(2, 350, 220), s(2, 318, 220), s(2, 350, 188),
];

const SHAPE_28: &[FormationSlot] = &[
    s(0, 190, 348), s(2, 254, 284), s(2, 222, 284), s(2, 190, 284),
    s(3, 318, 252), s(2, 254, 252), s(2, 222, 252), s(2, 190, 252),
    s(2, 254, 220), s(2, 222, 220), s(2, 190, 220), s(0, 190, 156),
];

const SHAPE_29: &[FormationSlot] = &[
    s(2, 286, 380), s(2, 254, 380), s(2, 222, 348), s(3, 318, 316),
    s(2, 222, 316), s(2, 254, 284), s(2, 254, 252), s(0, 190, 252),
    s(3, 318, 220), s(2, 254, 220), s(2, 222, 188), s(2, 222, 156),
    s(2, 286, 124), s(2, 254, 124),
];

const SHAPE_30: &[FormationSlot] = &[
    s(2, 254, 380), s(2, 222, 380), s(2, 190, 380), s(3, 318, 348),
    s(1, 190, 284), s(3, 318, 252), s(0, 190, 252), s(1, 190, 220),
    s(3, 318, 156), s(2, 254, 124), s(2, 222, 124), s(2, 190, 124),
];

const SHAPE_31: &[FormationSlot] = &[
    s(2, 254, 348), s(2, 286, 316), s(2, 254, 316), s(2, 318, 284),
    s(2, 254, 284), s(2, 350, 252), s(2, 318, 252), s(2, 286, 252),
    s(2, 254, 252), s(2, 222, 252), s(2, 190, 252), s(2, 254, 220),
    s(2, 254, 188), s(2, 254, 156),
];

const SHAPE_32: &[FormationSlot] = &[
    s(2, 318, 380), s(2, 286, 380), s(3, 350, 348), s(2, 254, 348),
    s(2, 222, 316), s(2, 254, 284), s(2, 318, 252), s(2, 286, 252),
    s(2, 254, 220), s(2, 222, 188), s(3, 350, 156), s(2, 254, 156),
    s(2, 318, 124), s(2, 286, 124),
];

const SHAPE_33: &[FormationSlot] = &[
    s(2, 254, 316), s(2, 222, 316), s(2, 286, 284), s(2, 222, 284),
    s(2, 190, 284), s(3, 350, 252), s(2, 318, 252), s(2, 190, 252),
    s(2, 158, 252), s(2, 286, 220), s(2, 222, 220), s(2, 190, 220),
    s(2, 254, 188), s(2, 222, 188),
];

const SHAPE_34: &[FormationSlot] = &[
    s(2, 318, 316), s(2, 286, 316), s(2, 254, 316), s(2, 222, 316),
    s(2, 318, 284), s(1, 222, 284), s(2, 318, 252), s(1, 222, 252),
    s(2, 318, 220), s(1, 222, 220), s(2, 318, 188), s(2, 286, 188),
    s(2, 254, 188), s(2, 222, 188),
];

const SHAPE_35: &[FormationSlot] = &[
    s(2, 318, 348), s(2, 286, 348), s(2, 318, 316), s(2, 254, 316),
    s(2, 318, 284), s(2, 222, 284), s(2, 318, 252), s(2, 190, 252),
    s(2, 318, 220), s(2, 222, 220), s(2, 318, 188), s(2, 254, 188),
    s(2, 318, 156), s(2, 286, 156),
];

const SHAPE_36: &[FormationSlot] = &[
    s(2, 350, 380), s(2, 318, 348), s(2, 286, 316), s(2, 222, 316),
    s(2, 254, 284), s(2, 190, 284), s(0, 350, 252), s(0, 158, 252),
    s(2, 254, 220), s(2, 190, 220), s(2, 286, 188), s(2, 222, 188),
    s(2, 318, 156), s(2, 350, 124),
];

const SHAPE_37: &[FormationSlot] = &[
    s(1, 190, 380), s(2, 158, 380), s(1, 222, 348), s(2, 190, 348),
    s(1, 254, 316), s(2, 222, 316), s(1, 286, 284), s(2, 254, 284),
    s(1, 318, 252), s(2, 286, 252), s(1, 350, 220), s(2, 318, 220),
    s(2, 190, 188), s(0, 190, 156),
];

const SHAPE_38: &[FormationSlot] = &[
    s(3, 350, 316), s(1, 286, 316), s(2, 254, 316), s(1, 286, 284),
    s(2, 254, 284), s(3, 350, 252), s(2, 286, 252), s(2, 254, 252),
    s(0, 190, 252), s(1, 286, 220), s(2, 254, 220), s(3, 350, 188),
    s(1, 286, 188), s(2, 254, 188),
];

const SHAPE_39: &[FormationSlot] = &[
    s(3, 318, 348), s(2, 222, 348), s(2, 222, 316), s(2, 222, 284),
    s(3, 382, 252), s(2, 318, 252), s(2, 286, 252), s(2, 254, 252),
    s(2, 222, 252), s(0, 158, 252), s(2, 222, 220), s(2, 222, 188),
    s(3, 318, 156), s(2, 222, 156),
];

const SHAPE_40: &[FormationSlot] = &[
    s(2, 286, 316), s(2, 254, 316), s(2, 222, 316), s(2, 190, 316),
    s(2, 190, 284), s(3, 318, 252), s(2, 222, 252), s(0, 158, 252),
    s(2, 254, 220), s(2, 286, 188), s(2, 286, 156), s(2, 254, 156),
    s(2, 222, 156), s(2, 190, 156),
];

const SHAPE_41: &[FormationSlot] = &[
    s(3, 350, 348), s(2, 190, 348), s(2, 254, 316), s(2, 222, 316),
    s(2, 286, 284), s(2, 254, 284), s(2, 350, 252), s(2, 318, 252),
    s(2, 286, 252), s(1, 254, 252), s(2, 286, 220), s(2, 254, 220),
    s(2, 254, 188), s(2, 222, 188), s(3, 350, 156), s(2, 190, 156),
];

const SHAPE_42: &[FormationSlot] = &[
    s(3, 318, 316), s(2, 286, 316), s(2, 254, 316), s(2, 222, 316),
    s(2, 190, 316), s(2, 158, 316), s(2, 254, 284), s(2, 222, 284),
    s(2, 254, 252), s(2, 222, 252), s(3, 318, 220), s(2, 286, 220),
    s(2, 254, 220), s(2, 222, 220), s(2, 190, 220), s(2, 158, 220),
];

const SHAPE_43: &[FormationSlot] = &[
    s(3, 350, 348), s(2, 318, 348), s(3, 350, 316), s(2, 318, 316),
    s(3, 350, 284), s(2, 318, 284), s(3, 350, 252), s(2, 318, 252),
    s(3, 350, 220), s(2, 318, 220), s(2, 286, 220), s(2, 254, 220),
    s(2, 222, 220), s(2, 190, 220), s(1, 222, 156), s(1, 190, 156),
];

const SHAPE_44: &[FormationSlot] = &[
    s(2, 318, 316), s(2, 286, 316), s(2, 254, 316), s(2, 222, 316),
    s(2, 190, 316), s(2, 318, 284), s(2, 318, 252), s(2, 286, 252),
    s(2, 254, 252), s(2, 222, 252), s(2, 318, 220), s(2, 318, 188),
    s(2, 286, 188), s(2, 254, 188), s(2, 222, 188), s(2, 190, 188),
];

const SHAPE_45: &[FormationSlot] = &[
    s(1, 350, 348), s(1, 318, 348), s(1, 286, 348), s(1, 254, 348),
    s(1, 222, 348), s(1, 190, 348), s(1, 222, 316), s(1, 190, 316),
    s(3, 350, 284), s(1, 222, 284), s(1, 254, 252), s(1, 286, 220),
    s(1, 350, 188), s(1, 318, 188), s(1, 350, 156), s(1, 318, 156),
];

const SHAPE_46: &[FormationSlot] = &[
    s(2, 318, 380), s(2, 286, 348), s(2, 254, 316), s(2, 318, 284),
    s(2, 286, 284), s(2, 222, 284), s(3, 382, 252), s(2, 318, 252),
    s(2, 286, 252), s(0, 158, 252), s(2, 318, 220), s(2, 286, 220),
    s(2, 222, 220), s(2, 254, 188), s(2, 286, 156), s(2, 318, 124),
];

const SHAPE_47: &[FormationSlot] = &[
    s(3, 318, 348), s(2, 254, 348), s(2, 222, 348), s(3, 318, 316),
    s(2, 254, 316), s(2, 222, 316), s(3, 318, 284), s(2, 254, 284),
    s(2, 222, 284), s(3, 318, 252), s(2, 254, 252), s(2, 222, 252),
    s(3, 318, 220), s(2, 254, 220), s(2, 222, 220), s(0, 190, 156),
];

const SHAPE_48: &[FormationSlot] = &[
    s(2, 286, 348), s(2, 254, 348), s(2, 222, 348), s(2, 286, 316),
    s(2, 254, 316), s(2, 222, 316), s(1, 318, 284), s(1, 318, 252),
    s(0, 190, 252), s(1, 318, 220), s(2, 286, 188), s(2, 254, 188),
    s(2, 222, 188), s(2, 286, 156), s(2, 254, 156), s(2, 222, 156),
];

const SHAPE_49: &[FormationSlot] = &[
    s(0, 286, 380), s(1, 318, 348), s(2, 318, 316), s(1, 286, 316),
    s(2, 286, 284), s(2, 254, 284), s(3, 318, 252), s(2, 254, 252),
    s(2, 222, 252), s(2, 254, 220), s(2, 222, 220), s(2, 286, 188),
    s(2, 254, 188), s(2, 318, 156), s(2, 286, 156), s(2, 318, 124),
];

const SHAPE_50: &[FormationSlot] = &[
    s(3, 350, 348), s(2, 286, 348), s(2, 254, 348), s(2, 286, 316),
    s(2, 254, 316), s(2, 318, 284), s(2, 286, 284), s(2, 254, 284),
    s(2, 222, 284), s(3, 350, 252), s(0, 158, 252), s(2, 318, 220),
    s(2, 286, 220), s(2, 254, 220), s(2, 222, 220), s(2, 286, 188),
    s(2, 254, 188), s(3, 350, 156), s(2, 286, 156), s(2, 254, 156),
];

const SHAPE_51: &[FormationSlot] = &[
    s(3, 350, 380), s(3, 318, 380), s(2, 222, 380), s(2, 190, 380),
    s(2, 254, 348), s(1, 318, 316), s(2, 286, 316), s(2, 318, 284),
    s(2, 350, 252), s(1, 318, 252), s(2, 318, 220), s(1, 318, 188),
    s(2, 286, 188), s(2, 254, 156), s(3, 350, 124), s(3, 318, 124),
    s(2, 222, 124), s(2, 190, 124),
];

const SHAPE_52: &[FormationSlot] = &[
    s(2, 286, 380), s(2, 254, 348), s(2, 222, 316), s(2, 190, 284),
    s(3, 382, 252), s(3, 350, 252), s(3, 318, 252), s(3, 286, 252),
    s(3, 254, 252), s(3, 222, 252), s(1, 190, 252), s(2, 158, 252),
    s(2, 190, 220), s(2, 222, 188), s(2, 254, 156), s(2, 286, 124),
];

const SHAPE_53: &[FormationSlot] = &[
    s(1, 286, 348), s(1, 254, 348), s(1, 222, 348), s(1, 190, 348),
    s(2, 286, 316), s(2, 254, 316), s(2, 222, 316), s(2, 190, 316),
    s(3, 318, 284), s(3, 318, 220), s(2, 286, 188), s(2, 254, 188),
    s(2, 222, 188), s(2, 190, 188), s(1, 286, 156), s(1, 254, 156),
    s(1, 222, 156), s(1, 190, 156),
];

const SHAPE_54: &[FormationSlot] = &[
    s(2, 222, 348), s(2, 254, 316), s(2, 222, 316), s(3, 318, 284),
    s(2, 286, 284), s(2, 254, 284), s(2, 222, 284), s(3, 318, 252),
    s(2, 286, 252), s(2, 254, 252), s(2, 222, 252), s(3, 318, 220),
    s(2, 286, 220), s(2, 254, 220), s(2, 222, 220), s(2, 254, 188),
    s(2, 222, 188), s(2, 222, 156),
];

const SHAPE_55: &[FormationSlot] = &[
    s(3, 286, 348), s(2, 254, 348), s(3, 286, 316), s(2, 254, 316),
    s(2, 222, 316), s(3, 286, 284), s(2, 254, 284), s(2, 222, 284),
    s(1, 190, 284), s(3, 286, 252), s(2, 254, 252), s(2, 222, 252),
    s(1, 190, 252), s(3, 286, 220), s(2, 254, 220), s(2, 222, 220),
    s(3, 286, 188), s(2, 254, 188),
];

const SHAPE_56: &[FormationSlot] = &[
    s(3, 158, 380), s(3, 382, 348), s(2, 318, 348), s(2, 286, 348),
    s(2, 254, 348), s(2, 222, 348), s(2, 350, 252), s(2, 318, 252),
    s(2, 286, 252), s(2, 254, 252), s(2, 222, 252), s(0, 158, 252),
    s(3, 382, 156), s(2, 318, 156), s(2, 286, 156), s(2, 254, 156),
    s(2, 222, 156), s(3, 158, 124),
];

const SHAPE_57: &[FormationSlot] = &[
    s(1, 222, 380), s(1, 190, 380), s(1, 222, 348), s(1, 190, 348),
    s(0, 190, 316), s(2, 318, 284), s(2, 286, 284), s(2, 254, 284),
    s(1, 222, 284), s(1, 190, 284), s(2, 318, 252), s(2, 286, 252),
    s(2, 254, 252), s(1, 222, 252), s(1, 190, 252), s(3, 318, 188),
    s(3, 286, 188), s(3, 254, 188),
];

const SHAPE_58: &[FormationSlot] = &[
    s(3, 254, 380), s(3, 350, 348), s(2, 254, 348), s(2, 222, 348),
    s(2, 254, 316), s(2, 222, 316), s(2, 254, 284), s(2, 222, 284),
    s(2, 254, 252), s(2, 222, 252), s(3, 350, 220), s(2, 254, 220),
    s(2, 222, 220), s(3, 254, 188), s(2, 318, 156), s(2, 286, 156),
    s(2, 254, 156), s(0, 190, 156),
];

const SHAPE_59: &[FormationSlot] = &[
    s(2, 318, 348), s(2, 286, 348), s(2, 222, 348), s(2, 190, 348),
    s(2, 318, 316), s(2, 286, 316), s(2, 222, 316), s(2, 190, 316),
    s(3, 318, 252), s(0, 158, 252), s(2, 318, 188), s(2, 286, 188),
    s(2, 222, 188), s(2, 190, 188), s(2, 318, 156), s(2, 286, 156),
    s(2, 222, 156), s(2, 190, 156),
];

const SHAPE_60: &[FormationSlot] = &[
    s(3, 382, 348), s(0, 190, 348), s(3, 382, 316), s(2, 318, 316),
    s(2, 286, 316), s(1, 190, 316), s(2, 286, 284), s(2, 254, 284),
    s(2, 254, 252), s(2, 222, 252), s(2, 286, 220), s(2, 254, 220),
    s(3, 382, 188), s(2, 318, 188), s(2, 286, 188), s(1, 190, 188),
    s(3, 382, 156), s(0, 190, 156),
];

pub(crate) static CATALOG: [&[FormationSlot]; 60] = [
    SHAPE_1, SHAPE_2, SHAPE_3, SHAPE_4, SHAPE_5, SHAPE_6,
    SHAPE_7, SHAPE_8, SHAPE_9, SHAPE_10, SHAPE_11, SHAPE_12,
    SHAPE_13, SHAPE_14, SHAPE_15, SHAPE_16, SHAPE_17, SHAPE_18,
    SHAPE_19, SHAPE_20, SHAPE_21, SHAPE_22, SHAPE_23, SHAPE_24,
    SHAPE_25, SHAPE_26, SHAPE_27, SHAPE_28, SHAPE_29, SHAPE_30,
    SHAPE_31, SHAPE_32, SHAPE_33, SHAPE_34, SHAPE_35, SHAPE_36,
    SHAPE_37, SHAPE_38, SHAPE_39, SHAPE_40, SHAPE_41, SHAPE_42,
    SHAPE_43, SHAPE_44, SHAPE_45, SHAPE_46, SHAPE_47, SHAPE_48,
    SHAPE_49, SHAPE_50, SHAPE_51, SHAPE_52, SHAPE_53, SHAPE_54,
    SHAPE_55, SHAPE_56, SHAPE_57, SHAPE_58, SHAPE_59, SHAPE_60,
];
