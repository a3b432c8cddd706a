//! Hit-table generation
//!
//! Tables are a pure function of the attacker's base attack rating and
//! are regenerated per call; nothing here holds shared state.
//!
//! The plateau walk starts at armor class 0 (roll required = the base
//! attack rating) and moves outward. On the hard half (negative AC) the
//! required roll climbs by 1 per step, except that designated trigger
//! values repeat across a fixed count of consecutive armor classes. On
//! the easy half (positive AC) the required roll falls by 1 per step and
//! holds at the floor of 2.

use crate::core::constants::{
    PLATEAU_AC_CEIL, PLATEAU_AC_FLOOR, PLATEAU_ROLL_FLOOR, STATIC_ROLL_MAX, STATIC_ROLL_MIN,
    STATIC_TABLE_AC_CEIL, STATIC_TABLE_AC_FLOOR,
};

/// One (armor class, roll required) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitTableEntry {
    pub ac: i32,
    pub roll_required: i32,
}

/// Non-repeating table: strict +1 per armor-class step, clamped [2, 20]
pub fn static_table(base_attack_rating: i32) -> Vec<HitTableEntry> {
    (STATIC_TABLE_AC_FLOOR..=STATIC_TABLE_AC_CEIL)
        .map(|ac| HitTableEntry {
            ac,
            roll_required: (base_attack_rating - ac).clamp(STATIC_ROLL_MIN, STATIC_ROLL_MAX),
        })
        .collect()
}

/// Plateau table: outward walk from armor class 0 with trigger-value
/// repeats on the hard half and a floor hold on the easy half
pub fn plateau_table(
    base_attack_rating: i32,
    repeat: u32,
    is_trigger: impl Fn(i32) -> bool,
) -> Vec<HitTableEntry> {
    let mut entries = Vec::with_capacity((PLATEAU_AC_CEIL - PLATEAU_AC_FLOOR + 1) as usize);

    entries.push(HitTableEntry {
        ac: 0,
        roll_required: base_attack_rating,
    });

    // Hard half: AC -1 down to the generation floor
    let mut value = base_attack_rating;
    let mut hold = 0u32;
    for ac in (PLATEAU_AC_FLOOR..0).rev() {
        if hold > 0 {
            hold -= 1;
        } else {
            value += 1;
            if is_trigger(value) {
                hold = repeat.saturating_sub(1);
            }
        }
        entries.push(HitTableEntry {
            ac,
            roll_required: value,
        });
    }

    // Easy half: AC 1 up to the generation ceiling
    let mut value = base_attack_rating;
    for ac in 1..=PLATEAU_AC_CEIL {
        value = (value - 1).max(PLATEAU_ROLL_FLOOR);
        entries.push(HitTableEntry {
            ac,
            roll_required: value,
        });
    }

    entries
}

/// Among every entry the roll total satisfies, the numerically lowest
/// (best) armor class
pub fn best_hittable(table: &[HitTableEntry], roll_total: i32) -> Option<i32> {
    table
        .iter()
        .filter(|entry| roll_total >= entry.roll_required)
        .map(|entry| entry.ac)
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(table: &[HitTableEntry], ac: i32) -> i32 {
        table
            .iter()
            .find(|e| e.ac == ac)
            .map(|e| e.roll_required)
            .unwrap()
    }

    #[test]
    fn test_static_table_linear_with_clamp() {
        let table = static_table(19);
        assert_eq!(required(&table, 0), 19);
        assert_eq!(required(&table, 9), 10);
        assert_eq!(required(&table, -1), 20);
        // clamp holds at 20 rather than climbing
        assert_eq!(required(&table, -3), 20);
    }

    #[test]
    fn test_static_table_low_clamp() {
        let table = static_table(5);
        assert_eq!(required(&table, 9), 2);
        assert_eq!(required(&table, 3), 2);
        assert_eq!(required(&table, 0), 5);
    }

    #[test]
    fn test_plateau_boundary_behavior() {
        // Base attack rating 19: AC 0 needs 19, AC -1 enters the 20
        // plateau, which spans five armor classes
        let table = plateau_table(19, 5, |v| v == 20);
        assert_eq!(required(&table, 0), 19);
        assert_eq!(required(&table, -1), 20);
        assert_eq!(required(&table, -5), 20);
        assert_eq!(required(&table, -6), 21);
    }

    #[test]
    fn test_plateau_easy_half_holds_at_floor() {
        let table = plateau_table(19, 5, |v| v == 20);
        assert_eq!(required(&table, 1), 18);
        assert_eq!(required(&table, 17), 2);
        assert_eq!(required(&table, 40), 2);
    }

    #[test]
    fn test_extended_triggers_repeat_at_each_tenth() {
        let table = plateau_table(19, 6, |v| v >= 20 && v % 10 == 0);
        // 20 spans six armor classes, then the walk resumes
        assert_eq!(required(&table, -1), 20);
        assert_eq!(required(&table, -6), 20);
        assert_eq!(required(&table, -7), 21);
        // 30 plateaus again
        assert_eq!(required(&table, -16), 30);
        assert_eq!(required(&table, -21), 30);
        assert_eq!(required(&table, -22), 31);
    }

    #[test]
    fn test_best_hittable_picks_lowest_ac() {
        let table = plateau_table(19, 5, |v| v == 20);
        // roll 10 defeats AC 9 and everything easier
        assert_eq!(best_hittable(&table, 10), Some(9));
        assert_eq!(best_hittable(&table, 19), Some(0));
        assert_eq!(best_hittable(&table, 20), Some(-5));
        assert_eq!(best_hittable(&table, 1), None);
    }
}
