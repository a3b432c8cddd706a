//! Rules constants - all fixed rule numbers in one place

// Armor class
/// Unarmored baseline in the descending convention
pub const NAKED_AC: i32 = 9;
/// Ascending AC = ASCENDING_PIVOT - descending AC
pub const ASCENDING_PIVOT: i32 = 19;

// Die
pub const DIE_MIN: i32 = 1;
pub const DIE_MAX: i32 = 20;

// Static (non-repeating) hit table
pub const STATIC_TABLE_AC_FLOOR: i32 = -3;
pub const STATIC_TABLE_AC_CEIL: i32 = 9;
pub const STATIC_ROLL_MIN: i32 = 2;
pub const STATIC_ROLL_MAX: i32 = 20;

// Plateau hit tables
/// Table generation range; lookups outside this are clamped and flagged
pub const PLATEAU_AC_FLOOR: i32 = -99;
pub const PLATEAU_AC_CEIL: i32 = 99;
/// Consecutive armor classes sharing a trigger roll value
pub const PLATEAU_REPEAT: u32 = 5;
/// The extended variant plateaus longer and at every tenth roll value
pub const EXTENDED_PLATEAU_REPEAT: u32 = 6;
/// Easy-side floor: nothing ever needs less than this roll
pub const PLATEAU_ROLL_FLOOR: i32 = 2;

// Mastery
/// Penalty for characters firing a missile weapon they hold no mastery in
pub const UNSKILLED_MISSILE_PENALTY: i32 = -1;

// Encumbrance
/// Flat allowance for adventuring gear in the classic/expert strategies
pub const BASELINE_GEAR_WEIGHT: i32 = 80;
