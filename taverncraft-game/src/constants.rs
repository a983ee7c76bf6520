//! Centralized balance and tuning constants for TavernCraft game logic.
//!
//! These values define the deterministic math for the core rules. Keeping
//! them together ensures that gameplay can only be adjusted via code changes
//! reviewed in version control, rather than through external JSON assets.

// Mix and glass -------------------------------------------------------------
pub(crate) const MIX_CAPACITY: usize = 4;

// Scoring -------------------------------------------------------------------
pub(crate) const SCORE_COCKTAIL_MATCH: u32 = 30;
pub(crate) const SCORE_FLAVOR_MATCH: u32 = 20;
pub(crate) const SCORE_INGREDIENT_MATCH: u32 = 20;
pub(crate) const SCORE_PER_MIXED_TYPE: u32 = 10;
pub(crate) const FLAVOR_MATCH_MIN_COUNT: usize = 2;
pub(crate) const DOMINANT_MIN_COUNT: usize = 2;

// Mission generation --------------------------------------------------------
pub(crate) const MISSION_RETRY_CAP: u32 = 100;
pub(crate) const MIXED_TYPES_MIN: usize = 2;

// Economy -------------------------------------------------------------------
pub(crate) const BASE_PRICE_PER_DRINK: i64 = 20;
pub(crate) const RENT_COST: i64 = 60;
pub(crate) const FOOD_COST: i64 = 8;
pub(crate) const BOOZE_COST_BASE: i64 = 12;
pub(crate) const BOOZE_COST_SPREAD: i64 = 30;

// Ledger and upgrades -------------------------------------------------------
pub(crate) const HIGHER_EARNINGS_BONUS: i64 = 10;
pub(crate) const FRIDGE_COOLDOWN_ROUNDS: u32 = 2;
pub(crate) const UPGRADE_COST_MORE_INGREDIENTS: i64 = 100;
pub(crate) const UPGRADE_COST_MORE_COCKTAILS: i64 = 150;
pub(crate) const UPGRADE_COST_HIGHER_EARNINGS: i64 = 120;
pub(crate) const UPGRADE_COST_MEAD_FRIDGE: i64 = 200;

// Session pacing ------------------------------------------------------------
pub(crate) const ROUND_SECONDS: u32 = 20;
pub(crate) const STARTING_DAY: u32 = 1;
pub(crate) const STARTING_ROUND: u32 = 1;
