//! End-of-day financial settlement
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    BASE_PRICE_PER_DRINK, BOOZE_COST_BASE, BOOZE_COST_SPREAD, FOOD_COST, RENT_COST,
};

/// Validation failures for economy tuning values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EconomyError {
    #[error("economy config field `{field}` out of range: {value} ({expected})")]
    RangeViolation {
        field: &'static str,
        value: i64,
        expected: &'static str,
    },
}

/// Tunable economy constants. Every cost is overridable, so harsher
/// economies (rent 500, food 70) need no code change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    pub base_price: i64,
    pub rent_cost: i64,
    pub food_cost: i64,
    pub booze_cost_base: i64,
    /// Width of the uniform booze draw: `base + uniform[0, spread)`.
    pub booze_cost_spread: i64,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            base_price: BASE_PRICE_PER_DRINK,
            rent_cost: RENT_COST,
            food_cost: FOOD_COST,
            booze_cost_base: BOOZE_COST_BASE,
            booze_cost_spread: BOOZE_COST_SPREAD,
        }
    }
}

impl EconomyConfig {
    /// Get default configuration
    #[must_use]
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Check every field against its documented bounds.
    ///
    /// # Errors
    ///
    /// Returns `EconomyError` when any field violates the documented bounds.
    pub fn validate(&self) -> Result<(), EconomyError> {
        if self.base_price < 0 {
            return Err(EconomyError::RangeViolation {
                field: "base_price",
                value: self.base_price,
                expected: "non-negative",
            });
        }
        if self.rent_cost < 0 {
            return Err(EconomyError::RangeViolation {
                field: "rent_cost",
                value: self.rent_cost,
                expected: "non-negative",
            });
        }
        if self.food_cost < 0 {
            return Err(EconomyError::RangeViolation {
                field: "food_cost",
                value: self.food_cost,
                expected: "non-negative",
            });
        }
        if self.booze_cost_base < 0 {
            return Err(EconomyError::RangeViolation {
                field: "booze_cost_base",
                value: self.booze_cost_base,
                expected: "non-negative",
            });
        }
        if self.booze_cost_spread < 1 {
            return Err(EconomyError::RangeViolation {
                field: "booze_cost_spread",
                value: self.booze_cost_spread,
                expected: "at least 1",
            });
        }
        Ok(())
    }
}

/// One day's revenue/cost/net arithmetic. Computed at day end, not retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySettlement {
    pub money_earned: i64,
    pub rent_cost: i64,
    pub booze_cost: i64,
    pub food_cost: i64,
    pub total_cost: i64,
    pub net: i64,
    pub new_balance: i64,
}

/// Settle a finished day. The booze cost is re-rolled fresh on every call;
/// nothing outside the returned value is mutated - callers apply
/// `new_balance` to their own ledgers.
pub fn settle<R: Rng>(
    drinks_served: u32,
    prior_balance: i64,
    cfg: &EconomyConfig,
    rng: &mut R,
) -> DaySettlement {
    let money_earned = i64::from(drinks_served) * cfg.base_price;
    let booze_roll = if cfg.booze_cost_spread > 0 {
        rng.gen_range(0..cfg.booze_cost_spread)
    } else {
        0
    };
    let booze_cost = cfg.booze_cost_base + booze_roll;
    let total_cost = cfg.rent_cost + booze_cost + cfg.food_cost;
    let net = money_earned - total_cost;
    DaySettlement {
        money_earned,
        rent_cost: cfg.rent_cost,
        booze_cost,
        food_cost: cfg.food_cost,
        total_cost,
        net,
        new_balance: prior_balance + net,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(EconomyConfig::default_config().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_bad_spread() {
        let cfg = EconomyConfig {
            booze_cost_spread: 0,
            ..EconomyConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(EconomyError::RangeViolation {
                field: "booze_cost_spread",
                ..
            })
        ));
    }

    #[test]
    fn zero_serves_net_is_negative_total() {
        let cfg = EconomyConfig::default();
        let mut rng = ChaCha20Rng::from_seed([5u8; 32]);
        let report = settle(0, 0, &cfg, &mut rng);
        assert_eq!(report.money_earned, 0);
        assert_eq!(report.net, -report.total_cost);
        assert!(report.net < 0);
        assert_eq!(report.new_balance, report.net);
    }

    #[test]
    fn booze_cost_stays_in_documented_range() {
        let cfg = EconomyConfig::default();
        let mut rng = ChaCha20Rng::from_seed([6u8; 32]);
        for _ in 0..200 {
            let report = settle(10, 0, &cfg, &mut rng);
            assert_eq!(report.money_earned, 200);
            assert!(report.booze_cost >= cfg.booze_cost_base);
            assert!(report.booze_cost < cfg.booze_cost_base + cfg.booze_cost_spread);
            assert_eq!(
                report.total_cost,
                report.rent_cost + report.booze_cost + report.food_cost
            );
            assert_eq!(report.net, report.money_earned - report.total_cost);
        }
    }

    #[test]
    fn balance_threads_through() {
        let cfg = EconomyConfig::default();
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        let report = settle(5, 300, &cfg, &mut rng);
        assert_eq!(report.new_balance, 300 + report.net);
    }
}
