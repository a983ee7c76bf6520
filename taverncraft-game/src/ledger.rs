//! Progress tracking: money, rounds, upgrades, and the mead fridge gate.
use serde::{Deserialize, Serialize};

use crate::constants::{
    FRIDGE_COOLDOWN_ROUNDS, HIGHER_EARNINGS_BONUS, STARTING_ROUND, UPGRADE_COST_HIGHER_EARNINGS,
    UPGRADE_COST_MEAD_FRIDGE, UPGRADE_COST_MORE_COCKTAILS, UPGRADE_COST_MORE_INGREDIENTS,
};

/// Purchasable upgrades. Each can be owned at most once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeKind {
    MoreIngredients,
    MoreCocktails,
    HigherEarnings,
    MeadFridge,
}

impl UpgradeKind {
    pub const ALL: [Self; 4] = [
        Self::MoreIngredients,
        Self::MoreCocktails,
        Self::HigherEarnings,
        Self::MeadFridge,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MoreIngredients => "more_ingredients",
            Self::MoreCocktails => "more_cocktails",
            Self::HigherEarnings => "higher_earnings",
            Self::MeadFridge => "mead_fridge",
        }
    }
}

/// Ownership flags; once set, a flag never clears within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Upgrades {
    pub more_ingredients: bool,
    pub more_cocktails: bool,
    pub higher_earnings: bool,
    pub mead_fridge: bool,
}

impl Upgrades {
    #[must_use]
    pub const fn owned(self, kind: UpgradeKind) -> bool {
        match kind {
            UpgradeKind::MoreIngredients => self.more_ingredients,
            UpgradeKind::MoreCocktails => self.more_cocktails,
            UpgradeKind::HigherEarnings => self.higher_earnings,
            UpgradeKind::MeadFridge => self.mead_fridge,
        }
    }

    const fn set(&mut self, kind: UpgradeKind) {
        match kind {
            UpgradeKind::MoreIngredients => self.more_ingredients = true,
            UpgradeKind::MoreCocktails => self.more_cocktails = true,
            UpgradeKind::HigherEarnings => self.higher_earnings = true,
            UpgradeKind::MeadFridge => self.mead_fridge = true,
        }
    }
}

/// Price list for the four upgrades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpgradeCosts {
    pub more_ingredients: i64,
    pub more_cocktails: i64,
    pub higher_earnings: i64,
    pub mead_fridge: i64,
}

impl Default for UpgradeCosts {
    fn default() -> Self {
        Self {
            more_ingredients: UPGRADE_COST_MORE_INGREDIENTS,
            more_cocktails: UPGRADE_COST_MORE_COCKTAILS,
            higher_earnings: UPGRADE_COST_HIGHER_EARNINGS,
            mead_fridge: UPGRADE_COST_MEAD_FRIDGE,
        }
    }
}

impl UpgradeCosts {
    /// Get default configuration
    #[must_use]
    pub fn default_config() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn cost(&self, kind: UpgradeKind) -> i64 {
        match kind {
            UpgradeKind::MoreIngredients => self.more_ingredients,
            UpgradeKind::MoreCocktails => self.more_cocktails,
            UpgradeKind::HigherEarnings => self.higher_earnings,
            UpgradeKind::MeadFridge => self.mead_fridge,
        }
    }
}

/// Message from the mixing controller to the ledger owner. The controller
/// never holds a mutable handle into the ledger; it speaks in commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerCommand {
    Earn { amount: i64 },
    Purchase { kind: UpgradeKind },
    UseFridge,
}

/// What a command actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerOutcome {
    Earned { credited: i64 },
    Purchased(UpgradeKind),
    FridgeUsed,
    /// Rejected purchase or gated fridge use; no state changed.
    NoOp,
}

/// Running record of money, round count, and purchased upgrades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    pub money: i64,
    pub round: u32,
    pub upgrades: Upgrades,
    pub fridge_cooldown: u32,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            money: 0,
            round: STARTING_ROUND,
            upgrades: Upgrades::default(),
            fridge_cooldown: 0,
        }
    }
}

impl Ledger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit a serve. The sole mutator invoked after every serve attempt,
    /// scored or not: advances the round and ticks the fridge cooldown.
    /// Returns the amount credited including any earnings bonus.
    pub fn earn(&mut self, base: i64) -> i64 {
        let bonus = if self.upgrades.higher_earnings {
            HIGHER_EARNINGS_BONUS
        } else {
            0
        };
        let credited = base + bonus;
        self.money += credited;
        self.round += 1;
        self.fridge_cooldown = self.fridge_cooldown.saturating_sub(1);
        credited
    }

    /// Buy an upgrade. Silent no-op when unaffordable or already owned.
    pub fn purchase(&mut self, kind: UpgradeKind, costs: &UpgradeCosts) -> bool {
        let cost = costs.cost(kind);
        if self.money < cost || self.upgrades.owned(kind) {
            return false;
        }
        self.money -= cost;
        self.upgrades.set(kind);
        true
    }

    #[must_use]
    pub const fn fridge_ready(&self) -> bool {
        self.upgrades.mead_fridge && self.fridge_cooldown == 0
    }

    /// Arm the mead fridge cooldown. The free-serve effect itself is the
    /// caller's responsibility; the ledger only manages the gate.
    pub const fn use_fridge(&mut self) -> bool {
        if !self.fridge_ready() {
            return false;
        }
        self.fridge_cooldown = FRIDGE_COOLDOWN_ROUNDS;
        true
    }

    /// Dispatch a command message and report what happened.
    pub fn apply(&mut self, command: LedgerCommand, costs: &UpgradeCosts) -> LedgerOutcome {
        match command {
            LedgerCommand::Earn { amount } => LedgerOutcome::Earned {
                credited: self.earn(amount),
            },
            LedgerCommand::Purchase { kind } => {
                if self.purchase(kind, costs) {
                    LedgerOutcome::Purchased(kind)
                } else {
                    LedgerOutcome::NoOp
                }
            }
            LedgerCommand::UseFridge => {
                if self.use_fridge() {
                    LedgerOutcome::FridgeUsed
                } else {
                    LedgerOutcome::NoOp
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earn_applies_bonus_only_when_owned() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.earn(20), 20);
        assert_eq!(ledger.money, 20);
        assert_eq!(ledger.round, STARTING_ROUND + 1);

        ledger.upgrades.higher_earnings = true;
        assert_eq!(ledger.earn(20), 20 + HIGHER_EARNINGS_BONUS);
        assert_eq!(ledger.money, 40 + HIGHER_EARNINGS_BONUS);
    }

    #[test]
    fn earn_zero_still_advances_round_and_cooldown() {
        let mut ledger = Ledger::new();
        ledger.fridge_cooldown = 2;
        ledger.earn(0);
        assert_eq!(ledger.money, 0);
        assert_eq!(ledger.round, STARTING_ROUND + 1);
        assert_eq!(ledger.fridge_cooldown, 1);
    }

    #[test]
    fn purchase_deducts_once() {
        let costs = UpgradeCosts::default_config();
        let mut ledger = Ledger::new();
        ledger.money = 500;

        assert!(ledger.purchase(UpgradeKind::MeadFridge, &costs));
        assert_eq!(ledger.money, 500 - costs.mead_fridge);
        assert!(ledger.upgrades.mead_fridge);

        // Second purchase with plenty of money is a silent no-op.
        assert!(!ledger.purchase(UpgradeKind::MeadFridge, &costs));
        assert_eq!(ledger.money, 500 - costs.mead_fridge);
    }

    #[test]
    fn purchase_requires_funds() {
        let costs = UpgradeCosts::default_config();
        let mut ledger = Ledger::new();
        ledger.money = costs.higher_earnings - 1;
        assert!(!ledger.purchase(UpgradeKind::HigherEarnings, &costs));
        assert_eq!(ledger.money, costs.higher_earnings - 1);
        assert!(!ledger.upgrades.higher_earnings);
    }

    #[test]
    fn fridge_gate_holds_until_two_earns() {
        let mut ledger = Ledger::new();
        assert!(!ledger.use_fridge(), "fridge not owned yet");

        ledger.upgrades.mead_fridge = true;
        assert!(ledger.use_fridge());
        assert_eq!(ledger.fridge_cooldown, FRIDGE_COOLDOWN_ROUNDS);
        assert!(!ledger.use_fridge(), "cooldown gate holds");

        ledger.earn(0);
        assert!(!ledger.use_fridge(), "one earn is not enough");
        ledger.earn(0);
        assert!(ledger.fridge_ready());
        assert!(ledger.use_fridge());
    }

    #[test]
    fn apply_reports_outcomes() {
        let costs = UpgradeCosts::default_config();
        let mut ledger = Ledger::new();

        let outcome = ledger.apply(LedgerCommand::Earn { amount: 30 }, &costs);
        assert_eq!(outcome, LedgerOutcome::Earned { credited: 30 });

        let outcome = ledger.apply(
            LedgerCommand::Purchase {
                kind: UpgradeKind::MeadFridge,
            },
            &costs,
        );
        assert_eq!(outcome, LedgerOutcome::NoOp, "cannot afford yet");

        ledger.money = 1_000;
        let outcome = ledger.apply(
            LedgerCommand::Purchase {
                kind: UpgradeKind::MeadFridge,
            },
            &costs,
        );
        assert_eq!(outcome, LedgerOutcome::Purchased(UpgradeKind::MeadFridge));

        assert_eq!(
            ledger.apply(LedgerCommand::UseFridge, &costs),
            LedgerOutcome::FridgeUsed
        );
        assert_eq!(
            ledger.apply(LedgerCommand::UseFridge, &costs),
            LedgerOutcome::NoOp
        );
    }
}
