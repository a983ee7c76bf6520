//! Bar session state machine: missions, serves, the round timer, and the
//! day settlement loop.
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::constants::{ROUND_SECONDS, STARTING_DAY};
use crate::data::{CocktailRecipe, Garnish, Ingredient, PrepMethod, ReferenceData};
use crate::ledger::{Ledger, LedgerCommand, UpgradeCosts, UpgradeKind};
use crate::mission::{Mission, MissionPools, generate_mission};
use crate::mix::Mix;
use crate::rng::RngBundle;
use crate::scoring::evaluate;
use crate::seed::encode_friendly;
use crate::settlement::{DaySettlement, EconomyConfig, settle};

/// Where the session currently is in the day loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Timer running, player mixing and serving.
    Mixing,
    /// Day finished; settlement shown, waiting for the next day.
    Report,
}

/// Result of one serve attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServeOutcome {
    pub points: u32,
    /// Amount credited to the ledger, including any earnings bonus.
    pub credited: i64,
    pub success: bool,
}

/// One player's running game: mission, glass, ledger, timer, and balance.
///
/// Every operation is synchronous and total; operations that are invalid in
/// the current phase are silent no-ops, matching the defensive policy of the
/// rest of the core.
#[derive(Debug, Clone)]
pub struct BarSession {
    data: ReferenceData,
    economy: EconomyConfig,
    upgrade_costs: UpgradeCosts,
    rng: Rc<RngBundle>,
    seed: u64,
    day: u32,
    time_left: u32,
    phase: SessionPhase,
    score: u32,
    drinks_served: u32,
    balance: i64,
    mix: Mix,
    mission: Option<Mission>,
    ledger: Ledger,
    pending_settlement: Option<DaySettlement>,
    active_ingredients: Vec<Ingredient>,
    active_recipes: Vec<CocktailRecipe>,
}

impl BarSession {
    /// Construct a fresh session with default economy and upgrade pricing.
    #[must_use]
    pub fn new(seed: u64, data: ReferenceData) -> Self {
        Self::with_configs(
            seed,
            data,
            EconomyConfig::default_config(),
            UpgradeCosts::default_config(),
        )
    }

    /// Construct a session with explicit configuration.
    #[must_use]
    pub fn with_configs(
        seed: u64,
        data: ReferenceData,
        economy: EconomyConfig,
        upgrade_costs: UpgradeCosts,
    ) -> Self {
        let mut session = Self {
            data,
            economy,
            upgrade_costs,
            rng: Rc::new(RngBundle::from_user_seed(seed)),
            seed,
            day: STARTING_DAY,
            time_left: ROUND_SECONDS,
            phase: SessionPhase::Mixing,
            score: 0,
            drinks_served: 0,
            balance: 0,
            mix: Mix::new(),
            mission: None,
            ledger: Ledger::new(),
            pending_settlement: None,
            active_ingredients: Vec::new(),
            active_recipes: Vec::new(),
        };
        session.rebuild_pools();
        session.regenerate_mission();
        session
    }

    fn rebuild_pools(&mut self) {
        self.active_ingredients = self.data.ingredients.clone();
        if self.ledger.upgrades.more_ingredients {
            self.active_ingredients
                .extend(self.data.extended_ingredients.iter().cloned());
        }
        self.active_recipes = self.data.recipes.clone();
        if self.ledger.upgrades.more_cocktails {
            self.active_recipes
                .extend(self.data.extended_recipes.iter().cloned());
        }
    }

    fn regenerate_mission(&mut self) {
        let previous = self.mission.take().map(|m| m.text);
        let pools = MissionPools {
            ingredients: &self.active_ingredients,
            recipes: &self.active_recipes,
        };
        let mission = generate_mission(&pools, previous.as_deref(), &mut *self.rng.mission());
        self.mission = Some(mission);
    }

    // Accessors ------------------------------------------------------------

    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    #[must_use]
    pub const fn time_left(&self) -> u32 {
        self.time_left
    }

    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn drinks_served(&self) -> u32 {
        self.drinks_served
    }

    #[must_use]
    pub const fn balance(&self) -> i64 {
        self.balance
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Friendly share code for replaying this session's seed.
    #[must_use]
    pub fn share_code(&self) -> String {
        encode_friendly(self.seed)
    }

    #[must_use]
    pub const fn mission(&self) -> Option<&Mission> {
        self.mission.as_ref()
    }

    #[must_use]
    pub const fn mix(&self) -> &Mix {
        &self.mix
    }

    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    #[must_use]
    pub fn ingredient_pool(&self) -> &[Ingredient] {
        &self.active_ingredients
    }

    #[must_use]
    pub fn recipe_pool(&self) -> &[CocktailRecipe] {
        &self.active_recipes
    }

    #[must_use]
    pub fn garnishes(&self) -> &[Garnish] {
        &self.data.garnishes
    }

    // Mixing ---------------------------------------------------------------

    /// Pour an ingredient; false when reporting or the glass is full.
    pub fn add_ingredient(&mut self, ingredient: Ingredient) -> bool {
        if self.phase != SessionPhase::Mixing {
            return false;
        }
        self.mix.try_add(ingredient)
    }

    pub fn toggle_garnish(&mut self, garnish: Garnish) {
        if self.phase == SessionPhase::Mixing {
            self.mix.toggle_garnish(garnish);
        }
    }

    pub fn toggle_method(&mut self, method: PrepMethod) {
        if self.phase == SessionPhase::Mixing {
            self.mix.toggle_method(method);
        }
    }

    pub fn clear_mix(&mut self) {
        if self.phase == SessionPhase::Mixing {
            self.mix.clear();
        }
    }

    // Serving --------------------------------------------------------------

    /// Serve the current mix against the current mission.
    ///
    /// The ledger earns on every attempt, scored or not; the score total and
    /// the drinks-served tally only advance on a scoring serve. The glass is
    /// emptied and a fresh mission generated either way. Returns `None`
    /// outside the mixing phase or without a mission.
    pub fn serve(&mut self) -> Option<ServeOutcome> {
        if self.phase != SessionPhase::Mixing {
            return None;
        }
        let mission = self.mission.as_ref()?;
        let points = evaluate(&self.mix, mission);

        let credited = self.ledger.earn(i64::from(points));
        let success = points > 0;
        if success {
            self.score += points;
            self.drinks_served += 1;
        }

        self.mix.clear();
        self.regenerate_mission();
        Some(ServeOutcome {
            points,
            credited,
            success,
        })
    }

    /// Spend the mead fridge on a free serve: the ledger earns the base
    /// drink price, the glass resets, and a fresh mission appears. No-op
    /// unless the fridge is owned and off cooldown.
    pub fn use_fridge(&mut self) -> bool {
        if self.phase != SessionPhase::Mixing || !self.ledger.fridge_ready() {
            return false;
        }
        // Earn before arming: the free serve must not tick its own cooldown.
        self.ledger.earn(self.economy.base_price);
        let armed = self.ledger.use_fridge();
        debug_assert!(armed);
        self.mix.clear();
        self.regenerate_mission();
        true
    }

    /// Buy an upgrade through the ledger; a successful shelf or book
    /// purchase widens the active mission pools immediately.
    pub fn purchase(&mut self, kind: UpgradeKind) -> bool {
        if self.phase != SessionPhase::Mixing {
            return false;
        }
        let purchased = matches!(
            self.ledger
                .apply(LedgerCommand::Purchase { kind }, &self.upgrade_costs),
            crate::ledger::LedgerOutcome::Purchased(_)
        );
        if purchased
            && matches!(
                kind,
                UpgradeKind::MoreIngredients | UpgradeKind::MoreCocktails
            )
        {
            self.rebuild_pools();
        }
        purchased
    }

    // Day loop -------------------------------------------------------------

    /// Advance the one-second timer. Reaching zero finishes the day and
    /// returns the settlement; ticks during the report phase do nothing.
    pub fn tick_second(&mut self) -> Option<DaySettlement> {
        if self.phase != SessionPhase::Mixing {
            return None;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            return Some(self.finish_day());
        }
        None
    }

    /// End the day now and settle. Repeated calls while the report is open
    /// return the already-drawn settlement rather than re-rolling costs.
    pub fn finish_day(&mut self) -> DaySettlement {
        if let Some(settlement) = self.pending_settlement {
            return settlement;
        }
        let settlement = settle(
            self.drinks_served,
            self.balance,
            &self.economy,
            &mut *self.rng.economy(),
        );
        self.phase = SessionPhase::Report;
        self.pending_settlement = Some(settlement);
        settlement
    }

    /// Close the report: apply the settled balance, reset the bar for a new
    /// day, and generate a fresh mission. No-op while a day is in progress.
    pub fn next_day(&mut self) {
        let Some(settlement) = self.pending_settlement.take() else {
            return;
        };
        self.balance = settlement.new_balance;
        self.day += 1;
        self.time_left = ROUND_SECONDS;
        self.drinks_served = 0;
        self.mix.clear();
        self.phase = SessionPhase::Mixing;
        self.regenerate_mission();
    }

    /// Deterministically reseed the session's RNG streams.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = Rc::new(RngBundle::from_user_seed(seed));
        self.seed = seed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FlavorType;
    use crate::mission::MissionTarget;

    fn session() -> BarSession {
        BarSession::new(0xABCD, ReferenceData::builtin())
    }

    /// Build a mix that exactly satisfies the current mission.
    fn pour_winning_mix(session: &mut BarSession) {
        let mission = session.mission().expect("mission present").clone();
        let pool: Vec<Ingredient> = session.ingredient_pool().to_vec();
        let by_name = |name: &str| {
            pool.iter()
                .find(|i| i.name == name)
                .expect("ingredient in pool")
                .clone()
        };
        let by_flavor = |flavor: FlavorType| {
            pool.iter()
                .find(|i| i.flavor == flavor)
                .expect("flavor in pool")
                .clone()
        };
        match &mission.target {
            MissionTarget::Cocktail(recipe) => {
                for name in &recipe.ingredients {
                    assert!(session.add_ingredient(by_name(name)));
                }
            }
            MissionTarget::Flavor(flavor) => {
                assert!(session.add_ingredient(by_flavor(*flavor)));
                assert!(session.add_ingredient(by_flavor(*flavor)));
            }
            MissionTarget::Ingredient(ingredient) => {
                assert!(session.add_ingredient(ingredient.clone()));
            }
            MissionTarget::MixedTypes(types) => {
                assert!(session.add_ingredient(by_flavor(types[0])));
                assert!(session.add_ingredient(by_flavor(types[0])));
                for flavor in &types[1..] {
                    assert!(session.add_ingredient(by_flavor(*flavor)));
                }
            }
        }
    }

    #[test]
    fn construction_generates_a_mission() {
        let session = session();
        assert!(session.mission().is_some());
        assert_eq!(session.day(), STARTING_DAY);
        assert_eq!(session.time_left(), ROUND_SECONDS);
        assert_eq!(session.phase(), SessionPhase::Mixing);
    }

    #[test]
    fn winning_serve_scores_and_advances() {
        let mut session = session();
        pour_winning_mix(&mut session);
        let before_text = session.mission().unwrap().text.clone();

        let outcome = session.serve().expect("serve allowed");
        assert!(outcome.success);
        assert!(outcome.points > 0);
        assert_eq!(session.score(), outcome.points);
        assert_eq!(session.drinks_served(), 1);
        assert!(session.mix().is_empty());
        assert_ne!(session.mission().unwrap().text, before_text);
    }

    #[test]
    fn failed_serve_still_earns_round() {
        let mut session = session();
        let round_before = session.ledger().round;
        let outcome = session.serve().expect("serve allowed");
        assert!(!outcome.success);
        assert_eq!(outcome.points, 0);
        assert_eq!(outcome.credited, 0);
        assert_eq!(session.drinks_served(), 0);
        assert_eq!(session.ledger().round, round_before + 1);
    }

    #[test]
    fn timer_runs_out_into_report() {
        let mut session = session();
        let mut settlement = None;
        for _ in 0..ROUND_SECONDS {
            settlement = session.tick_second();
        }
        let settlement = settlement.expect("final tick settles");
        assert_eq!(session.phase(), SessionPhase::Report);
        assert_eq!(settlement.money_earned, 0);
        assert!(settlement.net < 0);

        // Inputs are dead during the report.
        assert!(!session.add_ingredient(Ingredient::new("Honey", FlavorType::Sweet)));
        assert!(session.serve().is_none());
        assert!(session.tick_second().is_none());

        session.next_day();
        assert_eq!(session.day(), STARTING_DAY + 1);
        assert_eq!(session.time_left(), ROUND_SECONDS);
        assert_eq!(session.balance(), settlement.new_balance);
        assert_eq!(session.drinks_served(), 0);
        assert_eq!(session.phase(), SessionPhase::Mixing);
    }

    #[test]
    fn finish_day_is_idempotent_until_next_day() {
        let mut session = session();
        let first = session.finish_day();
        let second = session.finish_day();
        assert_eq!(first, second);
    }

    #[test]
    fn upgrades_widen_pools() {
        let mut session = session();
        let base_ingredients = session.ingredient_pool().len();
        let base_recipes = session.recipe_pool().len();

        session.ledger.money = 1_000;
        assert!(session.purchase(UpgradeKind::MoreIngredients));
        assert!(session.purchase(UpgradeKind::MoreCocktails));
        assert!(session.ingredient_pool().len() > base_ingredients);
        assert!(session.recipe_pool().len() > base_recipes);

        // Repurchase is a silent no-op and leaves the pools alone.
        let widened = session.ingredient_pool().len();
        assert!(!session.purchase(UpgradeKind::MoreIngredients));
        assert_eq!(session.ingredient_pool().len(), widened);
    }

    #[test]
    fn fridge_free_serve_credits_base_price() {
        let mut session = session();
        session.ledger.money = 1_000;
        assert!(session.purchase(UpgradeKind::MeadFridge));
        let money_before = session.ledger().money;

        assert!(session.use_fridge());
        assert_eq!(
            session.ledger().money,
            money_before + EconomyConfig::default().base_price
        );
        assert_eq!(session.ledger().fridge_cooldown, 2);
        assert!(!session.use_fridge(), "cooldown gate holds");

        session.serve();
        session.serve();
        assert!(session.use_fridge());
    }

    #[test]
    fn same_seed_replays_same_missions() {
        let mut a = session();
        let mut b = BarSession::new(0xABCD, ReferenceData::builtin());
        for _ in 0..20 {
            assert_eq!(a.mission().unwrap().text, b.mission().unwrap().text);
            a.serve();
            b.serve();
        }
    }

    #[test]
    fn share_code_matches_seed() {
        let session = session();
        assert_eq!(session.share_code(), encode_friendly(0xABCD));
    }
}
