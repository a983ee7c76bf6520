use std::fmt;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use taverncraft_game::{FlavorType, Ingredient, Mission, MissionTarget, Mix, UpgradeKind};

/// Policy interface for automated barkeep strategies.
pub trait BarkeepPolicy {
    /// Name used for logging/debug output.
    fn name(&self) -> &'static str;

    /// Plan the pours for the current mission from the active shelf.
    /// The runner feeds these into the session up to glass capacity.
    fn plan_pours(&mut self, mission: &Mission, shelf: &[Ingredient]) -> Vec<Ingredient>;

    /// Upgrade wishlist in purchase order; the ledger silently rejects
    /// anything unaffordable or already owned.
    fn shopping_priority(&self) -> &'static [UpgradeKind] {
        &[
            UpgradeKind::HigherEarnings,
            UpgradeKind::MoreIngredients,
            UpgradeKind::MoreCocktails,
            UpgradeKind::MeadFridge,
        ]
    }
}

/// Built-in barkeep strategies for automated runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BarkeepStrategy {
    PerfectPour,
    DominantSplash,
    Chaotic,
}

impl BarkeepStrategy {
    pub const ALL: [Self; 3] = [Self::PerfectPour, Self::DominantSplash, Self::Chaotic];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BarkeepStrategy::PerfectPour => "Perfect Pour",
            BarkeepStrategy::DominantSplash => "Dominant Splash",
            BarkeepStrategy::Chaotic => "Chaotic",
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            BarkeepStrategy::PerfectPour => "perfect",
            BarkeepStrategy::DominantSplash => "dominant",
            BarkeepStrategy::Chaotic => "chaotic",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.key().eq_ignore_ascii_case(key))
    }

    #[must_use]
    pub fn create_policy(self, seed: u64) -> Box<dyn BarkeepPolicy + Send> {
        match self {
            BarkeepStrategy::PerfectPour => Box::new(PerfectPourPolicy),
            BarkeepStrategy::DominantSplash => Box::new(DominantSplashPolicy::new(seed)),
            BarkeepStrategy::Chaotic => Box::new(ChaoticPolicy::new(seed)),
        }
    }
}

impl fmt::Display for BarkeepStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reads the mission target and builds the best answer the shelf allows.
struct PerfectPourPolicy;

/// Ignores the request and always pours a two-one dominant split.
struct DominantSplashPolicy {
    rng: ChaCha20Rng,
}

/// Pours whatever comes to hand.
struct ChaoticPolicy {
    rng: ChaCha20Rng,
}

impl DominantSplashPolicy {
    fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl ChaoticPolicy {
    fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

fn first_of_flavor(shelf: &[Ingredient], flavor: FlavorType) -> Option<Ingredient> {
    shelf.iter().find(|i| i.flavor == flavor).cloned()
}

impl BarkeepPolicy for PerfectPourPolicy {
    fn name(&self) -> &'static str {
        "Perfect Pour"
    }

    fn plan_pours(&mut self, mission: &Mission, shelf: &[Ingredient]) -> Vec<Ingredient> {
        match &mission.target {
            MissionTarget::Cocktail(recipe) => recipe
                .ingredients
                .iter()
                .filter_map(|name| shelf.iter().find(|i| &i.name == name).cloned())
                .collect(),
            MissionTarget::Flavor(flavor) => first_of_flavor(shelf, *flavor)
                .into_iter()
                .cycle()
                .take(2)
                .collect(),
            MissionTarget::Ingredient(ingredient) => vec![ingredient.clone()],
            MissionTarget::MixedTypes(types) => {
                let mut pours: Vec<Ingredient> = first_of_flavor(shelf, types[0])
                    .into_iter()
                    .cycle()
                    .take(2)
                    .collect();
                for flavor in &types[1..] {
                    pours.extend(first_of_flavor(shelf, *flavor));
                }
                pours
            }
        }
    }
}

impl BarkeepPolicy for DominantSplashPolicy {
    fn name(&self) -> &'static str {
        "Dominant Splash"
    }

    fn plan_pours(&mut self, _mission: &Mission, shelf: &[Ingredient]) -> Vec<Ingredient> {
        let Some(lead) = shelf.choose(&mut self.rng).cloned() else {
            return Vec::new();
        };
        let mut pours = vec![lead.clone(), lead.clone()];
        let splashes: Vec<&Ingredient> = shelf.iter().filter(|i| i.flavor != lead.flavor).collect();
        if let Some(splash) = splashes.choose(&mut self.rng) {
            pours.push((*splash).clone());
        }
        pours
    }
}

impl BarkeepPolicy for ChaoticPolicy {
    fn name(&self) -> &'static str {
        "Chaotic"
    }

    fn plan_pours(&mut self, _mission: &Mission, shelf: &[Ingredient]) -> Vec<Ingredient> {
        if shelf.is_empty() {
            return Vec::new();
        }
        let count = self.rng.gen_range(1..=Mix::capacity());
        (0..count)
            .filter_map(|_| shelf.choose(&mut self.rng).cloned())
            .collect()
    }
}
