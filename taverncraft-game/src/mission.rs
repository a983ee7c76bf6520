//! Mission selection logic
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::constants::{MISSION_RETRY_CAP, MIXED_TYPES_MIN};
use crate::data::{CocktailRecipe, FlavorType, Ingredient};

/// Broad classification of what a mission asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionKind {
    Cocktail,
    Flavor,
    Ingredient,
    MixedTypes,
}

impl MissionKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cocktail => "cocktail",
            Self::Flavor => "flavor",
            Self::Ingredient => "ingredient",
            Self::MixedTypes => "mixed_types",
        }
    }
}

/// What the mix gets judged against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionTarget {
    Cocktail(CocktailRecipe),
    Flavor(FlavorType),
    Ingredient(Ingredient),
    /// Ordered list of 2-4 distinct types; the first is dominant.
    MixedTypes(Vec<FlavorType>),
}

/// A patron request: the target plus display text and filter tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub target: MissionTarget,
    pub text: String,
    pub tags: Vec<String>,
}

impl Mission {
    #[must_use]
    pub const fn kind(&self) -> MissionKind {
        match self.target {
            MissionTarget::Cocktail(_) => MissionKind::Cocktail,
            MissionTarget::Flavor(_) => MissionKind::Flavor,
            MissionTarget::Ingredient(_) => MissionKind::Ingredient,
            MissionTarget::MixedTypes(_) => MissionKind::MixedTypes,
        }
    }
}

/// The active draw pools. Borrowed slices so upgrades can widen the shelf
/// and the book without the generator knowing about the ledger.
#[derive(Debug, Clone, Copy)]
pub struct MissionPools<'a> {
    pub ingredients: &'a [Ingredient],
    pub recipes: &'a [CocktailRecipe],
}

/// Generate the next mission.
///
/// Kind is uniform over cocktail/flavor/ingredient; an empty pool drops the
/// attempt through to the mixed-types fallback. The freshly generated text
/// must differ from `previous_text`; after `MISSION_RETRY_CAP` rerolls a
/// repeat is accepted rather than looping forever.
pub fn generate_mission<R: Rng>(
    pools: &MissionPools<'_>,
    previous_text: Option<&str>,
    rng: &mut R,
) -> Mission {
    for _ in 0..MISSION_RETRY_CAP {
        let mission = roll_mission(pools, rng);
        if previous_text != Some(mission.text.as_str()) {
            return mission;
        }
    }
    roll_mission(pools, rng)
}

fn roll_mission<R: Rng>(pools: &MissionPools<'_>, rng: &mut R) -> Mission {
    let attempt = match rng.gen_range(0..3) {
        0 => cocktail_mission(pools.recipes, rng),
        1 => Some(flavor_mission(rng)),
        _ => ingredient_mission(pools.ingredients, rng),
    };
    attempt.unwrap_or_else(|| mixed_types_mission(rng))
}

fn cocktail_mission<R: Rng>(recipes: &[CocktailRecipe], rng: &mut R) -> Option<Mission> {
    let recipe = recipes.choose(rng)?.clone();
    let text = match rng.gen_range(0..3) {
        0 => format!("One {}, please.", recipe.name),
        1 => format!("The book says you can make a {}. Prove it.", recipe.name),
        _ => format!("I'm craving a {} tonight.", recipe.name),
    };
    let mut tags = vec!["cocktail".to_string()];
    tags.extend(recipe.tags.iter().map(|t| t.to_lowercase()));
    Some(Mission {
        target: MissionTarget::Cocktail(recipe),
        text,
        tags,
    })
}

fn flavor_mission<R: Rng>(rng: &mut R) -> Mission {
    let mut types = FlavorType::ALL;
    types.shuffle(rng);
    let flavor = types[0];
    let text = match rng.gen_range(0..3) {
        0 => format!("Something properly {flavor}, barkeep."),
        1 => format!("Give me a drink that leans {flavor}."),
        _ => format!("I'm in a {flavor} mood. Surprise me."),
    };
    Mission {
        target: MissionTarget::Flavor(flavor),
        text,
        tags: vec!["flavor".to_string(), flavor.label().to_string()],
    }
}

fn ingredient_mission<R: Rng>(ingredients: &[Ingredient], rng: &mut R) -> Option<Mission> {
    let ingredient = ingredients.choose(rng)?.clone();
    let text = match rng.gen_range(0..3) {
        0 => format!("Anything with {} in it.", ingredient.name),
        1 => format!("Don't skimp on the {}.", ingredient.name),
        _ => format!("I hear your {} is the best in town.", ingredient.name),
    };
    let tags = vec![
        "ingredient".to_string(),
        ingredient.flavor.label().to_string(),
    ];
    Some(Mission {
        target: MissionTarget::Ingredient(ingredient),
        text,
        tags,
    })
}

fn mixed_types_mission<R: Rng>(rng: &mut R) -> Mission {
    let mut types = FlavorType::ALL;
    types.shuffle(rng);
    let count = rng.gen_range(MIXED_TYPES_MIN..=FlavorType::ALL.len() - 1);
    let selected: Vec<FlavorType> = types[..count].to_vec();

    let listed = selected
        .iter()
        .map(|t| t.label())
        .collect::<Vec<_>>()
        .join(", ");
    let text = match rng.gen_range(0..2) {
        0 => format!("I want a mostly {listed} drink."),
        _ => format!(
            "Pour me something {listed} - heavy on the {}.",
            selected[0].label()
        ),
    };

    let mut tags = vec!["mixed".to_string()];
    tags.extend(selected.iter().map(|t| t.label().to_string()));
    Mission {
        target: MissionTarget::MixedTypes(selected),
        text,
        tags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ReferenceData;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn full_pools(data: &ReferenceData) -> MissionPools<'_> {
        MissionPools {
            ingredients: &data.ingredients,
            recipes: &data.recipes,
        }
    }

    #[test]
    fn empty_pools_fall_back_to_mixed_or_flavor() {
        let pools = MissionPools {
            ingredients: &[],
            recipes: &[],
        };
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        for _ in 0..50 {
            let mission = generate_mission(&pools, None, &mut rng);
            assert!(
                matches!(
                    mission.kind(),
                    MissionKind::Flavor | MissionKind::MixedTypes
                ),
                "got {:?} from empty pools",
                mission.kind()
            );
            assert!(!mission.text.is_empty());
        }
    }

    #[test]
    fn all_direct_kinds_reachable() {
        let data = ReferenceData::builtin();
        let pools = full_pools(&data);
        let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(generate_mission(&pools, None, &mut rng).kind());
        }
        for kind in [
            MissionKind::Cocktail,
            MissionKind::Flavor,
            MissionKind::Ingredient,
        ] {
            assert!(seen.contains(&kind), "{kind:?} never generated");
        }
    }

    #[test]
    fn mixed_types_are_distinct_and_bounded() {
        let mut rng = ChaCha20Rng::from_seed([9u8; 32]);
        for _ in 0..100 {
            let mission = mixed_types_mission(&mut rng);
            let MissionTarget::MixedTypes(types) = &mission.target else {
                panic!("expected mixed-types target");
            };
            assert!(types.len() >= MIXED_TYPES_MIN);
            assert!(types.len() < FlavorType::ALL.len());
            let mut dedup = types.clone();
            dedup.sort_by_key(|t| t.label());
            dedup.dedup();
            assert_eq!(dedup.len(), types.len(), "duplicate flavor in {types:?}");
        }
    }

    #[test]
    fn never_repeats_previous_text() {
        let data = ReferenceData::builtin();
        let pools = full_pools(&data);
        let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
        let mut previous: Option<String> = None;
        for _ in 0..300 {
            let mission = generate_mission(&pools, previous.as_deref(), &mut rng);
            assert_ne!(Some(mission.text.as_str()), previous.as_deref());
            previous = Some(mission.text);
        }
    }

    #[test]
    fn cocktail_tags_include_lowercased_recipe_tags() {
        let data = ReferenceData::builtin();
        let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
        let mission = cocktail_mission(&data.recipes, &mut rng).unwrap();
        assert_eq!(mission.tags[0], "cocktail");
        let MissionTarget::Cocktail(recipe) = &mission.target else {
            panic!("expected cocktail target");
        };
        for tag in &recipe.tags {
            assert!(mission.tags.contains(&tag.to_lowercase()));
        }
    }
}
