//! Drink evaluation rules
use std::collections::HashMap;

use crate::constants::{
    DOMINANT_MIN_COUNT, FLAVOR_MATCH_MIN_COUNT, SCORE_COCKTAIL_MATCH, SCORE_FLAVOR_MATCH,
    SCORE_INGREDIENT_MATCH, SCORE_PER_MIXED_TYPE,
};
use crate::data::FlavorType;
use crate::mission::{Mission, MissionTarget};
use crate::mix::Mix;

/// Judge a finished mix against a mission. Pure function of its inputs;
/// never negative, zero on any miss.
///
/// Cocktail matching ignores garnish and prep method; recipes keep optional
/// garnish/serving fields for callers that want a stricter house rule.
#[must_use]
pub fn evaluate(mix: &Mix, mission: &Mission) -> u32 {
    match &mission.target {
        MissionTarget::Cocktail(recipe) => score_cocktail(mix, &recipe.ingredients),
        MissionTarget::Flavor(flavor) => score_flavor(mix, *flavor),
        MissionTarget::Ingredient(ingredient) => score_ingredient(mix, &ingredient.name),
        MissionTarget::MixedTypes(expected) => score_mixed_types(mix, expected),
    }
}

/// Exact multiset match between mix ingredient names and the recipe list;
/// order-independent, duplicates significant.
fn score_cocktail(mix: &Mix, recipe_ingredients: &[String]) -> u32 {
    if mix.len() != recipe_ingredients.len() {
        return 0;
    }
    let mut wanted: HashMap<&str, i32> = HashMap::new();
    for name in recipe_ingredients {
        *wanted.entry(name.as_str()).or_insert(0) += 1;
    }
    for ingredient in mix.ingredients() {
        match wanted.get_mut(ingredient.name.as_str()) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return 0,
        }
    }
    SCORE_COCKTAIL_MATCH
}

fn score_flavor(mix: &Mix, target: FlavorType) -> u32 {
    let count = mix
        .ingredients()
        .iter()
        .filter(|i| i.flavor == target)
        .count();
    if count >= FLAVOR_MATCH_MIN_COUNT {
        SCORE_FLAVOR_MATCH
    } else {
        0
    }
}

fn score_ingredient(mix: &Mix, target_name: &str) -> u32 {
    if mix.ingredients().iter().any(|i| i.name == target_name) {
        SCORE_INGREDIENT_MATCH
    } else {
        0
    }
}

/// Dominance rule: the first expected type needs at least two pours and a
/// tied-or-strict maximum count; every other expected type needs at least one.
fn score_mixed_types(mix: &Mix, expected: &[FlavorType]) -> u32 {
    if mix.is_empty() {
        return 0;
    }
    let Some(dominant) = expected.first() else {
        return 0;
    };

    let mut counts: HashMap<FlavorType, usize> = HashMap::new();
    for ingredient in mix.ingredients() {
        *counts.entry(ingredient.flavor).or_insert(0) += 1;
    }

    let dominant_count = counts.get(dominant).copied().unwrap_or(0);
    let max_count = counts.values().copied().max().unwrap_or(0);
    if dominant_count < DOMINANT_MIN_COUNT || dominant_count < max_count {
        return 0;
    }

    for secondary in &expected[1..] {
        if counts.get(secondary).copied().unwrap_or(0) < 1 {
            return 0;
        }
    }

    SCORE_PER_MIXED_TYPE * expected.len() as u32
}
