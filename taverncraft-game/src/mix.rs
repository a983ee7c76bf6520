//! The in-progress glass a player builds for one serve attempt.
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::constants::MIX_CAPACITY;
use crate::data::{Garnish, Ingredient, PrepMethod};

/// Ordered ingredient sequence plus optional garnish and prep method.
/// Capacity is four pours; the glass rejects anything past that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Mix {
    ingredients: SmallVec<[Ingredient; MIX_CAPACITY]>,
    pub garnish: Option<Garnish>,
    pub method: Option<PrepMethod>,
}

impl Mix {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an ingredient; returns false when the glass is already full.
    pub fn try_add(&mut self, ingredient: Ingredient) -> bool {
        if self.ingredients.len() >= MIX_CAPACITY {
            return false;
        }
        self.ingredients.push(ingredient);
        true
    }

    #[must_use]
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    #[must_use]
    pub const fn capacity() -> usize {
        MIX_CAPACITY
    }

    /// Select a garnish, or deselect it when the same one is already chosen.
    pub fn toggle_garnish(&mut self, garnish: Garnish) {
        if self.garnish.as_ref() == Some(&garnish) {
            self.garnish = None;
        } else {
            self.garnish = Some(garnish);
        }
    }

    /// Select a prep method, or deselect it when already chosen.
    pub fn toggle_method(&mut self, method: PrepMethod) {
        if self.method == Some(method) {
            self.method = None;
        } else {
            self.method = Some(method);
        }
    }

    /// Empty the glass and drop garnish/method selections.
    pub fn clear(&mut self) {
        self.ingredients.clear();
        self.garnish = None;
        self.method = None;
    }
}
