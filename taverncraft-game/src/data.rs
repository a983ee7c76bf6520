use serde::{Deserialize, Serialize};

/// The four flavor families every ingredient and garnish belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlavorType {
    Sweet,
    Sour,
    Strong,
    Bitter,
}

impl FlavorType {
    pub const ALL: [Self; 4] = [Self::Sweet, Self::Sour, Self::Strong, Self::Bitter];

    /// Lowercase label used in mission tags and display text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sweet => "sweet",
            Self::Sour => "sour",
            Self::Strong => "strong",
            Self::Bitter => "bitter",
        }
    }
}

impl std::fmt::Display for FlavorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How a finished drink is prepared before serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrepMethod {
    Shaken,
    Stirred,
    Poured,
}

/// A pourable ingredient from the bar shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub flavor: FlavorType,
}

impl Ingredient {
    #[must_use]
    pub fn new(name: &str, flavor: FlavorType) -> Self {
        Self {
            name: name.to_string(),
            flavor,
        }
    }
}

/// A garnish added on top of the glass; at most one per mix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Garnish {
    pub name: String,
    pub flavor: FlavorType,
}

impl Garnish {
    #[must_use]
    pub fn new(name: &str, flavor: FlavorType) -> Self {
        Self {
            name: name.to_string(),
            flavor,
        }
    }
}

/// A named recipe from the cocktail book.
///
/// `ingredients` is a multiset of ingredient names; duplicates are
/// significant when matching a mix against the recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CocktailRecipe {
    pub name: String,
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub garnish: Option<String>,
    #[serde(default)]
    pub serving: Option<PrepMethod>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

/// Container for all reference tables the core reads but never mutates.
///
/// The `extended_*` lists hold entries locked behind the shelf and book
/// upgrades; the session assembles the active pools from the ledger flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ReferenceData {
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub extended_ingredients: Vec<Ingredient>,
    pub garnishes: Vec<Garnish>,
    pub recipes: Vec<CocktailRecipe>,
    #[serde(default)]
    pub extended_recipes: Vec<CocktailRecipe>,
}

fn recipe(name: &str, ingredients: &[&str], tags: &[&str], notes: &str) -> CocktailRecipe {
    CocktailRecipe {
        name: name.to_string(),
        ingredients: ingredients.iter().map(|i| (*i).to_string()).collect(),
        garnish: None,
        serving: None,
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        notes: notes.to_string(),
    }
}

impl ReferenceData {
    /// Create empty reference data (useful for tests)
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load reference data from JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid reference data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The catalog the game ships with. Callers that own their own tables
    /// (a web frontend loading JSON assets) can substitute them instead.
    #[must_use]
    pub fn builtin() -> Self {
        use FlavorType::{Bitter, Sour, Strong, Sweet};

        let ingredients = vec![
            Ingredient::new("Honey", Sweet),
            Ingredient::new("Berry", Sour),
            Ingredient::new("Firewater", Strong),
            Ingredient::new("Herbal", Bitter),
        ];
        let extended_ingredients = vec![
            Ingredient::new("Nectar", Sweet),
            Ingredient::new("Crabapple", Sour),
            Ingredient::new("Grog", Strong),
            Ingredient::new("Nettle", Bitter),
        ];
        let garnishes = vec![
            Garnish::new("Mint Leaf", Bitter),
            Garnish::new("Lemon Twist", Sour),
            Garnish::new("Sugar Rim", Sweet),
            Garnish::new("Chili Flake", Strong),
        ];
        let recipes = vec![
            recipe(
                "Sunfire Elixir",
                &["Firewater", "Honey", "Honey", "Berry"],
                &["strong", "sweet"],
                "Strong and sweet with a berry finish.",
            ),
            recipe(
                "Herbal Bloom",
                &["Herbal", "Berry", "Honey"],
                &["bitter", "sweet"],
                "Bitter with a sweet and sour twist.",
            ),
            recipe(
                "Sour Sting",
                &["Berry", "Firewater"],
                &["sour", "strong"],
                "Sharp and hot, with a sour tang.",
            ),
            recipe(
                "Bittersweet Dream",
                &["Herbal", "Honey"],
                &["bitter", "sweet"],
                "Balanced bitter and sweet tones.",
            ),
            recipe(
                "Wild Blaze",
                &["Firewater", "Firewater", "Berry", "Berry"],
                &["strong", "sour"],
                "Double burn with a fruity punch.",
            ),
            recipe(
                "Sweet Sin",
                &["Honey", "Honey", "Berry"],
                &["sweet"],
                "Almost too sweet to be true.",
            ),
            recipe(
                "Forest Whisper",
                &["Herbal", "Herbal", "Berry", "Firewater"],
                &["bitter", "strong"],
                "Tastes like walking through an enchanted forest.",
            ),
            recipe(
                "Burning Truth",
                &["Firewater", "Herbal", "Honey"],
                &["strong", "bitter"],
                "Truth serum in a glass, if you can handle it.",
            ),
            recipe(
                "Crimson Kiss",
                &["Berry", "Berry", "Firewater"],
                &["sour", "strong"],
                "A tart, dangerous delight.",
            ),
            recipe(
                "Golden Glow",
                &["Honey", "Berry", "Herbal"],
                &["sweet", "bitter"],
                "Bright, soft and complex.",
            ),
            recipe(
                "Stroh 80",
                &["Firewater", "Firewater", "Firewater", "Herbal"],
                &["strong"],
                "Tastes like a bad decision",
            ),
        ];
        let extended_recipes = vec![
            recipe(
                "Amber Dusk",
                &["Nectar", "Herbal", "Firewater"],
                &["sweet", "bitter"],
                "Sundown in a tumbler.",
            ),
            recipe(
                "Orchard Rebellion",
                &["Crabapple", "Crabapple", "Honey"],
                &["sour", "sweet"],
                "The orchard bites back.",
            ),
            CocktailRecipe {
                name: "Sailor's Grudge".to_string(),
                ingredients: vec!["Grog".to_string(), "Grog".to_string(), "Berry".to_string()],
                garnish: Some("Chili Flake".to_string()),
                serving: Some(PrepMethod::Shaken),
                tags: vec!["strong".to_string(), "sour".to_string()],
                notes: "Held below deck for too long.".to_string(),
            },
            recipe(
                "Hedge Witch",
                &["Nettle", "Nettle", "Nectar", "Berry"],
                &["bitter", "sweet"],
                "Prickly going down, kind coming back.",
            ),
            CocktailRecipe {
                name: "Quiet Ember".to_string(),
                ingredients: vec![
                    "Grog".to_string(),
                    "Honey".to_string(),
                    "Nettle".to_string(),
                ],
                garnish: Some("Mint Leaf".to_string()),
                serving: Some(PrepMethod::Stirred),
                tags: vec!["strong".to_string(), "bitter".to_string()],
                notes: "Warms without the blaze.".to_string(),
            },
            recipe(
                "Crabapple Crown",
                &["Crabapple", "Nectar", "Grog", "Nettle"],
                &["sour", "strong"],
                "One of everything from the back shelf.",
            ),
        ];

        Self {
            ingredients,
            extended_ingredients,
            garnishes,
            recipes,
            extended_recipes,
        }
    }
}
