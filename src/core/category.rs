//! Emoji categories: each player's pieces are drawn from one category.
//!
//! A `Category` is a named, fixed set of emoji symbols. Each player binds to
//! exactly one category for the whole match, and the two players' categories
//! must differ. The symbol placed on each turn is drawn uniformly at random
//! from the acting player's category; the symbol is cosmetic and never
//! affects win detection.
//!
//! The `CategoryCatalog` is static configuration owned by the presentation
//! layer. The engine only sees the two `Category` values handed to it at
//! match setup.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// A single emoji symbol.
///
/// Emoji are frequently multi-codepoint (variation selectors, ZWJ
/// sequences), so this wraps a `String` rather than a `char`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Emoji(String);

impl Emoji {
    /// Create an emoji from its string form.
    #[must_use]
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// The string form of the emoji.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Emoji {
    fn from(symbol: &str) -> Self {
        Self::new(symbol)
    }
}

impl std::fmt::Display for Emoji {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier for a category in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub u16);

impl CategoryId {
    /// Create a new category ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }
}

/// A named, fixed set of emoji symbols.
///
/// ## Example
///
/// ```
/// use blink_tac_toe::{Category, CategoryId, GameRng};
///
/// let weather = Category::new(CategoryId::new(9), "Weather", &["☀️", "🌧️", "⛅"]);
///
/// let mut rng = GameRng::new(42);
/// let symbol = weather.random_symbol(&mut rng);
/// assert!(weather.symbols().contains(&symbol));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Catalog identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    symbols: Vec<Emoji>,
}

impl Category {
    /// Create a category from a symbol list.
    ///
    /// Panics if `symbols` is empty: a category must have at least one
    /// symbol to draw from.
    #[must_use]
    pub fn new(id: CategoryId, name: impl Into<String>, symbols: &[&str]) -> Self {
        assert!(!symbols.is_empty(), "Category must have at least one symbol");
        Self {
            id,
            name: name.into(),
            symbols: symbols.iter().copied().map(Emoji::from).collect(),
        }
    }

    /// The category's symbol set, in catalog order.
    #[must_use]
    pub fn symbols(&self) -> &[Emoji] {
        &self.symbols
    }

    /// Draw a symbol uniformly at random.
    pub fn random_symbol(&self, rng: &mut GameRng) -> Emoji {
        // `new` guarantees at least one symbol
        self.symbols[rng.gen_range_usize(0..self.symbols.len())].clone()
    }
}

/// Registry of categories available at setup.
///
/// Stores all categories a session offers and provides lookup by ID.
///
/// ## Example
///
/// ```
/// use blink_tac_toe::{CategoryCatalog, CategoryId};
///
/// let catalog = CategoryCatalog::builtin();
/// let animals = catalog.get(CategoryId::new(0)).unwrap();
/// assert_eq!(animals.name, "Animals");
/// assert_eq!(animals.symbols().len(), 6);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CategoryCatalog {
    categories: FxHashMap<CategoryId, Category>,
}

impl CategoryCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The six stock categories.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        let stock: [(&str, [&str; 6]); 6] = [
            ("Animals", ["🐶", "🐱", "🐵", "🐰", "🦊", "🐸"]),
            ("Food", ["🍕", "🍟", "🍔", "🍩", "🌮", "🍎"]),
            ("Sports", ["⚽", "🏀", "🏈", "🎾", "🏐", "🎱"]),
            ("Nature", ["🌸", "🌺", "🌻", "🌹", "🌷", "🌼"]),
            ("Space", ["🚀", "🛸", "⭐", "🌙", "☄️", "🪐"]),
            ("Transport", ["🚗", "🚁", "✈️", "🚢", "🚂", "🏍️"]),
        ];
        for (i, (name, symbols)) in stock.iter().enumerate() {
            catalog.register(Category::new(CategoryId::new(i as u16), *name, symbols));
        }
        catalog
    }

    /// Register a category.
    ///
    /// Panics if a category with the same ID already exists.
    pub fn register(&mut self, category: Category) {
        if self.categories.contains_key(&category.id) {
            panic!("Category with ID {:?} already registered", category.id);
        }
        self.categories.insert(category.id, category);
    }

    /// Get a category by ID.
    #[must_use]
    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(&id)
    }

    /// Iterate over all categories (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    /// Number of categories in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
