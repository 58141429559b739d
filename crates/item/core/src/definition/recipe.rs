use std::collections::BTreeMap;

use super::ItemKind;
use crate::error::{ErrorSeverity, ItemError};

/// Rejected recipe declaration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecipeError {
    #[error("recipe shape must have 1 to 3 rows, got {0}")]
    RowCount(usize),

    #[error("recipe rows must all be 1 to 3 columns wide, got {0:?}")]
    RowWidth(Vec<String>),

    #[error("ingredient symbol {0:?} does not appear in the shape")]
    UnusedSymbol(char),

    #[error("shape symbol {0:?} has no ingredient")]
    MissingIngredient(char),
}

impl ItemError for RecipeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::RowCount(_) => "RECIPE_ROW_COUNT",
            Self::RowWidth(_) => "RECIPE_ROW_WIDTH",
            Self::UnusedSymbol(_) => "RECIPE_UNUSED_SYMBOL",
            Self::MissingIngredient(_) => "RECIPE_MISSING_INGREDIENT",
        }
    }
}

/// A shaped crafting recipe producing the owning item.
///
/// `shape` holds up to three rows of up to three symbols; a space is an empty
/// slot. Every other symbol maps to an ingredient kind. Hosts hand the recipe
/// to their crafting system; nothing here registers it anywhere.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recipe {
    pub shape: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ingredients: BTreeMap<char, ItemKind>,
    #[cfg_attr(feature = "serde", serde(default = "default_amount"))]
    pub amount: u32,
}

#[cfg(feature = "serde")]
fn default_amount() -> u32 {
    1
}

impl Recipe {
    /// Starts a recipe from its rows, checking the grid dimensions.
    pub fn shaped<S: Into<String>>(rows: impl IntoIterator<Item = S>) -> Result<Self, RecipeError> {
        let recipe = Self {
            shape: rows.into_iter().map(Into::into).collect(),
            ingredients: BTreeMap::new(),
            amount: 1,
        };
        recipe.check_grid()?;
        Ok(recipe)
    }

    /// Binds `symbol` to an ingredient; the symbol must appear in the shape.
    pub fn with_ingredient(mut self, symbol: char, kind: ItemKind) -> Result<Self, RecipeError> {
        if symbol == ' ' || !self.symbols().any(|used| used == symbol) {
            return Err(RecipeError::UnusedSymbol(symbol));
        }
        self.ingredients.insert(symbol, kind);
        Ok(self)
    }

    pub fn with_amount(mut self, amount: u32) -> Self {
        self.amount = amount;
        self
    }

    /// Checks the grid and that ingredients and shape symbols match one to one.
    pub fn validate(&self) -> Result<(), RecipeError> {
        self.check_grid()?;

        if let Some(symbol) = self.symbols().find(|symbol| !self.ingredients.contains_key(symbol)) {
            return Err(RecipeError::MissingIngredient(symbol));
        }
        if let Some(&symbol) = self
            .ingredients
            .keys()
            .find(|&&symbol| !self.symbols().any(|used| used == symbol))
        {
            return Err(RecipeError::UnusedSymbol(symbol));
        }
        Ok(())
    }

    fn check_grid(&self) -> Result<(), RecipeError> {
        if !(1..=3).contains(&self.shape.len()) {
            return Err(RecipeError::RowCount(self.shape.len()));
        }

        let width = self.shape[0].chars().count();
        let uneven = self.shape.iter().any(|row| row.chars().count() != width);
        if !(1..=3).contains(&width) || uneven {
            return Err(RecipeError::RowWidth(self.shape.clone()));
        }
        Ok(())
    }

    fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.shape
            .iter()
            .flat_map(|row| row.chars())
            .filter(|symbol| *symbol != ' ')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(name: &str) -> ItemKind {
        name.parse().unwrap()
    }

    #[test]
    fn shaped_recipe_binds_ingredients() {
        let recipe = Recipe::shaped(["DDD", " S ", " S "])
            .unwrap()
            .with_ingredient('D', kind("diamond"))
            .unwrap()
            .with_ingredient('S', kind("stick"))
            .unwrap();

        assert!(recipe.validate().is_ok());
        assert_eq!(recipe.amount, 1);
        assert_eq!(recipe.ingredients[&'S'].as_str(), "stick");
    }

    #[test]
    fn grid_dimensions_are_checked() {
        assert_eq!(
            Recipe::shaped(Vec::<String>::new()).unwrap_err(),
            RecipeError::RowCount(0)
        );
        assert!(matches!(
            Recipe::shaped(["AA", "A"]).unwrap_err(),
            RecipeError::RowWidth(_)
        ));
        assert!(matches!(
            Recipe::shaped(["AAAA"]).unwrap_err(),
            RecipeError::RowWidth(_)
        ));
    }

    #[test]
    fn symbols_and_ingredients_must_match() {
        let recipe = Recipe::shaped(["AB"]).unwrap();
        assert_eq!(
            recipe.clone().with_ingredient('C', kind("stone")).unwrap_err(),
            RecipeError::UnusedSymbol('C')
        );

        let partial = recipe.with_ingredient('A', kind("stone")).unwrap();
        assert_eq!(partial.validate(), Err(RecipeError::MissingIngredient('B')));
        assert_eq!(partial.validate().unwrap_err().error_code(), "RECIPE_MISSING_INGREDIENT");
    }
}
