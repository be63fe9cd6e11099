// In-memory recipe catalog loaded from a CSV export

pub mod literal;
pub mod models;

pub use literal::parse_string_list;
pub use models::{Recipe, RecipeRow};

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Immutable collection of every known recipe, in source order.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Arc<Recipe>>,
    by_id: HashMap<i64, usize>,
}

impl RecipeCatalog {
    /// Load the catalog from a CSV file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = std::fs::File::open(path).map_err(|e| {
            Error::Load(format!(
                "Failed to open catalog {}: {}",
                path.display(),
                e
            ))
        })?;

        let catalog = Self::from_reader(file).map_err(|e| match e {
            Error::Load(msg) => Error::Load(format!("{}: {}", path.display(), msg)),
            other => other,
        })?;

        info!(
            "Loaded {} recipes from {}",
            catalog.len(),
            path.display()
        );

        Ok(catalog)
    }

    /// Parse a catalog from any CSV source with a header row
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let mut recipes = Vec::new();
        for (index, row) in csv_reader.deserialize::<RecipeRow>().enumerate() {
            // Header is line 1
            let line = index + 2;
            let row = row.map_err(|e| Error::Load(format!("Malformed row at line {line}: {e}")))?;
            recipes.push(parse_row(row, line)?);
        }

        Self::from_recipes(recipes)
    }

    /// Build a catalog from already parsed recipes, rejecting duplicate ids
    pub fn from_recipes(recipes: Vec<Recipe>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(recipes.len());

        for (position, recipe) in recipes.iter().enumerate() {
            if by_id.insert(recipe.id, position).is_some() {
                return Err(Error::Load(format!("Duplicate recipe id {}", recipe.id)));
            }
        }

        debug!("Catalog built with {} recipes", recipes.len());

        Ok(Self {
            recipes: recipes.into_iter().map(Arc::new).collect(),
            by_id,
        })
    }

    /// Read-only view of every recipe, in source order
    pub fn all(&self) -> &[Arc<Recipe>] {
        &self.recipes
    }

    /// Look a recipe up by id
    pub fn get(&self, id: i64) -> Option<&Arc<Recipe>> {
        self.by_id.get(&id).map(|&position| &self.recipes[position])
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

fn parse_row(row: RecipeRow, line: usize) -> Result<Recipe> {
    let ingredients = parse_string_list(&row.ingredients).map_err(|e| {
        Error::Load(format!(
            "Recipe {} (line {line}) has unparseable ingredients: {}",
            row.id,
            detail(e)
        ))
    })?;

    let steps = parse_string_list(&row.steps).map_err(|e| {
        Error::Load(format!(
            "Recipe {} (line {line}) has unparseable steps: {}",
            row.id,
            detail(e)
        ))
    })?;

    Ok(Recipe {
        id: row.id,
        name: row.name,
        minutes: row.minutes,
        ingredients,
        steps,
        ingredient_count: row.n_ingredients,
    })
}

fn detail(error: Error) -> String {
    match error {
        Error::Load(msg) => msg,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
name,id,minutes,contributor_id,n_steps,steps,ingredients,n_ingredients
scrambled eggs,101,10,7,2,\"['whisk the eggs', 'cook in butter']\",\"['eggs', 'butter', 'salt']\",3
garlic bread,102,20,7,1,\"['toast bread with garlic butter']\",\"['bread', 'garlic', 'butter']\",3
";

    #[test]
    fn test_from_reader_parses_rows_in_order() {
        let catalog = RecipeCatalog::from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(catalog.len(), 2);
        let first = &catalog.all()[0];
        assert_eq!(first.id, 101);
        assert_eq!(first.name, "scrambled eggs");
        assert_eq!(first.minutes, 10);
        assert_eq!(first.ingredients, vec!["eggs", "butter", "salt"]);
        assert_eq!(first.steps, vec!["whisk the eggs", "cook in butter"]);
        assert_eq!(first.ingredient_count, 3);
        assert_eq!(catalog.all()[1].id, 102);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = RecipeCatalog::from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(catalog.get(102).unwrap().name, "garlic bread");
        assert!(catalog.get(999).is_none());
    }

    #[test]
    fn test_unparseable_ingredients_is_load_error() {
        let data = "\
id,name,minutes,ingredients,steps,n_ingredients
1,broken,5,not a list,\"['stir']\",1
";
        let err = RecipeCatalog::from_reader(data.as_bytes()).unwrap_err();
        match err {
            Error::Load(msg) => {
                assert!(msg.contains("Recipe 1"));
                assert!(msg.contains("ingredients"));
            }
            other => panic!("expected load error, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_minutes_is_load_error() {
        let data = "\
id,name,minutes,ingredients,steps,n_ingredients
1,odd,-5,\"['salt']\",\"['stir']\",1
";
        assert!(matches!(
            RecipeCatalog::from_reader(data.as_bytes()),
            Err(Error::Load(_))
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let data = "\
id,name,minutes,ingredients,steps,n_ingredients
1,a,5,\"['salt']\",\"['stir']\",1
1,b,5,\"['salt']\",\"['stir']\",1
";
        let err = RecipeCatalog::from_reader(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Duplicate recipe id 1"));
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let err = RecipeCatalog::load("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, Error::Load(_)));
    }

    #[test]
    fn test_header_only_gives_empty_catalog() {
        let data = "id,name,minutes,ingredients,steps,n_ingredients\n";
        let catalog = RecipeCatalog::from_reader(data.as_bytes()).unwrap();
        assert!(catalog.is_empty());
    }
}
