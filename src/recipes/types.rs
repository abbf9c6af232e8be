use std::fmt;

/// A recipe as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    /// Provider identifier, used for follow-up lookups
    pub id: String,
    pub name: String,
    pub category: String,
    pub area: String,
    pub instructions: String,
    pub image_url: Option<String>,
}

impl Recipe {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: String::new(),
            area: String::new(),
            instructions: String::new(),
            image_url: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = area.into();
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// "Category | Area" subtitle line
    pub fn subtitle(&self) -> String {
        format!("{} | {}", self.category, self.area)
    }
}

/// Categories offered by the category filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Beef,
    Chicken,
    Dessert,
    Pasta,
    Seafood,
    Starter,
    Vegan,
    Vegetarian,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Beef,
        Category::Chicken,
        Category::Dessert,
        Category::Pasta,
        Category::Seafood,
        Category::Starter,
        Category::Vegan,
        Category::Vegetarian,
    ];

    /// Name as understood by the recipe service
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Beef => "Beef",
            Category::Chicken => "Chicken",
            Category::Dessert => "Dessert",
            Category::Pasta => "Pasta",
            Category::Seafood => "Seafood",
            Category::Starter => "Starter",
            Category::Vegan => "Vegan",
            Category::Vegetarian => "Vegetarian",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the user asked the provider for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeQuery {
    ByName(String),
    Random,
    ByCategory(Category),
}

impl fmt::Display for RecipeQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeQuery::ByName(name) => write!(f, "search {:?}", name),
            RecipeQuery::Random => f.write_str("random"),
            RecipeQuery::ByCategory(category) => write!(f, "category {}", category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtitle() {
        let recipe = Recipe::new("52771", "Spicy Arrabiata Penne")
            .with_category("Vegetarian")
            .with_area("Italian");
        assert_eq!(recipe.subtitle(), "Vegetarian | Italian");
    }

    #[test]
    fn test_category_names() {
        let names: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
        assert_eq!(
            names,
            vec!["Beef", "Chicken", "Dessert", "Pasta", "Seafood", "Starter", "Vegan", "Vegetarian"]
        );
    }

    #[test]
    fn test_query_display() {
        assert_eq!(RecipeQuery::Random.to_string(), "random");
        assert_eq!(RecipeQuery::ByCategory(Category::Pasta).to_string(), "category Pasta");
        assert_eq!(RecipeQuery::ByName("Pie".to_string()).to_string(), "search \"Pie\"");
    }
}
