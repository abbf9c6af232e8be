//! TheMealDB response bodies
//!
//! Every endpoint answers `{"meals": [...]}`, with `"meals": null` when
//! nothing matched. Filter results only carry id, name and thumbnail.

use super::types::Recipe;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MealsResponse {
    #[serde(default)]
    pub meals: Option<Vec<MealRecord>>,
}

impl MealsResponse {
    /// Records in response order; `null` reads as empty
    pub fn into_records(self) -> Vec<MealRecord> {
        self.meals.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MealRecord {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
}

impl MealRecord {
    /// Filter results lack instructions and need a lookup by id
    pub fn is_complete(&self) -> bool {
        self.instructions.is_some()
    }

    pub fn into_recipe(self) -> Recipe {
        Recipe {
            id: self.id,
            name: self.name,
            category: self.category.unwrap_or_default(),
            area: self.area.unwrap_or_default(),
            instructions: self.instructions.unwrap_or_default(),
            image_url: self.thumbnail.filter(|url| !url.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_meals_is_empty() {
        let response: MealsResponse = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(response.into_records().is_empty());
    }

    #[test]
    fn test_full_record() {
        let body = r#"{"meals":[{
            "idMeal":"52771",
            "strMeal":"Spicy Arrabiata Penne",
            "strDrinkAlternate":null,
            "strCategory":"Vegetarian",
            "strArea":"Italian",
            "strInstructions":"Bring a large pot of water to a boil.",
            "strMealThumb":"https://www.themealdb.com/images/media/meals/ustsqw1468250014.jpg",
            "strTags":"Pasta,Curry"
        }]}"#;
        let response: MealsResponse = serde_json::from_str(body).unwrap();
        let record = response.into_records().remove(0);
        assert!(record.is_complete());

        let recipe = record.into_recipe();
        assert_eq!(recipe.id, "52771");
        assert_eq!(recipe.name, "Spicy Arrabiata Penne");
        assert_eq!(recipe.subtitle(), "Vegetarian | Italian");
        assert_eq!(recipe.instructions, "Bring a large pot of water to a boil.");
        assert!(recipe.image_url.is_some());
    }

    #[test]
    fn test_filter_record_is_partial() {
        let body = r#"{"meals":[{"strMeal":"Baked salmon with fennel & tomatoes",
            "strMealThumb":"https://www.themealdb.com/images/media/meals/1548772327.jpg",
            "idMeal":"52959"}]}"#;
        let response: MealsResponse = serde_json::from_str(body).unwrap();
        let record = response.into_records().remove(0);
        assert!(!record.is_complete());
        assert_eq!(record.into_recipe().category, "");
    }

    #[test]
    fn test_blank_thumbnail_is_none() {
        let body = r#"{"meals":[{"idMeal":"1","strMeal":"Toast","strInstructions":"Toast it.","strMealThumb":""}]}"#;
        let response: MealsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.into_records().remove(0).into_recipe().image_url, None);
    }
}
