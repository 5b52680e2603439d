use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Number of fixed ingredient/measure slots in a TheMealDB record
pub const SLOT_COUNT: usize = 20;

/// Body of a `search.php` response
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    /// `null` or a missing field both mean no matches
    #[serde(default)]
    pub meals: Option<Vec<Meal>>,
}

/// One ingredient/measure slot exactly as the API returned it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slot {
    pub ingredient: Option<String>,
    pub measure: Option<String>,
}

/// A recipe record returned by the lookup API
///
/// Text fields the API leaves out or sends as `null` decode as empty strings
/// (or `None` for the optional ones) rather than failing the whole response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub category: String,
    pub area: String,
    pub instructions: String,
    /// Comma separated, e.g. `"Pasta,Curry"`
    pub tags: Option<String>,
    pub video_url: Option<String>,
    pub slots: Vec<Slot>,
}

/// A non-empty ingredient line derived from a [`Meal`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub ingredient: String,
    pub measure: String,
}

fn take_text(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

impl From<Map<String, Value>> for Meal {
    fn from(mut fields: Map<String, Value>) -> Self {
        let slots = (1..=SLOT_COUNT)
            .map(|index| Slot {
                ingredient: take_text(&mut fields, &format!("strIngredient{index}")),
                measure: take_text(&mut fields, &format!("strMeasure{index}")),
            })
            .collect();

        Meal {
            id: take_text(&mut fields, "idMeal").unwrap_or_default(),
            name: take_text(&mut fields, "strMeal").unwrap_or_default(),
            thumbnail: take_text(&mut fields, "strMealThumb").unwrap_or_default(),
            category: take_text(&mut fields, "strCategory").unwrap_or_default(),
            area: take_text(&mut fields, "strArea").unwrap_or_default(),
            instructions: take_text(&mut fields, "strInstructions").unwrap_or_default(),
            tags: take_text(&mut fields, "strTags"),
            video_url: take_text(&mut fields, "strYoutube"),
            slots,
        }
    }
}

impl Meal {
    /// Non-blank ingredients in slot order, both halves trimmed.
    ///
    /// A missing measure becomes an empty string.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        self.slots
            .iter()
            .take(SLOT_COUNT)
            .filter_map(|slot| {
                let ingredient = slot.ingredient.as_deref()?.trim();
                if ingredient.is_empty() {
                    return None;
                }
                Some(Ingredient {
                    ingredient: ingredient.to_string(),
                    measure: slot
                        .measure
                        .as_deref()
                        .map(str::trim)
                        .unwrap_or_default()
                        .to_string(),
                })
            })
            .collect()
    }

    /// Tags split on commas. Empty when the record has none.
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// One entry per non-blank line of the instructions, in order
    pub fn instruction_steps(&self) -> Vec<String> {
        self.instructions
            .replace("\r\n", "\n")
            .replace('\r', "\n")
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()
    }

    /// The video link, if the record carries a non-blank one
    pub fn video(&self) -> Option<&str> {
        self.video_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// First `max_chars` characters of the instructions followed by `...`
    pub fn instructions_preview(&self, max_chars: usize) -> String {
        let mut preview: String = self.instructions.chars().take(max_chars).collect();
        preview.push_str("...");
        preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn meal_from(value: Value) -> Meal {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_decodes_core_fields() {
        let meal = meal_from(json!({
            "idMeal": "52771",
            "strMeal": "Spicy Arrabiata Penne",
            "strCategory": "Vegetarian",
            "strArea": "Italian",
            "strInstructions": "Bring a large pot of water to a boil.",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/ustsqw1468250014.jpg",
            "strTags": "Pasta,Curry",
            "strYoutube": "https://www.youtube.com/watch?v=1IszT_guI08",
            "strIngredient1": "penne rigate",
            "strMeasure1": "1 pound",
            "dateModified": null
        }));

        assert_eq!(meal.id, "52771");
        assert_eq!(meal.name, "Spicy Arrabiata Penne");
        assert_eq!(meal.category, "Vegetarian");
        assert_eq!(meal.area, "Italian");
        assert_eq!(meal.tags.as_deref(), Some("Pasta,Curry"));
        assert_eq!(meal.slots.len(), SLOT_COUNT);
        assert_eq!(meal.slots[0].ingredient.as_deref(), Some("penne rigate"));
    }

    #[test]
    fn test_null_and_missing_fields_are_absent() {
        let meal = meal_from(json!({
            "idMeal": "1",
            "strMeal": "Plain",
            "strTags": null,
            "strYoutube": null
        }));

        assert!(meal.tags.is_none());
        assert!(meal.video().is_none());
        assert!(meal.tag_list().is_empty());
        assert_eq!(meal.instructions, "");
        assert!(meal.ingredients().is_empty());
    }

    #[test]
    fn test_numeric_id_is_accepted() {
        let meal = meal_from(json!({ "idMeal": 52771, "strMeal": "Numbered" }));
        assert_eq!(meal.id, "52771");
    }

    #[test]
    fn test_ingredient_with_missing_measure() {
        let meal = meal_from(json!({
            "strIngredient1": "",
            "strMeasure1": "",
            "strIngredient2": "   ",
            "strMeasure2": "1 tsp",
            "strIngredient3": "Salt",
            "strIngredient4": null,
            "strMeasure4": null
        }));

        assert_eq!(
            meal.ingredients(),
            vec![Ingredient {
                ingredient: "Salt".to_string(),
                measure: String::new(),
            }]
        );
    }

    #[test]
    fn test_ingredients_keep_slot_order_and_trim() {
        let meal = meal_from(json!({
            "strIngredient1": " olive oil ",
            "strMeasure1": " 1/4 cup ",
            "strIngredient5": "garlic",
            "strMeasure5": "3 cloves",
            "strIngredient20": "basil",
            "strMeasure20": "6 leaves"
        }));

        let names: Vec<_> = meal
            .ingredients()
            .into_iter()
            .map(|item| (item.ingredient, item.measure))
            .collect();
        assert_eq!(
            names,
            vec![
                ("olive oil".to_string(), "1/4 cup".to_string()),
                ("garlic".to_string(), "3 cloves".to_string()),
                ("basil".to_string(), "6 leaves".to_string()),
            ]
        );
    }

    #[test]
    fn test_ingredients_never_blank() {
        let slots = vec![
            Slot {
                ingredient: Some("\t".to_string()),
                measure: Some("2".to_string()),
            },
            Slot {
                ingredient: None,
                measure: Some("3".to_string()),
            },
            Slot {
                ingredient: Some("Egg".to_string()),
                measure: None,
            },
        ];
        let meal = Meal {
            slots,
            ..Default::default()
        };

        let ingredients = meal.ingredients();
        assert_eq!(ingredients.len(), 1);
        assert!(ingredients
            .iter()
            .all(|item| !item.ingredient.trim().is_empty()));
    }

    #[test]
    fn test_instruction_steps_drop_blank_lines() {
        let meal = Meal {
            instructions: "Step1\r\n\r\nStep2".to_string(),
            ..Default::default()
        };
        assert_eq!(meal.instruction_steps(), vec!["Step1", "Step2"]);
    }

    #[test]
    fn test_instruction_steps_lone_carriage_return() {
        let meal = Meal {
            instructions: "Boil\rDrain\n  \nServe".to_string(),
            ..Default::default()
        };
        assert_eq!(meal.instruction_steps(), vec!["Boil", "Drain", "Serve"]);
    }

    #[test]
    fn test_tag_list_trims_and_skips_empty() {
        let meal = Meal {
            tags: Some("Pasta, Curry,,".to_string()),
            ..Default::default()
        };
        assert_eq!(meal.tag_list(), vec!["Pasta", "Curry"]);
    }

    #[test]
    fn test_blank_video_is_absent() {
        let meal = Meal {
            video_url: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(meal.video().is_none());
    }

    #[test]
    fn test_instructions_preview_counts_characters() {
        let meal = Meal {
            instructions: "é".repeat(200),
            ..Default::default()
        };
        let preview = meal.instructions_preview(120);
        assert_eq!(preview.chars().count(), 123);
        assert!(preview.ends_with("..."));

        let short = Meal {
            instructions: "Mix.".to_string(),
            ..Default::default()
        };
        assert_eq!(short.instructions_preview(120), "Mix....");
    }

    #[test]
    fn test_search_response_null_meals() {
        let response: SearchResponse = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(response.meals.is_none());

        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.meals.is_none());
    }
}
