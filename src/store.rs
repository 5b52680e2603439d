use crate::model::Meal;
use std::collections::HashMap;

/// Records from the latest successful search, addressable by id.
///
/// Cards only carry the id; opening a detail overlay resolves it here.
#[derive(Debug, Default)]
pub struct RecordStore {
    meals: Vec<Meal>,
    by_id: HashMap<String, usize>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held records. The first record wins on duplicate ids.
    pub fn replace(&mut self, meals: Vec<Meal>) {
        self.by_id.clear();
        for (index, meal) in meals.iter().enumerate() {
            self.by_id.entry(meal.id.clone()).or_insert(index);
        }
        self.meals = meals;
    }

    pub fn clear(&mut self) {
        self.meals.clear();
        self.by_id.clear();
    }

    pub fn get(&self, id: &str) -> Option<&Meal> {
        self.by_id.get(id).map(|&index| &self.meals[index])
    }

    /// Records in response order
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
