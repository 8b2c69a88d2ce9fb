use crate::domain::model::{Course, CourseAverages, CourseFilter, DishEntry};
use crate::utils::error::{MenuError, Result};
use crate::utils::validation::parse_price;
use std::collections::BTreeMap;

/// Ordered in-memory list of dishes for one session.
///
/// Position is the only identity a dish has; it shifts when an earlier dish
/// is removed. Every mutating call either succeeds fully or leaves the list
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct MenuCollection {
    dishes: Vec<DishEntry>,
}

impl MenuCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `price_text` and appends a new dish. A missing course means
    /// `Course::Starters`.
    pub fn add_dish(
        &mut self,
        dish_name: &str,
        description: &str,
        course: Option<Course>,
        price_text: &str,
    ) -> Result<DishEntry> {
        let price = parse_price(price_text)?;
        let entry = DishEntry {
            dish_name: dish_name.to_string(),
            description: description.to_string(),
            course: course.unwrap_or_default(),
            price,
        };
        self.dishes.push(entry.clone());
        Ok(entry)
    }

    pub fn remove_dish(&mut self, index: usize) -> Result<DishEntry> {
        if index >= self.dishes.len() {
            return Err(MenuError::IndexOutOfRange {
                index,
                len: self.dishes.len(),
            });
        }
        Ok(self.dishes.remove(index))
    }

    pub fn filter_by_course(&self, filter: CourseFilter) -> Vec<DishEntry> {
        self.dishes
            .iter()
            .filter(|dish| filter.matches(dish))
            .cloned()
            .collect()
    }

    /// Text form of `filter_by_course`. Labels compare exactly; anything
    /// other than `"All"` or a course label matches nothing.
    pub fn filter_by_label(&self, label: &str) -> Vec<DishEntry> {
        match CourseFilter::from_label(label) {
            Some(filter) => self.filter_by_course(filter),
            None => Vec::new(),
        }
    }

    pub fn average_price_by_course(&self) -> CourseAverages {
        let mut totals: BTreeMap<Course, (f64, usize)> = BTreeMap::new();
        for dish in &self.dishes {
            let (sum, count) = totals.entry(dish.course).or_insert((0.0, 0));
            *sum += dish.price;
            *count += 1;
        }

        totals
            .into_iter()
            .map(|(course, (sum, count))| (course, sum / count as f64))
            .collect()
    }

    pub fn dishes(&self) -> &[DishEntry] {
        &self.dishes
    }

    pub fn get(&self, index: usize) -> Option<&DishEntry> {
        self.dishes.get(index)
    }

    pub fn total_items(&self) -> usize {
        self.dishes.len()
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}
