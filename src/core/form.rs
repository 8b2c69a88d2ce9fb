use crate::core::menu::MenuCollection;
use crate::domain::model::{Course, DishEntry};
use crate::utils::error::Result;

/// Unsaved field values of the add-dish form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DishDraft {
    pub dish_name: String,
    pub description: String,
    pub course: Course,
    pub price_text: String,
}

impl DishDraft {
    pub fn new(course: Course) -> Self {
        Self {
            course,
            ..Self::default()
        }
    }

    /// 送出表單：成功時清空名稱、描述與價格並保留所選的 course；
    /// 失敗時欄位保持不變，讓使用者修正後重送
    pub fn submit(&mut self, menu: &mut MenuCollection) -> Result<DishEntry> {
        let entry = menu.add_dish(
            &self.dish_name,
            &self.description,
            Some(self.course),
            &self.price_text,
        )?;

        self.dish_name.clear();
        self.description.clear();
        self.price_text.clear();
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_clears_fields_but_keeps_course() {
        let mut menu = MenuCollection::new();
        let mut draft = DishDraft::new(Course::Mains);
        draft.dish_name = "Steak".to_string();
        draft.description = "beef".to_string();
        draft.price_text = "20".to_string();

        let entry = draft.submit(&mut menu).unwrap();

        assert_eq!(entry.course, Course::Mains);
        assert_eq!(menu.len(), 1);
        assert_eq!(draft, DishDraft::new(Course::Mains));
    }

    #[test]
    fn test_failed_submit_keeps_unsaved_values() {
        let mut menu = MenuCollection::new();
        let mut draft = DishDraft::new(Course::Desserts);
        draft.dish_name = "Cake".to_string();
        draft.description = "sweet".to_string();
        draft.price_text = "abc".to_string();
        let before = draft.clone();

        assert!(draft.submit(&mut menu).is_err());
        assert_eq!(draft, before);
        assert!(menu.is_empty());
    }
}
