use crate::domain::model::{Course, CourseAverages, DishEntry};
use crate::utils::error::Result;

pub trait ConfigProvider {
    fn menu_name(&self) -> &str;
    fn default_course(&self) -> Course;
    fn currency_symbol(&self) -> &str;
    fn price_decimals(&self) -> usize;
}

pub trait MenuExporter {
    fn export(&self, dishes: &[DishEntry], averages: &CourseAverages) -> Result<String>;
}
