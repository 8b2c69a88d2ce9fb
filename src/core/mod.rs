pub mod export;
pub mod form;
pub mod menu;
pub mod session;

pub use crate::domain::model::{Course, CourseAverages, CourseFilter, DishEntry};
pub use crate::domain::ports::{ConfigProvider, MenuExporter};
pub use crate::utils::error::Result;
