pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::shell::Shell;
pub use config::MenuSettings;
pub use crate::core::{menu::MenuCollection, session::Session};
pub use domain::model::{Course, CourseFilter, DishEntry};
pub use utils::error::{MenuError, Result};
