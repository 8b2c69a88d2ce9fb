#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::Course;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// Resolved settings a session runs with: defaults, then TOML, then flags.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuSettings {
    pub menu_name: String,
    pub default_course: Course,
    pub currency_symbol: String,
    pub price_decimals: usize,
}

impl MenuSettings {
    pub const DEFAULT_MENU_NAME: &'static str = "Chef's Menu";
    pub const DEFAULT_CURRENCY: &'static str = "$";
    pub const DEFAULT_DECIMALS: usize = 2;
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            menu_name: Self::DEFAULT_MENU_NAME.to_string(),
            default_course: Course::default(),
            currency_symbol: Self::DEFAULT_CURRENCY.to_string(),
            price_decimals: Self::DEFAULT_DECIMALS,
        }
    }
}

impl MenuSettings {
    /// 從任一設定來源取出完整設定，來源未提供的欄位由來源自行補上預設值
    pub fn from_provider<C: ConfigProvider>(provider: &C) -> Self {
        Self {
            menu_name: provider.menu_name().to_string(),
            default_course: provider.default_course(),
            currency_symbol: provider.currency_symbol().to_string(),
            price_decimals: provider.price_decimals(),
        }
    }
}

impl Validate for MenuSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("currency_symbol", &self.currency_symbol)?;
        validate_range("price_decimals", self.price_decimals, 0, 4)?;
        Ok(())
    }
}

impl ConfigProvider for MenuSettings {
    fn menu_name(&self) -> &str {
        &self.menu_name
    }

    fn default_course(&self) -> Course {
        self.default_course
    }

    fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    fn price_decimals(&self) -> usize {
        self.price_decimals
    }
}
