use crate::config::MenuSettings;
use crate::domain::model::Course;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{MenuError, Result};
use crate::utils::validation::{parse_price, validate_non_empty_string, validate_range, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub menu: MenuSection,
    #[serde(default)]
    pub display: DisplaySection,
    #[serde(default)]
    pub dishes: Vec<SeedDish>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuSection {
    pub name: Option<String>,
    pub default_course: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplaySection {
    pub currency_symbol: Option<String>,
    pub price_decimals: Option<usize>,
}

/// 啟動時預先載入的菜色，價格以文字保存並走同一套解析規則
#[derive(Debug, Clone, Deserialize)]
pub struct SeedDish {
    pub dish_name: String,
    #[serde(default)]
    pub description: String,
    pub course: Option<String>,
    pub price: String,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MenuError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MenuError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CHEF_CURRENCY})，未設定的變數保留原文
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MenuError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn parsed_default_course(&self) -> Result<Option<Course>> {
        self.menu
            .default_course
            .as_deref()
            .map(|label| label.parse::<Course>())
            .transpose()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(symbol) = &self.display.currency_symbol {
            validate_non_empty_string("display.currency_symbol", symbol)?;
        }
        if let Some(decimals) = self.display.price_decimals {
            validate_range("display.price_decimals", decimals, 0, 4)?;
        }

        self.parsed_default_course()
            .map_err(|e| MenuError::InvalidConfigValueError {
                field: "menu.default_course".to_string(),
                value: self.menu.default_course.clone().unwrap_or_default(),
                reason: e.to_string(),
            })?;

        for (i, dish) in self.dishes.iter().enumerate() {
            let field = format!("dishes[{}]", i);
            parse_price(&dish.price).map_err(|_| MenuError::InvalidConfigValueError {
                field: format!("{}.price", field),
                value: dish.price.clone(),
                reason: "Price must be a non-negative number".to_string(),
            })?;
            if let Some(course) = &dish.course {
                course
                    .parse::<Course>()
                    .map_err(|e| MenuError::InvalidConfigValueError {
                        field: format!("{}.course", field),
                        value: course.clone(),
                        reason: e.to_string(),
                    })?;
            }
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

impl ConfigProvider for TomlConfig {
    fn menu_name(&self) -> &str {
        self.menu.name.as_deref().unwrap_or(MenuSettings::DEFAULT_MENU_NAME)
    }

    fn default_course(&self) -> Course {
        self.parsed_default_course()
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    fn currency_symbol(&self) -> &str {
        self.display
            .currency_symbol
            .as_deref()
            .unwrap_or(MenuSettings::DEFAULT_CURRENCY)
    }

    fn price_decimals(&self) -> usize {
        self.display
            .price_decimals
            .unwrap_or(MenuSettings::DEFAULT_DECIMALS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[menu]
name = "Bistro"
default_course = "Mains"

[display]
currency_symbol = "R"
price_decimals = 1

[[dishes]]
dish_name = "Soup"
description = "veg"
course = "Starters"
price = "5.00"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.menu_name(), "Bistro");
        assert_eq!(config.default_course(), Course::Mains);
        assert_eq!(config.currency_symbol(), "R");
        assert_eq!(config.price_decimals(), 1);
        assert_eq!(config.dishes.len(), 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.menu_name(), MenuSettings::DEFAULT_MENU_NAME);
        assert_eq!(config.currency_symbol(), "$");
        assert_eq!(config.price_decimals(), 2);
        assert!(config.dishes.is_empty());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CHEF_MENU_TEST_CURRENCY", "EUR ");

        let toml_content = r#"
[display]
currency_symbol = "${CHEF_MENU_TEST_CURRENCY}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.currency_symbol(), "EUR ");

        std::env::remove_var("CHEF_MENU_TEST_CURRENCY");
    }

    #[test]
    fn test_config_validation() {
        let bad_price = r#"
[[dishes]]
dish_name = "Cake"
price = "abc"
"#;
        let config = TomlConfig::from_toml_str(bad_price).unwrap();
        assert!(matches!(
            config.validate(),
            Err(MenuError::InvalidConfigValueError { ref field, .. }) if field == "dishes[0].price"
        ));

        let bad_course = r#"
[menu]
default_course = "Drinks"
"#;
        let config = TomlConfig::from_toml_str(bad_course).unwrap();
        assert!(config.validate().is_err());

        let bad_decimals = r#"
[display]
price_decimals = 9
"#;
        let config = TomlConfig::from_toml_str(bad_decimals).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[menu]\nname = \"File Menu\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.menu_name(), "File Menu");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[menu\nname=").unwrap_err();
        assert!(matches!(err, MenuError::ConfigValidationError { .. }));
    }
}
