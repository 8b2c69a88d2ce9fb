use crate::config::toml_config::TomlConfig;
use crate::config::MenuSettings;
use crate::domain::model::Course;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "chef-menu")]
#[command(about = "Record, browse and filter menu dishes for a kitchen session")]
pub struct CliConfig {
    /// Path to a TOML file with menu settings and seed dishes
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Currency symbol shown before prices
    #[arg(long)]
    pub currency: Option<String>,

    /// Number of decimals shown for prices
    #[arg(long)]
    pub decimals: Option<usize>,

    /// Course preselected on the add form
    #[arg(long, value_parser = parse_course)]
    pub default_course: Option<Course>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines on stderr")]
    pub json_logs: bool,
}

fn parse_course(label: &str) -> std::result::Result<Course, String> {
    label.parse().map_err(|e: crate::utils::error::MenuError| e.to_string())
}

impl CliConfig {
    pub fn load_toml(&self) -> Result<Option<TomlConfig>> {
        self.config.as_ref().map(TomlConfig::from_file).transpose()
    }

    /// 依序套用：預設值 → TOML → 命令列參數
    pub fn resolve(&self, toml: Option<&TomlConfig>) -> Result<MenuSettings> {
        let mut settings = match toml {
            Some(toml) => {
                toml.validate()?;
                MenuSettings::from_provider(toml)
            }
            None => MenuSettings::default(),
        };

        if let Some(currency) = &self.currency {
            settings.currency_symbol = currency.clone();
        }
        if let Some(decimals) = self.decimals {
            settings.price_decimals = decimals;
        }
        if let Some(course) = self.default_course {
            settings.default_course = course;
        }

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_toml() {
        let cli = CliConfig::parse_from(["chef-menu", "--currency", "R", "--default-course", "desserts"]);
        let toml = TomlConfig::from_toml_str(
            "[display]\ncurrency_symbol = \"EUR\"\nprice_decimals = 1\n",
        )
        .unwrap();

        let settings = cli.resolve(Some(&toml)).unwrap();
        assert_eq!(settings.currency_symbol, "R");
        assert_eq!(settings.price_decimals, 1);
        assert_eq!(settings.default_course, Course::Desserts);
    }

    #[test]
    fn test_invalid_flag_values_fail_validation() {
        let cli = CliConfig::parse_from(["chef-menu", "--decimals", "7"]);
        assert!(cli.resolve(None).is_err());

        assert!(CliConfig::try_parse_from(["chef-menu", "--default-course", "soup"]).is_err());
    }
}
