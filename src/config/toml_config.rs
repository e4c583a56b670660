use crate::adapters::report::OutputFormat;
use crate::core::amount::{AmountValidator, FRACTION_PART_DIGITS, INTEGER_PART_DIGITS};
use crate::core::date::{DateValidator, MONTHS, YEARS};
use crate::core::menu::{MenuValidator, EDIT_MENU_OPTIONS, MAIN_MENU_OPTIONS};
use crate::core::range::RangeRule;
use crate::core::{Validator, ValidatorKind};
use crate::utils::error::{Result, ValidateError};
use crate::utils::validation::{validate_range_rule, validate_range_within, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 驗證器的邊界設定，所有區段皆可省略
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    pub amount: Option<AmountConfig>,
    pub date: Option<DateConfig>,
    pub main_menu: Option<MenuConfig>,
    pub edit_menu: Option<MenuConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AmountConfig {
    pub integer_digits: Option<RangeRule>,
    pub fraction_digits: Option<RangeRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateConfig {
    pub month: Option<RangeRule>,
    pub year: Option<RangeRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuConfig {
    pub options: Option<RangeRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl ValidatorConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ValidateError::ConfigError {
            message: format!("Cannot read '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ValidateError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MAIN_MENU_MAX})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn integer_digits(&self) -> RangeRule {
        self.amount
            .as_ref()
            .and_then(|a| a.integer_digits)
            .unwrap_or(INTEGER_PART_DIGITS)
    }

    pub fn fraction_digits(&self) -> RangeRule {
        self.amount
            .as_ref()
            .and_then(|a| a.fraction_digits)
            .unwrap_or(FRACTION_PART_DIGITS)
    }

    pub fn months(&self) -> RangeRule {
        self.date.as_ref().and_then(|d| d.month).unwrap_or(MONTHS)
    }

    pub fn years(&self) -> RangeRule {
        self.date.as_ref().and_then(|d| d.year).unwrap_or(YEARS)
    }

    pub fn main_menu_options(&self) -> RangeRule {
        self.main_menu
            .as_ref()
            .and_then(|m| m.options)
            .unwrap_or(MAIN_MENU_OPTIONS)
    }

    pub fn edit_menu_options(&self) -> RangeRule {
        self.edit_menu
            .as_ref()
            .and_then(|m| m.options)
            .unwrap_or(EDIT_MENU_OPTIONS)
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }

    /// 依種類建立對應的驗證器
    pub fn validator_for(&self, kind: ValidatorKind) -> Box<dyn Validator> {
        match kind {
            ValidatorKind::Amount => Box::new(AmountValidator::new(
                self.integer_digits(),
                self.fraction_digits(),
            )),
            ValidatorKind::Date => Box::new(DateValidator::new(self.months(), self.years())),
            ValidatorKind::MainMenu => Box::new(MenuValidator::main_menu(self.main_menu_options())),
            ValidatorKind::EditMenu => Box::new(MenuValidator::edit_menu(self.edit_menu_options())),
        }
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_range_rule("amount.integer_digits", self.integer_digits())?;
        validate_range_rule("amount.fraction_digits", self.fraction_digits())?;

        // 每月天數表只涵蓋 1..=12 月
        validate_range_within("date.month", self.months(), MONTHS)?;
        validate_range_within("date.year", self.years(), YEARS)?;

        validate_range_rule("main_menu.options", self.main_menu_options())?;
        validate_range_rule("edit_menu.options", self.edit_menu_options())?;

        Ok(())
    }
}

impl Validate for ValidatorConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
