pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, CommonArgs};

pub use adapters::report::OutputFormat;
pub use config::toml_config::ValidatorConfig;
pub use crate::core::{
    amount::{parse_amount, AmountValidator},
    date::{parse_date, DateValidator},
    digits::is_non_negative_integer,
    harness::ValidationHarness,
    menu::MenuValidator,
    range::RangeRule,
};
pub use domain::model::{Failure, FailureKind, Field, ValidatorKind, Verdict};
pub use domain::ports::{ReportSink, Validator};
pub use utils::error::{Result, ValidateError};
