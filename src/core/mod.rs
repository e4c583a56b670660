pub mod amount;
pub mod date;
pub mod digits;
pub mod harness;
pub mod menu;
pub mod range;

pub use crate::domain::model::{
    AmountComponents, DateComponents, Failure, FailureKind, Field, ReportEntry, RunSummary,
    ValidatorKind, Verdict,
};
pub use crate::domain::ports::{ReportSink, Validator};
pub use crate::utils::error::Result;
