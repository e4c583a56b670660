use crate::domain::model::{Failure, ReportEntry, ValidatorKind, Verdict};
use crate::utils::error::Result;

pub trait Validator {
    fn kind(&self) -> ValidatorKind;

    /// Runs every check in order and stops at the first failure.
    fn check(&self, input: &str) -> std::result::Result<(), Failure>;

    fn validate(&self, input: &str) -> Verdict {
        self.check(input).into()
    }

    /// Canonical form of a passing input, if the validator has one.
    fn normalize(&self, _input: &str) -> Option<String> {
        None
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn kind(&self) -> ValidatorKind {
        (**self).kind()
    }

    fn check(&self, input: &str) -> std::result::Result<(), Failure> {
        (**self).check(input)
    }

    fn normalize(&self, input: &str) -> Option<String> {
        (**self).normalize(input)
    }
}

pub trait ReportSink {
    fn record(&mut self, entry: &ReportEntry) -> Result<()>;

    /// Called instead of `record` when the input stream held no lines.
    fn no_data(&mut self) -> Result<()>;

    fn finish(&mut self) -> Result<()>;
}

impl<S: ReportSink + ?Sized> ReportSink for Box<S> {
    fn record(&mut self, entry: &ReportEntry) -> Result<()> {
        (**self).record(entry)
    }

    fn no_data(&mut self) -> Result<()> {
        (**self).no_data()
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}
