use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer and fractional halves of an amount, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmountComponents {
    pub integer_part: String,
    pub fraction_part: String,
}

/// Month, day and year fields of a slash-separated date, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateComponents {
    pub month: String,
    pub day: String,
    pub year: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ValidatorKind {
    Amount,
    Date,
    MainMenu,
    EditMenu,
}

impl ValidatorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidatorKind::Amount => "amount",
            ValidatorKind::Date => "date",
            ValidatorKind::MainMenu => "main-menu",
            ValidatorKind::EditMenu => "edit-menu",
        }
    }

    /// Every diagnostic this validator can print, including the pass message.
    pub fn messages(&self) -> &'static [&'static str] {
        match self {
            ValidatorKind::Amount => &[
                "Integer part not a positive integer or zero",
                "Fraction part not a positive integer or zero",
                "Integer part not within range",
                "Fraction part not within range",
                PASS_MESSAGE,
            ],
            ValidatorKind::Date => &[
                "The month was not a positive integer or zero",
                "The day was not a positive integer or zero",
                "The year was not a positive integer or zero",
                "The month was out of range",
                "The year was out of range",
                "The number of days is not valid for the given month",
                PASS_MESSAGE,
            ],
            ValidatorKind::MainMenu | ValidatorKind::EditMenu => &[
                "Not a positive integer or zero",
                "Not within range",
                PASS_MESSAGE,
            ],
        }
    }

    /// Column the text report right-aligns its messages to.
    pub fn message_width(&self) -> usize {
        self.messages().iter().map(|m| m.len()).max().unwrap_or(0)
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const PASS_MESSAGE: &str = "Test passes";
pub const NO_DATA_MESSAGE: &str = "No data to process.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    IntegerPart,
    FractionPart,
    Month,
    Day,
    Year,
    Selection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    EmptyOrNonDigit,
    OutOfRange,
    InvalidDayForMonth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub field: Field,
}

impl Failure {
    pub fn empty_or_non_digit(field: Field) -> Self {
        Self {
            kind: FailureKind::EmptyOrNonDigit,
            field,
        }
    }

    pub fn out_of_range(field: Field) -> Self {
        Self {
            kind: FailureKind::OutOfRange,
            field,
        }
    }

    pub fn invalid_day_for_month() -> Self {
        Self {
            kind: FailureKind::InvalidDayForMonth,
            field: Field::Day,
        }
    }

    pub fn message(&self) -> &'static str {
        use FailureKind::*;
        use Field::*;

        match (self.field, self.kind) {
            (IntegerPart, EmptyOrNonDigit) => "Integer part not a positive integer or zero",
            (FractionPart, EmptyOrNonDigit) => "Fraction part not a positive integer or zero",
            (IntegerPart, _) => "Integer part not within range",
            (FractionPart, _) => "Fraction part not within range",
            (Month, EmptyOrNonDigit) => "The month was not a positive integer or zero",
            (Day, EmptyOrNonDigit) => "The day was not a positive integer or zero",
            (Year, EmptyOrNonDigit) => "The year was not a positive integer or zero",
            (Month, _) => "The month was out of range",
            (Year, _) => "The year was out of range",
            (Day, _) => "The number of days is not valid for the given month",
            (Selection, EmptyOrNonDigit) => "Not a positive integer or zero",
            (Selection, _) => "Not within range",
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of validating one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail(Failure),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    pub fn failure(&self) -> Option<Failure> {
        match self {
            Verdict::Pass => None,
            Verdict::Fail(failure) => Some(*failure),
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Pass => PASS_MESSAGE,
            Verdict::Fail(failure) => failure.message(),
        }
    }
}

impl From<Result<(), Failure>> for Verdict {
    fn from(result: Result<(), Failure>) -> Self {
        match result {
            Ok(()) => Verdict::Pass,
            Err(failure) => Verdict::Fail(failure),
        }
    }
}

/// One line's verdict in the form the report sinks write out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub line: usize,
    pub kind: ValidatorKind,
    pub input: String,
    pub passed: bool,
    pub failure: Option<FailureKind>,
    pub field: Option<Field>,
    pub message: String,
    pub normalized: Option<String>,
}

impl ReportEntry {
    pub fn new(
        line: usize,
        kind: ValidatorKind,
        input: &str,
        verdict: Verdict,
        normalized: Option<String>,
    ) -> Self {
        let failure = verdict.failure();
        Self {
            line,
            kind,
            input: input.to_string(),
            passed: verdict.is_pass(),
            failure: failure.map(|f| f.kind),
            field: failure.map(|f| f.field),
            message: verdict.message().to_string(),
            normalized,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub lines: usize,
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, verdict: &Verdict) {
        self.lines += 1;
        if verdict.is_pass() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }
}
