use crate::core::digits::is_non_negative_integer;
use crate::core::range::RangeRule;
use crate::domain::model::{AmountComponents, Failure, Field, ValidatorKind};
use crate::domain::ports::Validator;

/// At most 999,999,999 before the decimal point.
pub const INTEGER_PART_DIGITS: RangeRule = RangeRule::new(0, 9);

/// Five fractional digits. The budget's amount screen talks about nine, but
/// five is what has always been enforced.
pub const FRACTION_PART_DIGITS: RangeRule = RangeRule::new(0, 5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AmountState {
    Integer { symbol_allowed: bool },
    Fraction,
}

/// Splits an amount such as `$123.45` into its integer and fractional parts.
///
/// Only a single leading `$` is dropped. Everything after the first `.` goes
/// to the fraction verbatim, so a second `.` surfaces as a non-digit there.
/// When exactly one side came out empty it is filled with `"0"`; when both are
/// empty (blank line, lone `.`) they stay empty so the digit check rejects it.
pub fn parse_amount(input: &str) -> AmountComponents {
    let mut parts = AmountComponents::default();
    let mut state = AmountState::Integer {
        symbol_allowed: true,
    };

    for c in input.chars() {
        state = match (state, c) {
            (
                AmountState::Integer {
                    symbol_allowed: true,
                },
                '$',
            ) => AmountState::Integer {
                symbol_allowed: false,
            },
            (AmountState::Integer { .. }, '.') => AmountState::Fraction,
            (AmountState::Integer { .. }, c) => {
                parts.integer_part.push(c);
                AmountState::Integer {
                    symbol_allowed: false,
                }
            }
            (AmountState::Fraction, c) => {
                parts.fraction_part.push(c);
                AmountState::Fraction
            }
        };
    }

    match (parts.integer_part.is_empty(), parts.fraction_part.is_empty()) {
        (true, true) | (false, false) => {}
        (true, false) => parts.integer_part.push('0'),
        (false, true) => parts.fraction_part.push('0'),
    }

    parts
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountValidator {
    pub integer_digits: RangeRule,
    pub fraction_digits: RangeRule,
}

impl Default for AmountValidator {
    fn default() -> Self {
        Self {
            integer_digits: INTEGER_PART_DIGITS,
            fraction_digits: FRACTION_PART_DIGITS,
        }
    }
}

impl AmountValidator {
    pub fn new(integer_digits: RangeRule, fraction_digits: RangeRule) -> Self {
        Self {
            integer_digits,
            fraction_digits,
        }
    }

    pub fn check_components(&self, parts: &AmountComponents) -> Result<(), Failure> {
        if !is_non_negative_integer(&parts.integer_part) {
            return Err(Failure::empty_or_non_digit(Field::IntegerPart));
        }
        if !is_non_negative_integer(&parts.fraction_part) {
            return Err(Failure::empty_or_non_digit(Field::FractionPart));
        }
        if !self.integer_digits.contains_len(&parts.integer_part) {
            return Err(Failure::out_of_range(Field::IntegerPart));
        }
        if !self.fraction_digits.contains_len(&parts.fraction_part) {
            return Err(Failure::out_of_range(Field::FractionPart));
        }
        Ok(())
    }
}

impl Validator for AmountValidator {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Amount
    }

    fn check(&self, input: &str) -> Result<(), Failure> {
        let parts = parse_amount(input);
        tracing::trace!(
            "amount parsed: integer={:?} fraction={:?}",
            parts.integer_part,
            parts.fraction_part
        );
        self.check_components(&parts)
    }

    fn normalize(&self, input: &str) -> Option<String> {
        let parts = parse_amount(input);
        self.check_components(&parts).ok()?;
        Some(format!("{}.{}", parts.integer_part, parts.fraction_part))
    }
}
