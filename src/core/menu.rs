use crate::core::digits::is_non_negative_integer;
use crate::core::range::RangeRule;
use crate::domain::model::{Failure, Field, ValidatorKind};
use crate::domain::ports::Validator;

pub const MAIN_MENU_OPTIONS: RangeRule = RangeRule::new(1, 5);
pub const EDIT_MENU_OPTIONS: RangeRule = RangeRule::new(1, 5);

/// A numbered menu prompt. Main and edit menus share the rules but keep their
/// own option ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuValidator {
    kind: ValidatorKind,
    options: RangeRule,
}

impl MenuValidator {
    pub fn main_menu(options: RangeRule) -> Self {
        Self {
            kind: ValidatorKind::MainMenu,
            options,
        }
    }

    pub fn edit_menu(options: RangeRule) -> Self {
        Self {
            kind: ValidatorKind::EditMenu,
            options,
        }
    }

    pub fn options(&self) -> RangeRule {
        self.options
    }
}

impl Validator for MenuValidator {
    fn kind(&self) -> ValidatorKind {
        self.kind
    }

    fn check(&self, input: &str) -> Result<(), Failure> {
        if !is_non_negative_integer(input) {
            return Err(Failure::empty_or_non_digit(Field::Selection));
        }
        if !self.options.contains_digits(input) {
            return Err(Failure::out_of_range(Field::Selection));
        }
        Ok(())
    }

    fn normalize(&self, input: &str) -> Option<String> {
        self.check(input).ok()?;
        input.parse::<u64>().ok().map(|option| option.to_string())
    }
}
