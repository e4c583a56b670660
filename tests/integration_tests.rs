use anyhow::Result;
use budget_validate::adapters::report::{JsonLinesReport, TextReport};
use budget_validate::app;
use budget_validate::{
    AmountValidator, DateValidator, FailureKind, Field, MenuValidator, OutputFormat, RangeRule,
    ValidateError, ValidationHarness, ValidatorConfig, ValidatorKind,
};

fn text_report(kind: ValidatorKind, input: &str) -> Result<String> {
    let mut out = Vec::new();
    app::run(
        kind,
        &ValidatorConfig::default(),
        Some(OutputFormat::Text),
        input.as_bytes(),
        &mut out,
    )?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_amount_infile_end_to_end() -> Result<()> {
    let input = "$123.45\n.5\n5.\n.\n\n$$5\n-1.00\n1.2.3\n1234567890.1\n1.123456\n$0.00000\n";
    let output = text_report(ValidatorKind::Amount, input)?;

    let expected = concat!(
        "                                 Test passes --> $123.45\n",
        "                                 Test passes --> .5\n",
        "                                 Test passes --> 5.\n",
        " Integer part not a positive integer or zero --> .\n",
        " Integer part not a positive integer or zero --> \n",
        " Integer part not a positive integer or zero --> $$5\n",
        " Integer part not a positive integer or zero --> -1.00\n",
        "Fraction part not a positive integer or zero --> 1.2.3\n",
        "               Integer part not within range --> 1234567890.1\n",
        "              Fraction part not within range --> 1.123456\n",
        "                                 Test passes --> $0.00000\n",
    );
    assert_eq!(output, expected);
    Ok(())
}

#[test]
fn test_date_infile_end_to_end() -> Result<()> {
    let input = "2/29/2020\n2/29/2021\n4/31/2021\n13/1/2021\n3/4/22/2\n1/1/0\n/1/2021\n1//2021\n";
    let output = text_report(ValidatorKind::Date, input)?;

    let expected = concat!(
        "                                        Test passes --> 2/29/2020\n",
        "The number of days is not valid for the given month --> 2/29/2021\n",
        "The number of days is not valid for the given month --> 4/31/2021\n",
        "                         The month was out of range --> 13/1/2021\n",
        "        The year was not a positive integer or zero --> 3/4/22/2\n",
        "                          The year was out of range --> 1/1/0\n",
        "       The month was not a positive integer or zero --> /1/2021\n",
        "         The day was not a positive integer or zero --> 1//2021\n",
    );
    assert_eq!(output, expected);
    Ok(())
}

#[test]
fn test_menu_infiles_end_to_end() -> Result<()> {
    let input = "0\n1\n2\n3\n4\n5\n6\n-1\n\nabc\n";

    let expected = concat!(
        "              Not within range --> 0\n",
        "                   Test passes --> 1\n",
        "                   Test passes --> 2\n",
        "                   Test passes --> 3\n",
        "                   Test passes --> 4\n",
        "                   Test passes --> 5\n",
        "              Not within range --> 6\n",
        "Not a positive integer or zero --> -1\n",
        "Not a positive integer or zero --> \n",
        "Not a positive integer or zero --> abc\n",
    );

    assert_eq!(text_report(ValidatorKind::MainMenu, input)?, expected);
    assert_eq!(text_report(ValidatorKind::EditMenu, input)?, expected);
    Ok(())
}

#[test]
fn test_empty_input_prints_no_data_and_fails() {
    let mut out = Vec::new();
    let result = app::run(
        ValidatorKind::Amount,
        &ValidatorConfig::default(),
        None,
        "".as_bytes(),
        &mut out,
    );

    let err = result.unwrap_err();
    assert!(matches!(err, ValidateError::NoData));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(String::from_utf8(out).unwrap(), "No data to process.\n");
}

#[test]
fn test_failing_lines_do_not_fail_the_run() -> Result<()> {
    let mut out = Vec::new();
    let summary = app::run(
        ValidatorKind::Date,
        &ValidatorConfig::default(),
        None,
        "not a date\n99/99/99\n".as_bytes(),
        &mut out,
    )?;

    assert_eq!(summary.lines, 2);
    assert_eq!(summary.passed, 0);
    assert_eq!(summary.failed, 2);
    Ok(())
}

#[test]
fn test_harness_with_json_sink_normalizes_passing_lines() -> Result<()> {
    let mut harness = ValidationHarness::new(
        DateValidator::default(),
        JsonLinesReport::new(Vec::new()),
    );
    harness.run("02/29/2024\n2/30/2024\n".as_bytes())?;

    let output = String::from_utf8(harness.into_sink().into_inner())?;
    let rows: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str::<serde_json::Value>(line))
        .collect::<std::result::Result<_, _>>()?;

    assert_eq!(rows[0]["passed"], true);
    assert_eq!(rows[0]["normalized"], "2024-02-29");
    assert_eq!(rows[1]["passed"], false);
    assert_eq!(rows[1]["failure"], "invalid_day_for_month");
    Ok(())
}

#[test]
fn test_harness_with_custom_amount_bounds() -> Result<()> {
    let validator = AmountValidator::new(RangeRule::new(0, 9), RangeRule::new(0, 9));
    let mut harness = ValidationHarness::new(
        validator,
        TextReport::new(ValidatorKind::Amount, Vec::new()),
    );
    let summary = harness.run("1.123456789\n".as_bytes())?;

    assert_eq!(summary.passed, 1);
    Ok(())
}

#[test]
fn test_verdicts_through_public_api() {
    use budget_validate::Validator;

    let main_menu = MenuValidator::main_menu(RangeRule::new(1, 5));
    let failure = main_menu.validate("6").failure().unwrap();
    assert_eq!(failure.kind, FailureKind::OutOfRange);
    assert_eq!(failure.field, Field::Selection);

    let date = DateValidator::default();
    let failure = date.validate("3/4/22/2").failure().unwrap();
    assert_eq!(failure.kind, FailureKind::EmptyOrNonDigit);
    assert_eq!(failure.field, Field::Year);
}
