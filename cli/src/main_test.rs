use time::Month;

use super::*;

fn today() -> Date {
    Date::from_calendar_date(2025, Month::June, 1).unwrap()
}

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["wisetools"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

fn run(args: &[&str]) -> Result<String, CliError> {
    let cli = parse(args);
    let Command::Calc(calc) = cli.command else {
        panic!("expected a calculator command");
    };
    render(calc, cli.currency, today())
}

// =============================================================================
// ARGUMENT PARSING
// =============================================================================

#[test]
fn currency_flag_accepts_lowercase_codes() {
    let cli = parse(&["--currency", "usd", "tax", "--income", "1"]);
    assert_eq!(cli.currency, CurrencyCode::Usd);
}

#[test]
fn unknown_currency_is_rejected_by_the_parser() {
    assert!(Cli::try_parse_from(["wisetools", "--currency", "xyz", "ping"]).is_err());
}

#[test]
fn ai_and_ping_are_not_calculators() {
    assert!(matches!(parse(&["ping"]).command, Command::Ping));
    let cli = parse(&["ai", "--prompt", "hello", "--system", "be brief"]);
    assert!(matches!(cli.command, Command::Ai { ref prompt, system: Some(_) } if prompt == "hello"));
}

#[test]
fn endpoint_joins_without_double_slash() {
    assert_eq!(endpoint("http://localhost:3000/", "/healthz"), "http://localhost:3000/healthz");
    assert_eq!(endpoint("http://localhost:3000", "/api/ai/generate"), "http://localhost:3000/api/ai/generate");
}

// =============================================================================
// CALCULATORS
// =============================================================================

#[test]
fn emi_formats_money_in_the_chosen_currency() {
    let out = run(&["--currency", "USD", "emi", "--principal", "1200", "--rate", "0", "--years", "1"]).unwrap();
    let first = out.lines().next().unwrap();
    assert_eq!(first, format!("Monthly EMI: {}", CurrencyCode::Usd.format_amount(100.0)));
    assert!(out.contains("Total Payment:"));
}

#[test]
fn bmi_reports_value_and_band() {
    assert_eq!(run(&["bmi", "--weight", "70", "--height", "175"]).unwrap(), "BMI: 22.9 (Normal)");
}

#[test]
fn age_uses_the_reference_date() {
    let out = run(&["age", "--birth", "2000-01-15"]).unwrap();
    assert_eq!(out, "25 years, 4 months, 17 days");
    let out = run(&["age", "--birth", "2000-01-15", "--on", "2001-01-15"]).unwrap();
    assert_eq!(out, "1 years, 0 months, 0 days");
}

#[test]
fn future_birth_date_is_an_error() {
    assert!(matches!(run(&["age", "--birth", "2030-01-01"]), Err(CliError::Tool(_))));
}

#[test]
fn convert_handles_units_and_mismatches() {
    let out = run(&["convert", "1000", "m", "km"]).unwrap();
    assert_eq!(out, format!("{} km", format_converted(1.0)));
    assert!(matches!(run(&["convert", "1", "kg", "km"]), Err(CliError::Convert(_))));
    assert!(matches!(run(&["convert", "abc", "m", "km"]), Err(CliError::Tool(_))));
}

#[test]
fn sgpa_weights_by_credit() {
    assert_eq!(run(&["sgpa", "4:9", "2:6"]).unwrap(), "SGPA: 8.00");
    assert!(matches!(run(&["sgpa", "four:9"]), Err(CliError::InvalidSubject(_))));
    assert!(matches!(run(&["sgpa", "0:9"]), Err(CliError::Tool(_))));
}

#[test]
fn password_respects_length_bounds() {
    assert_eq!(run(&["password", "--length", "16"]).unwrap().chars().count(), 16);
    assert!(matches!(run(&["password", "--length", "2"]), Err(CliError::Tool(_))));
}

#[test]
fn negative_income_is_rejected() {
    assert!(matches!(run(&["tax", "--income=-5"]), Err(CliError::Tool(ToolError::Negative { .. }))));
}
