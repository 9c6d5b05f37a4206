//! Command-line front end for the WiseTools calculators and AI endpoint.
//!
//! Calculator commands run locally against `toolkit`; only `ping` and `ai`
//! talk to a running server.

use clap::{Parser, Subcommand};
use time::{Date, OffsetDateTime};
use toolkit::ai::{GenerateRequest, GenerateResponse};
use toolkit::convert::{ConvertError, Unit, convert, format_converted};
use toolkit::currency::{CurrencyCode, convert_currency};
use toolkit::daily::{age_on, bmi, parse_iso_date};
use toolkit::developer::generate_password;
use toolkit::finance::{GstMode, LoanTerms, emi, gst, income_tax, sip};
use toolkit::student::{SubjectGrade, sgpa};
use toolkit::{ToolError, parse_number};

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Tool(#[from] ToolError),
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error("invalid subject `{0}`; expected CREDIT:GRADE, e.g. 4:9")]
    InvalidSubject(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
}

#[derive(Parser, Debug)]
#[command(name = "wisetools", about = "WiseTools Hub calculators and AI helper")]
struct Cli {
    #[arg(long, env = "WISETOOLS_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    /// Currency used to format money results.
    #[arg(long, env = "WISETOOLS_CURRENCY", default_value = "INR", value_parser = parse_currency)]
    currency: CurrencyCode,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server is up.
    Ping,
    /// Ask the AI endpoint of a running server.
    Ai {
        #[arg(long)]
        prompt: String,
        #[arg(long)]
        system: Option<String>,
    },
    #[command(flatten)]
    Calc(Calc),
}

/// Offline calculators.
#[derive(Subcommand, Debug)]
enum Calc {
    /// Monthly loan installment.
    Emi {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: f64,
    },
    /// Maturity of a monthly SIP.
    Sip {
        #[arg(long)]
        monthly: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: f64,
    },
    /// Add GST to an amount, or extract it with --inclusive.
    Gst {
        #[arg(long)]
        amount: f64,
        #[arg(long, default_value_t = 18.0)]
        rate: f64,
        #[arg(long, default_value_t = false)]
        inclusive: bool,
    },
    /// Flat income tax estimate.
    Tax {
        #[arg(long)]
        income: f64,
    },
    /// Body mass index.
    Bmi {
        #[arg(long)]
        weight: f64,
        #[arg(long)]
        height: f64,
    },
    /// Age in years, months, and days.
    Age {
        /// Date of birth, YYYY-MM-DD.
        #[arg(long)]
        birth: String,
        /// Reference date, YYYY-MM-DD; defaults to today (UTC).
        #[arg(long)]
        on: Option<String>,
    },
    /// Convert between units of the same quantity, e.g. `convert 5 km mi`.
    Convert {
        #[arg(allow_hyphen_values = true)]
        value: String,
        from: String,
        to: String,
    },
    /// Convert money between supported currencies.
    Currency {
        amount: String,
        #[arg(value_parser = parse_currency)]
        from: CurrencyCode,
        #[arg(value_parser = parse_currency)]
        to: CurrencyCode,
    },
    /// Credit-weighted SGPA from CREDIT:GRADE pairs.
    Sgpa {
        #[arg(required = true)]
        subjects: Vec<String>,
    },
    /// Random password.
    Password {
        #[arg(long, default_value_t = 12)]
        length: usize,
    },
}

fn parse_currency(raw: &str) -> Result<CurrencyCode, String> {
    raw.parse::<CurrencyCode>().map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let outcome = match cli.command {
        Command::Ping => ping(&cli.base_url).await,
        Command::Ai { prompt, system } => ask(&cli.base_url, prompt, system).await,
        Command::Calc(calc) => render(calc, cli.currency, OffsetDateTime::now_utc().date()),
    };
    match outcome {
        Ok(text) => {
            println!("{text}");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}

// =============================================================================
// LOCAL CALCULATORS
// =============================================================================

/// Run an offline command and format its output.
fn render(calc: Calc, currency: CurrencyCode, today: Date) -> Result<String, CliError> {
    let money = |amount: f64| currency.format_amount(amount);
    let text = match calc {
        Calc::Emi { principal, rate, years } => {
            let loan = emi(LoanTerms { principal, annual_rate: rate, years })?;
            format!(
                "Monthly EMI: {}\nTotal Interest: {}\nTotal Payment: {}",
                money(loan.emi),
                money(loan.total_interest),
                money(loan.total_payment)
            )
        }
        Calc::Sip { monthly, rate, years } => {
            let plan = sip(monthly, rate, years)?;
            format!(
                "Invested: {}\nReturns: {}\nMaturity: {}",
                money(plan.invested),
                money(plan.returns),
                money(plan.maturity)
            )
        }
        Calc::Gst { amount, rate, inclusive } => {
            let mode = if inclusive { GstMode::Inclusive } else { GstMode::Exclusive };
            let summary = gst(amount, rate, mode)?;
            format!("Net: {}\nGST: {}\nTotal: {}", money(summary.net), money(summary.gst), money(summary.total))
        }
        Calc::Tax { income } => format!("Estimated Tax: {}", money(income_tax(income)?)),
        Calc::Bmi { weight, height } => {
            let reading = bmi(weight, height)?;
            format!("BMI: {:.1} ({})", reading.bmi, reading.category.label())
        }
        Calc::Age { birth, on } => {
            let birth = parse_iso_date("Date of Birth", &birth)?;
            let today = match on {
                Some(raw) => parse_iso_date("Date", &raw)?,
                None => today,
            };
            let age = age_on(birth, today)?;
            format!("{} years, {} months, {} days", age.years, age.months, age.days)
        }
        Calc::Convert { value, from, to } => {
            let value = parse_number("Value", &value)?;
            let from: Unit = from.parse()?;
            let to: Unit = to.parse()?;
            format!("{} {}", format_converted(convert(value, from, to)?), to.symbol())
        }
        Calc::Currency { amount, from, to } => {
            let amount = parse_number("Amount", &amount)?;
            to.format_amount(convert_currency(amount, from, to)?)
        }
        Calc::Sgpa { subjects } => {
            let grades = subjects
                .iter()
                .map(|s| parse_subject(s))
                .collect::<Result<Vec<_>, _>>()?;
            format!("SGPA: {:.2}", sgpa(&grades)?)
        }
        Calc::Password { length } => generate_password(length, &mut rand::rng())?,
    };
    Ok(text)
}

fn parse_subject(raw: &str) -> Result<SubjectGrade, CliError> {
    let invalid = || CliError::InvalidSubject(raw.to_owned());
    let (credit, grade) = raw.split_once(':').ok_or_else(invalid)?;
    let credit = credit.trim().parse::<f64>().map_err(|_| invalid())?;
    let grade = grade.trim().parse::<f64>().map_err(|_| invalid())?;
    Ok(SubjectGrade { credit, grade })
}

// =============================================================================
// SERVER COMMANDS
// =============================================================================

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

async fn ping(base_url: &str) -> Result<String, CliError> {
    let response = reqwest::get(endpoint(base_url, "/healthz")).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: "health check failed".to_owned() });
    }
    Ok("ok".to_owned())
}

async fn ask(base_url: &str, prompt: String, system: Option<String>) -> Result<String, CliError> {
    let body = GenerateRequest { prompt, system_instruction: system };
    let response = reqwest::Client::new()
        .post(endpoint(base_url, "/api/ai/generate"))
        .json(&body)
        .send()
        .await?;
    let status = response.status();
    // Rate-limit replies still carry display text.
    if !status.is_success() && status != reqwest::StatusCode::TOO_MANY_REQUESTS {
        let message = response.text().await.unwrap_or_default();
        return Err(CliError::ServerError { status: status.as_u16(), message });
    }
    Ok(response.json::<GenerateResponse>().await?.text)
}
