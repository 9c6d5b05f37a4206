//! Loan, investment, tax, and bookkeeping formulas for the finance page.
//!
//! DESIGN
//! ======
//! Each tool is a closed-form function of its inputs. Rates are entered as
//! annual percentages and durations in years; conversion to monthly rates
//! and month counts happens here so callers pass exactly what the user typed.
//!
//! Zero-rate loans and investments are legal inputs and take the linear
//! limit of the formula instead of dividing by zero.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::currency::CurrencyCode;
use crate::error::{ToolError, non_negative, positive};

#[cfg(test)]
#[path = "finance_test.rs"]
mod finance_test;

// =============================================================================
// LOANS
// =============================================================================

/// Inputs for one amortizing loan.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: f64,
    pub annual_rate: f64,
    pub years: f64,
}

/// Monthly installment with lifetime totals.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub emi: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

/// Equated monthly installment: `P*r*(1+r)^n / ((1+r)^n - 1)`.
///
/// # Errors
///
/// Returns [`ToolError`] for negative principal or rate, or a non-positive
/// tenure.
pub fn emi(terms: LoanTerms) -> Result<LoanSummary, ToolError> {
    let principal = non_negative("Loan Amount", terms.principal)?;
    let annual_rate = non_negative("Interest Rate", terms.annual_rate)?;
    let years = positive("Tenure (Years)", terms.years)?;

    let r = annual_rate / 12.0 / 100.0;
    let n = years * 12.0;
    let emi = if r <= 0.0 {
        principal / n
    } else {
        let growth = (1.0 + r).powf(n);
        principal * r * growth / (growth - 1.0)
    };
    let total_payment = emi * n;
    Ok(LoanSummary { emi, total_payment, total_interest: total_payment - principal })
}

/// Side-by-side result of two loan offers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoanComparison {
    pub first: LoanSummary,
    pub second: LoanSummary,
    /// Absolute difference between the two lifetime totals.
    pub savings: f64,
}

/// Compare two offers by total amount repaid.
///
/// # Errors
///
/// Returns the first [`ToolError`] raised by either offer.
pub fn compare_loans(first: LoanTerms, second: LoanTerms) -> Result<LoanComparison, ToolError> {
    let first = emi(first)?;
    let second = emi(second)?;
    Ok(LoanComparison { first, second, savings: (first.total_payment - second.total_payment).abs() })
}

/// Share of a monthly installment per person.
///
/// # Errors
///
/// Returns [`ToolError`] for a negative amount or zero people.
pub fn split_emi(amount: f64, people: u32) -> Result<f64, ToolError> {
    let amount = non_negative("EMI Amount", amount)?;
    if people == 0 {
        return Err(ToolError::NotPositive { field: "People" });
    }
    Ok(amount / f64::from(people))
}

/// Payoff amount including a prepayment penalty percentage.
///
/// # Errors
///
/// Returns [`ToolError`] for negative inputs.
pub fn foreclosure(outstanding: f64, penalty_pct: f64) -> Result<f64, ToolError> {
    let outstanding = non_negative("Outstanding Principal", outstanding)?;
    let penalty = non_negative("Penalty (%)", penalty_pct)?;
    Ok(outstanding * (1.0 + penalty / 100.0))
}

// =============================================================================
// INVESTMENTS
// =============================================================================

/// Amount put in, value at maturity, and the difference.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrowthSummary {
    pub invested: f64,
    pub maturity: f64,
    pub returns: f64,
}

/// Systematic investment plan with contributions at the start of each month.
///
/// # Errors
///
/// Returns [`ToolError`] for negative inputs.
pub fn sip(monthly: f64, annual_rate: f64, years: f64) -> Result<GrowthSummary, ToolError> {
    let monthly = non_negative("Monthly Investment", monthly)?;
    let annual_rate = non_negative("Expected Return Rate", annual_rate)?;
    let years = non_negative("Time Period (Years)", years)?;

    let i = annual_rate / 100.0 / 12.0;
    let n = years * 12.0;
    let invested = monthly * n;
    let maturity = if i <= 0.0 { invested } else { monthly * (((1.0 + i).powf(n) - 1.0) / i) * (1.0 + i) };
    Ok(GrowthSummary { invested, maturity, returns: maturity - invested })
}

/// One-time investment compounded annually.
///
/// # Errors
///
/// Returns [`ToolError`] for negative inputs.
pub fn lumpsum(amount: f64, annual_rate: f64, years: f64) -> Result<GrowthSummary, ToolError> {
    let amount = non_negative("Investment", amount)?;
    let annual_rate = non_negative("Expected Return Rate", annual_rate)?;
    let years = non_negative("Time Period (Years)", years)?;

    let maturity = amount * (1.0 + annual_rate / 100.0).powf(years);
    Ok(GrowthSummary { invested: amount, maturity, returns: maturity - amount })
}

/// Interest earned and final amount.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterestSummary {
    pub interest: f64,
    pub total: f64,
}

/// `P * R * T / 100`.
///
/// # Errors
///
/// Returns [`ToolError`] for negative inputs.
pub fn simple_interest(principal: f64, annual_rate: f64, years: f64) -> Result<InterestSummary, ToolError> {
    let principal = non_negative("Principal", principal)?;
    let annual_rate = non_negative("Rate (%)", annual_rate)?;
    let years = non_negative("Time (Years)", years)?;
    let interest = principal * annual_rate * years / 100.0;
    Ok(InterestSummary { interest, total: principal + interest })
}

/// Compounding periods per year.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompoundFrequency {
    #[default]
    Annually,
    HalfYearly,
    Quarterly,
    Monthly,
}

impl CompoundFrequency {
    pub const ALL: [CompoundFrequency; 4] = [Self::Annually, Self::HalfYearly, Self::Quarterly, Self::Monthly];

    #[must_use]
    pub fn periods_per_year(self) -> u32 {
        match self {
            Self::Annually => 1,
            Self::HalfYearly => 2,
            Self::Quarterly => 4,
            Self::Monthly => 12,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Annually => "Annually",
            Self::HalfYearly => "Half-Yearly",
            Self::Quarterly => "Quarterly",
            Self::Monthly => "Monthly",
        }
    }
}

/// `P * (1 + r/(100n))^(n t)`.
///
/// # Errors
///
/// Returns [`ToolError`] for negative inputs.
pub fn compound_interest(
    principal: f64,
    annual_rate: f64,
    years: f64,
    frequency: CompoundFrequency,
) -> Result<InterestSummary, ToolError> {
    let principal = non_negative("Principal", principal)?;
    let annual_rate = non_negative("Rate (%)", annual_rate)?;
    let years = non_negative("Time (Years)", years)?;
    let n = f64::from(frequency.periods_per_year());
    let total = principal * (1.0 + annual_rate / (100.0 * n)).powf(n * years);
    Ok(InterestSummary { interest: total - principal, total })
}

/// Monthly saving needed to reach `goal` in `months`.
///
/// # Errors
///
/// Returns [`ToolError`] for a negative goal or a non-positive month count.
pub fn savings_goal(goal: f64, months: f64) -> Result<f64, ToolError> {
    let goal = non_negative("Goal Amount", goal)?;
    let months = positive("Months", months)?;
    Ok(goal / months)
}

// =============================================================================
// TAX
// =============================================================================

/// Whether the entered amount already contains GST.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GstMode {
    #[default]
    Exclusive,
    Inclusive,
}

/// Net amount, tax portion, and gross amount.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GstSummary {
    pub net: f64,
    pub gst: f64,
    pub total: f64,
}

/// Add GST to a net amount, or extract it from a gross one.
///
/// # Errors
///
/// Returns [`ToolError`] for negative inputs.
pub fn gst(amount: f64, rate: f64, mode: GstMode) -> Result<GstSummary, ToolError> {
    let amount = non_negative("Amount", amount)?;
    let rate = non_negative("GST Rate (%)", rate)?;
    Ok(match mode {
        GstMode::Exclusive => {
            let gst = amount * rate / 100.0;
            GstSummary { net: amount, gst, total: amount + gst }
        }
        GstMode::Inclusive => {
            let gst = amount - amount * (100.0 / (100.0 + rate));
            GstSummary { net: amount - gst, gst, total: amount }
        }
    })
}

/// A single-line tax invoice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub client: String,
    pub subtotal: f64,
    pub rate: f64,
    pub tax: f64,
    pub total: f64,
}

impl Invoice {
    /// Lines printed on the downloadable invoice.
    #[must_use]
    pub fn lines(&self, currency: CurrencyCode) -> Vec<String> {
        vec![
            format!("Client: {}", self.client),
            format!("Amount: {}", currency.format_amount(self.subtotal)),
            format!("GST ({}%): {}", self.rate, currency.format_amount(self.tax)),
            format!("Total: {}", currency.format_amount(self.total)),
        ]
    }
}

/// Build an invoice for a taxable amount.
///
/// # Errors
///
/// Returns [`ToolError`] for negative inputs.
pub fn gst_invoice(client: &str, amount: f64, rate: f64) -> Result<Invoice, ToolError> {
    let summary = gst(amount, rate, GstMode::Exclusive)?;
    let client = client.trim();
    Ok(Invoice {
        client: if client.is_empty() { "Client Name".to_owned() } else { client.to_owned() },
        subtotal: summary.net,
        rate,
        tax: summary.gst,
        total: summary.total,
    })
}

/// Annual income exempt from the flat estimate.
pub const TAX_EXEMPT_INCOME: f64 = 250_000.0;

/// Flat 5% estimate on income above the exemption.
///
/// # Errors
///
/// Returns [`ToolError`] for negative income.
pub fn income_tax(annual_income: f64) -> Result<f64, ToolError> {
    let income = non_negative("Annual Income", annual_income)?;
    Ok(if income > TAX_EXEMPT_INCOME { (income - TAX_EXEMPT_INCOME) * 0.05 } else { 0.0 })
}

/// Salary components for a monthly slip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryInput {
    pub basic: f64,
    pub hra: f64,
    pub da: f64,
    pub pf: f64,
    pub tax: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SalarySlip {
    pub earnings: f64,
    pub deductions: f64,
    pub net: f64,
}

/// Gross earnings, deductions, and take-home pay.
///
/// # Errors
///
/// Returns [`ToolError`] for negative components.
pub fn salary_slip(input: SalaryInput) -> Result<SalarySlip, ToolError> {
    let earnings = non_negative("Basic", input.basic)?
        + non_negative("HRA", input.hra)?
        + non_negative("DA", input.da)?;
    let deductions = non_negative("PF", input.pf)? + non_negative("Tax", input.tax)?;
    Ok(SalarySlip { earnings, deductions, net: earnings - deductions })
}

// =============================================================================
// EXPENSE TRACKER
// =============================================================================

/// Direction of money flow for a ledger entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    #[default]
    Expense,
}

impl EntryKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

/// Fixed category list for the expense tracker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    #[default]
    Food,
    Transport,
    Utilities,
    Entertainment,
    Health,
    Salary,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 7] = [
        Self::Food,
        Self::Transport,
        Self::Utilities,
        Self::Entertainment,
        Self::Health,
        Self::Salary,
        Self::Other,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Salary => "Salary",
            Self::Other => "Other",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// One persisted ledger entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub title: String,
    pub amount: f64,
    /// ISO calendar date, `YYYY-MM-DD`.
    pub date: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub category: ExpenseCategory,
    #[serde(default)]
    pub is_recurring: bool,
}

/// Validated fields for a new ledger entry.
///
/// # Errors
///
/// Returns [`ToolError`] when the title is blank or the amount is not
/// strictly positive.
pub fn new_expense(
    id: String,
    title: &str,
    amount: f64,
    date: String,
    kind: EntryKind,
    category: ExpenseCategory,
    is_recurring: bool,
) -> Result<Expense, ToolError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ToolError::Missing { field: "Title" });
    }
    let amount = positive("Amount", amount)?;
    Ok(Expense { id, title: title.to_owned(), amount, date, kind, category, is_recurring })
}

/// Income and expense totals with their difference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerTotals {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

#[must_use]
pub fn ledger_totals(entries: &[Expense]) -> LedgerTotals {
    let (income, expense) = entries.iter().fold((0.0, 0.0), |(inc, exp), e| match e.kind {
        EntryKind::Income => (inc + e.amount, exp),
        EntryKind::Expense => (inc, exp + e.amount),
    });
    LedgerTotals { income, expense, balance: income - expense }
}

/// Entries matching `category`, or all entries for `None`.
#[must_use]
pub fn filter_by_category(entries: &[Expense], category: Option<ExpenseCategory>) -> Vec<Expense> {
    entries
        .iter()
        .filter(|e| category.is_none_or(|c| e.category == c))
        .cloned()
        .collect()
}

/// Download file name for the CSV export.
#[must_use]
pub fn expenses_csv_file_name(currency: CurrencyCode) -> String {
    format!("expenses_{}.csv", currency.code())
}

/// Render the ledger as CSV with a currency-labelled amount column.
#[must_use]
pub fn expenses_csv(entries: &[Expense], currency: CurrencyCode) -> String {
    let mut out = format!("Title,Amount ({}),Type,Category,Date\n", currency.code());
    for e in entries {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            csv_field(&e.title),
            e.amount,
            e.kind.label(),
            e.category.label(),
            csv_field(&e.date)
        ));
    }
    out
}

pub(crate) fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_owned()
    }
}

// =============================================================================
// DAY SAVINGS
// =============================================================================

/// One day's saved amount.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DaySaving {
    /// ISO calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub amount: f64,
}

/// Log a saving dated `today`.
///
/// # Errors
///
/// Returns [`ToolError`] unless the amount is strictly positive.
pub fn new_day_saving(amount: f64, today: Date) -> Result<DaySaving, ToolError> {
    let amount = positive("Amount Saved", amount)?;
    Ok(DaySaving { date: crate::daily::iso_date(today), amount })
}

#[must_use]
pub fn total_saved(entries: &[DaySaving]) -> f64 {
    entries.iter().map(|e| e.amount).sum()
}
