use time::macros::date;

use super::*;

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

// =============================================================================
// LOANS
// =============================================================================

#[test]
fn emi_matches_closed_form_for_reference_loan() {
    let s = emi(LoanTerms { principal: 1_000_000.0, annual_rate: 8.5, years: 5.0 }).unwrap();
    assert!(close(s.emi, 20_516.5, 1.0), "emi = {}", s.emi);
    assert!(close(s.emi * 60.0, s.total_payment, 1e-6));
    assert!(close(s.total_payment - 1_000_000.0, s.total_interest, 1e-6));
}

#[test]
fn emi_with_zero_rate_is_straight_division() {
    let s = emi(LoanTerms { principal: 120_000.0, annual_rate: 0.0, years: 1.0 }).unwrap();
    assert!(close(s.emi, 10_000.0, 1e-9));
    assert!(close(s.total_interest, 0.0, 1e-9));
}

#[test]
fn emi_with_zero_principal_is_zero() {
    let s = emi(LoanTerms { principal: 0.0, annual_rate: 9.0, years: 3.0 }).unwrap();
    assert!(close(s.emi, 0.0, 1e-12));
}

#[test]
fn emi_rejects_zero_tenure_and_negative_rate() {
    assert_eq!(
        emi(LoanTerms { principal: 1000.0, annual_rate: 5.0, years: 0.0 }),
        Err(ToolError::NotPositive { field: "Tenure (Years)" })
    );
    assert_eq!(
        emi(LoanTerms { principal: 1000.0, annual_rate: -5.0, years: 1.0 }),
        Err(ToolError::Negative { field: "Interest Rate" })
    );
}

#[test]
fn compare_loans_reports_absolute_difference() {
    let cheap = LoanTerms { principal: 500_000.0, annual_rate: 8.0, years: 5.0 };
    let dear = LoanTerms { principal: 500_000.0, annual_rate: 10.0, years: 5.0 };
    let a = compare_loans(cheap, dear).unwrap();
    let b = compare_loans(dear, cheap).unwrap();
    assert!(a.savings > 0.0);
    assert!(close(a.savings, b.savings, 1e-9));
    assert!(close(compare_loans(cheap, cheap).unwrap().savings, 0.0, 1e-9));
}

#[test]
fn split_emi_divides_evenly() {
    assert!(close(split_emi(1000.0, 4).unwrap(), 250.0, 1e-12));
    assert_eq!(split_emi(1000.0, 0), Err(ToolError::NotPositive { field: "People" }));
}

#[test]
fn foreclosure_adds_penalty() {
    assert!(close(foreclosure(100_000.0, 2.0).unwrap(), 102_000.0, 1e-9));
}

// =============================================================================
// INVESTMENTS
// =============================================================================

#[test]
fn sip_uses_annuity_due() {
    let s = sip(5000.0, 12.0, 10.0).unwrap();
    assert!(close(s.invested, 600_000.0, 1e-9));
    assert!(close(s.maturity, 1_161_695.4, 1.0), "maturity = {}", s.maturity);
    assert!(close(s.returns, s.maturity - s.invested, 1e-9));
}

#[test]
fn sip_with_zero_rate_returns_contributions() {
    let s = sip(1000.0, 0.0, 2.0).unwrap();
    assert!(close(s.maturity, 24_000.0, 1e-9));
    assert!(close(s.returns, 0.0, 1e-9));
}

#[test]
fn lumpsum_compounds_annually() {
    let s = lumpsum(10_000.0, 10.0, 2.0).unwrap();
    assert!(close(s.maturity, 12_100.0, 1e-6));
    assert!(close(s.returns, 2_100.0, 1e-6));
}

#[test]
fn simple_interest_is_linear() {
    let s = simple_interest(10_000.0, 5.0, 2.0).unwrap();
    assert!(close(s.interest, 1_000.0, 1e-9));
    assert!(close(s.total, 11_000.0, 1e-9));
}

#[test]
fn compound_interest_respects_frequency() {
    let quarterly = compound_interest(10_000.0, 10.0, 1.0, CompoundFrequency::Quarterly).unwrap();
    assert!(close(quarterly.total, 11_038.128_906_25, 1e-6));
    let annual = compound_interest(10_000.0, 10.0, 1.0, CompoundFrequency::Annually).unwrap();
    assert!(close(annual.interest, 1_000.0, 1e-9));
    assert!(quarterly.interest > annual.interest);
}

#[test]
fn savings_goal_requires_months() {
    assert!(close(savings_goal(12_000.0, 12.0).unwrap(), 1_000.0, 1e-9));
    assert!(savings_goal(12_000.0, 0.0).is_err());
}

// =============================================================================
// TAX
// =============================================================================

#[test]
fn gst_exclusive_adds_tax() {
    let s = gst(1000.0, 18.0, GstMode::Exclusive).unwrap();
    assert!(close(s.gst, 180.0, 1e-9));
    assert!(close(s.total, 1180.0, 1e-9));
    assert!(close(s.net, 1000.0, 1e-9));
}

#[test]
fn gst_inclusive_extracts_tax() {
    let s = gst(1180.0, 18.0, GstMode::Inclusive).unwrap();
    assert!(close(s.gst, 180.0, 1e-9));
    assert!(close(s.net, 1000.0, 1e-9));
    assert!(close(s.total, 1180.0, 1e-9));
}

#[test]
fn gst_invoice_defaults_client_name() {
    let inv = gst_invoice("  ", 1000.0, 18.0).unwrap();
    assert_eq!(inv.client, "Client Name");
    assert!(close(inv.total, 1180.0, 1e-9));
    let lines = inv.lines(CurrencyCode::Inr);
    assert_eq!(lines[0], "Client: Client Name");
    assert_eq!(lines[2], "GST (18%): ₹180");
    assert_eq!(lines[3], "Total: ₹1,180");
}

#[test]
fn income_tax_applies_above_exemption_only() {
    assert!(close(income_tax(250_000.0).unwrap(), 0.0, 1e-12));
    assert!(close(income_tax(350_000.0).unwrap(), 5_000.0, 1e-9));
}

#[test]
fn salary_slip_nets_deductions() {
    let slip = salary_slip(SalaryInput { basic: 30_000.0, hra: 12_000.0, da: 3_000.0, pf: 1_800.0, tax: 2_000.0 })
        .unwrap();
    assert!(close(slip.earnings, 45_000.0, 1e-9));
    assert!(close(slip.deductions, 3_800.0, 1e-9));
    assert!(close(slip.net, 41_200.0, 1e-9));
}

// =============================================================================
// EXPENSES
// =============================================================================

fn entry(id: &str, amount: f64, kind: EntryKind, category: ExpenseCategory) -> Expense {
    new_expense(id.to_owned(), "Item", amount, "2024-01-15".to_owned(), kind, category, false).unwrap()
}

#[test]
fn new_expense_validates_title_and_amount() {
    let blank = new_expense("1".into(), " ", 10.0, "2024-01-01".into(), EntryKind::Expense, ExpenseCategory::Food, false);
    assert_eq!(blank, Err(ToolError::Missing { field: "Title" }));
    let zero = new_expense("1".into(), "Tea", 0.0, "2024-01-01".into(), EntryKind::Expense, ExpenseCategory::Food, false);
    assert_eq!(zero, Err(ToolError::NotPositive { field: "Amount" }));
}

#[test]
fn ledger_totals_balance_income_against_expense() {
    let entries = vec![
        entry("1", 50_000.0, EntryKind::Income, ExpenseCategory::Salary),
        entry("2", 1_200.0, EntryKind::Expense, ExpenseCategory::Food),
        entry("3", 800.0, EntryKind::Expense, ExpenseCategory::Transport),
    ];
    let totals = ledger_totals(&entries);
    assert!(close(totals.income, 50_000.0, 1e-9));
    assert!(close(totals.expense, 2_000.0, 1e-9));
    assert!(close(totals.balance, 48_000.0, 1e-9));
}

#[test]
fn filter_by_category_keeps_matching_entries() {
    let entries = vec![
        entry("1", 10.0, EntryKind::Expense, ExpenseCategory::Food),
        entry("2", 20.0, EntryKind::Expense, ExpenseCategory::Health),
    ];
    assert_eq!(filter_by_category(&entries, None).len(), 2);
    let food = filter_by_category(&entries, Some(ExpenseCategory::Food));
    assert_eq!(food.len(), 1);
    assert_eq!(food[0].id, "1");
}

#[test]
fn expenses_csv_has_currency_header_and_quotes_commas() {
    let mut e = entry("1", 12.5, EntryKind::Expense, ExpenseCategory::Food);
    e.title = "Lunch, team".to_owned();
    let csv = expenses_csv(&[e], CurrencyCode::Usd);
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Title,Amount (USD),Type,Category,Date"));
    assert_eq!(lines.next(), Some("\"Lunch, team\",12.5,expense,Food,2024-01-15"));
    assert_eq!(expenses_csv_file_name(CurrencyCode::Usd), "expenses_USD.csv");
}

#[test]
fn expense_serializes_with_camel_case_keys() {
    let e = entry("9", 5.0, EntryKind::Income, ExpenseCategory::Other);
    let json = serde_json::to_value(&e).unwrap();
    assert_eq!(json["type"], "income");
    assert_eq!(json["isRecurring"], false);
    assert_eq!(json["category"], "Other");
}

#[test]
fn day_savings_are_dated_and_summed() {
    let a = new_day_saving(100.0, date!(2024 - 03 - 05)).unwrap();
    assert_eq!(a.date, "2024-03-05");
    let b = new_day_saving(50.0, date!(2024 - 03 - 06)).unwrap();
    assert!(close(total_saved(&[a, b]), 150.0, 1e-12));
    assert!(new_day_saving(0.0, date!(2024 - 03 - 06)).is_err());
}
