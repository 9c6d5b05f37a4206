//! Finance category: loans, investments, tax, and the expense ledger.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each tab is an independent tool. Amounts are formatted in the display
//! currency chosen with the selector at the top of the page; formulas do not
//! depend on it.

use leptos::prelude::*;
use toolkit::currency::{CurrencyCode, convert_currency};
use toolkit::daily::iso_date;
use toolkit::finance::{
    CompoundFrequency, EntryKind, ExpenseCategory, GrowthSummary, GstMode, InterestSummary, LoanSummary, LoanTerms,
    SalaryInput, compare_loans, compound_interest, emi, expenses_csv, expenses_csv_file_name, filter_by_category,
    foreclosure, gst, gst_invoice, income_tax, ledger_totals, lumpsum, new_day_saving, new_expense, salary_slip,
    savings_goal, simple_interest, sip, split_emi, total_saved,
};
use toolkit::report::listing_pdf;
use toolkit::{ToolError, parse_number};

use crate::app::Session;
use crate::components::fields::{
    Choice, CurrencySelect, ErrorNote, Field, Stat, TabBar, count, error_text, number, shown, text,
};
use crate::components::tool_layout::ToolLayout;
use crate::state::AppStores;
use crate::util::catalog::FINANCE;
use crate::util::confirm::{BulkReset, confirm_reset};
use crate::util::export::download;
use crate::util::ids;
use crate::util::reactive::watch;

const CATEGORY: &str = "finance";

#[component]
pub fn FinancePage() -> impl IntoView {
    let active = RwSignal::new(FINANCE.first_tool());

    view! {
        <div class="page">
            <div class="page__toolbar">
                <TabBar tabs=FINANCE.tools active=active/>
                <CurrencySelect/>
            </div>
            {move || match active.get() {
                "sip" => view! { <SipTool/> }.into_any(),
                "lumpsum" => view! { <LumpsumTool/> }.into_any(),
                "emi" => view! { <EmiTool/> }.into_any(),
                "compare-loan" => view! { <LoanCompareTool/> }.into_any(),
                "invoice" => view! { <InvoiceTool/> }.into_any(),
                "salary-slip" => view! { <SalarySlipTool/> }.into_any(),
                "emi-split" => view! { <EmiSplitTool/> }.into_any(),
                "simple-interest" => view! { <SimpleInterestTool/> }.into_any(),
                "compound-interest" => view! { <CompoundInterestTool/> }.into_any(),
                "savings-day" => view! { <DaySavingsTool/> }.into_any(),
                "gst" => view! { <GstTool/> }.into_any(),
                "currency" => view! { <CurrencyTool/> }.into_any(),
                "tax" => view! { <TaxTool/> }.into_any(),
                "foreclosure" => view! { <ForeclosureTool/> }.into_any(),
                "savings-goal" => view! { <SavingsGoalTool/> }.into_any(),
                _ => view! { <ExpenseTool/> }.into_any(),
            }}
        </div>
    }
}

// =============================================================================
// EXPENSE LEDGER
// =============================================================================

#[component]
fn ExpenseTool() -> impl IntoView {
    let stores = expect_context::<AppStores>();
    let session = expect_context::<Session>();
    let entries = watch(&stores.expenses.items);

    let title = text("");
    let amount = text("");
    let category = text(ExpenseCategory::Food.label());
    let kind = text("expense");
    let recurring = RwSignal::new(false);
    let filter = text("All");
    let form_error = RwSignal::new(None::<String>);

    let totals = Signal::derive(move || entries.with(|e| ledger_totals(e)));
    let result = Signal::derive(move || session.money(totals.get().balance));
    let visible = move || {
        let selected = ExpenseCategory::from_label(&filter.get());
        entries.with(|e| filter_by_category(e, selected))
    };

    let add_stores = stores.clone();
    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let entry_kind = if kind.get() == "income" { EntryKind::Income } else { EntryKind::Expense };
        let outcome = number("Amount", amount).and_then(|value| {
            new_expense(
                ids::new_id(),
                &title.get(),
                value,
                iso_date(ids::today()),
                entry_kind,
                ExpenseCategory::from_label(&category.get()).unwrap_or_default(),
                recurring.get(),
            )
        });
        match outcome {
            Ok(entry) => {
                add_stores.expenses.add(entry);
                title.set(String::new());
                amount.set(String::new());
                recurring.set(false);
                form_error.set(None);
            }
            Err(e) => form_error.set(Some(e.to_string())),
        }
    };

    let remove_stores = stores.clone();
    let on_remove = Callback::new(move |id: String| {
        remove_stores.expenses.remove(&id);
    });

    let on_export = move |_| {
        let currency = session.currency.get_untracked();
        let csv = entries.with_untracked(|e| expenses_csv(e, currency));
        if let Err(e) = download(&expenses_csv_file_name(currency), csv.as_bytes()) {
            log::warn!("expense export failed: {e}");
        }
    };

    let reset_stores = stores.clone();
    let on_reset = Callback::new(move |()| {
        confirm_reset(BulkReset::Expenses, || reset_stores.expenses.reset());
    });

    let category_options: Vec<(String, String)> =
        ExpenseCategory::ALL.iter().map(|c| (c.label().to_owned(), c.label().to_owned())).collect();
    let mut filter_options = vec![("All".to_owned(), "All".to_owned())];
    filter_options.extend(category_options.clone());

    view! {
        <ToolLayout
            id="expense"
            name="Expense Tracker"
            category=CATEGORY
            description="Track income and spending by category."
            result=result
            on_reset=on_reset
        >
            <div class="grid grid--3">
                <Stat label="Income" value=Signal::derive(move || session.money(totals.get().income))/>
                <Stat label="Expenses" value=Signal::derive(move || session.money(totals.get().expense))/>
                <Stat label="Balance" value=result highlight=true/>
            </div>
            <form class="form-row" on:submit=on_add>
                <Field label="Title" value=title kind="text" placeholder="e.g. Groceries"/>
                <Field label="Amount" value=amount/>
                <Choice label="Category" value=category options=category_options/>
                <Choice
                    label="Type"
                    value=kind
                    options=vec![
                        ("expense".to_owned(), "Expense".to_owned()),
                        ("income".to_owned(), "Income".to_owned()),
                    ]
                />
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || recurring.get()
                        on:change=move |ev| recurring.set(event_target_checked(&ev))
                    />
                    "Recurring"
                </label>
                <button class="button button--primary" type="submit">"Add"</button>
            </form>
            <ErrorNote error=form_error/>
            <div class="list-toolbar">
                <Choice label="Filter" value=filter options=filter_options/>
                <button class="button" on:click=on_export>"Export CSV"</button>
            </div>
            <ul class="list">
                <For
                    each=visible
                    key=|entry| entry.id.clone()
                    children=move |entry| {
                        let id = entry.id.clone();
                        let sign = if entry.kind == EntryKind::Income { "+" } else { "-" };
                        view! {
                            <li class="list__item" class:list__item--income={entry.kind == EntryKind::Income}>
                                <div>
                                    <strong>{entry.title.clone()}</strong>
                                    <span class="muted">
                                        {format!("{} · {}", entry.category.label(), entry.date)}
                                        {entry.is_recurring.then_some(" · recurring")}
                                    </span>
                                </div>
                                <span>{format!("{sign}{}", session.money(entry.amount))}</span>
                                <button class="icon-button" title="Delete" on:click=move |_| on_remove.run(id.clone())>
                                    "✕"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </ToolLayout>
    }
}

// =============================================================================
// INVESTMENTS
// =============================================================================

fn growth_stats(session: Session, outcome: Signal<Result<GrowthSummary, ToolError>>) -> impl IntoView {
    view! {
        <div class="grid grid--3">
            <Stat label="Invested" value=Signal::derive(move || shown(&outcome.get(), |g| session.money(g.invested)))/>
            <Stat label="Returns" value=Signal::derive(move || shown(&outcome.get(), |g| session.money(g.returns)))/>
            <Stat
                label="Total Value"
                value=Signal::derive(move || shown(&outcome.get(), |g| session.money(g.maturity)))
                highlight=true
            />
        </div>
        <ErrorNote error=Signal::derive(move || error_text(&outcome.get()))/>
    }
}

#[component]
fn SipTool() -> impl IntoView {
    let session = expect_context::<Session>();
    let monthly = text("5000");
    let rate = text("12");
    let years = text("10");
    let outcome = Signal::derive(move || {
        sip(
            number("Monthly Investment", monthly)?,
            number("Expected Return Rate", rate)?,
            number("Time Period (Years)", years)?,
        )
    });
    let result = Signal::derive(move || shown(&outcome.get(), |g| session.money(g.maturity)));
    let on_reset = Callback::new(move |()| {
        monthly.set("5000".into());
        rate.set("12".into());
        years.set("10".into());
    });

    view! {
        <ToolLayout
            id="sip"
            name="SIP Calculator"
            category=CATEGORY
            description="Estimate returns on your Systematic Investment Plan."
            result=result
            on_reset=on_reset
        >
            <div class="grid grid--3">
                <Field label="Monthly Investment" value=monthly/>
                <Field label="Expected Return Rate (p.a. %)" value=rate/>
                <Field label="Time Period (Years)" value=years/>
            </div>
            {growth_stats(session, outcome)}
        </ToolLayout>
    }
}

#[component]
fn LumpsumTool() -> impl IntoView {
    let session = expect_context::<Session>();
    let amount = text("100000");
    let rate = text("12");
    let years = text("5");
    let outcome = Signal::derive(move || {
        lumpsum(
            number("Investment", amount)?,
            number("Expected Return Rate", rate)?,
            number("Time Period (Years)", years)?,
        )
    });
    let result = Signal::derive(move || shown(&outcome.get(), |g| session.money(g.maturity)));

    view! {
        <ToolLayout
            id="lumpsum"
            name="Lumpsum Calculator"
            category=CATEGORY
            description="Calculate returns for one-time investments."
            result=result
        >
            <div class="grid grid--3">
                <Field label="Total Investment" value=amount/>
                <Field label="Expected Return Rate (p.a. %)" value=rate/>
                <Field label="Time Period (Years)" value=years/>
            </div>
            {growth_stats(session, outcome)}
        </ToolLayout>
    }
}

// =============================================================================
// LOANS
// =============================================================================

fn loan_terms(principal: RwSignal<String>, rate: RwSignal<String>, years: RwSignal<String>) -> Result<LoanTerms, ToolError> {
    Ok(LoanTerms {
        principal: number("Loan Amount", principal)?,
        annual_rate: number("Interest Rate", rate)?,
        years: number("Tenure (Years)", years)?,
    })
}

#[component]
fn EmiTool() -> impl IntoView {
    let session = expect_context::<Session>();
    let principal = text("1000000");
    let rate = text("8.5");
    let years = text("5");
    let outcome = Signal::derive(move || emi(loan_terms(principal, rate, years)?));
    let result = Signal::derive(move || shown(&outcome.get(), |s| session.money(s.emi)));
    let on_reset = Callback::new(move |()| {
        principal.set("1000000".into());
        rate.set("8.5".into());
        years.set("5".into());
    });
    let figure = move |pick: fn(&LoanSummary) -> f64| {
        Signal::derive(move || shown(&outcome.get(), |s| session.money(pick(s))))
    };

    view! {
        <ToolLayout
            id="emi"
            name="EMI Calculator"
            category=CATEGORY
            description="Calculate monthly loan repayments."
            result=result
            on_reset=on_reset
        >
            <div class="grid grid--3">
                <Field label="Loan Amount" value=principal/>
                <Field label="Interest Rate (p.a. %)" value=rate/>
                <Field label="Tenure (Years)" value=years/>
            </div>
            <div class="grid grid--3">
                <Stat label="Monthly EMI" value=result highlight=true/>
                <Stat label="Total Interest" value=figure(|s| s.total_interest)/>
                <Stat label="Total Payment" value=figure(|s| s.total_payment)/>
            </div>
            <ErrorNote error=Signal::derive(move || error_text(&outcome.get()))/>
        </ToolLayout>
    }
}

#[component]
fn LoanCompareTool() -> impl IntoView {
    let session = expect_context::<Session>();
    let (p1, r1, n1) = (text("1000000"), text("8.5"), text("5"));
    let (p2, r2, n2) = (text("1000000"), text("9.0"), text("5"));
    let outcome = Signal::derive(move || compare_loans(loan_terms(p1, r1, n1)?, loan_terms(p2, r2, n2)?));
    let result = Signal::derive(move || shown(&outcome.get(), |c| session.money(c.savings)));
    let verdict = Signal::derive(move || {
        shown(&outcome.get(), |c| {
            let better = if c.first.total_payment <= c.second.total_payment { "Loan A" } else { "Loan B" };
            format!("{better} saves you {}", session.money(c.savings))
        })
    });

    view! {
        <ToolLayout
            id="loan-compare"
            name="Loan Comparison"
            category=CATEGORY
            description="Compare two loan offers side-by-side."
            result=result
        >
            <div class="grid grid--2">
                <div class="panel">
                    <h3>"Loan A"</h3>
                    <Field label="Amount" value=p1/>
                    <Field label="Rate (%)" value=r1/>
                    <Field label="Years" value=n1/>
                    <Stat label="EMI" value=Signal::derive(move || shown(&outcome.get(), |c| session.money(c.first.emi)))/>
                    <Stat
                        label="Total"
                        value=Signal::derive(move || shown(&outcome.get(), |c| session.money(c.first.total_payment)))
                    />
                </div>
                <div class="panel">
                    <h3>"Loan B"</h3>
                    <Field label="Amount" value=p2/>
                    <Field label="Rate (%)" value=r2/>
                    <Field label="Years" value=n2/>
                    <Stat label="EMI" value=Signal::derive(move || shown(&outcome.get(), |c| session.money(c.second.emi)))/>
                    <Stat
                        label="Total"
                        value=Signal::derive(move || shown(&outcome.get(), |c| session.money(c.second.total_payment)))
                    />
                </div>
            </div>
            <Stat label="Verdict" value=verdict highlight=true/>
            <ErrorNote error=Signal::derive(move || error_text(&outcome.get()))/>
        </ToolLayout>
    }
}

#[component]
fn EmiSplitTool() -> impl IntoView {
    let session = expect_context::<Session>();
    let amount = text("10000");
    let people = text("2");
    let outcome = Signal::derive(move || split_emi(number("EMI Amount", amount)?, people.with(|p| count("People", p))?));
    let result = Signal::derive(move || shown(&outcome.get(), |share| session.money(*share)));
    let on_reset = Callback::new(move |()| {
        amount.set("10000".into());
        people.set("2".into());
    });

    view! {
        <ToolLayout
            id="emi-split"
            name="EMI Splitter"
            category=CATEGORY
            description="Split payments equally among friends."
            result=result
            on_reset=on_reset
        >
            <div class="grid grid--2">
                <Field label="EMI Amount" value=amount/>
                <Field label="People" value=people/>
            </div>
            <Stat label="Per Person" value=result highlight=true/>
            <ErrorNote error=Signal::derive(move || error_text(&outcome.get()))/>
        </ToolLayout>
    }
}

#[component]
fn ForeclosureTool() -> impl IntoView {
    let session = expect_context::<Session>();
    let outstanding = text("500000");
    let penalty = text("2");
    let outcome =
        Signal::derive(move || foreclosure(number("Outstanding Principal", outstanding)?, number("Penalty (%)", penalty)?));
    let result = Signal::derive(move || shown(&outcome.get(), |total| session.money(*total)));
    let on_reset = Callback::new(move |()| {
        outstanding.set("500000".into());
        penalty.set("2".into());
    });

    view! {
        <ToolLayout
            id="foreclosure"
            name="Foreclosure Calculator"
            category=CATEGORY
            description="Calculate amount needed to close loan early."
            result=result
            on_reset=on_reset
        >
            <div class="grid grid--2">
                <Field label="Outstanding Principal" value=outstanding/>
                <Field label="Penalty (%)" value=penalty/>
            </div>
            <Stat label="Total Payable" value=result highlight=true/>
            <ErrorNote error=Signal::derive(move || error_text(&outcome.get()))/>
        </ToolLayout>
    }
}

// =============================================================================
// INTEREST & SAVINGS
// =============================================================================

fn interest_stats(session: Session, outcome: Signal<Result<InterestSummary, ToolError>>) -> impl IntoView {
    view! {
        <div class="grid grid--2">
            <Stat
                label="Interest"
                value=Signal::derive(move || shown(&outcome.get(), |s| session.money(s.interest)))
                highlight=true
            />
            <Stat label="Total Amount" value=Signal::derive(move || shown(&outcome.get(), |s| session.money(s.total)))/>
        </div>
        <ErrorNote error=Signal::derive(move || error_text(&outcome.get()))/>
    }
}

#[component]
fn SimpleInterestTool() -> impl IntoView {
    let session = expect_context::<Session>();
    let (principal, rate, years) = (text("10000"), text("5"), text("2"));
    let outcome = Signal::derive(move || {
        simple_interest(number("Principal", principal)?, number("Rate (%)", rate)?, number("Time (Years)", years)?)
    });
    let result = Signal::derive(move || shown(&outcome.get(), |s| session.money(s.interest)));
    let on_reset = Callback::new(move |()| {
        principal.set("10000".into());
        rate.set("5".into());
        years.set("2".into());
    });

    view! {
        <ToolLayout
            id="simple-interest"
            name="Simple Interest"
            category=CATEGORY
            description="Calculate simple interest."
            result=result
            on_reset=on_reset
        >
            <div class="grid grid--3">
                <Field label="Principal" value=principal/>
                <Field label="Rate (%)" value=rate/>
                <Field label="Time (Years)" value=years/>
            </div>
            {interest_stats(session, outcome)}
        </ToolLayout>
    }
}

fn frequency_from(raw: &str) -> CompoundFrequency {
    CompoundFrequency::ALL
        .into_iter()
        .find(|f| f.periods_per_year().to_string() == raw)
        .unwrap_or_default()
}

#[component]
fn CompoundInterestTool() -> impl IntoView {
    let session = expect_context::<Session>();
    let (principal, rate, years) = (text("10000"), text("5"), text("5"));
    let frequency = text("12");
    let outcome = Signal::derive(move || {
        compound_interest(
            number("Principal", principal)?,
            number("Rate (%)", rate)?,
            number("Time (Years)", years)?,
            frequency.with(|f| frequency_from(f)),
        )
    });
    let result = Signal::derive(move || shown(&outcome.get(), |s| session.money(s.interest)));
    let on_reset = Callback::new(move |()| {
        principal.set("10000".into());
        rate.set("5".into());
        years.set("5".into());
        frequency.set("12".into());
    });
    let options = CompoundFrequency::ALL
        .iter()
        .map(|f| (f.periods_per_year().to_string(), f.label().to_owned()))
        .collect();

    view! {
        <ToolLayout
            id="compound-interest"
            name="Compound Interest"
            category=CATEGORY
            description="Calculate compound interest with frequency."
            result=result
            on_reset=on_reset
        >
            <div class="grid grid--2">
                <Field label="Principal" value=principal/>
                <Field label="Rate (%)" value=rate/>
                <Field label="Time (Years)" value=years/>
                <Choice label="Compounding" value=frequency options=options/>
            </div>
            {interest_stats(session, outcome)}
        </ToolLayout>
    }
}

#[component]
fn SavingsGoalTool() -> impl IntoView {
    let session = expect_context::<Session>();
    let goal = text("100000");
    let months = text("12");
    let outcome = Signal::derive(move || savings_goal(number("Goal Amount", goal)?, number("Months", months)?));
    let result = Signal::derive(move || shown(&outcome.get(), |monthly| session.money(*monthly)));
    let on_reset = Callback::new(move |()| {
        goal.set("100000".into());
        months.set("12".into());
    });

    view! {
        <ToolLayout
            id="savings-goal"
            name="Savings Goal"
            category=CATEGORY
            description="How much to save monthly to reach your target?"
            result=result
            on_reset=on_reset
        >
            <div class="grid grid--2">
                <Field label="Goal Amount" value=goal/>
                <Field label="Months" value=months/>
            </div>
            <Stat label="Save Monthly" value=result highlight=true/>
            <ErrorNote error=Signal::derive(move || error_text(&outcome.get()))/>
        </ToolLayout>
    }
}

#[component]
fn DaySavingsTool() -> impl IntoView {
    let stores = expect_context::<AppStores>();
    let session = expect_context::<Session>();
    let savings = watch(&stores.day_savings.items);
    let amount = text("");
    let form_error = RwSignal::new(None::<String>);

    let result = Signal::derive(move || session.money(savings.with(|s| total_saved(s))));

    let add_stores = stores.clone();
    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match number("Amount Saved", amount).and_then(|value| new_day_saving(value, ids::today())) {
            Ok(saving) => {
                add_stores.day_savings.add(saving);
                amount.set(String::new());
                form_error.set(None);
            }
            Err(e) => form_error.set(Some(e.to_string())),
        }
    };
    let reset_stores = stores.clone();
    let on_reset = Callback::new(move |()| {
        confirm_reset(BulkReset::DaySavings, || reset_stores.day_savings.reset());
    });

    view! {
        <ToolLayout
            id="day-savings"
            name="Day Wise Savings"
            category=CATEGORY
            description="Track your daily savings streak."
            result=result
            on_reset=on_reset
        >
            <div class="grid grid--2">
                <div>
                    <form class="form-row" on:submit=on_add>
                        <Field label="Amount saved today" value=amount/>
                        <button class="button button--primary" type="submit">"Log"</button>
                    </form>
                    <ErrorNote error=form_error/>
                    <ul class="list">
                        {move || {
                            savings
                                .get()
                                .into_iter()
                                .rev()
                                .map(|s| {
                                    view! {
                                        <li class="list__item">
                                            <span class="muted">{s.date}</span>
                                            <span class="positive">{format!("+{}", session.money(s.amount))}</span>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </div>
                <Stat label="Total Saved" value=result highlight=true/>
            </div>
        </ToolLayout>
    }
}

// =============================================================================
// TAX & PAYROLL
// =============================================================================

#[component]
fn GstTool() -> impl IntoView {
    let session = expect_context::<Session>();
    let amount = text("1000");
    let rate = text("18");
    let mode = text("exclusive");
    let outcome = Signal::derive(move || {
        let mode = if mode.get() == "inclusive" { GstMode::Inclusive } else { GstMode::Exclusive };
        gst(number("Amount", amount)?, number("GST Rate (%)", rate)?, mode)
    });
    let result = Signal::derive(move || shown(&outcome.get(), |s| session.money(s.gst)));
    let on_reset = Callback::new(move |()| {
        amount.set("1000".into());
        rate.set("18".into());
        mode.set("exclusive".into());
    });

    view! {
        <ToolLayout
            id="gst"
            name="GST Calculator"
            category=CATEGORY
            description="Calculate tax inclusive/exclusive amounts."
            result=result
            on_reset=on_reset
        >
            <div class="grid grid--3">
                <Field label="Amount" value=amount/>
                <Field label="GST Rate (%)" value=rate/>
                <Choice
                    label="Mode"
                    value=mode
                    options=vec![
                        ("exclusive".to_owned(), "Add GST (Exclusive)".to_owned()),
                        ("inclusive".to_owned(), "Remove GST (Inclusive)".to_owned()),
                    ]
                />
            </div>
            <div class="grid grid--3">
                <Stat label="Net Amount" value=Signal::derive(move || shown(&outcome.get(), |s| session.money(s.net)))/>
                <Stat label="GST" value=result highlight=true/>
                <Stat label="Total" value=Signal::derive(move || shown(&outcome.get(), |s| session.money(s.total)))/>
            </div>
            <ErrorNote error=Signal::derive(move || error_text(&outcome.get()))/>
        </ToolLayout>
    }
}

#[component]
fn InvoiceTool() -> impl IntoView {
    let session = expect_context::<Session>();
    let client = text("");
    let amount = text("1000");
    let rate = text("18");
    let outcome = Signal::derive(move || {
        client.with(|c| gst_invoice(c, parse_number("Amount", &amount.get())?, parse_number("GST Rate (%)", &rate.get())?))
    });
    let result = Signal::derive(move || shown(&outcome.get(), |i| session.money(i.total)));

    let on_download = move |_| {
        let Ok(invoice) = outcome.get_untracked() else {
            return;
        };
        let bytes = listing_pdf("GST Invoice", &invoice.lines(session.currency.get_untracked()));
        if let Err(e) = download("Invoice.pdf", &bytes) {
            log::warn!("invoice export failed: {e}");
        }
    };

    view! {
        <ToolLayout
            id="invoice"
            name="GST Invoice Generator"
            category=CATEGORY
            description="Create simple invoices."
            result=result
        >
            <div class="grid grid--3">
                <Field label="Client Name" value=client kind="text"/>
                <Field label="Amount" value=amount/>
                <Field label="GST Rate (%)" value=rate/>
            </div>
            <div class="panel invoice">
                {move || {
                    outcome
                        .get()
                        .map(|invoice| {
                            invoice
                                .lines(session.currency.get())
                                .into_iter()
                                .map(|line| view! { <p>{line}</p> })
                                .collect_view()
                        })
                        .ok()
                }}
            </div>
            <ErrorNote error=Signal::derive(move || error_text(&outcome.get()))/>
            <button class="button button--primary" on:click=on_download>"Download Invoice"</button>
        </ToolLayout>
    }
}

#[component]
fn SalarySlipTool() -> impl IntoView {
    let session = expect_context::<Session>();
    let basic = text("50000");
    let hra = text("20000");
    let da = text("5000");
    let pf = text("3000");
    let tax = text("2000");
    let outcome = Signal::derive(move || {
        salary_slip(SalaryInput {
            basic: number("Basic", basic)?,
            hra: number("HRA", hra)?,
            da: number("DA", da)?,
            pf: number("PF", pf)?,
            tax: number("Tax", tax)?,
        })
    });
    let result = Signal::derive(move || shown(&outcome.get(), |s| session.money(s.net)));

    view! {
        <ToolLayout
            id="salary-slip"
            name="Salary Slip Generator"
            category=CATEGORY
            description="Generate simple salary slips."
            result=result
        >
            <div class="grid grid--2">
                <div class="panel">
                    <h3>"Earnings"</h3>
                    <Field label="Basic" value=basic/>
                    <Field label="HRA" value=hra/>
                    <Field label="DA" value=da/>
                </div>
                <div class="panel">
                    <h3>"Deductions"</h3>
                    <Field label="PF" value=pf/>
                    <Field label="Tax" value=tax/>
                </div>
            </div>
            <div class="grid grid--3">
                <Stat
                    label="Gross Earnings"
                    value=Signal::derive(move || shown(&outcome.get(), |s| session.money(s.earnings)))
                />
                <Stat
                    label="Total Deductions"
                    value=Signal::derive(move || shown(&outcome.get(), |s| session.money(s.deductions)))
                />
                <Stat label="Net Pay" value=result highlight=true/>
            </div>
            <ErrorNote error=Signal::derive(move || error_text(&outcome.get()))/>
        </ToolLayout>
    }
}

#[component]
fn TaxTool() -> impl IntoView {
    let session = expect_context::<Session>();
    let income = text("500000");
    let outcome = Signal::derive(move || income_tax(number("Annual Income", income)?));
    let result = Signal::derive(move || shown(&outcome.get(), |tax| session.money(*tax)));
    let on_reset = Callback::new(move |()| income.set("500000".into()));

    view! {
        <ToolLayout
            id="tax"
            name="Tax Estimator"
            category=CATEGORY
            description="Simple tax liability estimation."
            result=result
            on_reset=on_reset
        >
            <Field label="Annual Income" value=income/>
            <Stat label="Estimated Tax" value=result highlight=true/>
            <p class="muted">"5% on income above the exempt limit. Indicative only."</p>
            <ErrorNote error=Signal::derive(move || error_text(&outcome.get()))/>
        </ToolLayout>
    }
}

// =============================================================================
// CURRENCY
// =============================================================================

#[component]
fn CurrencyTool() -> impl IntoView {
    let session = expect_context::<Session>();
    let default_from = session.currency.get_untracked().code();
    let amount = text("1");
    let from = text(default_from);
    let to = text(CurrencyCode::Eur.code());
    let outcome = Signal::derive(move || {
        let from: CurrencyCode = from.get().parse()?;
        let to: CurrencyCode = to.get().parse()?;
        Ok::<_, ToolError>((from, to, convert_currency(number("Amount", amount)?, from, to)?))
    });
    let result = Signal::derive(move || shown(&outcome.get(), |(_, _, value)| format!("{value:.2}")));
    let formatted = Signal::derive(move || shown(&outcome.get(), |(_, to, value)| to.format_amount(*value)));
    let rate_line = Signal::derive(move || {
        shown(&outcome.get(), |(from, to, _)| {
            format!("1 {} = {:.4} {}", from.code(), to.usd_rate() / from.usd_rate(), to.code())
        })
    });
    let on_reset = Callback::new(move |()| {
        amount.set("1".into());
        from.set(session.currency.get_untracked().code().to_owned());
        to.set(CurrencyCode::Eur.code().to_owned());
    });
    let options: Vec<(String, String)> =
        CurrencyCode::ALL.iter().map(|c| (c.code().to_owned(), c.code().to_owned())).collect();

    view! {
        <ToolLayout
            id="currency"
            name="Currency Converter"
            category=CATEGORY
            description="Convert between major world currencies."
            result=result
            on_reset=on_reset
        >
            <div class="grid grid--3">
                <Field label="Amount" value=amount/>
                <Choice label="From" value=from options=options.clone()/>
                <Choice label="To" value=to options=options/>
            </div>
            <Stat label="Converted" value=formatted highlight=true/>
            <p class="muted">{move || rate_line.get()}</p>
            <ErrorNote error=Signal::derive(move || error_text(&outcome.get()))/>
        </ToolLayout>
    }
}
