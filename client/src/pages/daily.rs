//! Daily-life calculators: age, dates, percentages, BMI, bills.

use leptos::prelude::*;
use toolkit::ToolError;
use toolkit::daily::{
    BmiCategory, age_on, bmi, days_between, discount, life_progress, parse_iso_date, percent_of, percent_ratio,
    split_bill, year_progress,
};

use crate::components::fields::{ErrorNote, Field, Stat, TabBar, count, error_text, number, shown, text};
use crate::components::tool_layout::ToolLayout;
use crate::util::catalog::DAILY;
use crate::util::ids;

const CATEGORY: &str = "daily";

#[component]
pub fn DailyPage() -> impl IntoView {
    let active = RwSignal::new(DAILY.first_tool());

    view! {
        <div class="page">
            <TabBar tabs=DAILY.tools active=active/>
            {move || match active.get() {
                "date" => view! { <DateDiffTool/> }.into_any(),
                "percent" => view! { <PercentTool/> }.into_any(),
                "discount" => view! { <DiscountTool/> }.into_any(),
                "bmi" => view! { <BmiTool/> }.into_any(),
                "bill" => view! { <BillSplitTool/> }.into_any(),
                "life" => view! { <LifeProgressTool/> }.into_any(),
                _ => view! { <AgeTool/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn AgeTool() -> impl IntoView {
    let birth = text("");
    let outcome = Signal::derive(move || age_on(birth.with(|b| parse_iso_date("Date of Birth", b))?, ids::today()));
    let result = Signal::derive(move || shown(&outcome.get(), |age| format!("{} yrs", age.years)));
    let on_reset = Callback::new(move |()| birth.set(String::new()));
    // A blank date is the initial state, not an error.
    let error = Signal::derive(move || if birth.with(String::is_empty) { None } else { error_text(&outcome.get()) });

    view! {
        <ToolLayout
            id="age-calc"
            name="Age Calculator"
            category=CATEGORY
            description="Calculate your exact age in years, months, and days."
            result=result
            on_reset=on_reset
        >
            <Field label="Date of Birth" value=birth kind="date"/>
            <Show
                when=move || outcome.with(Result::is_ok)
                fallback=|| view! { <p class="muted">"Select a date to see the magic."</p> }
            >
                <div class="panel panel--center">
                    <p class="figure">{move || shown(&outcome.get(), |a| a.years.to_string())}</p>
                    <p class="figure__caption">"Years Old"</p>
                    <p class="muted">
                        {move || shown(&outcome.get(), |a| format!("{} Months · {} Days", a.months, a.days))}
                    </p>
                </div>
            </Show>
            <ErrorNote error=error/>
        </ToolLayout>
    }
}

#[component]
fn DateDiffTool() -> impl IntoView {
    let start = text("");
    let end = text("");
    let outcome = Signal::derive(move || {
        let start = start.with(|d| parse_iso_date("Start Date", d))?;
        let end = end.with(|d| parse_iso_date("End Date", d))?;
        Ok::<_, ToolError>(days_between(start, end).abs())
    });
    let result = Signal::derive(move || shown(&outcome.get(), |days| format!("{days} days")));

    view! {
        <ToolLayout
            id="date-calc"
            name="Date Difference"
            category=CATEGORY
            description="Calculate days between two dates."
            result=result
        >
            <div class="grid grid--2">
                <div>
                    <Field label="Start Date" value=start kind="date"/>
                    <Field label="End Date" value=end kind="date"/>
                </div>
                <Stat label="Difference" value=result highlight=true/>
            </div>
        </ToolLayout>
    }
}

#[component]
fn PercentTool() -> impl IntoView {
    let a = text("50");
    let b = text("100");
    let share = Signal::derive(move || percent_of(number("Percent", a)?, number("Value", b)?));
    let ratio = Signal::derive(move || percent_ratio(number("Percent", a)?, number("Value", b)?));
    let result = Signal::derive(move || shown(&share.get(), |v| format!("{v:.2}")));

    view! {
        <ToolLayout
            id="percent-calc"
            name="Percentage Calculator"
            category=CATEGORY
            description="Simple percentage calculations."
            result=result
        >
            <div class="panel">
                <h3>{move || format!("What is {}% of {}?", a.get(), b.get())}</h3>
                <div class="form-row">
                    <Field label="Percent" value=a/>
                    <Field label="Of" value=b/>
                </div>
                <p class="figure">{move || format!("= {}", result.get())}</p>
            </div>
            <div class="panel">
                <h3>{move || format!("{} is what % of {}?", a.get(), b.get())}</h3>
                <p class="figure">{move || shown(&ratio.get(), |v| format!("= {v:.2}%"))}</p>
            </div>
            <ErrorNote error=Signal::derive(move || error_text(&share.get()).or_else(|| error_text(&ratio.get())))/>
        </ToolLayout>
    }
}

#[component]
fn DiscountTool() -> impl IntoView {
    let price = text("1000");
    let pct = text("20");
    let outcome = Signal::derive(move || discount(number("Original Price", price)?, number("Discount (%)", pct)?));
    let result = Signal::derive(move || shown(&outcome.get(), |d| format!("{:.2}", d.final_price)));

    view! {
        <ToolLayout
            id="discount-calc"
            name="Discount Calculator"
            category=CATEGORY
            description="Calculate sale price."
            result=result
        >
            <div class="grid grid--2">
                <div>
                    <Field label="Original Price" value=price/>
                    <Field label="Discount (%)" value=pct/>
                </div>
                <div>
                    <Stat label="Final Price" value=result highlight=true/>
                    <Stat label="You Save" value=Signal::derive(move || shown(&outcome.get(), |d| format!("{:.2}", d.saved)))/>
                </div>
            </div>
            <ErrorNote error=Signal::derive(move || error_text(&outcome.get()))/>
        </ToolLayout>
    }
}

fn bmi_class(category: BmiCategory) -> &'static str {
    match category {
        BmiCategory::Underweight => "bmi--under",
        BmiCategory::Normal => "bmi--normal",
        BmiCategory::Overweight => "bmi--over",
        BmiCategory::Obese => "bmi--obese",
    }
}

#[component]
fn BmiTool() -> impl IntoView {
    let weight = text("70");
    let height = text("170");
    let outcome = Signal::derive(move || bmi(number("Weight (kg)", weight)?, number("Height (cm)", height)?));
    let result = Signal::derive(move || shown(&outcome.get(), |r| format!("{:.1}", r.bmi)));
    let on_reset = Callback::new(move |()| {
        weight.set("70".into());
        height.set("170".into());
    });

    view! {
        <ToolLayout
            id="bmi-calc"
            name="BMI Calculator"
            category=CATEGORY
            description="Check your Body Mass Index health status."
            result=result
            on_reset=on_reset
        >
            <div class="grid grid--2">
                <div>
                    <Field label="Weight (kg)" value=weight/>
                    <Field label="Height (cm)" value=height/>
                </div>
                <div class=move || {
                    let band = outcome.get().map(|r| bmi_class(r.category)).unwrap_or_default();
                    format!("panel panel--center {band}")
                }>
                    <p class="muted">"Your BMI Score"</p>
                    <p class="figure">{move || result.get()}</p>
                    <p>{move || shown(&outcome.get(), |r| r.category.label().to_owned())}</p>
                    <div class="gauge">
                        <div
                            class="gauge__marker"
                            style:left=move || format!("{:.1}%", outcome.get().map(|r| r.gauge_percent()).unwrap_or_default())
                        ></div>
                    </div>
                </div>
            </div>
            <ErrorNote error=Signal::derive(move || error_text(&outcome.get()))/>
        </ToolLayout>
    }
}

#[component]
fn BillSplitTool() -> impl IntoView {
    let amount = text("100");
    let people = text("2");
    let tip = text("10");
    let outcome = Signal::derive(move || {
        split_bill(number("Total Amount", amount)?, people.with(|p| count("People", p))?, number("Tip %", tip)?)
    });
    let result = Signal::derive(move || shown(&outcome.get(), |s| format!("{:.2}", s.per_person)));
    let on_reset = Callback::new(move |()| {
        amount.set("100".into());
        people.set("2".into());
        tip.set("10".into());
    });

    view! {
        <ToolLayout
            id="split-bill"
            name="Split Bill"
            category=CATEGORY
            description="Easily split expenses with friends."
            result=result
            on_reset=on_reset
        >
            <div class="grid grid--2">
                <div>
                    <Field label="Total Amount" value=amount/>
                    <Field label="People" value=people/>
                    <Field label="Tip %" value=tip/>
                </div>
                <div>
                    <Stat label="Each Person Pays" value=result highlight=true/>
                    <Stat
                        label="Total Bill including tip"
                        value=Signal::derive(move || shown(&outcome.get(), |s| format!("{:.2}", s.total)))
                    />
                </div>
            </div>
            <ErrorNote error=Signal::derive(move || error_text(&outcome.get()))/>
        </ToolLayout>
    }
}

#[component]
fn LifeProgressTool() -> impl IntoView {
    let birth = text("2000-01-01");
    let expectancy = text("80");
    let outcome = Signal::derive(move || {
        let birth = birth.with(|b| parse_iso_date("Birthday", b))?;
        let years = expectancy.with(|e| count("Life Expectancy", e))?;
        let years = u16::try_from(years).map_err(|_| ToolError::OutOfRange {
            field: "Life Expectancy",
            min: 1.0,
            max: f64::from(u16::MAX),
        })?;
        life_progress(birth, years, ids::today())
    });
    let year_done = Signal::derive(move || year_progress(ids::today()));
    let result = Signal::derive(move || shown(&outcome.get(), |p| format!("{p:.2}%")));
    let on_reset = Callback::new(move |()| {
        birth.set("2000-01-01".into());
        expectancy.set("80".into());
    });

    view! {
        <ToolLayout
            id="life-progress"
            name="Life Progress"
            category=CATEGORY
            description="Visualize time passing (Memento Mori)."
            result=result
            on_reset=on_reset
        >
            <div class="form-row">
                <Field label="Birthday" value=birth kind="date"/>
                <Field label="Expectancy" value=expectancy/>
            </div>
            <div class="progress">
                <div class="progress__label">
                    <span>"Life Completed"</span>
                    <span>{move || result.get()}</span>
                </div>
                <div class="progress__track">
                    <div class="progress__fill" style:width=move || format!("{:.2}%", outcome.get().unwrap_or_default())></div>
                </div>
            </div>
            <div class="progress">
                <div class="progress__label">
                    <span>"Year Completed"</span>
                    <span>{move || format!("{:.1}%", year_done.get())}</span>
                </div>
                <div class="progress__track">
                    <div class="progress__fill progress__fill--green" style:width=move || format!("{:.1}%", year_done.get())></div>
                </div>
            </div>
            <ErrorNote error=Signal::derive(move || error_text(&outcome.get()))/>
        </ToolLayout>
    }
}
