//! Personal utilities: trip fuel cost and electricity bill.

use leptos::prelude::*;
use toolkit::personal::{FREE_UNITS, RATE_PER_UNIT, electricity_bill, fuel_cost};

use crate::app::Session;
use crate::components::fields::{ErrorNote, Field, Stat, TabBar, error_text, number, shown, text};
use crate::components::tool_layout::ToolLayout;
use crate::util::catalog::PERSONAL;

const CATEGORY: &str = "personal";

#[component]
pub fn PersonalPage() -> impl IntoView {
    let active = RwSignal::new(PERSONAL.first_tool());

    view! {
        <div class="page">
            <TabBar tabs=PERSONAL.tools active=active/>
            {move || match active.get() {
                "bill" => view! { <ElectricityBillTool/> }.into_any(),
                _ => view! { <FuelCostTool/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn FuelCostTool() -> impl IntoView {
    let session = expect_context::<Session>();
    let distance = text("100");
    let mileage = text("15");
    let price = text("100");
    let outcome = Signal::derive(move || {
        fuel_cost(number("Distance (km)", distance)?, number("Mileage (km/l)", mileage)?, number("Fuel Price", price)?)
    });
    let result = Signal::derive(move || shown(&outcome.get(), |cost| session.money(*cost)));
    let on_reset = Callback::new(move |()| {
        distance.set("100".into());
        mileage.set("15".into());
        price.set("100".into());
    });

    view! {
        <ToolLayout
            id="fuel-cost"
            name="Trip Cost Calculator"
            category=CATEGORY
            description="Estimate fuel cost for a journey."
            result=result
            on_reset=on_reset
        >
            <div class="grid grid--3">
                <Field label="Distance (km)" value=distance/>
                <Field label="Mileage (km/l)" value=mileage/>
                <Field label="Fuel Price (per litre)" value=price/>
            </div>
            <Stat label="Estimated Trip Cost" value=result highlight=true/>
            <ErrorNote error=Signal::derive(move || error_text(&outcome.get()))/>
        </ToolLayout>
    }
}

#[component]
fn ElectricityBillTool() -> impl IntoView {
    let session = expect_context::<Session>();
    let units = text("250");
    let outcome = Signal::derive(move || electricity_bill(number("Units Consumed", units)?));
    let result = Signal::derive(move || shown(&outcome.get(), |bill| session.money(bill.amount)));
    let on_reset = Callback::new(move |()| units.set("250".into()));

    view! {
        <ToolLayout
            id="electricity-bill"
            name="Electricity Bill Estimator"
            category=CATEGORY
            description="Estimate your monthly bill from units consumed."
            result=result
            on_reset=on_reset
        >
            <Field label="Units Consumed (kWh)" value=units/>
            <div class="grid grid--2">
                <Stat
                    label="Billable Units"
                    value=Signal::derive(move || shown(&outcome.get(), |bill| bill.billable_units.to_string()))
                />
                <Stat label="Estimated Bill" value=result highlight=true/>
            </div>
            <p class="muted">
                {move || format!("First {FREE_UNITS} units free, then {} per unit.", session.money(RATE_PER_UNIT))}
            </p>
            <ErrorNote error=Signal::derive(move || error_text(&outcome.get()))/>
        </ToolLayout>
    }
}
