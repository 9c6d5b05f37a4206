//! Unit converters for length, weight, temperature, speed, and pressure.

use leptos::prelude::*;
use toolkit::convert::{Category, ConvertError, Unit, convert, format_converted};

use crate::components::fields::{Choice, ErrorNote, Field, Stat, TabBar, error_text, number, shown, text};
use crate::components::tool_layout::ToolLayout;
use crate::util::catalog::CONVERTERS;

#[component]
pub fn ConvertersPage() -> impl IntoView {
    let active = RwSignal::new(CONVERTERS.first_tool());

    view! {
        <div class="page">
            <TabBar tabs=CONVERTERS.tools active=active/>
            {move || {
                let category = category_for_tab(active.get());
                view! { <UnitConverter category=category/> }
            }}
        </div>
    }
}

fn category_for_tab(tab: &str) -> Category {
    match tab {
        "weight" => Category::Weight,
        "temp" => Category::Temperature,
        "speed" => Category::Speed,
        "pressure" => Category::Pressure,
        _ => Category::Length,
    }
}

#[component]
fn UnitConverter(category: Category) -> impl IntoView {
    let (default_from, default_to) = category.default_pair();
    let value = text("1");
    let from = text(default_from.symbol());
    let to = text(default_to.symbol());

    let outcome = Signal::derive(move || {
        let input = number("Value", value).map_err(|e| e.to_string())?;
        let from: Unit = from.get().parse().map_err(|e: ConvertError| e.to_string())?;
        let to: Unit = to.get().parse().map_err(|e: ConvertError| e.to_string())?;
        convert(input, from, to).map(|out| (to, out)).map_err(|e| e.to_string())
    });
    let result = Signal::derive(move || shown(&outcome.get(), |(_, out)| format_converted(*out)));
    let display = Signal::derive(move || shown(&outcome.get(), |(to, out)| format!("{} {to}", format_converted(*out))));
    let on_reset = Callback::new(move |()| {
        value.set("1".into());
        from.set(default_from.symbol().to_owned());
        to.set(default_to.symbol().to_owned());
    });
    let options: Vec<(String, String)> =
        category.units().iter().map(|u| (u.symbol().to_owned(), u.symbol().to_owned())).collect();
    let name = match category {
        Category::Length => "Length Converter",
        Category::Weight => "Weight Converter",
        Category::Speed => "Speed Converter",
        Category::Pressure => "Pressure Converter",
        Category::Temperature => "Temperature Converter",
    };

    view! {
        <ToolLayout
            id=converter_id(category)
            name=name
            category="converters"
            description="Convert between common units."
            result=result
            on_reset=on_reset
        >
            <div class="grid grid--3">
                <Field label="Value" value=value/>
                <Choice label="From" value=from options=options.clone()/>
                <Choice label="To" value=to options=options/>
            </div>
            <Stat label=category.label() value=display highlight=true/>
            <ErrorNote error=Signal::derive(move || error_text(&outcome.get()))/>
        </ToolLayout>
    }
}

fn converter_id(category: Category) -> &'static str {
    match category {
        Category::Length => "length-converter",
        Category::Weight => "weight-converter",
        Category::Speed => "speed-converter",
        Category::Pressure => "pressure-converter",
        Category::Temperature => "temperature-converter",
    }
}
