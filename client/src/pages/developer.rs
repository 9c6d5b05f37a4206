//! Developer utilities: data conversion, Base64, QR codes, passwords,
//! colors, and regex testing.

use leptos::prelude::*;
use toolkit::developer::{
    DataDirection, INVALID_INPUT, MAX_PASSWORD_LEN, MIN_PASSWORD_LEN, Rgb, base64_decode, base64_encode, convert_data,
    generate_password, qr_code_url, regex_matches,
};

use crate::components::fields::{ErrorNote, Field, TabBar, count, error_text, text};
use crate::components::tool_layout::ToolLayout;
use crate::util::catalog::DEVELOPER;
use crate::util::ids;

const CATEGORY: &str = "developer";

#[component]
pub fn DeveloperPage() -> impl IntoView {
    let active = RwSignal::new(DEVELOPER.first_tool());

    view! {
        <div class="page">
            <TabBar tabs=DEVELOPER.tools active=active/>
            {move || match active.get() {
                "base64" => view! { <Base64Tool/> }.into_any(),
                "qr" => view! { <QrTool/> }.into_any(),
                "pass" => view! { <PasswordTool/> }.into_any(),
                "color" => view! { <ColorTool/> }.into_any(),
                "regex" => view! { <RegexTool/> }.into_any(),
                _ => view! { <DataConverterTool/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn DataConverterTool() -> impl IntoView {
    let direction = RwSignal::new(DataDirection::JsonToCsv);
    let input = text("");
    let output = RwSignal::new(String::new());
    let source = move || if direction.get() == DataDirection::JsonToCsv { "JSON" } else { "CSV" };
    let switch = move |_| {
        direction.update(|d| {
            *d = match d {
                DataDirection::JsonToCsv => DataDirection::CsvToJson,
                DataDirection::CsvToJson => DataDirection::JsonToCsv,
            };
        });
    };
    let on_convert = move |_| output.set(convert_data(direction.get_untracked(), &input.get_untracked()));

    view! {
        <ToolLayout
            id="json-csv"
            name="JSON <> CSV Converter"
            category=CATEGORY
            description="Convert data formats instantly."
            result=Signal::derive(String::new)
        >
            <div class="grid grid--2">
                <div class="editor">
                    <div class="editor__header">
                        <label>"Input"</label>
                        <button class="link-button" on:click=switch>
                            {move || {
                                if direction.get() == DataDirection::JsonToCsv {
                                    "Switch to CSV -> JSON"
                                } else {
                                    "Switch to JSON -> CSV"
                                }
                            }}
                        </button>
                    </div>
                    <textarea
                        class="editor__area"
                        placeholder=move || format!("Paste {} here...", source())
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="editor">
                    <label>"Output"</label>
                    <textarea class="editor__area" readonly prop:value=move || output.get()></textarea>
                </div>
            </div>
            <div class="form-row form-row--end">
                <button class="button button--primary" on:click=on_convert>"Convert"</button>
            </div>
        </ToolLayout>
    }
}

#[component]
fn Base64Tool() -> impl IntoView {
    let decode = RwSignal::new(false);
    let input = text("");
    let output = Signal::derive(move || {
        let raw = input.get();
        if decode.get() { base64_decode(&raw).unwrap_or_else(|_| INVALID_INPUT.to_owned()) } else { base64_encode(&raw) }
    });

    view! {
        <ToolLayout
            id="base64"
            name="Base64 Converter"
            category=CATEGORY
            description="Encode or decode strings."
            result=Signal::derive(String::new)
        >
            <div class="segmented">
                <button
                    class="segmented__option"
                    class:segmented__option--active=move || !decode.get()
                    on:click=move |_| decode.set(false)
                >
                    "Encode"
                </button>
                <button
                    class="segmented__option"
                    class:segmented__option--active=move || decode.get()
                    on:click=move |_| decode.set(true)
                >
                    "Decode"
                </button>
            </div>
            <textarea
                class="editor__area"
                placeholder="Input"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            ></textarea>
            <textarea class="editor__area" readonly prop:value=move || output.get()></textarea>
        </ToolLayout>
    }
}

#[component]
fn QrTool() -> impl IntoView {
    let input = text("");
    let url = RwSignal::new(None::<String>);
    let on_create = move |_| {
        if let Some(next) = qr_code_url(&input.get_untracked()) {
            url.set(Some(next));
        }
    };

    view! {
        <ToolLayout
            id="qr-gen"
            name="QR Code Generator"
            category=CATEGORY
            description="Create QR codes for links, text, or wifi."
            result=Signal::derive(String::new)
        >
            <div class="form-row">
                <Field label="Content" value=input kind="text" placeholder="Enter URL or Text"/>
                <button class="button button--primary" on:click=on_create>"Create"</button>
            </div>
            {move || {
                url.get()
                    .map(|src| {
                        view! {
                            <div class="qr">
                                <img src=src alt="QR Code" width="192" height="192"/>
                            </div>
                        }
                    })
            }}
        </ToolLayout>
    }
}

#[component]
fn PasswordTool() -> impl IntoView {
    let length = text("12");
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let on_generate = move |_| {
        let generated = length.with_untracked(|l| count("Length", l)).and_then(|n| {
            let n = usize::try_from(n).unwrap_or(MAX_PASSWORD_LEN + 1);
            generate_password(n, &mut ids::seeded_rng())
        });
        match generated {
            Ok(p) => {
                password.set(p);
                error.set(None);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };
    let on_reset = Callback::new(move |()| {
        password.set(String::new());
        error.set(None);
    });

    view! {
        <ToolLayout
            id="pass-gen"
            name="Strong Password Generator"
            category=CATEGORY
            description="Create secure passwords locally."
            result=password
            on_reset=on_reset
        >
            <Field label=format!("Length ({MIN_PASSWORD_LEN}-{MAX_PASSWORD_LEN})") value=length/>
            <button class="button button--primary button--wide" on:click=on_generate>"Generate Password"</button>
            <Show when=move || !password.with(String::is_empty)>
                <p class="password">{move || password.get()}</p>
            </Show>
            <ErrorNote error=error/>
        </ToolLayout>
    }
}

#[component]
fn ColorTool() -> impl IntoView {
    let hex = text("#38bdf8");
    let color = Signal::derive(move || hex.with(|h| Rgb::from_hex(h)));

    view! {
        <ToolLayout
            id="color"
            name="Color Picker"
            category=CATEGORY
            description="Pick colors and get codes."
            result=Signal::derive(String::new)
        >
            <div class="color">
                <input
                    type="color"
                    class="color__swatch"
                    prop:value=move || hex.get()
                    on:input=move |ev| hex.set(event_target_value(&ev))
                />
                <p class="figure">{move || color.get().map(Rgb::to_hex).unwrap_or_default()}</p>
                <p class="muted">{move || color.get().map(Rgb::to_css_rgb).unwrap_or_default()}</p>
            </div>
            <ErrorNote error=Signal::derive(move || error_text(&color.get()))/>
        </ToolLayout>
    }
}

#[component]
fn RegexTool() -> impl IntoView {
    let pattern = text("");
    let sample = text("");
    let outcome = Signal::derive(move || regex_matches(&pattern.get(), &sample.get()).map_err(|e| e.to_string()));
    let matched = move || outcome.with(|o| matches!(o, Ok(true)));

    view! {
        <ToolLayout
            id="regex"
            name="Regex Tester"
            category=CATEGORY
            description="Test regular expressions."
            result=Signal::derive(String::new)
        >
            <Field label="Pattern" value=pattern kind="text" placeholder="Regex (e.g., ^[a-z]+$)"/>
            <Field label="Test String" value=sample kind="text"/>
            <div class="match" class:match--found=matched>
                {move || if matched() { "Match Found" } else { "No Match" }}
            </div>
            <ErrorNote
                error=Signal::derive(move || if pattern.with(String::is_empty) { None } else { error_text(&outcome.get()) })
            />
        </ToolLayout>
    }
}
