//! AI writing tools: rewriter, email drafts, topic explainer, resume bullets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Prompts are built in `toolkit::ai` and sent through the server proxy, so
//! no provider key ever reaches the browser. Tone and recipient are shared
//! across tabs; the reply is cleared whenever the tab changes.

use leptos::prelude::*;
use toolkit::ai::{AiTool, DEFAULT_RECIPIENT, PromptOptions, SYSTEM_INSTRUCTION, Tone};

use crate::components::fields::{Choice, Field, TabBar, text};
use crate::components::tool_layout::ToolLayout;
use crate::net::ai::{RequestSequencer, ask};
use crate::util::catalog::AI;
use crate::util::export::copy_text;

#[component]
pub fn AiToolsPage() -> impl IntoView {
    let active = RwSignal::new(AI.first_tool());
    let tone = text(Tone::default().label());
    let recipient = text(DEFAULT_RECIPIENT);
    let input = text("");

    view! {
        <div class="page">
            <TabBar tabs=AI.tools active=active/>
            {move || {
                let tool = active.get().parse::<AiTool>().unwrap_or_default();
                view! { <AiToolPanel tool=tool tone=tone recipient=recipient input=input/> }
            }}
        </div>
    }
}

fn layout_id(tool: AiTool) -> &'static str {
    match tool {
        AiTool::Rewrite => "ai-rewrite",
        AiTool::Email => "ai-email",
        AiTool::Explain => "ai-explain",
        AiTool::Resume => "ai-resume",
    }
}

#[component]
fn AiToolPanel(
    tool: AiTool,
    tone: RwSignal<String>,
    recipient: RwSignal<String>,
    input: RwSignal<String>,
) -> impl IntoView {
    let output = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let copied = RwSignal::new(false);
    let sequencer = StoredValue::new(RequestSequencer::new());
    on_cleanup(move || {
        let _ = sequencer.try_with_value(RequestSequencer::invalidate);
    });

    let on_generate = move |_| {
        let options = PromptOptions {
            tone: tone.get_untracked().parse().unwrap_or_default(),
            recipient: recipient.get_untracked(),
        };
        let Some(prompt) = tool.build_prompt(&input.get_untracked(), &options) else {
            return;
        };
        output.set(String::new());
        copied.set(false);
        sequencer.with_value(|seq| ask(seq, prompt, Some(SYSTEM_INSTRUCTION), loading, output));
    };
    let on_copy = move |_| {
        let text = output.get_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match copy_text(&text).await {
                Ok(()) => {
                    let _ = copied.try_set(true);
                }
                Err(e) => log::warn!("copy failed: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (text, copy_text);
        }
    };
    let tone_options: Vec<(String, String)> =
        Tone::ALL.iter().map(|t| (t.label().to_owned(), t.label().to_owned())).collect();

    view! {
        <ToolLayout
            id=layout_id(tool)
            name=tool.title()
            category="ai"
            description="Powered by Gemini AI"
            result=Signal::derive(String::new)
        >
            <div class="form-row">
                <Choice label="Tone" value=tone options=tone_options/>
                <Show when=move || tool.uses_recipient()>
                    <Field label="Recipient" value=recipient kind="text"/>
                </Show>
            </div>
            <textarea
                class="editor__area"
                placeholder=tool.placeholder()
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            ></textarea>
            <div class="form-row form-row--end">
                <button class="button button--primary" disabled=move || loading.get() on:click=on_generate>
                    {move || if loading.get() { "Generating..." } else { "Generate Magic" }}
                </button>
            </div>
            <Show when=move || !output.with(String::is_empty)>
                <div class="panel panel--prose">
                    <div class="panel__header">
                        <h3>"AI Result:"</h3>
                        <button class="icon-button" title="Copy" on:click=on_copy>
                            {move || if copied.get() { "✓" } else { "⧉" }}
                        </button>
                    </div>
                    <p class="prose">{move || output.get()}</p>
                </div>
            </Show>
        </ToolLayout>
    }
}
