//! Chrome shared by every tool view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every calculator renders inside a `ToolLayout`. The layout owns the side
//! effects a tool result triggers so the calculators stay pure:
//!
//! - once per mount, the tool is registered in recents;
//! - each time `result` changes to a new recordable value, it is logged to
//!   history and 10 points are awarded;
//! - share (+5) and PDF export (+15) award points only when the browser
//!   call succeeds.
//!
//! Guests get none of the logging or points; the stores enforce that.

use leptos::prelude::*;
use toolkit::report::{ToolReport, share_text};

use crate::app::Session;
use crate::state::gamification::XpAward;
use crate::state::{AppStores, is_recordable_result};
use crate::util::export::{current_url, download, share};
use crate::util::ids;
use crate::util::routing::category_label;

const SHARE_TITLE: &str = "WiseTools Hub";

#[component]
pub fn ToolLayout(
    id: &'static str,
    name: &'static str,
    category: &'static str,
    #[prop(optional)] description: &'static str,
    #[prop(into)] result: Signal<String>,
    #[prop(optional)] on_reset: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let stores = expect_context::<AppStores>();
    let session = expect_context::<Session>();
    let notice = RwSignal::new(None::<&'static str>);

    stores.visit_tool(id, name, &format!("/{category}"));

    let last_recorded = StoredValue::new(String::new());
    let record_stores = stores.clone();
    Effect::new(move || {
        let value = result.get();
        if last_recorded.with_value(|last| *last == value) {
            return;
        }
        record_stores.record_result(id, name, &value, ids::now());
        last_recorded.set_value(value);
    });

    let is_favorite = move || session.favorites.with(|ids| ids.iter().any(|f| f == id));
    let favorite_stores = stores.clone();
    let on_favorite = move |_| {
        favorite_stores.favorites.toggle(id);
    };

    let share_stores = stores.clone();
    let on_share = move |_| {
        let url = current_url();
        let text = share_text(name, &result.get_untracked(), &url);
        let stores = share_stores.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match share(SHARE_TITLE, &text, &url).await {
                Ok(outcome) => {
                    stores.profile.award_xp(XpAward::Shared);
                    let _ = notice.try_set(Some(outcome.notice()));
                }
                Err(e) => {
                    log::warn!("share failed: {e}");
                    let _ = notice.try_set(Some("Could not share this result."));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (text, url, stores, share, SHARE_TITLE);
        }
    };

    let export_stores = stores.clone();
    let on_export = move |_| {
        let report = ToolReport::new(name, result.get_untracked(), ids::now());
        match download(&report.file_name(), &report.to_pdf()) {
            Ok(()) => {
                export_stores.profile.award_xp(XpAward::Exported);
                notice.set(Some("Report downloaded."));
            }
            Err(e) => {
                log::warn!("export failed: {e}");
                notice.set(Some("Could not export the report."));
            }
        }
    };

    let on_reset_click = move |_| {
        notice.set(None);
        if let Some(on_reset) = on_reset.as_ref() {
            on_reset.run(());
        }
    };

    let has_result = move || result.with(|r| is_recordable_result(r));

    view! {
        <section class="tool">
            <nav class="breadcrumb" aria-label="Breadcrumb">
                <a href="/">"Home"</a>
                <span class="breadcrumb__sep">"›"</span>
                <a href=format!("/{category}")>{category_label(category)}</a>
                <span class="breadcrumb__sep">"›"</span>
                <span class="breadcrumb__current">{name}</span>
            </nav>

            <header class="tool__header">
                <div>
                    <h2 class="tool__title">{name}</h2>
                    <Show when=move || !description.is_empty()>
                        <p class="tool__description">{description}</p>
                    </Show>
                </div>
                <div class="tool__actions">
                    <Show when=move || session.is_authenticated()>
                        <button
                            class="icon-button"
                            class:icon-button--active=is_favorite
                            title=move || if is_favorite() { "Remove from favorites" } else { "Add to favorites" }
                            on:click=on_favorite.clone()
                        >
                            {move || if is_favorite() { "★" } else { "☆" }}
                        </button>
                    </Show>
                    <Show when=move || on_reset.is_some()>
                        <button class="icon-button" title="Reset" on:click=on_reset_click>
                            "↺"
                        </button>
                    </Show>
                    <button class="icon-button" title="Share" disabled=move || !has_result() on:click=on_share>
                        "⇪"
                    </button>
                    <button class="icon-button" title="Export PDF" disabled=move || !has_result() on:click=on_export>
                        "⤓"
                    </button>
                </div>
            </header>

            <Show when=move || notice.get().is_some()>
                <p class="tool__notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>

            <div class="tool__body">{children()}</div>
        </section>
    }
}
