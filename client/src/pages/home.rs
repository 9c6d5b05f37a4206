//! Landing page: hero search, recent tools, category grid, trending tools.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::Session;
use crate::util::catalog::{HOME_FILTERS, TRENDING_TOOLS, filter_categories};
use crate::util::routing::{DASHBOARD_PATH, search_destination};

/// How many recent tools the "pick up where you left off" row shows.
const RECENT_LIMIT: usize = 4;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let query = RwSignal::new(String::new());
    let filter = RwSignal::new("All");

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let q = query.get();
        if q.trim().is_empty() {
            return;
        }
        navigate(search_destination(&q), NavigateOptions::default());
    };
    let recents = move || session.recents.with(|r| r.iter().take(RECENT_LIMIT).cloned().collect::<Vec<_>>());

    view! {
        <div class="home">
            <section class="hero">
                <span class="hero__badge">"The Ultimate Tool Collection"</span>
                <h1 class="hero__title">"WiseTools " <span class="hero__accent">"Hub"</span></h1>
                <p class="hero__lead">
                    "Empower your daily life with our suite of smart calculators, converters, and AI-driven assistants."
                </p>
                <form class="hero__search" on:submit=on_search>
                    <input
                        type="search"
                        placeholder="What tool do you need today?"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </form>
                <div class="hero__actions">
                    <a class="button button--primary" href="/finance">"Explore Tools →"</a>
                    <a class="button" href=DASHBOARD_PATH>"My Dashboard"</a>
                </div>
            </section>

            <Show when=move || !session.recents.with(Vec::is_empty)>
                <section class="section">
                    <h2 class="section__title">"Pick up where you left off"</h2>
                    <div class="grid grid--4">
                        <For
                            each=recents
                            key=|tool| tool.id.clone()
                            children=|tool| {
                                view! {
                                    <a class="chip-card" href=tool.path.clone()>
                                        {tool.name.clone()}
                                    </a>
                                }
                            }
                        />
                    </div>
                </section>
            </Show>

            <section class="section">
                <div class="section__header">
                    <div>
                        <h2 class="section__title">"Browse Categories"</h2>
                        <p class="muted">"Find the perfect tool for your needs"</p>
                    </div>
                    <div class="chips">
                        {HOME_FILTERS
                            .iter()
                            .map(|&name| {
                                view! {
                                    <button
                                        class="chip"
                                        class:chip--active=move || filter.get() == name
                                        on:click=move |_| filter.set(name)
                                    >
                                        {name}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="grid grid--3">
                    {move || {
                        filter_categories(filter.get())
                            .into_iter()
                            .map(|c| {
                                view! {
                                    <a class="category-card" href=c.path>
                                        <h3>{c.title}</h3>
                                        <p class="muted">{c.summary}</p>
                                        <span class="category-card__count">{format!("{} tools", c.tools.len())}</span>
                                    </a>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>

            <section class="section">
                <h2 class="section__title">"Trending Tools"</h2>
                <div class="grid grid--3">
                    {TRENDING_TOOLS
                        .iter()
                        .map(|&(name, path, label)| {
                            view! {
                                <a class="trend-card" href=path>
                                    <span class="trend-card__initial">{name.chars().next().unwrap_or(' ').to_string()}</span>
                                    <div>
                                        <h4>{name}</h4>
                                        <p class="muted">{label}</p>
                                    </div>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
