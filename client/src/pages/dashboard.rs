//! Signed-in dashboard: profile card, level progress, favorites, recents,
//! and result history.
//!
//! Guests are sent to the sign-in page with a return path back here.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::Session;
use crate::components::fields::CurrencySelect;
use crate::state::AppStores;
use crate::state::gamification::level_progress_percent;
use crate::state::profile::ProfilePatch;
use crate::util::catalog::tool_path;
use crate::util::routing::{DASHBOARD_PATH, HOME_PATH, sign_in_url};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let stores = expect_context::<AppStores>();
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    // Set on sign-out so the guard sends the user home instead of to sign-in.
    let signed_out = RwSignal::new(false);
    Effect::new(move || {
        if session.is_authenticated() {
            return;
        }
        if signed_out.get() {
            navigate(HOME_PATH, NavigateOptions::default());
        } else {
            navigate(&sign_in_url(DASHBOARD_PATH), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let editing = RwSignal::new(false);
    let logout_stores = stores.clone();
    let on_logout = Callback::new(move |()| {
        signed_out.set(true);
        logout_stores.profile.logout();
    });
    let name_stores = stores.clone();
    let on_name = Callback::new(move |name: String| {
        name_stores.profile.update(ProfilePatch { name: Some(name), ..ProfilePatch::default() });
    });
    let recents_stores = stores.clone();
    let on_clear_recents = Callback::new(move |()| recents_stores.recents.clear());
    let history_stores = stores.clone();
    let on_clear_history = Callback::new(move |()| history_stores.history.clear());

    let xp = move || session.profile.with(|p| p.as_ref().map_or(0, |p| p.xp));
    let favorite_link = move |id: &str| {
        session
            .recents
            .with(|r| r.iter().find(|t| t.id == id).map(|t| t.path.clone()))
            .or_else(|| tool_path(id).map(str::to_owned))
            .unwrap_or_else(|| HOME_PATH.to_owned())
    };

    view! {
        <Show when=move || session.is_authenticated()>
            <div class="dashboard">
                <header class="page__header">
                    <div>
                        <h1>{move || session.t("Dashboard")}</h1>
                        <p class="muted">"Manage your preferences and saved tools."</p>
                    </div>
                    <div class="form-row">
                        <button class="button button--danger" on:click=move |_| on_logout.run(())>"Sign Out"</button>
                        <button class="button" on:click=move |_| editing.update(|e| *e = !*e)>
                            {move || if editing.get() { "Done Editing" } else { "Edit Profile" }}
                        </button>
                    </div>
                </header>

                <div class="grid grid--sidebar">
                    <aside class="card profile-card">
                        <div class="avatar avatar--large">
                            {move || session.profile.with(|p| p.as_ref().map(|p| p.initial()).unwrap_or_default())}
                        </div>
                        <Show
                            when=move || editing.get()
                            fallback=move || {
                                view! {
                                    <h2>{move || session.profile.with(|p| p.as_ref().map(|p| p.name.clone()).unwrap_or_default())}</h2>
                                    <div class="chips">
                                        <span class="badge">
                                            {move || session.profile.with(|p| p.as_ref().map(|p| p.role.clone()).unwrap_or_default())}
                                        </span>
                                        <span class="badge">{move || session.currency.get().code()}</span>
                                    </div>
                                }
                            }
                        >
                            <input
                                class="input"
                                placeholder="Your Name"
                                prop:value=move || session.profile.with(|p| p.as_ref().map(|p| p.name.clone()).unwrap_or_default())
                                on:change=move |ev| on_name.run(event_target_value(&ev))
                            />
                            <CurrencySelect/>
                        </Show>
                        <div class="level">
                            <div class="level__label">
                                <span>{move || session.profile.with(|p| format!("Level {}", p.as_ref().map_or(1, |p| p.level)))}</span>
                                <span>{move || format!("{} XP", xp())}</span>
                            </div>
                            <div class="progress__track">
                                <div class="progress__fill" style:width=move || format!("{:.0}%", level_progress_percent(xp()))></div>
                            </div>
                        </div>
                        <dl class="profile-card__stats">
                            <dt>"Favorites"</dt>
                            <dd>{move || session.favorites.with(Vec::len)}</dd>
                            <dt>"Recent Tools"</dt>
                            <dd>{move || session.recents.with(Vec::len)}</dd>
                            <dt>"Results Saved"</dt>
                            <dd>{move || session.history.with(Vec::len)}</dd>
                        </dl>
                    </aside>

                    <div class="dashboard__content">
                        <section>
                            <h2 class="section__title">"Your Favorite Tools"</h2>
                            <Show
                                when=move || !session.favorites.with(Vec::is_empty)
                                fallback=|| view! { <p class="empty">"No favorites yet. Star tools to see them here."</p> }
                            >
                                <div class="grid grid--2">
                                    <For
                                        each=move || session.favorites.get()
                                        key=Clone::clone
                                        children=move |id| {
                                            let href = favorite_link(&id);
                                            view! {
                                                <div class="panel panel--favorite">
                                                    <span class="capitalize">{id.replace('-', " ")}</span>
                                                    <a class="button button--small" href=href>"Open"</a>
                                                </div>
                                            }
                                        }
                                    />
                                </div>
                            </Show>
                        </section>

                        <section>
                            <div class="section__header">
                                <h2 class="section__title">"Recently Used"</h2>
                                <Show when=move || !session.recents.with(Vec::is_empty)>
                                    <button class="link-button link-button--danger" on:click=move |_| on_clear_recents.run(())>
                                        "Clear History"
                                    </button>
                                </Show>
                            </div>
                            <Show
                                when=move || !session.recents.with(Vec::is_empty)
                                fallback=|| view! { <p class="empty">"No recent activity."</p> }
                            >
                                <ul class="list">
                                    <For
                                        each=move || session.recents.get()
                                        key=|t| t.id.clone()
                                        children=|tool| {
                                            view! {
                                                <li class="list__item">
                                                    <a href=tool.path.clone()>{tool.name.clone()}</a>
                                                    <span class="muted">"Last used recently"</span>
                                                </li>
                                            }
                                        }
                                    />
                                </ul>
                            </Show>
                        </section>

                        <section>
                            <div class="section__header">
                                <h2 class="section__title">"Result History"</h2>
                                <Show when=move || !session.history.with(Vec::is_empty)>
                                    <button class="link-button link-button--danger" on:click=move |_| on_clear_history.run(())>
                                        "Clear"
                                    </button>
                                </Show>
                            </div>
                            <Show
                                when=move || !session.history.with(Vec::is_empty)
                                fallback=|| view! { <p class="empty">"Results you calculate will appear here."</p> }
                            >
                                <ul class="list">
                                    <For
                                        each=move || session.history.get()
                                        key=|h| h.id.clone()
                                        children=|item| {
                                            view! {
                                                <li class="list__item">
                                                    <strong>{item.tool_name.clone()}</strong>
                                                    <span>{item.result.clone()}</span>
                                                </li>
                                            }
                                        }
                                    />
                                </ul>
                            </Show>
                        </section>
                    </div>
                </div>
            </div>
        </Show>
    }
}
