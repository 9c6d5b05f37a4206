//! Site chrome: header navigation, search, preference toggles, and footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every route. Reads the [`Session`] for the signed-in state, theme,
//! and language, and writes preference changes through [`AppStores`].

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::Session;
use crate::state::AppStores;
use crate::state::gamification::level_progress_percent;
use crate::state::prefs::Theme;
use crate::util::catalog::{CATEGORIES, FOOTER_LEGAL, FOOTER_SUPPORT, NAV_LINKS};
use crate::util::routing::{DASHBOARD_PATH, SIGN_IN_PATH, search_destination};

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let stores = expect_context::<AppStores>();
    let session = expect_context::<Session>();
    let location = use_location();
    let navigate = use_navigate();

    let query = RwSignal::new(String::new());
    let menu_open = RwSignal::new(false);

    // Close the mobile menu and jump to the top on navigation.
    let pathname = location.pathname;
    Effect::new(move || {
        pathname.track();
        menu_open.set(false);
        #[cfg(feature = "hydrate")]
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let destination = search_destination(&query.get());
        navigate(destination, NavigateOptions::default());
        query.set(String::new());
        menu_open.set(false);
    };

    let prefs = stores.prefs.clone();
    let on_language = move |_| {
        prefs.cycle_language();
    };
    let prefs = stores.prefs.clone();
    let on_theme = move |_| {
        prefs.cycle_theme();
    };

    let is_active = move |path: &'static str| pathname.with(|p| p == path);

    view! {
        <div class="app-shell">
            <header class="navbar">
                <a href="/" class="navbar__brand">
                    <span class="navbar__logo">"W"</span>
                    <span class="navbar__title">"WiseTools Hub"</span>
                </a>

                <form class="navbar__search" on:submit=on_search>
                    <input
                        type="search"
                        placeholder="Search tools (e.g. Loan, BMI)..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </form>

                <button class="navbar__menu" on:click=move |_| menu_open.update(|open| *open = !*open)>
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>

                <nav class="navbar__links" class:navbar__links--open=move || menu_open.get()>
                    <Show when=move || session.is_authenticated()>
                        <a
                            href=DASHBOARD_PATH
                            class="navbar__link"
                            class:navbar__link--active=move || is_active(DASHBOARD_PATH)
                        >
                            {move || session.t("Dashboard")}
                        </a>
                    </Show>
                    {NAV_LINKS
                        .iter()
                        .map(|&(name, path)| {
                            view! {
                                <a href=path class="navbar__link" class:navbar__link--active=move || is_active(path)>
                                    {name}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="navbar__actions">
                    <Show when=move || session.is_authenticated()>
                        <XpDisplay/>
                    </Show>
                    <button
                        class="icon-button"
                        on:click=on_language
                        title=move || format!("Language: {}", session.language.get().code().to_uppercase())
                    >
                        {move || session.language.get().code().to_uppercase()}
                    </button>
                    <button
                        class="icon-button icon-button--theme"
                        on:click=on_theme
                        title=move || format!("Theme: {}", session.theme.get().css_class())
                    >
                        {move || if session.theme.get() == Theme::Light { "☀" } else { "☾" }}
                    </button>
                    <Show
                        when=move || session.is_authenticated()
                        fallback=|| view! { <a href=SIGN_IN_PATH class="button button--primary">"Sign In"</a> }
                    >
                        <a href=DASHBOARD_PATH class="avatar" title="Dashboard">
                            {move || session.profile.get().map(|p| p.initial()).unwrap_or_default()}
                        </a>
                    </Show>
                </div>
            </header>

            <main class="app-main">{children()}</main>

            <footer class="footer">
                <div class="footer__brand">
                    <h3>"WiseTools Hub"</h3>
                    <p>"Smart tools for everyday calculations, study, and work."</p>
                </div>
                <FooterColumn
                    title="Categories"
                    links=CATEGORIES.iter().map(|c| (c.title, c.path)).collect()
                />
                <FooterColumn title="Support" links=FOOTER_SUPPORT.to_vec()/>
                <FooterColumn title="Legal" links=FOOTER_LEGAL.to_vec()/>
                <p class="footer__copy">
                    "© WiseTools Hub. " <a href="/about">"About"</a>
                </p>
            </footer>
        </div>
    }
}

#[component]
fn FooterColumn(title: &'static str, links: Vec<(&'static str, &'static str)>) -> impl IntoView {
    view! {
        <div class="footer__column">
            <h4>{title}</h4>
            <ul>
                {links
                    .into_iter()
                    .map(|(name, path)| view! { <li><a href=path>{name}</a></li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// Level badge and progress toward the next level.
#[component]
pub fn XpDisplay() -> impl IntoView {
    let session = expect_context::<Session>();
    let xp = move || session.profile.get().map_or(0, |p| p.xp);
    let level = move || session.profile.get().map_or(1, |p| p.level);

    view! {
        <div class="xp" title=move || format!("{} XP", xp())>
            <span class="xp__level">{move || format!("Lvl {}", level())}</span>
            <span class="xp__bar">
                <span
                    class="xp__fill"
                    style:width=move || format!("{:.0}%", level_progress_percent(xp()))
                ></span>
            </span>
            <span class="xp__points">{move || format!("{} XP", xp())}</span>
        </div>
    }
}

/// Steps back through browser history, or home when there is nowhere to go.
#[component]
pub fn BackButton() -> impl IntoView {
    let navigate = use_navigate();
    let on_back = move |_| {
        #[cfg(feature = "hydrate")]
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok())
            && history.length().unwrap_or(0) > 1
        {
            let _ = history.back();
            return;
        }
        navigate("/", NavigateOptions::default());
    };

    view! {
        <button class="link-button back-button" on:click=on_back>
            "← Back"
        </button>
    }
}
