//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the one [`AppStores`] instance from browser storage and
//! provides it, plus a [`Session`] of signals mirrored from it, to every
//! route.
//!
//! TRADE-OFFS
//! ==========
//! Stored values only exist in the browser, so the server renders a loading
//! placeholder and the routed content mounts after hydration. This keeps
//! the server markup identical to what the client hydrates.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};
use toolkit::currency::CurrencyCode;

use crate::components::layout::Layout;
use crate::pages::{
    about::AboutPage,
    ai_tools::AiToolsPage,
    converters::ConvertersPage,
    daily::DailyPage,
    dashboard::DashboardPage,
    developer::DeveloperPage,
    finance::FinancePage,
    home::HomePage,
    legal::{LegalDoc, LegalPage},
    personal::PersonalPage,
    productivity::ProductivityPage,
    sign_in::SignInPage,
    student::StudentPage,
    support::{SupportKind, SupportPage},
};
use crate::state::AppStores;
use crate::state::history::HistoryItem;
use crate::state::prefs::{Language, Theme, apply_theme};
use crate::state::profile::UserProfile;
use crate::state::recents::RecentTool;
use crate::util::reactive::watch;
use crate::util::storage::Store;

/// Signals mirrored from [`AppStores`] for rendering.
///
/// Writes always go through the stores; these follow automatically.
#[derive(Clone, Copy, Debug)]
pub struct Session {
    pub profile: ReadSignal<Option<UserProfile>>,
    pub theme: ReadSignal<Theme>,
    pub language: ReadSignal<Language>,
    pub currency: ReadSignal<CurrencyCode>,
    pub favorites: ReadSignal<Vec<String>>,
    pub history: ReadSignal<Vec<HistoryItem>>,
    pub recents: ReadSignal<Vec<RecentTool>>,
}

impl Session {
    pub fn new(stores: &AppStores) -> Self {
        Self {
            profile: watch(&stores.profile.current),
            theme: watch(&stores.prefs.theme),
            language: watch(&stores.prefs.language),
            currency: watch(&stores.prefs.currency),
            favorites: watch(&stores.favorites.ids),
            history: watch(&stores.history.items),
            recents: watch(&stores.recents.items),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.profile.with(Option::is_some)
    }

    /// Format money in the selected display currency.
    pub fn money(&self, amount: f64) -> String {
        self.currency.get().format_amount(amount)
    }

    pub fn t(&self, key: &str) -> String {
        self.language.get().t(key)
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let stores = AppStores::load(&Store::browser());
    let session = Session::new(&stores);
    provide_context(stores.clone());
    provide_context(session);

    Effect::new(move || apply_theme(session.theme.get()));

    // Another tab changed storage: pick up its profile and preferences.
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::storage, move |_| stores.reload());
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = stores;

    let mounted = RwSignal::new(false);
    Effect::new(move || mounted.set(true));

    view! {
        <Stylesheet id="leptos" href="/pkg/wisetools.css"/>
        <Title text="WiseTools Hub"/>

        <Router>
            <Show when=move || mounted.get() fallback=LoadingFallback>
                <Layout>
                    <Routes fallback=|| view! { <Redirect path="/"/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("signin") view=SignInPage/>
                        <Route path=StaticSegment("dashboard") view=DashboardPage/>
                        <Route path=StaticSegment("about") view=AboutPage/>
                        <Route path=StaticSegment("finance") view=FinancePage/>
                        <Route path=StaticSegment("student") view=StudentPage/>
                        <Route path=StaticSegment("productivity") view=ProductivityPage/>
                        <Route path=StaticSegment("daily") view=DailyPage/>
                        <Route path=StaticSegment("personal") view=PersonalPage/>
                        <Route path=StaticSegment("developer") view=DeveloperPage/>
                        <Route path=StaticSegment("converters") view=ConvertersPage/>
                        <Route path=StaticSegment("ai") view=AiToolsPage/>

                        <Route path=StaticSegment("help-center") view=|| view! { <SupportPage kind=SupportKind::Help/> }/>
                        <Route path=StaticSegment("faq") view=|| view! { <SupportPage kind=SupportKind::Faq/> }/>
                        <Route path=StaticSegment("contact") view=|| view! { <SupportPage kind=SupportKind::Contact/> }/>
                        <Route path=StaticSegment("report-bug") view=|| view! { <SupportPage kind=SupportKind::Bug/> }/>
                        <Route
                            path=StaticSegment("request-feature")
                            view=|| view! { <SupportPage kind=SupportKind::Feature/> }
                        />
                        <Route path=(StaticSegment("support"), ParamSegment("type")) view=|| view! { <SupportPage/> }/>

                        <Route path=StaticSegment("privacy-policy") view=|| view! { <LegalPage doc=LegalDoc::Privacy/> }/>
                        <Route path=StaticSegment("terms-of-service") view=|| view! { <LegalPage doc=LegalDoc::Terms/> }/>
                        <Route path=StaticSegment("cookie-policy") view=|| view! { <LegalPage doc=LegalDoc::Cookies/> }/>
                        <Route path=StaticSegment("disclaimer") view=|| view! { <LegalPage doc=LegalDoc::Disclaimer/> }/>
                    </Routes>
                </Layout>
            </Show>
        </Router>
    }
}

#[component]
fn LoadingFallback() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading__spinner"></div>
            <p class="loading__text">"Loading WiseTools..."</p>
        </div>
    }
}
