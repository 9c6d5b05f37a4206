//! Support pages: help center, FAQ, contact, bug reports, feature requests.
//!
//! Routes either pin a kind (`/faq`) or pass it as a path segment
//! (`/support/:type`). A pinned kind wins over the segment.

use std::str::FromStr;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::layout::BackButton;

#[cfg(test)]
#[path = "support_test.rs"]
mod support_test;

pub const SUPPORT_EMAIL: &str = "support@wisecrewsolutions.com";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SupportKind {
    #[default]
    Help,
    Faq,
    Contact,
    Bug,
    Feature,
}

impl SupportKind {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Help => "Help Center",
            Self::Faq => "Frequently Asked Questions",
            Self::Contact => "Contact Us",
            Self::Bug => "Report a Bug",
            Self::Feature => "Request a Feature",
        }
    }

    #[must_use]
    pub fn blurb(self) -> &'static str {
        match self {
            Self::Help => "Find guides and tutorials on how to use our calculators and tools.",
            Self::Faq => "Answers to common questions about accounts, privacy, and tool accuracy.",
            Self::Contact => "Reach out to our support team for assistance.",
            Self::Bug => "Found something broken? Let us know and we'll fix it.",
            Self::Feature => "Have an idea for a new tool? We'd love to hear it!",
        }
    }
}

impl FromStr for SupportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "help" | "help-center" => Ok(Self::Help),
            "faq" => Ok(Self::Faq),
            "contact" => Ok(Self::Contact),
            "bug" | "report-bug" => Ok(Self::Bug),
            "feature" | "request-feature" => Ok(Self::Feature),
            other => Err(format!("unknown support page: {other}")),
        }
    }
}

/// The kind to show: an explicit kind, else the route segment, else help.
#[must_use]
pub fn resolve_kind(explicit: Option<SupportKind>, segment: Option<&str>) -> SupportKind {
    explicit.or_else(|| segment.and_then(|s| s.parse().ok())).unwrap_or_default()
}

#[component]
pub fn SupportPage(#[prop(optional)] kind: Option<SupportKind>) -> impl IntoView {
    let params = use_params_map();
    let resolved = move || resolve_kind(kind, params.with(|p| p.get("type")).as_deref());

    view! {
        <div class="page page--narrow">
            <BackButton/>
            <article class="card support">
                <h1>{move || resolved().title()}</h1>
                <p class="muted">{move || resolved().blurb()}</p>
                <div class="panel panel--notice">
                    <p>"This feature is coming soon."</p>
                    <p>
                        "Contact: " <a href=format!("mailto:{SUPPORT_EMAIL}")>{SUPPORT_EMAIL}</a>
                    </p>
                </div>
            </article>
        </div>
    }
}
