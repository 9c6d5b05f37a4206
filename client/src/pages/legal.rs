//! Static legal documents: privacy, terms, cookies, disclaimer.
//!
//! DESIGN
//! ======
//! Each document is a flat list of [`Block`]s so the page renders every
//! document with one loop and the content stays greppable in one place.

use leptos::prelude::*;

use crate::components::layout::BackButton;
use crate::pages::support::SUPPORT_EMAIL;

const LAST_UPDATED: &str = "December 2025";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegalDoc {
    Privacy,
    Terms,
    Cookies,
    Disclaimer,
}

/// One piece of a legal document. Bullets are `(bold lead, rest)`; an
/// empty lead renders plain text.
#[derive(Clone, Copy, Debug)]
pub enum Block {
    Para(&'static str),
    Heading(&'static str),
    Bullets(&'static [(&'static str, &'static str)]),
    Warning(&'static str),
    Contact,
}

const PRIVACY: &[Block] = &[
    Block::Para(
        "WiseTools Hub (\"we\", \"our\", \"us\") provides utility tools for personal, academic, and professional use. \
         This Privacy Policy explains how we collect, use, and protect your data.",
    ),
    Block::Heading("1. Data We Collect"),
    Block::Bullets(&[
        ("Personal info (only when you log in):", "name, email, preferences."),
        ("Non-personal info:", "device, browser, tool usage patterns."),
        ("Cookies:", "for theme, login session, and preferences."),
        ("", "No sensitive data collected (no bank details, passwords, Aadhaar, etc.)."),
    ]),
    Block::Heading("2. How We Use Data"),
    Block::Bullets(&[
        ("", "Provide tool functionality."),
        ("", "Improve UI and performance."),
        ("", "Save history and preferences (only for logged-in users)."),
        ("", "Analytics to improve user experience."),
        ("", "We NEVER sell or share your data."),
    ]),
    Block::Heading("3. Cookies"),
    Block::Para(
        "Used for personalization, theme settings, and login. Can be disabled anytime via your browser settings.",
    ),
    Block::Heading("4. Security"),
    Block::Para("We use encryption, secure tokens, and restricted access to protect your information."),
    Block::Heading("5. Third-Party Services"),
    Block::Para("We may use services like Google Analytics and optional login providers to enhance functionality."),
    Block::Heading("6. User Rights"),
    Block::Para("You may request deletion, view, or modification of your data at any time."),
    Block::Heading("7. Contact"),
    Block::Contact,
];

const TERMS: &[Block] = &[
    Block::Para("By using WiseTools Hub, you agree to the following terms:"),
    Block::Heading("1. Platform Usage"),
    Block::Para("Tools are provided for convenience. Do not misuse or attempt unauthorized access to our services."),
    Block::Heading("2. Accounts"),
    Block::Para("Login is optional. Users are responsible for keeping their credentials secure."),
    Block::Heading("3. Accuracy"),
    Block::Para(
        "Tools provide estimates only. WiseTools Hub is not liable for any loss based on tool results or calculations.",
    ),
    Block::Heading("4. Ownership"),
    Block::Para("Logos, UI, tool logic, and site content belong to WiseCrew Solutions."),
    Block::Heading("5. Liability"),
    Block::Para("We provide services \"as is\" without warranties of any kind."),
    Block::Heading("6. Changes"),
    Block::Para("We may update tools, features, or terms at any time without prior notice."),
];

const COOKIES: &[Block] = &[
    Block::Para("We use cookies to improve your experience on WiseTools Hub. Here is how we use them:"),
    Block::Heading("Types of Cookies"),
    Block::Bullets(&[
        ("Essential:", "Required for login, security, and basic site functionality."),
        ("Preferences:", "Store your theme choice (Light/Dark) and language settings."),
        ("Analytics:", "Help us understand how users interact with our tools to improve them."),
    ]),
    Block::Para(
        "Users may disable cookies in their browser settings, but please note that some features \
         (like saved history or themes) may not work correctly.",
    ),
];

const DISCLAIMER: &[Block] = &[
    Block::Warning("Please read carefully before using our financial or health tools."),
    Block::Para("WiseTools Hub provides general-purpose calculators and utilities for informational purposes only."),
    Block::Bullets(&[
        (
            "",
            "Results from financial tools (EMI, SIP, Tax) may not be 100% accurate due to changing market conditions \
             or regulations. They should not be considered as professional financial advice.",
        ),
        ("", "Health tools (BMI, etc.) are estimates and should not replace professional medical advice."),
        ("", "Use all tools at your own risk. We do not provide financial, legal, or academic guarantees."),
    ]),
];

impl LegalDoc {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Privacy => "Privacy Policy",
            Self::Terms => "Terms of Service",
            Self::Cookies => "Cookie Policy",
            Self::Disclaimer => "Disclaimer",
        }
    }

    /// The disclaimer is undated.
    #[must_use]
    pub fn last_updated(self) -> Option<&'static str> {
        match self {
            Self::Disclaimer => None,
            _ => Some(LAST_UPDATED),
        }
    }

    #[must_use]
    pub fn blocks(self) -> &'static [Block] {
        match self {
            Self::Privacy => PRIVACY,
            Self::Terms => TERMS,
            Self::Cookies => COOKIES,
            Self::Disclaimer => DISCLAIMER,
        }
    }
}

fn render_block(block: Block) -> AnyView {
    match block {
        Block::Para(text) => view! { <p>{text}</p> }.into_any(),
        Block::Heading(text) => view! { <h3>{text}</h3> }.into_any(),
        Block::Bullets(items) => view! {
            <ul class="legal__list">
                {items
                    .iter()
                    .map(|&(lead, rest)| {
                        view! {
                            <li>
                                {(!lead.is_empty()).then(|| view! { <strong>{lead}</strong> " " })}
                                {rest}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
        Block::Warning(text) => view! {
            <div class="panel panel--warning">
                <strong>"Important:"</strong> " " {text}
            </div>
        }
        .into_any(),
        Block::Contact => view! {
            <p>
                "If you have any questions, please contact us at "
                <a href=format!("mailto:{SUPPORT_EMAIL}")>{SUPPORT_EMAIL}</a> "."
            </p>
        }
        .into_any(),
    }
}

#[component]
pub fn LegalPage(doc: LegalDoc) -> impl IntoView {
    view! {
        <div class="page page--narrow">
            <BackButton/>
            <article class="card legal">
                <h1>{doc.title()}</h1>
                {doc.last_updated().map(|date| view! { <p class="muted">{format!("Last updated: {date}")}</p> })}
                <div class="legal__body">{doc.blocks().iter().copied().map(render_block).collect_view()}</div>
            </article>
        </div>
    }
}
