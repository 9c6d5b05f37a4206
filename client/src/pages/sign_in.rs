//! Simulated sign-in and sign-up. No credentials are checked; submitting
//! creates a local profile and returns to the page that asked for it.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::AppStores;
use crate::state::profile::ProfilePatch;
use crate::util::routing::resolve_return_path;

const BENEFITS: &[&str] = &[
    "Sync your settings across devices",
    "Track your streaks and earn XP",
    "Save your tool results and history",
    "Access personalized dashboard analytics",
    "Pin your favorite tools for quick access",
];

#[component]
pub fn SignInPage() -> impl IntoView {
    let stores = expect_context::<AppStores>();
    let navigate = use_navigate();
    let query = use_query_map();

    let is_signup = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let profile = stores.profile.login(&name.get());
        let email_value = email.get().trim().to_owned();
        if !email_value.is_empty() {
            stores.profile.update(ProfilePatch { email: Some(email_value), ..ProfilePatch::default() });
        }
        log::info!("signed in as {}", profile.name);
        let target = resolve_return_path(query.with_untracked(|q| q.get("redirect")).as_deref());
        navigate(&target, NavigateOptions::default());
    };

    view! {
        <div class="sign-in">
            <section class="sign-in__pitch">
                <h1>"Unlock the full power of " <span class="hero__accent">"WiseTools"</span></h1>
                <p class="muted">"Create a free account to get a personalized experience and keep your data safe."</p>
                <ul class="checklist">
                    {BENEFITS.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}
                </ul>
                <blockquote class="testimonial">
                    "WiseTools Hub is the best all-in-one utility platform I've used. The student tools saved my semester!"
                    <cite>"Alex T., Student"</cite>
                </blockquote>
            </section>

            <section class="card sign-in__form">
                <h2>{move || if is_signup.get() { "Create Account" } else { "Welcome Back" }}</h2>
                <p class="muted">
                    {move || {
                        if is_signup.get() {
                            "Join thousands of users today."
                        } else {
                            "Sign in to access your dashboard."
                        }
                    }}
                </p>
                <form on:submit=on_submit>
                    <Show when=move || is_signup.get()>
                        <input
                            class="input"
                            placeholder="Full Name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="input"
                        type="email"
                        placeholder="Email Address"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="button button--primary button--wide" type="submit">
                        {move || if is_signup.get() { "Sign Up" } else { "Sign In" }}
                    </button>
                </form>
                <p class="muted">
                    {move || if is_signup.get() { "Already have an account? " } else { "Don't have an account? " }}
                    <button class="link-button" on:click=move |_| is_signup.update(|s| *s = !*s)>
                        {move || if is_signup.get() { "Sign In" } else { "Sign Up" }}
                    </button>
                </p>
            </section>
        </div>
    }
}
