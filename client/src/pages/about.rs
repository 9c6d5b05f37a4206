//! About page: mission, vision, and a short timeline.

use leptos::prelude::*;

const MILESTONES: &[(&str, &str, &str)] = &[
    ("2023", "The Inception", "WiseTools concept was born from a need for better financial calculators."),
    ("2024", "Platform Launch", "Released the first version with core Finance and Student tools."),
    ("2025", "AI Integration", "Integrated Gemini AI to power smart writing and explanation tools."),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page about">
            <section class="hero">
                <h1 class="hero__title">"Empowering Your " <span class="hero__accent">"Digital Life"</span></h1>
                <p class="hero__lead">
                    "WiseTools Hub isn't just a calculator app. It's a comprehensive suite of smart utilities designed \
                     to simplify complex tasks in finance, education, and daily productivity."
                </p>
            </section>

            <div class="grid grid--2">
                <article class="card">
                    <h2>"Our Mission"</h2>
                    <p class="muted">
                        "To provide accessible, accurate, and beautiful tools that help people make better financial \
                         decisions, boost productivity, and solve daily problems instantly without friction."
                    </p>
                </article>
                <article class="card">
                    <h2>"Our Vision"</h2>
                    <p class="muted">
                        "We envision a world where essential digital utilities are unified in one premium, ad-free, and \
                         intelligent platform that adapts to the user's needs."
                    </p>
                </article>
            </div>

            <ol class="timeline">
                {MILESTONES
                    .iter()
                    .enumerate()
                    .map(|(i, &(year, title, desc))| {
                        view! {
                            <li class="timeline__item" class:timeline__item--flip=i % 2 == 1>
                                <span class="timeline__year">{year}</span>
                                <h3>{title}</h3>
                                <p class="muted">{desc}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>

            <p class="about__credit">"♥ Built with passion by " <strong>"WiseCrew Solutions"</strong></p>
        </div>
    }
}
