//! Student category: marks, grade points, attendance, and study trackers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Calculators are stateless and reset with the tool. Assignments persist in
//! local storage; the flashcard deck lives only for the visit. Project ideas
//! go through the AI proxy.

use std::time::Duration;

use leptos::prelude::*;
use toolkit::ToolError;
use toolkit::ai::{MENTOR_INSTRUCTION, project_ideas_prompt};
use toolkit::daily::parse_iso_date;
use toolkit::student::{
    ASSIGNMENT_MAX, ATTENDANCE_MARKS_MAX, Assignment, AssignmentStatus, FlashcardDeck, MID_TERM_MAX, SubjectGrade,
    attendance, cgpa, countdown, grade_target, internal_marks, sgpa,
};

use crate::components::fields::{ErrorNote, Field, Stat, TabBar, count, error_text, number, shown, text};
use crate::components::tool_layout::ToolLayout;
use crate::net::ai::{RequestSequencer, ask};
use crate::state::AppStores;
use crate::util::catalog::STUDENT;
use crate::util::ids;
use crate::util::reactive::{every, watch};

const CATEGORY: &str = "student";

#[component]
pub fn StudentPage() -> impl IntoView {
    let active = RwSignal::new(STUDENT.first_tool());

    view! {
        <div class="page">
            <TabBar tabs=STUDENT.tools active=active/>
            {move || match active.get() {
                "flashcard" => view! { <FlashcardTool/> }.into_any(),
                "assignments" => view! { <AssignmentTool/> }.into_any(),
                "ideas" => view! { <ProjectIdeasTool/> }.into_any(),
                "exam" => view! { <ExamCountdownTool/> }.into_any(),
                "sgpa" => view! { <SgpaTool/> }.into_any(),
                "cgpa" => view! { <CgpaTool/> }.into_any(),
                "attendance" => view! { <AttendanceTool/> }.into_any(),
                "grade" => view! { <GradeTargetTool/> }.into_any(),
                _ => view! { <InternalMarksTool/> }.into_any(),
            }}
        </div>
    }
}

// =============================================================================
// MARKS AND GRADES
// =============================================================================

#[component]
fn InternalMarksTool() -> impl IntoView {
    let assignments = text("20");
    let mid_term = text("40");
    let attended = text("5");
    let outcome = Signal::derive(move || {
        internal_marks(number("Assignments", assignments)?, number("Mid-Term", mid_term)?, number("Attendance", attended)?)
    });
    let result = Signal::derive(move || shown(&outcome.get(), |m| format!("{:.1}%", m.percentage)));
    let on_reset = Callback::new(move |()| {
        assignments.set("20".into());
        mid_term.set("40".into());
        attended.set("5".into());
    });

    view! {
        <ToolLayout
            id="internal-marks"
            name="Internal Marks Calculator"
            category=CATEGORY
            description="Calculate your internal assessment score."
            result=result
            on_reset=on_reset
        >
            <div class="grid grid--2">
                <div>
                    <Field label=format!("Assignments Score (max {ASSIGNMENT_MAX})") value=assignments/>
                    <Field label=format!("Mid-Term Score (max {MID_TERM_MAX})") value=mid_term/>
                    <Field label=format!("Attendance Score (max {ATTENDANCE_MARKS_MAX})") value=attended/>
                </div>
                <div class="panel panel--center">
                    <p class="figure">{move || shown(&outcome.get(), |m| m.total.to_string())}</p>
                    <p class="muted">{move || shown(&outcome.get(), |m| format!("out of {}", m.max))}</p>
                    <p class="figure__caption">{move || format!("{} Score", result.get())}</p>
                </div>
            </div>
            <ErrorNote error=Signal::derive(move || error_text(&outcome.get()))/>
        </ToolLayout>
    }
}

/// One editable row in a grade table.
#[derive(Clone, Copy)]
struct GradeRow {
    key: usize,
    credit: RwSignal<String>,
    grade: RwSignal<String>,
}

impl GradeRow {
    fn new(key: usize, credit: &str, grade: &str) -> Self {
        Self { key, credit: text(credit), grade: text(grade) }
    }
}

#[component]
fn SgpaTool() -> impl IntoView {
    let next_key = StoredValue::new(1_usize);
    let rows = RwSignal::new(vec![GradeRow::new(0, "3", "9")]);
    let outcome = Signal::derive(move || {
        let subjects = rows
            .get()
            .iter()
            .map(|row| Ok(SubjectGrade { credit: number("Credit", row.credit)?, grade: number("Grade", row.grade)? }))
            .collect::<Result<Vec<_>, ToolError>>()?;
        sgpa(&subjects)
    });
    let result = Signal::derive(move || shown(&outcome.get(), |v| format!("{v:.2}")));
    let add_row = move |_| {
        let key = next_key.get_value();
        next_key.set_value(key + 1);
        rows.update(|r| r.push(GradeRow::new(key, "3", "9")));
    };
    let on_reset = Callback::new(move |()| rows.set(vec![GradeRow::new(0, "3", "9")]));

    view! {
        <ToolLayout
            id="sgpa"
            name="SGPA Calculator"
            category=CATEGORY
            description="Calculate SGPA based on credits and grades."
            result=result
            on_reset=on_reset
        >
            <div class="table">
                <For
                    each=move || rows.get()
                    key=|row| row.key
                    children=move |row| {
                        view! {
                            <div class="form-row">
                                <Field label="Credits" value=row.credit/>
                                <Field label="Grade Point" value=row.grade/>
                                <button
                                    class="icon-button"
                                    title="Remove"
                                    on:click=move |_| rows.update(|r| r.retain(|x| x.key != row.key))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    }
                />
            </div>
            <button class="button" on:click=add_row>"+ Add Subject"</button>
            <Stat label="SGPA" value=result highlight=true/>
            <ErrorNote error=Signal::derive(move || error_text(&outcome.get()))/>
        </ToolLayout>
    }
}

#[component]
fn CgpaTool() -> impl IntoView {
    let next_key = StoredValue::new(1_usize);
    let semesters = RwSignal::new(vec![(0_usize, text("8.5"))]);
    let outcome = Signal::derive(move || {
        let values =
            semesters.get().iter().map(|(_, v)| number("SGPA", *v)).collect::<Result<Vec<_>, ToolError>>()?;
        cgpa(&values)
    });
    let result = Signal::derive(move || shown(&outcome.get(), |v| format!("{v:.2}")));
    let add_semester = move |_| {
        let key = next_key.get_value();
        next_key.set_value(key + 1);
        semesters.update(|s| s.push((key, text("8.5"))));
    };
    let on_reset = Callback::new(move |()| semesters.set(vec![(0, text("8.5"))]));

    view! {
        <ToolLayout
            id="cgpa"
            name="CGPA Calculator"
            category=CATEGORY
            description="Calculate Cumulative GPA across semesters."
            result=result
            on_reset=on_reset
        >
            <div class="grid grid--3">
                <For
                    each=move || { semesters.get().into_iter().enumerate().collect::<Vec<_>>() }
                    key=|(_, (key, _))| *key
                    children=move |(index, (_, value))| {
                        view! { <Field label=format!("Semester {}", index + 1) value=value/> }
                    }
                />
            </div>
            <button class="button" on:click=add_semester>"+ Add Semester"</button>
            <Stat label="CGPA" value=result highlight=true/>
            <ErrorNote error=Signal::derive(move || error_text(&outcome.get()))/>
        </ToolLayout>
    }
}

#[component]
fn GradeTargetTool() -> impl IntoView {
    let current = text("70");
    let weight = text("60");
    let target = text("80");
    let outcome = Signal::derive(move || {
        grade_target(number("Current Grade", current)?, number("Current Weight (%)", weight)?, number("Target Grade", target)?)
    });
    let result = Signal::derive(move || shown(&outcome.get(), |v| format!("{v:.1}")));
    let on_reset = Callback::new(move |()| {
        current.set("70".into());
        weight.set("60".into());
        target.set("80".into());
    });

    view! {
        <ToolLayout
            id="grade"
            name="Grade Target Calculator"
            category=CATEGORY
            description="What score do you need on your final exam?"
            result=result
            on_reset=on_reset
        >
            <div class="grid grid--3">
                <Field label="Current Grade (%)" value=current/>
                <Field label="Current Weight (%)" value=weight/>
                <Field label="Target Grade (%)" value=target/>
            </div>
            <Stat label="Needed on Final" value=Signal::derive(move || format!("{}%", result.get())) highlight=true/>
            <Show when=move || outcome.get().is_ok_and(|v| v > 100.0)>
                <p class="warning">"That target is out of reach with the remaining weight."</p>
            </Show>
            <ErrorNote error=Signal::derive(move || error_text(&outcome.get()))/>
        </ToolLayout>
    }
}

// =============================================================================
// ATTENDANCE AND EXAMS
// =============================================================================

#[component]
fn AttendanceTool() -> impl IntoView {
    let attended = text("20");
    let total = text("25");
    let outcome = Signal::derive(move || {
        attendance(attended.with(|a| count("Attended", a))?, total.with(|t| count("Total Classes", t))?)
    });
    let result = Signal::derive(move || shown(&outcome.get(), |a| format!("{:.1}%", a.percentage)));
    let on_reset = Callback::new(move |()| {
        attended.set("20".into());
        total.set("25".into());
    });

    view! {
        <ToolLayout
            id="attendance"
            name="Attendance Manager"
            category=CATEGORY
            description="Check if you can bunk or need to attend."
            result=result
            on_reset=on_reset
        >
            <div class="grid grid--2">
                <div>
                    <Field label="Classes Attended" value=attended/>
                    <Field label="Total Classes" value=total/>
                </div>
                <div class="panel panel--center">
                    <p class="figure">{move || result.get()}</p>
                    <p>
                        {move || match outcome.get() {
                            Ok(a) if a.is_safe() => format!("You can skip {} more classes.", a.can_skip),
                            Ok(a) => format!("Attend {} more classes to reach 75%.", a.must_attend),
                            Err(_) => String::new(),
                        }}
                    </p>
                </div>
            </div>
            <ErrorNote error=Signal::derive(move || error_text(&outcome.get()))/>
        </ToolLayout>
    }
}

#[component]
fn ExamCountdownTool() -> impl IntoView {
    let exam_date = text("");
    let clock = RwSignal::new(ids::now());
    every(Duration::from_secs(1), move || {
        let _ = clock.try_set(ids::now());
    });
    let left = Signal::derive(move || {
        let exam = exam_date.with(|d| parse_iso_date("Exam Date", d)).ok()?;
        countdown(exam.midnight().assume_utc(), clock.get())
    });
    let result = Signal::derive(move || left.get().map(|c| format!("{}d {}h", c.days, c.hours)).unwrap_or_default());
    let on_reset = Callback::new(move |()| exam_date.set(String::new()));

    view! {
        <ToolLayout
            id="exam-countdown"
            name="Exam Countdown"
            category=CATEGORY
            description="Track time remaining for your exams."
            result=result
            on_reset=on_reset
        >
            <Field label="Select Exam Date" value=exam_date kind="date"/>
            {move || match left.get() {
                Some(c) => view! {
                    <div class="grid grid--2">
                        <Stat label="Days" value=Signal::derive(move || c.days.to_string()) highlight=true/>
                        <Stat label="Hours" value=Signal::derive(move || c.hours.to_string())/>
                    </div>
                }
                    .into_any(),
                None => {
                    let message = if exam_date.with(String::is_empty) {
                        "Set a date to start countdown"
                    } else {
                        "Exam Finished! 🎉"
                    };
                    view! { <p class="empty">{message}</p> }.into_any()
                }
            }}
        </ToolLayout>
    }
}

// =============================================================================
// STUDY TRACKERS
// =============================================================================

#[component]
fn AssignmentTool() -> impl IntoView {
    let stores = expect_context::<AppStores>();
    let assignments = watch(&stores.assignments.items);
    let subject = text("");
    let title = text("");
    let due = text("");
    let form_error = RwSignal::new(None::<String>);

    let add_stores = stores.clone();
    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match Assignment::new(ids::new_id(), &subject.get(), &title.get(), due.get()) {
            Ok(a) => {
                add_stores.assignments.add(a);
                subject.set(String::new());
                title.set(String::new());
                due.set(String::new());
                form_error.set(None);
            }
            Err(e) => form_error.set(Some(e.to_string())),
        }
    };
    let row_stores = StoredValue::new(stores.clone());
    let on_toggle = Callback::new(move |id: String| {
        row_stores.with_value(|s| s.assignments.update(&id, Assignment::toggle));
    });
    let on_remove = Callback::new(move |id: String| {
        row_stores.with_value(|s| s.assignments.remove(&id));
    });
    let pending = Signal::derive(move || {
        assignments.with(|a| a.iter().filter(|x| x.status == AssignmentStatus::Pending).count()).to_string()
    });

    view! {
        <ToolLayout id="assignments" name="Assignment Tracker" category=CATEGORY description="Track due dates." result=pending>
            <form class="form-row" on:submit=on_add>
                <Field label="Subject" value=subject kind="text"/>
                <Field label="Title" value=title kind="text"/>
                <Field label="Due Date" value=due kind="date"/>
                <button class="button button--primary" type="submit">"Add"</button>
            </form>
            <ErrorNote error=form_error/>
            <Show when=move || !assignments.with(Vec::is_empty) fallback=|| view! { <p class="empty">"No assignments yet."</p> }>
                <ul class="list">
                    <For
                        each=move || assignments.get()
                        key=|a| (a.id.clone(), a.status == AssignmentStatus::Completed)
                        children=move |a| {
                            let done = a.status == AssignmentStatus::Completed;
                            let toggle_id = a.id.clone();
                            let remove_id = a.id.clone();
                            view! {
                                <li class="list__item" class:list__item--done=done>
                                    <label class="checkbox">
                                        <input type="checkbox" prop:checked=done on:change=move |_| on_toggle.run(toggle_id.clone())/>
                                        <strong>{a.title.clone()}</strong>
                                    </label>
                                    <span class="muted">{format!("{} · due {}", a.subject, a.due_date)}</span>
                                    <button class="icon-button" title="Delete" on:click=move |_| on_remove.run(remove_id.clone())>
                                        "✕"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </ToolLayout>
    }
}

#[component]
fn FlashcardTool() -> impl IntoView {
    let deck = RwSignal::new(FlashcardDeck::default());
    let question = text("");
    let answer = text("");
    let form_error = RwSignal::new(None::<String>);

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut added = Ok(());
        deck.update(|d| added = d.add(&question.get_untracked(), &answer.get_untracked()));
        match added {
            Ok(()) => {
                question.set(String::new());
                answer.set(String::new());
                form_error.set(None);
            }
            Err(e) => form_error.set(Some(e.to_string())),
        }
    };

    view! {
        <ToolLayout
            id="flashcard"
            name="Flashcard Creator"
            category=CATEGORY
            description="Study efficiently with cards."
            result=Signal::derive(String::new)
        >
            <button class="flashcard" on:click=move |_| deck.update(FlashcardDeck::flip)>
                {move || deck.with(FlashcardDeck::face)}
            </button>
            <div class="form-row form-row--center">
                <button class="button" on:click=move |_| deck.update(FlashcardDeck::prev)>"Prev"</button>
                <span class="muted">
                    {move || {
                        let (at, of) = deck.with(FlashcardDeck::position);
                        format!("{at} / {of}")
                    }}
                </span>
                <button class="button" on:click=move |_| deck.update(FlashcardDeck::next)>"Next"</button>
            </div>
            <form class="form-row" on:submit=on_add>
                <Field label="Question" value=question kind="text"/>
                <Field label="Answer" value=answer kind="text"/>
                <button class="button button--primary" type="submit">"Add Card"</button>
            </form>
            <ErrorNote error=form_error/>
        </ToolLayout>
    }
}

#[component]
fn ProjectIdeasTool() -> impl IntoView {
    let domain = text("");
    let ideas = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let sequencer = StoredValue::new(RequestSequencer::new());

    let on_generate = move |_| {
        if let Some(prompt) = project_ideas_prompt(&domain.get_untracked()) {
            sequencer.with_value(|seq| ask(seq, prompt, Some(MENTOR_INSTRUCTION), loading, ideas));
        }
    };
    let on_reset = Callback::new(move |()| {
        sequencer.with_value(RequestSequencer::invalidate);
        domain.set(String::new());
        ideas.set(String::new());
        loading.set(false);
    });

    view! {
        <ToolLayout
            id="project-ideas"
            name="Project Idea Generator"
            category=CATEGORY
            description="Get unique project ideas with AI."
            result=Signal::derive(String::new)
            on_reset=on_reset
        >
            <div class="form-row">
                <Field label="Domain" value=domain kind="text" placeholder="e.g. IoT, Web Dev, AI"/>
                <button
                    class="button button--primary"
                    disabled=move || loading.get() || domain.with(|d| d.trim().is_empty())
                    on:click=on_generate
                >
                    {move || if loading.get() { "Generating..." } else { "Generate Ideas" }}
                </button>
            </div>
            <Show when=move || !ideas.with(String::is_empty)>
                <div class="panel panel--prose">{move || ideas.get()}</div>
            </Show>
        </ToolLayout>
    }
}
