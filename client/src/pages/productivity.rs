//! Productivity category: todos, time blocks, focus timer, goals, habits,
//! and the daily scratchpad.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists persist through the collection stores, so edits made here show up
//! in other tabs after their storage event. The pomodoro timer is view
//! state only and stops when the tab is switched.

use std::time::Duration;

use leptos::prelude::*;
use toolkit::daily::iso_date;
use toolkit::productivity::{
    BlockKind, Goal, Habit, Pomodoro, PomodoroMode, Priority, TimeBlock, Todo, insert_time_block, todo_checklist,
};
use toolkit::report::listing_pdf;

use crate::components::fields::{Choice, ErrorNote, Field, TabBar, text};
use crate::components::tool_layout::ToolLayout;
use crate::state::AppStores;
use crate::state::collections::NOTE_AUTOSAVE_MS;
use crate::util::catalog::PRODUCTIVITY;
use crate::util::confirm::{BulkReset, confirm_reset};
use crate::util::export::download;
use crate::util::ids;
use crate::util::reactive::{after, every, watch};

const CATEGORY: &str = "productivity";

#[component]
pub fn ProductivityPage() -> impl IntoView {
    let active = RwSignal::new(PRODUCTIVITY.first_tool());

    view! {
        <div class="page">
            <TabBar tabs=PRODUCTIVITY.tools active=active/>
            {move || match active.get() {
                "timeblock" => view! { <TimeBlockTool/> }.into_any(),
                "pomodoro" => view! { <PomodoroTool/> }.into_any(),
                "goals" => view! { <GoalTool/> }.into_any(),
                "habit" => view! { <HabitTool/> }.into_any(),
                "notes" => view! { <NotesTool/> }.into_any(),
                _ => view! { <TodoTool/> }.into_any(),
            }}
        </div>
    }
}

fn priority_from(label: &str) -> Priority {
    Priority::ALL.into_iter().find(|p| p.label() == label).unwrap_or_default()
}

fn block_kind_from(label: &str) -> BlockKind {
    BlockKind::ALL.into_iter().find(|k| k.label() == label).unwrap_or(BlockKind::Work)
}

fn block_class(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::Work => "block block--work",
        BlockKind::Break => "block block--break",
        BlockKind::Personal => "block block--personal",
    }
}

// =============================================================================
// TODOS
// =============================================================================

#[component]
fn TodoTool() -> impl IntoView {
    let stores = expect_context::<AppStores>();
    let todos = watch(&stores.todos.items);
    let input = text("");
    let priority = text(Priority::Medium.label());
    let form_error = RwSignal::new(None::<String>);

    let add_stores = stores.clone();
    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match Todo::new(ids::new_id(), &input.get(), priority_from(&priority.get())) {
            Ok(todo) => {
                add_stores.todos.add(todo);
                input.set(String::new());
                form_error.set(None);
            }
            Err(e) => form_error.set(Some(e.to_string())),
        }
    };
    let row_stores = StoredValue::new(stores.clone());
    let on_toggle = Callback::new(move |id: String| {
        row_stores.with_value(|s| s.todos.update(&id, |t| t.completed = !t.completed));
    });
    let on_remove = Callback::new(move |id: String| {
        row_stores.with_value(|s| s.todos.remove(&id));
    });
    let reset_stores = stores.clone();
    let on_reset = Callback::new(move |()| {
        confirm_reset(BulkReset::Todos, || reset_stores.todos.reset());
    });
    let on_pdf = move |_| {
        let lines = todos.with_untracked(|t| todo_checklist(t));
        if let Err(e) = download("todos.pdf", &listing_pdf("My To-Do List", &lines)) {
            log::warn!("todo export failed: {e}");
        }
    };
    let open_count = Signal::derive(move || todos.with(|t| t.iter().filter(|x| !x.completed).count()).to_string());
    let priority_options: Vec<(String, String)> =
        Priority::ALL.iter().map(|p| (p.label().to_owned(), p.label().to_owned())).collect();

    view! {
        <ToolLayout
            id="todo"
            name="Task Master"
            category=CATEGORY
            description="Stay organized with a clean, efficient to-do list."
            result=open_count
            on_reset=on_reset
        >
            <form class="form-row" on:submit=on_add>
                <Field label="Task" value=input kind="text" placeholder="Add a new task..."/>
                <Choice label="Priority" value=priority options=priority_options/>
                <button class="button button--primary" type="submit">"+"</button>
            </form>
            <ErrorNote error=form_error/>
            <Show
                when=move || !todos.with(Vec::is_empty)
                fallback=|| view! { <p class="empty">"No tasks yet. Add one above!"</p> }
            >
                <ul class="list">
                    <For
                        each=move || todos.get()
                        key=|t| (t.id.clone(), t.completed)
                        children=move |todo| {
                            let toggle_id = todo.id.clone();
                            let remove_id = todo.id.clone();
                            view! {
                                <li class="list__item" class:list__item--done=todo.completed>
                                    <label class="checkbox">
                                        <input
                                            type="checkbox"
                                            prop:checked=todo.completed
                                            on:change=move |_| on_toggle.run(toggle_id.clone())
                                        />
                                        {todo.text.clone()}
                                    </label>
                                    <span class="badge">{todo.priority.label()}</span>
                                    <button class="icon-button" title="Delete" on:click=move |_| on_remove.run(remove_id.clone())>
                                        "✕"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
                <div class="list-toolbar">
                    <button class="button" on:click=on_pdf>"Save as PDF"</button>
                </div>
            </Show>
        </ToolLayout>
    }
}

// =============================================================================
// TIME BLOCKS
// =============================================================================

#[component]
fn TimeBlockTool() -> impl IntoView {
    let stores = expect_context::<AppStores>();
    let blocks = watch(&stores.time_blocks.items);
    let time = text("09:00");
    let task = text("");
    let kind = text(BlockKind::Work.label());
    let form_error = RwSignal::new(None::<String>);

    let add_stores = stores.clone();
    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match TimeBlock::new(ids::new_id(), &time.get(), &task.get(), block_kind_from(&kind.get())) {
            Ok(block) => {
                let mut next = add_stores.time_blocks.items.get();
                insert_time_block(&mut next, block);
                add_stores.time_blocks.replace(next);
                task.set(String::new());
                form_error.set(None);
            }
            Err(e) => form_error.set(Some(e.to_string())),
        }
    };
    let remove_stores = StoredValue::new(stores.clone());
    let on_remove = Callback::new(move |id: String| {
        remove_stores.with_value(|s| s.time_blocks.remove(&id));
    });
    let kind_options: Vec<(String, String)> =
        BlockKind::ALL.iter().map(|k| (k.label().to_owned(), k.label().to_owned())).collect();

    view! {
        <ToolLayout
            id="time-blocking"
            name="Time Blocking Planner"
            category=CATEGORY
            description="Schedule your day in blocks."
            result=Signal::derive(String::new)
        >
            <form class="form-row" on:submit=on_add>
                <Field label="Time" value=time kind="time"/>
                <Field label="Task" value=task kind="text" placeholder="Task description..."/>
                <Choice label="Type" value=kind options=kind_options/>
                <button class="button button--primary" type="submit">"Add"</button>
            </form>
            <ErrorNote error=form_error/>
            <Show when=move || !blocks.with(Vec::is_empty) fallback=|| view! { <p class="empty">"No blocks added."</p> }>
                <For
                    each=move || blocks.get()
                    key=|b| b.id.clone()
                    children=move |b| {
                        let id = b.id.clone();
                        view! {
                            <div class=block_class(b.kind)>
                                <span class="block__time">{b.time.clone()}</span>
                                <span>{b.task.clone()}</span>
                                <button class="icon-button" title="Delete" on:click=move |_| on_remove.run(id.clone())>
                                    "✕"
                                </button>
                            </div>
                        }
                    }
                />
            </Show>
        </ToolLayout>
    }
}

// =============================================================================
// POMODORO
// =============================================================================

#[component]
fn PomodoroTool() -> impl IntoView {
    let timer = RwSignal::new(Pomodoro::default());
    every(Duration::from_secs(1), move || {
        if timer.try_with_untracked(|t| t.running).unwrap_or(false) {
            let _ = timer.try_update(|t| {
                if t.tick() {
                    log::info!("pomodoro {} session finished", t.mode.label());
                }
            });
        }
    });
    let on_reset = Callback::new(move |()| timer.update(Pomodoro::reset));
    let mode_button = move |mode: PomodoroMode| {
        view! {
            <button
                class="segmented__option"
                class:segmented__option--active=move || timer.with(|t| t.mode == mode)
                on:click=move |_| timer.update(|t| t.set_mode(mode))
            >
                {mode.label()}
            </button>
        }
    };

    view! {
        <ToolLayout
            id="pomodoro"
            name="Pomodoro Focus"
            category=CATEGORY
            description="Boost productivity with focused work sessions."
            result=Signal::derive(String::new)
            on_reset=on_reset
        >
            <div class="pomodoro">
                <div class="segmented">{mode_button(PomodoroMode::Focus)} {mode_button(PomodoroMode::Break)}</div>
                <div
                    class="pomodoro__dial"
                    style=move || format!("--dial-fraction: {:.4}", timer.with(Pomodoro::fraction_left))
                >
                    <span class="pomodoro__time">{move || timer.with(Pomodoro::display)}</span>
                </div>
                <div class="form-row form-row--center">
                    <button class="button button--primary" on:click=move |_| timer.update(Pomodoro::toggle)>
                        {move || if timer.with(|t| t.running) { "Pause" } else { "Start" }}
                    </button>
                    <button class="button" on:click=move |_| timer.update(Pomodoro::reset)>"Reset"</button>
                </div>
            </div>
        </ToolLayout>
    }
}

// =============================================================================
// GOALS AND HABITS
// =============================================================================

#[component]
fn GoalTool() -> impl IntoView {
    let stores = expect_context::<AppStores>();
    let goals = watch(&stores.goals.items);
    let title = text("");
    let form_error = RwSignal::new(None::<String>);

    let add_stores = stores.clone();
    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match Goal::new(ids::new_id(), &title.get()) {
            Ok(goal) => {
                add_stores.goals.add(goal);
                title.set(String::new());
                form_error.set(None);
            }
            Err(e) => form_error.set(Some(e.to_string())),
        }
    };
    let row_stores = StoredValue::new(stores.clone());
    let on_progress = Callback::new(move |(id, raw): (String, String)| {
        let Ok(progress) = raw.parse::<u8>() else {
            return;
        };
        row_stores.with_value(|s| s.goals.update(&id, |g| g.set_progress(progress)));
    });

    view! {
        <ToolLayout
            id="goals"
            name="Goal Planner"
            category=CATEGORY
            description="Set and track long-term goals."
            result=Signal::derive(String::new)
        >
            <form class="form-row" on:submit=on_add>
                <Field label="Goal" value=title kind="text" placeholder="New Goal..."/>
                <button class="button button--primary" type="submit">"Add"</button>
            </form>
            <ErrorNote error=form_error/>
            <For
                each=move || goals.get()
                key=|g| g.id.clone()
                children=move |goal| {
                    let id = goal.id.clone();
                    let progress = Signal::derive({
                        let id = id.clone();
                        move || {
                            goals.with(|all| all.iter().find(|g| g.id == id).map_or(0, |g| g.progress))
                        }
                    });
                    view! {
                        <div class="panel">
                            <div class="goal__header">
                                <strong>{goal.title.clone()}</strong>
                                <span>{move || format!("{}%", progress.get())}</span>
                            </div>
                            <span class="muted">{format!("Deadline {}", goal.deadline)}</span>
                            <input
                                type="range"
                                min="0"
                                max="100"
                                prop:value=move || progress.get().to_string()
                                on:input=move |ev| on_progress.run((id.clone(), event_target_value(&ev)))
                            />
                        </div>
                    }
                }
            />
        </ToolLayout>
    }
}

#[component]
fn HabitTool() -> impl IntoView {
    let stores = expect_context::<AppStores>();
    let habits = watch(&stores.habits.items);
    let title = text("");
    let form_error = RwSignal::new(None::<String>);
    let today = iso_date(ids::today());

    let add_stores = stores.clone();
    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match Habit::new(ids::new_id(), &title.get()) {
            Ok(habit) => {
                add_stores.habits.add(habit);
                title.set(String::new());
                form_error.set(None);
            }
            Err(e) => form_error.set(Some(e.to_string())),
        }
    };
    let row_stores = StoredValue::new(stores.clone());
    let toggle_day = today.clone();
    let on_toggle = Callback::new(move |id: String| {
        row_stores.with_value(|s| s.habits.update(&id, |h| h.toggle_day(&toggle_day)));
    });
    let on_remove = Callback::new(move |id: String| {
        row_stores.with_value(|s| s.habits.remove(&id));
    });
    let reset_stores = stores.clone();
    let on_reset = Callback::new(move |()| {
        confirm_reset(BulkReset::Habits, || reset_stores.habits.reset());
    });

    view! {
        <ToolLayout
            id="habit-tracker"
            name="Habit Tracker"
            category=CATEGORY
            description="Build good habits and track streaks."
            result=Signal::derive(String::new)
            on_reset=on_reset
        >
            <form class="form-row" on:submit=on_add>
                <Field label="Habit" value=title kind="text" placeholder="New Habit (e.g., Read 30 mins)..."/>
                <button class="button button--primary" type="submit">"Add"</button>
            </form>
            <ErrorNote error=form_error/>
            <For
                each=move || habits.get()
                key=|h| (h.id.clone(), h.streak, h.completed_dates.len())
                children=move |habit| {
                    let done = habit.is_done_on(&today);
                    let toggle_id = habit.id.clone();
                    let remove_id = habit.id.clone();
                    view! {
                        <div class="panel habit" class:habit--done=done>
                            <div>
                                <h3>{habit.title.clone()}</h3>
                                <p class="muted">{format!("Current streak: {} days", habit.streak)}</p>
                            </div>
                            <button class="button" on:click=move |_| on_toggle.run(toggle_id.clone())>
                                {if done { "Done today ✓" } else { "Mark done" }}
                            </button>
                            <button class="icon-button" title="Delete" on:click=move |_| on_remove.run(remove_id.clone())>
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </ToolLayout>
    }
}

// =============================================================================
// DAILY NOTE
// =============================================================================

#[component]
fn NotesTool() -> impl IntoView {
    let stores = expect_context::<AppStores>();
    let note = watch(&stores.daily_note.text);
    let saved_at = RwSignal::new(None::<String>);

    let edit_stores = StoredValue::new(stores.clone());
    let on_input = move |ev: leptos::ev::Event| {
        // The timer owns its own handle so a pending write still lands after unmount.
        let pending = edit_stores.with_value(|s| s.daily_note.clone());
        let ticket = pending.edit(event_target_value(&ev));
        after(Duration::from_millis(u64::from(NOTE_AUTOSAVE_MS)), move || {
            if pending.commit(ticket) {
                let now = ids::now();
                let _ = saved_at.try_set(Some(format!("{:02}:{:02}:{:02}", now.hour(), now.minute(), now.second())));
            }
        });
    };
    let reset_stores = stores.clone();
    let on_reset = Callback::new(move |()| {
        if confirm_reset(BulkReset::Note, || reset_stores.daily_note.clear()) {
            saved_at.set(None);
        }
    });

    view! {
        <ToolLayout
            id="notes"
            name="Daily Scratchpad"
            category=CATEGORY
            description="A simple auto-saving notepad for your thoughts."
            result=Signal::derive(String::new)
            on_reset=on_reset
        >
            <div class="notes">
                <div class="notes__status">
                    <span class="muted">"Auto-saving..."</span>
                    {move || saved_at.get().map(|at| view! { <span class="notes__saved">{format!("Saved at {at}")}</span> })}
                </div>
                <textarea
                    class="notes__editor"
                    placeholder="Start typing your thoughts here..."
                    prop:value=move || note.get()
                    on:input=on_input
                ></textarea>
            </div>
        </ToolLayout>
    }
}
