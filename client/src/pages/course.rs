//! Course page: details, curriculum, module viewing, quiz taking, and
//! instructor authoring.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/course/:id` serves three audiences from one route: browsing students
//! (details + enroll), enrolled students (open modules, take quizzes), and
//! the owning instructor (authoring panel, publish). The server filters the
//! curriculum and gates module payloads; this page only reflects what it is
//! given.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::curriculum_panel::CurriculumPanel;
use crate::net::types::{CourseDetails, ModuleContent, ModuleView, QuizQuestionView, ScoreView};
use crate::state::quiz_draft::QuizDraft;
use crate::state::session::{Role, SessionState};

/// Selected option ids in question order. Unanswered questions are skipped,
/// which is why submission stays disabled until [`all_answered`] holds.
fn ordered_selections(questions: &[QuizQuestionView], picks: &HashMap<String, String>) -> Vec<String> {
    questions.iter().filter_map(|q| picks.get(&q.id).cloned()).collect()
}

fn all_answered(questions: &[QuizQuestionView], picks: &HashMap<String, String>) -> bool {
    questions.iter().all(|q| picks.contains_key(&q.id))
}

#[component]
pub fn CoursePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    // Any signed-in account may look at a course page; visitors go to the
    // student login.
    Effect::new(move || {
        if session.get().get().is_none() {
            navigate("/studentLogin", NavigateOptions::default());
        }
    });

    let details = RwSignal::new(None::<CourseDetails>);
    let reload = RwSignal::new(0u32);

    Effect::new(move || {
        let _ = reload.get();
        let Some(token) = session.get().token().map(ToOwned::to_owned) else {
            return;
        };
        let Some(course_id) = params.read().get("id") else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::types::FetchError;
            match crate::net::api::fetch_course(&token, &course_id).await {
                Ok(course) => details.set(Some(course)),
                // Dead token: destroy the session and let the guard above
                // route back to login.
                Err(FetchError::Unauthorized) => session.update(SessionState::clear),
                Err(FetchError::Unavailable) => details.set(None),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, course_id);
    });

    // Opened module plus quiz-taking state, reset on every selection.
    let opened = RwSignal::new(None::<ModuleView>);
    let picks = RwSignal::new(HashMap::<String, String>::new());
    let score = RwSignal::new(None::<ScoreView>);

    let on_select_module = Callback::new(move |module_id: String| {
        picks.set(HashMap::new());
        score.set(None);
        let Some(token) = session.get().token().map(ToOwned::to_owned) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::types::FetchError;
            match crate::net::api::fetch_module(&token, &module_id).await {
                Ok(module) => opened.set(Some(module)),
                Err(FetchError::Unauthorized) => session.update(SessionState::clear),
                Err(FetchError::Unavailable) => opened.set(None),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, module_id);
    });

    let on_enroll = move |_| {
        let Some(token) = session.get().token().map(ToOwned::to_owned) else {
            return;
        };
        let Some(course_id) = params.read().get("id") else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if crate::net::api::enroll(&token, &course_id).await {
                reload.update(|n| *n += 1);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, course_id);
    };

    let on_publish = move |_| {
        let Some(token) = session.get().token().map(ToOwned::to_owned) else {
            return;
        };
        let Some(course_id) = params.read().get("id") else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if crate::net::api::publish_course(&token, &course_id).await {
                reload.update(|n| *n += 1);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, course_id);
    };

    let on_submit_quiz = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(module) = opened.get() else {
            return;
        };
        let ModuleContent::Quiz { questions } = module.content else {
            return;
        };
        let chosen = picks.get();
        if !all_answered(&questions, &chosen) {
            return;
        }
        let selections = ordered_selections(&questions, &chosen);
        let Some(token) = session.get().token().map(ToOwned::to_owned) else {
            return;
        };
        let module_id = module.id;

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            score.set(crate::net::api::submit_quiz(&token, &module_id, &selections).await);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, module_id, selections);
    };

    let is_student = move || {
        session
            .get()
            .get()
            .is_some_and(|s| s.role == Role::Student)
    };

    view! {
        <div class="course-page">
            <Show
                when=move || details.get().is_some()
                fallback=|| view! { <p class="course-page__empty">"Loading course..."</p> }
            >
                {move || {
                    details
                        .get()
                        .map(|course| {
                            let show_enroll = is_student() && course.is_published
                                && !course.is_enrolled && !course.is_owner;
                            let show_publish = course.is_owner && !course.is_published;
                            let modules = course.modules.clone();
                            view! {
                                <header class="course-page__header">
                                    <h1>{course.title.clone()}</h1>
                                    <p class="course-page__description">
                                        {course.description.clone().unwrap_or_default()}
                                    </p>
                                    <Show when=move || show_enroll>
                                        <button class="enroll-button" name="enrollbutton" on:click=on_enroll>
                                            "Enroll"
                                        </button>
                                    </Show>
                                    <Show when=move || show_publish>
                                        <button class="publish-button" on:click=on_publish>
                                            "Publish"
                                        </button>
                                    </Show>
                                </header>
                                <CurriculumPanel modules=modules on_select=on_select_module/>
                                {course
                                    .is_owner
                                    .then(|| {
                                        view! {
                                            <AuthoringPanel
                                                reload=reload
                                                initial_description=course
                                                    .description
                                                    .clone()
                                                    .unwrap_or_default()
                                            />
                                        }
                                    })}
                            }
                        })
                }}
            </Show>

            {move || {
                opened
                    .get()
                    .map(|module| render_module(&module, picks, score, on_submit_quiz))
            }}
        </div>
    }
}

/// Render an opened module: a video player or a quiz form.
fn render_module<T: Fn(leptos::ev::SubmitEvent) + Copy + 'static>(
    module: &ModuleView,
    picks: RwSignal<HashMap<String, String>>,
    score: RwSignal<Option<ScoreView>>,
    on_submit_quiz: T,
) -> impl IntoView + use<T> {
    let title = module.title.clone();
    let body = match &module.content {
        ModuleContent::Video { url } => {
            let url = url.clone();
            view! {
                <video class="module-viewer__video" controls src=url></video>
            }
            .into_any()
        }
        ModuleContent::Quiz { questions } => {
            let questions = questions.clone();
            let submittable = {
                let questions = questions.clone();
                move || all_answered(&questions, &picks.get())
            };
            view! {
                <form class="quiz-form" on:submit=on_submit_quiz>
                    {questions
                        .iter()
                        .map(|question| {
                            let question_id = question.id.clone();
                            view! {
                                <fieldset class="quiz-question">
                                    <legend>{question.content.clone()}</legend>
                                    {question
                                        .options
                                        .iter()
                                        .map(|option| {
                                            let question_id = question_id.clone();
                                            let checked_question_id = question_id.clone();
                                            let option_id = option.id.clone();
                                            let checked_option = option.id.clone();
                                            let group = format!("question-{question_id}");
                                            view! {
                                                <label class="quiz-option">
                                                    <input
                                                        type="radio"
                                                        name=group
                                                        prop:checked=move || {
                                                            picks.get().get(&checked_question_id).is_some_and(|p| *p == checked_option)
                                                        }
                                                        on:change=move |_| {
                                                            picks.update(|p| {
                                                                p.insert(question_id.clone(), option_id.clone());
                                                            });
                                                        }
                                                    />
                                                    {option.content.clone()}
                                                </label>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </fieldset>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <button class="quiz-submit" type="submit" disabled=move || !submittable()>
                        "Submit answers"
                    </button>
                    <Show when=move || score.get().is_some()>
                        <p class="quiz-score">
                            {move || {
                                score
                                    .get()
                                    .map(|s| format!("Score: {} / {}", s.score, s.total))
                                    .unwrap_or_default()
                            }}
                        </p>
                    </Show>
                </form>
            }
            .into_any()
        }
    };

    view! {
        <section class="module-viewer">
            <h2>{title}</h2>
            {body}
        </section>
    }
}

/// Owner-only authoring: edit the description, add video modules, and
/// build quizzes.
#[component]
fn AuthoringPanel(reload: RwSignal<u32>, initial_description: String) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();

    let description_buffer = RwSignal::new(initial_description);
    let video_title = RwSignal::new(String::new());
    let video_url = RwSignal::new(String::new());
    let video_private = RwSignal::new(false);
    let quiz_draft = RwSignal::new(QuizDraft::default());
    let message = RwSignal::new(String::new());

    let on_save_description = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = description_buffer.get();
        let Some(token) = session.get().token().map(ToOwned::to_owned) else {
            return;
        };
        let Some(course_id) = params.read().get("id") else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if crate::net::api::update_description(&token, &course_id, &text).await {
                message.set(String::new());
                reload.update(|n| *n += 1);
            } else {
                message.set("Could not save the description.".to_owned());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, course_id, text);
    };

    let on_add_video = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let title = video_title.get().trim().to_owned();
        let url = video_url.get().trim().to_owned();
        if title.is_empty() || url.is_empty() {
            message.set("Video modules need a title and a URL.".to_owned());
            return;
        }
        let private = video_private.get();
        let Some(token) = session.get().token().map(ToOwned::to_owned) else {
            return;
        };
        let Some(course_id) = params.read().get("id") else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::add_video_module(&token, &course_id, &title, &url, private).await {
                Some(_) => {
                    video_title.set(String::new());
                    video_url.set(String::new());
                    video_private.set(false);
                    message.set(String::new());
                    reload.update(|n| *n += 1);
                }
                None => message.set("Could not add the video module.".to_owned()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, course_id, title, url, private, reload);
    };

    let on_upload_quiz = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = quiz_draft.get();
        if let Some(problem) = draft.validation_error() {
            message.set(format!("Quiz is incomplete: {problem}."));
            return;
        }

        let Some(token) = session.get().token().map(ToOwned::to_owned) else {
            return;
        };
        let Some(course_id) = params.read().get("id") else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::add_quiz_module(&token, &course_id, &draft).await {
                Some(_) => {
                    quiz_draft.set(QuizDraft::default());
                    message.set(String::new());
                    reload.update(|n| *n += 1);
                }
                None => message.set("Could not upload the quiz.".to_owned()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, course_id, draft);
    };

    view! {
        <section class="authoring">
            <h2>"Manage course"</h2>

            <form class="authoring__description" on:submit=on_save_description>
                <h3>"Description"</h3>
                <textarea
                    class="authoring__input"
                    placeholder="What is this course about?"
                    prop:value=move || description_buffer.get()
                    on:input=move |ev| description_buffer.set(event_target_value(&ev))
                ></textarea>
                <button class="authoring__submit" type="submit">"Save description"</button>
            </form>

            <form class="authoring__video" on:submit=on_add_video>
                <h3>"Video module"</h3>
                <input
                    class="authoring__input"
                    type="text"
                    placeholder="Module title"
                    prop:value=move || video_title.get()
                    on:input=move |ev| video_title.set(event_target_value(&ev))
                />
                <input
                    class="authoring__input"
                    type="text"
                    placeholder="Video URL"
                    prop:value=move || video_url.get()
                    on:input=move |ev| video_url.set(event_target_value(&ev))
                />
                <label class="authoring__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || video_private.get()
                        on:change=move |ev| video_private.set(event_target_checked(&ev))
                    />
                    "Enrolled students only"
                </label>
                <button class="authoring__submit" type="submit">"Add video"</button>
            </form>

            <form class="authoring__quiz" on:submit=on_upload_quiz>
                <h3>"Quiz module"</h3>
                <input
                    class="authoring__input"
                    type="text"
                    placeholder="Quiz title"
                    prop:value=move || quiz_draft.get().title
                    on:input=move |ev| {
                        quiz_draft.update(|d| d.title = event_target_value(&ev));
                    }
                />
                {move || {
                    quiz_draft
                        .get()
                        .questions
                        .iter()
                        .enumerate()
                        .map(|(qi, question)| {
                            view! {
                                <fieldset class="authoring__question">
                                    <input
                                        class="authoring__input"
                                        type="text"
                                        placeholder=format!("Question {}", qi + 1)
                                        prop:value=question.content.clone()
                                        on:input=move |ev| {
                                            quiz_draft.update(|d| {
                                                if let Some(q) = d.questions.get_mut(qi) {
                                                    q.content = event_target_value(&ev);
                                                }
                                            });
                                        }
                                    />
                                    {question
                                        .options
                                        .iter()
                                        .enumerate()
                                        .map(|(oi, option)| {
                                            view! {
                                                <div class="authoring__option">
                                                    <input
                                                        class="authoring__input"
                                                        type="text"
                                                        placeholder=format!("Option {}", oi + 1)
                                                        prop:value=option.content.clone()
                                                        on:input=move |ev| {
                                                            quiz_draft.update(|d| {
                                                                if let Some(o) = d
                                                                    .questions
                                                                    .get_mut(qi)
                                                                    .and_then(|q| q.options.get_mut(oi))
                                                                {
                                                                    o.content = event_target_value(&ev);
                                                                }
                                                            });
                                                        }
                                                    />
                                                    <label class="authoring__checkbox">
                                                        <input
                                                            type="checkbox"
                                                            prop:checked=option.is_correct
                                                            on:change=move |ev| {
                                                                quiz_draft.update(|d| {
                                                                    if let Some(o) = d
                                                                        .questions
                                                                        .get_mut(qi)
                                                                        .and_then(|q| q.options.get_mut(oi))
                                                                    {
                                                                        o.is_correct = event_target_checked(&ev);
                                                                    }
                                                                });
                                                            }
                                                        />
                                                        "Correct"
                                                    </label>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                    <button
                                        class="authoring__add-option"
                                        type="button"
                                        on:click=move |_| quiz_draft.update(|d| d.add_option(qi))
                                    >
                                        "Add option"
                                    </button>
                                </fieldset>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <button
                    class="authoring__add-question"
                    type="button"
                    on:click=move |_| quiz_draft.update(QuizDraft::add_question)
                >
                    "Add question"
                </button>
                <button
                    class="authoring__submit"
                    type="submit"
                    disabled=move || !quiz_draft.get().is_valid()
                >
                    "Upload quiz"
                </button>
            </form>

            <Show when=move || !message.get().is_empty()>
                <p class="authoring__message">{move || message.get()}</p>
            </Show>
        </section>
    }
}

#[cfg(test)]
#[path = "course_test.rs"]
mod tests;
