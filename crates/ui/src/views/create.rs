use std::path::PathBuf;

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use services::InlineAttachment;
use study_core::model::{CurriculumUnit, ResourceType};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{CreateForm, CreateMode, kind_label};

#[derive(Clone, Debug, PartialEq, Eq)]
enum SubmitState {
    Idle,
    Working,
    Failed(String),
}

#[component]
pub fn CreateView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut form = use_signal(CreateForm::default);
    let mut attachment_path = use_signal(String::new);
    let mut submit_state = use_signal(|| SubmitState::Idle);

    let mode = form.read().mode;
    let kind = form.read().kind;
    let kinds = form.read().kinds();
    let is_working = submit_state() == SubmitState::Working;
    let has_attachment = !attachment_path().trim().is_empty();
    let can_generate = form.read().can_generate(has_attachment, is_working);

    let creation = ctx.creation();
    let on_generate = move |_| {
        let creation = creation.clone();
        let request_form = form.read().clone();
        let path = attachment_path().trim().to_string();
        spawn(async move {
            submit_state.set(SubmitState::Working);
            let attachment = if path.is_empty() {
                None
            } else {
                match InlineAttachment::read(&PathBuf::from(&path)).await {
                    Ok(attachment) => Some(attachment),
                    Err(err) => {
                        submit_state.set(SubmitState::Failed(err.to_string()));
                        return;
                    }
                }
            };
            match creation.create(request_form.creation_request(attachment)).await {
                Ok(_) => {
                    submit_state.set(SubmitState::Idle);
                    form.write().reset_content();
                    attachment_path.set(String::new());
                    let _ = navigator.push(Route::Dashboard {});
                }
                Err(err) => submit_state.set(SubmitState::Failed(err.user_message())),
            }
        });
    };

    let library = ctx.library();
    let on_save = move |_| {
        let library = library.clone();
        let input = form.read().manual_input();
        spawn(async move {
            submit_state.set(SubmitState::Working);
            match library.create_manual(input).await {
                Ok(_) => {
                    submit_state.set(SubmitState::Idle);
                    form.write().reset_content();
                    let _ = navigator.push(Route::Dashboard {});
                }
                Err(err) => submit_state.set(SubmitState::Failed(err.to_string())),
            }
        });
    };

    rsx! {
        div { class: "page create-page",
            h2 { class: "view-title", "Create New Resource" }

            div { class: "segmented",
                button {
                    class: segment_class(mode == CreateMode::Ai),
                    r#type: "button",
                    onclick: move |_| form.write().set_mode(CreateMode::Ai),
                    "AI Generate"
                }
                button {
                    class: segment_class(mode == CreateMode::Manual),
                    r#type: "button",
                    onclick: move |_| form.write().set_mode(CreateMode::Manual),
                    "Manual Create"
                }
            }

            div { class: "create-card",
                div { class: "kind-picker",
                    for choice in kinds.iter().copied() {
                        button {
                            key: "{choice.label()}",
                            class: kind_class(choice == kind),
                            r#type: "button",
                            onclick: move |_| form.write().kind = choice,
                            "{kind_label(choice)}"
                        }
                    }
                }

                label { class: "field-label", "Unit" }
                select {
                    class: "field-input",
                    value: "{form.read().unit.label()}",
                    onchange: move |evt| {
                        if let Ok(unit) = evt.value().parse::<CurriculumUnit>() {
                            form.write().unit = unit;
                        }
                    },
                    for unit in CurriculumUnit::ALL {
                        option { key: "{unit.label()}", value: "{unit.label()}", "{unit.label()}" }
                    }
                }

                if mode == CreateMode::Ai {
                    label { class: "field-label", "Input Content (Text or Image)" }
                    textarea {
                        class: "field-input field-input--tall",
                        placeholder: "Paste lecture notes, essay text, or summary...",
                        value: "{form.read().text}",
                        oninput: move |evt| form.write().text = evt.value(),
                    }
                    label { class: "field-label", "Image or Text File" }
                    input {
                        class: "field-input",
                        r#type: "text",
                        placeholder: "Path to an image, .txt or .md file",
                        value: "{attachment_path}",
                        oninput: move |evt| attachment_path.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "button",
                        disabled: !can_generate,
                        onclick: on_generate,
                        if is_working { "Generating..." } else { "Generate with AI" }
                    }
                    if !ctx.ai_enabled() {
                        p { class: "view-hint", "Set GEMINI_API_KEY to enable AI generation." }
                    }
                } else {
                    label { class: "field-label", "Title" }
                    input {
                        class: "field-input",
                        r#type: "text",
                        placeholder: "e.g., Unit 1 Key Terms",
                        value: "{form.read().title}",
                        oninput: move |evt| form.write().title = evt.value(),
                    }
                    if kind == ResourceType::Flashcard {
                        ManualCardRows { form }
                    } else {
                        label { class: "field-label", "Note Content" }
                        textarea {
                            class: "field-input field-input--tall",
                            placeholder: "Type your notes here...",
                            value: "{form.read().text}",
                            oninput: move |evt| form.write().text = evt.value(),
                        }
                    }
                    button {
                        class: "btn btn-dark btn-block",
                        r#type: "button",
                        disabled: is_working,
                        onclick: on_save,
                        "{form.read().save_label()}"
                    }
                }

                if let SubmitState::Failed(message) = submit_state() {
                    p { class: "form-error", role: "alert", "{message}" }
                }
            }
        }
    }
}

fn segment_class(active: bool) -> &'static str {
    if active {
        "segment segment--active"
    } else {
        "segment"
    }
}

fn kind_class(active: bool) -> &'static str {
    if active {
        "kind-option kind-option--active"
    } else {
        "kind-option"
    }
}

#[component]
fn ManualCardRows(form: Signal<CreateForm>) -> Element {
    let rows = form.read().rows.clone();
    rsx! {
        div { class: "manual-rows",
            for (index, row) in rows.into_iter().enumerate() {
                div { key: "{index}", class: "manual-row",
                    input {
                        class: "manual-term",
                        placeholder: "Term",
                        value: "{row.term}",
                        oninput: move |evt| form.write().set_term(index, evt.value()),
                    }
                    input {
                        class: "manual-definition",
                        placeholder: "Definition",
                        value: "{row.definition}",
                        oninput: move |evt| form.write().set_definition(index, evt.value()),
                    }
                    button {
                        class: "manual-remove",
                        r#type: "button",
                        onclick: move |_| form.write().remove_row(index),
                        "×"
                    }
                }
            }
            button {
                class: "btn btn-dashed btn-block",
                r#type: "button",
                onclick: move |_| form.write().add_row(),
                "+ Add Card"
            }
        }
    }
}
