//! Dashboard view: the note list plus the create/edit form.

use dioxus::prelude::*;

use api::Note;
use ui::{on_api_error, use_client, use_session, LogoutButton};

/// What the form area is doing. `Editing` always carries the id of the note
/// being edited, so "edit mode with no selected note" cannot be represented.
#[derive(Clone, Debug, PartialEq)]
enum Mode {
    Viewing,
    Creating,
    Editing(String),
}

/// Insert `note`, replacing any existing entry with the same id. Keeps the
/// list at exactly one entry per id.
fn upsert_note(notes: &mut Vec<Note>, note: Note) {
    match notes.iter_mut().find(|n| n.id == note.id) {
        Some(existing) => *existing = note,
        None => notes.push(note),
    }
}

/// Merge new title/description into the entry with `id`, leaving every other
/// entry untouched. No-op when the id is not present.
fn patch_note(notes: &mut Vec<Note>, id: &str, title: &str, description: &str) {
    if let Some(note) = notes.iter_mut().find(|n| n.id == id) {
        note.title = title.to_string();
        note.description = description.to_string();
    }
}

fn remove_note(notes: &mut Vec<Note>, id: &str) {
    notes.retain(|n| n.id != id);
}

#[component]
pub fn Dashboard() -> Element {
    let client = use_client();
    let session = use_session();
    let mut notes = use_signal(Vec::<Note>::new);
    let mut mode = use_signal(|| Mode::Viewing);
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);

    // Fetch the full list on mount; afterwards the list is patched locally on
    // each successful mutation.
    let loader_client = client.clone();
    let _loader = use_resource(move || {
        let client = loader_client.clone();
        async move {
            let Some(token) = session().token else {
                return;
            };
            match client.list_notes(&token).await {
                Ok(list) => notes.set(list),
                Err(err) => on_api_error(&err, session),
            }
        }
    });

    let reset_form = move || {
        mode.set(Mode::Viewing);
        title.set(String::new());
        description.set(String::new());
    };

    let submit_client = client.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = submit_client.clone();
        let mut reset_form = reset_form;
        spawn(async move {
            let Some(token) = session().token else {
                return;
            };
            let new_title = title().trim().to_string();
            let new_description = description();
            if new_title.is_empty() {
                return;
            }
            match mode() {
                Mode::Editing(id) => {
                    // The server response is ignored; merge locally on success.
                    match client
                        .update_note(&token, &id, &new_title, &new_description)
                        .await
                    {
                        Ok(()) => {
                            notes.with_mut(|n| patch_note(n, &id, &new_title, &new_description));
                            reset_form();
                        }
                        Err(err) => on_api_error(&err, session),
                    }
                }
                _ => match client.create_note(&token, &new_title, &new_description).await {
                    Ok(note) => {
                        notes.with_mut(|n| upsert_note(n, note));
                        reset_form();
                    }
                    Err(err) => on_api_error(&err, session),
                },
            }
        });
    };

    let delete_client = client.clone();
    let handle_delete = move |id: String| {
        let client = delete_client.clone();
        spawn(async move {
            let Some(token) = session().token else {
                return;
            };
            match client.delete_note(&token, &id).await {
                Ok(()) => {
                    notes.with_mut(|n| remove_note(n, &id));
                    // Deleting the note being edited orphans the draft.
                    if mode() == Mode::Editing(id.clone()) {
                        mode.set(Mode::Viewing);
                        title.set(String::new());
                        description.set(String::new());
                    }
                }
                Err(err) => on_api_error(&err, session),
            }
        });
    };

    rsx! {
        div {
            class: "dashboard-container",

            div {
                class: "dashboard-header",
                h2 { "Dashboard" }
                LogoutButton { class: "btn btn-danger" }
            }

            div {
                h3 { "Your Notes:" }
                div {
                    class: "notes-list",
                    if notes().is_empty() {
                        p { class: "notes-empty", "No notes yet." }
                    }
                    for note in notes() {
                        div {
                            key: "{note.id}",
                            class: "note-item",
                            strong { "{note.title}" }
                            p { "{note.description}" }
                            div {
                                button {
                                    class: "btn btn-info",
                                    onclick: {
                                        let note = note.clone();
                                        move |_| {
                                            mode.set(Mode::Editing(note.id.clone()));
                                            title.set(note.title.clone());
                                            description.set(note.description.clone());
                                        }
                                    },
                                    "Update"
                                }
                                button {
                                    class: "btn btn-danger",
                                    onclick: {
                                        let id = note.id.clone();
                                        let handle_delete = handle_delete.clone();
                                        move |_| handle_delete(id.clone())
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }

            if mode() == Mode::Viewing {
                button {
                    class: "btn btn-success",
                    onclick: move |_| mode.set(Mode::Creating),
                    "New Note"
                }
            } else {
                div {
                    class: "note-form",
                    h3 {
                        if matches!(mode(), Mode::Editing(_)) { "Edit Note:" } else { "Create New Note:" }
                    }
                    form {
                        onsubmit: handle_submit,
                        div {
                            class: "form-group",
                            label { "Title:" }
                            input {
                                r#type: "text",
                                class: "form-control",
                                required: true,
                                value: title(),
                                oninput: move |evt| title.set(evt.value()),
                            }
                        }
                        div {
                            class: "form-group",
                            label { "Description:" }
                            textarea {
                                class: "form-control",
                                rows: "3",
                                value: description(),
                                oninput: move |evt| description.set(evt.value()),
                            }
                        }
                        div {
                            class: "form-actions",
                            button {
                                r#type: "submit",
                                class: "btn btn-success",
                                if matches!(mode(), Mode::Editing(_)) { "Update Note" } else { "Create Note" }
                            }
                            button {
                                r#type: "button",
                                class: "btn btn-secondary",
                                onclick: move |_| {
                                    mode.set(Mode::Viewing);
                                    title.set(String::new());
                                    description.set(String::new());
                                },
                                "Cancel"
                            }
                        }
                    }
                }
            }
        }
    }
}
