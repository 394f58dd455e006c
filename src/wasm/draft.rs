use web_sys::{window, Document, Element};

use crate::core::draft::{is_create_page, Draft};
use crate::wasm::storage::LocalStorage;
use crate::wasm::{console_log, dom};

/// Mirror unsubmitted create-form input into localStorage.
///
/// Scoped to the create page by an exact path check, not by form identity:
/// the edit page has the same form markup but must not touch drafts. Load
/// happens once up front, every keystroke rewrites all three keys, and a
/// submit clears them optimistically before the server has answered.
pub fn init(document: &Document) {
    let Some(window) = window() else { return };
    let Ok(path) = window.location().pathname() else {
        return;
    };
    if !is_create_page(&path) {
        return;
    }
    let Ok(Some(form)) = document.query_selector(crate::wasm::form::POST_FORM_SELECTOR) else {
        return;
    };

    let title = form.query_selector("#title").ok().flatten();
    let content = form.query_selector("#content").ok().flatten();
    let author = form.query_selector("#author").ok().flatten();

    restore(title.as_ref(), content.as_ref(), author.as_ref());

    for field in [&title, &content, &author].into_iter().flatten() {
        let title = title.clone();
        let content = content.clone();
        let author = author.clone();
        dom::add_listener(field.as_ref(), "input", move |_| {
            save(title.as_ref(), content.as_ref(), author.as_ref());
        });
    }

    dom::add_listener(form.as_ref(), "submit", move |_| {
        if let Err(err) = Draft::clear(&LocalStorage) {
            console_log!("draft clear failed: {}", err);
        }
    });
}

/// Pre-fill form fields from the stored draft. Only non-empty stored values
/// overwrite what the server rendered.
fn restore(title: Option<&Element>, content: Option<&Element>, author: Option<&Element>) {
    let draft = match Draft::load(&LocalStorage) {
        Ok(draft) => draft,
        Err(err) => {
            console_log!("draft load failed: {}", err);
            return;
        }
    };
    prefill(title, &draft.title);
    prefill(content, &draft.content);
    prefill(author, &draft.author);
}

fn prefill(field: Option<&Element>, value: &str) {
    if value.is_empty() {
        return;
    }
    if let Some(field) = field {
        dom::set_field_value(field, value);
    }
}

/// Snapshot every field and write the whole draft through.
fn save(title: Option<&Element>, content: Option<&Element>, author: Option<&Element>) {
    let draft = Draft {
        title: field_or_empty(title),
        content: field_or_empty(content),
        author: field_or_empty(author),
    };
    if let Err(err) = draft.save(&LocalStorage) {
        console_log!("draft save failed: {}", err);
    }
}

fn field_or_empty(field: Option<&Element>) -> String {
    field.and_then(dom::field_value).unwrap_or_default()
}
