//! Double-click inline editing of card titles
//!
//! The rename is local to the page; nothing is sent to the backend.

use gloo_events::EventListener;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement, KeyboardEvent};

use crate::banner::{BannerKind, show_banner};
use crate::config::UiConfig;
use crate::dom::create;
use crate::error::{UiError, UiResult};

pub const RENAMED_MESSAGE: &str = "🎉 Task title updated!";

const INPUT_STYLE: &str = "width: 100%; padding: 0.5rem; font-size: 1.2rem; \
    border: 3px solid #667eea; border-radius: 10px; background: white;";

/// The new title to apply, if the edit changed anything
pub fn rename_outcome(current: &str, proposed: &str) -> Option<String> {
    let proposed = proposed.trim();
    (!proposed.is_empty() && proposed != current).then(|| proposed.to_string())
}

/// One in-place edit of a card title
///
/// The session owns its `blur` and `keydown` listeners and drops them when
/// it settles, so a finished edit leaves nothing attached to the page.
pub struct RenameSession {
    document: Document,
    config: Rc<UiConfig>,
    title: HtmlElement,
    input: HtmlInputElement,
    original: String,
    settled: Cell<bool>,
    listeners: RefCell<Vec<EventListener>>,
}

impl RenameSession {
    pub fn input(&self) -> &HtmlInputElement {
        &self.input
    }

    pub fn is_settled(&self) -> bool {
        self.settled.get()
    }

    /// Listeners still attached to the input
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn commit(&self) {
        self.settle(true);
    }

    pub fn cancel(&self) {
        self.settle(false);
    }

    fn settle(&self, commit: bool) {
        if self.settled.replace(true) {
            return;
        }

        // Detach before removing the input, whose removal fires blur
        let listeners = std::mem::take(&mut *self.listeners.borrow_mut());
        drop(listeners);

        if commit {
            if let Some(renamed) = rename_outcome(&self.original, &self.input.value()) {
                debug!(from = %self.original, to = %renamed, "Task renamed");
                self.title.set_text_content(Some(&renamed));
                if let Err(err) = show_banner(
                    &self.document,
                    &self.config,
                    RENAMED_MESSAGE,
                    BannerKind::Success,
                ) {
                    warn!(error = %err, "Could not show banner");
                }
            }
        }

        let _ = self.title.style().set_property("display", "block");
        self.input.remove();
    }
}

/// Swap `title` for a text input until the edit is committed or cancelled
pub fn begin_rename(
    document: &Document,
    config: &Rc<UiConfig>,
    title: HtmlElement,
) -> UiResult<Rc<RenameSession>> {
    let parent = title
        .parent_node()
        .ok_or_else(|| UiError::missing("parent of task title"))?;
    let original = title.text_content().unwrap_or_default();

    let input: HtmlInputElement = create(document, "input")?;
    input.set_type("text");
    input.set_value(&original);
    input.style().set_css_text(INPUT_STYLE);

    title.style().set_property("display", "none")?;
    parent.insert_before(&input, title.next_sibling().as_ref())?;
    input.focus()?;
    input.select();

    let session = Rc::new(RenameSession {
        document: document.clone(),
        config: Rc::clone(config),
        title,
        input,
        original,
        settled: Cell::new(false),
        listeners: RefCell::new(Vec::with_capacity(2)),
    });

    // The listeners keep the session alive until it settles and drops them
    let on_blur = {
        let handle = Rc::clone(&session);
        EventListener::new(&session.input, "blur", move |_| handle.commit())
    };
    let on_key = {
        let handle = Rc::clone(&session);
        EventListener::new(&session.input, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            match event.key().as_str() {
                "Enter" => handle.commit(),
                "Escape" => handle.cancel(),
                _ => {}
            }
        })
    };
    session.listeners.borrow_mut().extend([on_blur, on_key]);

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changed_title_is_applied() {
        assert_eq!(
            rename_outcome("Buy milk", "  Buy oat milk "),
            Some("Buy oat milk".to_string())
        );
    }

    #[test]
    fn test_unchanged_title_is_ignored() {
        assert_eq!(rename_outcome("Buy milk", "Buy milk"), None);
        assert_eq!(rename_outcome("Buy milk", " Buy milk  "), None);
    }

    #[test]
    fn test_blank_title_is_ignored() {
        assert_eq!(rename_outcome("Buy milk", ""), None);
        assert_eq!(rename_outcome("Buy milk", "   "), None);
    }
}
