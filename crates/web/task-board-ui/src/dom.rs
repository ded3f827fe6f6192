//! Small helpers over `web-sys`

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::error::{UiError, UiResult};

/// Look up a required element by id and cast it
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> UiResult<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| UiError::missing(format!("#{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| UiError::dom(format!("#{} has an unexpected element type", id)))
}

/// Look up an element that the page may legitimately leave out
pub fn optional_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
}

/// Create an element and cast it to its concrete type
pub fn create<T: JsCast>(document: &Document, tag: &str) -> UiResult<T> {
    document
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| UiError::dom(format!("<{}> has an unexpected element type", tag)))
}

/// All `HtmlElement`s matching a selector, in document order
pub fn query_all(document: &Document, selector: &str) -> UiResult<Vec<HtmlElement>> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub fn set_styles(element: &HtmlElement, styles: &[(&str, &str)]) -> UiResult<()> {
    let style = element.style();
    for (name, value) in styles {
        style.set_property(name, value)?;
    }
    Ok(())
}

/// Apply `styles` after `delay_ms`, giving the browser a frame to lay out the
/// starting state so the change transitions
pub fn style_later(element: HtmlElement, delay_ms: u32, styles: Vec<(&'static str, String)>) {
    Timeout::new(delay_ms, move || {
        let style = element.style();
        for (name, value) in &styles {
            let _ = style.set_property(name, value);
        }
    })
    .forget();
}

/// Current value of an `<input>` or `<textarea>`
pub fn field_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else {
        String::new()
    }
}

/// Disables a button and shows a busy label until dropped
///
/// Dropping restores `idle_label` as plain text and re-enables the button,
/// whichever way the request it guards settled.
pub struct BusyButton {
    button: HtmlButtonElement,
    idle_label: String,
}

impl BusyButton {
    pub fn engage(button: HtmlButtonElement, busy_markup: &str, idle_label: String) -> Self {
        button.set_inner_html(busy_markup);
        button.set_disabled(true);
        Self { button, idle_label }
    }
}

impl Drop for BusyButton {
    fn drop(&mut self) {
        self.button.set_text_content(Some(&self.idle_label));
        self.button.set_disabled(false);
    }
}
