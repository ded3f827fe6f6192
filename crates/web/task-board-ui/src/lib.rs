//! Browser glue for the task board page
//!
//! Compiled to WebAssembly and loaded once per page view. It enhances the
//! server-rendered markup rather than owning it:
//!
//! - the task form posts over AJAX and prepends the created card
//! - the load button fetches the whole collection into a summary
//! - cards lift on hover and fade in when scrolled into view
//! - buttons sparkle when clicked, card titles can be renamed in place
//!
//! Everything runs on the browser's UI thread; the only suspension points are
//! the HTTP round trips made through [`task_board_api::TaskApi`].

use gloo_events::EventListener;
use std::rc::Rc;
use task_board_api::TaskClient;
use tracing::error;
use wasm_bindgen::prelude::wasm_bindgen;

pub mod banner;
pub mod board;
pub mod cards;
pub mod config;
pub mod demo;
pub mod dom;
pub mod effects;
pub mod error;
pub mod escape;
pub mod form;
pub mod markup;
pub mod rename;

pub use banner::{BannerKind, show_banner};
pub use board::TaskBoard;
pub use config::UiConfig;
pub use error::{UiError, UiResult};
pub use escape::escape_html;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let document = gloo_utils::document();
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| boot()).forget();
    } else {
        boot();
    }
}

fn boot() {
    if let Err(err) = mount_page() {
        error!(error = %err, "Task board failed to start");
    }
}

fn mount_page() -> UiResult<()> {
    let document = gloo_utils::document();
    let config = UiConfig::from_document(&document)?;
    let origin = gloo_utils::window().location().origin()?;
    let client = TaskClient::from_origin(&origin, &config.api_path)?;

    let board = Rc::new(TaskBoard::new(document, config, client));
    board.mount()
}
