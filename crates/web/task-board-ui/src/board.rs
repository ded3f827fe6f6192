//! The page controller: owns the document handle, configuration and backend
//! client, and wires the page's event listeners

use gloo_events::EventListener;
use std::rc::Rc;
use task_board_api::TaskApi;
use tracing::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

use crate::banner::{BannerKind, show_banner};
use crate::config::UiConfig;
use crate::dom::query_all;
use crate::effects::{attach_hover, install_reveal, sparkle};
use crate::error::UiResult;
use crate::rename::begin_rename;

const SPARKLE_SELECTOR: &str = ".btn";
const CARD_SELECTOR: &str = ".task-card";

pub struct TaskBoard<A> {
    pub(crate) document: Document,
    pub(crate) config: Rc<UiConfig>,
    pub(crate) api: A,
}

impl<A: TaskApi + 'static> TaskBoard<A> {
    pub fn new(document: Document, config: UiConfig, api: A) -> Self {
        Self {
            document,
            config: Rc::new(config),
            api,
        }
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Enhance the server-rendered page
    ///
    /// Routines whose elements are missing are skipped with a warning.
    pub fn mount(self: &Rc<Self>) -> UiResult<()> {
        let cards = query_all(&self.document, CARD_SELECTOR)?;
        for card in &cards {
            attach_hover(card);
        }

        if let Err(err) = install_reveal(&self.document, &self.config) {
            warn!(error = %err, "Scroll reveal unavailable");
        }
        self.install_form();
        self.install_load_button();
        self.install_delegated_effects();

        info!(cards = cards.len(), "🚀 Task board mounted");
        Ok(())
    }

    /// Show a banner, logging rather than failing if the page can't host it
    pub(crate) fn banner(&self, message: &str, kind: BannerKind) {
        if let Err(err) = show_banner(&self.document, &self.config, message, kind) {
            warn!(error = %err, "Could not show banner");
        }
    }

    /// Document-level listeners: sparkles on buttons, rename on card titles
    fn install_delegated_effects(self: &Rc<Self>) {
        let board = Rc::clone(self);
        EventListener::new(&self.document, "click", move |event| {
            let Some(target) = event_element(event) else {
                return;
            };
            if target.matches(SPARKLE_SELECTOR).unwrap_or(false) {
                if let Err(err) = sparkle(&board.document, &target, &board.config) {
                    warn!(error = %err, "Sparkle failed");
                }
            }
        })
        .forget();

        let board = Rc::clone(self);
        EventListener::new(&self.document, "dblclick", move |event| {
            let Some(target) = event_element(event) else {
                return;
            };
            if !is_card_title(&target) {
                return;
            }
            if let Ok(title) = target.dyn_into::<HtmlElement>() {
                if let Err(err) = begin_rename(&board.document, &board.config, title) {
                    warn!(error = %err, "Could not start rename");
                }
            }
        })
        .forget();
    }
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn is_card_title(element: &Element) -> bool {
    element.tag_name().eq_ignore_ascii_case("h4")
        && matches!(element.closest(CARD_SELECTOR), Ok(Some(_)))
}
