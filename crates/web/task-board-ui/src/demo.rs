//! Bulk load of the whole collection into a read-only summary

use gloo_events::EventListener;
use std::rc::Rc;
use task_board_api::TaskApi;
use tracing::{debug, error, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlButtonElement, HtmlElement};

use crate::board::TaskBoard;
use crate::dom::{BusyButton, element_by_id, optional_by_id, set_styles, style_later};
use crate::error::UiResult;
use crate::markup::{LOAD_BUSY_LABEL, SUMMARY_ERROR, summary_markup};

impl<A: TaskApi + 'static> TaskBoard<A> {
    /// Fetch every task and render the summary, returning how many were shown
    ///
    /// The load button, if present, is busy for the duration and restored
    /// afterwards whatever the outcome.
    pub async fn load_summary(&self) -> UiResult<usize> {
        let result: HtmlElement = element_by_id(&self.document, &self.config.load_result_id)?;
        let _busy = optional_by_id::<HtmlButtonElement>(&self.document, &self.config.load_button_id)
            .map(|button| {
                BusyButton::engage(button, LOAD_BUSY_LABEL, self.config.load_button_label.clone())
            });

        let tasks = match self.api.list_tasks().await {
            Ok(tasks) => tasks,
            Err(err) => {
                error!(error = %err, "❌ Error loading data");
                result.set_inner_html(SUMMARY_ERROR);
                return Err(err.into());
            }
        };

        debug!(count = tasks.len(), "📊 Data loaded");
        result.set_inner_html(&summary_markup(&tasks));

        if !tasks.is_empty() {
            set_styles(&result, &[("transform", "scale(0.9)")])?;
            style_later(
                result,
                self.config.entrance_delay_ms,
                vec![
                    ("transition", "transform 0.3s ease".to_string()),
                    ("transform", "scale(1)".to_string()),
                ],
            );
        }

        Ok(tasks.len())
    }

    pub(crate) fn install_load_button(self: &Rc<Self>) {
        let Some(button) =
            optional_by_id::<HtmlButtonElement>(&self.document, &self.config.load_button_id)
        else {
            debug!(id = %self.config.load_button_id, "No load button on page");
            return;
        };
        if self
            .document
            .get_element_by_id(&self.config.load_result_id)
            .is_none()
        {
            warn!(id = %self.config.load_result_id, "Load button present without a result area");
            return;
        }

        let board = Rc::clone(self);
        EventListener::new(&button, "click", move |_| {
            let board = Rc::clone(&board);
            spawn_local(async move {
                if let Err(err) = board.load_summary().await {
                    debug!(error = %err, "Bulk load not completed");
                }
            });
        })
        .forget();
    }
}
