//! AJAX task creation form

use gloo_events::{EventListener, EventListenerOptions};
use std::rc::Rc;
use task_board_api::{NewTask, Task, TaskApi};
use tracing::{debug, error, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlButtonElement, HtmlFormElement};

use crate::banner::BannerKind;
use crate::board::TaskBoard;
use crate::cards::prepend_card;
use crate::dom::{BusyButton, element_by_id, field_value, optional_by_id};
use crate::error::UiResult;
use crate::markup::SUBMIT_BUSY_LABEL;

pub const EMPTY_TITLE_MESSAGE: &str = "Please enter a task title! 📝";
pub const CREATED_MESSAGE: &str = "🎉 Task added successfully!";
pub const CREATE_FAILED_MESSAGE: &str = "😱 Oops! Something went wrong. Try again!";

const SUBMIT_BUTTON_SELECTOR: &str = r#"button[type="submit"]"#;

impl<A: TaskApi + 'static> TaskBoard<A> {
    /// Validate the form, create the task and render it
    ///
    /// A blank title shows a banner and returns before any request is made.
    /// Failures are reported to the user here; the returned error is for
    /// callers that want to know how it went.
    ///
    /// Once the backend has accepted the task the submission counts as a
    /// success: if the card can't be rendered (say the list is missing) that
    /// is logged, and the form is still reset with the success banner shown.
    pub async fn submit_form(&self) -> UiResult<Task> {
        let form: HtmlFormElement = element_by_id(&self.document, &self.config.form_id)?;
        let title: Element = element_by_id(&self.document, &self.config.title_input_id)?;
        let description = optional_by_id::<Element>(&self.document, &self.config.description_input_id)
            .map(|field| field_value(&field))
            .unwrap_or_default();

        let new_task = match NewTask::from_input(&field_value(&title), &description) {
            Ok(task) => task,
            Err(err) => {
                self.banner(EMPTY_TITLE_MESSAGE, BannerKind::Error);
                return Err(err.into());
            }
        };

        let _busy = form
            .query_selector(SUBMIT_BUTTON_SELECTOR)?
            .and_then(|button| button.dyn_into::<HtmlButtonElement>().ok())
            .map(|button| {
                let label = button.text_content().unwrap_or_default();
                BusyButton::engage(button, SUBMIT_BUSY_LABEL, label)
            });

        let task = match self.api.create_task(&new_task).await {
            Ok(task) => task,
            Err(err) => {
                error!(error = %err, "❌ Error adding task");
                self.banner(CREATE_FAILED_MESSAGE, BannerKind::Error);
                return Err(err.into());
            }
        };

        debug!(id = %task.id, "✨ Task added");
        // The task exists server-side now; a render problem is not a failed submit
        if let Err(err) = self.render_created(&task) {
            warn!(error = %err, "Created task could not be rendered");
        }
        form.reset();
        self.banner(CREATED_MESSAGE, BannerKind::Success);

        Ok(task)
    }

    fn render_created(&self, task: &Task) -> UiResult<()> {
        let list: Element = element_by_id(&self.document, &self.config.list_id)?;
        prepend_card(&self.document, &self.config, &list, task)?;
        Ok(())
    }

    pub(crate) fn install_form(self: &Rc<Self>) {
        let Some(form) = optional_by_id::<HtmlFormElement>(&self.document, &self.config.form_id)
        else {
            warn!(id = %self.config.form_id, "No task form on page; submission disabled");
            return;
        };

        let board = Rc::clone(self);
        EventListener::new_with_options(
            &form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let board = Rc::clone(&board);
                spawn_local(async move {
                    if let Err(err) = board.submit_form().await {
                        debug!(error = %err, "Submission not completed");
                    }
                });
            },
        )
        .forget();
    }
}
