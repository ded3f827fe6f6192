//! Task cards in the list view

use chrono::{Local, NaiveDate};
use task_board_api::Task;
use web_sys::{Document, Element, HtmlElement};

use crate::config::UiConfig;
use crate::dom::{create, set_styles, style_later};
use crate::effects::attach_hover;
use crate::error::UiResult;
use crate::markup::card_markup;

const PLACEHOLDER_SELECTOR: &str = ".no-tasks";

/// Render `task` as a card at the head of `list`
pub fn prepend_card(
    document: &Document,
    config: &UiConfig,
    list: &Element,
    task: &Task,
) -> UiResult<HtmlElement> {
    prepend_card_on(document, config, list, task, today())
}

/// Same as [`prepend_card`] with an explicit render date
pub fn prepend_card_on(
    document: &Document,
    config: &UiConfig,
    list: &Element,
    task: &Task,
    rendered_on: NaiveDate,
) -> UiResult<HtmlElement> {
    if let Some(placeholder) = list.query_selector(PLACEHOLDER_SELECTOR)? {
        placeholder.remove();
    }

    let card: HtmlElement = create(document, "div")?;
    card.set_class_name("task-card");
    card.set_attribute("data-id", &task.id.to_string())?;
    card.set_inner_html(&card_markup(task, rendered_on));
    set_styles(
        &card,
        &[("opacity", "0"), ("transform", "translateY(20px) scale(0.9)")],
    )?;

    list.insert_before(&card, list.first_child().as_ref())?;

    style_later(
        card.clone(),
        config.entrance_delay_ms,
        vec![
            ("transition", "all 0.5s ease".to_string()),
            ("opacity", "1".to_string()),
            ("transform", "translateY(0) scale(1)".to_string()),
        ],
    );
    attach_hover(&card);

    Ok(card)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
