//! Transient status banners
//!
//! At most one banner is attached at a time. It sits right after the task
//! form and dismisses itself after [`UiConfig::banner_timeout_ms`].

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element, HtmlElement};

use crate::config::UiConfig;
use crate::dom::{create, element_by_id, query_all, set_styles};
use crate::error::{UiError, UiResult};

const BANNER_SELECTOR: &str = ".message";

const ERROR_STYLE: &str = "background: linear-gradient(135deg, #ff9a9e 0%, #fecfef 100%); \
    color: #721c24; padding: 1rem; border-radius: 15px; margin: 1rem 0; \
    border: 3px solid #f5c6cb; font-weight: bold;";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
    Info,
}

impl BannerKind {
    /// Class list of the banner element; anything but success renders as an error
    pub fn class_name(self) -> &'static str {
        match self {
            BannerKind::Success => "message success-message",
            BannerKind::Error | BannerKind::Info => "message error-message",
        }
    }

    fn inline_style(self) -> Option<&'static str> {
        match self {
            BannerKind::Error => Some(ERROR_STYLE),
            BannerKind::Success | BannerKind::Info => None,
        }
    }
}

/// Replace any current banner with a new one
///
/// The form is resolved first; without it the current banner stays up.
pub fn show_banner(
    document: &Document,
    config: &UiConfig,
    message: &str,
    kind: BannerKind,
) -> UiResult<HtmlElement> {
    let form: Element = element_by_id(document, &config.form_id)?;
    let parent = form
        .parent_node()
        .ok_or_else(|| UiError::missing(format!("parent of #{}", config.form_id)))?;

    let banner: HtmlElement = create(document, "div")?;
    banner.set_class_name(kind.class_name());
    banner.set_text_content(Some(message));
    if let Some(style) = kind.inline_style() {
        banner.style().set_css_text(style);
    }

    for existing in query_all(document, BANNER_SELECTOR)? {
        existing.remove();
    }
    parent.insert_before(&banner, form.next_sibling().as_ref())?;

    schedule_dismiss(banner.clone(), config.banner_timeout_ms, config.banner_fade_ms);
    Ok(banner)
}

/// CSS transition for a fade lasting `fade_ms`
pub fn fade_transition(fade_ms: u32) -> String {
    format!("all {fade_ms}ms ease")
}

fn schedule_dismiss(banner: HtmlElement, timeout_ms: u32, fade_ms: u32) {
    Timeout::new(timeout_ms, move || {
        // Already replaced by a newer banner
        if banner.parent_node().is_none() {
            return;
        }
        let transition = fade_transition(fade_ms);
        let _ = set_styles(
            &banner,
            &[
                ("transition", transition.as_str()),
                ("opacity", "0"),
                ("transform", "translateY(-20px)"),
            ],
        );
        Timeout::new(fade_ms, move || banner.remove()).forget();
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names() {
        assert_eq!(BannerKind::Success.class_name(), "message success-message");
        assert_eq!(BannerKind::Error.class_name(), "message error-message");
        assert_eq!(BannerKind::Info.class_name(), "message error-message");
    }

    #[test]
    fn test_only_errors_are_styled_inline() {
        assert!(BannerKind::Error.inline_style().is_some());
        assert!(BannerKind::Info.inline_style().is_none());
        assert!(BannerKind::Success.inline_style().is_none());
    }

    #[test]
    fn test_fade_follows_configured_duration() {
        assert_eq!(fade_transition(300), "all 300ms ease");
        assert_eq!(fade_transition(UiConfig::default().banner_fade_ms), "all 300ms ease");
        assert_eq!(fade_transition(40), "all 40ms ease");
    }
}
