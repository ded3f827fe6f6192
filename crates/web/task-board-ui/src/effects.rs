//! Cosmetic effects: hover lift, scroll reveal and click sparkles

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use js_sys::{Array, Math};
use tracing::debug;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::config::UiConfig;
use crate::dom::{create, query_all, set_styles};
use crate::error::{UiError, UiResult};

const HOVER_ON: &[(&str, &str)] = &[
    ("transform", "translateY(-8px) scale(1.02)"),
    ("box-shadow", "0 20px 40px rgba(0,0,0,0.15)"),
];
const HOVER_OFF: &[(&str, &str)] = &[
    ("transform", "translateY(0) scale(1)"),
    ("box-shadow", "0 4px 6px rgba(0,0,0,0.1)"),
];

const REVEAL_HIDDEN: &[(&str, &str)] = &[
    ("opacity", "0"),
    ("transform", "translateY(30px)"),
    ("transition", "all 0.8s ease"),
];
/// Class carried by every sparkle particle
pub const SPARKLE_CLASS: &str = "sparkle";

const REVEAL_SHOWN: &[(&str, &str)] = &[("opacity", "1"), ("transform", "translateY(0)")];

/// Lift the card while the pointer is over it
pub fn attach_hover(card: &HtmlElement) {
    let target = card.clone();
    EventListener::new(card, "mouseenter", move |_| {
        let _ = set_styles(&target, HOVER_ON);
    })
    .forget();

    let target = card.clone();
    EventListener::new(card, "mouseleave", move |_| {
        let _ = set_styles(&target, HOVER_OFF);
    })
    .forget();
}

/// Hide every element matching the reveal selector until it first scrolls into view
pub fn install_reveal(document: &Document, config: &UiConfig) -> UiResult<usize> {
    let targets = query_all(document, &config.reveal_selector)?;
    if targets.is_empty() {
        return Ok(0);
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(element) = target.dyn_ref::<HtmlElement>() {
                    let _ = set_styles(element, REVEAL_SHOWN);
                }
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    // The observer keeps calling back for the lifetime of the page
    callback.forget();

    for target in &targets {
        set_styles(target, REVEAL_HIDDEN)?;
        observer.observe(target);
    }

    debug!(count = targets.len(), "Reveal observer installed");
    Ok(targets.len())
}

/// Viewport-relative box particles are scattered over
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparkleArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SparkleArea {
    pub fn of(element: &Element) -> Self {
        let rect = element.get_bounding_client_rect();
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }

    /// Map a pair of unit samples in `[0, 1)` to a point inside the box
    pub fn point(&self, x: f64, y: f64) -> (f64, f64) {
        (self.left + x * self.width, self.top + y * self.height)
    }
}

/// Burst of short-lived particles over `target`
pub fn sparkle(document: &Document, target: &Element, config: &UiConfig) -> UiResult<()> {
    let body = document.body().ok_or_else(|| UiError::missing("<body>"))?;
    let area = SparkleArea::of(target);
    let duration = config.sparkle_duration_ms;
    let transition = format!("transform {duration}ms ease-out, opacity {duration}ms ease-out");

    for _ in 0..config.sparkle_count {
        let (x, y) = area.point(Math::random(), Math::random());
        let particle: HtmlElement = create(document, "div")?;
        particle.set_class_name(SPARKLE_CLASS);
        particle.set_text_content(Some("✨"));
        set_styles(
            &particle,
            &[
                ("position", "fixed"),
                ("pointer-events", "none"),
                ("z-index", "1000"),
                ("left", format!("{x}px").as_str()),
                ("top", format!("{y}px").as_str()),
                ("transform", "translateY(0) scale(1)"),
                ("opacity", "1"),
            ],
        )?;
        body.append_child(&particle)?;

        let rising = particle.clone();
        let transition = transition.clone();
        Timeout::new(config.entrance_delay_ms, move || {
            let _ = set_styles(
                &rising,
                &[
                    ("transition", transition.as_str()),
                    ("transform", "translateY(-30px) scale(0)"),
                    ("opacity", "0"),
                ],
            );
        })
        .forget();

        Timeout::new(config.entrance_delay_ms + duration, move || particle.remove()).forget();
    }

    Ok(())
}
