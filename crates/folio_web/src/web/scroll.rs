use folio::catalog::Section;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

pub(super) fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub(super) fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Smooth-scroll the section's anchor element into view.
pub(super) fn scroll_to_section(section: Section) {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.anchor()));
    let Some(el) = target else {
        tracing::debug!(anchor = section.anchor(), "scroll target missing");
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

pub(super) fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}
