//! Presentation rules that should be available on both wasm and native.
//!
//! Class names, inline styles and derived copy live here instead of in the
//! wasm-only `web` module so they can be unit-tested on the host.

use folio::catalog::{Section, OWNER};
use folio::motion::{stagger_delay_ms, title_glyphs};
use folio::view_state::NavState;

/// Delay between consecutive hero title glyphs.
pub const TITLE_STAGGER_MS: u32 = 30;
/// Delay between consecutive project tags popping in.
pub const TAG_STAGGER_MS: u32 = 100;
/// Delay between consecutive skill cards revealing.
pub const CARD_STAGGER_MS: u32 = 50;

pub fn nav_class(state: &NavState) -> &'static str {
    if state.scrolled {
        "nav scrolled"
    } else {
        "nav"
    }
}

pub fn mobile_menu_class(state: &NavState) -> &'static str {
    if state.menu_open {
        "mobile-menu open"
    } else {
        "mobile-menu"
    }
}

pub fn menu_icon(state: &NavState) -> &'static str {
    if state.menu_open {
        "✕"
    } else {
        "☰"
    }
}

pub fn category_button_class(active: bool) -> &'static str {
    if active {
        "btn category active"
    } else {
        "btn category"
    }
}

pub fn reveal_class(base: &'static str, revealed: bool) -> String {
    if revealed {
        format!("{base} reveal visible")
    } else {
        format!("{base} reveal")
    }
}

pub fn delay_style(delay_ms: u32) -> String {
    format!("animation-delay: {delay_ms}ms")
}

/// Hero title split into `(glyph, style)` spans.
pub fn title_spans(title: &str) -> Vec<(String, String)> {
    title_glyphs(title)
        .into_iter()
        .enumerate()
        .map(|(i, g)| (g, delay_style(stagger_delay_ms(i, TITLE_STAGGER_MS))))
        .collect()
}

pub fn section_title_id(section: Section) -> String {
    format!("{}-title", section.anchor())
}

pub fn copyright(year: u32) -> String {
    format!("© {year} {OWNER}. Tutti i diritti riservati.")
}
