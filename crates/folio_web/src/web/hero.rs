use folio::catalog::{hero, Section, OWNER};
use leptos::prelude::*;

use super::scroll;
use crate::ui_model;

#[component]
pub(super) fn Hero() -> impl IntoView {
    let copy = hero();
    let glyphs = ui_model::title_spans(copy.title)
        .into_iter()
        .map(|(glyph, style)| view! { <span class="glyph" style=style>{glyph}</span> })
        .collect_view();

    view! {
        <section id=Section::Home.anchor() class="hero">
            <div class="hero-inner">
                <div class="hero-text">
                    <span class="badge">"✨ "{copy.badge}</span>
                    <h1 class="hero-title">{glyphs}</h1>
                    <p class="hero-subtitle">{copy.subtitle}</p>
                    <div class="hero-actions">
                        <button
                            class="btn primary"
                            on:click=move |_| scroll::scroll_to_section(Section::Projects)
                        >
                            "Scopri i miei progetti ↓"
                        </button>
                        <a class="btn outline" href=Section::Contact.href()>
                            "Contattami"
                        </a>
                    </div>
                </div>
                <div class="hero-media">
                    <img class="hero-portrait" src=copy.portrait alt=OWNER />
                    <div class="hero-card">
                        <strong>{copy.card_heading}</strong>
                        <span>{copy.card_caption}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
