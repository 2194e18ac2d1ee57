use folio::catalog::{contact_info, social_links, Section};
use folio::motion::RevealTrigger;
use leptos::html::Div;
use leptos::prelude::*;

use super::reveal::use_reveal;
use crate::ui_model;

#[component]
pub(super) fn Contact() -> impl IntoView {
    let title_ref = NodeRef::<Div>::new();
    let title_shown = use_reveal(title_ref, RevealTrigger::TITLE);

    let info = contact_info()
        .iter()
        .map(|item| {
            view! {
                <a class="contact-item" href=item.href>
                    <span class="contact-glyph">{item.glyph}</span>
                    <div>
                        <div class="contact-label">{item.label}</div>
                        <div class="contact-value">{item.value}</div>
                    </div>
                </a>
            }
        })
        .collect_view();

    let socials = social_links()
        .iter()
        .map(|s| {
            view! {
                <a class="social" href=s.href aria-label=s.label target="_blank" rel="noopener">
                    {s.glyph}
                </a>
            }
        })
        .collect_view();

    view! {
        <section id=Section::Contact.anchor() class="contact">
            <div
                node_ref=title_ref
                class=move || ui_model::reveal_class("section-head", title_shown.get())
            >
                <span class="eyebrow">"Contatti"</span>
                <h2 id=ui_model::section_title_id(Section::Contact)>
                    "Restiamo in "<span class="gradient-text">"contatto"</span>
                </h2>
            </div>
            <div class="contact-body">
                <h3>"Informazioni di contatto"</h3>
                <p>"Scegli il modo più comodo per contattarmi."</p>
                <div class="contact-list">{info}</div>
                <div class="socials">{socials}</div>
            </div>
        </section>
    }
}
