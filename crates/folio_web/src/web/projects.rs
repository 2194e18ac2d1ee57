use folio::catalog::{projects, Project, Section};
use folio::motion::{stagger_delay_ms, tilt, Rect, RevealTrigger, Tilt};
use folio::view_state::ProjectHover;
use leptos::html::Div;
use leptos::prelude::*;

use super::reveal::use_reveal;
use crate::ui_model;

#[component]
pub(super) fn Projects() -> impl IntoView {
    let (hover, set_hover) = signal(ProjectHover::default());

    let title_ref = NodeRef::<Div>::new();
    let grid_ref = NodeRef::<Div>::new();
    let title_shown = use_reveal(title_ref, RevealTrigger::TITLE);
    let grid_shown = use_reveal(grid_ref, RevealTrigger::GRID);

    let cards = projects()
        .into_iter()
        .map(|project| view! { <ProjectCard project=project hover=hover set_hover=set_hover /> })
        .collect_view();

    view! {
        <section id=Section::Projects.anchor() class="projects">
            <div
                node_ref=title_ref
                class=move || ui_model::reveal_class("section-head", title_shown.get())
            >
                <span class="eyebrow">"Portfolio"</span>
                <h2 id=ui_model::section_title_id(Section::Projects)>
                    "Progetti "<span class="gradient-text">"AI"</span>
                </h2>
                <p>
                    "Alcuni dei miei progetti più significativi nel campo dell'intelligenza artificiale e dello sviluppo di agenti."
                </p>
            </div>
            <div
                node_ref=grid_ref
                class=move || ui_model::reveal_class("project-grid", grid_shown.get())
            >
                {cards}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(
    project: Project,
    hover: ReadSignal<ProjectHover>,
    set_hover: WriteSignal<ProjectHover>,
) -> impl IntoView {
    let id = project.id;
    let card_ref = NodeRef::<Div>::new();
    let (lean, set_lean) = signal(Tilt::REST);

    let on_move = move |ev: leptos::ev::MouseEvent| {
        let Some(card) = card_ref.get_untracked() else {
            return;
        };
        let r = card.get_bounding_client_rect();
        let rect = Rect {
            left: r.left(),
            top: r.top(),
            width: r.width(),
            height: r.height(),
        };
        set_lean.set(tilt(ev.client_x() as f64, ev.client_y() as f64, rect));
    };

    let tags = project
        .tags
        .iter()
        .enumerate()
        .map(|(i, tag)| {
            let delay = ui_model::delay_style(stagger_delay_ms(i, ui_model::TAG_STAGGER_MS));
            view! {
                <span
                    class=move || if hover.with(|h| h.is_hovered(id)) { "tag pop" } else { "tag" }
                    style=delay
                >
                    {*tag}
                </span>
            }
        })
        .collect_view();

    view! {
        <div
            node_ref=card_ref
            class="project-card"
            style:transform=move || lean.get().transform()
            on:mousemove=on_move
            on:mouseenter=move |_| set_hover.maybe_update(|h| h.enter(id))
            on:mouseleave=move |_| {
                set_lean.set(Tilt::REST);
                set_hover.maybe_update(|h| h.leave(id));
            }
        >
            <div class="project-media">
                <img src=project.image alt=project.title />
                <span class="project-icon">{project.icon.glyph()}</span>
            </div>
            <div class="project-body">
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <div class="tags">{tags}</div>
                <div class="project-links">
                    <a class="btn primary sm" href=project.demo_href>"↗ Demo"</a>
                    <a class="btn outline sm" href=project.code_href>"Code"</a>
                </div>
            </div>
        </div>
    }
}
