use folio::catalog::{skills, Section};
use folio::filter::Category;
use folio::motion::{stagger_delay_ms, RevealTrigger};
use folio::particles::FieldConfig;
use folio::view_state::{SkillsEvent, SkillsPanel};
use leptos::html::{Canvas, Div};
use leptos::prelude::*;

use super::frame_loop::ParticleLoop;
use super::reveal::use_reveal;
use crate::ui_model;

#[component]
pub(super) fn Skills(field: FieldConfig) -> impl IntoView {
    let items = StoredValue::new(skills());
    let (panel, set_panel) = signal(items.with_value(|items| SkillsPanel::new(items)));

    let title_ref = NodeRef::<Div>::new();
    let grid_ref = NodeRef::<Div>::new();
    let title_shown = use_reveal(title_ref, RevealTrigger::TITLE);
    let grid_shown = use_reveal(grid_ref, RevealTrigger::GRID);

    // Background particles: one loop per mounted canvas, torn down with the
    // component.
    let canvas_ref = NodeRef::<Canvas>::new();
    let particles = StoredValue::new_local(None::<ParticleLoop>);
    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if particles.with_value(|p| p.is_none()) {
            particles.set_value(ParticleLoop::start(canvas, field));
        }
    });
    on_cleanup(move || {
        particles.try_update_value(|p| {
            if let Some(mut running) = p.take() {
                running.stop();
            }
        });
    });

    let categories = move || panel.with(|p| p.categories().iter().cloned().collect::<Vec<_>>());
    let visible = move || {
        items.with_value(|items| {
            panel.with(|p| p.visible(items).into_iter().cloned().collect::<Vec<_>>())
        })
    };

    view! {
        <section id=Section::Skills.anchor() class="skills">
            <canvas node_ref=canvas_ref class="particle-bg" aria-hidden="true"></canvas>
            <div class="skills-inner">
                <div
                    node_ref=title_ref
                    class=move || ui_model::reveal_class("section-head", title_shown.get())
                >
                    <span class="eyebrow">"Expertise"</span>
                    <h2 id=ui_model::section_title_id(Section::Skills)>
                        "Competenze "<span class="gradient-text">"Tecniche"</span>
                    </h2>
                    <p>
                        "Un insieme di competenze tecniche sviluppate durante il mio percorso di istruzione e lavorativo."
                    </p>
                </div>

                <div class="category-bar">
                    <For
                        each=categories
                        key=|c: &Category| c.label().to_string()
                        children=move |c: Category| {
                            let label = c.label().to_string();
                            let is_active = {
                                let c = c.clone();
                                move || panel.with(|p| p.is_active(&c))
                            };
                            view! {
                                <button
                                    class=move || ui_model::category_button_class(is_active())
                                    on:click=move |_| {
                                        let c = c.clone();
                                        set_panel.maybe_update(|p| p.apply(SkillsEvent::Select(c)));
                                    }
                                >
                                    {label}
                                </button>
                            }
                        }
                    />
                </div>

                <div
                    node_ref=grid_ref
                    class=move || ui_model::reveal_class("skill-grid", grid_shown.get())
                >
                    <For
                        each=move || visible().into_iter().enumerate()
                        key=|(_, s)| s.name
                        children=move |(i, s)| {
                            let name = s.name;
                            let item = s.clone();
                            let delay = ui_model::delay_style(
                                stagger_delay_ms(i, ui_model::CARD_STAGGER_MS),
                            );
                            view! {
                                <div
                                    class=move || {
                                        if panel.with(|p| p.is_hovered(name)) {
                                            "skill-card hovered"
                                        } else {
                                            "skill-card"
                                        }
                                    }
                                    style=delay
                                    on:mouseenter=move |_| {
                                        set_panel.maybe_update(|p| p.apply(SkillsEvent::HoverEnter(name.to_string())))
                                    }
                                    on:mouseleave=move |_| {
                                        set_panel.maybe_update(|p| p.apply(SkillsEvent::HoverLeave))
                                    }
                                >
                                    <div class="skill-icon">{s.icon.glyph()}</div>
                                    <h3>{name}</h3>
                                    <span class="skill-category">{s.category}</span>
                                    <div class="level-track">
                                        <div
                                            class="level-bar"
                                            style:width=move || panel.with(|p| p.level_width(&item))
                                        ></div>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </section>
    }
}
