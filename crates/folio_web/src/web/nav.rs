use folio::catalog::{nav_links, Section, BRAND};
use folio::view_state::{NavEvent, NavState};
use leptos::prelude::*;

use super::scroll;
use crate::ui_model;

#[component]
pub(super) fn Navigation(scroll_threshold: f64) -> impl IntoView {
    let (nav, set_nav) = signal(NavState::with_threshold(scroll_threshold));

    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        let y = scroll::scroll_y();
        set_nav.maybe_update(|n| n.apply(NavEvent::Scrolled(y)));
    });
    on_cleanup(move || handle.remove());

    let activate = move |section: Section| {
        set_nav.maybe_update(|n| n.apply(NavEvent::Activate(section)));
        scroll::scroll_to_section(section);
    };

    let links = move || {
        nav_links()
            .iter()
            .map(|link| {
                let target = link.target;
                view! {
                    <li>
                        <a
                            href=target.href()
                            on:click=move |ev| {
                                ev.prevent_default();
                                activate(target);
                            }
                        >
                            {link.label}
                        </a>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=move || nav.with(ui_model::nav_class)>
            <div class="nav-inner">
                <a
                    class="brand"
                    href=Section::Home.href()
                    on:click=move |ev| {
                        ev.prevent_default();
                        activate(Section::Home);
                    }
                >
                    <span class="brand-icon">"🤖"</span>
                    {BRAND}
                </a>
                <ul class="nav-links">{links()}</ul>
                <button
                    class="btn primary nav-cta"
                    on:click=move |_| activate(Section::Contact)
                >
                    "Contattami"
                </button>
                <button
                    class="icon-btn menu-toggle"
                    aria-label="Menu"
                    on:click=move |_| set_nav.maybe_update(|n| n.apply(NavEvent::ToggleMenu))
                >
                    {move || nav.with(ui_model::menu_icon)}
                </button>
            </div>
            <div class=move || nav.with(ui_model::mobile_menu_class)>
                <ul>{links()}</ul>
                <button class="btn primary" on:click=move |_| activate(Section::Contact)>
                    "Contattami"
                </button>
            </div>
        </nav>
    }
}
