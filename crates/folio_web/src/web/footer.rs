use folio::catalog::{footer_columns, BRAND};
use leptos::prelude::*;

use super::scroll;
use crate::ui_model;

#[component]
pub(super) fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    let columns = footer_columns()
        .iter()
        .map(|col| {
            let links = col
                .links
                .iter()
                .map(|l| view! { <li><a href=l.href>{l.label}</a></li> })
                .collect_view();
            view! {
                <div class="footer-col">
                    <h4>{col.title}</h4>
                    <ul>{links}</ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <footer class="footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <div class="brand">
                        <span class="brand-icon">"🤖"</span>
                        {BRAND}
                    </div>
                    <p>
                        "Creo agenti intelligenti che trasformano il modo in cui interagisci con la tecnologia."
                    </p>
                    <button class="back-to-top" on:click=move |_| scroll::scroll_to_top()>
                        "↑ Torna su"
                    </button>
                </div>
                {columns}
            </div>
            <div class="footer-bottom">{ui_model::copyright(year)}</div>
        </footer>
    }
}
