use folio::config::SiteConfig;
use leptos::prelude::*;

mod canvas;
mod contact;
mod footer;
mod frame_loop;
mod hero;
mod log;
mod nav;
mod projects;
mod reveal;
mod scroll;
mod skills;

use contact::Contact;
use footer::Footer;
use hero::Hero;
use nav::Navigation;
use projects::Projects;
use skills::Skills;

pub fn start() {
    console_error_panic_hook::set_once();
    log::init();
    tracing::info!("folio_web starting");
    mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    let config = SiteConfig::default();

    view! {
        <div class="app">
            <Navigation scroll_threshold=config.scroll_threshold />
            <main>
                <Hero />
                <Projects />
                <Skills field=config.field />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
