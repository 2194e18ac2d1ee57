use folio::motion::RevealTrigger;
use leptos::html::Div;
use leptos::prelude::*;

use super::scroll::viewport_height;

/// Flips to `true` (once) when `node` scrolls past `trigger`.
pub(super) fn use_reveal(node: NodeRef<Div>, trigger: RevealTrigger) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);

    let check = move || {
        if revealed.get_untracked() {
            return;
        }
        let Some(el) = node.get_untracked() else {
            return;
        };
        let top = el.get_bounding_client_rect().top();
        if trigger.is_triggered(top, viewport_height()) {
            set_revealed.set(true);
        }
    };

    // Content already on screen at mount reveals without a scroll.
    Effect::new(move |_| {
        if node.get().is_some() {
            check();
        }
    });

    let handle = window_event_listener(leptos::ev::scroll, move |_| check());
    on_cleanup(move || handle.remove());

    revealed
}
