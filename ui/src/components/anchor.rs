use dioxus::prelude::*;

use crate::core::navigation::fragment_id;
use crate::core::platform;

/// Anchor to a section of this page. Scrolls smoothly when the target exists
/// and falls back to the native fragment jump otherwise.
#[component]
pub fn InPageLink(
    #[props(into)] href: String,
    #[props(into, default)] class: String,
    onfollow: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    let target = href.clone();
    let onclick = move |evt: MouseEvent| {
        if fragment_id(&target).is_some_and(platform::scroll_to_fragment) {
            evt.prevent_default();
        }
        if let Some(handler) = onfollow {
            handler.call(());
        }
    };

    rsx! {
        a { href: "{href}", class: "{class}", onclick, {children} }
    }
}
