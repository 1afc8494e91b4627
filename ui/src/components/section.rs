use dioxus::prelude::*;

/// Full-width page section addressable by `#id`.
#[component]
pub fn Section(
    #[props(into)] id: String,
    #[props(into, default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        section { id: "{id}", class: "section {class}",
            div { class: "section__inner", {children} }
        }
    }
}
