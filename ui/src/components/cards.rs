use dioxus::prelude::*;

/// Link leaving the site; always opened in a new tab.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalLink {
    pub text: String,
    pub href: String,
}

#[component]
pub fn PillarCard(
    #[props(into)] icon: String,
    #[props(into)] title: String,
    #[props(into)] text: String,
    extra_link: Option<ExternalLink>,
) -> Element {
    rsx! {
        div { class: "pillar-card",
            div { class: "pillar-card__icon", aria_hidden: "true", "{icon}" }
            h3 { class: "pillar-card__title", "{title}" }
            p { class: "pillar-card__text", "{text}" }
            if let Some(link) = extra_link {
                a {
                    class: "pillar-card__link",
                    href: "{link.href}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{link.text}"
                }
            }
        }
    }
}

#[component]
pub fn CollaborativeCard(#[props(into)] href: String, #[props(into)] text: String) -> Element {
    rsx! {
        a {
            class: "collab-card",
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            span { class: "collab-card__name", "{text}" }
        }
    }
}
