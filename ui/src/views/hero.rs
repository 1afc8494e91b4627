use dioxus::prelude::*;

use crate::components::InPageLink;
use crate::core::navigation::{CONTACT, EVENTS, HOME};
use crate::i18n::Dictionary;

#[component]
pub fn Hero(text: &'static Dictionary) -> Element {
    rsx! {
        section { id: HOME, class: "hero",
            div { class: "hero__inner",
                span { class: "hero__eyebrow", "{text.brand.city}" }
                h1 { class: "hero__title", "{text.hero.title}" }
                p { class: "hero__subtitle", "{text.hero.subtitle}" }
                div { class: "hero__actions",
                    InPageLink { href: format!("#{EVENTS}"), class: "button button--primary",
                        "{text.hero.cta_primary}"
                        span { class: "button__arrow", aria_hidden: "true", "→" }
                    }
                    InPageLink { href: format!("#{CONTACT}"), class: "button button--outline",
                        "{text.hero.cta_secondary}"
                    }
                }
            }
        }
    }
}
