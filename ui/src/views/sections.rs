//! Static informational sections, in page order.

use dioxus::prelude::*;

use crate::components::{
    CollaborativeCard, ExternalLink, InPageLink, PillarCard, Section, SubscribeForm,
};
use crate::core::navigation::{ABOUT, CONTACT, EVENTS, NETWORK, PILLARS, WHY};
use crate::i18n::Dictionary;

pub const COMMUNITY_URL: &str = "https://www.instagram.com/womenaisafety";

/// Partner organisations shown in the collaborator network (name, url).
pub const PARTNERS: &[(&str, &str)] = &[
    ("Riesgos IA", "https://riesgosia.org/es/"),
    ("ENAIS", "https://www.enais.co/"),
    ("BlueDot", "https://bluedot.org/"),
    ("AI Safety", "https://www.aisafety.com/"),
    ("AI Safety Barcelona", "https://www.aisafetybcn.org/"),
    ("Safe AI Germany", "https://safeaigermany.org/"),
];

#[component]
pub fn WhySection(text: &'static Dictionary) -> Element {
    let why = &text.why;
    rsx! {
        Section { id: WHY, class: "section--tinted",
            div { class: "why",
                div { class: "why__body",
                    h2 { "{why.title}" }
                    blockquote { class: "why__lead", "“{why.lead}”" }
                    for paragraph in why.paragraphs.iter() {
                        p { class: "why__paragraph", "{paragraph}" }
                    }
                }
                aside { class: "why__aside",
                    p { "{why.aside}" }
                }
            }
        }
    }
}

#[component]
pub fn MissionStrip(text: &'static Dictionary) -> Element {
    rsx! {
        section { class: "mission",
            h2 { class: "mission__title", "{text.mission.title}" }
            p { class: "mission__text", "“{text.mission.text}”" }
        }
    }
}

#[component]
pub fn PillarsSection(text: &'static Dictionary) -> Element {
    let pillars = &text.pillars;
    rsx! {
        Section { id: PILLARS,
            h2 { class: "section__title", "{pillars.title}" }
            div { class: "pillars",
                PillarCard {
                    icon: "📖",
                    title: pillars.education.title.clone(),
                    text: pillars.education.text.clone(),
                }
                PillarCard {
                    icon: "📅",
                    title: pillars.events.title.clone(),
                    text: pillars.events.text.clone(),
                }
                PillarCard {
                    icon: "🌐",
                    title: pillars.community.title.clone(),
                    text: pillars.community.text.clone(),
                    extra_link: ExternalLink {
                        text: pillars.community.link.clone(),
                        href: COMMUNITY_URL.to_string(),
                    },
                }
            }
        }
    }
}

#[component]
pub fn EventsSection(text: &'static Dictionary) -> Element {
    let upcoming = &text.upcoming;
    rsx! {
        Section { id: EVENTS, class: "section--tinted",
            div { class: "event-panel",
                h2 { "{upcoming.title}" }
                div { class: "event-panel__body",
                    div { class: "event-panel__details",
                        span { class: "event-panel__badge", "{upcoming.badge}" }
                        h3 { class: "event-panel__name", "{upcoming.name}" }
                        p { class: "event-panel__meta", "{upcoming.details}" }
                        InPageLink { href: format!("#{CONTACT}"), class: "button button--primary",
                            "{upcoming.cta}"
                        }
                    }
                    div { class: "event-panel__image", "{upcoming.image}" }
                }
            }
        }
    }
}

#[component]
pub fn NetworkSection(text: &'static Dictionary) -> Element {
    rsx! {
        Section { id: NETWORK,
            h2 { class: "section__title", "{text.collaborators.title}" }
            div { class: "network",
                for (name, href) in PARTNERS.iter() {
                    CollaborativeCard { key: "{href}", href: *href, text: *name }
                }
            }
        }
    }
}

#[component]
pub fn AboutSection(text: &'static Dictionary) -> Element {
    let about = &text.about;
    rsx! {
        Section { id: ABOUT, class: "section--tinted",
            div { class: "about",
                div { class: "about__portrait",
                    div { class: "about__photo", aria_hidden: "true" }
                    span { class: "about__link", "{about.link}" }
                }
                div { class: "about__body",
                    h2 { "{about.title}" }
                    p { class: "about__text", "{about.text}" }
                    blockquote { class: "about__testimonial", "{about.testimonial}" }
                    div { class: "about__join",
                        p { class: "about__join-cta", "{about.join_cta}" }
                        InPageLink { href: format!("#{CONTACT}"), class: "button button--outline-green",
                            "{about.join_button}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ContactSection(text: &'static Dictionary) -> Element {
    let subscribe = &text.subscribe;
    rsx! {
        Section { id: CONTACT,
            div { class: "subscribe",
                h2 { "{subscribe.title}" }
                p { class: "subscribe__subtitle", "{subscribe.subtitle}" }
                SubscribeForm { text: subscribe }
            }
        }
    }
}
