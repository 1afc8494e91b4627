use dioxus::prelude::*;

use crate::components::InPageLink;
use crate::core::navigation::NavTarget;
use crate::i18n::Dictionary;

use super::sections::COMMUNITY_URL;

/// Social profiles (label, url). Profiles without a public url yet render as plain labels.
const SOCIAL_LINKS: &[(&str, Option<&str>)] = &[
    ("LinkedIn", None),
    ("Instagram", Some(COMMUNITY_URL)),
    ("Substack", None),
];

const EXPLORE_LINKS: [NavTarget; 3] = [NavTarget::Home, NavTarget::Events, NavTarget::Contact];

#[component]
pub fn Footer(text: &'static Dictionary) -> Element {
    let footer = &text.footer;
    rsx! {
        footer { class: "footer",
            div { class: "footer__grid",
                div { class: "footer__brand",
                    div { class: "footer__brand-mark", "{text.brand.name}" }
                    p { class: "footer__tagline", "{footer.tagline}" }
                    div { class: "footer__social",
                        for (label, href) in SOCIAL_LINKS.iter() {
                            if let Some(href) = href {
                                a {
                                    key: "{label}",
                                    class: "footer__social-link",
                                    href: *href,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    aria_label: *label,
                                    "{label}"
                                }
                            } else {
                                span {
                                    key: "{label}",
                                    class: "footer__social-link footer__social-link--pending",
                                    "{label}"
                                }
                            }
                        }
                    }
                }

                nav { class: "footer__explore",
                    h4 { class: "footer__heading", "{footer.explore}" }
                    for target in EXPLORE_LINKS {
                        InPageLink {
                            key: "{target.section_id()}",
                            href: target.href(),
                            class: "footer__link",
                            "{target.label(text)}"
                        }
                    }
                }

                div { class: "footer__community",
                    h4 { class: "footer__heading", "{footer.community}" }
                    p { class: "footer__community-text", "{footer.community_text}" }
                    div { class: "footer__rule" }
                    p { class: "footer__copyright", "© {footer.copyright}" }
                }
            }

            div { class: "footer__closing",
                p { "{footer.closing}" }
            }
        }
    }
}
