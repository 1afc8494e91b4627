use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::InPageLink;
use crate::core::config::SiteConfig;
use crate::core::navigation::{track_scroll, NavState, NavTarget, HOME};
use crate::core::platform::ScrollWatch;
use crate::core::preferences::Preferences;
use crate::i18n::Dictionary;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Fixed top navigation: brand, section links, theme + language toggles and the
/// collapsible mobile menu.
///
/// Preference changes are delegated to the page root through the two toggle
/// handlers; the navbar only owns its transient menu/scroll state, which resets
/// whenever it is remounted.
///
/// The window scroll listener pushes offsets into a coroutine (so state updates
/// happen inside the Dioxus runtime) and is removed when the navbar unmounts.
#[component]
pub fn AppNavbar(
    text: &'static Dictionary,
    prefs: Preferences,
    on_toggle_language: EventHandler<()>,
    on_toggle_theme: EventHandler<()>,
) -> Element {
    let threshold = try_use_context::<SiteConfig>()
        .unwrap_or_default()
        .scroll_threshold_px;
    let mut nav = use_signal(|| NavState::new(threshold));

    let scroll = use_coroutine(move |offsets: UnboundedReceiver<f64>| track_scroll(offsets, nav));

    let watch = use_hook(move || Rc::new(RefCell::new(ScrollWatch::install(scroll.tx()))));
    use_drop(move || {
        watch.borrow_mut().take();
    });

    let state = nav();
    let header_class = if state.scrolled {
        "navbar navbar--scrolled"
    } else {
        "navbar"
    };
    let other_language = prefs.language.toggle().code().to_uppercase();
    let theme_glyph = if prefs.theme.is_dark() { "☀" } else { "☾" };
    let close_menu = move |_: ()| nav.with_mut(NavState::follow_link);

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { id: "navbar", class: "{header_class}",
            div { class: "navbar__inner",
                // Brand
                InPageLink { href: format!("#{HOME}"), class: "navbar__brand",
                    span { class: "navbar__brand-spark", aria_hidden: "true" }
                    span { class: "navbar__brand-mark", "{text.brand.name}" }
                }

                nav { class: "navbar__links",
                    for target in NavTarget::PRIMARY {
                        InPageLink {
                            key: "{target.section_id()}",
                            href: target.href(),
                            class: "navbar__link",
                            "{target.label(text)}"
                        }
                    }
                }

                div { class: "navbar__controls",
                    button {
                        r#type: "button",
                        class: "navbar__toggle navbar__toggle--theme",
                        aria_label: "{text.nav.toggle_theme}",
                        title: "{text.nav.toggle_theme}",
                        onclick: move |_| on_toggle_theme.call(()),
                        "{theme_glyph}"
                    }
                    button {
                        r#type: "button",
                        class: "navbar__toggle navbar__toggle--language",
                        aria_label: "{text.nav.toggle_language}",
                        title: "{text.nav.toggle_language}",
                        onclick: move |_| on_toggle_language.call(()),
                        "{other_language}"
                    }
                    button {
                        r#type: "button",
                        class: "navbar__toggle navbar__toggle--menu",
                        aria_label: "{text.nav.toggle_menu}",
                        aria_expanded: "{state.menu_open}",
                        onclick: move |_| nav.with_mut(NavState::toggle_menu),
                        if state.menu_open { "✕" } else { "☰" }
                    }
                }
            }

            if state.menu_open {
                nav { class: "navbar__menu",
                    for target in NavTarget::PRIMARY {
                        InPageLink {
                            key: "{target.section_id()}",
                            href: target.href(),
                            class: "navbar__menu-link",
                            onfollow: close_menu,
                            "{target.label(text)}"
                        }
                    }
                }
            }
        }
    }
}
