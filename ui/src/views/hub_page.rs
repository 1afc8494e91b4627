use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::components::AppNavbar;
use crate::core::config::SiteConfig;
use crate::core::platform;
use crate::core::preferences::PreferenceStore;
use crate::core::storage::PlatformStorage;
use crate::i18n;

use super::footer::Footer;
use super::hero::Hero;
use super::sections::{
    AboutSection, ContactSection, EventsSection, MissionStrip, NetworkSection, PillarsSection,
    WhySection,
};

const MAIN_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(debug_assertions)]
fn log_page_render(lang: i18n::Language) {
    // Lightweight render trace for diagnosing i18n refresh issues.
    dioxus::logger::tracing::debug!("[i18n] HubPage render (lang={lang})");
}

/// Composition root for the single-page site.
///
/// Owns the preference store (loaded once, written back on every toggle),
/// resolves the active dictionary and hands strings plus callbacks down to the
/// sections. `SiteConfig` is provided through context for the components that
/// need it.
#[component]
pub fn HubPage() -> Element {
    use_context_provider(SiteConfig::from_build_env);

    let mut store = use_signal(|| {
        PreferenceStore::load(PlatformStorage::default(), platform::system_prefers_dark())
    });

    // Re-runs whenever the store changes.
    use_effect(move || {
        platform::apply_preferences(store.read().preferences());
    });

    let prefs = store.read().preferences();
    let text = i18n::resolve(prefs.language);

    #[cfg(debug_assertions)]
    {
        log_page_render(prefs.language);
    }

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { class: "hub",
            AppNavbar {
                text,
                prefs,
                on_toggle_language: move |_| {
                    let next = store.write().toggle_language();
                    info!("language switched to {next}");
                },
                on_toggle_theme: move |_| {
                    let next = store.write().toggle_theme();
                    info!("theme switched to {next}");
                },
            }

            main { class: "hub__main",
                Hero { text }
                WhySection { text }
                MissionStrip { text }
                PillarsSection { text }
                EventsSection { text }
                NetworkSection { text }
                AboutSection { text }
                ContactSection { text }
            }

            Footer { text }
        }
    }
}
