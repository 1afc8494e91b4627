use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::views::HubPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:..route")]
    PageNotFound { route: Vec<String> },
}

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

/// The whole site is a single page; sections are reached through fragments.
#[component]
fn Home() -> Element {
    rsx! {
        HubPage {}
    }
}

#[component]
fn PageNotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        main { class: "hub hub--not-found",
            h1 { "404" }
            p { "/{path}" }
            Link { class: "button button--primary", to: Route::Home {}, "AI Safety Madrid" }
        }
    }
}
