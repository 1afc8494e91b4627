//! Reusable presentational components.

mod anchor;
pub use anchor::InPageLink;

// Localized top navigation (components/app_navbar.rs)
pub mod app_navbar;
pub use app_navbar::AppNavbar;

mod cards;
pub use cards::{CollaborativeCard, ExternalLink, PillarCard};

mod section;
pub use section::Section;

mod subscribe_form;
pub use subscribe_form::SubscribeForm;
