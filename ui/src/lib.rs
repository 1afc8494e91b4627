//! Shared UI crate for the AI Safety Madrid hub. All logic, components and views live here;
//! platform crates only launch [`views::HubPage`].

pub mod components;
pub mod core;
pub mod i18n;
pub mod views;
