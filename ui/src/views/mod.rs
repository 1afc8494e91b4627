mod footer;
mod hero;
mod sections;

mod hub_page;
pub use hub_page::HubPage;

pub use sections::{COMMUNITY_URL, PARTNERS};
