//! Navbar state and in-page link targets.

use futures_util::{Stream, StreamExt};

use crate::core::state::SharedState;
use crate::i18n::Dictionary;

/// Section anchors, in page order.
pub const HOME: &str = "home";
pub const WHY: &str = "why";
pub const PILLARS: &str = "pillars";
pub const EVENTS: &str = "events";
pub const NETWORK: &str = "network";
pub const ABOUT: &str = "about";
pub const CONTACT: &str = "contact";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Mission,
    Events,
    About,
    Contact,
}

impl NavTarget {
    /// Primary navigation, as rendered left to right.
    pub const PRIMARY: [NavTarget; 5] = [
        NavTarget::Home,
        NavTarget::Mission,
        NavTarget::Events,
        NavTarget::About,
        NavTarget::Contact,
    ];

    /// Element id of the section this link jumps to.
    pub fn section_id(self) -> &'static str {
        match self {
            NavTarget::Home => HOME,
            NavTarget::Mission => WHY,
            NavTarget::Events => EVENTS,
            NavTarget::About => ABOUT,
            NavTarget::Contact => CONTACT,
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.section_id())
    }

    pub fn label(self, text: &Dictionary) -> &str {
        match self {
            NavTarget::Home => &text.nav.home,
            NavTarget::Mission => &text.nav.mission,
            NavTarget::Events => &text.nav.events,
            NavTarget::About => &text.nav.about,
            NavTarget::Contact => &text.nav.contact,
        }
    }
}

/// Element id referenced by an in-document link (`#events` → `events`).
/// Returns `None` for external links and the bare `#`.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Per-navbar UI state. Both flags are independent and start cleared.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
    threshold_px: f64,
}

impl NavState {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            menu_open: false,
            scrolled: false,
            threshold_px,
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Link activation inside the menu: navigate and close.
    pub fn follow_link(&mut self) {
        self.menu_open = false;
    }

    /// Update the scrolled flag from the current vertical offset. Returns true if it changed.
    pub fn observe_scroll(&mut self, offset_y: f64) -> bool {
        let scrolled = offset_y > self.threshold_px;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}

/// Feed viewport offsets into the navbar state until the source closes. Only
/// flips of the scrolled flag are written back, so plain scrolling does not
/// re-render the navbar.
pub async fn track_scroll<O, S>(mut offsets: O, mut nav: S)
where
    O: Stream<Item = f64> + Unpin,
    S: SharedState<NavState>,
{
    while let Some(offset) = offsets.next().await {
        let mut next = nav.snapshot();
        if next.observe_scroll(offset) {
            nav.replace(next);
        }
    }
}
