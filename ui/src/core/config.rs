//! Site configuration.
//!
//! Values are baked in at compile time. Set any of these environment variables
//! while building to override the defaults:
//!
//! - `HUB_SUBSCRIBE_ENDPOINT` – form collection endpoint (JSON POST)
//! - `HUB_SUBSCRIBE_SUBJECT` – subject line attached to every submission
//! - `HUB_DISMISS_AFTER_MS` – confirmation auto-dismiss delay; `0` keeps it on screen

pub const DEFAULT_SUBSCRIBE_ENDPOINT: &str = "https://formsubmit.co/ajax/hola@iasafetymadrid.org";
pub const DEFAULT_SUBSCRIBE_SUBJECT: &str = "Nueva suscripción: IA Safety Madrid";
pub const DEFAULT_SUBSCRIBE_TEMPLATE: &str = "table";
pub const DEFAULT_DISMISS_AFTER_MS: u64 = 5_000;
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub subscribe_endpoint: String,
    pub subscribe_subject: String,
    pub subscribe_template: String,
    /// `None` keeps the confirmation visible until reload.
    pub dismiss_after_ms: Option<u64>,
    /// Vertical offset past which the navbar switches to its "scrolled" look.
    pub scroll_threshold_px: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            subscribe_endpoint: DEFAULT_SUBSCRIBE_ENDPOINT.to_string(),
            subscribe_subject: DEFAULT_SUBSCRIBE_SUBJECT.to_string(),
            subscribe_template: DEFAULT_SUBSCRIBE_TEMPLATE.to_string(),
            dismiss_after_ms: Some(DEFAULT_DISMISS_AFTER_MS),
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
        }
    }
}

impl SiteConfig {
    /// Defaults with compile-time overrides applied.
    pub fn from_build_env() -> Self {
        Self::with_overrides(
            option_env!("HUB_SUBSCRIBE_ENDPOINT"),
            option_env!("HUB_SUBSCRIBE_SUBJECT"),
            option_env!("HUB_DISMISS_AFTER_MS"),
        )
    }

    fn with_overrides(
        endpoint: Option<&str>,
        subject: Option<&str>,
        dismiss_after_ms: Option<&str>,
    ) -> Self {
        let mut config = Self::default();

        if let Some(endpoint) = endpoint.map(str::trim).filter(|s| !s.is_empty()) {
            config.subscribe_endpoint = endpoint.to_string();
        }
        if let Some(subject) = subject.map(str::trim).filter(|s| !s.is_empty()) {
            config.subscribe_subject = subject.to_string();
        }
        // Unparsable values keep the default delay.
        if let Some(ms) = dismiss_after_ms.and_then(|raw| raw.trim().parse::<u64>().ok()) {
            config.dismiss_after_ms = (ms > 0).then_some(ms);
        }

        config
    }
}
