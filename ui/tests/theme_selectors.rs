#![cfg(test)]
/*!
Theme selector lint for the shared stylesheet.

Purpose:
- Ensure the CSS selectors the Rust components emit remain present in
  `ui/assets/theme/main.css` and `ui/assets/styling/navbar.css`.
- Ensure both token sets exist: light on `:root`, dark on `:root.dark` (the
  class the preference store toggles on `<html>`).

If you intentionally rename or remove a selector:
    1. Update the component markup.
    2. Adjust REQUIRED_SELECTORS accordingly.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Core selectors / tokens that must exist in the shared theme.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root {",
    ":root.dark {",
    "body {",
    ".section {",
    ".section__inner",
    ".section--tinted",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--outline",
    ".button--outline-green",
    // Page blocks
    ".hero",
    ".why",
    ".mission",
    ".pillars",
    ".pillar-card",
    ".pillar-card__link",
    ".event-panel",
    ".network",
    ".collab-card",
    ".about",
    // Subscribe form
    ".subscribe__form",
    ".subscribe__input",
    ".subscribe__success",
    ".subscribe__notice--error",
    // Footer
    ".footer",
    ".footer__closing",
    ".footer__social-link--pending",
    // Responsive block
    "@media (max-width: 960px)",
];

/// Tokens every theme must define.
const THEME_TOKENS: &[&str] = &[
    "--color-bg",
    "--color-surface",
    "--color-text",
    "--color-muted",
    "--color-accent",
    "--color-link",
    "--color-success",
    "--color-border",
];

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(*sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in theme:\n{:?}",
            missing.len(),
            missing
        );
    }
}

#[test]
fn light_and_dark_define_the_same_tokens() {
    let light = block_after(THEME_CSS, ":root {");
    let dark = block_after(THEME_CSS, ":root.dark {");
    for token in THEME_TOKENS {
        assert!(light.contains(token), "light theme lacks {token}");
        assert!(dark.contains(token), "dark theme lacks {token}");
    }
}

#[test]
fn navbar_styles_cover_both_states() {
    for sel in [
        ".navbar {",
        ".navbar--scrolled",
        ".navbar__links",
        ".navbar__toggle",
        ".navbar__toggle--menu",
        ".navbar__menu",
    ] {
        assert!(NAVBAR_CSS.contains(sel), "navbar.css lacks `{sel}`");
    }
}

/// Text between `opener` and the next closing brace.
fn block_after<'a>(css: &'a str, opener: &str) -> &'a str {
    let start = css
        .find(opener)
        .unwrap_or_else(|| panic!("`{opener}` not found"))
        + opener.len();
    let end = css[start..].find('}').map_or(css.len(), |i| start + i);
    &css[start..end]
}
