use std::collections::{BTreeSet, HashSet};

const REFERENCE: &str = include_str!("../i18n/es/hub-ui.ftl");

const LOCALES: &[(&str, &str)] = &[("en", include_str!("../i18n/en/hub-ui.ftl"))];

/// Message ids per locale must match `es/hub-ui.ftl` exactly.
///
/// Keys are read line by line: a non-indented `id = value` line defines `id`.
/// Comments, attributes and multi-line bodies are skipped. A new locale needs
/// its file under `ui/i18n/<code>/` and an entry in `LOCALES` below.
#[test]
fn all_locales_match_reference_keys() {
    let reference_keys = message_keys(REFERENCE);
    assert!(!reference_keys.is_empty(), "es catalog defines no messages");
    reject_duplicates(REFERENCE, "es");

    let mut failures = Vec::new();

    for (locale, src) in LOCALES {
        reject_duplicates(src, locale);

        let keys = message_keys(src);
        let missing: BTreeSet<&String> = reference_keys.difference(&keys).collect();
        let extra: BTreeSet<&String> = keys.difference(&reference_keys).collect();

        if !missing.is_empty() {
            failures.push(format!(
                "{locale}: {} id(s) absent:\n  {}",
                missing.len(),
                missing.into_iter().cloned().collect::<Vec<_>>().join("\n  ")
            ));
        }
        if !extra.is_empty() {
            failures.push(format!(
                "{locale}: {} id(s) not in es:\n  {}",
                extra.len(),
                extra.into_iter().cloned().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation parity check failed:\n\n{}\n\nHint: every locale must carry the same ids as es.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn no_locale_has_empty_values() {
    for (locale, src) in std::iter::once(&("es", REFERENCE)).chain(LOCALES) {
        for line in src.lines() {
            if line.starts_with('#') || line.starts_with(char::is_whitespace) {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                assert!(
                    !value.trim().is_empty(),
                    "{locale}: `{}` has an empty value",
                    key.trim()
                );
            }
        }
    }
}

fn message_keys(src: &str) -> HashSet<String> {
    src.lines().filter_map(key_of).map(str::to_string).collect()
}

/// Id defined on this line, if any. Fluent ids are `[a-zA-Z][a-zA-Z0-9_-]*`.
fn key_of(raw: &str) -> Option<&str> {
    // Continuation lines and attributes are indented.
    if raw.starts_with(char::is_whitespace) {
        return None;
    }
    let (left, _right) = raw.split_once('=')?;
    let key = left.trim_end();
    let mut chars = key.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    valid.then_some(key)
}

#[test]
fn key_scanner_follows_fluent_identifiers() {
    let src = "# nav = comment\nnav-home = Home\nnavExtra = X\nnav_extra = Y\n-brand = T\n    .label = L\n";
    let keys = message_keys(src);
    let expected: HashSet<String> = ["nav-home", "navExtra", "nav_extra"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(keys, expected);
}

/// Fluent refuses a resource that repeats an id.
fn reject_duplicates(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let repeated: BTreeSet<&str> = src
        .lines()
        .filter_map(key_of)
        .filter(|key| !seen.insert(*key))
        .collect();

    assert!(
        repeated.is_empty(),
        "{locale} defines these ids more than once: {repeated:?}"
    );
}
