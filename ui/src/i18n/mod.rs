//! Internationalization (i18n) support for `hub-ui`.
//!
//! This module wires together:
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `fluent` (message parsing + formatting)
//! - a strongly typed [`Dictionary`] per [`Language`], built once at startup
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   es/hub-ui.ftl   (reference locale)
//!   en/hub-ui.ftl   (additional locale)
//! ```
//!
//! Usage in a component:
//! ```ignore
//! let text = ui::i18n::resolve(prefs.language);
//! rsx! { h1 { "{text.hero.title}" } }
//! ```
//!
//! To add a new locale:
//! 1. Add a variant to [`Language`] (and to `Language::ALL`).
//! 2. Copy `es/hub-ui.ftl` to `i18n/<code>/hub-ui.ftl` and translate each value.
//! 3. Run tests; [`Catalog::load`] rejects any locale whose ids differ from the
//!    reference locale.
//!
//! Missing or extra message ids are a hard error at load time. We never render
//! an empty string in place of a missing translation.
use std::collections::BTreeSet;
use std::fmt;

use fluent::{FluentBundle, FluentResource};
use fluent_syntax::ast;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use unic_langid::LanguageIdentifier;

mod dictionary;
pub use dictionary::*;

/// Fluent "domain" (matches the crate / the FTL filename).
///
/// Every locale file path must be: `i18n/<code>/{DOMAIN}.ftl`
const DOMAIN: &str = "hub-ui";

/// Locale whose message ids every other locale must match exactly.
pub const REFERENCE_LANGUAGE: Language = Language::Es;

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Display language. Closed set; the persisted form is the lowercase code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Es, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    /// Parse a persisted code. Anything outside the closed set is `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "es" => Some(Language::Es),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// The other language. Applying it twice yields the original value.
    pub fn toggle(self) -> Self {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Es,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("locale {language}: embedded file {path} not found")]
    MissingFile { language: Language, path: String },
    #[error("locale {language}: catalog is not valid UTF-8")]
    Encoding { language: Language },
    #[error("locale {language}: not a valid language identifier")]
    InvalidLocale { language: Language },
    #[error("locale {language}: {errors} Fluent syntax error(s)")]
    Syntax { language: Language, errors: usize },
    #[error("locale {language}: {errors} duplicate message(s)")]
    DuplicateMessages { language: Language, errors: usize },
    /// The locale's id set differs from the reference locale.
    #[error(
        "locale {language} differs from {}: missing [{}], extra [{}]",
        REFERENCE_LANGUAGE,
        .missing.join(", "),
        .extra.join(", ")
    )]
    Parity {
        language: Language,
        missing: Vec<String>,
        extra: Vec<String>,
    },
    /// The dictionary asked for ids the locale does not define (or that failed to format).
    #[error("locale {language} cannot build a dictionary, missing [{}]", .missing.join(", "))]
    Incomplete {
        language: Language,
        missing: Vec<String>,
    },
}

/// Every dictionary, validated and resolved up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    es: Dictionary,
    en: Dictionary,
}

impl Catalog {
    /// Load and validate all embedded locales.
    pub fn load() -> Result<Self, CatalogError> {
        let reference_ids = message_ids(&parse(REFERENCE_LANGUAGE)?);

        for language in Language::ALL {
            check_parity(language, &reference_ids, &message_ids(&parse(language)?))?;
        }

        Ok(Self {
            es: build_dictionary(Language::Es)?,
            en: build_dictionary(Language::En)?,
        })
    }

    pub fn get(&self, language: Language) -> &Dictionary {
        match language {
            Language::Es => &self.es,
            Language::En => &self.en,
        }
    }
}

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::load().unwrap_or_else(|err| panic!("embedded translation catalog is invalid: {err}"))
});

/// Resolve the dictionary for `language`. Total and pure: the same language
/// always yields the same `'static` reference.
pub fn resolve(language: Language) -> &'static Dictionary {
    CATALOG.get(language)
}

/// List embedded locale folders (for diagnostics and tests).
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

fn source(language: Language) -> Result<String, CatalogError> {
    let path = format!("{}/{DOMAIN}.ftl", language.code());
    let file = Localizations::get(&path).ok_or_else(|| CatalogError::MissingFile {
        language,
        path: path.clone(),
    })?;
    String::from_utf8(file.data.into_owned()).map_err(|_| CatalogError::Encoding { language })
}

fn parse(language: Language) -> Result<FluentResource, CatalogError> {
    FluentResource::try_new(source(language)?).map_err(|(_, errors)| CatalogError::Syntax {
        language,
        errors: errors.len(),
    })
}

fn check_parity(
    language: Language,
    reference: &BTreeSet<String>,
    ids: &BTreeSet<String>,
) -> Result<(), CatalogError> {
    let missing: Vec<String> = reference.difference(ids).cloned().collect();
    let extra: Vec<String> = ids.difference(reference).cloned().collect();
    if missing.is_empty() && extra.is_empty() {
        Ok(())
    } else {
        Err(CatalogError::Parity {
            language,
            missing,
            extra,
        })
    }
}

fn build_dictionary(language: Language) -> Result<Dictionary, CatalogError> {
    let resource = parse(language)?;

    let langid: LanguageIdentifier = language
        .code()
        .parse()
        .map_err(|_| CatalogError::InvalidLocale { language })?;

    let mut bundle = FluentBundle::new(vec![langid]);
    // Plain strings only; no bidi isolation marks around placeables.
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .map_err(|errors| CatalogError::DuplicateMessages {
            language,
            errors: errors.len(),
        })?;

    let mut messages = Messages {
        bundle: &bundle,
        missing: Vec::new(),
    };
    let dictionary = Dictionary::build(&mut messages);

    if messages.missing.is_empty() {
        Ok(dictionary)
    } else {
        Err(CatalogError::Incomplete {
            language,
            missing: messages.missing,
        })
    }
}

/// Lookup helper handed to [`Dictionary::build`]; records every id it could not format.
pub(crate) struct Messages<'a> {
    bundle: &'a FluentBundle<FluentResource>,
    missing: Vec<String>,
}

impl Messages<'_> {
    pub(crate) fn msg(&mut self, id: &str) -> String {
        let Some(pattern) = self.bundle.get_message(id).and_then(|m| m.value()) else {
            self.missing.push(id.to_string());
            return String::new();
        };

        let mut errors = Vec::new();
        let text = self.bundle.format_pattern(pattern, None, &mut errors);
        if !errors.is_empty() {
            self.missing.push(id.to_string());
        }
        text.into_owned()
    }
}

/// Ids of every message the parser accepted. Terms (`-name`) are not messages.
pub(crate) fn message_ids(resource: &FluentResource) -> BTreeSet<String> {
    resource
        .entries()
        .filter_map(|entry| match entry {
            ast::Entry::Message(message) => Some(message.id.name.to_string()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_an_embedded_catalog() {
        let embedded = available_languages();
        for language in Language::ALL {
            assert!(
                embedded.iter().any(|l| l == language.code()),
                "no embedded catalog for {language}"
            );
        }
        assert_eq!(embedded.len(), Language::ALL.len());
    }

    #[test]
    fn embedded_catalog_loads() {
        if let Err(err) = Catalog::load() {
            panic!("catalog failed to load: {err}");
        }
    }

    #[test]
    fn resolve_is_pure() {
        for language in Language::ALL {
            let first = resolve(language);
            let second = resolve(language);
            assert!(std::ptr::eq(first, second));
            assert_eq!(first, second);
        }
    }

    #[test]
    fn basic_lookup_works() {
        assert_eq!(resolve(Language::Es).nav.home, "Inicio");
        assert_eq!(resolve(Language::En).nav.home, "Home");
        assert_eq!(resolve(Language::En).subscribe.success, "Thanks for subscribing!");
    }

    #[test]
    fn languages_resolve_to_distinct_dictionaries() {
        assert_ne!(resolve(Language::Es), resolve(Language::En));
    }

    #[test]
    fn toggling_twice_returns_to_the_original_dictionary() {
        for language in Language::ALL {
            let round_trip = language.toggle().toggle();
            assert_eq!(round_trip, language);
            assert!(std::ptr::eq(resolve(round_trip), resolve(language)));
        }
    }

    #[test]
    fn default_language_is_spanish() {
        assert_eq!(Language::default(), Language::Es);
    }

    #[test]
    fn codes_parse_back() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code(" EN "), Some(Language::En));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
    }

    fn resource(src: &str) -> FluentResource {
        FluentResource::try_new(src.to_string()).unwrap_or_else(|_| panic!("bad fixture: {src}"))
    }

    fn ids(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn message_ids_skip_comments_terms_and_attributes() {
        let src = "# comment\n## group\nfoo = Foo\n    continued line\n-term = T\nbar-baz=Bar\n    .attr = x\n";
        assert_eq!(message_ids(&resource(src)), ids(&["foo", "bar-baz"]));
    }

    #[test]
    fn parity_sees_mixed_case_and_underscore_ids() {
        let reference = message_ids(&resource("nav-home = Inicio\n"));
        let other = message_ids(&resource("nav-home = Home\nnavExtra = X\nnav_extra = Y\n"));
        assert_eq!(other, ids(&["nav-home", "navExtra", "nav_extra"]));

        assert_eq!(
            check_parity(Language::En, &reference, &other),
            Err(CatalogError::Parity {
                language: Language::En,
                missing: Vec::new(),
                extra: vec!["navExtra".into(), "nav_extra".into()],
            })
        );
        assert_eq!(
            check_parity(Language::Es, &other, &reference),
            Err(CatalogError::Parity {
                language: Language::Es,
                missing: vec!["navExtra".into(), "nav_extra".into()],
                extra: Vec::new(),
            })
        );
        assert_eq!(check_parity(Language::En, &other, &other), Ok(()));
    }

    #[test]
    fn catalog_errors_name_the_locale_and_ids() {
        let err = CatalogError::Parity {
            language: Language::En,
            missing: vec!["hero-title".into()],
            extra: vec!["navExtra".into(), "nav_extra".into()],
        };
        assert_eq!(
            err.to_string(),
            "locale en differs from es: missing [hero-title], extra [navExtra, nav_extra]"
        );
        let err = CatalogError::Syntax {
            language: Language::Es,
            errors: 2,
        };
        assert_eq!(err.to_string(), "locale es: 2 Fluent syntax error(s)");
    }

    #[test]
    fn no_text_is_left_empty() {
        for language in Language::ALL {
            let text = resolve(language);
            assert!(!text.nav.home.is_empty());
            assert!(!text.footer.closing.is_empty());
            assert!(!text.pillars.community.link.is_empty());
        }
    }
}
