//! Display locales and bilingual values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two supported storefront languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// French, left-to-right.
    #[default]
    Fr,
    /// Arabic, right-to-left.
    Ar,
}

impl Locale {
    /// All supported locales.
    pub const ALL: [Locale; 2] = [Locale::Fr, Locale::Ar];

    /// BCP 47 language tag.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::Ar => "ar",
        }
    }

    /// Text direction for this locale.
    pub fn dir(&self) -> Direction {
        match self {
            Locale::Fr => Direction::Ltr,
            Locale::Ar => Direction::Rtl,
        }
    }

    /// Whether copy for this locale is laid out right-to-left.
    pub fn is_rtl(&self) -> bool {
        self.dir() == Direction::Rtl
    }

    /// Parse a language tag. Region subtags are ignored (`ar-DZ` is Arabic).
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "fr" => Some(Locale::Fr),
            "ar" => Some(Locale::Ar),
            _ => None,
        }
    }

    /// Pick between the French and Arabic variant of a value.
    pub fn pick<T>(&self, fr: T, ar: T) -> T {
        match self {
            Locale::Fr => fr,
            Locale::Ar => ar,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Text direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Value for the HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// A value supplied in both storefront languages.
///
/// Static tables use `Localized<&'static str>`; data decoded from the catalog
/// uses `Localized<String>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Localized<T> {
    pub fr: T,
    pub ar: T,
}

impl<T> Localized<T> {
    pub const fn new(fr: T, ar: T) -> Self {
        Self { fr, ar }
    }

    /// The variant for `locale`.
    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::Fr => &self.fr,
            Locale::Ar => &self.ar,
        }
    }
}

impl<'a> Localized<&'a str> {
    /// Borrowed text for `locale`.
    pub fn text(&self, locale: Locale) -> &'a str {
        *self.get(locale)
    }
}

impl Localized<String> {
    /// Borrowed text for `locale`.
    pub fn text(&self, locale: Locale) -> &str {
        self.get(locale).as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_codes() {
        assert_eq!(Locale::Fr.code(), "fr");
        assert_eq!(Locale::Ar.code(), "ar");
        assert_eq!(Locale::from_code("AR"), Some(Locale::Ar));
        assert_eq!(Locale::from_code("fr-FR"), Some(Locale::Fr));
        assert_eq!(Locale::from_code("ar_DZ"), Some(Locale::Ar));
        assert_eq!(Locale::from_code("en"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn test_locale_direction() {
        assert_eq!(Locale::Fr.dir().as_str(), "ltr");
        assert_eq!(Locale::Ar.dir().as_str(), "rtl");
        assert!(Locale::Ar.is_rtl());
        assert!(!Locale::Fr.is_rtl());
    }

    #[test]
    fn test_localized_selection() {
        let title = Localized::new("Garantie", "ضمان");
        assert_eq!(title.text(Locale::Fr), "Garantie");
        assert_eq!(title.text(Locale::Ar), "ضمان");
        assert_eq!(Locale::Ar.pick(1, 2), 2);
    }

    #[test]
    fn test_locale_serde() {
        let json = serde_json::to_string(&Locale::Ar).unwrap();
        assert_eq!(json, "\"ar\"");
        let parsed: Locale = serde_json::from_str("\"fr\"").unwrap();
        assert_eq!(parsed, Locale::Fr);
    }
}
