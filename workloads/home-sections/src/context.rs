//! Render inputs shared by every section.

use storefront_core::{Locale, Translations};

/// Locale and translation table for one render.
#[derive(Debug, Clone, Copy)]
pub struct PageContext {
    pub locale: Locale,
    pub t: &'static Translations,
}

impl PageContext {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            t: Translations::for_locale(locale),
        }
    }

    pub fn is_rtl(&self) -> bool {
        self.locale.is_rtl()
    }

    /// Pick between inline French and Arabic copy.
    pub fn pick<'a>(&self, fr: &'a str, ar: &'a str) -> &'a str {
        self.locale.pick(fr, ar)
    }
}
