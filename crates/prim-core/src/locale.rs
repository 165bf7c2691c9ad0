//! Locale codes and number symbols
//!
//! Static lookup consumed by [`Numeric::format`](crate::Numeric::format).
//! Symbols follow CLDR decimal formats for the listed locales.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Separators used to render a decimal number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberSymbols {
    /// Thousands separator
    pub group: &'static str,
    /// Decimal separator
    pub decimal: &'static str,
    /// Minus sign
    pub minus: &'static str,
    /// Digits required before grouping applies (1 groups `1234`, 2 does not)
    pub min_grouping: usize,
}

impl NumberSymbols {
    const fn new(group: &'static str, decimal: &'static str) -> Self {
        Self {
            group,
            decimal,
            minus: "-",
            min_grouping: 1,
        }
    }

    const fn with_min_grouping(mut self, digits: usize) -> Self {
        self.min_grouping = digits;
        self
    }

    const fn with_minus(mut self, minus: &'static str) -> Self {
        self.minus = minus;
        self
    }

    /// Insert group separators into a run of ASCII digits
    #[must_use]
    pub fn group_digits(&self, digits: &str) -> String {
        if digits.len() < 3 + self.min_grouping {
            return digits.to_string();
        }
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 * self.group.len());
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push_str(self.group);
            }
            out.push(ch);
        }
        out
    }
}

const NBSP: &str = "\u{a0}";
const NNBSP: &str = "\u{202f}";

struct Entry {
    code: &'static str,
    name: &'static str,
    symbols: NumberSymbols,
}

static LOCALES: &[Entry] = &[
    Entry { code: "de_AT", name: "German (Austria)", symbols: NumberSymbols::new(NBSP, ",") },
    Entry { code: "de_CH", name: "German (Switzerland)", symbols: NumberSymbols::new("\u{2019}", ".") },
    Entry { code: "de_DE", name: "German (Germany)", symbols: NumberSymbols::new(".", ",") },
    Entry { code: "en_AU", name: "English (Australia)", symbols: NumberSymbols::new(",", ".") },
    Entry { code: "en_CA", name: "English (Canada)", symbols: NumberSymbols::new(",", ".") },
    Entry { code: "en_GB", name: "English (United Kingdom)", symbols: NumberSymbols::new(",", ".") },
    Entry { code: "en_US", name: "English (United States)", symbols: NumberSymbols::new(",", ".") },
    Entry { code: "es_ES", name: "Spanish (Spain)", symbols: NumberSymbols::new(".", ",").with_min_grouping(2) },
    Entry { code: "es_MX", name: "Spanish (Mexico)", symbols: NumberSymbols::new(",", ".") },
    Entry { code: "fr_BE", name: "French (Belgium)", symbols: NumberSymbols::new(NNBSP, ",") },
    Entry { code: "fr_CA", name: "French (Canada)", symbols: NumberSymbols::new(NBSP, ",") },
    Entry { code: "fr_FR", name: "French (France)", symbols: NumberSymbols::new(NNBSP, ",") },
    Entry { code: "it_IT", name: "Italian (Italy)", symbols: NumberSymbols::new(".", ",") },
    Entry { code: "ja_JP", name: "Japanese (Japan)", symbols: NumberSymbols::new(",", ".") },
    Entry { code: "ko_KR", name: "Korean (South Korea)", symbols: NumberSymbols::new(",", ".") },
    Entry { code: "nl_NL", name: "Dutch (Netherlands)", symbols: NumberSymbols::new(".", ",") },
    Entry { code: "pl_PL", name: "Polish (Poland)", symbols: NumberSymbols::new(NBSP, ",").with_min_grouping(2) },
    Entry { code: "pt_BR", name: "Portuguese (Brazil)", symbols: NumberSymbols::new(".", ",") },
    Entry { code: "pt_PT", name: "Portuguese (Portugal)", symbols: NumberSymbols::new(NBSP, ",").with_min_grouping(2) },
    Entry { code: "ru_RU", name: "Russian (Russia)", symbols: NumberSymbols::new(NBSP, ",") },
    Entry { code: "sv_SE", name: "Swedish (Sweden)", symbols: NumberSymbols::new(NBSP, ",").with_minus("\u{2212}") },
    Entry { code: "tr_TR", name: "Turkish (Turkey)", symbols: NumberSymbols::new(".", ",") },
    Entry { code: "zh_CN", name: "Chinese (China)", symbols: NumberSymbols::new(",", ".") },
    Entry { code: "zh_TW", name: "Chinese (Taiwan)", symbols: NumberSymbols::new(",", ".") },
];

/// Locale identifier such as `en_US`
///
/// Any code can be held; lookups report unknown codes as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// German (Germany)
    pub const DE_DE: &'static str = "de_DE";
    /// English (United Kingdom)
    pub const EN_GB: &'static str = "en_GB";
    /// English (United States)
    pub const EN_US: &'static str = "en_US";
    /// Spanish (Spain)
    pub const ES_ES: &'static str = "es_ES";
    /// French (France)
    pub const FR_FR: &'static str = "fr_FR";
    /// Italian (Italy)
    pub const IT_IT: &'static str = "it_IT";
    /// Japanese (Japan)
    pub const JA_JP: &'static str = "ja_JP";
    /// Portuguese (Brazil)
    pub const PT_BR: &'static str = "pt_BR";
    /// Swedish (Sweden)
    pub const SV_SE: &'static str = "sv_SE";

    /// Locale from a code such as `fr_FR`
    #[inline]
    #[must_use]
    pub fn of(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Locale code
    #[inline]
    #[must_use]
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Human-readable name, e.g. `English (United States)`
    #[must_use]
    pub fn full_name(&self) -> Option<&'static str> {
        self.entry().map(|e| e.name)
    }

    /// Number symbols for this locale
    #[must_use]
    pub fn number_symbols(&self) -> Option<NumberSymbols> {
        self.entry().map(|e| e.symbols)
    }

    /// Codes with known symbols, sorted
    pub fn known_codes() -> impl Iterator<Item = &'static str> {
        LOCALES.iter().map(|e| e.code)
    }

    fn entry(&self) -> Option<&'static Entry> {
        LOCALES
            .binary_search_by(|e| e.code.cmp(self.0.as_str()))
            .ok()
            .map(|i| &LOCALES[i])
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::of(Self::EN_US)
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
