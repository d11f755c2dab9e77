#![forbid(unsafe_code)]

//! The two locale tables and language selection.
//!
//! Strings live in `static` records, one per language, and are never
//! mutated. Lookup by language code falls back to English when the code
//! is not recognized.

use crate::money::Currency;

/// A supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Np,
}

impl Lang {
    /// Both languages, in language-bar order.
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Np];

    /// The two-letter code used on the command line and in logs.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Np => "np",
        }
    }

    /// Parses a language code, ASCII case-insensitively.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        if code.eq_ignore_ascii_case("en") {
            Some(Lang::En)
        } else if code.eq_ignore_ascii_case("np") {
            Some(Lang::Np)
        } else {
            None
        }
    }

    /// The name shown on this language's control in the language bar.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Np => "नेपाली",
        }
    }
}

/// Every user-visible string for one language, plus its currency.
///
/// `result_template` carries `{amount}`, `{years}`, and `{rate}`
/// placeholders; the two locales order them differently.
#[derive(Debug, Clone, Copy)]
pub struct LocaleStrings {
    pub title: &'static str,
    pub description: &'static str,
    pub amount_label: &'static str,
    pub rate_label: &'static str,
    pub amount_placeholder: &'static str,
    pub rate_placeholder: &'static str,
    pub calculate_label: &'static str,
    pub result_template: &'static str,
    pub amount_error: &'static str,
    pub rate_error: &'static str,
    pub currency: Currency,
}

static EN: LocaleStrings = LocaleStrings {
    title: "Rule of 72 Calculator",
    description: "Enter your amount and annual interest rate to find out \
                  how many years it will take to double your money.",
    amount_label: "Amount ($)",
    rate_label: "Annual Interest Rate (%)",
    amount_placeholder: "Enter amount",
    rate_placeholder: "Enter interest rate",
    calculate_label: "Calculate",
    result_template: "Your {amount} will be doubled in {years} years at {rate}% interest rate.",
    amount_error: "Please enter a valid amount greater than $0.",
    rate_error: "Please enter a valid interest rate greater than 0%.",
    currency: Currency::Usd,
};

static NP: LocaleStrings = LocaleStrings {
    title: "७२ को नियम क्यालकुलेटर",
    description: "तपाईंको रकम र वार्षिक ब्याज दर प्रविष्ट गर्नुहोस् र तपाईंको पैसा दोब्बर हुन कति वर्ष लाग्छ भनेर थाहा पाउनुहोस्।",
    amount_label: "रकम (रू)",
    rate_label: "वार्षिक ब्याज दर (%)",
    amount_placeholder: "रकम प्रविष्ट गर्नुहोस्",
    rate_placeholder: "ब्याज दर प्रविष्ट गर्नुहोस्",
    calculate_label: "गणना गर्नुहोस्",
    result_template: "तपाईंको {amount} {rate}% ब्याज दरमा {years} वर्षमा दोब्बर हुनेछ।",
    amount_error: "कृपया $0 भन्दा ठूलो मान्य रकम प्रविष्ट गर्नुहोस्।",
    rate_error: "कृपया 0% भन्दा ठूलो मान्य ब्याज दर प्रविष्ट गर्नुहोस्।",
    currency: Currency::Npr,
};

/// The string table for `lang`.
#[must_use]
pub fn strings(lang: Lang) -> &'static LocaleStrings {
    match lang {
        Lang::En => &EN,
        Lang::Np => &NP,
    }
}

/// The string table for a language code. Unrecognized codes fall back
/// to English.
#[must_use]
pub fn strings_for_code(code: &str) -> &'static LocaleStrings {
    strings(Lang::from_code(code).unwrap_or_default())
}
