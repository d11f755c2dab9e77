#![forbid(unsafe_code)]

//! Localization for the Rule of 72 calculator.
//!
//! Two hardcoded locales (English and Nepali) with typed string tables,
//! single-pass `{name}` template expansion, and the number and currency
//! formatting the calculator displays. Nothing here touches rendering or
//! the runtime; every function is pure and directly testable.

pub mod locale;
pub mod money;
pub mod template;

pub use locale::{Lang, LocaleStrings, strings, strings_for_code};
pub use money::{Currency, format_currency, format_rate, format_years};
pub use template::{Segment, expand, interpolate};
