#![forbid(unsafe_code)]

//! Display formatting for the calculator's numbers.
//!
//! Both locales format numbers the US way: comma-grouped integer digits
//! and two decimals for currency, one decimal for years. Only the
//! currency symbol changes between locales.

/// Currency attached to a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Usd,
    Npr,
}

impl Currency {
    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Npr => "NPR",
        }
    }

    /// Display symbol, always prefixed to the amount.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Npr => "रू",
        }
    }
}

/// Formats an amount as currency: sign, symbol, grouped integer digits,
/// two decimals. Negative amounts read `-$5.00`.
///
/// Rounds half away from zero at the second decimal. Total over all
/// finite and non-finite inputs; the calculator only passes validated
/// positive amounts.
#[must_use]
pub fn format_currency(amount: f64, currency: Currency) -> String {
    let negative = amount < 0.0;
    // Saturating cast: non-finite and out-of-range values clamp rather
    // than panic.
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let sign = if negative { "-" } else { "" };
    format!(
        "{sign}{}{}.{frac:02}",
        currency.symbol(),
        group_thousands(whole)
    )
}

/// Formats the years-to-double figure with one decimal place.
#[must_use]
pub fn format_years(years: f64) -> String {
    format!("{years:.1}")
}

/// Formats the rate exactly as the user gave it: the shortest decimal
/// form that round-trips (`8` stays `8`, `8.5` stays `8.5`).
#[must_use]
pub fn format_rate(rate: f64) -> String {
    rate.to_string()
}

/// Inserts a comma every three digits, counting from the right.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dollar_amounts_group_and_carry_two_decimals() {
        assert_eq!(format_currency(1000.0, Currency::Usd), "$1,000.00");
        assert_eq!(format_currency(1234567.891, Currency::Usd), "$1,234,567.89");
        assert_eq!(format_currency(0.5, Currency::Usd), "$0.50");
        assert_eq!(format_currency(999.0, Currency::Usd), "$999.00");
    }

    #[test]
    fn rupee_amounts_use_the_devanagari_symbol() {
        assert_eq!(format_currency(1000.0, Currency::Npr), "रू1,000.00");
        assert_eq!(format_currency(25.5, Currency::Npr), "रू25.50");
    }

    #[test]
    fn negative_sign_precedes_the_symbol() {
        assert_eq!(format_currency(-5.0, Currency::Usd), "-$5.00");
        assert_eq!(format_currency(-1234.5, Currency::Npr), "-रू1,234.50");
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        // Ties on exactly representable fractions round up in magnitude.
        assert_eq!(format_currency(0.125, Currency::Usd), "$0.13");
        assert_eq!(format_currency(-0.125, Currency::Usd), "-$0.13");
        assert_eq!(format_currency(0.375, Currency::Usd), "$0.38");
    }

    #[test]
    fn rounding_can_carry_into_the_grouping() {
        assert_eq!(format_currency(999.999, Currency::Usd), "$1,000.00");
    }

    #[test]
    fn non_finite_amounts_do_not_panic() {
        let _ = format_currency(f64::NAN, Currency::Usd);
        let _ = format_currency(f64::INFINITY, Currency::Usd);
        let _ = format_currency(f64::NEG_INFINITY, Currency::Npr);
    }

    #[test]
    fn years_always_show_one_decimal() {
        assert_eq!(format_years(9.0), "9.0");
        assert_eq!(format_years(72.0 / 7.0), "10.3");
        assert_eq!(format_years(7.2), "7.2");
        assert_eq!(format_years(0.72), "0.7");
    }

    #[test]
    fn rate_keeps_its_shortest_form() {
        assert_eq!(format_rate(8.0), "8");
        assert_eq!(format_rate(8.5), "8.5");
        assert_eq!(format_rate(0.125), "0.125");
        assert_eq!(format_rate(12.0), "12");
    }

    #[test]
    fn grouping_thresholds() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(999999), "999,999");
        assert_eq!(group_thousands(1000000), "1,000,000");
    }
}
