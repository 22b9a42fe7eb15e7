//! Amount parsing and currency display helpers.
//!
//! [`parse_amount`] is the only way free text becomes a number. It fails
//! closed instead of yielding `NaN`.

use crate::domain::error::AmountParseError;
use std::fmt;
use std::str::FromStr;

const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥', '₫'];

pub fn parse_amount(raw: &str) -> Result<f64, AmountParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AmountParseError::Empty);
    }

    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };
    let rest = rest
        .strip_prefix(CURRENCY_SYMBOLS)
        .map(str::trim_start)
        .unwrap_or(rest);

    let cleaned: String = rest.chars().filter(|&c| c != ',').collect();
    let invalid = || AmountParseError::Invalid {
        raw: raw.to_string(),
    };

    if cleaned.is_empty() || cleaned.starts_with(['+', '-']) {
        return Err(invalid());
    }
    let value: f64 = cleaned.parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }

    Ok(if negative { -value } else { value })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Jpy,
    Cny,
    Vnd,
    Cad,
    Aud,
    Chf,
    Sgd,
}

impl Currency {
    pub const ALL: [Currency; 10] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Jpy,
        Currency::Cny,
        Currency::Vnd,
        Currency::Cad,
        Currency::Aud,
        Currency::Chf,
        Currency::Sgd,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Cny => "CNY",
            Currency::Vnd => "VND",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
            Currency::Chf => "CHF",
            Currency::Sgd => "SGD",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Currency::Usd => "US Dollar",
            Currency::Eur => "Euro",
            Currency::Gbp => "British Pound",
            Currency::Jpy => "Japanese Yen",
            Currency::Cny => "Chinese Yuan",
            Currency::Vnd => "Vietnamese Dong",
            Currency::Cad => "Canadian Dollar",
            Currency::Aud => "Australian Dollar",
            Currency::Chf => "Swiss Franc",
            Currency::Sgd => "Singapore Dollar",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd | Currency::Cad | Currency::Aud | Currency::Sgd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Jpy | Currency::Cny => "¥",
            Currency::Vnd => "₫",
            Currency::Chf => "CHF",
        }
    }

    pub fn decimal_places(self) -> u32 {
        match self {
            Currency::Jpy | Currency::Vnd => 0,
            _ => 2,
        }
    }

    /// Like `from_str`, but unknown codes fall back to USD.
    pub fn lookup(code: &str) -> Currency {
        code.parse().unwrap_or_else(|_| {
            log::warn!("unknown currency {code:?}, falling back to USD");
            Currency::default()
        })
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unsupported currency code: {0}")]
pub struct UnknownCurrency(pub String);

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Currency::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| UnknownCurrency(s.to_string()))
    }
}

/// Round half away from zero to the currency's minor unit. Amounts too
/// large to scale are already whole in every minor unit and come back as-is.
pub fn round_currency(amount: f64, currency: Currency) -> f64 {
    let factor = 10_f64.powi(currency.decimal_places() as i32);
    let scaled = amount * factor;
    if !scaled.is_finite() {
        return amount;
    }
    scaled.round() / factor
}

/// Symbol-prefixed amount with thousands separators, e.g. `$1,234.50`.
/// Non-finite amounts render as an empty string.
pub fn format_amount(amount: f64, currency: Currency) -> String {
    if !amount.is_finite() {
        return String::new();
    }
    let places = currency.decimal_places() as usize;
    let fixed = format!("{:.*}", places, round_currency(amount, currency).abs());
    let (whole, frac) = match fixed.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = amount < 0.0 && fixed.chars().any(|c| c != '0' && c != '.');
    let sign = if negative { "-" } else { "" };
    match frac {
        Some(frac) => format!("{sign}{}{grouped}.{frac}", currency.symbol()),
        None => format!("{sign}{}{grouped}", currency.symbol()),
    }
}

/// Like [`format_amount`] with an explicit `+` for positive amounts.
pub fn format_signed(amount: f64, currency: Currency) -> String {
    if !amount.is_finite() {
        return String::new();
    }
    let magnitude = format_amount(amount.abs(), currency);
    if amount > 0.0 {
        format!("+{magnitude}")
    } else if amount < 0.0 {
        format!("-{magnitude}")
    } else {
        magnitude
    }
}
