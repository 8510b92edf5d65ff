use crate::types::board_error::BoardError;

/// Locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Locales with known currency formatting rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyLocale {
    EnUs,
    EnGb,
    DeDe,
    FrFr,
    EsEs,
    JaJp,
}

/// How an amount is written in a given locale.
struct CurrencyRules {
    symbol: &'static str,
    symbol_first: bool,
    group_separator: char,
    decimal_separator: char,
    fraction_digits: u32,
}

impl CurrencyLocale {
    pub const ALL: [CurrencyLocale; 6] = [
        CurrencyLocale::EnUs,
        CurrencyLocale::EnGb,
        CurrencyLocale::DeDe,
        CurrencyLocale::FrFr,
        CurrencyLocale::EsEs,
        CurrencyLocale::JaJp,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            CurrencyLocale::EnUs => "en-US",
            CurrencyLocale::EnGb => "en-GB",
            CurrencyLocale::DeDe => "de-DE",
            CurrencyLocale::FrFr => "fr-FR",
            CurrencyLocale::EsEs => "es-ES",
            CurrencyLocale::JaJp => "ja-JP",
        }
    }

    /// Accepts `en-US`, `en_US` or `en_US.UTF-8` style codes, ignoring case.
    pub fn from_str(code: &str) -> Result<CurrencyLocale, BoardError> {
        let normalized = code
            .split('.')
            .next()
            .unwrap_or_default()
            .replace('_', "-")
            .to_lowercase();

        CurrencyLocale::ALL
            .into_iter()
            .find(|locale| locale.code().to_lowercase() == normalized)
            .ok_or_else(|| BoardError::UnsupportedLocale(code.to_string()))
    }

    fn rules(&self) -> CurrencyRules {
        match self {
            CurrencyLocale::EnUs => CurrencyRules {
                symbol: "$",
                symbol_first: true,
                group_separator: ',',
                decimal_separator: '.',
                fraction_digits: 2,
            },
            CurrencyLocale::EnGb => CurrencyRules {
                symbol: "\u{00a3}",
                symbol_first: true,
                group_separator: ',',
                decimal_separator: '.',
                fraction_digits: 2,
            },
            CurrencyLocale::DeDe | CurrencyLocale::EsEs => CurrencyRules {
                symbol: "\u{20ac}",
                symbol_first: false,
                group_separator: '.',
                decimal_separator: ',',
                fraction_digits: 2,
            },
            CurrencyLocale::FrFr => CurrencyRules {
                symbol: "\u{20ac}",
                symbol_first: false,
                group_separator: '\u{202f}',
                decimal_separator: ',',
                fraction_digits: 2,
            },
            CurrencyLocale::JaJp => CurrencyRules {
                symbol: "\u{00a5}",
                symbol_first: true,
                group_separator: ',',
                decimal_separator: '.',
                fraction_digits: 0,
            },
        }
    }
}

/// Formats amounts as currency for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormatter {
    locale: CurrencyLocale,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        CurrencyFormatter::new(CurrencyLocale::EnUs)
    }
}

impl CurrencyFormatter {
    pub fn new(locale: CurrencyLocale) -> Self {
        CurrencyFormatter { locale }
    }

    pub fn locale(&self) -> CurrencyLocale {
        self.locale
    }

    /// Formats `amount` rounded to the locale's fraction digits.
    ///
    /// Fails for NaN, infinite, or amounts too large to round to whole minor units.
    pub fn format(&self, amount: f64) -> Result<String, BoardError> {
        if !amount.is_finite() {
            return Err(BoardError::NonFiniteAmount(amount));
        }

        let rules = self.locale.rules();
        let scale = 10_u64.pow(rules.fraction_digits);
        let minor_units = (amount.abs() * scale as f64).round();
        if minor_units >= u64::MAX as f64 {
            return Err(BoardError::Other(format!(
                "Amount too large to format: {}",
                amount
            )));
        }
        let minor_units = minor_units as u64;

        let mut number = group_digits(minor_units / scale, rules.group_separator);
        if rules.fraction_digits > 0 {
            number.push(rules.decimal_separator);
            number.push_str(&format!(
                "{:0width$}",
                minor_units % scale,
                width = rules.fraction_digits as usize
            ));
        }

        let sign = if amount < 0.0 && minor_units > 0 {
            "-"
        } else {
            ""
        };

        if rules.symbol_first {
            Ok(format!("{}{}{}", sign, rules.symbol, number))
        } else {
            Ok(format!("{}{}\u{00a0}{}", sign, number, rules.symbol))
        }
    }
}

fn group_digits(n: u64, separator: char) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(digit);
    }

    result
}
