// src/domain/money.rs
//
// Currency presentation for decimal amounts.
// Formatting is a pure function of (format, amount); nothing here is global state.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// How amounts are rendered for humans
///
/// The default is the Brazilian real: `R$ 1.234,56`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub thousands_separator: char,
    pub decimal_separator: char,
    pub decimal_places: u32,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "R$".to_string(),
            thousands_separator: '.',
            decimal_separator: ',',
            decimal_places: 2,
        }
    }
}

impl CurrencyFormat {
    /// Render an amount, rounding half-to-even to `decimal_places`
    pub fn format(&self, amount: &Decimal) -> String {
        let rounded =
            amount.round_dp_with_strategy(self.decimal_places, RoundingStrategy::MidpointNearestEven);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();

        let plain = rounded.abs().to_string();
        let (integer, fraction) = match plain.split_once('.') {
            Some((integer, fraction)) => (integer.to_string(), fraction.to_string()),
            None => (plain, String::new()),
        };

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&self.symbol);
        out.push(' ');
        out.push_str(&self.group_thousands(&integer));

        if self.decimal_places > 0 {
            out.push(self.decimal_separator);
            // scale of the input may be below decimal_places
            let width = self.decimal_places as usize;
            out.push_str(&format!("{fraction:0<width$}"));
        }

        out
    }

    fn group_thousands(&self, digits: &str) -> String {
        let len = digits.len();
        let mut grouped = String::with_capacity(len + len / 3);
        for (idx, digit) in digits.chars().enumerate() {
            if idx > 0 && (len - idx) % 3 == 0 {
                grouped.push(self.thousands_separator);
            }
            grouped.push(digit);
        }
        grouped
    }
}

/// Format an amount with the default currency format
pub fn format_currency(amount: &Decimal) -> String {
    CurrencyFormat::default().format(amount)
}
