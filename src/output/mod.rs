pub mod csv;
pub mod table;

use anyhow::Result;
use serde::Serialize;

use crate::assumptions::Currency;

/// Pretty-printed JSON for any of the output types; the `--output json`
/// and API surfaces share the same serialization.
pub fn render_json<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string_pretty(value)?)
}

/// Currency-prefixed, thousands-grouped, whole-unit money string. Display
/// only; the underlying values stay f64 throughout.
pub fn money(value: f64, currency: Currency) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{sign}{}{grouped}", currency.symbol())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(money(19110.4, Currency::Eur), "€19,110");
        assert_eq!(money(950.0, Currency::Usd), "$950");
        assert_eq!(money(1_234_567.0, Currency::Gbp), "£1,234,567");
        assert_eq!(money(0.0, Currency::Eur), "€0");
    }

    #[test]
    fn money_puts_the_sign_before_the_symbol() {
        assert_eq!(money(-1_234.0, Currency::Eur), "-€1,234");
    }
}
