use serde::{Deserialize, Deserializer};

use super::{parse_cents, Cents};

/// A credit-card product as published by the remote offer source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CardOffer {
    #[serde(rename = "nombre", default, deserialize_with = "text_or_number")]
    pub name: String,
    #[serde(rename = "institucion", default, deserialize_with = "text_or_number")]
    pub institution: String,
    /// Raw minimum income text, e.g. "$2,000"
    #[serde(rename = "ingresoMinimo", default, deserialize_with = "text_or_number")]
    pub minimum_income: String,
    #[serde(rename = "tasaInteres", default, deserialize_with = "text_or_number")]
    pub interest_rate: String,
    #[serde(rename = "beneficios", default, deserialize_with = "text_or_number")]
    pub benefits: String,
    #[serde(rename = "img", default, deserialize_with = "text_or_number")]
    pub image_url: String,
}

impl CardOffer {
    /// Minimum income in cents, after stripping a leading `$` and grouping commas.
    /// Returns `None` when the text is not a number.
    pub fn minimum_income_cents(&self) -> Option<Cents> {
        parse_income(&self.minimum_income)
    }
}

/// Parse an income amount such as "$2,000" or "1500.50" into cents.
/// Only the leading number counts, so "$5,000 MXN" is 5000.
pub fn parse_income(raw: &str) -> Option<Cents> {
    let trimmed = raw.trim();
    let without_symbol = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let digits: String = without_symbol.chars().filter(|c| *c != ',').collect();
    parse_cents(leading_number(digits.trim_start())).ok()
}

/// Longest prefix shaped like `[+-]digits[.digits]`.
fn leading_number(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = match bytes.first() {
        Some(b'+' | b'-') => 1,
        _ => 0,
    };
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    &text[..end]
}

/// Accept a JSON string, a JSON number or null and keep its text.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
        Null(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
        Raw::Null(()) => String::new(),
    })
}
