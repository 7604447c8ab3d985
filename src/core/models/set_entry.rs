//! Set entry
//!
//! A set is recorded exactly as the user typed it. Weight and reps stay raw
//! text so that nothing the user entered is silently corrected; numeric
//! values are derived on demand with [`parse_weight`] and [`parse_reps`].

use serde::{Deserialize, Deserializer, Serialize};

/// One set of an exercise as entered by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetEntry {
    /// Weight as entered (may be empty or non-numeric)
    #[serde(default, deserialize_with = "raw_text")]
    pub weight: String,

    /// Reps as entered (may be empty or non-numeric)
    #[serde(default, deserialize_with = "raw_text")]
    pub reps: String,

    /// Whether the set was ticked off
    #[serde(default)]
    pub completed: bool,
}

impl SetEntry {
    /// Create a set from raw weight and reps text
    #[must_use]
    pub fn new(weight: impl Into<String>, reps: impl Into<String>, completed: bool) -> Self {
        Self {
            weight: weight.into(),
            reps: reps.into(),
            completed,
        }
    }

    /// Numeric weight, 0 when empty or invalid
    #[must_use]
    pub fn weight_value(&self) -> f64 {
        parse_weight(&self.weight)
    }

    /// Integer reps, 0 when empty or invalid
    #[must_use]
    pub fn reps_value(&self) -> u32 {
        parse_reps(&self.reps)
    }
}

/// Accepts strings, numbers, or null and keeps the textual form
#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
    Text(String),
    Integer(i64),
    Float(f64),
}

fn raw_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<RawText>::deserialize(deserializer)? {
        None => String::new(),
        Some(RawText::Text(s)) => s,
        Some(RawText::Integer(n)) => n.to_string(),
        Some(RawText::Float(f)) => f.to_string(),
    })
}

/// Parse a weight the lenient way: the longest leading decimal number wins
/// (`"62.5kg"` is 62.5). Empty, non-numeric, negative, or non-finite input
/// yields 0.
#[must_use]
pub fn parse_weight(raw: &str) -> f64 {
    numeric_prefix(raw, true)
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite() && *w > 0.0)
        .unwrap_or(0.0)
}

/// Parse reps the lenient way: the leading integer wins (`"8.5"` is 8,
/// `"10 reps"` is 10). Empty, non-numeric, or negative input yields 0.
#[must_use]
pub fn parse_reps(raw: &str) -> u32 {
    numeric_prefix(raw, false)
        .parse::<i64>()
        .ok()
        .filter(|r| *r > 0)
        .map_or(0, |r| u32::try_from(r).unwrap_or(u32::MAX))
}

/// Longest prefix of `raw` (after leading whitespace) that reads as a number
fn numeric_prefix(raw: &str, allow_fraction: bool) -> &str {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count() + start
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;

    if allow_fraction && bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if has_digits || frac_end > end + 1 {
            has_digits = true;
            end = frac_end;
        }
    }

    if !has_digits {
        return "";
    }

    if allow_fraction && matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    &s[..end]
}
