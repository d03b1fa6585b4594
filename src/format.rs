//! Display formatting for movie fields.
//!
//! None of these functions fail. Absent or invalid input maps to
//! [`NOT_AVAILABLE`].

use std::fmt;

use serde::Serialize;

/// Sentinel shown for any missing or invalid value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Glyph set used to draw a [`StarRating`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StarStyle {
    #[default]
    Unicode,
    Ascii,
}

impl StarStyle {
    const fn glyphs(self) -> (char, char, char) {
        match self {
            Self::Unicode => ('★', '⯪', '☆'),
            Self::Ascii => ('*', '+', '.'),
        }
    }
}

/// Five-slot star rating. `full + half + empty` is always five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    pub const SLOTS: u8 = 5;

    #[must_use]
    pub fn render(&self, style: StarStyle) -> String {
        let (full, half, empty) = style.glyphs();
        let mut out = String::with_capacity(usize::from(Self::SLOTS) * 3);
        out.extend(std::iter::repeat_n(full, usize::from(self.full)));
        if self.half {
            out.push(half);
        }
        out.extend(std::iter::repeat_n(empty, usize::from(self.empty)));
        out
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(StarStyle::Unicode))
    }
}

/// Map a 0-10 vote average onto five stars. Half a star is shown when the
/// remainder after halving is at least 0.5.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_stars(vote_average: Option<f64>) -> StarRating {
    let rating = vote_average
        .filter(|v| !v.is_nan())
        .map_or(0.0, |v| (v / 2.0).clamp(0.0, f64::from(StarRating::SLOTS)));
    let full = rating.floor();
    let half = rating - full >= 0.5;
    let full = full as u8;

    StarRating {
        full,
        half,
        empty: StarRating::SLOTS - full - u8::from(half),
    }
}

/// `"$ 1,234,567"`, or [`NOT_AVAILABLE`] for absent, non-finite or
/// non-positive amounts. Up to three fraction digits are kept.
#[must_use]
pub fn format_money(amount: Option<f64>) -> String {
    match amount {
        Some(n) if n.is_finite() && n > 0.0 => format!("$ {}", group_thousands(n)),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Four-digit year prefix of an ISO-like date.
#[must_use]
pub fn format_year(date: Option<&str>) -> String {
    date.and_then(|d| d.get(..4))
        .filter(|year| year.bytes().all(|b| b.is_ascii_digit()))
        .map_or_else(|| NOT_AVAILABLE.to_string(), str::to_string)
}

/// `"<N> min"`; zero, absent and non-finite runtimes are unknown.
#[must_use]
pub fn format_runtime(minutes: Option<f64>) -> String {
    match minutes {
        Some(m) if m.is_finite() && m != 0.0 => format!("{m} min"),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn group_thousands(n: f64) -> String {
    let fixed = format!("{n:.3}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let digits = int_part.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    for (i, &digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(char::from(digit));
    }

    let frac = frac_part.trim_end_matches('0');
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}
