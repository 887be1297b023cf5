//! Ingredient line parsing.
//!
//! Turns raw lines such as "1 1/2 cups of flour (sifted)" into a count, a unit
//! and a name. This is a best-effort heuristic, not a grammar: anything it does
//! not understand ends up in the name with no count.
//!
//! Known limitations:
//! - ranges ("2-3 cloves garlic") are not understood and yield no count;
//! - unit words are matched greedily, so "can" is always a unit when it
//!   directly follows the count.

use std::fmt;

/// Known measuring units. Long, short and plural spellings map to one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Tbsp,
    Tsp,
    Cup,
    Oz,
    Pound,
    Gram,
    Kilogram,
    Milliliter,
    Liter,
    Pinch,
    Clove,
    Can,
    Jar,
    Package,
    Slice,
}

impl Unit {
    /// Recognise a unit token (already lowercased)
    pub fn from_token(token: &str) -> Option<Unit> {
        let token = token.trim_end_matches(['.', ',']);
        let unit = match token {
            "tablespoons" | "tablespoon" | "tbsp" | "tbsps" | "tbs" => Unit::Tbsp,
            "teaspoons" | "teaspoon" | "tsp" | "tsps" => Unit::Tsp,
            "cups" | "cup" => Unit::Cup,
            "ounces" | "ounce" | "oz" => Unit::Oz,
            "pounds" | "pound" | "lbs" | "lb" => Unit::Pound,
            "grams" | "gram" | "g" => Unit::Gram,
            "kilograms" | "kilogram" | "kg" => Unit::Kilogram,
            "milliliters" | "milliliter" | "millilitres" | "millilitre" | "ml" => Unit::Milliliter,
            "liters" | "liter" | "litres" | "litre" | "l" => Unit::Liter,
            "pinches" | "pinch" => Unit::Pinch,
            "cloves" | "clove" => Unit::Clove,
            "cans" | "can" => Unit::Can,
            "jars" | "jar" => Unit::Jar,
            "packages" | "package" | "pkg" | "pkgs" => Unit::Package,
            "slices" | "slice" => Unit::Slice,
            _ => return None,
        };
        Some(unit)
    }

    /// Short display form
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Tbsp => "tbsp",
            Unit::Tsp => "tsp",
            Unit::Cup => "cup",
            Unit::Oz => "oz",
            Unit::Pound => "pound",
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Milliliter => "ml",
            Unit::Liter => "l",
            Unit::Pinch => "pinch",
            Unit::Clove => "clove",
            Unit::Can => "can",
            Unit::Jar => "jar",
            Unit::Package => "package",
            Unit::Slice => "slice",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const STOP_WORDS: &[&str] = &["of", "a", "an", "the"];

/// Unicode vulgar fractions and their ASCII spelling
const UNICODE_FRACTIONS: &[(char, &str)] = &[
    ('½', "1/2"),
    ('⅓', "1/3"),
    ('⅔', "2/3"),
    ('¼', "1/4"),
    ('¾', "3/4"),
    ('⅕', "1/5"),
    ('⅖', "2/5"),
    ('⅗', "3/5"),
    ('⅘', "4/5"),
    ('⅙', "1/6"),
    ('⅚', "5/6"),
    ('⅛', "1/8"),
    ('⅜', "3/8"),
    ('⅝', "5/8"),
    ('⅞', "7/8"),
];

/// One parsed ingredient of a recipe
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    /// Count for the current servings, `None` when the line had no number
    pub count: Option<f64>,
    pub unit: Option<Unit>,
    pub ingredient: String,
    original_count: Option<f64>,
}

impl Ingredient {
    pub fn new(count: Option<f64>, unit: Option<Unit>, ingredient: impl Into<String>) -> Self {
        Ingredient {
            count,
            unit,
            ingredient: ingredient.into(),
            original_count: count,
        }
    }

    /// Parse a raw ingredient line. Never fails.
    pub fn parse(line: &str) -> Self {
        let normalized = strip_parentheses(&normalize_fractions(&line.to_lowercase()));
        let tokens: Vec<&str> = normalized.split_whitespace().collect();

        let (count, mut rest) = take_count(&tokens);
        rest = skip_stop_words(rest);

        let unit = rest.first().and_then(|token| Unit::from_token(token));
        if unit.is_some() {
            rest = skip_stop_words(&rest[1..]);
        }

        Ingredient::new(count, unit, rest.join(" "))
    }

    /// Count as parsed from the line, before any servings scaling
    pub fn original_count(&self) -> Option<f64> {
        self.original_count
    }

    /// Set the current count to `original * ratio`
    pub(crate) fn rescale(&mut self, ratio: f64) {
        self.count = self.original_count.map(|count| count * ratio);
    }

    /// Current count rounded for display, e.g. "1 1/2"
    pub fn display_count(&self) -> Option<String> {
        self.count.map(format_quantity)
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(count) = self.display_count() {
            parts.push(count);
        }
        if let Some(unit) = self.unit {
            parts.push(unit.to_string());
        }
        if !self.ingredient.is_empty() {
            parts.push(self.ingredient.clone());
        }
        f.write_str(&parts.join(" "))
    }
}

/// Replace unicode fractions with "a/b", splitting "1½" into "1 1/2"
fn normalize_fractions(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '\u{2044}' {
            out.push('/');
        } else if let Some((_, ascii)) = UNICODE_FRACTIONS.iter().find(|(f, _)| *f == c) {
            if out.ends_with(|p: char| p.is_ascii_digit()) {
                out.push(' ');
            }
            out.push_str(ascii);
        } else {
            out.push(c);
        }
    }
    out
}

/// Drop parenthesized asides like "(about 2 cups)"
fn strip_parentheses(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '(' => {
                depth += 1;
                out.push(' ');
            }
            ')' if depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

/// Leading count: "2", "1.5", "1/2", "1 1/2" or "1-1/2"
fn take_count<'a, 'b>(tokens: &'a [&'b str]) -> (Option<f64>, &'a [&'b str]) {
    let Some(first) = tokens.first() else {
        return (None, tokens);
    };

    if let Some((whole, frac)) = first.split_once('-') {
        return match (parse_decimal(whole), parse_fraction(frac)) {
            (Some(whole), Some(frac)) => (Some(whole + frac), &tokens[1..]),
            _ => (None, tokens),
        };
    }

    if let Some(value) = parse_fraction(first) {
        return (Some(value), &tokens[1..]);
    }

    let Some(whole) = parse_decimal(first) else {
        return (None, tokens);
    };

    match tokens.get(1).and_then(|t| parse_fraction(t)) {
        Some(frac) if !first.contains('.') => (Some(whole + frac), &tokens[2..]),
        _ => (Some(whole), &tokens[1..]),
    }
}

fn parse_decimal(token: &str) -> Option<f64> {
    let valid = !token.is_empty()
        && token.chars().all(|c| c.is_ascii_digit() || c == '.')
        && token.chars().any(|c| c.is_ascii_digit());
    if valid {
        token.parse().ok()
    } else {
        None
    }
}

fn parse_fraction(token: &str) -> Option<f64> {
    let (num, den) = token.split_once('/')?;
    let num = parse_decimal(num)?;
    let den = parse_decimal(den)?;
    if den == 0.0 {
        None
    } else {
        Some(num / den)
    }
}

fn skip_stop_words<'a, 'b>(mut tokens: &'a [&'b str]) -> &'a [&'b str] {
    while let Some(first) = tokens.first() {
        if STOP_WORDS.contains(first) {
            tokens = &tokens[1..];
        } else {
            break;
        }
    }
    tokens
}

/// Fractions a displayed amount may end in, eighths and thirds
const DISPLAY_FRACTIONS: [(f64, &str); 9] = [
    (0.125, "1/8"),
    (0.25, "1/4"),
    (1.0 / 3.0, "1/3"),
    (0.375, "3/8"),
    (0.5, "1/2"),
    (0.625, "5/8"),
    (2.0 / 3.0, "2/3"),
    (0.75, "3/4"),
    (0.875, "7/8"),
];

/// Round to the nearest eighth or third and render as a mixed fraction.
/// Positive amounts too small for an eighth still show as "1/8".
pub fn format_quantity(value: f64) -> String {
    if !value.is_finite() || value <= 0.0 {
        return "0".to_string();
    }

    let mut whole = value.floor() as i64;
    let rest = value - value.floor();

    // Candidates are the whole number itself, each fraction, and the next whole
    let mut best: (f64, Option<&str>) = (rest, None);
    for (frac, label) in DISPLAY_FRACTIONS {
        let distance = (rest - frac).abs();
        if distance < best.0 {
            best = (distance, Some(label));
        }
    }
    if 1.0 - rest < best.0 {
        whole += 1;
        best = (1.0 - rest, None);
    }

    match (whole, best.1) {
        (0, Some(frac)) => frac.to_string(),
        (0, None) => "1/8".to_string(),
        (whole, Some(frac)) => format!("{} {}", whole, frac),
        (whole, None) => whole.to_string(),
    }
}
