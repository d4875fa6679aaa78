use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Separator between the two sides of a dimension string
const SEPARATOR: char = 'x';

// Sign, digits with an optional fraction, then an exponent only when digits follow it
static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").unwrap());

/// Width and height of a room, in the listing's unit
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Area covered by these dimensions
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Parse a raw dimension string such as `"10 x 12"` or `"4.11 m x 3.38 m"`.
///
/// Each side is read like a leading-number float parse, so trailing unit
/// text after a number is ignored. Anything without exactly one `x`, or
/// with a side that does not start with a number, yields `(0, 0)`. So do
/// sides whose product overflows.
pub fn parse_dimensions(text: &str) -> Dimensions {
    let mut segments = text.split(SEPARATOR);
    let (Some(first), Some(second), None) = (segments.next(), segments.next(), segments.next()) else {
        return Dimensions::default();
    };

    match (leading_number(first), leading_number(second)) {
        (Some(width), Some(height)) if (width * height).is_finite() => Dimensions::new(width, height),
        _ => Dimensions::default(),
    }
}

/// Parse the longest numeric prefix of a trimmed segment
fn leading_number(segment: &str) -> Option<f64> {
    LEADING_NUMBER
        .find(segment.trim())
        .and_then(|number| number.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}
