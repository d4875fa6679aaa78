use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Measurement system the listing page is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Imperial,
    Metric,
}

impl Unit {
    /// Every supported unit, in the order the page lists their fields
    pub const ALL: [Unit; 2] = [Unit::Imperial, Unit::Metric];

    /// Lowercase name as the page toggle reports it
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Imperial => "imperial",
            Unit::Metric => "metric",
        }
    }

    /// Class-like marker of the per-row dimension field for this unit.
    ///
    /// The page names these fields after the unit with its first letter
    /// capitalized, so `imperial` reads from `Imperial`.
    pub fn field_marker(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Area suffix used on display
    pub fn area_suffix(&self) -> &'static str {
        match self {
            Unit::Imperial => "ft²",
            Unit::Metric => "m²",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "imperial" => Ok(Unit::Imperial),
            "metric" => Ok(Unit::Metric),
            other => Err(format!("unknown unit '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_marker_capitalizes_name() {
        assert_eq!(Unit::Imperial.field_marker(), "Imperial");
        assert_eq!(Unit::Metric.field_marker(), "Metric");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("imperial".parse::<Unit>(), Ok(Unit::Imperial));
        assert_eq!(" metric ".parse::<Unit>(), Ok(Unit::Metric));
        assert!("Metric".parse::<Unit>().is_err());
        assert!("".parse::<Unit>().is_err());
    }

    #[test]
    fn test_default_is_imperial() {
        assert_eq!(Unit::default(), Unit::Imperial);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Unit::Metric).unwrap(), "\"metric\"");
        let unit: Unit = serde_json::from_str("\"imperial\"").unwrap();
        assert_eq!(unit, Unit::Imperial);
    }

    #[test]
    fn test_suffixes() {
        assert_eq!(Unit::Imperial.area_suffix(), "ft²");
        assert_eq!(Unit::Metric.area_suffix(), "m²");
    }
}
