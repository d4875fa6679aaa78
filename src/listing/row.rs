use crate::listing::unit::Unit;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Labels at or below this many characters never open a floor
pub const LABEL_MIN_LEN: usize = 3;

/// Read access to the fields of one room row.
///
/// Lets the classifier work the same over live page snapshots and plain
/// test fixtures.
pub trait RowReader {
    /// Text of the floor-label field, if the row has one
    fn label(&self) -> Option<&str>;

    /// Text of the room-name field
    fn room_name(&self) -> Option<&str>;

    /// Text of the dimension field for the given unit
    fn dimension_text(&self, unit: Unit) -> Option<&str>;
}

/// Rendered text of one row, as read out of the page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowSnapshot {
    /// Floor-label field text
    #[serde(default)]
    pub label: Option<String>,

    /// Room-name field text
    #[serde(default)]
    pub room: Option<String>,

    /// Dimension texts keyed by unit field marker (`Imperial`, `Metric`)
    #[serde(default)]
    pub dimensions: BTreeMap<String, String>,
}

impl RowSnapshot {
    /// Create a row with a room name and no other fields
    pub fn room(name: impl Into<String>) -> Self {
        Self {
            room: Some(name.into()),
            ..Default::default()
        }
    }

    /// Builder method: set the floor-label field
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Builder method: set the dimension text for a unit
    pub fn with_dimensions(mut self, unit: Unit, text: impl Into<String>) -> Self {
        self.dimensions.insert(unit.field_marker(), text.into());
        self
    }
}

impl RowReader for RowSnapshot {
    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn room_name(&self) -> Option<&str> {
        self.room.as_deref()
    }

    fn dimension_text(&self, unit: Unit) -> Option<&str> {
        self.dimensions.get(&unit.field_marker()).map(String::as_str)
    }
}

/// Missing field found while classifying a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingField {
    RoomName,
    Dimension(Unit),
}

impl MissingField {
    /// Name of the missing field for diagnostics
    pub fn describe(&self) -> String {
        match self {
            MissingField::RoomName => "room name".to_string(),
            MissingField::Dimension(unit) => format!("{} dimension", unit.field_marker()),
        }
    }
}

/// What a single row contributes to the floor grouping
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRow {
    /// Floor label when this row opens a new floor
    pub label: Option<String>,
    pub room_name: String,
    pub raw_dimension_text: String,
}

impl ClassifiedRow {
    /// Whether this row starts a new floor bucket
    pub fn opens_bucket(&self) -> bool {
        self.label.is_some()
    }
}

/// Classify one row for the active unit.
///
/// A row opens a floor when its trimmed label text is longer than
/// [`LABEL_MIN_LEN`] characters; shorter labels are ignored and the row is
/// a plain room.
pub fn classify<R: RowReader + ?Sized>(row: &R, unit: Unit) -> Result<ClassifiedRow, MissingField> {
    let label = row
        .label()
        .map(str::trim)
        .filter(|text| text.chars().count() > LABEL_MIN_LEN)
        .map(str::to_string);

    let room_name = row.room_name().ok_or(MissingField::RoomName)?.trim().to_string();
    let raw_dimension_text = row
        .dimension_text(unit)
        .ok_or(MissingField::Dimension(unit))?
        .trim()
        .to_string();

    Ok(ClassifiedRow { label, room_name, raw_dimension_text })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_opens_bucket() {
        let row = RowSnapshot::room("Living Room")
            .with_label("Main Floor")
            .with_dimensions(Unit::Imperial, "10 x 12");

        let classified = classify(&row, Unit::Imperial).unwrap();
        assert!(classified.opens_bucket());
        assert_eq!(classified.label.as_deref(), Some("Main Floor"));
        assert_eq!(classified.room_name, "Living Room");
        assert_eq!(classified.raw_dimension_text, "10 x 12");
    }

    #[test]
    fn test_short_label_never_opens_bucket() {
        for label in ["", " ", "  \n", "•", "B1", "---", "  abc  "] {
            let row = RowSnapshot::room("Den").with_label(label).with_dimensions(Unit::Imperial, "8 x 8");
            let classified = classify(&row, Unit::Imperial).unwrap();
            assert!(!classified.opens_bucket(), "label {:?} opened a bucket", label);
        }
    }

    #[test]
    fn test_four_char_label_opens_bucket() {
        let row = RowSnapshot::room("Den").with_label("Main").with_dimensions(Unit::Imperial, "8 x 8");
        assert!(classify(&row, Unit::Imperial).unwrap().opens_bucket());
    }

    #[test]
    fn test_dimension_follows_unit() {
        let row = RowSnapshot::room("Kitchen")
            .with_dimensions(Unit::Imperial, "10 ft x 12 ft")
            .with_dimensions(Unit::Metric, "3.05 m x 3.66 m");

        assert_eq!(classify(&row, Unit::Imperial).unwrap().raw_dimension_text, "10 ft x 12 ft");
        assert_eq!(classify(&row, Unit::Metric).unwrap().raw_dimension_text, "3.05 m x 3.66 m");
    }

    #[test]
    fn test_missing_fields() {
        let no_name = RowSnapshot::default().with_dimensions(Unit::Imperial, "8 x 8");
        assert_eq!(classify(&no_name, Unit::Imperial), Err(MissingField::RoomName));

        let no_metric = RowSnapshot::room("Den").with_dimensions(Unit::Imperial, "8 x 8");
        assert_eq!(classify(&no_metric, Unit::Metric), Err(MissingField::Dimension(Unit::Metric)));
        assert_eq!(MissingField::Dimension(Unit::Metric).describe(), "Metric dimension");
    }

    #[test]
    fn test_snapshot_deserializes_page_payload() {
        let json = r#"{"label": null, "room": "Bedroom", "dimensions": {"Imperial": "12 x 12"}}"#;
        let row: RowSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(row.label(), None);
        assert_eq!(row.room_name(), Some("Bedroom"));
        assert_eq!(row.dimension_text(Unit::Imperial), Some("12 x 12"));
        assert_eq!(row.dimension_text(Unit::Metric), None);
    }
}
