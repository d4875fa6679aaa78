use crate::error::{ListingError, Result};
use crate::listing::dimension::{Dimensions, parse_dimensions};
use crate::listing::row::{RowReader, classify};
use crate::listing::unit::Unit;
use serde::{Deserialize, Serialize};

/// Label given to the floor synthesized for rows that precede any label
pub const UNLABELED_FLOOR: &str = "Unlabeled";

/// One room as listed on the page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    name: String,
    raw_dimension_text: String,
    dimensions: Dimensions,
    area: f64,
}

impl Room {
    /// Build a room from its name and raw dimension text
    pub fn new(name: impl Into<String>, raw_dimension_text: impl Into<String>) -> Self {
        let raw_dimension_text = raw_dimension_text.into();
        let dimensions = parse_dimensions(&raw_dimension_text);
        Self {
            name: name.into(),
            raw_dimension_text,
            dimensions,
            area: dimensions.area(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn raw_dimension_text(&self) -> &str {
        &self.raw_dimension_text
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    /// Whether the room has a usable area to show
    pub fn has_area(&self) -> bool {
        self.area != 0.0
    }
}

/// Rooms grouped under one floor label, before totals are computed
#[derive(Debug, Clone, PartialEq)]
pub struct FloorGroup {
    pub label: String,
    pub rooms: Vec<Room>,
}

impl FloorGroup {
    fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), rooms: Vec::new() }
    }
}

/// What to do with rooms listed before the first floor label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadingRows {
    /// Collect them under a synthesized [`UNLABELED_FLOOR`] bucket
    #[default]
    Unlabeled,
    /// Fail the extraction
    Reject,
}

/// Fold rows in document order into floor groups.
///
/// A row carrying a floor label opens a new group; every row then adds its
/// room to the most recently opened group.
pub fn build_buckets<R: RowReader>(rows: &[R], unit: Unit, leading: LeadingRows) -> Result<Vec<FloorGroup>> {
    rows.iter().enumerate().try_fold(Vec::new(), |mut groups: Vec<FloorGroup>, (index, row)| {
        let classified = classify(row, unit).map_err(|missing| ListingError::MissingRowField {
            row: index,
            field: missing.describe(),
        })?;

        if let Some(label) = classified.label {
            groups.push(FloorGroup::new(label));
        } else if groups.is_empty() {
            match leading {
                LeadingRows::Unlabeled => {
                    log::warn!("Row {} precedes any floor label, grouping under '{}'", index, UNLABELED_FLOOR);
                    groups.push(FloorGroup::new(UNLABELED_FLOOR));
                }
                LeadingRows::Reject => return Err(ListingError::UnlabeledRow { row: index }),
            }
        }

        let room = Room::new(classified.room_name, classified.raw_dimension_text);
        if !room.has_area() {
            log::warn!("No dimensions in '{}' for room '{}'", room.raw_dimension_text(), room.name());
        }
        if let Some(current) = groups.last_mut() {
            current.rooms.push(room);
        }
        Ok(groups)
    })
}
