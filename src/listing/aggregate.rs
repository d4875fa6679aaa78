use crate::listing::bucket::{FloorGroup, Room};
use crate::listing::unit::Unit;
use serde::Serialize;

/// Label of the synthetic row appended after the floors on display
pub const TOTAL_LABEL: &str = "Total";

/// A floor with its rooms and their summed area
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloorBucket {
    label: String,
    rooms: Vec<Room>,
    area: f64,
}

impl FloorBucket {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn area(&self) -> f64 {
        self.area
    }
}

/// Totalled floor plan of one listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    unit: Unit,
    buckets: Vec<FloorBucket>,
    total_area: f64,
}

/// One line of the summary shown to the user
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SummaryRow<'a> {
    Floor(&'a FloorBucket),
    Total { area: f64 },
}

impl SummaryRow<'_> {
    pub fn label(&self) -> &str {
        match self {
            SummaryRow::Floor(bucket) => bucket.label(),
            SummaryRow::Total { .. } => TOTAL_LABEL,
        }
    }

    pub fn area(&self) -> f64 {
        match self {
            SummaryRow::Floor(bucket) => bucket.area(),
            SummaryRow::Total { area } => *area,
        }
    }
}

impl Listing {
    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn buckets(&self) -> &[FloorBucket] {
        &self.buckets
    }

    pub fn total_area(&self) -> f64 {
        self.total_area
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of rooms across all floors
    pub fn room_count(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.rooms.len()).sum()
    }

    /// Floors in document order followed by the total row
    pub fn summary_rows(&self) -> Vec<SummaryRow<'_>> {
        self.buckets
            .iter()
            .map(SummaryRow::Floor)
            .chain(std::iter::once(SummaryRow::Total { area: self.total_area }))
            .collect()
    }
}

/// Compute floor areas and the grand total.
///
/// Sums accumulate left to right, rooms in document order and then floors
/// in document order, so the same input always yields the same bits.
pub fn aggregate(unit: Unit, groups: Vec<FloorGroup>) -> Listing {
    let buckets: Vec<FloorBucket> = groups
        .into_iter()
        .map(|group| {
            let area = group.rooms.iter().fold(0.0, |sum, room| sum + room.area());
            FloorBucket { label: group.label, rooms: group.rooms, area }
        })
        .collect();
    let total_area = buckets.iter().fold(0.0, |sum, bucket| sum + bucket.area);

    Listing { unit, buckets, total_area }
}
