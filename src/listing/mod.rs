//! Floor-plan model and the pure extraction core
//!
//! This module turns a flat snapshot of room rows into totalled floors:
//! - Dimension parsing: raw `"10 x 12"` text into width and height
//! - Row classification: does a row open a floor, and what room does it hold
//! - Bucket building: fold rows into floor groups in document order
//! - Aggregation: floor areas and the grand total
//!
//! Nothing here touches a browser; rows come in through [`RowReader`].

pub mod aggregate;
pub mod bucket;
pub mod dimension;
pub mod row;
pub mod unit;

pub use aggregate::{FloorBucket, Listing, SummaryRow, TOTAL_LABEL, aggregate};
pub use bucket::{FloorGroup, LeadingRows, Room, UNLABELED_FLOOR, build_buckets};
pub use dimension::{Dimensions, parse_dimensions};
pub use row::{ClassifiedRow, LABEL_MIN_LEN, RowReader, RowSnapshot, classify};
pub use unit::Unit;

use crate::error::Result;

/// Group rows into floors and total them
pub fn summarize<R: RowReader>(rows: &[R], unit: Unit, leading: LeadingRows) -> Result<Listing> {
    let groups = build_buckets(rows, unit, leading)?;
    Ok(aggregate(unit, groups))
}
