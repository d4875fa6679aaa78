use regex::Regex;
use std::sync::LazyLock;

/// Kind of room, guessed from its name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomCategory {
    Dining,
    Kitchen,
    Recreation,
    Bath,
    Living,
    Bedroom,
    Storage,
    Other,
}

// Checked in order; the first match wins, so "Dining/Kitchen" is dining
static CATEGORY_PATTERNS: LazyLock<Vec<(RoomCategory, Regex)>> = LazyLock::new(|| {
    [
        (RoomCategory::Dining, r"(?i)dine|dining"),
        (RoomCategory::Kitchen, r"(?i)kitchen"),
        (RoomCategory::Recreation, r"(?i)rec|play"),
        (RoomCategory::Bath, r"(?i)bath|wash"),
        (RoomCategory::Living, r"(?i)living"),
        (RoomCategory::Bedroom, r"(?i)bed"),
        (RoomCategory::Storage, r"(?i)store|closet|storage"),
    ]
    .into_iter()
    .map(|(category, pattern)| (category, Regex::new(pattern).unwrap()))
    .collect()
});

impl RoomCategory {
    /// Categorize a room by its name
    pub fn from_name(name: &str) -> Self {
        CATEGORY_PATTERNS
            .iter()
            .find(|(_, pattern)| pattern.is_match(name))
            .map(|(category, _)| *category)
            .unwrap_or(RoomCategory::Other)
    }

    /// Symbol drawn in front of the room name
    pub fn symbol(&self) -> &'static str {
        match self {
            RoomCategory::Dining => "☕",
            RoomCategory::Kitchen => "♨",
            RoomCategory::Recreation => "▶",
            RoomCategory::Bath => "≈",
            RoomCategory::Living => "▣",
            RoomCategory::Bedroom => "☾",
            RoomCategory::Storage => "▥",
            RoomCategory::Other => "□",
        }
    }
}
