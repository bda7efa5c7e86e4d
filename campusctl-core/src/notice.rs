use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::query::Queryable;

/// Closed set of notice-board categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeCategory {
    Academic,
    Hostel,
    Clubs,
    Placement,
    General,
}

impl NoticeCategory {
    pub const ALL: [NoticeCategory; 5] = [
        NoticeCategory::Academic,
        NoticeCategory::Hostel,
        NoticeCategory::Clubs,
        NoticeCategory::Placement,
        NoticeCategory::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeCategory::Academic => "Academic",
            NoticeCategory::Hostel => "Hostel",
            NoticeCategory::Clubs => "Clubs",
            NoticeCategory::Placement => "Placement",
            NoticeCategory::General => "General",
        }
    }
}

impl fmt::Display for NoticeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoticeCategory {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "academic" => Ok(NoticeCategory::Academic),
            "hostel" => Ok(NoticeCategory::Hostel),
            "clubs" => Ok(NoticeCategory::Clubs),
            "placement" => Ok(NoticeCategory::Placement),
            "general" => Ok(NoticeCategory::General),
            other => Err(CoreError::unknown_category("notice", other)),
        }
    }
}

/// A campus announcement record.
///
/// `is_pinned` flags a notice for priority display above all non-pinned
/// notices regardless of date; `is_new` is a display badge only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub category: NoticeCategory,
    pub author: String,
    pub date: NaiveDate,
    #[serde(rename = "isNew", default)]
    pub is_new: bool,
    #[serde(rename = "isPinned", default)]
    pub is_pinned: bool,
}

impl Queryable for Notice {
    type Category = NoticeCategory;

    fn category(&self) -> &NoticeCategory {
        &self.category
    }

    fn search_fields(&self) -> [&str; 2] {
        [&self.title, &self.content]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_str() {
        for category in NoticeCategory::ALL {
            assert_eq!(category.as_str().parse::<NoticeCategory>().unwrap(), category);
        }
        assert!("sports".parse::<NoticeCategory>().is_err());
    }

    #[test]
    fn notice_deserializes_wire_names() {
        let notice: Notice = serde_json::from_str(
            r#"{
                "id": 1,
                "title": "Hostel Maintenance Work Notice",
                "content": "Water supply will be affected from 10 AM to 2 PM.",
                "category": "Hostel",
                "author": "Hostel Warden",
                "date": "2024-01-11",
                "isNew": true,
                "isPinned": false
            }"#,
        )
        .unwrap();
        assert_eq!(notice.category, NoticeCategory::Hostel);
        assert!(notice.is_new);
        assert!(!notice.is_pinned);
    }

    #[test]
    fn pinned_flags_default_to_false() {
        let notice: Notice = serde_json::from_str(
            r#"{
                "id": 2,
                "title": "t",
                "content": "c",
                "category": "General",
                "author": "a",
                "date": "2024-01-01"
            }"#,
        )
        .unwrap();
        assert!(!notice.is_new);
        assert!(!notice.is_pinned);
    }
}
