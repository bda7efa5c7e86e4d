//! Record collections and where they come from.
//!
//! The portal ships with a built-in sample dataset; a data directory with
//! `items.json` / `notices.json` overrides either collection. Loading
//! enforces the unique-id invariant so downstream code can treat ids as keys.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{CoreError, Result};
use crate::item::{Item, ItemKind};
use crate::notice::{Notice, NoticeCategory};

/// The record collections the portal renders from.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub items: Vec<Item>,
    pub notices: Vec<Notice>,
}

impl Catalog {
    /// The built-in sample dataset.
    pub fn builtin() -> Self {
        Self {
            items: builtin_items(),
            notices: builtin_notices(),
        }
    }

    /// Load collections from `dir`, falling back to the built-in dataset for
    /// any file that is absent.
    pub fn load(dir: &Path) -> Result<Self> {
        let items = match load_records::<Item>(&dir.join("items.json"))? {
            Some(items) => items,
            None => builtin_items(),
        };
        let notices = match load_records::<Notice>(&dir.join("notices.json"))? {
            Some(notices) => notices,
            None => builtin_notices(),
        };

        check_unique_ids("item", items.iter().map(|i| i.id))?;
        check_unique_ids("notice", notices.iter().map(|n| n.id))?;

        Ok(Self { items, notices })
    }
}

fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Option<Vec<T>>> {
    if !path.exists() {
        debug!(path = %path.display(), "no override file, using builtin records");
        return Ok(None);
    }
    let data = fs::read_to_string(path)?;
    let records =
        serde_json::from_str::<Vec<T>>(&data).map_err(|source| CoreError::json(path, source))?;
    debug!(path = %path.display(), count = records.len(), "loaded record override");
    Ok(Some(records))
}

fn check_unique_ids(collection: &'static str, ids: impl Iterator<Item = u32>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CoreError::duplicate_id(collection, id));
        }
    }
    Ok(())
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

fn item(
    id: u32,
    title: &str,
    description: &str,
    location: &str,
    kind: ItemKind,
    date: NaiveDate,
    image: Option<&str>,
) -> Item {
    Item {
        id,
        title: title.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        kind,
        date,
        image: image.map(str::to_string),
    }
}

fn builtin_items() -> Vec<Item> {
    vec![
        item(
            1,
            "Blue Umbrella",
            "Found near the main library entrance. Has a wooden handle.",
            "Library",
            ItemKind::Found,
            ymd(2024, 1, 10),
            Some("https://images.unsplash.com/photo-1534309466160-70b22cc6252c?w=300&h=200&fit=crop"),
        ),
        item(
            2,
            "Scientific Calculator",
            "Casio fx-991ES lost during the physics exam in LH-3.",
            "Lecture Hall 3",
            ItemKind::Lost,
            ymd(2024, 1, 9),
            Some("https://images.unsplash.com/photo-1564473185935-5da3e0754c9f?w=300&h=200&fit=crop"),
        ),
        item(
            3,
            "Black Backpack",
            "Found in the canteen. Contains some notebooks.",
            "Canteen",
            ItemKind::Found,
            ymd(2024, 1, 8),
            Some("https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=300&h=200&fit=crop"),
        ),
        item(
            4,
            "Wireless Earbuds",
            "Lost my white wireless earbuds somewhere near the sports complex.",
            "Sports Complex",
            ItemKind::Lost,
            ymd(2024, 1, 7),
            Some("https://images.unsplash.com/photo-1590658268037-6bf12165a8df?w=300&h=200&fit=crop"),
        ),
        item(
            5,
            "Student ID Card",
            "Found a student ID card belonging to CSE department.",
            "Admin Block",
            ItemKind::Found,
            ymd(2024, 1, 6),
            None,
        ),
        item(
            6,
            "Water Bottle",
            "Lost my blue steel water bottle with NIT Goa sticker.",
            "Hostel Block A",
            ItemKind::Lost,
            ymd(2024, 1, 5),
            None,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn notice(
    id: u32,
    title: &str,
    content: &str,
    category: NoticeCategory,
    author: &str,
    date: NaiveDate,
    is_new: bool,
    is_pinned: bool,
) -> Notice {
    Notice {
        id,
        title: title.to_string(),
        content: content.to_string(),
        category,
        author: author.to_string(),
        date,
        is_new,
        is_pinned,
    }
}

fn builtin_notices() -> Vec<Notice> {
    vec![
        notice(
            1,
            "Mid-Semester Examination Schedule for Even Semester 2024",
            "The mid-semester examinations for the even semester 2024 will commence from February 15, 2024. Students are requested to check their respective timetables on the academic portal.",
            NoticeCategory::Academic,
            "Academic Section",
            ymd(2024, 1, 12),
            true,
            true,
        ),
        notice(
            2,
            "Hostel Maintenance Work Notice",
            "Maintenance work will be carried out in Hostel Block A and B on Sunday, January 14th. Water supply will be affected from 10 AM to 2 PM.",
            NoticeCategory::Hostel,
            "Hostel Warden",
            ymd(2024, 1, 11),
            true,
            false,
        ),
        notice(
            3,
            "Aavishkar 2024 - Technical Fest Registrations Open",
            "Registrations for Aavishkar 2024, the annual technical fest of NIT Goa, are now open. Register before January 20th to avail early bird discounts.",
            NoticeCategory::Clubs,
            "Technical Club",
            ymd(2024, 1, 10),
            true,
            true,
        ),
        notice(
            4,
            "Campus Placement Drive - TCS",
            "TCS will be conducting campus placement drive on January 25th, 2024. Eligible students are requested to register on the placement portal by January 18th.",
            NoticeCategory::Placement,
            "Training & Placement Cell",
            ymd(2024, 1, 9),
            false,
            false,
        ),
        notice(
            5,
            "Library Timings Extended for Exam Period",
            "The central library will remain open from 8 AM to 12 AM (midnight) during the examination period starting from February 10th.",
            NoticeCategory::General,
            "Library Admin",
            ymd(2024, 1, 8),
            false,
            false,
        ),
        notice(
            6,
            "Workshop on Machine Learning - Registration",
            "A two-day workshop on Machine Learning and AI will be conducted on January 20-21. Register through the events portal.",
            NoticeCategory::Academic,
            "CSE Department",
            ymd(2024, 1, 7),
            false,
            false,
        ),
        notice(
            7,
            "Sports Meet 2024 Schedule Released",
            "The annual sports meet will be held from February 1-3, 2024. Team registrations are open till January 25th.",
            NoticeCategory::Clubs,
            "Sports Council",
            ymd(2024, 1, 5),
            false,
            false,
        ),
    ]
}
