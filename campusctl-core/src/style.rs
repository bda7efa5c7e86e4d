//! Display badge tokens for record categories.
//!
//! A closed lookup from enum value to style token; the renderer labels
//! records with these, and a UI maps them to colors.

use crate::item::ItemKind;
use crate::notice::NoticeCategory;

impl NoticeCategory {
    /// Badge style token for this category.
    pub fn badge(&self) -> &'static str {
        match self {
            NoticeCategory::Academic => "badge-primary",
            NoticeCategory::Hostel => "bg-orange-100 text-orange-800",
            NoticeCategory::Clubs => "bg-purple-100 text-purple-800",
            NoticeCategory::Placement => "bg-green-100 text-green-800",
            NoticeCategory::General => "bg-gray-100 text-gray-800",
        }
    }
}

impl ItemKind {
    /// Badge style token: found items are good news, lost items are not.
    pub fn badge(&self) -> &'static str {
        match self {
            ItemKind::Found => "badge-success",
            ItemKind::Lost => "badge-danger",
        }
    }

    /// Human label as the portal displays it.
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Found => "Found",
            ItemKind::Lost => "Lost",
        }
    }
}
