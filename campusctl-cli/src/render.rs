//! Markdown and JSON rendering of record lists.
//!
//! Markdown is the human view; JSON is the machine view and carries the
//! badge style token a UI would use to color each record.

use std::io::Write;

use anyhow::Result;
use campusctl_core::{Item, Notice};
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum CliFormat {
    Md,
    Json,
}

fn display_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

pub fn write_items_md(items: &[Item], out: &mut impl Write) -> Result<()> {
    for item in items {
        writeln!(out, "## {} [{}]\n", item.title, item.kind.label())?;
        writeln!(out, "{}\n", item.description)?;
        writeln!(out, "- location: {}", item.location)?;
        writeln!(out, "- date: {}", display_date(item.date))?;
        if let Some(image) = item.image.as_ref() {
            writeln!(out, "- image: {image}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_notices_md(notices: &[Notice], out: &mut impl Write) -> Result<()> {
    for notice in notices {
        let mut badges = Vec::new();
        if notice.is_pinned {
            badges.push("Pinned");
        }
        if notice.is_new {
            badges.push("New");
        }
        badges.push(notice.category.as_str());

        writeln!(out, "## {}\n", notice.title)?;
        writeln!(out, "[{}]\n", badges.join("] ["))?;
        writeln!(out, "{}\n", notice.content)?;
        writeln!(out, "- author: {}", notice.author)?;
        writeln!(out, "- date: {}", display_date(notice.date))?;
        writeln!(out)?;
    }
    Ok(())
}

/// Item record plus the badge token a UI maps to a color.
#[derive(Serialize)]
struct ItemView<'a> {
    #[serde(flatten)]
    item: &'a Item,
    badge: &'static str,
}

/// Notice record plus the badge token for its category.
#[derive(Serialize)]
struct NoticeView<'a> {
    #[serde(flatten)]
    notice: &'a Notice,
    badge: &'static str,
}

pub fn write_items_json(items: &[Item], pretty: usize, out: &mut impl Write) -> Result<()> {
    let views: Vec<ItemView<'_>> = items
        .iter()
        .map(|item| ItemView {
            item,
            badge: item.kind.badge(),
        })
        .collect();
    write_json(&views, pretty, out)
}

pub fn write_notices_json(notices: &[Notice], pretty: usize, out: &mut impl Write) -> Result<()> {
    let views: Vec<NoticeView<'_>> = notices
        .iter()
        .map(|notice| NoticeView {
            notice,
            badge: notice.category.badge(),
        })
        .collect();
    write_json(&views, pretty, out)
}

fn write_json<T: Serialize>(records: &T, pretty: usize, out: &mut impl Write) -> Result<()> {
    if pretty > 0 {
        let indent = vec![b' '; pretty];
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_slice());
        let mut serializer = serde_json::Serializer::with_formatter(&mut *out, formatter);
        records.serialize(&mut serializer)?;
    } else {
        serde_json::to_writer(&mut *out, records)?;
    }
    writeln!(out)?;
    Ok(())
}
