//! Report command - capture a lost/found item report
//!
//! Submission only surfaces the captured record: a structured tracing event
//! plus the record itself on stdout. Nothing is stored.

use anyhow::{bail, Result};
use campusctl_core::{ItemKind, ItemReport};
use clap::{Parser, ValueEnum};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum KindArg {
    Lost,
    Found,
}

impl From<KindArg> for ItemKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Lost => ItemKind::Lost,
            KindArg::Found => ItemKind::Found,
        }
    }
}

#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Whether you lost or found the item.
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,

    /// Item name, e.g. "Blue Umbrella".
    #[arg(long)]
    pub title: Option<String>,

    /// Describe the item.
    #[arg(long)]
    pub description: Option<String>,

    /// Where it was lost or found.
    #[arg(long)]
    pub location: Option<String>,

    /// Optional image URI.
    #[arg(long)]
    pub image: Option<String>,
}

pub fn run(args: &ReportArgs) -> Result<()> {
    let report = ItemReport {
        kind: args.kind.map(ItemKind::from),
        title: args.title.clone().unwrap_or_default(),
        description: args.description.clone().unwrap_or_default(),
        location: args.location.clone().unwrap_or_default(),
        image: args.image.clone(),
    };

    let missing = report.missing_fields();
    if !missing.is_empty() {
        bail!("missing required fields: {}", missing.join(", "));
    }

    report.submit();
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
