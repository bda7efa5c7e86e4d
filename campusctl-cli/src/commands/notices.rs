//! Notices command - search the notice board, pinned first

use std::io::{self, Write};

use anyhow::Result;
use campusctl_core::{filter, sort_notices, CategoryFilter, NoticeCategory};
use clap::{Parser, ValueEnum};
use tracing::debug;

use crate::config::{Config, OutputFormat};
use crate::render::{self, CliFormat};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum NoticeCategoryArg {
    All,
    Academic,
    Hostel,
    Clubs,
    Placement,
    General,
}

impl NoticeCategoryArg {
    fn into_filter(self) -> CategoryFilter<NoticeCategory> {
        match self {
            NoticeCategoryArg::All => CategoryFilter::All,
            NoticeCategoryArg::Academic => CategoryFilter::Only(NoticeCategory::Academic),
            NoticeCategoryArg::Hostel => CategoryFilter::Only(NoticeCategory::Hostel),
            NoticeCategoryArg::Clubs => CategoryFilter::Only(NoticeCategory::Clubs),
            NoticeCategoryArg::Placement => CategoryFilter::Only(NoticeCategory::Placement),
            NoticeCategoryArg::General => CategoryFilter::Only(NoticeCategory::General),
        }
    }
}

#[derive(Parser, Debug)]
pub struct NoticesArgs {
    /// Free-text search over title and content.
    #[arg(long, short = 'q', default_value = "", value_name = "TEXT")]
    pub query: String,

    /// Narrow to one notice category.
    #[arg(long, value_enum, default_value_t = NoticeCategoryArg::All)]
    pub category: NoticeCategoryArg,

    /// Output format (defaults to the configured format).
    #[arg(long, value_enum)]
    pub format: Option<CliFormat>,
}

pub fn run(args: &NoticesArgs, config: &Config) -> Result<()> {
    let catalog = config.load_catalog()?;
    let matched = filter(&catalog.notices, &args.query, &args.category.into_filter());
    let sorted = sort_notices(&matched);
    debug!(
        query = %args.query,
        category = ?args.category,
        matched = sorted.len(),
        "notices query"
    );

    if sorted.is_empty() {
        println!("No notices found");
        println!("Try adjusting your search or filter");
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.format_for(args.format) {
        OutputFormat::Md => render::write_notices_md(&sorted, &mut out)?,
        OutputFormat::Json => {
            render::write_notices_json(&sorted, config.pretty_json_indent, &mut out)?
        }
    }
    out.flush()?;
    Ok(())
}
