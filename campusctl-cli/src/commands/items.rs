//! Items command - search the lost-and-found listings

use std::io::{self, Write};

use anyhow::Result;
use campusctl_core::{filter, CategoryFilter, ItemKind};
use clap::{Parser, ValueEnum};
use tracing::debug;

use crate::config::{Config, OutputFormat};
use crate::render::{self, CliFormat};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum ItemCategoryArg {
    All,
    Lost,
    Found,
}

impl ItemCategoryArg {
    fn into_filter(self) -> CategoryFilter<ItemKind> {
        match self {
            ItemCategoryArg::All => CategoryFilter::All,
            ItemCategoryArg::Lost => CategoryFilter::Only(ItemKind::Lost),
            ItemCategoryArg::Found => CategoryFilter::Only(ItemKind::Found),
        }
    }
}

#[derive(Parser, Debug)]
pub struct ItemsArgs {
    /// Free-text search over title and description.
    #[arg(long, short = 'q', default_value = "", value_name = "TEXT")]
    pub query: String,

    /// Narrow to lost or found records.
    #[arg(long, value_enum, default_value_t = ItemCategoryArg::All)]
    pub category: ItemCategoryArg,

    /// Output format (defaults to the configured format).
    #[arg(long, value_enum)]
    pub format: Option<CliFormat>,
}

pub fn run(args: &ItemsArgs, config: &Config) -> Result<()> {
    let catalog = config.load_catalog()?;
    let matched = filter(&catalog.items, &args.query, &args.category.into_filter());
    debug!(
        query = %args.query,
        category = ?args.category,
        matched = matched.len(),
        "items query"
    );

    if matched.is_empty() {
        println!("No items found");
        println!("Try adjusting your search or filter");
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.format_for(args.format) {
        OutputFormat::Md => render::write_items_md(&matched, &mut out)?,
        OutputFormat::Json => {
            render::write_items_json(&matched, config.pretty_json_indent, &mut out)?
        }
    }
    out.flush()?;
    Ok(())
}
