//! CLI argument definitions for the catalog probe.

use clap::{Args, Parser, Subcommand};
use pokedex_core::{FilterState, RecordId, ValueRange};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pokedex",
    version,
    about = "Query a saved Pokédex listing with the catalog engine"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long = "log-level", default_value = "warn", global = true)]
    pub log_level: String,

    /// Absolute directory for rotating log files (stderr when omitted).
    #[arg(long = "log-dir", value_name = "DIR", global = true)]
    pub log_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Filter and paginate records from a listing file.
    Query(QueryArgs),

    /// List the distinct types present in a listing file.
    Categories {
        #[arg(value_name = "LISTING")]
        file: PathBuf,
    },

    /// Validate a create/update draft file.
    ValidateDraft {
        #[arg(value_name = "DRAFT")]
        file: PathBuf,

        /// Id of the existing record the draft updates.
        #[arg(long, value_name = "ID")]
        update: Option<RecordId>,
    },
}

#[derive(Args)]
pub struct QueryArgs {
    /// Listing payload: backend envelope or bare JSON array.
    #[arg(value_name = "LISTING")]
    pub file: PathBuf,

    /// Case-insensitive name substring.
    #[arg(long, default_value = "")]
    pub search: String,

    /// Type to include; repeat for several.
    #[arg(long = "category", value_name = "TYPE")]
    pub categories: Vec<String>,

    /// HP range as `lo..hi`.
    #[arg(long, value_parser = parse_range)]
    pub vitality: Option<ValueRange>,

    /// Weight range in hectograms as `lo..hi`.
    #[arg(long, value_parser = parse_range)]
    pub mass: Option<ValueRange>,

    /// Attack range as `lo..hi`.
    #[arg(long, value_parser = parse_range)]
    pub power: Option<ValueRange>,

    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Overrides POKEDEX_PAGE_SIZE.
    #[arg(long = "page-size")]
    pub page_size: Option<u32>,

    /// Print the view snapshot as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

impl QueryArgs {
    /// Layers the query flags over `filter`. Repeated categories select once.
    pub fn apply_to(&self, filter: FilterState) -> FilterState {
        let mut filter = filter.with_query(self.search.as_str());
        filter
            .selected_categories
            .extend(self.categories.iter().cloned());
        if let Some(range) = self.vitality {
            filter = filter.with_vitality_range(range);
        }
        if let Some(range) = self.mass {
            filter = filter.with_mass_range(range);
        }
        if let Some(range) = self.power {
            filter = filter.with_power_range(range);
        }
        filter
    }
}

/// Parses `lo..hi`; either side may be omitted to keep it open.
pub fn parse_range(raw: &str) -> Result<ValueRange, String> {
    let (lo, hi) = raw
        .split_once("..")
        .ok_or_else(|| format!("expected `lo..hi`, got `{raw}`"))?;
    let lo = parse_bound(lo, ValueRange::FULL.lo())?;
    let hi = parse_bound(hi, ValueRange::FULL.hi())?;
    Ok(ValueRange::new(lo, hi))
}

fn parse_bound(raw: &str, open: i64) -> Result<i64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(open);
    }
    trimmed
        .parse::<i64>()
        .map_err(|err| format!("invalid bound `{trimmed}`: {err}"))
}
