//! CLI entry point.
//!
//! # Responsibility
//! - Drive `pokedex_core` against saved backend payloads without a browser.
//! - Keep output deterministic for quick local checks of filter/pager rules.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, QueryArgs};
use log::info;
use pokedex_core::api::assets::record_image_url;
use pokedex_core::config::normalize_page_size;
use pokedex_core::detail::{
    distinct_categories, format_mass, format_record_number, format_size,
};
use pokedex_core::{
    init_logging, load_page_file, CanonicalRecord, CatalogConfig, CatalogService, LogConfig,
    MutationKind, PageItem, PageState, RecordDraft, RecordId,
};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_config = LogConfig::new(&cli.log_level, cli.log_dir.as_deref())?;
    init_logging(&log_config)?;
    let config = CatalogConfig::from_env()?;
    info!(
        "event=cli_start module=cli version={}",
        pokedex_core::core_version()
    );

    match cli.command {
        Command::Query(args) => run_query(config, &args),
        Command::Categories { file } => run_categories(&file),
        Command::ValidateDraft { file, update } => run_validate_draft(&file, update),
    }
}

fn run_query(mut config: CatalogConfig, args: &QueryArgs) -> Result<()> {
    if args.page_size.is_some() {
        config.page_size = normalize_page_size(args.page_size);
    }
    let base_url = config.api_base_url.clone();
    let page_size = config.page_size;

    let envelope = load_page_file(&args.file)
        .with_context(|| format!("loading listing {}", args.file.display()))?;

    // The whole file is resident, so it is applied as one dataset and
    // paged client-side below.
    let mut service = CatalogService::new(config);
    let (ticket, _) = service.begin_fetch();
    service.apply_page(ticket, envelope);

    service.update_filter(|filter| args.apply_to(filter));

    let visible = service.visible();
    let pages = PageState::new(page_size, visible.len() as u64).go_to(args.page);
    let shown = pages.slice(&visible);

    if args.json {
        let mut snapshot = service.snapshot();
        snapshot.visible = shown.iter().map(|record| (*record).clone()).collect();
        snapshot.page = pages;
        snapshot.total_pages = pages.total_pages();
        snapshot.page_window = pages.window(service.config().window_radius);
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    if let Some(bounds) = service.bounds() {
        println!(
            "bounds: hp {}..{}  weight {}..{}  attack {}..{}",
            bounds.vitality.lo(),
            bounds.vitality.hi(),
            bounds.mass.lo(),
            bounds.mass.hi(),
            bounds.power.lo(),
            bounds.power.hi()
        );
    }
    println!(
        "{} result{}",
        visible.len(),
        if visible.len() > 1 { "s" } else { "" }
    );
    for record in shown {
        println!("{}", render_row(record, &base_url));
    }
    println!(
        "page {}/{}: {}",
        pages.current_page(),
        pages.total_pages(),
        render_window(&pages.window(service.config().window_radius))
    );
    Ok(())
}

fn run_categories(file: &Path) -> Result<()> {
    let envelope =
        load_page_file(file).with_context(|| format!("loading listing {}", file.display()))?;
    for category in distinct_categories(&envelope.records) {
        println!("{category}");
    }
    Ok(())
}

fn run_validate_draft(file: &Path, update: Option<RecordId>) -> Result<()> {
    let payload = std::fs::read_to_string(file)
        .with_context(|| format!("reading draft {}", file.display()))?;
    let draft: RecordDraft = serde_json::from_str(&payload)
        .with_context(|| format!("invalid draft {}", file.display()))?;
    let mutation = update.map_or(MutationKind::Create, MutationKind::Update);
    println!(
        "valid draft {} {}: {} {}",
        format_record_number(draft.id),
        draft.name.french,
        mutation.method(),
        mutation.path()
    );
    Ok(())
}

fn render_row(record: &CanonicalRecord, base_url: &str) -> String {
    let image = record
        .image_ref
        .clone()
        .unwrap_or_else(|| record_image_url(base_url, record.id));
    format!(
        "{} {:<16} [{}] PV {} ATQ {} {} {} {}",
        format_record_number(record.id),
        record.display_name,
        record.categories.join(", "),
        dash_or(record.vitality),
        dash_or(record.power),
        format_mass(record.mass_units),
        format_size(record.size_units),
        image
    )
}

fn dash_or(value: Option<i64>) -> String {
    value.map_or_else(|| "—".to_string(), |v| v.to_string())
}

fn render_window(window: &[PageItem]) -> String {
    window
        .iter()
        .map(|item| match item {
            PageItem::Page(page) => page.to_string(),
            PageItem::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
