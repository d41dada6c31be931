//! Refresh the product counts stored in `categories.yaml`.
//!
//! The catalog is found next to the tool (or via `CATEGORY_SYNC_ROOT`), every
//! child category is matched to its data directory, and the document is
//! rewritten in place. Diagnostics go to stderr through `tracing`; set
//! `RUST_LOG=debug` to see each directory the run resolved.

use anyhow::Result;
use category_sync::{CatalogFile, find_catalog_root, update_catalog};
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    parse_args();

    let root = find_catalog_root()?;
    let catalog = CatalogFile::in_root(&root);
    let document = catalog.load()?;
    let update = update_catalog(&document, catalog.base_dir())?;
    catalog.save(&update.document)?;

    println!("Successfully updated {}", catalog.path().display());
    println!(
        "Updated {} categories with product counts",
        update.summary.categories
    );
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_args() {
    let mut args = env::args_os();
    let _program = args.next();

    match args.next() {
        None => {}
        Some(flag) if flag == "--help" || flag == "-h" => usage(0),
        Some(_) => usage(2),
    }
}

fn usage(code: i32) -> ! {
    eprintln!(
        "Usage: update-categories\n\nRewrites categories.yaml with productCount/productFiles for every child\ncategory, counting *.yaml and *.yml files under <root>/<category>/<child>/.\n\nEnvironment:\n  CATEGORY_SYNC_ROOT   Directory holding categories.yaml (default: next to the tool)\n  RUST_LOG             Log filter for stderr diagnostics (default: warn)"
    );
    std::process::exit(code);
}
