use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::catalog::ListingCatalog;
use crate::model::Listing;
use crate::parser;

/// Saved pages are matched in this order: every `.htm` first, then `.html`.
const EXTENSIONS: [&str; 2] = ["htm", "html"];

/// Strip the whitespace and quotes users tend to paste around a folder path.
pub fn clean_dir_arg(raw: &str) -> PathBuf {
    PathBuf::from(raw.trim().trim_matches(|c| c == '"' || c == '\''))
}

/// Every saved listing page under `dir`, recursively.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let base = glob::Pattern::escape(&dir.to_string_lossy());
    let mut paths = Vec::new();
    for ext in EXTENSIONS {
        let pattern = format!("{}/**/*.{}", base, ext);
        let mut found: Vec<PathBuf> = glob::glob(&pattern)
            .with_context(|| format!("bad glob pattern {}", pattern))?
            .filter_map(|entry| entry.ok())
            .filter(|p| p.is_file())
            .collect();
        found.sort();
        paths.extend(found);
    }

    info!(dir = %dir.display(), files = paths.len(), "discovered listing pages");
    Ok(paths)
}

/// UTF-8 decode, dropping invalid byte sequences instead of replacing them.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

pub fn read_document(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let text = decode_lossy(&bytes);
    debug!(file = %path.display(), bytes = bytes.len(), chars = text.len(), "read page");
    Ok(text)
}

/// Read and extract `paths` in parallel, then build the catalog in input
/// order so duplicate listing names resolve the same way as a serial run.
pub fn load_catalog(paths: &[PathBuf], progress: bool) -> Result<ListingCatalog> {
    let pb = if progress {
        ProgressBar::new(paths.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let listings: Vec<Listing> = paths
        .par_iter()
        .map(|path| {
            let listing = read_document(path).map(|doc| parser::extract_listing(&doc));
            pb.inc(1);
            listing
        })
        .collect::<Result<_>>()?;
    pb.finish_and_clear();

    let mut catalog = ListingCatalog::new();
    for listing in listings {
        catalog.insert(listing);
    }
    info!(listings = catalog.len(), "catalog built");
    Ok(catalog)
}

pub fn load_dir(dir: &Path, progress: bool) -> Result<ListingCatalog> {
    let paths = discover(dir)?;
    load_catalog(&paths, progress)
}
