//! Cleaning pipeline with explicit stages.
//!
//! The stages run strictly in order and any failure stops the run:
//! 1. **Load**: read the raw CSV into a typed table
//! 2. **Project**: keep the five housing columns
//! 3. **Normalize**: trim text, blank text becomes missing
//! 4. **Filter**: drop rows with any missing value
//! 5. **Write**: atomically replace the cleaned CSV
//!
//! [`run_inspect`] and [`run_cluster`] read a cleaned file back as typed
//! records. Reporting is left to the caller (see [`crate::summary`]).

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use housing_cluster::cluster_properties;
use housing_ingest::{read_cleaned_properties, read_csv_table};
use housing_output::write_csv_table;
use housing_transform::clean_table;

use crate::config::CleanConfig;
use crate::types::{CleanResult, ClusterResult, InspectResult};

/// Run load → project → normalize → filter → write.
///
/// Nothing is written unless every earlier stage succeeded, so a missing
/// column leaves a previous output untouched.
pub fn run_clean(config: &CleanConfig) -> Result<CleanResult> {
    let span = info_span!("clean", input = %config.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    // Stage 1: Load
    let raw = read_csv_table(&config.input, &config.ingest)
        .with_context(|| format!("load {}", config.input.display()))?;
    info!(rows = raw.height(), columns = raw.width(), "loaded input");

    // Stages 2-4: Project, Normalize, Filter
    let columns: Vec<&str> = config.columns.iter().map(String::as_str).collect();
    let cleaned = clean_table(&raw, &columns).context("select housing columns")?;
    for column in &cleaned.missing {
        debug!(column = %column.column, missing = column.missing, "missing values");
    }
    info!(
        kept = cleaned.table.height(),
        dropped = cleaned.dropped_rows(),
        "dropped incomplete rows"
    );

    // Stage 5: Write
    write_csv_table(&cleaned.table, &config.output)
        .with_context(|| format!("write {}", config.output.display()))?;

    let elapsed = start.elapsed();
    info!(elapsed = ?elapsed, "clean finished");
    Ok(CleanResult {
        input: config.input.clone(),
        output: config.output.clone(),
        input_rows: cleaned.input_rows,
        input_columns: raw.width(),
        rows: cleaned.table.height(),
        columns: cleaned.table.width(),
        missing: cleaned.missing,
        elapsed,
    })
}

/// Load a cleaned file as typed records and tally owner types.
pub fn run_inspect(path: &Path) -> Result<InspectResult> {
    let span = info_span!("inspect", path = %path.display());
    let _guard = span.enter();

    let load = read_cleaned_properties(path)
        .with_context(|| format!("load {}", path.display()))?;
    let mut owner_types: BTreeMap<String, usize> = BTreeMap::new();
    for property in &load.properties {
        *owner_types.entry(property.owner_type.clone()).or_insert(0) += 1;
    }
    info!(
        loaded = load.properties.len(),
        skipped = load.skipped,
        owner_types = owner_types.len(),
        "inspected cleaned file"
    );

    Ok(InspectResult {
        path: path.to_path_buf(),
        loaded: load.properties.len(),
        skipped: load.skipped,
        owner_types,
    })
}

/// Load a cleaned file and group its entries into `clusters` k-means
/// clusters over `TotalUnits` and `ActiveSubs`.
pub fn run_cluster(path: &Path, clusters: usize) -> Result<ClusterResult> {
    let span = info_span!("cluster", path = %path.display(), clusters);
    let _guard = span.enter();

    let load = read_cleaned_properties(path)
        .with_context(|| format!("load {}", path.display()))?;
    let report = cluster_properties(&load.properties, clusters)
        .with_context(|| format!("cluster {} entries", load.properties.len()))?;
    for cluster in &report.clusters {
        debug!(
            cluster = cluster.id,
            size = cluster.size,
            total_units = cluster.total_units,
            active_subs = cluster.active_subs,
            "cluster centroid"
        );
    }
    info!(
        loaded = load.properties.len(),
        skipped = load.skipped,
        clusters = report.clusters.len(),
        "clustered cleaned file"
    );

    Ok(ClusterResult {
        path: path.to_path_buf(),
        loaded: load.properties.len(),
        skipped: load.skipped,
        report,
    })
}
