use std::path::Path;

use anyhow::Result;

use housing_cli::config::{CLEAN_CSV_NAME, CleanConfig};
use housing_cli::pipeline::{run_clean, run_cluster, run_inspect};
use housing_cli::summary::{print_clusters, print_inspect, print_report, print_summary};

use crate::cli::{CleanArgs, ClusterArgs, InspectArgs};

pub fn clean(data_dir: &Path, args: CleanArgs) -> Result<()> {
    let config = CleanConfig::from_data_dir(data_dir)
        .with_input(args.input)
        .with_output(args.output);
    let result = run_clean(&config)?;
    print_report(&result);
    if args.summary {
        print_summary(&result);
    }
    Ok(())
}

pub fn inspect(data_dir: &Path, args: InspectArgs) -> Result<()> {
    let path = args.input.unwrap_or_else(|| data_dir.join(CLEAN_CSV_NAME));
    let result = run_inspect(&path)?;
    print_inspect(&result);
    Ok(())
}

pub fn cluster(data_dir: &Path, args: ClusterArgs) -> Result<()> {
    let path = args.input.unwrap_or_else(|| data_dir.join(CLEAN_CSV_NAME));
    let result = run_cluster(&path, args.clusters)?;
    print_clusters(&result);
    Ok(())
}
