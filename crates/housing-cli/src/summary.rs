use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::{CleanResult, ClusterResult, InspectResult};

/// `Wrote <rows>x<columns> to <path>`.
pub fn report_line(result: &CleanResult) -> String {
    format!(
        "Wrote {}x{} to {}",
        result.rows,
        result.columns,
        result.output.display()
    )
}

pub fn print_report(result: &CleanResult) {
    println!("{}", report_line(result));
}

/// Per-column missing counts and row totals for a clean run.
pub fn summary_table(result: &CleanResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Missing")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for column in &result.missing {
        table.add_row(vec![
            Cell::new(&column.column),
            count_cell(column.missing, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        header_cell("Rows read"),
        Cell::new(result.input_rows).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        header_cell("Rows dropped"),
        count_cell(result.dropped_rows(), Color::Red).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        header_cell("Rows kept"),
        Cell::new(result.rows)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn print_summary(result: &CleanResult) {
    println!("Input: {} ({} columns)", result.input.display(), result.input_columns);
    println!("{}", summary_table(result));
    println!("{}", finished_line(result));
}

pub fn finished_line(result: &CleanResult) -> String {
    format!("Finished in {:.2?}", result.elapsed)
}

/// Owner-type distribution of a cleaned file.
pub fn owner_type_table(result: &InspectResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("OwnerType"), header_cell("Entries")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (owner, count) in &result.owner_types {
        table.add_row(vec![Cell::new(owner), Cell::new(count)]);
    }
    table
}

pub fn print_inspect(result: &InspectResult) {
    println!("Loaded {} cleaned housing entries.", result.loaded);
    if result.skipped > 0 {
        eprintln!("Skipped {} invalid rows.", result.skipped);
    }
    if !result.owner_types.is_empty() {
        println!("{}", owner_type_table(result));
    }
}

/// Denormalized centroid, size and owner-type breakdown per cluster.
pub fn cluster_table(result: &ClusterResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Cluster"),
        header_cell("TotalUnits"),
        header_cell("ActiveSubs"),
        header_cell("Entries"),
        header_cell("OwnerType"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for cluster in &result.report.clusters {
        let owners = cluster
            .owner_types
            .iter()
            .map(|(owner, count)| format!("{owner}: {count}"))
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![
            Cell::new(cluster.id),
            Cell::new(format!("{:.0}", cluster.total_units)),
            Cell::new(format!("{:.0}", cluster.active_subs)),
            count_cell(cluster.size, Color::Green),
            Cell::new(owners),
        ]);
    }
    table
}

pub fn print_clusters(result: &ClusterResult) {
    println!("Loaded {} cleaned housing entries.", result.loaded);
    if result.skipped > 0 {
        eprintln!("Skipped {} invalid rows.", result.skipped);
    }
    println!("{}", cluster_table(result));
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::path::PathBuf;
    use std::time::Duration;

    use housing_cluster::{Cluster, ClusterReport};
    use housing_transform::ColumnMissing;

    fn result() -> CleanResult {
        CleanResult {
            input: PathBuf::from("data/raw.csv"),
            output: PathBuf::from("data/cleaned.csv"),
            input_rows: 3,
            input_columns: 17,
            rows: 1,
            columns: 5,
            missing: vec![
                ColumnMissing {
                    column: "Latitude".into(),
                    missing: 1,
                },
                ColumnMissing {
                    column: "OwnerType".into(),
                    missing: 1,
                },
            ],
            elapsed: Duration::from_millis(3),
        }
    }

    #[test]
    fn test_report_line_format() {
        let expected = format!("Wrote 1x5 to {}", PathBuf::from("data/cleaned.csv").display());
        assert_eq!(report_line(&result()), expected);
    }

    #[test]
    fn test_finished_line_reports_elapsed() {
        assert_eq!(finished_line(&result()), "Finished in 3.00ms");
    }

    #[test]
    fn test_summary_lists_columns_and_totals() {
        let rendered = summary_table(&result()).to_string();
        assert!(rendered.contains("Latitude"));
        assert!(rendered.contains("OwnerType"));
        assert!(rendered.contains("Rows dropped"));
        assert_eq!(result().dropped_rows(), 2);
    }

    #[test]
    fn test_cluster_table_rounds_centroids() {
        let result = ClusterResult {
            path: PathBuf::from("cleaned.csv"),
            loaded: 3,
            skipped: 0,
            report: ClusterReport {
                labels: vec![0, 0, 1],
                clusters: vec![
                    Cluster {
                        id: 0,
                        total_units: 12.4,
                        active_subs: 3.6,
                        size: 2,
                        owner_types: BTreeMap::from([("Non-Profit".to_string(), 2)]),
                    },
                    Cluster {
                        id: 1,
                        total_units: 250.0,
                        active_subs: 180.0,
                        size: 1,
                        owner_types: BTreeMap::from([("Private".to_string(), 1)]),
                    },
                ],
            },
        };

        let rendered = cluster_table(&result).to_string();

        assert!(rendered.contains("12"));
        assert!(!rendered.contains("12.4"));
        assert!(rendered.contains("250"));
        assert!(rendered.contains("Non-Profit: 2"));
        assert!(rendered.contains("Private: 1"));
    }

    #[test]
    fn test_owner_table_lists_each_owner() {
        let inspect = InspectResult {
            path: PathBuf::from("cleaned.csv"),
            loaded: 3,
            skipped: 0,
            owner_types: BTreeMap::from([("Private".to_string(), 2), ("Public".to_string(), 1)]),
        };
        let rendered = owner_type_table(&inspect).to_string();
        assert!(rendered.contains("Private"));
        assert!(rendered.contains("Public"));
    }
}
