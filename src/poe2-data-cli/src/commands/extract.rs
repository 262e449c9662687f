//! Table extraction into per-category JSON files
//!
//! Extraction is best-effort: a missing or undecodable table is reported
//! and skipped, and the category file is written with whatever decoded.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use poe2_data::{table_name, SourceError, TableSource, CATEGORIES, PASSIVE_TREE_PATHS};

/// Totals for one extraction run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    pub tables_written: usize,
    pub tables_failed: usize,
    pub rows_written: usize,
    pub passive_tree: bool,
}

/// Extract every configured category from `source` into `output`.
///
/// Writes one `<category>_data.json` per category, the combined
/// `poe2_all_data.json`, and `passive_tree.json` when tree data is found.
pub fn run(source: &dyn TableSource, output: &Path) -> Result<ExtractSummary> {
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))?;

    println!("Extracting from {}", source.origin());

    let mut summary = ExtractSummary::default();
    let mut combined = Map::new();

    for category in CATEGORIES {
        println!("\nExtracting {} data...", category.name);

        let mut tables = Map::new();
        for path in category.files {
            match source.read_table(path) {
                Ok(rows) => {
                    println!("  {}: {} rows", table_name(path), rows.len());
                    summary.tables_written += 1;
                    summary.rows_written += rows.len();
                    tables.insert(
                        table_name(path).to_string(),
                        Value::Array(rows.into_iter().map(Value::Object).collect()),
                    );
                }
                Err(SourceError::NotFound(_)) => {
                    eprintln!("  Warning: {} not found", path);
                    summary.tables_failed += 1;
                }
                Err(e) => {
                    eprintln!("  Warning: {}", e);
                    summary.tables_failed += 1;
                }
            }
        }

        let file = output.join(format!("{}_data.json", category.name));
        write_json(&file, &Value::Object(tables.clone()))?;
        println!("  Saved {}", file.display());

        combined.insert(category.name.to_string(), Value::Object(tables));
    }

    let combined_file = output.join("poe2_all_data.json");
    write_json(&combined_file, &Value::Object(combined))?;
    println!("\nSaved {}", combined_file.display());

    summary.passive_tree = extract_passive_tree(source, output)?;

    Ok(summary)
}

/// Try the known passive tree paths in order and save the first valid hit
fn extract_passive_tree(source: &dyn TableSource, output: &Path) -> Result<bool> {
    for path in PASSIVE_TREE_PATHS {
        let bytes = match source.read_raw(path) {
            Ok(bytes) => bytes,
            Err(SourceError::NotFound(_)) => continue,
            Err(e) => {
                eprintln!("Warning: {}", e);
                continue;
            }
        };

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(tree) => {
                let file = output.join("passive_tree.json");
                write_json(&file, &tree)?;
                println!("Saved passive tree from {} to {}", path, file.display());
                return Ok(true);
            }
            Err(e) => {
                eprintln!("Warning: {} is not valid JSON: {}", path, e);
            }
        }
    }

    eprintln!("Warning: no passive tree data found");
    Ok(false)
}

fn write_json(path: &Path, value: &Value) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
