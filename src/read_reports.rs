use crate::report;
use crate::utils;

use rayon::prelude::*;

/// Determines whether a path looks like a trade report produced by this tool.
///
/// Checks if the file name ends with `.trade.json`.
///
/// # Arguments
/// * `path` - The path to inspect.
///
/// # Returns
/// * `true` if the file name carries the report suffix, `false` otherwise.
fn is_report_path<P: AsRef<std::path::Path>>(path: P) -> bool {
    path.as_ref()
        .file_name()
        .and_then(|name| name.to_str())
        .map_or(false, |name| name.ends_with(".trade.json"))
}

/// Reads .trade.json report files and prints them in human-readable format.
///
/// This function collects the report files from the output directory,
/// loads them in parallel, and prints each one via `utils::print_report`.
/// Files without the report suffix are skipped with a warning.
///
/// # Arguments
/// * `output_dir_path` - Directory with .trade.json files.
///
/// # Returns
/// * `anyhow::Result<()>`
pub fn read_reports<P: AsRef<std::path::Path> + Send + Sync>(
    output_dir_path: P,
) -> anyhow::Result<()> {
    let paths = std::fs::read_dir(output_dir_path.as_ref())?
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            let path = entry.path();
            path.extension().map_or(false, |ext| ext == "json")
        })
        .collect::<Vec<_>>();

    paths.par_iter().try_for_each(|entry| {
        let path = entry.path();
        if is_report_path(&path) {
            process_file(&path)?;
        } else {
            println!("⚠️ Skipping file with unknown format: {}", path.display());
        }

        Ok::<_, anyhow::Error>(())
    })?;

    Ok(())
}

/// Processes a single .trade.json file: reads, parses, prints.
///
/// # Arguments
/// * `path` - Path to the .trade.json file.
///
/// # Returns
/// * `anyhow::Result<()>`
fn process_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<()> {
    println!(
        "Processing reading in thread: {:?} for file {:?}",
        std::thread::current().id(),
        path.as_ref()
    );

    let data = std::fs::read(path.as_ref())?;
    let scan_report: report::ScanReport = serde_json::from_slice(&data)
        .map_err(|e| anyhow::anyhow!("Failed to parse report {}: {}", path.as_ref().display(), e))?;

    utils::print_report(&scan_report)?;

    anyhow::Ok(())
}
