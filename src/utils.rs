use crate::report;

use chrono::TimeZone;

/// Configures a custom Rayon thread pool with specified size.
///
/// This function creates a new Rayon thread pool with the exact number of threads specified.
/// It's useful when you want to control the level of parallelism explicitly, separate from
/// the global Rayon pool.
///
/// # Arguments
/// * `num_threads` - Desired number of threads for the pool.
///
/// # Returns
/// * `Result<ThreadPool>` - Created thread pool or an error if creation fails.
pub fn configure_thread_pool(num_threads: usize) -> anyhow::Result<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build thread pool: {}", e))
}

/// Formats Unix timestamp into readable string: YYYYMMDD HHMMSS.
///
/// This function converts a Unix timestamp (seconds since epoch) into a human-readable
/// string in the format "YYYYMMDD HHMMSS". It's used for printing trade legs in
/// output messages.
///
/// # Arguments
/// * `ts` - Unix timestamp in seconds.
///
/// # Returns
/// * `anyhow::Result<String>` - Formatted string (e.g., "20240613 100000") or error if invalid timestamp.
pub fn format_timestamp(ts: u64) -> anyhow::Result<String> {
    let dt = chrono::Utc.timestamp_opt(ts as i64, 0).unwrap();
    let output = dt.format("%Y%m%d %H%M%S").to_string();
    anyhow::Ok(output)
}

/// Prints one scan report in human-readable form.
///
/// Shows the source file, the number of bars scanned, and either both trade
/// legs with formatted timestamps or an explicit no-trade line.
///
/// # Arguments
/// * `scan_report` - The report to print.
///
/// # Returns
/// * `anyhow::Result<()>` - Indicates success or an error during timestamp formatting.
///
/// # Example Output
/// ```text
///  - file: fixture.csv, bars: 4
///    buy : ts 20240613 100100, index 1, price 3.00
///    sell: ts 20240613 100300, index 3, price 9.00
///    profit: 6.00
/// ```
pub fn print_report(scan_report: &report::ScanReport) -> anyhow::Result<()> {
    match &scan_report.best_trade {
        Some(best) => {
            println!(
                " - file: {}, bars: {}",
                scan_report.source_file, scan_report.bars_scanned,
            );
            println!(
                "   buy : ts {}, index {}, price {:.2}",
                format_timestamp(best.buy.timestamp)?,
                best.buy.index,
                best.buy.price,
            );
            println!(
                "   sell: ts {}, index {}, price {:.2}",
                format_timestamp(best.sell.timestamp)?,
                best.sell.index,
                best.sell.price,
            );
            println!("   profit: {:.2}", best.profit);
        }
        None => {
            println!(
                " - file: {}, bars: {} → no profitable trade",
                scan_report.source_file, scan_report.bars_scanned,
            );
        }
    }

    anyhow::Ok(())
}
