use crate::cli;
use crate::report;
use crate::scanner;

/// Represents a single record from input CSV.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct CsvRecord {
    #[serde(rename = "<DATE>")]
    date: String,
    #[serde(rename = "<TIME>")]
    time: String,
    #[serde(rename = "<CLOSE>")]
    close: f64,
}

/// Price series loaded from one CSV file.
///
/// Two parallel vectors, one entry per bar in file order:
/// - `timestamps`: Unix timestamps parsed from the `<DATE>`/`<TIME>` columns.
/// - `closes`: close prices, the observation the scanner runs over.
pub struct PriceSeries {
    pub timestamps: Vec<u64>,
    pub closes: Vec<f64>,
}

/// Reads CSV price records into a `PriceSeries`.
///
/// This function:
/// 1. Reads price records from a CSV reader.
/// 2. Parses datetime strings into Unix timestamps.
/// 3. Collects timestamps and close prices in file order.
///
/// Columns beyond `<DATE>`, `<TIME>` and `<CLOSE>` (open/high/low/volume in
/// full broker exports) are ignored by header-based deserialization.
///
/// # Arguments
/// * `reader` - CSV reader for input data.
///
/// # Returns
/// * `anyhow::Result<PriceSeries>` - The loaded series or an error.
///
/// # Errors
/// * If datetime parsing fails.
/// * If CSV deserialization fails.
fn load_price_series<R: std::io::Read>(reader: &mut csv::Reader<R>) -> anyhow::Result<PriceSeries> {
    let mut timestamps = Vec::new();
    let mut closes = Vec::new();

    for result in reader.deserialize::<CsvRecord>() {
        let record: CsvRecord = result?;
        let dt_str = format!("{} {}", record.date, record.time);

        let dt = chrono::NaiveDateTime::parse_from_str(&dt_str, "%Y%m%d %H%M%S")
        .map_err(|e| anyhow::anyhow!("Failed to parse datetime: {}", e))?;
        let timestamp = dt.and_utc().timestamp() as u64;

        timestamps.push(timestamp);
        closes.push(record.close);
    }

    anyhow::Ok(PriceSeries { timestamps, closes })
}

/// Builds the scan report for one loaded price series.
///
/// Runs the selected scan algorithm over the close prices and maps the
/// resulting index pair (if any) back onto the series timestamps, so the
/// report names the buy and sell moments instead of bare positions.
///
/// # Arguments
/// * `source_file` - Name of the input file, recorded in the report.
/// * `series` - The loaded price series.
/// * `algorithm` - Which scan implementation to run.
///
/// # Returns
/// * `report::ScanReport` - Report with the best trade, or with
///   `best_trade: None` when no profitable pair exists.
fn build_report(
    source_file: String,
    series: &PriceSeries,
    algorithm: cli::Algorithm,
) -> report::ScanReport {
    let best_trade = scanner::scan(&series.closes, algorithm).map(|trade| {
        report::BestTradeReport {
            buy: report::TradePoint {
                timestamp: series.timestamps[trade.buy_index],
                index: trade.buy_index as u64,
                price: series.closes[trade.buy_index],
            },
            sell: report::TradePoint {
                timestamp: series.timestamps[trade.sell_index],
                index: trade.sell_index as u64,
                price: series.closes[trade.sell_index],
            },
            profit: trade.profit,
        }
    });

    report::ScanReport {
        source_file,
        bars_scanned: series.closes.len() as u64,
        best_trade,
    }
}

/// Serializes and saves a scan report to a .trade.json file.
///
/// # Arguments
/// * `scan_report` - The report to save.
/// * `output_path` - Path of the output .trade.json file.
///
/// # Returns
/// * `anyhow::Result<()>` - Success or an error if writing fails.
///
/// # Errors
/// * If serialization or file I/O fails.
fn save_report<P: AsRef<std::path::Path>>(
    scan_report: &report::ScanReport,
    output_path: P,
) -> anyhow::Result<()> {
    let data = serde_json::to_vec_pretty(scan_report)?;
    std::fs::write(output_path.as_ref(), data)?;

    anyhow::Ok(())
}

/// Public entry point to scan a CSV price file and write its trade report.
///
/// This function provides a high-level interface for processing one file:
/// 1. Opens and reads the input CSV file.
/// 2. Loads the price series via `load_price_series`.
/// 3. Runs the scan and assembles the report via `build_report`.
/// 4. Persists the report via `save_report`.
///
/// It's designed to be called from the parallel batch driver in
/// `progress.rs`, once per input file.
///
/// # Arguments
/// * `input_path` - Path to the input CSV file.
/// * `output_path` - Path for the output .trade.json file.
/// * `algorithm` - Which scan implementation to run.
///
/// # Returns
/// * `anyhow::Result<()>` - Success or an error if any step fails.
///
/// # Errors
/// * Propagates errors from file I/O, `load_price_series` or `save_report`.
pub fn scan_csv_to_report<P: AsRef<std::path::Path>>(
    input_path: P,
    output_path: P,
    algorithm: cli::Algorithm,
) -> anyhow::Result<()> {
    let input_file = std::fs::File::open(input_path.as_ref())?;
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(input_file);

    let series = load_price_series(&mut reader)?;
    let source_file = input_path
        .as_ref()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let scan_report = build_report(source_file, &series, algorithm);
    save_report(&scan_report, output_path.as_ref())?;

    anyhow::Ok(())
}
