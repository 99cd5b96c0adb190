use crate::cli;
use crate::csv_processor;

use rayon::prelude::*;

/// Collects CSV/TXT files from the input directory.
///
/// # Arguments
/// * `input_dir_path` - Directory with input price files.
///
/// # Returns
/// * `anyhow::Result<Vec<std::path::PathBuf>>` - Paths of files to process.
fn collect_input_files<P: AsRef<std::path::Path>>(
    input_dir_path: P,
) -> anyhow::Result<Vec<std::path::PathBuf>> {
    let paths = std::fs::read_dir(input_dir_path.as_ref())?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map_or(false, |ext| ext.eq_ignore_ascii_case("csv") || ext.eq_ignore_ascii_case("txt"))
        })
        .collect::<Vec<_>>();

    anyhow::Ok(paths)
}

/// Scans every CSV/TXT file in the input directory and writes one trade report per file.
///
/// This function:
/// 1. Collects the input files.
/// 2. Sets up a progress bar sized to the file count.
/// 3. Processes files in parallel with Rayon, one report per file.
///
/// Each input file `NAME.csv` produces `NAME.trade.json` in the output directory.
/// Files are independent, so a failure in one file aborts the batch with that
/// file's error.
///
/// # Arguments
/// * `input_dir_path` - Directory with input price files.
/// * `output_dir_path` - Directory for .trade.json report files.
/// * `algorithm` - Which scan implementation to run.
///
/// # Returns
/// * `anyhow::Result<()>` - Success or the first error encountered.
///
/// # Errors
/// * If the input directory cannot be read.
/// * If any file fails to load, scan or save.
pub fn process_files<P: AsRef<std::path::Path> + Send + Sync>(
    input_dir_path: P,
    output_dir_path: P,
    algorithm: cli::Algorithm,
) -> anyhow::Result<()> {
    let paths = collect_input_files(input_dir_path.as_ref())?;
    if paths.is_empty() {
        println!("⚠️ No CSV/TXT files found in {}", input_dir_path.as_ref().display());
        return Ok(());
    }

    let progress_bar = indicatif::ProgressBar::new(paths.len() as u64);
    progress_bar.set_style(
        indicatif::ProgressStyle::with_template(
            "[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )?
        .progress_chars("#>-"),
    );

    paths.par_iter().try_for_each(|path| {
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let output_path = output_dir_path.as_ref().join(format!("{}.trade.json", stem));

        csv_processor::scan_csv_to_report(path.as_path(), output_path.as_path(), algorithm)?;
        progress_bar.inc(1);

        Ok::<_, anyhow::Error>(())
    })?;

    progress_bar.finish_with_message("all files scanned");
    anyhow::Ok(())
}

#[cfg(test)]
mod tests {
    use super::process_files;
    use crate::cli;

    #[test]
    fn processes_directory_of_csv_files_and_skips_other_extensions() {
        let input_dir = tempfile::tempdir().unwrap();
        let output_dir = tempfile::tempdir().unwrap();

        let rising = "\
<DATE>,<TIME>,<CLOSE>
20240613,100000,1.0
20240613,100100,2.0
20240613,100200,5.0
";
        std::fs::write(input_dir.path().join("rising.csv"), rising).unwrap();
        std::fs::write(input_dir.path().join("notes.md"), "not a price file").unwrap();

        process_files(
            input_dir.path(),
            output_dir.path(),
            cli::Algorithm::SinglePass,
        )
        .unwrap();

        assert!(output_dir.path().join("rising.trade.json").exists());
        assert!(!output_dir.path().join("notes.trade.json").exists());
    }

    #[test]
    fn empty_input_directory_is_not_an_error() {
        let input_dir = tempfile::tempdir().unwrap();
        let output_dir = tempfile::tempdir().unwrap();

        process_files(
            input_dir.path(),
            output_dir.path(),
            cli::Algorithm::Exhaustive,
        )
        .unwrap();
    }
}
