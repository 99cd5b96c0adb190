// Minimal imports required for the main logic
mod cli;
mod utils;
mod report;
mod scanner;
mod progress;
mod csv_processor;
mod file_processing;
mod read_reports;

/// Main entry point of the application.
///
/// This function orchestrates the entire workflow:
/// 1. Parses command-line arguments.
/// 2. Validates input/output paths.
/// 3. Determines the number of threads to use.
/// 4. Scans CSV price files for the best buy/sell trade and writes reports.
/// 5. Optionally reads the reports back and prints them.
///
/// # Returns
///
/// * `anyhow::Result<()>` - Success or an error if any step fails.
fn main() -> anyhow::Result<()> {
    let total_start = std::time::Instant::now();
    let args = cli::Args::parse();
    println!("Start scanning...");

    file_processing::check_path(&args.input)?;
    file_processing::ensure_output_dir_exists(&args.output)?;

    let effective_threads = match args.threads {
        Some(n) if n > 0 => {
            let max_threads = num_cpus::get();
            if n > max_threads {
                println!("⚠️ Warning: Limiting thread count to {} (max available)", max_threads);
                max_threads
            } else { n }
        }
        Some(_) => return Err(anyhow::anyhow!("Number of threads must be a positive integer")),
        None => {
            let default_threads = rayon::current_num_threads();
            default_threads
        }
    };
    println!("🚀 Using {} thread(s)", effective_threads);

    if args.threads.is_some() {
        let local_pool = utils::configure_thread_pool(effective_threads)?;
        local_pool.install(|| progress::process_files(&args.input, &args.output, args.algorithm))?;
    } else {
        progress::process_files(&args.input, &args.output, args.algorithm)?;
    }

    let duration = total_start.elapsed();
    println!(
        "✅ Scanning completed in {:?} seconds",
        duration.as_secs_f64()
    );

    if args.check {
        println!("Start reading...");
        let start = std::time::Instant::now();

        if args.threads.is_some() {
            let local_pool = utils::configure_thread_pool(effective_threads)?;
            local_pool.install(|| read_reports::read_reports(&args.output))?;
        } else {
            read_reports::read_reports(&args.output)?;
        }
        println!(
            "✅ Reading files complete in {:?} seconds",
            start.elapsed().as_secs_f64()
        );
    }
    Ok(())
}
