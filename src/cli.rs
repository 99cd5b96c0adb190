/// Scan algorithm selected on the command line.
///
/// `Exhaustive` checks every buy/sell index pair (O(n²)),
/// `SinglePass` tracks the minimum seen so far (O(n)).
/// Both produce identical results, including on profit ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Exhaustive,
    SinglePass,
}

/// Structure representing command-line arguments.
#[derive(Debug)]
pub struct Args {
    pub input: std::path::PathBuf,
    pub output: std::path::PathBuf,
    pub threads: Option<usize>,
    pub check: bool,
    pub algorithm: Algorithm,
}

/// Command-line arguments parser using Clap.
///
/// Supports input/output paths, threading, and algorithm selection with validation.
impl Args {
    /// Parses command-line arguments using `clap`.
    ///
    /// # Returns
    /// * `Args` - Struct containing parsed arguments.
    ///
    /// # Errors
    /// * If required arguments are missing or invalid.
    pub fn parse() -> Self {
        let matches = clap::Command::new("trade_scanner")
            .version("0.1.0")
            .about("Scan CSV/TXT price files for the best single buy/sell trade")
            .arg(
                clap::Arg::new("input")
                    .short('i')
                    .long("input")
                    .help("Path to input directory with CSV/TXT files")
                    .required(true)
                    .num_args(1),
            )
            .arg(
                clap::Arg::new("output")
                .short('o')
                .long("output")
                .help("Path to output directory for trade report files")
                .required(true)
                .num_args(1),
            )
            .arg(
                clap::Arg::new("threads")
                .short('t')
                .long("threads")
                .help("Number of threads to use (default: all available)")
                .num_args(1)
                .value_parser(clap::builder::ValueParser::new(parse_usize_positive)),
            )
            .arg(
                clap::Arg::new("check")
                .short('c')
                .long("check")
                .help("After scanning, read report files back and print them")
                .required(false)
                .action(clap::ArgAction::SetTrue)
            )
            .arg(
                clap::Arg::new("algorithm")
                .short('a')
                .long("algorithm")
                .help("Scan algorithm. Available: exhaustive, single-pass")
                .value_parser(["exhaustive", "single-pass"])
                .default_value("single-pass")
                .num_args(1)
            )
            .get_matches();

        let algorithm = match matches.get_one::<String>("algorithm").unwrap().as_str() {
            "exhaustive" => Algorithm::Exhaustive,
            _ => Algorithm::SinglePass,
        };

        Args {
            input: std::path::PathBuf::from(matches.get_one::<String>("input").unwrap()),
            output: std::path::PathBuf::from(matches.get_one::<String>("output").unwrap()),
            threads: matches.get_one::<usize>("threads").cloned(),
            check: matches.get_flag("check"),
            algorithm,
        }
    }
}

/// Validates that the number of threads is a positive integer.
///
/// # Arguments
/// * `s` - String representation of the number of threads.
///
/// # Returns
/// * `Result<usize>` - Validated number of threads.
fn parse_usize_positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("Must be a positive integer".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("Not a valid number: {}", e)),
    }
}
