//! Training data extraction CLI.
//!
//! Reads every match log directly inside a directory and writes one JSONL
//! line per board snapshot: the encoded features and the outcome label.
//!
//! Usage:
//!   hearthstone-boardcodec [OPTIONS]
//!
//! Options:
//!   --input DIR     Directory of match logs (default: data)
//!   --output FILE   Output file path (default: stdout)
//!   --threads N     Number of parallel threads (default: 1)
//!   --skip-errors   Skip malformed documents instead of aborting
//!   --shuffle       Shuffle samples before writing
//!   --seed N        Shuffle seed, 0 for entropy (default: 0)
//!   --quiet         Suppress progress and summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;
use std::time::Instant;

use hearthstone_boardcodec::dataset::{self, DatasetConfig, DatasetError, ErrorPolicy};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = DatasetConfig::default();
    let mut output_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                config.input_dir = PathBuf::from(flag_value(&args, i, "--input"));
            }
            "--output" => {
                i += 1;
                output_path = Some(PathBuf::from(flag_value(&args, i, "--output")));
            }
            "--threads" => {
                i += 1;
                config.threads = parse_flag(&args, i, "--threads");
            }
            "--seed" => {
                i += 1;
                config.seed = parse_flag(&args, i, "--seed");
            }
            "--skip-errors" => {
                config.on_error = ErrorPolicy::Skip;
            }
            "--shuffle" => {
                config.shuffle = true;
            }
            "--quiet" => {
                config.quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    if let Err(e) = run(&config, output_path) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

/// Builds the dataset and writes it to the output file or stdout.
fn run(config: &DatasetConfig, output_path: Option<PathBuf>) -> Result<(), DatasetError> {
    if !config.quiet {
        eprintln!(
            "Encoding: input {}, {} threads, errors {:?}, shuffle {}",
            config.input_dir.display(),
            config.threads,
            config.on_error,
            config.shuffle
        );
    }

    let start = Instant::now();
    let data = dataset::build_dataset(config)?;

    if !config.quiet {
        eprintln!(
            "Encoded {} documents in {:.1}s",
            data.documents_read,
            start.elapsed().as_secs_f64()
        );
        dataset::print_summary(&data);
    }

    match output_path {
        Some(path) => {
            let file = File::create(&path).map_err(DatasetError::Write)?;
            let mut writer = BufWriter::new(file);
            dataset::write_jsonl(&data.samples, &mut writer).map_err(DatasetError::Write)?;
            if !config.quiet {
                eprintln!("Wrote {} samples to {}", data.samples.len(), path.display());
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            dataset::write_jsonl(&data.samples, &mut writer).map_err(DatasetError::Write)?;
        }
    }
    Ok(())
}

/// Returns the value following a flag, exiting if it is missing.
fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i) {
        Some(v) => v,
        None => {
            eprintln!("Missing value for {}", flag);
            print_usage();
            process::exit(1);
        }
    }
}

/// Parses the value following a flag, exiting if it is missing or invalid.
fn parse_flag<T: FromStr>(args: &[String], i: usize, flag: &str) -> T {
    let raw = flag_value(args, i, flag);
    match raw.parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("invalid {} value: '{}'", flag, raw);
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: hearthstone-boardcodec [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --input DIR      Directory of match logs (default: data)");
    eprintln!("  --output FILE    Output file path (default: stdout)");
    eprintln!("  --threads N      Number of parallel threads (default: 1)");
    eprintln!("  --skip-errors    Skip malformed documents instead of aborting");
    eprintln!("  --shuffle        Shuffle samples before writing");
    eprintln!("  --seed N         Shuffle seed, 0 for entropy (default: 0)");
    eprintln!("  --quiet          Suppress progress and summary output");
    eprintln!("  --help           Show this help");
}
