use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;

/// Dump custom mining revenue scores to a CSV report.
#[derive(Parser, Debug)]
#[command(name = "custom-mining-revenue", version)]
struct Cli {
    /// Binary score dump: 676 old final scores then 676 custom mining scores (u64, little-endian)
    input_file: PathBuf,

    /// CSV report to write
    output_file: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => process::exit(0),
                _ => process::exit(1),
            }
        }
    };

    match custom_mining_revenue::convert(&cli.input_file, &cli.output_file) {
        Ok(summary) => {
            println!("CSV file '{}' written successfully.", summary.output.display());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
