//! bedcheck: validate a BED6 file against the fixed reference genome.
//!
//! Usage: bedcheck <path-to-bed-file>

use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process;

use bedcheck::validate::validate_file;

#[derive(Parser)]
#[command(name = "bedcheck")]
#[command(version)]
#[command(about = "Validate a BED6 file against the fixed reference genome", long_about = None)]
struct Cli {
    /// Input BED file (tab-separated, 6 columns, `#` comments skipped)
    input: PathBuf,
}

fn main() {
    // Usage errors exit 1, not clap's default 2; --help/--version exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{}", e);
                process::exit(0);
            }
            _ => {
                eprint!("{}", e);
                process::exit(1);
            }
        },
    };

    match validate_file(&cli.input) {
        Ok(_) => println!("BED file is valid."),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
