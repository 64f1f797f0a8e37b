//! A CLI tool for locating the pixel data of DICOM files
//! and printing the image attributes found on the way.
use clap::Parser;
use dicom_scan_dump::{dump_registry_to, dump_scan_to, scan_file};
use dicom_scan_transfer_syntax_registry::get_registry;
use snafu::{Report, ResultExt, Whatever};
use std::io::{stdout, ErrorKind};
use std::path::PathBuf;
use tracing::Level;

/// Exit code for when an error emerged while scanning the DICOM file.
const ERROR_READ: i32 = -2;
/// Exit code for when an error emerged while printing the outcome.
const ERROR_PRINT: i32 = -3;

/// Locate the pixel data of DICOM files
#[derive(Debug, Parser)]
#[command(version)]
struct App {
    /// The DICOM file(s) to scan
    #[clap(required_unless_present = "list_syntaxes")]
    files: Vec<PathBuf>,
    /// Verbose mode
    #[clap(short = 'v', long = "verbose", conflicts_with = "quiet")]
    verbose: bool,
    /// Only log warnings and errors
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,
    /// Fail if any errors are encountered
    #[clap(long = "fail-first")]
    fail_first: bool,
    /// Print the known transfer syntaxes and exit
    #[clap(long = "list-syntaxes")]
    list_syntaxes: bool,
}

fn main() {
    run().unwrap_or_else(|e| {
        eprintln!("{}", Report::from_error(e));
        std::process::exit(-2);
    });
}

fn run() -> Result<(), Whatever> {
    let App {
        files: filenames,
        verbose,
        quiet,
        fail_first,
        list_syntaxes,
    } = App::parse();

    let level = if verbose {
        Level::DEBUG
    } else if quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .whatever_context("Could not set up global logging subscriber")
    .unwrap_or_else(|e: Whatever| {
        eprintln!("[ERROR] {}", Report::from_error(e));
    });

    if list_syntaxes {
        return dump_registry_to(stdout(), get_registry())
            .whatever_context("Could not print transfer syntaxes");
    }

    let fail_first = filenames.len() == 1 || fail_first;
    let mut errors: i32 = 0;

    for filename in &filenames {
        println!("{}: ", filename.display());
        match scan_file(filename) {
            Err(e) => {
                tracing::error!("{}", Report::from_error(e));
                if fail_first {
                    std::process::exit(ERROR_READ);
                }
                errors += 1;
            }
            Ok((location, report)) => {
                if let Err(ref e) = dump_scan_to(stdout(), &location, &report) {
                    if e.kind() == ErrorKind::BrokenPipe {
                        // handle broken pipe separately with a no-op
                    } else {
                        tracing::error!("{}", Report::from_error(e));
                        if fail_first {
                            std::process::exit(ERROR_PRINT);
                        }
                    }
                    errors += 1;
                }
            }
        };
    }

    std::process::exit(errors);
}
