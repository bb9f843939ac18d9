//! extract_forms - PDF form field inspection tool

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;

use pdfforms::{inspect_file, render, require_pdf_extension};

#[derive(Parser)]
#[command(name = "extract_forms")]
#[command(version)]
#[command(about = "Extract form field data from a PDF document", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap renders its own usage text; every real parse failure
            // (missing argument, extra arguments, bad flag) exits 1.
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    match run(&cli.file) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::from(1)
        }
    }
}

fn run(file: &Path) -> Result<(), String> {
    if !file.exists() {
        return Err(format!(
            "{}: File '{}' not found",
            "Error".red().bold(),
            file.display()
        ));
    }

    require_pdf_extension(file)
        .map_err(|_| format!("{}: Please provide a PDF file", "Error".red().bold()))?;

    println!("Extracting form data from: {}", file.display());

    let inspection = inspect_file(file)
        .map_err(|e| format!("{} {}", "Error processing PDF:".red().bold(), e))?;

    print!("{}", render::to_text(&inspection, file));

    Ok(())
}
