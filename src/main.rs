use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use gef::driver::{self, OutputFormat};
use gef::error::Error;
use gef::input;

#[derive(Parser)]
#[command(name = "gef")]
#[command(
    about = "Gef prints selected whitespace-delimited fields of each input line, with per-field character slices, field ranges, and an NF alias for the last field, replacing common usage patterns of cut and awk."
)]
#[command(after_help = "Examples:
  gef 1 3 < DATA          fields 1 and 3
  gef 1.3 2.2.2 3 < DATA  field 1 from char 3, 2 chars of field 2 from char 2, field 3
  gef NF/1 1.1.2 < DATA   all fields last-to-first, then the first 2 chars of field 1")]
struct Cli {
    /// Field specifiers, one per output column: a field index, 0 for the
    /// whole line, <field>.<start>[.<length>], or <from>/<to>
    #[arg(required = true)]
    specifiers: Vec<String>,

    /// Read from files (in order) instead of standard input
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    files: Vec<PathBuf>,

    /// Output each line as a JSON array of fields
    #[arg(short = 'j', long = "json")]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let input = if cli.files.is_empty() {
        input::from_stdin()
    } else {
        input::from_files(&cli.files)
    };

    let lines = match input {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error reading input: {:#}", e);
            std::process::exit(1);
        }
    };

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Plain
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = driver::process(&lines, &cli.specifiers, format, &mut handle) {
        let _ = handle.flush();
        eprintln!("{}", e);
        std::process::exit(match e {
            Error::Usage => 2,
            _ => 1,
        });
    }
}
