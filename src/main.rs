use std::fs;
use std::io::ErrorKind;

use clap::{Parser, Subcommand};
use line_patch::parse::parse_ops;
use line_patch::{apply_edit, eol};

#[derive(Parser)]
#[command(name = "line-patch")]
#[command(about = "Line-addressed text editing with unified diff output")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply edit specs to a file and print the resulting unified diff
    Apply {
        /// File to edit
        file: String,
        /// Edit specs (e.g. "rep:3:new text", "del:2..4", "ins:7:line")
        ops: Vec<String>,
        /// Create the file when it does not exist
        #[arg(long)]
        create: bool,
        /// Write the edited content back instead of only printing the diff
        #[arg(long)]
        write: bool,
        /// Join the result with LF instead of the file's own terminator
        #[arg(long)]
        lf: bool,
    },
    /// Report the dominant end-of-line convention of a file
    Eol {
        /// File to inspect
        file: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Apply {
            file,
            ops,
            create,
            write,
            lf,
        } => {
            let ops = parse_ops(&ops)?;
            let original = read_optional(&file)?;
            let outcome = apply_edit(original.as_deref(), &ops, create, !lf, &file)?;

            print!("{}", outcome.diff.unified);
            eprintln!(
                "{}: {} lines modified, {} lines total ({})",
                file, outcome.lines_modified, outcome.new_total, outcome.eol
            );

            if write {
                fs::write(&file, &outcome.content)?;
            }
        }
        Commands::Eol { file } => {
            let content = fs::read_to_string(&file)?;
            println!("{}", eol::detect(&content));
        }
    }

    Ok(())
}

/// Read a file, mapping "not found" to `None` so the edit layer can decide
/// whether creation was requested.
fn read_optional(path: &str) -> Result<Option<String>, std::io::Error> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}
