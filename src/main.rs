use std::process;

use clap::error::ErrorKind;
use clap::Parser;

use deepsum::ManifestEngine;

/// Wide SHA-3 manifest generator.
///
/// Hashes a file, the files matching a wildcard pattern, or the files in a
/// directory tree, and writes a sorted `<path>\t<digest>` manifest next to
/// the target.
#[derive(Parser, Debug)]
#[command(name = "deepsum", version, about)]
struct Cli {
    /// Recurse into subdirectories (directory targets only)
    #[arg(short = 'r', long = "recursive")]
    recursive: bool,

    /// File, wildcard pattern, or directory to hash.
    /// Anything after the first non-flag token is ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    target: Vec<String>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{}", e);
            process::exit(0);
        }
        Err(e) => {
            eprint!("{}", e);
            process::exit(1);
        }
    };

    // Only the first non-flag token is the target; the rest is ignored
    let target = match cli.target.first() {
        Some(t) if !t.trim().is_empty() => t.clone(),
        _ => {
            eprintln!("error: missing target");
            eprintln!("Usage: deepsum [-r|--recursive] <target>");
            process::exit(1);
        }
    };

    let engine = ManifestEngine::new();
    match engine.run(&target, cli.recursive) {
        Ok(_) => {}
        Err(e) => {
            let code = e.exit_code();
            if code == 3 {
                eprintln!("fatal: {}", e);
            } else {
                eprintln!("error: {}", e);
            }
            process::exit(code);
        }
    }
}
