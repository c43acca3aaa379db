//! Command-line driver that rewrites a stylesheet's colors in place.
//!
//! Usage: `oklchify <stylesheet>`. The single argument is the path, absolute
//! or relative to the working directory, of a text file containing CSS
//! custom-property declarations. Every declaration whose value is a hex or
//! `hsl()` color is replaced with its OKLCH equivalent; everything else is
//! left byte for byte as it was.

use std::env;
use std::path::Path;
use std::process::ExitCode;

mod rewrite;

fn main() -> ExitCode {
    let Some(argument) = env::args().nth(1) else {
        eprintln!("usage: oklchify <stylesheet>");
        return ExitCode::FAILURE;
    };

    let path = Path::new(&argument);
    if !path.exists() {
        eprintln!("file not found: {}", path.display());
        return ExitCode::FAILURE;
    }

    match rewrite::rewrite_file(path) {
        Ok(count) => {
            println!("converted {count} color(s) in {}", path.display());
            ExitCode::SUCCESS
        }
        Err(error) => {
            // A half-converted stylesheet must not pass a build quietly.
            eprintln!("error processing {}: {error:#}", path.display());
            ExitCode::FAILURE
        }
    }
}
