//! `editable` - drive an editable text field from the terminal.
//!
//! Reads one command per line from a script file or stdin and prints the
//! field's state after each.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::{Context, Result};
use clap::Parser;

use editable_field::cli::CliArgs;
use editable_field::session::{Command, Session};

fn main() -> Result<()> {
    editable_field::tracing::init()?;

    let args = CliArgs::parse();
    let script = args.script.clone();
    let config = args.into_config()?;
    let mut session = Session::new(config)?;

    let reader: Box<dyn BufRead> = match &script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", session.status())?;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        // A bad line is reported and skipped so interactive use can continue
        match line
            .parse::<Command>()
            .and_then(|command| session.execute(command))
        {
            Ok(report) => writeln!(out, "{}", report)?,
            Err(e) => writeln!(out, "error: {:#}", e)?,
        }
    }

    Ok(())
}
