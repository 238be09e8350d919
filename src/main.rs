use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::Context;
use clap::Parser;
use lox_scanner::{
    display_error,
    lexer::{
        config::{ScanMode, ScannerOptions},
        lexer::Scanner,
    },
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Scan a Lox source file and print its tokens.
#[derive(Parser, Debug)]
#[command(name = "lox-scanner", version)]
struct Cli {
    /// Source file to scan
    file: PathBuf,

    /// Fail on the first unrecognised character instead of dropping it
    #[arg(long)]
    strict: bool,

    /// Leave COMMENT tokens out of the output
    #[arg(long)]
    no_comments: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());
    let file_contents = read_to_string(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;

    let options = ScannerOptions {
        mode: if cli.strict { ScanMode::Strict } else { ScanMode::Lenient },
        keep_comments: !cli.no_comments,
    };

    let start = Instant::now();
    let scanner = Scanner::with_options(file_contents, file_name, options);

    let tokens = match scanner.scan() {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, scanner.source());
            return Ok(ExitCode::FAILURE);
        }
    };

    for token in &tokens {
        println!("{}", token);
    }

    eprintln!("Tokenized in {:?}", start.elapsed());

    Ok(ExitCode::SUCCESS)
}
