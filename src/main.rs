use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser as ClapParser;

use typelet::{Parser, Scanner};

/// Typelet is a small scripting language with statically typed let and
/// const bindings.
#[derive(ClapParser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Path to the script to execute
    file: PathBuf,

    /// Execution mode: interpret, parse (dump the AST as JSON), or scan
    /// (dump the token stream as JSON)
    #[arg(short, long, default_value = "interpret")]
    mode: String,

    /// Language version gate; only 1.0 is available
    #[arg(long)]
    lang_version: Option<f64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run(&Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    if let Some(version) = args.lang_version {
        if version != 1.0 {
            anyhow::bail!("Version not available");
        }
    }

    let source = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read '{}'", args.file.display()))?;

    match args.mode.as_str() {
        "interpret" => {
            typelet::run(&source, &mut io::stdout())?;
        }
        "parse" => {
            let tokens = Scanner::new(&source).scan_tokens()?;
            let statements = Parser::new(tokens).parse()?;
            println!("{}", serde_json::to_string_pretty(&statements)?);
        }
        "scan" => {
            let tokens = Scanner::new(&source).scan_tokens()?;
            println!("{}", serde_json::to_string_pretty(&tokens)?);
        }
        other => anyhow::bail!("unknown mode '{other}' (expected interpret, parse, or scan)"),
    }

    Ok(())
}
