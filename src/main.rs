use std::{fs::read_to_string, path::PathBuf, process, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use fox::{
    errors::errors::format_error,
    lexer::lexer::tokenize,
    parser::parser::{parse_with_options, ParseOptions},
};

#[derive(Parser)]
#[command(name = "fox")]
#[command(author, version, about = "Parse a Fox source file and print its syntax tree", long_about = None)]
struct Cli {
    /// The source file to parse
    input: PathBuf,

    /// Print the token stream before the syntax tree
    #[arg(long)]
    dump_tokens: bool,

    /// Print the syntax tree as single-line JSON
    #[arg(long)]
    compact: bool,

    /// Reject tokens that do not start a top-level declaration
    #[arg(long)]
    strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let file_name = cli.input.to_string_lossy().to_string();
    let source = read_to_string(&cli.input)
        .with_context(|| format!("Failed to read file: {}", file_name))?;

    let start = Instant::now();

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprintln!("{}", format_error(&error, &file_name, &source));
            process::exit(1);
        }
    };

    log::info!("Tokenized {} tokens in {:?}", tokens.len(), start.elapsed());

    if cli.dump_tokens {
        for token in &tokens {
            println!("{}", token);
        }
    }

    let parse_start = Instant::now();
    let options = ParseOptions {
        strict_top_level: cli.strict,
    };

    let program = match parse_with_options(tokens, options) {
        Ok(program) => program,
        Err(error) => {
            eprintln!("{}", format_error(&error, &file_name, &source));
            process::exit(1);
        }
    };

    log::info!("Parsed in {:?}", parse_start.elapsed());

    let json = if cli.compact {
        serde_json::to_string(&program)
    } else {
        serde_json::to_string_pretty(&program)
    }
    .context("Failed to serialize syntax tree")?;

    println!("{}", json);

    log::info!("Total time: {:?}", start.elapsed());

    Ok(())
}
