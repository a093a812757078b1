use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use code_ast::{parse_ast_with_policy, SourceCodeAst, SyntaxErrorPolicy};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "code-ast")]
#[command(about = "Parse source code into syntax trees and semantic components", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a source file and print its syntax tree
    Parse {
        /// Source file to parse
        file: PathBuf,

        /// Language of the source file (python, rust, javascript, ...)
        #[arg(short, long)]
        lang: String,

        /// Reaction to syntax errors in the file
        #[arg(long, value_enum, default_value_t = ErrorMode::Raise)]
        on_error: ErrorMode,
    },

    /// Print the semantic components of a source file
    Components {
        /// Source file to decompose
        file: PathBuf,

        /// Language of the source file (python, rust, javascript, ...)
        #[arg(short, long)]
        lang: String,

        /// Reaction to syntax errors in the file
        #[arg(long, value_enum, default_value_t = ErrorMode::Raise)]
        on_error: ErrorMode,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ErrorMode {
    Raise,
    Warn,
    Ignore,
}

impl From<ErrorMode> for SyntaxErrorPolicy {
    fn from(mode: ErrorMode) -> Self {
        match mode {
            ErrorMode::Raise => SyntaxErrorPolicy::Raise,
            ErrorMode::Warn => SyntaxErrorPolicy::Warn,
            ErrorMode::Ignore => SyntaxErrorPolicy::Ignore,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Parse {
            file,
            lang,
            on_error,
        } => cmd_parse(&file, &lang, on_error.into()),

        Commands::Components {
            file,
            lang,
            on_error,
        } => cmd_components(&file, &lang, on_error.into()),
    }
}

fn parse_file(file: &Path, lang: &str, policy: SyntaxErrorPolicy) -> Result<SourceCodeAst> {
    let source = fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    parse_ast_with_policy(&source, lang, policy)
        .with_context(|| format!("failed to parse {}", file.display()))
}

fn cmd_parse(file: &Path, lang: &str, policy: SyntaxErrorPolicy) -> Result<()> {
    let ast = parse_file(file, lang, policy)?;
    println!("{ast}");
    Ok(())
}

fn cmd_components(file: &Path, lang: &str, policy: SyntaxErrorPolicy) -> Result<()> {
    let ast = parse_file(file, lang, policy)?;

    let components = ast.components();
    println!(
        "{}",
        format!("{} components in {}", components.len(), file.display()).bold()
    );
    for component in components {
        let start = component.start_position();
        let end = component.end_position();
        println!(
            "{} {}",
            component.kind().cyan(),
            format!(
                "[{}:{} - {}:{}]",
                start.row, start.column, end.row, end.column
            )
            .dimmed()
        );
        println!("{}", component.text());
    }
    Ok(())
}
