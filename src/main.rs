/// Command-line entry point
///
/// Usage: fix-message-generator <numMessages> <outputFile>

use clap::Parser;
use fix_message_generator::{generate_to_file, GeneratorConfig, GeneratorResult, MessageGenerator};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fix-message-generator", version)]
#[command(about = "Generate synthetic FIX messages as JSON lines")]
struct Cli {
    /// Number of messages to generate
    num_messages: usize,

    /// File to create or overwrite
    output_file: PathBuf,
}

fn main() -> GeneratorResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();

    let generator = MessageGenerator::new(GeneratorConfig::default());
    generate_to_file(&cli.output_file, cli.num_messages, &generator)?;

    Ok(())
}
