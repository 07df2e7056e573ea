use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "drift-check",
    version,
    about = "Fail the build when generated documentation drifts from its versioned reference"
)]
pub struct Args {
    /// Versioned reference document (may contain patterns and fast-forward markers)
    pub expected: PathBuf,
    /// Freshly generated document
    pub actual: PathBuf,
    /// Whole-line fast-forward token. Defaults to ">> >>"
    #[arg(long)]
    pub marker: Option<String>,
    /// Delimiter of the ">> N >>" / ">> comment >>" marker form. Defaults to ">>"
    #[arg(long, conflicts_with = "no_delimiter")]
    pub delimiter: Option<String>,
    /// Recognise only the exact marker token
    #[arg(long)]
    pub no_delimiter: bool,
    /// Lines of context around a failure
    #[arg(long)]
    pub context: Option<usize>,
    /// JSON match-options file
    #[arg(long)]
    pub options: Option<PathBuf>,
    /// Output format: text (diagnostic on stderr) or json (envelope on stdout)
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Print nothing on success
    #[arg(long, short)]
    pub quiet: bool,
}
