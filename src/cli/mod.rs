use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(
    name = "related-files",
    version,
    about = "Related-file inference for project documents",
    long_about = "Scan a document for textual references to other files in the same project. File discovery respects .gitignore and .ignore with parent traversal. Global git excludes are disabled for determinism. Use --no-ignore to bypass ignore rules."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the project files a document textually references
    Scan {
        /// Path to the project root
        #[arg(short, long, default_value = ".")]
        path: String,
        /// The document to scan (absolute, or relative to the project root)
        #[arg(long)]
        file: String,
        /// Path to a TOML configuration file
        #[arg(long)]
        config: Option<String>,
        /// Bypass ignore rules (.gitignore/.ignore) when discovering files
        #[arg(long, default_value_t = false, help = "Include files even if matched by .gitignore/.ignore. Global git excludes are always disabled for determinism.")]
        no_ignore: bool,
        /// Candidates examined per batch before the scan yields
        #[arg(long)]
        batch_size: Option<usize>,
        /// Sleep between batches, in milliseconds
        #[arg(long)]
        yield_ms: Option<u64>,
        /// Output format: text or json
        #[arg(long, value_parser = ["text", "json"], default_value = "text")]
        format: String,
    },
    /// Print the relative reference one file would use to point at another
    Relative {
        /// Path to the project root
        #[arg(short, long, default_value = ".")]
        path: String,
        /// The document the reference is written in
        #[arg(long)]
        from: String,
        /// The file the reference points at
        #[arg(long)]
        to: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
