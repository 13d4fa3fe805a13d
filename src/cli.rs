//! Command-line arguments of the recognition runner.

use clap::Parser;

use crate::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Recorded landmark stream to replay (YAML)
    #[arg(required_unless_present = "print_config")]
    pub recording: Option<String>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    pub config: Option<String>,

    /// Output format, overrides the configuration file
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write labels to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<String>,

    /// Only write frames in which something was recognized
    #[arg(long)]
    pub skip_idle: bool,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,

    /// Print an example configuration file and exit
    #[arg(long)]
    pub print_config: bool,
}
