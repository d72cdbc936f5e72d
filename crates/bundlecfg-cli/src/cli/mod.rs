//! Command-line interface definition.
//!
//! - `bundlecfg generate` - print or write build descriptors
//! - `bundlecfg check` - validate options and manifest without generating

mod commands;
mod tests;
mod validation;

use clap::Parser;

pub use commands::{CheckArgs, Command, GenerateArgs, ProjectArgs};
pub use validation::parse_key_value;

/// bundlecfg - build descriptors for cjs, esm and umd library builds
#[derive(Parser, Debug)]
#[command(
    name = "bundlecfg",
    version,
    about = "Generate bundler build descriptors for library packages",
    long_about = "bundlecfg reads package.json and an options file and produces bundler\n\
                  configuration for CommonJS, ES module and UMD builds of a library."
)]
pub struct Cli {
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never colorize status output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}
