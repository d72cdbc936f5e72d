use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::validation::parse_key_value;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate build descriptors
    ///
    /// Prints a single JSON object when one descriptor results and a JSON
    /// array otherwise.
    Generate(GenerateArgs),

    /// Validate options and package.json without generating anything
    Check(CheckArgs),
}

/// Project location shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Project directory containing package.json (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Options file (bundlecfg.toml, bundlecfg.json or package.json)
    ///
    /// Relative paths are resolved against the project directory (--cwd),
    /// not the directory the command runs in. Without this flag the project
    /// directory is searched for bundlecfg.toml, bundlecfg.json and a
    /// "bundlecfg" field in package.json.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Variants to build (cjs, esm, umd); repeatable
    ///
    /// Any other name builds esm and umd. BUNDLECFG_TARGET takes one name
    /// or a list such as `[cjs, umd]`.
    #[arg(short, long = "target", value_name = "TARGET")]
    pub targets: Vec<String>,

    /// Entry point
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Additional module to keep out of the bundle; repeatable
    #[arg(short, long = "external", value_name = "MODULE")]
    pub externals: Vec<String>,

    /// Import alias as FIND=REPLACEMENT; repeatable
    #[arg(long = "alias", value_name = "FIND=PATH", value_parser = parse_key_value)]
    pub aliases: Vec<(String, String)>,

    /// umd global as MODULE=NAME; repeatable
    #[arg(long = "global", value_name = "MODULE=NAME", value_parser = parse_key_value)]
    pub globals: Vec<(String, String)>,

    /// Minify cjs and esm output (umd is always minified)
    #[arg(short, long)]
    pub minify: bool,

    /// Skip the bundle size report
    #[arg(long)]
    pub no_filesize: bool,

    /// Skip TypeScript type stripping
    #[arg(long)]
    pub no_typescript: bool,

    /// Runtime mode, overriding NODE_ENV
    #[arg(long, value_name = "MODE")]
    pub node_env: Option<String>,

    /// Write descriptors to a file instead of stdout
    ///
    /// Relative paths are resolved against the project directory (--cwd).
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Emit compact JSON
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}
