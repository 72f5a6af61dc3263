mod discover;
mod parse;
mod walk;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "nodescope",
    version,
    about = "Discovers versioned node definition files under search paths",
    long_about = "Nodescope walks a set of search directories for node definition files \
                  (for example compiled shader definitions), splits each base file name \
                  into family, name and version according to the node naming convention, \
                  and reports one discovery record per conforming file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Walk options shared by the `discover` and `walk` subcommands.
#[derive(Args)]
pub struct WalkArgs {
    /// Search path directories, in priority order
    #[arg(value_name = "SEARCH_PATH", required = true)]
    pub paths: Vec<PathBuf>,
    /// Allowed file extension, with or without the leading dot (repeatable)
    #[arg(short = 'e', long = "ext", value_name = "EXT", required = true)]
    pub extensions: Vec<String>,
    /// Descend into symlinked directories
    #[arg(long)]
    pub follow_symlinks: bool,
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Discover node definitions and print one record per file
    #[command(
        long_about = "Walks the search paths, keeps files whose extension is allowed and \
                      whose base name follows the node naming convention, and prints the \
                      resulting records. Files with non-conforming names are skipped."
    )]
    Discover {
        #[command(flatten)]
        args: WalkArgs,
    },
    /// Enumerate qualifying files without parsing their names
    #[command(
        long_about = "Runs only the path walker: every file with an allowed extension is \
                      reported as a (uri, resolvedUri) pair, whether or not its name parses."
    )]
    Walk {
        #[command(flatten)]
        args: WalkArgs,
    },
    /// Split a bare identifier into family, name and version
    #[command(
        long_about = "Parses an identifier without touching the filesystem. Exits with an \
                      error when the identifier does not follow the naming convention."
    )]
    Parse {
        /// Identifier to split, e.g. Primvar_float2_3
        #[arg(value_name = "IDENTIFIER")]
        identifier: String,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = nodescope_core::logging::init_logging("cli", false);

    match cli.command {
        Commands::Discover { args } => discover::run(args),
        Commands::Walk { args } => walk::run(args),
        Commands::Parse { identifier } => parse::run(&identifier),
    }
}
