use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use notefix_lib::transforms::TransformKind;

mod cli_types;
mod commands;
mod file_processor;
mod stdin_processor;

use cli_types::RunArgs;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a detected language to fenced code blocks that have none
    Tag(RunArgs),

    /// Remove backslashes escaping '<' and '>' inside fenced code blocks
    Strip(RunArgs),

    /// Create a default .notefix.toml
    Init {
        /// Directory to create the file in
        #[arg(default_value = ".")]
        dir: PathBuf,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (detected from $SHELL if omitted)
        shell: Option<Shell>,

        /// List available shells
        #[arg(long)]
        list: bool,
    },

    /// Show version information
    Version,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    // RUST_LOG still wins over the default level
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let cli = Cli::parse();

    let verbose = match &cli.command {
        Commands::Tag(args) | Commands::Strip(args) => args.verbose,
        _ => false,
    };
    init_logging(verbose);

    match cli.command {
        Commands::Tag(args) => commands::run::handle_run(TransformKind::Tag, &args),
        Commands::Strip(args) => commands::run::handle_run(TransformKind::Strip, &args),
        Commands::Init { dir } => commands::init::handle_init(&dir),
        Commands::Completions { shell, list } => commands::completions::handle_completions(shell, list),
        Commands::Version => commands::version::handle_version(),
    }
}
