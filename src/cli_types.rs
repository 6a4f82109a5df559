use clap::Args;
use std::path::PathBuf;

/// Arguments shared by the `tag` and `strip` subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Files or directories to rewrite (use '-' for stdin)
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Path to a configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Ignore any configuration file and use defaults
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Report files that would change without writing them; exit 1 if any would
    #[arg(long, help = "Exit with code 1 if any file would be rewritten (for CI)")]
    pub check: bool,

    /// Exclude specific files or directories (comma-separated glob patterns)
    #[arg(long)]
    pub exclude: Option<String>,

    /// Respect .gitignore files when scanning directories
    #[arg(
        long,
        help = "Respect .gitignore files when scanning directories (does not apply to explicitly provided paths)"
    )]
    pub respect_gitignore: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl RunArgs {
    /// Exclude patterns given on the command line, if any.
    pub fn exclude_patterns(&self) -> Option<Vec<String>> {
        self.exclude.as_deref().map(|patterns| {
            patterns
                .split(',')
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect()
        })
    }

    /// Whether the single path argument asks for stdin.
    pub fn is_stdin(&self) -> bool {
        self.paths.len() == 1 && self.paths[0] == "-"
    }
}
