//! Handler for the `tag` and `strip` commands.

use colored::*;
use std::path::PathBuf;

use crate::cli_types::RunArgs;
use crate::file_processor::{FileOutcome, find_note_files, process_files};
use crate::stdin_processor::process_stdin;
use notefix_lib::classifier::{ConfiguredClassifier, HeuristicClassifier};
use notefix_lib::config::Config;
use notefix_lib::exit_codes::exit;
use notefix_lib::transforms::{BackslashStripper, LanguageTagger, Transform, TransformKind};

/// Resolve configuration, applying command line overrides on top.
fn load_config(args: &RunArgs) -> Config {
    let targets: Vec<PathBuf> = if args.is_stdin() {
        Vec::new()
    } else {
        args.paths.iter().map(PathBuf::from).collect()
    };

    let (mut config, source) = match Config::discover(args.config.as_deref(), &targets, args.no_config) {
        Ok(found) => found,
        Err(e) => {
            eprintln!("{}: {}", "Config error".red().bold(), e);
            exit::tool_error();
        }
    };
    if let Some(source) = source {
        log::debug!("[notefix-config] Using {}", source.display());
    }

    if let Some(patterns) = args.exclude_patterns() {
        config.global.exclude = patterns;
    }
    if args.respect_gitignore {
        config.global.respect_gitignore = true;
    }
    config
}

fn build_transform(kind: TransformKind, config: &Config) -> Box<dyn Transform + Sync> {
    match kind {
        TransformKind::Tag => Box::new(LanguageTagger::new(ConfiguredClassifier::new(
            HeuristicClassifier,
            &config.tag,
        ))),
        TransformKind::Strip => Box::new(BackslashStripper::new()),
    }
}

/// Run a transformation over the given paths and exit with the resulting status.
pub fn handle_run(kind: TransformKind, args: &RunArgs) -> ! {
    let config = load_config(args);
    let transform = build_transform(kind, &config);
    log::debug!("[notefix-{kind}] {}", transform.description());

    if args.is_stdin() {
        match process_stdin(transform.as_ref(), args.check) {
            Ok(code) => std::process::exit(code),
            Err(e) => {
                eprintln!("{}: {:#}", "Error".red().bold(), e);
                exit::tool_error();
            }
        }
    }
    if args.paths.iter().any(|p| p == "-") {
        eprintln!("{}: '-' (stdin) cannot be combined with other paths", "Error".red().bold());
        exit::tool_error();
    }

    let files = match find_note_files(&args.paths, &config) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    };

    let mut would_modify = 0usize;
    let mut failures = 0usize;
    for (path, result) in process_files(&files, transform.as_ref(), args.check) {
        match result {
            Ok(FileOutcome::WouldModify) => {
                would_modify += 1;
                println!("Would modify: {}", path.display());
            }
            Ok(FileOutcome::Unchanged) if args.check => {}
            Ok(_) => {
                if !args.quiet {
                    println!("Processed: {}", path.display());
                }
            }
            Err(e) => {
                failures += 1;
                eprintln!("{}: {}", "Error".red().bold(), e);
            }
        }
    }

    if args.check {
        if would_modify > 0 && !args.quiet {
            println!(
                "{} file(s) would be modified by `notefix {kind}`",
                would_modify.to_string().yellow().bold()
            );
        }
    } else if !args.quiet {
        println!("Done!");
    }

    if failures > 0 {
        exit::tool_error();
    } else if would_modify > 0 {
        exit::changes_needed();
    }
    exit::success()
}
