//! File discovery and exclude pattern handling

use core::error::Error;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;
use notefix_lib::config::Config;
use std::path::{Path, PathBuf};

/// Expands directory-style patterns to also match files within them.
/// Pattern "dir/path" becomes ["dir/path", "dir/path/**"] to match both
/// the directory itself and all contents recursively.
///
/// Patterns containing glob characters (*, ?, [) are returned unchanged.
fn expand_directory_pattern(pattern: &str) -> Vec<String> {
    if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
        return vec![pattern.to_string()];
    }

    let base = pattern.trim_end_matches('/');
    vec![base.to_string(), format!("{base}/**")]
}

fn exclude_patterns(config: &Config) -> Vec<String> {
    config
        .global
        .exclude
        .iter()
        .flat_map(|p| expand_directory_pattern(p))
        .collect()
}

fn build_exclude_set(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        match Glob::new(pattern) {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(e) => eprintln!("Warning: Invalid exclude pattern '{pattern}': {e}"),
        }
    }
    builder.build().unwrap_or_else(|e| {
        eprintln!("Error building exclude patterns: {e}");
        GlobSet::empty()
    })
}

fn clean_path(path: &Path) -> PathBuf {
    path.strip_prefix("./").map(Path::to_path_buf).unwrap_or_else(|_| path.to_path_buf())
}

fn walk_directory(root: &Path, config: &Config, excludes: &[String]) -> Vec<PathBuf> {
    let mut walk_builder = WalkBuilder::new(root);

    if !excludes.is_empty() {
        let mut override_builder = OverrideBuilder::new(root);
        for pattern in excludes {
            let exclude_rule = if pattern.starts_with('!') {
                pattern.clone()
            } else {
                format!("!{pattern}")
            };
            if let Err(e) = override_builder.add(&exclude_rule) {
                eprintln!("Warning: Invalid exclude pattern '{pattern}': {e}");
            }
        }
        match override_builder.build() {
            Ok(overrides) => {
                walk_builder.overrides(overrides);
            }
            Err(e) => {
                eprintln!("Error building path overrides: {e}");
            }
        }
    }

    let use_gitignore = config.global.respect_gitignore;
    walk_builder.ignore(use_gitignore);
    walk_builder.git_ignore(use_gitignore);
    walk_builder.git_global(use_gitignore);
    walk_builder.git_exclude(use_gitignore);
    walk_builder.parents(use_gitignore);
    walk_builder.hidden(!config.global.hidden);
    walk_builder.require_git(false);

    let mut files = Vec::new();
    for result in walk_builder.build() {
        match result {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() && config.matches_extension(path) {
                    files.push(clean_path(path));
                }
            }
            Err(err) => {
                eprintln!("Error walking directory: {err}");
            }
        }
    }
    log::debug!("[notefix-discovery] Found {} files under {}", files.len(), root.display());
    files
}

/// Collect the files to rewrite from the command line paths.
///
/// Directories are walked recursively and filtered by the configured
/// extensions and exclude patterns. Files named explicitly are always taken,
/// whatever their extension, unless an exclude pattern matches them.
pub fn find_note_files(paths: &[String], config: &Config) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let excludes = exclude_patterns(config);
    let exclude_set = build_exclude_set(&excludes);
    let mut file_paths = Vec::new();

    for path_str in paths {
        let path = Path::new(path_str);
        if !path.exists() {
            return Err(format!("File not found: {path_str}").into());
        }

        if path.is_file() {
            let cleaned = clean_path(path);
            if exclude_set.is_match(&cleaned) {
                eprintln!("warning: {} ignored because of an exclude pattern", cleaned.display());
            } else {
                file_paths.push(cleaned);
            }
        } else {
            file_paths.extend(walk_directory(path, config, &excludes));
        }
    }

    file_paths.sort();
    file_paths.dedup();
    Ok(file_paths)
}
