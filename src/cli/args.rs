use crate::constants::{verbosity, AUTHOR_ENV_VARS, DEFAULT_LICENSE, FALLBACK_AUTHOR};
use clap::Parser;
use log::LevelFilter;

/// CLI arguments for kiln.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Name of the project; whitespace is removed.
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Project author. Defaults to `$USERNAME`, then `$USER`.
    #[arg(long)]
    pub author: Option<String>,

    /// License identifier recorded in the generated files.
    #[arg(long, default_value = DEFAULT_LICENSE)]
    pub license: String,

    /// Overwrite files in an existing project directory.
    #[arg(short, long)]
    pub force: bool,

    /// Increase logging verbosity (`-v`, `-vv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Do not initialize a git repository.
    #[arg(long = "no-git")]
    pub no_git: bool,
}

/// Parse command line arguments.
///
/// A missing project name is accepted here and rejected by the generator, so
/// that every invalid name is reported the same way.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::DEFAULT => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

/// Picks the author: the explicit flag, else the first non-empty variable
/// from [`AUTHOR_ENV_VARS`] as returned by `lookup`, else a fixed fallback.
pub fn resolve_author<F>(flag: Option<&str>, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(author) = flag {
        return author.to_string();
    }
    AUTHOR_ENV_VARS
        .iter()
        .filter_map(|key| lookup(*key))
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| {
            log::warn!(
                "None of {} is set; using '{FALLBACK_AUTHOR}' as author",
                AUTHOR_ENV_VARS.join(", ")
            );
            FALLBACK_AUTHOR.to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::DEFAULT), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_minimal_args() {
        let args = Args::parse_from(["kiln", "demo"]);
        assert_eq!(args.project_name.as_deref(), Some("demo"));
        assert_eq!(args.author, None);
        assert_eq!(args.license, "MIT");
        assert!(!args.force);
        assert!(!args.dry_run);
        assert!(!args.no_git);
    }

    #[test]
    fn project_name_is_optional_at_parse_time() {
        let args = Args::parse_from(["kiln"]);
        assert_eq!(args.project_name, None);
    }

    #[test]
    fn parses_full_feature_flags() {
        let args = Args::parse_from([
            "kiln",
            "demo",
            "--author",
            "Alice",
            "--license",
            "Apache-2.0",
            "--force",
            "-vv",
            "--dry-run",
            "--no-git",
        ]);
        assert_eq!(args.project_name.as_deref(), Some("demo"));
        assert_eq!(args.author.as_deref(), Some("Alice"));
        assert_eq!(args.license, "Apache-2.0");
        assert!(args.force);
        assert_eq!(args.verbose, 2);
        assert!(args.dry_run);
        assert!(args.no_git);
    }

    #[test]
    fn explicit_author_wins() {
        let author = resolve_author(Some("Alice"), env(&[("USERNAME", "bob")]));
        assert_eq!(author, "Alice");
    }

    #[test]
    fn author_falls_back_to_environment_in_order() {
        assert_eq!(
            resolve_author(None, env(&[("USERNAME", "bob"), ("USER", "carol")])),
            "bob"
        );
        assert_eq!(resolve_author(None, env(&[("USER", "carol")])), "carol");
        assert_eq!(
            resolve_author(None, env(&[("USERNAME", " "), ("USER", "carol")])),
            "carol"
        );
    }

    #[test]
    fn author_is_never_empty() {
        assert_eq!(resolve_author(None, env(&[])), FALLBACK_AUTHOR);
    }
}
