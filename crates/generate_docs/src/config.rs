// crates/generate_docs/src/config.rs

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;
use find_example_sources::DiscoveryOptions;
use genexample_marker::{DEFAULT_IMAGE_EXTENSION, DEFAULT_LANGUAGE, DEFAULT_SOURCE_EXTENSION};

/// Environment override for the examples directory when no `DIR` is given.
pub const EXAMPLES_DIR_ENV: &str = "GENEXAMPLE_DIR";

/// Runtime configuration composed from CLI + environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub examples_dir: PathBuf,
    pub language: String,
    pub discovery: DiscoveryOptions,
    pub dry_run: bool,
    pub skip_unchanged: bool,
    pub verbose: bool,
}

impl GeneratorConfig {
    /// Defaults for everything except the directory.
    pub fn new(examples_dir: impl Into<PathBuf>) -> Self {
        Self {
            examples_dir: examples_dir.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            discovery: DiscoveryOptions::default(),
            dry_run: false,
            skip_unchanged: false,
            verbose: false,
        }
    }

    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let examples_dir = resolve_examples_dir(
            matches.get_one::<PathBuf>("dir").cloned(),
            env::var_os(EXAMPLES_DIR_ENV),
        )?;

        let string_arg = |id: &str, default: &str| {
            matches
                .get_one::<String>(id)
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            examples_dir,
            language: string_arg("lang", DEFAULT_LANGUAGE),
            discovery: DiscoveryOptions {
                source_extension: string_arg("extension", DEFAULT_SOURCE_EXTENSION),
                image_extension: string_arg("image_extension", DEFAULT_IMAGE_EXTENSION),
                recursive: matches.get_flag("recursive"),
            },
            dry_run: matches.get_flag("dry_run"),
            skip_unchanged: matches.get_flag("skip_unchanged"),
            verbose: matches.get_flag("verbose"),
        })
    }
}

/// Picks the examples directory: explicit argument, then the environment
/// override, then the current directory. Empty values count as unset.
pub fn resolve_examples_dir(arg: Option<PathBuf>, env_dir: Option<OsString>) -> Result<PathBuf> {
    if let Some(dir) = arg.filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir);
    }
    if let Some(dir) = env_dir.filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    env::current_dir().context("Failed to get current directory")
}
