// crates/generate_docs/src/cli.rs

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};
use genexample_marker::{DEFAULT_IMAGE_EXTENSION, DEFAULT_LANGUAGE, DEFAULT_SOURCE_EXTENSION};

/// Command-line definition for the `generate_docs` binary.
pub fn build_cli() -> Command {
    Command::new("generate_docs")
        .version("0.1.0")
        .about("Generates Markdown pages from //genexample annotated example sources")
        .arg(
            Arg::new("dir")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding the examples (default: $GENEXAMPLE_DIR, then the current directory)"),
        )
        .arg(
            Arg::new("lang")
                .long("lang")
                .num_args(1)
                .default_value(DEFAULT_LANGUAGE)
                .help("Language tag written after each opening code fence"),
        )
        .arg(
            Arg::new("extension")
                .long("extension")
                .num_args(1)
                .default_value(DEFAULT_SOURCE_EXTENSION)
                .help("Extension of the example sources"),
        )
        .arg(
            Arg::new("image_extension")
                .long("image-extension")
                .num_args(1)
                .default_value(DEFAULT_IMAGE_EXTENSION)
                .help("Extension of the companion screenshot"),
        )
        .arg(
            Arg::new("recursive")
                .long("recursive")
                .help("Also process examples in subdirectories")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry_run")
                .long("dry-run")
                .help("Print the generated Markdown instead of writing files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("skip_unchanged")
                .long("skip-unchanged")
                .help("Skip examples whose page is newer than the source and screenshot")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
}
