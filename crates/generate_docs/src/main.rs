use anyhow::Result;

use generate_docs::cli::build_cli;
use generate_docs::config::GeneratorConfig;
use generate_docs::generate_docs;
use generate_docs::processor::DefaultExampleProcessor;

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let config = GeneratorConfig::from_matches(&matches)?;
    init_logging(config.verbose);
    log::debug!("{:?}", config);

    let processor = DefaultExampleProcessor::new(config.language.as_str());
    let report = generate_docs(&config, &processor)?;

    if !report.is_success() {
        let names: Vec<String> = report
            .failed
            .iter()
            .map(|f| f.source_path.display().to_string())
            .collect();
        eprintln!(
            "Error: {} of {} example(s) failed to convert: {}",
            report.failed.len(),
            report.total(),
            names.join(", ")
        );
        std::process::exit(1);
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise warnings only, or everything with `--verbose`.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
