//! otel-filter-translator - agent config to filter processor config
//!
//! This binary reads an agent configuration file, translates the filter
//! stage for the requested pipeline, and prints the resulting processor
//! configuration.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use otel_filter_translator::{
    cli::{Cli, OutputFormat},
    conf,
    pipeline::Identity,
    translator::Translator,
};

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Cli::parse();

    // Initialize logging
    otel_filter_translator::init_logging(&args.log_level.to_string())?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting otel-filter-translator"
    );

    // Load the agent configuration tree
    let tree = conf::load(&args.config)?;

    // Translate the filter stage for the requested pipeline
    let translator = Translator::new(Identity::new(args.pipeline, args.index));
    let cfg = translator.translate(&tree)?;

    if args.validate {
        println!("Translation OK: {}", translator.id());
        return Ok(());
    }

    match args.output_format {
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&cfg)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&cfg)?),
    }

    Ok(())
}
