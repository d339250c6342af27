use anyhow::Context;
use clap::Parser;
use oop_exercises::config::toml_config::AppConfig;
use oop_exercises::utils::{logger, validation::Validate};
use oop_exercises::{CliConfig, Library, LibraryManager, Shell, TracingNotifier};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    cli.validate().context("Invalid command-line arguments")?;

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path))?,
        None => AppConfig::default(),
    };
    config.validate().context("Configuration validation failed")?;

    let format = cli.log_format.unwrap_or(config.logging.format);
    logger::init_logger(cli.verbose, &config.logging.level, format);

    tracing::debug!("CLI config: {:?}", cli);

    let mut library = Library::new();
    let mut notifier = TracingNotifier;
    let mut manager = LibraryManager::new(&mut library, &mut notifier);

    config.library.seed(&mut manager);

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout());
    shell.run(&mut manager).context("Terminal I/O failed")?;

    Ok(())
}
