use clap::Parser;
use fauna::adapters::source_for;
use fauna::core::ConfigProvider;
use fauna::utils::{logger, validation::Validate};
use fauna::config::command_args;
use fauna::{orchestrator, CliConfig, FaunaError, Settings, TomlConfig};

fn run(cli: &CliConfig) -> fauna::Result<()> {
    let file = cli.config.as_ref().map(TomlConfig::from_file).transpose()?;
    if let Some(file) = &file {
        file.validate()?;
    }

    let settings = Settings::from_cli(cli, file.as_ref());
    logger::init_cli_logger(
        settings.verbose(),
        settings.log_level(),
        settings.log_format(),
    );
    tracing::debug!("Settings: {:?}", settings);

    let source = source_for(settings.dataset_path());
    tracing::info!("Loading dataset from {}", source.describe());
    let countries = source.load()?;
    tracing::debug!("Loaded {} countries", countries.len());

    orchestrator(command_args(std::env::args()), &countries)
}

fn main() {
    let cli = CliConfig::parse();

    if let Err(e) = run(&cli) {
        report(&e);
        std::process::exit(e.exit_code());
    }
}

fn report(e: &FaunaError) {
    tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}
