use clap::Parser;
use survivor_items::app::commands;
use survivor_items::utils::error::ErrorSeverity;
use survivor_items::utils::logger;
use survivor_items::{CliConfig, Result};

fn run(cli: &CliConfig) -> Result<()> {
    // defaults < config file < flags
    let config = cli.resolve()?;
    if cli.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    // a failed load stops here, before any query runs
    let catalog = config.load_catalog()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::execute(&cli.command, &catalog, &config, &mut out)
}

fn main() {
    let cli = CliConfig::parse();

    // init logging
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("Starting survivor-items: {:?}", cli.command);

    if let Err(e) = run(&cli) {
        tracing::error!(
            "Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        // user-facing message
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        // exit code by severity
        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}
