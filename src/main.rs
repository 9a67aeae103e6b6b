use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use spamsense::config::Command;
use spamsense::core::intent::CallDirection;
use spamsense::utils::{logger, validation::Validate};
use spamsense::{CallContext, CliConfig, IntentDetector, SpamsenseConfig, SpamsenseError, ToolServer};

fn load_config(cli: &CliConfig) -> spamsense::Result<SpamsenseConfig> {
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            SpamsenseConfig::from_file(path)?
        }
        None => SpamsenseConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn exit_with(e: &SpamsenseError, code: i32) -> ! {
    tracing::error!("{}", e);
    tracing::error!("Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(code);
}

// Round-trips through Value so object keys print sorted.
fn print_json<T: Serialize>(value: &T, compact: bool) -> anyhow::Result<()> {
    let value = serde_json::to_value(value)?;
    let text = if compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };
    println!("{}", text);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if matches!(cli.command, Command::Serve) {
        logger::init_server_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => exit_with(&e, 1),
    };

    match &cli.command {
        Command::Check { number } => {
            let result = config.build_analyzer().analyze(number);
            tracing::info!(
                "{} scored {} ({})",
                number,
                result.spam_score,
                result.risk_level.as_str()
            );
            print_json(&result, cli.compact)?;
        }
        Command::Intent {
            text,
            caller_id,
            direction,
            locale,
            debug,
        } => {
            let detector = IntentDetector::new().context("building intent rules")?;
            let analysis = detector.detect(&CallContext {
                text: text.clone(),
                caller_id: caller_id.clone(),
                direction: direction.as_deref().and_then(CallDirection::parse),
                locale: locale.clone(),
            });
            analysis.log_verdict(*debug);
            print_json(&analysis, cli.compact)?;
        }
        Command::Serve => {
            let server = ToolServer::from_config(&config).context("building tool server")?;
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            if let Err(e) = server.serve(stdin, tokio::io::stdout()).await {
                exit_with(&e, 2);
            }
        }
    }

    Ok(())
}
