use anyhow::Context;
use cart_fragments::config::LogFormat;
use cart_fragments::core::{CartSource, ConfigProvider};
use cart_fragments::utils::error::exit_code;
use cart_fragments::utils::{logger, validation::Validate};
use cart_fragments::{CliConfig, FragmentConfig, FragmentEngine, FragmentError, JsonFileCartSource};
use clap::Parser;

fn fail(context: &str, e: &FragmentError) -> ! {
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        context,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(exit_code(e.severity()));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = cli.validate() {
        fail("Invalid arguments", &e);
    }

    let config = match cli.config_path() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            FragmentConfig::from_file(path).unwrap_or_else(|e| fail("Failed to load config", &e))
        }
        None => FragmentConfig::default(),
    };
    if let Err(e) = config.validate() {
        fail("Configuration validation failed", &e);
    }

    let mut source = JsonFileCartSource::new(cli.snapshot_path());
    if let Some(base_url) = &config.shop.base_url {
        source = source
            .with_base_url(base_url)
            .unwrap_or_else(|e| fail("Invalid base url", &e));
    }

    if let (Some(location), Some(items)) = (&cli.menu_location, &cli.menu_items) {
        let snapshot = source
            .snapshot()
            .await
            .unwrap_or_else(|e| fail("Failed to read cart snapshot", &e));
        let html = config
            .menu_injector()
            .inject(location, items, &snapshot)
            .unwrap_or_else(|e| fail("Failed to render menu", &e));
        println!("{}", html);
        return Ok(());
    }

    let engine = FragmentEngine::new(source, config.build_registry());
    let response = engine
        .run()
        .await
        .unwrap_or_else(|e| fail("Failed to render fragments", &e));

    let json = response
        .to_json(cli.pretty())
        .context("serializing fragment response")?;
    println!("{}", json);

    Ok(())
}
