use clap::Parser;
use data_transformer::core::ConfigProvider;
use data_transformer::utils::{logger, validation::Validate};
use data_transformer::{CliConfig, ConfiguredSource, Engine, TransformError, TransformPipeline};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting data-transformer");
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match cli.resolve().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => fail(&e),
    };

    let source = ConfiguredSource::from_input_path(settings.input_path());
    let engine = Engine::new(TransformPipeline::new(source, settings));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match engine.run(&mut out) {
        Ok(summary) => {
            tracing::info!(
                "✅ Processed {} items into {} results",
                summary.items_in,
                summary.items_out
            );
            Ok(())
        }
        Err(e) => fail(&e),
    }
}

fn fail(e: &TransformError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e);
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
