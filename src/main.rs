use clap::Parser;
use numero::core::ConfigProvider;
use numero::utils::{logger, validation::Validate};
use numero::{CliConfig, Combiner, NumeroError, StdoutOutput};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(e);
    }

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => exit_with(e),
    };

    if let Err(e) = run(&settings) {
        exit_with(e);
    }
}

fn run(settings: &impl ConfigProvider) -> numero::Result<()> {
    let values = settings.operands();
    let combiner = Combiner::new(settings.overflow_policy());

    tracing::debug!(
        "Adding {} operands with {} policy",
        values.len(),
        combiner.policy()
    );

    let total = combiner.run(values, &mut StdoutOutput::new())?;
    tracing::debug!("Total written to stdout: {}", total);
    Ok(())
}

fn exit_with(e: NumeroError) -> ! {
    tracing::error!("❌ {} (exit code {})", e, e.exit_code());
    eprintln!("❌ {}", e);
    std::process::exit(e.exit_code());
}
