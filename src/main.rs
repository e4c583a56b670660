use budget_validate::utils::logger;
use budget_validate::CliConfig;
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.common.json_logs {
        logger::init_json_logger(config.common.verbose);
    } else {
        logger::init_cli_logger(config.common.verbose);
    }

    tracing::debug!("Starting budget-validate for {} input", config.kind);

    let exit_code = budget_validate::app::execute(config.kind, &config.common);
    std::process::exit(exit_code);
}
