use budget_validate::utils::logger;
use budget_validate::{CommonArgs, ValidatorKind};
use clap::Parser;

#[derive(Parser)]
#[command(name = "amount_input")]
#[command(about = "Validate transaction amounts such as $123.45, one per line")]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let args = Args::parse();

    if args.common.json_logs {
        logger::init_json_logger(args.common.verbose);
    } else {
        logger::init_cli_logger(args.common.verbose);
    }

    let exit_code = budget_validate::app::execute(ValidatorKind::Amount, &args.common);
    std::process::exit(exit_code);
}
