use crate::adapters::report::{report_sink, OutputFormat};
use crate::config::toml_config::ValidatorConfig;
use crate::core::harness::ValidationHarness;
use crate::core::{RunSummary, ValidatorKind};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::io::{BufRead, Write};
use std::path::Path;

/// 載入並驗證配置；沒有指定檔案時使用預設邊界
pub fn load_config(path: Option<&Path>) -> Result<ValidatorConfig> {
    let config = match path {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            ValidatorConfig::from_file(path)?
        }
        None => ValidatorConfig::default(),
    };

    config.validate()?;
    Ok(config)
}

/// Validates every line of `reader` with the `kind` validator and writes the
/// report to `writer`. A `format` of `None` falls back to the config's
/// `[output]` format, then to text.
pub fn run<R: BufRead, W: Write>(
    kind: ValidatorKind,
    config: &ValidatorConfig,
    format: Option<OutputFormat>,
    reader: R,
    writer: W,
) -> Result<RunSummary> {
    let format = format.or_else(|| config.output_format()).unwrap_or_default();
    tracing::debug!("Report format: {}", format);

    let validator = config.validator_for(kind);
    let sink = report_sink(format, kind, writer);

    let mut harness = ValidationHarness::new(validator, sink);
    harness.run(reader)
}

/// Entry point shared by the binaries: wires stdin/stdout, reports failures on
/// stderr and returns the process exit code.
#[cfg(feature = "cli")]
pub fn execute(kind: ValidatorKind, args: &crate::config::CommonArgs) -> i32 {
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let result = load_config(args.config.as_deref()).and_then(|config| {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        run(
            kind,
            &config,
            args.format,
            stdin.lock(),
            std::io::BufWriter::new(stdout.lock()),
        )
    });

    match result {
        Ok(_) => 0,
        Err(e) => {
            tracing::error!(
                "❌ Validation run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 文字報告已經在 stdout 印出 "No data to process."
            if !matches!(e, crate::utils::error::ValidateError::NoData) {
                eprintln!("❌ {}", e.user_friendly_message());
            }

            e.exit_code()
        }
    }
}
