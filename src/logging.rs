use flexi_logger::{Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming, opt_format};

/// Console logging for the binary, level from `RUST_LOG` or `fallback`.
pub fn setup_logging(fallback: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(fallback)?
        .format(flexi_logger::colored_default_format)
        .start()
}

/// Rotating file logs in `directory`, e.g. for long self-play batches.
pub fn setup_file_logging(fallback: &str, directory: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(fallback)?
        .log_to_file(FileSpec::default().directory(directory))
        .format(opt_format)
        .rotate(
            Criterion::Size(10 * 1024 * 1024), // Rotate logs after they reach 10 MB
            Naming::Numbers,
            Cleanup::KeepLogFiles(3),
        )
        .start()
}
