use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use simple_error::SimpleError;
use std::fmt::Display;

/// Log to stdout; `RUST_LOG` wins over `spec` when set.
pub fn init_log(spec: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(spec)?.log_to_stdout().start()
}

pub fn to_simple<E: Display>(e: E) -> SimpleError {
    SimpleError::new(e.to_string())
}
