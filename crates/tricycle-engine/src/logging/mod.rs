//! Logging utilities.
//!
//! Centralizes logger initialization. Engine code only talks to the `log`
//! facade; `env_logger` is installed once by the binary.

mod init;

pub use init::{init_logging, LoggingConfig};
